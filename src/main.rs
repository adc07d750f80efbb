use liquid_tap::LiquidError;
use liquid_tap::channel::{Side, executions_channel, ladders_channel};
use liquid_tap::config::fetch_config;
use liquid_tap::formatter::{Formatter, LiquidFormatter};
use liquid_tap::websocket::{connect, ping, process_messages, subscribe};

#[tokio::main]
async fn main() -> Result<(), LiquidError> {
    // Initialize tracing subscriber for logging output.
    tracing_subscriber::fmt::init();

    let app_config = fetch_config()?;
    let url = &app_config.liquid.websocket_url;
    let formatter = LiquidFormatter;

    let print_record = |record: &[u8]| {
        println!("{}", String::from_utf8_lossy(record));
    };

    for record in formatter.format_start(url)? {
        print_record(&record);
    }

    let (mut write, mut read) = connect(url).await?;
    ping(&mut write).await?;
    for symbol in &app_config.liquid.symbols {
        subscribe(&mut write, &ladders_channel(symbol, Side::Buy)).await?;
        subscribe(&mut write, &ladders_channel(symbol, Side::Sell)).await?;
        subscribe(&mut write, &executions_channel(symbol)).await?;
    }

    process_messages(&mut read, &formatter, print_record).await?;

    Ok(())
}
