//! Application configuration loaded from environment variables.
//!
//! - `LIQUID_WEBSOCKET_URL` — overrides the default public Tap endpoint
//! - `LIQUID_SYMBOLS` — comma-separated instrument symbols to subscribe to
//!   (defaults to `btcjpy`)

/// Default public WebSocket endpoint.
const DEFAULT_WEBSOCKET_URL: &str = "wss://tap.liquid.com/app/LiquidTapClient?protocol=7";

/// Default instrument symbol.
const DEFAULT_SYMBOL: &str = "btcjpy";

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub liquid: LiquidConfig,
}

/// Liquid-specific configuration values.
#[derive(Debug)]
pub struct LiquidConfig {
    pub websocket_url: String,
    pub symbols: Vec<String>,
}

/// Loads the application configuration from environment variables.
///
/// The WebSocket URL defaults to the public Tap endpoint and can be
/// overridden with `LIQUID_WEBSOCKET_URL`. Symbols default to `btcjpy` and
/// can be set with a comma-separated `LIQUID_SYMBOLS`.
///
/// # Errors
///
/// Returns [`LiquidError::Config`](crate::LiquidError::Config) if
/// `LIQUID_SYMBOLS` is set but contains no symbols.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let websocket_url = non_empty_var("LIQUID_WEBSOCKET_URL")
        .unwrap_or_else(|| DEFAULT_WEBSOCKET_URL.to_string());

    let symbols = match non_empty_var("LIQUID_SYMBOLS") {
        Some(raw) => {
            let symbols: Vec<String> = raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
            if symbols.is_empty() {
                return Err(crate::LiquidError::Config(
                    "LIQUID_SYMBOLS is set but contains no symbols".to_string(),
                ));
            }
            symbols
        }
        None => vec![DEFAULT_SYMBOL.to_string()],
    };

    Ok(AppConfig {
        liquid: LiquidConfig {
            websocket_url,
            symbols,
        },
    })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper that temporarily sets env vars, runs `f`, then restores originals.
    ///
    /// # Safety
    ///
    /// Tests using this helper must run with `--test-threads=1` or otherwise
    /// ensure no other threads read these env vars concurrently.
    fn with_env<F: FnOnce()>(vars: &[(&str, Option<&str>)], f: F) {
        let originals: Vec<(&str, Option<String>)> = vars
            .iter()
            .map(|(k, _)| (*k, std::env::var(k).ok()))
            .collect();

        for (k, v) in vars {
            // SAFETY: config tests run single-threaded (see test runner config).
            unsafe {
                match v {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }

        f();

        for (k, original) in originals {
            // SAFETY: restoring original values, same single-threaded context.
            unsafe {
                match original {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }
    }

    #[test]
    fn defaults_without_env_vars() {
        with_env(
            &[("LIQUID_WEBSOCKET_URL", None), ("LIQUID_SYMBOLS", None)],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.liquid.websocket_url, DEFAULT_WEBSOCKET_URL);
                assert_eq!(config.liquid.symbols, vec![DEFAULT_SYMBOL.to_string()]);
            },
        );
    }

    #[test]
    fn custom_websocket_url() {
        with_env(
            &[
                ("LIQUID_WEBSOCKET_URL", Some("wss://custom.example.com")),
                ("LIQUID_SYMBOLS", None),
            ],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.liquid.websocket_url, "wss://custom.example.com");
            },
        );
    }

    #[test]
    fn parses_symbol_list() {
        with_env(
            &[
                ("LIQUID_WEBSOCKET_URL", None),
                ("LIQUID_SYMBOLS", Some("btcjpy, ethjpy ,xrpjpy")),
            ],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.liquid.symbols, vec!["btcjpy", "ethjpy", "xrpjpy"]);
            },
        );
    }

    #[test]
    fn rejects_symbol_list_with_no_symbols() {
        with_env(
            &[
                ("LIQUID_WEBSOCKET_URL", None),
                ("LIQUID_SYMBOLS", Some(" , ,")),
            ],
            || {
                let err = fetch_config().unwrap_err();
                assert!(err.to_string().contains("contains no symbols"));
            },
        );
    }

    #[test]
    fn empty_values_treated_as_absent() {
        with_env(
            &[
                ("LIQUID_WEBSOCKET_URL", Some("")),
                ("LIQUID_SYMBOLS", Some("")),
            ],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.liquid.websocket_url, DEFAULT_WEBSOCKET_URL);
                assert_eq!(config.liquid.symbols, vec![DEFAULT_SYMBOL.to_string()]);
            },
        );
    }
}
