//! Server configuration.

use clap::Parser;
use std::path::PathBuf;

/// Default service port.
pub const DEFAULT_PORT: u16 = 7860;

/// Command-line arguments for the server.
#[derive(Parser, Debug, Clone)]
#[command(name = "mushaf-rs")]
#[command(about = "Ayah-to-page and Juz mapping service for Quran practice logs")]
#[command(version)]
pub struct Args {
    /// Host address to bind to.
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port for the HTTP service.
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// JSON file mapping each ayah to its mushaf page.
    #[arg(long)]
    pub page_map: Option<PathBuf>,

    /// Reject invalid ayah ranges instead of returning best-effort values.
    #[arg(long)]
    pub strict: bool,

    /// Enable debug logging.
    #[arg(long, short = 'd')]
    pub debug: bool,

    /// Enable silent mode (minimal logging).
    #[arg(long, short = 's')]
    pub silent: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            page_map: None,
            strict: false,
            debug: false,
            silent: false,
        }
    }
}

/// Server configuration derived from command-line arguments.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host address to bind to.
    pub host: String,
    /// Port for the HTTP service.
    pub port: u16,
    /// JSON file mapping each ayah to its mushaf page.
    pub page_map: Option<PathBuf>,
    /// Reject invalid ayah ranges instead of returning best-effort values.
    pub strict: bool,
    /// Enable debug logging.
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            page_map: None,
            strict: false,
            debug: false,
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            page_map: args.page_map,
            strict: args.strict,
            debug: args.debug,
        }
    }
}

impl Config {
    /// Returns the bind address for the service.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let args = Args::parse_from([
            "mushaf-rs",
            "--port",
            "9000",
            "--page-map",
            "pages.json",
            "--strict",
            "-d",
        ]);
        let config = Config::from(args);
        assert_eq!(config.bind_address(), "127.0.0.1:9000");
        assert_eq!(config.page_map, Some(PathBuf::from("pages.json")));
        assert!(config.strict);
        assert!(config.debug);
    }

    #[test]
    fn test_defaults_match() {
        let config = Config::from(Args::default());
        assert_eq!(config.port, Config::default().port);
        assert!(!config.strict);
        assert!(config.page_map.is_none());
    }
}
