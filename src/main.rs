//! mushaf-rs: Ayah-to-page and Juz mapping service.
//!
//! Computes the Juz and pages-read fields of a Quran practice session.

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use mushaf_rs::{Args, Config, MushafServer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug {
        Level::DEBUG
    } else if args.silent {
        Level::ERROR
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::from(args);
    let server = MushafServer::from_config(config)?;

    println!(
        r#"
Mushaf mapping service is starting at {}

Endpoints:
  GET  {base}/api/surahs
  GET  {base}/api/juz?surah=18&ayah=75
  GET  {base}/api/pages?surah=2&start=1&end=286
  POST {base}/api/enrich

Press Ctrl+C to stop the server.
"#,
        server.bind_address(),
        base = server.base_url()
    );

    server.run().await
}
