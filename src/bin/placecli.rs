use anyhow::Result;
use clap::Parser;
use pb_tomtom::{ApiKey, Client};

#[derive(Parser, Debug)]
#[command(
    name = "placecli",
    about = "Search TomTom places and keep Australian matches"
)]
struct CliArgs {
    /// Free-text address to search for
    address: String,

    #[arg(
        short = 'k',
        long,
        help = "TomTom API key (falls back to TOMTOM_API_KEY)"
    )]
    api_key: Option<String>,

    #[arg(short = 'e', long, help = "Override the search service endpoint")]
    endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = CliArgs::parse();
    let http = reqwest::Client::builder()
        .gzip(true)
        .brotli(true)
        .build()
        .unwrap();
    let api_key = match args.api_key.as_deref() {
        Some(key) => ApiKey::from_raw(key),
        None => ApiKey::from_env(),
    };
    let client = Client::new(http, args.endpoint, api_key)?;
    let places = client.autocomplete_details(&args.address).await?;
    println!("{}", serde_json::to_string_pretty(&places)?);
    Ok(())
}
