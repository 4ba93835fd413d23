use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "mock-proxy-cli")]
#[command(about = "Management CLI for the mock proxy", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered mocks
    Mocks,
    /// List recorded request/response pairs
    Recorded,
    /// Register a mock from a JSON file
    AddMock {
        /// File holding `{id, request, response}`
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    // Talk to the admin API directly, never through an environment proxy.
    let client = reqwest::Client::builder().no_proxy().build()?;
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::Mocks => client.get(format!("{}/mocks", base)).send().await?,
        Commands::Recorded => {
            client
                .get(format!("{}/recordedRequests", base))
                .send()
                .await?
        }
        Commands::AddMock { file } => {
            let mock: Value = serde_json::from_str(&std::fs::read_to_string(&file)?)?;
            client
                .post(format!("{}/addMock", base))
                .json(&mock)
                .send()
                .await?
        }
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: admin API returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
