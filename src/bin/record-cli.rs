use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "record-cli")]
#[command(about = "Query a running record-service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:5055")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check service health
    Health,
    /// Show request counters and uptime
    Metrics,
    /// List records, optionally filtered by genre
    Records {
        #[arg(short, long)]
        genre: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let request = match cli.command {
        Commands::Health => client.get(format!("{}/health", base)),
        Commands::Metrics => client.get(format!("{}/metrics", base)),
        Commands::Records { genre } => {
            let req = client.get(format!("{}/records", base));
            match genre {
                Some(genre) => req.query(&[("genre", genre)]),
                None => req,
            }
        }
    };

    print_response(request.send().await?).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: record-service returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
