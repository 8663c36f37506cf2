use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "nav-cli")]
#[command(about = "Management CLI for the navigation shell", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the route table in declared order
    Routes,
    /// Resolve a path to its view, chasing redirects
    Resolve {
        /// Path to resolve, e.g. "/task-2" or "/unknown"
        path: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Routes => {
            let res = client
                .get(format!("{}/_nav/routes", cli.url))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Resolve { path } => {
            let res = client
                .get(format!("{}/_nav/resolve", cli.url))
                .query(&[("path", path.as_str())])
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: server returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
