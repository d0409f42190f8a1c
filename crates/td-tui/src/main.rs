//! Terminal client entry point

use clap::Parser;
use std::process;
use std::sync::Arc;
use td_tui::App;

/// Command-line arguments
#[derive(Parser)]
#[command(name = "td-tui")]
#[command(about = "Terminal client for the TaskDeck task tracker")]
struct Args {
    /// Task service URL
    #[arg(long, default_value = "http://localhost:8080")]
    server: String,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let client = match td_rest_client::RestClient::from_url(&args.server) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to create REST client: {}", e);
            process::exit(1);
        }
    };

    let mut app = match App::new(Arc::new(client)) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Failed to initialize terminal: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = app.run().await {
        eprintln!("Application error: {}", e);
        process::exit(1);
    }
}
