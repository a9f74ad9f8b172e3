use std::env;
use std::fs;

use tracing::{error, info};

use kingdom_planner::config::load_config;
use kingdom_planner::gateway::HttpGateway;
use kingdom_planner::model::TripRequest;
use kingdom_planner::planner::TripPlanner;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {:?}", panic_info);
    }));

    // Load configuration from file
    let config = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    let gateway = HttpGateway::new(&config);
    let planner = TripPlanner::new(gateway, config);

    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("--preview") => {
            info!("Fetching raw provider samples...");
            let preview = planner.preview_external().await;
            print_json(&preview);
        }
        Some(path) => {
            let request = match read_request(path) {
                Ok(req) => req,
                Err(e) => {
                    error!("Failed to read trip request from {}: {}", path, e);
                    return;
                }
            };

            info!("🚀 Planning trip to {}...", request.destination);
            match planner.plan_trip(&request).await {
                Ok(plan) => print_json(&plan),
                Err(e) => error!("Planning failed: {}", e),
            }
        }
        None => {
            eprintln!("Usage: kingdom-planner <request.json> | --preview");
        }
    }
}

fn read_request(path: &str) -> Result<TripRequest, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let request: TripRequest = serde_json::from_str(&content)?;
    Ok(request)
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => error!("Failed to encode output: {}", e),
    }
}
