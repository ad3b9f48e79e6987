mod catalog;
mod chat;
mod config;
mod core;
mod models;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use validator::Validate;

use catalog::CourseCatalog;
use chat::Responder;
use config::Settings;
use core::MatchEngine;
use models::{ChatRequest, FitThresholds, SearchRequest, SearchResponse};

#[derive(Debug, Parser)]
#[command(name = "pathways-algo", about = "UniversityPathways course finder", version)]
struct Cli {
    /// Path to a configuration file (defaults to config/default.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search an institution's courses and rate the GPA fit
    Search {
        /// Institution code, e.g. nus
        institution: String,
        /// Free-text course query, e.g. "computer"
        query: String,
        /// Your GPA, if you want a fit rating
        #[arg(long)]
        gpa: Option<f64>,
    },
    /// List the course names an institution offers
    Suggest {
        /// Institution code, e.g. nus
        institution: String,
    },
    /// List known institution codes
    Institutions,
    /// Ask the assistant a question
    Chat {
        /// Your message
        message: String,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    // Load configuration
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
    .unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(2);
    });

    init_tracing(&settings);

    // Build the catalog: external file when configured, built-in otherwise
    let catalog = match &settings.catalog.path {
        Some(path) => catalog::from_json_file(path).unwrap_or_else(|e| {
            error!("Failed to load catalog from {}: {}", path, e);
            eprintln!("Failed to load catalog: {}", e);
            std::process::exit(2);
        }),
        None => CourseCatalog::builtin(),
    };

    info!(
        institutions = catalog.institution_codes().len(),
        courses = catalog.total_courses(),
        "catalog ready"
    );

    let thresholds = FitThresholds {
        excellent_margin: settings.matching.thresholds.excellent_margin,
        close_margin: settings.matching.thresholds.close_margin,
    };
    let engine = MatchEngine::new(thresholds);

    match cli.command {
        Command::Search {
            institution,
            query,
            gpa,
        } => {
            let request = SearchRequest {
                institution,
                query,
                gpa,
            };
            run_search(&engine, &catalog, request, &settings, cli.json).await;
        }
        Command::Suggest { institution } => match catalog.suggestions(&institution) {
            Some(names) => {
                if cli.json {
                    print_json(&names);
                } else {
                    for name in names {
                        println!("{}", name);
                    }
                }
            }
            None => {
                eprintln!("University not found: {}", institution);
                std::process::exit(1);
            }
        },
        Command::Institutions => {
            for code in catalog.institution_codes() {
                match catalog.display_name(code) {
                    Some(name) => println!("{:<6} {}", code, name),
                    None => println!("{}", code),
                }
            }
        }
        Command::Chat { message } => {
            let request = ChatRequest { message };
            if let Err(errors) = request.validate() {
                eprintln!("Invalid message: {}", errors);
                std::process::exit(2);
            }

            simulated_delay(settings.ui.chat_delay_ms).await;

            let reply = Responder::new().reply(&request.message);
            if cli.json {
                print_json(&reply);
            } else {
                println!("{}", reply.message);
            }
        }
    }
}

async fn run_search(
    engine: &MatchEngine,
    catalog: &CourseCatalog,
    request: SearchRequest,
    settings: &Settings,
    json: bool,
) {
    if let Err(errors) = request.validate() {
        eprintln!("Invalid search request: {}", errors);
        std::process::exit(2);
    }

    info!(
        institution = %request.institution,
        query = %request.query,
        gpa = ?request.gpa,
        "searching"
    );

    simulated_delay(settings.ui.search_delay_ms).await;

    match engine.find_courses(catalog, &request.institution, &request.query, request.gpa) {
        Ok(matches) => {
            let institution = catalog
                .display_name(&request.institution)
                .unwrap_or(&request.institution)
                .to_string();
            let response = SearchResponse {
                institution,
                total_matches: matches.len(),
                matches,
            };

            if json {
                print_json(&response);
            } else {
                render_search(&response);
            }
        }
        Err(e) => {
            // Expected outcomes, reported as results rather than crashes
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn render_search(response: &SearchResponse) {
    println!(
        "{}: {} matching course(s)",
        response.institution, response.total_matches
    );

    for course in &response.matches {
        println!();
        println!("{} (GPA: {})", course.name, course.gpa_requirement);
        println!("  Faculty:      {}", course.faculty);
        println!("  Duration:     {}", course.duration);
        println!("  Intake:       {}", course.intake);
        if let Some(info) = &course.additional_info {
            println!("  Info:         {}", info);
        }
        println!("  Last updated: {}", course.last_updated);
        if let Some(recommendation) = &course.recommendation {
            println!("  💡 {}", recommendation.message);
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize output: {}", e);
            std::process::exit(2);
        }
    }
}

/// Sleep to mimic the hosted experience; a zero delay returns immediately
async fn simulated_delay(delay_ms: u64) {
    if delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }
}

fn init_tracing(settings: &Settings) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.logging.level.clone()));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if settings.logging.format == "json" {
        subscriber.json().init();
    } else {
        subscriber.pretty().init();
    }
}
