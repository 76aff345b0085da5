use clap::Parser;
use client_finder::domain::model::ReportFormat;
use client_finder::utils::{logger, validation::Validate};
use client_finder::{DiscoveryPipeline, DiscoverySettings, LocalStorage, SearchEngine};

#[derive(Parser)]
#[command(name = "discover")]
#[command(about = "Fabricate and rank a batch of fresh candidate leads")]
struct Args {
    /// How many leads to fabricate
    #[arg(short, long, default_value = "8")]
    count: usize,

    /// Lowest score a lead may be generated with (0-98)
    #[arg(long, default_value = "70")]
    min_score: u8,

    /// Fixed RNG seed for a reproducible batch
    #[arg(long)]
    rng_seed: Option<u64>,

    /// Free-text needle applied to the generated batch
    #[arg(short, long, default_value = "")]
    query: String,

    /// Industry label, or "all"
    #[arg(long, default_value = "all")]
    industry: String,

    /// Directory for report files (stdout only when omitted)
    #[arg(long)]
    output: Option<String>,

    #[arg(long, value_delimiter = ',', help = "Report formats: json, csv")]
    format: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Log memory and timing per phase
    #[arg(long)]
    monitor: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting lead discovery");

    let formats = if args.format.is_empty() {
        DiscoverySettings::default().formats
    } else {
        let mut parsed = Vec::with_capacity(args.format.len());
        for name in &args.format {
            match name.parse::<ReportFormat>() {
                Ok(format) => parsed.push(format),
                Err(e) => {
                    eprintln!("❌ {}", e.user_friendly_message());
                    eprintln!("💡 {}", e.recovery_suggestion());
                    std::process::exit(1);
                }
            }
        }
        parsed
    };

    let settings = DiscoverySettings {
        count: args.count,
        min_score: args.min_score,
        rng_seed: args.rng_seed,
        query: args.query,
        industry: args.industry,
        output_path: args.output,
        formats,
    };

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    if let Some(seed) = settings.rng_seed {
        tracing::info!("🎲 Using fixed RNG seed: {}", seed);
    }

    let storage = LocalStorage::new(".".to_string());
    let pipeline = DiscoveryPipeline::new(storage, settings);

    let engine = SearchEngine::new_with_monitoring(pipeline, args.monitor);

    match engine.run().await {
        Ok(destination) => {
            tracing::info!("✅ Discovery completed successfully!");
            tracing::info!("📁 Results delivered to: {}", destination);
        }
        Err(e) => {
            tracing::error!(
                "❌ Discovery failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                client_finder::utils::error::ErrorSeverity::Low => 0,
                client_finder::utils::error::ErrorSeverity::Medium => 2,
                client_finder::utils::error::ErrorSeverity::High => 1,
                client_finder::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
