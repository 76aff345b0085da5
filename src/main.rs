use clap::Parser;
use client_finder::config::settings::SettingsFile;
use client_finder::utils::{logger, validation::Validate};
use client_finder::{CliConfig, LocalStorage, SearchEngine, SearchPipeline, SearchSettings};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting client-finder CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // Optional settings file; flags still win during resolution.
    let settings_file = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading settings from: {}", path);
            match SettingsFile::from_file(path) {
                Ok(file) => {
                    if let Err(e) = file.validate() {
                        tracing::error!("❌ Settings file validation failed: {}", e);
                        eprintln!("❌ {}", e.user_friendly_message());
                        eprintln!("💡 {}", e.recovery_suggestion());
                        std::process::exit(1);
                    }
                    Some(file)
                }
                Err(e) => {
                    eprintln!("❌ Failed to load settings file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML");
                    std::process::exit(1);
                }
            }
        }
        None => None,
    };

    let settings = match SearchSettings::resolve(&config, settings_file.as_ref()) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration resolution failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(".".to_string());
    let pipeline = SearchPipeline::new(storage, settings);

    let engine = SearchEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(destination) => {
            tracing::info!("✅ Search completed successfully!");
            tracing::info!("📁 Results delivered to: {}", destination);
        }
        Err(e) => {
            tracing::error!(
                "❌ Search failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

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
