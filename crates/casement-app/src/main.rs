mod cli;
mod commands;

use std::process::ExitCode;

use casement_config::CasementConfig;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn load_config(path: Option<&std::path::Path>) -> Result<CasementConfig, casement_common::ConfigError> {
    match path {
        Some(path) => {
            let config = casement_config::toml_loader::load_from_path(path)?;
            casement_config::validation::validate(&config)?;
            Ok(config)
        }
        None => casement_config::load_config(),
    }
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Config first: the log level may come from it.
    let loaded = load_config(args.config.as_deref());
    let config_level = loaded
        .as_ref()
        .map(|c| c.logging.directive())
        .unwrap_or_else(|_| "casement=info".to_string());
    let log_directive = args
        .log_level
        .as_deref()
        .map(|level| format!("casement={level}"))
        .unwrap_or(config_level);

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| LevelFilter::INFO.into()),
            ),
        )
        .init();

    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        CasementConfig::default()
    });
    tracing::debug!("Casement v{} starting", env!("CARGO_PKG_VERSION"));

    let output = match &args.command {
        cli::Command::Plan(plan) => commands::plan(&config, plan)
            .and_then(|report| commands::render_plan(&report, plan.json)),
        cli::Command::Presets => Ok(commands::presets(&config)),
    };

    match output {
        Ok(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
