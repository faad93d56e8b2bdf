//! Wiser CLI - publish template and dynamic content versions
//!
//! Usage: wiser <COMMAND>
//!
//! Commands:
//!   publish      Publish a version to test, accept or live
//!   status       Show which version serves each environment
//!   history      Show the publish audit trail
//!   new-version  Create a new, unpublished version
//!
//! Exit status: 0 on success, 2 for a bad request (usage, environment name,
//! unknown item or version), 1 for everything else.

use std::io;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;

use wiser::application::PublishRequest;
use wiser::config::{Config, ConfigWarning, Verbosity};
use wiser::domain::value_objects::ItemKind;
use wiser::infrastructure::JsonEventSink;
use wiser::presentation::output::{history_json, new_version_json, publish_json, status_json};
use wiser::presentation::{factory, Cli, Commands, TextRenderer};
use wiser::WiserError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:?}", err);
            exit_code(&err)
        }
    }
}

fn exit_code(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<WiserError>() {
        Some(err) if err.is_request_error() => ExitCode::from(2),
        _ => ExitCode::FAILURE,
    }
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("cannot determine the working directory")?;
    let (config, warnings) = Config::discover(Some(&cwd))?;
    for warning in &warnings {
        eprintln!("{}", format_warning(warning));
    }
    let config = apply_flags(config, &cli);

    let renderer = TextRenderer {
        unicode: config.output.unicode && io::stdout().is_terminal(),
        verbosity: config.output.verbosity,
    };
    if config.output.verbosity >= Verbosity::Debug {
        eprintln!("store: {}", config.store.path.display());
    }

    match cli.command {
        Commands::Publish {
            kind,
            id,
            version,
            environment,
            dry_run,
        } => {
            let request = PublishRequest::new(kind, id, version, environment)
                .with_user(config.acting_user())
                .with_dry_run(dry_run || config.publish.dry_run);
            cmd_publish(&config, &renderer, &request)
        }
        Commands::Status { kind, id } => cmd_status(&config, &renderer, kind, id),
        Commands::History { kind, id, limit } => {
            cmd_history(&config, &renderer, kind, id, limit)
        }
        Commands::NewVersion { kind, id } => cmd_new_version(&config, &renderer, kind, id),
    }
}

/// CLI flags beat environment variables and config files
fn apply_flags(mut config: Config, cli: &Cli) -> Config {
    if let Some(store) = &cli.store {
        config.store.path = store.clone();
    }
    if let Some(user) = &cli.user {
        config.publish.user = Some(user.clone());
    }
    if cli.json {
        config.output.json = true;
    }
    config.output.verbosity = config.output.verbosity.raised_by(cli.verbose);
    config
}

fn format_warning(warning: &ConfigWarning) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    match &warning.suggestion {
        Some(suggestion) => format!(
            "Warning: unknown config key '{}' in {} (did you mean '{}'?)",
            warning.key, location, suggestion
        ),
        None => format!(
            "Warning: unknown config key '{}' in {}",
            warning.key, location
        ),
    }
}

fn store_path(config: &Config) -> &Path {
    &config.store.path
}

fn cmd_publish(config: &Config, renderer: &TextRenderer, request: &PublishRequest) -> Result<()> {
    let use_case = factory::create_publish_use_case(store_path(config));

    if config.output.json {
        use_case.execute_with_events(request, Arc::new(JsonEventSink::stdout()))?;
        return Ok(());
    }

    let outcome = use_case.execute(request)?;
    if renderer.verbosity >= Verbosity::Debug {
        eprintln!("{}", serde_json::to_string_pretty(&publish_json(&outcome))?);
    }
    println!("{}", renderer.publish(&outcome));
    Ok(())
}

fn cmd_status(config: &Config, renderer: &TextRenderer, kind: ItemKind, id: u64) -> Result<()> {
    let status = factory::create_status_use_case(store_path(config)).execute(kind, id)?;

    if config.output.json {
        println!("{}", serde_json::to_string_pretty(&status_json(&status))?);
    } else {
        println!("{}", renderer.status(&status));
    }
    Ok(())
}

fn cmd_history(
    config: &Config,
    renderer: &TextRenderer,
    kind: ItemKind,
    id: u64,
    limit: Option<usize>,
) -> Result<()> {
    let records = factory::create_history_use_case(store_path(config)).execute(kind, id, limit)?;

    if config.output.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&history_json(kind, id, &records))?
        );
    } else {
        println!("{}", renderer.history(kind, id, &records));
    }
    Ok(())
}

fn cmd_new_version(
    config: &Config,
    renderer: &TextRenderer,
    kind: ItemKind,
    id: u64,
) -> Result<()> {
    let version = factory::create_version_use_case(store_path(config)).create(kind, id)?;

    if config.output.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&new_version_json(kind, id, version))?
        );
    } else {
        println!("{}", renderer.new_version(kind, id, version));
    }
    Ok(())
}
