use anyhow::Context;
use clap::Parser;
use herdbook::app::response::{self, render, ErrorEnvelope};
use herdbook::config::cli::Command;
use herdbook::core::query::HerdQuery;
use herdbook::utils::validation::{validate_required_field, Validate};
use herdbook::utils::logger;
use herdbook::{AnimalId, AppConfig, BreedingAdvisor, Cli, JsonHerdStore, OwnerId, SystemClock};

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("Failed to load config file '{}'", path))?,
        None => AppConfig::default(),
    };
    cli.apply_overrides(&mut config);
    config.validate().context("Configuration validation failed")?;
    Ok(config)
}

async fn run(
    advisor: &BreedingAdvisor<JsonHerdStore, SystemClock>,
    owner: &OwnerId,
    command: &Command,
    pretty: bool,
) -> herdbook::Result<String> {
    let output = match command {
        Command::Matches { animal_id } => {
            let matches = advisor.valid_matches(owner, &AnimalId::from(animal_id.as_str())).await?;
            render(&response::matches(matches), pretty)
        }
        Command::Stats => {
            let stats = advisor.breeding_stats(owner).await?;
            render(&response::stats(stats), pretty)
        }
        Command::Family { animal_id } => {
            let family = advisor.family(owner, &AnimalId::from(animal_id.as_str())).await?;
            render(&response::family(family), pretty)
        }
        Command::List(args) => {
            let animals = advisor.list_animals(owner, &HerdQuery::from(args)).await?;
            render(&response::animals(animals), pretty)
        }
    };
    Ok(output)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    if config.logging.json {
        logger::init_json_logger(config.log_level());
    } else {
        logger::init_cli_logger(config.log_level());
    }

    tracing::info!("Starting herdbook");
    tracing::debug!("Effective config: {:?}", config);

    let owner = match validate_required_field("owner", &config.store.owner) {
        Ok(owner) => OwnerId::from(owner.as_str()),
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: pass --owner or set store.owner");
            std::process::exit(e.exit_code());
        }
    };

    let store = JsonHerdStore::new(&config.store.herd_path);
    let advisor = BreedingAdvisor::new(store, SystemClock);

    match run(&advisor, &owner, &cli.command, config.output.pretty).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!(
                "Request failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
            println!("{}", render(&ErrorEnvelope::from(&e), config.output.pretty));

            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
