use crate::config::toml_config::AppConfig;
use crate::core::query::{AgeGroup, HerdQuery};
use crate::domain::model::{Gender, HealthStatus};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "herdbook")]
#[command(about = "Breeding advice and statistics for a sheep herd")]
pub struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Herd snapshot file, overrides store.herd_path
    #[arg(long)]
    pub herd: Option<String>,

    /// Owner whose herd is read, overrides store.owner
    #[arg(long)]
    pub owner: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    /// Print single-line JSON
    #[arg(long)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Rank candidate mates for an animal
    Matches { animal_id: String },
    /// Breeding statistics for the whole herd
    Stats,
    /// Parents, siblings and offspring of an animal
    Family { animal_id: String },
    /// List animals, optionally filtered
    List(ListArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GenderArg {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HealthArg {
    Healthy,
    NeedsAttention,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AgeGroupArg {
    Lamb,
    Adult,
}

#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    #[arg(long, value_enum)]
    pub gender: Option<GenderArg>,

    #[arg(long, value_enum)]
    pub health: Option<HealthArg>,

    /// Case-insensitive breed substring
    #[arg(long)]
    pub breed: Option<String>,

    /// Case-insensitive tag number substring
    #[arg(long)]
    pub search: Option<String>,

    #[arg(long, value_enum)]
    pub age_group: Option<AgeGroupArg>,
}

impl From<&ListArgs> for HerdQuery {
    fn from(args: &ListArgs) -> Self {
        HerdQuery {
            gender: args.gender.map(|g| match g {
                GenderArg::Male => Gender::Male,
                GenderArg::Female => Gender::Female,
            }),
            health_status: args.health.map(|h| match h {
                HealthArg::Healthy => HealthStatus::Healthy,
                HealthArg::NeedsAttention => HealthStatus::NeedsAttention,
            }),
            breed: args.breed.clone(),
            search: args.search.clone(),
            age_group: args.age_group.map(|a| match a {
                AgeGroupArg::Lamb => AgeGroup::Lamb,
                AgeGroupArg::Adult => AgeGroup::Adult,
            }),
        }
    }
}

impl Cli {
    /// Folds command line overrides into the file configuration.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(herd) = &self.herd {
            config.store.herd_path = herd.clone();
        }
        if let Some(owner) = &self.owner {
            config.store.owner = Some(owner.clone());
        }
        if self.verbose {
            config.logging.level = "debug".to_string();
        }
        if self.json_logs {
            config.logging.json = true;
        }
        if self.compact {
            config.output.pretty = false;
        }
    }
}
