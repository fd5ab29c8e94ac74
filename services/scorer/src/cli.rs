use std::path::PathBuf;

use amana_scoring::config::AppConfig;
use amana_scoring::error::AppError;
use amana_scoring::telemetry;
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::commands;
use crate::infra::print_json;

#[derive(Parser, Debug)]
#[command(
    name = "amana-scorer",
    about = "Score activity compliance, the Halal Activity Index, and agent trust from JSON inputs",
    version
)]
struct Cli {
    /// Evaluation time as an RFC 3339 timestamp (defaults to now)
    #[arg(long, global = true, value_parser = crate::infra::parse_timestamp)]
    at: Option<DateTime<Utc>>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sharia compliance scoring for activity submissions
    Activity {
        #[command(subcommand)]
        command: ActivityCommand,
    },
    /// Reserve-wide Halal Activity Index
    Hai {
        #[command(subcommand)]
        command: HaiCommand,
    },
    /// Agent trust scores
    Trust {
        #[command(subcommand)]
        command: TrustCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ActivityCommand {
    /// Score one submission with attestations, or a list of submissions
    Score(InputArgs),
    /// List the recognized activity types and their policies
    Types,
    /// List the prohibited activity types
    Prohibited,
}

#[derive(Subcommand, Debug)]
enum HaiCommand {
    /// Compute the index over a batch of activities
    Calculate(HaiCalculateArgs),
    /// Feed activities through the incremental tracker and report the final snapshot
    Track(InputArgs),
}

#[derive(Subcommand, Debug)]
enum TrustCommand {
    /// Score one agent or a list of agents
    Calculate(InputArgs),
}

#[derive(Args, Debug)]
pub(crate) struct InputArgs {
    /// JSON input file, or `-` for stdin
    #[arg(long, default_value = "-")]
    pub(crate) input: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct HaiCalculateArgs {
    #[command(flatten)]
    pub(crate) input: InputArgs,
    /// Population size for count ratios; overrides `total_activities` in the input
    #[arg(long)]
    pub(crate) total: Option<u64>,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(environment = ?config.environment, "amana scorer starting");

    let now = cli.at.unwrap_or_else(Utc::now);
    let scoring = &config.scoring;

    match cli.command {
        Command::Activity { command } => match command {
            ActivityCommand::Score(args) => print_json(&commands::score_activities(&args)?),
            ActivityCommand::Types => print_json(&commands::activity_types()),
            ActivityCommand::Prohibited => print_json(&commands::prohibited_activities()),
        },
        Command::Hai { command } => match command {
            HaiCommand::Calculate(args) => {
                print_json(&commands::calculate_hai(&args, scoring, now)?)
            }
            HaiCommand::Track(args) => print_json(&commands::track_hai(&args, scoring, now)?),
        },
        Command::Trust {
            command: TrustCommand::Calculate(args),
        } => print_json(&commands::calculate_trust(&args, scoring, now)?),
    }
}
