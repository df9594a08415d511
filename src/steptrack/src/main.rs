use clap::{Parser, Subcommand};
use dotenv::dotenv;
use steptrack_algos::{
    BodyProfile, DailySummary, TrainingSummary, daily_steps_report, training_report,
};
use steptrack_record::{StepRecord, TrainingRecord};

#[derive(Parser)]
pub struct SteptrackCli {
    /// Body weight in kilograms
    #[arg(env, long)]
    pub weight_kg: f64,
    /// Body height in meters
    #[arg(env, long)]
    pub height_m: f64,
    #[clap(subcommand)]
    pub subcommand: SteptrackCommand,
}

#[derive(Subcommand)]
pub enum SteptrackCommand {
    ///
    /// Render a training report from "<steps>,<activity>,<duration>"
    ///
    Training {
        record: String,
        /// Print the computed summary as JSON instead of the text template
        #[arg(long)]
        json: bool,
    },
    ///
    /// Render a daily steps report from "<steps>,<duration>"
    ///
    Daily {
        record: String,
        /// Print the computed summary as JSON instead of the text template
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(error) = dotenv() {
        println!("{}", error);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = SteptrackCli::parse();
    let profile = BodyProfile::new(cli.weight_kg, cli.height_m);

    match cli.subcommand {
        SteptrackCommand::Training { record, json } => {
            if json {
                let record: TrainingRecord = record.parse()?;
                let summary = TrainingSummary::compute(&record, profile)?;
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", training_report(&record, profile)?);
            }

            Ok(())
        }
        SteptrackCommand::Daily { record, json } => {
            if json {
                let record: StepRecord = record.parse()?;
                let summary = DailySummary::compute(&record, profile)?;
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", daily_steps_report(&record, profile));
            }

            Ok(())
        }
    }
}
