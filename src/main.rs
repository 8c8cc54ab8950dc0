use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use merkle_rewards::artifact::{export_proofs, generate_proofs};
use merkle_rewards::config::DistributionConfig;
use merkle_rewards::records::load_records;
use merkle_rewards::RewardTree;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the tree and emit the full proof artifact
    Generate {
        /// Path to configuration file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Ranking CSV (overrides config)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Artifact output path (overrides config)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Generate a single inclusion proof
    Prove {
        /// Ranking CSV
        #[arg(short, long, value_name = "FILE", default_value = "eigentrust_rankings.csv")]
        input: PathBuf,

        /// Record address
        #[arg(short, long)]
        address: String,

        /// Record amount
        #[arg(long)]
        amount: f64,
    },

    /// Print only the committed root
    Root {
        /// Ranking CSV
        #[arg(short, long, value_name = "FILE", default_value = "eigentrust_rankings.csv")]
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { config, input, output } => {
            let config_path = config.unwrap_or_else(|| PathBuf::from("config.json"));
            let mut config = match DistributionConfig::from_file(&config_path).await {
                Ok(cfg) => cfg,
                Err(e) => {
                    info!("Config file not found or invalid: {}. Using default configuration.", e);
                    DistributionConfig::default()
                }
            };
            if let Some(input) = input {
                config.input_file = input;
            }
            if let Some(output) = output {
                config.output_file = output;
            }

            let records = load_records(&config.input_file).await?;
            let record_count = records.len();

            info!("Building reward tree over {} records", record_count);
            let tree = RewardTree::build(records);

            match tree.root() {
                Some(root) => info!("Root hash: {}", root.to_hex()),
                None => warn!("Empty snapshot: no root to commit"),
            }

            let proofs = generate_proofs(&tree)?;
            export_proofs(&proofs, &config.output_file, config.pretty).await?;

            info!("Total records: {}", record_count);
        }

        Commands::Prove { input, address, amount } => {
            let records = load_records(&input).await?;
            let tree = RewardTree::build(records);

            match tree.proof_for(&address, amount) {
                Ok(proof) => {
                    println!("{}", serde_json::to_string_pretty(&proof)?);
                }
                Err(e) if e.is_not_found() => {
                    error!("{}", e);
                    std::process::exit(1);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Commands::Root { input } => {
            let records = load_records(&input).await?;
            let tree = RewardTree::build(records);

            match tree.root() {
                Some(root) => println!("{}", root.to_hex()),
                None => warn!("Empty snapshot: no root to commit"),
            }
        }
    }

    Ok(())
}
