//! heatid 命令行入口

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use heatid::{
    equipment_options, parse_energy_star, ConfigManager, EquipmentCategory, FuelType,
    HeatingClassifier, SurveyWizard, TableLoader, YearParser,
};

#[derive(Parser)]
#[command(name = "heatid", version)]
#[command(about = "Identify a home heating appliance and estimate its efficiency", long_about = None)]
struct Cli {
    /// Custom JSON rule table file (defaults to the embedded tables)
    #[arg(long, global = true)]
    tables: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List fuel types
    Fuels,
    /// List equipment types available for a fuel
    Equipment {
        #[arg(long)]
        fuel: FuelType,
    },
    /// List subtype descriptions for a fuel and equipment type
    Options {
        #[arg(long)]
        fuel: FuelType,
        #[arg(long)]
        equipment: EquipmentCategory,
    },
    /// Resolve a state abbreviation to its climate region
    Region {
        state: String,
    },
    /// Resolve a description and rate the equipment's efficiency
    Rate {
        #[arg(long)]
        fuel: FuelType,
        #[arg(long)]
        equipment: EquipmentCategory,
        #[arg(long)]
        description: String,
        /// Year of manufacture (unparsable values count as unknown)
        #[arg(long)]
        year: Option<String>,
        /// ENERGY STAR certified ("yes" or "no")
        #[arg(long, default_value = "no")]
        energy_star: String,
        /// State abbreviation (only used for gas furnaces)
        #[arg(long)]
        state: Option<String>,
        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Walk through identifying one or more appliances interactively
    Wizard {
        /// Print the final summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the active rule tables as JSON
    Tables,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut builder = ConfigManager::custom();
    if let Some(path) = &cli.tables {
        builder = builder.table_file(path);
    }
    let config = builder.build();
    let classifier = HeatingClassifier::new(&config).context("failed to load rule tables")?;

    match cli.command {
        Command::Fuels => {
            for fuel in FuelType::ALL {
                println!("{}", fuel);
            }
        }
        Command::Equipment { fuel } => {
            for equipment in equipment_options(fuel) {
                println!("{}", equipment);
            }
        }
        Command::Options { fuel, equipment } => {
            let options = classifier.options_for(fuel, equipment);
            if options.is_empty() {
                anyhow::bail!("{} {} is not a supported combination", fuel, equipment);
            }
            for (idx, option) in options.iter().enumerate() {
                println!("{}. {}", idx + 1, option);
            }
        }
        Command::Region { state } => {
            let region = classifier.classify_region(&state.to_uppercase());
            if region.is_fallback() {
                println!("{} (default: not in the region lists)", region.region());
            } else {
                println!("{}", region.region());
            }
        }
        Command::Rate {
            fuel,
            equipment,
            description,
            year,
            energy_star,
            state,
            json,
        } => {
            let state = state.map(|s| s.trim().to_uppercase());
            let details = classifier
                .classify(
                    fuel,
                    equipment,
                    &description,
                    YearParser::parse_opt(year.as_deref()),
                    parse_energy_star(&energy_star),
                    state.as_deref(),
                )
                .with_context(|| format!("could not identify the {} {}", fuel, equipment))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&details)?);
            } else {
                println!("{}", details);
            }
        }
        Command::Wizard { json } => {
            let stdin = io::stdin();
            let survey = SurveyWizard::new(&classifier, stdin.lock(), io::stdout()).run()?;
            if json {
                println!("{}", survey.to_json()?);
            }
        }
        Command::Tables => {
            println!("{}", TableLoader::to_json(classifier.tables())?);
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "heatid=debug" } else { "heatid=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
