use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::Result;
use color_eyre::eyre::WrapErr;

use fieldvalues::config::{self, Config};
use fieldvalues::{CandidateFilter, FieldDescriptor, ValueRow, select_placeholder};

#[derive(Parser, Debug)]
#[command(name = "fieldvalues", version, about = "Placeholder and filtering policy for field-value inputs")]
struct Cli {
    /// Config file (defaults to ~/.config/fieldvalues/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the placeholder shown for a field
    Placeholder {
        /// Field descriptor JSON
        #[arg(long)]
        field: PathBuf,

        /// Search field descriptor JSON, required for search-mode fields
        #[arg(long)]
        search_field: Option<PathBuf>,
    },

    /// Print the value rows matching a query, one JSON array per line
    Filter {
        /// Field descriptor JSON
        #[arg(long)]
        field: PathBuf,

        /// Text typed into the input; empty matches every row
        #[arg(long, default_value = "")]
        query: String,

        /// JSON array of value rows ("-" for stdin); defaults to the field's values
        #[arg(long)]
        values: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => config::load_config_from_path(path)?,
        None => config::load_config()?,
    };

    match cli.command {
        Command::Placeholder {
            field,
            search_field,
        } => {
            let field = read_field(&field)?;
            let search_field = search_field.as_deref().map(read_field).transpose()?;
            println!("{}", select_placeholder(&field, search_field.as_ref())?);
        }
        Command::Filter {
            field,
            query,
            values,
        } => run_filter(&config, &read_field(&field)?, &query, values.as_deref())?,
    }

    Ok(())
}

fn run_filter(config: &Config, field: &FieldDescriptor, query: &str, values: Option<&Path>) -> Result<()> {
    let rows = match values {
        Some(path) => read_rows(path)?,
        None => field.values().to_vec(),
    };

    let filter = CandidateFilter::for_field(field, &config.filter);
    for row in filter.filter_rows(&rows, query, config.options.max_results) {
        println!("{}", serde_json::to_string(row)?);
    }

    Ok(())
}

fn read_field(path: &Path) -> Result<FieldDescriptor> {
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read field descriptor {}", path.display()))?;
    FieldDescriptor::from_json(&content)
        .wrap_err_with(|| format!("Failed to parse field descriptor {}", path.display()))
}

fn read_rows(path: &Path) -> Result<Vec<ValueRow>> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path).wrap_err_with(|| format!("Failed to read values {}", path.display()))?
    };

    serde_json::from_str(&content).wrap_err("Values must be a JSON array of rows")
}
