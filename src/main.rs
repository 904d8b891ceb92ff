use clap::{Parser, Subcommand, ValueEnum};
use std::error::Error;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use finance_tables::{
    export_catalog, map_account_subtype, map_investment_type, run, run_reader, Catalog,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Account labels and product catalog lookups")]
struct Cli {
    /// JSON catalog to use instead of the built-in plans
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every product in the catalog
    Products {
        #[arg(long, value_enum, default_value_t = Format::Csv)]
        format: Format,
    },
    /// Show the product behind a processor price identifier
    Product { price_id: String },
    /// Print the display label of an account subtype
    Subtype { code: Option<String> },
    /// Print the label and description of an investment type/subtype
    Investment {
        investment_type: String,
        subtype: Option<String>,
    },
    /// Label a provider account export (id,type,subtype); `-` reads stdin
    Label { accounts: PathBuf },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Csv,
    Json,
}

fn main() {
    env_logger::init();
    if let Err(err) = try_main() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn try_main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let catalog = match &cli.catalog {
        Some(path) => {
            log::info!("loading catalog from {}", path.display());
            Catalog::from_reader(File::open(path)?)?
        }
        None => Catalog::builtin(),
    };

    let mut stdout = io::stdout().lock();
    match cli.command {
        Command::Products { format } => match format {
            Format::Csv => export_catalog(&catalog, stdout)?,
            Format::Json => {
                serde_json::to_writer_pretty(&mut stdout, catalog.as_slice())?;
                writeln!(stdout)?;
            }
        },
        Command::Product { price_id } => {
            let product = catalog
                .find_by_price_id(&price_id)
                .ok_or("product not found")?;
            serde_json::to_writer_pretty(&mut stdout, product)?;
            writeln!(stdout)?;
        }
        Command::Subtype { code } => {
            writeln!(stdout, "{}", map_account_subtype(code.as_deref()))?;
        }
        Command::Investment {
            investment_type,
            subtype,
        } => {
            let label = map_investment_type(&investment_type, subtype.as_deref());
            serde_json::to_writer_pretty(&mut stdout, &label)?;
            writeln!(stdout)?;
        }
        Command::Label { accounts } if accounts.as_os_str() == "-" => {
            run_reader(io::stdin().lock(), stdout)?
        }
        Command::Label { accounts } => run(accounts, stdout)?,
    }
    Ok(())
}
