use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tonekit::Mode;

mod commands;
mod output;

use commands::{ThemeArgs, generate::Format};

#[derive(Parser)]
#[command(name = "tonekit")]
#[command(version, about = "Generate Material color tokens from a source color", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write theme tokens as CSS, JSON, a property list or legacy tokens
    Generate {
        #[command(flatten)]
        theme: ThemeArgs,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Css)]
        format: Format,
        /// Scheme used by the `properties` and `legacy` formats
        #[arg(short, long, default_value = "light")]
        mode: Mode,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the role table of a scheme
    Show {
        #[command(flatten)]
        theme: ThemeArgs,
        /// Scheme to print
        #[arg(short, long, default_value = "light")]
        mode: Mode,
    },
}

fn main() -> Result<()> {
    let Cli { verbose, command } = Cli::parse();
    init_tracing(verbose);

    match command {
        Commands::Generate {
            theme,
            format,
            mode,
            output,
        } => {
            let loaded = commands::load_theme(&theme)?;
            commands::generate::execute(&loaded, format, mode, output.as_deref())?;
        }
        Commands::Show { theme, mode } => {
            let loaded = commands::load_theme(&theme)?;
            commands::show::execute(&loaded, mode);
        }
    }

    Ok(())
}

// The binary crate is also named `tonekit`, so one directive covers both.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "error,tonekit=debug"
    } else {
        "error,tonekit=info"
    }
}

fn init_tracing(verbose: bool) {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(default_filter(verbose)) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
