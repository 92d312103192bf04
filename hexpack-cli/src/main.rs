mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "hexpack")]
#[command(about = "Hexpack - interactive byte package builder", long_about = None)]
#[command(version)]
struct Cli {
    /// Session/preset config file
    #[arg(short, long, global = true, default_value = "hexpack.json")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Append a row to the current session
    Add {
        /// Initial hex value
        #[arg(long)]
        value: Option<String>,

        /// Row description
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete the row at the given index
    Remove {
        /// Zero-based row index
        #[arg(long)]
        index: usize,
    },

    /// Edit the value and/or description of a row
    Set {
        /// Zero-based row index
        #[arg(long)]
        index: usize,

        /// New hex value
        #[arg(long)]
        value: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,
    },

    /// Show the current rows and derived package bytes
    Show,

    /// Print an export encoding of the current package
    Export {
        #[command(subcommand)]
        format: ExportFormat,
    },

    /// Manage named presets
    Preset {
        #[command(subcommand)]
        action: PresetAction,
    },
}

#[derive(Subcommand)]
enum ExportFormat {
    /// Concatenated uppercase hex string
    Flat,
    /// Grouped Markdown table
    Markdown,
}

#[derive(Subcommand)]
enum PresetAction {
    /// Store the current session rows under a name (overwrites silently)
    Save {
        /// Preset name
        name: String,
    },
    /// Replace the session rows with a named preset
    Load {
        /// Preset name
        name: String,
    },
    /// Remove a named preset
    Delete {
        /// Preset name
        name: String,
    },
    /// List stored preset names
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Add { value, description } => {
            commands::row::add(&cli.config, value.as_deref(), description.as_deref())
        }

        Commands::Remove { index } => commands::row::remove(&cli.config, index),

        Commands::Set {
            index,
            value,
            description,
        } => commands::row::set(&cli.config, index, value.as_deref(), description.as_deref()),

        Commands::Show => commands::show::execute(&cli.config),

        Commands::Export { format } => match format {
            ExportFormat::Flat => commands::export::flat(&cli.config),
            ExportFormat::Markdown => commands::export::markdown(&cli.config),
        },

        Commands::Preset { action } => match action {
            PresetAction::Save { name } => commands::preset::save(&cli.config, &name),
            PresetAction::Load { name } => commands::preset::load(&cli.config, &name),
            PresetAction::Delete { name } => commands::preset::delete(&cli.config, &name),
            PresetAction::List => commands::preset::list(&cli.config),
        },
    }
}
