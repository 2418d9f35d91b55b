use std::path::PathBuf;

use bedside_calculators::fields::FieldEntry;
use bedside_calculators::selftest::run_self_test_with;
use clap::{Parser, Subcommand};
use eyre::Result;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "bedside")]
#[command(about = "Bedside clinical calculators")]
struct Cli {
    /// Path to config.json (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List calculators and their fields
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Evaluate a calculator
    Calc {
        /// Calculator ID (see `bedside list`)
        id: String,
        /// Field values as field=value; omitted fields take their default
        entries: Vec<FieldEntry>,
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
        /// Fail on values outside a field's plausible range or option list
        #[arg(long)]
        strict: bool,
        /// Print the copy-ready summary (blood_gas only)
        #[arg(long)]
        summary: bool,
        /// Render the outcome with a custom Tera template file
        #[arg(long)]
        template: Option<PathBuf>,
        /// Hide tone marker, details and footnote
        #[arg(long)]
        brief: bool,
    },
    /// Run the built-in self-test
    SelfTest {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write a configuration file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Delete the configuration file
    Reset,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };
    let settings = config::load_or_default(&config_path)?;

    // Start-up self-test: failures are logged, never fatal.
    if settings.run_self_test_on_start && !matches!(cli.command, Commands::SelfTest { .. }) {
        let report = run_self_test_with(settings.self_test_tolerance);
        if report.all_pass {
            tracing::debug!(cases = report.cases.len(), "built-in self-test passed");
        } else {
            let failed: Vec<&str> = report.failed().map(|c| c.name.as_str()).collect();
            tracing::warn!(?failed, "built-in self-test failed, continuing");
        }
    }

    match cli.command {
        Commands::List { json } => commands::list(&settings, json),
        Commands::Calc {
            id,
            entries,
            json,
            strict,
            summary,
            template,
            brief,
        } => commands::calc(
            &settings,
            &commands::CalcRequest {
                id,
                entries,
                json,
                strict,
                summary,
                template,
                brief,
            },
        ),
        Commands::SelfTest { json } => commands::self_test(&settings, json),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config_show(&settings),
            ConfigAction::Path => {
                println!("{}", config_path.display());
                Ok(())
            }
            ConfigAction::Init { force } => commands::config_init(&config_path, force),
            ConfigAction::Reset => config::delete_config(&config_path),
        },
    }
}
