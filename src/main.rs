use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "codelore")]
#[command(
    version,
    about = "LLM-driven documentation artifacts for codebases: diagrams, explanations, use-case specs"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, short, default_value = ".codelore/config.toml")]
    config: PathBuf,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an entity relationship diagram for the project
    Diagram {
        #[arg(long, short, env = "PROJECT_DIRECTORY", help = "Project directory to scan")]
        dir: Option<PathBuf>,
        #[arg(long, short, help = "Output directory for artifacts")]
        output: Option<PathBuf>,
    },

    /// Generate per-file explanations with code screenshots
    Explain {
        #[arg(long, short, env = "PROJECT_DIRECTORY", help = "Project directory to scan")]
        dir: Option<PathBuf>,
        #[arg(long, short, help = "Output directory for artifacts")]
        output: Option<PathBuf>,
    },

    /// Generate use-case specifications for a single file
    Usecase {
        #[arg(help = "Controller or schema file to analyze")]
        file: PathBuf,
        #[arg(long, short, help = "Output directory for artifacts")]
        output: Option<PathBuf>,
    },
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31mCodelore encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }

        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            codelore::cli::Output::new().error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = if cli.config.exists() {
        codelore::ConfigLoader::load_from_file(&cli.config)?
    } else {
        codelore::ConfigLoader::load()?
    };

    match cli.command {
        Commands::Diagram { dir, output } => {
            codelore::cli::commands::diagram::run(&config, dir, output)?;
        }
        Commands::Explain { dir, output } => {
            codelore::cli::commands::explain::run(&config, dir, output)?;
        }
        Commands::Usecase { file, output } => {
            codelore::cli::commands::usecase::run(&config, file, output)?;
        }
    }

    Ok(())
}
