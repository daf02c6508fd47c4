//! Binary entrypoint for the worldvars CLI.
//!
//! Commands:
//! - `run` - start the interactive console
//! - `exec <command...>` - run a single command line and print its result
//! - `init` - create a starter `config.toml`
//! - `status` - print the vars file location and current contents
//!
//! See the library crate docs for module-level details: `worldvars::`.
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;

use worldvars::config::Config;
use worldvars::console::Console;

#[derive(Parser)]
#[command(name = "worldvars")]
#[command(about = "A persisted typed variable store with a command console")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive console
    Run,
    /// Execute a single command line against the store
    Exec {
        /// The command and its arguments, e.g. `exec new int score 10`
        #[arg(trailing_var_arg = true, required = true)]
        line: Vec<String>,
    },
    /// Initialize a new configuration file
    Init,
    /// Show the vars file location and stored variables
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config early to configure logging (except for Init which writes it)
    let pre_config = match cli.command {
        Commands::Init => None,
        _ => Config::load(&cli.config).await.ok(),
    };
    init_logging(&pre_config, cli.verbose);

    match cli.command {
        Commands::Run => {
            let config = pre_config.unwrap_or(Config::load(&cli.config).await?);
            info!("Starting worldvars v{}", env!("CARGO_PKG_VERSION"));
            let mut console = Console::new(config);
            console.run().await?;
        }
        Commands::Exec { line } => {
            let config = pre_config.unwrap_or(Config::load(&cli.config).await?);
            let mut console = Console::new(config);
            let code = console.exec(&line.join(" "));
            if code < 0 {
                std::process::exit(1);
            }
        }
        Commands::Init => {
            info!("Initializing new worldvars configuration");
            Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);
        }
        Commands::Status => {
            let config = pre_config.unwrap_or(Config::load(&cli.config).await?);
            let console = Console::new(config);
            console.show_status();
        }
    }

    Ok(())
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let base_level = match verbosity {
        0 => config
            .as_ref()
            .and_then(|c| c.logging.level.parse().ok())
            .unwrap_or(log::LevelFilter::Info),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);
    if let Some(file) = config.as_ref().and_then(|c| c.logging.file.clone()) {
        if let Ok(f) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file)
        {
            let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
            // When stdout is a terminal, mirror log lines to the console too.
            let is_tty = atty::is(atty::Stream::Stdout);
            builder.format(move |fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                let line = format!("{} [{}] {}", ts, record.level(), record.args());
                if let Ok(mut guard) = write_mutex.lock() {
                    let _ = writeln!(guard, "{}", line);
                }
                if is_tty {
                    writeln!(fmt, "{}", line)
                } else {
                    Ok(())
                }
            });
        } else {
            builder.format(|fmt, record| {
                writeln!(
                    fmt,
                    "{} [{}] {}",
                    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
                    record.level(),
                    record.args()
                )
            });
        }
    } else {
        builder.format(|fmt, record| {
            writeln!(
                fmt,
                "{} [{}] {}",
                chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
                record.level(),
                record.args()
            )
        });
    }
    let _ = builder.try_init();
}
