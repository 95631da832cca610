//! calmi CLI: a terminal chat companion with a simulated responder

use calmi_engine::{ChatConfig, ResponseCatalog};
use calmi_tui::{Theme, TuiOptions};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Talk to Calmi in your terminal
#[derive(Parser)]
#[command(name = "calmi")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON config file (defaults are used for missing fields)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the reply delay in milliseconds
    #[arg(long, global = true)]
    delay_ms: Option<u64>,

    /// Seed for reply selection (deterministic replies)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Where to write logs (the terminal belongs to the UI)
    #[arg(long, global = true, default_value = "calmi.log")]
    log_file: PathBuf,

    /// Color theme
    #[arg(long, global = true, value_enum, default_value_t = ThemeChoice::Calm)]
    theme: ThemeChoice,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the chat view (default when no command specified)
    Tui,

    /// Print the canned replies
    Responses {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default config file
    Init {
        /// Destination path
        #[arg(default_value = "calmi.json")]
        path: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ThemeChoice {
    Calm,
    HighContrast,
}

impl ThemeChoice {
    fn theme(self) -> Theme {
        match self {
            ThemeChoice::Calm => Theme::calm(),
            ThemeChoice::HighContrast => Theme::high_contrast(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli.log_file) {
        eprintln!("Warning: logging disabled ({}): {e}", cli.log_file.display());
    }

    match cli.command {
        None | Some(Commands::Tui) => {
            let config = load_config(cli.config.as_deref(), cli.delay_ms);
            let options = TuiOptions {
                seed: cli.seed,
                theme: cli.theme.theme(),
            };
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => fail(&format!("Failed to create tokio runtime: {e}")),
            };
            info!(seed = ?cli.seed, delay_ms = config.reply_delay_ms, "starting chat view");
            if let Err(e) = rt.block_on(calmi_tui::run_tui(config, options)) {
                fail(&format!("Error: {e}"));
            }
        }
        Some(Commands::Responses { json }) => {
            let config = load_config(cli.config.as_deref(), cli.delay_ms);
            cmd_responses(&config, json);
        }
        Some(Commands::Config { json }) => {
            let config = load_config(cli.config.as_deref(), cli.delay_ms);
            cmd_config(&config, json);
        }
        Some(Commands::Init { path }) => {
            cmd_init(&path);
        }
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

/// Append logs to `path`, filtered by `RUST_LOG` (default `info`).
fn init_logging(path: &Path) -> std::io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn load_config(path: Option<&Path>, delay_ms: Option<u64>) -> ChatConfig {
    let mut config = match path {
        Some(path) => match ChatConfig::load(path) {
            Ok(config) => config,
            Err(e) => fail(&format!("Failed to load {}: {e}", path.display())),
        },
        None => ChatConfig::default(),
    };
    if let Some(delay_ms) = delay_ms {
        config.reply_delay_ms = delay_ms;
    }
    config
}

fn cmd_responses(config: &ChatConfig, json: bool) {
    let catalog: ResponseCatalog = match config.catalog() {
        Ok(catalog) => catalog,
        Err(e) => fail(&format!("Invalid config: {e}")),
    };

    if json {
        let replies: Vec<&str> = catalog.iter().collect();
        match serde_json::to_string_pretty(&replies) {
            Ok(out) => println!("{out}"),
            Err(e) => fail(&format!("Failed to serialize: {e}")),
        }
        return;
    }

    println!("{} canned replies\n", catalog.len());
    for (i, reply) in catalog.iter().enumerate() {
        println!("  {:>2}. {reply}", i + 1);
    }
}

fn cmd_config(config: &ChatConfig, json: bool) {
    if json {
        match serde_json::to_string_pretty(config) {
            Ok(out) => println!("{out}"),
            Err(e) => fail(&format!("Failed to serialize: {e}")),
        }
        return;
    }

    println!("Greeting:    {}", config.greeting);
    println!("Reply delay: {} ms", config.reply_delay_ms);
    println!("Replies:     {}", config.responses.len());
    println!("Assistant:   {}", config.assistant_name);
    println!("Title:       {}", config.title);
    println!("Subtitle:    {}", config.subtitle);
    println!("Note:        {}", config.note);
    println!("Disclaimer:  {}", config.disclaimer);
}

fn cmd_init(path: &Path) {
    if path.exists() {
        println!("Config already exists at {}", path.display());
        return;
    }
    match ChatConfig::default().save(path) {
        Ok(()) => println!("Created {}", path.display()),
        Err(e) => fail(&format!("Failed to write config: {e}")),
    }
}
