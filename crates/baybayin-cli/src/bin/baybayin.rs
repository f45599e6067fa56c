use clap::{Args, Parser, Subcommand};

use baybayin_cli::commands::transcribe_ops::OutputFormat;
use baybayin_cli::commands::{
    config_ops, explain_ops, load_options, load_table, read_input, transcribe_ops,
};
use baybayin_engine::trace_init::init_tracing;
use baybayin_engine::Transcriber;

#[derive(Parser)]
#[command(name = "baybayin", about = "Tagalog to Baybayin transcriber", version)]
struct Cli {
    /// Log pipeline events to stderr (needs the `trace` feature)
    #[arg(long, global = true)]
    trace: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct EngineArgs {
    /// Custom symbol table TOML
    #[arg(long)]
    symbols: Option<String>,
    /// Custom settings TOML
    #[arg(long)]
    settings: Option<String>,
    /// Mark lone consonants with the virama
    #[arg(long)]
    virama: bool,
    /// Keep standalone "ng" and "mga" as written
    #[arg(long)]
    no_lexical: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Transcribe text (arguments, or stdin when none are given)
    Transcribe {
        /// Text to transcribe
        text: Vec<String>,
        /// Output as JSON
        #[arg(long, conflicts_with = "side_by_side")]
        json: bool,
        /// Show source and Baybayin in two columns
        #[arg(long)]
        side_by_side: bool,
        #[command(flatten)]
        engine: EngineArgs,
    },
    /// Show every pipeline stage for the input
    Explain {
        /// Text to explain
        text: Vec<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        engine: EngineArgs,
    },
    /// Export or validate the symbol table
    Symbols {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Export or validate settings
    Settings {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the built-in TOML
    Export,
    /// Validate a custom TOML file
    Validate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    if cli.trace {
        init_tracing(None);
    }

    match cli.command {
        Command::Transcribe {
            text,
            json,
            side_by_side,
            engine,
        } => {
            let table = load_table(engine.symbols.as_deref());
            let options = load_options(engine.settings.as_deref(), engine.virama, engine.no_lexical);
            let transcriber = Transcriber::new(&table, options);
            let format = if json {
                OutputFormat::Json
            } else if side_by_side {
                OutputFormat::SideBySide
            } else {
                OutputFormat::Plain
            };
            transcribe_ops::transcribe_cmd(&transcriber, &read_input(&text), format);
        }
        Command::Explain { text, json, engine } => {
            let table = load_table(engine.symbols.as_deref());
            let options = load_options(engine.settings.as_deref(), engine.virama, engine.no_lexical);
            let transcriber = Transcriber::new(&table, options);
            explain_ops::explain_cmd(&transcriber, &read_input(&text), json);
        }
        Command::Symbols { action } => match action {
            ConfigAction::Export => config_ops::symbols_export(),
            ConfigAction::Validate { file } => config_ops::symbols_validate(&file),
        },
        Command::Settings { action } => match action {
            ConfigAction::Export => config_ops::settings_export(),
            ConfigAction::Validate { file } => config_ops::settings_validate(&file),
        },
    }
}
