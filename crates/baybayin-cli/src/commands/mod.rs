pub mod config_ops;
pub mod explain_ops;
pub mod transcribe_ops;

use std::borrow::Cow;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use baybayin_engine::settings::{parse_settings_toml, settings};
use baybayin_engine::{SymbolTable, TranscribeOptions};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub(crate) use die;

/// Symbol table from `--symbols`, or the built-in one.
pub fn load_table(symbols: Option<&str>) -> Cow<'static, SymbolTable> {
    match symbols {
        Some(path) => Cow::Owned(die!(
            SymbolTable::open(Path::new(path)),
            "Error loading symbols {path}: {}"
        )),
        None => Cow::Borrowed(SymbolTable::global()),
    }
}

/// Options from `--settings` (or the built-in settings), with flag overrides
/// applied on top.
pub fn load_options(settings_file: Option<&str>, virama: bool, no_lexical: bool) -> TranscribeOptions {
    let mut options = match settings_file {
        Some(path) => {
            let content = die!(fs::read_to_string(path), "Error reading {path}: {}");
            die!(parse_settings_toml(&content), "Error: {}").options()
        }
        None => settings().options(),
    };
    if virama {
        options.virama = true;
    }
    if no_lexical {
        options.lexical_substitutions = false;
    }
    options
}

/// Positional words joined by spaces, or all of stdin when none are given.
pub fn read_input(words: &[String]) -> String {
    if !words.is_empty() {
        return words.join(" ");
    }
    let mut buf = String::new();
    die!(io::stdin().read_to_string(&mut buf), "Error reading stdin: {}");
    let trimmed = buf.strip_suffix('\n').unwrap_or(&buf);
    trimmed.strip_suffix('\r').unwrap_or(trimmed).to_string()
}
