use std::fs;
use std::path::Path;

use baybayin_engine::{settings, table, SymbolTable};

use super::die;

pub fn symbols_export() {
    print!("{}", table::default_toml());
}

pub fn symbols_validate(file: &str) {
    let t = die!(SymbolTable::open(Path::new(file)), "Error: {}");
    println!(
        "OK: {} symbols, {} vowel marks, virama={}",
        t.symbol_count(),
        t.vowel_mark_count(),
        t.virama().unwrap_or("(none)")
    );
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: normalize.lexical_substitutions={}, output.virama={}",
        s.normalize.lexical_substitutions, s.output.virama
    );
}
