use unicode_width::UnicodeWidthStr;

use baybayin_engine::{Transcriber, Transcription};

use super::die;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    Json,
    SideBySide,
}

pub fn transcribe_cmd(transcriber: &Transcriber, input: &str, format: OutputFormat) {
    let rows: Vec<Transcription> = input
        .lines()
        .map(|line| die!(transcriber.transcription(line), "Error: {}"))
        .collect();

    match format {
        OutputFormat::Plain => {
            for row in &rows {
                println!("{}", row.baybayin);
            }
        }
        OutputFormat::Json => {
            let json = die!(serde_json::to_string_pretty(&rows), "Error: {}");
            println!("{json}");
        }
        OutputFormat::SideBySide => print!("{}", side_by_side(&rows)),
    }
}

/// Two columns, source on the left padded to its widest line.
pub fn side_by_side(rows: &[Transcription]) -> String {
    let width = rows
        .iter()
        .map(|r| UnicodeWidthStr::width(r.source.as_str()))
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for row in rows {
        let pad = width - UnicodeWidthStr::width(row.source.as_str());
        out.push_str(&row.source);
        out.push_str(&" ".repeat(pad));
        out.push_str("  ");
        out.push_str(&row.baybayin);
        out.push('\n');
    }
    out
}
