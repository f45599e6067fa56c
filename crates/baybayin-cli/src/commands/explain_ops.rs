use unicode_width::UnicodeWidthStr;

use baybayin_engine::normalize::TokenKind;
use baybayin_engine::{Explanation, PairKind, Transcriber};

use super::die;

pub fn explain_cmd(transcriber: &Transcriber, input: &str, json: bool) {
    let explanation = die!(transcriber.explain(input), "Error: {}");
    if json {
        let out = die!(serde_json::to_string_pretty(&explanation), "Error: {}");
        println!("{out}");
    } else {
        print!("{}", format_text(&explanation));
    }
}

fn kind_label(kind: PairKind) -> &'static str {
    match kind {
        PairKind::NoPair => "no-pair",
        PairKind::ConsonantVowel => "consonant-vowel",
        PairKind::VowelConsonant => "vowel-consonant",
        PairKind::ExceedsPair => "exceeds-pair",
    }
}

/// Human-readable stage dump.
pub fn format_text(explanation: &Explanation) -> String {
    let stages = &explanation.stages;
    let mut out = String::new();

    out.push_str("=== Normalize ===\n");
    for (name, text) in [
        ("lowercased", &stages.lowercased),
        ("lexical", &stages.lexical),
        ("collapsed", &stages.collapsed),
        ("stripped", &stages.stripped),
    ] {
        out.push_str(&format!("  {name:<11}{text:?}\n"));
    }

    out.push_str("=== Tokens ===\n");
    for token in &explanation.tokens {
        match token.kind {
            TokenKind::Separator => {
                out.push_str(&format!("  separator {:?}\n", token.text));
            }
            TokenKind::Word => {
                out.push_str(&format!("  word {:?} -> {}\n", token.text, token.output));
                let width = token
                    .units
                    .iter()
                    .map(|u| UnicodeWidthStr::width(u.text.as_str()))
                    .max()
                    .unwrap_or(0);
                for unit in &token.units {
                    let pad = width - UnicodeWidthStr::width(unit.text.as_str());
                    out.push_str(&format!(
                        "    {}{}  {:<16}{}\n",
                        unit.text,
                        " ".repeat(pad),
                        kind_label(unit.kind),
                        unit.glyphs,
                    ));
                }
            }
        }
    }

    out.push_str(&format!("=== Output ===\n  {}\n", explanation.output));
    out
}
