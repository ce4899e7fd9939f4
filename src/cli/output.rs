//! Output formatting for CLI

use crate::search::Score;

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Format a key-value pair as an indented, aligned line
pub fn format_kv(key: &str, value: &str) -> String {
    format!("  {:20} {}", format!("{}:", key), value)
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("{}", format_kv(key, value));
}

/// One recognizer line: `"<input>" -> <true|false>`
pub fn format_verdict(input: &str, accepted: bool) -> String {
    format!("\"{input}\" -> {accepted}")
}

/// Comma-separated leaf values
pub fn format_scores(scores: &[Score]) -> String {
    scores
        .iter()
        .map(Score::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
