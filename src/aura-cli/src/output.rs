//! Table and JSON printing helpers.

use anyhow::Result;
use serde::Serialize;

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Prints a header row followed by a separator of matching width.
pub fn print_header(columns: &[(&str, usize)]) {
    let mut header = String::new();
    let mut rule = String::new();
    for (name, width) in columns {
        header.push_str(&format!("{name:<width$}  "));
        rule.push_str(&format!("{:-<width$}  ", ""));
    }
    println!("{}", header.trim_end());
    println!("{}", rule.trim_end());
}

/// Truncates a cell to the column width, marking the cut with `...`.
pub fn cell(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        format!("{text:<width$}")
    } else {
        let truncated: String = text.chars().take(width.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{truncated}..."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_pads_and_truncates() {
        assert_eq!(cell("ab", 4), "ab  ");
        assert_eq!(cell("abcdefgh", 6), "abc...");
    }
}
