//! Category suggestion command

use std::io::Write;

use crate::error::FinsightResult;
use crate::services::CategorySuggester;

/// Handle `finsight suggest <TEXT>...`
pub fn handle_suggest_command<W: Write>(words: &[String], out: &mut W) -> FinsightResult<()> {
    let text = words.join(" ");
    match CategorySuggester::default().suggest(&text) {
        Some(category) => writeln!(out, "{}", category)?,
        None => writeln!(out, "No suggestion for '{}'", text)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(words: &[&str]) -> String {
        let words: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        let mut out = Vec::new();
        handle_suggest_command(&words, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_suggest() {
        assert_eq!(run(&["Starbucks", "Coffee"]), "Food & Dining\n");
        assert_eq!(run(&["Spotify Premium"]), "Entertainment\n");
        assert_eq!(run(&["Rent"]), "No suggestion for 'Rent'\n");
    }
}
