//! Text Formatting
//!
//! Helpers for rendering dhikr text and meaning annotations.

/// Placeholder meaning the source data uses for "(generic dhikr)"
const MEANING_PLACEHOLDER: &str = "ذكر";

/// Split dhikr text into display paragraphs, one per source line.
/// Missing or empty text degrades to no paragraphs at all.
pub fn text_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Meaning annotation to display, if any. Filters out missing values,
/// the degenerate placeholder, and strings too short to be a meaning.
pub fn display_meaning(meaning: Option<&str>) -> Option<String> {
    let meaning = meaning?.trim();
    if meaning == MEANING_PLACEHOLDER || meaning.chars().count() <= 2 {
        return None;
    }
    Some(meaning.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_lines() {
        assert_eq!(text_lines("سبحان الله"), vec!["سبحان الله"]);
        assert_eq!(
            text_lines("سطر أول\nسطر ثانٍ"),
            vec!["سطر أول", "سطر ثانٍ"]
        );
        // Blank lines and surrounding whitespace are dropped
        assert_eq!(text_lines("أ\n\n  ب  "), vec!["أ", "ب"]);
        assert!(text_lines("").is_empty());
    }

    #[test]
    fn test_display_meaning() {
        assert_eq!(
            display_meaning(Some("طلب المغفرة")),
            Some("طلب المغفرة".to_string())
        );
        assert_eq!(display_meaning(None), None);
        assert_eq!(display_meaning(Some("")), None);
        assert_eq!(display_meaning(Some("  ")), None);
        // Placeholder and too-short values are suppressed
        assert_eq!(display_meaning(Some("ذكر")), None);
        assert_eq!(display_meaning(Some("لا")), None);
    }
}
