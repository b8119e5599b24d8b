//! Heuristic line categorization for OCR output.
//!
//! Splits recognized text into lines and files each line into the
//! user-supplied category buckets whose rule it satisfies. The rule set is
//! closed and fixed: five literal category labels, each paired with an
//! independent predicate over the line's position and content. Lines may
//! land in zero, one, or several buckets; category names outside the fixed
//! labels are never populated automatically.
//!
//! Categorization only sees line order, casing, and digit patterns; it is
//! deliberately not layout-aware. The input must be newline-delimited —
//! joining OCR spans with spaces collapses everything into one line and
//! degrades the result to a single bucket artifact.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Category label for the first line of the document.
pub const CATEGORY_HEADER: &str = "Header / Title";
/// Category label for lines containing a date.
pub const CATEGORY_DATES: &str = "Dates";
/// Category label for lines containing a standalone numeric token.
pub const CATEGORY_AMOUNTS: &str = "Numbers / Amounts";
/// Category label for fully uppercase or title-cased lines.
pub const CATEGORY_ENTITIES: &str = "Names / Entities";
/// Catch-all category label receiving every line.
pub const CATEGORY_CONTENT: &str = "Main Content";

static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b").expect("static regex"));
static NUMERIC_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(\.\d+)?$").expect("static regex"));

/// One categorization rule: a target category label and the predicate that
/// decides, from a line's index and content, whether the line belongs to it.
struct LineRule {
    category: &'static str,
    applies: fn(usize, &str) -> bool,
}

/// The fixed rule table, evaluated in order for every line. Rules are
/// independent and non-exclusive.
const LINE_RULES: [LineRule; 5] = [
    LineRule {
        category: CATEGORY_HEADER,
        applies: is_header_line,
    },
    LineRule {
        category: CATEGORY_DATES,
        applies: contains_date,
    },
    LineRule {
        category: CATEGORY_AMOUNTS,
        applies: contains_numeric_token,
    },
    LineRule {
        category: CATEGORY_ENTITIES,
        applies: looks_like_entity,
    },
    LineRule {
        category: CATEGORY_CONTENT,
        applies: every_line,
    },
];

fn is_header_line(index: usize, _line: &str) -> bool {
    index == 0
}

fn contains_date(_index: usize, line: &str) -> bool {
    DATE_RE.is_match(line)
}

/// True when some whitespace-delimited token is entirely an integer or
/// decimal. Matching whole tokens keeps composite values like `01/02/2024`
/// out of the numbers bucket while `Total: 42.50` stays in.
fn contains_numeric_token(_index: usize, line: &str) -> bool {
    line.split_whitespace()
        .any(|token| NUMERIC_TOKEN_RE.is_match(token))
}

fn looks_like_entity(_index: usize, line: &str) -> bool {
    is_all_uppercase(line) || is_title_case(line)
}

fn every_line(_index: usize, _line: &str) -> bool {
    true
}

/// True when the line contains at least one letter and no lowercase letters.
fn is_all_uppercase(line: &str) -> bool {
    let mut has_alpha = false;
    for c in line.chars() {
        if c.is_alphabetic() {
            has_alpha = true;
            if c.is_lowercase() {
                return false;
            }
        }
    }
    has_alpha
}

/// True when every whitespace-delimited word starts with an uppercase
/// letter and contains no further uppercase letters. Words without a
/// leading letter (bare numbers, punctuation) disqualify the line.
fn is_title_case(line: &str) -> bool {
    let mut saw_word = false;
    for word in line.split_whitespace() {
        saw_word = true;
        let mut chars = word.chars();
        match chars.next() {
            Some(first) if first.is_uppercase() => {
                if chars.any(|c| c.is_uppercase()) {
                    return false;
                }
            }
            _ => return false,
        }
    }
    saw_word
}

/// Splits text into cleaned lines and assigns each line to the matching
/// category buckets.
///
/// Lines are obtained by splitting on line breaks, trimming, and discarding
/// blank results; their order is preserved within each bucket. Every named
/// category receives a bucket, empty if nothing matched. Duplicate category
/// names collapse into a single bucket. Empty input text yields all-empty
/// buckets, and an empty category list yields an empty mapping; neither is
/// an error.
pub fn categorize_lines<S: AsRef<str>>(
    text: &str,
    categories: &[S],
) -> HashMap<String, Vec<String>> {
    let mut buckets: HashMap<String, Vec<String>> = categories
        .iter()
        .map(|category| (category.as_ref().to_string(), Vec::new()))
        .collect();

    let lines = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty());

    for (index, line) in lines.enumerate() {
        for rule in &LINE_RULES {
            if !(rule.applies)(index, line) {
                continue;
            }
            if let Some(bucket) = buckets.get_mut(rule.category) {
                bucket.push(line.to_string());
            }
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CATEGORIES: [&str; 5] = [
        CATEGORY_HEADER,
        CATEGORY_DATES,
        CATEGORY_AMOUNTS,
        CATEGORY_ENTITIES,
        CATEGORY_CONTENT,
    ];

    #[test]
    fn test_receipt_lines_land_in_expected_buckets() {
        let text = "John Smith\n01/02/2024\nTotal: 42.50";
        let result = categorize_lines(text, &ALL_CATEGORIES);

        assert_eq!(result[CATEGORY_HEADER], vec!["John Smith"]);
        assert_eq!(result[CATEGORY_DATES], vec!["01/02/2024"]);
        assert_eq!(result[CATEGORY_AMOUNTS], vec!["Total: 42.50"]);
        assert_eq!(result[CATEGORY_ENTITIES], vec!["John Smith"]);
        assert_eq!(
            result[CATEGORY_CONTENT],
            vec!["John Smith", "01/02/2024", "Total: 42.50"]
        );
    }

    #[test]
    fn test_empty_text_yields_empty_buckets() {
        let result = categorize_lines("", &ALL_CATEGORIES);
        assert_eq!(result.len(), ALL_CATEGORIES.len());
        assert!(result.values().all(|lines| lines.is_empty()));
    }

    #[test]
    fn test_empty_category_list_yields_empty_mapping() {
        let result = categorize_lines::<&str>("Some text", &[]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_unknown_category_stays_empty() {
        let result = categorize_lines("Hello World", &["Footnotes", CATEGORY_CONTENT]);
        assert!(result["Footnotes"].is_empty());
        assert_eq!(result[CATEGORY_CONTENT], vec!["Hello World"]);
    }

    #[test]
    fn test_duplicate_category_names_collapse() {
        let result = categorize_lines("Hello World", &[CATEGORY_CONTENT, CATEGORY_CONTENT]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[CATEGORY_CONTENT], vec!["Hello World"]);
    }

    #[test]
    fn test_blank_lines_are_discarded() {
        let text = "Title\n\n   \nBody";
        let result = categorize_lines(text, &[CATEGORY_CONTENT]);
        assert_eq!(result[CATEGORY_CONTENT], vec!["Title", "Body"]);
    }

    #[test]
    fn test_dash_separated_dates_match() {
        let result = categorize_lines("due 3-12-24 at noon", &[CATEGORY_DATES]);
        assert_eq!(result[CATEGORY_DATES], vec!["due 3-12-24 at noon"]);
    }

    #[test]
    fn test_date_is_not_a_numeric_token() {
        let result = categorize_lines("01/02/2024", &[CATEGORY_AMOUNTS]);
        assert!(result[CATEGORY_AMOUNTS].is_empty());
    }

    #[test]
    fn test_uppercase_line_is_an_entity() {
        let result = categorize_lines("first\nACME CORP", &[CATEGORY_ENTITIES]);
        assert_eq!(result[CATEGORY_ENTITIES], vec!["ACME CORP"]);
    }

    #[test]
    fn test_is_title_case() {
        assert!(is_title_case("John Smith"));
        assert!(!is_title_case("John smith"));
        assert!(!is_title_case("Total: 42.50"));
        assert!(!is_title_case("McDonald"));
    }

    #[test]
    fn test_is_all_uppercase() {
        assert!(is_all_uppercase("INVOICE 2024"));
        assert!(!is_all_uppercase("Invoice"));
        assert!(!is_all_uppercase("01/02/2024"));
    }

    #[test]
    fn test_line_order_preserved_in_buckets() {
        let text = "Alpha Beta\nGamma Delta\nEpsilon Zeta";
        let result = categorize_lines(text, &[CATEGORY_ENTITIES]);
        assert_eq!(
            result[CATEGORY_ENTITIES],
            vec!["Alpha Beta", "Gamma Delta", "Epsilon Zeta"]
        );
    }
}
