//! Keyword classifier deciding whether a product title names a yogurt.
//!
//! Matching is a substring search over the title lowercased one character at
//! a time. An exclusion term anywhere in the title overrides any yogurt term.

pub const YOGURT_TERMS: &[&str] = &["yogurt", "skyr", "yoghurt"];

/// Titles containing any of these are never yogurt. Note that "base" also
/// matches inside longer words such as "database".
pub const EXCLUSION_TERMS: &[&str] = &[
    "kefir",
    "alternative",
    "dairy-free",
    "dairy free",
    "non-dairy",
    "almondmilk",
    "cashewmilk",
    "coconut",
    "powder puff",
    "cushion puff",
    "drinkable",
    "strainer",
    "base",
    "starter culture",
    "extract",
];

/// Which terms matched a title. Each field holds the first match in list order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classification {
    pub yogurt_term: Option<&'static str>,
    pub exclusion_term: Option<&'static str>,
}

impl Classification {
    pub fn is_yogurt(&self) -> bool {
        self.yogurt_term.is_some() && self.exclusion_term.is_none()
    }
}

pub fn classify(title: &str) -> Classification {
    let title = fold_case(title);

    Classification {
        yogurt_term: first_match(&title, YOGURT_TERMS),
        exclusion_term: first_match(&title, EXCLUSION_TERMS),
    }
}

pub fn is_yogurt_product(title: &str) -> bool {
    classify(title).is_yogurt()
}

/// Simple per-character lowercase mapping: each char maps to exactly one char,
/// so `İ` becomes `i` and `Σ` always becomes `σ`.
fn fold_case(text: &str) -> String {
    text.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

fn first_match(haystack: &str, terms: &'static [&'static str]) -> Option<&'static str> {
    terms.iter().copied().find(|term| haystack.contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yogurt_terms_match_case_insensitively() {
        assert!(is_yogurt_product("Chobani Plain Yogurt"));
        assert!(is_yogurt_product("Siggi's Skyr"));
        assert!(is_yogurt_product("GREEK YOGHURT"));
        assert!(is_yogurt_product("frozen yogurt bar"));
    }

    #[test]
    fn test_titles_without_yogurt_terms() {
        assert!(!is_yogurt_product("Whole Milk"));
        assert!(!is_yogurt_product(""));
        assert!(!is_yogurt_product("Cheddar Cheese"));
    }

    #[test]
    fn test_every_exclusion_term_dominates() {
        for term in EXCLUSION_TERMS {
            let title = format!("Plain Yogurt {}", term.to_uppercase());
            assert!(!is_yogurt_product(&title), "expected '{}' to be excluded", title);
        }
    }

    #[test]
    fn test_coconut_yogurt_alternative() {
        let classification = classify("Coconut Yogurt Alternative");

        assert_eq!(classification.yogurt_term, Some("yogurt"));
        // "alternative" precedes "coconut" in the exclusion list.
        assert_eq!(classification.exclusion_term, Some("alternative"));
        assert!(!classification.is_yogurt());
    }

    #[test]
    fn test_base_matches_inside_longer_words() {
        assert!(!is_yogurt_product("Yogurt Database Edition"));
        assert!(!is_yogurt_product("Baseline Skyr"));
    }

    #[test]
    fn test_exclusion_without_yogurt_term() {
        let classification = classify("Kefir Cultured Milk");
        assert_eq!(classification.yogurt_term, None);
        assert_eq!(classification.exclusion_term, Some("kefir"));
        assert!(!classification.is_yogurt());
    }

    #[test]
    fn test_unicode_lowercasing() {
        assert!(is_yogurt_product("ÉPICE YOGURT"));
        assert!(!is_yogurt_product("Ÿ YOGURT DAIRY FREE"));
    }

    #[test]
    fn test_dotted_capital_i_folds_to_plain_i() {
        assert_eq!(fold_case("KEFİR"), "kefir");
        assert!(!is_yogurt_product("YOGURT KEFİR"));
        assert!(!is_yogurt_product("DAİRY FREE YOGHURT"));
    }

    #[test]
    fn test_final_sigma_folds_without_context() {
        assert_eq!(fold_case("ΣΚΥΡ ΣΚΥΡΣ"), "σκυρ σκυρσ");
    }
}
