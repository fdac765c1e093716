use std::sync::LazyLock;

use regex::Regex;

use super::types::ChatType;

/// Word = maximal run of Unicode word characters; punctuation never counts.
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("Invalid word regex"));

/// Structural thresholds applied before any domain check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRule {
    /// Minimum length in characters (Unicode scalar values).
    pub min_length: Option<usize>,
    /// Minimum number of words.
    pub min_words: Option<usize>,
    /// Returned verbatim when the prompt fails either threshold.
    pub message: &'static str,
}

impl ValidationRule {
    /// Reference rule for a chat type.
    pub fn for_chat_type(chat_type: ChatType) -> &'static ValidationRule {
        match chat_type {
            ChatType::Symptom => &SYMPTOM_RULE,
            ChatType::Explore => &EXPLORE_RULE,
            ChatType::Food => &FOOD_RULE,
            ChatType::Qa => &QA_RULE,
        }
    }
}

const SYMPTOM_RULE: ValidationRule = ValidationRule {
    min_length: None,
    min_words: Some(3),
    message: "❌ Please provide at least 3 words describing your symptoms",
};

const EXPLORE_RULE: ValidationRule = ValidationRule {
    min_length: Some(3),
    min_words: None,
    message: "🔍 Please provide at least 3 characters for your query",
};

// A lone character is never a food name.
const FOOD_RULE: ValidationRule = ValidationRule {
    min_length: Some(2),
    min_words: Some(1),
    message: "🍎 Please enter a food name",
};

const QA_RULE: ValidationRule = ValidationRule {
    min_length: Some(5),
    min_words: None,
    message: "❓ Please provide at least 5 characters for your question",
};

/// True if `text` meets every threshold set on `rule`.
pub fn validate(text: &str, rule: &ValidationRule) -> bool {
    if let Some(min) = rule.min_length {
        if text.chars().count() < min {
            return false;
        }
    }
    if let Some(min) = rule.min_words {
        if count_words(text) < min {
            return false;
        }
    }
    true
}

pub fn count_words(text: &str) -> usize {
    WORD.find_iter(text).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_count_ignores_punctuation() {
        assert_eq!(count_words("head ... ache !!"), 2);
        assert_eq!(count_words("?! -- ..."), 0);
        assert_eq!(count_words("j'ai mal"), 3);
        assert_eq!(count_words("fièvre, toux"), 2);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let rule = ValidationRule {
            min_length: Some(4),
            min_words: None,
            message: "",
        };
        // 3 characters, 6 bytes
        assert!(!validate("éèê", &rule));
        assert!(validate("éèêë", &rule));
    }

    #[test]
    fn both_thresholds_apply_together() {
        let rule = ValidationRule {
            min_length: Some(10),
            min_words: Some(2),
            message: "",
        };
        assert!(!validate("supercalifragilistic", &rule));
        assert!(!validate("a b", &rule));
        assert!(validate("long enough words", &rule));
    }

    #[test]
    fn no_thresholds_accepts_everything() {
        let rule = ValidationRule {
            min_length: None,
            min_words: None,
            message: "",
        };
        assert!(validate("", &rule));
    }

    #[test]
    fn reference_rules() {
        let symptom = ValidationRule::for_chat_type(ChatType::Symptom);
        assert!(!validate("headache and", symptom));
        assert!(validate("headache and fever", symptom));

        let food = ValidationRule::for_chat_type(ChatType::Food);
        assert!(!validate("a", food));
        assert!(!validate("!!", food));
        assert!(validate("fig", food));

        let qa = ValidationRule::for_chat_type(ChatType::Qa);
        assert!(!validate("why?", qa));
        assert!(validate("hello", qa));

        let explore = ValidationRule::for_chat_type(ChatType::Explore);
        assert!(!validate("ok", explore));
        assert!(validate("flu", explore));
    }

    #[test]
    fn every_rule_has_a_message() {
        for t in ChatType::ALL {
            assert!(!ValidationRule::for_chat_type(t).message.is_empty());
        }
    }
}
