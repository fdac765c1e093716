//! Compiled matchers built once from the static lexicons.
//!
//! Three matching modes, all case-insensitive with Unicode word semantics:
//! - `WholeWord`: term bounded by `\b` on both sides. Backed by a
//!   `RegexSet` so the number of distinct terms present can be counted.
//!   A trailing `*` turns the term into a word prefix (`médic*` matches
//!   `médication`, `médicinal`).
//! - `Substring`: term anywhere in the text (multi-word phrases, food names).
//! - `SuffixPattern`: a word of at least one character followed by one of
//!   the suffixes (`seafood`, `coconut`, `blueberry`).

use regex::{Regex, RegexBuilder, RegexSet, RegexSetBuilder};

use super::PatternError;

#[derive(Debug, Clone)]
pub enum Matcher {
    WholeWord(RegexSet),
    Substring(Regex),
    SuffixPattern(Regex),
}

impl Matcher {
    /// True if any term of the lexicon occurs in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Matcher::WholeWord(set) => set.is_match(text),
            Matcher::Substring(re) | Matcher::SuffixPattern(re) => re.is_match(text),
        }
    }

    /// Number of distinct lexicon terms found in `text`.
    ///
    /// Whole-word matchers count every term independently, so overlapping
    /// terms ("sore" and "sore throat") both count. The single-regex modes
    /// cannot tell terms apart and report presence as 0 or 1.
    pub fn count_distinct(&self, text: &str) -> usize {
        match self {
            Matcher::WholeWord(set) => set.matches(text).iter().count(),
            Matcher::Substring(re) | Matcher::SuffixPattern(re) => usize::from(re.is_match(text)),
        }
    }

    pub fn mode(&self) -> &'static str {
        match self {
            Matcher::WholeWord(_) => "whole-word",
            Matcher::Substring(_) => "substring",
            Matcher::SuffixPattern(_) => "suffix-pattern",
        }
    }
}

/// Compile a lexicon into a whole-word matcher. Duplicate terms collapse.
pub fn compile_whole_word(terms: &[&str]) -> Result<Matcher, PatternError> {
    let patterns: Vec<String> = distinct(terms)?
        .into_iter()
        .map(|t| match t.strip_suffix('*') {
            Some(stem) => format!(r"\b{}\w*", regex::escape(stem)),
            None => format!(r"\b{}\b", regex::escape(t)),
        })
        .collect();
    let set = RegexSetBuilder::new(&patterns)
        .case_insensitive(true)
        .build()?;
    Ok(Matcher::WholeWord(set))
}

/// Compile a lexicon into a substring matcher.
pub fn compile_substring(terms: &[&str]) -> Result<Matcher, PatternError> {
    let alternation = distinct(terms)?
        .into_iter()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|");
    let re = RegexBuilder::new(&format!("(?:{alternation})"))
        .case_insensitive(true)
        .build()?;
    Ok(Matcher::Substring(re))
}

/// Compile word endings into a suffix matcher: `\b\w+(?:s1|s2|...)\b`.
pub fn compile_suffix_pattern(suffixes: &[&str]) -> Result<Matcher, PatternError> {
    let alternation = distinct(suffixes)?
        .into_iter()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|");
    let re = RegexBuilder::new(&format!(r"\b\w+(?:{alternation})\b"))
        .case_insensitive(true)
        .build()?;
    Ok(Matcher::SuffixPattern(re))
}

/// Trimmed, lower-cased, de-duplicated terms in first-seen order.
fn distinct<'a>(terms: &[&'a str]) -> Result<Vec<&'a str>, PatternError> {
    let mut out: Vec<&'a str> = Vec::with_capacity(terms.len());
    for &term in terms {
        let term = term.trim();
        if term.is_empty() {
            return Err(PatternError::BlankTerm);
        }
        if !out.iter().any(|t| t.to_lowercase() == term.to_lowercase()) {
            out.push(term);
        }
    }
    if out.is_empty() {
        return Err(PatternError::EmptyLexicon);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_word_respects_boundaries() {
        let m = compile_whole_word(&["pain", "head"]).unwrap();
        assert!(m.is_match("I am in pain."));
        assert!(m.is_match("my HEAD, again"));
        assert!(!m.is_match("painting the headboard"));
    }

    #[test]
    fn whole_word_handles_accented_terms() {
        let m = compile_whole_word(&["fièvre", "tête"]).unwrap();
        assert!(m.is_match("J'ai de la FIÈVRE depuis hier"));
        assert!(m.is_match("mal à la tête"));
        assert!(!m.is_match("têtes"));
    }

    #[test]
    fn whole_word_star_term_matches_prefix() {
        let m = compile_whole_word(&["médic*", "pain"]).unwrap();
        for text in ["la médication", "un produit médicinal", "MÉDICALEMENT parlant", "médic"] {
            assert!(m.is_match(text), "{text}");
        }
        assert!(!m.is_match("paramédical"));
        assert!(!m.is_match("painting"));
    }

    #[test]
    fn whole_word_counts_distinct_terms() {
        let m = compile_whole_word(&["sore", "sore throat", "cough", "cough"]).unwrap();
        assert_eq!(m.count_distinct("sore throat and a cough, cough"), 3);
        assert_eq!(m.count_distinct("nothing here"), 0);
    }

    #[test]
    fn substring_matches_inside_words() {
        let m = compile_substring(&["i feel", "salmon"]).unwrap();
        assert!(m.is_match("Yesterday I FEEL weird"));
        assert!(m.is_match("smokedsalmon"));
        assert!(!m.is_match("feeling fine"));
    }

    #[test]
    fn substring_escapes_metacharacters() {
        let m = compile_substring(&["j'ai des", "a.b"]).unwrap();
        assert!(m.is_match("J'ai des douleurs"));
        assert!(m.is_match("a.b"));
        assert!(!m.is_match("axb"));
    }

    #[test]
    fn suffix_requires_a_prefix() {
        let m = compile_suffix_pattern(&["berry", "food", "nut"]).unwrap();
        assert!(m.is_match("I love blueberry pie"));
        assert!(m.is_match("Seafood tonight"));
        assert!(m.is_match("coconut"));
        assert!(!m.is_match("berry"));
        assert!(!m.is_match("food"));
        assert!(!m.is_match("nutmeg"));
    }

    #[test]
    fn regex_modes_count_presence_only() {
        let m = compile_suffix_pattern(&["berry"]).unwrap();
        assert_eq!(m.count_distinct("Strawberry, strawberry and blueberry"), 1);
        assert_eq!(m.count_distinct("plain toast"), 0);
    }

    #[test]
    fn empty_lexicon_is_a_compile_error() {
        assert!(matches!(compile_substring(&[]), Err(PatternError::EmptyLexicon)));
        assert!(matches!(compile_whole_word(&["ok", "  "]), Err(PatternError::BlankTerm)));
    }

    #[test]
    fn mode_names() {
        assert_eq!(compile_whole_word(&["a"]).unwrap().mode(), "whole-word");
        assert_eq!(compile_substring(&["a"]).unwrap().mode(), "substring");
        assert_eq!(compile_suffix_pattern(&["a"]).unwrap().mode(), "suffix-pattern");
    }
}
