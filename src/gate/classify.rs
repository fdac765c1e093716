use std::sync::LazyLock;

use super::lexicon::LexiconName;
use super::matcher::{compile_substring, compile_suffix_pattern, compile_whole_word, Matcher};
use super::PatternError;

/// Process-wide classifier, compiled on first use and never mutated.
static CLASSIFIER: LazyLock<Result<DomainClassifier, PatternError>> =
    LazyLock::new(DomainClassifier::compile);

/// Minimum distinct symptom words needed when nothing stronger matched.
pub const MIN_DISTINCT_SYMPTOM_WORDS: usize = 2;

/// Heuristic domain predicates over free text.
///
/// Each predicate is a short-circuiting OR of independent signals. All
/// branches are pure, so evaluation order only affects cost.
#[derive(Debug)]
pub struct DomainClassifier {
    medical: Matcher,
    generic_symptom: Matcher,
    food: Matcher,
    food_suffix: Matcher,
    food_names: Matcher,
    symptom_words: Matcher,
    contextual_phrases: Matcher,
    possessive_markers: Matcher,
    body_parts: Matcher,
    advisory: Matcher,
    nutrition: Matcher,
}

impl DomainClassifier {
    /// Compile every matcher from the static lexicons.
    pub fn compile() -> Result<Self, PatternError> {
        Ok(Self {
            medical: compile_whole_word(LexiconName::MedicalVocabulary.terms())?,
            generic_symptom: compile_whole_word(LexiconName::GenericSymptomPatterns.terms())?,
            food: compile_whole_word(LexiconName::FoodVocabulary.terms())?,
            food_suffix: compile_suffix_pattern(LexiconName::GenericFoodSuffixes.terms())?,
            food_names: compile_substring(LexiconName::FoodNames.terms())?,
            symptom_words: compile_whole_word(LexiconName::SymptomWords.terms())?,
            contextual_phrases: compile_substring(LexiconName::ContextualPhrases.terms())?,
            possessive_markers: compile_substring(LexiconName::PossessiveMarkers.terms())?,
            body_parts: compile_substring(LexiconName::BodyParts.terms())?,
            advisory: compile_substring(LexiconName::AdvisoryKeywords.terms())?,
            nutrition: compile_substring(LexiconName::NutritionKeywords.terms())?,
        })
    }

    /// The shared instance, compiling it on first call.
    pub fn try_global() -> Result<&'static DomainClassifier, &'static PatternError> {
        (*CLASSIFIER).as_ref()
    }

    /// The shared instance. Call [`Self::try_global`] once at startup so a
    /// bad lexicon is reported there rather than here.
    pub fn global() -> &'static DomainClassifier {
        match Self::try_global() {
            Ok(classifier) => classifier,
            Err(e) => panic!("Invalid domain gate lexicon: {e}"),
        }
    }

    /// Every compiled matcher with the lexicon it was built from.
    pub fn matchers(&self) -> [(LexiconName, &Matcher); 11] {
        [
            (LexiconName::MedicalVocabulary, &self.medical),
            (LexiconName::GenericSymptomPatterns, &self.generic_symptom),
            (LexiconName::FoodVocabulary, &self.food),
            (LexiconName::GenericFoodSuffixes, &self.food_suffix),
            (LexiconName::FoodNames, &self.food_names),
            (LexiconName::SymptomWords, &self.symptom_words),
            (LexiconName::ContextualPhrases, &self.contextual_phrases),
            (LexiconName::PossessiveMarkers, &self.possessive_markers),
            (LexiconName::BodyParts, &self.body_parts),
            (LexiconName::AdvisoryKeywords, &self.advisory),
            (LexiconName::NutritionKeywords, &self.nutrition),
        ]
    }

    /// Medical vocabulary or a generic symptom phrase, whole-word.
    pub fn is_medical_domain(&self, text: &str) -> bool {
        self.medical.is_match(text) || self.generic_symptom.is_match(text)
    }

    /// Food vocabulary, a compound food word, a known food name, or a
    /// bare single-token prompt (treated as a food lookup).
    pub fn is_food_domain(&self, text: &str) -> bool {
        self.food.is_match(text)
            || self.food_suffix.is_match(text)
            || self.food_names.is_match(text)
            || is_single_token(text)
    }

    /// Self-reported symptoms.
    ///
    /// 1. anything `is_medical_domain` accepts;
    /// 2. at least two distinct symptom words;
    /// 3. a contextual self-report phrase ("i feel", "je ressens");
    /// 4. a first-person marker together with a body part.
    pub fn is_symptom_domain(&self, text: &str) -> bool {
        self.is_medical_domain(text)
            || self.symptom_words.count_distinct(text) >= MIN_DISTINCT_SYMPTOM_WORDS
            || self.contextual_phrases.is_match(text)
            || (self.possessive_markers.is_match(text) && self.body_parts.is_match(text))
    }

    /// Advice vocabulary that keeps a symptom reply in domain.
    pub fn has_advisory_keyword(&self, text: &str) -> bool {
        self.advisory.is_match(text)
    }

    /// Nutrition vocabulary that keeps a food reply in domain.
    pub fn has_nutrition_keyword(&self, text: &str) -> bool {
        self.nutrition.is_match(text)
    }
}

fn is_single_token(text: &str) -> bool {
    let mut tokens = text.split_whitespace();
    tokens.next().is_some() && tokens.next().is_none()
}

pub fn is_medical_domain(text: &str) -> bool {
    DomainClassifier::global().is_medical_domain(text)
}

pub fn is_food_domain(text: &str) -> bool {
    DomainClassifier::global().is_food_domain(text)
}

pub fn is_symptom_domain(text: &str) -> bool {
    DomainClassifier::global().is_symptom_domain(text)
}
