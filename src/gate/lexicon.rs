//! Static vocabularies used by the domain gate (English + French).
//!
//! Lists are plain data: nothing here matches text. See `matcher.rs` for
//! the compiled forms. Terms are stored lower-case; matching is
//! case-insensitive regardless. In whole-word lexicons a trailing `*`
//! marks a word prefix.

use std::fmt;
use std::str::FromStr;

use super::LexiconError;

/// Every registered vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexiconName {
    MedicalVocabulary,
    FoodVocabulary,
    FoodNames,
    SymptomWords,
    BodyParts,
    ContextualPhrases,
    PossessiveMarkers,
    GenericFoodSuffixes,
    GenericSymptomPatterns,
    AdvisoryKeywords,
    NutritionKeywords,
}

impl LexiconName {
    pub const ALL: [LexiconName; 11] = [
        LexiconName::MedicalVocabulary,
        LexiconName::FoodVocabulary,
        LexiconName::FoodNames,
        LexiconName::SymptomWords,
        LexiconName::BodyParts,
        LexiconName::ContextualPhrases,
        LexiconName::PossessiveMarkers,
        LexiconName::GenericFoodSuffixes,
        LexiconName::GenericSymptomPatterns,
        LexiconName::AdvisoryKeywords,
        LexiconName::NutritionKeywords,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LexiconName::MedicalVocabulary => "medical-vocabulary",
            LexiconName::FoodVocabulary => "food-vocabulary",
            LexiconName::FoodNames => "food-names",
            LexiconName::SymptomWords => "symptom-words",
            LexiconName::BodyParts => "body-parts",
            LexiconName::ContextualPhrases => "contextual-phrases",
            LexiconName::PossessiveMarkers => "possessive-markers",
            LexiconName::GenericFoodSuffixes => "generic-food-suffixes",
            LexiconName::GenericSymptomPatterns => "generic-symptom-patterns",
            LexiconName::AdvisoryKeywords => "advisory-keywords",
            LexiconName::NutritionKeywords => "nutrition-keywords",
        }
    }

    /// The terms of this lexicon, in declaration order.
    pub fn terms(&self) -> &'static [&'static str] {
        match self {
            LexiconName::MedicalVocabulary => MEDICAL_VOCABULARY,
            LexiconName::FoodVocabulary => FOOD_VOCABULARY,
            LexiconName::FoodNames => FOOD_NAMES,
            LexiconName::SymptomWords => SYMPTOM_WORDS,
            LexiconName::BodyParts => BODY_PARTS,
            LexiconName::ContextualPhrases => CONTEXTUAL_PHRASES,
            LexiconName::PossessiveMarkers => POSSESSIVE_MARKERS,
            LexiconName::GenericFoodSuffixes => GENERIC_FOOD_SUFFIXES,
            LexiconName::GenericSymptomPatterns => GENERIC_SYMPTOM_PATTERNS,
            LexiconName::AdvisoryKeywords => ADVISORY_KEYWORDS,
            LexiconName::NutritionKeywords => NUTRITION_KEYWORDS,
        }
    }
}

impl fmt::Display for LexiconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LexiconName {
    type Err = LexiconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LexiconName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| LexiconError::UnknownLexicon(s.to_string()))
    }
}

/// Look up a lexicon by its registered name.
pub fn get_lexicon(name: &str) -> Result<&'static [&'static str], LexiconError> {
    name.parse::<LexiconName>().map(|n| n.terms())
}

// ═══════════════════════════════════════════════════════════
// Medical vocabulary (whole-word)
// ═══════════════════════════════════════════════════════════

const MEDICAL_VOCABULARY: &[&str] = &[
    // General
    "médic*", "medical", "health", "santé",
    "illness", "maladie", "condition", "symptom", "symptôme",
    // Sensations
    "douleur", "pain", "fièvre", "fever", "toux", "cough", "nausée", "nausea",
    "vertige", "dizziness", "fatigue", "tiredness", "vomissement", "vomit",
    // Systems and organs
    "cardiaque", "cardiac", "cœur", "heart", "respiratoire", "respiratory",
    "poumon", "lung", "digestif", "digestive", "estomac", "stomach", "foie",
    "liver", "rein", "kidney", "muscle", "muscular", "os", "bone", "peau",
    "skin", "yeux", "eyes", "oreille", "ear", "nez", "nose", "gorge", "throat",
    "dent", "tooth", "cerveau", "brain", "colonne", "spine", "tête", "head",
    // Conditions
    "cancer", "diabète", "diabetes", "asthme", "asthma", "hypertension",
    "cholestérol", "cholesterol", "dépression", "depression", "anxiété",
    "anxiety", "arthrite", "arthritis", "alzheimer", "parkinson", "épilepsie",
    "epilepsy", "infection", "inflammation", "blessure", "injury", "fracture",
    "brûlure", "burn", "allergie", "allergy", "éruption", "rush",
    // Care
    "médicament", "drug", "traitement", "treatment", "thérapie",
    "therapy", "vaccin", "vaccine", "chirurgie", "surgery", "diagnostic",
    "prévention", "prevention", "rétablissement", "recovery", "réhabilitation",
    "rehab",
    // People and places
    "médecin", "doctor", "infirmier", "nurse", "hôpital", "hospital",
    "clinique", "clinic", "urgence", "emergency", "généraliste", "gp",
    "spécialiste", "specialist", "dermatologue", "dermatologist",
    "cardiologue", "cardiologist", "neurologue", "neurologist", "pédiatre",
    "pediatrician", "gynécologue", "gynecologist", "psychiatre", "psychiatrist",
];

/// Whole-word symptom phrases that count as medical evidence on their own.
const GENERIC_SYMPTOM_PATTERNS: &[&str] = &[
    "ache", "pain", "sick", "nauseous", "throbbing", "sharp", "dull", "burning",
    "tenderness", "sensitivity", "discomfort", "pressure", "tingling",
    "pins and needles", "hot flash", "cold sweat", "night sweat",
    "loss of appetite", "increased thirst", "frequent urination",
    "difficulty swallowing", "joint stiffness", "limited mobility",
    "difficulty breathing", "chest tightness", "racing pain", "stabbing pain",
    "aching pain", "persistent cough", "blood in stool", "blood in urine",
];

// ═══════════════════════════════════════════════════════════
// Symptom self-report
// ═══════════════════════════════════════════════════════════

const SYMPTOM_WORDS: &[&str] = &[
    // English
    "headache", "migraine", "dizziness", "nausea", "vomit", "fatigue", "fever",
    "chills", "cough", "pain", "cramps", "rash", "itch", "swelling", "numbness",
    "weakness", "tiredness", "sore", "stiff", "shortness", "breath", "wheezing",
    "diarrhea", "constipation", "bleeding", "discharge", "palpitations",
    "anxiety", "depression", "insomnia", "drowsiness", "shivering", "shaking",
    "tremors", "congestion", "sneezing", "runny nose", "sore throat",
    "heartburn", "indigestion", "bloating", "gas", "urination", "dehydration",
    "appetite", "hunger", "thirst", "weight", "vision", "hearing", "taste",
    "smell", "balance", "coordination", "memory", "concentration", "confusion",
    "mood", "irritability", "agitation",
    // French
    "migraine", "vertige", "nausée", "vomissement", "fatigue", "fièvre",
    "frissons", "toux", "douleur", "crampe", "éruption", "démangeaison",
    "gonflement", "engourdissement", "faiblesse", "raideur", "essoufflement",
    "respiration", "sifflement", "diarrhée", "constipation", "saignement",
    "écoulement", "palpitation", "anxiété", "dépression", "insomnie",
    "somnolence", "tremblement", "frisson", "congestion", "éternuement",
    "nez qui coule", "mal de gorge", "brûlure d'estomac", "indigestion",
    "ballonnement", "gaz", "urination", "déshydratation", "appétit", "faim",
    "soif", "poids", "vision", "audition", "goût", "odorat", "équilibre",
    "coordination", "mémoire", "concentration", "confusion", "humeur",
    "irritabilité", "agitation",
];

const CONTEXTUAL_PHRASES: &[&str] = &[
    "i feel", "i am experiencing", "i have been having", "suffering from",
    "bothering me", "woke up with", "started feeling", "having trouble with",
    "my symptoms are", "i've noticed", "recently developed", "for the past",
    "je ressens", "j'ai des", "je souffre de", "je me plains de", "depuis",
    "mes symptômes", "j'ai remarqué", "j'ai développé", "au cours des",
    "j'ai mal au", "j'ai mal à la", "j'ai des difficultés à", "je ne peux plus",
];

/// First-person markers paired with a body part as evidence of self-report.
const POSSESSIVE_MARKERS: &[&str] = &["my", "i've", "j'ai mal au", "ma"];

const BODY_PARTS: &[&str] = &[
    // English
    "head", "neck", "back", "chest", "stomach", "abdomen", "arm", "leg", "hand",
    "foot", "eye", "ear", "nose", "throat", "skin", "joint", "muscle", "bone",
    "heart", "lung", "liver", "kidney", "bladder", "thigh", "knee", "ankle",
    "shoulder", "elbow", "wrist", "finger", "toe", "jaw", "hip", "spine",
    "pelvis", "groin", "buttocks", "calf", "shin", "forearm", "bicep", "tricep",
    "palm", "sole", "heel", "toenail", "fingernail", "scalp", "face",
    "forehead", "temple", "cheek", "chin", "lip", "tongue", "gum", "tooth",
    "uvula", "tonsil", "esophagus", "diaphragm", "rib", "collarbone",
    "shoulder blade", "tailbone", "vein", "artery", "nerve", "tendon",
    "ligament",
    // French
    "tête", "cou", "dos", "poitrine", "ventre", "abdomen", "bras", "jambe",
    "main", "pied", "œil", "oreille", "nez", "gorge", "peau", "articulation",
    "muscle", "os", "cœur", "poumon", "foie", "rein", "vessie", "cuisse",
    "genou", "cheville", "épaule", "coude", "poignet", "doigt", "orteil",
    "mâchoire", "hanche", "colonne vertébrale", "bassin", "aine", "fesse",
    "mollet", "tibia", "avant-bras", "biceps", "triceps", "paume",
    "plante du pied", "talon", "ongle d'orteil", "ongle", "cuir chevelu",
    "visage", "front", "tempe", "joue", "menton", "lèvre", "langue", "gencive",
    "dent", "luette", "amygdale", "œsophage", "diaphragme", "côte", "clavicule",
    "omoplate", "coccyx", "veine", "artère", "nerf", "tendon", "ligament",
];

// ═══════════════════════════════════════════════════════════
// Food and nutrition
// ═══════════════════════════════════════════════════════════

const FOOD_VOCABULARY: &[&str] = &[
    "food", "aliment", "nourriture", "nutrition", "nutritif", "nutritional",
    "valeur nutritive", "composition", "ingrédient", "ingredient", "régime",
    "diet", "calorie", "meal", "repas", "cuisine", "cooking", "recette",
    "recipe", "manger", "eat", "consommer", "consume", "fruit", "fruits",
    "légume", "vegetable", "viande", "meat", "poisson", "fish",
    "produit laitier", "dairy", "céréale", "grain", "légumineuse", "legume",
    "noix", "nut", "graine", "seed", "protéine", "protein", "glucide", "carb",
    "carbohydrate", "lipide", "fat", "vitamine", "vitamin", "minéral",
    "mineral", "fibre", "fiber", "épice", "spice", "herbe", "herb", "sucre",
    "sugar", "sel", "salt", "huile", "oil", "beurre", "butter", "apple",
    "pomme", "banana", "banane", "orange", "tomato", "tomate", "potato",
    "patate", "riz", "rice", "pâtes", "pasta", "pain", "bread", "fromage",
    "cheese", "lait", "milk", "œuf", "egg", "yaourt", "yogurt", "boisson",
    "drink", "eau", "water", "café", "coffee", "thé", "tea",
    "allergie alimentaire", "food allergy", "intolérance", "intolerance",
    "bienfait", "benefit", "sain", "healthy",
];

/// Word endings that mark a compound food name (seafood, coconut, blueberry).
const GENERIC_FOOD_SUFFIXES: &[&str] = &["food", "nut", "seed", "fish", "fruit", "berry"];

/// Specific food names, matched as substrings.
const FOOD_NAMES: &[&str] = &[
    "scallop", "pétoncle", "almond", "amande", "quinoa", "avocado", "avocat",
    "salmon", "saumon", "tuna", "thon", "shrimp", "crevette", "lobster",
    "homard", "oyster", "huître", "mussel", "moule", "octopus", "poulpe",
    "squid", "calamar", "beef", "bœuf", "chicken", "poulet", "pork", "porc",
    "lamb", "agneau", "duck", "canard", "turkey", "dinde", "veal", "veau",
    "bacon", "ham", "jambon", "sausage", "saucisse", "rice", "riz", "pasta",
    "pâtes", "noodle", "nouille", "bread", "pain", "baguette", "croissant",
    "cheese", "fromage", "yogurt", "yaourt", "milk", "lait", "cream", "crème",
    "butter", "beurre", "egg", "œuf", "tofu", "tempeh", "seitan", "wheat", "blé",
    "rye", "seigle", "oat", "avoine", "barley", "orge", "corn", "maïs",
    "lentil", "lentille", "bean", "haricot", "pea", "pois", "chickpea",
    "pois chiche", "soy", "soja", "nut", "noix", "peanut", "cacahuète",
    "walnut", "hazelnut", "noisette", "pistachio", "pistache", "cashew",
    "noix de cajou", "pecan", "pécan", "macadamia", "coconut", "noix de coco",
    "pineapple", "ananas", "mango", "mangue", "papaya", "papaye", "kiwi",
    "melon", "watermelon", "pastèque", "grape", "raisin", "lemon", "citron",
    "lime", "citron vert", "orange", "tangerine", "mandarine", "peach", "pêche",
    "plum", "prune", "apricot", "abricot", "cherry", "cerise", "strawberry",
    "fraise", "raspberry", "framboise", "blueberry", "myrtille", "blackberry",
    "mûre", "cranberry", "canneberge", "pomegranate", "grenade", "fig",
    "figue", "date", "datte", "olive", "artichoke", "artichaut", "asparagus",
    "asperge", "broccoli", "brocoli", "cabbage", "chou", "carrot", "carotte",
    "celery", "céleri", "cucumber", "concombre", "eggplant", "aubergine",
    "garlic", "ail", "ginger", "gingembre", "onion", "oignon", "pepper",
    "poivron", "potato", "pomme de terre", "pumpkin", "citrouille", "spinach",
    "épinard", "tomato", "tomate", "zucchini", "courgette", "lettuce", "laitue",
    "mushroom", "champignon", "truffle", "truffe", "basil", "basilic", "thyme",
    "thym", "rosemary", "romarin", "parsley", "persil", "coriander",
    "coriandre", "mint", "menthe", "oregano", "origan", "sage", "sauge", "dill",
    "aneth", "chive", "ciboulette", "vanilla", "vanille", "cinnamon",
    "cannelle", "nutmeg", "noix de muscade", "clove", "clou de girofle",
    "saffron", "safran", "turmeric", "curcuma", "cumin", "paprika", "chili",
    "piment", "honey", "miel", "maple", "érable", "sugar", "sucre", "salt",
    "sel", "poivre", "vinegar", "vinaigre", "oil", "huile", "soy sauce",
    "sauce soja", "mustard", "moutarde", "ketchup", "mayonnaise", "salsa",
    "guacamole",
];

// ═══════════════════════════════════════════════════════════
// Output allow-lists
// ═══════════════════════════════════════════════════════════

/// Adjacent vocabulary that keeps a symptom-chat reply in domain.
const ADVISORY_KEYWORDS: &[&str] = &["advice", "recommend", "suggest", "doctor", "medical attention"];

/// Adjacent vocabulary that keeps a food-chat reply in domain.
const NUTRITION_KEYWORDS: &[&str] = &["nutrition", "calories", "vitamin", "mineral", "protein"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registered_name_resolves() {
        for name in LexiconName::ALL {
            let terms = get_lexicon(name.as_str()).unwrap();
            assert!(!terms.is_empty(), "{name} is empty");
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = get_lexicon("vegetable-colours").unwrap_err();
        assert!(matches!(err, LexiconError::UnknownLexicon(ref n) if n == "vegetable-colours"));
    }

    #[test]
    fn names_round_trip_through_display() {
        for name in LexiconName::ALL {
            assert_eq!(name.to_string().parse::<LexiconName>().unwrap(), name);
        }
    }

    #[test]
    fn order_is_preserved() {
        let terms = get_lexicon("advisory-keywords").unwrap();
        assert_eq!(terms[0], "advice");
        assert_eq!(terms[terms.len() - 1], "medical attention");
    }

    #[test]
    fn terms_are_stored_lower_case() {
        for name in LexiconName::ALL {
            for term in name.terms() {
                assert_eq!(*term, term.to_lowercase(), "{name}: {term}");
            }
        }
    }

    #[test]
    fn lexicons_cover_both_languages() {
        assert!(SYMPTOM_WORDS.contains(&"headache"));
        assert!(SYMPTOM_WORDS.contains(&"démangeaison"));
        assert!(BODY_PARTS.contains(&"knee"));
        assert!(BODY_PARTS.contains(&"genou"));
        assert!(CONTEXTUAL_PHRASES.contains(&"je ressens"));
    }
}
