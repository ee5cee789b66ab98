//! Per-language spellings of the symptom vocabulary.
//!
//! Each table maps a surface spelling to the canonical token it stands for.
//! The normalizer rewrites these spellings into the canonical English form
//! before containment scanning.

use crate::models::{Language, Symptom};

/// A known spelling of a symptom in some language.
pub type Alias = (&'static str, Symptom);

const ENGLISH: &[Alias] = &[
    ("temperature", Symptom::Fever),
    ("head pain", Symptom::Headache),
    ("heart pain", Symptom::ChestPain),
    ("shortness of breath", Symptom::DifficultyBreathing),
    ("breathless", Symptom::DifficultyBreathing),
    ("diarrhoea", Symptom::Diarrhea),
    ("spots", Symptom::Rash),
];

const KANNADA: &[Alias] = &[
    ("ಜ್ವರ", Symptom::Fever),
    ("ತಾಪ", Symptom::Fever),
    ("ಕೆಮ್ಮು", Symptom::Cough),
    ("ರಾಶ್", Symptom::Rash),
    ("ಚರ್ಮದ ಮೇಲೆ ಕಲೆಗಳು", Symptom::Rash),
    ("ನೋವು", Symptom::Pain),
    ("ತಲೆನೋವು", Symptom::Headache),
    ("ಎದೆ ನೋವು", Symptom::ChestPain),
    ("ಹೃದಯ ನೋವು", Symptom::ChestPain),
    ("ಉಸಿರಾಟದ ತೊಂದರೆ", Symptom::DifficultyBreathing),
    ("ಉಸಿರಾಡಲು ಕಷ್ಟ", Symptom::DifficultyBreathing),
];

const TAMIL: &[Alias] = &[
    ("காய்ச்சல்", Symptom::Fever),
    ("இருமல்", Symptom::Cough),
    ("சொறி", Symptom::Rash),
    ("தோல் புள்ளிகள்", Symptom::Rash),
    ("வலி", Symptom::Pain),
    ("தலைவலி", Symptom::Headache),
    ("மார்பு வலி", Symptom::ChestPain),
    ("இதய வலி", Symptom::ChestPain),
    ("மூச்சுத்திணறல்", Symptom::DifficultyBreathing),
    ("சுவாசிக்க சிரமம்", Symptom::DifficultyBreathing),
    ("சூடு", Symptom::Fever),
];

const TELUGU: &[Alias] = &[
    ("జ్వరం", Symptom::Fever),
    ("దగ్గు", Symptom::Cough),
    ("దద్దుర్లు", Symptom::Rash),
    ("చర్మం మీద మచ్చలు", Symptom::Rash),
    ("నొప్పి", Symptom::Pain),
    ("తలనొప్పి", Symptom::Headache),
    ("ఛాతీ నొప్పి", Symptom::ChestPain),
    ("గుండె నొప్పి", Symptom::ChestPain),
    ("శ్వాస తీసుకోవడం కష్టం", Symptom::DifficultyBreathing),
    ("వెచ్చదనం", Symptom::Fever),
];

const HINDI: &[Alias] = &[
    ("बुखार", Symptom::Fever),
    ("तापमान", Symptom::Fever),
    ("खांसी", Symptom::Cough),
    ("दाने", Symptom::Rash),
    ("त्वचा पर चकत्ते", Symptom::Rash),
    ("दर्द", Symptom::Pain),
    ("सिरदर्द", Symptom::Headache),
    ("सीने में दर्द", Symptom::ChestPain),
    ("दिल का दर्द", Symptom::ChestPain),
    ("सांस लेने में कठिनाई", Symptom::DifficultyBreathing),
    ("सांस फूलना", Symptom::DifficultyBreathing),
    ("उल्टी", Symptom::Vomiting),
    ("दस्त", Symptom::Diarrhea),
    ("बेहोश", Symptom::Unconscious),
];

/// Alias table for one language.
pub fn aliases_for(language: Language) -> &'static [Alias] {
    match language {
        Language::English => ENGLISH,
        Language::Kannada => KANNADA,
        Language::Tamil => TAMIL,
        Language::Telugu => TELUGU,
        Language::Hindi => HINDI,
    }
}

/// Aliases consulted for a declared language: its own table, then English.
/// Sorted longest spelling first so compound spellings are rewritten before
/// any shorter spelling they contain.
pub fn resolution_order(language: Language) -> Vec<Alias> {
    let mut aliases: Vec<Alias> = aliases_for(language).to_vec();
    if language != Language::English {
        aliases.extend_from_slice(ENGLISH);
    }
    aliases.sort_by_key(|(spelling, _)| std::cmp::Reverse(spelling.len()));
    aliases
}

/// English surface form, then the first spelling from each other language.
/// Used to build example lists in clarification prompts.
pub fn spellings_of(symptom: Symptom) -> Vec<&'static str> {
    let mut spellings = vec![symptom.as_str()];
    for language in Language::ALL {
        if language == Language::English {
            continue;
        }
        if let Some((spelling, _)) = aliases_for(language)
            .iter()
            .find(|(_, target)| *target == symptom)
        {
            spellings.push(*spelling);
        }
    }
    spellings
}
