//! Response text for each decision tier.

use super::aliases;
use super::knowledge::KnowledgeEntry;
use crate::models::{Language, Symptom, SymptomSet};

/// Fixed emergency directive (English). Every localized variant carries
/// the same ambulance number.
pub const EMERGENCY_DIRECTIVE: &str =
    "🚨 EMERGENCY DETECTED\n\nCall 108 immediately!\nGo to nearest hospital NOW.";

const EMERGENCY_DISCLAIMER: &str =
    "⚠️ This is NOT a medical diagnosis. Emergency services required.";

const RETRIEVAL_DISCLAIMER: &str =
    "⚠️ Disclaimer: This is NOT a medical diagnosis. Please consult a doctor for proper evaluation.";

/// Localized emergency directive for the rule override tier.
pub fn emergency_directive(language: Language) -> &'static str {
    match language {
        Language::English => EMERGENCY_DIRECTIVE,
        Language::Kannada => {
            "🚨 ತುರ್ತು ಪರಿಸ್ಥಿತಿ\n\nತಕ್ಷಣ 108 ಗೆ ಕರೆ ಮಾಡಿ!\nಹತ್ತಿರದ ಆಸ್ಪತ್ರೆಗೆ ತಕ್ಷಣ ಹೋಗಿ."
        }
        Language::Tamil => {
            "🚨 அவசரநிலை கண்டறியப்பட்டது\n\nஉடனே 108 க்கு அழைக்கவும்!\nஅருகிலுள்ள மருத்துவமனைக்கு இப்போதே செல்லவும்."
        }
        Language::Telugu => {
            "🚨 అత్యవసర పరిస్థితి\n\nవెంటనే 108కి కాల్ చేయండి!\nసమీపంలోని ఆసుపత్రికి ఇప్పుడే వెళ్లండి."
        }
        Language::Hindi => "🚨 आपातकालीन स्थिति\n\nतुरंत 108 पर कॉल करें!\nनिकटतम अस्पताल अभी जाएं.",
    }
}

/// Full response for the rule override tier.
pub fn emergency_response(language: Language, detected: &SymptomSet) -> String {
    format!(
        "{}\n\nDetected: {}\n\n{}",
        emergency_directive(language),
        detected.display_list(),
        EMERGENCY_DISCLAIMER
    )
}

/// Clarification prompt for the fallback tier, with example spellings.
pub fn fallback_response(language: Language) -> String {
    let prompt = match language {
        Language::English => {
            "I understand you need health information. Could you describe your symptoms more specifically?"
        }
        Language::Kannada => "ದಯವಿಟ್ಟು ನಿಮ್ಮ ರೋಗಲಕ್ಷಣಗಳನ್ನು ಹೆಚ್ಚು ನಿರ್ದಿಷ್ಟವಾಗಿ ವಿವರಿಸಿ.",
        Language::Tamil => "உங்கள் அறிகுறிகளை இன்னும் தெளிவாக விவரிக்கவும்.",
        Language::Telugu => "దయచేసి మీ లక్షణాలను మరింత స్పష్టంగా వివరించండి.",
        Language::Hindi => "कृपया अपने लक्षणों का और स्पष्ट रूप से वर्णन करें।",
    };

    let examples = [Symptom::Fever, Symptom::Cough]
        .into_iter()
        .flat_map(aliases::spellings_of)
        .collect::<Vec<_>>()
        .join(", ");

    format!("{prompt}\n\nExamples: {examples}")
}

/// Response assembled from a knowledge entry for the retrieval tier.
/// Advice follows `language` where the entry carries a translation.
pub fn retrieval_response(
    detected: &SymptomSet,
    entry: &KnowledgeEntry,
    language: Language,
    location_label: &str,
) -> String {
    let mut response = format!("Based on your symptoms: {}\n\n", detected.display_list());

    if let Some(syndrome) = &entry.syndrome {
        response.push_str(&format!("🔬 Syndromic Classification: {syndrome}\n\n"));
    }

    response.push_str("Possible conditions to be aware of:\n");
    for condition in &entry.conditions {
        response.push_str(&format!("• {condition}\n"));
    }

    response.push_str(&format!(
        "\n💡 Recommended Actions:\n{}\n",
        entry.advice_for(language)
    ));
    response.push_str(&format!("\n🛡️ Prevention:\n{}\n", entry.prevention));
    response.push_str(&format!(
        "\n📍 Nearest Health Center:\nPrimary Health Center, {location_label}\n"
    ));
    response.push_str(&format!("\n{RETRIEVAL_DISCLAIMER}"));

    response
}
