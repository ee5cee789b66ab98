//! Curated symptom knowledge base.
//!
//! Immutable reference data keyed by canonical symptom-set key. Keys are
//! built from symptom sets, never written by hand, so every key is
//! canonical by construction.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::Symptom::*;
use crate::models::{Language, Symptom, SymptomSet};

/// One curated entry: what a symptom combination may indicate and what to do.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KnowledgeEntry {
    pub conditions: Vec<String>,
    pub advice: String,
    pub emergency: bool,
    /// Present only on multi-symptom combination entries.
    pub syndrome: Option<String>,
    pub prevention: String,
    /// Advice in languages other than English, where curated.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub localized_advice: HashMap<Language, String>,
}

impl KnowledgeEntry {
    /// Advice in `language`, or the English advice when none is curated.
    pub fn advice_for(&self, language: Language) -> &str {
        self.localized_advice
            .get(&language)
            .map(String::as_str)
            .unwrap_or(&self.advice)
    }
}

/// Read-only lookup table. Shareable across threads without locking.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    entries: HashMap<String, KnowledgeEntry>,
}

impl KnowledgeBase {
    /// Build from explicit (symptom set, entry) pairs. A later pair with the
    /// same canonical key replaces an earlier one.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (SymptomSet, KnowledgeEntry)>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(set, entry)| (set.canonical_key(), entry))
                .collect(),
        }
    }

    /// The curated table shipped with the engine.
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN.iter().map(|seed| {
            let key = seed.key();
            let mut entry = seed.entry();
            entry.localized_advice = LOCALIZED_ADVICE
                .iter()
                .filter(|(symptoms, _, _)| {
                    symptoms.iter().copied().collect::<SymptomSet>() == key
                })
                .map(|(_, language, text)| (*language, text.to_string()))
                .collect();
            (key, entry)
        }))
    }

    /// Look up the exact canonical key of `symptoms`.
    pub fn lookup(&self, symptoms: &SymptomSet) -> Option<&KnowledgeEntry> {
        self.entries.get(&symptoms.canonical_key())
    }

    pub fn get(&self, key: &str) -> Option<&KnowledgeEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

// ═══════════════════════════════════════════════════════════
// Curated data
// ═══════════════════════════════════════════════════════════

struct Seed {
    symptoms: &'static [Symptom],
    conditions: &'static [&'static str],
    advice: &'static str,
    emergency: bool,
    syndrome: Option<&'static str>,
    prevention: &'static str,
}

impl Seed {
    fn key(&self) -> SymptomSet {
        self.symptoms.iter().copied().collect()
    }

    fn entry(&self) -> KnowledgeEntry {
        KnowledgeEntry {
            conditions: self.conditions.iter().map(|c| c.to_string()).collect(),
            advice: self.advice.to_string(),
            emergency: self.emergency,
            syndrome: self.syndrome.map(str::to_string),
            prevention: self.prevention.to_string(),
            localized_advice: HashMap::new(),
        }
    }
}

const BUILTIN: &[Seed] = &[
    // Single symptoms
    Seed {
        symptoms: &[Fever],
        conditions: &[
            "Malaria",
            "Dengue",
            "Typhoid",
            "COVID-19",
            "Viral Fever",
            "Influenza",
            "Tuberculosis",
        ],
        advice: "Rest well, drink plenty of fluids (water, ORS), monitor temperature every 4 hours. Take paracetamol for fever. If fever persists beyond 3 days or goes above 103°F, consult doctor immediately.",
        emergency: false,
        syndrome: None,
        prevention: "Use mosquito nets, maintain hygiene, wash hands frequently, get vaccinated",
    },
    Seed {
        symptoms: &[Cough],
        conditions: &[
            "Common Cold",
            "Bronchitis",
            "Pneumonia",
            "Tuberculosis",
            "Asthma",
            "COVID-19",
            "Allergies",
        ],
        advice: "Take steam inhalation, drink warm water, avoid cold drinks. If cough persists beyond 2 weeks or has blood, see doctor immediately.",
        emergency: false,
        syndrome: None,
        prevention: "Avoid smoking, wear mask in polluted areas, maintain good ventilation",
    },
    Seed {
        symptoms: &[Headache],
        conditions: &[
            "Migraine",
            "Tension Headache",
            "Sinusitis",
            "Meningitis",
            "High Blood Pressure",
            "Dengue",
        ],
        advice: "Rest in dark room, stay hydrated, take paracetamol. If severe with neck stiffness or vision problems, seek immediate care.",
        emergency: false,
        syndrome: None,
        prevention: "Reduce stress, sleep well, stay hydrated, limit screen time",
    },
    Seed {
        symptoms: &[Rash],
        conditions: &[
            "Measles",
            "Chickenpox",
            "Dengue",
            "Allergic Reaction",
            "Fungal Infection",
            "Heat Rash",
        ],
        advice: "Keep skin clean and dry, avoid scratching, apply calamine lotion. See doctor if rash spreads or has blisters.",
        emergency: false,
        syndrome: None,
        prevention: "Maintain hygiene, use clean clothes, get vaccinated for measles/chickenpox",
    },
    Seed {
        symptoms: &[Pain],
        conditions: &["Muscle Pain", "Joint Pain", "Arthritis", "Injury", "Dengue", "Chikungunya"],
        advice: "Rest affected area, apply hot/cold compress, take paracetamol. Avoid aspirin if fever present.",
        emergency: false,
        syndrome: None,
        prevention: "Exercise regularly, maintain good posture, stay active",
    },
    Seed {
        symptoms: &[Vomiting],
        conditions: &[
            "Food Poisoning",
            "Gastroenteritis",
            "Viral Infection",
            "Pregnancy",
            "Appendicitis",
        ],
        advice: "Start ORS (oral rehydration solution), avoid solid food for few hours, take small sips of water. If persistent or has blood, see doctor.",
        emergency: false,
        syndrome: None,
        prevention: "Eat fresh food, wash hands before eating, drink clean water",
    },
    Seed {
        symptoms: &[Diarrhea],
        conditions: &[
            "Food Poisoning",
            "Gastroenteritis",
            "Cholera",
            "Dysentery",
            "Viral Infection",
            "Parasites",
        ],
        advice: "Drink plenty of ORS, avoid dairy and spicy food, maintain hygiene. If blood in stool or severe dehydration, go to hospital.",
        emergency: false,
        syndrome: None,
        prevention: "Drink boiled/filtered water, wash hands, eat hygienic food",
    },
    // Emergency symptoms. The rule override answers these before lookup,
    // the entries remain for reference consumers.
    Seed {
        symptoms: &[ChestPain],
        conditions: &["Heart Attack", "Angina", "Cardiac Emergency", "Pulmonary Embolism"],
        advice: "🚨 EMERGENCY: Call 108 immediately. Chew 300mg aspirin if available. Do NOT drive yourself. Go to nearest hospital NOW.",
        emergency: true,
        syndrome: None,
        prevention: "Regular exercise, healthy diet, control blood pressure, quit smoking",
    },
    Seed {
        symptoms: &[DifficultyBreathing],
        conditions: &[
            "Severe Asthma",
            "Heart Failure",
            "COVID-19 Pneumonia",
            "Anaphylaxis",
            "Pulmonary Embolism",
        ],
        advice: "🚨 EMERGENCY: Call 108 immediately. Sit upright, stay calm. Use inhaler if you have asthma. Requires immediate oxygen support.",
        emergency: true,
        syndrome: None,
        prevention: "Avoid triggers, keep rescue inhaler handy, get vaccinated",
    },
    Seed {
        symptoms: &[SevereBleeding],
        conditions: &["Trauma", "Internal Bleeding", "Dengue", "Ulcer", "Blood Disorder"],
        advice: "🚨 EMERGENCY: Call 108 immediately. Apply pressure to wound, elevate injured part. Do not remove embedded objects.",
        emergency: true,
        syndrome: None,
        prevention: "Be careful with sharp objects, maintain platelet count if dengue suspected",
    },
    Seed {
        symptoms: &[Unconscious],
        conditions: &["Stroke", "Heart Attack", "Severe Hypoglycemia", "Head Injury", "Seizure"],
        advice: "🚨 EMERGENCY: Call 108 NOW. Check breathing, place in recovery position. Do NOT give food/water. CPR if trained.",
        emergency: true,
        syndrome: None,
        prevention: "Control diabetes, manage blood pressure, avoid head injuries",
    },
    // Two-symptom combinations
    Seed {
        symptoms: &[Fever, Cough],
        conditions: &[
            "COVID-19",
            "Tuberculosis",
            "Pneumonia",
            "Bronchitis",
            "Influenza",
            "Common Cold",
        ],
        advice: "Isolate yourself, wear mask, get COVID-19 RT-PCR test. Take steam inhalation, paracetamol. If breathing difficulty develops, seek immediate care. If cough persists beyond 2 weeks, get chest X-ray for TB screening.",
        emergency: false,
        syndrome: Some("Respiratory Syndrome"),
        prevention: "Wear masks, maintain ventilation, get vaccinated, avoid crowded places",
    },
    Seed {
        symptoms: &[Fever, Rash],
        conditions: &["Dengue", "Measles", "Chikungunya", "Zika Virus", "Typhoid"],
        advice: "This combination suggests dengue-like illness. Get NS1 antigen and platelet count test immediately. Drink plenty of coconut water and ORS. Monitor for warning signs: bleeding gums, black stools, persistent vomiting. Avoid aspirin and ibuprofen - use only paracetamol.",
        emergency: true,
        syndrome: Some("Dengue-like Syndrome"),
        prevention: "Eliminate stagnant water, use mosquito nets, wear full-sleeve clothes, use repellents",
    },
    Seed {
        symptoms: &[Fever, Headache],
        conditions: &["Meningitis", "Encephalitis", "Typhoid", "Dengue", "Malaria", "Influenza"],
        advice: "Severe headache with fever needs medical attention. If neck stiffness present, go to emergency immediately (meningitis suspect). Take paracetamol, stay in dark room, stay hydrated. Get blood tests done.",
        emergency: false,
        syndrome: Some("CNS Infection Syndrome"),
        prevention: "Get meningitis vaccine, avoid mosquito bites, maintain hygiene",
    },
    Seed {
        symptoms: &[Fever, Pain],
        conditions: &["Dengue", "Chikungunya", "Malaria", "Typhoid", "Leptospirosis"],
        advice: "Muscle/joint pain with fever suggests mosquito-borne illness. Get complete blood count, dengue NS1 test. Drink plenty of fluids, use paracetamol only. Avoid aspirin/ibuprofen. Monitor platelet count daily if dengue suspected.",
        emergency: false,
        syndrome: Some("Arthralgia-Fever Syndrome"),
        prevention: "Use mosquito nets, eliminate breeding sites, wear protective clothing",
    },
    Seed {
        symptoms: &[Vomiting, Diarrhea],
        conditions: &["Gastroenteritis", "Food Poisoning", "Cholera", "Rotavirus", "Norovirus"],
        advice: "Start ORS immediately (1 liter per hour if severe). Avoid solid food for 6 hours. Take small sips of water frequently. Zinc tablets for children. If blood in stool, severe dehydration, or high fever, go to hospital immediately.",
        emergency: false,
        syndrome: Some("Acute Gastroenteritis Syndrome"),
        prevention: "Drink boiled water, wash hands with soap, eat freshly cooked food, maintain food hygiene",
    },
    Seed {
        symptoms: &[Cough, DifficultyBreathing],
        conditions: &[
            "Severe Pneumonia",
            "Asthma Attack",
            "COVID-19",
            "Bronchitis",
            "COPD",
            "Lung Infection",
        ],
        advice: "⚠️ URGENT: This needs immediate medical attention. Go to hospital now. Use inhaler if available. Sit upright, try to stay calm. May need oxygen support and antibiotics.",
        emergency: true,
        syndrome: Some("Severe Respiratory Distress Syndrome"),
        prevention: "Get pneumonia vaccine, avoid smoking, maintain good indoor air quality",
    },
    Seed {
        symptoms: &[Headache, Vomiting],
        conditions: &["Migraine", "Meningitis", "Brain Tumor", "High Blood Pressure", "Concussion"],
        advice: "Severe headache with vomiting can be serious. If with fever and neck stiffness, go to emergency (meningitis). If after head injury, seek immediate care. For migraine: rest in dark, quiet room, take prescribed medication.",
        emergency: false,
        syndrome: Some("Neurological Syndrome"),
        prevention: "Manage stress, sleep regularly, avoid head injuries, control blood pressure",
    },
    Seed {
        symptoms: &[Fever, DifficultyBreathing],
        conditions: &["Severe COVID-19", "Pneumonia", "Tuberculosis", "Lung Infection", "Sepsis"],
        advice: "🚨 EMERGENCY: Call 108 immediately. This indicates severe infection. Needs oxygen support and hospitalization. Do not delay. Check oxygen saturation if pulse oximeter available (below 94% is emergency).",
        emergency: true,
        syndrome: Some("Severe Respiratory Infection Syndrome"),
        prevention: "Get COVID vaccine, pneumonia vaccine, maintain immunity, avoid sick contacts",
    },
    Seed {
        symptoms: &[Rash, Pain],
        conditions: &["Chikungunya", "Dengue", "Shingles", "Rheumatic Fever", "Allergic Reaction"],
        advice: "Rash with joint pain suggests chikungunya or dengue. Get blood tests (CBC, dengue/chikungunya serology). Use paracetamol for pain. Apply calamine lotion on rash. Avoid aspirin/ibuprofen if fever present.",
        emergency: false,
        syndrome: Some("Viral Arthritis Syndrome"),
        prevention: "Mosquito protection, maintain immunity, get adequate rest",
    },
    // Three-symptom combinations
    Seed {
        symptoms: &[Fever, Cough, DifficultyBreathing],
        conditions: &[
            "COVID-19 Pneumonia",
            "Severe Pneumonia",
            "Tuberculosis",
            "ARDS",
            "Lung Infection",
        ],
        advice: "🚨 EMERGENCY: Call 108 NOW. This is severe respiratory illness. Needs immediate hospitalization and oxygen. Check oxygen levels. Sit upright while waiting for ambulance. Do not delay.",
        emergency: true,
        syndrome: Some("Acute Respiratory Distress Syndrome"),
        prevention: "COVID-19 vaccination, pneumonia vaccine, avoid smoking, early treatment of infections",
    },
    Seed {
        symptoms: &[Fever, Headache, Vomiting],
        conditions: &["Meningitis", "Encephalitis", "Brain Infection", "Cerebral Malaria"],
        advice: "🚨 URGENT: Go to emergency immediately. This suggests brain/meningeal infection. Check for neck stiffness. Needs IV antibiotics and hospitalization. Do not wait.",
        emergency: true,
        syndrome: Some("Meningitis Syndrome"),
        prevention: "Meningitis vaccination, avoid mosquito bites, maintain hygiene",
    },
    Seed {
        symptoms: &[Fever, Rash, Pain],
        conditions: &["Dengue", "Chikungunya", "Zika Virus", "Rheumatic Fever"],
        advice: "Classic dengue/chikungunya presentation. Get NS1, dengue IgM, IgG, chikungunya tests. Check platelet count daily. Drink 3-4 liters of fluids. Use paracetamol only. Watch for warning signs: severe abdominal pain, bleeding, restlessness.",
        emergency: true,
        syndrome: Some("Severe Dengue-Chikungunya Syndrome"),
        prevention: "Comprehensive mosquito control, eliminate breeding sites, use repellents",
    },
    Seed {
        symptoms: &[Vomiting, Diarrhea, Fever],
        conditions: &["Gastroenteritis", "Food Poisoning", "Typhoid", "Cholera", "Dysentery"],
        advice: "Severe gastroenteritis needs medical care. Start ORS immediately. If unable to retain fluids or signs of dehydration (dry mouth, no urine, weakness), go to hospital for IV fluids. Get stool test and blood culture if fever high.",
        emergency: false,
        syndrome: Some("Severe Gastroenteritis Syndrome"),
        prevention: "Typhoid vaccination, drink boiled water, maintain strict food hygiene",
    },
    Seed {
        symptoms: &[Cough, Fever, Headache],
        conditions: &[
            "Influenza",
            "COVID-19",
            "Pneumonia",
            "Tuberculosis",
            "Upper Respiratory Infection",
        ],
        advice: "Common flu-like illness. Get COVID test to rule out. Rest at home, isolate from others, wear mask. Take paracetamol for fever/headache. Steam inhalation for cough. Drink warm fluids. See doctor if symptoms worsen or persist beyond 5 days.",
        emergency: false,
        syndrome: Some("Influenza-like Illness"),
        prevention: "Flu vaccination, COVID vaccination, wear masks in crowded places",
    },
];

const LOCALIZED_ADVICE: &[(&[Symptom], Language, &str)] = &[
    (
        &[Fever],
        Language::Kannada,
        "ಚೆನ್ನಾಗಿ ವಿಶ್ರಾಂತಿ ಪಡೆಯಿರಿ, ಸಾಕಷ್ಟು ನೀರು ಕುಡಿಯಿರಿ, ತಾಪಮಾನವನ್ನು ಮೇಲ್ವಿಚಾರಣೆ ಮಾಡಿ.",
    ),
    (
        &[Fever],
        Language::Tamil,
        "நன்றாக ஓய்வெடுங்கள், நிறைய தண்ணீர் குடியுங்கள், வெப்பநிலையை கண்காணியுங்கள்.",
    ),
    (
        &[Fever],
        Language::Telugu,
        "బాగా విశ్రాంతి తీసుకోండి, చాలా నీరు త్రాగండి, ఉష్ణోగ్రతను పర్యవేక్షించండి.",
    ),
    (
        &[Fever],
        Language::Hindi,
        "अच्छी तरह आराम करें, खूब पानी पिएं, तापमान की निगरानी करें।",
    ),
    (
        &[Fever, Rash],
        Language::Kannada,
        "ಇದು ಡೆಂಗ್ಯೂ ತರಹದ ಅನಾರೋಗ್ಯವನ್ನು ಸೂಚಿಸುತ್ತದೆ. ತಕ್ಷಣ NS1 ಪರೀಕ್ಷೆ ಮಾಡಿಸಿ.",
    ),
    (
        &[Fever, Rash],
        Language::Tamil,
        "இது டெங்கு போன்ற நோயைக் குறிக்கிறது. உடனே NS1 பரிசோதனை செய்யவும்.",
    ),
    (
        &[Fever, Rash],
        Language::Telugu,
        "ఇది డెంగ్యూ లాంటి అనారోగ్యాన్ని సూచిస్తుంది. వెంటనే NS1 పరీక్ష చేయించుకోండి.",
    ),
    (
        &[Fever, Rash],
        Language::Hindi,
        "यह डेंगू जैसी बीमारी का संकेत देता है। तुरंत NS1 टेस्ट कराएं।",
    ),
];
