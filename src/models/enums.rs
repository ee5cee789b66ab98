use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid {field} value: {value}")]
    InvalidEnum { field: String, value: String },
}

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// The string form is also the serde form.
macro_rules! str_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::models::enums::ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err($crate::models::enums::ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use str_enum;

str_enum!(
    /// Languages covered by the alias table and the localized directives.
    Language {
        English => "en",
        Kannada => "kn",
        Tamil => "ta",
        Telugu => "te",
        Hindi => "hi",
    }
);

impl Language {
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Kannada,
        Language::Tamil,
        Language::Telugu,
        Language::Hindi,
    ];

    /// Resolve a declared language code. Region suffixes (`hi-IN`) are
    /// ignored; unknown or empty codes resolve to English.
    pub fn resolve(code: &str) -> Self {
        let lower = code.trim().to_lowercase();
        let primary = lower.split(|c: char| c == '-' || c == '_').next().unwrap_or("");

        match primary.parse() {
            Ok(language) => language,
            Err(_) => {
                tracing::debug!(code, "Unknown language code, using English aliases");
                Self::English
            }
        }
    }
}

str_enum!(
    /// Which tier of the decision policy produced a classification.
    SourceTag {
        RuleOverride => "RULE_OVERRIDE",
        Retrieval => "RETRIEVAL",
        Fallback => "FALLBACK",
    }
);

impl SourceTag {
    /// Fixed confidence tier reported for each decision tier.
    pub fn confidence_score(&self) -> f32 {
        match self {
            Self::RuleOverride => 0.95,
            Self::Retrieval => 0.85,
            Self::Fallback => 0.5,
        }
    }
}

str_enum!(
    /// Outbreak cluster severity. Escalates only.
    ClusterSeverity {
        Medium => "MEDIUM",
        High => "HIGH",
    }
);

str_enum!(
    /// Review state of a feedback record. The core only ever writes
    /// `PendingReview`; transitions belong to the external review process.
    FeedbackStatus {
        PendingReview => "PENDING_REVIEW",
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_round_trips_through_str() {
        for language in Language::ALL {
            assert_eq!(language.as_str().parse::<Language>().unwrap(), language);
        }
    }

    #[test]
    fn language_resolve_strips_region() {
        assert_eq!(Language::resolve("hi-IN"), Language::Hindi);
        assert_eq!(Language::resolve(" KN "), Language::Kannada);
        assert_eq!(Language::resolve("ta_IN"), Language::Tamil);
    }

    #[test]
    fn unknown_language_resolves_to_english() {
        assert_eq!(Language::resolve("fr"), Language::English);
        assert_eq!(Language::resolve(""), Language::English);
    }

    #[test]
    fn invalid_enum_reports_field() {
        let err = "CRITICAL".parse::<ClusterSeverity>().unwrap_err();
        assert_eq!(
            err,
            ModelError::InvalidEnum {
                field: "ClusterSeverity".into(),
                value: "CRITICAL".into(),
            }
        );
    }

    #[test]
    fn confidence_tiers_are_fixed() {
        assert!((SourceTag::RuleOverride.confidence_score() - 0.95).abs() < f32::EPSILON);
        assert!((SourceTag::Retrieval.confidence_score() - 0.85).abs() < f32::EPSILON);
        assert!((SourceTag::Fallback.confidence_score() - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn enums_serialize_as_their_string_form() {
        assert_eq!(
            serde_json::to_string(&SourceTag::RuleOverride).unwrap(),
            "\"RULE_OVERRIDE\""
        );
        assert_eq!(
            serde_json::to_string(&FeedbackStatus::PendingReview).unwrap(),
            "\"PENDING_REVIEW\""
        );
        assert_eq!(serde_json::to_string(&Language::Telugu).unwrap(), "\"te\"");
        let severity: ClusterSeverity = serde_json::from_str("\"HIGH\"").unwrap();
        assert_eq!(severity, ClusterSeverity::High);
    }
}
