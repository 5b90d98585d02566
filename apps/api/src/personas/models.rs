use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A purchase objection and the rebuttal the brand uses for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objection {
    pub objection: String,
    pub response: String,
}

/// One numbered messaging angle and the hooks listed under it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagingAngle {
    pub theme: String,
    pub hooks: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAffinity {
    pub product: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyExamples {
    pub ad_hook: String,
    pub email_subjects: Vec<String>,
    pub ctas: Vec<String>,
}

/// Structured view over one persona training document.
///
/// Every field has an empty default. A document missing a section yields a
/// partially-populated record, never an error. Records are derived on every
/// load and never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedPersona {
    pub id: String,
    pub name: String,
    /// Share of the customer base, e.g. `~23%`.
    pub percentage: String,
    pub identity_snapshot: String,
    pub demographics: BTreeMap<String, String>,
    pub core_identity_traits: Vec<String>,
    pub values: Vec<String>,
    pub worldview: String,
    pub fears: Vec<String>,
    pub desires: Vec<String>,
    pub frustrations: Vec<String>,
    pub guilty_pleasures: Vec<String>,
    pub jobs_functional: Vec<String>,
    pub jobs_emotional: Vec<String>,
    pub jobs_social: Vec<String>,
    pub purchase_triggers: Vec<String>,
    pub purchase_objections: Vec<Objection>,
    pub day_in_life: String,
    pub messaging_angles: Vec<MessagingAngle>,
    pub language_resonates: Vec<String>,
    pub language_avoid: Vec<String>,
    pub voc_quotes: Vec<String>,
    pub product_affinities: Vec<ProductAffinity>,
    pub copy_examples: CopyExamples,
}

impl ParsedPersona {
    /// Numeric share used for ranking: the leading digits of `percentage`
    /// (after an optional `~`), 0 when absent, saturating on overflow.
    pub fn percentage_rank(&self) -> u32 {
        let digits: String = self
            .percentage
            .trim()
            .trim_start_matches('~')
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        if digits.is_empty() {
            return 0;
        }
        // Only overflow can fail here.
        digits.parse().unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_percentage(p: &str) -> ParsedPersona {
        ParsedPersona {
            percentage: p.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_percentage_rank_with_tilde() {
        assert_eq!(with_percentage("~23%").percentage_rank(), 23);
    }

    #[test]
    fn test_percentage_rank_without_tilde() {
        assert_eq!(with_percentage("40%").percentage_rank(), 40);
    }

    #[test]
    fn test_percentage_rank_missing_is_zero() {
        assert_eq!(with_percentage("").percentage_rank(), 0);
        assert_eq!(with_percentage("unknown").percentage_rank(), 0);
    }

    #[test]
    fn test_percentage_rank_saturates_on_overflow() {
        assert_eq!(with_percentage("~12345678901%").percentage_rank(), u32::MAX);
        assert!(
            with_percentage("99999999999%").percentage_rank()
                > with_percentage("~40%").percentage_rank()
        );
    }

    #[test]
    fn test_serializes_camel_case_with_empty_defaults() {
        let json = serde_json::to_value(ParsedPersona::default()).unwrap();
        assert_eq!(json["identitySnapshot"], "");
        assert_eq!(json["demographics"], serde_json::json!({}));
        assert_eq!(json["vocQuotes"], serde_json::json!([]));
        assert_eq!(json["copyExamples"]["adHook"], "");
        assert_eq!(json["copyExamples"]["emailSubjects"], serde_json::json!([]));
        assert!(json.get("guiltyPleasures").is_some());
    }
}
