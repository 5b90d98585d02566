use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One place on a creative where copy goes, e.g. the headline band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopyZone {
    pub name: String,
    pub max_chars: Option<usize>,
    pub guidance: Option<String>,
}

/// A named template of copy zones. Sent with the request, not persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdFormat {
    pub name: String,
    #[serde(default)]
    pub zones: Vec<CopyZone>,
}

/// One copy variant as returned by the model. Missing fields default to "".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyDraft {
    pub headline: String,
    pub body: String,
    pub cta: String,
}

impl CopyDraft {
    pub fn is_blank(&self) -> bool {
        self.headline.trim().is_empty() && self.body.trim().is_empty() && self.cta.trim().is_empty()
    }

    /// Text written for the zone with this name, if the zone maps to a field.
    pub fn zone_text(&self, zone: &str) -> Option<&str> {
        match zone.to_ascii_lowercase().as_str() {
            "headline" => Some(self.headline.as_str()),
            "body" | "primary_text" => Some(self.body.as_str()),
            "cta" => Some(self.cta.as_str()),
            _ => None,
        }
    }
}

/// A generated piece of copy tied to a persona, product, angle and format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brief {
    pub id: Uuid,
    pub persona_id: String,
    pub persona_name: String,
    pub product: String,
    pub angle: String,
    pub format_name: Option<String>,
    pub headline: String,
    pub body: String,
    pub cta: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateCopyRequest {
    pub persona_id: String,
    pub product: String,
    pub angle: String,
    pub format: Option<AdFormat>,
    /// Number of variants; defaults to 3, clamped to 1..=10.
    pub count: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateCopyResponse {
    pub briefs: Vec<Brief>,
}
