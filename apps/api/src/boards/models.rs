use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::copy::models::Brief;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub briefs: Vec<Brief>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Board {
    pub fn new(name: &str) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            briefs: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Appends briefs not already on the board. Returns how many were added.
    pub fn add_briefs(&mut self, briefs: Vec<Brief>) -> usize {
        let before = self.briefs.len();
        for brief in briefs {
            if !self.briefs.iter().any(|b| b.id == brief.id) {
                self.briefs.push(brief);
            }
        }
        let added = self.briefs.len() - before;
        if added > 0 {
            self.updated_at = Utc::now();
        }
        added
    }

    /// Removes the brief with `brief_id`. Returns false if it was not present.
    pub fn remove_brief(&mut self, brief_id: Uuid) -> bool {
        let before = self.briefs.len();
        self.briefs.retain(|b| b.id != brief_id);
        let removed = self.briefs.len() != before;
        if removed {
            self.updated_at = Utc::now();
        }
        removed
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateBoardRequest {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddBriefsRequest {
    pub briefs: Vec<Brief>,
}
