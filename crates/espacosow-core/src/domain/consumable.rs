//! Consumable Log Entry
//!
//! One use of a shared consumable (the satin cap rotation), recorded with
//! the professional responsible for it.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{date_or_today, optional, require, DomainResult, Entity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumableLogEntry {
    pub id: String,
    #[serde(rename = "profissional")]
    pub professional: String,
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "observacoes", default)]
    pub notes: Option<String>,
    #[serde(rename = "criadoEm")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsumableForm {
    pub professional: String,
    pub date: String,
    pub notes: String,
}

impl ConsumableForm {
    pub fn validate(&self) -> DomainResult<()> {
        require("professional", &self.professional).map(|_| ())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsumablePatch {
    pub professional: Option<String>,
    pub date: Option<String>,
    /// `Some("")` clears the notes
    pub notes: Option<String>,
}

impl ConsumableLogEntry {
    pub fn create(
        id: String,
        created_at: DateTime<Utc>,
        form: &ConsumableForm,
        today: NaiveDate,
    ) -> DomainResult<Self> {
        Ok(Self {
            id,
            professional: require("professional", &form.professional)?,
            date: date_or_today(&form.date, today),
            notes: optional(&form.notes),
            created_at,
        })
    }

    pub fn apply(&mut self, patch: &ConsumablePatch) -> DomainResult<()> {
        if let Some(professional) = &patch.professional {
            self.professional = require("professional", professional)?;
        }
        // A blank date leaves the stored one alone
        if let Some(date) = patch.date.as_deref().and_then(optional) {
            self.date = date;
        }
        if let Some(notes) = &patch.notes {
            self.notes = optional(notes);
        }
        Ok(())
    }

    /// Notes worth showing; entries written by older builds store `""`
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref().filter(|n| !n.trim().is_empty())
    }
}

impl Entity for ConsumableLogEntry {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
