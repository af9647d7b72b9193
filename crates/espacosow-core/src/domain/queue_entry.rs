//! Queue Entry
//!
//! A client waiting in the hair-removal queue. `order` mirrors the entry's
//! position in its list (1-based) and is restamped by the queue controller
//! after every structural change.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{date_or_today, optional, require, DomainResult, Entity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueEntry {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "tipoDepilacao")]
    pub depilation_type: String,
    #[serde(rename = "profissional", default)]
    pub professional: Option<String>,
    #[serde(rename = "data")]
    pub date: String,
    /// Position in the queue, 1-based
    #[serde(rename = "ordem", default)]
    pub order: u32,
    #[serde(rename = "criadoEm")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueueForm {
    pub name: String,
    pub depilation_type: String,
    pub professional: String,
    pub date: String,
}

impl QueueForm {
    pub fn validate(&self) -> DomainResult<()> {
        require("name", &self.name)?;
        require("depilation_type", &self.depilation_type)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueuePatch {
    pub name: Option<String>,
    pub depilation_type: Option<String>,
    /// `Some("")` clears the professional
    pub professional: Option<String>,
    pub date: Option<String>,
}

impl QueueEntry {
    /// Build an entry at the given position
    pub fn create(
        id: String,
        created_at: DateTime<Utc>,
        form: &QueueForm,
        today: NaiveDate,
        order: u32,
    ) -> DomainResult<Self> {
        Ok(Self {
            id,
            name: require("name", &form.name)?,
            depilation_type: require("depilation_type", &form.depilation_type)?,
            professional: optional(&form.professional),
            date: date_or_today(&form.date, today),
            order,
            created_at,
        })
    }

    /// Apply a patch. `order` is owned by the queue and never patched.
    pub fn apply(&mut self, patch: &QueuePatch) -> DomainResult<()> {
        let name = patch.name.as_deref().map(|v| require("name", v)).transpose()?;
        let depilation_type = patch
            .depilation_type
            .as_deref()
            .map(|v| require("depilation_type", v))
            .transpose()?;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(depilation_type) = depilation_type {
            self.depilation_type = depilation_type;
        }
        if let Some(professional) = &patch.professional {
            self.professional = optional(professional);
        }
        // A blank date leaves the stored one alone
        if let Some(date) = patch.date.as_deref().and_then(optional) {
            self.date = date;
        }
        Ok(())
    }

    pub fn professional(&self) -> Option<&str> {
        self.professional.as_deref().filter(|p| !p.trim().is_empty())
    }
}

impl Entity for QueueEntry {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_type_required() {
        let form = QueueForm {
            name: "Carla".to_string(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(DomainError::missing("depilation_type")));
    }

    #[test]
    fn test_blank_date_patch_keeps_date() {
        let form = QueueForm {
            name: "Carla".to_string(),
            depilation_type: "Virilha".to_string(),
            date: "2024-05-01".to_string(),
            ..Default::default()
        };
        let today = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap();
        let mut entry = QueueEntry::create("1".to_string(), Utc::now(), &form, today, 1).unwrap();
        let patch = QueuePatch {
            date: Some(" ".to_string()),
            ..Default::default()
        };
        entry.apply(&patch).unwrap();
        assert_eq!(entry.date, "2024-05-01");
        assert_eq!(entry.order, 1);
    }

    #[test]
    fn test_decodes_without_order() {
        let json = r#"{"id":"1","nome":"Carla","tipoDepilacao":"Virilha","profissional":"","data":"2024-05-01","criadoEm":"2024-05-01T12:00:00Z"}"#;
        let entry: QueueEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.order, 0);
        assert_eq!(entry.professional(), None);
    }
}
