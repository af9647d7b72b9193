//! Client Entity
//!
//! A walk-in client waiting for (or already given) a service.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{date_or_today, optional, require, DomainResult, Entity};

/// A client in the new-clients rotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Unique identifier
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    /// Service date (`YYYY-MM-DD`)
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "profissional")]
    pub professional: String,
    #[serde(rename = "servico")]
    pub service: String,
    /// Whether the client has been attended
    #[serde(rename = "atendido", default)]
    pub served: bool,
    #[serde(rename = "criadoEm")]
    pub created_at: DateTime<Utc>,
}

/// Raw form input for a new client
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientForm {
    pub name: String,
    pub date: String,
    pub professional: String,
    pub service: String,
}

impl ClientForm {
    pub fn validate(&self) -> DomainResult<()> {
        require("name", &self.name)?;
        require("professional", &self.professional)?;
        require("service", &self.service)?;
        Ok(())
    }
}

/// Partial update; `None` leaves the field as it is
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientPatch {
    pub name: Option<String>,
    pub date: Option<String>,
    pub professional: Option<String>,
    pub service: Option<String>,
    pub served: Option<bool>,
}

impl Client {
    /// Build a client from validated form input. New clients start unserved.
    pub fn create(
        id: String,
        created_at: DateTime<Utc>,
        form: &ClientForm,
        today: NaiveDate,
    ) -> DomainResult<Self> {
        Ok(Self {
            id,
            name: require("name", &form.name)?,
            date: date_or_today(&form.date, today),
            professional: require("professional", &form.professional)?,
            service: require("service", &form.service)?,
            served: false,
            created_at,
        })
    }

    /// Apply a patch. Nothing changes when any patched required field is blank.
    pub fn apply(&mut self, patch: &ClientPatch) -> DomainResult<()> {
        let name = patch.name.as_deref().map(|v| require("name", v)).transpose()?;
        let professional = patch
            .professional
            .as_deref()
            .map(|v| require("professional", v))
            .transpose()?;
        let service = patch.service.as_deref().map(|v| require("service", v)).transpose()?;

        if let Some(name) = name {
            self.name = name;
        }
        // A blank date leaves the stored one alone
        if let Some(date) = patch.date.as_deref().and_then(optional) {
            self.date = date;
        }
        if let Some(professional) = professional {
            self.professional = professional;
        }
        if let Some(service) = service {
            self.service = service;
        }
        if let Some(served) = patch.served {
            self.served = served;
        }
        Ok(())
    }

    /// Parsed service date, if the stored text is a valid `YYYY-MM-DD`
    pub fn service_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

impl Entity for Client {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
