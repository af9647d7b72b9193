//! Storage Configuration
//!
//! Each feature area owns exactly one slot, keyed `<namespace>_<slug>`.

use std::fmt;

pub const DEFAULT_NAMESPACE: &str = "espacosow";

/// The four independent list domains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureArea {
    Clients,
    ConsumableLog,
    Queue,
    Inventory,
}

impl FeatureArea {
    pub const ALL: [FeatureArea; 4] = [
        FeatureArea::Clients,
        FeatureArea::ConsumableLog,
        FeatureArea::Queue,
        FeatureArea::Inventory,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            FeatureArea::Clients => "clientes",
            FeatureArea::ConsumableLog => "cetim",
            FeatureArea::Queue => "depilacao",
            FeatureArea::Inventory => "estoque",
        }
    }
}

impl fmt::Display for FeatureArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub namespace: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

impl StorageConfig {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    pub fn key(&self, area: FeatureArea) -> String {
        self.setting_key(area.slug())
    }

    /// Key for a non-list setting stored alongside the feature slots
    pub fn setting_key(&self, name: &str) -> String {
        format!("{}_{}", self.namespace, name)
    }
}
