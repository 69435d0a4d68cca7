//! Pillar and track taxonomy

use serde::{Deserialize, Serialize};

/// A subject-matter category that courses and tracks belong to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pillar {
    /// Pillar id (e.g., "ai")
    pub id: String,

    /// Display name (e.g., "Artificial Intelligence")
    pub name: String,

    /// Short description
    #[serde(default)]
    pub description: String,
}

/// A named specialization inside exactly one pillar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Track id (e.g., "applied-ml")
    pub id: String,

    /// Display name
    pub name: String,

    /// Owning pillar id
    pub pillar: String,

    /// Short description
    #[serde(default)]
    pub description: String,
}
