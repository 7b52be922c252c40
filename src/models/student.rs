use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A student on the roster, identified by their library card ID
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub library_id: String,
    pub grade_level: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl Student {
    pub fn new(library_id: impl Into<String>, grade_level: Option<i32>) -> Self {
        Self {
            library_id: library_id.into(),
            grade_level,
            created_at: Utc::now(),
        }
    }
}
