// src/models/mod.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ───────────────────────────────────────
// Rows read from the store
// ───────────────────────────────────────

/// Number of students taught by `teacher_name` who carry `attribute`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct CountRecord {
    pub teacher_name: String,
    pub attribute: String,
    pub count: i64,
}

impl CountRecord {
    pub fn new(teacher_name: impl Into<String>, attribute: impl Into<String>, count: i64) -> Self {
        Self {
            teacher_name: teacher_name.into(),
            attribute: attribute.into(),
            count,
        }
    }
}

// ───────────────────────────────────────
// DTOs for endpoints
// ───────────────────────────────────────
#[derive(Debug, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AttributeList {
    pub attributes: Vec<Attribute>,
}

impl From<Vec<String>> for AttributeList {
    fn from(values: Vec<String>) -> Self {
        Self {
            attributes: values.into_iter().map(|name| Attribute { name }).collect(),
        }
    }
}
