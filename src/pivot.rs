// src/pivot.rs

//! Dense teacher × attribute pivot.
//!
//! Rows come from the teacher roster in the order given, columns from the
//! requested attribute values. Counts fill the matching cells; everything else
//! stays 0. The result serializes as the array-of-arrays layout chart
//! libraries expect:
//!
//! ```text
//! [["Teacher", "Gifted", "IEP"],
//!  ["Alice",   3,        0    ],
//!  ["Bob",     0,        2    ]]
//! ```

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeSeq, Serializer};
use thiserror::Error;

use crate::models::CountRecord;

/// Label of the first header cell.
pub const TEACHER_COLUMN: &str = "Teacher";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PivotError {
    #[error("teacher '{0}' appears more than once in the roster")]
    DuplicateTeacher(String),
    #[error("count references teacher '{0}' missing from the roster")]
    UnknownTeacher(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PivotRow {
    pub teacher: String,
    /// One cell per table column, same order as the header.
    pub counts: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PivotTable {
    columns: Vec<String>,
    rows: Vec<PivotRow>,
}

impl PivotTable {
    /// Attribute columns, without the leading teacher column.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[PivotRow] {
        &self.rows
    }

    /// Full header row, `"Teacher"` first.
    pub fn header(&self) -> Vec<&str> {
        std::iter::once(TEACHER_COLUMN)
            .chain(self.columns.iter().map(String::as_str))
            .collect()
    }

    pub fn row(&self, teacher: &str) -> Option<&PivotRow> {
        self.rows.iter().find(|r| r.teacher == teacher)
    }

    pub fn cell(&self, teacher: &str, column: &str) -> Option<i64> {
        let idx = self.columns.iter().position(|c| c == column)?;
        self.row(teacher).map(|r| r.counts[idx])
    }
}

/// Merge a roster, a column set and sparse counts into a dense table.
///
/// Duplicate roster names and counts for teachers outside the roster are
/// rejected. Counts whose attribute is not a requested column are dropped.
/// A repeated `(teacher, attribute)` pair overwrites the earlier value.
/// A column name listed twice keeps both positions, each holding the count.
pub fn build_pivot(
    columns: &[String],
    counts: &[CountRecord],
    teachers: &[String],
) -> Result<PivotTable, PivotError> {
    let mut col_index: HashMap<&str, Vec<usize>> = HashMap::with_capacity(columns.len());
    for (idx, col) in columns.iter().enumerate() {
        col_index.entry(col.as_str()).or_default().push(idx);
    }

    // rows stay in roster order; the map only locates them
    let mut row_index: HashMap<&str, usize> = HashMap::with_capacity(teachers.len());
    let mut rows: Vec<PivotRow> = Vec::with_capacity(teachers.len());
    for name in teachers {
        if row_index.insert(name.as_str(), rows.len()).is_some() {
            return Err(PivotError::DuplicateTeacher(name.clone()));
        }
        rows.push(PivotRow {
            teacher: name.clone(),
            counts: vec![0; columns.len()],
        });
    }

    for rec in counts {
        let Some(&row) = row_index.get(rec.teacher_name.as_str()) else {
            return Err(PivotError::UnknownTeacher(rec.teacher_name.clone()));
        };
        for &col in col_index.get(rec.attribute.as_str()).into_iter().flatten() {
            rows[row].counts[col] = rec.count;
        }
    }

    Ok(PivotTable {
        columns: columns.to_vec(),
        rows,
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Serialization: header row of strings, then one mixed row per teacher
// ─────────────────────────────────────────────────────────────────────────────

struct HeaderRow<'a>(&'a [String]);

impl Serialize for HeaderRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(1 + self.0.len()))?;
        seq.serialize_element(TEACHER_COLUMN)?;
        for col in self.0 {
            seq.serialize_element(col)?;
        }
        seq.end()
    }
}

impl Serialize for PivotRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(1 + self.counts.len()))?;
        seq.serialize_element(&self.teacher)?;
        for n in &self.counts {
            seq.serialize_element(n)?;
        }
        seq.end()
    }
}

impl Serialize for PivotTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(1 + self.rows.len()))?;
        seq.serialize_element(&HeaderRow(&self.columns))?;
        for row in &self.rows {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}
