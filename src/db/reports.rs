// src/db/reports.rs

use sqlx::{pool::PoolConnection, query_as, query_scalar, Sqlite, SqlitePool};

use crate::error::AppResult;
use crate::models::CountRecord;

/// Read-only report queries over one pooled connection.
///
/// Acquire one per request. The connection goes back to the pool when this
/// value drops, whichever way the request ends.
pub struct ReportQueries {
    conn: PoolConnection<Sqlite>,
}

impl ReportQueries {
    pub async fn acquire(pool: &SqlitePool) -> AppResult<Self> {
        let conn = pool.acquire().await?;
        Ok(Self { conn })
    }

    /// Distinct attribute values in store order, optionally only `filter`.
    pub async fn list_attribute_values(&mut self, filter: Option<&str>) -> AppResult<Vec<String>> {
        let values = match filter {
            Some(attr) => {
                query_scalar::<_, String>(
                    r#"SELECT DISTINCT attribute FROM student_attribute WHERE attribute = ?1"#)
                    .bind(attr)
                    .fetch_all(&mut *self.conn).await?
            }
            None => {
                query_scalar::<_, String>(r#"SELECT DISTINCT attribute FROM student_attribute"#)
                    .fetch_all(&mut *self.conn).await?
            }
        };
        Ok(values)
    }

    /// Every teacher with a class, ascending.
    pub async fn list_teacher_names(&mut self) -> AppResult<Vec<String>> {
        let names = query_scalar::<_, String>(
            r#"SELECT DISTINCT teacher_name FROM class ORDER BY teacher_name ASC"#)
            .fetch_all(&mut *self.conn).await?;
        Ok(names)
    }

    /// Students per (teacher, attribute), ordered by teacher then attribute.
    pub async fn grouped_counts(&mut self, filter: Option<&str>) -> AppResult<Vec<CountRecord>> {
        let rows = match filter {
            Some(attr) => {
                query_as::<_, CountRecord>(
                    r#"SELECT c.teacher_name AS teacher_name, sa.attribute AS attribute, COUNT(*) AS count
                       FROM class c
                       JOIN student s ON s.class_id = c.id
                       JOIN student_attribute sa ON sa.student_name = s.name
                       WHERE sa.attribute = ?1
                       GROUP BY c.teacher_name, sa.attribute
                       ORDER BY c.teacher_name ASC, sa.attribute ASC"#)
                    .bind(attr)
                    .fetch_all(&mut *self.conn).await?
            }
            None => {
                query_as::<_, CountRecord>(
                    r#"SELECT c.teacher_name AS teacher_name, sa.attribute AS attribute, COUNT(*) AS count
                       FROM class c
                       JOIN student s ON s.class_id = c.id
                       JOIN student_attribute sa ON sa.student_name = s.name
                       GROUP BY c.teacher_name, sa.attribute
                       ORDER BY c.teacher_name ASC, sa.attribute ASC"#)
                    .fetch_all(&mut *self.conn).await?
            }
        };
        Ok(rows)
    }
}
