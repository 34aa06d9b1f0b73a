// src/db/complaints.rs

use crate::db::connection::Database;
use crate::domain::{Complaint, ComplaintId, NewComplaint, Status};
use crate::store::{ComplaintStore, StoreError};
use chrono::Utc;
use rusqlite::types::Type;
use rusqlite::{params, Row};
use std::str::FromStr;

const SELECT_ALL: &str = r#"
    select id, title, description, category, priority, status,
           user_email, date_submitted, updated_at
    from complaints
    order by date_submitted desc, rowid desc
"#;

/// Reads an enumerated label column, failing the row on unknown values.
fn label<T>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw: String = row.get(idx)?;
    raw.parse()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn complaint_from_row(row: &Row<'_>) -> rusqlite::Result<Complaint> {
    Ok(Complaint {
        id: ComplaintId::new(row.get::<_, String>(0)?),
        title: row.get(1)?,
        description: row.get(2)?,
        category: label(row, 3)?,
        priority: label(row, 4)?,
        status: label(row, 5)?,
        user_email: row.get(6)?,
        date_submitted: row.get(7)?,
        updated_at: row.get(8)?,
    })
}

/// Random id in UUID v4 layout, matching what the hosted table hands out.
fn generate_id() -> ComplaintId {
    let mut bytes: [u8; 16] = rand::random();
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    ComplaintId::new(format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    ))
}

impl ComplaintStore for Database {
    fn list_complaints(&self) -> Result<Vec<Complaint>, StoreError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(SELECT_ALL)?;
            let rows = stmt.query_map([], complaint_from_row)?;

            let mut out = Vec::new();
            for r in rows {
                out.push(r?);
            }
            Ok(out)
        })
    }

    fn insert_complaint(&self, complaint: &NewComplaint) -> Result<Complaint, StoreError> {
        let id = generate_id();
        let now = Utc::now();
        let status = Status::default();

        self.with_conn(|conn| {
            conn.execute(
                r#"
                insert into complaints
                    (id, title, description, category, priority, status,
                     user_email, date_submitted, updated_at)
                values (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
                "#,
                params![
                    id.as_str(),
                    complaint.title,
                    complaint.description,
                    complaint.category.as_str(),
                    complaint.priority.as_str(),
                    status.as_str(),
                    complaint.user_email,
                    now,
                    now,
                ],
            )?;
            Ok(())
        })?;

        Ok(Complaint {
            id,
            title: complaint.title.clone(),
            description: complaint.description.clone(),
            category: complaint.category,
            priority: complaint.priority,
            status,
            user_email: complaint.user_email.clone(),
            date_submitted: now,
            updated_at: now,
        })
    }

    // Zero matched rows is still an acknowledgement, as it is for PostgREST.
    fn update_status(&self, id: &ComplaintId, status: Status) -> Result<(), StoreError> {
        self.with_conn(|conn| {
            conn.execute(
                "update complaints set status = ?1, updated_at = ?2 where id = ?3",
                params![status.as_str(), Utc::now(), id.as_str()],
            )?;
            Ok(())
        })
    }

    fn delete_complaint(&self, id: &ComplaintId) -> Result<(), StoreError> {
        self.with_conn(|conn| {
            conn.execute("delete from complaints where id = ?1", params![id.as_str()])?;
            Ok(())
        })
    }
}
