use crate::domain::{Category, Complaint, ComplaintId, NewComplaint, Priority, Status};
use crate::state::AppState;
use crate::store::{ComplaintStore, StoreError};
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Store operations, as recorded by `ScriptedStore`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    List,
    Insert,
    Update,
    Delete,
}

/// In-memory store that records every call and fails on demand.
#[derive(Default)]
pub struct ScriptedStore {
    rows: Mutex<Vec<Complaint>>,
    calls: Mutex<Vec<Op>>,
    failing: Mutex<HashSet<Op>>,
    inserted: Mutex<u32>,
}

impl ScriptedStore {
    pub fn with_rows(rows: Vec<Complaint>) -> Self {
        Self {
            rows: Mutex::new(rows),
            ..Default::default()
        }
    }

    pub fn fail_on(&self, op: Op) {
        self.failing.lock().unwrap().insert(op);
    }

    pub fn calls(&self) -> Vec<Op> {
        self.calls.lock().unwrap().clone()
    }

    pub fn rows(&self) -> Vec<Complaint> {
        self.rows.lock().unwrap().clone()
    }

    /// Adds a row behind the controllers' backs, newest first.
    pub fn push_row(&self, complaint: Complaint) {
        self.rows.lock().unwrap().insert(0, complaint);
    }

    fn enter(&self, op: Op) -> Result<(), StoreError> {
        self.calls.lock().unwrap().push(op);
        if self.failing.lock().unwrap().contains(&op) {
            return Err(StoreError::Api {
                status: 503,
                body: format!("scripted {op:?} failure"),
            });
        }
        Ok(())
    }
}

impl ComplaintStore for ScriptedStore {
    fn list_complaints(&self) -> Result<Vec<Complaint>, StoreError> {
        self.enter(Op::List)?;
        Ok(self.rows())
    }

    fn insert_complaint(&self, complaint: &NewComplaint) -> Result<Complaint, StoreError> {
        self.enter(Op::Insert)?;

        let n = {
            let mut inserted = self.inserted.lock().unwrap();
            *inserted += 1;
            *inserted
        };
        let now = base_time() + Duration::days(i64::from(n));

        let created = Complaint {
            id: ComplaintId::new(format!("new-{n}")),
            title: complaint.title.clone(),
            description: complaint.description.clone(),
            category: complaint.category,
            priority: complaint.priority,
            status: Status::Pending,
            user_email: complaint.user_email.clone(),
            date_submitted: now,
            updated_at: now,
        };
        self.push_row(created.clone());
        Ok(created)
    }

    fn update_status(&self, id: &ComplaintId, status: Status) -> Result<(), StoreError> {
        self.enter(Op::Update)?;
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|c| &c.id == id) {
            row.status = status;
        }
        Ok(())
    }

    fn delete_complaint(&self, id: &ComplaintId) -> Result<(), StoreError> {
        self.enter(Op::Delete)?;
        self.rows.lock().unwrap().retain(|c| &c.id != id);
        Ok(())
    }
}

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
}

pub fn complaint(id: &str, status: Status, priority: Priority, title: &str) -> Complaint {
    let at = base_time();
    Complaint {
        id: ComplaintId::new(id),
        title: title.to_string(),
        description: format!("{title} reported by a customer"),
        category: Category::Product,
        priority,
        status,
        user_email: None,
        date_submitted: at,
        updated_at: at,
    }
}

/// Two rows, newest first:
/// 1 = Pending/High "Billing issue", 2 = Resolved/Low "Late delivery".
pub fn sample_complaints() -> Vec<Complaint> {
    let first = Complaint {
        description: "Charged twice for March".into(),
        category: Category::Billing,
        user_email: Some("ada@example.com".into()),
        ..complaint("1", Status::Pending, Priority::High, "Billing issue")
    };

    let mut second = Complaint {
        description: "Package never arrived on time".into(),
        category: Category::Service,
        ..complaint("2", Status::Resolved, Priority::Low, "Late delivery")
    };
    second.date_submitted = base_time() - Duration::days(3);
    second.updated_at = second.date_submitted;

    vec![first, second]
}

/// App state over a scripted store seeded with `sample_complaints`.
pub fn scripted_state() -> (Arc<ScriptedStore>, AppState) {
    let store = Arc::new(ScriptedStore::with_rows(sample_complaints()));
    let state = AppState::new(store.clone());
    (store, state)
}
