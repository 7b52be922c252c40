use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One loan of one copy to one student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutRecord {
    pub id: Uuid,
    pub book_id: Uuid,
    pub student_library_id: String,
    pub checkout_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub return_date: Option<DateTime<Utc>>,
    pub checked_out_by_staff_id: String,
}

impl CheckoutRecord {
    pub fn new(
        book_id: Uuid,
        student_library_id: impl Into<String>,
        due_date: DateTime<Utc>,
        checked_out_by_staff_id: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            book_id,
            student_library_id: student_library_id.into(),
            checkout_date: Utc::now(),
            due_date,
            return_date: None,
            checked_out_by_staff_id: checked_out_by_staff_id.into(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.return_date.is_none()
    }

    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.return_date.is_none() && now > self.due_date
    }
}
