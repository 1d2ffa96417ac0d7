use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// A scheduled event. At most one event is `active` at any time; activation
/// is an exclusive swap handled by the event repository.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub event_date: NaiveDate,
    pub check_in_time: NaiveTime,
    pub check_out_time: NaiveTime,
    pub code: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn new(
        name: String,
        event_date: NaiveDate,
        check_in_time: NaiveTime,
        check_out_time: NaiveTime,
        code: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            event_date,
            check_in_time,
            check_out_time,
            code,
            active: false,
            created_at: Utc::now(),
        }
    }
}
