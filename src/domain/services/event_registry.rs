use std::sync::Arc;
use chrono::{NaiveDate, NaiveTime};
use tracing::info;

use crate::domain::models::event::Event;
use crate::domain::ports::EventRepository;
use crate::error::AppError;

/// Owns the event lifecycle and the single-active-event invariant. Activation
/// is a clear-then-set swap executed transactionally by the repository; any
/// previously active event is discarded unconditionally.
pub struct EventRegistry {
    events: Arc<dyn EventRepository>,
}

impl EventRegistry {
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }

    pub async fn create(
        &self,
        name: String,
        event_date: NaiveDate,
        check_in_time: NaiveTime,
        check_out_time: NaiveTime,
        code: String,
    ) -> Result<Event, AppError> {
        let event = Event::new(name, event_date, check_in_time, check_out_time, code);
        let created = self.events.create(&event).await?;
        info!("Created event {} ({})", created.name, created.id);
        Ok(created)
    }

    pub async fn activate(&self, event_id: &str) -> Result<(), AppError> {
        self.events.activate(event_id).await?;
        info!("Activated event {}", event_id);
        Ok(())
    }

    pub async fn get_active(&self) -> Result<Option<Event>, AppError> {
        self.events.find_active().await
    }

    pub async fn list(&self) -> Result<Vec<Event>, AppError> {
        self.events.list().await
    }
}
