pub mod attendance_ledger;
pub mod auth_service;
pub mod event_registry;
pub mod qr_payload;
