pub mod attendance;
pub mod auth;
pub mod event;
pub mod group;
pub mod health;
pub mod qr;
