pub mod attendance;
pub mod auth;
pub mod event;
pub mod group;
pub mod participant;
pub mod qr;
