pub mod auth;
pub mod configuration;
pub mod error;
pub mod health;
pub mod security;
pub mod tags;
