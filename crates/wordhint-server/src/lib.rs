//! Wordhint HTTP server library (router, handlers, payloads, health check).

pub mod gateway;
pub mod health;
