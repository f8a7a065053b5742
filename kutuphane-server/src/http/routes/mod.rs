//! Route handlers organized by resource

use serde::Serialize;

pub mod health;
pub mod libraries;
pub mod sponsors;
pub mod staff;
pub mod stats;
pub mod visitors;

/// Confirmation body returned by every write endpoint
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }
}
