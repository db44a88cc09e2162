#![doc = include_str!("../../README.md")]

pub mod availability;
pub mod context;
pub mod document;
pub mod effective;
pub mod error;
pub mod localization;
pub mod picker;
pub mod projector;
#[macro_use]
pub mod schedule;

mod delivery;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::context::Context;
pub use crate::delivery::DeliveryAvailability;
pub use crate::effective::EffectiveSchedule;
pub use crate::projector::{AvailableDeliveryDate, DateProjector, LeadTimeBoundary};
pub use delivery_hours_syntax as syntax;
