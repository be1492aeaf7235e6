//! Per-feature planning logic
//!
//! Each submodule instantiates the fallback chain in [`crate::resolve`] with
//! its own sources, quality predicates, and static default.

pub mod budget;
pub mod destinations;
pub mod itinerary;
mod prompts;

pub use budget::BudgetEstimate;
pub use itinerary::DayPlan;
