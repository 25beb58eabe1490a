//! Domain model types (pure).
//!
//! All types in this module are plain data. Construction of the layout and
//! timing values happens in [`crate::engine`]; these types only guard their
//! invariants and expose read access.

pub mod error;
pub mod key_action;
pub mod layout;
pub mod timing;

// Re-export for convenience
pub use error::{AppError, InputError, MeasureError, TimingError};
pub use key_action::KeyAction;
pub use layout::{DisplayLine, Layout, LineIndex};
pub use timing::{DegradedTiming, PlanReport, TimingPlan};
