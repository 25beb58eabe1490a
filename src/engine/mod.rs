//! Text layout and scroll timing (pure core).
//!
//! Nothing in here touches the terminal. The presentation shell injects a
//! [`TextMeasurer`], reads the [`crate::model::Layout`] to draw, and calls
//! [`ScrollState::advance`] (through [`Session::tick`]) once per frame.

pub mod layout;
pub mod scroll;
pub mod session;
pub mod timing;
pub mod wrap;

pub use layout::{build_layout, ends_sentence};
pub use scroll::{ScrollPhase, ScrollState};
pub use session::{Session, SessionParams};
pub use timing::{plan, MIN_SCROLL_SECONDS};
pub use wrap::{paragraphs, wrap, TextMeasurer};
