//! tprompt
//!
//! Terminal teleprompter: wraps text to the screen width, plans one constant scroll
//! speed so the text finishes in a requested time, and holds briefly on each
//! sentence-ending line.
//!
//! Pure Core / Impure Shell: `engine` and `model` do the wrapping, layout, timing and
//! per-frame scroll logic without touching the terminal; `view` owns the TUI.

pub mod config;
pub mod engine;
pub mod logging;
pub mod model;
pub mod source;
pub mod view;
