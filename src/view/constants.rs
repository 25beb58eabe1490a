//! Layout dimension constants for TUI rendering.

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Focus marker drawn at each screen edge on the focus row.
pub const FOCUS_MARKER: &str = "━━";

/// Width of [`FOCUS_MARKER`] in cells.
pub const FOCUS_MARKER_WIDTH: u16 = 2;

/// Terminal size used when the backend cannot report one.
pub const FALLBACK_SIZE: (u16, u16) = (80, 24);
