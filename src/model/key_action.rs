//! Domain-level keyboard actions independent of key bindings.

/// Runtime controls the presentation shell understands.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Start playback, or pause/resume it. Default: Space
    TogglePause,
    /// Flip the prompt horizontally for teleprompter glass. Default: m
    ToggleMirror,
    /// Leave the prompter. Default: Esc/q
    Quit,
}
