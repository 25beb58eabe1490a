//! Configuration module.
//!
//! Settings resolve through Defaults → Config File → Env Vars → CLI Args and are
//! passed explicitly to the shell and planner. Nothing here is global.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, apply_env_overrides_with, default_config_path,
    default_log_path, load_config_file, load_config_with_precedence, merge_config, ConfigError,
    ConfigFile, ResolvedConfig,
};
