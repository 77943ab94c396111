//! ph-cli library
//!
//! Command definitions and the runner behind the `ph` binary, exported for
//! tests.

pub(crate) mod app;
pub(crate) mod cli;
pub(crate) mod clipboard;
pub(crate) mod commands;
pub(crate) mod cover_commands;
pub(crate) mod custom_commands;
pub(crate) mod error;
pub(crate) mod experience_commands;
pub mod logger;
pub(crate) mod profile_commands;
pub(crate) mod prompt;


pub use app::{App, default_export_path, experience_json};
pub use cli::Cli;
pub use clipboard::StdoutClipboard;
pub use commands::Commands;
pub use cover_commands::CoverCommands;
pub use custom_commands::CustomCommands;
pub use error::{CliError, Result as CliResult};
pub use experience_commands::{ExperienceCommands, ExperienceFields};
pub use profile_commands::ProfileCommands;
pub use prompt::Prompt;
