//! Small personal utility helpers.
//! Flat, mostly pure functions over the host filesystem, terminal and strings;
//! nothing here keeps state between calls.

pub mod console;
pub mod datetimes;
mod east_asian;
pub mod errors;
pub mod files;
pub mod models;
pub mod texts;

pub use console::{confirm, ConfirmPrompt, LinePrinter, DEFAULT_LINE_WIDTH};
pub use datetimes::DEFAULT_PATTERN;
pub use errors::{Result, UtilError};
pub use files::FILE_NAME_DELIMITER;
pub use models::{PathTimes, PrefixSuffix};

/// Re-export the whole helper surface for glob imports.
pub mod prelude {
    pub use crate::{
        console::*,
        datetimes,
        errors::{Result, UtilError},
        files::*,
        models::*,
        texts,
    };
}
