//! Error types shared by the loader and the menu parser.
//!
//! None of these end the session: the interactive loop prints their `Display`
//! text and waits for the next selection.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a catalog load was rejected.
///
/// A load is all-or-nothing, so either variant means no records were accepted.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The data file could not be opened or read to the end.
    #[error("The course data file '{}' is unavailable: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A line had fewer than the two required fields (`id,title`).
    #[error(
        "Invalid data format in '{}' at line {line}: {content:?}",
        path.display()
    )]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        content: String,
    },
}

/// A menu selection that does not map to any command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidSelection {
    #[error("Invalid choice. Please enter a valid menu option.")]
    NotANumber(String),
    #[error("Invalid choice. Please try again.")]
    Unmapped(i64),
    #[error("Invalid choice. Please try again.")]
    TrailingInput(String),
}
