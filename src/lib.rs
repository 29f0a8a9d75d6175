//! A small interactive course catalog browser.
//!
//! Courses are read from a flat comma-separated file (`id,title[,prerequisite]*`)
//! into an in-memory [`catalog::Catalog`]. A numbered menu then lets the user load
//! the data, list every course, or print the details of one course.
//!
//! The main entry point is [`Session`], which runs the menu loop over any
//! [`command::LineSource`] and `std::io::Write` pair. The [`loader`] module can be
//! used on its own to parse catalog files.

pub mod catalog;
pub mod command;
pub mod config;
pub mod course;
pub mod error;
pub mod io_adapters;
pub mod loader;
mod session;

/// Re-export of the interactive menu loop.
///
/// See [`Session`] for the high-level API and an example.
pub use session::{Flow, Session};
