//! Catalog loading from comma-separated text.
//!
//! Grammar, one record per line and no header row:
//!
//! ```text
//! id,title[,prerequisite]*
//! ```
//!
//! Fields are trimmed of surrounding whitespace (which also strips the `\r` of CRLF
//! files) and empty prerequisite fields are dropped. There is no quoting or escaping.
//! Any line with fewer than two fields rejects the whole source.

use crate::course::Course;
use crate::error::LoadError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read every course record from the file at `path`.
///
/// The file handle lives only for the duration of this call.
pub fn load(path: &Path) -> Result<Vec<Course>, LoadError> {
    info!("loading course data from {}", path.display());
    let file = File::open(path).map_err(|source| LoadError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_reader(BufReader::new(file), path)
}

/// Parse course records from any buffered reader.
///
/// `origin` is used only to label errors.
pub fn load_from_reader<R: BufRead>(reader: R, origin: &Path) -> Result<Vec<Course>, LoadError> {
    let mut courses = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| LoadError::SourceUnavailable {
            path: origin.to_path_buf(),
            source,
        })?;
        courses.push(parse_record(&line, index + 1, origin)?);
    }
    debug!("parsed {} records from {}", courses.len(), origin.display());
    Ok(courses)
}

fn parse_record(line: &str, line_number: usize, origin: &Path) -> Result<Course, LoadError> {
    let mut fields = line.split(',').map(str::trim);

    let (Some(id), Some(title)) = (fields.next(), fields.next()) else {
        return Err(LoadError::MalformedRecord {
            path: origin.to_path_buf(),
            line: line_number,
            content: line.to_string(),
        });
    };

    let prerequisites = fields
        .filter(|field| !field.is_empty())
        .map(str::to_string)
        .collect();

    Ok(Course::new(id, title, prerequisites))
}
