//! The interactive menu loop gating catalog queries on a successful load.

use crate::catalog::{Catalog, LoadOutcome};
use crate::command::{Command, LineSource};
use log::debug;
use std::io::Write;
use std::path::PathBuf;

const MENU: &str = "\nWelcome to the Course Planner.\n\
                    1. Load Data Structure\n\
                    2. Print Course List\n\
                    3. Print Course\n\
                    9. Exit";
const MENU_PROMPT: &str = "What Would You Like To Do? ";
const COURSE_PROMPT: &str = "Enter the course ID: ";
const NOT_LOADED: &str = "Course data is not loaded. Please choose option 1 to load data.";
const FAREWELL: &str = "Goodbye.";

/// Whether the menu loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// The interactive menu loop over a single [`Catalog`].
///
/// The session owns the catalog for its whole lifetime. List and show are gated
/// on the catalog being loaded; every failure is reported on the output stream
/// and the loop carries on.
///
/// Example
/// ```
/// use course_planner::Session;
/// use course_planner::io_adapters::BufferedInput;
/// use std::io::Cursor;
///
/// let mut session = Session::new("missing.csv");
/// let mut input = BufferedInput::new(Cursor::new("2\n9\n"), std::io::sink());
/// let mut out = Vec::new();
/// session.run(&mut input, &mut out).unwrap();
/// assert!(String::from_utf8(out).unwrap().ends_with("Goodbye.\n"));
/// ```
pub struct Session {
    catalog: Catalog,
    data_file: PathBuf,
}

impl Session {
    /// Create a session with an empty catalog that loads from `data_file`.
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            catalog: Catalog::new(),
            data_file: data_file.into(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Show the menu and dispatch selections until exit or end of input.
    ///
    /// Only failures of `input` or `out` themselves are returned as errors.
    pub fn run(&mut self, input: &mut dyn LineSource, out: &mut dyn Write) -> anyhow::Result<()> {
        loop {
            writeln!(out, "{MENU}")?;
            out.flush()?;

            let Some(line) = input.read_line(MENU_PROMPT)? else {
                writeln!(out, "{FAREWELL}")?;
                return Ok(());
            };

            let flow = match line.parse::<Command>() {
                Ok(command) => self.execute(command, input, out)?,
                Err(invalid) => {
                    debug!("rejected menu input {line:?}: {invalid:?}");
                    writeln!(out, "{invalid}")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Apply one command. `input` is consulted only when `Show` lacks an id.
    pub fn execute(
        &mut self,
        command: Command,
        input: &mut dyn LineSource,
        out: &mut dyn Write,
    ) -> anyhow::Result<Flow> {
        debug!("executing {command:?}");
        match command {
            Command::Load => self.load(out)?,
            Command::List => self.list(out)?,
            Command::Show(id) => {
                if !self.catalog.is_loaded() {
                    writeln!(out, "{NOT_LOADED}")?;
                    return Ok(Flow::Continue);
                }
                let id = match id {
                    Some(id) => id,
                    None => match read_course_id(input)? {
                        Some(id) => id,
                        None => {
                            writeln!(out, "{FAREWELL}")?;
                            return Ok(Flow::Exit);
                        }
                    },
                };
                self.show(&id, out)?;
            }
            Command::Exit => {
                writeln!(out, "{FAREWELL}")?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn load(&mut self, out: &mut dyn Write) -> anyhow::Result<()> {
        match self.catalog.load_from(&self.data_file) {
            Ok(LoadOutcome::Loaded(_)) => writeln!(out, "Course data loaded successfully.")?,
            Ok(LoadOutcome::AlreadyLoaded) => writeln!(out, "Course data is already loaded.")?,
            Err(err) => writeln!(out, "Error: {err}")?,
        }
        Ok(())
    }

    fn list(&self, out: &mut dyn Write) -> anyhow::Result<()> {
        if !self.catalog.is_loaded() {
            writeln!(out, "{NOT_LOADED}")?;
            return Ok(());
        }
        writeln!(out, "\nList of Courses:")?;
        for (id, title) in self.catalog.list() {
            writeln!(out, "{id} {title}")?;
        }
        Ok(())
    }

    fn show(&self, id: &str, out: &mut dyn Write) -> anyhow::Result<()> {
        match self.catalog.find(id) {
            Some(course) => writeln!(out, "\nCourse Details:\n{}", course.details())?,
            None => {
                debug!("no course with id {id:?}");
                writeln!(out, "\nCourse {id} not found.")?;
            }
        }
        Ok(())
    }
}

/// Prompt until a non-blank course id arrives. `None` on end of input.
fn read_course_id(input: &mut dyn LineSource) -> anyhow::Result<Option<String>> {
    while let Some(line) = input.read_line(COURSE_PROMPT)? {
        let id = line.trim();
        if !id.is_empty() {
            return Ok(Some(id.to_string()));
        }
    }
    Ok(None)
}
