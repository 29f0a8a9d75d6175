/// A single catalog entry: identifier, title and prerequisite identifiers.
///
/// Records are immutable once built. Prerequisites keep the order in which they
/// appeared in the source line; they are not checked against other courses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    id: String,
    title: String,
    prerequisites: Vec<String>,
}

impl Course {
    /// Build a course record from already-split fields.
    pub fn new(id: impl Into<String>, title: impl Into<String>, prerequisites: Vec<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            prerequisites,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn prerequisites(&self) -> &[String] {
        &self.prerequisites
    }

    /// Render the detail block shown for the "Print Course" menu entry.
    ///
    /// Prerequisites are space-joined in file order, or `None` when the list is empty.
    pub fn details(&self) -> String {
        let prerequisites = if self.prerequisites.is_empty() {
            "None".to_string()
        } else {
            self.prerequisites.join(" ")
        };
        format!(
            "ID: {}\nTitle: {}\nPrerequisites: {}",
            self.id, self.title, prerequisites
        )
    }
}
