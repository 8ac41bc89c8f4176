//! Showcase project records.

use serde::{Deserialize, Serialize};

/// A project shown on the portfolio home page.
///
/// Records are defined once at startup and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Project title.
    pub title: String,
    /// One-paragraph description.
    pub description: String,
    /// Technology tags, in display order.
    pub tech: Vec<String>,
    /// External link (repository or demo).
    pub link: String,
    /// Year the project was built.
    pub year: String,
    /// Image path relative to the static directory.
    pub image: Option<String>,
}

impl ProjectRecord {
    /// Build a record from string slices.
    #[must_use]
    pub fn new(
        title: &str,
        description: &str,
        tech: &[&str],
        link: &str,
        year: &str,
        image: Option<&str>,
    ) -> Self {
        Self {
            title: title.to_owned(),
            description: description.to_owned(),
            tech: tech.iter().map(|t| (*t).to_owned()).collect(),
            link: link.to_owned(),
            year: year.to_owned(),
            image: image.map(str::to_owned),
        }
    }
}
