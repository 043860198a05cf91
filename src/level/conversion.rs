use super::LevelCatalog;
use crate::error::CatalogError;

/// A trait for custom level formats that can be converted into a `LevelCatalog`.
///
/// This is the extension point for loading puzzles from your own data model.
/// Implementations should build `LevelSpec`s and hand them to
/// `LevelCatalog::from_levels` (or `from_numbered`), which runs the catalog
/// validation rules.
///
/// # Example
///
/// ```rust,no_run
/// use flowquest::prelude::*;
///
/// struct Lesson { name: String, steps: Vec<(String, String)> }
/// struct Course { lessons: Vec<Lesson> }
///
/// impl IntoCatalog for Course {
///     fn into_catalog(self) -> Result<LevelCatalog, CatalogError> {
///         let levels = self
///             .lessons
///             .into_iter()
///             .map(|lesson| {
///                 let nodes = lesson
///                     .steps
///                     .iter()
///                     .map(|(id, title)| NodeSpec::new(id, NodeKind::Action, title, "", "⚙️"))
///                     .collect();
///                 let solution: Vec<&str> = lesson.steps.iter().map(|(id, _)| id.as_str()).collect();
///                 LevelSpec::new(&lesson.name, nodes, &solution)
///             })
///             .collect();
///         LevelCatalog::from_levels(levels)
///     }
/// }
/// ```
pub trait IntoCatalog {
    /// Consumes the object and converts it into a validated level catalog.
    fn into_catalog(self) -> Result<LevelCatalog, CatalogError>;
}

impl IntoCatalog for Vec<super::LevelSpec> {
    fn into_catalog(self) -> Result<LevelCatalog, CatalogError> {
        LevelCatalog::from_levels(self)
    }
}
