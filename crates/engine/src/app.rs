//! Application state and composition.

use crate::infrastructure::templates::TemplateRenderer;
use crate::use_cases::RosterUseCases;

/// Main application state.
///
/// Holds the use cases and the page renderer.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
    pub templates: TemplateRenderer,
}

/// Container for all use cases.
pub struct UseCases {
    pub roster: RosterUseCases,
}

impl App {
    pub fn new(roster: RosterUseCases, templates: TemplateRenderer) -> Self {
        Self {
            use_cases: UseCases { roster },
            templates,
        }
    }
}
