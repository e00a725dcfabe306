//! Content of an independently-failing display region.

use crate::display::escape::SafeText;
use crate::display::grid::Grid;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PanelContent {
    /// Nothing has been shown yet.
    #[default]
    Blank,
    /// Neutral prompt such as "Enter a query to run".
    Placeholder(SafeText),
    /// A request is in flight.
    Loading(SafeText),
    /// A transport failure or a server-reported error.
    Error(SafeText),
    /// Rendered rows, optionally preceded by a notice.
    Table {
        notice: Option<SafeText>,
        grid: Grid,
    },
}

impl PanelContent {
    pub fn is_error(&self) -> bool {
        matches!(self, PanelContent::Error(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PanelContent::Loading(_))
    }

    pub fn grid(&self) -> Option<&Grid> {
        match self {
            PanelContent::Table { grid, .. } => Some(grid),
            _ => None,
        }
    }

    pub fn notice(&self) -> Option<&SafeText> {
        match self {
            PanelContent::Table { notice, .. } => notice.as_ref(),
            _ => None,
        }
    }

    /// The single line of text for non-table content.
    pub fn message(&self) -> Option<&SafeText> {
        match self {
            PanelContent::Placeholder(text)
            | PanelContent::Loading(text)
            | PanelContent::Error(text) => Some(text),
            _ => None,
        }
    }
}
