pub mod console;
pub mod escape;
pub mod grid;
pub mod html;
pub mod panel;

pub use console::ConsoleTable;
pub use escape::{Escaper, HtmlEscaper, SafeText, TerminalEscaper};
pub use grid::{Grid, GridCell, cell_text};
pub use panel::PanelContent;
