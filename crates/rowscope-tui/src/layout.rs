//! Layout constants for rowscope-tui.

/// Main layout constants.
pub mod main {
    /// Header panel height in rows (includes tab bar).
    pub const HEADER_HEIGHT: u16 = 3;

    /// Status bar height in rows.
    pub const STATUS_BAR_HEIGHT: u16 = 3;
}

/// Browse tab layout.
pub mod browse {
    /// Width of the table catalog column.
    pub const CATALOG_WIDTH: u16 = 28;

    /// Page and row info lines above the data grid.
    pub const INFO_HEIGHT: u16 = 2;
}

/// Query tab layout.
pub mod query {
    /// Query editor height including borders.
    pub const EDITOR_HEIGHT: u16 = 7;
}

/// Grid rendering.
pub mod grid {
    /// Narrowest a data column is drawn.
    pub const MIN_COLUMN_WIDTH: u16 = 6;

    /// Widest a data column is drawn.
    pub const MAX_COLUMN_WIDTH: u16 = 40;
}
