//! Table catalog loading and active-entry tracking.

use crate::api::models::{Reply, TableName};
use crate::api::source::DataSource;
use crate::core::pagination::Completion;
use crate::display::escape::{Escaper, HtmlEscaper, SafeText};
use crate::error::ApiError;

pub const NO_TABLES_PLACEHOLDER: &str = "No tables found";

/// One selectable table in the catalog listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    name: TableName,
    label: SafeText,
    active: bool,
}

impl CatalogEntry {
    /// The raw table name, used for requests and for matching.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The escaped name, used for display.
    pub fn label(&self) -> &SafeText {
        &self.label
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogState {
    #[default]
    Loading,
    /// The server has no tables. Not an error.
    Empty(SafeText),
    Ready(Vec<CatalogEntry>),
    Failed(SafeText),
}

/// A catalog request that has been issued and awaits its completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogRequest {
    seq: u64,
}

impl CatalogRequest {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// Loads the list of browsable tables and tracks which one is active.
///
/// The active name survives a reload: once the new listing arrives the
/// entry with that name is marked again.
#[derive(Debug, Clone)]
pub struct CatalogLoader<E: Escaper = HtmlEscaper> {
    escaper: E,
    state: CatalogState,
    selected: Option<TableName>,
    last_issued: u64,
}

impl<E: Escaper> CatalogLoader<E> {
    pub fn new(escaper: E) -> Self {
        Self {
            escaper,
            state: CatalogState::Loading,
            selected: None,
            last_issued: 0,
        }
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        match &self.state {
            CatalogState::Ready(entries) => entries,
            _ => &[],
        }
    }

    pub fn entry(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries().get(index)
    }

    pub fn active_entry(&self) -> Option<&CatalogEntry> {
        self.entries().iter().find(|entry| entry.active)
    }

    /// Show the loading state and issue a new catalog request.
    pub fn begin(&mut self) -> CatalogRequest {
        self.state = CatalogState::Loading;
        self.last_issued += 1;
        CatalogRequest {
            seq: self.last_issued,
        }
    }

    /// Apply the outcome of `request` unless a newer request has been issued.
    pub fn complete(
        &mut self,
        request: &CatalogRequest,
        result: Result<Reply<Vec<TableName>>, ApiError>,
    ) -> Completion {
        if request.seq != self.last_issued {
            log::debug!(
                "Dropping stale catalog (request {}, latest {})",
                request.seq,
                self.last_issued
            );
            return Completion::Stale;
        }
        self.apply(result);
        Completion::Applied
    }

    /// Replace the listing with `result` regardless of outstanding requests.
    pub fn apply(&mut self, result: Result<Reply<Vec<TableName>>, ApiError>) {
        self.state = match result {
            Ok(Reply::Data(names)) if names.is_empty() => {
                CatalogState::Empty(self.escaper.escape(NO_TABLES_PLACEHOLDER))
            }
            Ok(Reply::Data(names)) => {
                log::debug!("Catalog loaded with {} tables", names.len());
                let mut entries: Vec<CatalogEntry> = names
                    .into_iter()
                    .map(|name| CatalogEntry {
                        label: self.escaper.escape(&name),
                        name,
                        active: false,
                    })
                    .collect();
                if let Some(selected) = &self.selected {
                    if let Some(index) = entries.iter().rposition(|e| &e.name == selected) {
                        entries[index].active = true;
                    }
                }
                CatalogState::Ready(entries)
            }
            Ok(Reply::Reported(message)) => self.failure(&message),
            Err(e) => {
                log::warn!("Catalog request failed: {}", e);
                self.failure(&e.to_string())
            }
        };
    }

    /// Request the catalog from `source` and apply the result.
    pub async fn load<S: DataSource + ?Sized>(&mut self, source: &S) -> Completion {
        let request = self.begin();
        let result = source.list_tables().await;
        self.complete(&request, result)
    }

    /// Mark the entry named `name` active and every other entry inactive.
    ///
    /// Matching is exact. With duplicate names the last matching entry wins.
    /// Returns whether any entry matched.
    pub fn mark_active(&mut self, name: &str) -> bool {
        self.selected = Some(name.to_string());
        let CatalogState::Ready(entries) = &mut self.state else {
            return false;
        };

        let target = entries.iter().rposition(|entry| entry.name == name);
        for (index, entry) in entries.iter_mut().enumerate() {
            entry.active = Some(index) == target;
        }
        target.is_some()
    }

    fn failure(&self, message: &str) -> CatalogState {
        CatalogState::Failed(
            self.escaper
                .escape(&format!("Error loading tables: {}", message)),
        )
    }
}

impl Default for CatalogLoader<HtmlEscaper> {
    fn default() -> Self {
        Self::new(HtmlEscaper)
    }
}
