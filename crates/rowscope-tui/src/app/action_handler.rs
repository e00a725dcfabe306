//! Application action handling.
//!
//! Processes AppAction events and updates application state accordingly.

use rowscope_core::api::Reply;
use rowscope_core::core::Completion;
use rowscope_core::display::{Escaper, TerminalEscaper};
use rowscope_core::error::ApiError;

use crate::action::{AppAction, PageMove};
use crate::service::ConnectionStatus;

use super::App;

impl App {
    pub(super) fn handle_action(&mut self, action: AppAction) {
        match action {
            AppAction::LoadCatalog => {
                self.load_catalog();
            }
            AppAction::CatalogLoaded(request, result) => {
                self.note_reachability(&result);
                let message = match &result {
                    Ok(Reply::Data(names)) => format!("Loaded {} tables", names.len()),
                    Ok(Reply::Reported(_)) | Err(_) => "Failed to load tables".to_string(),
                };
                if self.session.catalog.complete(&request, result) == Completion::Applied {
                    self.status_bar.set_message(message);
                    self.sync_components();
                }
            }
            AppAction::OpenEntry(index) => {
                if let Some(fetch) = self.session.select_entry(index) {
                    let label = TerminalEscaper.escape(fetch.table());
                    self.status_bar
                        .set_message(format!("Loading '{}'...", label));
                    self.sync_components();
                    self.spawn_page_fetch(fetch);
                }
            }
            AppAction::Page(movement) => {
                let fetch = match movement {
                    PageMove::Previous => self.session.pagination.previous_page(),
                    PageMove::Next => self.session.pagination.next_page(),
                    PageMove::Reload => self.session.pagination.load_page(),
                };
                if let Some(fetch) = fetch {
                    self.status_bar
                        .set_message(format!("Loading page {}...", fetch.page()));
                    self.spawn_page_fetch(fetch);
                }
            }
            AppAction::PageLoaded(fetch, result) => {
                self.note_reachability(&result);
                if self.session.pagination.complete(&fetch, result) == Completion::Applied {
                    self.status_bar.set_message(self.session.pagination.view().page_info.clone());
                    self.sync_components();
                }
            }
            AppAction::RunQuery(text) => {
                match self.session.query.run(&text) {
                    Some(submission) => {
                        self.status_bar.set_message("Running query...");
                        self.spawn_query(submission);
                    }
                    None => self.status_bar.set_message(""),
                }
                self.sync_components();
            }
            AppAction::QueryCompleted(submission, result) => {
                self.note_reachability(&result);
                if self.session.query.complete(&submission, result) == Completion::Applied {
                    let message = match self.session.query.panel().grid() {
                        Some(grid) => format!("Query returned {} rows", grid.row_count()),
                        None => "Query failed".to_string(),
                    };
                    self.status_bar.set_message(message);
                    self.sync_components();
                }
            }
        }
    }

    /// Any answer from the server means it is reachable.
    fn note_reachability<T>(&mut self, result: &Result<T, ApiError>) {
        self.connection_status = match result {
            Err(e) if e.is_unreachable() => ConnectionStatus::Error(e.to_string()),
            _ => ConnectionStatus::Connected,
        };
    }
}
