//! Background requests.
//!
//! Each request runs in its own tokio task and reports back through the
//! action channel. Controllers decide on arrival whether a result is stale.

use std::sync::Arc;

use rowscope_core::core::{PageFetch, QuerySubmission};

use crate::action::AppAction;

use super::App;

impl App {
    pub(super) fn load_catalog(&mut self) {
        let request = self.session.catalog.begin();
        self.sync_components();
        self.status_bar.set_message("Loading tables...");

        let source = Arc::clone(&self.source);
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let result = source.list_tables().await;
            let _ = tx.send(AppAction::CatalogLoaded(request, result));
        });
    }

    pub(super) fn spawn_page_fetch(&self, fetch: PageFetch) {
        let source = Arc::clone(&self.source);
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let result = source
                .fetch_page(fetch.table(), fetch.page(), fetch.per_page())
                .await;
            let _ = tx.send(AppAction::PageLoaded(fetch, result));
        });
    }

    pub(super) fn spawn_query(&self, submission: QuerySubmission) {
        let source = Arc::clone(&self.source);
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let result = source.run_query(submission.text()).await;
            let _ = tx.send(AppAction::QueryCompleted(submission, result));
        });
    }
}
