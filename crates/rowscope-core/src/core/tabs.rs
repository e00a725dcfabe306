//! Top-level view switching.

use std::fmt;
use std::str::FromStr;

/// The named top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewTab {
    Browse,
    Query,
}

impl ViewTab {
    pub const ALL: [ViewTab; 2] = [ViewTab::Browse, ViewTab::Query];

    pub fn label(self) -> &'static str {
        match self {
            ViewTab::Browse => "Browse Tables",
            ViewTab::Query => "Custom Query",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ViewTab::Browse => "browse",
            ViewTab::Query => "query",
        }
    }
}

impl fmt::Display for ViewTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ViewTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewTab::ALL
            .into_iter()
            .find(|tab| tab.name() == s)
            .ok_or_else(|| format!("unknown tab '{}' (expected browse or query)", s))
    }
}

/// Tracks which view is active. Exactly one is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabCoordinator {
    active: ViewTab,
}

impl TabCoordinator {
    /// The initial tab is chosen by whoever owns the layout.
    pub fn new(initial: ViewTab) -> Self {
        Self { active: initial }
    }

    pub fn active(&self) -> ViewTab {
        self.active
    }

    pub fn is_active(&self, tab: ViewTab) -> bool {
        self.active == tab
    }

    pub fn activate(&mut self, tab: ViewTab) {
        if self.active != tab {
            log::debug!("Switching view {} -> {}", self.active, tab);
            self.active = tab;
        }
    }

    /// Cycle forward, wrapping at the end.
    pub fn next(&mut self) {
        let index = self.index();
        self.activate(ViewTab::ALL[(index + 1) % ViewTab::ALL.len()]);
    }

    pub fn previous(&mut self) {
        let len = ViewTab::ALL.len();
        let index = self.index();
        self.activate(ViewTab::ALL[(index + len - 1) % len]);
    }

    fn index(&self) -> usize {
        ViewTab::ALL
            .iter()
            .position(|tab| *tab == self.active)
            .unwrap_or(0)
    }
}

impl Default for TabCoordinator {
    fn default() -> Self {
        Self::new(ViewTab::Browse)
    }
}
