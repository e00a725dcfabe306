//! Application state and the main run loop.
//!
//! ## Module Structure
//! - `mod.rs`: App struct definition, initialization, and rendering
//! - `action_handler.rs`: AppAction processing
//! - `data_handler.rs`: background requests with tokio tasks
//! - `input_handler.rs`: keyboard processing

mod action_handler;
mod data_handler;
mod input_handler;

use std::sync::Arc;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rowscope_core::api::DataSource;
use rowscope_core::core::{BrowserSession, ViewTab};
use rowscope_core::display::TerminalEscaper;
use tokio::sync::mpsc;

use crate::action::AppAction;
use crate::components::{
    CatalogList, Component, HelpOverlay, QueryPanel, StatusBar, TablePanel,
};
use crate::event::{Event, EventHandler};
use crate::layout::browse::CATALOG_WIDTH;
use crate::layout::main::{HEADER_HEIGHT, STATUS_BAR_HEIGHT};
use crate::service::ConnectionStatus;

/// The main application state.
pub struct App {
    pub should_quit: bool,
    /// Controllers; the single source of truth for what is on screen
    pub(crate) session: BrowserSession<TerminalEscaper>,
    pub(crate) catalog_list: CatalogList,
    pub(crate) table_panel: TablePanel,
    pub(crate) query_panel: QueryPanel,
    pub(crate) status_bar: StatusBar,
    /// Backend shared with background tasks
    pub(crate) source: Arc<dyn DataSource>,
    server_url: String,
    pub(crate) connection_status: ConnectionStatus,
    pub(crate) action_tx: mpsc::UnboundedSender<AppAction>,
    action_rx: mpsc::UnboundedReceiver<AppAction>,
    pub(crate) show_help: bool,
}

impl App {
    pub fn new(source: Arc<dyn DataSource>, server_url: String, initial_tab: ViewTab) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let session = BrowserSession::new(TerminalEscaper, initial_tab);

        let mut app = Self {
            should_quit: false,
            catalog_list: CatalogList::new(),
            table_panel: TablePanel::new(),
            query_panel: QueryPanel::new(),
            status_bar: StatusBar::new(),
            source,
            server_url,
            connection_status: ConnectionStatus::default(),
            action_tx,
            action_rx,
            show_help: false,
            session,
        };
        app.sync_components();
        app.status_bar.set_tab(initial_tab);
        app
    }

    /// Run the main application loop.
    pub async fn run_async(
        &mut self,
        terminal: &mut ratatui::Terminal<impl ratatui::backend::Backend>,
    ) -> std::io::Result<()> {
        let event_handler = EventHandler::new(100);

        let _ = self.action_tx.send(AppAction::LoadCatalog);

        while !self.should_quit {
            self.process_actions();

            terminal.draw(|frame| self.draw(frame))?;

            match event_handler.next()? {
                Event::Key(key) => self.handle_key(key),
                Event::Paste(text) => self.handle_paste(&text),
                Event::Resize(_, _) | Event::Tick => {}
            }
        }

        Ok(())
    }

    /// Apply every queued action.
    fn process_actions(&mut self) {
        while let Ok(action) = self.action_rx.try_recv() {
            self.handle_action(action);
        }
    }

    /// Copy controller state into the components that draw it.
    pub(crate) fn sync_components(&mut self) {
        self.catalog_list.update(self.session.catalog.state());
        self.table_panel.update(self.session.pagination.view());
        self.query_panel.update(self.session.query.panel());
    }

    pub(crate) fn switch_to_tab(&mut self, tab: ViewTab) {
        self.session.tabs.activate(tab);
        self.status_bar.set_tab(tab);
        self.status_bar.set_message(format!("Viewing: {}", tab.label()));
    }

    // =========================================================================
    // Drawing
    // =========================================================================

    fn draw(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let [header, content, status] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(size);

        self.draw_header_with_tabs(frame, header);

        match self.session.tabs.active() {
            ViewTab::Browse => {
                let [list_area, table_area] =
                    Layout::horizontal([Constraint::Length(CATALOG_WIDTH), Constraint::Min(0)])
                        .areas(content);
                self.catalog_list.draw(frame, list_area, true);
                self.table_panel.draw(frame, table_area, false);
            }
            ViewTab::Query => self.query_panel.draw(frame, content, true),
        }

        self.status_bar.draw(frame, status, false);

        if self.show_help {
            HelpOverlay::render(frame, size);
        }
    }

    fn draw_header_with_tabs(&self, frame: &mut Frame, area: Rect) {
        let connection_indicator = match &self.connection_status {
            ConnectionStatus::Connecting => Span::styled(" ◐ ", Style::default().fg(Color::Yellow)),
            ConnectionStatus::Connected => Span::styled(" ● ", Style::default().fg(Color::Green)),
            ConnectionStatus::Error(_) => Span::styled(" ✗ ", Style::default().fg(Color::Red)),
        };

        let mut tab_spans: Vec<Span> = vec![Span::raw(" ")];
        for (i, tab) in ViewTab::ALL.iter().enumerate() {
            let style = if self.session.tabs.is_active(*tab) {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::White)
            };
            tab_spans.push(Span::styled(format!(" {} {} ", i + 1, tab.label()), style));
            tab_spans.push(Span::raw(" "));
        }

        tab_spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
        tab_spans.push(connection_indicator);
        tab_spans.push(match &self.connection_status {
            ConnectionStatus::Error(message) => {
                Span::styled(message.clone(), Style::default().fg(Color::Red))
            }
            _ => Span::styled(self.server_url.clone(), Style::default().fg(Color::DarkGray)),
        });

        let header = Paragraph::new(Line::from(tab_spans)).block(
            Block::default()
                .title(" rowscope ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(header, area);
    }
}
