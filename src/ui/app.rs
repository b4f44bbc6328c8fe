//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::ui::splash_duration;
use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::sort::{SortColumn, SortState};
use crate::ui::dashboard::{DashboardState, render_dashboard, renderer};
use crate::ui::splash::render_splash;
use crate::workers::core::SnapshotUpdate;
use crossterm::event::{self, Event, KeyCode, MouseButton, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::{broadcast, mpsc};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub source_name: String,
    pub vs_currency: String,
    pub initial_sort: SortState,
}

impl UIConfig {
    pub fn new(
        with_background_color: bool,
        source_name: String,
        vs_currency: String,
        initial_sort: SortState,
    ) -> Self {
        Self {
            with_background_color,
            source_name,
            vs_currency,
            initial_sort,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying the market table.
    Dashboard(Box<DashboardState>),
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// The environment in which the application is running.
    environment: Environment,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Receives events from worker tasks.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Receives snapshot updates from the fetcher.
    snapshot_receiver: mpsc::Receiver<SnapshotUpdate>,

    /// Requests an out-of-band refresh cycle from the fetcher.
    refresh_sender: mpsc::Sender<()>,

    /// Broadcasts shutdown signal to worker tasks.
    shutdown_sender: broadcast::Sender<()>,

    /// UI configuration used when entering the dashboard screen.
    ui_config: UIConfig,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        event_receiver: mpsc::Receiver<WorkerEvent>,
        snapshot_receiver: mpsc::Receiver<SnapshotUpdate>,
        refresh_sender: mpsc::Sender<()>,
        shutdown_sender: broadcast::Sender<()>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            start_time: Instant::now(),
            environment,
            current_screen: Screen::Splash,
            event_receiver,
            snapshot_receiver,
            refresh_sender,
            shutdown_sender,
            ui_config,
        }
    }

    fn enter_dashboard(&mut self) {
        let state = DashboardState::new(
            self.environment.clone(),
            self.start_time,
            self.ui_config.clone(),
        );
        self.current_screen = Screen::Dashboard(Box::new(state));
    }

    /// Applies a sort column selection and requests an immediate refresh.
    fn select_sort_column(&mut self, column: SortColumn) {
        if let Screen::Dashboard(state) = &mut self.current_screen {
            state.select_column(column);
            // A full channel means a refresh is already queued.
            let _ = self.refresh_sender.try_send(());
        }
    }
}

/// Maps a sort hotkey to its column, mirroring the table's column order.
fn sort_column_for_key(code: KeyCode) -> Option<SortColumn> {
    match code {
        KeyCode::Char('1') => Some(SortColumn::Rank),
        KeyCode::Char('2') => Some(SortColumn::Name),
        KeyCode::Char('3') => Some(SortColumn::Price),
        KeyCode::Char('4') => Some(SortColumn::MarketCap),
        KeyCode::Char('5') => Some(SortColumn::Fdv),
        KeyCode::Char('6') => Some(SortColumn::Volume),
        _ => None,
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();

    // UI event loop
    loop {
        // Queue all incoming worker traffic for processing. While the splash
        // screen is up the channels buffer; nothing is dropped.
        if let Screen::Dashboard(state) = &mut app.current_screen {
            while let Ok(event) = app.event_receiver.try_recv() {
                state.add_event(event);
            }
            while let Ok(update) = app.snapshot_receiver.try_recv() {
                state.add_snapshot(update);
            }
        }

        // Update the state based on the current screen
        match &mut app.current_screen {
            Screen::Splash => {}
            Screen::Dashboard(state) => {
                state.update();
            }
        }
        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration() {
                app.enter_dashboard();
                continue;
            }
        }

        // Poll for input events
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    // Skip events that are not KeyEventKind::Press
                    if key.kind == event::KeyEventKind::Release {
                        continue;
                    }

                    // Handle exit events
                    if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                        // Send shutdown signal to workers
                        let _ = app.shutdown_sender.send(());
                        return Ok(());
                    }

                    match &mut app.current_screen {
                        Screen::Splash => {
                            // Any key press will skip the splash screen
                            app.enter_dashboard();
                        }
                        Screen::Dashboard(_) => {
                            if key.code == KeyCode::Char('r') {
                                let _ = app.refresh_sender.try_send(());
                            } else if let Some(column) = sort_column_for_key(key.code) {
                                app.select_sort_column(column);
                            }
                        }
                    }
                }
                Event::Mouse(mouse) => {
                    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                        if let Screen::Dashboard(_) = app.current_screen {
                            let size = terminal.size()?;
                            let area = Rect::new(0, 0, size.width, size.height);
                            let table = renderer::table_area(area);
                            if let Some(column) = crate::ui::dashboard::components::table::
                                header_column_at(table, mouse.column, mouse.row)
                            {
                                app.select_sort_column(column);
                            }
                        }
                    }
                }
                _ => {}
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
