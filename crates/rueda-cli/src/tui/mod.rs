use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;
use rueda_core::{
    resolve_video, CategoryCatalog, CategoryFilter, EmbedVideo, Ingested, Move, Selection,
    SelectionSummary, SortField,
};
use rueda_etl::{
    spawn_categories_load, spawn_moves_load, CategoryLoadError, Config, DocumentLoader,
    Liveness, LivenessToken, LoadResult,
};
use tokio::sync::oneshot::{self, error::TryRecvError};

pub mod move_list;
pub mod video_modal;

/// Table rows assumed visible until the first frame is drawn.
const DEFAULT_VIEWPORT_HEIGHT: usize = 20;

/// How long to wait for a key before checking on pending loads.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Progress of the move document load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    Failed(String),
}

/// The video player popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoModal {
    pub title: String,
    pub video: EmbedVideo,
}

/// Application state for the move browser.
#[derive(Debug)]
pub struct App {
    pub state: LoadState,
    /// Every ingested move, in document order.
    pub moves: Vec<Move>,
    /// The filtered and sorted moves on screen.
    pub visible: Vec<Move>,
    pub catalog: CategoryCatalog,
    pub selection: Selection,
    pub selected: usize,
    pub offset: usize,
    /// Table rows visible in the last drawn frame.
    pub viewport_height: usize,
    /// Field warnings raised while ingesting the move document.
    pub warnings: usize,
    pub modal: Option<VideoModal>,
    pub should_quit: bool,
    liveness: Liveness,
}

impl App {
    pub fn new() -> Self {
        Self {
            state: LoadState::Loading,
            moves: Vec::new(),
            visible: Vec::new(),
            catalog: CategoryCatalog::default(),
            selection: Selection::default(),
            selected: 0,
            offset: 0,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            warnings: 0,
            modal: None,
            should_quit: false,
            liveness: Liveness::new(),
        }
    }

    /// A token for loads whose results may only land while this view lives.
    pub fn token(&self) -> LivenessToken {
        self.liveness.token()
    }

    /// Discard any load still in flight.
    pub fn teardown(&self) {
        self.liveness.teardown();
    }

    pub fn on_moves_loaded(&mut self, result: LoadResult<Ingested>) {
        match result {
            Ok(ingested) => {
                self.warnings = ingested.warnings.len();
                self.moves = ingested.moves;
                self.state = LoadState::Loaded;
                self.refresh();
            }
            Err(e) => self.state = LoadState::Failed(e.to_string()),
        }
    }

    /// A failed category load leaves the catalogue empty: rows show raw
    /// category ids and the category filter stays on "All".
    pub fn on_categories_loaded(&mut self, result: Result<CategoryCatalog, CategoryLoadError>) {
        match result {
            Ok(catalog) => self.catalog = catalog,
            Err(e) => log::error!("{}", e),
        }
    }

    pub fn summary(&self) -> SelectionSummary {
        SelectionSummary::new(self.visible.len(), self.moves.len())
    }

    /// Text of the title bar.
    pub fn title(&self) -> String {
        if self.state != LoadState::Loaded {
            return String::from("Rueda Moves");
        }
        match self.warnings {
            0 => format!("Rueda Moves    {}", self.summary()),
            1 => format!("Rueda Moves    {}    1 field warning", self.summary()),
            n => format!("Rueda Moves    {}    {n} field warnings", self.summary()),
        }
    }

    /// Record the rendered table height, scrolling so the selection stays
    /// on screen.
    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height.max(1);
        if self.selected >= self.offset + self.viewport_height {
            self.offset = self.selected + 1 - self.viewport_height;
        }
    }

    /// Label of the active category filter.
    pub fn category_label(&self) -> String {
        match self.selection.category {
            CategoryFilter::All => String::from("All Categories"),
            CategoryFilter::Only(id) => self.catalog.display_name(id).to_string(),
        }
    }

    pub fn selected_move(&self) -> Option<&Move> {
        self.visible.get(self.selected)
    }

    fn refresh(&mut self) {
        self.visible = self.selection.apply(&self.moves);
        self.selected = 0;
        self.offset = 0;
    }

    fn handle_key(&mut self, key: KeyCode) {
        if key == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }

        if self.modal.is_some() {
            if key == KeyCode::Esc {
                self.modal = None;
            }
            return;
        }

        if self.state != LoadState::Loaded {
            return;
        }

        match key {
            KeyCode::Char('j') | KeyCode::Down => {
                if self.selected + 1 < self.visible.len() {
                    self.selected += 1;
                    if self.selected >= self.offset + self.viewport_height {
                        self.offset = self.selected + 1 - self.viewport_height;
                    }
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if self.selected > 0 {
                    self.selected -= 1;
                    if self.selected < self.offset {
                        self.offset = self.selected;
                    }
                }
            }
            KeyCode::Char('c') => {
                self.selection.cycle_category(&self.catalog);
                self.refresh();
            }
            KeyCode::Char('d') => {
                self.selection.cycle_difficulty();
                self.refresh();
            }
            KeyCode::Char('n') => {
                self.selection.toggle_sort(SortField::SpanishName);
                self.refresh();
            }
            KeyCode::Char('s') => {
                self.selection.toggle_sort(SortField::Difficulty);
                self.refresh();
            }
            KeyCode::Enter | KeyCode::Char('v') => self.open_video(),
            _ => {}
        }
    }

    fn open_video(&mut self) {
        let Some(m) = self.selected_move() else {
            return;
        };
        if !m.has_video() {
            return;
        }
        match resolve_video(&m.youtube_link) {
            Ok(video) => {
                self.modal = Some(VideoModal {
                    title: m.spanish_name.clone(),
                    video,
                });
            }
            Err(e) => log::debug!("Not opening video for {}: {}", m.spanish_name, e),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Receivers for loads that have not reported back yet.
#[derive(Debug)]
struct PendingLoads {
    token: LivenessToken,
    moves: Option<oneshot::Receiver<LoadResult<Ingested>>>,
    categories: Option<oneshot::Receiver<Result<CategoryCatalog, CategoryLoadError>>>,
}

impl PendingLoads {
    /// Start both loads on behalf of `app`.
    fn start(loader: &DocumentLoader, app: &App) -> Self {
        Self {
            token: app.token(),
            moves: Some(spawn_moves_load(loader, app.token())),
            categories: Some(spawn_categories_load(loader, app.token())),
        }
    }

    /// Hand finished loads to `app` without blocking. Nothing is applied
    /// once the view has been torn down.
    fn check(&mut self, app: &mut App) {
        if let Some(rx) = self.moves.as_mut() {
            match rx.try_recv() {
                Ok(result) => {
                    self.token.apply(app, |app| app.on_moves_loaded(result));
                    self.moves = None;
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Closed) => {
                    self.token.apply(app, |app| {
                        app.state = LoadState::Failed(String::from("move load was abandoned"));
                    });
                    self.moves = None;
                }
            }
        }

        if let Some(rx) = self.categories.as_mut() {
            match rx.try_recv() {
                Ok(result) => {
                    self.token.apply(app, |app| app.on_categories_loaded(result));
                    self.categories = None;
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Closed) => self.categories = None,
            }
        }
    }
}

/// Run the move browser.
///
/// Starts both document loads, sets up the terminal, runs the event loop,
/// and restores the terminal on exit (including on error). Loads still in
/// flight when the browser closes are discarded.
pub async fn run_tui(config: &Config) -> Result<()> {
    let loader = DocumentLoader::from_config(config)?;
    let mut app = App::new();
    let mut pending = PendingLoads::start(&loader, &app);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, &mut app, &mut pending);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    app.teardown();
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    pending: &mut PendingLoads,
) -> Result<()> {
    loop {
        pending.check(app);

        terminal.draw(|frame| {
            move_list::render(frame, app);
            if let Some(modal) = &app.modal {
                video_modal::render(frame, modal);
            }
        })?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
