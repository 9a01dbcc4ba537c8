//! TUI Renderer for the browse command
//!
//! ## Design:
//! - `ShoppingSession` owns the domain state (selection, orientation)
//! - Renderer owns UI-only state (list cursor, clickable areas, quit flag)
//! - Terminal resizes are turned into orientation intents, so rotating the
//!   "device" re-runs the presentation selector without losing the selection
//! - Views are rebuilt from fresh view models on every frame

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Position, Rect},
    widgets::ListState,
};

use paneshop_core::{Config, Intent, ScreenViewModel, ShoppingSession};
use paneshop_types::OrientationMode;

use crate::presentation::views::tui::{ProductDetailView, ProductListView, StatusBarView, Theme};

const TICK_RATE: Duration = Duration::from_millis(250);
const STATUS_BAR_HEIGHT: u16 = 3;

/// Clickable regions recorded during the last draw
#[derive(Debug, Clone, Copy, Default)]
struct HitAreas {
    rows: Option<Rect>,
    back: Option<Rect>,
}

pub struct TuiRenderer {
    session: ShoppingSession,
    config: Config,
    orientation_override: Option<OrientationMode>,
    theme: Theme,

    /// UI State: focused list row
    cursor: ListState,

    /// UI State: areas from the last frame, for mouse input
    hit: HitAreas,

    /// UI State: should quit flag
    should_quit: bool,
}

impl TuiRenderer {
    pub fn new(
        session: ShoppingSession,
        config: Config,
        orientation_override: Option<OrientationMode>,
    ) -> Self {
        let theme = Theme::from_config(&config.theme);
        let mut cursor = ListState::default();
        if !session.catalog().is_empty() {
            let start = session.list().selected_row().unwrap_or(0);
            cursor.select(Some(start));
        }

        Self {
            session,
            config,
            orientation_override,
            theme,
            cursor,
            hit: HitAreas::default(),
            should_quit: false,
        }
    }

    pub fn session(&self) -> &ShoppingSession {
        &self.session
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor.selected()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main entry point:
    /// 1. Installs the signal handler, then enters raw mode, the alternate
    ///    screen and mouse capture
    /// 2. Derives the initial orientation from the terminal size
    /// 3. Runs the event loop until quit
    /// 4. Restores the terminal (also when any step above failed) and hands
    ///    the session back for saving
    pub fn run(mut self) -> Result<ShoppingSession> {
        // Raw mode delivers Ctrl-C as a key event, so this only fires on an
        // external SIGINT. It exits without saving the selection.
        ctrlc::set_handler(|| {
            restore_terminal();
            std::process::exit(130);
        })?;

        enable_raw_mode()?;
        let result = self.run_in_terminal();
        restore_terminal();

        result.map(|()| self.session)
    }

    fn run_in_terminal(&mut self) -> Result<()> {
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

        let result = self.event_loop(&mut terminal);
        let _ = terminal.show_cursor();
        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        let size = terminal.size()?;
        self.handle_resize(size.width, size.height)?;

        while !self.should_quit {
            terminal.draw(|f| self.render(f))?;

            if event::poll(TICK_RATE)? {
                self.handle_event(event::read()?)?;
            }
        }

        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(cols, rows) => self.handle_resize(cols, rows),
            _ => Ok(()),
        }
    }

    /// Configuration change: recompute orientation for the new size
    pub fn handle_resize(&mut self, cols: u16, rows: u16) -> Result<()> {
        let orientation = self
            .config
            .orientation_for(cols, rows, self.orientation_override);
        tracing::trace!(cols, rows, %orientation, "resize");
        self.session.dispatch(Intent::Orient(orientation))?;
        self.sync_cursor();
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Only handle key press events, not release
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                if self.session.selection().is_empty() {
                    self.should_quit = true;
                } else {
                    self.back()?;
                }
            }
            KeyCode::Backspace | KeyCode::Left | KeyCode::Char('b') | KeyCode::Char('h') => {
                self.back()?;
            }
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Home => self.move_cursor(isize::MIN),
            KeyCode::End => self.move_cursor(isize::MAX),
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Right | KeyCode::Char('l') => {
                self.activate_cursor()?;
            }
            _ => {}
        }
        Ok(())
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(());
        }
        let position = Position::new(mouse.column, mouse.row);

        if let Some(back) = self.hit.back
            && back.contains(position)
        {
            return self.back();
        }

        if let Some(rows) = self.hit.rows
            && rows.contains(position)
        {
            let index = self.cursor.offset() + usize::from(position.y - rows.y);
            if index < self.session.catalog().len() {
                self.cursor.select(Some(index));
                return self.activate_cursor();
            }
        }

        Ok(())
    }

    fn move_cursor(&mut self, delta: isize) {
        if !self.session.presentation().mounts_list() {
            return;
        }
        let len = self.session.catalog().len();
        if len == 0 {
            return;
        }

        let current = self.cursor.selected().unwrap_or(0) as isize;
        let next = current.saturating_add(delta).clamp(0, len as isize - 1);
        self.cursor.select(Some(next as usize));
    }

    /// Activate the focused row: invokes selection with that product
    fn activate_cursor(&mut self) -> Result<()> {
        if !self.session.presentation().mounts_list() {
            return Ok(());
        }
        let Some(index) = self.cursor.selected() else {
            return Ok(());
        };
        let Some(product) = self.session.catalog().products().get(index) else {
            return Ok(());
        };

        let id = product.id;
        let presentation = self.session.dispatch(Intent::Select(id))?;
        tracing::info!(product = %id, %presentation, "row activated");
        Ok(())
    }

    fn back(&mut self) -> Result<()> {
        if self.session.selection().is_empty() {
            return Ok(());
        }
        let presentation = self.session.dispatch(Intent::Back)?;
        tracing::info!(%presentation, "back");
        self.sync_cursor();
        Ok(())
    }

    /// Keep the cursor on the selected row when the list (re)mounts
    fn sync_cursor(&mut self) {
        if let Some(row) = self.session.list().selected_row() {
            self.cursor.select(Some(row));
        }
    }

    /// Render the current screen. Records clickable areas for mouse input.
    pub fn render(&mut self, f: &mut Frame) {
        let [main, status] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(STATUS_BAR_HEIGHT)])
                .areas(f.area());

        self.hit = HitAreas::default();

        match self.session.screen() {
            ScreenViewModel::Split { list, detail } => {
                let [left, right] =
                    Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
                        .areas(main);

                self.hit.rows = Some(ProductListView::rows_area(left));
                let list_widget = ProductListView::new(&list, self.theme).build_list();
                f.render_stateful_widget(list_widget, left, &mut self.cursor);

                let detail_view = ProductDetailView::new(&detail, self.theme);
                self.hit.back = detail_view.back_button_area(right);
                f.render_widget(detail_view, right);
            }
            ScreenViewModel::List { list } => {
                self.hit.rows = Some(ProductListView::rows_area(main));
                let list_widget = ProductListView::new(&list, self.theme).build_list();
                f.render_stateful_widget(list_widget, main, &mut self.cursor);
            }
            ScreenViewModel::Detail { detail } => {
                let detail_view = ProductDetailView::new(&detail, self.theme);
                self.hit.back = detail_view.back_button_area(main);
                f.render_widget(detail_view, main);
            }
        }

        let selected_name = self.session.selection().current().map(|p| p.name.as_str());
        let status_bar = StatusBarView::new(self.session.presentation(), selected_name, self.theme);
        f.render_widget(status_bar, status);
    }
}

/// Best-effort: every step runs even if an earlier one fails
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}
