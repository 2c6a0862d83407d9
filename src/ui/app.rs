use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::mvi::Reducer;
use crate::ui::table::{TableIntent, TableReducer, TableState};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Campaign table state (MVI pattern).
    table: TableState,
    /// Tick counter driving the loading spinner.
    tick: usize,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            table: TableState::default(),
            tick: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn table(&self) -> &TableState {
        &self.table
    }

    pub fn tick_count(&self) -> usize {
        self.tick
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn dispatch(&mut self, intent: TableIntent) {
        dispatch_mvi!(self, table, TableReducer, intent);
    }

    /// Key bindings stand in for the page controls: arrows for
    /// previous/next, digits for the numbered buttons currently on screen.
    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.request_quit();
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.request_quit(),
            KeyCode::Left | KeyCode::Char('h') => self.dispatch(TableIntent::PrevPage),
            KeyCode::Right | KeyCode::Char('l') => self.dispatch(TableIntent::NextPage),
            KeyCode::Char(digit @ '1'..='9') => {
                let slot = digit as usize - '0' as usize;
                if let Some(page) = self.table.window_slot(slot) {
                    self.dispatch(TableIntent::GoTo { page });
                }
            }
            _ => {}
        }
    }
}
