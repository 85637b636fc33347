//! TUI application state and key handling

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use shared::models::BloodGroup;
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;
use tui_logger::{TuiWidgetEvent, TuiWidgetState};

use crate::{EmployeeBoard, EmployeeGateway, PAGE_SIZE};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Browse,
    Search,
    Edit,
    ConfirmDelete,
}

/// Form fields in tab order
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Name,
    Email,
    Address,
    DateOfJoin,
    BloodGroup,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Email,
        FormField::Address,
        FormField::DateOfJoin,
        FormField::BloodGroup,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Address => "Address",
            FormField::DateOfJoin => "Date of Join (YYYY-MM-DD)",
            FormField::BloodGroup => "Blood Group",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Text inputs of the edit form (blood group is cycled, not typed)
#[derive(Debug, Default, Clone)]
pub struct FormInputs {
    pub name: Input,
    pub email: Input,
    pub address: Input,
    pub date_of_join: Input,
}

impl FormInputs {
    pub fn get(&self, field: FormField) -> Option<&Input> {
        match field {
            FormField::Name => Some(&self.name),
            FormField::Email => Some(&self.email),
            FormField::Address => Some(&self.address),
            FormField::DateOfJoin => Some(&self.date_of_join),
            FormField::BloodGroup => None,
        }
    }

    fn get_mut(&mut self, field: FormField) -> Option<&mut Input> {
        match field {
            FormField::Name => Some(&mut self.name),
            FormField::Email => Some(&mut self.email),
            FormField::Address => Some(&mut self.address),
            FormField::DateOfJoin => Some(&mut self.date_of_join),
            FormField::BloodGroup => None,
        }
    }
}

pub struct App<G> {
    pub board: EmployeeBoard<G>,
    pub mode: Mode,
    /// Selected row within the current page
    pub selected: usize,
    pub search_input: Input,
    pub form: FormInputs,
    pub field: FormField,
    /// Record awaiting delete confirmation
    pub pending_delete: Option<String>,
    pub show_logs: bool,
    pub logger_state: TuiWidgetState,
    pub should_quit: bool,
}

impl<G: EmployeeGateway> App<G> {
    pub fn new(board: EmployeeBoard<G>) -> Self {
        Self {
            board,
            mode: Mode::default(),
            selected: 0,
            search_input: Input::default(),
            form: FormInputs::default(),
            field: FormField::default(),
            pending_delete: None,
            show_logs: false,
            logger_state: TuiWidgetState::new(),
            should_quit: false,
        }
    }

    pub async fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.mode {
            Mode::Browse => self.on_browse_key(key).await,
            Mode::Search => self.on_search_key(key),
            Mode::Edit => self.on_edit_key(key).await,
            Mode::ConfirmDelete => self.on_confirm_key(key).await,
        }
    }

    fn rows_on_page(&self) -> usize {
        self.board.page_rows().len()
    }

    fn clamp_selection(&mut self) {
        let rows = self.rows_on_page();
        self.selected = self.selected.min(rows.saturating_sub(1));
    }

    fn selected_record_id(&self) -> Option<String> {
        self.board
            .page_rows()
            .get(self.selected)
            .map(|r| r.id.clone())
    }

    async fn on_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('/') => self.mode = Mode::Search,
            KeyCode::Char('a') => {
                self.board.open_add();
                self.load_form();
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                let record = self.board.page_rows().get(self.selected).map(|r| (*r).clone());
                if let Some(record) = record {
                    self.board.open_edit(&record);
                    self.load_form();
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(id) = self.selected_record_id() {
                    self.pending_delete = Some(id);
                    self.mode = Mode::ConfirmDelete;
                }
            }
            KeyCode::Char('r') => {
                self.board.refresh().await;
                self.clamp_selection();
            }
            KeyCode::Char('l') => self.show_logs = !self.show_logs,
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => {
                if self.selected + 1 < self.rows_on_page() {
                    self.selected += 1;
                }
            }
            KeyCode::Left | KeyCode::PageUp => {
                self.board.prev_page();
                self.clamp_selection();
            }
            KeyCode::Right | KeyCode::PageDown => {
                self.board.next_page();
                self.clamp_selection();
            }
            // scroll the log panel
            KeyCode::Char('[') => self.logger_state.transition(TuiWidgetEvent::PrevPageKey),
            KeyCode::Char(']') => self.logger_state.transition(TuiWidgetEvent::NextPageKey),
            _ => {}
        }
    }

    fn on_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Down => self.mode = Mode::Browse,
            _ => {
                // filter on every keystroke
                if self.search_input.handle_event(&Event::Key(key)).is_some() {
                    self.board.set_search(self.search_input.value());
                    self.selected = 0;
                }
            }
        }
    }

    async fn on_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.board.cancel();
                self.mode = Mode::Browse;
            }
            KeyCode::Enter => {
                self.store_form();
                self.board.save().await;
                if !self.board.is_modal_open() {
                    self.mode = Mode::Browse;
                    self.clamp_selection();
                }
            }
            KeyCode::Tab | KeyCode::Down => self.field = self.field.next(),
            KeyCode::BackTab | KeyCode::Up => self.field = self.field.prev(),
            KeyCode::Left if self.field == FormField::BloodGroup => self.cycle_blood_group(false),
            KeyCode::Right | KeyCode::Char(' ') if self.field == FormField::BloodGroup => {
                self.cycle_blood_group(true)
            }
            KeyCode::Backspace | KeyCode::Delete if self.field == FormField::BloodGroup => {
                self.board.draft_mut().blood_group = None;
            }
            _ => {
                if let Some(input) = self.form.get_mut(self.field) {
                    input.handle_event(&Event::Key(key));
                }
            }
        }
    }

    async fn on_confirm_key(&mut self, key: KeyEvent) {
        let answer = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => true,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => false,
            _ => return,
        };

        if let Some(id) = self.pending_delete.take() {
            self.board.delete(&id, &mut |_: &str| answer).await;
        }
        self.mode = Mode::Browse;
        self.clamp_selection();
    }

    fn cycle_blood_group(&mut self, forward: bool) {
        let draft = self.board.draft_mut();
        draft.blood_group = Some(match (draft.blood_group, forward) {
            (None, true) => BloodGroup::A,
            (None, false) => BloodGroup::O,
            (Some(g), true) => g.next(),
            (Some(g), false) => g.prev(),
        });
    }

    /// Copy the board's draft into the text inputs and enter edit mode
    fn load_form(&mut self) {
        let draft = self.board.draft();
        self.form = FormInputs {
            name: Input::new(draft.name.clone()),
            email: Input::new(draft.email.clone()),
            address: Input::new(draft.address.clone()),
            date_of_join: Input::new(draft.date_of_join.clone()),
        };
        self.field = FormField::Name;
        self.mode = Mode::Edit;
    }

    fn store_form(&mut self) {
        let draft = self.board.draft_mut();
        draft.name = self.form.name.value().to_string();
        draft.email = self.form.email.value().to_string();
        draft.address = self.form.address.value().to_string();
        draft.date_of_join = self.form.date_of_join.value().to_string();
    }

    /// Page indicator, e.g. `2/3`
    pub fn page_label(&self) -> String {
        format!("{}/{}", self.board.page() + 1, self.board.page_count())
    }

    pub fn page_size(&self) -> usize {
        PAGE_SIZE
    }
}

#[cfg(all(test, feature = "in-process"))]
mod tests {
    use super::*;
    use crate::{Notice, OneshotHttpClient};
    use employee_server::db::DbService;
    use employee_server::{Config, EmployeeRepository, ServerState, build_app};
    use std::sync::Arc;

    async fn app() -> App<OneshotHttpClient> {
        let db = DbService::memory().await.unwrap();
        let router = build_app(ServerState::new(
            Config::in_memory(),
            Arc::new(EmployeeRepository::new(db.db)),
        ));
        let mut board = EmployeeBoard::new(OneshotHttpClient::new(router));
        board.mount().await;
        App::new(board)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    async fn type_text(app: &mut App<OneshotHttpClient>, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).await;
        }
    }

    async fn add(app: &mut App<OneshotHttpClient>, name: &str, email: &str) {
        app.handle_key(key(KeyCode::Char('a'))).await;
        type_text(app, name).await;
        app.handle_key(key(KeyCode::Tab)).await;
        type_text(app, email).await;
        app.handle_key(key(KeyCode::Enter)).await;
    }

    #[tokio::test]
    async fn add_through_form() {
        let mut app = app().await;
        app.handle_key(key(KeyCode::Char('a'))).await;
        assert_eq!(app.mode, Mode::Edit);

        type_text(&mut app, "Jaya").await;
        app.handle_key(key(KeyCode::Tab)).await;
        type_text(&mut app, "jaya@example.com").await;
        app.handle_key(key(KeyCode::Tab)).await;
        app.handle_key(key(KeyCode::Tab)).await;
        type_text(&mut app, "2024-01-02").await;
        app.handle_key(key(KeyCode::Tab)).await;
        app.handle_key(key(KeyCode::Right)).await;
        app.handle_key(key(KeyCode::Right)).await;
        app.handle_key(key(KeyCode::Enter)).await;

        assert_eq!(app.mode, Mode::Browse);
        let rows = app.board.employees();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Jaya");
        assert_eq!(rows[0].date_of_join.as_deref(), Some("2024-01-02"));
        assert_eq!(rows[0].blood_group, Some(BloodGroup::B));
        assert_eq!(rows[0].employee_id.as_deref(), Some("0001"));
    }

    #[tokio::test]
    async fn duplicate_email_shows_notice() {
        let mut app = app().await;
        add(&mut app, "A", "same@example.com").await;
        add(&mut app, "B", "same@example.com").await;

        assert_eq!(app.board.employees().len(), 1);
        assert!(matches!(
            app.board.notice(),
            Some(Notice::Error(msg)) if msg == "Error adding employee: Email already exists"
        ));
    }

    #[tokio::test]
    async fn search_filters_live() {
        let mut app = app().await;
        add(&mut app, "Jaya", "j@example.com").await;
        add(&mut app, "Ravi", "r@example.com").await;

        app.handle_key(key(KeyCode::Char('/'))).await;
        type_text(&mut app, "jay").await;
        assert_eq!(app.board.filtered().len(), 1);
        app.handle_key(key(KeyCode::Enter)).await;
        assert_eq!(app.mode, Mode::Browse);
    }

    #[tokio::test]
    async fn delete_requires_yes() {
        let mut app = app().await;
        add(&mut app, "Jaya", "j@example.com").await;

        app.handle_key(key(KeyCode::Char('d'))).await;
        assert_eq!(app.mode, Mode::ConfirmDelete);
        app.handle_key(key(KeyCode::Char('n'))).await;
        assert_eq!(app.board.employees().len(), 1);

        app.handle_key(key(KeyCode::Char('d'))).await;
        app.handle_key(key(KeyCode::Char('y'))).await;
        assert_eq!(app.mode, Mode::Browse);
        assert!(app.board.employees().is_empty());
    }

    #[tokio::test]
    async fn edit_updates_selected_row() {
        let mut app = app().await;
        add(&mut app, "Jaya", "j@example.com").await;

        app.handle_key(key(KeyCode::Char('e'))).await;
        assert!(app.board.draft().is_edit());
        app.handle_key(key(KeyCode::Tab)).await;
        app.handle_key(key(KeyCode::Tab)).await;
        type_text(&mut app, "Pune").await;
        app.handle_key(key(KeyCode::Enter)).await;

        let rows = app.board.employees();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].address, "Pune");
        assert_eq!(rows[0].name, "Jaya");
    }
}
