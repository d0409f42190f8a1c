//! Main terminal application logic
//!
//! Owns the terminal lifecycle and translates keyboard input into the
//! typed messages the engine consumes. All state lives in `AppState`;
//! the only presentation-side state is which input region has focus.

use std::io::{self, stdout};
use std::sync::Arc;

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use td_api_contract::{Language, Worker};
use td_client_api::ClientApi;

use crate::draft::{Draft, TaskField};
use crate::error::TuiResult;
use crate::event::{Event, EventHandler};
use crate::model::Model;
use crate::msg::Msg;
use crate::session::EditState;
use crate::store::TaskStore;
use crate::ui;
use crate::viewmodel::ViewModel;

/// Engine state rendered by the UI
#[derive(Debug)]
pub struct AppState {
    pub store: TaskStore,
    pub draft: Draft,
    pub edit: EditState,
    pub selected_task: usize,
    pub source_language: Language,
    pub target_language: Language,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            store: TaskStore::new(),
            draft: Draft::default(),
            edit: EditState::Idle,
            selected_task: 0,
            source_language: Language::Ru,
            target_language: Language::En,
            error: None,
            notice: None,
        }
    }
}

/// A position in the draft or edit form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Text,
    Comment,
    Worker,
    Deadline,
}

impl FormField {
    fn next(self) -> Self {
        match self {
            FormField::Text => FormField::Comment,
            FormField::Comment => FormField::Worker,
            FormField::Worker => FormField::Deadline,
            FormField::Deadline => FormField::Text,
        }
    }

    fn previous(self) -> Self {
        match self {
            FormField::Text => FormField::Deadline,
            FormField::Comment => FormField::Text,
            FormField::Worker => FormField::Comment,
            FormField::Deadline => FormField::Worker,
        }
    }
}

/// Which input region receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Tasks,
    Draft(FormField),
    Edit(FormField),
}

/// Main terminal application
pub struct App<C: ClientApi> {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    event_handler: EventHandler,
    model: Model<C>,
    focus: Focus,
}

impl<C: ClientApi> App<C> {
    /// Create a new terminal application
    pub fn new(client: Arc<C>) -> TuiResult<Self> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            event_handler: EventHandler::new(),
            model: Model::new(client),
            focus: Focus::Tasks,
        })
    }

    /// Run the application loop
    pub async fn run(&mut self) -> TuiResult<()> {
        self.event_handler.run();
        self.model.load_initial_data().await;

        loop {
            let view_model = ViewModel::from_state(&self.model.state);
            let focus = self.focus;
            self.terminal.draw(|f| {
                let area = f.area();
                ui::draw(f, area, &view_model, focus);
            })?;

            match self.event_handler.next().await {
                Some(Event::Quit) | None => break,
                Some(Event::Input(event)) => {
                    if self.handle_input(event).await {
                        break;
                    }
                }
                Some(Event::Tick) => {}
                Some(Event::Error(e)) => {
                    self.model.state.error = Some(format!("Event error: {}", e));
                }
            }
        }

        self.event_handler.cancel();
        Ok(())
    }

    /// Route one terminal event; returns true when the app should exit
    async fn handle_input(&mut self, event: CrosstermEvent) -> bool {
        let CrosstermEvent::Key(key) = event else {
            return false;
        };
        if key.kind == KeyEventKind::Release {
            return false;
        }

        match self.focus {
            Focus::Tasks => self.handle_tasks_key(key).await,
            Focus::Draft(field) => {
                self.handle_draft_key(field, key).await;
                false
            }
            Focus::Edit(field) => {
                self.handle_edit_key(field, key).await;
                false
            }
        }
    }

    async fn handle_tasks_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Up => self.model.update(Msg::SelectPrevious).await,
            KeyCode::Down => self.model.update(Msg::SelectNext).await,
            KeyCode::Tab => self.focus = Focus::Draft(FormField::Text),
            KeyCode::Char('r') => {
                self.model.update(Msg::RefreshWorkers).await;
                self.model.update(Msg::RefreshTasks).await;
            }
            KeyCode::Char('c') => {
                if let Some((id, status)) = self.selected_task() {
                    self.model
                        .update(Msg::SetStatus {
                            id,
                            complete: !status,
                        })
                        .await;
                }
            }
            KeyCode::Char('d') => {
                if let Some((id, _)) = self.selected_task() {
                    self.model.update(Msg::Remove(id)).await;
                }
            }
            KeyCode::Char('D') => self.model.update(Msg::RemoveAll).await,
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some((id, _)) = self.selected_task() {
                    self.model.update(Msg::StartEdit(id)).await;
                    if self.model.state.edit.is_editing(id) {
                        self.focus = Focus::Edit(FormField::Text);
                    }
                }
            }
            KeyCode::Char('[') => {
                let next = next_language(self.model.state.source_language);
                self.model.update(Msg::SourceLanguage(next)).await;
            }
            KeyCode::Char(']') => {
                let next = next_language(self.model.state.target_language);
                self.model.update(Msg::TargetLanguage(next)).await;
            }
            KeyCode::Char('t') => self.model.update(Msg::Translate).await,
            _ => {}
        }
        false
    }

    async fn handle_draft_key(&mut self, field: FormField, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.focus = Focus::Tasks,
            KeyCode::Tab => self.focus = Focus::Draft(field.next()),
            KeyCode::BackTab => self.focus = Focus::Draft(field.previous()),
            KeyCode::Enter => {
                self.model.update(Msg::SubmitDraft).await;
                if self.model.state.error.is_none() {
                    self.focus = Focus::Tasks;
                }
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down
                if field == FormField::Worker =>
            {
                let step = arrow_step(key.code);
                let current = self.model.state.draft.worker_id;
                if let Some(id) = cycle_worker(self.model.state.store.workers(), current, step) {
                    self.model
                        .update(Msg::DraftField(TaskField::Worker(id)))
                        .await;
                }
            }
            KeyCode::Char(c) if field != FormField::Worker => {
                let mut value = self.draft_value(field);
                value.push(c);
                if let Some(tagged) = text_field(field, value) {
                    self.model.update(Msg::DraftField(tagged)).await;
                }
            }
            KeyCode::Backspace if field != FormField::Worker => {
                let mut value = self.draft_value(field);
                value.pop();
                if let Some(tagged) = text_field(field, value) {
                    self.model.update(Msg::DraftField(tagged)).await;
                }
            }
            _ => {}
        }
    }

    async fn handle_edit_key(&mut self, field: FormField, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.model.update(Msg::CancelEdit).await;
                self.focus = Focus::Tasks;
            }
            KeyCode::Tab => self.focus = Focus::Edit(field.next()),
            KeyCode::BackTab => self.focus = Focus::Edit(field.previous()),
            KeyCode::Enter => {
                self.model.update(Msg::CommitEdit).await;
                // Commit failure keeps the session (and the form) open.
                if self.model.state.edit.session().is_none() {
                    self.focus = Focus::Tasks;
                }
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down
                if field == FormField::Worker =>
            {
                let step = arrow_step(key.code);
                let current = self
                    .model
                    .state
                    .edit
                    .session()
                    .map(|session| session.scratch.worker_id);
                if let Some(id) = cycle_worker(self.model.state.store.workers(), current, step) {
                    self.model
                        .update(Msg::EditField(TaskField::Worker(id)))
                        .await;
                }
            }
            KeyCode::Char(c) if field != FormField::Worker => {
                if let Some(mut value) = self.edit_value(field) {
                    value.push(c);
                    if let Some(tagged) = text_field(field, value) {
                        self.model.update(Msg::EditField(tagged)).await;
                    }
                }
            }
            KeyCode::Backspace if field != FormField::Worker => {
                if let Some(mut value) = self.edit_value(field) {
                    value.pop();
                    if let Some(tagged) = text_field(field, value) {
                        self.model.update(Msg::EditField(tagged)).await;
                    }
                }
            }
            _ => {}
        }
    }

    fn selected_task(&self) -> Option<(i64, bool)> {
        self.model
            .state
            .store
            .tasks()
            .get(self.model.state.selected_task)
            .map(|task| (task.id, task.status))
    }

    fn draft_value(&self, field: FormField) -> String {
        let draft = &self.model.state.draft;
        match field {
            FormField::Text => draft.task_text.clone(),
            FormField::Comment => draft.comment.clone(),
            FormField::Worker => String::new(),
            FormField::Deadline => draft.time.clone(),
        }
    }

    fn edit_value(&self, field: FormField) -> Option<String> {
        let session = self.model.state.edit.session()?;
        Some(match field {
            FormField::Text => session.scratch.text_task.clone(),
            FormField::Comment => session.scratch.comment.clone(),
            FormField::Worker => String::new(),
            FormField::Deadline => session.scratch.time.clone(),
        })
    }
}

impl<C: ClientApi> Drop for App<C> {
    fn drop(&mut self) {
        // Cleanup terminal
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn arrow_step(code: KeyCode) -> i64 {
    match code {
        KeyCode::Left | KeyCode::Up => -1,
        _ => 1,
    }
}

/// Text-carrying variant for a form position; the worker field is cycled,
/// not typed
fn text_field(field: FormField, value: String) -> Option<TaskField> {
    match field {
        FormField::Text => Some(TaskField::Text(value)),
        FormField::Comment => Some(TaskField::Comment(value)),
        FormField::Deadline => Some(TaskField::Deadline(value)),
        FormField::Worker => None,
    }
}

fn next_language(current: Language) -> Language {
    let idx = Language::ALL
        .iter()
        .position(|l| *l == current)
        .unwrap_or(0);
    Language::ALL[(idx + 1) % Language::ALL.len()]
}

/// Step through the worker roster relative to the current assignee
fn cycle_worker(workers: &[Worker], current: Option<i64>, step: i64) -> Option<i64> {
    if workers.is_empty() {
        return None;
    }
    let len = workers.len() as i64;
    let next = match current.and_then(|id| workers.iter().position(|w| w.id == id)) {
        Some(idx) => (idx as i64 + step).rem_euclid(len) as usize,
        None if step < 0 => workers.len() - 1,
        None => 0,
    };
    Some(workers[next].id)
}
