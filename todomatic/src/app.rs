//! Application state and event handling.
//!
//! [`App`] owns everything the UI renders: the task store, the fetched
//! user list, the active filter and user selection, the input buffer,
//! and the load lifecycle. Key events mutate this state directly; the
//! only thing that leaves the main thread is an occasional
//! [`FetchCommand`] for the background loader.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use todomatic_api::filter::Filter;
use todomatic_api::task::TaskId;
use todomatic_api::user::User;

use crate::net::{FetchCommand, FetchEvent};
use crate::tasks::{TaskStore, VisibleTask, remaining_label};

/// Load lifecycle of the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Initial (or refresh) load in flight.
    Loading,
    /// The load failed; holds the error message to display.
    Failed(String),
    /// Data arrived; the task list is interactive.
    Ready,
}

/// Which panel is currently focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    /// Input box is focused (default).
    Input,
    /// Task list is focused.
    TaskList,
    /// Filter bar is focused.
    Filters,
}

/// Main application state.
pub struct App {
    /// Load lifecycle state.
    pub phase: Phase,
    /// The in-memory task list.
    pub store: TaskStore,
    /// Users fetched alongside the tasks; read-only afterwards.
    pub users: Vec<User>,
    /// Active display filter.
    pub filter: Filter,
    /// Selected user id; `None` shows all users.
    pub selected_user: Option<u64>,
    /// Current text input.
    pub input: String,
    /// Cursor position in input (byte offset, always on a char boundary).
    pub cursor_position: usize,
    /// Which panel is focused.
    pub focus: PanelFocus,
    /// Selected row in the visible task list.
    pub selected_task: usize,
    /// Task currently being renamed via the input box, if any.
    pub editing: Option<TaskId>,
    /// Transient message for the status bar (validation errors etc.).
    pub notice: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Creates an app in the `Loading` phase with an empty list.
    #[must_use]
    pub fn new(max_task_title_len: usize) -> Self {
        Self {
            phase: Phase::Loading,
            store: TaskStore::new(max_task_title_len),
            users: Vec::new(),
            filter: Filter::All,
            selected_user: None,
            input: String::new(),
            cursor_position: 0,
            focus: PanelFocus::Input,
            selected_task: 0,
            editing: None,
            notice: None,
            should_quit: false,
        }
    }

    /// Applies a [`FetchEvent`] coming from the background loader.
    pub fn apply_fetch_event(&mut self, event: FetchEvent) {
        match event {
            FetchEvent::Loading => self.phase = Phase::Loading,
            FetchEvent::Loaded { tasks, users } => {
                self.store.replace(tasks);
                self.users = users;
                self.phase = Phase::Ready;
                self.notice = None;
                self.clamp_selection();
            }
            FetchEvent::Failed(message) => self.phase = Phase::Failed(message),
        }
    }

    /// The tasks to render, after filter, user selection, and user join.
    #[must_use]
    pub fn visible(&self) -> Vec<VisibleTask<'_>> {
        self.store
            .visible(self.filter, self.selected_user, &self.users)
    }

    /// Heading text above the list: the visible count, pluralized.
    #[must_use]
    pub fn heading(&self) -> String {
        remaining_label(self.visible().len())
    }

    /// Label for the user selector: a username, or "All Users".
    #[must_use]
    pub fn user_label(&self) -> &str {
        self.selected_user
            .and_then(|uid| self.users.iter().find(|u| u.id == uid))
            .map_or("All Users", |u| &u.username)
    }

    /// Handle a key event. Returns a [`FetchCommand`] when the action
    /// needs the background loader (refresh on `r`).
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<FetchCommand> {
        // Global shortcuts
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return None;
            }
            (KeyCode::Esc, _) => {
                if self.editing.is_some() {
                    self.cancel_edit();
                } else {
                    self.should_quit = true;
                }
                return None;
            }
            _ => {}
        }

        // Loading and error screens only react to quit and retry.
        match self.phase {
            Phase::Loading => {
                if key.code == KeyCode::Char('q') {
                    self.should_quit = true;
                }
                return None;
            }
            Phase::Failed(_) => {
                match key.code {
                    KeyCode::Char('q') => self.should_quit = true,
                    KeyCode::Char('r') => return Some(FetchCommand::Refresh),
                    _ => {}
                }
                return None;
            }
            Phase::Ready => {}
        }

        match (key.code, key.modifiers) {
            (KeyCode::Tab, KeyModifiers::SHIFT) => {
                self.cycle_focus_backward();
                return None;
            }
            (KeyCode::Tab | KeyCode::BackTab, _) => {
                self.cycle_focus_forward();
                return None;
            }
            _ => {}
        }

        // Focus-specific shortcuts
        match self.focus {
            PanelFocus::Input => {
                self.handle_input_key(key);
                None
            }
            PanelFocus::TaskList => self.handle_task_list_key(key),
            PanelFocus::Filters => self.handle_filters_key(key),
        }
    }

    /// Handle key event when the input box is focused.
    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_input(),
            KeyCode::Char(c) => self.enter_char(c),
            KeyCode::Backspace => self.delete_char(),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Home => self.cursor_position = 0,
            KeyCode::End => self.cursor_position = self.input.len(),
            _ => {}
        }
    }

    /// Handle key event when the task list is focused.
    fn handle_task_list_key(&mut self, key: KeyEvent) -> Option<FetchCommand> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_prev_task(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next_task(),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Delete | KeyCode::Char('d') => self.delete_selected(),
            KeyCode::Char('e') => self.begin_edit(),
            KeyCode::Char('r') => return Some(FetchCommand::Refresh),
            _ => {}
        }
        None
    }

    /// Handle key event when the filter bar is focused.
    fn handle_filters_key(&mut self, key: KeyEvent) -> Option<FetchCommand> {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.set_filter(self.filter.prev()),
            KeyCode::Right | KeyCode::Char('l') => self.set_filter(self.filter.next()),
            KeyCode::Up | KeyCode::Char('k') => self.cycle_user_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.cycle_user_next(),
            KeyCode::Char('r') => return Some(FetchCommand::Refresh),
            _ => {}
        }
        None
    }

    /// Switch the active filter and re-clamp the selection.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.clamp_selection();
    }

    /// Cycle the user selection forward: All Users -> each user -> All Users.
    pub fn cycle_user_next(&mut self) {
        self.selected_user = match self.selected_user {
            None => self.users.first().map(|u| u.id),
            Some(uid) => {
                let idx = self.users.iter().position(|u| u.id == uid);
                idx.and_then(|i| self.users.get(i + 1)).map(|u| u.id)
            }
        };
        self.clamp_selection();
    }

    /// Cycle the user selection backward.
    pub fn cycle_user_prev(&mut self) {
        self.selected_user = match self.selected_user {
            None => self.users.last().map(|u| u.id),
            Some(uid) => {
                let idx = self.users.iter().position(|u| u.id == uid);
                match idx {
                    Some(0) | None => None,
                    Some(i) => self.users.get(i - 1).map(|u| u.id),
                }
            }
        };
        self.clamp_selection();
    }

    /// Cycle focus forward: Input -> TaskList -> Filters -> Input.
    const fn cycle_focus_forward(&mut self) {
        self.focus = match self.focus {
            PanelFocus::Input => PanelFocus::TaskList,
            PanelFocus::TaskList => PanelFocus::Filters,
            PanelFocus::Filters => PanelFocus::Input,
        };
    }

    /// Cycle focus backward: Input -> Filters -> TaskList -> Input.
    const fn cycle_focus_backward(&mut self) {
        self.focus = match self.focus {
            PanelFocus::Input => PanelFocus::Filters,
            PanelFocus::Filters => PanelFocus::TaskList,
            PanelFocus::TaskList => PanelFocus::Input,
        };
    }

    /// Submit the input box: add a task, or commit a pending rename.
    fn submit_input(&mut self) {
        if self.input.trim().is_empty() {
            return;
        }

        let result = match self.editing.take() {
            Some(id) => {
                let r = self.store.rename(&id, &self.input);
                if r.is_ok() {
                    self.focus = PanelFocus::TaskList;
                }
                r
            }
            None => self
                .store
                .add(&self.input, self.selected_user)
                .map(|_| ()),
        };

        match result {
            Ok(()) => {
                self.input.clear();
                self.cursor_position = 0;
                self.notice = None;
                self.clamp_selection();
            }
            Err(e) => self.notice = Some(e.to_string()),
        }
    }

    /// Start renaming the selected visible task in the input box.
    fn begin_edit(&mut self) {
        let Some((id, title)) = self
            .visible()
            .get(self.selected_task)
            .map(|v| (v.task.id.clone(), v.task.title.clone()))
        else {
            return;
        };
        self.editing = Some(id);
        self.cursor_position = title.len();
        self.input = title;
        self.focus = PanelFocus::Input;
    }

    /// Abandon a pending rename, restoring the empty input box.
    fn cancel_edit(&mut self) {
        self.editing = None;
        self.input.clear();
        self.cursor_position = 0;
        self.focus = PanelFocus::TaskList;
    }

    /// Toggle the completed flag of the selected visible task.
    fn toggle_selected(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        if let Err(e) = self.store.toggle(&id) {
            self.notice = Some(e.to_string());
        }
        // Under Active/Completed the toggled task leaves the view.
        self.clamp_selection();
    }

    /// Delete the selected visible task.
    fn delete_selected(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        if let Err(e) = self.store.remove(&id) {
            self.notice = Some(e.to_string());
        }
        self.clamp_selection();
    }

    /// Id of the selected row in the visible list, if any.
    fn selected_task_id(&self) -> Option<TaskId> {
        self.visible()
            .get(self.selected_task)
            .map(|v| v.task.id.clone())
    }

    /// Move selection up one row.
    const fn select_prev_task(&mut self) {
        if self.selected_task > 0 {
            self.selected_task -= 1;
        }
    }

    /// Move selection down one row.
    fn select_next_task(&mut self) {
        if self.selected_task + 1 < self.visible().len() {
            self.selected_task += 1;
        }
    }

    /// Keep the selection inside the visible list after it shrinks.
    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        if self.selected_task >= len {
            self.selected_task = len.saturating_sub(1);
        }
    }

    /// Insert a character at the cursor position.
    fn enter_char(&mut self, c: char) {
        self.input.insert(self.cursor_position, c);
        self.cursor_position += c.len_utf8();
    }

    /// Delete the character before the cursor.
    fn delete_char(&mut self) {
        if let Some((idx, c)) = self.input[..self.cursor_position].char_indices().next_back() {
            self.input.remove(idx);
            self.cursor_position -= c.len_utf8();
        }
    }

    /// Move cursor left one character.
    fn move_cursor_left(&mut self) {
        if let Some((idx, _)) = self.input[..self.cursor_position].char_indices().next_back() {
            self.cursor_position = idx;
        }
    }

    /// Move cursor right one character.
    fn move_cursor_right(&mut self) {
        if let Some(c) = self.input[self.cursor_position..].chars().next() {
            self.cursor_position += c.len_utf8();
        }
    }
}
