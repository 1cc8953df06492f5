//! Main application logic for the terminal user interface.
//!
//! This module contains the `App` struct which owns the store, the theme and
//! the screen state machine. It translates key events into store mutations
//! and re-derives everything it draws from the store on every frame.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use log::info;
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};

use crate::store::Store;
use crate::theme::Theme;
use crate::tui::{
    enums::{AppState, InputMode, Pane},
    input::InputField,
    utils::centered_rect,
};

/// Main application state for the terminal user interface.
///
/// List cursors are view state layered on top of the store; they are
/// re-clamped against the store whenever its revision moves.
pub struct App {
    state: AppState,
    store: Store,
    theme: Theme,
    pane: Pane,
    user_list_state: ListState,
    task_list_state: ListState,
    input: InputField,
    input_mode: InputMode,
    status_message: String,
    seen_revision: u64,
}

impl App {
    /// Create a new App with an empty store, no selection and the light theme.
    pub fn new() -> Self {
        App {
            state: AppState::Browse,
            store: Store::new(),
            theme: Theme::default(),
            pane: Pane::Users,
            user_list_state: ListState::default(),
            task_list_state: ListState::default(),
            input: InputField::new(),
            input_mode: InputMode::None,
            status_message: String::new(),
            seen_revision: 0,
        }
    }

    /// Number of rows in the pane that owns the cursor.
    fn pane_len(&self) -> usize {
        match self.pane {
            Pane::Users => self.store.users().len(),
            Pane::Tasks => self.store.active_user().map_or(0, |u| u.tasks.len()),
        }
    }

    /// Re-clamp both list cursors against the store after a mutation.
    ///
    /// Keyed off the store revision; unchanged revisions skip the work.
    /// Attempts to preserve the cursor position when possible.
    fn sync_with_store(&mut self) {
        if self.seen_revision == self.store.revision() {
            return;
        }
        self.seen_revision = self.store.revision();

        let users_len = self.store.users().len();
        match self.user_list_state.selected() {
            Some(_) if users_len == 0 => self.user_list_state.select(None),
            Some(i) if i >= users_len => self.user_list_state.select(Some(users_len - 1)),
            None if users_len > 0 => self.user_list_state.select(Some(0)),
            _ => {}
        }

        let tasks_len = self.store.active_user().map_or(0, |u| u.tasks.len());
        match self.task_list_state.selected() {
            Some(_) if tasks_len == 0 => self.task_list_state.select(None),
            Some(i) if i >= tasks_len => self.task_list_state.select(Some(tasks_len - 1)),
            None if tasks_len > 0 => self.task_list_state.select(Some(0)),
            _ => {}
        }
    }

    /// Set a status message to display in the status bar.
    fn set_status_message(&mut self, msg: String) {
        self.status_message = msg;
    }

    /// Clear the current status message.
    fn clear_status_message(&mut self) {
        self.status_message.clear();
    }

    /// Leave the current text entry state and drop its buffer.
    fn close_input(&mut self) {
        self.state = AppState::Browse;
        self.input_mode = InputMode::None;
        self.input.clear();
    }

    /// Select the user under the cursor and point the task cursor at the top
    /// of that user's list.
    fn select_under_cursor(&mut self) {
        if let Some(idx) = self.user_list_state.selected() {
            self.store.select_user(idx);
            self.sync_with_store();
            let tasks_len = self.store.active_user().map_or(0, |u| u.tasks.len());
            self.task_list_state
                .select(if tasks_len == 0 { None } else { Some(0) });
            if let Some(user) = self.store.active_user() {
                self.set_status_message(format!("Selected {}", user.name));
            }
        }
    }

    /// Toggle the completion state of the task under the cursor.
    fn toggle_under_cursor(&mut self) {
        if let Some(idx) = self.task_list_state.selected() {
            if self.store.toggle_task(idx) {
                self.sync_with_store();
                let (done, total) = self.store.completion_summary();
                self.set_status_message(format!("{} of {} tasks completed", done, total));
            }
        }
    }

    /// Handle keyboard input while browsing the panes.
    ///
    /// Returns true if the application should quit.
    fn handle_browse_input(&mut self, key: KeyCode, modifiers: KeyModifiers) -> io::Result<bool> {
        match key {
            KeyCode::Char('q') if modifiers.contains(KeyModifiers::CONTROL) => return Ok(true),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return Ok(true),
            KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
            KeyCode::Tab | KeyCode::BackTab => {
                self.pane = self.pane.other();
            }
            KeyCode::Up => {
                let len = self.pane_len();
                let list = match self.pane {
                    Pane::Users => &mut self.user_list_state,
                    Pane::Tasks => &mut self.task_list_state,
                };
                if let Some(selected) = list.selected() {
                    if selected > 0 {
                        list.select(Some(selected - 1));
                    }
                } else if len > 0 {
                    list.select(Some(0));
                }
            }
            KeyCode::Down => {
                let len = self.pane_len();
                let list = match self.pane {
                    Pane::Users => &mut self.user_list_state,
                    Pane::Tasks => &mut self.task_list_state,
                };
                if let Some(selected) = list.selected() {
                    if selected + 1 < len {
                        list.select(Some(selected + 1));
                    }
                } else if len > 0 {
                    list.select(Some(0));
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.pane {
                Pane::Users => self.select_under_cursor(),
                Pane::Tasks => self.toggle_under_cursor(),
            },
            KeyCode::Char('a') => match self.pane {
                Pane::Users => {
                    self.input = InputField::new();
                    self.state = AppState::AddUser;
                    self.input_mode = InputMode::Text;
                }
                Pane::Tasks => {
                    // The add-task form is only reachable with a selection.
                    if self.store.selected().is_some() {
                        self.input = InputField::new();
                        self.state = AppState::AddTask;
                        self.input_mode = InputMode::Text;
                    }
                }
            },
            KeyCode::Char('e') => {
                if self.pane == Pane::Tasks {
                    if let Some(idx) = self.task_list_state.selected() {
                        if let Some(task) =
                            self.store.active_user().and_then(|u| u.tasks.get(idx))
                        {
                            self.input = InputField::with_value(&task.text);
                            self.state = AppState::EditTask(idx);
                            self.input_mode = InputMode::Text;
                        }
                    }
                }
            }
            KeyCode::Char('d') => {
                if self.pane == Pane::Tasks {
                    if let Some(idx) = self.task_list_state.selected() {
                        if self.store.delete_task(idx) {
                            self.sync_with_store();
                            self.set_status_message("Task deleted".to_string());
                        }
                    }
                }
            }
            KeyCode::Char('x') => {
                if self.store.selected().is_some() {
                    self.store.deselect_user();
                    self.sync_with_store();
                    self.pane = Pane::Users;
                    self.set_status_message("Selection cleared".to_string());
                }
            }
            KeyCode::Char('t') => {
                self.theme = self.theme.toggle();
                info!("theme toggled to {}", self.theme.label());
                self.set_status_message(format!("Theme: {}", self.theme.label()));
            }
            KeyCode::Char('h') => {
                self.state = AppState::Help;
            }
            _ => {}
        }
        Ok(false)
    }

    /// Handle keyboard input in the add-user, add-task and edit-task states.
    ///
    /// Returns true if the application should quit.
    fn handle_text_input(&mut self, key: KeyCode) -> io::Result<bool> {
        match key {
            KeyCode::Esc => self.close_input(),
            KeyCode::Enter => self.submit_input(),
            KeyCode::Backspace => self.input.handle_backspace(),
            KeyCode::Delete => self.input.handle_delete(),
            KeyCode::Left => self.input.move_cursor_left(),
            KeyCode::Right => self.input.move_cursor_right(),
            KeyCode::Char(c) => self.input.handle_char(c),
            _ => {}
        }
        Ok(false)
    }

    /// Submit the current text entry to the store.
    ///
    /// Empty add submissions are ignored without comment and the field stays
    /// open. An empty edit submission abandons the edit: the modal closes and
    /// the original text survives.
    fn submit_input(&mut self) {
        match self.state {
            AppState::AddUser => {
                if self.store.add_user(self.input.trimmed()) {
                    self.sync_with_store();
                    self.user_list_state
                        .select(Some(self.store.users().len() - 1));
                    self.close_input();
                    self.set_status_message("User added".to_string());
                }
            }
            AppState::AddTask => {
                if self.store.add_task(self.input.trimmed()) {
                    self.sync_with_store();
                    let len = self.store.active_user().map_or(0, |u| u.tasks.len());
                    self.task_list_state.select(Some(len - 1));
                    self.close_input();
                    self.set_status_message("Task added".to_string());
                }
            }
            AppState::EditTask(idx) => {
                let applied = self.store.edit_task(idx, self.input.trimmed());
                self.close_input();
                if applied {
                    self.sync_with_store();
                    self.set_status_message("Task updated".to_string());
                }
            }
            _ => {}
        }
    }

    /// Handle keyboard input when viewing the help screen.
    ///
    /// Returns true if the application should quit.
    fn handle_help_input(&mut self, key: KeyCode) -> io::Result<bool> {
        match key {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('h') => {
                self.state = AppState::Browse;
            }
            _ => {}
        }
        Ok(false)
    }

    /// Poll for and handle keyboard events based on current application state.
    ///
    /// Returns true if the application should quit.
    fn handle_input(&mut self) -> io::Result<bool> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                self.clear_status_message();

                let should_quit = match self.state {
                    AppState::Browse => self.handle_browse_input(key.code, key.modifiers)?,
                    AppState::AddUser | AppState::AddTask | AppState::EditTask(_) => {
                        self.handle_text_input(key.code)?
                    }
                    AppState::Help => self.handle_help_input(key.code)?,
                };
                if should_quit {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    /// Render the users sidebar: the list on top, the active-user summary
    /// below.
    fn render_users(&mut self, f: &mut Frame, area: Rect) {
        let palette = self.theme.palette();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(4)].as_ref())
            .split(area);

        let border_style = if self.pane == Pane::Users {
            Style::default().fg(palette.accent)
        } else {
            Style::default().fg(palette.border)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Users ")
            .border_style(border_style);

        if self.store.users().is_empty() {
            let placeholder = Paragraph::new("No users yet. Press 'a' to add one.")
                .style(Style::default().fg(palette.dim))
                .block(block)
                .wrap(Wrap { trim: true });
            f.render_widget(placeholder, chunks[0]);
        } else {
            let selected = self.store.selected();
            let items: Vec<ListItem> = self
                .store
                .users()
                .iter()
                .enumerate()
                .map(|(i, user)| {
                    let (marker, style) = if selected == Some(i) {
                        (
                            "* ",
                            Style::default()
                                .fg(palette.accent)
                                .add_modifier(Modifier::BOLD),
                        )
                    } else {
                        ("  ", Style::default().fg(palette.text))
                    };
                    ListItem::new(Line::from(vec![
                        Span::styled(marker, Style::default().fg(palette.accent)),
                        Span::styled(user.name.clone(), style),
                    ]))
                })
                .collect();

            let list = List::new(items).block(block).highlight_style(
                Style::default()
                    .bg(palette.highlight_bg)
                    .fg(palette.highlight_fg),
            );
            f.render_stateful_widget(list, chunks[0], &mut self.user_list_state);
        }

        self.render_user_info(f, chunks[1]);
    }

    /// Render the active-user summary, recomputed from the store every frame.
    fn render_user_info(&mut self, f: &mut Frame, area: Rect) {
        let palette = self.theme.palette();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border));

        let text = match self.store.active_user() {
            Some(user) => {
                let (done, total) = self.store.completion_summary();
                vec![
                    Line::from(Span::styled(
                        user.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(format!("Tasks: {} / {} completed", done, total)),
                ]
            }
            None => vec![Line::from(Span::styled(
                "No user selected",
                Style::default().fg(palette.dim),
            ))],
        };

        let info = Paragraph::new(text).block(block);
        f.render_widget(info, area);
    }

    /// Render the tasks pane for the active user, or a notice when no user is
    /// selected.
    fn render_tasks(&mut self, f: &mut Frame, area: Rect) {
        let palette = self.theme.palette();
        let border_style = if self.pane == Pane::Tasks {
            Style::default().fg(palette.accent)
        } else {
            Style::default().fg(palette.border)
        };

        let Some(user) = self.store.active_user() else {
            let block = Block::default()
                .borders(Borders::ALL)
                .title(" Tasks ")
                .border_style(border_style);
            let placeholder = Paragraph::new("Select a user to see their tasks.")
                .style(Style::default().fg(palette.dim))
                .block(block)
                .wrap(Wrap { trim: true });
            f.render_widget(placeholder, area);
            return;
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Tasks: {} ", user.name))
            .border_style(border_style);

        if user.tasks.is_empty() {
            let placeholder = Paragraph::new("No tasks yet. Press 'a' to add one.")
                .style(Style::default().fg(palette.dim))
                .block(block)
                .wrap(Wrap { trim: true });
            f.render_widget(placeholder, area);
            return;
        }

        let items: Vec<ListItem> = user
            .tasks
            .iter()
            .map(|task| {
                let (mark, style) = if task.completed {
                    (
                        "[x] ",
                        Style::default()
                            .fg(palette.completed)
                            .add_modifier(Modifier::CROSSED_OUT),
                    )
                } else {
                    ("[ ] ", Style::default().fg(palette.text))
                };
                ListItem::new(Line::from(vec![
                    Span::styled(mark, Style::default().fg(palette.dim)),
                    Span::styled(task.text.clone(), style),
                ]))
            })
            .collect();

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .bg(palette.highlight_bg)
                .fg(palette.highlight_fg),
        );
        f.render_stateful_widget(list, area, &mut self.task_list_state);
    }

    /// Render the single-line text entry popup for the add and edit states.
    fn render_input_popup(&mut self, f: &mut Frame, area: Rect, title: &str) {
        let palette = self.theme.palette();
        let popup = centered_rect(50, 20, area);
        let popup = Rect {
            height: popup.height.min(3),
            ..popup
        };
        f.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", title))
            .border_style(Style::default().fg(palette.accent))
            .style(Style::default().bg(palette.background));
        let text = Paragraph::new(self.input.value.clone())
            .style(Style::default().fg(palette.text))
            .block(block);
        f.render_widget(text, popup);

        if self.input_mode == InputMode::Text {
            let column = self.input.value[..self.input.cursor].chars().count() as u16;
            f.set_cursor_position((popup.x + column + 1, popup.y + 1));
        }
    }

    /// Render the help screen with keyboard shortcuts.
    fn render_help(&mut self, f: &mut Frame, area: Rect) {
        let help_text = vec![
            Line::from(Span::styled(
                "Roster Help",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Browsing:",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from("  Tab          Switch between Users and Tasks"),
            Line::from("  Up/Down      Move the cursor"),
            Line::from("  Enter/Space  Select user / toggle task"),
            Line::from("  a            Add user (Users pane) or task (Tasks pane)"),
            Line::from("  e            Edit the task under the cursor"),
            Line::from("  d            Delete the task under the cursor"),
            Line::from("  x            Deselect the current user"),
            Line::from("  t            Toggle light/dark theme"),
            Line::from("  h            Show this help"),
            Line::from("  q/Esc/Ctrl+C Quit"),
            Line::from(""),
            Line::from(Span::styled(
                "Text entry:",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from("  Enter        Confirm"),
            Line::from("  Esc          Cancel"),
            Line::from("  Left/Right   Move the cursor"),
            Line::from(""),
            Line::from("Empty submissions are ignored. Nothing is saved across sessions."),
        ];

        let paragraph = Paragraph::new(help_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Help - Press Esc to return"),
            )
            .wrap(Wrap { trim: true });

        f.render_widget(paragraph, area);
    }

    /// Render the status bar at the bottom of the screen.
    fn render_status_bar(&mut self, f: &mut Frame, area: Rect) {
        let palette = self.theme.palette();
        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else {
            match self.state {
                AppState::Browse => {
                    let deselect_tip = if self.store.selected().is_some() {
                        " | x deselect"
                    } else {
                        ""
                    };
                    format!(
                        "Users: {} | Theme: {} | Press 'h' for help{}",
                        self.store.users().len(),
                        self.theme.label(),
                        deselect_tip
                    )
                }
                AppState::AddUser => "New user: Enter to add, Esc to cancel".to_string(),
                AppState::AddTask => "New task: Enter to add, Esc to cancel".to_string(),
                AppState::EditTask(_) => "Edit task: Enter to confirm, Esc to cancel".to_string(),
                AppState::Help => "Help".to_string(),
            }
        };

        let status = Paragraph::new(status_text)
            .style(
                Style::default()
                    .bg(palette.highlight_bg)
                    .fg(palette.highlight_fg),
            )
            .alignment(Alignment::Left);

        f.render_widget(status, area);
    }

    /// Main render function that dispatches to the view renderers.
    fn render(&mut self, f: &mut Frame) {
        let palette = self.theme.palette();
        f.render_widget(
            Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
            f.area(),
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
            .split(f.area());

        match self.state {
            AppState::Help => self.render_help(f, chunks[0]),
            _ => {
                let body = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(32), Constraint::Percentage(68)].as_ref())
                    .split(chunks[0]);
                self.render_users(f, body[0]);
                self.render_tasks(f, body[1]);

                match self.state {
                    AppState::AddUser => self.render_input_popup(f, chunks[0], "New User"),
                    AppState::AddTask => self.render_input_popup(f, chunks[0], "New Task"),
                    AppState::EditTask(_) => self.render_input_popup(f, chunks[0], "Edit Task"),
                    _ => {}
                }
            }
        }

        self.render_status_bar(f, chunks[1]);
    }

    /// Main event loop for the TUI application.
    ///
    /// Handles rendering and input processing until the user exits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.handle_input()? {
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_text_input(KeyCode::Char(c)).unwrap();
        }
    }

    fn app_with_ana() -> App {
        let mut app = App::new();
        app.handle_browse_input(KeyCode::Char('a'), KeyModifiers::NONE)
            .unwrap();
        type_text(&mut app, "Ana");
        app.handle_text_input(KeyCode::Enter).unwrap();
        app.handle_browse_input(KeyCode::Enter, KeyModifiers::NONE)
            .unwrap();
        app
    }

    #[test]
    fn add_user_flow_creates_and_returns_to_browse() {
        let app = app_with_ana();
        assert!(app.state == AppState::Browse);
        assert_eq!(app.store.users().len(), 1);
        assert_eq!(app.store.active_user().map(|u| u.name.as_str()), Some("Ana"));
    }

    #[test]
    fn empty_add_user_submission_keeps_the_form_open() {
        let mut app = App::new();
        app.handle_browse_input(KeyCode::Char('a'), KeyModifiers::NONE)
            .unwrap();
        type_text(&mut app, "   ");
        app.handle_text_input(KeyCode::Enter).unwrap();

        assert!(app.state == AppState::AddUser);
        assert!(app.store.users().is_empty());
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn add_task_key_is_ignored_without_a_selection() {
        let mut app = App::new();
        app.handle_browse_input(KeyCode::Char('a'), KeyModifiers::NONE)
            .unwrap();
        type_text(&mut app, "Ana");
        app.handle_text_input(KeyCode::Enter).unwrap();

        app.handle_browse_input(KeyCode::Tab, KeyModifiers::NONE)
            .unwrap();
        app.handle_browse_input(KeyCode::Char('a'), KeyModifiers::NONE)
            .unwrap();
        assert!(app.state == AppState::Browse);
    }

    #[test]
    fn edit_modal_confirm_applies_the_replacement() {
        let mut app = app_with_ana();
        app.handle_browse_input(KeyCode::Tab, KeyModifiers::NONE)
            .unwrap();
        app.handle_browse_input(KeyCode::Char('a'), KeyModifiers::NONE)
            .unwrap();
        type_text(&mut app, "Buy milk");
        app.handle_text_input(KeyCode::Enter).unwrap();

        app.handle_browse_input(KeyCode::Char('e'), KeyModifiers::NONE)
            .unwrap();
        assert!(matches!(app.state, AppState::EditTask(0)));
        assert_eq!(app.input.value, "Buy milk");

        for _ in 0.."milk".len() {
            app.handle_text_input(KeyCode::Backspace).unwrap();
        }
        type_text(&mut app, "oat milk");
        app.handle_text_input(KeyCode::Enter).unwrap();

        assert!(app.state == AppState::Browse);
        assert_eq!(app.store.active_user().unwrap().tasks[0].text, "Buy oat milk");
    }

    #[test]
    fn edit_modal_cancel_leaves_the_task_unchanged() {
        let mut app = app_with_ana();
        app.handle_browse_input(KeyCode::Tab, KeyModifiers::NONE)
            .unwrap();
        app.handle_browse_input(KeyCode::Char('a'), KeyModifiers::NONE)
            .unwrap();
        type_text(&mut app, "Buy milk");
        app.handle_text_input(KeyCode::Enter).unwrap();
        let revision = app.store.revision();

        app.handle_browse_input(KeyCode::Char('e'), KeyModifiers::NONE)
            .unwrap();
        type_text(&mut app, " changed");
        app.handle_text_input(KeyCode::Esc).unwrap();

        assert!(app.state == AppState::Browse);
        assert_eq!(app.store.active_user().unwrap().tasks[0].text, "Buy milk");
        assert_eq!(app.store.revision(), revision);
    }

    #[test]
    fn edit_modal_empty_submission_abandons_the_edit() {
        let mut app = app_with_ana();
        app.handle_browse_input(KeyCode::Tab, KeyModifiers::NONE)
            .unwrap();
        app.handle_browse_input(KeyCode::Char('a'), KeyModifiers::NONE)
            .unwrap();
        type_text(&mut app, "Buy milk");
        app.handle_text_input(KeyCode::Enter).unwrap();

        app.handle_browse_input(KeyCode::Char('e'), KeyModifiers::NONE)
            .unwrap();
        for _ in 0.."Buy milk".len() {
            app.handle_text_input(KeyCode::Backspace).unwrap();
        }
        app.handle_text_input(KeyCode::Enter).unwrap();

        assert!(app.state == AppState::Browse);
        assert_eq!(app.store.active_user().unwrap().tasks[0].text, "Buy milk");
    }

    #[test]
    fn delete_clamps_the_task_cursor() {
        let mut app = app_with_ana();
        app.handle_browse_input(KeyCode::Tab, KeyModifiers::NONE)
            .unwrap();
        for text in ["one", "two"] {
            app.handle_browse_input(KeyCode::Char('a'), KeyModifiers::NONE)
                .unwrap();
            type_text(&mut app, text);
            app.handle_text_input(KeyCode::Enter).unwrap();
        }
        assert_eq!(app.task_list_state.selected(), Some(1));

        app.handle_browse_input(KeyCode::Char('d'), KeyModifiers::NONE)
            .unwrap();
        assert_eq!(app.task_list_state.selected(), Some(0));

        app.handle_browse_input(KeyCode::Char('d'), KeyModifiers::NONE)
            .unwrap();
        assert_eq!(app.task_list_state.selected(), None);
        assert!(app.store.active_user().unwrap().tasks.is_empty());
    }

    #[test]
    fn theme_key_flips_the_mode() {
        let mut app = App::new();
        app.handle_browse_input(KeyCode::Char('t'), KeyModifiers::NONE)
            .unwrap();
        assert_eq!(app.theme, Theme::Dark);
        app.handle_browse_input(KeyCode::Char('t'), KeyModifiers::NONE)
            .unwrap();
        assert_eq!(app.theme, Theme::Light);
    }

    #[test]
    fn deselect_clears_selection_and_returns_to_the_users_pane() {
        let mut app = app_with_ana();
        app.handle_browse_input(KeyCode::Tab, KeyModifiers::NONE)
            .unwrap();
        app.handle_browse_input(KeyCode::Char('x'), KeyModifiers::NONE)
            .unwrap();

        assert!(app.store.active_user().is_none());
        assert_eq!(app.pane, Pane::Users);
        assert_eq!(app.task_list_state.selected(), None);
    }
}
