//! Application state and key handling.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use sensei_types::protocol::NOT_RUNNING_NOTICE;
use sensei_types::{ExplanationMode, Theme};
use tokio::sync::mpsc;

use super::{
    Chat, ConsoleEvent, ConsoleEventKind, ConsoleLog, Editor, ExecutionStream, Focus,
    FullExplanation, LinePanel, QuickAction, RunConnector, SettingsStore, StreamError,
    ThemeManager, Toasts, ViewState,
};
use crate::api::{explain_source, ExplainClient};

/// File written by the save action.
pub const SAVE_FILE_NAME: &str = "code.cpp";

/// Result of a line explanation batch.
#[derive(Debug)]
pub struct ExplainDone {
    pub generation: u64,
    pub panel: LinePanel,
}

/// Everything [`App::new`] needs from the outside world.
pub struct AppOptions {
    pub explainer: Arc<dyn ExplainClient>,
    pub connector: Box<dyn RunConnector>,
    pub ws_url: String,
    pub settings: Box<dyn SettingsStore>,
    pub save_path: PathBuf,
    pub initial_source: Option<String>,
}

/// Receivers the main loop drains each tick.
pub struct AppEvents {
    console_rx: mpsc::UnboundedReceiver<ConsoleEvent>,
    explain_rx: mpsc::UnboundedReceiver<ExplainDone>,
}

impl AppEvents {
    /// Apply every pending event to `app` without blocking.
    pub fn drain(&mut self, app: &mut App) {
        while let Ok(event) = self.console_rx.try_recv() {
            app.handle_console_event(event);
        }
        while let Ok(done) = self.explain_rx.try_recv() {
            app.handle_explain_done(done);
        }
    }
}

pub struct App {
    pub view: ViewState,
    pub focus: Focus,
    pub editor: Editor,
    pub lines: LinePanel,
    pub full: FullExplanation,
    pub console: ConsoleLog,
    pub console_input: String,
    pub chat: Chat,
    pub chat_input: String,
    pub toasts: Toasts,
    pub should_quit: bool,
    execution: ExecutionStream,
    theme: ThemeManager,
    explainer: Arc<dyn ExplainClient>,
    explain_tx: mpsc::UnboundedSender<ExplainDone>,
    explain_generation: u64,
    save_path: PathBuf,
}

impl App {
    pub fn new(options: AppOptions) -> (Self, AppEvents) {
        let (console_tx, console_rx) = mpsc::unbounded_channel();
        let (explain_tx, explain_rx) = mpsc::unbounded_channel();

        let editor = match &options.initial_source {
            Some(source) => Editor::with_text(source),
            None => Editor::new(),
        };

        let app = Self {
            view: ViewState::new(),
            focus: Focus::Editor,
            editor,
            lines: LinePanel::default(),
            full: FullExplanation::new(),
            console: ConsoleLog::new(),
            console_input: String::new(),
            chat: Chat::new(),
            chat_input: String::new(),
            toasts: Toasts::new(),
            should_quit: false,
            execution: ExecutionStream::new(options.connector, options.ws_url, console_tx),
            theme: ThemeManager::load(options.settings),
            explainer: options.explainer,
            explain_tx,
            explain_generation: 0,
            save_path: options.save_path,
        };

        (
            app,
            AppEvents {
                console_rx,
                explain_rx,
            },
        )
    }

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    pub fn is_running(&self) -> bool {
        self.execution.is_running()
    }

    pub fn save_path(&self) -> &std::path::Path {
        &self.save_path
    }

    fn toast(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.toasts.push(title, description, Instant::now());
    }

    // =========================================================================
    // Actions
    // =========================================================================

    pub fn toggle_theme(&mut self) {
        let result = self.theme.toggle();
        let theme = self.theme.theme();
        if let Err(e) = result {
            tracing::warn!(error = %e, "Failed to persist theme");
        }
        self.toast(
            format!("Switched to {theme} mode"),
            "Theme updated successfully!",
        );
    }

    /// Show a fresh console and start a run of the editor contents.
    pub fn run_code(&mut self) {
        self.view.console_visible = true;
        self.console.clear();
        self.console_input.clear();
        self.focus = Focus::Console;

        let code = self.editor.text();
        self.execution.start(&code);
        self.toast("Connecting...", "Establishing connection to server...");
    }

    pub fn submit_console_input(&mut self) {
        match self.execution.send_input(&self.console_input) {
            Ok(()) => {
                let line = std::mem::take(&mut self.console_input);
                self.console.echo_input(&line);
            }
            Err(StreamError::NotRunning) => self.toast("Error", NOT_RUNNING_NOTICE),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to send console input");
                self.toast("Error", e.to_string());
            }
        }
    }

    /// Hide the console and drop the connection.
    pub fn close_console(&mut self) {
        self.view.console_visible = false;
        self.execution.close();
        if self.focus == Focus::Console {
            self.focus = Focus::Editor;
        }
    }

    /// Switch to line mode and explain the editor contents in the background.
    pub fn line_explain(&mut self) {
        self.view.set_mode(ExplanationMode::Line);
        self.lines = LinePanel::Loading;
        self.explain_generation += 1;
        self.toast("Analyzing", "Getting line-by-line explanations...");

        let generation = self.explain_generation;
        let source = self.editor.text();
        let client = self.explainer.clone();
        let tx = self.explain_tx.clone();
        tokio::spawn(async move {
            let panel = explain_source(client.as_ref(), &source).await;
            let _ = tx.send(ExplainDone { generation, panel });
        });
    }

    pub fn full_explain(&mut self) {
        self.view.set_mode(ExplanationMode::Full);
        self.full.reset();
        self.toast(
            "Full explanation activated",
            "Generating comprehensive code analysis...",
        );
    }

    pub fn toggle_style(&mut self) {
        let style = self.view.toggle_style();
        if self.view.explanation_mode == ExplanationMode::Full {
            self.full.reset();
        }
        self.toast(
            format!("Switched to {} mode", style.name()),
            "Explanations will adjust on next analysis!",
        );
    }

    pub fn toggle_chatbox(&mut self) {
        if self.view.toggle_chatbox() {
            self.focus = Focus::Chat;
        } else if self.focus == Focus::Chat {
            self.focus = Focus::Editor;
        }
    }

    pub fn send_chat(&mut self) {
        if self.chat.send(&self.chat_input, Instant::now()) {
            self.chat_input.clear();
        }
    }

    pub fn quick_action(&mut self, action: QuickAction) {
        self.chat_input = action.prompt().to_string();
        self.send_chat();
    }

    /// Write the editor contents to the save path.
    pub fn save_code(&mut self) {
        match std::fs::write(&self.save_path, self.editor.text()) {
            Ok(()) => {
                let shown = self.save_path.display().to_string();
                self.toast("Code saved!", format!("Code has been saved to {shown}."));
            }
            Err(e) => {
                tracing::warn!(path = %self.save_path.display(), error = %e, "Failed to save code");
                self.toast("Error", format!("Could not save code: {e}"));
            }
        }
    }

    pub fn cycle_focus(&mut self) {
        let order = self.view.focus_order();
        let next = order
            .iter()
            .position(|f| *f == self.focus)
            .map(|i| (i + 1) % order.len())
            .unwrap_or(0);
        self.focus = order[next];
    }

    // =========================================================================
    // Events
    // =========================================================================

    pub fn handle_console_event(&mut self, event: ConsoleEvent) {
        if !self.execution.is_current(event.session) {
            tracing::debug!(session = event.session, "Dropping event from superseded run");
            return;
        }
        if event.kind == ConsoleEventKind::Opened {
            self.toast("Running", "Connected! Program starting...");
        }
        self.console.apply(&event.kind);
    }

    pub fn handle_explain_done(&mut self, done: ExplainDone) {
        if done.generation == self.explain_generation {
            self.lines = done.panel;
        }
    }

    /// Expire toasts and deliver due chat replies.
    pub fn tick(&mut self, now: Instant) {
        self.toasts.tick(now);
        self.chat.tick(now, &mut rand::thread_rng());
    }

    // =========================================================================
    // Keys
    // =========================================================================

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            self.on_control_key(key.code);
            return;
        }

        match key.code {
            KeyCode::Esc => {
                if self.focus == Focus::Console {
                    self.close_console();
                } else {
                    self.focus = Focus::Editor;
                }
                return;
            }
            KeyCode::F(n @ 1..=3) if self.view.chatbox_expanded => {
                self.quick_action(QuickAction::ALL[usize::from(n) - 1]);
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Editor => self.on_editor_key(key.code),
            Focus::Console => {
                if edit_line(&mut self.console_input, key.code) {
                    self.submit_console_input();
                }
            }
            Focus::Chat => {
                if edit_line(&mut self.chat_input, key.code) {
                    self.send_chat();
                }
            }
            Focus::Explanation => match key.code {
                KeyCode::Up => self.full.select_previous(),
                KeyCode::Down => self.full.select_next(),
                KeyCode::Enter | KeyCode::Char(' ') => self.full.toggle_selected(),
                _ => {}
            },
        }
    }

    fn on_control_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Char('c') => self.should_quit = true,
            KeyCode::Char('r') => self.run_code(),
            KeyCode::Char('l') => self.line_explain(),
            KeyCode::Char('f') => self.full_explain(),
            KeyCode::Char('b') => self.toggle_style(),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('s') => self.save_code(),
            KeyCode::Char('k') => self.toggle_chatbox(),
            KeyCode::Char('n') => self.cycle_focus(),
            _ => {}
        }
    }

    fn on_editor_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => self.editor.insert_char(c),
            KeyCode::Enter => self.editor.insert_newline(),
            KeyCode::Tab => self.editor.insert_tab(),
            KeyCode::Backspace => self.editor.backspace(),
            KeyCode::Delete => self.editor.delete(),
            KeyCode::Left => self.editor.move_left(),
            KeyCode::Right => self.editor.move_right(),
            KeyCode::Up => self.editor.move_up(),
            KeyCode::Down => self.editor.move_down(),
            KeyCode::Home => self.editor.home(),
            KeyCode::End => self.editor.end(),
            _ => {}
        }
    }
}

/// Apply a key to a single-line input; returns true on Enter.
fn edit_line(input: &mut String, code: KeyCode) -> bool {
    match code {
        KeyCode::Char(c) => input.push(c),
        KeyCode::Backspace => {
            input.pop();
        }
        KeyCode::Enter => return true,
        _ => {}
    }
    false
}
