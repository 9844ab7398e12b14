//! Domain models for the terminal front end.

mod app;
mod chat;
mod console;
mod editor;
mod full;
mod lines;
mod settings;
mod toast;
mod view;

pub use app::{App, AppEvents, AppOptions, ExplainDone, SAVE_FILE_NAME};
pub use chat::{Chat, ChatMessage, QuickAction, Sender, CANNED_REPLIES, REPLY_DELAY};
pub use console::{
    ConsoleEvent, ConsoleEventKind, ConsoleLog, ExecutionStream, RunConnector, RunHandle,
    StreamError,
};
pub use editor::{Editor, SAMPLE_PROGRAM, TAB_WIDTH};
pub use full::{FullExplanation, Section, SECTIONS};
pub use lines::{
    candidate_lines, preview, CandidateLine, LineExplanation, LinePanel, EMPTY_MESSAGE,
    LOADING_MESSAGE, PREVIEW_CHARS,
};
pub use settings::{
    config_dir, FileStore, MemoryStore, SettingsError, SettingsStore, ThemeManager,
};
pub use toast::{Toast, Toasts, TOAST_LIFETIME};
pub use view::{Focus, ViewState};
