//! Line-by-line explanation panel content.

/// Characters of a line shown next to its explanation.
pub const PREVIEW_CHARS: usize = 40;

pub const LOADING_MESSAGE: &str = "Analyzing code with AI...";
pub const EMPTY_MESSAGE: &str = "No explainable code found. Write some C++!";

/// A source line worth asking about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateLine {
    /// 1-based line number in the editor.
    pub number: usize,
    /// Trimmed text, exactly as sent to the server.
    pub text: String,
}

/// Lines that get an explanation request, in ascending order.
///
/// Empty lines and lines starting with `//` after trimming are skipped.
pub fn candidate_lines(source: &str) -> Vec<CandidateLine> {
    source
        .split('\n')
        .enumerate()
        .filter_map(|(index, line)| {
            let text = line.trim();
            if text.is_empty() || text.starts_with("//") {
                return None;
            }
            Some(CandidateLine {
                number: index + 1,
                text: text.to_string(),
            })
        })
        .collect()
}

/// First [`PREVIEW_CHARS`] characters, with `...` when cut.
pub fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineExplanation {
    pub number: usize,
    pub preview: String,
    /// Server text, shown as received.
    pub explanation: String,
}

impl LineExplanation {
    pub fn new(line: &CandidateLine, explanation: impl Into<String>) -> Self {
        Self {
            number: line.number,
            preview: preview(&line.text),
            explanation: explanation.into(),
        }
    }

    pub fn badge(&self) -> String {
        format!("Line {}", self.number)
    }
}

/// State of the line explanation region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LinePanel {
    #[default]
    Loading,
    Empty,
    Entries(Vec<LineExplanation>),
    Failed(String),
}

impl LinePanel {
    /// Panel for a request that failed with `reason`.
    pub fn failed(reason: impl std::fmt::Display) -> Self {
        LinePanel::Failed(format!(
            "Error getting explanations: {reason}. Is the server running?"
        ))
    }

    /// Text for the non-entry states.
    pub fn message(&self) -> Option<&str> {
        match self {
            LinePanel::Loading => Some(LOADING_MESSAGE),
            LinePanel::Empty => Some(EMPTY_MESSAGE),
            LinePanel::Failed(msg) => Some(msg),
            LinePanel::Entries(_) => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LinePanel::Loading)
    }
}
