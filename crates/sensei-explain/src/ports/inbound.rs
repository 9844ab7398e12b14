//! Inbound Ports (Driving Ports)
//!
//! The API that external components use to explain source lines.

use crate::domain::Detail;

/// Explains single lines of C++ source.
pub trait LineExplainer: Send + Sync {
    /// Short, scannable explanation for one line.
    ///
    /// Structural lines (`{`, `}`, `};`) and blank input yield `"..."`;
    /// unmatched lines yield the fallback text. Never fails.
    fn explain_line(&self, line: &str) -> String;

    /// Technical drill-down with a documentation link, if any rule matches.
    fn explain_more(&self, line: &str) -> Option<Detail>;

    /// UI hints for a line: `["more"]` when a drill-down exists.
    fn options(&self, line: &str) -> Vec<&'static str> {
        if self.explain_more(line).is_some() {
            vec!["more"]
        } else {
            Vec::new()
        }
    }
}
