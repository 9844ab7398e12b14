//! # Display Modes
//!
//! The explanation panel mode, the explanation style and the persisted theme.

use crate::errors::TypesError;
use std::fmt;
use std::str::FromStr;

/// Settings key under which the theme is persisted.
pub const THEME_KEY: &str = "theme";

/// Which content the explanation panel shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ExplanationMode {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// Per-line explanations fetched from the gateway.
    Line,
    /// Static whole-program walkthrough.
    Full,
}

/// A content region of the explanation panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Idle,
    Lines,
    Full,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::Idle, Region::Lines, Region::Full];
}

impl ExplanationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExplanationMode::Idle => "idle",
            ExplanationMode::Line => "line",
            ExplanationMode::Full => "full",
        }
    }

    /// Panel title for this mode.
    pub fn title(&self) -> &'static str {
        match self {
            ExplanationMode::Idle => "AI Explanations",
            ExplanationMode::Line => "Line-by-Line Explanation",
            ExplanationMode::Full => "Full Code Explanation",
        }
    }

    /// Badge shown next to the title, hidden when idle.
    pub fn badge(&self) -> Option<&'static str> {
        match self {
            ExplanationMode::Idle => None,
            ExplanationMode::Line => Some("Interactive"),
            ExplanationMode::Full => Some("Comprehensive"),
        }
    }

    /// The single region visible in this mode.
    pub fn visible_region(&self) -> Region {
        match self {
            ExplanationMode::Idle => Region::Idle,
            ExplanationMode::Line => Region::Lines,
            ExplanationMode::Full => Region::Full,
        }
    }

    pub fn shows(&self, region: Region) -> bool {
        self.visible_region() == region
    }
}

impl FromStr for ExplanationMode {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "idle" => Ok(ExplanationMode::Idle),
            "line" => Ok(ExplanationMode::Line),
            "full" => Ok(ExplanationMode::Full),
            other => Err(TypesError::UnknownMode(other.to_string())),
        }
    }
}

/// Wording variant used for static explanation content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StyleMode {
    #[default]
    Beginner,
    Advanced,
}

impl StyleMode {
    pub fn toggled(self) -> Self {
        match self {
            StyleMode::Beginner => StyleMode::Advanced,
            StyleMode::Advanced => StyleMode::Beginner,
        }
    }

    pub fn is_beginner(&self) -> bool {
        matches!(self, StyleMode::Beginner)
    }

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            StyleMode::Beginner => "Beginner Mode",
            StyleMode::Advanced => "Advanced Mode",
        }
    }

    /// Lower-case name used in notifications.
    pub fn name(&self) -> &'static str {
        match self {
            StyleMode::Beginner => "beginner",
            StyleMode::Advanced => "advanced",
        }
    }
}

/// Colour theme, persisted as exactly `"light"` or `"dark"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Interpret a stored value; anything unrecognised reads as light.
    pub fn from_stored(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for Theme {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(TypesError::UnknownTheme(other.to_string())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_region_visible() {
        for mode in [ExplanationMode::Idle, ExplanationMode::Line, ExplanationMode::Full] {
            let visible = Region::ALL.iter().filter(|r| mode.shows(**r)).count();
            assert_eq!(visible, 1, "mode {:?}", mode);
        }
    }

    #[test]
    fn test_badges() {
        assert_eq!(ExplanationMode::Idle.badge(), None);
        assert_eq!(ExplanationMode::Line.badge(), Some("Interactive"));
        assert_eq!(ExplanationMode::Full.badge(), Some("Comprehensive"));
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("line".parse::<ExplanationMode>(), Ok(ExplanationMode::Line));
        assert!("sideways".parse::<ExplanationMode>().is_err());
    }

    #[test]
    fn test_theme_round_trip_through_toggle() {
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().as_str(), "light");
    }

    #[test]
    fn test_theme_from_stored() {
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("solarized")), Theme::Light);
        assert_eq!(Theme::from_stored(None), Theme::Light);
    }

    #[test]
    fn test_style_toggle() {
        let style = StyleMode::default();
        assert!(style.is_beginner());
        assert_eq!(style.toggled().label(), "Advanced Mode");
    }
}
