//! Labels and keyboard configuration for the page edit view.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Placeholder replaced by the page id in [`Labels::delete_prompt`].
pub const ID_PLACEHOLDER: &str = "{id}";

/// User-facing text of the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub save: String,
    /// Save label once the last save went through.
    pub saved: String,
    pub delete: String,
    pub draft: String,
    pub loading: String,
    pub not_found: String,
    /// Confirmation prompt shown before deleting; `{id}` is substituted.
    pub delete_prompt: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            save: "Save".to_string(),
            saved: "Saved".to_string(),
            delete: "Delete".to_string(),
            draft: "Draft".to_string(),
            loading: "Loading...".to_string(),
            not_found: "Could not find the page.".to_string(),
            delete_prompt: format!("Are you sure that you want to delete \"{ID_PLACEHOLDER}\"?"),
        }
    }
}

impl Labels {
    pub fn delete_prompt_for(&self, id: &str) -> String {
        self.delete_prompt.replace(ID_PLACEHOLDER, id)
    }
}

/// Configuration of a [`PageEdit`](crate::PageEdit) view.
///
/// ```rust
/// use page_edit_mvu::PageEditConfig;
///
/// let config = PageEditConfig::from_json(r#"{ "labels": { "save": "Publish" } }"#).unwrap();
/// assert_eq!(config.labels.save, "Publish");
/// assert_eq!(config.labels.delete, "Delete");
/// assert_eq!(config.save_shortcut, "mod+s");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageEditConfig {
    pub labels: Labels,
    /// Chord that saves, e.g. `mod+s`. See [`KeyChord`].
    pub save_shortcut: String,
}

impl Default for PageEditConfig {
    fn default() -> Self {
        Self {
            labels: Labels::default(),
            save_shortcut: "mod+s".to_string(),
        }
    }
}

impl PageEditConfig {
    /// Parse a configuration from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.save_chord()?;
        Ok(config)
    }

    pub fn save_chord(&self) -> Result<KeyChord> {
        self.save_shortcut.parse()
    }
}

/// A key pressed together with modifiers.
///
/// The textual form is `+`-separated, modifiers first: `mod+s`,
/// `shift+alt+d`. `mod` (alias `ctrl`, `cmd`, `meta`) is the platform's
/// primary modifier. Matching is case-insensitive on the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub primary: bool,
    pub shift: bool,
    pub alt: bool,
    pub key: char,
}

impl KeyChord {
    /// A chord with the primary modifier held, e.g. `KeyChord::primary('s')`.
    pub fn primary(key: char) -> Self {
        Self {
            primary: true,
            shift: false,
            alt: false,
            key: key.to_ascii_lowercase(),
        }
    }

    /// A key pressed without modifiers.
    pub fn plain(key: char) -> Self {
        Self {
            primary: false,
            ..Self::primary(key)
        }
    }

    /// Whether `pressed` is this chord, ignoring the key's case.
    pub fn matches(&self, pressed: &KeyChord) -> bool {
        self.primary == pressed.primary
            && self.shift == pressed.shift
            && self.alt == pressed.alt
            && self.key.eq_ignore_ascii_case(&pressed.key)
    }
}

impl FromStr for KeyChord {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidShortcut(s.to_string());

        let mut parts: Vec<&str> = s.split('+').map(str::trim).collect();
        let key = parts.pop().ok_or_else(invalid)?;
        let mut chars = key.chars();
        let key = match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_ascii_lowercase(),
            _ => return Err(invalid()),
        };

        let mut chord = Self::plain(key);
        for modifier in parts {
            match modifier.to_ascii_lowercase().as_str() {
                "mod" | "ctrl" | "cmd" | "meta" => chord.primary = true,
                "shift" => chord.shift = true,
                "alt" => chord.alt = true,
                _ => return Err(invalid()),
            }
        }
        Ok(chord)
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.primary {
            f.write_str("mod+")?;
        }
        if self.shift {
            f.write_str("shift+")?;
        }
        if self.alt {
            f.write_str("alt+")?;
        }
        write!(f, "{}", self.key)
    }
}
