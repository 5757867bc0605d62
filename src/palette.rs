//! Color palette used to render boards.
//!
//! A palette maps color ids to display colors. It is loaded from a JSON array
//! of `{ "hex": "#RRGGBB", "name": "...", "needsBorder": false }` objects; the
//! solver itself never looks at it.

use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::engine::Color;
use crate::error::PaletteError;

/// One display color.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub hex: String,
    pub name: String,
    /// Light colors get an outline so they stay visible on a light background.
    #[serde(default, rename = "needsBorder")]
    pub needs_border: bool,
}

impl PaletteEntry {
    fn new(hex: &str, name: &str) -> Self {
        PaletteEntry {
            hex: hex.to_string(),
            name: name.to_string(),
            needs_border: false,
        }
    }

    /// Parses `hex` as `#RRGGBB` (the leading `#` is optional).
    ///
    /// # Examples
    ///
    /// ```
    /// use water_sort_solver::palette::Palette;
    /// let palette = Palette::default();
    /// assert_eq!(palette.entries()[0].rgb(), Some((255, 0, 0)));
    /// ```
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let digits = self.hex.strip_prefix('#').unwrap_or(&self.hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some((channel(0)?, channel(2)?, channel(4)?))
    }
}

/// An ordered list of display colors; color id `n` uses entry `n`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Default for Palette {
    /// The built-in palette, used when no palette file is available.
    fn default() -> Self {
        Palette {
            entries: vec![
                PaletteEntry::new("#FF0000", "Red"),
                PaletteEntry::new("#00FF00", "Green"),
                PaletteEntry::new("#FF00FF", "Magenta"),
                PaletteEntry::new("#0000FF", "Blue"),
                PaletteEntry::new("#FFDAB9", "Peach"),
                PaletteEntry {
                    needs_border: true,
                    ..PaletteEntry::new("#F5F5DC", "Beige")
                },
                PaletteEntry::new("#FFFF00", "Yellow"),
                PaletteEntry::new("#C0C0C0", "Silver"),
                PaletteEntry::new("#FFA500", "Orange"),
                PaletteEntry::new("#00BFFF", "Sky Blue"),
                PaletteEntry::new("#800080", "Purple"),
            ],
        }
    }
}

impl Palette {
    /// Builds a palette, rejecting empty lists and malformed hex values.
    pub fn new(entries: Vec<PaletteEntry>) -> Result<Self, PaletteError> {
        if entries.is_empty() {
            return Err(PaletteError::Empty);
        }
        if let Some(bad) = entries.iter().find(|e| e.rgb().is_none()) {
            return Err(PaletteError::InvalidHex(bad.hex.clone()));
        }
        Ok(Palette { entries })
    }

    /// Parses a palette from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, PaletteError> {
        let entries: Vec<PaletteEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Loads a palette from a JSON file.
    pub fn load(path: &Path) -> Result<Self, PaletteError> {
        let content = std::fs::read_to_string(path).map_err(|e| PaletteError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&content)
    }

    /// Loads a palette from a JSON file, falling back to the built-in palette
    /// if the file is missing or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(palette) => palette,
            Err(e) => {
                warn!("{e}; using the built-in palette");
                Self::default()
            }
        }
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// The display entry for `color`, or `None` if the palette is too short.
    pub fn entry(&self, color: Color) -> Option<&PaletteEntry> {
        self.entries.get(color.id() as usize)
    }
}
