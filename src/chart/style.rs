//! Chart styling configuration.
//!
//! Styling is an explicit immutable struct handed to figure construction,
//! with per-field defaults and optional loading from a JSON style sheet.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{DistplotError, Result};
use crate::gradient::Color;

/// Styling options recognized by both renderer backends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartStyle {
    /// Figure title
    #[serde(default)]
    pub title: String,

    /// X axis label
    #[serde(default)]
    pub x_axis_label: String,

    /// Y axis label
    #[serde(default)]
    pub y_axis_label: String,

    /// Fill color for bars and lines, as a hex string
    #[serde(default = "default_data_color")]
    pub data_color: String,

    /// Font family for the title and axis text
    #[serde(default = "default_font_family")]
    pub text_font_family: String,

    /// Color for the title and axis text, as a hex string
    #[serde(default = "default_text_color")]
    pub text_color: String,

    /// Font size for the title, in pixels
    #[serde(default = "default_font_size")]
    pub text_font_size: u32,
}

impl ChartStyle {
    /// Load a style sheet from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let style: ChartStyle = serde_json::from_str(&content)?;
        style.validate()?;
        Ok(style)
    }

    /// Validate the styling options
    pub fn validate(&self) -> Result<()> {
        Color::from_hex(&self.data_color).map_err(|_| DistplotError::InvalidFormat {
            message: format!("data_color is not a valid hex color: {}", self.data_color),
        })?;

        Color::from_hex(&self.text_color).map_err(|_| DistplotError::InvalidFormat {
            message: format!("text_color is not a valid hex color: {}", self.text_color),
        })?;

        if self.text_font_size == 0 {
            return Err(DistplotError::InvalidRange {
                message: "text_font_size cannot be 0".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            title: String::new(),
            x_axis_label: String::new(),
            y_axis_label: String::new(),
            data_color: default_data_color(),
            text_font_family: default_font_family(),
            text_color: default_text_color(),
            text_font_size: default_font_size(),
        }
    }
}

// Default value functions for serde
fn default_data_color() -> String {
    "#1f77b4".to_string()
}

fn default_font_family() -> String {
    "sans-serif".to_string()
}

fn default_text_color() -> String {
    "#444444".to_string()
}

fn default_font_size() -> u32 {
    16
}
