//! Canvas configuration, loadable from JSON.
//!
//! Every field has a default, so a document only needs the keys it changes:
//!
//! ```json
//! { "history_depth": 20, "brush": { "color": "#FF3F48CC" } }
//! ```

use serde::{Deserialize, Serialize};

use crate::brush::BrushSettings;
use crate::command::history::DEFAULT_MAX_DEPTH;
use crate::error::{ConfigError, ConfigResult};
use crate::geometry::Argb;
use crate::smoothing::DEFAULT_SEGMENTS;
use crate::widgets::color_picker::{
    DEFAULT_FADE_TICKS, DEFAULT_PALETTE, DEFAULT_RADIUS, DEFAULT_SWATCH_SIZE, DISMISS_MARGIN,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Maximum number of undo snapshots
    pub history_depth: usize,
    /// Samples per quadratic segment when smoothing
    pub bezier_segments: usize,
    pub brush: BrushConfig,
    pub picker: PickerConfig,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            history_depth: DEFAULT_MAX_DEPTH,
            bezier_segments: DEFAULT_SEGMENTS,
            brush: BrushConfig::default(),
            picker: PickerConfig::default(),
        }
    }
}

/// Initial brush state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    pub line_width: f32,
    pub color: Argb,
    pub smoothing: bool,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            line_width: BrushSettings::DEFAULT_LINE_WIDTH,
            color: BrushSettings::DEFAULT_COLOR,
            smoothing: true,
        }
    }
}

impl BrushConfig {
    /// The width is clamped, never rejected.
    pub fn to_settings(&self) -> BrushSettings {
        BrushSettings::new(self.line_width, self.color, self.smoothing)
    }
}

/// Color picker layout and animation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub palette: Vec<Argb>,
    pub swatch_size: f32,
    pub radius: f32,
    pub dismiss_margin: f32,
    pub fade_ticks: u32,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.to_vec(),
            swatch_size: DEFAULT_SWATCH_SIZE,
            radius: DEFAULT_RADIUS,
            dismiss_margin: DISMISS_MARGIN,
            fade_ticks: DEFAULT_FADE_TICKS,
        }
    }
}

impl CanvasConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        log::debug!("Loaded canvas config: {:?}", config);
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.history_depth == 0 {
            return Err(ConfigError::invalid("history_depth", "must be at least 1"));
        }
        if self.bezier_segments == 0 {
            return Err(ConfigError::invalid("bezier_segments", "must be at least 1"));
        }

        let picker = &self.picker;
        if !picker.swatch_size.is_finite() || picker.swatch_size <= 0.0 {
            return Err(ConfigError::invalid(
                "picker.swatch_size",
                format!("expected a positive size, got {}", picker.swatch_size),
            ));
        }
        if !picker.radius.is_finite() || picker.radius < 0.0 {
            return Err(ConfigError::invalid(
                "picker.radius",
                format!("expected a non-negative radius, got {}", picker.radius),
            ));
        }
        if !picker.dismiss_margin.is_finite() || picker.dismiss_margin < 0.0 {
            return Err(ConfigError::invalid(
                "picker.dismiss_margin",
                format!("expected a non-negative margin, got {}", picker.dismiss_margin),
            ));
        }
        if picker.fade_ticks == 0 {
            return Err(ConfigError::invalid("picker.fade_ticks", "must be at least 1"));
        }

        Ok(())
    }
}
