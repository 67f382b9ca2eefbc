use serde::{Deserialize, Serialize};

use crate::calendar::{WeekStart, DEFAULT_VALUE_FORMAT};
use crate::error::QuantumError;
use crate::placement::{Placement, DEFAULT_OFFSET};

/// Defaults for floating content (Select, Combobox and Calendar popups).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopperConfig {
    pub placement: Placement,
    pub offset: f64,
    pub detect_padding: f64,
    pub hide_when_anchor_disappear: bool,
    pub has_arrow: bool,
}

impl Default for PopperConfig {
    fn default() -> Self {
        Self {
            placement: Placement::default(),
            offset: DEFAULT_OFFSET,
            detect_padding: DEFAULT_OFFSET,
            hide_when_anchor_disappear: false,
            has_arrow: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Delay before a search input's value is applied to the item filter.
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { debounce_ms: 300 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// `time` format description used by `CalendarValue`.
    pub value_format: String,
    pub week_start: WeekStart,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            value_format: DEFAULT_VALUE_FORMAT.to_string(),
            week_start: WeekStart::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComboboxConfig {
    /// Close the popup as soon as a value is picked.
    pub destroy_when_value_change: bool,
}

impl Default for ComboboxConfig {
    fn default() -> Self {
        Self {
            destroy_when_value_change: true,
        }
    }
}

/// Library-wide defaults, typically loaded from a `quantum.toml`.
///
/// Every section and field has a default so that a missing or partial file
/// keeps the built-in behaviour.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuantumConfig {
    #[serde(default)]
    pub popper: PopperConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub combobox: ComboboxConfig,
}

impl QuantumConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, QuantumError> {
        Ok(toml::from_str(raw)?)
    }
}
