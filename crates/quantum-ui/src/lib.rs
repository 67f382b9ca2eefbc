//! Headless, accessible Dioxus primitives.
//!
//! Components render plain elements carrying ARIA and `data-*` state and leave
//! all styling to the application.

pub mod components;
pub mod config;
pub mod hooks;

pub use components::*;
pub use config::{use_quantum_config, ConfigProvider};
pub use quantum_types::{Placement, QuantumConfig, SelectionMode, ValidityKey, WeekStart};
