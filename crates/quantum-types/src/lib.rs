//! Renderer-independent state and arithmetic behind the quantum-ui primitives.

pub mod calendar;
pub mod config;
pub mod error;
pub mod focus;
pub mod placement;
pub mod presence;
pub mod selection;
pub mod validity;

pub use calendar::{CalendarCursor, DayKind, MonthGrid, WeekStart};
pub use config::QuantumConfig;
pub use error::QuantumError;
pub use placement::{Alignment, Placement, Rect, Side};
pub use presence::{PresenceEvent, PresenceState};
pub use selection::SelectionMode;
pub use validity::{ValidationSet, ValidityFlags, ValidityKey};
