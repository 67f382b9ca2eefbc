pub(crate) mod aria;

pub mod alert_dialog;
pub mod calendar;
pub mod checkbox;
pub mod combobox;
pub mod dialog;
pub mod focus_trap;
pub mod form;
pub mod popper;
pub mod portal;
pub mod radio_group;
pub mod select;

pub use alert_dialog::*;
pub use calendar::*;
pub use checkbox::*;
pub use combobox::*;
pub use dialog::*;
pub use focus_trap::*;
pub use form::*;
pub use popper::*;
pub use portal::*;
pub use radio_group::*;
pub use select::*;
