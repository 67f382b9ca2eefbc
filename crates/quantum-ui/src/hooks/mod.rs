mod calendar;
mod controlled;
mod debounce;
mod dismiss;
pub mod dom;
mod id;
mod presence;

pub use calendar::{use_calendar, CalendarState};
pub use controlled::{use_controlled, use_controlled_option};
pub use debounce::use_debounce;
pub use dismiss::{use_escape_key, use_hide_others, use_outside_click};
pub use id::use_unique_id;
pub use presence::{use_content_height, use_presence};
