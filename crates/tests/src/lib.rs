#[cfg(test)]
mod common;

#[cfg(test)]
mod dialog_tests;

#[cfg(test)]
mod alert_dialog_tests;

#[cfg(test)]
mod checkbox_tests;

#[cfg(test)]
mod radio_group_tests;

#[cfg(test)]
mod select_tests;


#[cfg(test)]
mod calendar_tests;

#[cfg(test)]
mod form_tests;

#[cfg(test)]
mod overlay_tests;

#[cfg(test)]
mod hooks_tests;
