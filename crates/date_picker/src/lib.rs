//! A calendar date picker for [`egui`](https://github.com/emilk/egui).
//!
//! The picker is split into three layers:
//!
//! * [`MonthGrid`] lays out the 42 days (six Sunday-first weeks) shown for a month.
//! * [`DatePicker`] owns the selected date, the visible month and whether the popup
//!   is [`Popup::Open`]. It is plain state and can be driven without any UI.
//! * [`DatePickerButton`] is the [`egui::Widget`] that draws a [`DatePicker`] and
//!   feeds clicks back into it.
//!
//! ```
//! # egui::__run_test_ui(|ui| {
//! let mut picker = date_picker::DatePicker::new();
//! if ui.add(date_picker::DatePickerButton::new(&mut picker)).changed() {
//!     println!("Picked {:?}", picker.selected());
//! }
//! # });
//! ```

#![forbid(unsafe_code)]

mod button;
pub mod calendar;
mod popup;
mod state;

pub use crate::button::DatePickerButton;
pub use crate::calendar::{CalendarDay, GRID_LEN, MonthGrid};
pub use crate::state::{DatePicker, Navigation, PickerState, Popup, PopupEvent, local_today};
