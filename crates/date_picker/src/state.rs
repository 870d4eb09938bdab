use chrono::{Datelike as _, Month, NaiveDate};
use egui::{Pos2, Rect};

use crate::calendar::{CalendarDay, MonthGrid};

/// Visibility of the calendar popup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Popup {
    #[default]
    Closed,
    Open,
}

/// Something that happened to the picker which may move the popup between states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupEvent {
    /// The input field was clicked.
    Toggle,

    /// A day of the displayed month was picked.
    Selected,

    /// A pointer click landed outside the widget.
    ClickedOutside,

    /// The "Today" button was pressed.
    JumpedToToday,
}

impl Popup {
    /// The full transition table. Only [`PopupEvent::Toggle`] ever opens the popup.
    #[must_use]
    pub fn on(self, event: PopupEvent) -> Self {
        match (self, event) {
            (Self::Closed, PopupEvent::Toggle) => Self::Open,
            (Self::Open, PopupEvent::Toggle)
            | (
                _,
                PopupEvent::Selected | PopupEvent::ClickedOutside | PopupEvent::JumpedToToday,
            ) => Self::Closed,
        }
    }

    #[inline]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// Which way to page through months.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Previous,
    Next,
}

/// Everything the picker remembers between frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PickerState {
    pub selected: Option<NaiveDate>,

    /// The month shown in the popup, independent of [`Self::selected`].
    pub visible_month: Month,
    pub visible_year: i32,

    pub popup: Popup,
}

impl PickerState {
    fn showing(today: NaiveDate) -> Self {
        Self {
            selected: None,
            visible_month: month_of(today),
            visible_year: today.year(),
            popup: Popup::Closed,
        }
    }
}

/// Owns the [`PickerState`] and the grid for the visible month.
///
/// All mutation goes through the methods here; [`crate::DatePickerButton`] only
/// reports user interactions.
#[derive(Clone, Debug)]
pub struct DatePicker {
    state: PickerState,
    grid: MonthGrid,
}

impl Default for DatePicker {
    fn default() -> Self {
        Self::new()
    }
}

impl DatePicker {
    /// A closed picker showing the current month.
    pub fn new() -> Self {
        Self::starting_at(local_today())
    }

    /// A closed picker showing the month of `today`, with nothing selected.
    ///
    /// # Panics
    /// If the month of `today` can't be laid out as a grid, which only happens
    /// at the very edges of `chrono`'s date range.
    pub fn starting_at(today: NaiveDate) -> Self {
        let state = PickerState::showing(today);
        Self {
            grid: MonthGrid::new(state.visible_year, state.visible_month),
            state,
        }
    }

    #[inline]
    pub fn state(&self) -> &PickerState {
        &self.state
    }

    /// The 42 days of the visible month.
    #[inline]
    pub fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    #[inline]
    pub fn selected(&self) -> Option<NaiveDate> {
        self.state.selected
    }

    #[inline]
    pub fn popup(&self) -> Popup {
        self.state.popup
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.state.popup.is_open()
    }

    #[inline]
    pub fn visible_month(&self) -> Month {
        self.state.visible_month
    }

    #[inline]
    pub fn visible_year(&self) -> i32 {
        self.state.visible_year
    }

    /// Is this cell the currently selected date?
    pub fn is_selected(&self, day: &CalendarDay) -> bool {
        self.state.selected == Some(day.date)
    }

    pub fn toggle_open(&mut self) {
        self.transition(PopupEvent::Toggle);
    }

    /// Show the previous or next month, rolling the year over at the ends.
    ///
    /// Does nothing if that month lies outside the supported date range.
    pub fn navigate(&mut self, direction: Navigation) {
        let (year, month) = (self.state.visible_year, self.state.visible_month);
        let (year, month) = match direction {
            Navigation::Previous if month == Month::January => (year - 1, Month::December),
            Navigation::Previous => (year, month.pred()),
            Navigation::Next if month == Month::December => (year + 1, Month::January),
            Navigation::Next => (year, month.succ()),
        };

        if self.show_month(year, month) {
            log::debug!("Date picker now showing {} {year}", month.name());
        } else {
            log::debug!("Refusing to navigate past {} {year}", month.name());
        }
    }

    /// Pick `day`. Days borrowed from a neighboring month are ignored.
    pub fn select(&mut self, day: CalendarDay) {
        if !day.in_displayed_month {
            return;
        }
        log::debug!("Selected {}", day.date);
        self.state.selected = Some(day.date);
        self.transition(PopupEvent::Selected);
    }

    /// Select the current local date, show its month, and close the popup.
    pub fn jump_to_today(&mut self) {
        self.jump_to(local_today());
    }

    pub(crate) fn jump_to(&mut self, today: NaiveDate) {
        self.state.selected = Some(today);
        self.show_month(today.year(), month_of(today));
        self.transition(PopupEvent::JumpedToToday);
    }

    /// Close the popup if `target` isn't inside any of the rects the widget covers.
    pub fn dismiss_if_outside(&mut self, boundary: &[Rect], target: Pos2) {
        if !boundary.iter().any(|rect| rect.contains(target)) {
            self.transition(PopupEvent::ClickedOutside);
        }
    }

    fn show_month(&mut self, year: i32, month: Month) -> bool {
        if year == self.grid.year() && month == self.grid.month() {
            return true;
        }
        let Some(grid) = MonthGrid::try_new(year, month) else {
            return false;
        };
        self.state.visible_year = year;
        self.state.visible_month = month;
        self.grid = grid;
        true
    }

    fn transition(&mut self, event: PopupEvent) {
        let next = self.state.popup.on(event);
        if next != self.state.popup {
            log::trace!("Date picker popup {:?} -> {next:?} on {event:?}", self.state.popup);
        }
        self.state.popup = next;
    }
}

/// Today's date in local calendar time.
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn month_of(date: NaiveDate) -> Month {
    // `month()` is always in 1..=12
    Month::try_from(date.month() as u8).unwrap_or(Month::January)
}
