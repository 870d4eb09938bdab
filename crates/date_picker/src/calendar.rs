use chrono::{Datelike as _, Days, Month, NaiveDate};

/// Number of cells in a month view: six weeks of seven days.
pub const GRID_LEN: usize = 42;

/// Column headers of the grid, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// One cell of a [`MonthGrid`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CalendarDay {
    pub date: NaiveDate,

    /// `false` for the filler days borrowed from the previous or next month.
    pub in_displayed_month: bool,
}

/// The 42 days shown for one month, Sunday-first, starting on the last Sunday
/// on or before the 1st of the month.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthGrid {
    year: i32,
    month: Month,
    leading: usize,
    days: [CalendarDay; GRID_LEN],
}

impl MonthGrid {
    /// Build the grid for `month` of `year`.
    ///
    /// # Panics
    /// If the grid would reach outside the date range supported by `chrono`.
    /// Use [`Self::try_new`] near those limits.
    pub fn new(year: i32, month: Month) -> Self {
        Self::try_new(year, month).expect("Month outside of the supported date range")
    }

    /// Like [`Self::new`], but returns `None` instead of panicking when the grid
    /// can't be represented.
    pub fn try_new(year: i32, month: Month) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month.number_from_month(), 1)?;
        let leading = first.weekday().num_days_from_sunday() as usize;
        let len = days_in_month(year, month)? as usize;

        let start = first.checked_sub_days(Days::new(leading as u64))?;
        // Make sure the last cell exists, so every cell in between does too.
        start.checked_add_days(Days::new(GRID_LEN as u64 - 1))?;

        let days = std::array::from_fn(|i| CalendarDay {
            date: start + Days::new(i as u64),
            in_displayed_month: (leading..leading + len).contains(&i),
        });

        Some(Self {
            year,
            month,
            leading,
            days,
        })
    }

    #[inline]
    pub fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub fn month(&self) -> Month {
        self.month
    }

    /// All cells in chronological order.
    #[inline]
    pub fn days(&self) -> &[CalendarDay; GRID_LEN] {
        &self.days
    }

    /// The grid as six rows of seven days, each row starting on a Sunday.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDay]> {
        self.days.chunks_exact(7)
    }

    /// Index of the 1st of the month, which is also its weekday index (0 = Sunday).
    #[inline]
    pub fn first_of_month_index(&self) -> usize {
        self.leading
    }
}

/// Long English name of the month, e.g. `"January"`.
pub fn month_name(month: Month) -> &'static str {
    month.name()
}

/// Number of days in `month` of `year`, or `None` outside `chrono`'s range.
pub fn days_in_month(year: i32, month: Month) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month.number_from_month(), 1)?;
    Some(
        first
            .with_day(31)
            .map(|_| 31)
            .or_else(|| first.with_day(30).map(|_| 30))
            .or_else(|| first.with_day(29).map(|_| 29))
            .unwrap_or(28),
    )
}
