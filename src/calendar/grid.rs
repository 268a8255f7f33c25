//! Time grid model for day and week views.
//!
//! Computes the hourly slots visible for a focused date and maps wall-clock
//! (date, hour) pairs to grid cells. Everything here is a pure function of
//! its inputs; "now" is always supplied by the caller.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::ops::RangeInclusive;

use crate::models::settings::ClockFormat;
use crate::models::ui::ViewMode;
use crate::utils::date::{is_same_day, week_start};

pub const LAST_HOUR: u32 = 23;

/// Inclusive range of visible hours, always within 0..=23.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourRange {
    first: u32,
    last: u32,
}

impl HourRange {
    /// Out-of-range bounds are clipped to 23 and `last` is raised to `first`
    /// if the two are reversed.
    pub fn new(first: u32, last: u32) -> Self {
        let first = first.min(LAST_HOUR);
        let last = last.min(LAST_HOUR).max(first);
        Self { first, last }
    }

    pub fn full_day() -> Self {
        Self::new(0, LAST_HOUR)
    }

    pub fn first(&self) -> u32 {
        self.first
    }

    pub fn last(&self) -> u32 {
        self.last
    }

    pub fn len(&self) -> usize {
        (self.last - self.first + 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn hours(&self) -> RangeInclusive<u32> {
        self.first..=self.last
    }

    pub fn contains(&self, hour: u32) -> bool {
        self.hours().contains(&hour)
    }

    /// Clip an hour to the nearest visible boundary.
    pub fn clamp(&self, hour: u32) -> u32 {
        hour.clamp(self.first, self.last)
    }

    /// First visible instant on `date`.
    pub fn window_start(&self, date: NaiveDate) -> NaiveDateTime {
        hour_start(date, self.first)
    }

    /// End (exclusive) of the visible window on `date`; midnight of the next
    /// day when the range runs through 23:00.
    pub fn window_end(&self, date: NaiveDate) -> NaiveDateTime {
        hour_start(date, self.last + 1)
    }
}

impl Default for HourRange {
    fn default() -> Self {
        Self::full_day()
    }
}

fn hour_start(date: NaiveDate, hour: u32) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN) + Duration::hours(hour as i64)
}

/// Display label for an hour of the day.
///
/// ```
/// use barbershop_calendar::calendar::grid::hour_label;
/// use barbershop_calendar::models::settings::ClockFormat;
///
/// assert_eq!(hour_label(14, ClockFormat::TwelveHour), "2:00 PM");
/// assert_eq!(hour_label(0, ClockFormat::TwelveHour), "12:00 AM");
/// assert_eq!(hour_label(14, ClockFormat::TwentyFourHour), "14:00");
/// ```
pub fn hour_label(hour: u32, format: ClockFormat) -> String {
    let hour = hour.min(LAST_HOUR);
    match format {
        ClockFormat::TwelveHour => {
            let display = match hour % 12 {
                0 => 12,
                h => h,
            };
            let suffix = if hour < 12 { "AM" } else { "PM" };
            format!("{}:00 {}", display, suffix)
        }
        ClockFormat::TwentyFourHour => format!("{:02}:00", hour),
    }
}

/// One rendered grid cell: an hour on a given day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub date: NaiveDate,
    pub hour: u32,
    pub label: String,
    /// True only for the current hour of today
    pub is_current: bool,
}

impl TimeSlot {
    pub fn new(date: NaiveDate, hour: u32, now: NaiveDateTime, format: ClockFormat) -> Self {
        let hour = hour.min(LAST_HOUR);
        let start = hour_start(date, hour);
        Self {
            date,
            hour,
            label: hour_label(hour, format),
            is_current: is_same_day(start, now) && now.hour() == hour,
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        hour_start(self.date, self.hour)
    }

    /// Exclusive end of the slot
    pub fn end(&self) -> NaiveDateTime {
        hour_start(self.date, self.hour + 1)
    }

    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        start < self.end() && end > self.start()
    }

    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start() && instant < self.end()
    }
}

/// Ordered slots of a single day.
pub fn day_slots(
    date: NaiveDate,
    range: HourRange,
    now: NaiveDateTime,
    format: ClockFormat,
) -> Vec<TimeSlot> {
    range
        .hours()
        .map(|hour| TimeSlot::new(date, hour, now, format))
        .collect()
}

/// Dates shown as columns for a view mode anchored at `focused`.
pub fn visible_dates(mode: ViewMode, focused: NaiveDate, first_day_of_week: u8) -> Vec<NaiveDate> {
    match mode {
        ViewMode::Day => vec![focused],
        ViewMode::Week => {
            let start = week_start(focused, first_day_of_week);
            start.iter_days().take(mode.day_count()).collect()
        }
    }
}

/// Coordinate of a slot inside the visible grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    /// Column index into the visible dates
    pub day: usize,
    /// Row index relative to the first visible hour
    pub hour: usize,
}

/// All slots visible for one view, ordered by date then hour.
#[derive(Debug, Clone)]
pub struct TimeGrid {
    mode: ViewMode,
    range: HourRange,
    dates: Vec<NaiveDate>,
    slots: Vec<TimeSlot>,
}

impl TimeGrid {
    pub fn new(
        mode: ViewMode,
        focused: NaiveDate,
        first_day_of_week: u8,
        range: HourRange,
        now: NaiveDateTime,
        format: ClockFormat,
    ) -> Self {
        let dates = visible_dates(mode, focused, first_day_of_week);
        Self::for_dates(mode, dates, range, now, format)
    }

    pub fn for_dates(
        mode: ViewMode,
        dates: Vec<NaiveDate>,
        range: HourRange,
        now: NaiveDateTime,
        format: ClockFormat,
    ) -> Self {
        let slots = dates
            .iter()
            .flat_map(|date| day_slots(*date, range, now, format))
            .collect();
        Self {
            mode,
            range,
            dates,
            slots,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn range(&self) -> HourRange {
        self.range
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn rows(&self) -> usize {
        self.range.len()
    }

    pub fn hours(&self) -> RangeInclusive<u32> {
        self.range.hours()
    }

    /// Map a (date, hour) pair to its cell. Hours outside the visible range
    /// are clipped to the nearest boundary; dates not shown yield `None`.
    pub fn cell_for(&self, date: NaiveDate, hour: u32) -> Option<GridCell> {
        let day = self.dates.iter().position(|d| *d == date)?;
        let hour = (self.range.clamp(hour) - self.range.first()) as usize;
        Some(GridCell { day, hour })
    }

    pub fn index_of(&self, cell: GridCell) -> Option<usize> {
        if cell.day >= self.dates.len() || cell.hour >= self.rows() {
            return None;
        }
        Some(cell.day * self.rows() + cell.hour)
    }

    pub fn cell_at_index(&self, index: usize) -> Option<GridCell> {
        if index >= self.slots.len() {
            return None;
        }
        Some(GridCell {
            day: index / self.rows(),
            hour: index % self.rows(),
        })
    }

    pub fn slot(&self, cell: GridCell) -> Option<&TimeSlot> {
        self.index_of(cell).and_then(|index| self.slots.get(index))
    }

    /// Whether an instant falls inside the visible window of a visible day.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.dates.iter().any(|date| {
            instant >= self.range.window_start(*date) && instant < self.range.window_end(*date)
        })
    }

    pub fn current_slot(&self) -> Option<&TimeSlot> {
        self.slots.iter().find(|slot| slot.is_current)
    }
}

/// Vertical position of `now` as a fraction of the visible hour range, for
/// drawing the current-time line. `None` outside the range.
pub fn current_time_offset(now: NaiveDateTime, range: HourRange) -> Option<f32> {
    let date = now.date();
    let start = range.window_start(date);
    let end = range.window_end(date);
    if now < start || now >= end {
        return None;
    }
    let elapsed = (now - start).num_seconds() as f32;
    let total = (end - start).num_seconds() as f32;
    Some(elapsed / total)
}
