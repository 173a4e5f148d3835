/// Reporting-period selection and baseline period keys.
///
/// The report UI offers a fixed set of lookback spans anchored on an end
/// date; the baseline store is keyed by calendar month or by ten-day decad
/// within a month. Both selections are closed enums here so an invalid
/// selection cannot be represented downstream.

use chrono::{Datelike, Days, Months, NaiveDate};

// ---------------------------------------------------------------------------
// Reporting spans
// ---------------------------------------------------------------------------

/// A reporting lookback span, resolved against an inclusive end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportSpan {
    OneDay,
    TwoDays,
    OneWeek,
    TenDays,
    OneMonth,
    /// Explicit from/to pair chosen by the operator.
    Custom(NaiveDate, NaiveDate),
}

impl ReportSpan {
    /// Resolves the span to an inclusive `(from, to)` date pair.
    ///
    /// Fixed spans count back from `end`: a one-day report covers `end`
    /// alone, a ten-day report covers `end - 9 .. end`, and a one-month
    /// report covers the month-long lookback ending at `end` (one calendar
    /// month back, exclusive of the matching day). Custom spans ignore
    /// `end` and are normalized so `from <= to`.
    pub fn resolve(&self, end: NaiveDate) -> (NaiveDate, NaiveDate) {
        match *self {
            ReportSpan::OneDay => (end, end),
            ReportSpan::TwoDays => (end - Days::new(1), end),
            ReportSpan::OneWeek => (end - Days::new(6), end),
            ReportSpan::TenDays => (end - Days::new(9), end),
            ReportSpan::OneMonth => (end - Months::new(1) + Days::new(1), end),
            ReportSpan::Custom(from, to) => {
                if from <= to {
                    (from, to)
                } else {
                    (to, from)
                }
            }
        }
    }

    /// The baseline period key appropriate for this span. Short spans
    /// compare against the monthly climatology; only the ten-day report
    /// has a decad-resolution baseline.
    pub fn baseline_key(&self, end: NaiveDate) -> PeriodKey {
        match self {
            ReportSpan::TenDays => PeriodKey::decad_of(end),
            _ => PeriodKey::Month,
        }
    }
}

// ---------------------------------------------------------------------------
// Baseline period keys
// ---------------------------------------------------------------------------

/// Granularity key into the long-term-average store: whole calendar month,
/// or one of the three ten-day decads within it (days 1–10, 11–20, and
/// 21 through month end).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodKey {
    Month,
    FirstDecad,
    SecondDecad,
    ThirdDecad,
}

impl PeriodKey {
    /// The decad containing the given date.
    pub fn decad_of(date: NaiveDate) -> PeriodKey {
        match date.day() {
            1..=10 => PeriodKey::FirstDecad,
            11..=20 => PeriodKey::SecondDecad,
            _ => PeriodKey::ThirdDecad,
        }
    }

    /// Inclusive date range of this key within the month containing `date`.
    /// The third decad runs to the month's last day, whatever its length.
    pub fn range_in_month(&self, date: NaiveDate) -> (NaiveDate, NaiveDate) {
        let first = date.with_day(1).unwrap_or(date);
        let last = last_day_of_month(date);
        match self {
            PeriodKey::Month => (first, last),
            PeriodKey::FirstDecad => (first, date.with_day(10).unwrap_or(last)),
            PeriodKey::SecondDecad => (
                date.with_day(11).unwrap_or(first),
                date.with_day(20).unwrap_or(last),
            ),
            PeriodKey::ThirdDecad => (date.with_day(21).unwrap_or(first), last),
        }
    }
}

/// Last calendar day of the month containing `date`.
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|first_of_next| first_of_next - Days::new(1))
        .unwrap_or(date)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
