use super::state::DayRecord;
use chrono::NaiveDate;

/// Number of calendar days shown in the activity history (today included)
pub const WINDOW_DAYS: usize = 7;

/// Format a date as the "YYYY-MM-DD" key used in the activity history
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// The dates of the rolling window ending at `today`, oldest first.
///
/// Steps back one calendar day at a time, so month, year and DST
/// boundaries never skip or repeat a date.
pub fn window_dates(today: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::with_capacity(WINDOW_DAYS);
    let mut day = today;
    dates.push(day);

    while dates.len() < WINDOW_DAYS {
        match day.pred_opt() {
            Some(prev) => {
                day = prev;
                dates.push(day);
            }
            None => break,
        }
    }

    dates.reverse();
    dates
}

/// Rebuild the activity history for the window ending at `today`.
///
/// Seconds recorded for dates still inside the window are carried over;
/// dates that fell out of the window are dropped and new dates start at 0.
pub fn reconcile(previous: &[DayRecord], today: NaiveDate) -> Vec<DayRecord> {
    window_dates(today)
        .into_iter()
        .map(|date| {
            let key = date_key(date);
            let seconds = previous
                .iter()
                .find(|d| d.date == key)
                .map(|d| d.seconds)
                .unwrap_or(0);
            DayRecord { date: key, seconds }
        })
        .collect()
}

/// Whether `activity` already is the exact window ending at `today`
pub fn is_current(activity: &[DayRecord], today: NaiveDate) -> bool {
    let dates = window_dates(today);
    activity.len() == dates.len()
        && activity
            .iter()
            .zip(dates)
            .all(|(record, date)| record.date == date_key(date))
}
