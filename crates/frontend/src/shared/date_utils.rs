//! Current local date as a reactive input.
//!
//! Ages are derived from the date of birth on every evaluation, so views that
//! memoise filtered records read the date from [`use_today`] instead of the
//! clock. The signal moves forward once per local midnight.

use chrono::{Local, NaiveDate, NaiveDateTime};
use leptos::prelude::*;
use std::time::Duration;

/// Slack after midnight so the timer never lands on the old day.
const MIDNIGHT_SLACK_MS: u64 = 1_000;

/// Milliseconds from `now` until the start of the following day, plus slack.
pub fn ms_until_next_day(now: NaiveDateTime) -> u64 {
    let next_midnight = now
        .date()
        .succ_opt()
        .and_then(|d| d.and_hms_opt(0, 0, 0));
    let remaining = match next_midnight {
        Some(midnight) => (midnight - now).num_milliseconds().max(0) as u64,
        None => 0,
    };
    remaining + MIDNIGHT_SLACK_MS
}

fn schedule_rollover(today: RwSignal<NaiveDate>, timer: StoredValue<Option<TimeoutHandle>>) {
    let delay = ms_until_next_day(Local::now().naive_local());
    let roll = move || {
        let date = Local::now().date_naive();
        if today.try_get_untracked().is_some_and(|d| d != date) {
            log::debug!("date rolled over to {}", date);
            let _ = today.try_set(date);
        }
        schedule_rollover(today, timer);
    };
    match set_timeout_with_handle(roll, Duration::from_millis(delay)) {
        Ok(handle) => {
            let _ = timer.try_set_value(Some(handle));
        }
        Err(e) => log::error!("setTimeout failed: {:?}", e),
    }
}

/// Today's local date, updated at midnight while the calling view is mounted.
pub fn use_today() -> Signal<NaiveDate> {
    let today = RwSignal::new(Local::now().date_naive());
    let timer = StoredValue::new(None::<TimeoutHandle>);
    schedule_rollover(today, timer);

    on_cleanup(move || {
        if let Some(handle) = timer.try_update_value(|t| t.take()).flatten() {
            handle.clear();
        }
    });

    today.into()
}
