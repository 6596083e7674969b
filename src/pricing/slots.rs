//! Time-slot catalogs for the booking widget.
//!
//! The business day runs 08:00-20:00. The half-hour catalog has 24 slots,
//! the one-hour catalog 12, both chronological. Labels reproduce the format
//! the widget has always shown: both endpoints in zero-padded 12-hour form
//! with a single am/pm suffix taken from the slot's end time, e.g.
//! `08:00-08:30am`, `11:30-12:00pm`, `07:00-08:00pm`.

use chrono::{Duration as TimeDelta, NaiveTime};

use super::models::Duration;

fn opening_time() -> NaiveTime {
    NaiveTime::from_hms_opt(8, 0, 0).expect("valid opening time")
}

fn closing_time() -> NaiveTime {
    NaiveTime::from_hms_opt(20, 0, 0).expect("valid closing time")
}

fn noon() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).expect("valid noon")
}

/// One bookable interval of the business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeSlot {
    /// The label shown in the selector. The am/pm suffix follows the END of
    /// the slot, so `11:30-12:00pm` and `12:00-12:30pm` come out as the
    /// widget expects.
    pub fn label(&self) -> String {
        let suffix = if self.end < noon() { "am" } else { "pm" };
        format!(
            "{}-{}{}",
            self.start.format("%I:%M"),
            self.end.format("%I:%M"),
            suffix
        )
    }
}

/// The full slot catalog for the given duration, in chronological order.
/// No availability filtering: every slot of the business day is offered.
pub fn catalog(duration: Duration) -> Vec<TimeSlot> {
    let step = match duration {
        Duration::HalfHour => TimeDelta::minutes(30),
        Duration::OneHour => TimeDelta::hours(1),
    };

    let mut slots = Vec::new();
    let mut start = opening_time();
    while start < closing_time() {
        let end = start + step;
        slots.push(TimeSlot { start, end });
        start = end;
    }
    slots
}

/// Catalog labels for the given duration, in catalog order.
pub fn labels(duration: Duration) -> Vec<String> {
    catalog(duration).iter().map(TimeSlot::label).collect()
}

/// Find the slot in the active catalog carrying the given label. `None`
/// means the label is not a selectable value for this duration.
pub fn find(duration: Duration, label: &str) -> Option<TimeSlot> {
    catalog(duration).into_iter().find(|s| s.label() == label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_half_hour_catalog_has_24_slots() {
        assert_eq!(catalog(Duration::HalfHour).len(), 24);
    }

    #[test]
    fn test_one_hour_catalog_has_12_slots() {
        assert_eq!(catalog(Duration::OneHour).len(), 12);
    }

    #[test]
    fn test_catalogs_are_chronological_and_duplicate_free() {
        for duration in [Duration::HalfHour, Duration::OneHour] {
            let slots = catalog(duration);
            for pair in slots.windows(2) {
                assert!(pair[0].start < pair[1].start);
                assert_eq!(pair[0].end, pair[1].start);
            }
            let unique: HashSet<String> = labels(duration).into_iter().collect();
            assert_eq!(unique.len(), slots.len());
        }
    }

    #[test]
    fn test_one_hour_labels_match_widget_format() {
        assert_eq!(
            labels(Duration::OneHour),
            vec![
                "08:00-09:00am",
                "09:00-10:00am",
                "10:00-11:00am",
                "11:00-12:00pm",
                "12:00-01:00pm",
                "01:00-02:00pm",
                "02:00-03:00pm",
                "03:00-04:00pm",
                "04:00-05:00pm",
                "05:00-06:00pm",
                "06:00-07:00pm",
                "07:00-08:00pm",
            ]
        );
    }

    #[test]
    fn test_half_hour_labels_around_noon() {
        let labels = labels(Duration::HalfHour);
        assert_eq!(labels[0], "08:00-08:30am");
        assert_eq!(labels[6], "11:00-11:30am");
        assert_eq!(labels[7], "11:30-12:00pm");
        assert_eq!(labels[8], "12:00-12:30pm");
        assert_eq!(labels[9], "12:30-01:00pm");
        assert_eq!(labels[23], "07:30-08:00pm");
    }

    #[test]
    fn test_find_accepts_only_active_catalog_labels() {
        assert!(find(Duration::HalfHour, "08:00-08:30am").is_some());
        // A half-hour label is not selectable for one-hour sessions
        assert!(find(Duration::OneHour, "08:00-08:30am").is_none());
        assert!(find(Duration::HalfHour, "not a slot").is_none());
    }
}
