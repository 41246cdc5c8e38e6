use chrono::{Datelike, Duration, NaiveDate};

const DATE_FORMAT: &str = "%d.%m.%Y";

/// Monday to Friday of the most recently reported work week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkWeek {
    pub monday: NaiveDate,
    pub friday: NaiveDate,
}

impl WorkWeek {
    /// On a Monday this is the previous week; on any other day it is the
    /// week that started on the most recent Monday.
    pub fn looking_back_from(today: NaiveDate) -> Self {
        let offset = match today.weekday().num_days_from_monday() {
            0 => 7,
            days => days,
        };
        let monday = today - Duration::days(i64::from(offset));
        Self {
            monday,
            friday: monday + Duration::days(4),
        }
    }

    pub fn label(&self) -> String {
        format!(
            "Week {} - {}",
            self.monday.format(DATE_FORMAT),
            self.friday.format(DATE_FORMAT)
        )
    }
}
