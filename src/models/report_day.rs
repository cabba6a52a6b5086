use chrono::Weekday;
use serde::Serialize;

/// One of the seven weekday buckets of the report.
///
/// The declaration order is the column order of the sheet: the week starts on
/// Saturday and closes on Friday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ReportDay {
    Saturday,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl ReportDay {
    pub const ALL: [ReportDay; 7] = [
        ReportDay::Saturday,
        ReportDay::Sunday,
        ReportDay::Monday,
        ReportDay::Tuesday,
        ReportDay::Wednesday,
        ReportDay::Thursday,
        ReportDay::Friday,
    ];

    /// Column header / English weekday name
    pub fn label(&self) -> &'static str {
        match self {
            ReportDay::Saturday => "Saturday",
            ReportDay::Sunday => "Sunday",
            ReportDay::Monday => "Monday",
            ReportDay::Tuesday => "Tuesday",
            ReportDay::Wednesday => "Wednesday",
            ReportDay::Thursday => "Thursday",
            ReportDay::Friday => "Friday",
        }
    }

    /// Position inside [`ReportDay::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_weekday(day: Weekday) -> Self {
        match day {
            Weekday::Sat => ReportDay::Saturday,
            Weekday::Sun => ReportDay::Sunday,
            Weekday::Mon => ReportDay::Monday,
            Weekday::Tue => ReportDay::Tuesday,
            Weekday::Wed => ReportDay::Wednesday,
            Weekday::Thu => ReportDay::Thursday,
            Weekday::Fri => ReportDay::Friday,
        }
    }
}
