use chrono::{DateTime, Datelike, Days, Local, NaiveDate};

/// The `[from, to]` range of days the portal includes in an export.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DateWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateWindow {
    /// Window ending on the local date of `now`, reaching back `lookback_days`.
    pub fn ending_at(now: DateTime<Local>, lookback_days: u32) -> Self {
        let to = now.date_naive();
        let from = to
            .checked_sub_days(Days::new(u64::from(lookback_days)))
            .unwrap_or(NaiveDate::MIN);
        Self { from, to }
    }

    /// Key-request form fields describing this window.
    ///
    /// The portal's form posts every date twice (ISO and split
    /// month/day/year), and the server expects both to be present.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("GB_iso_fromDate", iso_date(self.from)),
            ("GB_iso_toDate", iso_date(self.to)),
            ("GB_fromDate", slashed_date(self.from)),
            ("GB_month_from", format!("{:02}", self.from.month())),
            ("GB_day_from", format!("{:02}", self.from.day())),
            ("GB_year_from", format!("{}", self.from.year())),
            ("GB_toDate", slashed_date(self.to)),
            ("GB_month_to", format!("{:02}", self.to.month())),
            ("GB_day_to", format!("{:02}", self.to.day())),
            ("GB_year_to", format!("{}", self.to.year())),
        ]
    }
}

fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

// The slash is sent pre-escaped; the portal decodes it itself.
fn slashed_date(date: NaiveDate) -> String {
    format!(
        "{:02}%2F{:02}%2F{}",
        date.month(),
        date.day(),
        date.year()
    )
}
