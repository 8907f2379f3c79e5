use chrono::{DateTime, Local, NaiveDate};

/// Clock abstracts access to the current time so queries remain deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current local timestamp.
    fn now(&self) -> DateTime<Local>;

    /// Returns the local civil date. Defaults to `now().date_naive()`.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Reads the wall clock of the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always reports the same calendar day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
            .and_hms_opt(12, 0, 0)
            .and_then(|naive| naive.and_local_timezone(Local).earliest())
            .unwrap_or_else(Local::now)
    }

    fn today(&self) -> NaiveDate {
        self.0
    }
}
