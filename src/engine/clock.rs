use chrono::{DateTime, Local, NaiveDate};

/// The "now" used for one evaluation batch
///
/// Date-relative operators (`is-today`, `within-next-days`, ...) read time
/// only from here, so a batch sees a single consistent instant and tests can
/// pin it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    now: DateTime<Local>,
}

impl Clock {
    /// Capture the current system time
    #[must_use]
    pub fn system() -> Self {
        Self { now: Local::now() }
    }

    /// Use a fixed instant
    #[must_use]
    pub const fn fixed(now: DateTime<Local>) -> Self {
        Self { now }
    }

    #[must_use]
    pub const fn now(&self) -> DateTime<Local> {
        self.now
    }

    /// The local calendar day of `now`
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::system()
    }
}
