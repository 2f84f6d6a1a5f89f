use chrono::DateTime;
use chrono::Utc;

/// Source of the current time.
///
/// Token expiry is a function of the clock, so issuance takes the clock as a
/// dependency instead of reading system time directly. Tests substitute a
/// fixed clock to pin expiries deterministically.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// System wall clock, the production implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
