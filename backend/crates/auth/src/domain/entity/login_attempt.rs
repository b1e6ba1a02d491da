//! Login Attempt Record
//!
//! Failed-login bookkeeping for one identity.
//!
//! Clean (no record) → Accumulating (failures below the limit) → Locked
//! (limit reached, `locked_until` set) → Clean again on success or once an
//! expired lockout is observed.

use chrono::{DateTime, TimeDelta, Utc};

/// Exists only while `failure_count > 0` or a lockout is active
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginAttemptRecord {
    /// Consecutive failures since the last success or lockout expiry
    pub failure_count: u32,
    pub locked_until: Option<DateTime<Utc>>,
}

impl LoginAttemptRecord {
    pub fn is_locked(&self) -> bool {
        self.locked_until.is_some()
    }

    /// Locked and `now` is still inside the window
    pub fn is_locked_at(&self, now: DateTime<Utc>) -> bool {
        self.locked_until.is_some_and(|until| now < until)
    }

    /// Lockout was set but has run out
    pub fn lock_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.locked_until.is_some_and(|until| now >= until)
    }

    /// Whole minutes left in the lockout, rounded up. Never 0 while locked.
    pub fn remaining_minutes(&self, now: DateTime<Utc>) -> i64 {
        let Some(until) = self.locked_until else {
            return 0;
        };
        if now >= until {
            return 0;
        }
        let remaining_ms = (until - now).num_milliseconds();
        ((remaining_ms + 59_999) / 60_000).max(1)
    }

    /// Count one failure. Returns `true` if this failure started a lockout.
    pub fn record_failure(
        &mut self,
        max_failures: u32,
        lockout: TimeDelta,
        now: DateTime<Utc>,
    ) -> bool {
        self.failure_count = self.failure_count.saturating_add(1);

        if self.failure_count >= max_failures {
            let until = now
                .checked_add_signed(lockout)
                .unwrap_or(DateTime::<Utc>::MAX_UTC);
            self.locked_until = Some(until);
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_then_locks() {
        let now = Utc::now();
        let mut record = LoginAttemptRecord::default();

        for expected in 1..=5 {
            assert!(!record.record_failure(6, TimeDelta::minutes(30), now));
            assert_eq!(record.failure_count, expected);
            assert!(!record.is_locked());
        }

        assert!(record.record_failure(6, TimeDelta::minutes(30), now));
        assert_eq!(record.failure_count, 6);
        assert_eq!(record.locked_until, Some(now + TimeDelta::minutes(30)));
        assert!(record.is_locked_at(now));
    }

    #[test]
    fn test_remaining_minutes_rounds_up() {
        let now = Utc::now();
        let record = LoginAttemptRecord {
            failure_count: 6,
            locked_until: Some(now + TimeDelta::minutes(30)),
        };
        assert_eq!(record.remaining_minutes(now), 30);
        assert_eq!(record.remaining_minutes(now + TimeDelta::seconds(1)), 30);
        assert_eq!(record.remaining_minutes(now + TimeDelta::minutes(29)), 1);
        assert_eq!(
            record.remaining_minutes(now + TimeDelta::minutes(29) + TimeDelta::seconds(59)),
            1
        );
        assert_eq!(record.remaining_minutes(now + TimeDelta::minutes(31)), 0);
    }

    #[test]
    fn test_remaining_minutes_under_a_millisecond() {
        let now = Utc::now();
        let until = now + TimeDelta::minutes(30);
        let record = LoginAttemptRecord {
            failure_count: 6,
            locked_until: Some(until),
        };

        let almost = until - TimeDelta::microseconds(500);
        assert!(record.is_locked_at(almost));
        assert_eq!(record.remaining_minutes(almost), 1);
        assert_eq!(record.remaining_minutes(until), 0);
    }

    #[test]
    fn test_expiry_boundary() {
        let now = Utc::now();
        let until = now + TimeDelta::minutes(30);
        let record = LoginAttemptRecord {
            failure_count: 6,
            locked_until: Some(until),
        };

        assert!(record.is_locked_at(until - TimeDelta::milliseconds(1)));
        assert!(!record.lock_expired_at(until - TimeDelta::milliseconds(1)));
        assert!(!record.is_locked_at(until));
        assert!(record.lock_expired_at(until));
    }
}
