//! Meeting room and booking domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bookable meeting room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct MeetingRoom {
    pub id: i64,
    pub name: String,
    pub capacity: i32,
}

/// Input for creating a meeting room.
#[derive(Debug, Clone)]
pub struct NewRoom {
    pub name: String,
    pub capacity: i32,
}

/// A persisted reservation of one room for one time window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Booking {
    pub id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub room_id: i64,
    pub created_by: String,
}

impl Booking {
    /// The time window this booking occupies.
    pub fn window(&self) -> TimeWindow {
        TimeWindow {
            start: self.start_time,
            end: self.end_time,
        }
    }
}

/// A booking that has passed admission checks but is not stored yet.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub id: String,
    pub room_id: i64,
    pub window: TimeWindow,
    pub created_by: String,
}

impl NewBooking {
    /// Materialise the stored record.
    pub fn into_booking(self) -> Booking {
        Booking {
            id: self.id,
            start_time: self.window.start,
            end_time: self.window.end,
            room_id: self.room_id,
            created_by: self.created_by,
        }
    }
}

/// A requested or occupied time interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Whether two windows conflict.
    ///
    /// Endpoints are inclusive: a window ending at 11:00 conflicts with one
    /// starting at 11:00. The storage exclusion constraint uses the same
    /// closed-range semantics.
    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        other.start <= self.end && other.end >= self.start
    }

    /// Whether `start` is strictly before `end`.
    pub fn is_well_formed(&self) -> bool {
        self.start < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, hour, minute, 0).unwrap()
    }

    fn window(from: (u32, u32), to: (u32, u32)) -> TimeWindow {
        TimeWindow::new(at(from.0, from.1), at(to.0, to.1))
    }

    #[test]
    fn disjoint_windows_do_not_overlap() {
        let a = window((9, 0), (10, 0));
        let b = window((10, 30), (11, 0));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn partial_overlap_conflicts() {
        let a = window((9, 0), (10, 30));
        let b = window((10, 0), (11, 0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn containment_conflicts_both_ways() {
        let outer = window((9, 0), (12, 0));
        let inner = window((10, 0), (11, 0));
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn touching_boundary_conflicts() {
        let existing = window((10, 0), (11, 0));
        let next = window((11, 0), (12, 0));
        assert!(existing.overlaps(&next));
        assert!(next.overlaps(&existing));
    }

    #[test]
    fn well_formed_requires_start_before_end() {
        assert!(window((10, 0), (11, 0)).is_well_formed());
        assert!(!window((11, 0), (11, 0)).is_well_formed());
        assert!(!window((11, 0), (10, 0)).is_well_formed());
    }

    #[test]
    fn new_booking_keeps_window() {
        let nb = NewBooking {
            id: "b1".into(),
            room_id: 7,
            window: window((10, 0), (11, 0)),
            created_by: "admin".into(),
        };
        let booking = nb.into_booking();
        assert_eq!(booking.start_time, at(10, 0));
        assert_eq!(booking.end_time, at(11, 0));
        assert_eq!(booking.window(), window((10, 0), (11, 0)));
    }
}
