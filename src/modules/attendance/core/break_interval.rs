// A single break inside a shift.
//
// Lifecycle
// - Created open (no end) when the break starts.
// - Closed exactly once through `end`, immutable afterwards.
//
// Overlap policy
// - Conservative: an open break conflicts with every other break until it is closed.
// - Closed breaks that merely touch (one ends when the other starts) do not overlap.

use crate::modules::attendance::core::errors::AttendanceError;
use crate::shared::core::primitives::{Instant, Minutes, TimeRange};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakInterval {
    start: Instant,
    end: Option<Instant>,
}

impl BreakInterval {
    pub fn open(start: Instant) -> Self {
        Self { start, end: None }
    }

    pub fn closed(start: Instant, end: Instant) -> Result<Self, AttendanceError> {
        if end <= start {
            return Err(AttendanceError::InvalidTimeRange(format!(
                "break start time {start} must be before end time {end}"
            )));
        }
        Ok(Self {
            start,
            end: Some(end),
        })
    }

    pub fn started_at(&self) -> Instant {
        self.start
    }

    pub fn ended_at(&self) -> Option<Instant> {
        self.end
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// Returns the closed copy of this break.
    pub fn end(&self, at: Instant) -> Result<Self, AttendanceError> {
        if !self.is_open() {
            return Err(AttendanceError::InvalidTimeRange(format!(
                "break {self} has already ended"
            )));
        }
        if at <= self.start {
            return Err(AttendanceError::InvalidTimeRange(format!(
                "break end time {at} must be after start time {}",
                self.start
            )));
        }
        Self::closed(self.start, at)
    }

    pub fn duration(&self) -> Option<Minutes> {
        let end = self.end?;
        TimeRange::new(self.start, end).ok().map(|r| r.duration())
    }

    pub fn overlaps(&self, other: &BreakInterval) -> bool {
        match (self.end, other.end) {
            (Some(end), Some(other_end)) => !(end <= other.start || other_end <= self.start),
            _ => true,
        }
    }

    /// Checks every distinct pair and reports the first conflict found.
    pub fn validate_no_overlaps(breaks: &[BreakInterval]) -> Result<(), AttendanceError> {
        for (i, first) in breaks.iter().enumerate() {
            for second in &breaks[i + 1..] {
                if first.overlaps(second) {
                    return Err(AttendanceError::OverlappingBreaks {
                        first: *first,
                        second: *second,
                    });
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for BreakInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "[{} - {}]", self.start, end),
            None => write!(f, "[{} - open]", self.start),
        }
    }
}

#[cfg(test)]
mod break_interval_tests {
    use super::*;
    use crate::tests::fixtures::{at, at_seconds};
    use rstest::rstest;

    fn closed(start: Instant, end: Instant) -> BreakInterval {
        BreakInterval::closed(start, end).unwrap()
    }

    #[rstest]
    fn it_should_close_an_open_break() {
        let lunch = BreakInterval::open(at(12, 0));
        assert!(lunch.is_open());

        let ended = lunch.end(at(12, 30)).unwrap();
        assert!(!ended.is_open());
        assert_eq!(ended.ended_at(), Some(at(12, 30)));
        assert_eq!(ended.duration().unwrap().value(), 30);
        assert!(lunch.is_open(), "ending returns a new break");
    }

    #[rstest]
    fn it_should_refuse_to_end_a_break_twice() {
        let ended = BreakInterval::open(at(12, 0)).end(at(12, 30)).unwrap();
        let error = ended.end(at(12, 45)).unwrap_err();
        assert!(matches!(error, AttendanceError::InvalidTimeRange(_)));
        assert_eq!(
            error.to_string(),
            "break [2024-01-15T12:00:00 - 2024-01-15T12:30:00] has already ended"
        );
    }

    #[rstest]
    #[case(at(12, 0))]
    #[case(at(11, 59))]
    fn it_should_refuse_a_non_positive_duration(#[case] end: Instant) {
        let lunch = BreakInterval::open(at(12, 0));
        assert!(matches!(
            lunch.end(end),
            Err(AttendanceError::InvalidTimeRange(_))
        ));
        assert!(matches!(
            BreakInterval::closed(at(12, 0), end),
            Err(AttendanceError::InvalidTimeRange(_))
        ));
    }

    #[rstest]
    fn it_should_have_no_duration_while_open() {
        assert_eq!(BreakInterval::open(at(12, 0)).duration(), None);
    }

    #[rstest]
    fn it_should_truncate_partial_minutes_of_the_duration() {
        let short = closed(at(12, 0), at_seconds(12, 10, 59));
        assert_eq!(short.duration().unwrap().value(), 10);
    }

    #[rstest]
    #[case(closed(at(10, 0), at(10, 15)), closed(at(10, 15), at(10, 30)), false)]
    #[case(closed(at(10, 15), at(10, 30)), closed(at(10, 0), at(10, 15)), false)]
    #[case(closed(at(10, 0), at(10, 15)), closed(at(11, 0), at(11, 15)), false)]
    #[case(closed(at(10, 0), at(10, 30)), closed(at(10, 15), at(10, 45)), true)]
    #[case(closed(at(10, 0), at(11, 0)), closed(at(10, 15), at(10, 30)), true)]
    #[case(BreakInterval::open(at(15, 0)), closed(at(10, 0), at(10, 15)), true)]
    #[case(closed(at(10, 0), at(10, 15)), BreakInterval::open(at(15, 0)), true)]
    fn it_should_detect_overlaps(
        #[case] first: BreakInterval,
        #[case] second: BreakInterval,
        #[case] expected: bool,
    ) {
        assert_eq!(first.overlaps(&second), expected);
        assert_eq!(second.overlaps(&first), expected);
    }

    #[rstest]
    fn it_should_accept_a_set_of_disjoint_breaks() {
        let breaks = [
            closed(at(10, 0), at(10, 15)),
            closed(at(12, 0), at(12, 30)),
            closed(at(15, 0), at(15, 15)),
        ];
        assert!(BreakInterval::validate_no_overlaps(&breaks).is_ok());
        assert!(BreakInterval::validate_no_overlaps(&[]).is_ok());
    }

    #[rstest]
    fn it_should_report_the_first_conflicting_pair() {
        let breaks = [
            closed(at(10, 0), at(10, 15)),
            closed(at(12, 0), at(12, 30)),
            closed(at(12, 15), at(12, 45)),
        ];
        let result = BreakInterval::validate_no_overlaps(&breaks);
        assert_eq!(
            result,
            Err(AttendanceError::OverlappingBreaks {
                first: breaks[1],
                second: breaks[2],
            })
        );
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("[2024-01-15T12:00:00 - 2024-01-15T12:30:00]")
        );
    }
}
