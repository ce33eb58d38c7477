//! Narrowing a requested range to the dates a station actually covers.

use crate::types::availability::DateSpan;

/// Result of [`clamp`]: the effective span and which ends moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clamped {
    pub span: DateSpan,
    pub start_adjusted: bool,
    pub end_adjusted: bool,
}

/// Narrows `requested` to `coverage`. Each end moves inward only: a start
/// earlier than the coverage start is raised to it, an end later than the
/// coverage end is lowered to it, and anything already inside is kept.
///
/// The result may be inverted (start after end) when the two spans do not
/// overlap; callers decide what that means.
pub fn clamp(requested: DateSpan, coverage: DateSpan) -> Clamped {
    let start_adjusted = requested.start < coverage.start;
    let end_adjusted = requested.end > coverage.end;
    Clamped {
        span: DateSpan {
            start: if start_adjusted { coverage.start } else { requested.start },
            end: if end_adjusted { coverage.end } else { requested.end },
        },
        start_adjusted,
        end_adjusted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn coverage() -> DateSpan {
        DateSpan::new(d(1869, 1, 1), d(2024, 10, 14))
    }

    #[test]
    fn test_wider_request_becomes_coverage() {
        let clamped = clamp(DateSpan::new(d(1750, 1, 1), d(2025, 1, 1)), coverage());
        assert_eq!(clamped.span, coverage());
        assert!(clamped.start_adjusted);
        assert!(clamped.end_adjusted);
    }

    #[test]
    fn test_inner_request_is_unchanged() {
        let requested = DateSpan::new(d(2020, 1, 1), d(2020, 1, 5));
        let clamped = clamp(requested, coverage());
        assert_eq!(clamped.span, requested);
        assert!(!clamped.start_adjusted);
        assert!(!clamped.end_adjusted);
    }

    #[test]
    fn test_each_end_moves_independently() {
        let clamped = clamp(DateSpan::new(d(1800, 6, 1), d(2000, 1, 1)), coverage());
        assert_eq!(clamped.span, DateSpan::new(d(1869, 1, 1), d(2000, 1, 1)));
        assert!(clamped.start_adjusted);
        assert!(!clamped.end_adjusted);

        let clamped = clamp(DateSpan::new(d(2000, 1, 1), d(2030, 1, 1)), coverage());
        assert_eq!(clamped.span, DateSpan::new(d(2000, 1, 1), d(2024, 10, 14)));
        assert!(!clamped.start_adjusted);
        assert!(clamped.end_adjusted);
    }

    #[test]
    fn test_clamp_is_idempotent_and_inward() {
        let requests = [
            DateSpan::new(d(1750, 1, 1), d(2030, 1, 1)),
            DateSpan::new(d(1900, 2, 28), d(1900, 3, 1)),
            DateSpan::new(d(1869, 1, 1), d(2024, 10, 14)),
            DateSpan::new(d(1860, 1, 1), d(1870, 1, 1)),
            DateSpan::new(d(2024, 1, 1), d(2026, 1, 1)),
        ];
        for requested in requests {
            let once = clamp(requested, coverage());
            let twice = clamp(once.span, coverage());
            assert_eq!(once.span, twice.span);
            assert!(!twice.start_adjusted && !twice.end_adjusted);
            assert!(once.span.start >= requested.start);
            assert!(once.span.end <= requested.end);
        }
    }
}
