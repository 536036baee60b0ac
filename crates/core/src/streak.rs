//! Commit streak calculation over a date-keyed activity map.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::activity::ActivityMap;

/// Streak figures derived from an activity map.
///
/// `longest_streak >= current_streak` always holds; the current streak is
/// just the run of active days ending at `today`, which the longest-run
/// scan also sees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakResult {
    pub current_streak: u64,
    pub longest_streak: u64,
    pub total_active_days: u64,
}

/// Compute current streak, longest streak and total active days.
///
/// `today` is passed in rather than read from the clock so results are
/// reproducible; callers use `Utc::now().date_naive()`, matching the UTC
/// convention of [`crate::activity::activity_by_date`]. Zero-count
/// entries should not appear in the map but are treated as inactive if
/// they do.
pub fn compute_streak(activity: &ActivityMap, today: NaiveDate) -> StreakResult {
    let active: Vec<NaiveDate> = activity
        .iter()
        .filter(|(_, &count)| count > 0)
        .map(|(&date, _)| date)
        .collect();

    if active.is_empty() {
        return StreakResult::default();
    }

    // Walk backward from today until the first inactive day.
    let mut current_streak = 0u64;
    let mut cursor = today;
    while active.binary_search(&cursor).is_ok() {
        current_streak += 1;
        match cursor.checked_sub_days(Days::new(1)) {
            Some(prev) => cursor = prev,
            None => break,
        }
    }

    // Longest run of consecutive dates in the sorted active list.
    let mut longest_streak = 1u64;
    let mut run = 1u64;
    for pair in active.windows(2) {
        if pair[0].checked_add_days(Days::new(1)) == Some(pair[1]) {
            run += 1;
        } else {
            run = 1;
        }
        longest_streak = longest_streak.max(run);
    }

    StreakResult {
        current_streak,
        longest_streak: longest_streak.max(current_streak),
        total_active_days: active.len() as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(days_ago: &[u64], today: NaiveDate) -> ActivityMap {
        days_ago
            .iter()
            .map(|&d| (today.checked_sub_days(Days::new(d)).unwrap(), 1u64))
            .collect()
    }

    fn today() -> NaiveDate {
        "2026-08-29".parse().unwrap()
    }

    #[test]
    fn empty_map_is_all_zeros() {
        assert_eq!(
            compute_streak(&ActivityMap::new(), today()),
            StreakResult::default()
        );
    }

    #[test]
    fn three_consecutive_days_ending_today() {
        let result = compute_streak(&map(&[0, 1, 2], today()), today());
        assert_eq!(
            result,
            StreakResult {
                current_streak: 3,
                longest_streak: 3,
                total_active_days: 3
            }
        );
    }

    #[test]
    fn today_inactive_means_zero_current_streak() {
        // Runs of length 2 (days -10,-9) and 3 (days -3,-2,-1).
        let result = compute_streak(&map(&[10, 9, 3, 2, 1], today()), today());
        assert_eq!(result.current_streak, 0);
        assert_eq!(result.longest_streak, 3);
        assert_eq!(result.total_active_days, 5);
    }

    #[test]
    fn single_active_day_today() {
        let result = compute_streak(&map(&[0], today()), today());
        assert_eq!(
            result,
            StreakResult {
                current_streak: 1,
                longest_streak: 1,
                total_active_days: 1
            }
        );
    }

    #[test]
    fn single_active_day_in_the_past() {
        let result = compute_streak(&map(&[5], today()), today());
        assert_eq!(result.current_streak, 0);
        assert_eq!(result.longest_streak, 1);
        assert_eq!(result.total_active_days, 1);
    }

    #[test]
    fn zero_count_entries_are_inactive() {
        let mut activity = map(&[0, 1], today());
        activity.insert(
            today().checked_sub_days(Days::new(2)).unwrap(),
            0,
        );
        let result = compute_streak(&activity, today());
        assert_eq!(result.current_streak, 2);
        assert_eq!(result.total_active_days, 2);
    }

    #[test]
    fn longest_never_below_current() {
        let result = compute_streak(&map(&[0, 1, 2, 3, 7], today()), today());
        assert_eq!(result.current_streak, 4);
        assert_eq!(result.longest_streak, 4);
    }
}
