//! Performance-trend analysis.
//!
//! Derives a trend direction and consistency flag from the record's annual
//! rating series. The direction is a pairwise comparison of the two most
//! recent data points, not a regression.

use crate::models::{EmployeeRecord, TrendDirection, TrendResult};

/// Analyzes the performance trend over a record's annual ratings.
///
/// The rating series is built from the present, recognized ratings in
/// chronological order. Absent slots and the explicit Unrated label are
/// skipped entirely — they are absence of data, not ordinal zero — so a
/// record whose every period is Unrated yields
/// [`TrendDirection::InsufficientData`].
///
/// Direction compares the two most recent entries: strictly greater is
/// Improving, strictly less is Declining, equal is Stable. The consistency
/// check applies only when all three periods carry data: Improving requires
/// a non-decreasing series, Declining a non-increasing one, Stable all-equal.
/// With fewer than three entries consistency is vacuously true; there is no
/// third point to contradict the direction. That is a design choice, not a
/// derived fact.
///
/// # Example
///
/// ```
/// use talent_engine::assessment::analyze_trend;
/// use talent_engine::models::{EmployeeRecord, PerformanceRating, TrendDirection};
///
/// let record = EmployeeRecord {
///     id: "10042".to_string(),
///     name: "Amina Al Busaidi".to_string(),
///     position: "Process Engineer".to_string(),
///     department: None,
///     function: None,
///     team: None,
///     grade: None,
///     tenure_years: None,
///     entry_date: None,
///     nationality: Default::default(),
///     nine_box: Default::default(),
///     skill_level: Default::default(),
///     is_successor: false,
///     succession_target: None,
///     ratings: [
///         Some(PerformanceRating::AchievedTarget),
///         Some(PerformanceRating::ExceedTarget),
///         Some(PerformanceRating::Exceptional),
///     ],
/// };
///
/// let trend = analyze_trend(&record);
/// assert_eq!(trend.direction, TrendDirection::Improving);
/// assert!(trend.consistent);
/// assert_eq!(trend.latest_rating, 5);
/// ```
pub fn analyze_trend(record: &EmployeeRecord) -> TrendResult {
    let rating_series: Vec<u8> = record
        .ratings
        .iter()
        .flatten()
        .filter(|rating| rating.is_rated())
        .map(|rating| rating.ordinal())
        .collect();

    let latest_rating = rating_series.last().copied().unwrap_or(0);

    if rating_series.len() < 2 {
        return TrendResult {
            direction: TrendDirection::InsufficientData,
            // Vacuously consistent: no second point to contradict
            consistent: true,
            rating_series,
            latest_rating,
        };
    }

    let previous = rating_series[rating_series.len() - 2];
    let direction = if latest_rating > previous {
        TrendDirection::Improving
    } else if latest_rating < previous {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    };

    let consistent = if rating_series.len() == 3 {
        let (a, b, c) = (rating_series[0], rating_series[1], rating_series[2]);
        match direction {
            TrendDirection::Improving => a <= b && b <= c,
            TrendDirection::Declining => a >= b && b >= c,
            TrendDirection::Stable => a == b && b == c,
            TrendDirection::InsufficientData => unreachable!("series has >= 2 entries"),
        }
    } else {
        // Two points only: vacuously consistent
        true
    };

    TrendResult {
        direction,
        consistent,
        rating_series,
        latest_rating,
    }
}
