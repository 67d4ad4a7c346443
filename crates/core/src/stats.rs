//! Rating statistics over the movie collection.
//!
//! Only ratings that carry a numeric value participate; text ratings like
//! `"N/A"` and absent ratings are excluded from every aggregate, including
//! best/worst.

use crate::library::MovieCollection;

/// Aggregate rating statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingStats {
    /// Arithmetic mean of all numeric ratings.
    pub average: f64,
    /// Median: middle element for odd counts, mean of the two central
    /// elements for even counts.
    pub median: f64,
    /// Every title tied at the highest rating, with that rating.
    pub best: Vec<(String, f64)>,
    /// Every title tied at the lowest rating, with that rating.
    pub worst: Vec<(String, f64)>,
}

/// Compute statistics over the collection.
///
/// Returns `None` when no rating parses as a number, so callers report
/// "no data" instead of dividing by zero.
pub fn compute_stats(movies: &MovieCollection) -> Option<RatingStats> {
    let rated: Vec<(&str, f64)> = movies
        .iter()
        .filter_map(|(title, record)| {
            record
                .rating
                .as_ref()
                .and_then(|r| r.as_value())
                .map(|v| (title.as_str(), v))
        })
        .collect();

    if rated.is_empty() {
        return None;
    }

    let average = rated.iter().map(|(_, v)| v).sum::<f64>() / rated.len() as f64;

    let mut sorted: Vec<f64> = rated.iter().map(|(_, v)| *v).collect();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    };

    let highest = sorted[sorted.len() - 1];
    let lowest = sorted[0];
    let at = |target: f64| {
        rated
            .iter()
            .filter(|(_, v)| *v == target)
            .map(|(title, v)| (title.to_string(), *v))
            .collect::<Vec<_>>()
    };

    Some(RatingStats {
        average,
        median,
        best: at(highest),
        worst: at(lowest),
    })
}
