//! Candidate ordering and fuzzy resolution

use std::cmp::Reverse;

use arrayvec::ArrayVec;

use crate::score::{SCORE_THRESHOLD, similarity};
use crate::types::{MAX_PROJECTS, MatchList, ProjectList, ProjectRecord, ScoredMatch};

/// Order candidates by modification time, most recent first
///
/// The sort is stable: candidates with equal timestamps keep their scan
/// order. Does not mutate its input.
#[must_use]
pub fn sort_recent(projects: &ProjectList) -> Box<ProjectList> {
    let mut sorted = Box::new(projects.clone());
    sorted.sort_by_key(|record| Reverse(record.modified_at));
    sorted
}

/// Get the most recently modified candidate from a recency-ordered set
#[must_use]
pub fn latest(sorted: &[ProjectRecord]) -> Option<&ProjectRecord> {
    sorted.first()
}

/// Rank candidates against a query term
///
/// Returns every candidate whose score strictly exceeds `SCORE_THRESHOLD`,
/// sorted descending by score. The sort is stable, so equal scores keep
/// their input order; with a recency-ordered input, recency is the implicit
/// tie-break. An empty or whitespace-only query yields an empty result, so
/// callers can probe without special-casing blank input.
#[must_use]
pub fn find_matches(projects: &ProjectList, query: &str) -> MatchList {
    let mut matches = MatchList::new();

    if query.trim().is_empty() {
        return matches;
    }

    for project in projects {
        let score = similarity(&project.name, query);
        if score <= SCORE_THRESHOLD {
            continue;
        }
        if matches.try_push(ScoredMatch { project: project.clone(), score }).is_err() {
            // Match list capacity equals the candidate list capacity
            break;
        }
    }

    // Sort by score in descending order
    matches
        .as_mut_slice()
        .sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

    matches
}

/// List candidate names in input order, for shell-completion suggestions
#[must_use]
pub fn names(projects: &ProjectList) -> ArrayVec<&str, MAX_PROJECTS> {
    projects.iter().map(|project| project.name.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::time::{Duration, SystemTime};

    use super::*;
    use crate::score::SUBSTRING_SCORE;

    fn record(name: &str, seconds: u64) -> ProjectRecord {
        ProjectRecord {
            name:        name.to_string(),
            path:        PathBuf::from(name),
            modified_at: SystemTime::UNIX_EPOCH + Duration::from_secs(seconds),
        }
    }

    fn candidates(records: &[ProjectRecord]) -> ProjectList {
        records.iter().cloned().collect()
    }

    fn sample_set() -> ProjectList {
        candidates(&[
            record("Sample", 100),
            record("My Test Algorithm", 200),
            record("Another", 50),
        ])
    }

    #[test]
    fn test_sort_recent_orders_descending() {
        let sorted = sort_recent(&sample_set());
        let names: Vec<&str> = sorted.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["My Test Algorithm", "Sample", "Another"]);
    }

    #[test]
    fn test_sort_recent_is_stable_on_ties() {
        let input = candidates(&[
            record("first", 100),
            record("second", 100),
            record("newest", 300),
            record("third", 100),
        ]);
        let sorted = sort_recent(&input);
        let names: Vec<&str> = sorted.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["newest", "first", "second", "third"]);
    }

    #[test]
    fn test_sort_recent_does_not_mutate_input() {
        let input = sample_set();
        let before = input.clone();
        let _sorted = sort_recent(&input);
        assert_eq!(input, before);
    }

    #[test]
    fn test_latest_takes_head_of_sorted_set() {
        let sorted = sort_recent(&sample_set());
        assert_eq!(latest(&sorted).map(|r| r.name.as_str()), Some("My Test Algorithm"));
    }

    #[test]
    fn test_latest_on_empty_set() {
        assert!(latest(&[]).is_none());
    }

    #[test]
    fn test_exact_match_query() {
        let matches = find_matches(&sort_recent(&sample_set()), "sample");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].project.name, "Sample");
        assert!((matches[0].score - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_substring_match_query() {
        let matches = find_matches(&sort_recent(&sample_set()), "alg");
        // "My Test Algorithm" contains the term; "Sample" trails on edit
        // distance (1 - 4/6); "Another" falls below the threshold
        assert_eq!(matches[0].project.name, "My Test Algorithm");
        assert!((matches[0].score - SUBSTRING_SCORE).abs() < f32::EPSILON);
        assert!(matches.iter().all(|found| found.project.name != "Another"));
        for window in matches.windows(2) {
            assert!(window[0].score >= window[1].score, "Matches must be ranked descending");
        }
    }

    #[test]
    fn test_no_match_above_threshold() {
        let matches = find_matches(&sort_recent(&sample_set()), "zzzzzz");
        assert!(matches.is_empty());
    }

    #[test]
    fn test_all_scores_strictly_exceed_threshold() {
        for query in ["alg", "sample", "test", "an", "z"] {
            let matches = find_matches(&sort_recent(&sample_set()), query);
            for found in &matches {
                assert!(
                    found.score > SCORE_THRESHOLD,
                    "Score {} for '{}' must strictly exceed the threshold",
                    found.score,
                    found.project.name
                );
            }
        }
    }

    #[test]
    fn test_blank_query_yields_empty_result() {
        let projects = sort_recent(&sample_set());
        assert!(find_matches(&projects, "").is_empty());
        assert!(find_matches(&projects, "   ").is_empty());
        assert!(find_matches(&projects, "\t\n").is_empty());
    }

    #[test]
    fn test_equal_scores_keep_recency_order() {
        let input = candidates(&[
            record("alpha one", 300),
            record("alpha two", 200),
            record("alpha three", 100),
        ]);
        let matches = find_matches(&sort_recent(&input), "alpha");
        let names: Vec<&str> = matches.iter().map(|m| m.project.name.as_str()).collect();
        assert_eq!(names, ["alpha one", "alpha two", "alpha three"]);
    }

    #[test]
    fn test_names_in_input_order() {
        let set = sample_set();
        let listed = names(&set);
        assert_eq!(listed.as_slice(), ["Sample", "My Test Algorithm", "Another"]);
    }
}
