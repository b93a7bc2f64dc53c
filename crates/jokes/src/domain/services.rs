//! Domain Services
//!
//! Pure filter / sort logic over saved jokes. Every function borrows its
//! input and returns a fresh vector.

use crate::domain::entities::Joke;
use crate::domain::value_objects::SortOption;
use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Case-insensitive substring match on setup or punchline
///
/// A blank query keeps every joke.
pub fn filter_by_search(jokes: &[Joke], query: &str) -> Vec<Joke> {
    if query.trim().is_empty() {
        return jokes.to_vec();
    }

    let needle = query.to_lowercase();
    jokes
        .iter()
        .filter(|joke| {
            joke.setup.to_lowercase().contains(&needle)
                || joke.punchline.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Keep jokes rated at least `min_rating` stars; 0 keeps every joke
pub fn filter_by_rating(jokes: &[Joke], min_rating: u8) -> Vec<Joke> {
    if min_rating == 0 {
        return jokes.to_vec();
    }

    jokes
        .iter()
        .filter(|joke| joke.rating.stars() >= min_rating)
        .cloned()
        .collect()
}

/// Stable sort by the chosen option
pub fn apply_sorting(jokes: &[Joke], option: SortOption) -> Vec<Joke> {
    let mut sorted = jokes.to_vec();
    match option {
        SortOption::Rating => sorted.sort_by(|a, b| b.rating.cmp(&a.rating)),
        SortOption::Alphabetical => sorted.sort_by(|a, b| locale_compare(&a.setup, &b.setup)),
        SortOption::Newest => sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }
    sorted
}

/// Search, then rating, then sort. Sorting always runs last.
pub fn apply_filters(
    jokes: &[Joke],
    query: &str,
    min_rating: u8,
    option: SortOption,
) -> Vec<Joke> {
    let result = filter_by_search(jokes, query);
    let result = filter_by_rating(&result, min_rating);
    apply_sorting(&result, option)
}

/// Locale-style string ordering
///
/// Compares base letters first (case and diacritics ignored), then
/// diacritics, then case with lowercase before uppercase.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_key(a)
        .cmp(&base_key(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| case_order(a, b))
}

fn base_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn accent_key(s: &str) -> String {
    s.nfd().flat_map(char::to_lowercase).collect()
}

fn case_order(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x == y {
            continue;
        }
        return match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => x.cmp(&y),
        };
    }
    a.len().cmp(&b.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{JokeType, Rating};
    use kernel::id::JokeId;

    fn joke(n: i64, setup: &str, punchline: &str, stars: u8) -> Joke {
        Joke {
            id: JokeId::from_millis(n),
            setup: setup.to_string(),
            punchline: punchline.to_string(),
            joke_type: JokeType::Random,
            rating: Rating::new(stars).unwrap(),
            created_at: n,
        }
    }

    fn sample() -> Vec<Joke> {
        vec![
            joke(3, "Why did the chicken cross the road?", "To get to the other side", 2),
            joke(1, "What do you call a fake noodle?", "An impasta", 5),
            joke(4, "How many programmers does it take?", "None, it's a hardware problem", 0),
            joke(2, "Why do Java developers wear glasses?", "Because they don't C#", 5),
        ]
    }

    fn ids(jokes: &[Joke]) -> Vec<i64> {
        jokes.iter().map(|j| j.created_at).collect()
    }

    #[test]
    fn test_filter_by_search_blank_query_is_identity() {
        let jokes = sample();
        assert_eq!(filter_by_search(&jokes, ""), jokes);
        assert_eq!(filter_by_search(&jokes, "   "), jokes);
    }

    #[test]
    fn test_filter_by_search_matches_setup_or_punchline() {
        let jokes = sample();
        assert_eq!(ids(&filter_by_search(&jokes, "WHY")), vec![3, 2]);
        assert_eq!(ids(&filter_by_search(&jokes, "impasta")), vec![1]);
        assert!(filter_by_search(&jokes, "zebra").is_empty());
    }

    #[test]
    fn test_filter_by_rating() {
        let jokes = sample();
        assert_eq!(filter_by_rating(&jokes, 0), jokes);
        assert_eq!(ids(&filter_by_rating(&jokes, 2)), vec![3, 1, 2]);
        assert_eq!(ids(&filter_by_rating(&jokes, 5)), vec![1, 2]);
    }

    #[test]
    fn test_sort_newest() {
        let sorted = apply_sorting(&sample(), SortOption::Newest);
        assert_eq!(ids(&sorted), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_sort_rating_is_stable() {
        let sorted = apply_sorting(&sample(), SortOption::Rating);
        // 1 and 2 share 5 stars and keep their input order
        assert_eq!(ids(&sorted), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_sort_alphabetical() {
        let sorted = apply_sorting(&sample(), SortOption::Alphabetical);
        assert_eq!(ids(&sorted), vec![4, 1, 3, 2]);
    }

    #[test]
    fn test_sorting_is_idempotent() {
        for option in [
            SortOption::Newest,
            SortOption::Rating,
            SortOption::Alphabetical,
        ] {
            let once = apply_sorting(&sample(), option);
            let twice = apply_sorting(&once, option);
            assert_eq!(once, twice, "{option} should be idempotent");
        }
    }

    #[test]
    fn test_sorting_does_not_mutate_input() {
        let jokes = sample();
        let before = jokes.clone();
        let _ = apply_sorting(&jokes, SortOption::Alphabetical);
        assert_eq!(jokes, before);
    }

    #[test]
    fn test_apply_filters_pipeline() {
        let result = apply_filters(&sample(), "why", 2, SortOption::Newest);
        assert_eq!(ids(&result), vec![3, 2]);
    }

    #[test]
    fn test_locale_compare() {
        let mut words = vec!["zebra", "Émile", "banana", "Apple", "eclair", "apple"];
        words.sort_by(|a, b| locale_compare(a, b));
        assert_eq!(
            words,
            vec!["apple", "Apple", "banana", "eclair", "Émile", "zebra"]
        );
    }

    #[test]
    fn test_locale_compare_accent_after_plain() {
        assert_eq!(locale_compare("resume", "résumé"), Ordering::Less);
        assert_eq!(locale_compare("résumé", "resume"), Ordering::Greater);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }
}
