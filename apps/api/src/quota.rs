//! Daily word quota enforcement.
//!
//! Each token may justify a bounded number of words per UTC calendar day
//! (default 80 000, see [`crate::config::DEFAULT_DAILY_WORD_LIMIT`]). The
//! count charged for a request is the number of whitespace-delimited tokens
//! in the raw body, computed here independently of the justification engine's
//! own word extraction.

use chrono::{NaiveDate, Utc};

use crate::store::UsageStore;

/// Counts the words billed for a request body.
pub fn count_words(text: &str) -> u64 {
    text.split_whitespace().count() as u64
}

/// Checks whether `token` may spend `words` more words today and, if so,
/// records the spend. Returns `false` without consuming anything when the
/// request would push the token over `limit`.
pub fn check_and_consume(store: &UsageStore, token: &str, words: u64, limit: u64) -> bool {
    check_and_consume_at(store, token, words, limit, Utc::now().date_naive())
}

/// Date-injected variant of [`check_and_consume`]; the UTC day boundary is
/// the only time-dependent behavior in the service.
fn check_and_consume_at(
    store: &UsageStore,
    token: &str,
    words: u64,
    limit: u64,
    today: NaiveDate,
) -> bool {
    store.with_entry(token, today, |usage| {
        // New day: the counter starts over before the check.
        if usage.last_reset != today {
            usage.words = 0;
            usage.last_reset = today;
        }

        if usage.words + words > limit {
            return false;
        }

        usage.words += words;
        true
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::UsageStore;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_count_words_collapses_whitespace() {
        assert_eq!(count_words("one two three"), 3);
        assert_eq!(count_words("  one\t two \n three  "), 3);
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   \n  "), 0);
    }

    #[test]
    fn test_allows_within_limit_and_accumulates() {
        let store = UsageStore::new();
        let today = day("2026-08-24");

        assert!(check_and_consume_at(&store, "tok", 30, 100, today));
        assert!(check_and_consume_at(&store, "tok", 40, 100, today));
        assert_eq!(store.get("tok").unwrap().words, 70);
    }

    #[test]
    fn test_exact_fit_is_allowed() {
        let store = UsageStore::new();
        let today = day("2026-08-24");

        assert!(check_and_consume_at(&store, "tok", 100, 100, today));
        assert!(!check_and_consume_at(&store, "tok", 1, 100, today));
    }

    #[test]
    fn test_denial_does_not_consume() {
        let store = UsageStore::new();
        let today = day("2026-08-24");

        assert!(check_and_consume_at(&store, "tok", 90, 100, today));
        assert!(!check_and_consume_at(&store, "tok", 20, 100, today));
        // The denied 20 words must not count against the token.
        assert_eq!(store.get("tok").unwrap().words, 90);
        assert!(check_and_consume_at(&store, "tok", 10, 100, today));
    }

    #[test]
    fn test_counter_resets_on_new_day() {
        let store = UsageStore::new();

        assert!(check_and_consume_at(&store, "tok", 100, 100, day("2026-08-24")));
        assert!(!check_and_consume_at(&store, "tok", 1, 100, day("2026-08-24")));

        // Next UTC day: full quota again.
        assert!(check_and_consume_at(&store, "tok", 100, 100, day("2026-08-25")));
        let usage = store.get("tok").unwrap();
        assert_eq!(usage.words, 100);
        assert_eq!(usage.last_reset, day("2026-08-25"));
    }

    #[test]
    fn test_tokens_are_tracked_independently() {
        let store = UsageStore::new();
        let today = day("2026-08-24");

        assert!(check_and_consume_at(&store, "a", 100, 100, today));
        assert!(check_and_consume_at(&store, "b", 100, 100, today));
    }
}
