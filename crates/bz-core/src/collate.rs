//! German-aware string ordering for inventories.
//!
//! Inventory entries are player-facing German item names, so plain byte
//! ordering would sort "Äxte" after "Zauberstab". Keys are folded per
//! DIN 5007-1: umlauts lose their diaeresis (ä→a, ö→o, ü→u), ß becomes ss,
//! and comparison is case-insensitive. Ties fall back to the raw string so
//! the order stays total.

use std::cmp::Ordering;

/// Build the fold key used for ordering.
pub fn sort_key(s: &str) -> String {
    let mut key = String::with_capacity(s.len());
    for c in s.chars() {
        for lc in c.to_lowercase() {
            match lc {
                'ä' => key.push('a'),
                'ö' => key.push('o'),
                'ü' => key.push('u'),
                'ß' => key.push_str("ss"),
                other => key.push(other),
            }
        }
    }
    key
}

/// Compare two strings by their fold keys, raw bytes as tie-break.
pub fn compare(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(&sort_key(b)).then_with(|| a.cmp(b))
}

/// Sort a list of item names ascending.
pub fn sort_items(items: &mut [String]) {
    items.sort_by(|a, b| compare(a, b));
}
