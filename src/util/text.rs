//! Text helpers for cell comparison
//!
//! Cells are plain strings; numeric-ness and ordering are decided here at
//! comparison time.

use std::cmp::Ordering;

use icu::collator::options::CollatorOptions;
use icu::collator::{Collator, CollatorBorrowed};

/// Parse the leading floating-point number of a string
///
/// Mirrors the lenient "parse a prefix" behaviour users expect from
/// spreadsheet sorting: leading whitespace is skipped and trailing garbage
/// ignored, so `"12px"` is 12 and `" 3.5 kg"` is 3.5. Returns `None` when no
/// digits start the string (`"abc"`, `""`, `"-"`, `"."`).
pub fn parse_leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        let value = f64::INFINITY;
        return Some(if bytes[0] == b'-' { -value } else { value });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // Exponent only counts when followed by at least one digit
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

thread_local! {
    static ROOT_COLLATOR: Option<CollatorBorrowed<'static>> =
        Collator::try_new(Default::default(), CollatorOptions::default())
            .map_err(|e| tracing::warn!("root collator unavailable, using code point order: {}", e))
            .ok();
}

/// Compare two strings in locale order (CLDR root collation)
///
/// Accents and case are secondary and tertiary differences, so `"Éclair"`
/// sorts between `"apple"` and `"Zebra"` and `"a"` sorts before `"A"`.
/// Strings the collator considers equal fall back to code point order, which
/// keeps the ordering total.
pub fn collate(a: &str, b: &str) -> Ordering {
    ROOT_COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => Ordering::Equal,
        })
        .then_with(|| a.cmp(b))
}

/// Case-insensitive substring test
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
