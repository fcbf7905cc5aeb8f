// src/core/transform.rs
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

/// Three-letter month tokens and the numeral each one is written as.
const MONTHS: [(&str, &str); 12] = [
    ("Jan", "01"),
    ("Feb", "02"),
    ("Mar", "03"),
    ("Apr", "04"),
    ("May", "05"),
    ("Jun", "06"),
    ("Jul", "07"),
    ("Aug", "08"),
    ("Sep", "09"),
    ("Oct", "10"),
    ("Nov", "11"),
    ("Dec", "12"),
];

// `[0-9]` rather than `\d`: the regex crate's `\d` also accepts non-ASCII digits.
static DATE_REFERENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\[\[(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec) ([0-9]{1,2})[a-zA-Z]*, ([0-9]{4})\]\]",
    )
    .expect("valid date reference regex")
});

// Bare `Mon D(suffix), YYYY` as found in journal page names. The word
// boundaries keep `XJan 1, 2020` and `Jan 1, 20201` out.
static BARE_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec) ([0-9]{1,2})[a-zA-Z]*, ([0-9]{4})\b",
    )
    .expect("valid bare date regex")
});

fn month_numeral(token: &str) -> Option<&'static str> {
    MONTHS
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, numeral)| *numeral)
}

/// `YYYY-MM-DD` from the month, day and year groups shared by both patterns.
fn iso_date(caps: &Captures<'_>) -> String {
    // The alternation only admits tokens from MONTHS.
    let Some(month) = month_numeral(&caps[1]) else {
        return caps[0].to_owned();
    };
    let day = &caps[2];
    let year = &caps[3];
    format!("{year}-{month}-{day:0>2}")
}

/// Rewrites every `[[Mon D(suffix), YYYY]]` reference in `text` as `[[YYYY-MM-DD]]`.
///
/// Text that does not match the full pattern is passed through unchanged, so
/// applying the transform to its own output is a no-op. No calendar validation
/// takes place: `[[Feb 31st, 2021]]` becomes `[[2021-02-31]]`.
///
/// Returns the input borrowed when nothing matched.
///
/// # Examples
///
/// ```
/// use journal_refs::transform_dates;
///
/// assert_eq!(
///     transform_dates("See [[Jan 1st, 2020]] and [[Feb 2nd, 2021]]"),
///     "See [[2020-01-01]] and [[2021-02-02]]"
/// );
/// assert_eq!(transform_dates("[[2020-10-31]]"), "[[2020-10-31]]");
/// ```
#[must_use]
pub fn transform_dates(text: &str) -> Cow<'_, str> {
    DATE_REFERENCE_RE.replace_all(text, |caps: &Captures<'_>| format!("[[{}]]", iso_date(caps)))
}

/// Rewrites the dates in a file name: `Jan 1st, 2020.md` becomes `2020-01-01.md`.
///
/// Page names carry the date without brackets, so besides the bracketed form
/// handled by [`transform_dates`] a bare `Mon D(suffix), YYYY` is converted
/// too. Names without a date come back borrowed.
#[must_use]
pub fn transform_file_name(name: &str) -> Cow<'_, str> {
    let bare = |caps: &Captures<'_>| iso_date(caps);
    match transform_dates(name) {
        Cow::Borrowed(name) => BARE_DATE_RE.replace_all(name, bare),
        Cow::Owned(converted) => {
            Cow::Owned(BARE_DATE_RE.replace_all(&converted, bare).into_owned())
        }
    }
}

/// Counts the references [`transform_dates`] would rewrite in `text`.
#[must_use]
pub fn count_date_references(text: &str) -> usize {
    DATE_REFERENCE_RE.find_iter(text).count()
}
