// tests/integration_tests/transform_test.rs
use journal_refs::{count_date_references, transform_dates, transform_file_name};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[test]
fn test_twelve_months() {
    for (index, month) in MONTHS.iter().enumerate() {
        let input = format!("[[{month} 1, 2020]]");
        let expected = format!("[[2020-{:02}-01]]", index + 1);
        assert_eq!(transform_dates(&input), expected, "month {month}");
    }
}

#[test]
fn test_documented_examples() {
    assert_eq!(transform_dates("[[Jan 1st, 2020]]"), "[[2020-01-01]]");
    assert_eq!(transform_dates("[[Oct 31st, 2020]]"), "[[2020-10-31]]");
    assert_eq!(transform_dates("[[2020-10-31]]"), "[[2020-10-31]]");
    assert_eq!(transform_dates("[Oct 31st, 2020]"), "[Oct 31st, 2020]");
    assert_eq!(
        transform_dates("See [[Jan 1st, 2020]] and [[Feb 2nd, 2021]]"),
        "See [[2020-01-01]] and [[2021-02-02]]"
    );
}

#[test]
fn test_identity_without_references() {
    for text in [
        "",
        "plain prose",
        "[[Some Page]] and [[Another, Page]]",
        "Jan 1st, 2020 without brackets",
        "[[2020-01-01]] [[2020/01/01]]",
        "unicode ✓ [[Mär 1, 2020]]",
    ] {
        assert_eq!(transform_dates(text), text);
        assert_eq!(count_date_references(text), 0);
    }
}

#[test]
fn test_idempotent_on_mixed_text() {
    let text = "- [[Jan 1st, 2020]]\n- [[2020-01-02]]\n- [Jan 3rd, 2020]\n- [[Nov 30th, 1999]]";
    let once = transform_dates(text).into_owned();
    assert_eq!(
        once,
        "- [[2020-01-01]]\n- [[2020-01-02]]\n- [Jan 3rd, 2020]\n- [[1999-11-30]]"
    );
    assert_eq!(transform_dates(&once), once);
}

#[test]
fn test_file_names() {
    assert_eq!(transform_file_name("Jan 1st, 2020.md"), "2020-01-01.md");
    assert_eq!(transform_file_name("[[Jan 1st, 2020]].md"), "[[2020-01-01]].md");
    assert_eq!(transform_file_name("notes.md"), "notes.md");
    assert_eq!(transform_file_name("2020-01-01.md"), "2020-01-01.md");
}
