use offerdoc_export::metrics::{FontWeight, HELVETICA};
use offerdoc_export::wrap::wrap_text;

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do \
eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, \
quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.";

#[test]
fn rejoining_lines_reconstructs_the_text() {
    let lines = wrap_text(LOREM, 60.0, &HELVETICA, 10.0);
    assert!(lines.len() > 1);
    assert_eq!(lines.join(" "), LOREM);
}

#[test]
fn no_line_exceeds_the_width() {
    for width in [30.0, 55.5, 80.0, 170.0] {
        for line in wrap_text(LOREM, width, &HELVETICA, 10.0) {
            assert!(
                HELVETICA.measure_mm(&line, 10.0) <= width,
                "{line:?} wider than {width}"
            );
        }
    }
}

#[test]
fn words_are_never_split() {
    let words: Vec<&str> = LOREM.split_whitespace().collect();
    let lines = wrap_text(LOREM, 25.0, &HELVETICA, 10.0);
    let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.split(' ')).collect();
    assert_eq!(rejoined, words);
}

#[test]
fn overlong_word_gets_its_own_line() {
    let lines = wrap_text("a Supercalifragilisticexpialidocious b", 20.0, &HELVETICA, 10.0);
    assert_eq!(lines, vec!["a", "Supercalifragilisticexpialidocious", "b"]);
}

#[test]
fn explicit_newlines_and_blank_lines_are_kept() {
    let lines = wrap_text("First line\n\nThird line\n", 170.0, &HELVETICA, 10.0);
    assert_eq!(lines, vec!["First line", "", "Third line"]);
}

#[test]
fn empty_text_has_no_lines() {
    assert!(wrap_text("", 100.0, &HELVETICA, 10.0).is_empty());
    assert!(wrap_text("   \n ", 100.0, &HELVETICA, 10.0).is_empty());
}

#[test]
fn bold_text_is_wider_than_regular() {
    let regular = FontWeight::Regular.metrics().measure_mm("Offer", 12.0);
    let bold = FontWeight::Bold.metrics().measure_mm("Offer", 12.0);
    assert!(bold > regular);
    // O(778) + f(278) + f(278) + e(556) + r(333) = 2223 units at 12pt.
    assert!((regular - 2.223 * 12.0 * 25.4 / 72.0).abs() < 1e-3);
}
