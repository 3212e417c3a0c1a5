//! Scenario tests for cursor context classification
//!
//! Each case pins the full ordered context sequence for one document and
//! offset, covering line starts and ends (inclusive of whitespace), string
//! and comment membership, the compound before/after-comment refinements,
//! and the deliberate priority tie-breaks between them.

use rstest::rstest;
use sexp_analysis::context::{determine_contexts, CursorContext};
use sexp_parser::sexp::document::Document;

use CursorContext::*;

#[rstest]
// line start holds anywhere in the leading whitespace and at the first char
#[case::line_start_in_leading_ws("(foo)\n  bar", 8, vec![AtLineStart])]
#[case::line_start_inside_ws_run("(foo)\n  bar", 7, vec![AtLineStart])]
// same line, only a space between tokens: no line boundary behind the cursor
#[case::no_line_start_without_eol("(foo) bar", 6, vec![])]
// line end tolerates trailing whitespace before the marker
#[case::line_end_before_trailing_ws("(foo)  \n(bar)", 5, vec![AtLineEnd])]
#[case::line_end_inside_trailing_ws("(foo)  \n(bar)", 6, vec![AtLineEnd])]
#[case::line_end_on_eol("(a)\nb", 3, vec![AtLineEnd])]
// no whitespace at all between tokens: mid-line, not a line end
#[case::no_line_end_between_adjacent_tokens("(foo)(bar)", 5, vec![])]
#[case::no_line_end_in_mid_line_ws("(foo) (bar)", 5, vec![])]
// start of the line after a comment line: the comment region is behind us
#[case::line_after_comment("; a comment\n(code)", 12, vec![AtLineStart])]
// tail of a comment line: in the comment, at line end, and past its text
#[case::comment_tail(";a comment \n(code)", 11, vec![AtLineEnd, InComment, AfterComment])]
// interior offsets of tokens carry no line contexts
#[case::string_interior("\"abc def\"", 4, vec![InString])]
#[case::mid_token("(foo)", 2, vec![])]
#[case::comment_interior("; hi there", 5, vec![InComment])]
// cursor right at the `;` of a mid-line comment
#[case::comment_start_mid_line("(x) ; hi", 4, vec![InComment])]
// cursor right at the `;` of a comment opening its line
#[case::before_comment("(x)\n; hi", 4, vec![AtLineStart, InComment, BeforeComment])]
#[case::before_comment_with_indent("(x)\n  ; hi", 6, vec![AtLineStart, InComment, BeforeComment])]
// first line of the document: no preceding end-of-line marker, so the
// conservative answer is "not at line start"
#[case::first_line_leading_ws("  foo", 1, vec![])]
#[case::first_line_token_start("  foo", 2, vec![])]
// end of input closes the final line
#[case::end_of_input("(foo)", 5, vec![AtLineEnd])]
#[case::end_of_input_after_trailing_ws("(foo)  ", 7, vec![AtLineEnd])]
#[case::end_of_input_comment("; hi", 4, vec![AtLineEnd, InComment, AfterComment])]
#[case::empty_document("", 0, vec![AtLineEnd])]
#[case::after_final_eol("(foo)\n", 6, vec![AtLineStart])]
// an open string swallows the rest of the input
#[case::open_string_interior("\"abc", 2, vec![InString])]
#[case::end_of_input_open_string("\"abc", 4, vec![AtLineEnd, InString])]
// a whitespace-only line satisfies both line conditions; start wins
#[case::blank_line_start_wins("(a)\n  \n(b)", 5, vec![AtLineStart])]
// newlines inside a string are string content, not line boundaries
#[case::multiline_string("\"ab\ncd\" x", 4, vec![InString])]
// membership priority: string content never reads as a comment and
// comment text never reads as a string
#[case::semicolon_inside_string("\"; not\"", 3, vec![InString])]
#[case::quote_inside_comment("; \"x\ny", 3, vec![InComment])]
fn determines_contexts(
    #[case] source: &str,
    #[case] offset: usize,
    #[case] expected: Vec<CursorContext>,
) {
    let doc = Document::new(source);
    assert_eq!(determine_contexts(&doc, offset), expected);
}

#[test]
fn repeated_classification_is_identical() {
    let doc = Document::new(";a comment \n(code)");
    let first = determine_contexts(&doc, 11);
    for _ in 0..10 {
        assert_eq!(determine_contexts(&doc, 11), first);
    }
}

#[test]
fn line_after_comment_is_not_in_comment() {
    let doc = Document::new("; a comment\n(code)");
    assert!(!determine_contexts(&doc, 12).contains(&InComment));
}
