//! Tests for the source cursor: consume/rewind bookkeeping, checkpointing,
//! and the scanning primitives.

use marten_markup::Cursor;

// ========== peek / consume ==========

#[test]
fn test_peek_does_not_advance() {
    let cursor = Cursor::new("ab");

    assert_eq!(cursor.peek(), Some('a'));
    assert_eq!(cursor.peek(), Some('a'));
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_consume_advances_and_tracks_columns() {
    let mut cursor = Cursor::new("ab\nc");

    assert_eq!(cursor.consume(), Some('a'));
    assert_eq!(cursor.consume(), Some('b'));
    assert_eq!(cursor.current_line(), 1);
    assert_eq!(cursor.current_column(), 2);
}

#[test]
fn test_newline_resets_column_and_bumps_line() {
    let mut cursor = Cursor::new("ab\nc");
    for _ in 0..3 {
        let _ = cursor.consume();
    }

    assert_eq!(cursor.current_line(), 2);
    assert_eq!(cursor.current_column(), 0);
    assert_eq!(cursor.peek(), Some('c'));
}

#[test]
fn test_consume_past_end_returns_none() {
    let mut cursor = Cursor::new("x");

    assert_eq!(cursor.consume(), Some('x'));
    assert!(cursor.at_end());
    assert_eq!(cursor.consume(), None);
    assert_eq!(cursor.peek(), None);
}

// ========== rewind ==========

#[test]
fn test_rewind_clamps_at_start() {
    let mut cursor = Cursor::new("ab");
    let _ = cursor.consume();
    let _ = cursor.consume();

    cursor.rewind(10);

    assert_eq!(cursor.position(), 0);
    assert_eq!(cursor.current_line(), 1);
    assert_eq!(cursor.current_column(), 0);
    assert_eq!(cursor.peek(), Some('a'));
}

#[test]
fn test_rewind_restores_line_and_column_across_newline() {
    let mut cursor = Cursor::new("ab\ncd");
    while cursor.consume().is_some() {}
    assert_eq!(cursor.current_line(), 2);

    cursor.rewind(3);

    // Back on the newline terminating the first line.
    assert_eq!(cursor.position(), 2);
    assert_eq!(cursor.current_line(), 1);
    assert_eq!(cursor.current_column(), 2);
    assert_eq!(cursor.peek(), Some('\n'));
}

// ========== checkpointing ==========

#[test]
fn test_checkpoint_restores_saved_position() {
    let mut cursor = Cursor::new("abcdef");
    let _ = cursor.consume();
    let _ = cursor.consume();

    cursor.save_checkpoint();
    let _ = cursor.consume();
    let _ = cursor.consume();
    cursor.restore_checkpoint();

    assert_eq!(cursor.position(), 2);
    assert_eq!(cursor.peek(), Some('c'));
}

#[test]
fn test_checkpoint_is_a_single_slot() {
    let mut cursor = Cursor::new("abcdef");
    cursor.save_checkpoint();
    let _ = cursor.consume();

    // The second save overwrites the first; it does not push.
    cursor.save_checkpoint();
    let _ = cursor.consume();
    cursor.restore_checkpoint();

    assert_eq!(cursor.position(), 1);
}

#[test]
fn test_checkpoint_restores_line_and_column() {
    let mut cursor = Cursor::new("a\nb\nc");
    for _ in 0..2 {
        let _ = cursor.consume();
    }
    cursor.save_checkpoint();
    while cursor.consume().is_some() {}

    cursor.restore_checkpoint();

    assert_eq!(cursor.current_line(), 2);
    assert_eq!(cursor.current_column(), 0);
}

// ========== scanning primitives ==========

#[test]
fn test_skip_while_stops_at_first_mismatch() {
    let mut cursor = Cursor::new("123abc");

    cursor.skip_while(|c| c.is_ascii_digit());

    assert_eq!(cursor.peek(), Some('a'));
}

#[test]
fn test_skip_while_consumes_to_end() {
    let mut cursor = Cursor::new("1111");

    cursor.skip_while(|c| c.is_ascii_digit());

    assert!(cursor.at_end());
}

#[test]
fn test_skip_until_consumes_delimiter() {
    let mut cursor = Cursor::new("junk>rest");

    cursor.skip_until('>');

    assert_eq!(cursor.peek(), Some('r'));
}

#[test]
fn test_skip_until_missing_delimiter_reaches_end() {
    let mut cursor = Cursor::new("junk");

    cursor.skip_until('>');

    assert!(cursor.at_end());
}

#[test]
fn test_skip_run_does_not_over_consume() {
    let mut cursor = Cursor::new("aaab");

    cursor.skip_run('a');

    assert_eq!(cursor.position(), 3);
    assert_eq!(cursor.peek(), Some('b'));
}

#[test]
fn test_skip_run_to_end_of_input() {
    let mut cursor = Cursor::new("aaa");

    cursor.skip_run('a');

    assert!(cursor.at_end());
}

#[test]
fn test_whitespace_skip_spaces_then_newlines() {
    let mut cursor = Cursor::new("  \n\nx");

    cursor.skip_insignificant_whitespace();

    assert_eq!(cursor.peek(), Some('x'));
}

#[test]
fn test_whitespace_skip_is_two_passes_not_a_fixpoint() {
    let mut cursor = Cursor::new("  \n  x");

    cursor.skip_insignificant_whitespace();

    // Spaces after the newline run are left for a later call.
    assert_eq!(cursor.peek(), Some(' '));
}

#[test]
fn test_whitespace_skip_newlines_without_leading_spaces() {
    let mut cursor = Cursor::new("\n\nx");

    cursor.skip_insignificant_whitespace();

    assert_eq!(cursor.peek(), Some('x'));
}

// ========== reset ==========

#[test]
fn test_reset_repositions_at_start() {
    let mut cursor = Cursor::new("a\nb");
    while cursor.consume().is_some() {}

    cursor.reset();

    assert_eq!(cursor.position(), 0);
    assert_eq!(cursor.current_line(), 1);
    assert_eq!(cursor.current_column(), 0);
    assert_eq!(cursor.peek(), Some('a'));
}
