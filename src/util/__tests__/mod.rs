use crate::{Position, PositionTracker};

#[test]
fn advances_columns_within_a_row() {
    let mut tracker = PositionTracker::new();
    assert_eq!(tracker.position(), Position::origin());

    let (start, end) = tracker.advance("if");
    assert_eq!(start, Position::new(0, 1, 1));
    assert_eq!(end, Position::new(2, 1, 3));

    let (start, end) = tracker.advance(" 42");
    assert_eq!(start, Position::new(2, 1, 3));
    assert_eq!(end, Position::new(5, 1, 6));
    assert_eq!(tracker.position(), Position::new(5, 1, 6));
}

#[test]
fn column_restarts_after_the_last_terminator() {
    let mut tracker = PositionTracker::new();
    let (_, end) = tracker.advance("one\ntwo\nxyz");
    assert_eq!(end, Position::new(11, 3, 4));
}

#[test]
fn each_terminator_opens_a_new_row() {
    let mut tracker = PositionTracker::new();
    let (_, end) = tracker.advance("a\rb\r\nc");
    assert_eq!(end, Position::new(6, 3, 2));
}

#[test]
fn crlf_pair_counts_once() {
    let mut tracker = PositionTracker::new();
    let (_, end) = tracker.advance("ab\r\n");
    assert_eq!(end, Position::new(4, 2, 1));
}

#[test]
fn terminator_only_chunk() {
    let mut tracker = PositionTracker::new();
    tracker.advance("a");
    let (start, end) = tracker.advance("\n");
    assert_eq!(start, Position::new(1, 1, 2));
    assert_eq!(end, Position::new(2, 2, 1));
}

#[test]
fn multi_byte_characters_count_as_single_columns() {
    let mut tracker = PositionTracker::new();
    let (_, end) = tracker.advance("aé");
    // two characters, three bytes
    assert_eq!(end, Position::new(3, 1, 3));
}
