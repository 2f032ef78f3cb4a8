use super::*;
use crate::error::ErrorType;

#[test]
fn test_from_str_counts_scalar_values() {
    let buf = CharBuffer::from("a€😀b");
    assert_eq!(buf.len(), 4);
    assert_eq!(buf.char_at(2), Some('😀'));
    assert_eq!(buf.to_string(), "a€😀b");
}

#[test]
fn test_peek_left_right() {
    let buf = CharBuffer::from("ab");
    assert_eq!(buf.peek_left(0), None);
    assert_eq!(buf.peek_right(0), Some('a'));
    assert_eq!(buf.peek_left(1), Some('a'));
    assert_eq!(buf.peek_right(1), Some('b'));
    assert_eq!(buf.peek_left(2), Some('b'));
    assert_eq!(buf.peek_right(2), None);
}

#[test]
fn test_peek_by_direction() {
    let buf = CharBuffer::from("xy");
    assert_eq!(buf.peek(1, Direction::Left), Some('x'));
    assert_eq!(buf.peek(1, Direction::Right), Some('y'));
}

#[test]
fn test_edges() {
    let buf = CharBuffer::from("abc");
    assert_eq!(buf.edge(Direction::Left), 0);
    assert_eq!(buf.edge(Direction::Right), 3);
    assert!(buf.is_edge(0, Direction::Left));
    assert!(!buf.is_edge(0, Direction::Right));
    assert!(buf.is_edge(3, Direction::Right));
    assert!(!buf.is_edge(3, Direction::Left));
}

#[test]
fn test_empty_buffer_is_edge_both_ways() {
    let buf = CharBuffer::new();
    assert!(buf.is_empty());
    assert!(buf.is_edge(0, Direction::Left));
    assert!(buf.is_edge(0, Direction::Right));
}

#[test]
fn test_direction_from_count() {
    assert_eq!(Direction::from_count(0), None);
    assert_eq!(Direction::from_count(-4), Some(Direction::Left));
    assert_eq!(Direction::from_count(2), Some(Direction::Right));
    assert_eq!(Direction::Left.step(3), 2);
    assert_eq!(Direction::Right.step(3), 4);
    assert_eq!(Direction::Left.step(0), 0);
}

#[test]
fn test_check_cursor() {
    let buf = CharBuffer::from("abc");
    assert!(buf.check_cursor(0).is_ok());
    assert!(buf.check_cursor(3).is_ok());
    let err = buf.check_cursor(4).unwrap_err();
    assert_eq!(err.kind, ErrorType::Range);
}

#[test]
fn test_tail_and_range() {
    let buf = CharBuffer::from("hello");
    assert_eq!(buf.tail(3), &['l', 'o']);
    assert!(buf.tail(9).is_empty());
    assert_eq!(buf.range(1, 3), &['e', 'l']);
    assert_eq!(buf.range(4, 99), &['o']);
    assert!(buf.range(7, 9).is_empty());
}

#[test]
fn test_byte_offsets() {
    let buf = CharBuffer::from("a€b");
    assert_eq!(buf.byte_offset(0), 0);
    assert_eq!(buf.byte_offset(1), 1);
    assert_eq!(buf.byte_offset(2), 4);
    assert_eq!(buf.byte_offset(3), 5);
    assert_eq!(buf.byte_offset(10), 5);

    assert_eq!(buf.char_index(0), 0);
    assert_eq!(buf.char_index(1), 1);
    assert_eq!(buf.char_index(2), 1); // inside '€'
    assert_eq!(buf.char_index(4), 2);
    assert_eq!(buf.char_index(5), 3);
}
