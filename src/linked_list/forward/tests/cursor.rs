extern crate std;

use std::vec;
use std::vec::Vec;

use crate::linked_list::forward::{Cursor, ForwardList};

fn collect(list: &ForwardList<i32>) -> Vec<i32> {
    list.iter().copied().collect()
}

#[test]
fn test_shared_cursor_walk() {
    let list: ForwardList<i32> = [1, 2, 3].into_iter().collect();

    let mut cursor = list.cursor_before_front();
    assert_eq!(cursor.current(), None);
    assert_eq!(cursor.peek_next(), Some(&1));

    cursor.move_next();
    assert_eq!(cursor.current(), Some(&1));
    assert_eq!(cursor.peek_next(), Some(&2));

    cursor.move_next();
    cursor.move_next();
    assert_eq!(cursor.current(), Some(&3));
    assert_eq!(cursor.peek_next(), None);

    cursor.move_next();
    assert_eq!(cursor.current(), None);

    // Advancing the end position saturates.
    cursor.move_next();
    assert_eq!(cursor.current(), None);
}

#[test]
fn test_cursor_equality() {
    let list: ForwardList<i32> = [1, 2].into_iter().collect();

    let mut a = list.cursor_before_front();
    let mut b = list.cursor_before_front();
    assert_eq!(a, b);

    a.move_next();
    assert_ne!(a, b);
    b.move_next();
    assert_eq!(a, b);

    // Same value, different node: positions compare by identity.
    let twins: ForwardList<i32> = [7, 7].into_iter().collect();
    let first = twins.cursor_front();
    let mut second = twins.cursor_front();
    second.move_next();
    assert_ne!(first, second);
}

#[test]
fn test_default_cursor_is_end() {
    let list: ForwardList<i32> = [1].into_iter().collect();

    let mut cursor = list.cursor_front();
    cursor.move_next();
    assert_eq!(cursor, Cursor::default());

    let empty: ForwardList<i32> = ForwardList::new();
    assert_eq!(empty.cursor_front(), Cursor::default());
}

#[test]
fn test_cursor_flavors_compare_equal() {
    let mut list: ForwardList<i32> = [1, 2].into_iter().collect();

    let mut cursor = list.cursor_front_mut();
    cursor.move_next();

    let shared = cursor.as_cursor();
    assert_eq!(shared.current(), Some(&2));
    assert!(shared == cursor);
}

#[test]
fn test_insert_after_interior() {
    let mut list: ForwardList<i32> = [1, 3].into_iter().collect();

    let mut cursor = list.cursor_front_mut();
    cursor.insert_after(2);
    assert_eq!(cursor.peek_next(), Some(&2));
    assert_eq!(list.len(), 3);
    assert_eq!(collect(&list), vec![1, 2, 3]);
}

#[test]
fn test_insert_then_remove_restores_sequence() {
    let mut list: ForwardList<i32> = [1, 2, 3].into_iter().collect();

    let mut cursor = list.cursor_front_mut();
    cursor.move_next();
    cursor.insert_after(42);
    assert_eq!(list.len(), 4);
    assert_eq!(collect(&list), vec![1, 2, 42, 3]);

    let mut cursor = list.cursor_front_mut();
    cursor.move_next();
    assert_eq!(cursor.remove_next(), Some(42));
    assert_eq!(list.len(), 3);
    assert_eq!(collect(&list), vec![1, 2, 3]);
}

#[test]
fn test_anchor_edits_match_front_edits() {
    // insert_after at the anchor is push_front.
    let mut list: ForwardList<i32> = [2, 3].into_iter().collect();
    let mut cursor = list.cursor_before_front_mut();
    cursor.insert_after(1);
    assert_eq!(collect(&list), vec![1, 2, 3]);

    // remove_next at the anchor is pop_front.
    let mut cursor = list.cursor_before_front_mut();
    assert_eq!(cursor.remove_next(), Some(1));
    assert_eq!(collect(&list), vec![2, 3]);
    assert_eq!(list.len(), 2);
}

#[test]
fn test_anchor_edits_on_empty_list() {
    let mut list: ForwardList<i32> = ForwardList::new();

    let mut cursor = list.cursor_before_front_mut();
    assert_eq!(cursor.remove_next(), None);
    cursor.insert_after(1);
    assert_eq!(cursor.peek_next(), Some(&1));
    assert_eq!(collect(&list), vec![1]);
}

#[test]
fn test_remove_next_at_last_element() {
    let mut list: ForwardList<i32> = [1].into_iter().collect();

    let mut cursor = list.cursor_front_mut();
    assert_eq!(cursor.remove_next(), None);
    assert_eq!(list.len(), 1);
}

#[test]
#[should_panic(expected = "cannot insert after the end position")]
fn test_insert_after_end_panics() {
    let mut list: ForwardList<i32> = ForwardList::new();
    let mut cursor = list.cursor_front_mut();
    cursor.insert_after(1);
}

#[test]
fn test_cursor_mutates_current() {
    let mut list: ForwardList<i32> = [1, 2].into_iter().collect();

    let mut cursor = list.cursor_front_mut();
    *cursor.current().unwrap() = 10;
    cursor.move_next();
    *cursor.current().unwrap() = 20;
    assert_eq!(collect(&list), vec![10, 20]);
}

#[test]
fn test_cursor_survives_edits_after_its_position() {
    let mut list: ForwardList<i32> = [1, 2, 3].into_iter().collect();

    let mut cursor = list.cursor_front_mut();
    cursor.insert_after(9);
    assert_eq!(cursor.remove_next(), Some(9));
    assert_eq!(cursor.remove_next(), Some(2));
    assert_eq!(cursor.current(), Some(&mut 1));
    assert_eq!(cursor.peek_next(), Some(&3));
    assert_eq!(collect(&list), vec![1, 3]);
}
