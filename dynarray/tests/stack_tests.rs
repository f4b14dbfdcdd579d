use dynarray::{DynArray, DynArrayError};

#[test]
fn test_stack_add_then_pop_is_lifo() {
    let mut arr = DynArray::new();

    arr.add(&"first").unwrap();
    arr.add(&"second").unwrap();
    arr.add(&"third").unwrap();

    assert_eq!(arr.pop(), Some("third"));
    assert_eq!(arr.pop(), Some("second"));
    assert_eq!(arr.pop(), Some("first"));
    assert_eq!(arr.pop(), None);
}

#[test]
fn test_try_pop_empty() {
    let mut arr: DynArray<i32> = DynArray::new();
    assert_eq!(arr.try_pop(), Err(DynArrayError::EmptyArray));

    arr.add(&5).unwrap();
    assert_eq!(arr.try_pop(), Ok(5));
    assert_eq!(arr.try_pop(), Err(DynArrayError::EmptyArray));
}

#[test]
fn test_pop_clamps_cursor() {
    let mut arr = DynArray::new();
    arr.add_many(&[1, 2, 3]).unwrap();
    assert_eq!(arr.cursor(), 3);

    arr.pop();
    assert_eq!(arr.cursor(), 2);

    arr.add(&4).unwrap();
    assert_eq!(arr.as_slice(), &[1, 2, 4]);
}

#[test]
fn test_pop_keeps_cursor_behind_end() {
    let mut arr = DynArray::new();
    arr.add_many(&[1, 2, 3]).unwrap();
    arr.set_cursor(1).unwrap();

    arr.pop();

    assert_eq!(arr.cursor(), 1);
    arr.add(&9).unwrap();
    assert_eq!(arr.as_slice(), &[1, 9]);
}
