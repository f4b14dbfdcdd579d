use dynarray::DynArray;

#[test]
fn test_array_initialization() {
    let arr: DynArray<u64> = DynArray::new();

    assert_eq!(arr.len(), 0);
    assert!(arr.is_empty());
    assert_eq!(arr.cursor(), 0);
    assert_eq!(arr.allocated(), 0);
}

#[test]
fn test_lazy_chunked_growth() {
    let mut arr = DynArray::new();

    arr.add(&1u8).unwrap();
    assert_eq!(arr.allocated(), 16);

    for i in 2..=16u8 {
        arr.add(&i).unwrap();
    }
    assert_eq!(arr.allocated(), 16);

    arr.add(&17).unwrap();
    assert_eq!(arr.allocated(), 32);
    assert_eq!(arr.len(), 17);
}

#[test]
fn test_custom_chunk() {
    let mut arr = DynArray::with_chunk(3).unwrap();

    arr.add_many(&[1, 2, 3, 4]).unwrap();
    assert_eq!(arr.allocated(), 6);

    arr.add_many(&[5, 6, 7, 8, 9, 10, 11]).unwrap();
    assert_eq!(arr.allocated(), 12);
    assert_eq!(arr.len(), 11);
}

#[test]
fn test_get_and_get_mut() {
    let mut arr = DynArray::new();
    arr.add(&"alpha").unwrap();
    arr.add(&"beta").unwrap();

    assert_eq!(arr.get(0), Some(&"alpha"));
    assert_eq!(arr.get(2), None);

    *arr.get_mut(1).unwrap() = "gamma";
    assert_eq!(arr.get(1), Some(&"gamma"));
    assert!(arr.get_mut(2).is_none());
}

#[test]
fn test_cursor_overwrite_keeps_length() {
    let mut arr = DynArray::new();
    arr.add_many(&[10, 20, 30]).unwrap();

    arr.set_cursor(0).unwrap();
    arr.add(&11).unwrap();
    arr.add(&21).unwrap();

    assert_eq!(arr.as_slice(), &[11, 21, 30]);
    assert_eq!(arr.len(), 3);
    assert_eq!(arr.cursor(), 2);
}

#[test]
fn test_cursor_overwrite_runs_past_end() {
    let mut arr = DynArray::new();
    arr.add_many(&[1, 2, 3]).unwrap();

    arr.set_cursor(2).unwrap();
    arr.add_many(&[30, 40, 50]).unwrap();

    assert_eq!(arr.as_slice(), &[1, 2, 30, 40, 50]);
    assert_eq!(arr.cursor(), 5);
}

#[test]
fn test_set_cursor_bounds() {
    let mut arr = DynArray::new();
    arr.add_many(&[1, 2]).unwrap();

    assert!(arr.set_cursor(2).is_ok());
    assert!(arr.set_cursor(3).is_err());
    assert_eq!(arr.cursor(), 2);
}

#[test]
fn test_delete_maintaining_order() {
    let mut arr = DynArray::new();
    arr.add_many(&[1, 2, 3, 4, 5]).unwrap();

    assert_eq!(arr.delete(1, true).unwrap(), 2);

    assert_eq!(arr.as_slice(), &[1, 3, 4, 5]);
    assert_eq!(arr.cursor(), 4);
}

#[test]
fn test_delete_without_order_moves_last_into_hole() {
    let mut arr = DynArray::new();
    arr.add_many(&[1, 2, 3, 4, 5]).unwrap();

    assert_eq!(arr.delete(1, false).unwrap(), 2);

    assert_eq!(arr.as_slice(), &[1, 5, 3, 4]);
}

#[test]
fn test_delete_out_of_bounds() {
    let mut arr = DynArray::new();
    arr.add_many(&[1, 2]).unwrap();

    assert!(arr.delete(2, true).is_err());
    assert!(arr.delete(7, false).is_err());
    assert_eq!(arr.len(), 2);
}

#[test]
fn test_flush_compacts_and_resets() {
    let mut arr = DynArray::new();
    arr.add_many(&[7u16; 20]).unwrap();
    assert_eq!(arr.allocated(), 32);

    let flushed = arr.flush();

    assert_eq!(flushed, vec![7u16; 20]);
    assert_eq!(flushed.capacity(), 20);
    assert!(arr.is_empty());
    assert_eq!(arr.cursor(), 0);
    assert_eq!(arr.allocated(), 0);

    arr.add(&1).unwrap();
    assert_eq!(arr.as_slice(), &[1]);
}

#[test]
fn test_flush_empty_array() {
    let mut arr: DynArray<u8> = DynArray::new();
    assert!(arr.flush().is_empty());
}

#[test]
fn test_clear_operation() {
    let mut arr = DynArray::new();
    arr.add_many(&[1, 2, 3]).unwrap();

    arr.clear();

    assert_eq!(arr.len(), 0);
    assert!(arr.is_empty());
    assert_eq!(arr.cursor(), 0);
}

#[test]
fn test_elements_own_their_copies() {
    let mut arr = DynArray::new();
    let mut name = String::from("first");
    arr.add(&name).unwrap();

    name.push_str("_changed");

    assert_eq!(arr.get(0).map(String::as_str), Some("first"));
}
