use dynarray::{DynArray, DynArrayError};

#[test]
fn test_error_zero_chunk() {
    let result = DynArray::<u8>::with_chunk(0);
    assert_eq!(
        result.unwrap_err(),
        DynArrayError::InvalidConfiguration {
            parameter: "chunk",
            value: 0
        }
    );
}

#[test]
fn test_error_detailed_index_out_of_bounds() {
    let mut arr = DynArray::new();
    arr.add(&1).unwrap();

    assert_eq!(
        arr.delete(5, true).unwrap_err(),
        DynArrayError::IndexOutOfBounds {
            index: 5,
            length: 1
        }
    );
    assert_eq!(
        arr.set_cursor(2).unwrap_err(),
        DynArrayError::IndexOutOfBounds {
            index: 2,
            length: 1
        }
    );
}

#[test]
fn test_error_messages_quality() {
    let mut arr: DynArray<u8> = DynArray::new();
    let message = format!("{}", arr.delete(0, true).unwrap_err());
    assert!(message.contains("index 0"));
    assert!(message.contains("length 0"));

    let message = format!("{}", DynArrayError::AllocationFailed { requested: 48 });
    assert!(message.contains("48 more elements"));
}

#[test]
fn test_error_types_implement_standard_traits() {
    let error = DynArrayError::EmptyArray;

    let debug_str = format!("{:?}", error);
    assert!(!debug_str.is_empty());

    let display_str = format!("{}", error);
    assert!(!display_str.is_empty());

    let cloned = error.clone();
    assert_eq!(error, cloned);
    assert_ne!(
        error,
        DynArrayError::AllocationFailed { requested: 1 }
    );
}
