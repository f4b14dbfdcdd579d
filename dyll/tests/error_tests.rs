use dyll::{DyllArray, DyllConfig, DyllError};

#[test]
fn test_error_zero_grow_by() {
    let result = DyllArray::with_config(DyllConfig::default().with_grow_by(0));
    assert_eq!(
        result.unwrap_err(),
        DyllError::InvalidConfiguration {
            parameter: "grow_by",
            value: 0
        }
    );
}

#[test]
fn test_error_initial_slots_above_ceiling() {
    let result = DyllArray::with_config(
        DyllConfig::default().with_initial_slots(12).with_max_slots(8),
    );
    assert_eq!(
        result.unwrap_err(),
        DyllError::InvalidConfiguration {
            parameter: "initial_slots",
            value: 12
        }
    );
}

#[test]
fn test_error_detailed_index_out_of_bounds() {
    let mut dyll = DyllArray::new().unwrap();
    dyll.append(b"test").unwrap();

    let expected = DyllError::IndexOutOfBounds {
        index: 5,
        length: 1,
    };
    assert_eq!(dyll.get(5).unwrap_err(), expected);
    assert_eq!(dyll.copy(5).unwrap_err(), expected);
    assert_eq!(dyll.take(5).unwrap_err(), expected);
    assert_eq!(dyll.delete(5).unwrap_err(), expected);
    assert_eq!(dyll.handle_at(5).unwrap_err(), expected);
    assert_eq!(dyll.insert_before(5, b"x").unwrap_err(), expected);
    assert_eq!(dyll.insert_after(5, b"x").unwrap_err(), expected);
}

#[test]
fn test_error_byte_limit() {
    let mut dyll = DyllArray::with_config(DyllConfig::default().with_max_bytes(10)).unwrap();
    dyll.append(b"123456").unwrap();

    match dyll.append(b"7890ab").unwrap_err() {
        DyllError::ByteLimitExceeded {
            requested,
            available,
        } => {
            assert_eq!(requested, 6);
            assert_eq!(available, 4);
        }
        other => panic!("Expected ByteLimitExceeded, got {other:?}"),
    }

    dyll.append(b"7890").unwrap();
    assert_eq!(dyll.size_in_bytes(), 10);
}

#[test]
fn test_error_messages_quality() {
    let dyll = DyllArray::new().unwrap();
    let message = format!("{}", dyll.get(0).unwrap_err());
    assert!(message.contains("index 0"));
    assert!(message.contains("length 0"));

    let message = format!("{}", DyllError::SlotLimitExceeded { max_slots: 40 });
    assert!(message.contains("40 slots"));

    let message = format!(
        "{}",
        DyllError::ByteLimitExceeded {
            requested: 9,
            available: 2
        }
    );
    assert!(message.contains("requested 9 bytes"));
    assert!(message.contains("only 2 bytes"));
}

#[test]
fn test_comprehensive_error_scenarios() {
    let errors = [
        DyllError::IndexOutOfBounds {
            index: 5,
            length: 2,
        },
        DyllError::InvalidHandle { handle: 7 },
        DyllError::AllocationFailed { requested: 4096 },
        DyllError::SlotLimitExceeded { max_slots: 8 },
        DyllError::ByteLimitExceeded {
            requested: 100,
            available: 50,
        },
        DyllError::InvalidConfiguration {
            parameter: "grow_by",
            value: 0,
        },
    ];

    for error in &errors {
        let message = format!("{}", error);
        assert!(
            message.len() > 10,
            "Error message should be descriptive for {:?}",
            error
        );
        assert_eq!(error.clone(), *error);
    }
}
