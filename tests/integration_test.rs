// Integration tests for session state, memory and modes

use calctty::calculator::{Action, Operator, Session};
use calctty::headless::run_keys;
use calctty::keypad::{layout, KeyBindings};

#[test]
fn test_memory_add_without_memory() {
    let session = run_keys("7A", Session::new()).expect("key sequence should be valid");
    assert_eq!(session.memory, Some(7.0));
    assert!(session.waiting_for_operand);
}

#[test]
fn test_memory_subtract_without_memory() {
    let session = run_keys("7Z", Session::new()).expect("key sequence should be valid");
    assert_eq!(session.memory, Some(-7.0));
}

#[test]
fn test_memory_accumulates_and_recalls() {
    let session = run_keys("10S5A2ZCR", Session::new()).expect("key sequence should be valid");
    assert_eq!(session.memory, Some(13.0));
    assert_eq!(session.display, "13");
}

#[test]
fn test_memory_recall_when_empty_is_noop() {
    let before = run_keys("4", Session::new()).expect("key sequence should be valid");
    let after = before.clone().memory_recall();
    assert_eq!(before, after);
    assert!(!after.waiting_for_operand);
}

#[test]
fn test_memory_clear() {
    let session = run_keys("9SX", Session::new()).expect("key sequence should be valid");
    assert_eq!(session.memory, None);
    assert!(session.waiting_for_operand);
}

#[test]
fn test_memory_store_ignores_pending_operator() {
    let session = run_keys("9+S", Session::new()).expect("key sequence should be valid");
    assert_eq!(session.memory, Some(9.0));
    assert_eq!(session.pending_operator, Some(Operator::Add));

    let plain = run_keys("9S", Session::new()).expect("key sequence should be valid");
    assert_eq!(plain.memory, session.memory);
}

#[test]
fn test_clear_all_keeps_memory_and_modes() {
    let session = run_keys("8Sd~3+4", Session::new()).expect("key sequence should be valid");
    let cleared = session.apply(Action::ClearAll);

    assert_eq!(cleared.display, "0");
    assert_eq!(cleared.pending_operator, None);
    assert_eq!(cleared.last_value, 0.0);
    assert!(!cleared.waiting_for_operand);
    assert_eq!(cleared.memory, Some(8.0));
    assert!(!cleared.degree_mode);
    assert!(cleared.shift_active);
}

#[test]
fn test_clear_entry_keeps_waiting_flag() {
    let session = run_keys("3+", Session::new()).expect("key sequence should be valid");
    let cleared = session.apply(Action::ClearEntry);
    assert_eq!(cleared.display, "0");
    assert!(cleared.waiting_for_operand);
    assert_eq!(cleared.pending_operator, Some(Operator::Add));
}

#[test]
fn test_second_decimal_is_ignored() {
    let once = run_keys("1.", Session::new()).expect("key sequence should be valid");
    let twice = once.clone().input_decimal();
    assert_eq!(once, twice);
    assert_eq!(twice.display, "1.");

    let later = run_keys("1.5.2", Session::new()).expect("key sequence should be valid");
    assert_eq!(later.display, "1.52");
}

#[test]
fn test_shifted_keypad_matches_bindings() {
    let keys = KeyBindings::new();
    for shift in [false, true] {
        let grid = layout(shift);
        for key in ['s', 'c', 't', 'p', 'l', 'r', '!'] {
            let slot = keys.slot(key).expect("key should be bound");
            assert_eq!(
                keys.action(key, shift),
                Some(grid[slot.row][slot.col].action)
            );
        }
    }
}

#[test]
fn test_shifted_functions() {
    // √ becomes x², x! becomes 1/x, log becomes ln
    let session = run_keys("~3r", Session::new()).expect("key sequence should be valid");
    assert_eq!(session.display, "9");

    let session = run_keys("~4!", Session::new()).expect("key sequence should be valid");
    assert_eq!(session.display, "0.25");

    let session = run_keys("~1l", Session::new()).expect("key sequence should be valid");
    assert_eq!(session.display, "0");
}

#[test]
fn test_radian_start_mode() {
    let session = Session::with_degree_mode(false);
    assert!(!session.degree_mode);
    assert_eq!(session.display, "0");
    assert_eq!(session.toggle_deg_rad(), Session::new());
}
