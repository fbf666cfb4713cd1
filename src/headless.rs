//! Headless key playback for `--keys`
//!
//! Each character is resolved through the same [`KeyBindings`] the TUI uses,
//! against the session's current shift state. A newline also means `=`,
//! spaces are skipped.

use crate::calculator::Session;
use crate::error::AppError;
use crate::keypad::{action_at, slots, KeyBindings};
use tracing::debug;

/// Press every key of `sequence` in order, starting from `session`
pub fn run_keys(sequence: &str, session: Session) -> Result<Session, AppError> {
    let bindings = KeyBindings::new();

    sequence
        .chars()
        .enumerate()
        .try_fold(session, |session, (position, key)| {
            let action = match key {
                ' ' => return Ok(session),
                '\n' | '\r' => action_at(slots::EQUALS, session.shift_active),
                _ => bindings.action(key, session.shift_active),
            }
            .ok_or(AppError::UnknownKey { key, position })?;

            debug!(%key, %action, "key pressed");
            Ok(session.apply(action))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_scenario() {
        let s = run_keys("9^2=", Session::new()).unwrap();
        assert_eq!(s.display, "81");
    }

    #[test]
    fn test_newline_and_spaces() {
        let s = run_keys("1 + 2\n", Session::new()).unwrap();
        assert_eq!(s.display, "3");
    }

    #[test]
    fn test_shift_changes_key_meaning() {
        let s = run_keys("1~c", Session::new()).unwrap();
        assert_eq!(s.display, "0");
        assert!(s.shift_active);
    }

    #[test]
    fn test_unknown_key() {
        let err = run_keys("12?", Session::new()).unwrap_err();
        assert!(matches!(err, AppError::UnknownKey { key: '?', position: 2 }));
        assert_eq!(err.to_string(), "unknown key '?' at position 2 in key sequence");
    }
}
