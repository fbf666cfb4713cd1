//! Keypad layout and keyboard bindings
//!
//! The keypad is a fixed 6×6 table of buttons. Labels and actions of some
//! buttons depend on the shift state, so the table is rebuilt from
//! [`layout`] whenever it is needed instead of being stored.
//!
//! Keyboard bindings point at grid positions rather than actions, so a
//! shifted key (for example `s` on the sin/asin button) always does what the
//! button currently shows.

use crate::calculator::{Action, Function, Operator};
use rustc_hash::FxHashMap;

/// Number of keypad rows
pub const ROWS: usize = 6;

/// Number of keypad columns
pub const COLS: usize = 6;

/// Visual class of a button, used by the renderer to pick label styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonClass {
    Mode,
    Memory,
    Function,
    Clear,
    Operator,
    Digit,
    Equals,
}

/// One keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub action: Action,
    pub class: ButtonClass,
    /// Drawn as latched (the shift key while shift is on)
    pub active: bool,
}

impl Button {
    const fn new(label: &'static str, action: Action, class: ButtonClass) -> Self {
        Button {
            label,
            action,
            class,
            active: false,
        }
    }
}

/// A position on the keypad grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    pub row: usize,
    pub col: usize,
}

impl Slot {
    pub const fn new(row: usize, col: usize) -> Self {
        Slot { row, col }
    }

    /// Move by the given offsets, wrapping around the grid edges
    pub fn offset(self, d_row: isize, d_col: isize) -> Self {
        let row = (self.row as isize + d_row).rem_euclid(ROWS as isize) as usize;
        let col = (self.col as isize + d_col).rem_euclid(COLS as isize) as usize;
        Slot { row, col }
    }
}

pub type Layout = [[Button; COLS]; ROWS];

/// Build the keypad for the given shift state
pub fn layout(shift: bool) -> Layout {
    use ButtonClass as C;

    let pick = |normal: (&'static str, Function), shifted: (&'static str, Function)| {
        let (label, func) = if shift { shifted } else { normal };
        Button::new(label, Action::Function(func), C::Function)
    };
    let digit = |d: u8, label: &'static str| Button::new(label, Action::Digit(d), C::Digit);
    let op = |o: Operator| Button::new(o.symbol(), Action::Operator(o), C::Operator);

    [
        [
            Button::new(if shift { "RAD" } else { "DEG" }, Action::ToggleDegRad, C::Mode),
            Button::new("MC", Action::MemoryClear, C::Memory),
            Button::new("MR", Action::MemoryRecall, C::Memory),
            Button::new("M+", Action::MemoryAdd, C::Memory),
            Button::new("M-", Action::MemorySubtract, C::Memory),
            Button::new("MS", Action::MemoryStore, C::Memory),
        ],
        [
            Button {
                active: shift,
                ..Button::new(if shift { "2nd" } else { "SHIFT" }, Action::ToggleShift, C::Function)
            },
            pick(("sin", Function::Sin), ("asin", Function::Asin)),
            pick(("cos", Function::Cos), ("acos", Function::Acos)),
            pick(("tan", Function::Tan), ("atan", Function::Atan)),
            Button::new("C", Action::ClearAll, C::Clear),
            Button::new("CE", Action::ClearEntry, C::Clear),
        ],
        [
            pick(("π", Function::Pi), ("e", Function::E)),
            pick(("log", Function::Log), ("ln", Function::Ln)),
            pick(("√", Function::Sqrt), ("x²", Function::Square)),
            pick(("x!", Function::Factorial), ("1/x", Function::Reciprocal)),
            Button::new("e^x", Action::Function(Function::Exp), C::Function),
            op(Operator::Power),
        ],
        [
            digit(7, "7"),
            digit(8, "8"),
            digit(9, "9"),
            op(Operator::Divide),
            Button::new("%", Action::Percent, C::Operator),
            op(Operator::Multiply),
        ],
        [
            digit(4, "4"),
            digit(5, "5"),
            digit(6, "6"),
            Button::new("±", Action::ToggleSign, C::Operator),
            op(Operator::Subtract),
            op(Operator::Add),
        ],
        [
            digit(1, "1"),
            digit(2, "2"),
            digit(3, "3"),
            digit(0, "0"),
            Button::new(".", Action::Decimal, C::Digit),
            Button::new("=", Action::Equals, C::Equals),
        ],
    ]
}

/// Resolve the action under `slot` for the given shift state
pub fn action_at(slot: Slot, shift: bool) -> Option<Action> {
    layout(shift)
        .get(slot.row)
        .and_then(|row| row.get(slot.col))
        .map(|button| button.action)
}

/// Character key bindings, from key to keypad position
#[derive(Debug, Clone)]
pub struct KeyBindings {
    map: FxHashMap<char, Slot>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    pub fn new() -> Self {
        const BINDINGS: &[(char, Slot)] = &[
            ('d', Slot::new(0, 0)),
            ('X', Slot::new(0, 1)),
            ('R', Slot::new(0, 2)),
            ('A', Slot::new(0, 3)),
            ('Z', Slot::new(0, 4)),
            ('S', Slot::new(0, 5)),
            ('~', Slot::new(1, 0)),
            ('s', Slot::new(1, 1)),
            ('c', Slot::new(1, 2)),
            ('t', Slot::new(1, 3)),
            ('C', Slot::new(1, 4)),
            ('E', Slot::new(1, 5)),
            ('p', Slot::new(2, 0)),
            ('l', Slot::new(2, 1)),
            ('r', Slot::new(2, 2)),
            ('!', Slot::new(2, 3)),
            ('e', Slot::new(2, 4)),
            ('^', Slot::new(2, 5)),
            ('7', Slot::new(3, 0)),
            ('8', Slot::new(3, 1)),
            ('9', Slot::new(3, 2)),
            ('/', Slot::new(3, 3)),
            ('%', Slot::new(3, 4)),
            ('*', Slot::new(3, 5)),
            ('4', Slot::new(4, 0)),
            ('5', Slot::new(4, 1)),
            ('6', Slot::new(4, 2)),
            ('n', Slot::new(4, 3)),
            ('-', Slot::new(4, 4)),
            ('+', Slot::new(4, 5)),
            ('1', Slot::new(5, 0)),
            ('2', Slot::new(5, 1)),
            ('3', Slot::new(5, 2)),
            ('0', Slot::new(5, 3)),
            ('.', Slot::new(5, 4)),
            ('=', Slot::new(5, 5)),
        ];

        KeyBindings {
            map: BINDINGS.iter().copied().collect(),
        }
    }

    /// Keypad position bound to `key`, if any
    pub fn slot(&self, key: char) -> Option<Slot> {
        self.map.get(&key).copied()
    }

    /// Action bound to `key` under the given shift state
    pub fn action(&self, key: char, shift: bool) -> Option<Action> {
        self.slot(key).and_then(|slot| action_at(slot, shift))
    }
}

/// Positions of fixed-action buttons reached through special keys
pub mod slots {
    use super::Slot;

    pub const EQUALS: Slot = Slot::new(5, 5);
    pub const CLEAR_ALL: Slot = Slot::new(1, 4);
    pub const CLEAR_ENTRY: Slot = Slot::new(1, 5);
    pub const SHIFT: Slot = Slot::new(1, 0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_shape_and_fixed_buttons() {
        for shift in [false, true] {
            let grid = layout(shift);
            assert_eq!(grid.len(), ROWS);
            assert!(grid.iter().all(|row| row.len() == COLS));
            assert_eq!(grid[5][5].action, Action::Equals);
            assert_eq!(grid[2][5].action, Action::Operator(Operator::Power));
            assert_eq!(grid[5][3].action, Action::Digit(0));
        }
    }

    #[test]
    fn test_shift_swaps_functions() {
        let normal = layout(false);
        let shifted = layout(true);

        assert_eq!(normal[1][1].action, Action::Function(Function::Sin));
        assert_eq!(shifted[1][1].action, Action::Function(Function::Asin));
        assert_eq!(normal[2][0].label, "π");
        assert_eq!(shifted[2][0].label, "e");
        assert_eq!(normal[2][3].action, Action::Function(Function::Factorial));
        assert_eq!(shifted[2][3].action, Action::Function(Function::Reciprocal));
        assert_eq!(shifted[2][4].action, normal[2][4].action);
    }

    #[test]
    fn test_shift_button_labels() {
        assert_eq!(layout(false)[1][0].label, "SHIFT");
        assert!(!layout(false)[1][0].active);
        assert_eq!(layout(true)[1][0].label, "2nd");
        assert!(layout(true)[1][0].active);
        assert_eq!(layout(false)[0][0].label, "DEG");
        assert_eq!(layout(true)[0][0].label, "RAD");
        assert_eq!(layout(true)[0][0].action, Action::ToggleDegRad);
    }

    #[test]
    fn test_bindings_follow_shift() {
        let keys = KeyBindings::new();
        assert_eq!(keys.action('s', false), Some(Action::Function(Function::Sin)));
        assert_eq!(keys.action('s', true), Some(Action::Function(Function::Asin)));
        assert_eq!(keys.action('*', false), Some(Action::Operator(Operator::Multiply)));
        assert_eq!(keys.action('S', false), Some(Action::MemoryStore));
        assert_eq!(keys.action('~', true), Some(Action::ToggleShift));
        assert_eq!(keys.action('C', false), Some(Action::ClearAll));
        assert_eq!(keys.action('?', false), None);
    }

    #[test]
    fn test_every_digit_is_bound() {
        let keys = KeyBindings::new();
        for d in 0..=9u8 {
            let ch = char::from(b'0' + d);
            assert_eq!(keys.action(ch, false), Some(Action::Digit(d)));
        }
    }

    #[test]
    fn test_slot_offset_wraps() {
        assert_eq!(Slot::new(0, 0).offset(-1, 0), Slot::new(5, 0));
        assert_eq!(Slot::new(2, 5).offset(0, 1), Slot::new(2, 0));
        assert_eq!(Slot::new(3, 3).offset(1, -1), Slot::new(4, 2));
    }

    #[test]
    fn test_special_slots() {
        assert_eq!(action_at(slots::EQUALS, false), Some(Action::Equals));
        assert_eq!(action_at(slots::CLEAR_ALL, false), Some(Action::ClearAll));
        assert_eq!(action_at(slots::CLEAR_ENTRY, true), Some(Action::ClearEntry));
        assert_eq!(action_at(slots::SHIFT, true), Some(Action::ToggleShift));
        assert_eq!(action_at(Slot::new(6, 0), false), None);
    }
}
