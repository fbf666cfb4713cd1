//! Button actions
//!
//! Every keypad button maps to exactly one [`Action`]. Actions are plain data
//! so the keypad table, the keyboard bindings and the headless `--keys` mode
//! can all describe presses without touching the session directly.

use super::function::Function;
use super::operator::Operator;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Digit entry, always in `0..=9`
    Digit(u8),
    Decimal,
    ToggleSign,
    Percent,
    Operator(Operator),
    Equals,
    Function(Function),
    ClearAll,
    ClearEntry,
    MemoryStore,
    MemoryRecall,
    MemoryClear,
    MemoryAdd,
    MemorySubtract,
    ToggleDegRad,
    ToggleShift,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Digit(d) => write!(f, "{}", d),
            Action::Decimal => f.write_str("."),
            Action::ToggleSign => f.write_str("±"),
            Action::Percent => f.write_str("%"),
            Action::Operator(op) => write!(f, "{}", op),
            Action::Equals => f.write_str("="),
            Action::Function(func) => f.write_str(func.name()),
            Action::ClearAll => f.write_str("C"),
            Action::ClearEntry => f.write_str("CE"),
            Action::MemoryStore => f.write_str("MS"),
            Action::MemoryRecall => f.write_str("MR"),
            Action::MemoryClear => f.write_str("MC"),
            Action::MemoryAdd => f.write_str("M+"),
            Action::MemorySubtract => f.write_str("M-"),
            Action::ToggleDegRad => f.write_str("DEG/RAD"),
            Action::ToggleShift => f.write_str("SHIFT"),
        }
    }
}
