//! Calculator session state and transitions
//!
//! A [`Session`] holds everything the calculator knows: the display string,
//! the pending binary operation, the memory register and the mode flags.
//! Every transition consumes the session and returns the next one, so a
//! button press is a single value-to-value step with no side effects.
//!
//! # Evaluation model
//!
//! Only one binary operator can be pending. Pressing a second operator folds
//! the first one immediately, so `3 + 4 × 2 =` evaluates as `(3 + 4) × 2`.
//! There is no precedence and no expression history.

use super::action::Action;
use super::function::Function;
use super::number::{format_number, parse_number};
use super::operator::Operator;

/// The calculator's complete mutable state
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Current display contents
    pub display: String,

    /// Memory register, `None` until first stored or accumulated
    pub memory: Option<f64>,

    /// Set after an operator, function, memory operation or result; the next
    /// digit starts a new number instead of extending the display
    pub waiting_for_operand: bool,

    /// Operator waiting for its right-hand operand
    pub pending_operator: Option<Operator>,

    /// Left-hand operand of `pending_operator`
    pub last_value: f64,

    /// Trig functions work in degrees when set, radians otherwise
    pub degree_mode: bool,

    /// Alternate function set selected on the keypad
    pub shift_active: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Session {
            display: String::from("0"),
            memory: None,
            waiting_for_operand: false,
            pending_operator: None,
            last_value: 0.0,
            degree_mode: true,
            shift_active: false,
        }
    }

    /// Create a fresh session starting in the given angle mode
    pub fn with_degree_mode(degree_mode: bool) -> Self {
        Session {
            degree_mode,
            ..Self::new()
        }
    }

    /// Numeric value of the current display
    pub fn value(&self) -> f64 {
        parse_number(&self.display)
    }

    /// Text for the pending-operation preview, e.g. `"12 ×"`
    pub fn pending_preview(&self) -> Option<String> {
        self.pending_operator
            .map(|op| format!("{} {}", format_number(self.last_value), op))
    }

    /// Dispatch a button action
    pub fn apply(self, action: Action) -> Self {
        match action {
            Action::Digit(d) => self.input_digit(d),
            Action::Decimal => self.input_decimal(),
            Action::ToggleSign => self.toggle_sign(),
            Action::Percent => self.input_percent(),
            Action::Operator(op) => self.perform_operation(op),
            Action::Equals => self.calculate_result(),
            Action::Function(func) => self.apply_function(func),
            Action::ClearAll => self.clear_all(),
            Action::ClearEntry => self.clear_entry(),
            Action::MemoryStore => self.memory_store(),
            Action::MemoryRecall => self.memory_recall(),
            Action::MemoryClear => self.memory_clear(),
            Action::MemoryAdd => self.memory_add(),
            Action::MemorySubtract => self.memory_subtract(),
            Action::ToggleDegRad => self.toggle_deg_rad(),
            Action::ToggleShift => self.toggle_shift(),
        }
    }

    /// Enter a digit (`0..=9`).
    ///
    /// A lone `"0"` is replaced rather than extended so no leading zero forms.
    pub fn input_digit(mut self, digit: u8) -> Self {
        debug_assert!(digit <= 9, "digit out of range: {}", digit);
        let ch = char::from(b'0' + digit);

        if self.waiting_for_operand {
            self.display = ch.to_string();
            self.waiting_for_operand = false;
        } else if self.display == "0" {
            self.display = ch.to_string();
        } else {
            self.display.push(ch);
        }
        self
    }

    /// Enter a decimal point. A second point in the same number is ignored.
    pub fn input_decimal(mut self) -> Self {
        if self.waiting_for_operand {
            self.display = String::from("0.");
            self.waiting_for_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
        self
    }

    pub fn toggle_sign(mut self) -> Self {
        self.display = format_number(-self.value());
        self
    }

    pub fn input_percent(mut self) -> Self {
        self.display = format_number(self.value() / 100.0);
        self
    }

    /// Queue `op`, first folding any operator that is already pending
    pub fn perform_operation(mut self, op: Operator) -> Self {
        let value = self.value();

        match self.pending_operator {
            None => self.last_value = value,
            Some(pending) => {
                self.last_value = pending.apply(self.last_value, value);
                self.display = format_number(self.last_value);
            }
        }

        self.pending_operator = Some(op);
        self.waiting_for_operand = true;
        self
    }

    /// Evaluate the pending operation. Does nothing when none is pending.
    pub fn calculate_result(mut self) -> Self {
        if let Some(pending) = self.pending_operator.take() {
            let result = pending.apply(self.last_value, self.value());
            self.display = format_number(result);
            self.last_value = result;
            self.waiting_for_operand = true;
        }
        self
    }

    pub fn apply_function(mut self, func: Function) -> Self {
        let result = func.evaluate(self.value(), self.degree_mode);
        self.display = format_number(result);
        self.waiting_for_operand = true;
        self
    }

    /// `C`: reset display and pending operation; memory and modes survive
    pub fn clear_all(mut self) -> Self {
        self.display = String::from("0");
        self.waiting_for_operand = false;
        self.pending_operator = None;
        self.last_value = 0.0;
        self
    }

    /// `CE`: reset only the display
    pub fn clear_entry(mut self) -> Self {
        self.display = String::from("0");
        self
    }

    pub fn memory_store(mut self) -> Self {
        self.memory = Some(self.value());
        self.waiting_for_operand = true;
        self
    }

    /// Show the memory register. A no-op when memory is empty.
    pub fn memory_recall(mut self) -> Self {
        if let Some(stored) = self.memory {
            self.display = format_number(stored);
            self.waiting_for_operand = true;
        }
        self
    }

    pub fn memory_clear(mut self) -> Self {
        self.memory = None;
        self.waiting_for_operand = true;
        self
    }

    /// `M+`: an empty register counts as zero
    pub fn memory_add(mut self) -> Self {
        let value = self.value();
        self.memory = Some(self.memory.map_or(value, |stored| stored + value));
        self.waiting_for_operand = true;
        self
    }

    /// `M-`: an empty register counts as zero
    pub fn memory_subtract(mut self) -> Self {
        let value = self.value();
        self.memory = Some(self.memory.map_or(-value, |stored| stored - value));
        self.waiting_for_operand = true;
        self
    }

    pub fn toggle_deg_rad(mut self) -> Self {
        self.degree_mode = !self.degree_mode;
        self
    }

    pub fn toggle_shift(mut self) -> Self {
        self.shift_active = !self.shift_active;
        self
    }
}
