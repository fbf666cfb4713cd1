//! TUI pane rendering modules
//!
//! Each pane is a stateless render function over borrowed data.
//!
//! # Pane Modules
//!
//! - [`display`]: Pending operation, memory and angle indicators above the number
//! - [`keypad`]: The button grid with animated backgrounds
//! - [`status`]: Status bar with keybindings and the last action

pub mod display;
pub mod keypad;
pub mod status;

// Re-export render functions for convenience
pub use display::render_display_pane;
pub use keypad::{render_keypad_pane, KeypadRenderData};
pub use status::render_status_bar;
