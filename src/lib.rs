//! # Introduction
//!
//! calctty is a single-screen scientific calculator for the terminal. The
//! calculator itself is a plain value type driven by button actions; a
//! terminal UI built with [ratatui](https://docs.rs/ratatui) draws it and
//! feeds it key presses and mouse clicks.
//!
//! ## Pipeline
//!
//! ```text
//! Key / click → KeyBindings → Slot → Keypad layout → Action → Session → Panes
//! ```
//!
//! 1. [`calculator`] — the [`calculator::Session`] record, its transitions,
//!    and the number formatting the display relies on.
//! 2. [`keypad`] — the 6×6 button table (shift dependent) and key bindings.
//! 3. [`ui`] — ratatui-based TUI; not part of the stable library API.
//! 4. [`headless`] — key sequence playback without a terminal.
//! 5. [`config`] and [`error`] — command-line settings and application errors.
//!
//! ## Evaluation model
//!
//! One binary operator may be pending at a time and is folded as soon as the
//! next operator arrives: `3 + 4 × 2 =` gives `14`. Non-finite results such as
//! `5 ÷ 0` are shown as `Infinity` or `NaN` rather than reported as errors.

pub mod calculator;
pub mod config;
pub mod error;
pub mod headless;
pub mod keypad;
pub mod ui;
