//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]** — application state, keyboard and mouse event loop, keypad cursor
//! - **[`panes`]** — stateless render functions for each visible pane (display,
//!   keypad, status bar)
//! - **[`theme`]** — centralized color palette and the animated button colors
//! - **[`animation`]** — the timer-driven color seed
//!
//! The entry point for consumers is [`App`]: construct it from an
//! [`AppConfig`] and call [`App::run`] to start the event loop.
//!
//! [`AppConfig`]: crate::config::AppConfig
//! [`App::run`]: app::App::run

pub mod animation;
pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
