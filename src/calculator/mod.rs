//! Calculator core
//!
//! This module holds everything with calculator semantics; nothing in it
//! knows about terminals or colours.
//!
//! - [`session`]: the [`Session`] record and its transitions
//! - [`action`]: the closed set of button [`Action`]s
//! - [`operator`]: binary operators
//! - [`function`]: unary functions, constants and factorial
//! - [`number`]: display formatting and parsing

pub mod action;
pub mod function;
pub mod number;
pub mod operator;
pub mod session;

pub use action::Action;
pub use function::Function;
pub use operator::Operator;
pub use session::Session;
