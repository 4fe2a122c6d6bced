//! Move validation and application.
//!
//! `is_legal` and the ability/win evaluators are pure; `apply_move` is the
//! single mutating operation and works on a clone, so a rejected move never
//! touches the caller's state.

pub mod apply;
pub mod attack;
pub mod legality;
pub mod win;

pub use apply::apply_move;
pub use attack::resolve_attacks;
pub use legality::is_legal;
pub use win::{evaluate_win, Victory, Win};
