//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](super::Board). Rules are kept
//! apart from history so they can be applied to any snapshot.

pub mod win;

pub use win::{check_winner, winning_line, LINES};
