//! greedy-2048: a 2048 move simulator plus two move-selection policies.
//!
//! This crate provides:
//! - A dimension-agnostic square [`Grid`] with a pure slide/merge routine
//!   ([`engine::shift`]) that never mutates its input
//! - A two-ply greedy searcher ([`greedy::Greedy`]) with a
//!   thread-per-branch variant ([`greedy::GreedyParallel`])
//! - A uniform random picker ([`random::Random`])
//! - A wasm adapter mapping both pickers onto a host key convention
//!
//! The host game loop owns tile spawning, win/loss detection and board
//! state; it hands this crate a read-only snapshot and gets a direction
//! back.

pub mod engine;
pub mod greedy;
pub mod random;
pub mod wasm;

pub use engine::{Grid, Move, Score, Tile};

/// Two-ply lookahead pick for the given board snapshot.
pub fn choose_greedy_move(grid: &Grid) -> Move {
    greedy::Greedy::new().get_next_move(grid)
}

/// Uniform random pick, independent of board state.
pub fn choose_random_move() -> Move {
    random::Random::new().get_next_move()
}
