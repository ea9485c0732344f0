use crate::engine as GameEngine;
use crate::engine::{Grid, Move, Score};
use log::debug;
use std::thread;

const EMPTY_TILE_BONUS: Score = 10;
const MAX_TILE_WEIGHT: Score = 5;

/// Scores a board for the two-ply lookahead: accumulated tile mass plus
/// flat bonuses for open cells and for the largest tile on the board.
pub fn heuristic(grid: &Grid) -> Score {
    calc_tile_mass(grid) + calc_empty(grid) + calc_max_tile(grid)
}

fn calc_tile_mass(grid: &Grid) -> Score {
    grid.rows()
        .iter()
        .flatten()
        .fold(0, |acc, &tile| acc + tile * tile)
}

fn calc_empty(grid: &Grid) -> Score {
    grid.count_empty() as Score * EMPTY_TILE_BONUS
}

fn calc_max_tile(grid: &Grid) -> Score {
    grid.max_tile() * MAX_TILE_WEIGHT
}

/// Two-ply greedy searcher: tries every (first, second) move pair, scores
/// the board after the second slide and keeps the first move of the best
/// pair. No tile spawn is simulated between the two slides.
pub struct Greedy;

impl Greedy {
    pub fn new() -> Self {
        Greedy
    }

    /// Picks the first move of the best-scoring move pair.
    ///
    /// All 16 pairs are evaluated in `Move::ALL` x `Move::ALL` order; a
    /// later pair replaces the running best only on a strictly greater
    /// score, so ties keep the earliest pair. Always returns a direction,
    /// even when no move changes the board.
    pub fn get_next_move(&mut self, grid: &Grid) -> Move {
        let mut best: Option<(Score, Move)> = None;
        for &first in Move::ALL.iter() {
            let after_first = GameEngine::shift(grid, first);
            for &second in Move::ALL.iter() {
                let after_second = GameEngine::shift(&after_first, second);
                let score = heuristic(&after_second);
                match best {
                    None => best = Some((score, first)),
                    Some((best_score, _)) if score > best_score => best = Some((score, first)),
                    _ => {}
                }
            }
        }
        let (score, direction) = best.expect("move enumeration is never empty");
        debug!("greedy picked {:?} with score {}", direction, score);
        direction
    }
}

/// Same policy as [`Greedy`], with the four first-move branches evaluated
/// on worker threads. Joined results are reduced in `Move::ALL` order with
/// a strict comparison, so tie-breaking matches the sequential search.
pub struct GreedyParallel;

impl GreedyParallel {
    pub fn new() -> Self {
        GreedyParallel
    }

    pub fn get_next_move(&mut self, grid: &Grid) -> Move {
        let mut threads = vec![];
        for &first in Move::ALL.iter() {
            let grid = grid.clone();
            threads.push(thread::spawn(move || branch_score(&grid, first)));
        }

        let mut best: Option<(Score, Move)> = None;
        for (thread, &first) in threads.into_iter().zip(Move::ALL.iter()) {
            let score = thread.join().expect("greedy worker thread panicked");
            match best {
                None => best = Some((score, first)),
                Some((best_score, _)) if score > best_score => best = Some((score, first)),
                _ => {}
            }
        }
        let (_, direction) = best.expect("move enumeration is never empty");
        direction
    }
}

/// Best heuristic score reachable from `grid` by playing `first` and then
/// any second move.
fn branch_score(grid: &Grid, first: Move) -> Score {
    let after_first = GameEngine::shift(grid, first);
    Move::ALL
        .iter()
        .map(|&second| heuristic(&GameEngine::shift(&after_first, second)))
        .max()
        .expect("move enumeration is never empty")
}
