use crate::engine::{Grid, Move, Tile};
use crate::greedy::Greedy;
use crate::random::Random;
use wasm_bindgen::prelude::*;

fn move_to_key(direction: Move) -> i32 {
    match direction {
        Move::Up => 0,
        Move::Right => 1,
        Move::Down => 2,
        Move::Left => 3,
    }
}

fn grid_from_tiles(tiles: Vec<Tile>, size: usize) -> Option<Grid> {
    if size == 0 || tiles.len() != size * size {
        return None;
    }
    let rows = tiles.chunks(size).map(|chunk| chunk.to_vec()).collect();
    Grid::from_rows(rows).ok()
}

#[wasm_bindgen]
pub struct WasmGreedy {
    inner: Greedy,
}

#[wasm_bindgen]
impl WasmGreedy {
    pub fn new() -> Self {
        WasmGreedy {
            inner: Greedy::new(),
        }
    }

    /// `tiles` is the board snapshot in row-major order with side length
    /// `size`. Returns 0-3 for Up/Right/Down/Left, or -1 when the input is
    /// not a square board.
    pub fn get_next_move(&mut self, tiles: Vec<Tile>, size: usize) -> i32 {
        match grid_from_tiles(tiles, size) {
            Some(grid) => move_to_key(self.inner.get_next_move(&grid)),
            None => -1,
        }
    }
}

#[wasm_bindgen]
pub struct WasmRandom {
    inner: Random,
}

#[wasm_bindgen]
impl WasmRandom {
    pub fn new() -> Self {
        WasmRandom {
            inner: Random::new(),
        }
    }

    pub fn get_next_move(&mut self) -> i32 {
        move_to_key(self.inner.get_next_move())
    }
}
