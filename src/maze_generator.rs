//! Randomized Prim's maze generation

use indexmap::IndexSet;
use log::{debug, trace, warn};
use rand::{seq::SliceRandom, Rng};

use crate::{Cell, MazeGrid, Position};

/// Wall cells waiting to be carved.
///
/// Insertion ordered so that a random member can be drawn by index, with a
/// hash index so membership checks and removal stay O(1). Removal swaps the
/// last entry into the freed slot.
#[derive(Debug, Default, Clone)]
pub struct Frontier {
    cells: IndexSet<Position>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    pub fn get(&self, index: usize) -> Option<Position> {
        self.cells.get_index(index).copied()
    }

    /// Append positions not yet present, returns how many were added
    pub fn extend_new(&mut self, positions: impl IntoIterator<Item = Position>) -> usize {
        positions
            .into_iter()
            .filter(|pos| self.cells.insert(*pos))
            .count()
    }

    /// Uniformly random index, `None` if empty
    pub fn random_index<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        if self.cells.is_empty() {
            None
        } else {
            Some(rng.gen_range(0..self.cells.len()))
        }
    }

    pub fn swap_remove_index(&mut self, index: usize) -> Option<Position> {
        self.cells.swap_remove_index(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.cells.iter()
    }
}

/// Summary of a finished generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationReport {
    /// Randomly chosen first path cell
    pub start: Position,
    /// Number of frontier cells carved after the start cell
    pub iterations: usize,
}

/// Step-wise Randomized Prim's carver over a borrowed grid.
///
/// [MazeGrid::generate_maze] runs it to completion; stepping manually allows
/// inspecting the grid and frontier between iterations.
#[derive(Debug)]
pub struct PrimCarver<'a> {
    grid: &'a mut MazeGrid,
    frontier: Frontier,
    start: Position,
    iterations: usize,
}

impl<'a> PrimCarver<'a> {
    /// Carve a random start cell and seed the frontier with its lattice
    /// neighbours.
    pub fn start<R: Rng + ?Sized>(grid: &'a mut MazeGrid, rng: &mut R) -> Self {
        let start = Position::new(
            rng.gen_range(0..grid.height()),
            rng.gen_range(0..grid.width()),
        );
        grid.set_cell(start, Cell::Path);

        let mut frontier = Frontier::new();
        frontier.extend_new(grid.frontier_matching(start, Cell::Wall));
        debug!(
            "Starting maze at {:?} in {}x{} grid, {} initial frontier cells",
            start,
            grid.width(),
            grid.height(),
            frontier.len()
        );

        Self {
            grid,
            frontier,
            start,
            iterations: 0,
        }
    }

    /// Carve one random frontier cell and connect it to an adjacent path.
    ///
    /// Returns the carved cell, or `None` once the frontier is exhausted.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Position> {
        let index = self.frontier.random_index(rng)?;
        let chosen = self.frontier.get(index)?;
        self.grid.set_cell(chosen, Cell::Path);

        let neighbours = self.grid.frontier_matching(chosen, Cell::Path);
        match neighbours.choose(rng) {
            Some(&neighbour) => {
                let between = MazeGrid::midpoint_between(chosen, neighbour);
                trace!("Carving {:?} -> {:?} via {:?}", chosen, neighbour, between);
                self.grid.set_cell(between, Cell::Path);
            }
            None => warn!("Frontier cell {:?} has no path neighbour", chosen),
        }

        self.frontier
            .extend_new(self.grid.frontier_matching(chosen, Cell::Wall));
        // New entries were appended, so `index` still points at `chosen`
        self.frontier.swap_remove_index(index);
        self.iterations += 1;
        Some(chosen)
    }

    pub fn is_done(&self) -> bool {
        self.frontier.is_empty()
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    pub fn grid(&self) -> &MazeGrid {
        &*self.grid
    }

    pub fn start_position(&self) -> Position {
        self.start
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn finish(self) -> GenerationReport {
        debug!(
            "Maze finished after {} iterations, {} path cells",
            self.iterations,
            self.grid.path_count()
        );
        GenerationReport {
            start: self.start,
            iterations: self.iterations,
        }
    }
}

impl MazeGrid {
    /// Generate a perfect maze with Randomized Prim's algorithm
    ///
    /// Picks a random start cell, then repeatedly carves a random frontier
    /// cell (a wall two steps from a path) and opens the wall between it and
    /// one of its path neighbours, until no frontier remains. All randomness
    /// is drawn from `rng`, so a seeded generator reproduces the same maze.
    ///
    /// Intended to run once on a fresh grid.
    pub fn generate_maze<R: Rng + ?Sized>(&mut self, rng: &mut R) -> GenerationReport {
        let mut carver = PrimCarver::start(self, rng);
        while carver.step(rng).is_some() {}
        carver.finish()
    }
}
