use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, Read};

use anyhow::{bail, Context, Result};

use crate::common::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Open,
    Wall,
}

impl Cell {
    pub fn is_open(&self) -> bool {
        matches!(self, Cell::Open)
    }
}

#[derive(Debug, Clone)]
pub struct World {
    pub height: usize,
    pub width: usize,
    grid: Vec<Vec<Cell>>,
    start: (usize, usize),
    dirt: BTreeSet<(usize, usize)>,
}

impl World {
    pub fn new(grid: Vec<Vec<Cell>>, start: (usize, usize), dirt: BTreeSet<(usize, usize)>) -> Self {
        let height = grid.len();
        let width = grid.first().map_or(0, |row| row.len());
        World {
            height,
            width,
            grid,
            start,
            dirt,
        }
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("failed to open world file {path}"))?;
        let mut text = String::new();
        BufReader::new(file).read_to_string(&mut text)?;
        Self::from_text(&text).with_context(|| format!("malformed world file {path}"))
    }

    // World text format: first line is the column count, second line the row
    // count, then one line per row. '#' is a wall, '@' the robot start,
    // '*' a dirty cell, anything else open floor.
    pub fn from_text(text: &str) -> Result<Self> {
        let mut lines = text.lines();
        let width: usize = lines
            .next()
            .context("missing column count line")?
            .trim()
            .parse()
            .context("column count is not an integer")?;
        let height: usize = lines
            .next()
            .context("missing row count line")?
            .trim()
            .parse()
            .context("row count is not an integer")?;

        let mut grid = Vec::with_capacity(height);
        let mut start = None;
        let mut dirt = BTreeSet::new();
        for (row, line) in lines.by_ref().take(height).enumerate() {
            let mut cells = Vec::with_capacity(width);
            for (col, ch) in line.trim_end_matches('\r').chars().enumerate() {
                match ch {
                    '#' => cells.push(Cell::Wall),
                    '@' => {
                        if start.replace((row, col)).is_some() {
                            bail!("more than one robot marker '@'");
                        }
                        cells.push(Cell::Open);
                    }
                    '*' => {
                        dirt.insert((row, col));
                        cells.push(Cell::Open);
                    }
                    _ => cells.push(Cell::Open),
                }
            }
            if cells.len() != width {
                bail!("row {row} has {} cells, expected {width}", cells.len());
            }
            grid.push(cells);
        }
        if grid.len() != height {
            bail!("world has {} rows, expected {height}", grid.len());
        }
        if lines.next().is_some() {
            bail!("world has more than {height} rows");
        }
        let start = start.context("missing robot marker '@'")?;

        Ok(World {
            height,
            width,
            grid,
            start,
            dirt,
        })
    }

    // Loader preconditions: the robot stands on an open cell and every dirty
    // cell is open. Callers assert this before planning.
    pub fn verify(&self) -> bool {
        self.is_open(self.start.0, self.start.1)
            && self.dirt.iter().all(|&(row, col)| self.is_open(row, col))
    }

    pub fn is_open(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.grid[row][col].is_open()
    }

    pub fn step(&self, position: (usize, usize), action: Action) -> Option<(usize, usize)> {
        let (d_row, d_col) = action.offset();
        let row = position.0 as i32 + d_row;
        let col = position.1 as i32 + d_col;
        if row >= 0 && col >= 0 && row < self.height as i32 && col < self.width as i32 {
            let target = (row as usize, col as usize);
            if self.grid[target.0][target.1].is_open() {
                return Some(target);
            }
        }
        None
    }

    pub fn start(&self) -> (usize, usize) {
        self.start
    }

    pub fn dirt(&self) -> &BTreeSet<(usize, usize)> {
        &self.dirt
    }

    pub fn with_dirt(&self, dirt: BTreeSet<(usize, usize)>) -> World {
        World {
            dirt,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_world() {
        let world = World::from_file("worlds/lobby-7x5.vw").unwrap();

        assert_eq!(world.height, 5);
        assert_eq!(world.width, 7);
        assert_eq!(world.start(), (0, 0));
        assert_eq!(world.dirt().len(), 1);
        assert!(world.dirt().contains(&(0, 6)));

        assert!(world.is_open(0, 0));
        assert!(!world.is_open(0, 3));
        assert!(!world.is_open(3, 1));
        assert!(world.verify());
    }

    #[test]
    fn test_step_respects_walls_and_bounds() {
        let world = World::from_file("worlds/lobby-7x5.vw").unwrap();

        assert_eq!(world.step((0, 0), Action::North), None);
        assert_eq!(world.step((0, 0), Action::West), None);
        assert_eq!(world.step((0, 0), Action::South), Some((1, 0)));
        assert_eq!(world.step((0, 0), Action::East), Some((0, 1)));
        // wall at (0, 3)
        assert_eq!(world.step((0, 2), Action::East), None);
    }

    #[test]
    fn test_reject_malformed_worlds() {
        // row length disagrees with the declared column count
        assert!(World::from_text("3\n1\n@*\n").is_err());
        // fewer rows than declared
        assert!(World::from_text("2\n3\n@_\n__\n").is_err());
        // more rows than declared
        assert!(World::from_text("2\n1\n@_\n__\n").is_err());
        // no robot marker
        assert!(World::from_text("2\n1\n_*\n").is_err());
        // two robot markers
        assert!(World::from_text("2\n1\n@@\n").is_err());
        // dimension lines must be integers
        assert!(World::from_text("x\n1\n@\n").is_err());
    }

    #[test]
    fn test_dirty_and_start_cells_are_open() {
        let world = World::from_text("3\n2\n@#*\n___\n").unwrap();
        assert_eq!(world.start(), (0, 0));
        assert!(world.dirt().contains(&(0, 2)));
        assert!(!world.is_open(0, 1));
        assert!(world.verify());
    }
}
