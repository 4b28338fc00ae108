#![doc = include_str!("../puzzles/08.md")]

use std::fmt;

use advent_of_code_2022::{debugln, Error, Result};
use itertools::iproduct;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Row and column step when walking in this direction.
    fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Tree {
    height: u8,
    /// Set once the tree is known to be visible from some edge.
    visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Forest(grid::Grid<Tree>);

impl Forest {
    pub fn from_input(input: &str) -> Result<Self> {
        let rows: Vec<(usize, &str)> = input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .collect();
        let n_cols = rows.first().map(|(_, row)| row.len()).ok_or(Error::NoSolution)?;

        let mut trees = Vec::with_capacity(rows.len() * n_cols);
        for &(index, row) in &rows {
            if row.len() != n_cols {
                return Err(Error::parse(index, format!("expected {n_cols} trees")));
            }
            for c in row.chars() {
                let height = c
                    .to_digit(10)
                    .ok_or_else(|| Error::parse(index, format!("{c:?} is not a height")))?;
                trees.push(Tree {
                    height: height as u8,
                    visible: false,
                });
            }
        }

        Ok(Self(grid::Grid::from_vec(trees, n_cols)))
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.0.rows()
    }

    #[inline]
    pub fn col_count(&self) -> usize {
        self.0.cols()
    }

    pub fn height(&self, row: usize, col: usize) -> u8 {
        self.0[row][col].height
    }

    /// Marks every tree that can be seen from outside the forest.
    pub fn mark_visible(&mut self) {
        for row in 0..self.row_count() {
            Self::mark_visible_along(self.0.iter_row_mut(row));
            Self::mark_visible_along(self.0.iter_row_mut(row).rev());
        }
        for col in 0..self.col_count() {
            Self::mark_visible_along(self.0.iter_col_mut(col));
            Self::mark_visible_along(self.0.iter_col_mut(col).rev());
        }
    }

    /// Walks a line of trees inward from an edge.
    fn mark_visible_along<'a>(trees: impl Iterator<Item = &'a mut Tree>) {
        let mut tallest_so_far: Option<u8> = None;
        for tree in trees {
            if tallest_so_far.map_or(true, |tallest| tree.height > tallest) {
                tree.visible = true;
                tallest_so_far = Some(tree.height);
            }
        }
    }

    pub fn visible_count(&self) -> usize {
        self.0.iter().filter(|tree| tree.visible).count()
    }

    /// How many trees can be seen from the tree at (`row`, `col`) looking in
    /// `dir`, up to and including the first one that blocks the view.
    pub fn viewing_distance(&self, row: usize, col: usize, dir: Direction) -> usize {
        let own_height = self.height(row, col);
        let (dr, dc) = dir.delta();
        let (mut r, mut c) = (row, col);
        let mut distance = 0;

        loop {
            let (Some(next_r), Some(next_c)) =
                (r.checked_add_signed(dr), c.checked_add_signed(dc))
            else {
                break;
            };
            if next_r >= self.row_count() || next_c >= self.col_count() {
                break;
            }
            (r, c) = (next_r, next_c);
            distance += 1;
            if self.height(r, c) >= own_height {
                break;
            }
        }

        distance
    }

    pub fn scenic_score(&self, row: usize, col: usize) -> usize {
        Direction::ALL
            .into_iter()
            .map(|dir| self.viewing_distance(row, col, dir))
            .product()
    }
}

impl fmt::Display for Forest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.row_count() {
            for tree in self.0.iter_row(row) {
                if tree.visible {
                    write!(f, "{}", tree.height)?;
                } else {
                    write!(f, ".")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub fn part_one(input: &str) -> Result<usize> {
    let mut forest = Forest::from_input(input)?;
    forest.mark_visible();
    debugln!("{forest}");

    Ok(forest.visible_count())
}

pub fn part_two(input: &str) -> Result<usize> {
    let forest = Forest::from_input(input)?;

    iproduct!(0..forest.row_count(), 0..forest.col_count())
        .map(|(row, col)| forest.scenic_score(row, col))
        .max()
        .ok_or(Error::NoSolution)
}

fn main() {
    let input = &advent_of_code_2022::read_input(8);
    advent_of_code_2022::solve!(1, part_one, input);
    advent_of_code_2022::solve!(2, part_two, input);
}
