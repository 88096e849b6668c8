use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Value of a wall flag, which blocks the way.
pub const WALL: bool = true;
/// Value of a wall flag, which leaves the way open.
pub const NOT_WALL: bool = false;

/// Which kind of walls a row describes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Orientation {
    /// Walls on the right side of each cell.
    #[default]
    Vertical,
    /// Walls below each cell.
    Horizontal,
}

impl Orientation {
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Vertical => Orientation::Horizontal,
            Orientation::Horizontal => Orientation::Vertical,
        }
    }

    pub fn flip(&mut self) {
        *self = self.flipped();
    }
}

/// Single generated row of wall flags, tagged with its orientation.
///
/// Vertical rows have one flag per cell for its right wall, the last one is always a wall.
/// Horizontal rows have one flag per cell for its bottom wall.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Row {
    orientation: Orientation,
    walls: Vec<bool>,
}

impl Row {
    pub fn new(orientation: Orientation, walls: Vec<bool>) -> Self {
        Self { orientation, walls }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_vertical(&self) -> bool {
        self.orientation == Orientation::Vertical
    }

    pub fn is_horizontal(&self) -> bool {
        self.orientation == Orientation::Horizontal
    }

    pub fn walls(&self) -> &[bool] {
        &self.walls
    }

    pub fn into_walls(self) -> Vec<bool> {
        self.walls
    }

    pub fn is_wall(&self, cell: usize) -> bool {
        self.walls[cell]
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.walls.iter().copied()
    }

    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|&&w| w).count()
    }
}

impl Index<usize> for Row {
    type Output = bool;

    fn index(&self, cell: usize) -> &bool {
        &self.walls[cell]
    }
}

/// One visual line of the maze: walls to the right of the cells and walls below them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MazeLine {
    pub right: Row,
    pub bottom: Row,
}

impl MazeLine {
    pub fn width(&self) -> usize {
        self.right.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_flips_back_and_forth() {
        let mut o = Orientation::default();
        assert_eq!(o, Orientation::Vertical);
        o.flip();
        assert_eq!(o, Orientation::Horizontal);
        o.flip();
        assert_eq!(o, Orientation::Vertical);
    }

    #[test]
    fn row_accessors() {
        let row = Row::new(Orientation::Horizontal, vec![WALL, NOT_WALL, WALL]);
        assert!(row.is_horizontal());
        assert_eq!(row.len(), 3);
        assert_eq!(row.wall_count(), 2);
        assert!(row[0]);
        assert!(!row.is_wall(1));
        assert_eq!(row.iter().collect::<Vec<_>>(), vec![true, false, true]);
    }
}
