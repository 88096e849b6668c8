use std::iter::FusedIterator;

use thiserror::Error;

use crate::{
    random::WallSource,
    row::{MazeLine, Orientation, Row, NOT_WALL, WALL},
    sets::RowSets,
};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("invalid maze width {0}, it must be greater than 0")]
    InvalidWidth(i32),
}

/// Endless maze of fixed width, generated one row at a time with Eller's algorithm.
///
/// Rows alternate between vertical and horizontal, starting with vertical. Vertical row tells
/// which cells have a wall to their right, the following horizontal row tells which of the same
/// cells have a wall below them.
///
/// ```text
///    |   |   |   |
/// ___|___|___|___|
///    ^~ horizontal, then vertical ~^
/// ```
#[derive(Debug, Clone)]
pub struct EllerMaze {
    sets: RowSets,
    next: Orientation,
}

impl EllerMaze {
    pub fn new(width: i32) -> Result<Self, GeneratorError> {
        if width <= 0 {
            return Err(GeneratorError::InvalidWidth(width));
        }

        log::debug!("new maze generator, width {}", width);

        Ok(Self {
            sets: RowSets::new(width as usize),
            next: Orientation::Vertical,
        })
    }

    pub fn width(&self) -> usize {
        self.sets.width()
    }

    /// Orientation of the row, which will be returned by the next call to [`Self::next_row`].
    pub fn next_orientation(&self) -> Orientation {
        self.next
    }

    pub fn sets(&self) -> &RowSets {
        &self.sets
    }

    pub fn next_row<W: WallSource + ?Sized>(&mut self, walls: &mut W) -> Row {
        let orientation = self.next;
        let row = match orientation {
            Orientation::Vertical => self.vertical_row(walls),
            Orientation::Horizontal => self.horizontal_row(walls),
        };
        self.next.flip();

        debug_assert!(self.sets.is_consistent());
        log::trace!(
            "{:?} row with {} walls, {} regions",
            orientation,
            row.iter().filter(|&&w| w).count(),
            self.sets.region_count()
        );

        Row::new(orientation, row)
    }

    /// Generates both rows of the next visual line.
    ///
    /// # Panics
    ///
    /// Panics if the previous line was left half done, i.e. the next row is horizontal.
    pub fn next_line<W: WallSource + ?Sized>(&mut self, walls: &mut W) -> MazeLine {
        assert_eq!(
            self.next,
            Orientation::Vertical,
            "line started in the middle, horizontal row is pending"
        );

        let right = self.next_row(walls);
        let bottom = self.next_row(walls);
        MazeLine { right, bottom }
    }

    /// Endless iterator of the rows.
    pub fn rows<W: WallSource>(self, walls: W) -> Rows<W> {
        Rows { maze: self, walls }
    }

    /// Endless iterator of the visual lines.
    pub fn lines<W: WallSource>(self, walls: W) -> Lines<W> {
        Lines { maze: self, walls }
    }

    fn vertical_row<W: WallSource + ?Sized>(&mut self, walls: &mut W) -> Vec<bool> {
        let width = self.width();
        let mut row = Vec::with_capacity(width);

        for cell in 0..width - 1 {
            let region = self.sets.region_of(cell);
            let next_region = self.sets.region_of(cell + 1);

            // wall between already connected cells is mandatory, it would make a loop otherwise
            if region == next_region || walls.wall() {
                row.push(WALL);
            } else {
                self.sets.merge(region, next_region);
                row.push(NOT_WALL);
            }
        }

        // right border
        row.push(WALL);
        row
    }

    fn horizontal_row<W: WallSource + ?Sized>(&mut self, walls: &mut W) -> Vec<bool> {
        let mut row = vec![NOT_WALL; self.width()];

        for region in 0..self.sets.slot_count() {
            // singletons always keep their way down
            if self.sets.members(region).len() < 2 {
                continue;
            }

            // at least one member is open already
            let mut way_exists = false;
            // wall was built after an opening, rest of the region gets walls too
            let mut way_finish = false;

            // the list shrinks while walking it, a member swapped into `i` is skipped and stays open
            let mut i = 0;
            while i < self.sets.members(region).len() {
                let last = self.sets.members(region).len() - 1;
                if i == last && !way_exists {
                    i += 1;
                    continue;
                }

                if way_finish || walls.wall() {
                    let cell = self.sets.detach_at(region, i);
                    row[cell] = WALL;
                    if way_exists {
                        way_finish = true;
                    }
                } else {
                    way_exists = true;
                }
                i += 1;
            }
        }

        self.sets.reassign_pending();
        row
    }
}

pub struct Rows<W> {
    maze: EllerMaze,
    walls: W,
}

impl<W> Rows<W> {
    pub fn maze(&self) -> &EllerMaze {
        &self.maze
    }

    pub fn into_inner(self) -> (EllerMaze, W) {
        (self.maze, self.walls)
    }
}

impl<W: WallSource> Iterator for Rows<W> {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        Some(self.maze.next_row(&mut self.walls))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<W: WallSource> FusedIterator for Rows<W> {}

pub struct Lines<W> {
    maze: EllerMaze,
    walls: W,
}

impl<W> Lines<W> {
    pub fn maze(&self) -> &EllerMaze {
        &self.maze
    }

    pub fn into_inner(self) -> (EllerMaze, W) {
        (self.maze, self.walls)
    }
}

impl<W: WallSource> Iterator for Lines<W> {
    type Item = MazeLine;

    fn next(&mut self) -> Option<MazeLine> {
        // the maze may have been handed over with a half done line
        if self.maze.next_orientation() == Orientation::Horizontal {
            self.maze.next_row(&mut self.walls);
        }
        Some(self.maze.next_line(&mut self.walls))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<W: WallSource> FusedIterator for Lines<W> {}
