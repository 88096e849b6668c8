//! Endless perfect mazes of fixed width, generated row by row with Eller's algorithm.
//!
//! ```
//! use cellers::{EllerMaze, Orientation};
//!
//! let mut maze = EllerMaze::new(8).unwrap();
//! let mut coin = || rand::random::<bool>();
//!
//! let right = maze.next_row(&mut coin);
//! let bottom = maze.next_row(&mut coin);
//! assert_eq!(right.orientation(), Orientation::Vertical);
//! assert_eq!(bottom.orientation(), Orientation::Horizontal);
//! assert!(right.walls()[7]);
//! ```

pub mod generator;
pub mod random;
pub mod row;
pub mod sets;

pub use generator::{EllerMaze, GeneratorError, Lines, Rows};
pub use random::{Random, RngWalls, WallSource};
pub use row::{MazeLine, Orientation, Row, NOT_WALL, WALL};
