use std::env;
use std::hash::{DefaultHasher, Hash as _, Hasher as _};

use cellers::{sets::RowSets, EllerMaze, Random, RngWalls};
use rand::{thread_rng, Rng as _, SeedableRng as _};

/// Prints every row of the maze with the cells colored by their region.
///
/// Usage: `regions <width> <lines> [seed]`
fn main() {
    let args = env::args().skip(1).collect::<Vec<_>>();
    assert!(
        args.len() == 2 || args.len() == 3,
        "Expected width, number of lines and optional seed"
    );

    let width: i32 = args[0].parse().expect("Width must be a 32-bit integer");
    let lines: u64 = args[1].parse().expect("Lines must be an integer");
    let input_seed = args
        .get(2)
        .map(|s| s.parse::<u64>().expect("Seed must be an integer"));

    let seed = input_seed.unwrap_or_else(|| thread_rng().gen());
    if input_seed.is_none() {
        println!("Seed: {}", seed);
    }

    let mut walls = RngWalls::new(Random::seed_from_u64(seed));
    let mut maze = EllerMaze::new(width).expect("Width must be positive");

    for _ in 0..lines {
        let right = maze.next_row(&mut walls);
        show_regions(maze.sets(), right.walls(), seed);

        // bottom walls only show up as the regions of the next row
        maze.next_row(&mut walls);
    }
}

fn show_regions(sets: &RowSets, right: &[bool], base_hash: u64) {
    for (cell, &wall) in right.iter().enumerate() {
        let mut hasher = DefaultHasher::new();
        sets.region_of(cell).hash(&mut hasher);

        let hash = hasher.finish().wrapping_add(base_hash);
        let (r, g, b) = ((hash >> 16) as u8, (hash >> 8) as u8, hash as u8);

        print!("\x1b[48;2;{r};{g};{b}m  \x1b[0m{}", if wall { '|' } else { ' ' });
    }
    println!();
}
