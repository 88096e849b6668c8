use std::{io::Write, thread, time::Duration};

use cellers::{EllerMaze, Random, RngWalls};
use rand::{thread_rng, Rng as _, SeedableRng as _};

use crate::{error::Error, settings::Format};

/// Everything needed to print a maze, settings already overridden by the command line.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub width: i32,
    pub lines: Option<u64>,
    pub delay: Duration,
    pub seed: Option<u64>,
    pub wall_chance: f64,
    pub format: Format,
}

/// Prints the maze line by line until the line limit, or forever without one.
pub fn run(config: &RunConfig, out: &mut impl Write) -> Result<(), Error> {
    let maze = EllerMaze::new(config.width)?;

    let seed = config.seed.unwrap_or_else(|| thread_rng().gen());
    log::info!("Seed: {}", seed);

    let walls = RngWalls::with_wall_chance(Random::seed_from_u64(seed), config.wall_chance)
        .map_err(|err| Error::InvalidWallChance(config.wall_chance, err))?;

    if let Some(header) = config.format.header(maze.width()) {
        writeln!(out, "{}", header)?;
    }

    for (i, line) in maze.lines(walls).enumerate() {
        if config.lines.is_some_and(|limit| i as u64 >= limit) {
            break;
        }

        if i > 0 && !config.delay.is_zero() {
            thread::sleep(config.delay);
        }

        writeln!(out, "{}", config.format.render(&line)?)?;
        out.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(format: Format) -> RunConfig {
        RunConfig {
            width: 6,
            lines: Some(4),
            delay: Duration::ZERO,
            seed: Some(11),
            wall_chance: 0.5,
            format,
        }
    }

    fn output(config: &RunConfig) -> Result<String, Error> {
        let mut out = Vec::new();
        run(config, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn prints_requested_lines() {
        let art = output(&config(Format::Art)).unwrap();
        let lines = art.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 1 + 4 * 2);
        assert_eq!(lines[0], "_".repeat(25));
        assert!(lines[1..].iter().all(|l| l.len() == 25));
        assert!(lines[1..].iter().all(|l| l.starts_with('|') && l.ends_with('|')));

        let compact = output(&config(Format::Compact)).unwrap();
        assert_eq!(compact.lines().count(), 1 + 4);

        let ron = output(&config(Format::Ron)).unwrap();
        assert_eq!(ron.lines().count(), 4 * 2);
    }

    #[test]
    fn seed_makes_it_repeatable() {
        let config = config(Format::Compact);
        assert_eq!(output(&config).unwrap(), output(&config).unwrap());
    }

    #[test]
    fn rejects_bad_config() {
        let mut bad_width = config(Format::Art);
        bad_width.width = 0;
        assert!(matches!(output(&bad_width), Err(Error::Generator(_))));

        let mut bad_chance = config(Format::Art);
        bad_chance.wall_chance = -0.1;
        assert!(matches!(
            output(&bad_chance),
            Err(Error::InvalidWallChance(..))
        ));
    }
}
