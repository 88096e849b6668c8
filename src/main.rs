mod app;
mod constants;
mod error;
mod logging;
mod render;
mod settings;

use std::{io, time::Duration};

use clap::Parser;

use app::RunConfig;
use error::Error;
use settings::{Format, LogLevel, Settings};

#[derive(Parser, Debug)]
#[clap(version, about, name = "tellers")]
struct Args {
    #[clap(short, long, help = "Maze width in cells")]
    width: Option<i32>,
    #[clap(short, long, help = "Stop after this many lines, prints forever otherwise")]
    lines: Option<u64>,
    #[clap(short, long, help = "Pause between lines in milliseconds")]
    delay: Option<u64>,
    #[clap(short, long, help = "Seed of the maze, random if not set")]
    seed: Option<u64>,
    #[clap(long, help = "Chance of building a wall, from 0 to 1")]
    wall_chance: Option<f64>,
    #[clap(short, long, value_enum, help = "Output format")]
    format: Option<Format>,
    #[clap(short, long, action = clap::ArgAction::Count, help = "More verbose logging, can be repeated")]
    verbose: u8,
    #[clap(long, action, help = "Show config path and quit")]
    show_config_path: bool,
    #[clap(long, action, help = "Reset config to default and quit")]
    reset_config: bool,
}

impl Args {
    fn config(&self, settings: &Settings) -> RunConfig {
        RunConfig {
            width: self.width.unwrap_or_else(|| settings.get_width()),
            lines: self.lines,
            delay: Duration::from_millis(self.delay.unwrap_or_else(|| settings.get_delay_ms())),
            seed: self.seed.or_else(|| settings.get_seed()),
            wall_chance: self.wall_chance.unwrap_or_else(|| settings.get_wall_chance()),
            format: self.format.unwrap_or_else(|| settings.get_format()),
        }
    }
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    // settings may log while loading, their level is applied right after
    logging::init(LogLevel::default().raised(args.verbose));

    let settings_path = Settings::default_path()?;

    if args.show_config_path {
        println!("{}", settings_path.display());
        return Ok(());
    }

    if args.reset_config {
        Settings::reset_config(&settings_path)?;
        return Ok(());
    }

    better_panic::install();

    let settings = Settings::load(&settings_path)?;
    logging::init(settings.get_log_level().raised(args.verbose));

    let config = args.config(&settings);
    log::debug!("{:?}", config);

    match app::run(&config, &mut io::stdout().lock()) {
        // reader went away, e.g. piped into `head`
        Err(Error::Io(err)) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        res => res,
    }
}
