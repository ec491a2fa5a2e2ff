// main.rs - Terminal Game of Life: prints each generation on a fixed cadence

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, bail};
use clap::Parser;
use life::{GenerationHistory, Simulation, patterns};
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Parser, Debug)]
#[command(name = "life_term", about = "Conway's Game of Life in the terminal")]
struct Args {
    #[arg(long, default_value_t = life::DEFAULT_WIDTH)]
    width: usize,

    #[arg(long, default_value_t = life::DEFAULT_HEIGHT)]
    height: usize,

    /// Probability that a cell starts alive
    #[arg(long, default_value_t = life::DEFAULT_FILL)]
    fill: f64,

    /// Seed for the random board; omitted means a fresh one every run
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between generations
    #[arg(long, default_value_t = life::DEFAULT_INTERVAL_MS)]
    interval_ms: u64,

    /// Stop after this many generations
    #[arg(long)]
    max_steps: Option<u64>,

    /// Start from a named pattern instead of a random board
    #[arg(long)]
    pattern: Option<String>,

    /// Stop once the board starts repeating itself
    #[arg(long)]
    stop_on_cycle: bool,
}

/// Why the print loop ended on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stop {
    Extinct,
    MaxSteps,
    Cycle,
}

/// Decides, after a generation was printed, whether to keep stepping.
/// `repeated` is whether that generation was already seen recently.
fn stop_reason(args: &Args, sim: &Simulation, alive: bool, repeated: bool) -> Option<Stop> {
    if !alive {
        return Some(Stop::Extinct);
    }
    if args.max_steps.is_some_and(|max| sim.step() >= max) {
        return Some(Stop::MaxSteps);
    }
    if args.stop_on_cycle && repeated {
        return Some(Stop::Cycle);
    }
    None
}

fn build_simulation(args: &Args) -> anyhow::Result<Simulation> {
    if let Some(name) = &args.pattern {
        let Some(pattern) = patterns::find(name) else {
            let known: Vec<_> = patterns::PATTERNS.iter().map(|p| p.name).collect();
            bail!("unknown pattern {name:?}, expected one of: {}", known.join(", "));
        };
        info!("starting from {} on a {}x{} grid", pattern.name, args.width, args.height);
        return Ok(Simulation::from_pattern(args.width, args.height, pattern));
    }

    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    info!(
        "random {}x{} grid, fill {}, seed {:?}",
        args.width, args.height, args.fill, args.seed
    );
    Simulation::random(args.width, args.height, args.fill, &mut rng).context("seeding the board")
}

fn print_generation(out: &mut impl Write, sim: &Simulation) -> io::Result<()> {
    // Clear screen, cursor home
    write!(out, "\x1b[2J\x1b[H")?;
    write!(out, "{}", sim.grid())?;
    writeln!(out, "generation {}  live {}", sim.step(), sim.population())?;
    out.flush()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let mut sim = build_simulation(&args)?;
    let mut history = GenerationHistory::default();
    history.record(sim.grid());

    let mut ticker = tokio::time::interval(Duration::from_millis(args.interval_ms.max(1)));
    let mut stdout = io::stdout().lock();
    let mut alive = sim.population() > 0;
    let mut repeated = false;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = &mut ctrl_c => {
                info!("interrupted at generation {}", sim.step());
                break;
            }
        }

        print_generation(&mut stdout, &sim)?;

        match stop_reason(&args, &sim, alive, repeated) {
            Some(Stop::Extinct) => {
                info!("board died out at generation {}", sim.step());
                break;
            }
            Some(Stop::MaxSteps) => {
                info!("reached {} generations", sim.step());
                break;
            }
            Some(Stop::Cycle) => {
                info!("board repeats itself at generation {}", sim.step());
                break;
            }
            None => {}
        }

        alive = sim.advance();
        repeated = history.record(sim.grid());
    }

    Ok(())
}
