//! mazesolve — find a path through a text maze and draw the search.

mod args;
mod display;

use std::io;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use log::warn;
use maze_core::Grid;
use maze_render::{PngRenderer, RenderConfig};
use maze_search::{SolveConfig, Solver};
use tracing_subscriber::EnvFilter;

use args::Args;

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.debug);

    let grid = match Grid::from_path(&args.file) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("{e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let render = RenderConfig::in_dir(&args.output_dir)
        .with_cell_size(args.cell_size)
        .with_frames(args.animate)
        .with_labels(!args.no_labels);
    let mut renderer = PngRenderer::new(render)?;
    if args.animate {
        if let Err(e) = renderer.clear_frames() {
            warn!("{e}");
        }
    }

    let config = SolveConfig {
        seed: args.seed,
        frames: args.animate,
    };
    let mut solver = Solver::with_renderer(config, renderer);

    println!("goal is {}", grid.goal());
    let started = Instant::now();
    let outcome = solver.solve(&grid, args.search)?;
    let elapsed = started.elapsed();

    if outcome.is_solved() {
        println!("solution is {} steps", outcome.solution.len());
        println!("time to solve: {elapsed:?}");
        if args.print {
            display::print_maze(&mut io::stdout(), &grid, &outcome.solution, !args.no_color)?;
        }
    } else {
        println!("no solution");
    }
    println!("explored {} nodes", outcome.explored_count);
    if args.animate {
        println!("building animation...");
        let renderer = solver.renderer();
        let frames = renderer.write_animation()?;
        println!(
            "wrote {frames} frames to {}",
            renderer.config().animation.display()
        );
    }

    Ok(ExitCode::SUCCESS)
}

/// Install the fmt subscriber. `RUST_LOG` wins over `--debug`.
fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
