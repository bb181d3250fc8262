//! gridstar command-line interface.
//!
//! Loads (or generates) a grid map, runs an A* search between its start and
//! goal markers and prints the map with the path drawn in.
//!
//! Run: cargo run -- solve crates/gridstar-cli/maps/maze.txt

mod args;
mod render;

use std::fs;
use std::io::Read;
use std::path::Path as FsPath;
use std::process::ExitCode;

use anyhow::{Context, Result};
use args::{Args, Commands, OutputArgs};
use clap::Parser;
use gridstar_core::{Grid, Layout, Point};
use gridstar_paths::{Pathfinder, SearchConfig};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use render::{Renderer, Report};

/// Exit status when the goal cannot be reached.
const EXIT_NO_PATH: u8 = 2;

fn main() -> Result<ExitCode> {
    env_logger::init();

    let Args { command } = Args::parse();

    let (layout, output) = match command {
        Commands::Solve { map, output } => (load_layout(&map)?, output),
        Commands::Random {
            width,
            height,
            density,
            seed,
            output,
        } => {
            let seed = seed.unwrap_or_else(|| rand::rng().random());
            eprintln!("seed: {seed}");
            (random_layout(width, height, density, seed)?, output)
        }
    };

    solve(&layout, &output)
}

fn load_layout(map: &FsPath) -> Result<Layout> {
    let text = if map == FsPath::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read map from stdin")?;
        buf
    } else {
        fs::read_to_string(map)
            .with_context(|| format!("Failed to read map file '{}'", map.display()))?
    };
    let layout = Layout::parse(&text).context("Invalid map")?;
    info!(
        "loaded {}x{} map with {} obstacles",
        layout.grid().width(),
        layout.grid().height(),
        layout.grid().obstacle_count()
    );
    Ok(layout)
}

fn random_layout(width: i32, height: i32, density: f64, seed: u64) -> Result<Layout> {
    let mut grid = Grid::new(width, height).context("Invalid map size")?;
    let start = Point::ZERO;
    let goal = Point::new(width - 1, height - 1);
    let mut rng = StdRng::seed_from_u64(seed);
    grid.fill_obstacles(|p| rng.random_bool(density) && p != start && p != goal);
    info!(
        "generated {width}x{height} map with {} obstacles (seed {seed})",
        grid.obstacle_count()
    );
    Ok(Layout::from_grid(grid, Some(start), Some(goal)))
}

fn solve(layout: &Layout, output: &OutputArgs) -> Result<ExitCode> {
    let start = layout.start().context("Map has no start marker 'S'")?;
    let goal = layout.goal().context("Map has no goal marker 'G'")?;

    let config = SearchConfig::default().with_heuristic(output.heuristic.into());
    let mut pathfinder = Pathfinder::for_grid(layout.grid()).with_config(config);
    let path = pathfinder
        .search(layout.grid(), start, goal)
        .context("Search failed")?;
    let stats = pathfinder.last_stats();
    info!(
        "search finished: {} expanded, {} discovered",
        stats.expanded, stats.discovered
    );

    if output.json {
        let report = Report::new(start, goal, &path, output.goal_first);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let renderer = Renderer::new(output.color);
        println!("{}", renderer.draw(layout, &path));
        println!("{}", renderer.summary(&path));
        if output.points && !path.is_empty() {
            println!("{}", renderer.points(&path, output.goal_first));
        }
    }

    if path.is_empty() {
        Ok(ExitCode::from(EXIT_NO_PATH))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
