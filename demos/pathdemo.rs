//! Shortest-path demo on a random obstacle field.
//!
//! Run: cargo run --bin pathdemo

use std::time::Instant;

use navgrid_core::{Cell, Point};
use navgrid_demos::{format_path, render_to_string};
use navgrid_mapgen::{ScatterConfig, scatter};
use navgrid_search::shortest_path;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = ScatterConfig::default();
    let mut rng = StdRng::seed_from_u64(42);
    let mut grid = scatter(&config, &mut rng);

    let start = Point::ZERO;
    let goal = Point::new(config.width - 1, config.height - 1);
    // The scatter roll may have walled the corners; clear them so the
    // endpoints are always valid.
    grid.set(start, Cell::Free);
    grid.set(goal, Cell::Free);

    println!("Searching from {start} to {goal}...");

    let begin = Instant::now();
    let result = shortest_path(&grid, start, goal)?;
    let elapsed = begin.elapsed();

    if result.path.is_empty() {
        println!("No path found.");
    } else {
        println!(
            "Path ({} cells): {}",
            result.path.len(),
            format_path(&result.path)
        );
    }
    print!("{}", render_to_string(&grid, start, goal, &result.path));
    println!(
        "Search took {:.6} seconds, expanding {} cells.",
        elapsed.as_secs_f64(),
        result.expanded
    );

    Ok(())
}
