use std::collections::HashMap;
use std::time::{Duration, Instant};

use hexlink::{resolve, Frame, Location, ProgressReport, ResolveOptions};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let width = Frame::standard_dims().0;
    let mut grid = vec![-1; 110];
    // start, then two goals
    grid[Location(2, 2).flat_index(width)] = 1;
    grid[Location(2, 6).flat_index(width)] = 3;
    grid[Location(1, 3).flat_index(width)] = 27;
    // corners outside the research table
    for corner in [Location(0, 0), Location(10, 0), Location(0, 9), Location(10, 9)] {
        grid[corner.flat_index(width)] = -2;
    }

    // 1-26-6-44-3 straight down, with 26 also touching 27
    let supply = HashMap::from([(26, 1), (6, 1), (44, 1), (38, 2), (42, 2)]);

    let mut progress = |report: ProgressReport| {
        debug!(expansions = report.expansions, solutions = report.solutions, steps = report.steps, "searching");
    };

    let deadline = Instant::now() + Duration::from_secs(30);
    let solutions = match resolve(&supply, &grid, &ResolveOptions::default(), Some(&mut progress), Some(deadline)) {
        Ok(solutions) => solutions,
        Err(err) => {
            error!(%err, "could not resolve");
            return;
        }
    };

    if solutions.is_empty() {
        info!("no chain links every goal");
        return;
    }

    for solution in &solutions {
        info!(steps = solution.steps(), remaining = %solution.signature(), "solution");
        println!("{}", solution.frame());
    }
}
