//! Route a machine across a 10×10 construction site with an L-shaped
//! material wall, then print the site with the route marked.
//!
//! Run: cargo run --bin construction-site

use sitepath::{Grid, GridError, Position, SearchOutcome};

const WALL: [(i32, i32); 5] = [(2, 2), (2, 3), (2, 4), (3, 2), (4, 2)];

fn run() -> Result<(), GridError> {
    let mut site = Grid::new(10, 10)?;
    for (x, y) in WALL {
        site.mark_obstacle(Position::new(x, y))?;
    }

    let start = Position::new(0, 0);
    let goal = Position::new(9, 9);
    match site.find_optimal_path(start, goal)? {
        SearchOutcome::Found(path) => {
            println!("{}\n", site.render_path(&path));
            println!("route: {path}");
            println!("steps: {}, cost: {}", path.steps(), path.cost(&site)?);
        }
        SearchOutcome::NoPath => println!("no route from {start} to {goal}"),
        SearchOutcome::Aborted { expanded } => {
            println!("search gave up after {expanded} expansions")
        }
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
