//! A* search engine.

use std::collections::HashMap;

use log::{debug, trace};
use sitepath_core::{Bounds, Position};

use crate::config::SearchConfig;
use crate::error::GridError;
use crate::frontier::{Entry, Frontier};
use crate::grid::Grid;
use crate::path::Path;
use crate::traits::AstarPather;

/// Result of a search that passed its endpoint checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// An optimal route from start to goal.
    Found(Path),
    /// The frontier was exhausted without reaching the goal.
    NoPath,
    /// The expansion ceiling from [`SearchConfig`] was reached first.
    Aborted { expanded: usize },
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found(path) => Some(path),
            _ => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            Self::Found(path) => Some(path),
            _ => None,
        }
    }
}

impl Grid {
    /// Compute an optimal route from `start` to `goal`.
    ///
    /// Fails with `OutOfBounds` if either endpoint is outside the grid and
    /// with `UnreachableEndpoint` if either is an obstacle. A search that
    /// completes without reaching the goal yields [`SearchOutcome::NoPath`].
    pub fn find_optimal_path(
        &self,
        start: Position,
        goal: Position,
    ) -> Result<SearchOutcome, GridError> {
        self.find_optimal_path_with(start, goal, &SearchConfig::UNBOUNDED)
    }

    /// Like [`find_optimal_path`](Self::find_optimal_path), stopping with
    /// [`SearchOutcome::Aborted`] once `config.max_expansions` nodes have
    /// been expanded.
    pub fn find_optimal_path_with(
        &self,
        start: Position,
        goal: Position,
        config: &SearchConfig,
    ) -> Result<SearchOutcome, GridError> {
        let start_key = self.key(start)?;
        let goal_key = self.key(goal)?;
        for p in [start, goal] {
            if self.is_obstacle(p) {
                return Err(GridError::UnreachableEndpoint(p));
            }
        }

        Ok(search_keys(self, self.bounds(), start_key, goal_key, config))
    }
}

/// Run A* with any [`AstarPather`] over the cells of `bounds`.
///
/// Neighbors outside `bounds` are ignored. Returns `None` if `start` or
/// `goal` lies outside `bounds`; endpoint passability is the caller's
/// concern.
pub fn astar<P: AstarPather>(
    pather: &P,
    bounds: Bounds,
    start: Position,
    goal: Position,
    config: &SearchConfig,
) -> Option<SearchOutcome> {
    let start_key = bounds.key(start)?;
    let goal_key = bounds.key(goal)?;
    Some(search_keys(pather, bounds, start_key, goal_key, config))
}

fn search_keys<P: AstarPather>(
    pather: &P,
    bounds: Bounds,
    start_key: usize,
    goal_key: usize,
    config: &SearchConfig,
) -> SearchOutcome {
    let start = bounds.position(start_key);
    let goal = bounds.position(goal_key);
    if start_key == goal_key {
        return SearchOutcome::Found(Path::from(vec![start]));
    }

    debug!("searching {start} -> {goal} on {bounds}");
    let outcome = Search::new(pather, bounds, start_key, goal_key).run(config);
    match &outcome {
        SearchOutcome::Found(path) => {
            debug!("found {start} -> {goal} in {} steps", path.steps())
        }
        SearchOutcome::NoPath => debug!("no path {start} -> {goal}"),
        SearchOutcome::Aborted { expanded } => {
            debug!("aborted {start} -> {goal} after {expanded} expansions")
        }
    }
    outcome
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Per-node scores, created fresh for each search.
#[derive(Clone, Copy, Debug)]
struct Node {
    g: u64,
    f: u64,
    parent: Option<usize>,
    /// Recorded but not yet expanded at its current `g`.
    open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SearchState {
    Running,
    Found,
    Exhausted,
    Aborted,
}

/// One A* invocation. Owns its frontier, score table and predecessor links.
///
/// Scores are keyed by canonical cell key and only exist for discovered
/// cells, so memory follows the search, not the grid.
struct Search<'a, P> {
    pather: &'a P,
    bounds: Bounds,
    goal: Position,
    goal_key: usize,
    nodes: HashMap<usize, Node>,
    frontier: Frontier,
    nbuf: Vec<Position>,
    expanded: usize,
}

impl<'a, P: AstarPather> Search<'a, P> {
    fn new(pather: &'a P, bounds: Bounds, start_key: usize, goal_key: usize) -> Self {
        let start = bounds.position(start_key);
        let goal = bounds.position(goal_key);
        let f = u64::from(pather.estimate(start, goal));
        let mut nodes = HashMap::new();
        nodes.insert(
            start_key,
            Node {
                g: 0,
                f,
                parent: None,
                open: true,
            },
        );
        let mut frontier = Frontier::new();
        frontier.push(Entry {
            f,
            g: 0,
            pos: start,
            key: start_key,
        });
        Self {
            pather,
            bounds,
            goal,
            goal_key,
            nodes,
            frontier,
            nbuf: Vec::with_capacity(8),
            expanded: 0,
        }
    }

    fn run(mut self, config: &SearchConfig) -> SearchOutcome {
        let state = loop {
            match self.step(config.max_expansions) {
                SearchState::Running => continue,
                terminal => break terminal,
            }
        };
        match state {
            SearchState::Found => SearchOutcome::Found(Path::reconstruct(
                self.bounds,
                self.goal_key,
                |k| self.nodes.get(&k).and_then(|n| n.parent),
            )),
            SearchState::Aborted => SearchOutcome::Aborted {
                expanded: self.expanded,
            },
            SearchState::Exhausted | SearchState::Running => SearchOutcome::NoPath,
        }
    }

    /// Pop one frontier entry and expand it.
    fn step(&mut self, max_expansions: Option<usize>) -> SearchState {
        let Some(current) = self.frontier.pop() else {
            return SearchState::Exhausted;
        };
        let ci = current.key;

        // Skip entries superseded by a cheaper one or already expanded.
        match self.nodes.get(&ci) {
            Some(n) if n.open && n.g == current.g && n.f == current.f => {}
            _ => return SearchState::Running,
        }

        if ci == self.goal_key {
            return SearchState::Found;
        }
        if max_expansions.is_some_and(|max| self.expanded >= max) {
            return SearchState::Aborted;
        }

        self.expand(current);
        SearchState::Running
    }

    fn expand(&mut self, current: Entry) {
        if let Some(n) = self.nodes.get_mut(&current.key) {
            n.open = false;
        }
        self.expanded += 1;
        trace!(
            "expand {} g={} f={} (#{})",
            current.pos, current.g, current.f, self.expanded
        );

        self.nbuf.clear();
        self.pather.neighbors(current.pos, &mut self.nbuf);

        for &np in &self.nbuf {
            let Some(ni) = self.bounds.key(np) else {
                continue;
            };
            let tentative_g = current.g + u64::from(self.pather.cost(current.pos, np));
            if let Some(n) = self.nodes.get(&ni) {
                if tentative_g >= n.g {
                    continue;
                }
            }

            let f = tentative_g + u64::from(self.pather.estimate(np, self.goal));
            self.nodes.insert(
                ni,
                Node {
                    g: tentative_g,
                    f,
                    parent: Some(current.key),
                    open: true,
                },
            );
            self.frontier.push(Entry {
                f,
                g: tentative_g,
                pos: np,
                key: ni,
            });
        }
    }
}
