use std::collections::HashMap;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::aggregate::{aggregate, Solution};
use crate::cancel::CancelToken;
use crate::cell::AspectId;
use crate::error::ResolveError;
use crate::frame::Frame;
use crate::links::LinkGraph;
use crate::locator::Anchors;
use crate::progress::ProgressSink;
use crate::search::Search;
use crate::supply::{AspectSupply, Count};

/// Tuning for a [`Resolver`]. Defaults match the research assistant this solver was built for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Longest chain, in placements, the search will consider.
    pub max_depth: usize,
    /// Chains longer than this are never recorded. [`None`] leaves the first solution found as the only bound.
    pub step_bound: Option<usize>,
    /// A [`ProgressSink`] hears about the run once every this many expansion attempts.
    pub progress_interval: u64,
    /// Longest wait for a sink to acknowledge a report before the search moves on.
    pub progress_timeout: Duration,
    /// Stop searching this long after the run starts, keeping what was found.
    pub timeout: Option<Duration>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            max_depth: 15,
            step_bound: None,
            progress_interval: 1000,
            progress_timeout: Duration::from_millis(50),
            timeout: None,
        }
    }
}

impl ResolveOptions {
    /// Set [`Self::max_depth`].
    pub fn max_depth(&mut self, max_depth: usize) -> &mut Self {
        self.max_depth = max_depth;
        self
    }

    /// Set [`Self::step_bound`].
    pub fn step_bound(&mut self, step_bound: Option<usize>) -> &mut Self {
        self.step_bound = step_bound;
        self
    }

    /// Set [`Self::progress_interval`]. Zero is treated as one.
    pub fn progress_interval(&mut self, progress_interval: u64) -> &mut Self {
        self.progress_interval = progress_interval;
        self
    }

    /// Set [`Self::progress_timeout`].
    pub fn progress_timeout(&mut self, progress_timeout: Duration) -> &mut Self {
        self.progress_timeout = progress_timeout;
        self
    }

    /// Set [`Self::timeout`].
    pub fn timeout(&mut self, timeout: Option<Duration>) -> &mut Self {
        self.timeout = timeout;
        self
    }
}

/// The outcome of [`Resolver::run`].
#[derive(Clone, Debug)]
pub struct Resolution {
    /// Shortest solutions, one per remaining-supply signature, in no particular order.
    pub solutions: Vec<Solution>,
    /// Expansion attempts made.
    pub expansions: u64,
    /// Solutions recorded before aggregation.
    pub candidates: usize,
    /// Whether the run stopped early on its [`CancelToken`] or timeout.
    pub cancelled: bool,
}

/// Finds the shortest ways to link every goal of a [`Frame`] to its start using aspects from an [`AspectSupply`].
///
/// The first aspect cell of the frame in row-major order is the start; every other aspect cell is a goal.
/// Chains grow from the start one empty neighbor at a time, each aspect linked to the one before it in the [`LinkGraph`].
#[derive(Clone, Debug)]
pub struct Resolver<'l> {
    links: &'l LinkGraph,
    options: ResolveOptions,
}

impl Resolver<'static> {
    /// A resolver over [`LinkGraph::standard`].
    pub fn standard() -> Self {
        Self::new(LinkGraph::standard())
    }
}

impl<'l> Resolver<'l> {
    /// A resolver over `links` with default options.
    pub fn new(links: &'l LinkGraph) -> Self {
        Self {
            links,
            options: ResolveOptions::default(),
        }
    }

    /// Replace the options wholesale.
    pub fn with_options(mut self, options: ResolveOptions) -> Self {
        self.options = options;
        self
    }

    /// Current options.
    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    /// The link graph chains are checked against.
    pub fn links(&self) -> &'l LinkGraph {
        self.links
    }

    /// Solve `frame` with `supply`, without progress reporting or external cancellation.
    pub fn resolve(&self, supply: &AspectSupply, frame: &Frame) -> Result<Vec<Solution>, ResolveError> {
        Ok(self.run(supply, frame, None, &CancelToken::new())?.solutions)
    }

    /// Solve `frame` with `supply`, reporting to `progress` and stopping early once `cancel` trips.
    ///
    /// Fails only on malformed input: a frame without a start cell or a supply that does not match the link graph.
    /// A cancelled run returns whatever it found, possibly nothing.
    pub fn run(
        &self,
        supply: &AspectSupply,
        frame: &Frame,
        progress: Option<&mut dyn ProgressSink>,
        cancel: &CancelToken,
    ) -> Result<Resolution, ResolveError> {
        if !supply.matches(self.links) {
            return Err(ResolveError::SupplyLength { expected: self.links.aspect_count(), actual: supply.len() });
        }

        let anchors = Anchors::locate(frame)?;
        if anchors.goals.is_empty() {
            warn!(start = ?anchors.start, "frame has no goals; the empty chain solves it");
        }

        let cancel = match self.options.timeout {
            Some(timeout) => cancel.clone().with_timeout(timeout),
            None => cancel.clone(),
        };

        info!(
            goals = anchors.goals.len(),
            supply = supply.total(),
            max_depth = self.options.max_depth,
            "resolving frame"
        );

        let mut progress = progress;
        let sink: Option<&mut dyn ProgressSink> = match progress.as_mut() {
            Some(sink) => Some(&mut **sink),
            None => None,
        };

        let mut search = Search::new(self.links, &self.options, &cancel, sink, anchors, frame.clone(), supply.clone());
        search.run();

        let expansions = search.expansions();
        let cancelled = search.cancelled();
        let candidates = search.into_candidates();
        let candidate_count = candidates.len();
        let solutions = aggregate(candidates);

        info!(
            expansions,
            candidates = candidate_count,
            solutions = solutions.len(),
            steps = ?solutions.first().map(Solution::steps),
            cancelled,
            "resolve finished"
        );

        Ok(Resolution {
            solutions,
            expansions,
            candidates: candidate_count,
            cancelled,
        })
    }
}

/// A run executing on its own thread, started by [`Resolver::spawn`].
#[derive(Debug)]
pub struct ResolveTask {
    cancel: CancelToken,
    handle: JoinHandle<Result<Resolution, ResolveError>>,
}

impl ResolveTask {
    /// Ask the run to stop. It returns what it has found so far.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// The token the run polls. Clones of it cancel the run too.
    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    /// Whether the run has ended, without blocking.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the run to end.
    pub fn join(self) -> Result<Resolution, ResolveError> {
        self.handle.join().map_err(|_| ResolveError::WorkerPanicked)?
    }
}

impl Resolver<'static> {
    /// Run on a dedicated thread so the caller stays responsive. The returned task can cancel the run or wait for it.
    pub fn spawn(
        &self,
        supply: AspectSupply,
        frame: Frame,
        progress: Option<Box<dyn ProgressSink + Send>>,
    ) -> ResolveTask {
        let cancel = CancelToken::new();
        let resolver = self.clone();
        let token = cancel.clone();
        let handle = thread::spawn(move || {
            let mut progress = progress;
            let sink = progress.as_mut().map(|sink| sink.as_mut() as &mut dyn ProgressSink);
            resolver.run(&supply, &frame, sink, &token)
        });

        ResolveTask { cancel, handle }
    }
}

/// Solve a frame given in the host encoding on the standard `11 x 10` layout and standard link graph.
///
/// `supply` maps aspect ids to available counts; `grid` holds `-1` for empty cells and aspect ids for the start and goals.
/// `options` carries the depth bound, step bound and progress cadence; pass `&ResolveOptions::default()` for the usual ones.
/// The search stops at `deadline` or after `options.timeout`, whichever comes first, returning whatever it found by then.
pub fn resolve(
    supply: &HashMap<AspectId, Count>,
    grid: &[i32],
    options: &ResolveOptions,
    progress: Option<&mut dyn ProgressSink>,
    deadline: Option<Instant>,
) -> Result<Vec<Solution>, ResolveError> {
    let links = LinkGraph::standard();
    let supply = AspectSupply::new(links, supply.iter().map(|(aspect, count)| (*aspect, *count)))?;
    let frame = Frame::from_encoded(Frame::standard_dims(), grid)?;

    let cancel = match deadline {
        Some(deadline) => CancelToken::new().with_deadline(deadline),
        None => CancelToken::new(),
    };

    Ok(Resolver::standard().with_options(options.clone()).run(&supply, &frame, progress, &cancel)?.solutions)
}
