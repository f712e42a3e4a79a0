//! The backtracking search.
//!
//! A [`Search`] grows a single chain of placements outward from the start cell.
//! Each step puts one aspect from the supply on an empty neighbor of the chain's tip, provided it is linked to the tip's aspect,
//! and the placed cell becomes the new tip.
//! After every placement the full set of goals is checked with [`all_reachable`]; a frame linking them all is recorded as a [`Candidate`].
//!
//! Branches stop early when the run is cancelled, when the chain has grown past the configured depth,
//! or when it is already longer than the best candidate recorded so far.
//! Candidates of equal length are all kept so that aggregation can choose among them.

use std::ops::{Deref, DerefMut};

use crossbeam_channel::RecvTimeoutError;
use tracing::{debug, trace};

use crate::aggregate::Candidate;
use crate::cancel::CancelToken;
use crate::cell::Cell;
use crate::connectivity::all_reachable;
use crate::frame::Frame;
use crate::links::LinkGraph;
use crate::locator::Anchors;
use crate::location::Location;
use crate::progress::{Ack, ProgressReport, ProgressSink};
use crate::shape::{BoardShape, HexStep};
use crate::solver::ResolveOptions;
use crate::supply::AspectSupply;

/// The state of one run. Owns the frame and supply it mutates; nothing else sees them until the run ends.
pub(crate) struct Search<'r> {
    links: &'r LinkGraph,
    options: &'r ResolveOptions,
    cancel: &'r CancelToken,
    progress: Option<&'r mut dyn ProgressSink>,
    anchors: Anchors,
    frame: Frame,
    supply: AspectSupply,
    best: usize,
    expansions: u64,
    cancelled: bool,
    found: Vec<Candidate>,
}

/// One aspect taken from the supply and written to the frame. Dropping it puts both back.
struct Placement<'s, 'r> {
    search: &'s mut Search<'r>,
    at: Location,
    slot: usize,
}

impl<'s, 'r> Placement<'s, 'r> {
    fn new(search: &'s mut Search<'r>, at: Location, slot: usize) -> Option<Self> {
        let aspect = search.supply.take(slot)?;
        search.frame.set(at, Cell::Aspect(aspect));
        Some(Self { search, at, slot })
    }
}

impl Drop for Placement<'_, '_> {
    fn drop(&mut self) {
        self.search.frame.set(self.at, Cell::Empty);
        self.search.supply.restore(self.slot);
    }
}

impl<'r> Deref for Placement<'_, 'r> {
    type Target = Search<'r>;

    fn deref(&self) -> &Self::Target {
        self.search
    }
}

impl DerefMut for Placement<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.search
    }
}

impl<'r> Search<'r> {
    pub(crate) fn new(
        links: &'r LinkGraph,
        options: &'r ResolveOptions,
        cancel: &'r CancelToken,
        progress: Option<&'r mut dyn ProgressSink>,
        anchors: Anchors,
        frame: Frame,
        supply: AspectSupply,
    ) -> Self {
        Self {
            links,
            options,
            cancel,
            progress,
            anchors,
            frame,
            supply,
            best: options.step_bound.unwrap_or(usize::MAX),
            expansions: 0,
            cancelled: false,
            found: Vec::new(),
        }
    }

    /// Explore every chain from the start cell.
    pub(crate) fn run(&mut self) {
        let start = self.anchors.start;
        self.explore(start, 0);
    }

    fn explore(&mut self, tip: Location, steps: usize) {
        if self.cancel.is_cancelled() {
            if !self.cancelled {
                debug!(steps, expansions = self.expansions, "search cancelled");
            }
            self.cancelled = true;
            return;
        }

        if steps > self.best || steps > self.options.max_depth {
            return;
        }

        if all_reachable(&self.frame, self.links, &self.anchors.goals, self.anchors.start) {
            self.record(steps);
            return;
        }

        let Some(tip_aspect) = self.frame.get(tip).aspect() else {
            return;
        };

        for (_, next) in HexStep::neighbors_of(tip, self.frame.dims()) {
            self.expansions += 1;
            self.sample_progress(steps);

            if self.frame.get(next) != Cell::Empty {
                continue;
            }

            for slot in 0..self.supply.len() {
                let (aspect, remaining) = self.supply.slot(slot);
                if remaining == 0 || !self.links.linked(aspect, tip_aspect) {
                    continue;
                }

                if let Some(mut placed) = Placement::new(self, next, slot) {
                    placed.explore(next, steps + 1);
                }

                if self.cancelled {
                    return;
                }
            }
        }
    }

    fn record(&mut self, steps: usize) {
        if steps < self.best {
            debug!(steps, candidates = self.found.len(), "new shortest chain");
            self.best = steps;
        }

        self.found.push(Candidate {
            frame: self.frame.clone(),
            steps,
            signature: self.supply.signature(),
        });
    }

    fn sample_progress(&mut self, steps: usize) {
        let interval = self.options.progress_interval.max(1);
        if self.expansions % interval != 0 {
            return;
        }

        let Some(sink) = self.progress.as_deref_mut() else {
            return;
        };

        let report = ProgressReport {
            expansions: self.expansions,
            solutions: self.found.len(),
            steps,
        };

        if let Ack::Pending(acked) = sink.report(report) {
            if let Err(RecvTimeoutError::Timeout) = acked.recv_timeout(self.options.progress_timeout) {
                trace!(expansions = self.expansions, "progress acknowledgement timed out");
            }
        }
    }

    pub(crate) fn expansions(&self) -> u64 {
        self.expansions
    }

    pub(crate) fn cancelled(&self) -> bool {
        self.cancelled
    }

    #[cfg(test)]
    pub(crate) fn frame(&self) -> &Frame {
        &self.frame
    }

    #[cfg(test)]
    pub(crate) fn supply(&self) -> &AspectSupply {
        &self.supply
    }

    /// Consume the run, yielding every candidate recorded, in discovery order.
    pub(crate) fn into_candidates(self) -> Vec<Candidate> {
        self.found
    }
}
