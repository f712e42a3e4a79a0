//! Progress reporting out of a running search.
//!
//! The search samples its expansion counter at a fixed cadence and hands a [`ProgressReport`] to a [`ProgressSink`].
//! A sink may answer at once, or hand back a receiver the search will wait on for a short, bounded time before moving on.
//! Reports are best effort; nothing about the search depends on them arriving.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use tracing::trace;

/// A snapshot of a running search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ProgressReport {
    /// Expansion attempts so far, one per neighbor considered from a chain tip.
    pub expansions: u64,
    /// Solutions recorded so far, before aggregation.
    pub solutions: usize,
    /// Length of the chain being extended when the report was taken.
    pub steps: usize,
}

/// How a sink answers a report.
#[derive(Debug)]
pub enum Ack {
    /// The report was fully handled.
    Done,
    /// The report is being handled elsewhere; a message or disconnect on the receiver acknowledges it.
    Pending(Receiver<()>),
}

/// Consumer of [`ProgressReport`]s.
///
/// Any `FnMut(ProgressReport)` closure is a sink that acknowledges immediately.
pub trait ProgressSink {
    /// Handle one report. Returning [`Ack::Pending`] makes the search wait, briefly, for the acknowledgement.
    fn report(&mut self, report: ProgressReport) -> Ack;
}

impl<F> ProgressSink for F
where
    F: FnMut(ProgressReport),
{
    fn report(&mut self, report: ProgressReport) -> Ack {
        self(report);
        Ack::Done
    }
}

/// A report in flight to a [`ProgressReceiver`], acknowledged by calling [`Self::acknowledge`] or by dropping it.
#[derive(Debug)]
pub struct ProgressEvent {
    /// The snapshot itself.
    pub report: ProgressReport,
    ack: Sender<()>,
}

impl ProgressEvent {
    /// Let the search continue.
    pub fn acknowledge(self) {
        // the search may have stopped waiting already
        let _ = self.ack.send(());
    }
}

/// A sink forwarding reports over a bounded channel to another thread.
///
/// Reports are dropped rather than queued when the consumer falls behind.
#[derive(Debug)]
pub struct ChannelProgress {
    events: Sender<ProgressEvent>,
}

/// The consuming end of a [`ChannelProgress`].
pub type ProgressReceiver = Receiver<ProgressEvent>;

impl ChannelProgress {
    /// Create a sink and its receiver, holding at most `capacity` unread reports.
    pub fn new(capacity: usize) -> (Self, ProgressReceiver) {
        let (events, receiver) = bounded(capacity);
        (Self { events }, receiver)
    }
}

impl ProgressSink for ChannelProgress {
    fn report(&mut self, report: ProgressReport) -> Ack {
        let (ack, acked) = bounded(1);
        match self.events.try_send(ProgressEvent { report, ack }) {
            Ok(()) => Ack::Pending(acked),
            Err(TrySendError::Full(_)) => {
                trace!(expansions = report.expansions, "progress consumer lagging, report dropped");
                Ack::Done
            }
            Err(TrySendError::Disconnected(_)) => Ack::Done,
        }
    }
}
