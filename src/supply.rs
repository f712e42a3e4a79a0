use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::cell::AspectId;
use crate::error::ResolveError;
use crate::links::LinkGraph;

/// Number of placeable tokens of one aspect type.
pub type Count = u32;

/// Remaining placeable tokens per aspect type, laid out in the canonical aspect order of a [`LinkGraph`].
///
/// Counts are unsigned and [`take`](Self::take) refuses exhausted slots, so a supply can never go negative.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AspectSupply {
    slots: Vec<(AspectId, Count)>,
}

/// The remaining counts of a supply, slot by slot. Two solutions with equal signatures used the same multiset of aspects.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SupplySignature(Vec<Count>);

impl AspectSupply {
    /// A supply with nothing left of any aspect known to `links`.
    pub fn empty(links: &LinkGraph) -> Self {
        Self {
            slots: links.aspects().map(|aspect| (aspect, 0)).collect_vec(),
        }
    }

    /// Build a supply from `(aspect, count)` pairs. Repeated aspects accumulate; aspects not mentioned start at zero.
    pub fn new(links: &LinkGraph, counts: impl IntoIterator<Item = (AspectId, Count)>) -> Result<Self, ResolveError> {
        let mut supply = Self::empty(links);
        for (aspect, count) in counts {
            let slot = links.slot_of(aspect).ok_or(ResolveError::UnknownAspect { aspect })?;
            supply.slots[slot].1 = supply.slots[slot].1.saturating_add(count);
        }

        Ok(supply)
    }

    /// Build a supply from counts given positionally in canonical aspect order, the way the host passes them.
    pub fn from_counts(links: &LinkGraph, counts: &[Count]) -> Result<Self, ResolveError> {
        if counts.len() != links.aspect_count() {
            return Err(ResolveError::SupplyLength { expected: links.aspect_count(), actual: counts.len() });
        }

        Ok(Self {
            slots: links.aspects().zip(counts.iter().copied()).collect_vec(),
        })
    }

    /// Remaining count of `aspect`, or [`None`] if this supply does not know it.
    pub fn remaining(&self, aspect: AspectId) -> Option<Count> {
        self.slots.iter().find(|(a, _)| *a == aspect).map(|(_, count)| *count)
    }

    /// Total tokens left across all aspects.
    pub fn total(&self) -> u64 {
        self.slots.iter().map(|(_, count)| u64::from(*count)).sum()
    }

    /// The remaining counts, slot by slot.
    pub fn signature(&self) -> SupplySignature {
        SupplySignature(self.slots.iter().map(|(_, count)| *count).collect_vec())
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn slot(&self, slot: usize) -> (AspectId, Count) {
        self.slots[slot]
    }

    /// Whether every slot lines up with the canonical order of `links`.
    pub(crate) fn matches(&self, links: &LinkGraph) -> bool {
        self.slots.len() == links.aspect_count()
            && self.slots.iter().map(|(aspect, _)| *aspect).eq(links.aspects())
    }

    /// Take one token from `slot`, returning its aspect, or [`None`] if the slot is exhausted.
    pub(crate) fn take(&mut self, slot: usize) -> Option<AspectId> {
        let (aspect, count) = self.slots.get_mut(slot)?;
        *count = count.checked_sub(1)?;
        Some(*aspect)
    }

    /// Put back a token previously removed with [`Self::take`].
    pub(crate) fn restore(&mut self, slot: usize) {
        if let Some((_, count)) = self.slots.get_mut(slot) {
            *count += 1;
        }
    }
}

impl Display for SupplySignature {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join(","))
    }
}
