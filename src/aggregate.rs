use itertools::Itertools;

use crate::frame::Frame;
use crate::supply::SupplySignature;

/// A frame that linked every goal, as recorded during the search.
#[derive(Clone, Debug)]
pub(crate) struct Candidate {
    pub(crate) frame: Frame,
    pub(crate) steps: usize,
    pub(crate) signature: SupplySignature,
}

/// A minimal way of linking every goal to the start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    frame: Frame,
    steps: usize,
    signature: SupplySignature,
}

impl Solution {
    /// The solved frame: the input frame with the chain's aspects placed.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Number of aspects placed, which is also the number of cells differing from the input frame.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// What remained of the supply once this chain was placed. Unique within one resolve result.
    pub fn signature(&self) -> &SupplySignature {
        &self.signature
    }

    /// Take the solved frame.
    pub fn into_frame(self) -> Frame {
        self.frame
    }
}

impl From<Candidate> for Solution {
    fn from(candidate: Candidate) -> Self {
        Self {
            frame: candidate.frame,
            steps: candidate.steps,
            signature: candidate.signature,
        }
    }
}

/// Keep only the shortest candidates, one per remaining-supply signature; the first one found wins.
/// No candidates is an empty answer, not an error.
pub(crate) fn aggregate(candidates: Vec<Candidate>) -> Vec<Solution> {
    let Some(shortest) = candidates.iter().map(|candidate| candidate.steps).min() else {
        return Vec::new();
    };

    candidates.into_iter()
        .filter(|candidate| candidate.steps == shortest)
        .unique_by(|candidate| candidate.signature.clone())
        .map(Solution::from)
        .collect_vec()
}
