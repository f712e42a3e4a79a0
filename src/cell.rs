use std::fmt::{Display, Formatter};

/// Identifier of an aspect type. Valid ids are positive.
pub type AspectId = u32;

/// The host encoding of an empty cell.
pub const EMPTY_CODE: i32 = -1;
/// The host encoding written for [`Cell::Void`] when re-encoding a frame.
pub const VOID_CODE: i32 = -2;

/// The content of one frame position.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Cell {
    /// Holds an aspect, either placed by the search or present from the start as a start/goal marker.
    Aspect(AspectId),
    /// Available for placement.
    #[default]
    Empty,
    /// Not part of the playable board. Never filled and never traversed.
    Void,
}

impl Cell {
    /// Decode a cell from the host integer encoding: `-1` is empty, positive values are aspect ids, and anything else is void.
    pub fn decode(value: i32) -> Self {
        match value {
            EMPTY_CODE => Self::Empty,
            v if v > 0 => Self::Aspect(v.unsigned_abs()),
            _ => Self::Void,
        }
    }

    /// Encode this cell for the host. Aspect ids beyond `i32::MAX` cannot come from [`Self::decode`] and saturate.
    pub fn encode(&self) -> i32 {
        match self {
            Self::Aspect(id) => i32::try_from(*id).unwrap_or(i32::MAX),
            Self::Empty => EMPTY_CODE,
            Self::Void => VOID_CODE,
        }
    }

    /// The aspect held here, if any.
    pub fn aspect(&self) -> Option<AspectId> {
        match self {
            Self::Aspect(id) => Some(*id),
            _ => None,
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Aspect(id) => write!(f, "{id}"),
            Self::Empty => write!(f, "."),
            Self::Void => write!(f, "#"),
        }
    }
}
