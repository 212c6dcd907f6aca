//! Point-in-time copies of the piles.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::zones::Pile;

/// Everything needed to restore a game position.
///
/// History itself is never part of a snapshot. Cloning is cheap because
/// every pile is a persistent vector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Tableau columns, left to right.
    pub tableau: Vector<Pile>,

    /// Face-down reserve.
    pub stock: Pile,

    /// Face-up discard pile.
    pub waste: Pile,

    /// Move counter at the time of capture.
    pub moves: u32,

    /// Selected column at the time of capture.
    pub selected: usize,
}
