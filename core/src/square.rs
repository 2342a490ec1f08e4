use core::fmt;
use core::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::*;

/// Occupancy and attack outcome of a single square.
///
/// The grid only stores this value; transitions are driven by game logic.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SquareState {
    Empty,
    Hidden,
    Hit,
    Miss,
    Sunk,
}

impl SquareState {
    /// Whether the square has already been fired upon.
    pub const fn is_attacked(self) -> bool {
        matches!(self, Self::Hit | Self::Miss | Self::Sunk)
    }

    pub const fn name(self) -> &'static str {
        use SquareState::*;
        match self {
            Empty => "EMPTY",
            Hidden => "HIDDEN",
            Hit => "HIT",
            Miss => "MISS",
            Sunk => "SUNK",
        }
    }
}

impl Default for SquareState {
    fn default() -> Self {
        Self::Empty
    }
}

impl fmt::Display for SquareState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single location on the grid.
///
/// Identity is the `(x, y)` pair alone: labels, highlight and state are left out of
/// `PartialEq` and `Hash`, so `Square::new(x, y)` can stand in for the grid-owned cell
/// at the same coordinates.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Square {
    pub x: Coord,
    pub y: Coord,
    /// Glyph shown to every observer.
    pub pub_label: Option<char>,
    /// Glyph shown only to the owner of the board.
    pub prv_label: Option<char>,
    pub highlight: Option<char>,
    #[serde(default)]
    pub state: SquareState,
}

impl Square {
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self {
            x,
            y,
            pub_label: None,
            prv_label: None,
            highlight: None,
            state: SquareState::Empty,
        }
    }

    pub const fn with_labels(mut self, pub_label: Option<char>, prv_label: Option<char>) -> Self {
        self.pub_label = pub_label;
        self.prv_label = prv_label;
        self
    }

    pub const fn with_highlight(mut self, highlight: char) -> Self {
        self.highlight = Some(highlight);
        self
    }

    pub const fn coords(&self) -> Coord2 {
        (self.x, self.y)
    }

    /// The private label when `private` is set, the public one otherwise.
    pub const fn label(&self, private: bool) -> Option<char> {
        if private {
            self.prv_label
        } else {
            self.pub_label
        }
    }

    pub const fn state(&self) -> SquareState {
        self.state
    }

    /// Replace the state, returning the previous one.
    pub fn set_state(&mut self, state: SquareState) -> SquareState {
        core::mem::replace(&mut self.state, state)
    }
}

impl From<Coord2> for Square {
    fn from((x, y): Coord2) -> Self {
        Self::new(x, y)
    }
}

impl PartialEq for Square {
    fn eq(&self, other: &Self) -> bool {
        self.coords() == other.coords()
    }
}

impl Eq for Square {}

impl Hash for Square {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coords().hash(state);
    }
}

struct LabelDisplay(Option<char>);

impl fmt::Display for LabelDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(label) => write!(f, "{label}"),
            None => f.write_str("None"),
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sq x{} y{} pub:{} prv:{} state:{}",
            self.x,
            self.y,
            LabelDisplay(self.pub_label),
            LabelDisplay(self.prv_label),
            self.state
        )
    }
}
