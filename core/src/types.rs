/// Single coordinate axis used for square positions, offsets and the grid side length.
///
/// Signed so that probes left of or above the board can be expressed and rejected.
pub type Coord = i32;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    /// Row-major `[y, x]` index into the backing array.
    ///
    /// Negative components wrap to huge indices, which the array rejects with a panic.
    fn to_nd_index(self) -> Self::Output {
        [self.1 as usize, self.0 as usize]
    }
}

/// Applies `delta` to `coords`, returning `None` on arithmetic overflow.
///
/// Bounds are not checked here, see [`crate::Grid::square_valid`].
pub(crate) fn apply_delta(coords: Coord2, delta: Coord2) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;
    Some((x.checked_add(dx)?, y.checked_add(dy)?))
}
