use alloc::string::String;
use core::fmt;

use ndarray::{Array2, ArrayView1};
use smallvec::SmallVec;

use crate::types::apply_delta;
use crate::*;

/// Fixed-size square board owning one canonical [`Square`] per coordinate.
///
/// Cells are stored row-major and addressed as `[y][x]` with
/// `0 <= x, y < side_length`. The grid never resizes after construction.
#[derive(Clone, Debug)]
pub struct Grid {
    squares: Array2<Square>,
    side_length: Coord,
}

impl Grid {
    /// Create a grid without default labels.
    pub fn new(side_length: Coord) -> Result<Self> {
        Self::from_config(&GridConfig::new(side_length))
    }

    /// Create a grid whose every square starts with the given public and private labels.
    pub fn with_labels(
        side_length: Coord,
        pub_label: Option<char>,
        prv_label: Option<char>,
    ) -> Result<Self> {
        Self::from_config(&GridConfig::new(side_length).with_labels(pub_label, prv_label))
    }

    pub fn from_config(config: &GridConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: &GridConfig) -> Self {
        let side = config.side_length as usize;
        let squares = Array2::from_shape_fn((side, side), |(y, x)| {
            Square::new(x as Coord, y as Coord)
                .with_labels(config.default_public_label, config.default_private_label)
        });
        log::debug!(
            "Created {0}x{0} grid, pub label {1:?}, prv label {2:?}",
            config.side_length,
            config.default_public_label,
            config.default_private_label
        );
        Self {
            squares,
            side_length: config.side_length,
        }
    }

    pub const fn side_length(&self) -> Coord {
        self.side_length
    }

    /// Canonical square with the same coordinates as `probe`.
    ///
    /// # Panics
    ///
    /// Panics if `probe` lies outside the grid. Check with [`Grid::square_valid`] first,
    /// or use [`Grid::get`].
    pub fn get_square(&self, probe: &Square) -> &Square {
        &self.squares[probe.coords().to_nd_index()]
    }

    /// Canonical square at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the grid.
    pub fn get_square_xy(&self, x: Coord, y: Coord) -> &Square {
        &self.squares[(x, y).to_nd_index()]
    }

    /// # Panics
    ///
    /// Panics if `probe` lies outside the grid.
    pub fn get_square_mut(&mut self, probe: &Square) -> &mut Square {
        &mut self.squares[probe.coords().to_nd_index()]
    }

    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the grid.
    pub fn get_square_xy_mut(&mut self, x: Coord, y: Coord) -> &mut Square {
        &mut self.squares[(x, y).to_nd_index()]
    }

    pub fn get(&self, probe: &Square) -> Option<&Square> {
        self.square_valid(probe).then(|| self.get_square(probe))
    }

    pub fn get_xy(&self, x: Coord, y: Coord) -> Option<&Square> {
        self.get(&Square::new(x, y))
    }

    pub fn try_get_square_xy(&self, x: Coord, y: Coord) -> Result<&Square> {
        self.get_xy(x, y).ok_or(GridError::InvalidCoords { x, y })
    }

    /// Whether `probe` lies within the grid bounds.
    pub const fn square_valid(&self, probe: &Square) -> bool {
        0 <= probe.x && probe.x < self.side_length && 0 <= probe.y && probe.y < self.side_length
    }

    /// Square `distance` steps away from `origin` along `direction`.
    ///
    /// Returns `None` when the target falls off the board or `direction` is a
    /// sentinel. Neither the grid nor `origin` is modified, so projections chain
    /// with [`Option::and_then`].
    pub fn projected_from(
        &self,
        origin: &Square,
        direction: Direction,
        distance: Coord,
    ) -> Option<&Square> {
        let target = direction
            .offset(distance)
            .and_then(|delta| apply_delta(origin.coords(), delta));
        let Some(target) = target else {
            log::trace!("No projection from {:?} towards {direction:?}", origin.coords());
            return None;
        };

        let found = self.get(&Square::from(target));
        if found.is_none() {
            log::trace!(
                "Projection from {:?} towards {direction:?} by {distance} leaves the grid at {target:?}",
                origin.coords()
            );
        }
        found
    }

    /// Single-step [`Grid::projected_from`].
    pub fn project(&self, origin: &Square, direction: Direction) -> Option<&Square> {
        self.projected_from(origin, direction, 1)
    }

    /// In-bounds neighbours up, left, right and down of `sq`, in that order.
    pub fn surrounding_squares(&self, sq: &Square) -> SmallVec<[&Square; 4]> {
        self.iter_projections(*sq, &Direction::SURROUNDING).collect()
    }

    /// All in-bounds squares of the ring around `sq`, top row first, left to right.
    pub fn reticle_squares(&self, sq: &Square) -> SmallVec<[&Square; 8]> {
        self.iter_projections(*sq, &Direction::RETICLE).collect()
    }

    fn iter_projections(
        &self,
        origin: Square,
        directions: &'static [Direction],
    ) -> impl Iterator<Item = &Square> {
        directions
            .iter()
            .filter_map(move |&direction| self.project(&origin, direction))
    }

    /// All squares, row by row.
    pub fn iter(&self) -> impl Iterator<Item = &Square> {
        self.squares.iter()
    }

    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, Square>> {
        self.squares.rows().into_iter()
    }

    /// Update the state of the square matching `probe`, returning its previous state.
    pub fn set_state(&mut self, probe: &Square, state: SquareState) -> Result<SquareState> {
        if !self.square_valid(probe) {
            return Err(GridError::InvalidCoords {
                x: probe.x,
                y: probe.y,
            });
        }
        let previous = self.get_square_mut(probe).set_state(state);
        log::trace!("Square {:?} {previous} -> {state}", probe.coords());
        Ok(previous)
    }

    pub fn count_state(&self, state: SquareState) -> usize {
        self.iter().filter(|sq| sq.state == state).count()
    }

    /// Text block of labels: spaces between squares of a row, newlines between rows.
    ///
    /// Shows private labels when `private` is set, public ones otherwise. Squares
    /// without a label render as a single space.
    pub fn grid_string_labels(&self, private: bool) -> String {
        let side = self.side_length as usize;
        let mut out = String::with_capacity(side * side * 2);
        for (row_index, row) in self.rows().enumerate() {
            if row_index > 0 {
                out.push('\n');
            }
            for (col_index, sq) in row.iter().enumerate() {
                if col_index > 0 {
                    out.push(' ');
                }
                out.push(sq.label(private).unwrap_or(' '));
            }
        }
        out
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::build(&GridConfig::default())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.grid_string_labels(false))
    }
}
