//! Axis-aligned neighbor queries over flat indices.

use super::{Grid, Shape};

/// Returns the flat indices of the cells `order` steps away from `center`
/// along each axis, in both directions.
///
/// The result is axis-major: entry `i` holds the two neighbors along axis
/// `i`, negative direction first. A neighbor is `None` exactly when the step
/// leaves the valid coordinate range of its axis; a step is never allowed to
/// wrap into an adjacent row of another axis, even though the wrapped flat
/// index would be in range.
///
/// Panics if `order` is zero or `center` is not a valid flat index.
///
/// ```
/// use ndgrid::{stencil, Shape1D, Shape2D};
/// assert_eq!(stencil::<Shape1D<5>, 1>(1, 2), [[Some(1), Some(3)]]);
/// assert_eq!(stencil::<Shape1D<5>, 1>(1, 0), [[None, Some(1)]]);
/// // Along the last axis of a 2×3 grid, cell 2 sits at the row end: its
/// // positive neighbor is absent, not cell 3 in the next row.
/// assert_eq!(stencil::<Shape2D<2, 3>, 2>(1, 2), [
///     [None, Some(5)],
///     [Some(1), None],
/// ]);
/// ```
pub fn stencil<S, const N: usize>(order: usize, center: usize) -> [[Option<usize>; 2]; N] where
    S: Shape<Coord=[usize; N]>,
{
    assert!(order > 0, "Stencil order must be at least 1");
    let coord = S::unflatten(center);
    let strides = S::strides();
    let mut neighbors = [[None; 2]; N];
    for axis in 0..N {
        if order <= coord[axis] {
            neighbors[axis][0] = Some(center - order * strides[axis]);
        }
        if order < S::EXTENTS[axis] - coord[axis] {
            neighbors[axis][1] = Some(center + order * strides[axis]);
        }
    }
    neighbors
}

impl<S: Shape, T> Grid<S, T> {
    /// The neighbors of the cell at flat index `center`, `order` steps away
    /// along each axis. See [`stencil()`].
    ///
    /// ```
    /// use ndgrid::{Grid, Shape3D};
    /// let grid: Grid<Shape3D<4, 2, 3>, u8> = Grid::new();
    /// assert_eq!(grid.stencil(1, 14), [
    ///     [Some(8), Some(20)], // one step along the axis of stride 6
    ///     [None, Some(17)],    // coordinate 0 of 2: no negative neighbor
    ///     [Some(13), None],    // coordinate 2 of 3: no positive neighbor
    /// ]);
    /// ```
    pub fn stencil<const N: usize>(&self, order: usize, center: usize)
    -> [[Option<usize>; 2]; N] where
        S: Shape<Coord=[usize; N]>,
    {
        stencil::<S, N>(order, center)
    }
}

// ----------------------------------------------------------------------------
