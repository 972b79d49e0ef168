//! A pure-Rust library providing dense, fixed-shape N-dimensional grids.
//!
//! [`Grid<S, T>`] represents a grid of `T`s whose shape `S` is known at
//! compile time. The `T` values are internally stored in a [`Box<[T]>`], a
//! dense 1-dimensional representation in row-major order (last axis varies
//! fastest). The purpose of the `Grid` wrapper is to make that flat buffer
//! addressable by coordinate: `grid[[2, 0, 2]]` and `grid[14]` name the same
//! cell of a `Grid<Shape3D<4, 2, 3>, T>`, and the translation between the
//! two is a pure O(1) computation with no lookup table.
//!
//! Trait [`Shape`] carries the axis extents as const generics, so the
//! coordinate ↔ index codec is fixed per type. The codec itself is exposed
//! three ways: validated, through [`Shape::flatten`]/[`Shape::unflatten`]
//! and the corresponding [`Grid`] methods; fallibly, through
//! [`Shape::try_flatten`] and the `get*` accessors; and unvalidated but
//! `const`-evaluable, through the free functions in [`shape`].
//!
//! [`stencil()`] reports the flat indices of a cell's nearest neighbors
//! along each axis, the access pattern of finite-difference codes. An
//! absent neighbor (one that would step off an axis) is an explicit `None`
//! in the result, never an error.

pub mod shape;
pub use shape::{Shape, Shape1D, Shape2D, Shape3D, Shape4D, Shape5D, Shape6D};

mod grid;
pub use grid::{Grid, GridError};

mod stencil;
pub use stencil::{stencil};
