#![warn(missing_docs)]
//! Hex knot mosaics.
//!
//! A mosaic is a sparse grid of hexagonal cells on axial coordinates. Each
//! cell carries a tile from a fixed catalog of strand patterns, turned by a
//! multiple of 60°, so that strands can run across cell boundaries and form
//! knot and link diagrams.
//!
//! The model ([`catalog`], [`grid`], [`rotation`], [`resolver`]) and the
//! plane geometry ([`geometry`], [`math`]) have no graphics dependency.
//! [`render`] draws through the [`render::Canvas`] trait; [`viewer`] is the
//! interactive bevy backend.

pub mod adjacency;
pub mod catalog;
pub mod definition;
pub mod dump;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod math;
pub mod render;
pub mod resolver;
pub mod rotation;
pub mod viewer;

pub use catalog::{Edge, EdgePair, TileCatalog, TileId, TilePattern};
pub use error::{DefinitionError, InvalidDirectionError, UnknownTileError};
pub use grid::{MosaicGrid, PlacedTile};
pub use resolver::paths_at;
