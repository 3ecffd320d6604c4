//! Error taxonomy for the mosaic model.
//!
//! An empty grid cell is never an error; lookups that can miss return
//! `Option` instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::TileId;

/// A placed tile references an id the catalog does not define.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("tile id {0} is not in the catalog")]
pub struct UnknownTileError(pub TileId);

/// [`neighbor`](crate::geometry::neighbor) was called with a direction outside `0..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("direction {0} is outside 0..=5")]
pub struct InvalidDirectionError(pub u8);

/// Failure while reading a catalog or grid definition file.
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The contents are not valid RON for the expected shape.
    #[error("malformed definition: {0}")]
    Parse(#[from] ron::error::SpannedError),
    /// A tile segment names an edge outside `0..=5`.
    #[error("tile {id} ({name}) uses edge {edge}, expected 0..=5")]
    EdgeOutOfRange {
        /// Offending tile.
        id: TileId,
        /// Its display name.
        name: String,
        /// The bad edge value.
        edge: u8,
    },
    /// Two catalog entries share an id.
    #[error("tile id {0} is defined more than once")]
    DuplicateTile(TileId),
}
