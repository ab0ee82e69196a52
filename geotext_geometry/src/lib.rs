//! Typed GeoJSON geometries and their text/document codecs.
//!
//! - [`types`]: the six primitives. Polygons validate their rings on construction.
//! - [`Geometry`]: a closed enum holding one primitive or nothing.
//! - [`grammar`]: parser and serializer for nested coordinate arrays (`[[10,2],[11,3]]`).
//! - [`document`]: `{"type": ..., "coordinates": ...}` nodes over any [`DocumentTree`].

mod config;
pub mod document;
mod error;
mod geometry;
pub mod grammar;
mod kind;
pub mod types;

pub use config::*;
pub use document::DocumentTree;
pub use error::*;
pub use geometry::*;
pub use grammar::{CoordinateGrammar, parse_coordinates, to_coordinates_string};
pub use kind::*;
pub use types::*;
