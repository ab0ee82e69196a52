//! The six geometry primitives. Points are leaves; every other type is a composite holding a
//! sequence of one lower-level element type. Polygons validate their rings on construction, the
//! other constructors are infallible.

mod linestring;
mod macros;
mod multi_linestring;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod traits;

pub use linestring::*;
pub use multi_linestring::*;
pub use multi_point::*;
pub use multi_polygon::*;
pub use point::*;
pub use polygon::*;
pub use traits::*;
