//! Low-level building blocks of the geotext workspace:
//!
//! - [`byte_iterator`]: a position-tracking scanner over in-memory text with small parsing helpers
//!   for tags, numbers, quoted strings, arrays and objects.
//! - [`json`]: a minimal JSON document tree (`JsonValue`, `JsonObject`, `JsonArray`) with a parser
//!   and compact/pretty stringifiers.

pub mod byte_iterator;
pub mod json;
