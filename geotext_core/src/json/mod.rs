//! A minimal JSON document tree.
//!
//! [`JsonValue`] is the node type; [`JsonObject`] keeps its keys in insertion order so documents
//! are written back in the order they were built.

mod array;
mod object;
mod parse;
mod stringify;
mod value;

pub use array::JsonArray;
pub use object::JsonObject;
pub use parse::{MAX_JSON_DEPTH, parse_json_iter, parse_json_str};
pub use stringify::{escape_json_string, stringify, stringify_pretty};
pub use value::JsonValue;
