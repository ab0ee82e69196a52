//! JSON object with insertion-ordered keys.
use super::{JsonValue, stringify};
use anyhow::{Context, Result};
use std::fmt::{Debug, Display};

/// A JSON object. Keys keep the order in which they were first set.
#[derive(Clone, Default, PartialEq)]
pub struct JsonObject(Vec<(String, JsonValue)>);

impl JsonObject {
	#[must_use]
	pub fn new() -> Self {
		Self(Vec::new())
	}

	/// Parses JSON text whose root must be an object.
	///
	/// # Errors
	/// Returns an error on invalid JSON or when the root is not an object.
	pub fn parse_str(json: &str) -> Result<JsonObject> {
		JsonValue::parse_str(json)?
			.into_object()
			.context("while reading a JSON document")
	}

	/// Sets `key` to `value`. An existing entry keeps its position and is overwritten.
	pub fn set(&mut self, key: &str, value: impl Into<JsonValue>) {
		let value = value.into();
		if let Some(entry) = self.0.iter_mut().find(|(k, _)| k == key) {
			entry.1 = value;
		} else {
			self.0.push((key.to_owned(), value));
		}
	}

	#[must_use]
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&String, &JsonValue)> {
		self.0.iter().map(|(k, v)| (k, v))
	}

	/// Compact JSON text.
	#[must_use]
	pub fn stringify(&self) -> String {
		stringify(&JsonValue::Object(self.clone()))
	}

	/// Multi-line JSON text indented by two spaces.
	#[must_use]
	pub fn stringify_pretty(&self) -> String {
		super::stringify_pretty(&JsonValue::Object(self.clone()))
	}
}

impl Debug for JsonObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.0.iter().map(|(k, v)| (k, v))).finish()
	}
}

impl Display for JsonObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.stringify())
	}
}

impl<T> From<Vec<(&str, T)>> for JsonObject
where
	JsonValue: From<T>,
{
	fn from(input: Vec<(&str, T)>) -> Self {
		let mut object = JsonObject::new();
		for (key, value) in input {
			object.set(key, JsonValue::from(value));
		}
		object
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn keeps_insertion_order() {
		let mut object = JsonObject::new();
		object.set("type", "Point");
		object.set("coordinates", "[1,2]");
		assert_eq!(
			object.iter().map(|(key, _)| key.as_str()).collect::<Vec<_>>(),
			vec!["type", "coordinates"]
		);
		assert_eq!(object.stringify(), r#"{"type":"Point","coordinates":"[1,2]"}"#);
	}

	#[test]
	fn set_overwrites_in_place() {
		let mut object = JsonObject::from(vec![("a", 1), ("b", 2)]);
		object.set("a", 3);
		assert_eq!(object.len(), 2);
		assert_eq!(object.stringify(), r#"{"a":3,"b":2}"#);
	}

	#[test]
	fn get() {
		let object = JsonObject::parse_str(r#"{"s":"x","n":1.5}"#).unwrap();
		assert_eq!(object.get("s"), Some(&JsonValue::from("x")));
		assert_eq!(object.get("n"), Some(&JsonValue::Number(1.5)));
		assert_eq!(object.get("missing"), None);
	}

	#[test]
	fn parse_requires_object_root() {
		assert!(JsonObject::parse_str("[1,2]").is_err());
		assert!(JsonObject::parse_str("{}").unwrap().is_empty());
	}

	#[test]
	fn display_and_debug() {
		let object = JsonObject::from(vec![("k", "v")]);
		assert_eq!(format!("{object}"), r#"{"k":"v"}"#);
		assert_eq!(format!("{object:?}"), r#"{"k": String("v")}"#);
	}
}
