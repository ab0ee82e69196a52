use super::{JsonArray, JsonObject, parse_json_str, stringify};
use anyhow::{Result, bail};

/// Any JSON node: array, boolean, null, number, object or string.
#[derive(Clone, Debug, PartialEq)]
pub enum JsonValue {
	Array(JsonArray),
	Boolean(bool),
	Null,
	Number(f64),
	Object(JsonObject),
	String(String),
}

impl JsonValue {
	/// Parses a complete JSON text.
	///
	/// # Errors
	/// Returns an error if the text is not valid JSON or has trailing characters.
	pub fn parse_str(json: &str) -> Result<JsonValue> {
		parse_json_str(json)
	}

	/// The JSON type name: `"array"`, `"boolean"`, `"null"`, `"number"`, `"object"` or `"string"`.
	#[must_use]
	pub fn type_as_str(&self) -> &'static str {
		use JsonValue::*;
		match self {
			Array(_) => "array",
			Boolean(_) => "boolean",
			Null => "null",
			Number(_) => "number",
			Object(_) => "object",
			String(_) => "string",
		}
	}

	/// Compact JSON text without insignificant whitespace.
	#[must_use]
	pub fn stringify(&self) -> String {
		stringify(self)
	}

	pub fn into_object(self) -> Result<JsonObject> {
		match self {
			JsonValue::Object(object) => Ok(object),
			_ => bail!("expected a JSON object, found type {}", self.type_as_str()),
		}
	}
}

impl From<&str> for JsonValue {
	fn from(input: &str) -> Self {
		JsonValue::String(input.to_string())
	}
}

impl From<String> for JsonValue {
	fn from(input: String) -> Self {
		JsonValue::String(input)
	}
}

impl From<bool> for JsonValue {
	fn from(input: bool) -> Self {
		JsonValue::Boolean(input)
	}
}

impl From<f64> for JsonValue {
	fn from(input: f64) -> Self {
		JsonValue::Number(input)
	}
}

impl From<i32> for JsonValue {
	fn from(input: i32) -> Self {
		JsonValue::Number(f64::from(input))
	}
}

impl From<JsonArray> for JsonValue {
	fn from(input: JsonArray) -> Self {
		JsonValue::Array(input)
	}
}

impl From<JsonObject> for JsonValue {
	fn from(input: JsonObject) -> Self {
		JsonValue::Object(input)
	}
}

impl<T> From<Vec<T>> for JsonValue
where
	JsonValue: From<T>,
{
	fn from(input: Vec<T>) -> Self {
		JsonValue::Array(JsonArray::from(input))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn conversions() {
		assert_eq!(JsonValue::from("a"), JsonValue::String("a".to_string()));
		assert_eq!(JsonValue::from(String::from("b")), JsonValue::String("b".to_string()));
		assert_eq!(JsonValue::from(true), JsonValue::Boolean(true));
		assert_eq!(JsonValue::from(23.42), JsonValue::Number(23.42));
		assert_eq!(JsonValue::from(42), JsonValue::Number(42.0));
		assert_eq!(
			JsonValue::from(vec![vec![1.0, 2.0]]),
			JsonValue::Array(JsonArray(vec![JsonValue::Array(JsonArray(vec![
				JsonValue::Number(1.0),
				JsonValue::Number(2.0)
			]))]))
		);
	}

	#[test]
	fn type_names() {
		assert_eq!(JsonValue::from("value").type_as_str(), "string");
		assert_eq!(JsonValue::from(42).type_as_str(), "number");
		assert_eq!(JsonValue::from(true).type_as_str(), "boolean");
		assert_eq!(JsonValue::Null.type_as_str(), "null");
		assert_eq!(JsonValue::from(JsonArray::default()).type_as_str(), "array");
		assert_eq!(JsonValue::from(JsonObject::new()).type_as_str(), "object");
	}

	#[test]
	fn into_object() {
		assert!(JsonValue::from(JsonObject::new()).into_object().is_ok());
		assert_eq!(
			JsonValue::from(vec![1]).into_object().unwrap_err().to_string(),
			"expected a JSON object, found type array"
		);
	}

	#[test]
	fn parse_and_stringify() {
		let value = JsonValue::parse_str(r#"{ "a": [1, 2.5, "x"], "b": null }"#).unwrap();
		assert_eq!(value.stringify(), r#"{"a":[1,2.5,"x"],"b":null}"#);
		assert!(JsonValue::parse_str(r#"{"key":}"#).is_err());
	}
}
