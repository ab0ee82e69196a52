use super::JsonValue;

/// Compact JSON text. Non-finite numbers have no JSON representation and are written as `null`.
#[must_use]
pub fn stringify(json: &JsonValue) -> String {
	let mut output = String::new();
	write_compact(json, &mut output);
	output
}

/// Multi-line JSON text with two-space indentation. Empty arrays and objects stay on one line.
#[must_use]
pub fn stringify_pretty(json: &JsonValue) -> String {
	let mut output = String::new();
	write_pretty(json, 0, &mut output);
	output
}

fn write_compact(json: &JsonValue, output: &mut String) {
	match json {
		JsonValue::Array(array) => {
			output.push('[');
			for (index, item) in array.iter().enumerate() {
				if index > 0 {
					output.push(',');
				}
				write_compact(item, output);
			}
			output.push(']');
		}
		JsonValue::Object(object) => {
			output.push('{');
			for (index, (key, value)) in object.iter().enumerate() {
				if index > 0 {
					output.push(',');
				}
				output.push('"');
				output.push_str(&escape_json_string(key));
				output.push_str("\":");
				write_compact(value, output);
			}
			output.push('}');
		}
		JsonValue::String(s) => {
			output.push('"');
			output.push_str(&escape_json_string(s));
			output.push('"');
		}
		JsonValue::Number(n) if n.is_finite() => output.push_str(&n.to_string()),
		JsonValue::Number(_) | JsonValue::Null => output.push_str("null"),
		JsonValue::Boolean(b) => output.push_str(if *b { "true" } else { "false" }),
	}
}

fn write_pretty(json: &JsonValue, depth: usize, output: &mut String) {
	let indent = "  ".repeat(depth + 1);
	let closing_indent = "  ".repeat(depth);
	match json {
		JsonValue::Array(array) if !array.is_empty() => {
			output.push_str("[\n");
			for (index, item) in array.iter().enumerate() {
				if index > 0 {
					output.push_str(",\n");
				}
				output.push_str(&indent);
				write_pretty(item, depth + 1, output);
			}
			output.push('\n');
			output.push_str(&closing_indent);
			output.push(']');
		}
		JsonValue::Object(object) if !object.is_empty() => {
			output.push_str("{\n");
			for (index, (key, value)) in object.iter().enumerate() {
				if index > 0 {
					output.push_str(",\n");
				}
				output.push_str(&indent);
				output.push('"');
				output.push_str(&escape_json_string(key));
				output.push_str("\": ");
				write_pretty(value, depth + 1, output);
			}
			output.push('\n');
			output.push_str(&closing_indent);
			output.push('}');
		}
		other => write_compact(other, output),
	}
}

/// Escapes quotes, backslashes and control characters for use inside a JSON string literal.
#[must_use]
pub fn escape_json_string(input: &str) -> String {
	let mut escaped = String::with_capacity(input.len());
	for c in input.chars() {
		match c {
			'"' => escaped.push_str("\\\""),
			'\\' => escaped.push_str("\\\\"),
			'\n' => escaped.push_str("\\n"),
			'\r' => escaped.push_str("\\r"),
			'\t' => escaped.push_str("\\t"),
			'\u{08}' => escaped.push_str("\\b"),
			'\u{0c}' => escaped.push_str("\\f"),
			c if c.is_control() => escaped.push_str(&format!("\\u{:04x}", c as u32)),
			c => escaped.push(c),
		}
	}
	escaped
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::json::{JsonArray, JsonObject};
	use pretty_assertions::assert_eq;

	#[test]
	fn compact() {
		let value = JsonValue::from(JsonObject::from(vec![
			("type", JsonValue::from("Point")),
			("coordinates", JsonValue::from(vec![10.0, 2.5])),
			("ok", JsonValue::from(true)),
			("none", JsonValue::Null),
		]));
		assert_eq!(
			stringify(&value),
			r#"{"type":"Point","coordinates":[10,2.5],"ok":true,"none":null}"#
		);
	}

	#[test]
	fn non_finite_numbers_become_null() {
		assert_eq!(stringify(&JsonValue::from(f64::NAN)), "null");
		assert_eq!(stringify(&JsonValue::from(f64::INFINITY)), "null");
	}

	#[test]
	fn pretty() {
		let value = JsonValue::from(JsonObject::from(vec![
			("type", JsonValue::from("LineString")),
			("coordinates", JsonValue::from(vec![vec![1, 2], vec![3, 4]])),
			("empty", JsonValue::from(JsonArray::default())),
		]));
		assert_eq!(
			stringify_pretty(&value),
			"{\n  \"type\": \"LineString\",\n  \"coordinates\": [\n    [\n      1,\n      2\n    ],\n    [\n      3,\n      4\n    ]\n  ],\n  \"empty\": []\n}"
		);
	}

	#[test]
	fn escaping() {
		assert_eq!(escape_json_string("a\"b\\c\nd\u{1}"), "a\\\"b\\\\c\\nd\\u0001");
		assert_eq!(stringify(&JsonValue::from("tab\there")), "\"tab\\there\"");
	}
}
