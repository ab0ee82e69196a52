use super::JsonValue;

/// A JSON array.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JsonArray(pub Vec<JsonValue>);

impl JsonArray {
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &JsonValue> {
		self.0.iter()
	}
}

impl<T> From<Vec<T>> for JsonArray
where
	JsonValue: From<T>,
{
	fn from(input: Vec<T>) -> Self {
		JsonArray(input.into_iter().map(JsonValue::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn iterate() {
		assert!(JsonArray::default().is_empty());
		let array = JsonArray(vec![JsonValue::from(1), JsonValue::from("two")]);
		assert!(!array.is_empty());
		assert_eq!(
			array.iter().map(JsonValue::type_as_str).collect::<Vec<_>>(),
			vec!["number", "string"]
		);
	}
}
