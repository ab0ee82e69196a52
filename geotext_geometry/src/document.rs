//! Geometries as tagged document nodes: `{"type": <tag>, "coordinates": <coordinate text>}`.
//!
//! The codec only needs the small [`DocumentTree`] interface. It is implemented for
//! [`JsonObject`], which also provides the text form of whole documents.

use crate::{CodecConfig, CoordinateEncoding, Geometry, GeometryError, GeometryKind};
use geotext_core::json::{JsonObject, JsonValue};
use log::debug;
use std::borrow::Cow;

pub const TYPE_KEY: &str = "type";
pub const COORDINATES_KEY: &str = "coordinates";

/// A node of a hierarchical key/value document.
pub trait DocumentTree: Sized {
	fn new_node() -> Self;

	/// Stores `value` as a string under `key`, replacing any previous value.
	fn put(&mut self, key: &str, value: &str);

	/// Stores `text` under `key` as the structured value it describes (e.g. a nested array).
	///
	/// # Errors
	/// Fails with [`GeometryError::InvalidDocument`] if the tree cannot represent `text`.
	fn put_raw(&mut self, key: &str, text: &str) -> Result<(), GeometryError>;

	fn add_child(&mut self, key: &str, child: Self);

	/// Reads a string value.
	///
	/// # Errors
	/// [`GeometryError::FieldMissing`] if `key` is absent, [`GeometryError::FieldTypeMismatch`]
	/// if its value is not a string.
	fn get(&self, key: &str) -> Result<&str, GeometryError>;

	/// Reads a value as text: strings as they are, structured values in their compact text form.
	///
	/// # Errors
	/// [`GeometryError::FieldMissing`] if `key` is absent, [`GeometryError::FieldTypeMismatch`]
	/// if the value has no text form.
	fn get_text(&self, key: &str) -> Result<Cow<'_, str>, GeometryError>;

	/// # Errors
	/// [`GeometryError::FieldMissing`] if `key` is absent, [`GeometryError::FieldTypeMismatch`]
	/// if its value is not a node.
	fn get_child(&self, key: &str) -> Result<&Self, GeometryError>;
}

fn lookup<'a>(object: &'a JsonObject, key: &str) -> Result<&'a JsonValue, GeometryError> {
	JsonObject::get(object, key).ok_or_else(|| GeometryError::FieldMissing(key.to_string()))
}

fn mismatch(key: &str, expected: &'static str, found: &JsonValue) -> GeometryError {
	GeometryError::FieldTypeMismatch {
		key: key.to_string(),
		expected,
		found: with_article(found.type_as_str()),
	}
}

fn with_article(name: &str) -> String {
	if name.starts_with(['a', 'e', 'i', 'o', 'u']) {
		format!("an {name}")
	} else {
		format!("a {name}")
	}
}

impl DocumentTree for JsonObject {
	fn new_node() -> Self {
		JsonObject::new()
	}

	fn put(&mut self, key: &str, value: &str) {
		self.set(key, value);
	}

	fn put_raw(&mut self, key: &str, text: &str) -> Result<(), GeometryError> {
		let value = JsonValue::parse_str(text).map_err(|err| GeometryError::InvalidDocument(format!("{err:#}")))?;
		self.set(key, value);
		Ok(())
	}

	fn add_child(&mut self, key: &str, child: Self) {
		self.set(key, child);
	}

	fn get(&self, key: &str) -> Result<&str, GeometryError> {
		match lookup(self, key)? {
			JsonValue::String(text) => Ok(text),
			other => Err(mismatch(key, "a string", other)),
		}
	}

	fn get_text(&self, key: &str) -> Result<Cow<'_, str>, GeometryError> {
		match lookup(self, key)? {
			JsonValue::String(text) => Ok(Cow::Borrowed(text)),
			value @ JsonValue::Array(_) => Ok(Cow::Owned(value.stringify())),
			other => Err(mismatch(key, "a string or an array", other)),
		}
	}

	fn get_child(&self, key: &str) -> Result<&Self, GeometryError> {
		match lookup(self, key)? {
			JsonValue::Object(object) => Ok(object),
			other => Err(mismatch(key, "an object", other)),
		}
	}
}

impl Geometry {
	/// Encodes the geometry with coordinates as a text field.
	///
	/// # Errors
	/// Returns [`GeometryError::EmptyGeometry`] for `Geometry::Empty`.
	pub fn to_document<D: DocumentTree>(&self) -> Result<D, GeometryError> {
		self.to_document_with(&CodecConfig::default())
	}

	/// Encodes the geometry as a new node holding exactly the type and coordinates fields.
	///
	/// # Errors
	/// Returns [`GeometryError::EmptyGeometry`] for `Geometry::Empty`, or
	/// [`GeometryError::InvalidDocument`] if the tree rejects array coordinates.
	pub fn to_document_with<D: DocumentTree>(&self, config: &CodecConfig) -> Result<D, GeometryError> {
		let tag = self.get_type_tag()?;
		let coordinates = self.to_coordinates_string_with_precision(config.precision)?;
		debug!("encoding {tag} with {:?} coordinates", config.coordinates);

		let mut node = D::new_node();
		node.put(TYPE_KEY, tag);
		match config.coordinates {
			CoordinateEncoding::Text => node.put(COORDINATES_KEY, &coordinates),
			CoordinateEncoding::Array => node.put_raw(COORDINATES_KEY, &coordinates)?,
		}
		Ok(node)
	}

	/// Decodes a node written by [`to_document`](Self::to_document). Coordinates may also be a
	/// structured array. Other fields are ignored.
	///
	/// # Errors
	/// Fails if a field is missing or has the wrong type, if the type tag is unknown, or if the
	/// coordinates do not parse as that type.
	pub fn from_document<D: DocumentTree>(node: &D) -> Result<Geometry, GeometryError> {
		let kind = GeometryKind::from_tag(node.get(TYPE_KEY)?)?;
		let coordinates = node.get_text(COORDINATES_KEY)?;
		debug!("decoding {kind} from {} bytes of coordinates", coordinates.len());
		Geometry::parse_coordinates(kind, &coordinates)
	}

	/// Encodes the geometry as a child node of `parent`, e.g. the `"geometry"` of a feature.
	///
	/// # Errors
	/// See [`to_document_with`](Self::to_document_with).
	pub fn add_to_document<D: DocumentTree>(
		&self,
		parent: &mut D,
		key: &str,
		config: &CodecConfig,
	) -> Result<(), GeometryError> {
		parent.add_child(key, self.to_document_with(config)?);
		Ok(())
	}

	/// Decodes the child node stored under `key`.
	///
	/// # Errors
	/// See [`from_document`](Self::from_document).
	pub fn from_document_child<D: DocumentTree>(parent: &D, key: &str) -> Result<Geometry, GeometryError> {
		Geometry::from_document(parent.get_child(key)?)
	}

	/// # Errors
	/// Returns [`GeometryError::EmptyGeometry`] for `Geometry::Empty`.
	pub fn to_json(&self) -> Result<JsonObject, GeometryError> {
		self.to_document()
	}

	/// Compact JSON text of the encoded geometry.
	///
	/// # Errors
	/// See [`to_document_with`](Self::to_document_with).
	pub fn to_json_string_with(&self, config: &CodecConfig) -> Result<String, GeometryError> {
		Ok(self.to_document_with::<JsonObject>(config)?.stringify())
	}

	/// # Errors
	/// Returns [`GeometryError::EmptyGeometry`] for `Geometry::Empty`.
	pub fn to_json_string(&self) -> Result<String, GeometryError> {
		self.to_json_string_with(&CodecConfig::default())
	}

	/// Reads a JSON document and decodes the geometry at its root.
	///
	/// # Errors
	/// [`GeometryError::InvalidDocument`] if `json` is not a JSON object, otherwise see
	/// [`from_document`](Self::from_document).
	pub fn from_json_str(json: &str) -> Result<Geometry, GeometryError> {
		let object = JsonObject::parse_str(json).map_err(|err| GeometryError::InvalidDocument(format!("{err:#}")))?;
		Geometry::from_document(&object)
	}
}
