use std::borrow::Cow;

use crate::thrift::TType;

/// Schema-less decoded value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Boolean scalar.
	Bool(bool),
	/// Signed byte scalar.
	Byte(i8),
	/// 16-bit integer scalar.
	I16(i16),
	/// 32-bit integer scalar.
	I32(i32),
	/// 64-bit integer scalar.
	I64(i64),
	/// IEEE-754 double scalar.
	Double(f64),
	/// Raw string/binary bytes; usually but not necessarily UTF-8.
	Text(Vec<u8>),
	/// Field-tagged struct.
	Struct(StructValue),
	/// Ordered list.
	List(ListValue),
	/// Set body; read order is kept and duplicates are not removed.
	Set(ListValue),
	/// Map body.
	Map(MapValue),
}

/// Struct fields in wire order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructValue {
	/// Decoded fields in wire order.
	pub fields: Vec<FieldValue>,
}

/// One decoded struct field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
	/// Wire field id.
	pub id: i16,
	/// Tag the field header declared.
	pub ttype: TType,
	/// Decoded field payload.
	pub value: Value,
}

/// List or set body.
#[derive(Debug, Clone, PartialEq)]
pub struct ListValue {
	/// Element tag from the container header.
	pub elem_type: TType,
	/// Element annotation resolved while decoding (see [`Value::annotation`]).
	pub elem_annotation: Box<str>,
	/// Elements in wire order.
	pub items: Vec<Value>,
}

/// Map body with entries in wire order.
#[derive(Debug, Clone, PartialEq)]
pub struct MapValue {
	/// Key tag from the map header.
	pub key_type: TType,
	/// Value tag from the map header.
	pub value_type: TType,
	/// Resolved key annotation.
	pub key_annotation: Box<str>,
	/// Resolved value annotation.
	pub value_annotation: Box<str>,
	/// Entries in wire order, duplicates included.
	pub entries: Vec<MapEntry>,
}

/// One key/value pair of a map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapEntry {
	/// Decoded key.
	pub key: Value,
	/// Decoded value.
	pub value: Value,
}

impl Value {
	/// Human-readable type annotation of a value decoded under `declared`.
	///
	/// Scalars and structs report the declared tag name, so a `UTF8`-tagged
	/// string stays `UTF8`; containers spell out their resolved element types.
	pub fn annotation(&self, declared: TType) -> Cow<'static, str> {
		match self {
			Self::List(list) => Cow::Owned(format!("list<{}>", list.elem_annotation)),
			Self::Set(set) => Cow::Owned(format!("set<{}>", set.elem_annotation)),
			Self::Map(map) => Cow::Owned(format!("map<{},{}>", map.key_annotation, map.value_annotation)),
			_ => Cow::Borrowed(declared.name()),
		}
	}

	/// Short variant label for diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Bool(_) => "Bool",
			Self::Byte(_) => "Byte",
			Self::I16(_) => "I16",
			Self::I32(_) => "I32",
			Self::I64(_) => "I64",
			Self::Double(_) => "Double",
			Self::Text(_) => "Text",
			Self::Struct(_) => "Struct",
			Self::List(_) => "List",
			Self::Set(_) => "Set",
			Self::Map(_) => "Map",
		}
	}
}

impl FieldValue {
	/// Annotation used in this field's key.
	pub fn annotation(&self) -> Cow<'static, str> {
		self.value.annotation(self.ttype)
	}
}

impl StructValue {
	/// First field carrying `id`, if any.
	pub fn field(&self, id: i16) -> Option<&FieldValue> {
		self.fields.iter().find(|field| field.id == id)
	}
}

/// Tracks the annotation a container reports for its elements.
///
/// Starts at the declared tag name and is replaced once by the first element
/// whose own annotation differs.
pub(crate) struct AnnotationTracker {
	declared: &'static str,
	resolved: Cow<'static, str>,
}

impl AnnotationTracker {
	pub(crate) fn new(declared: TType) -> Self {
		Self {
			declared: declared.name(),
			resolved: Cow::Borrowed(declared.name()),
		}
	}

	pub(crate) fn observe(&mut self, annotation: Cow<'static, str>) {
		if self.resolved == self.declared && annotation != self.declared {
			self.resolved = annotation;
		}
	}

	pub(crate) fn finish(self) -> Box<str> {
		self.resolved.into_owned().into_boxed_str()
	}
}
