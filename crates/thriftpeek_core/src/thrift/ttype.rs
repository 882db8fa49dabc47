/// Wire type tag of a binary-protocol value.
///
/// Tags outside the Apache Thrift enumeration are kept as [`TType::Unknown`]
/// so an empty container can still report what it declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TType {
	/// Struct field-list terminator (`0`).
	Stop,
	/// Reserved `void` tag (`1`).
	Void,
	/// `bool` (`2`).
	Bool,
	/// Signed byte (`3`).
	Byte,
	/// IEEE-754 double (`4`).
	Double,
	/// `i16` (`6`).
	I16,
	/// `i32` (`8`).
	I32,
	/// `i64` (`10`).
	I64,
	/// Length-prefixed string or binary (`11`).
	String,
	/// Field-tagged struct (`12`).
	Struct,
	/// Map (`13`).
	Map,
	/// Set (`14`).
	Set,
	/// List (`15`).
	List,
	/// Legacy UTF-8 string alias (`16`).
	Utf8,
	/// Legacy UTF-16 string alias (`17`).
	Utf16,
	/// Any other raw tag.
	Unknown(u8),
}

impl TType {
	/// Classify a raw tag byte.
	pub fn from_tag(tag: u8) -> Self {
		match tag {
			0 => Self::Stop,
			1 => Self::Void,
			2 => Self::Bool,
			3 => Self::Byte,
			4 => Self::Double,
			6 => Self::I16,
			8 => Self::I32,
			10 => Self::I64,
			11 => Self::String,
			12 => Self::Struct,
			13 => Self::Map,
			14 => Self::Set,
			15 => Self::List,
			16 => Self::Utf8,
			17 => Self::Utf16,
			other => Self::Unknown(other),
		}
	}

	/// Raw tag byte.
	pub fn tag(self) -> u8 {
		match self {
			Self::Stop => 0,
			Self::Void => 1,
			Self::Bool => 2,
			Self::Byte => 3,
			Self::Double => 4,
			Self::I16 => 6,
			Self::I32 => 8,
			Self::I64 => 10,
			Self::String => 11,
			Self::Struct => 12,
			Self::Map => 13,
			Self::Set => 14,
			Self::List => 15,
			Self::Utf8 => 16,
			Self::Utf16 => 17,
			Self::Unknown(tag) => tag,
		}
	}

	/// Stable uppercase label used in type annotations.
	pub fn name(self) -> &'static str {
		match self {
			Self::Stop => "STOP",
			Self::Void => "VOID",
			Self::Bool => "BOOL",
			Self::Byte => "BYTE",
			Self::Double => "DOUBLE",
			Self::I16 => "I16",
			Self::I32 => "I32",
			Self::I64 => "I64",
			Self::String => "STRING",
			Self::Struct => "STRUCT",
			Self::Map => "MAP",
			Self::Set => "SET",
			Self::List => "LIST",
			Self::Utf8 => "UTF8",
			Self::Utf16 => "UTF16",
			Self::Unknown(_) => "UNKNOWN",
		}
	}
}

impl std::fmt::Display for TType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}
