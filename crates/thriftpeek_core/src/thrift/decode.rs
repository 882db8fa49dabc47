use tracing::trace;

use crate::thrift::bytes::checked_len;
use crate::thrift::value::AnnotationTracker;
use crate::thrift::{Cursor, FieldValue, ListValue, MapEntry, MapValue, Result, StructValue, TType, ThriftError, Value};

/// Runtime limits and behavior switches for binary-protocol decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum container nesting depth, counting the payload struct as depth 0.
	pub max_depth: u32,
	/// Maximum accepted string/binary length in bytes.
	pub max_string_len: usize,
	/// Maximum accepted list/set/map element count.
	pub max_collection_len: usize,
	/// Reject legacy message headers that carry no protocol version.
	pub strict_read: bool,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 64,
			max_string_len: 64 * 1024 * 1024,
			max_collection_len: 16 * 1024 * 1024,
			strict_read: false,
		}
	}
}

/// Decode one value of wire type `tag` at the cursor position.
pub fn decode_value(cursor: &mut Cursor<'_>, tag: u8, opt: &DecodeOptions) -> Result<Value> {
	decode_value_impl(cursor, TType::from_tag(tag), opt, 0)
}

/// Decode one struct body (field list up to and including `STOP`).
pub fn decode_struct(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<StructValue> {
	decode_struct_impl(cursor, opt, 0)
}

fn decode_value_impl(cursor: &mut Cursor<'_>, ttype: TType, opt: &DecodeOptions, depth: u32) -> Result<Value> {
	let at = cursor.pos();
	let value = match ttype {
		TType::Bool => Value::Bool(cursor.read_bool()?),
		TType::Byte => Value::Byte(cursor.read_i8()?),
		TType::I16 => Value::I16(cursor.read_i16()?),
		TType::I32 => Value::I32(cursor.read_i32()?),
		TType::I64 => Value::I64(cursor.read_i64()?),
		TType::Double => Value::Double(cursor.read_f64()?),
		TType::String | TType::Utf8 | TType::Utf16 => Value::Text(cursor.read_binary(opt.max_string_len)?.to_vec()),
		TType::Struct => Value::Struct(decode_struct_impl(cursor, opt, depth)?),
		TType::List => Value::List(decode_list_impl(cursor, "list", opt, depth)?),
		TType::Set => Value::Set(decode_list_impl(cursor, "set", opt, depth)?),
		TType::Map => Value::Map(decode_map_impl(cursor, opt, depth)?),
		TType::Stop | TType::Void | TType::Unknown(_) => return Err(ThriftError::UnsupportedType { tag: ttype.tag(), at }),
	};
	Ok(value)
}

fn decode_struct_impl(cursor: &mut Cursor<'_>, opt: &DecodeOptions, depth: u32) -> Result<StructValue> {
	check_depth(opt, depth)?;

	let mut fields = Vec::new();
	loop {
		let ttype = TType::from_tag(cursor.read_u8()?);
		if ttype == TType::Stop {
			break;
		}

		let id = cursor.read_i16()?;
		let value = decode_value_impl(cursor, ttype, opt, depth + 1)?;
		fields.push(FieldValue { id, ttype, value });
	}

	trace!(depth, fields = fields.len(), "decoded struct");
	Ok(StructValue { fields })
}

fn decode_list_impl(cursor: &mut Cursor<'_>, what: &'static str, opt: &DecodeOptions, depth: u32) -> Result<ListValue> {
	check_depth(opt, depth)?;

	let elem_type = TType::from_tag(cursor.read_u8()?);
	let count = checked_len(what, cursor.read_i32()?, opt.max_collection_len)?;

	// every element occupies at least one byte
	let mut items = Vec::with_capacity(count.min(cursor.remaining()));
	let mut annotation = AnnotationTracker::new(elem_type);
	for _ in 0..count {
		let item = decode_value_impl(cursor, elem_type, opt, depth + 1)?;
		annotation.observe(item.annotation(elem_type));
		items.push(item);
	}

	trace!(depth, what, %elem_type, count, "decoded collection");
	Ok(ListValue {
		elem_type,
		elem_annotation: annotation.finish(),
		items,
	})
}

fn decode_map_impl(cursor: &mut Cursor<'_>, opt: &DecodeOptions, depth: u32) -> Result<MapValue> {
	check_depth(opt, depth)?;

	let key_type = TType::from_tag(cursor.read_u8()?);
	let value_type = TType::from_tag(cursor.read_u8()?);
	let count = checked_len("map", cursor.read_i32()?, opt.max_collection_len)?;

	let mut entries = Vec::with_capacity(count.min(cursor.remaining() / 2));
	let mut key_annotation = AnnotationTracker::new(key_type);
	let mut value_annotation = AnnotationTracker::new(value_type);
	for _ in 0..count {
		let key = decode_value_impl(cursor, key_type, opt, depth + 1)?;
		key_annotation.observe(key.annotation(key_type));

		let value = decode_value_impl(cursor, value_type, opt, depth + 1)?;
		value_annotation.observe(value.annotation(value_type));

		entries.push(MapEntry { key, value });
	}

	trace!(depth, %key_type, %value_type, count, "decoded map");
	Ok(MapValue {
		key_type,
		value_type,
		key_annotation: key_annotation.finish(),
		value_annotation: value_annotation.finish(),
		entries,
	})
}

fn check_depth(opt: &DecodeOptions, depth: u32) -> Result<()> {
	if depth >= opt.max_depth {
		return Err(ThriftError::DepthExceeded { max_depth: opt.max_depth });
	}
	Ok(())
}
