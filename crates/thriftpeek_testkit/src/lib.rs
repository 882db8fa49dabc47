//! Shared test helpers: a reference binary-protocol encoder and framing utilities.

use thrift::protocol::{
	TBinaryOutputProtocol, TFieldIdentifier, TListIdentifier, TMapIdentifier, TMessageIdentifier, TSetIdentifier, TStructIdentifier,
};

pub use thrift::protocol::{TMessageType, TOutputProtocol, TType};

/// Result type of reference-encoder callbacks.
pub type EncodeResult = thrift::Result<()>;

/// Encode arbitrary protocol writes with the strict binary protocol.
pub fn encode(write: impl FnOnce(&mut dyn TOutputProtocol) -> EncodeResult) -> Vec<u8> {
	encode_with(true, write)
}

/// Encode a strict (version-marked) message whose payload struct is filled by `fields`.
pub fn encode_message(name: &str, kind: TMessageType, seq: i32, fields: impl FnOnce(&mut dyn TOutputProtocol) -> EncodeResult) -> Vec<u8> {
	encode_with(true, |proto| write_message(proto, name, kind, seq, fields))
}

/// Encode a legacy (unversioned) message whose payload struct is filled by `fields`.
pub fn encode_legacy_message(name: &str, kind: TMessageType, seq: i32, fields: impl FnOnce(&mut dyn TOutputProtocol) -> EncodeResult) -> Vec<u8> {
	encode_with(false, |proto| write_message(proto, name, kind, seq, fields))
}

/// Prefix `message` with its 4-byte big-endian frame length.
pub fn framed(message: &[u8]) -> Vec<u8> {
	let len = u32::try_from(message.len()).expect("test message fits a frame");
	let mut out = len.to_be_bytes().to_vec();
	out.extend_from_slice(message);
	out
}

/// `ping` call, sequence id 7, with field 1 = i32 42.
pub fn ping_call() -> Vec<u8> {
	encode_message("ping", TMessageType::Call, 7, |proto| write_field(proto, 1, TType::I32, |proto| proto.write_i32(42)))
}

/// Write one field header, its value, and the field end.
pub fn write_field(proto: &mut dyn TOutputProtocol, id: i16, ttype: TType, value: impl FnOnce(&mut dyn TOutputProtocol) -> EncodeResult) -> EncodeResult {
	proto.write_field_begin(&TFieldIdentifier::new("field", ttype, id))?;
	value(&mut *proto)?;
	proto.write_field_end()
}

/// Write a struct body: `fields`, then the stop byte.
pub fn write_struct(proto: &mut dyn TOutputProtocol, fields: impl FnOnce(&mut dyn TOutputProtocol) -> EncodeResult) -> EncodeResult {
	proto.write_struct_begin(&TStructIdentifier::new("payload"))?;
	fields(&mut *proto)?;
	proto.write_field_stop()?;
	proto.write_struct_end()
}

/// Write a list header declaring `count` elements, then `items`.
pub fn write_list(proto: &mut dyn TOutputProtocol, elem: TType, count: i32, items: impl FnOnce(&mut dyn TOutputProtocol) -> EncodeResult) -> EncodeResult {
	proto.write_list_begin(&TListIdentifier::new(elem, count))?;
	items(&mut *proto)?;
	proto.write_list_end()
}

/// Write a set header declaring `count` elements, then `items`.
pub fn write_set(proto: &mut dyn TOutputProtocol, elem: TType, count: i32, items: impl FnOnce(&mut dyn TOutputProtocol) -> EncodeResult) -> EncodeResult {
	proto.write_set_begin(&TSetIdentifier::new(elem, count))?;
	items(&mut *proto)?;
	proto.write_set_end()
}

/// Write a map header declaring `count` entries, then `entries` (key, value, key, value, ...).
pub fn write_map(
	proto: &mut dyn TOutputProtocol,
	key: TType,
	value: TType,
	count: i32,
	entries: impl FnOnce(&mut dyn TOutputProtocol) -> EncodeResult,
) -> EncodeResult {
	proto.write_map_begin(&TMapIdentifier::new(key, value, count))?;
	entries(&mut *proto)?;
	proto.write_map_end()
}

fn write_message(
	proto: &mut dyn TOutputProtocol,
	name: &str,
	kind: TMessageType,
	seq: i32,
	fields: impl FnOnce(&mut dyn TOutputProtocol) -> EncodeResult,
) -> EncodeResult {
	proto.write_message_begin(&TMessageIdentifier::new(name, kind, seq))?;
	write_struct(&mut *proto, fields)?;
	proto.write_message_end()
}

fn encode_with(strict: bool, write: impl FnOnce(&mut dyn TOutputProtocol) -> EncodeResult) -> Vec<u8> {
	let mut out = Vec::new();
	{
		let mut proto = TBinaryOutputProtocol::new(&mut out, strict);
		write(&mut proto).expect("reference encoder writes");
		proto.flush().expect("reference encoder flushes");
	}
	out
}
