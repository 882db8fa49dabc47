use tracing::{debug, warn};

use crate::thrift::bytes::checked_len;
use crate::thrift::frame::{VERSION_1, VERSION_MASK};
use crate::thrift::{Cursor, DecodeOptions, Framing, Result, StructValue, ThriftError, decode_struct, detect_frame};

/// Message kind carried in the envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
	/// Request expecting a reply (`1`).
	Call,
	/// Normal reply (`2`).
	Reply,
	/// Application exception reply (`3`).
	Exception,
	/// Request without reply (`4`).
	Oneway,
	/// Any other kind byte; decoding continues.
	Invalid(u8),
}

impl MessageKind {
	/// Classify a raw kind byte.
	pub fn from_byte(raw: u8) -> Self {
		match raw {
			1 => Self::Call,
			2 => Self::Reply,
			3 => Self::Exception,
			4 => Self::Oneway,
			other => Self::Invalid(other),
		}
	}

	/// Uppercase symbolic label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Call => "CALL",
			Self::Reply => "REPLY",
			Self::Exception => "EXCEPTION",
			Self::Oneway => "ONEWAY",
			Self::Invalid(_) => "INVALID",
		}
	}
}

/// One decoded RPC message.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
	/// Method name, lossily decoded as UTF-8.
	pub name: String,
	/// Envelope message kind.
	pub kind: MessageKind,
	/// Envelope sequence id.
	pub sequence_id: i32,
	/// Whether the header used the strict, version-marked form.
	pub versioned: bool,
	/// The single payload struct.
	pub payload: StructValue,
}

/// Whole-stream decode result with transport accounting.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
	/// Framing detected at stream start.
	pub framing: Framing,
	/// Decoded message.
	pub message: Message,
	/// Bytes occupied by the message, excluding any frame prefix.
	pub consumed: usize,
	/// Unread bytes after the message.
	pub trailing: usize,
}

/// Decode a message envelope and its payload struct at the cursor position.
pub fn decode_message(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<Message> {
	let size = cursor.read_i32()?;

	let (name, kind, sequence_id, versioned) = if size < 0 {
		let word = size as u32;
		let version = word & VERSION_MASK;
		if version != VERSION_1 {
			return Err(ThriftError::BadVersion { version });
		}

		let kind = MessageKind::from_byte((word & 0xff) as u8);
		let name = cursor.read_binary(opt.max_string_len)?;
		let sequence_id = cursor.read_i32()?;
		(name, kind, sequence_id, true)
	} else {
		if opt.strict_read {
			return Err(ThriftError::UnversionedMessage);
		}

		let len = checked_len("string", size, opt.max_string_len)?;
		let name = cursor.read_exact(len)?;
		let kind = MessageKind::from_byte(cursor.read_u8()?);
		let sequence_id = cursor.read_i32()?;
		(name, kind, sequence_id, false)
	};

	let name = String::from_utf8_lossy(name).into_owned();
	debug!(name = %name, kind = kind.as_str(), sequence_id, versioned, "read message header");

	let payload = decode_struct(cursor, opt)?;

	Ok(Message {
		name,
		kind,
		sequence_id,
		versioned,
		payload,
	})
}

/// Detect framing, decode one message, and verify the frame boundary.
///
/// The binary protocol writes no message-end bytes, so the only end marker
/// that can be checked is the frame length of a framed transport. Bytes left
/// after an unframed message are reported but tolerated.
pub fn decode_stream(bytes: &[u8], opt: &DecodeOptions) -> Result<Decoded> {
	let mut cursor = Cursor::new(bytes);
	let framing = detect_frame(&mut cursor)?;

	let start = cursor.pos();
	let message = decode_message(&mut cursor, opt)?;
	let consumed = cursor.pos() - start;

	if let Framing::Framed { declared_len } = framing {
		if u64::from(declared_len) != consumed as u64 {
			return Err(ThriftError::FrameLengthMismatch {
				declared: declared_len,
				consumed,
			});
		}
	}

	let trailing = cursor.remaining();
	if trailing > 0 {
		warn!(trailing, "ignoring bytes after message");
	}

	Ok(Decoded {
		framing,
		message,
		consumed,
		trailing,
	})
}
