use tracing::debug;

use crate::thrift::{Cursor, Result};

/// Mask selecting the protocol-version half-word of a strict message header.
pub const VERSION_MASK: u32 = 0xffff_0000;
/// Binary protocol version 1 marker.
pub const VERSION_1: u32 = 0x8001_0000;
/// Size of a framed-transport length prefix.
pub const FRAME_PREFIX_LEN: usize = 4;

/// Transport framing detected at stream start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
	/// Message header starts at byte 0.
	Unframed,
	/// A 4-byte big-endian frame length preceded the message and was skipped.
	Framed {
		/// Frame length as declared by the prefix.
		declared_len: u32,
	},
}

impl Framing {
	/// Render framing mode as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Unframed => "unframed",
			Self::Framed { .. } => "framed",
		}
	}
}

/// Inspect the first word and skip it when it is a frame length.
///
/// A word whose top half matches the version-1 marker is left in place for the
/// message decoder. Anything else is taken to be a frame length, which means a
/// legacy unversioned header is always misread as a frame; the transport in use
/// cannot be observed from the bytes alone.
pub fn detect_frame(cursor: &mut Cursor<'_>) -> Result<Framing> {
	let mut word = [0_u8; FRAME_PREFIX_LEN];
	word.copy_from_slice(cursor.peek_exact(FRAME_PREFIX_LEN)?);
	let word = u32::from_be_bytes(word);

	if word & VERSION_MASK == VERSION_1 {
		debug!("version marker at stream start, unframed");
		return Ok(Framing::Unframed);
	}

	let _ = cursor.read_exact(FRAME_PREFIX_LEN)?;
	debug!(declared_len = word, "skipped frame length prefix");
	Ok(Framing::Framed { declared_len: word })
}
