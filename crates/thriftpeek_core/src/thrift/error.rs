use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ThriftError>;

/// Errors produced while loading and decoding Thrift binary-protocol messages.
///
/// Every variant aborts the whole decode: field boundaries cannot be
/// resynchronized once a tag or length has been misread.
#[derive(Debug, Error)]
pub enum ThriftError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Not enough bytes remained for a requested read.
	#[error("truncated stream at offset {at}: need {need} bytes, remaining {rem}")]
	TruncatedStream {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// A declared string or collection length was negative or above the configured ceiling.
	#[error("malformed {what} length {len} (max {max})")]
	MalformedLength {
		/// Which length-prefixed construct was being read.
		what: &'static str,
		/// Declared length as read from the wire.
		len: i64,
		/// Configured ceiling.
		max: usize,
	},
	/// Type tag outside the decodable set.
	#[error("unsupported type tag 0x{tag:02x} at offset {at}")]
	UnsupportedType {
		/// Offending raw tag byte.
		tag: u8,
		/// Byte offset of the value that carried the tag.
		at: usize,
	},
	/// Nested containers exceeded the configured recursion ceiling.
	#[error("decode depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Strict message header carried an unknown protocol version.
	#[error("bad message version 0x{version:08x}")]
	BadVersion {
		/// Masked version word read from the header.
		version: u32,
	},
	/// Legacy unversioned header seen while strict reads are required.
	#[error("missing message version header in strict mode")]
	UnversionedMessage,
	/// Framed transport length disagrees with the bytes the message occupied.
	#[error("frame length mismatch: declared {declared}, message used {consumed}")]
	FrameLengthMismatch {
		/// Length from the 4-byte frame prefix.
		declared: u32,
		/// Bytes consumed by the message after the prefix.
		consumed: usize,
	},
	/// Hex-encoded input could not be decoded.
	#[error("invalid hex input: {reason}")]
	InvalidHexInput {
		/// Decoder diagnostic.
		reason: String,
	},
}

impl ThriftError {
	/// Whether this error belongs to the message begin/end pairing family.
	pub fn is_framing(&self) -> bool {
		matches!(self, Self::BadVersion { .. } | Self::UnversionedMessage | Self::FrameLengthMismatch { .. })
	}
}
