use crate::thrift::{Result, ThriftError};

/// Bounded big-endian cursor over an immutable byte slice.
///
/// Reads never go past the end of the slice; a short read reports
/// [`ThriftError::TruncatedStream`] and leaves the position untouched.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Return the next `n` bytes without advancing.
	pub fn peek_exact(&self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(self.truncated(n));
		}
		Ok(&self.bytes[self.pos..self.pos + n])
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		let out = self.peek_exact(n)?;
		self.pos += n;
		Ok(out)
	}

	/// Read a fixed-size array.
	pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
		let raw = self.read_exact(N)?;
		let mut out = [0_u8; N];
		out.copy_from_slice(raw);
		Ok(out)
	}

	/// Read one unsigned byte (used for type tags).
	pub fn read_u8(&mut self) -> Result<u8> {
		Ok(self.read_array::<1>()?[0])
	}

	/// Read a `bool`; any nonzero byte is `true`.
	pub fn read_bool(&mut self) -> Result<bool> {
		Ok(self.read_u8()? != 0)
	}

	/// Read a signed byte.
	pub fn read_i8(&mut self) -> Result<i8> {
		self.read_array().map(i8::from_be_bytes)
	}

	/// Read a big-endian `i16`.
	pub fn read_i16(&mut self) -> Result<i16> {
		self.read_array().map(i16::from_be_bytes)
	}

	/// Read a big-endian `i32`.
	pub fn read_i32(&mut self) -> Result<i32> {
		self.read_array().map(i32::from_be_bytes)
	}

	/// Read a big-endian `u32`.
	pub fn read_u32(&mut self) -> Result<u32> {
		self.read_array().map(u32::from_be_bytes)
	}

	/// Read a big-endian `i64`.
	pub fn read_i64(&mut self) -> Result<i64> {
		self.read_array().map(i64::from_be_bytes)
	}

	/// Read a big-endian IEEE-754 double, keeping the exact bit pattern.
	pub fn read_f64(&mut self) -> Result<f64> {
		self.read_array().map(u64::from_be_bytes).map(f64::from_bits)
	}

	/// Read an `i32` length prefix followed by that many raw bytes.
	///
	/// The length is validated against `max` before any payload byte is touched.
	pub fn read_binary(&mut self, max: usize) -> Result<&'a [u8]> {
		let len = self.read_i32()?;
		let size = checked_len("string", len, max)?;
		self.read_exact(size)
	}

	fn truncated(&self, need: usize) -> ThriftError {
		ThriftError::TruncatedStream {
			at: self.pos,
			need,
			rem: self.remaining(),
		}
	}
}

/// Validate a wire-declared `i32` length against a ceiling.
pub(crate) fn checked_len(what: &'static str, len: i32, max: usize) -> Result<usize> {
	let malformed = || ThriftError::MalformedLength {
		what,
		len: i64::from(len),
		max,
	};
	let size = usize::try_from(len).map_err(|_| malformed())?;
	if size > max {
		return Err(malformed());
	}
	Ok(size)
}
