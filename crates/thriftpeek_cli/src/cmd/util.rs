use std::io::{Read, Write};
use std::path::PathBuf;

use thriftpeek::thrift::{DecodeOptions, Result, ThriftError};

/// Input selection and decode limits shared by every command.
#[derive(clap::Args)]
pub struct InputArgs {
	/// Capture file; stdin when omitted.
	pub file: Option<PathBuf>,
	/// Treat input as a hex dump (whitespace ignored).
	#[arg(long)]
	pub hex: bool,
	/// Reject legacy message headers without a version marker.
	#[arg(long = "strict-read")]
	pub strict_read: bool,
	/// Maximum container nesting depth.
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
}

impl InputArgs {
	/// Decode options implied by the flags.
	pub fn decode_options(&self) -> DecodeOptions {
		let mut options = DecodeOptions {
			strict_read: self.strict_read,
			..DecodeOptions::default()
		};
		if let Some(max_depth) = self.max_depth {
			options.max_depth = max_depth;
		}
		options
	}
}

/// Read the selected input fully into memory.
pub(crate) fn load_input(args: &InputArgs) -> Result<Vec<u8>> {
	let raw = match &args.file {
		Some(path) => std::fs::read(path)?,
		None => {
			let mut buf = Vec::new();
			std::io::stdin().lock().read_to_end(&mut buf)?;
			buf
		}
	};

	if args.hex {
		return decode_hex(&raw);
	}
	Ok(raw)
}

/// Decode a whitespace-tolerant hex dump.
pub(crate) fn decode_hex(raw: &[u8]) -> Result<Vec<u8>> {
	let digits: Vec<u8> = raw.iter().copied().filter(|byte| !byte.is_ascii_whitespace()).collect();
	hex::decode(digits).map_err(|err| ThriftError::InvalidHexInput { reason: err.to_string() })
}

/// Serialize a value to stdout as one JSON document.
pub(crate) fn emit_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<()> {
	let stdout = std::io::stdout();
	let mut out = stdout.lock();
	let written = if pretty {
		serde_json::to_writer_pretty(&mut out, value)
	} else {
		serde_json::to_writer(&mut out, value)
	};
	written.map_err(std::io::Error::from)?;
	writeln!(out)?;
	Ok(())
}
