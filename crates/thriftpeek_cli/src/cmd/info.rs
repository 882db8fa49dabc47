use thriftpeek::thrift::{Decoded, Framing, MessageKind, Result, decode_stream};

use crate::cmd::util::{InputArgs, emit_json, load_input};

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub input: InputArgs,
	#[arg(long)]
	pub json: bool,
}

/// Print framing, header form, and byte accounting for one message.
pub fn run(args: Args) -> Result<()> {
	let Args { input, json } = args;

	let bytes = load_input(&input)?;
	let decoded = decode_stream(&bytes, &input.decode_options())?;

	if json {
		return emit_json(&info_json(&decoded), false);
	}

	let message = &decoded.message;
	println!("framing: {}", decoded.framing.as_str());
	if let Framing::Framed { declared_len } = decoded.framing {
		println!("frame_len: {declared_len}");
	}
	println!("header: {}", header_label(message.versioned));
	println!("name: {}", message.name);
	println!("kind: {}", kind_label(message.kind));
	println!("sequence_id: {}", message.sequence_id);
	println!("payload_fields: {}", message.payload.fields.len());
	println!("consumed: {}", decoded.consumed);
	println!("trailing: {}", decoded.trailing);

	Ok(())
}

fn info_json(decoded: &Decoded) -> InfoJson {
	let message = &decoded.message;
	InfoJson {
		framing: decoded.framing.as_str(),
		frame_len: match decoded.framing {
			Framing::Framed { declared_len } => Some(declared_len),
			Framing::Unframed => None,
		},
		header: header_label(message.versioned),
		name: message.name.clone(),
		kind: kind_label(message.kind),
		sequence_id: message.sequence_id,
		payload_fields: message.payload.fields.len(),
		consumed: decoded.consumed,
		trailing: decoded.trailing,
	}
}

fn header_label(versioned: bool) -> &'static str {
	if versioned { "strict" } else { "legacy" }
}

fn kind_label(kind: MessageKind) -> String {
	match kind {
		MessageKind::Invalid(raw) => format!("INVALID({raw})"),
		other => other.as_str().to_owned(),
	}
}

#[derive(serde::Serialize)]
struct InfoJson {
	framing: &'static str,
	frame_len: Option<u32>,
	header: &'static str,
	name: String,
	kind: String,
	sequence_id: i32,
	payload_fields: usize,
	consumed: usize,
	trailing: usize,
}
