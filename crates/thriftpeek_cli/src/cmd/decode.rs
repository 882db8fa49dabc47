use thriftpeek::thrift::{CollectionStyle, RenderOptions, Result, decode_stream, render_message};
use tracing::debug;

use crate::cmd::util::{InputArgs, emit_json, load_input};

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub input: InputArgs,
	/// Leave type annotations out of keys.
	#[arg(long = "no-types")]
	pub no_types: bool,
	/// Render lists, sets and maps as arrays beside explicit type keys.
	#[arg(long = "array-collections")]
	pub array_collections: bool,
	/// Order object keys by ordinal instead of wire order.
	#[arg(long = "sort-keys")]
	pub sort_keys: bool,
	#[arg(long)]
	pub pretty: bool,
}

/// Decode one message and print its JSON tree.
pub fn run(args: Args) -> Result<()> {
	let Args {
		input,
		no_types,
		array_collections,
		sort_keys,
		pretty,
	} = args;

	let bytes = load_input(&input)?;
	let decoded = decode_stream(&bytes, &input.decode_options())?;
	debug!(framing = decoded.framing.as_str(), consumed = decoded.consumed, "decoded message");

	let render = RenderOptions {
		include_types: !no_types,
		collections: if array_collections {
			CollectionStyle::Array
		} else {
			CollectionStyle::Keyed
		},
		sort_keys,
	};
	emit_json(&render_message(&decoded.message, &render), pretty)
}
