#![allow(missing_docs)]

use std::io::Write;
use std::process::{Command, Output, Stdio};

use serde_json::Value;
use thriftpeek_testkit::{TMessageType, TType, encode_message, framed, ping_call, write_field, write_list};

#[test]
fn decode_prints_annotated_envelope() {
	let output = run(&["decode"], &ping_call());
	assert!(output.status.success(), "decode should succeed");
	assert_eq!(
		String::from_utf8_lossy(&output.stdout).trim_end(),
		r#"{"1 NAME":"ping","2 SEQ_ID":7,"3 TYPE":"CALL","4 PAYLOAD":{"1 I32":42}}"#
	);
}

#[test]
fn decode_without_types_keeps_bare_ordinals() {
	let json = run_json(&["decode", "--no-types"], &ping_call());
	assert_eq!(json["4 PAYLOAD"]["1"], 42);
	assert_eq!(json["3 TYPE"], "CALL");
}

#[test]
fn decode_accepts_hex_dump_of_framed_stream() {
	let bytes = framed(&ping_call());
	let dump: Vec<String> = bytes.iter().map(|byte| format!("{byte:02x}")).collect();
	let json = run_json(&["decode", "--hex"], dump.join(" ").as_bytes());
	assert_eq!(json["1 NAME"], "ping");
	assert_eq!(json["2 SEQ_ID"], 7);
}

#[test]
fn decode_array_collections_lists_elements() {
	let bytes = encode_message("items", TMessageType::Reply, 2, |p| {
		write_field(p, 0, TType::List, |p| {
			write_list(p, TType::I16, 2, |p| {
				p.write_i16(1)?;
				p.write_i16(2)
			})
		})
	});
	let json = run_json(&["decode", "--array-collections"], &bytes);
	assert_eq!(json["4 PAYLOAD"]["0 list<I16>"]["elem_type"], "I16");
	assert_eq!(json["4 PAYLOAD"]["0 list<I16>"]["elems"], serde_json::json!([1, 2]));
}

#[test]
fn info_json_reports_framing_and_header() {
	let message = ping_call();
	let json = run_json(&["info", "--json"], &framed(&message));
	assert_eq!(json["framing"], "framed");
	assert_eq!(json["frame_len"], message.len());
	assert_eq!(json["header"], "strict");
	assert_eq!(json["name"], "ping");
	assert_eq!(json["kind"], "CALL");
	assert_eq!(json["payload_fields"], 1);
	assert_eq!(json["trailing"], 0);
}

#[test]
fn malformed_input_fails_without_stdout() {
	let mut bytes = ping_call();
	bytes.truncate(bytes.len() - 3);
	let output = run(&["decode"], &bytes);
	assert!(!output.status.success(), "truncated input should fail");
	assert!(output.stdout.is_empty(), "no partial JSON on failure");
	assert!(String::from_utf8_lossy(&output.stderr).contains("error:"));
}

fn run(args: &[&str], stdin: &[u8]) -> Output {
	let mut child = Command::new(env!("CARGO_BIN_EXE_thriftpeek"))
		.args(args)
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.spawn()
		.expect("command spawns");
	child.stdin.take().expect("stdin is piped").write_all(stdin).expect("stdin accepts input");
	child.wait_with_output().expect("command finishes")
}

fn run_json(args: &[&str], stdin: &[u8]) -> Value {
	let output = run(args, stdin);
	assert!(output.status.success(), "command should succeed: {}", String::from_utf8_lossy(&output.stderr));
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}
