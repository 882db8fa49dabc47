mod unit_message {

	use serde_json::json;
	use thriftpeek_testkit::ping_call;

	use crate::thrift::{DecodeOptions, RenderOptions, decode_stream, render_message};

	#[test]
	fn ping_call_renders_with_annotated_keys() {
		let decoded = decode_stream(&ping_call(), &DecodeOptions::default()).expect("stream decodes");
		let json = render_message(&decoded.message, &RenderOptions::default());
		assert_eq!(json.to_string(), r#"{"1 NAME":"ping","2 SEQ_ID":7,"3 TYPE":"CALL","4 PAYLOAD":{"1 I32":42}}"#);
	}

	#[test]
	fn annotations_can_be_switched_off() {
		let decoded = decode_stream(&ping_call(), &DecodeOptions::default()).expect("stream decodes");
		let opt = RenderOptions {
			include_types: false,
			..RenderOptions::default()
		};
		let json = render_message(&decoded.message, &opt);
		assert_eq!(json["4 PAYLOAD"], json!({ "1": 42 }));
		assert_eq!(json["1 NAME"], "ping");
	}
}

mod unit_struct_keys {

	use thriftpeek_testkit::{TType as WireType, encode, write_field, write_list, write_struct};

	use crate::thrift::{Cursor, DecodeOptions, RenderOptions, Value, decode_struct, render_value};

	fn decode(bytes: &[u8]) -> Value {
		Value::Struct(decode_struct(&mut Cursor::new(bytes), &DecodeOptions::default()).expect("struct decodes"))
	}

	fn scrambled() -> Vec<u8> {
		encode(|p| {
			write_struct(p, |p| {
				write_field(p, 10, WireType::I32, |p| p.write_i32(100))?;
				write_field(p, 3, WireType::I32, |p| p.write_i32(30))?;
				write_field(p, 1, WireType::String, |p| p.write_string("one"))?;
				write_field(p, 2, WireType::Bool, |p| p.write_bool(true))
			})
		})
	}

	#[test]
	fn object_keys_follow_wire_order() {
		let json = render_value(&decode(&scrambled()), &RenderOptions::default());
		assert_eq!(json.to_string(), r#"{"10 I32":100,"3 I32":30,"1 STRING":"one","2 BOOL":true}"#);
	}

	#[test]
	fn sorted_keys_use_numeric_ordinals() {
		let opt = RenderOptions {
			sort_keys: true,
			..RenderOptions::default()
		};
		let json = render_value(&decode(&scrambled()), &opt);
		assert_eq!(json.to_string(), r#"{"1 STRING":"one","2 BOOL":true,"3 I32":30,"10 I32":100}"#);
	}

	#[test]
	fn container_fields_carry_resolved_annotations() {
		let bytes = encode(|p| {
			write_struct(p, |p| {
				write_field(p, 1, WireType::List, |p| {
					write_list(p, WireType::List, 1, |p| write_list(p, WireType::I32, 2, |p| {
						p.write_i32(5)?;
						p.write_i32(6)
					}))
				})
			})
		});
		let json = render_value(&decode(&bytes), &RenderOptions::default());
		assert_eq!(json.to_string(), r#"{"1 list<list<I32>>":{"0 list<I32>":{"0 I32":5,"1 I32":6}}}"#);
	}
}

mod unit_collections {

	use serde_json::json;
	use thriftpeek_testkit::{TType as WireType, encode, write_list, write_map, write_set, write_struct, write_field};

	use crate::thrift::{CollectionStyle, Cursor, DecodeOptions, RenderOptions, TType, Value, decode_value, render_value};

	fn decode(bytes: &[u8], ttype: TType) -> Value {
		decode_value(&mut Cursor::new(bytes), ttype.tag(), &DecodeOptions::default()).expect("value decodes")
	}

	fn array_style() -> RenderOptions {
		RenderOptions {
			collections: CollectionStyle::Array,
			..RenderOptions::default()
		}
	}

	fn int_list() -> Value {
		decode(
			&encode(|p| {
				write_list(p, WireType::I64, 2, |p| {
					p.write_i64(7)?;
					p.write_i64(8)
				})
			}),
			TType::List,
		)
	}

	#[test]
	fn keyed_list_uses_positions() {
		let json = render_value(&int_list(), &RenderOptions::default());
		assert_eq!(json.to_string(), r#"{"0 I64":7,"1 I64":8}"#);
	}

	#[test]
	fn array_list_carries_elem_type() {
		let json = render_value(&int_list(), &array_style());
		assert_eq!(json, json!({ "elem_type": "I64", "elems": [7, 8] }));
	}

	#[test]
	fn set_of_structs_renders_like_a_list() {
		let bytes = encode(|p| {
			write_set(p, WireType::Struct, 2, |p| {
				write_struct(p, |p| write_field(p, 1, WireType::I32, |p| p.write_i32(1)))?;
				write_struct(p, |_| Ok(()))
			})
		});
		let json = render_value(&decode(&bytes, TType::Set), &RenderOptions::default());
		assert_eq!(json.to_string(), r#"{"0 STRUCT":{"1 I32":1},"1 STRUCT":{}}"#);
	}

	#[test]
	fn empty_containers_render_empty() {
		let list = decode(&[TType::Double.tag(), 0, 0, 0, 0], TType::List);
		assert_eq!(render_value(&list, &RenderOptions::default()), json!({}));
		assert_eq!(render_value(&list, &array_style()), json!({ "elem_type": "DOUBLE", "elems": [] }));
	}

	#[test]
	fn keyed_map_uses_key_text_as_ordinal() {
		let bytes = encode(|p| {
			write_map(p, WireType::String, WireType::I64, 2, |p| {
				p.write_string("b")?;
				p.write_i64(2)?;
				p.write_string("a")?;
				p.write_i64(1)
			})
		});
		let json = render_value(&decode(&bytes, TType::Map), &RenderOptions::default());
		assert_eq!(json.to_string(), r#"{"b I64":2,"a I64":1}"#);

		let plain = RenderOptions {
			include_types: false,
			..RenderOptions::default()
		};
		assert_eq!(render_value(&decode(&bytes, TType::Map), &plain).to_string(), r#"{"b":2,"a":1}"#);
	}

	#[test]
	fn colliding_map_keys_keep_the_last_value() {
		let bytes = encode(|p| {
			write_map(p, WireType::I32, WireType::String, 3, |p| {
				p.write_i32(1)?;
				p.write_string("first")?;
				p.write_i32(2)?;
				p.write_string("other")?;
				p.write_i32(1)?;
				p.write_string("last")
			})
		});
		let json = render_value(&decode(&bytes, TType::Map), &RenderOptions::default());
		assert_eq!(json, json!({ "1 STRING": "last", "2 STRING": "other" }));
	}

	#[test]
	fn array_map_lists_types_beside_entries() {
		let bytes = encode(|p| {
			write_map(p, WireType::Bool, WireType::Double, 1, |p| {
				p.write_bool(false)?;
				p.write_double(0.25)
			})
		});
		let json = render_value(&decode(&bytes, TType::Map), &array_style());
		assert_eq!(json, json!({ "key_type": "BOOL", "value_type": "DOUBLE", "entries": { "false": 0.25 } }));
	}

	#[test]
	fn struct_keys_render_as_compact_json() {
		let bytes = encode(|p| {
			write_map(p, WireType::Struct, WireType::I32, 1, |p| {
				write_struct(p, |p| write_field(p, 1, WireType::I32, |p| p.write_i32(9)))?;
				p.write_i32(0)
			})
		});
		let json = render_value(&decode(&bytes, TType::Map), &RenderOptions::default());
		assert_eq!(json.to_string(), r#"{"{\"1 I32\":9} I32":0}"#);
	}
}

mod unit_scalars {

	use serde_json::json;

	use crate::thrift::{RenderOptions, Value, render_value};

	#[test]
	fn non_finite_doubles_render_as_strings() {
		let opt = RenderOptions::default();
		assert_eq!(render_value(&Value::Double(f64::NAN), &opt), json!("NaN"));
		assert_eq!(render_value(&Value::Double(f64::INFINITY), &opt), json!("Infinity"));
		assert_eq!(render_value(&Value::Double(f64::NEG_INFINITY), &opt), json!("-Infinity"));
		assert_eq!(render_value(&Value::Double(-2.5), &opt), json!(-2.5));
	}

	#[test]
	fn invalid_utf8_text_renders_lossily() {
		let json = render_value(&Value::Text(vec![b'o', 0xff, b'k']), &RenderOptions::default());
		assert_eq!(json, json!("o\u{fffd}k"));
	}

	#[test]
	fn small_integers_render_as_numbers() {
		let opt = RenderOptions::default();
		assert_eq!(render_value(&Value::Byte(-128), &opt), json!(-128));
		assert_eq!(render_value(&Value::I16(i16::MAX), &opt), json!(32767));
		assert_eq!(render_value(&Value::I64(i64::MIN), &opt), json!(i64::MIN));
	}
}
