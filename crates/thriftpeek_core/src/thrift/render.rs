use serde_json::{Map, Number, Value as Json};

use crate::thrift::{ListValue, MapValue, Message, StructValue, Value, compare_keys, format_key, scalar_key_text};

/// How lists, sets and maps are laid out in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollectionStyle {
	/// Object keyed by formatted ordinal keys.
	#[default]
	Keyed,
	/// Array of elements (or entry object for maps) beside explicit type keys.
	Array,
}

/// JSON rendering switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
	/// Embed type annotations in keys.
	pub include_types: bool,
	/// Container layout.
	pub collections: CollectionStyle,
	/// Reorder object keys by ordinal instead of keeping wire order.
	pub sort_keys: bool,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			include_types: true,
			collections: CollectionStyle::Keyed,
			sort_keys: false,
		}
	}
}

/// Render a message as an envelope object with fixed, ordinal-prefixed keys.
pub fn render_message(message: &Message, opt: &RenderOptions) -> Json {
	let mut out = Map::new();
	out.insert("1 NAME".to_owned(), Json::String(message.name.clone()));
	out.insert("2 SEQ_ID".to_owned(), Json::from(message.sequence_id));
	out.insert("3 TYPE".to_owned(), Json::String(message.kind.as_str().to_owned()));
	out.insert("4 PAYLOAD".to_owned(), render_struct(&message.payload, opt));
	Json::Object(out)
}

/// Render one decoded value.
pub fn render_value(value: &Value, opt: &RenderOptions) -> Json {
	match value {
		Value::Bool(v) => Json::Bool(*v),
		Value::Byte(v) => Json::from(*v),
		Value::I16(v) => Json::from(*v),
		Value::I32(v) => Json::from(*v),
		Value::I64(v) => Json::from(*v),
		Value::Double(v) => render_double(*v),
		Value::Text(v) => Json::String(String::from_utf8_lossy(v).into_owned()),
		Value::Struct(item) => render_struct(item, opt),
		Value::List(list) | Value::Set(list) => render_list(list, opt),
		Value::Map(map) => render_map(map, opt),
	}
}

/// Text used as the ordinal of a map entry key.
///
/// Composite keys fall back to their compact JSON rendering.
pub fn map_key_text(key: &Value, opt: &RenderOptions) -> String {
	scalar_key_text(key).unwrap_or_else(|| render_value(key, opt).to_string())
}

fn render_struct(item: &StructValue, opt: &RenderOptions) -> Json {
	let mut out = Map::new();
	for field in &item.fields {
		let key = format_key(field.id, &field.annotation(), opt.include_types);
		out.insert(key, render_value(&field.value, opt));
	}
	finish_object(out, opt)
}

fn render_list(list: &ListValue, opt: &RenderOptions) -> Json {
	match opt.collections {
		CollectionStyle::Keyed => {
			let mut out = Map::new();
			for (idx, item) in list.items.iter().enumerate() {
				let key = format_key(idx, &item.annotation(list.elem_type), opt.include_types);
				out.insert(key, render_value(item, opt));
			}
			finish_object(out, opt)
		}
		CollectionStyle::Array => {
			let mut out = Map::new();
			out.insert("elem_type".to_owned(), Json::String(list.elem_annotation.to_string()));
			out.insert("elems".to_owned(), Json::Array(list.items.iter().map(|item| render_value(item, opt)).collect()));
			Json::Object(out)
		}
	}
}

fn render_map(map: &MapValue, opt: &RenderOptions) -> Json {
	match opt.collections {
		CollectionStyle::Keyed => {
			let mut out = Map::new();
			for entry in &map.entries {
				let key = format_key(map_key_text(&entry.key, opt), &entry.value.annotation(map.value_type), opt.include_types);
				out.insert(key, render_value(&entry.value, opt));
			}
			finish_object(out, opt)
		}
		CollectionStyle::Array => {
			let mut entries = Map::new();
			for entry in &map.entries {
				entries.insert(map_key_text(&entry.key, opt), render_value(&entry.value, opt));
			}

			let mut out = Map::new();
			out.insert("key_type".to_owned(), Json::String(map.key_annotation.to_string()));
			out.insert("value_type".to_owned(), Json::String(map.value_annotation.to_string()));
			out.insert("entries".to_owned(), finish_object(entries, opt));
			Json::Object(out)
		}
	}
}

fn render_double(value: f64) -> Json {
	if let Some(number) = Number::from_f64(value) {
		return Json::Number(number);
	}

	let label = if value.is_nan() {
		"NaN"
	} else if value.is_sign_positive() {
		"Infinity"
	} else {
		"-Infinity"
	};
	Json::String(label.to_owned())
}

fn finish_object(out: Map<String, Json>, opt: &RenderOptions) -> Json {
	if !opt.sort_keys {
		return Json::Object(out);
	}

	let mut entries: Vec<(String, Json)> = out.into_iter().collect();
	entries.sort_by(|(a, _), (b, _)| compare_keys(a, b));
	Json::Object(entries.into_iter().collect())
}

#[cfg(test)]
mod tests;
