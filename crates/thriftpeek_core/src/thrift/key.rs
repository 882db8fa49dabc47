use std::cmp::Ordering;
use std::fmt::Display;

use crate::thrift::Value;

/// Build an output key from an ordinal and an optional type annotation.
///
/// The leading ordinal is what keeps wire order recoverable once the tree is
/// rendered as an unordered JSON object.
pub fn format_key(ordinal: impl Display, annotation: &str, include_type: bool) -> String {
	if include_type {
		format!("{ordinal} {annotation}")
	} else {
		ordinal.to_string()
	}
}

/// Text form of a scalar map key; `None` for containers and structs.
pub fn scalar_key_text(value: &Value) -> Option<String> {
	let text = match value {
		Value::Bool(v) => v.to_string(),
		Value::Byte(v) => v.to_string(),
		Value::I16(v) => v.to_string(),
		Value::I32(v) => v.to_string(),
		Value::I64(v) => v.to_string(),
		Value::Double(v) => v.to_string(),
		Value::Text(v) => String::from_utf8_lossy(v).into_owned(),
		Value::Struct(_) | Value::List(_) | Value::Set(_) | Value::Map(_) => return None,
	};
	Some(text)
}

/// Order keys numerically on their leading ordinal, then lexically.
///
/// Keys without a numeric ordinal sort after those with one.
pub fn compare_keys(a: &str, b: &str) -> Ordering {
	match (leading_ordinal(a), leading_ordinal(b)) {
		(Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
		(Some(_), None) => Ordering::Less,
		(None, Some(_)) => Ordering::Greater,
		(None, None) => a.cmp(b),
	}
}

fn leading_ordinal(key: &str) -> Option<i64> {
	key.split(' ').next()?.parse().ok()
}
