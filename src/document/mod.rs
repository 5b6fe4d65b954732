//! # Receipt Document Model
//!
//! A single type hierarchy that is both the Rust API and the JSON API.
//!
//! ```
//! use comanda::document::*;
//! use comanda::printer::PrinterConfig;
//!
//! // Rust construction
//! let doc = Document {
//!     content: vec![
//!         ContentElement::Header(Header { text: "CAFE".into() }),
//!         ContentElement::Item(Item::new("Tea", 2, 20)),
//!     ],
//!     variant: Variant::Customer,
//! };
//!
//! // JSON, including legacy shapes without a type tag
//! let json: Document = serde_json::from_str(
//!     r#"{"content": [{"type": "header", "text": "CAFE"}, {"name": "Tea", "quantity": 2, "price": 20}]}"#,
//! ).unwrap();
//!
//! assert_eq!(doc.compile(&PrinterConfig::POS80).bytes, json.compile(&PrinterConfig::POS80).bytes);
//! ```
//!
//! ## Input Normalization
//!
//! Loosely shaped input is mapped onto [`ContentElement`] here, once, so the
//! compiler only ever sees the closed set of element kinds:
//!
//! | Input | Becomes |
//! |-------|---------|
//! | known `type`, valid fields | that element |
//! | truthy `name` and `quantity` | `Item` |
//! | non-empty `text` | `Text` |
//! | anything else | dropped |
//!
//! The fallback rules also apply to a known `type` whose fields are
//! malformed, so one bad element never rejects the whole document.

pub mod types;

mod compile;
mod customer;
mod kitchen;

pub use compile::{Compiled, Diagnostic, compile, compile_program};
pub use types::*;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::printer::PrinterConfig;

/// Elements plus the variant to render them as.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, deserialize_with = "deserialize_content")]
    pub content: Vec<ContentElement>,
    /// Also accepted as `print_type`
    #[serde(default, alias = "print_type")]
    pub variant: Variant,
}

impl Document {
    pub fn new(variant: Variant) -> Self {
        Self {
            content: Vec::new(),
            variant,
        }
    }

    pub fn push(&mut self, element: ContentElement) {
        self.content.push(element);
    }

    /// Compile to ESC/POS bytes plus non-fatal diagnostics.
    pub fn compile(&self, config: &PrinterConfig) -> Compiled {
        compile(&self.content, self.variant, config)
    }

    /// Shorthand for `compile(config).bytes`.
    pub fn build(&self, config: &PrinterConfig) -> Vec<u8> {
        self.compile(config).bytes
    }
}

// ============================================================================
// NORMALIZATION
// ============================================================================

/// Deserialize a content list, normalizing legacy and malformed elements.
///
/// Only a non-array `content` is an error. Individual elements that cannot be
/// normalized are skipped.
pub fn deserialize_content<'de, D>(deserializer: D) -> Result<Vec<ContentElement>, D::Error>
where
    D: Deserializer<'de>,
{
    let values: Vec<Value> = Vec::deserialize(deserializer)?;
    Ok(normalize_content(values))
}

/// Normalize raw JSON values into elements, dropping unsupported ones.
pub fn normalize_content(values: Vec<Value>) -> Vec<ContentElement> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match value {
            Value::Object(map) => normalize_element(index, map),
            other => {
                debug!(index, value = %other, "skipping non-object element");
                None
            }
        })
        .collect()
}

fn normalize_element(index: usize, mut map: Map<String, Value>) -> Option<ContentElement> {
    let tag = map.get("type").and_then(Value::as_str).map(str::to_owned);

    if let Some(tag) = tag.as_deref().filter(|t| ContentElement::TAGS.contains(t)) {
        // Kitchen tickets historically sent the item name as `text`
        if tag == "item" && !map.contains_key("name") {
            if let Some(text) = map.remove("text") {
                map.insert("name".into(), text);
            }
        }

        match serde_json::from_value(Value::Object(map.clone())) {
            Ok(element) => return Some(element),
            Err(e) => debug!(index, tag, error = %e, "malformed element, trying fallback"),
        }
    }

    let element = fallback(&map);
    if element.is_none() {
        debug!(index, tag = tag.as_deref().unwrap_or(""), "skipping unsupported element");
    }
    element
}

fn fallback(map: &Map<String, Value>) -> Option<ContentElement> {
    let name = map.get("name").filter(|v| is_truthy(v));
    let quantity = map.get("quantity").filter(|v| is_truthy(v));

    if let (Some(name), Some(quantity)) = (name, quantity) {
        return Some(ContentElement::Item(Item {
            name: text_of(name),
            quantity: scalar_of(quantity),
            price: map.get("price").and_then(scalar_of),
        }));
    }

    // Untyped text always prints left, whatever `align` it carries
    map.get("text")
        .filter(|v| is_truthy(v))
        .and_then(scalar_of)
        .map(|text| ContentElement::Text(Text::new(text.0)))
}

/// Truthiness the way loosely typed POS frontends mean it.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn scalar_of(value: &Value) -> Option<Scalar> {
    serde_json::from_value(value.clone()).ok()
}
