//! Element types for the receipt document model.
//!
//! All types derive `Serialize + Deserialize` so the same values work for
//! Rust construction and for JSON requests. Numeric fields are kept as the
//! text the caller sent and only parsed when a line is rendered, so a
//! malformed number degrades to verbatim text instead of failing the request.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ConversionError;
use crate::protocol::text::Alignment;
use crate::render::bitmap;

// ============================================================================
// SCALARS
// ============================================================================

/// A JSON scalar (string, number, boolean) held in its textual form.
///
/// `null` becomes the empty string. Numbers keep serde_json's rendering,
/// so `2` stays `"2"` and `5.5` stays `"5.5"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Scalar(pub String);

impl Scalar {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde_json::Value;

        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(Scalar(s)),
            Value::Number(n) => Ok(Scalar(n.to_string())),
            Value::Bool(b) => Ok(Scalar(b.to_string())),
            Value::Null => Ok(Scalar(String::new())),
            other => Err(serde::de::Error::custom(format!(
                "expected a string or number, got {}",
                other
            ))),
        }
    }
}

/// Deserialize a text field from any JSON scalar, so `{"text": 2024}`
/// prints `2024` instead of failing the element.
pub fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Scalar::deserialize(deserializer).map(|s| s.0)
}

impl AsRef<str> for Scalar {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar(s)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar(n.to_string())
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar(n.to_string())
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar(n.to_string())
    }
}

/// Image bytes as sent by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImagePayload {
    /// Base64, optionally as a `data:` URL
    Encoded(String),
    /// Raw encoded image file bytes
    Bytes(Vec<u8>),
}

impl ImagePayload {
    /// The encoded image file bytes (PNG, JPEG, ...).
    pub fn bytes(&self) -> Result<Cow<'_, [u8]>, ConversionError> {
        match self {
            ImagePayload::Encoded(s) => Ok(Cow::Owned(bitmap::decode_payload(s)?)),
            ImagePayload::Bytes(b) => Ok(Cow::Borrowed(b)),
        }
    }
}

// ============================================================================
// ELEMENTS
// ============================================================================

/// Centered, emphasized title line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    #[serde(default, deserialize_with = "lenient_text")]
    pub text: String,
}

/// Small-font address line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, deserialize_with = "lenient_text")]
    pub text: String,
}

/// Small-font phone line, followed by a blank line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    #[serde(default, deserialize_with = "lenient_text")]
    pub text: String,
}

/// Column titles, followed by a rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableHeader {
    #[serde(default)]
    pub columns: Vec<Scalar>,
}

/// One table body row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    #[serde(default)]
    pub columns: Vec<Scalar>,
}

/// A purchased item. Quantity defaults to 1 and price to 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Scalar>,
}

impl Item {
    pub fn new(name: impl Into<String>, quantity: impl Into<Scalar>, price: impl Into<Scalar>) -> Self {
        Self {
            name: name.into(),
            quantity: Some(quantity.into()),
            price: Some(price.into()),
        }
    }
}

/// Discount line. A `-` anywhere in the amount marks it negative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub amount: Scalar,
}

/// Subtotal line with currency marker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtotal {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub amount: Scalar,
}

/// Grand total between two rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Total {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Scalar>,
}

/// Free text line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    #[serde(default, deserialize_with = "lenient_text")]
    pub text: String,
    /// `left`, `center` or `right`; anything else prints left
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            align: None,
        }
    }

    pub fn aligned(text: impl Into<String>, alignment: Alignment) -> Self {
        let keyword = match alignment {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        };
        Self {
            text: text.into(),
            align: Some(keyword.to_string()),
        }
    }

    pub fn alignment(&self) -> Alignment {
        self.align
            .as_deref()
            .and_then(Alignment::from_keyword)
            .unwrap_or_default()
    }
}

/// Embedded picture, typically a logo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub data: ImagePayload,
}

/// One receipt element.
///
/// JSON uses an internal `type` tag: `{"type": "table-row", "columns": [...]}`.
/// Snake-case spellings of the table tags are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ContentElement {
    Header(Header),
    Address(Address),
    Phone(Phone),
    #[serde(alias = "table_header")]
    TableHeader(TableHeader),
    #[serde(alias = "table_row")]
    TableRow(TableRow),
    Item(Item),
    Discount(Discount),
    Subtotal(Subtotal),
    Total(Total),
    Text(Text),
    Image(Image),
}

impl ContentElement {
    /// Tag names recognised in JSON input.
    pub const TAGS: &'static [&'static str] = &[
        "header",
        "address",
        "phone",
        "table-header",
        "table_header",
        "table-row",
        "table_row",
        "item",
        "discount",
        "subtotal",
        "total",
        "text",
        "image",
    ];

    /// Canonical tag, as used in JSON and logs.
    pub fn tag(&self) -> &'static str {
        match self {
            ContentElement::Header(_) => "header",
            ContentElement::Address(_) => "address",
            ContentElement::Phone(_) => "phone",
            ContentElement::TableHeader(_) => "table-header",
            ContentElement::TableRow(_) => "table-row",
            ContentElement::Item(_) => "item",
            ContentElement::Discount(_) => "discount",
            ContentElement::Subtotal(_) => "subtotal",
            ContentElement::Total(_) => "total",
            ContentElement::Text(_) => "text",
            ContentElement::Image(_) => "image",
        }
    }
}

/// Rendering profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Full receipt with prices and a thank-you footer
    #[default]
    Customer,
    /// Large-print order ticket: header, table text and item counts only
    Kitchen,
}

impl Variant {
    /// Anything other than `kitchen` selects the customer receipt.
    pub fn from_lenient(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("kitchen") {
            Variant::Kitchen
        } else {
            Variant::Customer
        }
    }
}

impl<'de> Deserialize<'de> for Variant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<String> = Option::deserialize(deserializer)?;
        Ok(value.as_deref().map(Variant::from_lenient).unwrap_or_default())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "customer" => Ok(Variant::Customer),
            "kitchen" => Ok(Variant::Kitchen),
            other => Err(format!(
                "unknown variant '{}' (expected customer or kitchen)",
                other
            )),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Customer => f.write_str("customer"),
            Variant::Kitchen => f.write_str("kitchen"),
        }
    }
}
