//! # Node Listings
//!
//! Descriptive records for trading nodes offered in the marketplace, plus the
//! input/output schema a node declares to the workflow editor.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ParseKindError;

/// Marketplace category of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeCategory {
    /// Data sources (price feeds, listeners).
    Input,
    /// Models and code.
    Compute,
    /// Order placement.
    Trade,
    /// Sinks (datasets, messengers).
    Output,
    /// User-defined.
    Custom,
}

impl NodeCategory {
    /// Categories offered by the authoring form.
    pub const AUTHORABLE: [NodeCategory; 4] = [
        NodeCategory::Input,
        NodeCategory::Compute,
        NodeCategory::Trade,
        NodeCategory::Output,
    ];

    /// Identifier used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Compute => "compute",
            Self::Trade => "trade",
            Self::Output => "output",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeCategory {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "input" => Ok(Self::Input),
            "compute" => Ok(Self::Compute),
            "trade" => Ok(Self::Trade),
            "output" => Ok(Self::Output),
            "custom" => Ok(Self::Custom),
            other => Err(ParseKindError::UnknownCategory(other.to_string())),
        }
    }
}

/// Widget type of a node input or output handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputType {
    None,
    #[default]
    Text,
    Number,
    Select,
    Multiselect,
    Object,
    Paragraph,
    Address,
    SearchSelect,
    ParamMatrix,
    Radio,
    RadioGroup,
    Button,
    Array,
}

impl InputType {
    /// Types offered when authoring a node, with their labels.
    pub const AUTHORABLE: [(InputType, &'static str); 7] = [
        (InputType::Text, "Text"),
        (InputType::Number, "Number"),
        (InputType::Select, "Select"),
        (InputType::Multiselect, "Multi Select"),
        (InputType::Object, "Object"),
        (InputType::Array, "Array"),
        (InputType::Paragraph, "Paragraph"),
    ];
}

impl FromStr for InputType {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_value(serde_json::Value::String(s.to_string()))
            .map_err(|_| ParseKindError::UnknownInputType(s.to_string()))
    }
}

/// Declared input of a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputSpec {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub input_type: InputType,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    /// Handle color in the workflow editor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl InputSpec {
    /// Blank text input with the given id.
    pub fn blank(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            input_type: InputType::Text,
            required: false,
            placeholder: Some(String::new()),
            tooltip: None,
            color: None,
        }
    }
}

/// Declared output of a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputSpec {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub output_type: InputType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl OutputSpec {
    /// Blank text output with the given id.
    pub fn blank(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            output_type: InputType::Text,
            description: Some(String::new()),
            color: None,
        }
    }
}

/// A trading node as listed in the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeListing {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: NodeCategory,
    /// Node type understood by the workflow engine (e.g. `ai_model_node`).
    #[serde(rename = "type")]
    pub node_type: String,
    pub version: String,
    pub author: String,
    pub author_id: String,
    /// Price per subscription; `0.0` means free.
    pub price: f64,
    pub rating: f64,
    pub review_count: u32,
    pub subscription_count: u64,
    pub tags: Vec<String>,
    pub inputs: Vec<InputSpec>,
    pub outputs: Vec<OutputSpec>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_public: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_snippet: Option<String>,
}

impl NodeListing {
    /// Whether the node can be subscribed to without payment.
    pub fn is_free(&self) -> bool {
        self.price <= 0.0
    }
}

/// A review left on a node detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    pub author: String,
    pub author_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub replies: Vec<Comment>,
}

/// Midnight UTC on the given calendar day, or the epoch for an invalid date.
pub fn utc_day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_type_parses_camel_case() {
        assert_eq!("searchSelect".parse::<InputType>().unwrap(), InputType::SearchSelect);
        assert_eq!("multiselect".parse::<InputType>().unwrap(), InputType::Multiselect);
        assert!("slider".parse::<InputType>().is_err());
    }

    #[test]
    fn test_category_round_trip() {
        for category in NodeCategory::AUTHORABLE {
            assert_eq!(category.as_str().parse::<NodeCategory>().unwrap(), category);
        }
    }

    #[test]
    fn test_utc_day_invalid_date_is_epoch() {
        assert_eq!(utc_day(2024, 2, 30).timestamp(), 0);
        assert!(utc_day(2024, 1, 15) > utc_day(2024, 1, 1));
    }

    #[test]
    fn test_input_spec_serializes_type_field() {
        let json = serde_json::to_value(InputSpec::blank("input_1")).unwrap();
        assert_eq!(json["type"], "text");
        assert_eq!(json["required"], false);
    }
}
