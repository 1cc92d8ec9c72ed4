//! # Node Form
//!
//! Field values of the add/edit node page. Price and tags are kept as the
//! raw text the author typed and parsed on demand.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::{InputSpec, InputType, NodeCategory, NodeListing, OutputSpec, UserIdentity};
use uuid::Uuid;

use super::errors::{AuthoringError, HandleList};

/// Version a new node starts at.
pub const DEFAULT_VERSION: &str = "v1.0";

/// How many handles of each kind the preview card shows.
pub const PREVIEW_HANDLES: usize = 2;

/// Publish or keep as a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitMode {
    /// Visible in the marketplace
    Publish,
    /// Only visible to the author
    Draft,
}

/// A single input field edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputField {
    /// Handle title
    Title(String),
    /// Widget type
    Type(InputType),
    /// Required flag
    Required(bool),
    /// Placeholder text
    Placeholder(String),
    /// Tooltip text
    Tooltip(String),
}

/// A single output field edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputField {
    /// Handle title
    Title(String),
    /// Value type
    Type(InputType),
    /// Description text
    Description(String),
}

/// Parse the price box. Anything that is not a finite, non-negative number
/// is free.
pub fn parse_price(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => price,
        _ => 0.0,
    }
}

/// Split a comma-separated tag list, trimming and dropping blanks.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn fresh_id(prefix: &str) -> String {
    format!("{prefix}_{}", Uuid::new_v4().simple())
}

/// What the preview card shows.
#[derive(Debug, Clone, PartialEq)]
pub struct NodePreview {
    /// Node name
    pub name: String,
    /// Node description
    pub description: String,
    /// Category
    pub category: NodeCategory,
    /// Parsed price
    pub price: f64,
    /// First inputs
    pub inputs: Vec<InputSpec>,
    /// First outputs
    pub outputs: Vec<OutputSpec>,
    /// Parsed tags
    pub tags: Vec<String>,
}

/// The add/edit node form.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeForm {
    /// Node name (required)
    pub name: String,
    /// Node description (required)
    pub description: String,
    /// Category
    pub category: NodeCategory,
    /// Node type understood by the workflow engine
    pub node_type: String,
    /// Version label
    pub version: String,
    /// Raw price text
    pub price: String,
    /// Raw comma-separated tags
    pub tags: String,
    /// How the node executes
    pub execution_method: String,
    /// Source shown on the detail page
    pub code_snippet: String,
    inputs: Vec<InputSpec>,
    outputs: Vec<OutputSpec>,
}

impl Default for NodeForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            category: NodeCategory::Compute,
            node_type: String::new(),
            version: DEFAULT_VERSION.to_string(),
            price: String::new(),
            tags: String::new(),
            execution_method: String::new(),
            code_snippet: String::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }
}

impl NodeForm {
    /// Blank form for a new node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Form prefilled from an existing listing.
    pub fn from_listing(listing: &NodeListing) -> Self {
        Self {
            name: listing.name.clone(),
            description: listing.description.clone(),
            category: listing.category,
            node_type: listing.node_type.clone(),
            version: listing.version.clone(),
            price: listing.price.to_string(),
            tags: listing.tags.join(", "),
            execution_method: listing.execution_method.clone().unwrap_or_default(),
            code_snippet: listing.code_snippet.clone().unwrap_or_default(),
            inputs: listing.inputs.clone(),
            outputs: listing.outputs.clone(),
        }
    }

    /// Category options in display order, with labels.
    pub fn category_options() -> [(NodeCategory, &'static str); 4] {
        NodeCategory::AUTHORABLE.map(|c| {
            let label = match c {
                NodeCategory::Input => "Input",
                NodeCategory::Compute => "Compute",
                NodeCategory::Trade => "Trade",
                NodeCategory::Output => "Output",
                NodeCategory::Custom => "Custom",
            };
            (c, label)
        })
    }

    /// Input type options in display order, with labels.
    pub fn input_type_options() -> &'static [(InputType, &'static str)] {
        &InputType::AUTHORABLE
    }

    /// Parsed price.
    pub fn parsed_price(&self) -> f64 {
        parse_price(&self.price)
    }

    /// Parsed tags.
    pub fn parsed_tags(&self) -> Vec<String> {
        parse_tags(&self.tags)
    }

    /// Declared inputs, in order.
    pub fn inputs(&self) -> &[InputSpec] {
        &self.inputs
    }

    /// Declared outputs, in order.
    pub fn outputs(&self) -> &[OutputSpec] {
        &self.outputs
    }

    /// Append a blank input and return its id.
    pub fn add_input(&mut self) -> String {
        let input = InputSpec::blank(fresh_id("input"));
        let id = input.id.clone();
        self.inputs.push(input);
        id
    }

    /// Remove the input at `index`.
    pub fn remove_input(&mut self, index: usize) -> Result<InputSpec, AuthoringError> {
        self.check(HandleList::Inputs, index)?;
        Ok(self.inputs.remove(index))
    }

    /// Change one field of the input at `index`.
    pub fn update_input(&mut self, index: usize, field: InputField) -> Result<(), AuthoringError> {
        let len = self.inputs.len();
        let input = self
            .inputs
            .get_mut(index)
            .ok_or(AuthoringError::IndexOutOfRange {
                list: HandleList::Inputs,
                index,
                len,
            })?;
        match field {
            InputField::Title(title) => input.title = title,
            InputField::Type(input_type) => input.input_type = input_type,
            InputField::Required(required) => input.required = required,
            InputField::Placeholder(text) => input.placeholder = Some(text),
            InputField::Tooltip(text) => input.tooltip = Some(text),
        }
        Ok(())
    }

    /// Append a blank output and return its id.
    pub fn add_output(&mut self) -> String {
        let output = OutputSpec::blank(fresh_id("output"));
        let id = output.id.clone();
        self.outputs.push(output);
        id
    }

    /// Remove the output at `index`.
    pub fn remove_output(&mut self, index: usize) -> Result<OutputSpec, AuthoringError> {
        self.check(HandleList::Outputs, index)?;
        Ok(self.outputs.remove(index))
    }

    /// Change one field of the output at `index`.
    pub fn update_output(
        &mut self,
        index: usize,
        field: OutputField,
    ) -> Result<(), AuthoringError> {
        let len = self.outputs.len();
        let output = self
            .outputs
            .get_mut(index)
            .ok_or(AuthoringError::IndexOutOfRange {
                list: HandleList::Outputs,
                index,
                len,
            })?;
        match field {
            OutputField::Title(title) => output.title = title,
            OutputField::Type(output_type) => output.output_type = output_type,
            OutputField::Description(text) => output.description = Some(text),
        }
        Ok(())
    }

    fn check(&self, list: HandleList, index: usize) -> Result<(), AuthoringError> {
        let len = match list {
            HandleList::Inputs => self.inputs.len(),
            HandleList::Outputs => self.outputs.len(),
        };
        if index >= len {
            return Err(AuthoringError::IndexOutOfRange { list, index, len });
        }
        Ok(())
    }

    /// Name and description must be filled in.
    pub fn validate(&self) -> Result<(), AuthoringError> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.description.trim().is_empty() {
            missing.push("description");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(AuthoringError::Validation(missing))
        }
    }

    /// Preview card contents.
    pub fn preview(&self) -> NodePreview {
        NodePreview {
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category,
            price: self.parsed_price(),
            inputs: self.inputs.iter().take(PREVIEW_HANDLES).cloned().collect(),
            outputs: self.outputs.iter().take(PREVIEW_HANDLES).cloned().collect(),
            tags: self.parsed_tags(),
        }
    }

    /// Build the listing to submit. `existing` carries over the id, counters
    /// and creation time when editing.
    pub fn to_listing(
        &self,
        existing: Option<&NodeListing>,
        author: &UserIdentity,
        mode: SubmitMode,
        now: DateTime<Utc>,
    ) -> NodeListing {
        let non_empty = |s: &str| (!s.trim().is_empty()).then(|| s.to_string());
        NodeListing {
            id: existing
                .map(|l| l.id.clone())
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            category: self.category,
            node_type: self.node_type.clone(),
            version: self.version.clone(),
            author: existing
                .map(|l| l.author.clone())
                .unwrap_or_else(|| author.username.clone()),
            author_id: existing
                .map(|l| l.author_id.clone())
                .unwrap_or_else(|| author.id.clone()),
            price: self.parsed_price(),
            rating: existing.map_or(0.0, |l| l.rating),
            review_count: existing.map_or(0, |l| l.review_count),
            subscription_count: existing.map_or(0, |l| l.subscription_count),
            tags: self.parsed_tags(),
            inputs: self.inputs.clone(),
            outputs: self.outputs.clone(),
            created_at: existing.map_or(now, |l| l.created_at),
            updated_at: now,
            is_public: mode == SubmitMode::Publish,
            execution_method: non_empty(&self.execution_method),
            code_snippet: non_empty(&self.code_snippet),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tn_05_marketplace::demo_listings;

    #[test]
    fn test_defaults() {
        let form = NodeForm::new();
        assert_eq!(form.version, "v1.0");
        assert_eq!(form.category, NodeCategory::Compute);
        assert_eq!(form.parsed_price(), 0.0);
    }

    #[test]
    fn test_price_parsing() {
        assert_eq!(parse_price("29.99"), 29.99);
        assert_eq!(parse_price(" 5 "), 5.0);
        assert_eq!(parse_price("abc"), 0.0);
        assert_eq!(parse_price(""), 0.0);
        assert_eq!(parse_price("-3"), 0.0);
        assert_eq!(parse_price("NaN"), 0.0);
    }

    #[test]
    fn test_tag_parsing() {
        assert_eq!(parse_tags("AI, Trading ,, "), vec!["AI", "Trading"]);
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn test_handles_get_unique_prefixed_ids() {
        let mut form = NodeForm::new();
        let a = form.add_input();
        let b = form.add_input();
        let out = form.add_output();
        assert!(a.starts_with("input_"));
        assert!(out.starts_with("output_"));
        assert_ne!(a, b);
        assert_eq!(form.inputs()[0].input_type, InputType::Text);
        assert_eq!(form.inputs()[0].placeholder.as_deref(), Some(""));
    }

    #[test]
    fn test_update_and_remove_by_index() {
        let mut form = NodeForm::new();
        form.add_input();
        let second = form.add_input();
        form.update_input(1, InputField::Title("Volume".into())).unwrap();
        form.update_input(1, InputField::Type(InputType::Number)).unwrap();
        form.update_input(1, InputField::Required(true)).unwrap();

        let removed = form.remove_input(0).unwrap();
        assert_ne!(removed.id, second);
        assert_eq!(form.inputs().len(), 1);
        assert_eq!(form.inputs()[0].id, second);
        assert_eq!(form.inputs()[0].title, "Volume");
        assert!(form.inputs()[0].required);
    }

    #[test]
    fn test_out_of_range_index() {
        let mut form = NodeForm::new();
        form.add_output();
        assert_eq!(
            form.remove_output(1),
            Err(AuthoringError::IndexOutOfRange {
                list: HandleList::Outputs,
                index: 1,
                len: 1
            })
        );
        assert!(form
            .update_input(0, InputField::Title("x".into()))
            .is_err());
        assert!(form
            .update_output(0, OutputField::Description("d".into()))
            .is_ok());
    }

    #[test]
    fn test_validation() {
        let mut form = NodeForm::new();
        assert_eq!(
            form.validate(),
            Err(AuthoringError::Validation(vec!["name", "description"]))
        );
        form.name = "Momentum".into();
        form.description = "   ".into();
        assert_eq!(form.validate(), Err(AuthoringError::Validation(vec!["description"])));
        form.description = "Trend follower".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_preview_shows_first_two_handles() {
        let mut form = NodeForm::new();
        for _ in 0..3 {
            form.add_input();
            form.add_output();
        }
        form.tags = "a, b".into();
        let preview = form.preview();
        assert_eq!(preview.inputs.len(), 2);
        assert_eq!(preview.outputs.len(), 2);
        assert_eq!(preview.tags, vec!["a", "b"]);
    }

    #[test]
    fn test_edit_round_trip_keeps_identity() {
        let existing = demo_listings().remove(0);
        let form = NodeForm::from_listing(&existing);
        assert_eq!(form.tags, "Trading, Quant");
        assert_eq!(form.inputs().len(), 2);

        let author = UserIdentity::new("someone-else", "Someone");
        let now = Utc::now();
        let listing = form.to_listing(Some(&existing), &author, SubmitMode::Draft, now);
        assert_eq!(listing.id, existing.id);
        assert_eq!(listing.author_id, existing.author_id);
        assert_eq!(listing.created_at, existing.created_at);
        assert_eq!(listing.subscription_count, existing.subscription_count);
        assert_eq!(listing.updated_at, now);
        assert!(!listing.is_public);
    }

    #[test]
    fn test_new_listing_belongs_to_author() {
        let mut form = NodeForm::new();
        form.name = "Momentum".into();
        form.description = "Trend follower".into();
        form.price = "12.5".into();
        let author = UserIdentity::new("current123", "Current User");
        let listing = form.to_listing(None, &author, SubmitMode::Publish, Utc::now());
        assert_eq!(listing.author, "Current User");
        assert_eq!(listing.price, 12.5);
        assert!(listing.is_public);
        assert!(listing.execution_method.is_none());
        assert_eq!(listing.review_count, 0);
    }
}
