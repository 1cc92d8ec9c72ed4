//! Demo catalog contents.

use shared_types::{
    utc_day, Comment, InputSpec, InputType, NodeCategory, NodeListing, OutputSpec,
};

fn input(id: &str, title: &str, input_type: InputType, required: bool, color: &str) -> InputSpec {
    InputSpec {
        id: id.to_string(),
        title: title.to_string(),
        input_type,
        required,
        placeholder: None,
        tooltip: None,
        color: Some(color.to_string()),
    }
}

fn output(id: &str, title: &str, output_type: InputType, description: &str, color: &str) -> OutputSpec {
    OutputSpec {
        id: id.to_string(),
        title: title.to_string(),
        output_type,
        description: Some(description.to_string()),
        color: Some(color.to_string()),
    }
}

/// Listings the demo marketplace starts with.
pub fn demo_listings() -> Vec<NodeListing> {
    vec![
        NodeListing {
            id: "1".to_string(),
            name: "XXXX Quant Node".to_string(),
            description: "Advanced quantitative trading algorithm with machine learning capabilities"
                .to_string(),
            category: NodeCategory::Compute,
            node_type: "ai_model_node".to_string(),
            version: "v0.4".to_string(),
            author: "Victor".to_string(),
            author_id: "victor123".to_string(),
            price: 0.0,
            rating: 4.95,
            review_count: 30,
            subscription_count: 420,
            tags: vec!["Trading".to_string(), "Quant".to_string()],
            inputs: vec![
                input("input1", "Price Data", InputType::Object, true, "#8b5cf6"),
                input("input2", "Volume Data", InputType::Number, false, "#3b82f6"),
            ],
            outputs: vec![
                output(
                    "output1",
                    "Trading Signal",
                    InputType::Object,
                    "Buy/Sell signals with confidence scores",
                    "#10b981",
                ),
                output(
                    "output2",
                    "Risk Assessment",
                    InputType::Number,
                    "Risk level from 0-100",
                    "#f59e0b",
                ),
            ],
            created_at: utc_day(2024, 1, 1),
            updated_at: utc_day(2024, 1, 1),
            is_public: true,
            execution_method: None,
            code_snippet: None,
        },
        NodeListing {
            id: "2".to_string(),
            name: "Signal Generator Pro".to_string(),
            description:
                "Generate trading signals based on technical indicators and market sentiment"
                    .to_string(),
            category: NodeCategory::Compute,
            node_type: "code_node".to_string(),
            version: "v1.2".to_string(),
            author: "Caesar Lynch".to_string(),
            author_id: "caesar456".to_string(),
            price: 29.99,
            rating: 4.7,
            review_count: 15,
            subscription_count: 180,
            tags: vec!["Signals".to_string(), "Technical Analysis".to_string()],
            inputs: vec![],
            outputs: vec![],
            created_at: utc_day(2024, 1, 15),
            updated_at: utc_day(2024, 1, 15),
            is_public: true,
            execution_method: None,
            code_snippet: None,
        },
        NodeListing {
            id: "3".to_string(),
            name: "My Custom Signal Generator".to_string(),
            description: "Personal trading signal generator with custom indicators".to_string(),
            category: NodeCategory::Compute,
            node_type: "code_node".to_string(),
            version: "v1.0".to_string(),
            author: "Current User".to_string(),
            author_id: "current123".to_string(),
            price: 19.99,
            rating: 4.2,
            review_count: 8,
            subscription_count: 45,
            tags: vec!["Custom".to_string(), "Signals".to_string()],
            inputs: vec![],
            outputs: vec![],
            created_at: utc_day(2024, 1, 20),
            updated_at: utc_day(2024, 1, 20),
            is_public: true,
            execution_method: None,
            code_snippet: None,
        },
    ]
}

/// Reviews the demo marketplace starts with, keyed by listing id.
pub fn demo_comments() -> Vec<(String, Comment)> {
    vec![(
        "1".to_string(),
        Comment {
            id: "1".to_string(),
            content: "Excellent node! The signals are very accurate and have improved my trading performance significantly."
                .to_string(),
            rating: Some(5),
            author: "Caesar Lynch".to_string(),
            author_id: "caesar456".to_string(),
            created_at: utc_day(2024, 1, 10),
            replies: vec![],
        },
    )]
}
