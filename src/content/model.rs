//! Content record types.
//!
//! Wire-compatible with the original site's stored JSON: block variants
//! are tagged by a `type` field with a sibling `content` payload, and
//! the tag names (`heading_h2`, `interactive_chart`, ...) are fixed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Chart style for an interactive chart block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Line,
    Bar,
    Pie,
}

/// One typed unit of article body content, rendered in sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum ContentBlock {
    HeadingH2 {
        text: String,
    },
    Paragraph {
        text: String,
    },
    InteractiveChart {
        chart_type: ChartType,
        title: String,
        data: Vec<serde_json::Value>,
        x_key: String,
        y_key: String,
    },
    ComparisonTable {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    PullQuote {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        author: Option<String>,
    },
    DefinitionBox {
        term: String,
        definition: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        related_terms: Vec<String>,
    },
}

/// A cited source attached to a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    pub url: String,
}

/// A full publishable post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub main_image: String,
    pub content_blocks: Vec<ContentBlock>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<Source>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing view of a post: everything except the body blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub main_image: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Post> for PostSummary {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            slug: post.slug.clone(),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            main_image: post.main_image.clone(),
            categories: post.categories.clone(),
            tags: post.tags.clone(),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Admin write payload; the store assigns id and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDraft {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub main_image: String,
    #[serde(default)]
    pub content_blocks: Vec<ContentBlock>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<Source>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_tag_names() {
        let block = ContentBlock::HeadingH2 {
            text: "Overview".into(),
        };
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "heading_h2");
        assert_eq!(json["content"]["text"], "Overview");

        let chart = ContentBlock::InteractiveChart {
            chart_type: ChartType::Bar,
            title: "Visa issuance".into(),
            data: vec![serde_json::json!({"year": "2023", "count": 120})],
            x_key: "year".into(),
            y_key: "count".into(),
        };
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["type"], "interactive_chart");
        assert_eq!(json["content"]["chart_type"], "bar");
    }

    #[test]
    fn test_block_roundtrip_from_stored_shape() {
        let raw = r#"{
            "type": "definition_box",
            "content": {
                "term": "COE",
                "definition": "Certificate of Eligibility",
                "related_terms": ["visa", "immigration"]
            }
        }"#;
        let block: ContentBlock = serde_json::from_str(raw).unwrap();
        match &block {
            ContentBlock::DefinitionBox { term, related_terms, .. } => {
                assert_eq!(term, "COE");
                assert_eq!(related_terms.len(), 2);
            }
            other => panic!("unexpected block: {:?}", other),
        }
    }

    #[test]
    fn test_optional_fields_omitted() {
        let quote = ContentBlock::PullQuote {
            text: "quoted".into(),
            author: None,
        };
        let json = serde_json::to_value(&quote).unwrap();
        assert!(json["content"].get("author").is_none());
    }
}
