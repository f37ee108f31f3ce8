//! Storyboard AI Common Library
//!
//! CLIと各クライアントで共有される型とユーティリティ

pub mod types;
pub mod prompts;
pub mod schema;
pub mod parser;
pub mod data_url;
pub mod error;
pub mod export;

pub use types::{AnalysisResult, NarrativeArc, Shot, VisualAnchor, SHOT_COUNT};
pub use prompts::{PromptVersion, shot_summary};
pub use schema::{response_schema, validate};
pub use parser::{extract_json, parse_analysis_response};
pub use data_url::{mime_type_of, strip_data_url_prefix, to_data_url, PNG_DATA_URL_PREFIX};
pub use error::{Error, Result};
