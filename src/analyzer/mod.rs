//! 画像解析・ストーリーボード生成
//!
//! - gemini: generateContent トランスポート
//! - vision: 画像 → AnalysisResult（9ショット）
//! - storyboard: AnalysisResult → 3x3グリッド画像（Data URL）

pub mod gemini;
pub mod storyboard;
pub mod types;
pub mod vision;

pub use gemini::GeminiClient;
pub use storyboard::{generate_storyboard, save_storyboard};
pub use types::{AnalysisResult, ImageInput, NarrativeArc, Shot, VisualAnchor};
pub use vision::analyze_image;
