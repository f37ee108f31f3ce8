//! storyboard-ai
//!
//! 1枚の画像をVisionモデルで9ショットのシーケンスに展開し、
//! その結果から画像生成モデルで3x3ストーリーボードを描く。

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod scanner;
