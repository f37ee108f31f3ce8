//! Markdownショットシート出力（CLI版）

use crate::analyzer::AnalysisResult;
use crate::error::Result;
use std::path::Path;
use storyboard_ai_common::export::render_markdown;

pub fn write_markdown(result: &AnalysisResult, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output_path, render_markdown(result))?;
    Ok(())
}
