//! Excelショットシート出力（CLI版）
//!
//! 生成本体は storyboard_ai_common::export::shot_sheet

use crate::analyzer::AnalysisResult;
use crate::error::{StoryboardError, Result};
use std::path::Path;
use storyboard_ai_common::export::generate_shot_sheet_xlsx;

pub fn write_excel(result: &AnalysisResult, output_path: &Path) -> Result<()> {
    let buffer = generate_shot_sheet_xlsx(result)
        .map_err(|e| StoryboardError::Export(format!("Excel生成エラー: {}", e)))?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output_path, buffer)?;
    Ok(())
}
