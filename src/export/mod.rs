pub mod excel;
pub mod markdown;

use crate::analyzer::AnalysisResult;
use crate::cli::ExportFormat;
use crate::error::Result;
use std::path::{Path, PathBuf};

fn output_path_for_format(output: &Path, title: &str, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", title, extension))
    } else {
        output.to_path_buf()
    }
}

fn output_paths_for_both(output: &Path, title: &str) -> (PathBuf, PathBuf) {
    if output.is_dir() || output.extension().is_none() {
        let md_path = output.join(format!("{}.md", title));
        let excel_path = output.join(format!("{}.xlsx", title));
        (md_path, excel_path)
    } else {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(title);
        let md_path = parent.join(format!("{}.md", stem));
        let excel_path = parent.join(format!("{}.xlsx", stem));
        (md_path, excel_path)
    }
}

/// 解析結果JSONを読み込む（構造検査つき）
pub fn read_result_json(path: &Path) -> Result<AnalysisResult> {
    let content = std::fs::read_to_string(path)?;
    let result = storyboard_ai_common::parse_analysis_response(&content)?;
    Ok(result)
}

/// 解析結果JSONを書き出す
pub fn write_result_json(result: &AnalysisResult, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(result)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// 書き出したファイルのパスを返す
pub fn export_result(
    result: &AnalysisResult,
    format: &ExportFormat,
    output: &Path,
    title: &str,
) -> Result<Vec<PathBuf>> {
    let written = match format {
        ExportFormat::Markdown => {
            let path = output_path_for_format(output, title, "md");
            markdown::write_markdown(result, &path)?;
            vec![path]
        }
        ExportFormat::Excel => {
            let path = output_path_for_format(output, title, "xlsx");
            excel::write_excel(result, &path)?;
            vec![path]
        }
        ExportFormat::Both => {
            let (md_path, excel_path) = output_paths_for_both(output, title);
            markdown::write_markdown(result, &md_path)?;
            excel::write_excel(result, &excel_path)?;
            vec![md_path, excel_path]
        }
    };

    Ok(written)
}
