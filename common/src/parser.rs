//! APIレスポンスパーサー
//!
//! Visionモデルのレスポンステキストから解析結果JSONを抽出し、
//! AnalysisResultへ変換してスキーマ検査まで行う

use crate::error::{Error, Result};
use crate::schema;
use crate::types::AnalysisResult;

/// APIレスポンスからJSON本文を取り出す
///
/// レスポンス全体がJSONであることを要求する。
/// 許すのは全体が1つの ```json フェンスで囲まれている場合のみで、
/// 前後に文章が付いたものはそのまま返し、後段のパースで失敗させる。
///
/// # Examples
/// ```
/// use storyboard_ai_common::extract_json;
///
/// let response = "```json\n{\"key\": \"value\"}\n```";
/// let json = extract_json(response).unwrap();
/// assert_eq!(json, "{\"key\": \"value\"}");
/// ```
pub fn extract_json(response: &str) -> Result<&str> {
    let trimmed = response.trim();
    if trimmed.is_empty() {
        return Err(Error::Parse("JSONが見つかりません".into()));
    }

    let fenced = trimmed
        .strip_prefix("```json")
        .and_then(|rest| rest.strip_suffix("```"))
        .filter(|inner| !inner.contains("```"));

    Ok(fenced.map(str::trim).unwrap_or(trimmed))
}

/// 解析レスポンスをパース
///
/// JSON抽出 → デシリアライズ → スキーマ検査。
/// 一部だけ埋まったオブジェクトを返すことはない。
pub fn parse_analysis_response(response: &str) -> Result<AnalysisResult> {
    let json_str = extract_json(response)?;
    let result: AnalysisResult = serde_json::from_str(json_str.trim())
        .map_err(|e| Error::Parse(format!("解析結果 JSONパースエラー: {}", e)))?;
    schema::validate(&result)?;
    Ok(result)
}
