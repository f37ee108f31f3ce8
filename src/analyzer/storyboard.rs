//! ストーリーボード画像生成
//!
//! AnalysisResult から3x3グリッドのプロンプトを作り、画像生成モデルに渡す。
//! レスポンスの最初の画像パートを `data:image/png;base64,...` として返す。

use super::gemini::{
    Content, GeminiClient, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    ImageConfig, Part,
};
use super::types::AnalysisResult;
use crate::error::{StoryboardError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::Path;
use storyboard_ai_common::{strip_data_url_prefix, PromptVersion, PNG_DATA_URL_PREFIX};
use tracing::{debug, info};

/// ストーリーボードリクエストを組み立てる（同じ入力なら同じリクエスト）
pub fn build_storyboard_request(
    result: &AnalysisResult,
    version: PromptVersion,
    aspect_ratio: &str,
) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content::from_parts(vec![Part::text(
            version.storyboard_prompt(result),
        )])],
        system_instruction: None,
        generation_config: Some(GenerationConfig {
            image_config: Some(ImageConfig {
                aspect_ratio: aspect_ratio.to_string(),
            }),
            ..Default::default()
        }),
    }
}

/// レスポンスから画像Data URLを取り出す
pub fn storyboard_data_url(response: &GenerateContentResponse) -> Result<String> {
    response
        .first_inline_image()
        .map(|image| format!("{}{}", PNG_DATA_URL_PREFIX, image.data))
        .ok_or(StoryboardError::NoImageReturned)
}

/// 3x3ストーリーボード画像を生成
pub async fn generate_storyboard(client: &GeminiClient, result: &AnalysisResult) -> Result<String> {
    let request = build_storyboard_request(result, PromptVersion::default(), &client.aspect_ratio);
    info!(model = %client.image_model, "ストーリーボード生成開始");

    let response = client.generate_content(&client.image_model, &request).await?;
    let data_url = storyboard_data_url(&response)?;

    debug!(chars = data_url.len(), "ストーリーボード画像受信");
    Ok(data_url)
}

/// Data URLをデコードしてPNGとして保存
pub fn save_storyboard(data_url: &str, path: &Path) -> Result<()> {
    let bytes = STANDARD
        .decode(strip_data_url_prefix(data_url))
        .map_err(|e| StoryboardError::Parse(format!("画像データのBase64デコードに失敗: {}", e)))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, bytes)?;
    Ok(())
}
