//! Vision解析
//!
//! 指示文 + インライン画像 + システムインストラクション + responseSchema を送り、
//! 返ってきたJSONテキストを AnalysisResult に変換する

use super::gemini::{Content, GeminiClient, GenerateContentRequest, GenerationConfig, Part};
use super::types::{AnalysisResult, ImageInput};
use crate::error::{StoryboardError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use storyboard_ai_common::{parse_analysis_response, response_schema, PromptVersion};
use tracing::{debug, info, warn};

/// 解析リクエストを組み立てる
pub fn build_analysis_request(image: &ImageInput, version: PromptVersion) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content::from_parts(vec![
            Part::text(version.analysis_instruction()),
            Part::inline(image.mime_type(), image.base64_payload()),
        ])],
        system_instruction: Some(Content::from_parts(vec![Part::text(
            version.system_instruction(),
        )])),
        generation_config: Some(GenerationConfig {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(response_schema()),
            image_config: None,
        }),
    }
}

/// 送信前の画像チェック（空・Base64として不正なものは通信しない）
fn ensure_decodable(image: &ImageInput) -> Result<()> {
    let payload = image.base64_payload();
    if payload.is_empty() {
        return Err(StoryboardError::ImageLoad("画像データが空です".into()));
    }
    STANDARD
        .decode(payload)
        .map_err(|e| StoryboardError::ImageLoad(format!("Base64として不正です: {}", e)))?;
    Ok(())
}

/// 画像を解析して9ショットのシーケンスを得る
pub async fn analyze_image(client: &GeminiClient, image: &ImageInput) -> Result<AnalysisResult> {
    ensure_decodable(image)?;

    let request = build_analysis_request(image, PromptVersion::default());
    info!(model = %client.vision_model, mime = image.mime_type(), "画像解析開始");

    let response = client.generate_content(&client.vision_model, &request).await?;

    let Some(text) = response.text() else {
        if let Some(reason) = response.block_reason() {
            warn!(reason, "プロンプトがブロックされました");
        }
        return Err(StoryboardError::EmptyResponse);
    };
    debug!(chars = text.len(), "解析レスポンス受信");

    let result = parse_analysis_response(&text)?;
    info!(shots = result.shot_list.len(), "画像解析完了");
    Ok(result)
}
