//! 解析 → ストーリーボードの2段階パイプライン
//!
//! 解析が失敗したらストーリーボードは呼ばない。
//! ストーリーボードの失敗は解析結果を無効にしない（手動で再実行できる）。

use crate::analyzer::{self, AnalysisResult, GeminiClient, ImageInput};
use crate::error::{Result, StoryboardError};
use tracing::{info, warn};

/// 進行中のステップ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Analyzing,
    GeneratingStoryboard,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Analyzing => "フレームを解析中...",
            Stage::GeneratingStoryboard => "ストーリーボードを生成中...",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PipelineOptions {
    /// falseなら解析だけで終える
    pub storyboard: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self { storyboard: true }
    }
}

/// パイプラインの結果
#[derive(Debug)]
pub struct PipelineOutcome {
    pub analysis: AnalysisResult,
    /// 未実行ならNone
    pub storyboard: Option<std::result::Result<String, StoryboardError>>,
}

impl PipelineOutcome {
    pub fn storyboard_url(&self) -> Option<&str> {
        match &self.storyboard {
            Some(Ok(url)) => Some(url.as_str()),
            _ => None,
        }
    }

    pub fn storyboard_error(&self) -> Option<&StoryboardError> {
        match &self.storyboard {
            Some(Err(e)) => Some(e),
            _ => None,
        }
    }
}

/// 2段階パイプラインを実行
///
/// 返り値のErrは解析ステップの失敗のみ。
pub async fn run(
    client: &GeminiClient,
    image: &ImageInput,
    options: PipelineOptions,
    on_stage: impl Fn(Stage),
) -> Result<PipelineOutcome> {
    on_stage(Stage::Analyzing);
    let analysis = analyzer::analyze_image(client, image).await?;

    if !options.storyboard {
        info!("ストーリーボード生成はスキップ");
        return Ok(PipelineOutcome {
            analysis,
            storyboard: None,
        });
    }

    on_stage(Stage::GeneratingStoryboard);
    let storyboard = analyzer::generate_storyboard(client, &analysis).await;
    if let Err(e) = &storyboard {
        warn!(error = %e, "ストーリーボード生成に失敗（解析結果は保持）");
    }

    Ok(PipelineOutcome {
        analysis,
        storyboard: Some(storyboard),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_accessors() {
        let ok = PipelineOutcome {
            analysis: AnalysisResult::default(),
            storyboard: Some(Ok("data:image/png;base64,abc".to_string())),
        };
        assert_eq!(ok.storyboard_url(), Some("data:image/png;base64,abc"));
        assert!(ok.storyboard_error().is_none());

        let failed = PipelineOutcome {
            analysis: AnalysisResult::default(),
            storyboard: Some(Err(StoryboardError::NoImageReturned)),
        };
        assert!(failed.storyboard_url().is_none());
        assert!(matches!(failed.storyboard_error(), Some(StoryboardError::NoImageReturned)));

        let skipped = PipelineOutcome {
            analysis: AnalysisResult::default(),
            storyboard: None,
        };
        assert!(skipped.storyboard_url().is_none());
        assert!(skipped.storyboard_error().is_none());
    }

    #[test]
    fn test_default_options_generate_storyboard() {
        assert!(PipelineOptions::default().storyboard);
    }
}
