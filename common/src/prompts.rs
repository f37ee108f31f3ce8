//! プロンプト生成モジュール
//!
//! リモートモデルとの契約となる固定テキスト:
//! - システムインストラクション（ビデオディレクターのペルソナと3フェーズのタスク）
//! - 解析リクエストの短い指示文
//! - ストーリーボード画像生成プロンプト
//!
//! 文言の変更はモデルの挙動を変えるため、テンプレートは `PromptVersion` 単位で固定する。

use crate::types::AnalysisResult;

const V1_SYSTEM_INSTRUCTION: &str = r#"You are an expert AI Video Director and Prompt Engineer specializing in image-to-video workflows (Runway, Luma, Midjourney).

Task:
Analyze the provided reference image and expand it into a 9-shot "Micro-Narrative" sequence (20–40 seconds). This sequence must be strictly derived from the visual data in the image, focusing on atmosphere and tension rather than a complex plot.

Phase 1: Deep Analysis (The Anchor)
First, analyze the reference image and output a "Visual Anchor" summary.
This ensures consistency. List:
- Subject Details: Exact clothing textures, hair style, physical features.
- Spatial Geometry: Where the subject is relative to the background objects.
- Lighting & Grade: precise color codes (e.g., Teal/Orange, Desaturated), light source direction, and shadow hardness.

Phase 2: The Sequence Rules
- Continuity is King: Do not hallucinate new characters. If the image is empty, the video is about the environment.
- The Micro-Arc:
  Shots 1-3: Atmosphere establishment (The "Before").
  Shots 4-6: The Shift (Wind picks up, light changes, subject turns head).
  Shots 7-9: The Reaction (Focus on texture, eye movement, or stabilization).
- Motion Logic: Use realistic camera moves only (Pan, Tilt, Dolly, Truck, Rack Focus).

Phase 3: The Output
Return a structured JSON object according to the schema provided."#;

const V1_ANALYSIS_INSTRUCTION: &str =
    "Analyze this image as an AI Video Director and generate the 9-shot sequence.";

/// プロンプトテンプレートのバージョン
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PromptVersion {
    #[default]
    V1,
}

impl PromptVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptVersion::V1 => "v1",
        }
    }

    /// Visionリクエストのシステムインストラクション
    pub fn system_instruction(&self) -> &'static str {
        match self {
            PromptVersion::V1 => V1_SYSTEM_INSTRUCTION,
        }
    }

    /// 画像と一緒に送る指示文
    pub fn analysis_instruction(&self) -> &'static str {
        match self {
            PromptVersion::V1 => V1_ANALYSIS_INSTRUCTION,
        }
    }

    /// ストーリーボード（3x3グリッド）生成プロンプト
    ///
    /// 同じ解析結果からは常に同じ文字列を返す。
    pub fn storyboard_prompt(&self, result: &AnalysisResult) -> String {
        let shot_descriptions = shot_summary(result);
        let lighting = &result.visual_anchor.lighting;
        let mood = result.narrative_arc.mood.join(", ");

        match self {
            PromptVersion::V1 => format!(
                "A professional 3x3 cinematic storyboard grid. There are 9 distinct panels arranged in a 3x3 layout. \
Each panel illustrates a scene from this cinematic sequence: {shot_descriptions}. \
Style: Highly realistic cinematic rendering, maintaining consistent lighting: {lighting}. \
Mood: {mood}. The storyboard shows technical camera angles. No text inside panels. Dark background."
            ),
        }
    }
}

impl std::str::FromStr for PromptVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "v1" | "1" => Ok(PromptVersion::V1),
            _ => Err(format!("Unknown prompt version: {}. Use v1", s)),
        }
    }
}

impl std::fmt::Display for PromptVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ショット概要（"Shot N: description" を "; " で連結、shotListの順序を維持）
pub fn shot_summary(result: &AnalysisResult) -> String {
    result
        .shot_list
        .iter()
        .map(|s| format!("Shot {}: {}", s.id, s.description))
        .collect::<Vec<_>>()
        .join("; ")
}
