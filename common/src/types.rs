//! 解析結果の型定義
//!
//! Visionモデルが返すショットリストの構造:
//! - VisualAnchor: 全ショットで維持する視覚的な基準
//! - NarrativeArc: ログラインとムード
//! - Shot: 9ショットの各カット
//! - AnalysisResult: 最終出力
//!
//! JSONキーはcamelCase。必須フィールドが欠けている場合はデシリアライズ自体を失敗させる。

use serde::{Deserialize, Serialize};

/// 1シーケンスあたりのショット数（3x3グリッド）
pub const SHOT_COUNT: usize = 9;

/// 視覚的アンカー（被写体・空間配置・ライティング）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualAnchor {
    pub subject: String,
    pub geometry: String,
    pub lighting: String,
}

/// ナラティブアーク
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrativeArc {
    pub logline: String,
    /// ムードタグ（順序あり）
    pub mood: Vec<String>,
}

/// ショット1件
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shot {
    /// 1〜9（シーケンス内で一意、並び順が時系列）
    pub id: u32,

    /// カメラ/ショット種別（"Wide", "Close-up" など）
    #[serde(rename = "type")]
    pub shot_type: String,

    /// 尺（例: "3s"）
    pub duration: String,

    pub description: String,
    pub image_prompt: String,
    pub motion_prompt: String,
    pub sound_design: String,
}

/// AI解析結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub visual_anchor: VisualAnchor,
    pub narrative_arc: NarrativeArc,
    pub shot_list: Vec<Shot>,
    pub consistency_check: String,
}

impl AnalysisResult {
    /// IDでショットを取得
    pub fn shot(&self, id: u32) -> Option<&Shot> {
        self.shot_list.iter().find(|s| s.id == id)
    }

    /// 尺の合計（秒）
    ///
    /// "3s" / "3 sec" / "2.5 seconds" のように数値で始まるものだけを合算する。
    pub fn total_duration_secs(&self) -> f32 {
        self.shot_list
            .iter()
            .filter_map(|s| parse_duration_secs(&s.duration))
            .sum()
    }
}

/// 尺文字列を秒数に変換
pub fn parse_duration_secs(duration: &str) -> Option<f32> {
    let trimmed = duration.trim();
    let number_end = trimmed
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(trimmed.len());
    if number_end == 0 {
        return None;
    }

    let unit = trimmed[number_end..].trim().to_lowercase();
    if !matches!(unit.as_str(), "" | "s" | "sec" | "secs" | "second" | "seconds") {
        return None;
    }

    trimmed[..number_end].parse::<f32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "visualAnchor": {"subject": "女性、赤いコート", "geometry": "中央、背景に街灯", "lighting": "Teal/Orange, 左から硬い光"},
            "narrativeArc": {"logline": "雨の夜、待ち人は来ない", "mood": ["tense", "melancholic"]},
            "shotList": [
                {"id": 1, "type": "Wide", "duration": "3s", "description": "街灯の下に立つ", "imagePrompt": "wide shot", "motionPrompt": "slow dolly in", "soundDesign": "rain"}
            ],
            "consistencyCheck": "コートの色を維持"
        }"#
    }

    #[test]
    fn test_deserialize_camel_case() {
        let result: AnalysisResult = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(result.visual_anchor.subject, "女性、赤いコート");
        assert_eq!(result.narrative_arc.mood, vec!["tense", "melancholic"]);
        assert_eq!(result.shot_list[0].shot_type, "Wide");
        assert_eq!(result.shot_list[0].image_prompt, "wide shot");
        assert_eq!(result.consistency_check, "コートの色を維持");
    }

    #[test]
    fn test_serialize_uses_original_keys() {
        let result: AnalysisResult = serde_json::from_str(sample_json()).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"visualAnchor\""));
        assert!(json.contains("\"shotList\""));
        assert!(json.contains("\"type\":\"Wide\""));
        assert!(json.contains("\"motionPrompt\""));
        assert!(json.contains("\"soundDesign\""));
    }

    #[test]
    fn test_missing_required_field_is_error() {
        let json = r#"{"visualAnchor": {"subject": "a", "geometry": "b"}, "narrativeArc": {"logline": "c", "mood": []}, "shotList": [], "consistencyCheck": ""}"#;
        assert!(serde_json::from_str::<AnalysisResult>(json).is_err());
    }

    #[test]
    fn test_mistyped_id_is_error() {
        let json = r#"{"id": "one", "type": "Wide", "duration": "3s", "description": "", "imagePrompt": "", "motionPrompt": "", "soundDesign": ""}"#;
        assert!(serde_json::from_str::<Shot>(json).is_err());
    }

    #[test]
    fn test_parse_duration_secs() {
        assert_eq!(parse_duration_secs("3s"), Some(3.0));
        assert_eq!(parse_duration_secs(" 2.5 seconds "), Some(2.5));
        assert_eq!(parse_duration_secs("4 sec"), Some(4.0));
        assert_eq!(parse_duration_secs("5"), Some(5.0));
        assert_eq!(parse_duration_secs("about 3s"), None);
        assert_eq!(parse_duration_secs("3min"), None);
        assert_eq!(parse_duration_secs(""), None);
    }

    #[test]
    fn test_total_duration_and_lookup() {
        let mut result: AnalysisResult = serde_json::from_str(sample_json()).unwrap();
        let mut second = result.shot_list[0].clone();
        second.id = 2;
        second.duration = "4.5s".to_string();
        result.shot_list.push(second);

        assert_eq!(result.total_duration_secs(), 7.5);
        assert_eq!(result.shot(2).map(|s| s.duration.as_str()), Some("4.5s"));
        assert!(result.shot(9).is_none());
    }
}
