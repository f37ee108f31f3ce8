//! 出力スキーマ
//!
//! `response_schema` はGeminiの `responseSchema` に渡す宣言。
//! リモート側のStructured Outputは保証にならないため、パース後に `validate` で再検査する。

use crate::error::{Error, Result};
use crate::types::{AnalysisResult, SHOT_COUNT};
use serde_json::{json, Value};

/// Gemini `responseSchema`（OpenAPIサブセット）
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "visualAnchor": {
                "type": "OBJECT",
                "properties": {
                    "subject": { "type": "STRING" },
                    "geometry": { "type": "STRING" },
                    "lighting": { "type": "STRING" }
                },
                "required": ["subject", "geometry", "lighting"]
            },
            "narrativeArc": {
                "type": "OBJECT",
                "properties": {
                    "logline": { "type": "STRING" },
                    "mood": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" }
                    }
                },
                "required": ["logline", "mood"]
            },
            "shotList": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": { "type": "INTEGER" },
                        "type": { "type": "STRING" },
                        "duration": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "imagePrompt": { "type": "STRING" },
                        "motionPrompt": { "type": "STRING" },
                        "soundDesign": { "type": "STRING" }
                    },
                    "required": ["id", "type", "duration", "description", "imagePrompt", "motionPrompt", "soundDesign"]
                }
            },
            "consistencyCheck": { "type": "STRING" }
        },
        "required": ["visualAnchor", "narrativeArc", "shotList", "consistencyCheck"]
    })
}

/// 解析結果の構造検査
///
/// - shotListがちょうど9件
/// - 各ショットのidが位置+1（1..=9が昇順で1回ずつ）
pub fn validate(result: &AnalysisResult) -> Result<()> {
    let count = result.shot_list.len();
    if count != SHOT_COUNT {
        return Err(Error::Schema(format!(
            "shotListが{}件ではありません ({}件)",
            SHOT_COUNT, count
        )));
    }

    for (index, shot) in result.shot_list.iter().enumerate() {
        let expected = index as u32 + 1;
        if shot.id != expected {
            return Err(Error::Schema(format!(
                "shotList[{}]のidが不正です (期待値: {}, 実際: {})",
                index, expected, shot.id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Shot;

    fn result_with_ids(ids: &[u32]) -> AnalysisResult {
        AnalysisResult {
            shot_list: ids
                .iter()
                .map(|&id| Shot { id, ..Default::default() })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_ok() {
        let result = result_with_ids(&[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert!(validate(&result).is_ok());
    }

    #[test]
    fn test_validate_too_few_shots() {
        let result = result_with_ids(&[1, 2, 3, 4, 5, 6, 7, 8]);
        match validate(&result) {
            Err(Error::Schema(msg)) => assert!(msg.contains("8件")),
            other => panic!("Expected Schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_too_many_shots() {
        let result = result_with_ids(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        assert!(validate(&result).is_err());
    }

    #[test]
    fn test_validate_duplicate_id() {
        let result = result_with_ids(&[1, 2, 3, 4, 4, 6, 7, 8, 9]);
        match validate(&result) {
            Err(Error::Schema(msg)) => assert!(msg.contains("shotList[4]")),
            other => panic!("Expected Schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_out_of_order() {
        let result = result_with_ids(&[2, 1, 3, 4, 5, 6, 7, 8, 9]);
        assert!(validate(&result).is_err());
    }

    #[test]
    fn test_validate_zero_based_ids() {
        let result = result_with_ids(&[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(validate(&result).is_err());
    }

    #[test]
    fn test_response_schema_required_fields() {
        let schema = response_schema();
        assert_eq!(
            schema["required"],
            json!(["visualAnchor", "narrativeArc", "shotList", "consistencyCheck"])
        );
        assert_eq!(schema["properties"]["shotList"]["type"], "ARRAY");
        assert_eq!(schema["properties"]["shotList"]["items"]["properties"]["id"]["type"], "INTEGER");
        assert_eq!(
            schema["properties"]["shotList"]["items"]["required"].as_array().map(|a| a.len()),
            Some(7)
        );
        assert_eq!(schema["properties"]["narrativeArc"]["properties"]["mood"]["items"]["type"], "STRING");
    }
}
