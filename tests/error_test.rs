//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use storyboard_ai::error::StoryboardError;
use storyboard_ai::export;
use storyboard_ai::scanner;
use std::path::Path;
use tempfile::tempdir;

/// 存在しない画像を読み込んだ場合
#[test]
fn test_load_nonexistent_image() {
    let result = scanner::load_image(Path::new("/nonexistent/path/12345.jpg"), 0);
    assert!(matches!(result, Err(StoryboardError::FileNotFound(_))));
}

/// StoryboardErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        StoryboardError::Config("テスト設定エラー".to_string()),
        StoryboardError::MissingApiKey,
        StoryboardError::FileNotFound("frame.jpg".to_string()),
        StoryboardError::ImageLoad("壊れた画像".to_string()),
        StoryboardError::ApiStatus { status: 429, body: "quota".to_string() },
        StoryboardError::EmptyResponse,
        StoryboardError::Parse("不正なJSON".to_string()),
        StoryboardError::NoImageReturned,
        StoryboardError::Export("Excel".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// MissingApiKeyエラーのメッセージ確認
#[test]
fn test_missing_api_key_message() {
    let display = format!("{}", StoryboardError::MissingApiKey);
    assert!(display.contains("APIキー"));
    assert!(display.contains("GEMINI_API_KEY"));
    assert!(display.contains("storyboard-ai config"));
}

/// ApiStatusはステータスと本文を含む
#[test]
fn test_api_status_message() {
    let err = StoryboardError::ApiStatus { status: 503, body: "overloaded".to_string() };
    let display = format!("{}", err);
    assert!(display.contains("503"));
    assert!(display.contains("overloaded"));
}

/// エラー分類
#[test]
fn test_error_classification() {
    assert!(StoryboardError::MissingApiKey.is_configuration());
    assert!(StoryboardError::Config("x".into()).is_configuration());
    assert!(!StoryboardError::EmptyResponse.is_configuration());

    assert!(StoryboardError::ApiStatus { status: 500, body: String::new() }.is_transport());
    assert!(!StoryboardError::NoImageReturned.is_transport());
    assert!(!StoryboardError::Parse("x".into()).is_transport());
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: StoryboardError = io_err.into();

    assert!(matches!(err, StoryboardError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: StoryboardError = json_err.into();

    assert!(matches!(err, StoryboardError::JsonParse(_)));
}

/// common::Errorのパース・スキーマエラーはParseに寄せる
#[test]
fn test_common_error_conversion() {
    let err: StoryboardError = storyboard_ai_common::Error::Parse("パースエラー".to_string()).into();
    assert!(matches!(err, StoryboardError::Parse(_)));

    let err: StoryboardError = storyboard_ai_common::Error::Schema("shotListが9件ではありません".to_string()).into();
    match err {
        StoryboardError::Parse(msg) => assert!(msg.contains("9件")),
        other => panic!("Expected Parse, got {:?}", other),
    }

    let err: StoryboardError = storyboard_ai_common::Error::Export("xlsx".to_string()).into();
    assert!(matches!(err, StoryboardError::Export(_)));
}

/// 壊れた解析結果JSONは読み込めない
#[test]
fn test_read_result_json_invalid() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("broken.json");
    std::fs::write(&path, r#"{"visualAnchor": {}}"#).unwrap();

    let result = export::read_result_json(&path);
    assert!(matches!(result, Err(StoryboardError::Parse(_))));
}

/// 存在しない解析結果JSON
#[test]
fn test_read_result_json_missing() {
    let result = export::read_result_json(Path::new("/nonexistent/shots.json"));
    assert!(matches!(result, Err(StoryboardError::Io(_))));
}
