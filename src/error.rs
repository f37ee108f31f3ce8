use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoryboardError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("APIキーが設定されていません。GEMINI_API_KEY を設定するか `storyboard-ai config --set-api-key YOUR_KEY` で設定してください")]
    MissingApiKey,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("画像読み込みエラー: {0}")]
    ImageLoad(String),

    #[error("API通信エラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("APIエラー (HTTP {status}): {body}")]
    ApiStatus { status: u16, body: String },

    #[error("AIからの応答が空です")]
    EmptyResponse,

    #[error("APIレスポンスのパースに失敗: {0}")]
    Parse(String),

    #[error("ストーリーボード画像が返されませんでした")]
    NoImageReturned,

    #[error("エクスポートエラー: {0}")]
    Export(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

impl StoryboardError {
    /// 通信前に検出される設定不備か
    pub fn is_configuration(&self) -> bool {
        matches!(self, StoryboardError::Config(_) | StoryboardError::MissingApiKey)
    }

    /// リモート呼び出しの失敗（ネットワーク・非2xx）か
    pub fn is_transport(&self) -> bool {
        matches!(self, StoryboardError::Http(_) | StoryboardError::ApiStatus { .. })
    }
}

impl From<storyboard_ai_common::Error> for StoryboardError {
    fn from(err: storyboard_ai_common::Error) -> Self {
        use storyboard_ai_common::Error as CommonError;
        match err {
            CommonError::Io(e) => StoryboardError::Io(e),
            CommonError::Json(e) => StoryboardError::Parse(e.to_string()),
            CommonError::Parse(msg) | CommonError::Schema(msg) => StoryboardError::Parse(msg),
            CommonError::Export(msg) => StoryboardError::Export(msg),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoryboardError>;
