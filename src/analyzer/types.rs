use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use storyboard_ai_common::{mime_type_of, strip_data_url_prefix, to_data_url};

pub use storyboard_ai_common::{AnalysisResult, NarrativeArc, Shot, VisualAnchor};

/// 解析に渡す画像（Data URLまたは生のBase64）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInput {
    data: String,
}

impl ImageInput {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }

    /// バイト列からData URLを作る
    pub fn from_bytes(mime_type: &str, bytes: &[u8]) -> Self {
        Self::new(to_data_url(mime_type, &STANDARD.encode(bytes)))
    }

    /// 送信用のBase64部分（Data URL接頭辞は除去済み）
    pub fn base64_payload(&self) -> &str {
        strip_data_url_prefix(&self.data)
    }

    /// Data URLでなければ image/jpeg
    pub fn mime_type(&self) -> &str {
        mime_type_of(&self.data)
    }

    pub fn as_str(&self) -> &str {
        &self.data
    }
}
