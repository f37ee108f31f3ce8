//! Data URLユーティリティ

/// ストーリーボード画像のData URL接頭辞
pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

const DEFAULT_MIME_TYPE: &str = "image/jpeg";

/// Data URLからBase64データ部分を取り出す
///
/// `data:` で始まらない文字列はそのままBase64とみなす。
/// 既に取り出し済みの文字列を渡しても結果は変わらない。
///
/// # Examples
/// ```
/// use storyboard_ai_common::strip_data_url_prefix;
///
/// assert_eq!(strip_data_url_prefix("data:image/jpeg;base64,/9j/4AAQ"), "/9j/4AAQ");
/// assert_eq!(strip_data_url_prefix("/9j/4AAQ"), "/9j/4AAQ");
/// ```
pub fn strip_data_url_prefix(data: &str) -> &str {
    let trimmed = data.trim();
    if trimmed.starts_with("data:") {
        if let Some((_, payload)) = trimmed.split_once(',') {
            return payload.trim();
        }
    }
    trimmed
}

/// Data URLからMIMEタイプを抽出
///
/// 取れない場合は "image/jpeg"
pub fn mime_type_of(data: &str) -> &str {
    data.trim()
        .strip_prefix("data:")
        .and_then(|rest| rest.split([';', ',']).next())
        .filter(|mime| !mime.is_empty())
        .unwrap_or(DEFAULT_MIME_TYPE)
}

/// Data URLを組み立てる
pub fn to_data_url(mime_type: &str, base64_data: &str) -> String {
    format!("data:{};base64,{}", mime_type, base64_data)
}
