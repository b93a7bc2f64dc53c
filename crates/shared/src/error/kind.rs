//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum shared by every crate in the workspace.

use serde::Serialize;

/// エラー種別の列挙体
///
/// アプリケーション全体で共通のエラー分類を定義します。
/// 各バリアントは「再試行で回復できるか」「ユーザーに何を促すか」を知っています。
///
/// ## Notes
/// * `non_exhaustive` - 将来的に列挙子が追加される可能性があることを示す
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::FetchFailure;
/// assert!(kind.is_recoverable());
/// assert_eq!(kind.as_str(), "Fetch Failure");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 入力値が不正（範囲外の評価値など）
    InvalidInput,
    /// 対象が見つからない
    NotFound,
    /// 既にコレクションに存在する（情報扱い、真のエラーではない）
    DuplicateSave,
    /// ネットワーク / HTTP エラー
    FetchFailure,
    /// サービスが使えるジョークを返さなかった
    EmptyResponse,
    /// 永続ストアが利用不可、または容量超過
    StorageUnavailable,
    /// 内部エラー
    Internal,
}

impl ErrorKind {
    /// ユーザー向けの文字列表現を取得
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::NotFound.as_str(), "Not Found");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "Invalid Input",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::DuplicateSave => "Duplicate Save",
            ErrorKind::FetchFailure => "Fetch Failure",
            ErrorKind::EmptyResponse => "Empty Response",
            ErrorKind::StorageUnavailable => "Storage Unavailable",
            ErrorKind::Internal => "Internal Error",
        }
    }

    /// 再試行（もう一度取得）で回復できるかどうか
    ///
    /// ネットワーク系のエラーは `true` を返します。
    #[inline]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, ErrorKind::FetchFailure | ErrorKind::EmptyResponse)
    }

    /// 情報扱いの結果かどうか
    ///
    /// 重複保存はエラーではなく、通知メッセージとして扱います。
    #[inline]
    pub const fn is_informational(&self) -> bool {
        matches!(self, ErrorKind::DuplicateSave)
    }

    /// 書き込み操作にとって致命的なエラーかどうか
    ///
    /// これらのエラーはログに記録すべきです。
    #[inline]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, ErrorKind::StorageUnavailable | ErrorKind::Internal)
    }

    /// 既定のユーザーアクション
    #[inline]
    pub const fn default_action(&self) -> Option<&'static str> {
        match self {
            ErrorKind::FetchFailure | ErrorKind::EmptyResponse => {
                Some("Try fetching another joke")
            }
            ErrorKind::StorageUnavailable => {
                Some("Check that local storage is available and has free space")
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(ErrorKind::InvalidInput.as_str(), "Invalid Input");
        assert_eq!(ErrorKind::DuplicateSave.as_str(), "Duplicate Save");
        assert_eq!(ErrorKind::StorageUnavailable.as_str(), "Storage Unavailable");
        assert_eq!(ErrorKind::Internal.to_string(), "Internal Error");
    }

    #[test]
    fn test_is_recoverable() {
        assert!(ErrorKind::FetchFailure.is_recoverable());
        assert!(ErrorKind::EmptyResponse.is_recoverable());
        assert!(!ErrorKind::StorageUnavailable.is_recoverable());
        assert!(!ErrorKind::DuplicateSave.is_recoverable());
    }

    #[test]
    fn test_is_fatal() {
        assert!(ErrorKind::StorageUnavailable.is_fatal());
        assert!(ErrorKind::Internal.is_fatal());
        assert!(!ErrorKind::FetchFailure.is_fatal());
        assert!(!ErrorKind::DuplicateSave.is_fatal());
    }

    #[test]
    fn test_default_action() {
        assert!(ErrorKind::FetchFailure.default_action().is_some());
        assert!(ErrorKind::StorageUnavailable.default_action().is_some());
        assert!(ErrorKind::NotFound.default_action().is_none());
    }

    #[test]
    fn test_serialize_screaming_snake() {
        let json = serde_json::to_string(&ErrorKind::StorageUnavailable).unwrap();
        assert_eq!(json, r#""STORAGE_UNAVAILABLE""#);
    }
}
