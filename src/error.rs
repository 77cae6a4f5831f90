use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// ファイル名変更の結果型。
pub type RenameResult<T> = Result<T, RenameError>;

/// ファイル名の変更に失敗したときのエラー。
///
/// メッセージは固定で、変更元と変更先のパスはフィールドとして保持する。
#[derive(Debug, Error)]
#[error("failed to rename log file")]
pub struct RenameError {
    /// 変更元のファイルパス。
    pub source_path: PathBuf,
    /// 変更先のファイルパス。
    pub destination_path: PathBuf,
    /// 原因となったIOエラー。
    pub source: io::Error,
}

impl RenameError {
    /// 原因となったIOエラーの種類を返却する。
    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}
