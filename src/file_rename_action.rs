use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    action::Action,
    error::{RenameError, RenameResult},
    pool::Pool,
};

/// ロールオーバー時にファイル名を変更するアクション。
#[derive(Clone, Debug)]
pub struct FileRenameAction {
    source: PathBuf,
    destination: PathBuf,
    rename_empty_file: bool,
}

impl FileRenameAction {
    /// `FileRenameAction`を作成する。
    ///
    /// # 引数
    ///
    /// * source: 名前を変更するファイル。
    /// * destination: 変更後のファイルパス。
    /// * rename_empty_file: 空のファイルも名前を変更するかどうか。
    ///   値はそのまま保持され、`rename_empty_file()`で参照できる。
    ///
    /// # 戻り値
    ///
    /// `FileRenameAction`インスタンス。
    pub fn new(
        source: impl AsRef<Path>,
        destination: impl AsRef<Path>,
        rename_empty_file: bool,
    ) -> FileRenameAction {
        Self {
            source: source.as_ref().to_path_buf(),
            destination: destination.as_ref().to_path_buf(),
            rename_empty_file,
        }
    }

    /// 変更元のファイルパスを返却する。
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// 変更先のファイルパスを返却する。
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// 空のファイルも名前を変更するかどうかを返却する。
    pub fn rename_empty_file(&self) -> bool {
        self.rename_empty_file
    }

    /// ファイル名を変更する。
    ///
    /// ディレクトリの作成やコピーによる代替は行わない。
    /// 変更先が既に存在する場合の扱いは、プラットフォームの`rename`に従う。
    pub fn try_rename(&self) -> RenameResult<()> {
        fs::rename(&self.source, &self.destination).map_err(|source| RenameError {
            source_path: self.source.clone(),
            destination_path: self.destination.clone(),
            source,
        })
    }
}

impl Action for FileRenameAction {
    fn execute(&self, _pool: &mut Pool) -> bool {
        match self.try_rename() {
            Ok(()) => {
                tracing::debug!(
                    source = %self.source.display(),
                    destination = %self.destination.display(),
                    rename_empty_file = self.rename_empty_file,
                    "log file renamed"
                );
                true
            }
            Err(err) => {
                tracing::warn!(
                    source = %err.source_path.display(),
                    destination = %err.destination_path.display(),
                    error = %err.source,
                    "log file rename failed"
                );
                false
            }
        }
    }
}
