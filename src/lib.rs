//! Rollover Helpers
//!
//! ----------------------------------------------------------------------------
//!
//! このクレートには、ログ出力ライブラリの周辺で使用する、小さな部品が含まれている。
//!
//! - `Locale`: 言語、国、バリアントの3つの文字列を保持する値オブジェクト。
//!   リソースバンドルの検索など、ロケールに依存する処理で使用する。
//! - `FileRenameAction`: ログファイルのロールオーバー時に、ファイル名を変更する
//!   アクション。成功したかどうかを`bool`で返す。
//!
//! ロールオーバーの各手順は`Action`トレイトを実装し、`ActionHandle`で1回だけ実行したり、
//! `CompositeAction`で順番に実行したりできる。

pub mod action;
pub mod error;
pub mod file_rename_action;
pub mod locale;
pub mod pool;

pub use action::{Action, ActionHandle, CompositeAction};
pub use error::{RenameError, RenameResult};
pub use file_rename_action::FileRenameAction;
pub use locale::Locale;
pub use pool::Pool;
