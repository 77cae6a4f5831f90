/// アクションの実行中に使用するメモリ確保のスコープ。
///
/// アクションは`Pool`を1回の実行の間だけ借用し、所有しない。
/// 現在の実装では状態を持たず、アクションの振る舞いにも影響しない。
#[derive(Debug, Default)]
pub struct Pool {
    _private: (),
}

impl Pool {
    /// `Pool`を作成する。
    pub fn new() -> Pool {
        Pool { _private: () }
    }
}
