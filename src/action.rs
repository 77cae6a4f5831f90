use std::fmt::{self, Debug};

use crate::pool::Pool;

/// ロールオーバーの1つの手順。
///
/// `execute`は手順を実行して、成功したかどうかを返却する。
/// 失敗の詳細は呼び出し元に返さない。
pub trait Action {
    fn execute(&self, pool: &mut Pool) -> bool;
}

impl<A: Action + ?Sized> Action for Box<A> {
    fn execute(&self, pool: &mut Pool) -> bool {
        (**self).execute(pool)
    }
}

/// アクションを1回だけ実行するためのハンドル。
///
/// `run`を呼び出す前に`close`された場合、アクションは実行されない。
#[derive(Debug)]
pub struct ActionHandle<A> {
    action: A,
    complete: bool,
    interrupted: bool,
}

impl<A: Action> ActionHandle<A> {
    /// 未実行の`ActionHandle`を作成する。
    pub fn new(action: A) -> ActionHandle<A> {
        Self {
            action,
            complete: false,
            interrupted: false,
        }
    }

    /// アクションを実行する。
    ///
    /// # 引数
    ///
    /// - pool: 実行中に使用するスコープ。
    ///
    /// # 戻り値
    ///
    /// 実行した場合は`Some(アクションの結果)`。実行済み、または`close`済みの場合は`None`。
    pub fn run(&mut self, pool: &mut Pool) -> Option<bool> {
        if self.interrupted {
            return None;
        }

        let result = self.action.execute(pool);
        self.complete = true;
        self.interrupted = true;

        Some(result)
    }

    /// 未実行のアクションを取り消す。
    pub fn close(&mut self) {
        self.interrupted = true;
    }

    /// アクションが実行されたかどうかを返却する。結果の成否は問わない。
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// 保持しているアクションを返却する。
    pub fn action(&self) -> &A {
        &self.action
    }

    /// ハンドルを消費して、保持しているアクションを返却する。
    pub fn into_inner(self) -> A {
        self.action
    }
}

/// 複数のアクションを順番に実行するアクション。
pub struct CompositeAction {
    actions: Vec<Box<dyn Action>>,
    stop_on_error: bool,
}

impl CompositeAction {
    /// `CompositeAction`を作成する。
    ///
    /// # 引数
    ///
    /// - actions: 実行するアクション。先頭から順に実行する。
    /// - stop_on_error: `true`の場合、最初に失敗したアクションで実行を中断する。
    ///
    /// # 戻り値
    ///
    /// `CompositeAction`インスタンス。
    pub fn new(actions: Vec<Box<dyn Action>>, stop_on_error: bool) -> CompositeAction {
        Self {
            actions,
            stop_on_error,
        }
    }

    /// アクションの数を返却する。
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// アクションが1つもないかどうかを返却する。
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// 失敗したときに実行を中断するかどうかを返却する。
    pub fn stop_on_error(&self) -> bool {
        self.stop_on_error
    }
}

impl Action for CompositeAction {
    /// `stop_on_error`の場合は、失敗したアクションがあれば`false`を返却する。
    /// そうでない場合は、すべてのアクションを実行して`true`を返却する。
    fn execute(&self, pool: &mut Pool) -> bool {
        for (index, action) in self.actions.iter().enumerate() {
            if action.execute(pool) {
                continue;
            }
            if self.stop_on_error {
                tracing::debug!(
                    failed_index = index,
                    remaining = self.actions.len() - index - 1,
                    "composite action stopped on failure"
                );
                return false;
            }
            tracing::warn!(failed_index = index, "composite action step failed");
        }

        true
    }
}

impl Debug for CompositeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeAction")
            .field("actions", &self.actions.len())
            .field("stop_on_error", &self.stop_on_error)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    /// 呼び出し回数を記録し、決められた結果を返すアクション。
    struct Fixed {
        result: bool,
        calls: Rc<Cell<usize>>,
    }

    impl Fixed {
        fn boxed(result: bool, calls: &Rc<Cell<usize>>) -> Box<dyn Action> {
            Box::new(Fixed {
                result,
                calls: Rc::clone(calls),
            })
        }
    }

    impl Action for Fixed {
        fn execute(&self, _pool: &mut Pool) -> bool {
            self.calls.set(self.calls.get() + 1);
            self.result
        }
    }

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn test_handle_runs_once() {
        let calls = Rc::new(Cell::new(0));
        let mut handle = ActionHandle::new(Fixed::boxed(true, &calls));
        let mut pool = Pool::new();

        assert!(!handle.is_complete());
        assert_eq!(Some(true), handle.run(&mut pool));
        assert!(handle.is_complete());
        assert_eq!(None, handle.run(&mut pool));
        assert_eq!(1, calls.get());
    }

    #[test]
    fn test_handle_gives_access_to_action() {
        let calls = Rc::new(Cell::new(0));
        let composite = CompositeAction::new(vec![Fixed::boxed(true, &calls)], true);
        let mut handle = ActionHandle::new(composite);

        assert_eq!(1, handle.action().len());
        assert!(handle.action().stop_on_error());

        assert_eq!(Some(true), handle.run(&mut Pool::new()));
        let composite = handle.into_inner();

        assert_eq!(1, composite.len());
        assert!(composite.execute(&mut Pool::new()));
        assert_eq!(2, calls.get());
    }

    #[test]
    fn test_handle_complete_after_failed_run() {
        let calls = Rc::new(Cell::new(0));
        let mut handle = ActionHandle::new(Fixed::boxed(false, &calls));

        assert_eq!(Some(false), handle.run(&mut Pool::new()));
        assert!(handle.is_complete());
    }

    #[test]
    fn test_handle_close_before_run() {
        let calls = Rc::new(Cell::new(0));
        let mut handle = ActionHandle::new(Fixed::boxed(true, &calls));

        handle.close();

        assert_eq!(None, handle.run(&mut Pool::new()));
        assert!(!handle.is_complete());
        assert_eq!(0, calls.get());
    }

    #[test]
    fn test_composite_stop_on_error() {
        init_tracing();
        let calls = Rc::new(Cell::new(0));
        let composite = CompositeAction::new(
            vec![
                Fixed::boxed(true, &calls),
                Fixed::boxed(false, &calls),
                Fixed::boxed(true, &calls),
            ],
            true,
        );

        assert!(!composite.execute(&mut Pool::new()));
        assert_eq!(2, calls.get());
    }

    #[test]
    fn test_composite_continues_without_stop_on_error() {
        init_tracing();
        let calls = Rc::new(Cell::new(0));
        let composite = CompositeAction::new(
            vec![
                Fixed::boxed(false, &calls),
                Fixed::boxed(false, &calls),
                Fixed::boxed(true, &calls),
            ],
            false,
        );

        assert_eq!(3, composite.len());
        assert!(!composite.stop_on_error());
        assert!(composite.execute(&mut Pool::new()));
        assert_eq!(3, calls.get());
    }

    #[test]
    fn test_empty_composite_succeeds() {
        let composite = CompositeAction::new(Vec::new(), true);

        assert!(composite.is_empty());
        assert!(composite.execute(&mut Pool::new()));
    }

    #[test]
    fn test_nested_composite() {
        let calls = Rc::new(Cell::new(0));
        let inner: Box<dyn Action> = Box::new(CompositeAction::new(
            vec![Fixed::boxed(true, &calls), Fixed::boxed(false, &calls)],
            true,
        ));
        let outer = CompositeAction::new(vec![inner, Fixed::boxed(true, &calls)], true);

        assert!(!outer.execute(&mut Pool::new()));
        assert_eq!(2, calls.get());
    }
}
