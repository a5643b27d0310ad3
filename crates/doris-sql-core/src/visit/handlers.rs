use std::collections::HashMap;
use std::fmt;
use std::ops::ControlFlow;

use super::{Listener, Node, NodeKind};

type Callback<'h> = Box<dyn FnMut(Node<'_>) -> ControlFlow<()> + 'h>;

/// A [`Listener`] built from closures registered per [`NodeKind`].
///
/// Catch-all hooks run before the kind-specific ones. Callbacks of the same
/// kind run in registration order.
///
/// ```rust
/// use std::ops::ControlFlow;
/// use doris_sql_core::{parse_statement, walk, Handlers, NodeKind};
///
/// let stmt = parse_statement("SELECT a, b FROM t WHERE c = 1").unwrap();
/// let mut columns = 0;
/// let mut handlers = Handlers::new().on_enter(NodeKind::Column, |_| {
///     columns += 1;
///     ControlFlow::Continue(())
/// });
/// let _ = walk(&stmt, &mut handlers);
/// drop(handlers);
/// assert_eq!(columns, 3);
/// ```
#[derive(Default)]
pub struct Handlers<'h> {
    enter: HashMap<NodeKind, Vec<Callback<'h>>>,
    exit: HashMap<NodeKind, Vec<Callback<'h>>>,
    enter_any: Vec<Callback<'h>>,
    exit_any: Vec<Callback<'h>>,
}

impl<'h> Handlers<'h> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on_enter<F>(mut self, kind: NodeKind, f: F) -> Self
    where
        F: FnMut(Node<'_>) -> ControlFlow<()> + 'h,
    {
        self.enter.entry(kind).or_default().push(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_exit<F>(mut self, kind: NodeKind, f: F) -> Self
    where
        F: FnMut(Node<'_>) -> ControlFlow<()> + 'h,
    {
        self.exit.entry(kind).or_default().push(Box::new(f));
        self
    }

    /// Runs `f` on entering every node.
    #[must_use]
    pub fn on_enter_any<F>(mut self, f: F) -> Self
    where
        F: FnMut(Node<'_>) -> ControlFlow<()> + 'h,
    {
        self.enter_any.push(Box::new(f));
        self
    }

    /// Runs `f` on leaving every node.
    #[must_use]
    pub fn on_exit_any<F>(mut self, f: F) -> Self
    where
        F: FnMut(Node<'_>) -> ControlFlow<()> + 'h,
    {
        self.exit_any.push(Box::new(f));
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.enter.is_empty()
            && self.exit.is_empty()
            && self.enter_any.is_empty()
            && self.exit_any.is_empty()
    }
}

fn dispatch(
    any: &mut [Callback<'_>],
    by_kind: &mut HashMap<NodeKind, Vec<Callback<'_>>>,
    node: Node<'_>,
) -> ControlFlow<()> {
    for callback in any {
        callback(node)?;
    }
    if let Some(callbacks) = by_kind.get_mut(&node.kind()) {
        for callback in callbacks {
            callback(node)?;
        }
    }
    ControlFlow::Continue(())
}

impl<'a> Listener<'a> for Handlers<'_> {
    fn enter(&mut self, node: Node<'a>) -> ControlFlow<()> {
        dispatch(&mut self.enter_any, &mut self.enter, node)
    }

    fn exit(&mut self, node: Node<'a>) -> ControlFlow<()> {
        dispatch(&mut self.exit_any, &mut self.exit, node)
    }
}

impl fmt::Debug for Handlers<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut enter: Vec<_> = self.enter.keys().collect();
        enter.sort();
        let mut exit: Vec<_> = self.exit.keys().collect();
        exit.sort();
        f.debug_struct("Handlers")
            .field("enter", &enter)
            .field("exit", &exit)
            .field("enter_any", &self.enter_any.len())
            .field("exit_any", &self.exit_any.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::parse_statement;
    use crate::visit::walk;

    #[test]
    fn test_kind_and_catch_all_order() {
        let stmt = parse_statement("UPDATE t SET a = b + 1 WHERE id = 2").unwrap();
        let log = RefCell::new(Vec::new());
        let mut handlers = Handlers::new()
            .on_enter(NodeKind::Assignment, |_| {
                log.borrow_mut().push("assignment".to_string());
                ControlFlow::Continue(())
            })
            .on_enter_any(|node| {
                log.borrow_mut().push(format!("any {}", node.kind()));
                ControlFlow::Continue(())
            })
            .on_exit(NodeKind::Update, |_| {
                log.borrow_mut().push("done".to_string());
                ControlFlow::Continue(())
            });
        assert_eq!(walk(&stmt, &mut handlers), ControlFlow::Continue(()));
        drop(handlers);

        let log = log.into_inner();
        assert_eq!(log[0], "any Update");
        assert_eq!(log[1], "any Assignment");
        assert_eq!(log[2], "assignment");
        assert_eq!(log.last().map(String::as_str), Some("done"));
    }

    #[test]
    fn test_break_from_closure() {
        let stmt = parse_statement("SELECT a FROM t1 JOIN t2 ON t1.x = t2.x").unwrap();
        let mut tables = 0;
        let mut handlers = Handlers::new().on_enter(NodeKind::Table, |_| {
            tables += 1;
            ControlFlow::Break(())
        });
        assert_eq!(walk(&stmt, &mut handlers), ControlFlow::Break(()));
        drop(handlers);
        assert_eq!(tables, 1);
    }

    #[test]
    fn test_empty_handlers_visit_nothing() {
        let handlers = Handlers::new();
        assert!(handlers.is_empty());
        assert!(format!("{handlers:?}").starts_with("Handlers"));
    }
}
