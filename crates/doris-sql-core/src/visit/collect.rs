use std::fmt::Write as _;
use std::ops::ControlFlow;

use super::{walk, Listener, Node};
use crate::ast::{Expr, ObjectName, ObjectType, Statement, TableRef};

#[derive(Default)]
struct TableCollector {
    cte_names: Vec<String>,
    tables: Vec<ObjectName>,
}

impl TableCollector {
    fn push(&mut self, name: &ObjectName) {
        if name.0.len() == 1
            && self
                .cte_names
                .iter()
                .any(|cte| name.0[0].matches(cte))
        {
            return;
        }
        if !self.tables.contains(name) {
            self.tables.push(name.clone());
        }
    }

    fn statement_target(&mut self, statement: &Statement) {
        match statement {
            Statement::Insert(insert) => self.push(&insert.table),
            Statement::Update(update) => self.push(&update.table),
            Statement::Delete(delete) => self.push(&delete.table),
            Statement::MysqlLoad(load) => self.push(&load.table),
            Statement::Export(export) => self.push(&export.table),
            Statement::Truncate(truncate) => self.push(&truncate.table),
            Statement::CreateTableLike(create) => self.push(&create.like),
            Statement::AlterTable(alter) => self.push(&alter.name),
            Statement::Describe(describe) => self.push(&describe.table),
            Statement::Drop(drop) if drop.object_type == ObjectType::Table => {
                self.push(&drop.name);
            }
            _ => {}
        }
    }
}

impl Listener<'_> for TableCollector {
    fn enter(&mut self, node: Node<'_>) -> ControlFlow<()> {
        match node {
            Node::Statement(statement) => self.statement_target(statement),
            Node::Cte(cte) => self.cte_names.push(cte.name.value.clone()),
            Node::TableRef(TableRef::Table { name, .. }) => self.push(name),
            Node::DataDescription(data) => {
                self.push(&ObjectName(vec![data.table.clone()]));
            }
            _ => {}
        }
        ControlFlow::Continue(())
    }
}

/// Tables a statement reads or writes, deduplicated in first-seen order.
///
/// Names bound by a `WITH` clause are skipped.
#[must_use]
pub fn referenced_tables(statement: &Statement) -> Vec<ObjectName> {
    let mut collector = TableCollector::default();
    let _ = walk(statement, &mut collector);
    collector.tables
}

/// Column references, deduplicated in first-seen order.
#[must_use]
pub fn referenced_columns(statement: &Statement) -> Vec<ObjectName> {
    struct Columns(Vec<ObjectName>);

    impl Listener<'_> for Columns {
        fn enter(&mut self, node: Node<'_>) -> ControlFlow<()> {
            if let Node::Expr(Expr::Column(name)) = node {
                if !self.0.contains(name) {
                    self.0.push(name.clone());
                }
            }
            ControlFlow::Continue(())
        }
    }

    let mut columns = Columns(Vec::new());
    let _ = walk(statement, &mut columns);
    columns.0
}

/// Renders the node kinds of a statement as an indented tree, two spaces
/// per level.
#[must_use]
pub fn outline(statement: &Statement) -> String {
    struct Outline {
        out: String,
        depth: usize,
    }

    impl Listener<'_> for Outline {
        fn enter(&mut self, node: Node<'_>) -> ControlFlow<()> {
            let _ = writeln!(self.out, "{:indent$}{}", "", node.kind(), indent = self.depth * 2);
            self.depth += 1;
            ControlFlow::Continue(())
        }

        fn exit(&mut self, _node: Node<'_>) -> ControlFlow<()> {
            self.depth -= 1;
            ControlFlow::Continue(())
        }
    }

    let mut outline = Outline {
        out: String::new(),
        depth: 0,
    };
    let _ = walk(statement, &mut outline);
    outline.out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::parse_statement;

    fn names(names: &[ObjectName]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_tables_in_joins_and_subqueries() {
        let stmt = parse_statement(
            "SELECT * FROM a JOIN b ON a.id = b.id WHERE a.x IN (SELECT x FROM c) AND EXISTS (SELECT 1 FROM a)",
        )
        .unwrap();
        assert_eq!(names(&referenced_tables(&stmt)), ["a", "b", "c"]);
    }

    #[test]
    fn test_cte_names_are_not_tables() {
        let stmt =
            parse_statement("WITH recent AS (SELECT * FROM orders) SELECT * FROM recent").unwrap();
        assert_eq!(names(&referenced_tables(&stmt)), ["orders"]);
    }

    #[test]
    fn test_dml_targets_come_first() {
        let stmt = parse_statement("INSERT INTO db.dst SELECT * FROM src").unwrap();
        assert_eq!(names(&referenced_tables(&stmt)), ["db.dst", "src"]);

        let stmt = parse_statement("DELETE FROM t USING t JOIN u ON t.a = u.a").unwrap();
        assert_eq!(names(&referenced_tables(&stmt)), ["t", "u"]);
    }

    #[test]
    fn test_columns_deduplicated() {
        let stmt = parse_statement("SELECT a, t.b, a + 1 FROM t ORDER BY t.b").unwrap();
        assert_eq!(names(&referenced_columns(&stmt)), ["a", "t.b"]);
    }

    #[test]
    fn test_outline_indents_by_depth() {
        let stmt = parse_statement("SELECT 1").unwrap();
        assert_eq!(
            outline(&stmt),
            "QueryStatement\n  Query\n    Select\n      SelectItem\n        Literal\n"
        );
    }
}
