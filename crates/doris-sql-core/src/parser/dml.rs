//! INSERT, UPDATE, DELETE and the bulk data statements.

use super::Parser;
use crate::ast::{
    Assignment, BrokerLoad, DataDescription, Delete, Export, Expr, Ident, Insert, InsertSource,
    MysqlLoad, StorageClause, Statement, Truncate, Update,
};
use crate::error::Result;
use crate::lexer::{Keyword, TokenKind};

impl Parser<'_> {
    pub(super) fn parse_insert(&mut self) -> Result<Statement> {
        self.expect_keyword(Keyword::Insert)?;
        let overwrite = if self.eat_keyword(Keyword::Overwrite) {
            self.expect_keyword(Keyword::Table)?;
            true
        } else {
            self.expect_keyword(Keyword::Into)?;
            self.eat_keyword(Keyword::Table);
            false
        };
        let table = self.parse_table_name()?;
        let partitions = self.parse_partition_names()?;
        let label = if self.check_keyword(Keyword::With) && self.check_nth_keyword(1, Keyword::Label)
        {
            self.advance();
            self.advance();
            Some(self.parse_identifier()?)
        } else {
            None
        };
        let columns = if self.check(&TokenKind::LeftParen) && !self.check_query_start() {
            self.parse_ident_list()?
        } else {
            Vec::new()
        };
        let source = if self.eat_keyword(Keyword::Values) {
            InsertSource::Values(self.parse_comma_separated(Self::parse_values_row)?)
        } else {
            InsertSource::Query(self.parse_boxed_query()?)
        };
        Ok(Statement::Insert(Box::new(Insert {
            overwrite,
            table,
            partitions,
            label,
            columns,
            source,
        })))
    }

    /// `(e, ...)`; `()` inserts a row of defaults.
    fn parse_values_row(&mut self) -> Result<Vec<Expr>> {
        self.expect(&TokenKind::LeftParen)?;
        if self.eat(&TokenKind::RightParen) {
            return Ok(Vec::new());
        }
        let row = self.parse_comma_separated(Self::parse_value)?;
        self.expect(&TokenKind::RightParen)?;
        Ok(row)
    }

    /// An expression, or `DEFAULT` for the column default.
    fn parse_value(&mut self) -> Result<Expr> {
        if self.eat_keyword(Keyword::Default) {
            return Ok(Expr::Default);
        }
        self.parse_expr()
    }

    pub(super) fn parse_update(&mut self) -> Result<Statement> {
        self.expect_keyword(Keyword::Update)?;
        let table = self.parse_table_name()?;
        let alias = self.parse_optional_target_alias()?;
        self.expect_keyword(Keyword::Set)?;
        let assignments = self.parse_comma_separated(|p| {
            let column = p.parse_object_name()?;
            p.expect(&TokenKind::Eq)?;
            let value = p.parse_value()?;
            Ok(Assignment { column, value })
        })?;
        let from = if self.eat_keyword(Keyword::From) {
            self.parse_comma_separated(Self::parse_relation)?
        } else {
            Vec::new()
        };
        let selection = self.parse_optional_where()?;
        Ok(Statement::Update(Box::new(Update {
            table,
            alias,
            assignments,
            from,
            selection,
        })))
    }

    pub(super) fn parse_delete(&mut self) -> Result<Statement> {
        self.expect_keyword(Keyword::Delete)?;
        self.expect_keyword(Keyword::From)?;
        let table = self.parse_table_name()?;
        let partitions = self.parse_partition_names()?;
        let alias = self.parse_optional_target_alias()?;
        let using = if self.eat_keyword(Keyword::Using) {
            self.parse_comma_separated(Self::parse_relation)?
        } else {
            Vec::new()
        };
        let selection = self.parse_optional_where()?;
        Ok(Statement::Delete(Box::new(Delete {
            table,
            alias,
            partitions,
            using,
            selection,
        })))
    }

    /// `[AS] alias` after the target of UPDATE or DELETE.
    fn parse_optional_target_alias(&mut self) -> Result<Option<Ident>> {
        if self.eat_keyword(Keyword::As) {
            return Ok(Some(self.parse_identifier()?));
        }
        let bare = match self.peek().kind {
            TokenKind::Identifier(_) | TokenKind::QuotedIdentifier(_) => true,
            TokenKind::Keyword(keyword) => !keyword.is_reserved(),
            _ => false,
        };
        if bare {
            Ok(Some(self.parse_identifier()?))
        } else {
            Ok(None)
        }
    }

    fn parse_assignment(&mut self) -> Result<Assignment> {
        let column = self.parse_object_name()?;
        self.expect(&TokenKind::Eq)?;
        let value = self.parse_expr()?;
        Ok(Assignment { column, value })
    }

    pub(super) fn parse_load(&mut self) -> Result<Statement> {
        let start = self.position();
        self.expect_keyword(Keyword::Load)?;
        if self.eat_keyword(Keyword::Label) {
            return self.parse_broker_load();
        }
        if self.eat_keyword(Keyword::Data) {
            return self.parse_mysql_load();
        }
        self.parse_unsupported(start, 2)
    }

    fn parse_broker_load(&mut self) -> Result<Statement> {
        let label = self.parse_object_name()?;
        let data = self.parse_parenthesized(Self::parse_data_description)?;
        let storage = self.parse_optional_storage()?;
        let properties = self.parse_optional_properties()?;
        Ok(Statement::BrokerLoad(Box::new(BrokerLoad {
            label,
            data,
            storage,
            properties,
        })))
    }

    fn parse_data_description(&mut self) -> Result<DataDescription> {
        self.expect_keyword(Keyword::Data)?;
        self.expect_keyword(Keyword::Infile)?;
        let files = self.parse_parenthesized(Self::parse_string)?;
        let negative = self.eat_keyword(Keyword::Negative);
        self.expect_keyword(Keyword::Into)?;
        self.expect_keyword(Keyword::Table)?;
        let table = self.parse_identifier()?;
        let partitions = self.parse_partition_names()?;
        let column_separator = self.parse_column_separator()?;
        let line_delimiter = self.parse_line_delimiter()?;
        let format = if self.eat_keyword(Keyword::Format) {
            self.expect_keyword(Keyword::As)?;
            Some(self.parse_name_or_string()?)
        } else {
            None
        };
        let columns = self.parse_optional_ident_list()?;
        let set = self.parse_optional_set_list()?;
        let selection = self.parse_optional_where()?;
        Ok(DataDescription {
            files,
            negative,
            table,
            partitions,
            column_separator,
            line_delimiter,
            format,
            columns,
            set,
            selection,
        })
    }

    fn parse_mysql_load(&mut self) -> Result<Statement> {
        let local = self.eat_keyword(Keyword::Local);
        self.expect_keyword(Keyword::Infile)?;
        let file = self.parse_string()?;
        self.expect_keyword(Keyword::Into)?;
        self.expect_keyword(Keyword::Table)?;
        let table = self.parse_table_name()?;
        let partitions = self.parse_partition_names()?;
        let column_separator = self.parse_column_separator()?;
        let line_delimiter = self.parse_line_delimiter()?;
        let ignore_lines = if self.eat_keyword(Keyword::Ignore) {
            let n = self.parse_u64()?;
            if !self.eat_keyword(Keyword::Lines) {
                self.expect_keyword(Keyword::Rows)?;
            }
            Some(n)
        } else {
            None
        };
        let columns = self.parse_optional_ident_list()?;
        let set = self.parse_optional_set_list()?;
        let properties = self.parse_optional_properties()?;
        Ok(Statement::MysqlLoad(Box::new(MysqlLoad {
            local,
            file,
            table,
            partitions,
            column_separator,
            line_delimiter,
            ignore_lines,
            columns,
            set,
            properties,
        })))
    }

    /// `COLUMNS TERMINATED BY 's'`
    fn parse_column_separator(&mut self) -> Result<Option<String>> {
        if !(self.check_keyword(Keyword::Columns) && self.check_nth_keyword(1, Keyword::Terminated))
        {
            return Ok(None);
        }
        self.advance();
        self.advance();
        self.expect_keyword(Keyword::By)?;
        Ok(Some(self.parse_string()?))
    }

    /// `LINES TERMINATED BY 's'`
    fn parse_line_delimiter(&mut self) -> Result<Option<String>> {
        if !self.eat_keyword(Keyword::Lines) {
            return Ok(None);
        }
        self.expect_keyword(Keyword::Terminated)?;
        self.expect_keyword(Keyword::By)?;
        Ok(Some(self.parse_string()?))
    }

    /// `SET (col = expr, ...)`
    fn parse_optional_set_list(&mut self) -> Result<Vec<Assignment>> {
        if self.eat_keyword(Keyword::Set) {
            self.parse_parenthesized(Self::parse_assignment)
        } else {
            Ok(Vec::new())
        }
    }

    /// `WITH BROKER name (...)`, `WITH S3 (...)`, `WITH RESOURCE 'r' (...)`
    fn parse_optional_storage(&mut self) -> Result<Option<StorageClause>> {
        if !self.check_keyword(Keyword::With) {
            return Ok(None);
        }
        self.advance();
        let Some(word) = self.peek().word() else {
            return Err(self.expected(&["BROKER", "S3", "HDFS", "RESOURCE"]));
        };
        let kind = word.to_ascii_uppercase();
        self.advance();
        let name = if matches!(kind.as_str(), "BROKER" | "RESOURCE")
            && !self.check(&TokenKind::LeftParen)
        {
            Some(Ident::new(self.parse_name_or_string()?))
        } else {
            None
        };
        let properties = if self.check(&TokenKind::LeftParen) {
            self.parse_property_list()?
        } else {
            Vec::new()
        };
        Ok(Some(StorageClause {
            kind,
            name,
            properties,
        }))
    }

    pub(super) fn parse_export(&mut self) -> Result<Statement> {
        self.expect_keyword(Keyword::Export)?;
        self.expect_keyword(Keyword::Table)?;
        let table = self.parse_table_name()?;
        let partitions = self.parse_partition_names()?;
        let selection = self.parse_optional_where()?;
        self.expect_keyword(Keyword::To)?;
        let path = self.parse_string()?;
        let properties = self.parse_optional_properties()?;
        let storage = self.parse_optional_storage()?;
        Ok(Statement::Export(Box::new(Export {
            table,
            partitions,
            selection,
            path,
            properties,
            storage,
        })))
    }

    pub(super) fn parse_truncate(&mut self) -> Result<Statement> {
        self.expect_keyword(Keyword::Truncate)?;
        self.eat_keyword(Keyword::Table);
        let table = self.parse_table_name()?;
        let partitions = self.parse_partition_names()?;
        Ok(Statement::Truncate(Truncate { table, partitions }))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ast::{Literal, ObjectName};
    use crate::config::ParserConfig;

    fn statement(sql: &str) -> Statement {
        Parser::new(sql, &ParserConfig::default())
            .unwrap()
            .parse_single_statement()
            .unwrap()
    }

    #[test]
    fn test_insert_values() {
        let Statement::Insert(insert) =
            statement("INSERT INTO db.t PARTITION (p1) WITH LABEL l1 (a, b) VALUES (1, 'x'), (2, 'y')")
        else {
            panic!("expected INSERT");
        };
        assert!(!insert.overwrite);
        assert_eq!(insert.table, ObjectName::new(["db", "t"]));
        assert_eq!(insert.partitions, vec![Ident::new("p1")]);
        assert_eq!(insert.label, Some(Ident::new("l1")));
        assert_eq!(insert.columns.len(), 2);
        let InsertSource::Values(rows) = &insert.source else {
            panic!("expected VALUES");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][0], Expr::literal(Literal::Integer(2)));
    }

    #[test]
    fn test_insert_overwrite_select() {
        let Statement::Insert(insert) =
            statement("INSERT OVERWRITE TABLE t (a) SELECT a FROM s")
        else {
            panic!("expected INSERT");
        };
        assert!(insert.overwrite);
        assert!(matches!(insert.source, InsertSource::Query(_)));
        assert_eq!(insert.to_string(), "INSERT OVERWRITE TABLE t (a) SELECT a FROM s");
    }

    #[test]
    fn test_insert_parenthesized_query_is_not_a_column_list() {
        let Statement::Insert(insert) = statement("INSERT INTO t (SELECT 1)") else {
            panic!("expected INSERT");
        };
        assert!(insert.columns.is_empty());
    }

    #[test]
    fn test_update_with_alias_and_from() {
        let Statement::Update(update) =
            statement("UPDATE t1 a SET a.v = b.v + 1, c = 0 FROM t2 b WHERE a.id = b.id")
        else {
            panic!("expected UPDATE");
        };
        assert_eq!(update.alias, Some(Ident::new("a")));
        assert_eq!(update.assignments.len(), 2);
        assert_eq!(update.assignments[0].column, ObjectName::new(["a", "v"]));
        assert_eq!(update.from.len(), 1);
        assert!(update.selection.is_some());
    }

    #[test]
    fn test_delete_with_partition_and_using() {
        let Statement::Delete(delete) =
            statement("DELETE FROM t PARTITION p1 USING s WHERE t.id = s.id")
        else {
            panic!("expected DELETE");
        };
        assert_eq!(delete.partitions, vec![Ident::new("p1")]);
        assert_eq!(delete.alias, None);
        assert_eq!(delete.using.len(), 1);
        assert_eq!(
            delete.to_string(),
            "DELETE FROM t PARTITION (p1) USING s WHERE t.id = s.id"
        );
    }

    #[test]
    fn test_broker_load() {
        let Statement::BrokerLoad(load) = statement(
            "LOAD LABEL db.label1 (
                DATA INFILE ('hdfs://host/a.csv', 'hdfs://host/b.csv')
                INTO TABLE t PARTITION (p1)
                COLUMNS TERMINATED BY ','
                FORMAT AS 'csv'
                (k1, k2, tmp)
                SET (k3 = tmp + 1)
                WHERE k1 > 0
            ) WITH BROKER hdfs_broker ('username' = 'u')
            PROPERTIES ('timeout' = '3600')",
        ) else {
            panic!("expected broker load");
        };
        assert_eq!(load.label, ObjectName::new(["db", "label1"]));
        let data = &load.data[0];
        assert_eq!(data.files.len(), 2);
        assert_eq!(data.column_separator.as_deref(), Some(","));
        assert_eq!(data.format.as_deref(), Some("csv"));
        assert_eq!(data.set.len(), 1);
        let storage = load.storage.as_ref().unwrap();
        assert_eq!(storage.kind, "BROKER");
        assert_eq!(storage.name, Some(Ident::new("hdfs_broker")));
        assert_eq!(load.properties[0].value, "3600");
    }

    #[test]
    fn test_s3_storage_has_no_name() {
        let Statement::BrokerLoad(load) = statement(
            "LOAD LABEL l (DATA INFILE ('s3://b/f') INTO TABLE t) WITH S3 ('AWS_REGION' = 'r')",
        ) else {
            panic!("expected broker load");
        };
        let storage = load.storage.unwrap();
        assert_eq!(storage.kind, "S3");
        assert_eq!(storage.name, None);
    }

    #[test]
    fn test_mysql_load() {
        let Statement::MysqlLoad(load) = statement(
            "LOAD DATA LOCAL INFILE '/tmp/a.csv' INTO TABLE t COLUMNS TERMINATED BY '\\t' \
             LINES TERMINATED BY '\\n' IGNORE 1 LINES (a, b) PROPERTIES ('max_filter_ratio' = '0.1')",
        ) else {
            panic!("expected mysql load");
        };
        assert!(load.local);
        assert_eq!(load.file, "/tmp/a.csv");
        assert_eq!(load.ignore_lines, Some(1));
        assert_eq!(load.columns.len(), 2);
        assert_eq!(load.properties.len(), 1);
    }

    #[test]
    fn test_export_and_truncate() {
        let Statement::Export(export) = statement(
            "EXPORT TABLE t PARTITION (p1) WHERE k > 1 TO 'hdfs://out/' \
             PROPERTIES ('column_separator' = ',') WITH BROKER 'b1'",
        ) else {
            panic!("expected EXPORT");
        };
        assert_eq!(export.path, "hdfs://out/");
        assert!(export.selection.is_some());
        assert_eq!(export.storage.unwrap().name, Some(Ident::new("b1")));

        assert_eq!(
            statement("TRUNCATE TABLE t PARTITION (p1, p2)"),
            Statement::Truncate(Truncate {
                table: "t".into(),
                partitions: vec![Ident::new("p1"), Ident::new("p2")],
            })
        );
    }

    #[test]
    fn test_unknown_load_form_is_unsupported() {
        let Statement::Unsupported(unsupported) = statement("LOAD WAREHOUSE w") else {
            panic!("expected unsupported");
        };
        assert_eq!(unsupported.keywords, vec!["LOAD", "WAREHOUSE"]);
    }
}
