//! CREATE, ALTER and DROP.

use super::Parser;
use crate::ast::{
    AggregateType, AlterDatabase, AlterDatabaseOperation, AlterSystem, AlterTable,
    AlterTableOperation, AlterUser, AlterView, Buckets, BuildMode, ClusterNode, ColumnDef,
    ColumnPosition, CreateCatalog, CreateDatabase, CreateIndex, CreateMaterializedView,
    CreateRole, CreateTable, CreateTableLike, CreateUser, CreateView, Distribution, Drop,
    DropRole, DropUser, IndexDef, IndexType, IntervalUnit, KeyDesc, KeyKind, LessThan, Literal,
    ObjectType, PartitionDef, PartitionDesc, PartitionKind, PartitionValue, Property,
    RefreshMethod, RefreshSpec, RefreshTrigger, Statement, SystemAction, UserOptions, ViewColumn,
};
use crate::error::Result;
use crate::lexer::{Keyword, TokenKind};

impl Parser<'_> {
    pub(super) fn parse_create(&mut self) -> Result<Statement> {
        let start = self.position();
        self.expect_keyword(Keyword::Create)?;

        let or_replace = if self.eat_keyword(Keyword::Or) {
            self.expect_keyword(Keyword::Replace)?;
            true
        } else {
            false
        };
        if or_replace && !self.check_keyword(Keyword::View) {
            return self.parse_unsupported(start, 4);
        }

        let external = self.eat_keyword(Keyword::External);
        let temporary = self.eat_keyword(Keyword::Temporary);
        if external || temporary {
            return self.parse_create_table(external, temporary);
        }

        match self.peek().keyword() {
            Some(Keyword::Table) => self.parse_create_table(false, false),
            Some(Keyword::View) => self.parse_create_view(or_replace),
            Some(Keyword::Materialized) if self.check_nth_keyword(1, Keyword::View) => {
                self.parse_create_materialized_view()
            }
            Some(Keyword::Database | Keyword::Schema) => {
                self.advance();
                let if_not_exists = self.parse_if_not_exists()?;
                let name = self.parse_object_name()?;
                let properties = self.parse_optional_properties()?;
                Ok(Statement::CreateDatabase(CreateDatabase {
                    if_not_exists,
                    name,
                    properties,
                }))
            }
            Some(Keyword::Index) => self.parse_create_index(),
            Some(Keyword::User) => {
                self.advance();
                let if_not_exists = self.parse_if_not_exists()?;
                let user = self.parse_user_identity()?;
                let options = self.parse_user_options()?;
                Ok(Statement::CreateUser(CreateUser {
                    if_not_exists,
                    user,
                    options,
                }))
            }
            Some(Keyword::Role) => {
                self.advance();
                let if_not_exists = self.parse_if_not_exists()?;
                let name = self.parse_identifier()?;
                let comment = self.parse_optional_comment()?;
                Ok(Statement::CreateRole(CreateRole {
                    if_not_exists,
                    name,
                    comment,
                }))
            }
            Some(Keyword::Catalog) => self.parse_create_catalog(),
            _ => self.parse_unsupported(start, 2),
        }
    }

    fn parse_create_table(&mut self, external: bool, temporary: bool) -> Result<Statement> {
        self.expect_keyword(Keyword::Table)?;
        let if_not_exists = self.parse_if_not_exists()?;
        let name = self.parse_table_name()?;

        if self.eat_keyword(Keyword::Like) {
            let like = self.parse_table_name()?;
            return Ok(Statement::CreateTableLike(CreateTableLike {
                external,
                if_not_exists,
                name,
                like,
            }));
        }

        let mut table = CreateTable::new(name);
        table.external = external;
        table.temporary = temporary;
        table.if_not_exists = if_not_exists;

        if self.check(&TokenKind::LeftParen) && !self.check_query_start() {
            self.advance();
            loop {
                if self.check_keyword(Keyword::Index) {
                    table.indexes.push(self.parse_index_def()?);
                } else {
                    table.columns.push(self.parse_column_def()?);
                }
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
            self.expect(&TokenKind::RightParen)?;
        }

        if self.eat_keyword(Keyword::Engine) {
            self.expect(&TokenKind::Eq)?;
            table.engine = Some(self.parse_identifier()?);
        }
        table.key = self.parse_optional_key_desc()?;
        table.comment = self.parse_optional_comment()?;
        if self.check_keyword(Keyword::Partition) && self.check_nth_keyword(1, Keyword::By) {
            table.partition = Some(self.parse_partition_desc()?);
        }
        table.distribution = self.parse_optional_distribution()?;
        table.properties = self.parse_optional_properties()?;
        if self.eat_keyword(Keyword::As) {
            table.as_query = Some(self.parse_boxed_query()?);
        }
        Ok(Statement::CreateTable(Box::new(table)))
    }

    /// `name type [KEY] [agg] [[NOT] NULL] [AUTO_INCREMENT] [DEFAULT e]
    /// [ON UPDATE e] [COMMENT 's']`
    fn parse_column_def(&mut self) -> Result<ColumnDef> {
        let name = self.parse_identifier()?;
        let data_type = self.parse_data_type()?;
        let mut column = ColumnDef::new(name, data_type);

        column.key = self.eat_keyword(Keyword::Key);
        if let Some(aggregate) = self.peek().word().and_then(AggregateType::from_name) {
            self.advance();
            column.aggregate = Some(aggregate);
        }
        if self.eat_keyword(Keyword::Not) {
            self.expect_keyword(Keyword::Null)?;
            column.nullable = Some(false);
        } else if self.eat_keyword(Keyword::Null) {
            column.nullable = Some(true);
        }
        column.auto_increment = self.eat_keyword(Keyword::AutoIncrement);
        if column.auto_increment && self.eat(&TokenKind::LeftParen) {
            column.auto_increment_start = Some(self.parse_u64()?);
            self.expect(&TokenKind::RightParen)?;
        }
        if self.eat_keyword(Keyword::Default) {
            column.default = Some(self.parse_unary()?);
        }
        if self.check_keyword(Keyword::On) && self.check_nth_keyword(1, Keyword::Update) {
            self.advance();
            self.advance();
            column.on_update = Some(self.parse_unary()?);
        }
        column.comment = self.parse_optional_comment()?;
        Ok(column)
    }

    fn parse_index_def(&mut self) -> Result<IndexDef> {
        self.expect_keyword(Keyword::Index)?;
        let name = self.parse_identifier()?;
        let columns = self.parse_ident_list()?;
        let (index_type, properties, comment) = self.parse_index_options()?;
        Ok(IndexDef {
            name,
            columns,
            index_type,
            properties,
            comment,
        })
    }

    fn parse_index_options(
        &mut self,
    ) -> Result<(Option<IndexType>, Vec<Property>, Option<String>)> {
        let index_type = if self.eat_keyword(Keyword::Using) {
            let Some(ty) = self.peek().word().and_then(IndexType::from_name) else {
                return Err(self.expected(&["BITMAP", "INVERTED", "NGRAM_BF"]));
            };
            self.advance();
            Some(ty)
        } else {
            None
        };
        let properties = self.parse_optional_properties()?;
        let comment = self.parse_optional_comment()?;
        Ok((index_type, properties, comment))
    }

    fn parse_optional_key_desc(&mut self) -> Result<Option<KeyDesc>> {
        let kind = match self.peek().keyword() {
            Some(Keyword::Duplicate) => KeyKind::Duplicate,
            Some(Keyword::Unique) => KeyKind::Unique,
            Some(Keyword::Aggregate) => KeyKind::Aggregate,
            _ => return Ok(None),
        };
        if !self.check_nth_keyword(1, Keyword::Key) {
            return Ok(None);
        }
        self.advance();
        self.advance();
        let columns = self.parse_ident_list()?;
        Ok(Some(KeyDesc { kind, columns }))
    }

    /// `PARTITION BY RANGE|LIST (cols) (defs)`
    fn parse_partition_desc(&mut self) -> Result<PartitionDesc> {
        self.expect_keyword(Keyword::Partition)?;
        self.expect_keyword(Keyword::By)?;
        let kind = if self.eat_keyword(Keyword::Range) {
            PartitionKind::Range
        } else if self.eat_keyword(Keyword::List) {
            PartitionKind::List
        } else {
            return Err(self.expected(&["RANGE", "LIST"]));
        };
        let columns = self.parse_ident_list()?;
        self.expect(&TokenKind::LeftParen)?;
        let partitions = if self.check(&TokenKind::RightParen) {
            Vec::new()
        } else {
            self.parse_comma_separated(Self::parse_partition_def)?
        };
        self.expect(&TokenKind::RightParen)?;
        Ok(PartitionDesc {
            kind,
            columns,
            partitions,
        })
    }

    fn parse_partition_def(&mut self) -> Result<PartitionDef> {
        if self.eat_keyword(Keyword::From) {
            let from = self.parse_partition_values()?;
            self.expect_keyword(Keyword::To)?;
            let to = self.parse_partition_values()?;
            self.expect_keyword(Keyword::Interval)?;
            let interval = self.parse_u64()?;
            let unit = if self.peek().word().and_then(IntervalUnit::from_name).is_some() {
                Some(self.parse_interval_unit()?)
            } else {
                None
            };
            return Ok(PartitionDef::Step {
                from,
                to,
                interval,
                unit,
            });
        }

        self.expect_keyword(Keyword::Partition)?;
        let if_not_exists = self.parse_if_not_exists()?;
        let name = self.parse_identifier()?;
        self.expect_keyword(Keyword::Values)?;

        if self.eat_keyword(Keyword::Less) {
            self.expect_keyword(Keyword::Than)?;
            let bound = if self.eat_keyword(Keyword::MaxValue) {
                LessThan::MaxValue
            } else {
                LessThan::Values(self.parse_partition_values()?)
            };
            return Ok(PartitionDef::LessThan {
                if_not_exists,
                name,
                bound,
            });
        }
        if self.eat(&TokenKind::LeftBracket) {
            let lower = self.parse_partition_values()?;
            self.expect(&TokenKind::Comma)?;
            let upper = self.parse_partition_values()?;
            self.expect(&TokenKind::RightParen)?;
            return Ok(PartitionDef::FixedRange {
                if_not_exists,
                name,
                lower,
                upper,
            });
        }
        if self.eat_keyword(Keyword::In) {
            self.expect(&TokenKind::LeftParen)?;
            let values = if self.check(&TokenKind::LeftParen) {
                self.parse_comma_separated(Self::parse_partition_values)?
            } else {
                self.parse_comma_separated(Self::parse_partition_value)?
                    .into_iter()
                    .map(|value| vec![value])
                    .collect()
            };
            self.expect(&TokenKind::RightParen)?;
            return Ok(PartitionDef::In {
                if_not_exists,
                name,
                values,
            });
        }
        Err(self.expected(&["LESS THAN", "[", "IN"]))
    }

    /// `(v, ...)`; may be empty.
    fn parse_partition_values(&mut self) -> Result<Vec<PartitionValue>> {
        self.expect(&TokenKind::LeftParen)?;
        if self.eat(&TokenKind::RightParen) {
            return Ok(Vec::new());
        }
        let values = self.parse_comma_separated(Self::parse_partition_value)?;
        self.expect(&TokenKind::RightParen)?;
        Ok(values)
    }

    fn parse_partition_value(&mut self) -> Result<PartitionValue> {
        let negative = self.check(&TokenKind::Minus)
            && matches!(
                self.peek_nth(1).kind,
                TokenKind::Integer(_) | TokenKind::Decimal(_)
            );
        if negative {
            self.advance();
        }
        let literal = match &self.peek().kind {
            TokenKind::Keyword(Keyword::MaxValue) if !negative => {
                self.advance();
                return Ok(PartitionValue::MaxValue);
            }
            TokenKind::String(value) if !negative => Literal::String(value.clone()),
            TokenKind::Keyword(Keyword::Null) if !negative => Literal::Null,
            TokenKind::Integer(value) => Literal::Integer(if negative { -value } else { *value }),
            TokenKind::Decimal(value) => {
                if negative {
                    Literal::Decimal(format!("-{value}"))
                } else {
                    Literal::Decimal(value.clone())
                }
            }
            _ => return Err(self.expected(&["partition value"])),
        };
        self.advance();
        Ok(PartitionValue::Literal(literal))
    }

    /// `DISTRIBUTED BY HASH (cols)|RANDOM [BUCKETS n|AUTO]`
    fn parse_optional_distribution(&mut self) -> Result<Option<Distribution>> {
        if !self.eat_keyword(Keyword::Distributed) {
            return Ok(None);
        }
        self.expect_keyword(Keyword::By)?;
        let columns = if self.eat_keyword(Keyword::Hash) {
            Some(self.parse_ident_list()?)
        } else if self.eat_keyword(Keyword::Random) {
            None
        } else {
            return Err(self.expected(&["HASH", "RANDOM"]));
        };
        let buckets = if self.eat_keyword(Keyword::Buckets) {
            if self.eat_keyword(Keyword::Auto) {
                Some(Buckets::Auto)
            } else {
                Some(Buckets::Count(self.parse_u64()?))
            }
        } else {
            None
        };
        Ok(Some(match columns {
            Some(columns) => Distribution::Hash { columns, buckets },
            None => Distribution::Random { buckets },
        }))
    }

    fn parse_view_column(&mut self) -> Result<ViewColumn> {
        let name = self.parse_identifier()?;
        let comment = self.parse_optional_comment()?;
        Ok(ViewColumn { name, comment })
    }

    fn parse_optional_view_columns(&mut self) -> Result<Vec<ViewColumn>> {
        if self.check(&TokenKind::LeftParen) && !self.check_query_start() {
            self.parse_parenthesized(Self::parse_view_column)
        } else {
            Ok(Vec::new())
        }
    }

    fn parse_create_view(&mut self, or_replace: bool) -> Result<Statement> {
        self.expect_keyword(Keyword::View)?;
        let if_not_exists = self.parse_if_not_exists()?;
        let name = self.parse_table_name()?;
        let columns = self.parse_optional_view_columns()?;
        let comment = self.parse_optional_comment()?;
        self.expect_keyword(Keyword::As)?;
        let query = self.parse_boxed_query()?;
        Ok(Statement::CreateView(Box::new(CreateView {
            or_replace,
            if_not_exists,
            name,
            columns,
            comment,
            query,
        })))
    }

    fn parse_create_materialized_view(&mut self) -> Result<Statement> {
        self.expect_keyword(Keyword::Materialized)?;
        self.expect_keyword(Keyword::View)?;
        let if_not_exists = self.parse_if_not_exists()?;
        let name = self.parse_table_name()?;
        let columns = self.parse_optional_view_columns()?;

        let build = if self.eat_keyword(Keyword::Build) {
            if self.eat_keyword(Keyword::Immediate) {
                Some(BuildMode::Immediate)
            } else if self.eat_keyword(Keyword::Deferred) {
                Some(BuildMode::Deferred)
            } else {
                return Err(self.expected(&["IMMEDIATE", "DEFERRED"]));
            }
        } else {
            None
        };
        let refresh = if self.eat_keyword(Keyword::Refresh) {
            Some(self.parse_refresh_spec()?)
        } else {
            None
        };
        let key = self.parse_optional_key_desc()?;
        let comment = self.parse_optional_comment()?;
        let partition_by =
            if self.check_keyword(Keyword::Partition) && self.check_nth_keyword(1, Keyword::By) {
                self.advance();
                self.advance();
                self.parse_ident_list()?
            } else {
                Vec::new()
            };
        let distribution = self.parse_optional_distribution()?;
        let properties = self.parse_optional_properties()?;
        self.expect_keyword(Keyword::As)?;
        let query = self.parse_boxed_query()?;

        Ok(Statement::CreateMaterializedView(Box::new(
            CreateMaterializedView {
                if_not_exists,
                name,
                columns,
                build,
                refresh,
                key,
                comment,
                partition_by,
                distribution,
                properties,
                query,
            },
        )))
    }

    /// After `REFRESH`: `[COMPLETE|AUTO] [ON MANUAL|COMMIT|SCHEDULE EVERY n unit
    /// [STARTS 'ts']]`
    fn parse_refresh_spec(&mut self) -> Result<RefreshSpec> {
        let method = if self.eat_keyword(Keyword::Complete) {
            Some(RefreshMethod::Complete)
        } else if self.eat_keyword(Keyword::Auto) {
            Some(RefreshMethod::Auto)
        } else {
            None
        };
        let trigger = if self.eat_keyword(Keyword::On) {
            if self.eat_keyword(Keyword::Manual) {
                Some(RefreshTrigger::Manual)
            } else if self.eat_keyword(Keyword::Commit) {
                Some(RefreshTrigger::Commit)
            } else if self.eat_keyword(Keyword::Schedule) {
                self.expect_word("EVERY")?;
                let every = self.parse_u64()?;
                let unit = self.parse_interval_unit()?;
                let starts = if self.eat_word("STARTS") {
                    Some(self.parse_string()?)
                } else {
                    None
                };
                Some(RefreshTrigger::Schedule {
                    every,
                    unit,
                    starts,
                })
            } else {
                return Err(self.expected(&["MANUAL", "COMMIT", "SCHEDULE"]));
            }
        } else {
            None
        };
        Ok(RefreshSpec { method, trigger })
    }

    fn parse_create_index(&mut self) -> Result<Statement> {
        self.expect_keyword(Keyword::Index)?;
        let if_not_exists = self.parse_if_not_exists()?;
        let name = self.parse_identifier()?;
        self.expect_keyword(Keyword::On)?;
        let table = self.parse_table_name()?;
        let columns = self.parse_ident_list()?;
        let (index_type, properties, comment) = self.parse_index_options()?;
        Ok(Statement::CreateIndex(CreateIndex {
            if_not_exists,
            name,
            table,
            columns,
            index_type,
            properties,
            comment,
        }))
    }

    fn parse_create_catalog(&mut self) -> Result<Statement> {
        self.expect_keyword(Keyword::Catalog)?;
        let if_not_exists = self.parse_if_not_exists()?;
        let name = self.parse_identifier()?;
        let resource = if self.eat_keyword(Keyword::With) {
            self.expect_word("RESOURCE")?;
            Some(self.parse_identifier()?)
        } else {
            None
        };
        let comment = self.parse_optional_comment()?;
        let properties = self.parse_optional_properties()?;
        Ok(Statement::CreateCatalog(CreateCatalog {
            if_not_exists,
            name,
            resource,
            comment,
            properties,
        }))
    }

    /// `[IDENTIFIED BY [PASSWORD] 'pw'] [DEFAULT ROLE 'r'] [COMMENT 'c']`
    fn parse_user_options(&mut self) -> Result<UserOptions> {
        let mut options = UserOptions::default();
        if self.eat_keyword(Keyword::Identified) {
            self.expect_keyword(Keyword::By)?;
            options.hashed = self.eat_keyword(Keyword::Password);
            options.password = Some(self.parse_string()?);
        }
        if self.check_keyword(Keyword::Default) && self.check_nth_keyword(1, Keyword::Role) {
            self.advance();
            self.advance();
            options.default_role = Some(self.parse_name_or_string()?);
        }
        options.comment = self.parse_optional_comment()?;
        Ok(options)
    }

    pub(super) fn parse_alter(&mut self) -> Result<Statement> {
        let start = self.position();
        self.expect_keyword(Keyword::Alter)?;
        match self.peek().keyword() {
            Some(Keyword::Table) => self.parse_alter_table(),
            Some(Keyword::View) => {
                self.advance();
                let name = self.parse_table_name()?;
                let columns = self.parse_optional_view_columns()?;
                let comment = self.parse_optional_comment()?;
                self.expect_keyword(Keyword::As)?;
                let query = self.parse_boxed_query()?;
                Ok(Statement::AlterView(Box::new(AlterView {
                    name,
                    columns,
                    comment,
                    query,
                })))
            }
            Some(Keyword::Database | Keyword::Schema) => {
                self.advance();
                let name = self.parse_object_name()?;
                let operation = if self.eat_keyword(Keyword::Set) {
                    self.expect_keyword(Keyword::Properties)?;
                    AlterDatabaseOperation::SetProperties(self.parse_property_list()?)
                } else if self.eat_keyword(Keyword::Rename) {
                    AlterDatabaseOperation::Rename(self.parse_identifier()?)
                } else {
                    return Err(self.expected(&["SET", "RENAME"]));
                };
                Ok(Statement::AlterDatabase(AlterDatabase { name, operation }))
            }
            Some(Keyword::User) => {
                self.advance();
                let if_exists = self.parse_if_exists()?;
                let user = self.parse_user_identity()?;
                let options = self.parse_user_options()?;
                Ok(Statement::AlterUser(AlterUser {
                    if_exists,
                    user,
                    options,
                }))
            }
            Some(Keyword::System) => {
                let action = match self.peek_nth(1).keyword() {
                    Some(Keyword::Add) => SystemAction::Add,
                    Some(Keyword::Drop) => SystemAction::Drop,
                    Some(Keyword::Decommission) => SystemAction::Decommission,
                    _ => return self.parse_unsupported(start, 3),
                };
                self.advance();
                self.advance();
                self.parse_alter_system(action)
            }
            _ => self.parse_unsupported(start, 2),
        }
    }

    fn parse_alter_table(&mut self) -> Result<Statement> {
        self.expect_keyword(Keyword::Table)?;
        let name = self.parse_table_name()?;
        let operations = self.parse_comma_separated(Self::parse_alter_table_operation)?;
        Ok(Statement::AlterTable(AlterTable { name, operations }))
    }

    fn parse_alter_table_operation(&mut self) -> Result<AlterTableOperation> {
        if self.eat_keyword(Keyword::Add) {
            if self.eat_keyword(Keyword::Column) {
                if self.check(&TokenKind::LeftParen) {
                    let columns = self.parse_parenthesized(Self::parse_column_def)?;
                    return Ok(AlterTableOperation::AddColumns(columns));
                }
                let column = self.parse_column_def()?;
                let position = self.parse_column_position()?;
                return Ok(AlterTableOperation::AddColumn { column, position });
            }
            if self.check_keyword(Keyword::Partition) {
                return Ok(AlterTableOperation::AddPartition(self.parse_partition_def()?));
            }
            if self.check_keyword(Keyword::Index) {
                return Ok(AlterTableOperation::AddIndex(self.parse_index_def()?));
            }
            return Err(self.expected(&["COLUMN", "PARTITION", "INDEX"]));
        }

        if self.eat_keyword(Keyword::Drop) {
            if self.eat_keyword(Keyword::Column) {
                return Ok(AlterTableOperation::DropColumn(self.parse_identifier()?));
            }
            if self.eat_keyword(Keyword::Partition) {
                let if_exists = self.parse_if_exists()?;
                let name = self.parse_identifier()?;
                let force = self.eat_keyword(Keyword::Force);
                return Ok(AlterTableOperation::DropPartition {
                    if_exists,
                    name,
                    force,
                });
            }
            if self.eat_keyword(Keyword::Index) {
                let if_exists = self.parse_if_exists()?;
                let name = self.parse_identifier()?;
                return Ok(AlterTableOperation::DropIndex { if_exists, name });
            }
            return Err(self.expected(&["COLUMN", "PARTITION", "INDEX"]));
        }

        if self.eat_keyword(Keyword::Modify) {
            if self.eat_keyword(Keyword::Column) {
                let column = self.parse_column_def()?;
                let position = self.parse_column_position()?;
                return Ok(AlterTableOperation::ModifyColumn { column, position });
            }
            if self.eat_keyword(Keyword::Comment) {
                return Ok(AlterTableOperation::ModifyComment(self.parse_string()?));
            }
            return Err(self.expected(&["COLUMN", "COMMENT"]));
        }

        if self.eat_keyword(Keyword::Rename) {
            if self.eat_keyword(Keyword::Column) {
                let old = self.parse_identifier()?;
                let new = self.parse_identifier()?;
                return Ok(AlterTableOperation::RenameColumn { old, new });
            }
            return Ok(AlterTableOperation::RenameTable(self.parse_identifier()?));
        }

        if self.eat_keyword(Keyword::Set) {
            return Ok(AlterTableOperation::SetProperties(self.parse_property_list()?));
        }

        Err(self.expected(&["ADD", "DROP", "MODIFY", "RENAME", "SET"]))
    }

    fn parse_column_position(&mut self) -> Result<Option<ColumnPosition>> {
        if self.eat_keyword(Keyword::First) {
            Ok(Some(ColumnPosition::First))
        } else if self.eat_keyword(Keyword::After) {
            Ok(Some(ColumnPosition::After(self.parse_identifier()?)))
        } else {
            Ok(None)
        }
    }

    fn parse_alter_system(&mut self, action: SystemAction) -> Result<Statement> {
        let node = match self.peek().keyword() {
            Some(Keyword::Backend) => ClusterNode::Backend,
            Some(Keyword::Frontend) => ClusterNode::Frontend,
            Some(Keyword::Follower) => ClusterNode::Follower,
            Some(Keyword::Observer) => ClusterNode::Observer,
            Some(Keyword::Broker) => {
                self.advance();
                let name = self.parse_identifier()?;
                let hosts = self.parse_comma_separated(Self::parse_string)?;
                return Ok(Statement::AlterSystem(AlterSystem {
                    action,
                    node: ClusterNode::Broker(name),
                    hosts,
                }));
            }
            _ => {
                return Err(self.expected(&["BACKEND", "FRONTEND", "FOLLOWER", "OBSERVER", "BROKER"]))
            }
        };
        self.advance();
        let hosts = self.parse_comma_separated(Self::parse_string)?;
        Ok(Statement::AlterSystem(AlterSystem {
            action,
            node,
            hosts,
        }))
    }

    pub(super) fn parse_drop(&mut self) -> Result<Statement> {
        let start = self.position();
        self.expect_keyword(Keyword::Drop)?;
        let object_type = match self.peek().keyword() {
            Some(Keyword::Table) => ObjectType::Table,
            Some(Keyword::View) => ObjectType::View,
            Some(Keyword::Database | Keyword::Schema) => ObjectType::Database,
            Some(Keyword::Materialized) if self.check_nth_keyword(1, Keyword::View) => {
                self.advance();
                ObjectType::MaterializedView
            }
            Some(Keyword::Catalog) => ObjectType::Catalog,
            Some(Keyword::Index) => ObjectType::Index,
            Some(Keyword::User) => {
                self.advance();
                let if_exists = self.parse_if_exists()?;
                let user = self.parse_user_identity()?;
                return Ok(Statement::DropUser(DropUser { if_exists, user }));
            }
            Some(Keyword::Role) => {
                self.advance();
                let if_exists = self.parse_if_exists()?;
                let name = self.parse_identifier()?;
                return Ok(Statement::DropRole(DropRole { if_exists, name }));
            }
            _ => return self.parse_unsupported(start, 2),
        };
        self.advance();

        let if_exists = self.parse_if_exists()?;
        let name = match object_type {
            ObjectType::Table | ObjectType::View | ObjectType::MaterializedView => {
                self.parse_table_name()?
            }
            _ => self.parse_object_name()?,
        };
        let on = if self.eat_keyword(Keyword::On) {
            Some(self.parse_table_name()?)
        } else {
            None
        };
        let force = self.eat_keyword(Keyword::Force);
        Ok(Statement::Drop(Drop {
            object_type,
            if_exists,
            name,
            on,
            force,
        }))
    }
}
