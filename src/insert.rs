use std::{fmt, marker::PhantomData};

use indexmap::IndexSet;

use crate::{
    creator::ExpressionBuilder,
    dialect::{Dialect, HasDialect},
    error::{Error, Result},
    executor::QueryExecutor,
    query::{CompiledQuery, InsertResult, QueryKind},
    schema::{Assignments, InsertRow, Table},
    with::{Cte, format_ctes},
    writer::{FormatContext, FormatWriter},
};

/// Columns of the table `T`, used as a conflict target.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a column list of table `{T}`",
    label = "expected a column of `{T}` or a tuple of its columns"
)]
pub trait ColumnList<T> {
    #[doc(hidden)]
    fn push_columns(self, columns: &mut Vec<&'static str>);
}

/// Writable columns of the table `T`, overwritten by an upsert.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a list of updatable columns of table `{T}`"
)]
pub trait UpdatableList<T> {
    #[doc(hidden)]
    fn push_columns(self, columns: &mut Vec<&'static str>);
}

macro_rules! impl_column_list_tuple {
    ($($ty:ident $n:tt),+) => {
        impl<Tb, $($ty: ColumnList<Tb>),+> ColumnList<Tb> for ($($ty,)+) {
            fn push_columns(self, columns: &mut Vec<&'static str>) {
                $(self.$n.push_columns(columns);)+
            }
        }

        impl<Tb, $($ty: UpdatableList<Tb>),+> UpdatableList<Tb> for ($($ty,)+) {
            fn push_columns(self, columns: &mut Vec<&'static str>) {
                $(self.$n.push_columns(columns);)+
            }
        }
    };
}

impl_column_list_tuple!(A 0);
impl_column_list_tuple!(A 0, B 1);
impl_column_list_tuple!(A 0, B 1, C 2);
impl_column_list_tuple!(A 0, B 1, C 2, D 3);
impl_column_list_tuple!(A 0, B 1, C 2, D 3, E 4);
impl_column_list_tuple!(A 0, B 1, C 2, D 3, E 4, F 5);
impl_column_list_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6);
impl_column_list_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InsertMode {
    Insert,
    Replace,
}

#[derive(Debug, Clone)]
enum OnConflict {
    Nothing(Vec<&'static str>),
    Update {
        target: Vec<&'static str>,
        sets: Vec<&'static str>,
    },
}

#[doc(hidden)]
#[derive(Debug, Clone)]
pub struct InsertAst {
    ctes: Vec<Cte>,
    mode: InsertMode,
    table: &'static str,
    rows: Vec<Assignments>,
    ignore: bool,
    on_conflict: Option<OnConflict>,
}

impl InsertAst {
    /// Union of the columns of every row, in first appearance order.
    fn columns(&self) -> IndexSet<&'static str> {
        self.rows.iter().flat_map(Assignments::columns).collect()
    }

    fn format_keyword<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        let ignore = self.ignore || matches!(self.on_conflict, Some(OnConflict::Nothing(_)));
        let keyword = match (self.mode, context.dialect) {
            (InsertMode::Replace, dialect) if !dialect.supports_replace() => {
                return Err(context.fail(Error::Unsupported {
                    feature: "replace into",
                    dialect,
                }));
            }
            (InsertMode::Replace, _) => "replace into ",
            (InsertMode::Insert, Dialect::MySql) if ignore => "insert ignore into ",
            (InsertMode::Insert, Dialect::Sqlite) if self.ignore => "insert or ignore into ",
            (InsertMode::Insert, _) => "insert into ",
        };
        context.writer.write_str(keyword)
    }

    fn format_rows<W: fmt::Write>(
        &self,
        columns: &IndexSet<&'static str>,
        context: &mut FormatContext<'_, W>,
    ) -> fmt::Result {
        if columns.is_empty() {
            return match context.dialect {
                Dialect::MySql => {
                    context.writer.write_str("() values ")?;
                    for index in 0..self.rows.len() {
                        if index > 0 {
                            context.writer.write_str(", ")?;
                        }
                        context.writer.write_str("()")?;
                    }
                    Ok(())
                }
                _ if self.rows.len() == 1 => context.writer.write_str("default values"),
                dialect => Err(context.fail(Error::Unsupported {
                    feature: "inserting several rows of default values",
                    dialect,
                })),
            };
        }

        context.writer.write_char('(')?;
        for (index, column) in columns.iter().enumerate() {
            if index > 0 {
                context.writer.write_str(", ")?;
            }
            context.write_ident(column)?;
        }
        context.writer.write_str(") values ")?;

        let missing = match context.dialect {
            Dialect::Postgres | Dialect::MySql => "default",
            Dialect::Sqlite => "null",
        };
        for (index, row) in self.rows.iter().enumerate() {
            if index > 0 {
                context.writer.write_str(", ")?;
            }
            context.writer.write_char('(')?;
            for (index, column) in columns.iter().enumerate() {
                if index > 0 {
                    context.writer.write_str(", ")?;
                }
                match row.0.get(column) {
                    Some(expr) => expr.format_writer(context)?,
                    None => context.writer.write_str(missing)?,
                }
            }
            context.writer.write_char(')')?;
        }
        Ok(())
    }

    fn format_conflict<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        let dialect = context.dialect;
        match (&self.on_conflict, dialect) {
            (None, Dialect::Postgres) if self.ignore && self.mode == InsertMode::Insert => {
                context.writer.write_str(" on conflict do nothing")
            }
            (None, _) => Ok(()),
            // written as `insert ignore`
            (Some(OnConflict::Nothing(_)), Dialect::MySql) => Ok(()),
            (Some(OnConflict::Nothing(target)), _) => {
                context.writer.write_str(" on conflict")?;
                format_target(target, context)?;
                context.writer.write_str(" do nothing")
            }
            (Some(OnConflict::Update { sets, .. }), Dialect::MySql) => {
                context.writer.write_str(" on duplicate key update ")?;
                for (index, column) in sets.iter().enumerate() {
                    if index > 0 {
                        context.writer.write_str(", ")?;
                    }
                    context.write_ident(column)?;
                    context.writer.write_str(" = values(")?;
                    context.write_ident(column)?;
                    context.writer.write_char(')')?;
                }
                Ok(())
            }
            (Some(OnConflict::Update { target, sets }), _) => {
                context.writer.write_str(" on conflict")?;
                format_target(target, context)?;
                context.writer.write_str(" do update set ")?;
                for (index, column) in sets.iter().enumerate() {
                    if index > 0 {
                        context.writer.write_str(", ")?;
                    }
                    context.write_ident(column)?;
                    context.writer.write_str(" = ")?;
                    context.write_ident("excluded")?;
                    context.writer.write_char('.')?;
                    context.write_ident(column)?;
                }
                Ok(())
            }
        }
    }
}

fn format_target<W: fmt::Write>(target: &[&'static str], context: &mut FormatContext<'_, W>) -> fmt::Result {
    if target.is_empty() {
        return Ok(());
    }
    context.writer.write_str(" (")?;
    for (index, column) in target.iter().enumerate() {
        if index > 0 {
            context.writer.write_str(", ")?;
        }
        context.write_ident(column)?;
    }
    context.writer.write_char(')')
}

impl FormatWriter for InsertAst {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        if self.rows.is_empty() {
            return Err(context.fail(Error::EmptyInsert));
        }
        format_ctes(&self.ctes, context)?;
        self.format_keyword(context)?;
        context.write_table(self.table)?;
        context.writer.write_char(' ')?;
        let columns = self.columns();
        self.format_rows(&columns, context)?;
        self.format_conflict(context)
    }
}

/// A typed `insert` or `replace` into the table `T`.
pub struct InsertQuery<Sc, T> {
    ast: InsertAst,
    executor: QueryExecutor,
    _marker: PhantomData<fn() -> (Sc, T)>,
}

impl<Sc, T> Clone for InsertQuery<Sc, T> {
    fn clone(&self) -> Self {
        Self {
            ast: self.ast.clone(),
            executor: self.executor.clone(),
            _marker: PhantomData,
        }
    }
}

impl<Sc, T> fmt::Debug for InsertQuery<Sc, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsertQuery").field("ast", &self.ast).finish()
    }
}

impl<Sc, T: Table> InsertQuery<Sc, T> {
    pub(crate) fn new(mode: InsertMode, ctes: Vec<Cte>, executor: QueryExecutor) -> Self {
        Self {
            ast: InsertAst {
                ctes,
                mode,
                table: T::NAME,
                rows: Vec::new(),
                ignore: false,
                on_conflict: None,
            },
            executor,
            _marker: PhantomData,
        }
    }

    /// Add one row, built with `table::row()`.
    pub fn values<R>(mut self, row: R) -> Self
    where
        R: InsertRow<Table = T>,
    {
        self.ast.rows.push(row.into_assignments());
        self
    }

    /// Add one row whose values may be subqueries.
    pub fn values_with<R, B>(self, build: B) -> Self
    where
        R: InsertRow<Table = T>,
        B: FnOnce(&ExpressionBuilder<Sc>) -> R,
    {
        let row = build(&ExpressionBuilder::new(self.executor.dialect()));
        self.values(row)
    }

    pub fn values_many<R, I>(mut self, rows: I) -> Self
    where
        R: InsertRow<Table = T>,
        I: IntoIterator<Item = R>,
    {
        self.ast
            .rows
            .extend(rows.into_iter().map(InsertRow::into_assignments));
        self
    }

    /// Skip rows that would violate a constraint.
    pub fn ignore(mut self) -> Self {
        self.ast.ignore = true;
        self
    }

    pub fn on_conflict_do_nothing<C>(mut self, target: C) -> Self
    where
        C: ColumnList<T>,
    {
        let mut columns = Vec::new();
        target.push_columns(&mut columns);
        self.ast.on_conflict = Some(OnConflict::Nothing(columns));
        self
    }

    /// Upsert: on a conflict over `target`, overwrite `sets` with the
    /// values of the rejected row. Mysql ignores the target and relies on
    /// the table's unique keys.
    pub fn on_conflict_update<C, U>(mut self, target: C, sets: U) -> Self
    where
        C: ColumnList<T>,
        U: UpdatableList<T>,
    {
        let mut target_columns = Vec::new();
        target.push_columns(&mut target_columns);
        let mut set_columns = Vec::new();
        sets.push_columns(&mut set_columns);
        self.ast.on_conflict = Some(OnConflict::Update {
            target: target_columns,
            sets: set_columns,
        });
        self
    }

    pub fn compile(&self) -> Result<CompiledQuery> {
        CompiledQuery::from_ast(&self.ast, self.executor.dialect(), QueryKind::Insert)
    }

    pub fn compile_for<D: HasDialect>(&self) -> Result<CompiledQuery> {
        CompiledQuery::from_ast(&self.ast, D::DIALECT, QueryKind::Insert)
    }

    pub fn to_sql<D: HasDialect>(&self) -> Result<String> {
        self.compile_for::<D>().map(|query| query.sql)
    }

    /// One result per executed statement.
    pub async fn execute(&self) -> Result<Vec<InsertResult>> {
        let query = self.compile()?;
        let result = self.executor.execute(&query).await?;
        Ok(vec![InsertResult {
            insert_id: result.insert_id,
            num_inserted_or_updated_rows: result.num_affected_rows,
        }])
    }

    pub async fn execute_take_first(&self) -> Result<Option<InsertResult>> {
        Ok(self.execute().await?.into_iter().next())
    }

    pub async fn execute_take_first_or_throw(&self) -> Result<InsertResult> {
        self.execute_take_first().await?.ok_or(Error::NoResult)
    }
}

#[cfg(test)]
mod tests {
    use crate::{expr::Expr, tests::format_writer, value::Value};

    use super::*;

    fn row(cells: &[(&'static str, i32)]) -> Assignments {
        let mut row = Assignments::default();
        for (column, value) in cells {
            row.set(*column, Expr::Value(Value::I32(*value)));
        }
        row
    }

    fn ast(rows: Vec<Assignments>) -> InsertAst {
        InsertAst {
            ctes: Vec::new(),
            mode: InsertMode::Insert,
            table: "users",
            rows,
            ignore: false,
            on_conflict: None,
        }
    }

    fn compile(ast: &InsertAst, dialect: Dialect) -> Result<String> {
        CompiledQuery::from_ast(ast, dialect, QueryKind::Insert).map(|query| query.sql)
    }

    #[test]
    fn test_format_upsert() {
        let mut insert = ast(vec![row(&[("username", 1), ("name", 2)])]);
        insert.on_conflict = Some(OnConflict::Update {
            target: vec!["id"],
            sets: vec!["username", "name"],
        });

        assert_eq!(
            r#"insert into "users" ("username", "name") values ($1, $2) on conflict ("id") do update set "username" = "excluded"."username", "name" = "excluded"."name""#,
            format_writer(insert.clone(), Dialect::Postgres)
        );
        assert_eq!(
            r#"insert into `users` (`username`, `name`) values (?, ?) on duplicate key update `username` = values(`username`), `name` = values(`name`)"#,
            format_writer(insert.clone(), Dialect::MySql)
        );
        assert_eq!(
            r#"insert into "users" ("username", "name") values (?1, ?2) on conflict ("id") do update set "username" = "excluded"."username", "name" = "excluded"."name""#,
            format_writer(insert, Dialect::Sqlite)
        );
    }

    #[test]
    fn test_format_rows_union() {
        let insert = ast(vec![row(&[("a", 1)]), row(&[("b", 2), ("a", 3)])]);
        assert_eq!(
            r#"insert into "users" ("a", "b") values ($1, default), ($2, $3)"#,
            format_writer(insert.clone(), Dialect::Postgres)
        );
        assert_eq!(
            r#"insert into "users" ("a", "b") values (?1, null), (?2, ?3)"#,
            format_writer(insert, Dialect::Sqlite)
        );
    }

    #[test]
    fn test_format_ignore() {
        let mut insert = ast(vec![row(&[("a", 1)])]);
        insert.ignore = true;
        assert_eq!(
            "insert ignore into `users` (`a`) values (?)",
            format_writer(insert.clone(), Dialect::MySql)
        );
        assert_eq!(
            r#"insert or ignore into "users" ("a") values (?1)"#,
            format_writer(insert.clone(), Dialect::Sqlite)
        );
        assert_eq!(
            r#"insert into "users" ("a") values ($1) on conflict do nothing"#,
            format_writer(insert, Dialect::Postgres)
        );

        let mut insert = ast(vec![row(&[("a", 1)])]);
        insert.on_conflict = Some(OnConflict::Nothing(vec!["a"]));
        assert_eq!(
            r#"insert into "users" ("a") values ($1) on conflict ("a") do nothing"#,
            format_writer(insert.clone(), Dialect::Postgres)
        );
        assert_eq!(
            "insert ignore into `users` (`a`) values (?)",
            format_writer(insert, Dialect::MySql)
        );
    }

    #[test]
    fn test_format_default_values() {
        let insert = ast(vec![Assignments::default()]);
        assert_eq!(
            r#"insert into "users" default values"#,
            format_writer(insert, Dialect::Postgres)
        );
        let insert = ast(vec![Assignments::default(), Assignments::default()]);
        assert_eq!(
            "insert into `users` () values (), ()",
            format_writer(insert.clone(), Dialect::MySql)
        );
        assert!(matches!(
            compile(&insert, Dialect::Sqlite),
            Err(Error::Unsupported { dialect: Dialect::Sqlite, .. })
        ));
    }

    #[test]
    fn test_replace() {
        let mut replace = ast(vec![row(&[("a", 1)])]);
        replace.mode = InsertMode::Replace;
        assert_eq!(
            "replace into `users` (`a`) values (?)",
            compile(&replace, Dialect::MySql).unwrap()
        );
        assert_eq!(
            r#"replace into "users" ("a") values (?1)"#,
            compile(&replace, Dialect::Sqlite).unwrap()
        );
        let err = compile(&replace, Dialect::Postgres).unwrap_err();
        assert!(matches!(
            err,
            Error::Unsupported {
                feature: "replace into",
                dialect: Dialect::Postgres
            }
        ));
    }

    #[test]
    fn test_empty_insert() {
        assert!(matches!(compile(&ast(Vec::new()), Dialect::Postgres), Err(Error::EmptyInsert)));
    }
}
