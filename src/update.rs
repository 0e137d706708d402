use std::{fmt, marker::PhantomData};

use indexmap::IndexMap;

use crate::{
    creator::ExpressionBuilder,
    dialect::HasDialect,
    error::{Error, Result},
    executor::QueryExecutor,
    expr::{Expr, IntoExpr, cond::Conditions},
    filter::Filter,
    query::{CompiledQuery, QueryKind, UpdateResult},
    schema::{Column, TableRef, Updatable},
    with::{Cte, format_ctes},
    writer::{FormatContext, FormatWriter, TableScope},
};

#[doc(hidden)]
#[derive(Debug, Clone)]
pub struct UpdateAst {
    ctes: Vec<Cte>,
    table: TableRef,
    sets: IndexMap<&'static str, Expr>,
    conditions: Conditions,
}

impl FormatWriter for UpdateAst {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        if self.sets.is_empty() {
            return Err(context.fail(Error::EmptyUpdate));
        }
        format_ctes(&self.ctes, context)?;
        context.push_scope(TableScope::new([self.table.scope_entry()]));
        let result = self.format_body(context);
        context.pop_scope();
        result
    }
}

impl UpdateAst {
    fn format_body<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        context.writer.write_str("update ")?;
        self.table.format_writer(context)?;
        context.writer.write_str(" set ")?;
        for (index, (column, value)) in self.sets.iter().enumerate() {
            if index > 0 {
                context.writer.write_str(", ")?;
            }
            context.write_ident(column)?;
            context.writer.write_str(" = ")?;
            value.format_writer(context)?;
        }
        self.conditions.format_where(context)
    }
}

/// A typed `update` of the table `T`.
pub struct UpdateQuery<Sc, T> {
    ast: UpdateAst,
    executor: QueryExecutor,
    _marker: PhantomData<fn() -> (Sc, T)>,
}

impl<Sc, T> Clone for UpdateQuery<Sc, T> {
    fn clone(&self) -> Self {
        Self {
            ast: self.ast.clone(),
            executor: self.executor.clone(),
            _marker: PhantomData,
        }
    }
}

impl<Sc, T> fmt::Debug for UpdateQuery<Sc, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateQuery").field("ast", &self.ast).finish()
    }
}

impl<Sc, T> UpdateQuery<Sc, T> {
    pub(crate) fn new(table: TableRef, ctes: Vec<Cte>, executor: QueryExecutor) -> Self {
        Self {
            ast: UpdateAst {
                ctes,
                table,
                sets: IndexMap::new(),
                conditions: Conditions::default(),
            },
            executor,
            _marker: PhantomData,
        }
    }

    /// `set column = value`. Setting a column twice keeps the last value.
    pub fn set<C, V>(mut self, _column: C, value: V) -> Self
    where
        C: Updatable + Column<Table = T>,
        V: IntoExpr<C::Value>,
    {
        self.ast.sets.insert(C::NAME, value.into_expr());
        self
    }

    /// Builder for subqueries used as values or in the where clause.
    pub fn expression_builder(&self) -> ExpressionBuilder<Sc, (T, ())> {
        ExpressionBuilder::new(self.executor.dialect())
    }

    pub fn compile(&self) -> Result<CompiledQuery> {
        CompiledQuery::from_ast(&self.ast, self.executor.dialect(), QueryKind::Update)
    }

    pub fn compile_for<D: HasDialect>(&self) -> Result<CompiledQuery> {
        CompiledQuery::from_ast(&self.ast, D::DIALECT, QueryKind::Update)
    }

    pub fn to_sql<D: HasDialect>(&self) -> Result<String> {
        self.compile_for::<D>().map(|query| query.sql)
    }

    pub async fn execute(&self) -> Result<UpdateResult> {
        let query = self.compile()?;
        let result = self.executor.execute(&query).await?;
        Ok(UpdateResult {
            num_updated_rows: result.num_affected_rows.unwrap_or_default(),
        })
    }
}

impl<Sc, T> Filter for UpdateQuery<Sc, T> {
    type Sources = (T, ());

    fn conditions_mut(&mut self) -> &mut Conditions {
        &mut self.ast.conditions
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        dialect::Dialect,
        expr::{ColumnRef, Operator, binary::BinaryCondition, cond::{ConditionKind, Conjunction}},
        ident::Ident,
        tests::format_writer,
        value::Value,
    };

    use super::*;

    fn ast(alias: Option<Ident>) -> UpdateAst {
        let mut sets = IndexMap::new();
        sets.insert("age", Expr::Value(Value::I32(30)));
        sets.insert("last_name", Expr::Value(Value::Null));
        let mut conditions = Conditions::default();
        conditions.push(
            Conjunction::And,
            ConditionKind::Binary(BinaryCondition {
                lhs: Expr::Column(ColumnRef {
                    table: "person",
                    column: "id",
                }),
                operator: Operator::Eq,
                rhs: Expr::Value(Value::I32(1)),
            }),
        );
        UpdateAst {
            ctes: Vec::new(),
            table: TableRef {
                name: "person",
                alias,
            },
            sets,
            conditions,
        }
    }

    #[test]
    fn test_format_update() {
        assert_eq!(
            r#"update "person" set "age" = $1, "last_name" = $2 where "id" = $3"#,
            format_writer(ast(None), Dialect::Postgres)
        );
        assert_eq!(
            "update `person` as `p` set `age` = ?, `last_name` = ? where `p`.`id` = ?",
            format_writer(ast(Some(Ident::new_static("p"))), Dialect::MySql)
        );
    }

    #[test]
    fn test_empty_update() {
        let mut update = ast(None);
        update.sets.clear();
        let err = CompiledQuery::from_ast(&update, Dialect::Sqlite, QueryKind::Update).unwrap_err();
        assert!(matches!(err, Error::EmptyUpdate));
    }
}
