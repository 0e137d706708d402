use std::{fmt, marker::PhantomData};

use crate::{
    creator::ExpressionBuilder,
    dialect::HasDialect,
    error::Result,
    executor::QueryExecutor,
    expr::cond::Conditions,
    filter::Filter,
    query::{CompiledQuery, DeleteResult, QueryKind},
    schema::TableRef,
    with::{Cte, format_ctes},
    writer::{FormatContext, FormatWriter, TableScope},
};

#[doc(hidden)]
#[derive(Debug, Clone)]
pub struct DeleteAst {
    ctes: Vec<Cte>,
    table: TableRef,
    conditions: Conditions,
}

impl FormatWriter for DeleteAst {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        format_ctes(&self.ctes, context)?;
        context.push_scope(TableScope::new([self.table.scope_entry()]));
        let result = self.format_body(context);
        context.pop_scope();
        result
    }
}

impl DeleteAst {
    fn format_body<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        context.writer.write_str("delete from ")?;
        self.table.format_writer(context)?;
        self.conditions.format_where(context)
    }
}

/// A typed `delete` from the table `T`. Without filters every row is
/// deleted.
pub struct DeleteQuery<Sc, T> {
    ast: DeleteAst,
    executor: QueryExecutor,
    _marker: PhantomData<fn() -> (Sc, T)>,
}

impl<Sc, T> Clone for DeleteQuery<Sc, T> {
    fn clone(&self) -> Self {
        Self {
            ast: self.ast.clone(),
            executor: self.executor.clone(),
            _marker: PhantomData,
        }
    }
}

impl<Sc, T> fmt::Debug for DeleteQuery<Sc, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeleteQuery").field("ast", &self.ast).finish()
    }
}

impl<Sc, T> DeleteQuery<Sc, T> {
    pub(crate) fn new(table: TableRef, ctes: Vec<Cte>, executor: QueryExecutor) -> Self {
        Self {
            ast: DeleteAst {
                ctes,
                table,
                conditions: Conditions::default(),
            },
            executor,
            _marker: PhantomData,
        }
    }

    pub fn expression_builder(&self) -> ExpressionBuilder<Sc, (T, ())> {
        ExpressionBuilder::new(self.executor.dialect())
    }

    pub fn compile(&self) -> Result<CompiledQuery> {
        CompiledQuery::from_ast(&self.ast, self.executor.dialect(), QueryKind::Delete)
    }

    pub fn compile_for<D: HasDialect>(&self) -> Result<CompiledQuery> {
        CompiledQuery::from_ast(&self.ast, D::DIALECT, QueryKind::Delete)
    }

    pub fn to_sql<D: HasDialect>(&self) -> Result<String> {
        self.compile_for::<D>().map(|query| query.sql)
    }

    pub async fn execute(&self) -> Result<DeleteResult> {
        let query = self.compile()?;
        let result = self.executor.execute(&query).await?;
        Ok(DeleteResult {
            num_deleted_rows: result.num_affected_rows.unwrap_or_default(),
        })
    }
}

impl<Sc, T> Filter for DeleteQuery<Sc, T> {
    type Sources = (T, ());

    fn conditions_mut(&mut self) -> &mut Conditions {
        &mut self.ast.conditions
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        dialect::Dialect,
        expr::cond::{ConditionKind, Conjunction},
        raw::Raw,
        tests::format_writer,
    };

    use super::*;

    #[test]
    fn test_format_delete() {
        let mut delete = DeleteAst {
            ctes: Vec::new(),
            table: TableRef {
                name: "pet",
                alias: None,
            },
            conditions: Conditions::default(),
        };
        assert_eq!(r#"delete from "pet""#, format_writer(delete.clone(), Dialect::Sqlite));

        delete.conditions.push(Conjunction::And, ConditionKind::Raw(Raw::new_static("owner_id is null")));
        assert_eq!(
            "delete from `pet` where owner_id is null",
            format_writer(delete, Dialect::MySql)
        );
    }
}
