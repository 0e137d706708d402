use std::{fmt, marker::PhantomData};

use crate::{
    delete::DeleteQuery,
    dialect::Dialect,
    executor::QueryExecutor,
    insert::{InsertMode, InsertQuery},
    schema::{HasTable, Reachable, Scope, Table, TableExpr},
    select::SelectQuery,
    update::UpdateQuery,
    with::Cte,
};

/// Entry point of every query built against the schema `S`. `W` lists the
/// common table expressions declared with [`QueryCreator::with`].
pub struct QueryCreator<S, W = ()> {
    executor: QueryExecutor,
    ctes: Vec<Cte>,
    _marker: PhantomData<fn() -> (S, W)>,
}

impl<S, W> Clone for QueryCreator<S, W> {
    fn clone(&self) -> Self {
        Self {
            executor: self.executor.clone(),
            ctes: self.ctes.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, W> fmt::Debug for QueryCreator<S, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryCreator")
            .field("executor", &self.executor)
            .field("ctes", &self.ctes.len())
            .finish()
    }
}

impl<S> QueryCreator<S> {
    pub(crate) fn new(executor: QueryExecutor) -> Self {
        Self {
            executor,
            ctes: Vec::new(),
            _marker: PhantomData,
        }
    }
}

impl<S, W> QueryCreator<S, W> {
    pub(crate) fn executor(&self) -> &QueryExecutor {
        &self.executor
    }

    pub fn dialect(&self) -> Dialect {
        self.executor.dialect()
    }

    /// Start a select over a schema table or a common table expression.
    pub fn select_from<T, I>(&self, table: T) -> SelectQuery<Scope<S, W>, (T::Table, ()), ()>
    where
        T: TableExpr,
        Scope<S, W>: Reachable<T::Table, I>,
    {
        SelectQuery::new(table.into_table_ref(), self.ctes.clone(), self.executor.clone())
    }

    pub fn insert_into<T>(&self, _table: T) -> InsertQuery<Scope<S, W>, T>
    where
        T: Table,
        S: HasTable<T>,
    {
        InsertQuery::new(InsertMode::Insert, self.ctes.clone(), self.executor.clone())
    }

    /// `replace into`, mysql and sqlite only.
    pub fn replace_into<T>(&self, _table: T) -> InsertQuery<Scope<S, W>, T>
    where
        T: Table,
        S: HasTable<T>,
    {
        InsertQuery::new(InsertMode::Replace, self.ctes.clone(), self.executor.clone())
    }

    pub fn update_table<T>(&self, table: T) -> UpdateQuery<Scope<S, W>, T::Table>
    where
        T: TableExpr,
        S: HasTable<T::Table>,
    {
        UpdateQuery::new(table.into_table_ref(), self.ctes.clone(), self.executor.clone())
    }

    pub fn delete_from<T>(&self, table: T) -> DeleteQuery<Scope<S, W>, T::Table>
    where
        T: TableExpr,
        S: HasTable<T::Table>,
    {
        DeleteQuery::new(table.into_table_ref(), self.ctes.clone(), self.executor.clone())
    }

    /// Declare the common table expression `table`, defined by the select
    /// `build` returns. The select must produce the table's columns in
    /// declaration order.
    pub fn with<T, Fr, B>(&self, _table: T, build: B) -> QueryCreator<S, (T, W)>
    where
        T: Table,
        B: FnOnce(&Self) -> SelectQuery<Scope<S, W>, Fr, T::Shape>,
    {
        let mut query = build(self).into_ast();
        // earlier expressions are written once, in front of the outer query
        query.ctes.clear();
        let mut ctes = self.ctes.clone();
        ctes.push(Cte {
            name: T::NAME,
            columns: T::COLUMNS,
            query,
        });
        QueryCreator {
            executor: self.executor.clone(),
            ctes,
            _marker: PhantomData,
        }
    }

    pub fn expression_builder(&self) -> ExpressionBuilder<Scope<S, W>> {
        ExpressionBuilder::new(self.dialect())
    }
}

/// Builds subqueries inside another query. `Sc` is the outer scope and `F`
/// the tables of the outer query, which the subquery may reference.
pub struct ExpressionBuilder<Sc, F = ()> {
    dialect: Dialect,
    _marker: PhantomData<fn() -> (Sc, F)>,
}

impl<Sc, F> Clone for ExpressionBuilder<Sc, F> {
    fn clone(&self) -> Self {
        Self::new(self.dialect)
    }
}

impl<Sc, F> fmt::Debug for ExpressionBuilder<Sc, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpressionBuilder")
            .field("dialect", &self.dialect)
            .finish()
    }
}

impl<Sc, F> ExpressionBuilder<Sc, F> {
    pub(crate) fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            _marker: PhantomData,
        }
    }

    pub fn select_from<T, I>(&self, table: T) -> SelectQuery<Sc, (T::Table, F), ()>
    where
        T: TableExpr,
        Sc: Reachable<T::Table, I>,
    {
        SelectQuery::new(
            table.into_table_ref(),
            Vec::new(),
            QueryExecutor::noop(self.dialect),
        )
    }
}
