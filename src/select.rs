use std::{fmt, iter, marker::PhantomData};

use crate::{
    array::Array,
    creator::ExpressionBuilder,
    dialect::HasDialect,
    error::{Error, Result},
    executor::QueryExecutor,
    expr::{
        Expr, IntoExpr, Operand, SelectItem,
        binary::Operator,
        cond::Conditions,
        order::{Order, OrderExpr, Ordering},
    },
    filter::{Filter, WhereGroup},
    ident::{Ident, IntoIdent},
    join::{JoinClause, JoinType},
    paginate::Paginator,
    query::{CompiledQuery, QueryKind},
    raw::{Raw, Sql},
    row::FromRow,
    schema::{Append, AliasedColumn, Column, Contains, Reachable, Table, TableExpr, TableRef},
    with::{Cte, format_ctes},
    writer::{FormatContext, FormatWriter, TableScope},
};

#[doc(hidden)]
#[derive(Debug, Clone)]
pub struct SelectAst {
    pub(crate) ctes: Vec<Cte>,
    pub(crate) distinct: bool,
    pub(crate) selections: Array<SelectItem>,
    // table whose columns `select_all` asked for
    pub(crate) all_columns_of: Option<&'static str>,
    pub(crate) from: TableRef,
    pub(crate) joins: Vec<JoinClause>,
    pub(crate) conditions: Conditions,
    pub(crate) group_by: Vec<Expr>,
    pub(crate) order: Order,
    pub(crate) paginator: Paginator,
}

impl SelectAst {
    pub(crate) fn new(from: TableRef, ctes: Vec<Cte>) -> Self {
        Self {
            ctes,
            distinct: false,
            selections: Array::None,
            all_columns_of: None,
            from,
            joins: Vec::new(),
            conditions: Conditions::default(),
            group_by: Vec::new(),
            order: Order::default(),
            paginator: Paginator::default(),
        }
    }

    /// Every name used by `order_by` must be the output name of a
    /// selection. With `select *` the output names are not known.
    fn check_order(&self) -> Result<()> {
        if self.selections.is_empty() {
            return Ok(());
        }
        for name in self.order.selection_names() {
            let selected = self
                .selections
                .iter()
                .any(|item| item.output_name() == Some(name.as_str()));
            if !selected {
                return Err(Error::UnknownSelection(name.to_string()));
            }
        }
        Ok(())
    }

    fn format_body<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        context.writer.write_str("select ")?;
        if self.distinct {
            context.writer.write_str("distinct ")?;
        }
        match self.all_columns_of {
            Some(table) if self.selections.is_empty() => context.write_column(table, "*")?,
            _ => self.selections.format_writer(context)?,
        }
        context.writer.write_str(" from ")?;
        self.from.format_writer(context)?;
        for join in &self.joins {
            join.format_writer(context)?;
        }
        self.conditions.format_where(context)?;
        if !self.group_by.is_empty() {
            context.writer.write_str(" group by ")?;
            for (index, expr) in self.group_by.iter().enumerate() {
                if index > 0 {
                    context.writer.write_str(", ")?;
                }
                expr.format_writer(context)?;
            }
        }
        if !self.order.is_empty() {
            context.writer.write_str(" order by ")?;
            self.order.format_writer(context)?;
        }
        self.paginator.format_writer(context)
    }
}

impl FormatWriter for SelectAst {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        if let Err(err) = self.check_order() {
            return Err(context.fail(err));
        }
        format_ctes(&self.ctes, context)?;

        let tables = iter::once(self.from.scope_entry())
            .chain(self.joins.iter().map(|join| join.table.scope_entry()));
        context.push_scope(TableScope::new(tables));
        let result = self.format_body(context);
        context.pop_scope();
        result
    }
}

/// A typed select query.
///
/// `Sc` is the scope the query was created in (schema tables plus common
/// table expressions), `F` the tables it reads from and `O` the row type
/// it returns.
pub struct SelectQuery<Sc, F, O> {
    ast: SelectAst,
    executor: QueryExecutor,
    _marker: PhantomData<fn() -> (Sc, F, O)>,
}

impl<Sc, F, O> Clone for SelectQuery<Sc, F, O> {
    fn clone(&self) -> Self {
        Self {
            ast: self.ast.clone(),
            executor: self.executor.clone(),
            _marker: PhantomData,
        }
    }
}

impl<Sc, F, O> fmt::Debug for SelectQuery<Sc, F, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectQuery").field("ast", &self.ast).finish()
    }
}

impl<Sc, F, O> SelectQuery<Sc, F, O> {
    pub(crate) fn new(from: TableRef, ctes: Vec<Cte>, executor: QueryExecutor) -> Self {
        Self {
            ast: SelectAst::new(from, ctes),
            executor,
            _marker: PhantomData,
        }
    }

    fn cast<F2, O2>(self) -> SelectQuery<Sc, F2, O2> {
        SelectQuery {
            ast: self.ast,
            executor: self.executor,
            _marker: PhantomData,
        }
    }

    pub(crate) fn into_ast(self) -> SelectAst {
        self.ast
    }

    /// Add a column, an aliased column, typed raw sql or a tuple of those.
    /// Each selection appends its value type to the output row.
    pub fn select<S, I>(mut self, selection: S) -> SelectQuery<Sc, F, S::Output>
    where
        S: Selection<F, I, O>,
    {
        let mut items = Vec::new();
        selection.push_selections(&mut items);
        for item in items {
            self.ast.selections.push(item);
        }
        self.cast()
    }

    pub fn distinct(mut self) -> Self {
        self.ast.distinct = true;
        self
    }

    /// `inner join table on left = right`
    pub fn inner_join<J, IJ, L, IL, R, IR>(
        self,
        table: J,
        left: L,
        right: R,
    ) -> SelectQuery<Sc, (J::Table, F), O>
    where
        J: TableExpr,
        Sc: Reachable<J::Table, IJ>,
        L: Operand<(J::Table, F), IL>,
        R: Operand<(J::Table, F), IR, Value = L::Value>,
    {
        self.inner_join_on(table, |on| on.where_column(left, Operator::Eq, right))
    }

    /// Inner join with an arbitrary `on` clause built like a where group.
    pub fn inner_join_on<J, IJ, B>(mut self, table: J, build: B) -> SelectQuery<Sc, (J::Table, F), O>
    where
        J: TableExpr,
        Sc: Reachable<J::Table, IJ>,
        B: FnOnce(WhereGroup<(J::Table, F)>) -> WhereGroup<(J::Table, F)>,
    {
        let conditions = build(WhereGroup::new()).into_conditions();
        self.ast.joins.push(JoinClause {
            ty: JoinType::Inner,
            table: table.into_table_ref(),
            conditions,
        });
        self.cast()
    }

    pub fn group_by<C, I>(mut self, column: C) -> Self
    where
        C: Operand<F, I>,
    {
        self.ast.group_by.push(column.into_operand());
        self
    }

    /// Order by a column of the from-list, or by the output name of a
    /// selection (`"fn"` for `first_name.alias("fn")`).
    pub fn order_by<T, I>(mut self, target: T, ordering: Ordering) -> Self
    where
        T: OrderTarget<F, I>,
    {
        self.ast.order.push(target.into_order(ordering));
        self
    }

    pub fn order_by_raw<R: Into<Raw>>(mut self, raw: R) -> Self {
        self.ast.order.push(OrderExpr::Raw(raw.into()));
        self
    }

    pub fn in_random_order(mut self) -> Self {
        self.ast.order.push(OrderExpr::Random);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.ast.paginator.limit(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.ast.paginator.offset(offset);
        self
    }

    pub fn for_page(mut self, page: u64, per_page: u64) -> Self {
        self.ast.paginator.for_page(page, per_page);
        self
    }

    /// Hand the builder to `build` and continue with whatever it returns.
    pub fn call<R, B>(self, build: B) -> R
    where
        B: FnOnce(Self) -> R,
    {
        build(self)
    }

    /// Builder for subqueries that may reference the tables of this query.
    pub fn expression_builder(&self) -> ExpressionBuilder<Sc, F> {
        ExpressionBuilder::new(self.executor.dialect())
    }

    pub fn compile(&self) -> Result<CompiledQuery> {
        CompiledQuery::from_ast(&self.ast, self.executor.dialect(), QueryKind::Select)
    }

    pub fn compile_for<D: HasDialect>(&self) -> Result<CompiledQuery> {
        CompiledQuery::from_ast(&self.ast, D::DIALECT, QueryKind::Select)
    }

    pub fn to_sql<D: HasDialect>(&self) -> Result<String> {
        self.compile_for::<D>().map(|query| query.sql)
    }
}

impl<Sc, F, O: FromRow> SelectQuery<Sc, F, O> {
    pub async fn execute(&self) -> Result<Vec<O>> {
        let query = self.compile()?;
        let result = self.executor.execute(&query).await?;
        result.rows.into_iter().map(O::from_row).collect()
    }

    pub async fn execute_take_first(&self) -> Result<Option<O>> {
        let query = self.compile()?;
        let result = self.executor.execute(&query).await?;
        result.rows.into_iter().next().map(O::from_row).transpose()
    }

    /// Like `execute_take_first`, failing with [`Error::NoResult`] when
    /// no row comes back.
    pub async fn execute_take_first_or_throw(&self) -> Result<O> {
        self.execute_take_first().await?.ok_or(Error::NoResult)
    }
}

impl<Sc, T: Table> SelectQuery<Sc, (T, ()), ()> {
    /// `select *`, rows decode into the table's row struct. Once tables
    /// are joined the star is qualified (`"person".*`).
    pub fn select_all(mut self) -> SelectQuery<Sc, (T, ()), T::Row> {
        self.ast.all_columns_of = Some(self.ast.from.name);
        self.cast()
    }
}

impl<Sc, F, O> Filter for SelectQuery<Sc, F, O> {
    type Sources = F;

    fn conditions_mut(&mut self) -> &mut Conditions {
        &mut self.ast.conditions
    }
}

// a scalar subquery selecting a single value
impl<Sc, F, V> IntoExpr<V> for SelectQuery<Sc, F, (V,)> {
    fn into_expr(self) -> Expr {
        Expr::Subquery(Box::new(self.ast))
    }
}

impl<Sc, F, V> IntoExpr<Option<V>> for SelectQuery<Sc, F, (V,)> {
    fn into_expr(self) -> Expr {
        Expr::Subquery(Box::new(self.ast))
    }
}

/// Something that can be selected from the tables `F`. `O` is the output
/// row so far and `Output` the row after this selection.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be selected here",
    label = "only columns of tables in the from list, aliased columns and typed sql can be selected"
)]
pub trait Selection<F, I, O> {
    type Output;

    #[doc(hidden)]
    fn push_selections(self, items: &mut Vec<SelectItem>);
}

impl<C, F, I, O> Selection<F, I, O> for AliasedColumn<C>
where
    C: Column,
    F: Contains<C::Table, I>,
    O: Append<C::Value>,
{
    type Output = O::Output;

    fn push_selections(self, items: &mut Vec<SelectItem>) {
        items.push(SelectItem::column::<C>(Some(self.alias)));
    }
}

impl<F, O, V> Selection<F, (), O> for Sql<V>
where
    O: Append<V>,
{
    type Output = O::Output;

    fn push_selections(self, items: &mut Vec<SelectItem>) {
        items.push(SelectItem::new(Expr::Raw(self.raw), self.alias));
    }
}

macro_rules! impl_selection_tuple {
    ($first:ident $first_index:ident $(, $ty:ident $index:ident $prev:ident)* ; $last:ident ; $($n:tt),+) => {
        impl<Fr, Out, $first, $first_index, $($ty, $index),*> Selection<Fr, ($first_index, $($index,)*), Out>
            for ($first, $($ty,)*)
        where
            $first: Selection<Fr, $first_index, Out>,
            $($ty: Selection<Fr, $index, $prev::Output>,)*
        {
            type Output = $last::Output;

            fn push_selections(self, items: &mut Vec<SelectItem>) {
                $(self.$n.push_selections(items);)+
            }
        }
    };
}

impl_selection_tuple!(T1 I1 ; T1 ; 0);
impl_selection_tuple!(T1 I1, T2 I2 T1 ; T2 ; 0, 1);
impl_selection_tuple!(T1 I1, T2 I2 T1, T3 I3 T2 ; T3 ; 0, 1, 2);
impl_selection_tuple!(T1 I1, T2 I2 T1, T3 I3 T2, T4 I4 T3 ; T4 ; 0, 1, 2, 3);
impl_selection_tuple!(T1 I1, T2 I2 T1, T3 I3 T2, T4 I4 T3, T5 I5 T4 ; T5 ; 0, 1, 2, 3, 4);
impl_selection_tuple!(T1 I1, T2 I2 T1, T3 I3 T2, T4 I4 T3, T5 I5 T4, T6 I6 T5 ; T6 ; 0, 1, 2, 3, 4, 5);
impl_selection_tuple!(T1 I1, T2 I2 T1, T3 I3 T2, T4 I4 T3, T5 I5 T4, T6 I6 T5, T7 I7 T6 ; T7 ; 0, 1, 2, 3, 4, 5, 6);
impl_selection_tuple!(T1 I1, T2 I2 T1, T3 I3 T2, T4 I4 T3, T5 I5 T4, T6 I6 T5, T7 I7 T6, T8 I8 T7 ; T8 ; 0, 1, 2, 3, 4, 5, 6, 7);

/// Index of order targets resolved by output name.
pub struct ByName;

#[diagnostic::on_unimplemented(
    message = "cannot order by `{Self}`",
    label = "expected a column of the from list or the name of a selection"
)]
pub trait OrderTarget<F, I> {
    #[doc(hidden)]
    fn into_order(self, ordering: Ordering) -> OrderExpr;
}

impl<F> OrderTarget<F, ByName> for &str {
    fn into_order(self, ordering: Ordering) -> OrderExpr {
        OrderExpr::Selection(self.into_ident(), ordering)
    }
}

impl<F> OrderTarget<F, ByName> for String {
    fn into_order(self, ordering: Ordering) -> OrderExpr {
        OrderExpr::Selection(self.into_ident(), ordering)
    }
}

impl<F> OrderTarget<F, ByName> for Ident {
    fn into_order(self, ordering: Ordering) -> OrderExpr {
        OrderExpr::Selection(self, ordering)
    }
}

impl<F, C: Column> OrderTarget<F, ByName> for AliasedColumn<C> {
    fn into_order(self, ordering: Ordering) -> OrderExpr {
        OrderExpr::Selection(self.alias, ordering)
    }
}

impl<F, V> OrderTarget<F, ()> for Sql<V> {
    fn into_order(self, ordering: Ordering) -> OrderExpr {
        match self.alias {
            Some(alias) => OrderExpr::Selection(alias, ordering),
            None => OrderExpr::Expr(Expr::Raw(self.raw), ordering),
        }
    }
}
