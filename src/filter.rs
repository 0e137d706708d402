use std::marker::PhantomData;

use crate::{
    expr::{
        Expr, IntoExpr, Operand,
        between::{BetweenCondition, BetweenOperator},
        binary::{BinaryCondition, Operator},
        cond::{ConditionKind, Conditions, Conjunction},
        exists::{ExistsCondition, ExistsOperator},
        group::GroupCondition,
        r#in::{InCondition, InList, InOperator},
        unary::{UnaryCondition, UnaryOperator},
    },
    raw::Raw,
    select::SelectQuery,
};

/// Where clauses shared by select, update and delete queries.
///
/// Columns are checked against `Sources`, the tables the query reads from,
/// and values against the column type. The shorthand comparison methods
/// (`where_eq`, `or_where_like`, `where_null`, ...) come from
/// [`BinaryFilter`](crate::BinaryFilter) and [`UnaryFilter`](crate::UnaryFilter).
pub trait Filter: Sized {
    type Sources;

    #[doc(hidden)]
    fn conditions_mut(&mut self) -> &mut Conditions;

    #[doc(hidden)]
    fn where_binary<C, I, V>(
        self,
        conjunction: Conjunction,
        column: C,
        operator: Operator,
        value: V,
    ) -> Self
    where
        C: Operand<Self::Sources, I>,
        V: IntoExpr<C::Value>,
    {
        let binary = BinaryCondition {
            lhs: column.into_operand(),
            operator,
            rhs: value.into_expr(),
        };
        push_condition(self, conjunction, ConditionKind::Binary(binary))
    }

    #[doc(hidden)]
    fn where_unary<C, I>(self, conjunction: Conjunction, column: C, operator: UnaryOperator) -> Self
    where
        C: Operand<Self::Sources, I>,
    {
        let unary = UnaryCondition {
            lhs: column.into_operand(),
            operator,
        };
        push_condition(self, conjunction, ConditionKind::Unary(unary))
    }

    fn where_clause<C, I, V>(self, column: C, operator: Operator, value: V) -> Self
    where
        C: Operand<Self::Sources, I>,
        V: IntoExpr<C::Value>,
    {
        self.where_binary(Conjunction::And, column, operator, value)
    }

    fn or_where_clause<C, I, V>(self, column: C, operator: Operator, value: V) -> Self
    where
        C: Operand<Self::Sources, I>,
        V: IntoExpr<C::Value>,
    {
        self.where_binary(Conjunction::Or, column, operator, value)
    }

    /// Compare two columns of the same type.
    fn where_column<L, IL, R, IR>(self, left: L, operator: Operator, right: R) -> Self
    where
        L: Operand<Self::Sources, IL>,
        R: Operand<Self::Sources, IR, Value = L::Value>,
    {
        let binary = BinaryCondition {
            lhs: left.into_operand(),
            operator,
            rhs: right.into_operand(),
        };
        push_condition(self, Conjunction::And, ConditionKind::Binary(binary))
    }

    fn where_in<C, I, V, L>(self, column: C, values: L) -> Self
    where
        C: Operand<Self::Sources, I>,
        L: IntoIterator<Item = V>,
        V: IntoExpr<C::Value>,
    {
        push_in(self, InOperator::In, column, values)
    }

    fn where_not_in<C, I, V, L>(self, column: C, values: L) -> Self
    where
        C: Operand<Self::Sources, I>,
        L: IntoIterator<Item = V>,
        V: IntoExpr<C::Value>,
    {
        push_in(self, InOperator::NotIn, column, values)
    }

    /// `column in (select ...)`, the subquery selects one value of the
    /// column's type.
    fn where_in_query<C, I, Sc, F>(self, column: C, query: SelectQuery<Sc, F, (C::Value,)>) -> Self
    where
        C: Operand<Self::Sources, I>,
    {
        let condition = InCondition {
            operator: InOperator::In,
            lhs: column.into_operand(),
            rhs: InList::Subquery(Box::new(query.into_ast())),
        };
        push_condition(self, Conjunction::And, ConditionKind::In(condition))
    }

    fn where_between<C, I, L, H>(self, column: C, low: L, high: H) -> Self
    where
        C: Operand<Self::Sources, I>,
        L: IntoExpr<C::Value>,
        H: IntoExpr<C::Value>,
    {
        push_between(self, BetweenOperator::Between, column, low, high)
    }

    fn where_not_between<C, I, L, H>(self, column: C, low: L, high: H) -> Self
    where
        C: Operand<Self::Sources, I>,
        L: IntoExpr<C::Value>,
        H: IntoExpr<C::Value>,
    {
        push_between(self, BetweenOperator::NotBetween, column, low, high)
    }

    fn where_exists<Sc, F, O>(self, query: SelectQuery<Sc, F, O>) -> Self {
        let exists = ExistsCondition {
            operator: ExistsOperator::Exists,
            subquery: Box::new(query.into_ast()),
        };
        push_condition(self, Conjunction::And, ConditionKind::Exists(exists))
    }

    fn where_not_exists<Sc, F, O>(self, query: SelectQuery<Sc, F, O>) -> Self {
        let exists = ExistsCondition {
            operator: ExistsOperator::NotExists,
            subquery: Box::new(query.into_ast()),
        };
        push_condition(self, Conjunction::And, ConditionKind::Exists(exists))
    }

    /// Parenthesized group of conditions, joined with `and`.
    fn where_group<B>(self, build: B) -> Self
    where
        B: FnOnce(WhereGroup<Self::Sources>) -> WhereGroup<Self::Sources>,
    {
        push_group(self, Conjunction::And, build)
    }

    fn or_where_group<B>(self, build: B) -> Self
    where
        B: FnOnce(WhereGroup<Self::Sources>) -> WhereGroup<Self::Sources>,
    {
        push_group(self, Conjunction::Or, build)
    }

    fn where_raw<R: Into<Raw>>(self, raw: R) -> Self {
        push_condition(self, Conjunction::And, ConditionKind::Raw(raw.into()))
    }

    fn or_where_raw<R: Into<Raw>>(self, raw: R) -> Self {
        push_condition(self, Conjunction::Or, ConditionKind::Raw(raw.into()))
    }
}

fn push_condition<T: Filter>(mut filter: T, conjunction: Conjunction, kind: ConditionKind) -> T {
    filter.conditions_mut().push(conjunction, kind);
    filter
}

fn push_in<T, C, I, V, L>(filter: T, operator: InOperator, column: C, values: L) -> T
where
    T: Filter,
    C: Operand<T::Sources, I>,
    L: IntoIterator<Item = V>,
    V: IntoExpr<C::Value>,
{
    let values: Vec<Expr> = values.into_iter().map(|value| value.into_expr()).collect();
    let condition = InCondition {
        operator,
        lhs: column.into_operand(),
        rhs: InList::Values(values),
    };
    push_condition(filter, Conjunction::And, ConditionKind::In(condition))
}

fn push_between<T, C, I, L, H>(filter: T, operator: BetweenOperator, column: C, low: L, high: H) -> T
where
    T: Filter,
    C: Operand<T::Sources, I>,
    L: IntoExpr<C::Value>,
    H: IntoExpr<C::Value>,
{
    let between = BetweenCondition {
        lhs: column.into_operand(),
        low: low.into_expr(),
        high: high.into_expr(),
        operator,
    };
    push_condition(filter, Conjunction::And, ConditionKind::Between(between))
}

fn push_group<T, B>(filter: T, conjunction: Conjunction, build: B) -> T
where
    T: Filter,
    B: FnOnce(WhereGroup<T::Sources>) -> WhereGroup<T::Sources>,
{
    let group = build(WhereGroup::new());
    // an empty group would render as `()`
    if group.conditions.is_empty() {
        return filter;
    }
    let group = GroupCondition {
        conditions: group.conditions,
    };
    push_condition(filter, conjunction, ConditionKind::Group(group))
}

/// Conditions collected inside `where_group`.
pub struct WhereGroup<F> {
    conditions: Conditions,
    _sources: PhantomData<fn() -> F>,
}

impl<F> WhereGroup<F> {
    pub(crate) fn new() -> Self {
        Self {
            conditions: Conditions::default(),
            _sources: PhantomData,
        }
    }

    pub(crate) fn into_conditions(self) -> Conditions {
        self.conditions
    }
}

impl<F> Filter for WhereGroup<F> {
    type Sources = F;

    fn conditions_mut(&mut self) -> &mut Conditions {
        &mut self.conditions
    }
}
