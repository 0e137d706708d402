use std::fmt;

use crate::{
    raw::Raw,
    writer::{FormatContext, FormatWriter},
};

use super::{
    between::BetweenCondition, binary::BinaryCondition, exists::ExistsCondition,
    group::GroupCondition, r#in::InCondition, unary::UnaryCondition,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conjunction {
    And,
    Or,
}

impl FormatWriter for Conjunction {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        match self {
            Conjunction::And => context.writer.write_str("and"),
            Conjunction::Or => context.writer.write_str("or"),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) enum ConditionKind {
    Binary(BinaryCondition),
    Unary(UnaryCondition),
    Between(BetweenCondition),
    In(InCondition),
    Exists(ExistsCondition),
    Group(GroupCondition),
    Raw(Raw),
}

impl FormatWriter for ConditionKind {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        match self {
            ConditionKind::Binary(binary) => binary.format_writer(context),
            ConditionKind::Unary(unary) => unary.format_writer(context),
            ConditionKind::Between(between) => between.format_writer(context),
            ConditionKind::In(inc) => inc.format_writer(context),
            ConditionKind::Exists(exists) => exists.format_writer(context),
            ConditionKind::Group(group) => group.format_writer(context),
            ConditionKind::Raw(raw) => raw.format_writer(context),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Condition {
    conjunction: Conjunction,
    kind: ConditionKind,
}

impl Condition {
    pub(crate) fn new(conjunction: Conjunction, kind: ConditionKind) -> Self {
        Self { conjunction, kind }
    }
}

#[derive(Debug, Default, Clone)]
pub struct Conditions(Vec<Condition>);

impl Conditions {
    pub(crate) fn push(&mut self, conjunction: Conjunction, kind: ConditionKind) {
        self.0.push(Condition::new(conjunction, kind));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Write ` where ...` when there is at least one condition.
    pub(crate) fn format_where<W: fmt::Write>(
        &self,
        context: &mut FormatContext<'_, W>,
    ) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        context.writer.write_str(" where ")?;
        self.format_writer(context)
    }
}

impl FormatWriter for Conditions {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        for (index, condition) in self.0.iter().enumerate() {
            if index > 0 {
                context.writer.write_char(' ')?;
                condition.conjunction.format_writer(context)?;
                context.writer.write_char(' ')?;
            }
            condition.kind.format_writer(context)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        dialect::Dialect,
        expr::{Expr, binary::Operator, unary::UnaryOperator},
        tests::format_writer,
        value::Value,
    };

    use super::*;

    #[test]
    fn test_conjunctions() {
        let mut conditions = Conditions::default();
        conditions.push(
            Conjunction::And,
            ConditionKind::Binary(BinaryCondition {
                lhs: Expr::Raw(Raw::new_static("age")),
                operator: Operator::Gt,
                rhs: Expr::Value(Value::I32(18)),
            }),
        );
        conditions.push(
            Conjunction::Or,
            ConditionKind::Unary(UnaryCondition {
                lhs: Expr::Raw(Raw::new_static("age")),
                operator: UnaryOperator::Null,
            }),
        );
        assert_eq!(
            "age > $1 or age is null",
            format_writer(conditions, Dialect::Postgres)
        );
    }

    #[test]
    fn test_format_where_empty() {
        let mut out = String::new();
        let mut context = FormatContext::new(&mut out, Dialect::Postgres);
        Conditions::default().format_where(&mut context).unwrap();
        assert!(out.is_empty());
    }
}
