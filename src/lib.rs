//! A statically typed, fluent sql query builder.
//!
//! Tables are declared with `#[derive(Table)]`, databases with
//! `#[derive(Schema)]`. Queries built from a [`Db`] are checked by the
//! compiler: only tables of the schema, columns of the tables a query reads
//! from and values of the column's type are accepted, and the row type of a
//! select follows from its selections.

extern crate self as strata;

mod array;
mod config;
mod creator;
mod db;
mod delete;
mod dialect;
pub mod driver;
mod error;
mod executor;
pub mod expr;
mod filter;
mod ident;
mod insert;
mod join;
mod paginate;
mod query;
mod raw;
mod row;
pub mod schema;
mod select;
mod type_checks;
mod update;
mod value;
mod with;
mod writer;

pub use config::{ConnectionConfig, Config, LogConfig};
pub use creator::{ExpressionBuilder, QueryCreator};
pub use db::{Db, Transaction};
pub use delete::DeleteQuery;
pub use dialect::{Dialect, HasDialect, MySql, Postgres, Sqlite};
pub use driver::{DatabaseConnection, Driver, DummyDriver, QueryResult};
pub use error::{Error, Result};
pub use expr::{Conjunction, IntoExpr, Operand, Operator, Ordering};
pub use filter::{Filter, WhereGroup};
pub use ident::{Ident, IntoIdent};
pub use insert::{ColumnList, InsertQuery, UpdatableList};
pub use query::{CompiledQuery, DeleteResult, InsertResult, QueryKind, UpdateResult};
pub use raw::{Raw, Sql, raw, sql};
pub use row::{FromRow, Row};
pub use schema::{
    AliasedColumn, AliasedTable, Append, Column, Contains, HasTable, InsertRow, Schema, Table,
    TableExpr, Updatable,
};
pub use select::{ByName, OrderTarget, SelectQuery, Selection};
pub use update::UpdateQuery;
pub use value::{FromValue, IntoValue, Value, ValueError};

pub use expr::binary::BinaryFilter;
pub use expr::unary::UnaryFilter;

pub use strata_derive::{Schema, SqlEnum, Table};

#[cfg(any(feature = "postgres", feature = "mysql", feature = "sqlite"))]
pub use driver::SqlxDriver;

/// Everything needed to declare tables and build queries.
pub mod prelude {
    pub use crate::{
        BinaryFilter, Column, Db, Dialect, Filter, Ordering, Schema, SqlEnum, Table, Transaction,
        UnaryFilter, sql,
    };
}

/// Implements the query traits of a column marker generated by
/// `#[derive(Table)]`.
#[doc(hidden)]
#[macro_export]
macro_rules! impl_column {
    ($column:ty) => {
        impl<F, I> $crate::Operand<F, I> for $column
        where
            F: $crate::Contains<<$column as $crate::Column>::Table, I>,
        {
            type Value = <$column as $crate::Column>::Value;

            fn into_operand(self) -> $crate::expr::Expr {
                $crate::expr::Expr::column::<$column>()
            }
        }

        impl<F, I, O> $crate::Selection<F, I, O> for $column
        where
            F: $crate::Contains<<$column as $crate::Column>::Table, I>,
            O: $crate::Append<<$column as $crate::Column>::Value>,
        {
            type Output = <O as $crate::Append<<$column as $crate::Column>::Value>>::Output;

            fn push_selections(self, __items: &mut ::std::vec::Vec<$crate::expr::SelectItem>) {
                __items.push($crate::expr::SelectItem::column::<$column>(::std::option::Option::None));
            }
        }

        impl<F, I> $crate::OrderTarget<F, I> for $column
        where
            F: $crate::Contains<<$column as $crate::Column>::Table, I>,
        {
            fn into_order(self, __ordering: $crate::Ordering) -> $crate::expr::OrderExpr {
                $crate::expr::OrderExpr::Expr($crate::expr::Expr::column::<$column>(), __ordering)
            }
        }

        impl $crate::ColumnList<<$column as $crate::Column>::Table> for $column {
            fn push_columns(self, __columns: &mut ::std::vec::Vec<&'static str>) {
                __columns.push(<$column as $crate::Column>::NAME);
            }
        }
    };
}
