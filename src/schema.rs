//! Type level description of a database.
//!
//! Tables and columns are zero sized markers generated by `#[derive(Table)]`.
//! A query keeps the tables it selects from in a from-list, a type level
//! list built from nested pairs: `(pet::table, (person::table, ()))`. The
//! [`Contains`] trait proves that a table is part of such a list, and the
//! index parameter it carries is always inferred.

use std::{fmt, marker::PhantomData};

use indexmap::IndexMap;

use crate::{
    expr::Expr,
    ident::{Ident, IntoIdent},
    row::FromRow,
    writer::{FormatContext, FormatWriter},
};

pub trait Table: Copy + Default + Send + Sync + 'static {
    const NAME: &'static str;
    const COLUMNS: &'static [&'static str];

    /// Row struct returned by `select_all`.
    type Row: FromRow;

    /// Value types of every column, in declaration order.
    type Shape;

    fn alias<A: IntoIdent>(self, alias: A) -> AliasedTable<Self> {
        AliasedTable {
            alias: alias.into_ident(),
            _table: PhantomData,
        }
    }
}

pub trait Column: Copy + Default + Send + Sync + 'static {
    type Table: Table;
    type Value;
    const NAME: &'static str;

    fn alias<A: IntoIdent>(self, alias: A) -> AliasedColumn<Self> {
        AliasedColumn {
            alias: alias.into_ident(),
            _column: PhantomData,
        }
    }
}

/// Column that may be written by an update.
pub trait Updatable: Column {}

/// A complete insert row, every required column has a value.
pub trait InsertRow {
    type Table: Table;

    fn into_assignments(self) -> Assignments;
}

pub trait Schema: Send + Sync + 'static {
    const TABLES: &'static [&'static str];
}

pub trait HasTable<T: Table>: Schema {}

pub struct AliasedTable<T> {
    pub(crate) alias: Ident,
    _table: PhantomData<fn() -> T>,
}

impl<T> Clone for AliasedTable<T> {
    fn clone(&self) -> Self {
        Self {
            alias: self.alias.clone(),
            _table: PhantomData,
        }
    }
}

impl<T: Table> fmt::Debug for AliasedTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} as {}", T::NAME, self.alias)
    }
}

pub struct AliasedColumn<C> {
    pub(crate) alias: Ident,
    _column: PhantomData<fn() -> C>,
}

impl<C> Clone for AliasedColumn<C> {
    fn clone(&self) -> Self {
        Self {
            alias: self.alias.clone(),
            _column: PhantomData,
        }
    }
}

impl<C: Column> fmt::Debug for AliasedColumn<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{} as {}", <C::Table as Table>::NAME, C::NAME, self.alias)
    }
}

/// Table name plus optional alias, as written in a `from` or `join`.
#[doc(hidden)]
#[derive(Debug, Clone)]
pub struct TableRef {
    pub(crate) name: &'static str,
    pub(crate) alias: Option<Ident>,
}

impl TableRef {
    pub(crate) fn scope_entry(&self) -> (&'static str, Option<Ident>) {
        (self.name, self.alias.clone())
    }
}

impl FormatWriter for TableRef {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        context.write_table(self.name)?;
        context.write_alias(self.alias.as_ref())
    }
}

/// Something that can appear in `from`: a table or an aliased table.
pub trait TableExpr {
    type Table: Table;

    #[doc(hidden)]
    fn into_table_ref(self) -> TableRef;
}

impl<T: Table> TableExpr for T {
    type Table = T;

    fn into_table_ref(self) -> TableRef {
        TableRef {
            name: T::NAME,
            alias: None,
        }
    }
}

impl<T: Table> TableExpr for AliasedTable<T> {
    type Table = T;

    fn into_table_ref(self) -> TableRef {
        TableRef {
            name: T::NAME,
            alias: Some(self.alias),
        }
    }
}

pub struct Here;

pub struct There<I>(PhantomData<I>);

/// `T` is an element of the type level list `Self`.
#[diagnostic::on_unimplemented(
    message = "table `{T}` is not part of this query",
    label = "column of a table that is not in the from list"
)]
pub trait Contains<T, I> {}

impl<T, Rest> Contains<T, Here> for (T, Rest) {}

impl<T, Head, Rest, I> Contains<T, There<I>> for (Head, Rest) where Rest: Contains<T, I> {}

/// Tables a query may select from: the schema `S` plus the common table
/// expressions `W` declared with `with`.
pub struct Scope<S, W>(PhantomData<fn() -> (S, W)>);

pub struct InSchema;

pub struct InCte<I>(PhantomData<I>);

#[diagnostic::on_unimplemented(
    message = "table `{T}` is neither in the schema nor a common table expression"
)]
pub trait Reachable<T, I> {}

impl<S, W, T> Reachable<T, InSchema> for Scope<S, W>
where
    S: HasTable<T>,
    T: Table,
{
}

impl<S, W, T, I> Reachable<T, InCte<I>> for Scope<S, W> where W: Contains<T, I> {}

/// Push `V` at the end of a result tuple.
pub trait Append<V> {
    type Output;
}

impl<V> Append<V> for () {
    type Output = (V,);
}

macro_rules! impl_append {
    ($($ty:ident),+) => {
        impl<$($ty,)+ V> Append<V> for ($($ty,)+) {
            type Output = ($($ty,)+ V);
        }
    };
}

impl_append!(A);
impl_append!(A, B);
impl_append!(A, B, C);
impl_append!(A, B, C, D);
impl_append!(A, B, C, D, E);
impl_append!(A, B, C, D, E, F);
impl_append!(A, B, C, D, E, F, G);
impl_append!(A, B, C, D, E, F, G, H);
impl_append!(A, B, C, D, E, F, G, H, I);
impl_append!(A, B, C, D, E, F, G, H, I, J);
impl_append!(A, B, C, D, E, F, G, H, I, J, K);

/// Insert builder state of a required column that has no value yet.
pub struct Unset;

/// Insert builder state of a required column that has a value.
pub struct Set;

/// Column values of one insert row, in the order they were set.
#[derive(Debug, Default, Clone)]
pub struct Assignments(pub(crate) IndexMap<&'static str, Expr>);

impl Assignments {
    #[doc(hidden)]
    pub fn set(&mut self, column: &'static str, value: Expr) {
        self.0.insert(column, value);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }
}
