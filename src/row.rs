use smol_str::SmolStr;

use crate::{
    error::{Error, Result},
    value::{FromValue, Value},
};

/// One result row, cells keep the order of the select list. Names may
/// repeat when a join selects same-named columns.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Row {
    values: Vec<(SmolStr, Value)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<K: Into<SmolStr>>(&mut self, column: K, value: Value) -> &mut Self {
        self.values.push((column.into(), value));
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// First cell named `column`.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.position(column).map(|index| &self.values[index].1)
    }

    fn position(&self, column: &str) -> Option<usize> {
        self.values.iter().position(|(name, _)| name.as_str() == column)
    }

    /// Remove and decode the first cell named `column`.
    pub fn try_take<T: FromValue>(&mut self, column: &str) -> Result<T> {
        let index = self
            .position(column)
            .ok_or_else(|| Error::decode(column, "column not found in row"))?;
        let (_, value) = self.values.remove(index);
        T::from_value(value).map_err(|err| Error::decode(column, err.to_string()))
    }

    pub(crate) fn into_cells(self) -> impl Iterator<Item = (SmolStr, Value)> {
        self.values.into_iter()
    }
}

impl<K: Into<SmolStr>> FromIterator<(K, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

pub trait FromRow: Sized {
    fn from_row(row: Row) -> Result<Self>;
}

impl FromRow for Row {
    fn from_row(row: Row) -> Result<Self> {
        Ok(row)
    }
}

impl FromRow for () {
    fn from_row(_row: Row) -> Result<Self> {
        Ok(())
    }
}

// tuples decode positionally, names are only used in error messages
macro_rules! impl_from_row_tuple {
    ($($ty:ident),+) => {
        impl<$($ty: FromValue),+> FromRow for ($($ty,)+) {
            fn from_row(row: Row) -> Result<Self> {
                let mut cells = row.into_cells();
                Ok(($(
                    {
                        let (name, value) = cells
                            .next()
                            .ok_or_else(|| Error::decode("?", "row has fewer columns than selections"))?;
                        <$ty as FromValue>::from_value(value).map_err(|err| Error::decode(name.as_str(), err.to_string()))?
                    },
                )+))
            }
        }
    };
}

impl_from_row_tuple!(A);
impl_from_row_tuple!(A, B);
impl_from_row_tuple!(A, B, C);
impl_from_row_tuple!(A, B, C, D);
impl_from_row_tuple!(A, B, C, D, E);
impl_from_row_tuple!(A, B, C, D, E, F);
impl_from_row_tuple!(A, B, C, D, E, F, G);
impl_from_row_tuple!(A, B, C, D, E, F, G, H);
impl_from_row_tuple!(A, B, C, D, E, F, G, H, I);
impl_from_row_tuple!(A, B, C, D, E, F, G, H, I, J);
impl_from_row_tuple!(A, B, C, D, E, F, G, H, I, J, K);
impl_from_row_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> Row {
        [
            ("id", Value::I64(1)),
            ("fn", Value::String("Jennifer".into())),
            ("age", Value::Null),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_tuple_positional() {
        let (id, name, age) = <(i32, String, Option<i32>)>::from_row(row()).unwrap();
        assert_eq!(1, id);
        assert_eq!("Jennifer", name);
        assert_eq!(None, age);
    }

    #[test]
    fn test_tuple_too_short() {
        let err = <(i32, String, Option<i32>, bool)>::from_row(row()).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn test_try_take_by_name() {
        let mut row = row();
        assert_eq!("Jennifer", row.try_take::<String>("fn").unwrap());
        let err = row.try_take::<i32>("age").unwrap_err();
        assert_eq!(
            "decode error on column 'age': expected i32, found null",
            err.to_string()
        );
        assert!(row.try_take::<i32>("missing").is_err());
    }

    #[test]
    fn test_repeated_names() {
        let mut row = Row::new();
        row.insert("id", Value::I32(1)).insert("id", Value::I32(7));
        assert_eq!(2, row.len());
        assert_eq!(Some(&Value::I32(1)), row.get("id"));

        let (person_id, pet_id) = <(i32, i32)>::from_row(row.clone()).unwrap();
        assert_eq!((1, 7), (person_id, pet_id));

        assert_eq!(1, row.try_take::<i32>("id").unwrap());
        assert_eq!(7, row.try_take::<i32>("id").unwrap());
        assert!(row.is_empty());
    }
}
