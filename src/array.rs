use std::{fmt, slice};

use crate::writer::{FormatContext, FormatWriter};

/// Small list that avoids allocating for zero or one item.
#[derive(Debug, Clone)]
pub(crate) enum Array<T> {
    None,
    One(T),
    Many(Vec<T>),
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T> Array<T> {
    pub(crate) fn push(&mut self, item: T) {
        *self = match std::mem::take(self) {
            Self::None => Self::One(item),
            Self::One(first) => Self::Many(vec![first, item]),
            Self::Many(mut items) => {
                items.push(item);
                Self::Many(items)
            }
        };
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            Self::None => 0,
            Self::One(_) => 1,
            Self::Many(items) => items.len(),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        match self {
            Self::None => &[],
            Self::One(item) => slice::from_ref(item),
            Self::Many(items) => items.as_slice(),
        }
    }

    pub(crate) fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::None;
        for item in iter {
            array.push(item);
        }
        array
    }
}

/// Comma separated list, `*` when empty.
impl<T: FormatWriter> FormatWriter for Array<T> {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        if self.is_empty() {
            return context.writer.write_char('*');
        }
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                context.writer.write_str(", ")?;
            }
            item.format_writer(context)?;
        }
        Ok(())
    }
}
