use crate::expr::{Expr, IntoExpr};

// max size is 32 bytes
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    String(String),
    Bytes(Vec<u8>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::String(_) => "string",
            Self::Bytes(_) => "bytes",
        }
    }

    fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::I16(value) => Some(i64::from(value)),
            Self::I32(value) => Some(i64::from(value)),
            Self::I64(value) => Some(value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected}, found {found}")]
pub struct ValueError {
    pub expected: &'static str,
    pub found: String,
}

impl ValueError {
    pub fn new(expected: &'static str, value: &Value) -> Self {
        let found = match value {
            Value::String(s) => format!("string `{s}`"),
            other => other.kind().to_owned(),
        };
        Self { expected, found }
    }
}

pub trait IntoValue {
    fn into_value(self) -> Value;
}

pub trait FromValue: Sized {
    fn from_value(value: Value) -> Result<Self, ValueError>;
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl FromValue for Value {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        Ok(value)
    }
}

impl<T> IntoValue for Option<T>
where
    T: IntoValue,
{
    fn into_value(self) -> Value {
        if let Some(value) = self {
            value.into_value()
        } else {
            Value::Null
        }
    }
}

impl<T> FromValue for Option<T>
where
    T: FromValue,
{
    fn from_value(value: Value) -> Result<Self, ValueError> {
        if value.is_null() {
            Ok(None)
        } else {
            T::from_value(value).map(Some)
        }
    }
}

impl IntoValue for bool {
    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        // mysql and sqlite store booleans as integers
        match value {
            Value::Bool(value) => Ok(value),
            ref other => match other.as_i64() {
                Some(0) => Ok(false),
                Some(1) => Ok(true),
                _ => Err(ValueError::new("bool", other)),
            },
        }
    }
}

macro_rules! impl_integer {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl IntoValue for $ty {
                fn into_value(self) -> Value {
                    Value::$variant(self)
                }
            }

            impl FromValue for $ty {
                fn from_value(value: Value) -> Result<Self, ValueError> {
                    value
                        .as_i64()
                        .and_then(|int| <$ty>::try_from(int).ok())
                        .ok_or_else(|| ValueError::new(stringify!($ty), &value))
                }
            }
        )*
    };
}

impl_integer! {
    i16 => I16,
    i32 => I32,
    i64 => I64,
}

impl IntoValue for u8 {
    fn into_value(self) -> Value {
        Value::I16(i16::from(self))
    }
}

impl IntoValue for u16 {
    fn into_value(self) -> Value {
        Value::I32(i32::from(self))
    }
}

impl IntoValue for u32 {
    fn into_value(self) -> Value {
        Value::I64(i64::from(self))
    }
}

impl IntoValue for f32 {
    fn into_value(self) -> Value {
        Value::F32(self)
    }
}

impl FromValue for f32 {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::F32(value) => Ok(value),
            #[allow(clippy::cast_possible_truncation)]
            Value::F64(value) => Ok(value as f32),
            other => Err(ValueError::new("f32", &other)),
        }
    }
}

impl IntoValue for f64 {
    fn into_value(self) -> Value {
        Value::F64(self)
    }
}

impl FromValue for f64 {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::F64(value) => Ok(value),
            Value::F32(value) => Ok(f64::from(value)),
            #[allow(clippy::cast_precision_loss)]
            ref other => other
                .as_i64()
                .map(|int| int as f64)
                .ok_or_else(|| ValueError::new("f64", other)),
        }
    }
}

impl IntoValue for String {
    fn into_value(self) -> Value {
        Value::String(self)
    }
}

impl IntoValue for &str {
    fn into_value(self) -> Value {
        Value::String(self.to_owned())
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::String(value) => Ok(value),
            other => Err(ValueError::new("string", &other)),
        }
    }
}

impl IntoValue for Vec<u8> {
    fn into_value(self) -> Value {
        Value::Bytes(self)
    }
}

impl IntoValue for &[u8] {
    fn into_value(self) -> Value {
        Value::Bytes(self.to_vec())
    }
}

impl FromValue for Vec<u8> {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Bytes(value) => Ok(value),
            Value::String(value) => Ok(value.into_bytes()),
            other => Err(ValueError::new("bytes", &other)),
        }
    }
}

/// Let `$source` be written where a column of type `$target` (or its
/// nullable form) is expected.
#[doc(hidden)]
#[macro_export]
macro_rules! impl_into_expr {
    ($($target:ty => [$($source:ty),+ $(,)?]),* $(,)?) => {
        $(
            $(
                impl $crate::IntoExpr<$target> for $source {
                    fn into_expr(self) -> $crate::expr::Expr {
                        $crate::expr::Expr::Value($crate::IntoValue::into_value(self))
                    }
                }

                impl $crate::IntoExpr<::std::option::Option<$target>> for $source {
                    fn into_expr(self) -> $crate::expr::Expr {
                        $crate::expr::Expr::Value($crate::IntoValue::into_value(self))
                    }
                }
            )+
        )*
    };
}

impl_into_expr! {
    bool => [bool],
    i16 => [i16],
    i32 => [i32],
    i64 => [i64],
    f32 => [f32],
    f64 => [f64],
    String => [String, &str],
    Vec<u8> => [Vec<u8>, &[u8]],
}

impl<T: IntoValue> IntoExpr<Option<T>> for Option<T> {
    fn into_expr(self) -> Expr {
        Expr::Value(self.into_value())
    }
}

impl IntoExpr<Value> for Value {
    fn into_expr(self) -> Expr {
        Expr::Value(self)
    }
}

#[cfg(feature = "chrono")]
mod chrono_impls {
    use super::*;

    const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

    impl IntoValue for chrono::NaiveDateTime {
        fn into_value(self) -> Value {
            Value::String(self.format(DATETIME_FORMAT).to_string())
        }
    }

    impl FromValue for chrono::NaiveDateTime {
        fn from_value(value: Value) -> Result<Self, ValueError> {
            match value {
                Value::String(ref s) => chrono::NaiveDateTime::parse_from_str(s, DATETIME_FORMAT)
                    .or_else(|_| s.parse::<chrono::NaiveDateTime>())
                    .map_err(|_| ValueError::new("datetime", &value)),
                other => Err(ValueError::new("datetime", &other)),
            }
        }
    }

    impl IntoValue for chrono::NaiveDate {
        fn into_value(self) -> Value {
            Value::String(self.format("%Y-%m-%d").to_string())
        }
    }

    impl FromValue for chrono::NaiveDate {
        fn from_value(value: Value) -> Result<Self, ValueError> {
            match value {
                Value::String(ref s) => s
                    .parse::<chrono::NaiveDate>()
                    .map_err(|_| ValueError::new("date", &value)),
                other => Err(ValueError::new("date", &other)),
            }
        }
    }

    impl IntoValue for chrono::DateTime<chrono::Utc> {
        fn into_value(self) -> Value {
            Value::String(self.to_rfc3339())
        }
    }

    impl FromValue for chrono::DateTime<chrono::Utc> {
        fn from_value(value: Value) -> Result<Self, ValueError> {
            match value {
                Value::String(ref s) => chrono::DateTime::parse_from_rfc3339(s)
                    .map(|dt| dt.with_timezone(&chrono::Utc))
                    .map_err(|_| ValueError::new("timestamp", &value)),
                other => Err(ValueError::new("timestamp", &other)),
            }
        }
    }

    impl_into_expr! {
        chrono::NaiveDateTime => [chrono::NaiveDateTime],
        chrono::NaiveDate => [chrono::NaiveDate],
        chrono::DateTime<chrono::Utc> => [chrono::DateTime<chrono::Utc>],
    }
}

#[cfg(feature = "time")]
mod time_impls {
    use time::format_description::well_known::Rfc3339;

    use super::*;

    impl IntoValue for time::OffsetDateTime {
        fn into_value(self) -> Value {
            // rfc3339 only covers years 0 to 9999
            let text = self.format(&Rfc3339).unwrap_or_else(|_| self.to_string());
            Value::String(text)
        }
    }

    impl FromValue for time::OffsetDateTime {
        fn from_value(value: Value) -> Result<Self, ValueError> {
            match value {
                Value::String(ref s) => time::OffsetDateTime::parse(s, &Rfc3339)
                    .map_err(|_| ValueError::new("timestamp", &value)),
                other => Err(ValueError::new("timestamp", &other)),
            }
        }
    }

    impl_into_expr! {
        time::OffsetDateTime => [time::OffsetDateTime],
    }
}

#[cfg(feature = "uuid")]
mod uuid_impls {
    use super::*;

    impl IntoValue for uuid::Uuid {
        fn into_value(self) -> Value {
            Value::String(self.hyphenated().to_string())
        }
    }

    impl FromValue for uuid::Uuid {
        fn from_value(value: Value) -> Result<Self, ValueError> {
            match value {
                Value::String(ref s) => {
                    uuid::Uuid::parse_str(s).map_err(|_| ValueError::new("uuid", &value))
                }
                Value::Bytes(ref bytes) => {
                    uuid::Uuid::from_slice(bytes).map_err(|_| ValueError::new("uuid", &value))
                }
                other => Err(ValueError::new("uuid", &other)),
            }
        }
    }

    impl_into_expr! {
        uuid::Uuid => [uuid::Uuid],
    }
}

#[cfg(feature = "json")]
mod json_impls {
    use super::*;

    impl IntoValue for serde_json::Value {
        fn into_value(self) -> Value {
            Value::String(self.to_string())
        }
    }

    impl FromValue for serde_json::Value {
        fn from_value(value: Value) -> Result<Self, ValueError> {
            match value {
                Value::String(ref s) => {
                    serde_json::from_str(s).map_err(|_| ValueError::new("json", &value))
                }
                Value::Bytes(ref bytes) => {
                    serde_json::from_slice(bytes).map_err(|_| ValueError::new("json", &value))
                }
                other => Err(ValueError::new("json", &other)),
            }
        }
    }

    impl_into_expr! {
        serde_json::Value => [serde_json::Value],
    }
}

#[cfg(feature = "secrecy")]
mod secrecy_impls {
    use secrecy::ExposeSecret;

    use super::*;

    impl IntoValue for secrecy::SecretString {
        fn into_value(self) -> Value {
            Value::String(self.expose_secret().to_owned())
        }
    }

    impl IntoExpr<String> for secrecy::SecretString {
        fn into_expr(self) -> Expr {
            Expr::Value(self.into_value())
        }
    }
}
