use crate::{Error, Result, Type, Value};

/// A field value kind that maps to a single column.
///
/// Loading is lenient in the ways drivers need: NULL becomes the zero value (or `None` for
/// `Option<T>`), numbers may arrive as text (e.g. DECIMAL columns), and booleans may arrive
/// as `0`/`1`. Anything else is a conversion error.
pub trait Primitive: Sized {
    const TYPE: Type;
    const NULLABLE: bool = false;

    fn load(value: Value) -> Result<Self>;

    fn to_value(&self) -> Value;
}

macro_rules! impl_integer {
    ( $( $ty:ident => $variant:ident, )* ) => {
        $(
            impl Primitive for $ty {
                const TYPE: Type = Type::$variant;

                fn load(value: Value) -> Result<Self> {
                    let loaded = match &value {
                        Value::Null => Some(0),
                        Value::I64(v) => <$ty>::try_from(*v).ok(),
                        Value::U64(v) => <$ty>::try_from(*v).ok(),
                        Value::F64(v) => float_to_integer(*v).and_then(|v| <$ty>::try_from(v).ok()),
                        Value::String(v) => v.trim().parse().ok(),
                        _ => None,
                    };

                    loaded.ok_or_else(|| Error::conversion(value, Self::TYPE.name()))
                }

                fn to_value(&self) -> Value {
                    Value::I64(i64::from(*self))
                }
            }
        )*
    };
}

impl_integer! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
}

impl Primitive for u64 {
    const TYPE: Type = Type::U64;

    fn load(value: Value) -> Result<Self> {
        let loaded = match &value {
            Value::Null => Some(0),
            Value::I64(v) => u64::try_from(*v).ok(),
            Value::U64(v) => Some(*v),
            Value::F64(v) => float_to_integer(*v).and_then(|v| u64::try_from(v).ok()),
            Value::String(v) => v.trim().parse().ok(),
            _ => None,
        };

        loaded.ok_or_else(|| Error::conversion(value, Self::TYPE.name()))
    }

    fn to_value(&self) -> Value {
        Value::U64(*self)
    }
}

/// Integral floats only; `2.0` loads into an integer field, `2.5` does not.
fn float_to_integer(v: f64) -> Option<i128> {
    (v.is_finite() && v.fract() == 0.0 && v.abs() < 1e38).then_some(v as i128)
}

macro_rules! impl_float {
    ( $( $ty:ident => $variant:ident, )* ) => {
        $(
            impl Primitive for $ty {
                const TYPE: Type = Type::$variant;

                fn load(value: Value) -> Result<Self> {
                    let loaded = match &value {
                        Value::Null => Some(0.0),
                        Value::F64(v) => Some(*v as $ty),
                        Value::I64(v) => Some(*v as $ty),
                        Value::U64(v) => Some(*v as $ty),
                        Value::String(v) => v.trim().parse().ok(),
                        _ => None,
                    };

                    loaded.ok_or_else(|| Error::conversion(value, Self::TYPE.name()))
                }

                fn to_value(&self) -> Value {
                    Value::F64(f64::from(*self))
                }
            }
        )*
    };
}

impl_float! {
    f32 => F32,
    f64 => F64,
}

impl Primitive for bool {
    const TYPE: Type = Type::Bool;

    fn load(value: Value) -> Result<Self> {
        let loaded = match &value {
            Value::Null => Some(false),
            Value::Bool(v) => Some(*v),
            Value::I64(0) | Value::U64(0) => Some(false),
            Value::I64(1) | Value::U64(1) => Some(true),
            Value::String(v) => match v.trim() {
                "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
                "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
                _ => None,
            },
            _ => None,
        };

        loaded.ok_or_else(|| Error::conversion(value, Self::TYPE.name()))
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Primitive for String {
    const TYPE: Type = Type::String;

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(String::new()),
            Value::String(v) => Ok(v),
            Value::Bool(v) => Ok(v.to_string()),
            Value::I64(v) => Ok(v.to_string()),
            Value::U64(v) => Ok(v.to_string()),
            Value::F64(v) => Ok(v.to_string()),
            Value::Bytes(v) => String::from_utf8(v)
                .map_err(|err| Error::conversion(Value::Bytes(err.into_bytes()), "String")),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl Primitive for Vec<u8> {
    const TYPE: Type = Type::Bytes;

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Vec::new()),
            Value::Bytes(v) => Ok(v),
            Value::String(v) => Ok(v.into_bytes()),
            _ => Err(Error::conversion(value, Self::TYPE.name())),
        }
    }

    fn to_value(&self) -> Value {
        Value::Bytes(self.clone())
    }
}

impl<T: Primitive> Primitive for Option<T> {
    const TYPE: Type = T::TYPE;
    const NULLABLE: bool = true;

    fn load(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }

    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }
}
