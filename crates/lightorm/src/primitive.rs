use crate::{Error, Result};

use lightorm_core::stmt::{Type, Value};

/// A scalar Rust type that maps to a single column or parameter.
///
/// `load` performs the culture-invariant conversion from whatever the driver
/// returned. It fails when the value cannot be represented; callers that want
/// the lossy behavior go through [`coerce`](crate::coerce).
pub trait Primitive: Sized {
    /// Type hint sent with bound parameters. `None` lets the driver decide.
    const TYPE: Option<Type>;

    /// `true` if `load` maps null to a value of its own instead of failing.
    const NULLABLE: bool = false;

    fn load(value: Value) -> Result<Self>;

    fn to_value(&self) -> Value;
}

macro_rules! impl_int {
    ($($ty:ty => $hint:expr;)*) => {
        $(
            impl Primitive for $ty {
                const TYPE: Option<Type> = Some($hint);

                fn load(value: Value) -> Result<Self> {
                    let name = stringify!($ty);
                    let wide = load_i64(value, name)?;
                    <$ty>::try_from(wide).map_err(|_| Error::type_conversion(Value::I64(wide), name))
                }

                fn to_value(&self) -> Value {
                    Value::I64(i64::from(*self))
                }
            }
        )*
    };
}

impl_int! {
    i8 => Type::I32;
    i16 => Type::I32;
    u8 => Type::I32;
    u16 => Type::I32;
    u32 => Type::I64;
}

impl Primitive for i32 {
    const TYPE: Option<Type> = Some(Type::I32);

    fn load(value: Value) -> Result<Self> {
        let wide = load_i64(value, "i32")?;
        i32::try_from(wide).map_err(|_| Error::type_conversion(Value::I64(wide), "i32"))
    }

    fn to_value(&self) -> Value {
        Value::I32(*self)
    }
}

impl Primitive for i64 {
    const TYPE: Option<Type> = Some(Type::I64);

    fn load(value: Value) -> Result<Self> {
        load_i64(value, "i64")
    }

    fn to_value(&self) -> Value {
        Value::I64(*self)
    }
}

impl Primitive for u64 {
    const TYPE: Option<Type> = Some(Type::I64);

    fn load(value: Value) -> Result<Self> {
        let wide = load_i64(value, "u64")?;
        u64::try_from(wide).map_err(|_| Error::type_conversion(Value::I64(wide), "u64"))
    }

    fn to_value(&self) -> Value {
        match i64::try_from(*self) {
            Ok(v) => Value::I64(v),
            // Out of range for every supported backend; send it as text.
            Err(_) => Value::String(self.to_string()),
        }
    }
}

impl Primitive for f64 {
    const TYPE: Option<Type> = Some(Type::F64);

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::F64(v) => Ok(v),
            Value::I32(v) => Ok(v.into()),
            Value::I64(v) => Ok(v as f64),
            Value::Bool(v) => Ok(if v { 1.0 } else { 0.0 }),
            Value::String(s) => match s.trim().parse::<f64>() {
                Ok(v) => Ok(v),
                Err(_) => Err(Error::type_conversion(Value::String(s), "f64")),
            },
            value => Err(Error::type_conversion(value, "f64")),
        }
    }

    fn to_value(&self) -> Value {
        Value::F64(*self)
    }
}

impl Primitive for f32 {
    const TYPE: Option<Type> = Some(Type::F64);

    fn load(value: Value) -> Result<Self> {
        f64::load(value).map(|v| v as f32)
    }

    fn to_value(&self) -> Value {
        Value::F64(f64::from(*self))
    }
}

impl Primitive for bool {
    const TYPE: Option<Type> = Some(Type::Bool);

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            Value::I32(v) => Ok(v != 0),
            Value::I64(v) => Ok(v != 0),
            Value::F64(v) => Ok(v != 0.0),
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.eq_ignore_ascii_case("true") {
                    Ok(true)
                } else if trimmed.eq_ignore_ascii_case("false") {
                    Ok(false)
                } else {
                    Err(Error::type_conversion(Value::String(s), "bool"))
                }
            }
            value => Err(Error::type_conversion(value, "bool")),
        }
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Primitive for String {
    const TYPE: Option<Type> = Some(Type::String);

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            Value::Bool(v) => Ok(v.to_string()),
            Value::I32(v) => Ok(v.to_string()),
            Value::I64(v) => Ok(v.to_string()),
            Value::F64(v) => Ok(v.to_string()),
            value => Err(Error::type_conversion(value, "String")),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl Primitive for Vec<u8> {
    const TYPE: Option<Type> = Some(Type::Bytes);

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Bytes(v) => Ok(v),
            Value::String(v) => Ok(v.into_bytes()),
            value => Err(Error::type_conversion(value, "Vec<u8>")),
        }
    }

    fn to_value(&self) -> Value {
        Value::Bytes(self.clone())
    }
}

impl Primitive for Value {
    const TYPE: Option<Type> = None;
    const NULLABLE: bool = true;

    fn load(value: Value) -> Result<Self> {
        Ok(value)
    }

    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl<T: Primitive> Primitive for Option<T> {
    const TYPE: Option<Type> = T::TYPE;
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

fn load_i64(value: Value, to: &'static str) -> Result<i64> {
    match value {
        Value::I64(v) => Ok(v),
        Value::I32(v) => Ok(v.into()),
        Value::Bool(v) => Ok(v.into()),
        Value::F64(v) => round_to_i64(v).ok_or_else(|| Error::type_conversion(Value::F64(v), to)),
        Value::String(s) => match s.trim().parse::<i64>() {
            Ok(v) => Ok(v),
            Err(_) => Err(Error::type_conversion(Value::String(s), to)),
        },
        value => Err(Error::type_conversion(value, to)),
    }
}

/// Rounds half to even, the rounding used by numeric conversions in most
/// database client libraries.
fn round_to_i64(v: f64) -> Option<i64> {
    // 2^63 is exactly representable; anything at or past it overflows.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    let rounded = v.round_ties_even();
    if rounded.is_finite() && rounded >= -LIMIT && rounded < LIMIT {
        Some(rounded as i64)
    } else {
        None
    }
}
