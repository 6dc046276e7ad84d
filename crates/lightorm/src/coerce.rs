use crate::Primitive;

use lightorm_core::stmt::Value;

/// Converts a driver value to `T`, never failing.
///
/// Null becomes `T::default()` unless `T` is nullable, in which case `T`
/// loads the null itself. A value that cannot be converted also becomes
/// `T::default()`; the failure is logged at debug level and otherwise
/// discarded.
pub fn coerce<T: Primitive + Default>(value: Value) -> T {
    if value.is_null() && !T::NULLABLE {
        return T::default();
    }

    match T::load(value) {
        Ok(v) => v,
        Err(err) => {
            log::debug!("conversion fell back to default; error={err}");
            T::default()
        }
    }
}
