use lightorm_core::stmt::Value;
use lightorm_sql::{SqlClause, TypedValue};

use std::{any::TypeId, borrow::Cow};

/// A parameter object: a value whose fields bind to command placeholders.
///
/// The names returned by [`Params::names`] must depend only on the
/// implementing type, never on the instance. Binding plans are cached per
/// type and reused for every instance of it.
///
/// Implemented for `()` (no parameters), tuples of values (bound by
/// position), [`SqlClause`] (its own parameters, by position), and by
/// `#[derive(Params)]` for structs (bound by field name).
pub trait Params: 'static {
    /// Identifies the parameter shape in the plan cache.
    fn shape(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn names(&self) -> Vec<ParamName>;

    /// Values in the same order as [`Params::names`].
    fn values(&self) -> Vec<TypedValue>;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamName {
    /// Binds to `@name`, `:name` or `$name`
    Named(Cow<'static, str>),

    /// Binds to `?N` or `$N`, falling back to the N-th anonymous placeholder
    Ordinal(usize),
}

impl ParamName {
    pub fn named(name: impl Into<Cow<'static, str>>) -> ParamName {
        ParamName::Named(name.into())
    }
}

impl Params for () {
    fn names(&self) -> Vec<ParamName> {
        vec![]
    }

    fn values(&self) -> Vec<TypedValue> {
        vec![]
    }
}

impl Params for SqlClause {
    fn names(&self) -> Vec<ParamName> {
        (1..=self.params().len()).map(ParamName::Ordinal).collect()
    }

    fn values(&self) -> Vec<TypedValue> {
        self.params().to_vec()
    }
}

fn typed(value: Value) -> TypedValue {
    let ty = value.infer_ty();
    TypedValue { value, ty }
}

macro_rules! impl_params_for_tuple {
    ($len:literal; $($n:tt $t:ident),+) => {
        impl<$($t),+> Params for ($($t,)+)
        where
            $($t: Into<Value> + Clone + 'static,)+
        {
            fn names(&self) -> Vec<ParamName> {
                (1..=$len).map(ParamName::Ordinal).collect()
            }

            fn values(&self) -> Vec<TypedValue> {
                vec![$(typed(self.$n.clone().into()),)+]
            }
        }
    };
}

impl_params_for_tuple!(1; 0 T0);
impl_params_for_tuple!(2; 0 T0, 1 T1);
impl_params_for_tuple!(3; 0 T0, 1 T1, 2 T2);
impl_params_for_tuple!(4; 0 T0, 1 T1, 2 T2, 3 T3);
impl_params_for_tuple!(5; 0 T0, 1 T1, 2 T2, 3 T3, 4 T4);
impl_params_for_tuple!(6; 0 T0, 1 T1, 2 T2, 3 T3, 4 T4, 5 T5);
impl_params_for_tuple!(7; 0 T0, 1 T1, 2 T2, 3 T3, 4 T4, 5 T5, 6 T6);
impl_params_for_tuple!(8; 0 T0, 1 T1, 2 T2, 3 T3, 4 T4, 5 T5, 6 T6, 7 T7);
