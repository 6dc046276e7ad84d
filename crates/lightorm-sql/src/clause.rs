use crate::Flavor;

use lightorm_core::stmt::{Type, Value};
use std::ops;

/// A SQL fragment paired with its ordered parameter bindings.
///
/// Clauses have value semantics: combining two clauses produces a new
/// clause and leaves both inputs untouched. The text is kept as fragments
/// and rendered for a [`Flavor`] on demand, so placeholders are numbered by
/// their final position and stay 1:1 with [`SqlClause::params`] no matter
/// how the clause was assembled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SqlClause {
    fragments: Vec<Fragment>,
    params: Vec<TypedValue>,
}

/// A bound parameter value with an optional type hint.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedValue {
    pub value: Value,
    pub ty: Option<Type>,
}

#[derive(Debug, Clone, PartialEq)]
enum Fragment {
    /// Raw SQL text. Adjacent text fragments are always merged, which keeps
    /// the representation of a given clause unique.
    Sql(String),

    /// An identifier, quoted when rendered
    Ident(String),

    /// A parameter placeholder
    Param,
}

impl SqlClause {
    /// A clause with no text and no parameters.
    pub fn empty() -> SqlClause {
        SqlClause::default()
    }

    /// A clause holding raw SQL text and no parameters.
    pub fn sql(text: impl Into<String>) -> SqlClause {
        let mut clause = SqlClause::empty();
        clause.push_sql(&text.into());
        clause
    }

    /// A clause holding a single identifier.
    pub fn ident(name: impl Into<String>) -> SqlClause {
        let mut clause = SqlClause::empty();
        clause.push_ident(name);
        clause
    }

    /// A clause holding a single placeholder bound to `value`.
    pub fn param(value: impl Into<Value>) -> SqlClause {
        let mut clause = SqlClause::empty();
        clause.push_param(value.into(), None);
        clause
    }

    /// Like [`SqlClause::param`], with an explicit type hint.
    pub fn param_typed(value: impl Into<Value>, ty: Type) -> SqlClause {
        let mut clause = SqlClause::empty();
        clause.push_param(value.into(), Some(ty));
        clause
    }

    /// Returns a new clause with `other` appended to this one.
    pub fn append(&self, other: &SqlClause) -> SqlClause {
        let mut ret = self.clone();
        ret.extend(other.clone());
        ret
    }

    /// Returns a new clause with a placeholder bound to `value` appended.
    pub fn add_parameter(&self, value: impl Into<Value>) -> SqlClause {
        let mut ret = self.clone();
        ret.push_param(value.into(), None);
        ret
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// The bound parameters, in placeholder order.
    pub fn params(&self) -> &[TypedValue] {
        &self.params
    }

    /// Generated parameter names, `p1` through `pN`, in placeholder order.
    pub fn param_names(&self) -> impl Iterator<Item = String> + '_ {
        (1..=self.params.len()).map(|position| format!("p{position}"))
    }

    /// Renders the clause text for the given dialect.
    pub fn to_sql(&self, flavor: Flavor) -> String {
        let mut dst = String::new();
        let mut position = 0;

        for fragment in &self.fragments {
            match fragment {
                Fragment::Sql(text) => dst.push_str(text),
                Fragment::Ident(name) => flavor.write_ident(&mut dst, name),
                Fragment::Param => {
                    position += 1;
                    flavor.write_placeholder(&mut dst, position);
                }
            }
        }

        dst
    }

    pub(crate) fn push_sql(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }

        match self.fragments.last_mut() {
            Some(Fragment::Sql(last)) => last.push_str(text),
            _ => self.fragments.push(Fragment::Sql(text.to_string())),
        }
    }

    pub(crate) fn push_ident(&mut self, name: impl Into<String>) {
        self.fragments.push(Fragment::Ident(name.into()));
    }

    pub(crate) fn push_param(&mut self, value: Value, ty: Option<Type>) {
        let ty = ty.or_else(|| value.infer_ty());
        self.fragments.push(Fragment::Param);
        self.params.push(TypedValue { value, ty });
    }

    pub(crate) fn extend(&mut self, other: SqlClause) {
        let mut fragments = other.fragments.into_iter();

        if let Some(first) = fragments.next() {
            match first {
                Fragment::Sql(text) => self.push_sql(&text),
                fragment => self.fragments.push(fragment),
            }
        }

        self.fragments.extend(fragments);
        self.params.extend(other.params);
    }
}

impl ops::Add for SqlClause {
    type Output = SqlClause;

    fn add(mut self, rhs: SqlClause) -> SqlClause {
        self.extend(rhs);
        self
    }
}

impl ops::Add<&SqlClause> for &SqlClause {
    type Output = SqlClause;

    fn add(self, rhs: &SqlClause) -> SqlClause {
        self.append(rhs)
    }
}

impl ops::AddAssign for SqlClause {
    fn add_assign(&mut self, rhs: SqlClause) {
        self.extend(rhs);
    }
}

impl From<&str> for SqlClause {
    fn from(value: &str) -> Self {
        SqlClause::sql(value)
    }
}
