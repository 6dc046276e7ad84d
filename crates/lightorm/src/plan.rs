use crate::{ParamName, RowMap};

use lightorm_core::driver::{Column, CommandKind, Param};
use lightorm_sql::TypedValue;

use std::sync::{Arc, OnceLock};

/// Everything the pipeline reuses between executions of one signature.
#[derive(Debug)]
pub struct Plan {
    binder: Binder,

    /// Row deserializer, attached on first use by a row-returning call
    row_map: OnceLock<Arc<RowMap>>,
}

/// Maps a parameter object's values onto a command's placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct Binder {
    slots: Vec<Slot>,
}

#[derive(Debug, Clone, PartialEq)]
struct Slot {
    /// Index into the parameter object's values
    index: usize,

    /// Placeholder token in the command text, `None` to bind by position
    token: Option<String>,
}

impl Plan {
    pub fn new(binder: Binder) -> Plan {
        Plan {
            binder,
            row_map: OnceLock::new(),
        }
    }

    pub fn binder(&self) -> &Binder {
        &self.binder
    }

    pub fn has_row_map(&self) -> bool {
        self.row_map.get().is_some()
    }

    /// Returns the row map for `fields` against `columns`.
    ///
    /// The first caller attaches its map to the plan. Later callers reuse it,
    /// unless the result schema changed since, in which case they get a fresh
    /// map that is not cached.
    pub fn row_map(&self, fields: &[&str], columns: &[Column]) -> Arc<RowMap> {
        let cached = self
            .row_map
            .get_or_init(|| Arc::new(RowMap::build(fields, columns)));

        if cached.matches(columns) {
            cached.clone()
        } else {
            log::trace!("result schema changed; building uncached row map");
            Arc::new(RowMap::build(fields, columns))
        }
    }
}

impl Binder {
    /// Resolves each parameter name against the command text.
    ///
    /// Named parameters with no matching placeholder are not bound. Ordinal
    /// parameters bind to `?N` / `$N` when the text uses them, otherwise by
    /// position. Stored procedures bind every named parameter as-is.
    pub fn build(text: &str, kind: CommandKind, names: &[ParamName]) -> Binder {
        let mut slots = vec![];

        for (index, name) in names.iter().enumerate() {
            let token = match (name, kind) {
                (ParamName::Named(name), CommandKind::StoredProcedure) => Some(name.to_string()),
                (ParamName::Named(name), CommandKind::Text) => {
                    match ['@', ':', '$']
                        .iter()
                        .find_map(|prefix| find_token(text, &format!("{prefix}{name}")))
                    {
                        Some(token) => Some(token),
                        None => continue,
                    }
                }
                (ParamName::Ordinal(position), _) => ['?', '$']
                    .iter()
                    .find_map(|prefix| find_token(text, &format!("{prefix}{position}"))),
            };

            slots.push(Slot { index, token });
        }

        Binder { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn bind(&self, mut values: Vec<TypedValue>) -> Vec<Param> {
        self.slots
            .iter()
            .filter_map(|slot| {
                let value = values.get_mut(slot.index)?;
                Some(Param {
                    name: slot.token.clone(),
                    value: std::mem::take(&mut value.value),
                    ty: value.ty,
                })
            })
            .collect()
    }
}

/// Finds `token` in `text` as a whole placeholder and returns it as spelled
/// in the text. Exact matches are preferred over case-insensitive ones.
fn find_token(text: &str, token: &str) -> Option<String> {
    let is_boundary = |end: usize| {
        text[end..]
            .chars()
            .next()
            .map_or(true, |c| !(c.is_alphanumeric() || c == '_'))
    };

    if text
        .match_indices(token)
        .any(|(start, _)| is_boundary(start + token.len()))
    {
        return Some(token.to_string());
    }

    let lower_text = text.to_ascii_lowercase();
    let lower_token = token.to_ascii_lowercase();
    lower_text
        .match_indices(&lower_token)
        .find(|(start, _)| is_boundary(start + token.len()))
        .map(|(start, _)| text[start..start + token.len()].to_string())
}
