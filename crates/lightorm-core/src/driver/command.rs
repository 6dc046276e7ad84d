use crate::stmt::{Type, Value};

/// Whether the command text is SQL or the name of a stored procedure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CommandKind {
    #[default]
    Text,
    StoredProcedure,
}

/// A native command: text, kind, and bound parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub text: String,
    pub kind: CommandKind,
    pub params: Vec<Param>,
}

/// A parameter bound to a command.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    /// Placeholder token as written in the command text (`:id`, `?1`).
    /// `None` binds by position.
    pub name: Option<String>,

    pub value: Value,

    /// Type hint for drivers that need one
    pub ty: Option<Type>,
}

impl Command {
    pub fn new(text: impl Into<String>, kind: CommandKind) -> Self {
        Self {
            text: text.into(),
            kind,
            params: vec![],
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(text, CommandKind::Text)
    }

    pub fn with_params(mut self, params: Vec<Param>) -> Self {
        self.params = params;
        self
    }
}

impl Param {
    pub fn named(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: Some(name.into()),
            value: value.into(),
            ty: None,
        }
    }

    pub fn positional(value: impl Into<Value>) -> Self {
        Self {
            name: None,
            value: value.into(),
            ty: None,
        }
    }
}
