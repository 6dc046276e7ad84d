use lightorm_core::driver::CommandKind;

/// Command text together with how the database should interpret it.
///
/// Plain strings convert into text commands:
///
/// ```ignore
/// conn.execute("DELETE FROM users", &())?;
/// conn.execute(CommandDefinition::procedure("purge_users"), &())?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandDefinition<'a> {
    pub text: &'a str,
    pub kind: CommandKind,
}

impl<'a> CommandDefinition<'a> {
    pub fn text(text: &'a str) -> Self {
        Self {
            text,
            kind: CommandKind::Text,
        }
    }

    pub fn procedure(name: &'a str) -> Self {
        Self {
            text: name,
            kind: CommandKind::StoredProcedure,
        }
    }
}

impl<'a> From<&'a str> for CommandDefinition<'a> {
    fn from(text: &'a str) -> Self {
        Self::text(text)
    }
}

impl<'a> From<&'a String> for CommandDefinition<'a> {
    fn from(text: &'a String) -> Self {
        Self::text(text)
    }
}
