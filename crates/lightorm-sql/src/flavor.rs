use std::fmt::Write;

/// The SQL dialect a clause is rendered for. Dialects differ in placeholder
/// syntax and identifier quoting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Flavor {
    /// `?1`, `?2`, ... and `"ident"`
    #[default]
    Sqlite,

    /// `$1`, `$2`, ... and `"ident"`
    Postgresql,

    /// `?` and `` `ident` ``
    Mysql,
}

impl Flavor {
    pub(crate) fn write_placeholder(self, dst: &mut String, position: usize) {
        match self {
            Flavor::Mysql => dst.push('?'),
            Flavor::Postgresql => {
                let _ = write!(dst, "${position}");
            }
            Flavor::Sqlite => {
                let _ = write!(dst, "?{position}");
            }
        }
    }

    pub(crate) fn write_ident(self, dst: &mut String, ident: &str) {
        let quote = match self {
            Flavor::Mysql => '`',
            Flavor::Postgresql | Flavor::Sqlite => '"',
        };

        dst.push(quote);
        for ch in ident.chars() {
            if ch == quote {
                dst.push(quote);
            }
            dst.push(ch);
        }
        dst.push(quote);
    }
}
