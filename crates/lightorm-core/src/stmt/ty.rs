/// Type hint carried alongside a bound parameter or reported for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Bool,
    I32,
    I64,
    F64,
    String,
    Bytes,
}

impl Type {
    /// Maps a declared SQL column type to a type hint using SQLite's type
    /// affinity rules. Returns `None` when the declaration says nothing
    /// useful.
    pub fn from_decl(decl: &str) -> Option<Type> {
        let decl = decl.to_ascii_uppercase();

        if decl.contains("BOOL") {
            Some(Type::Bool)
        } else if decl.contains("INT") {
            Some(Type::I64)
        } else if decl.contains("CHAR") || decl.contains("CLOB") || decl.contains("TEXT") {
            Some(Type::String)
        } else if decl.contains("BLOB") {
            Some(Type::Bytes)
        } else if decl.contains("REAL") || decl.contains("FLOA") || decl.contains("DOUB") {
            Some(Type::F64)
        } else {
            None
        }
    }
}
