use crate::SqlClause;

use lightorm_core::Result;

macro_rules! fmt {
    ($clause:expr, $( $fragment:expr ),* $(,)?) => {{
        $(
            $fragment.translate($clause)?;
        )*
    }};
}

pub(super) trait Translate {
    fn translate(self, clause: &mut SqlClause) -> Result<()>;
}

impl Translate for &str {
    fn translate(self, clause: &mut SqlClause) -> Result<()> {
        clause.push_sql(self);
        Ok(())
    }
}

impl Translate for &String {
    fn translate(self, clause: &mut SqlClause) -> Result<()> {
        clause.push_sql(self);
        Ok(())
    }
}
