use super::Translate;
use crate::SqlClause;

use lightorm_core::Result;

pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> Translate for Ident<S> {
    fn translate(self, clause: &mut SqlClause) -> Result<()> {
        clause.push_ident(self.0.as_ref());
        Ok(())
    }
}
