use super::Translate;
use crate::SqlClause;

use lightorm_core::Result;

/// Comma delimited
pub(super) struct Comma<L>(pub(super) L);

/// Delimited by an arbitrary separator
pub(super) struct Delimited<L>(pub(super) L, pub(super) &'static str);

impl<L> Translate for Comma<L>
where
    L: IntoIterator,
    L::Item: Translate,
{
    fn translate(self, clause: &mut SqlClause) -> Result<()> {
        Delimited(self.0, ", ").translate(clause)
    }
}

impl<L> Translate for Delimited<L>
where
    L: IntoIterator,
    L::Item: Translate,
{
    fn translate(self, clause: &mut SqlClause) -> Result<()> {
        let mut s = "";
        for item in self.0 {
            fmt!(clause, s, item);
            s = self.1;
        }
        Ok(())
    }
}
