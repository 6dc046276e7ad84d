use lightorm_core::driver::CommandKind;

use std::any::TypeId;

/// Identity of a cached [`Plan`](crate::Plan).
///
/// Two calls share a plan when they run the same command text, of the same
/// kind, through the same provider, into the same result type, with the same
/// parameter shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    pub text: String,
    pub kind: CommandKind,
    pub provider: &'static str,
    pub result: TypeId,
    pub params: TypeId,
}

impl Signature {
    pub fn new(
        text: impl Into<String>,
        kind: CommandKind,
        provider: &'static str,
        result: TypeId,
        params: TypeId,
    ) -> Signature {
        Signature {
            text: text.into(),
            kind,
            provider,
            result,
            params,
        }
    }
}
