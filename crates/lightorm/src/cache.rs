use crate::{Plan, Signature};

use dashmap::DashMap;
use std::sync::{Arc, OnceLock};

/// Process-wide map from [`Signature`] to [`Plan`].
///
/// The cache is safe to share across threads and is never evicted. Builders
/// run outside of any lock; when two threads race on the same signature both
/// may build, and the first plan inserted is the one every caller gets.
#[derive(Debug, Default)]
pub struct Cache {
    plans: DashMap<Signature, Arc<Plan>>,
}

impl Cache {
    pub fn new() -> Cache {
        Cache::default()
    }

    pub fn get(&self, signature: &Signature) -> Option<Arc<Plan>> {
        self.plans.get(signature).map(|entry| entry.value().clone())
    }

    pub fn get_or_build(&self, signature: Signature, build: impl FnOnce() -> Plan) -> Arc<Plan> {
        if let Some(plan) = self.get(&signature) {
            log::trace!("plan cache hit; text={:?}", signature.text);
            return plan;
        }

        log::trace!("plan cache miss; text={:?}", signature.text);
        let plan = Arc::new(build());

        self.plans.entry(signature).or_insert(plan).value().clone()
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    pub fn clear(&self) {
        self.plans.clear();
    }
}

/// The cache used by the execution pipeline.
pub fn global() -> &'static Cache {
    static CACHE: OnceLock<Cache> = OnceLock::new();
    CACHE.get_or_init(Cache::new)
}
