//! The round-based polling scheduler.
//!
//! One round fetches every target concurrently, joins all fetches,
//! then applies the results target by target on the caller's thread.
//! Applying after the join keeps exactly one writer per target with no
//! locking, and a round's updates are atomic with respect to
//! cancellation: a round either applies entirely or not at all.

use std::time::Instant;

use futures_util::future::join_all;

use crate::data::Target;
use crate::fetch::ExpvarSource;
use crate::vars::VarSpec;

/// Drives rounds of fetch + extract + update across all targets.
///
/// Targets do not share mutable state, so per-target failures are
/// fully isolated: one unreachable target costs at most the fetch
/// timeout and never stalls or corrupts the others. The spec list is
/// read-only after construction.
pub struct Poller {
    source: Box<dyn ExpvarSource>,
    specs: Vec<VarSpec>,
}

impl Poller {
    pub fn new(source: Box<dyn ExpvarSource>, specs: Vec<VarSpec>) -> Self {
        Self { source, specs }
    }

    /// The variable specs this poller extracts, in display order.
    pub fn specs(&self) -> &[VarSpec] {
        &self.specs
    }

    /// Build the target set for an address list, one empty series per
    /// spec each.
    pub fn make_targets(&self, addresses: &[String]) -> Vec<Target> {
        addresses.iter().map(|addr| Target::new(addr.clone(), &self.specs)).collect()
    }

    /// Run one complete round and return its completion timestamp.
    ///
    /// The round completes only once every target's fetch has resolved
    /// (success or failure); the per-fetch timeout configured on the
    /// source bounds how long that takes. Callers must not start the
    /// next round before this one returns, which the `&mut` borrow of
    /// the target slice already enforces.
    pub async fn run_round(&self, targets: &mut [Target]) -> Instant {
        let fetches = targets.iter().map(|target| self.source.fetch(&target.address));
        let results = join_all(fetches).await;

        for (target, result) in targets.iter_mut().zip(results) {
            match result {
                Ok(tree) => target.apply_document(&tree, &self.specs),
                Err(err) => target.apply_failure(&err),
            }
        }

        Instant::now()
    }
}
