use std::collections::{BTreeMap, BTreeSet};
use std::net::IpAddr;

use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::PolicyName;

/// `[inactive: ]neighbor <address>`
static NEIGHBOR_DECL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:inactive: )?neighbor ([0-9A-Fa-f.:]*)").expect("Invalid neighbor pattern")
});
/// `import [ POLICY-A POLICY-B ];`
static IMPORT_POLICIES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^import \[ ([\w\- ]*) \];").expect("Invalid import pattern")
});

/// Import policies declared per neighbor within one config
pub type NeighborPolicies = BTreeMap<IpAddr, BTreeSet<PolicyName>>;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinderState {
    /// Waiting for a neighbor declaration
    Idle,
    /// Neighbor seen, waiting for its import policies
    Pending(IpAddr),
}

/// Associates each neighbor declaration with the first
/// `import [ ... ];` line that follows it
#[derive(Debug)]
pub struct NeighborBinder {
    state: BinderState,
    policies: NeighborPolicies,
}

impl Default for NeighborBinder {
    fn default() -> Self {
        Self::new()
    }
}

impl NeighborBinder {
    pub fn new() -> Self {
        Self {
            state: BinderState::Idle,
            policies: BTreeMap::new(),
        }
    }

    pub fn state(&self) -> BinderState {
        self.state
    }

    /// Process one (trimmed) config line
    pub fn feed(&mut self, line: &str) {
        if let Some(captures) = NEIGHBOR_DECL.captures(line) {
            // A new declaration always replaces the pending neighbor,
            // inactive neighbors included
            let address = &captures[1];
            self.state = match address.parse::<IpAddr>() {
                Ok(neighbor) => {
                    trace!("Found neighbor {}", neighbor);
                    BinderState::Pending(neighbor)
                }
                Err(err) => {
                    debug!("Skipping neighbor '{}': {}", address, err);
                    BinderState::Idle
                }
            };
            return;
        }
        if let BinderState::Pending(neighbor) = self.state {
            if let Some(captures) = IMPORT_POLICIES.captures(line) {
                let imports = captures[1].split_whitespace().map(PolicyName::from);
                trace!("Binding imports '{}' to {}", &captures[1], neighbor);
                self.policies.entry(neighbor).or_default().extend(imports);
                self.state = BinderState::Idle;
            }
        }
    }

    pub fn finish(self) -> NeighborPolicies {
        self.policies
    }
}

/// Map neighbors to the union of import policies declared for them
pub fn neighbor_import_policies<'a, I>(lines: I) -> NeighborPolicies
where
    I: IntoIterator<Item = &'a str>,
{
    let mut binder = NeighborBinder::new();
    for line in lines {
        binder.feed(line);
    }
    binder.finish()
}
