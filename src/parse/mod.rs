//! Line-oriented scanning of Junos configs
//!
//! Only the handful of statement shapes needed to tie BGP neighbors to
//! participant policies are recognized; every other line is skipped.

mod filter;
mod neighbor;
mod policy;

pub use filter::{is_exact, LineSet};
pub use neighbor::{neighbor_import_policies, BinderState, NeighborBinder, NeighborPolicies};
pub use policy::{participant_policies, participant_policies_in};

use std::collections::BTreeMap;
use std::net::IpAddr;

use itertools::Itertools;
use log::debug;

use crate::config::ExtractorConfig;
use crate::models::{ParticipantEntry, PolicyName};

/// Participant entries resolved from a single config
pub type FileContribution = BTreeMap<IpAddr, ParticipantEntry>;

/// A single config file, held in memory for scanning
pub struct ConfigFile<'a> {
    lines: Vec<&'a str>,
}

impl<'a> ConfigFile<'a> {
    pub fn new(text: &'a str) -> Self {
        let lines = text.lines().map(str::trim).collect();
        Self { lines }
    }

    /// Participant policies, and whether each one filters exactly
    pub fn participant_filters(&self, config: &ExtractorConfig) -> BTreeMap<PolicyName, bool> {
        let line_set = LineSet::new(&self.lines);
        participant_policies(&self.lines, config)
            .into_iter()
            .map(|policy| {
                let exact = is_exact(&policy, &line_set, &config.suffixes);
                (policy, exact)
            })
            .collect()
    }

    pub fn neighbor_policies(&self) -> NeighborPolicies {
        neighbor_import_policies(self.lines.iter().copied())
    }

    /// Resolve neighbors to the participant policy they import
    ///
    /// A neighbor importing several participant policies is mapped by the
    /// lexicographically smallest policy name.
    pub fn contribution(&self, config: &ExtractorConfig) -> FileContribution {
        let filters = self.participant_filters(config);
        if filters.is_empty() {
            return FileContribution::new();
        }
        debug!("Participant policies: {}", filters.keys().join(", "));
        self.neighbor_policies()
            .into_iter()
            .filter_map(|(neighbor, imports)| {
                filters
                    .iter()
                    .find(|(policy, _)| imports.contains(*policy))
                    .map(|(policy, exact)| {
                        let list = policy.participant_list(&config.suffixes);
                        (neighbor, ParticipantEntry::new(list, *exact))
                    })
            })
            .collect()
    }
}
