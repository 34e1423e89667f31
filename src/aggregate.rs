use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use std::net::IpAddr;
use std::path::Path;

use log::{debug, info};

use crate::config::ExtractorConfig;
use crate::error::ExtractError;
use crate::models::ParticipantEntry;
use crate::parse::{ConfigFile, FileContribution};
use crate::source;

/// Neighbor -> participant entry across all configs, ordered by neighbor address
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AggregateTable {
    entries: BTreeMap<IpAddr, ParticipantEntry>,
}

/// An existing entry about to be replaced by a later config
#[derive(Debug, Clone, PartialEq)]
pub struct Overwrite {
    pub neighbor: IpAddr,
    pub previous: ParticipantEntry,
}

impl fmt::Display for Overwrite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "// Warning: neighbor {} has value {} which will be overwritten.",
            self.neighbor, self.previous
        )
    }
}

impl AggregateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one config's entries, later entries win.
    /// Returns the existing entries that were replaced.
    pub fn merge(&mut self, contribution: FileContribution) -> Vec<Overwrite> {
        let mut overwrites = Vec::new();
        for (neighbor, entry) in contribution {
            if let Some(previous) = self.entries.insert(neighbor, entry) {
                overwrites.push(Overwrite { neighbor, previous });
            }
        }
        overwrites
    }

    pub fn get(&self, neighbor: &IpAddr) -> Option<&ParticipantEntry> {
        self.entries.get(neighbor)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending neighbor address order
    pub fn entries(&self) -> btree_map::Iter<'_, IpAddr, ParticipantEntry> {
        self.entries.iter()
    }
}

/// Drives the scan of every config and merges the results
pub struct Extractor<'a> {
    config: &'a ExtractorConfig,
    table: AggregateTable,
}

impl<'a> Extractor<'a> {
    pub fn new(config: &'a ExtractorConfig) -> Self {
        Self {
            config,
            table: AggregateTable::new(),
        }
    }

    /// Scan one config and merge it into the table
    pub fn add_file(&mut self, name: &str, text: &str) -> Vec<Overwrite> {
        let contribution = ConfigFile::new(text).contribution(self.config);
        debug!(
            "Found {} participant neighbors in {}",
            contribution.len(),
            name
        );
        self.table.merge(contribution)
    }

    /// Scan every matching config in `dir`, in file name order.
    /// `on_overwrite` is called as soon as each config replaces an existing entry.
    pub fn add_dir<F>(&mut self, dir: &Path, mut on_overwrite: F) -> Result<(), ExtractError>
    where
        F: FnMut(&Overwrite),
    {
        let files = source::config_files(dir, &self.config.extension)?;
        info!(
            "Scanning {} .{} configs in {}",
            files.len(),
            self.config.extension,
            dir.display()
        );
        for path in files {
            let text = match source::read_config(&path, self.config.skip_unreadable)? {
                Some(text) => text,
                None => continue,
            };
            let name = path.display().to_string();
            for overwrite in self.add_file(&name, &text) {
                on_overwrite(&overwrite);
            }
        }
        Ok(())
    }

    pub fn table(&self) -> &AggregateTable {
        &self.table
    }

    pub fn finish(self) -> AggregateTable {
        self.table
    }
}
