// src/board.rs
//
// A rankings board: one setting key plus whether its lines carry conference
// records. Entries are never cached; every read re-parses the raw text.

use std::error::Error;

use crate::config::consts::{BIG10_KEY, TOP25_KEY};
use crate::logos::LogoResolver;
use crate::rankings::{self, RankEntry};
use crate::store::SettingsStore;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub key: String,
    pub include_conference: bool,
}

impl Board {
    pub fn new(key: &str, include_conference: bool) -> Self {
        Self { key: key.to_string(), include_conference }
    }

    /// National poll, overall records only.
    pub fn top25() -> Self { Self::new(TOP25_KEY, false) }

    /// Conference standings, `(overall, conference)` records.
    pub fn big10() -> Self { Self::new(BIG10_KEY, true) }

    /// Built-in boards keep their own conference flag; anything else starts without.
    pub fn for_key(key: &str) -> Self {
        match key {
            TOP25_KEY => Self::top25(),
            BIG10_KEY => Self::big10(),
            other => Self::new(other, false),
        }
    }

    pub fn entries(&self, raw: &str, resolver: &LogoResolver) -> Vec<RankEntry> {
        rankings::parse_with(raw, self.include_conference, resolver)
    }

    /// Entries for whatever is saved under this board's key (empty if nothing is).
    pub fn load(
        &self,
        store: &dyn SettingsStore,
        resolver: &LogoResolver,
    ) -> Result<Vec<RankEntry>, Box<dyn Error>> {
        match store.load(&self.key)? {
            Some(raw) => {
                let entries = self.entries(&raw, resolver);
                logd!("Board {}: {} entries", self.key, entries.len());
                Ok(entries)
            }
            None => {
                logd!("Board {}: nothing saved", self.key);
                Ok(Vec::new())
            }
        }
    }

    /// Store the raw text as-is. Returns the entries it parses to, for feedback.
    pub fn save(
        &self,
        store: &mut dyn SettingsStore,
        raw: &str,
        resolver: &LogoResolver,
    ) -> Result<Vec<RankEntry>, Box<dyn Error>> {
        store.save(&self.key, raw)?;
        let entries = self.entries(raw, resolver);
        let missing = entries.iter().filter(|e| e.logo.is_none()).count();
        if missing > 0 {
            logw!("Board {}: {} of {} teams without a logo", self.key, missing, entries.len());
        }
        Ok(entries)
    }

    /// Live preview of unsaved text.
    pub fn preview(&self, raw: &str, resolver: &LogoResolver) -> String {
        crate::export::to_table(&self.entries(raw, resolver), self.include_conference)
    }
}
