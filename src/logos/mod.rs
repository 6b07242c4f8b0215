// src/logos/mod.rs
//! Team name → logo URL.
//!
//! Lookup runs in two passes over the static alias table in `aliases.rs`:
//! 1. **Exact**: the trimmed, lowercased name is an alias key.
//! 2. **Containment**: the first alias whose key is a substring of the name,
//!    or which contains the name as a substring.
//!
//! Pass 2 walks aliases **longest key first**, ties in table order. That makes
//! `"Michigan State Spartans"` land on `"michigan state"` rather than on
//! `"michigan"`, and keeps results reproducible whatever order the table is
//! edited in. Loose containment can still pick a surprising school for very
//! short input (`"State"`); callers render a placeholder when they get `None`
//! and the commissioner fixes the name.
//!
//! URLs have the shape `<base>/<id>.png`, where `<base>` defaults to the ESPN
//! NCAA logo CDN and can be overridden through `AppOptions::logo_base`.

mod aliases;

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::config::consts::{DEFAULT_LOGO_BASE, LOGO_EXT};
use crate::core::sanitize::alias_key;

pub use aliases::ALIASES;

#[derive(Clone, Debug)]
pub struct LogoResolver {
    base_url: String,
    exact: HashMap<&'static str, u32>,
    /// Indices into `ALIASES`, containment order.
    order: Vec<usize>,
}

impl Default for LogoResolver {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_LOGO_BASE)
    }
}

impl LogoResolver {
    pub fn with_base_url(base_url: &str) -> Self {
        let exact = ALIASES.iter().copied().collect();

        let mut order: Vec<usize> = (0..ALIASES.len()).collect();
        // stable: equal lengths keep table order
        order.sort_by_key(|&i| std::cmp::Reverse(ALIASES[i].0.len()));

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            exact,
            order,
        }
    }

    pub fn url_for(&self, id: u32) -> String {
        format!("{}/{}.{}", self.base_url, id, LOGO_EXT)
    }

    /// Logo id for a display name, if any alias matches.
    pub fn resolve_id(&self, name: &str) -> Option<u32> {
        let key = alias_key(name);
        if key.is_empty() { return None; }

        if let Some(&id) = self.exact.get(key.as_str()) {
            return Some(id);
        }

        self.order
            .iter()
            .map(|&i| ALIASES[i])
            .find(|&(alias, _)| key.contains(alias) || alias.contains(key.as_str()))
            .map(|(_, id)| id)
    }

    pub fn resolve(&self, name: &str) -> Option<String> {
        self.resolve_id(name).map(|id| self.url_for(id))
    }

    /// Alias pairs `(shorter, longer)` with different ids where the shorter key
    /// is a substring of the longer one. Containment order settles these, but
    /// they are the first place to look when a logo comes out wrong.
    pub fn overlapping_aliases(&self) -> Vec<(&'static str, &'static str)> {
        let mut out = Vec::new();
        for &(short, short_id) in ALIASES {
            for &(long, long_id) in ALIASES {
                if short_id != long_id && short.len() < long.len() && long.contains(short) {
                    out.push((short, long));
                }
            }
        }
        out
    }
}

/// Shared resolver on the default CDN.
pub fn default_resolver() -> &'static LogoResolver {
    static RESOLVER: OnceLock<LogoResolver> = OnceLock::new();
    RESOLVER.get_or_init(LogoResolver::default)
}

/// Logo URL for `name` on the default CDN.
pub fn resolve(name: &str) -> Option<String> {
    default_resolver().resolve(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn exact_match_is_case_insensitive() {
        let url = resolve("Alabama").unwrap();
        assert!(url.contains("333"));
        assert_eq!(resolve("  OHIO STATE "), Some(format!("{DEFAULT_LOGO_BASE}/194.png")));
    }

    #[test]
    fn unknown_team_has_no_logo() {
        assert_eq!(resolve("Nonexistent University"), None);
        assert_eq!(resolve(""), None);
        assert_eq!(resolve("   "), None);
    }

    #[test]
    fn longer_alias_wins_containment() {
        let r = default_resolver();
        assert_eq!(r.resolve_id("Michigan State Spartans"), Some(127));
        assert_eq!(r.resolve_id("Michigan Wolverines"), Some(130));
        assert_eq!(r.resolve_id("Arkansas St."), Some(8));
        assert_eq!(r.resolve_id("#4 Florida State"), Some(52));
    }

    #[test]
    fn name_inside_alias_matches() {
        // "nittany" is only a fragment of "nittany lions"
        assert_eq!(default_resolver().resolve_id("Nittany"), Some(213));
    }

    #[test]
    fn alias_keys_are_unique_and_lowercase() {
        let mut seen = HashSet::new();
        for (key, _) in ALIASES {
            assert!(seen.insert(*key), "duplicate alias {key}");
            assert_eq!(*key, key.to_lowercase());
            assert_eq!(*key, key.trim());
        }
    }

    #[test]
    fn every_overlap_resolves_to_the_longer_alias() {
        let r = default_resolver();
        let overlaps = r.overlapping_aliases();
        assert!(!overlaps.is_empty());
        for (_, long) in overlaps {
            let long_id = ALIASES.iter().find(|(k, _)| *k == long).map(|(_, id)| *id);
            let padded = format!("{long} football");
            assert_eq!(r.resolve_id(&padded), long_id, "{padded}");
        }
    }

    #[test]
    fn custom_base_url() {
        let r = LogoResolver::with_base_url("https://cdn.example.com/logos/");
        assert_eq!(r.resolve("Clemson").as_deref(), Some("https://cdn.example.com/logos/228.png"));
    }
}
