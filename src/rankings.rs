// src/rankings.rs
//! Free-text rankings parser.
//!
//! Turns what a commissioner pastes into the rankings editor into ordered
//! [`RankEntry`] rows. Typical input:
//!
//! ```text
//! 1. Ohio State (8-0, 5-0)
//! 2) Georgia 7-1
//! Texas
//! ```
//!
//! Per non-blank line (index `i` over non-blank lines):
//! - **Rank**: leading `N.`, `N)`, `N:` or `N ` (one or two digits); else `i + 1`.
//! - **Record**: the first `( … )` group wins. Records inside it fill `overall`,
//!   then `conf` (only when conference parsing is on). Without a group, the
//!   first bare `W-L` token fills `overall`.
//! - **Name**: whatever precedes the group or token (the whole rest otherwise),
//!   with trailing `()., ` stripped.
//! - Lines with an empty name are dropped.
//!
//! Output is stable-sorted by rank. Nothing here fails, logs or touches disk.

use serde::Serialize;

use crate::core::sanitize::trim_name;
use crate::core::scan::{find_record, leading_rank, paren_group, records_in};
use crate::logos::{self, LogoResolver};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RankEntry {
    pub rank: u32,
    pub name: String,
    pub overall: Option<String>,
    pub conf: Option<String>,
    pub logo: Option<String>,
}

/// Parse with logos from the default CDN.
pub fn parse(raw: &str, include_conference: bool) -> Vec<RankEntry> {
    parse_with(raw, include_conference, logos::default_resolver())
}

pub fn parse_with(raw: &str, include_conference: bool, resolver: &LogoResolver) -> Vec<RankEntry> {
    let mut out: Vec<RankEntry> = raw
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .enumerate()
        .filter_map(|(i, line)| parse_line(line, i, include_conference))
        .map(|mut e| {
            e.logo = resolver.resolve(&e.name);
            e
        })
        .collect();

    // stable: ties keep paste order
    out.sort_by_key(|e| e.rank);
    out
}

/// One trimmed, non-blank line. `None` when nothing is left for a name.
fn parse_line(line: &str, index: usize, include_conference: bool) -> Option<RankEntry> {
    let (rank, rest) = match leading_rank(line) {
        Some((rank, rest)) => (rank, rest),
        None => (index as u32 + 1, line),
    };

    let (name_end, overall, conf) = if let Some((open, close)) = paren_group(rest) {
        let mut recs = records_in(&rest[open + 1..close]).into_iter();
        let overall = recs.next().map(str::to_string);
        let conf = if include_conference { recs.next().map(str::to_string) } else { None };
        (open, overall, conf)
    } else if let Some((start, end)) = find_record(rest, 0) {
        (start, Some(rest[start..end].to_string()), None)
    } else {
        (rest.len(), None, None)
    };

    let name = trim_name(&rest[..name_end]);
    if name.is_empty() {
        return None;
    }

    Some(RankEntry { rank, name, overall, conf, logo: None })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(s: &str) -> Option<String> { Some(s.to_string()) }

    #[test]
    fn paren_record_without_conference() {
        let out = parse("1. Alabama (8-0)", false);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].rank, 1);
        assert_eq!(out[0].name, "Alabama");
        assert_eq!(out[0].overall, rec("8-0"));
        assert_eq!(out[0].conf, None);
        assert!(out[0].logo.as_deref().unwrap().contains("333"));
    }

    #[test]
    fn paren_record_with_conference() {
        let out = parse("1. Ohio State (8-0, 5-0)", true);
        assert_eq!(out[0].name, "Ohio State");
        assert_eq!(out[0].overall, rec("8-0"));
        assert_eq!(out[0].conf, rec("5-0"));
    }

    #[test]
    fn conference_flag_off_ignores_second_record() {
        let out = parse("1. Ohio State (8-0, 5-0)", false);
        assert_eq!(out[0].overall, rec("8-0"));
        assert_eq!(out[0].conf, None);
    }

    #[test]
    fn bare_record() {
        let out = parse("2 Georgia 7-1", false);
        assert_eq!(out[0].rank, 2);
        assert_eq!(out[0].name, "Georgia");
        assert_eq!(out[0].overall, rec("7-1"));
        assert_eq!(out[0].conf, None);
    }

    #[test]
    fn bare_record_never_fills_conf() {
        let out = parse("3. Texas 7-1 4-1", true);
        assert_eq!(out[0].name, "Texas");
        assert_eq!(out[0].overall, rec("7-1"));
        assert_eq!(out[0].conf, None);
    }

    #[test]
    fn implied_ranks_follow_line_order() {
        let out = parse("Alabama\nGeorgia\nOhio State", false);
        let got: Vec<(u32, &str)> = out.iter().map(|e| (e.rank, e.name.as_str())).collect();
        assert_eq!(got, vec![(1, "Alabama"), (2, "Georgia"), (3, "Ohio State")]);
        assert!(out.iter().all(|e| e.overall.is_none()));
    }

    #[test]
    fn explicit_ranks_sort_ascending() {
        let out = parse("3. LSU\n1. Oregon\n2. Texas", false);
        let ranks: Vec<u32> = out.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        assert_eq!(out[0].name, "Oregon");
    }

    #[test]
    fn ties_keep_input_order() {
        // "Georgia" is line 2 → implied rank 2, same as the explicit "2."
        let out = parse("1. Alabama\nGeorgia\n2. Texas", false);
        let names: Vec<&str> = out.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Alabama", "Georgia", "Texas"]);
    }

    #[test]
    fn empty_name_is_dropped() {
        let out = parse("1. Alabama (8-0)\n(8-0)\n3. Georgia (7-1)", false);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].rank, 3);
    }

    #[test]
    fn blank_lines_do_not_count() {
        let out = parse("\n  \nAlabama\r\n\r\nGeorgia\n", false);
        let ranks: Vec<u32> = out.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2]);
    }

    #[test]
    fn punctuation_and_spacing_tolerated() {
        let out = parse("1.   Clemson,   (9-0)", false);
        assert_eq!(out[0].name, "Clemson");
        assert_eq!(out[0].overall, rec("9-0"));
    }

    #[test]
    fn first_paren_group_decides() {
        // group without a record still marks where the name ends
        let out = parse("4. Miami (FL) 7-1", false);
        assert_eq!(out[0].name, "Miami");
        assert_eq!(out[0].overall, None);
    }

    #[test]
    fn unclosed_paren_falls_back_to_bare_record() {
        let out = parse("5. Utah (7-2", false);
        assert_eq!(out[0].name, "Utah");
        assert_eq!(out[0].overall, rec("7-2"));
    }

    #[test]
    fn three_digit_prefix_is_not_a_rank() {
        let out = parse("100 Mile Club", false);
        assert_eq!(out[0].rank, 1);
        assert_eq!(out[0].name, "100 Mile Club");
    }

    #[test]
    fn unknown_team_keeps_entry_without_logo() {
        let out = parse("1. Nonexistent University (0-9)", false);
        assert_eq!(out[0].name, "Nonexistent University");
        assert_eq!(out[0].logo, None);
    }

    #[test]
    fn custom_resolver_is_used() {
        let r = LogoResolver::with_base_url("https://cdn.example.com/ncaa");
        let out = parse_with("1. Clemson (9-0)", false, &r);
        assert_eq!(out[0].logo.as_deref(), Some("https://cdn.example.com/ncaa/228.png"));
    }

    #[test]
    fn zero_prefix_is_taken_as_written() {
        let out = parse("1. Alabama\n0. Zero (0-0)", false);
        assert_eq!(out[0].rank, 0);
        assert_eq!(out[0].name, "Zero");
        assert_eq!(out[1].rank, 1);
    }

    #[test]
    fn idempotent() {
        let text = "2. Georgia 7-1\n1. Ohio State (8-0, 5-0)\nTexas\n(1-1)";
        assert_eq!(parse(text, true), parse(text, true));
        assert_eq!(parse(text, false), parse(text, false));
    }

    #[test]
    fn garbage_never_panics() {
        for text in ["", "(", ")", "()", "1.", "99)", "--", "1-", "((8-0)", "é (8-0)", "1.\u{a0}Ünïcödé"] {
            let _ = parse(text, true);
        }
    }
}
