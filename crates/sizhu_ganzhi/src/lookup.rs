//! Text-level lookups that never fail.
//!
//! These take raw glyph strings, as entered by a user or read from a form,
//! and return the sentinel [`UNKNOWN`] for anything that is not a single
//! recognized stem or branch (or a parity-invalid pair) instead of an error.

use crate::branch::Branch;
use crate::element::element_in_name;
use crate::life_stage::life_stage;
use crate::nayin::nayin;
use crate::pillar::Pillar;
use crate::stem::Stem;
use crate::taisui::taisui_spirit;

/// Sentinel returned for unrecognized input.
pub const UNKNOWN: &str = "未知";

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn parse_stem(s: &str) -> Option<Stem> {
    single_char(s).and_then(|c| Stem::from_char(c).ok())
}

fn parse_branch(s: &str) -> Option<Branch> {
    single_char(s).and_then(|c| Branch::from_char(c).ok())
}

/// Nayin name for a stem and branch glyph.
pub fn nayin_name_for(stem: &str, branch: &str) -> &'static str {
    parse_stem(stem)
        .zip(parse_branch(branch))
        .and_then(|(s, b)| Pillar::new(s, b).ok())
        .map_or(UNKNOWN, |p| nayin(p).name())
}

/// Element glyph of a nayin name, by substring match.
pub fn nayin_element_for(nayin_name: &str) -> &'static str {
    element_in_name(nayin_name).map_or(UNKNOWN, |e| e.label())
}

/// Life-stage name of a stem at a branch.
pub fn life_stage_name_for(stem: &str, branch: &str) -> &'static str {
    parse_stem(stem)
        .zip(parse_branch(branch))
        .map_or(UNKNOWN, |(s, b)| life_stage(s, b).name())
}

/// Taisui spirit name of `target` relative to `reference`.
pub fn taisui_name_for(reference: &str, target: &str) -> &'static str {
    parse_branch(reference)
        .zip(parse_branch(target))
        .map_or(UNKNOWN, |(r, t)| taisui_spirit(r, t).name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_input() {
        assert_eq!(nayin_name_for("甲", "子"), "海中金");
        assert_eq!(nayin_element_for("海中金"), "金");
        assert_eq!(life_stage_name_for("甲", "亥"), "长生");
        assert_eq!(taisui_name_for("子", "午"), "岁破");
    }

    #[test]
    fn unknown_glyphs_fail_closed() {
        assert_eq!(nayin_name_for("X", "子"), UNKNOWN);
        assert_eq!(nayin_name_for("甲", ""), UNKNOWN);
        assert_eq!(nayin_name_for("甲乙", "子"), UNKNOWN);
        assert_eq!(nayin_element_for("nothing"), UNKNOWN);
        assert_eq!(life_stage_name_for("子", "甲"), UNKNOWN);
        assert_eq!(taisui_name_for("甲", "午"), UNKNOWN);
    }

    #[test]
    fn parity_invalid_pair_has_no_nayin() {
        assert_eq!(nayin_name_for("甲", "丑"), UNKNOWN);
    }
}
