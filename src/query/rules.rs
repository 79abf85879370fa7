// src/query/rules.rs
//
// The matching policy as data: ordered marker tables plus the two
// numeric patterns. Keeping the tables declarative means adding a
// category is an entry here, not another branch in the interpreter.

use regex::Regex;
use std::sync::OnceLock;

/// One keyword rule: if any marker occurs inside a token, the field is
/// set to the canonical value. Within a table the first matching rule
/// wins for that token; across tokens the last assignment wins.
pub struct KeywordRule {
    pub markers: &'static [&'static str],
    pub canonical: &'static str,
}

impl KeywordRule {
    pub fn matches(&self, token: &str) -> bool {
        self.markers.iter().any(|m| token.contains(m))
    }
}

/// Property-type table, checked in order. The generic "บ้าน" marker and
/// the specific "บ้านเดี่ยว" both map to the same canonical value today;
/// the order still matters once more house categories are added.
pub const PROPERTY_TYPES: &[KeywordRule] = &[
    KeywordRule {
        markers: &["บ้านเดี่ยว", "บ้าน"],
        canonical: "บ้านเดี่ยว",
    },
    KeywordRule {
        markers: &["คอนโด"],
        canonical: "คอนโด",
    },
    KeywordRule {
        markers: &["ทาวน์โฮม"],
        canonical: "ทาวน์โฮม",
    },
];

pub const LOCATIONS: &[KeywordRule] = &[
    KeywordRule {
        markers: &["นนทบุรี"],
        canonical: "นนทบุรี",
    },
    KeywordRule {
        markers: &["กรุงเทพ"],
        canonical: "กรุงเทพ",
    },
];

/// Whole-query markers for the reserved status.
pub const RESERVED_MARKERS: &[&str] = &["reserved", "จอง"];

/// Whole-query trigger markers for the price ceiling. The amount is
/// only extracted when one of these occurs somewhere in the query.
pub const PRICE_MARKERS: &[&str] = &["ไม่เกิน", "under"];

/// Unit marker meaning "million"; its presence anywhere in the query
/// scales the captured amount.
pub const MILLION_MARKER: &str = "ล้าน";

/// Per-token bedroom count: "<digits> ห้องนอน" or "<digits> bedroom".
pub fn bedrooms_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)\s*ห้องนอน|(\d+)\s*bedroom").unwrap())
}

/// Whole-query price ceiling: "ไม่เกิน <n> ล้าน" or "under <n>".
pub fn price_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"ไม่เกิน\s*(\d+(?:\.\d+)?)\s*ล้าน|under\s*(\d+(?:\.\d+)?)").unwrap()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_type_markers_hit_inside_tokens() {
        assert!(PROPERTY_TYPES[0].matches("บ้านเดี่ยว"));
        assert!(PROPERTY_TYPES[0].matches("บ้าน"));
        assert!(PROPERTY_TYPES[1].matches("คอนโดมิเนียม"));
        assert!(!PROPERTY_TYPES[2].matches("คอนโด"));
    }

    #[test]
    fn bedroom_pattern_needs_digits_and_unit_in_one_token() {
        assert!(bedrooms_re().is_match("2 ห้องนอน"));
        assert!(bedrooms_re().is_match("3bedroom"));
        assert!(bedrooms_re().is_match("4 bedrooms"));
        assert!(!bedrooms_re().is_match("ห้องนอน"));
        assert!(!bedrooms_re().is_match("2"));
    }

    #[test]
    fn price_pattern_thai_branch_requires_million_unit() {
        let caps = price_re().captures("ไม่เกิน 3 ล้าน").unwrap();
        assert_eq!(caps.get(1).unwrap().as_str(), "3");

        // "ไม่เกิน 50000" without "ล้าน" matches neither branch.
        assert!(price_re().captures("ไม่เกิน 50000").is_none());

        let caps = price_re().captures("under 50000").unwrap();
        assert_eq!(caps.get(2).unwrap().as_str(), "50000");
    }

    #[test]
    fn price_pattern_accepts_decimal_amounts() {
        let caps = price_re().captures("ไม่เกิน 3.5 ล้าน").unwrap();
        assert_eq!(caps.get(1).unwrap().as_str(), "3.5");
    }
}
