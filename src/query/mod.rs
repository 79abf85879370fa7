//! Query interpreter: free-text Thai/English search input in, a
//! structured `QueryFilter` out. Pure, no I/O, and never fails on
//! arbitrary text — unrecognized input just leaves the filter at its
//! defaults.

mod rules;
mod tokenize;

pub use tokenize::tokenize;

use crate::domain::{QueryFilter, Status};
use std::fmt;

/// The one loud failure mode: a numeric capture that does not parse.
/// The patterns only capture digit runs, so hitting this means a logic
/// bug (or an absurd amount) — better to surface it for the single
/// request than to silently drop the constraint.
#[derive(Debug)]
pub enum QueryError {
    BadNumber(String),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::BadNumber(raw) => write!(f, "Unparseable number in query: {raw}"),
        }
    }
}

impl std::error::Error for QueryError {}

/// Turns raw query text into a filter record.
///
/// Whole-query rules (status, price ceiling) are evaluated once up
/// front; the token loop then runs the per-token keyword and count
/// rules, with later tokens overwriting earlier assignments.
pub fn interpret(text: &str) -> Result<QueryFilter, QueryError> {
    let text = text.to_lowercase();
    let mut q = QueryFilter::default();

    if rules::RESERVED_MARKERS.iter().any(|m| text.contains(m)) {
        q.status = Status::Reserved;
    }

    if rules::PRICE_MARKERS.iter().any(|m| text.contains(m)) {
        if let Some(caps) = rules::price_re().captures(&text) {
            let raw = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str())
                .unwrap_or_default();
            let amount: f64 = raw
                .parse()
                .map_err(|_| QueryError::BadNumber(raw.to_string()))?;
            q.price_max = Some(if text.contains(rules::MILLION_MARKER) {
                amount * 1_000_000.0
            } else {
                amount
            });
        }
    }

    for token in tokenize(&text) {
        for rule in rules::PROPERTY_TYPES {
            if rule.matches(&token) {
                q.property_type = Some(rule.canonical.to_string());
                break;
            }
        }

        if let Some(caps) = rules::bedrooms_re().captures(&token) {
            let digits = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str())
                .unwrap_or_default();
            let count: u32 = digits
                .parse()
                .map_err(|_| QueryError::BadNumber(digits.to_string()))?;
            q.bedrooms = Some(count);
        }

        for rule in rules::LOCATIONS {
            if rule.matches(&token) {
                q.location = Some(rule.canonical.to_string());
                break;
            }
        }
    }

    Ok(q)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thai_query_with_all_fields() {
        let q = interpret("บ้านเดี่ยว 2 ห้องนอน ไม่เกิน 3 ล้าน ในนนทบุรี").unwrap();
        assert_eq!(q.property_type.as_deref(), Some("บ้านเดี่ยว"));
        assert_eq!(q.bedrooms, Some(2));
        assert_eq!(q.price_max, Some(3_000_000.0));
        assert_eq!(q.location.as_deref(), Some("นนทบุรี"));
        assert_eq!(q.status, Status::Available);
    }

    #[test]
    fn mixed_query_with_absolute_price_and_reserved() {
        let q = interpret("คอนโด under 50000 จอง").unwrap();
        assert_eq!(q.property_type.as_deref(), Some("คอนโด"));
        assert_eq!(q.bedrooms, None);
        assert_eq!(q.price_max, Some(50_000.0));
        assert_eq!(q.location, None);
        assert_eq!(q.status, Status::Reserved);
    }

    #[test]
    fn unrecognized_text_yields_the_default_filter() {
        for text in ["", "hello world", "สวัสดีครับ", "!!??"] {
            let q = interpret(text).unwrap();
            assert_eq!(q, QueryFilter::default(), "text: {text:?}");
        }
    }

    #[test]
    fn generic_house_word_maps_to_canonical_type() {
        let q = interpret("บ้าน 3 ห้องนอน").unwrap();
        assert_eq!(q.property_type.as_deref(), Some("บ้านเดี่ยว"));
        assert_eq!(q.bedrooms, Some(3));
    }

    #[test]
    fn later_tokens_overwrite_earlier_ones() {
        let q = interpret("บ้านเดี่ยว หรือ คอนโด ในกรุงเทพ หรือ นนทบุรี").unwrap();
        assert_eq!(q.property_type.as_deref(), Some("คอนโด"));
        assert_eq!(q.location.as_deref(), Some("นนทบุรี"));
    }

    #[test]
    fn last_bedroom_count_wins() {
        let q = interpret("2 ห้องนอน 3 ห้องนอน").unwrap();
        assert_eq!(q.bedrooms, Some(3));
    }

    #[test]
    fn price_trigger_without_matching_amount_leaves_price_unset() {
        // "ไม่เกิน" present but no trailing "ล้าน" and no "under" branch.
        let q = interpret("บ้าน ไม่เกิน 50000").unwrap();
        assert_eq!(q.price_max, None);
    }

    #[test]
    fn decimal_millions_scale_correctly() {
        let q = interpret("คอนโด ไม่เกิน 3.5 ล้าน").unwrap();
        assert_eq!(q.price_max, Some(3_500_000.0));
    }

    #[test]
    fn english_price_near_million_word_is_not_scaled() {
        let q = interpret("condo under 50000").unwrap();
        assert_eq!(q.price_max, Some(50_000.0));
    }

    #[test]
    fn reserved_marker_is_checked_against_the_whole_query() {
        let q = interpret("ทาวน์โฮม จองแล้ว").unwrap();
        assert_eq!(q.property_type.as_deref(), Some("ทาวน์โฮม"));
        assert_eq!(q.status, Status::Reserved);
    }

    #[test]
    fn unspaced_bedroom_count_is_recognized() {
        let q = interpret("คอนโด 2ห้องนอน").unwrap();
        assert_eq!(q.bedrooms, Some(2));
    }

    #[test]
    fn uppercase_english_is_normalized() {
        let q = interpret("CONDO UNDER 50000 RESERVED").unwrap();
        assert_eq!(q.price_max, Some(50_000.0));
        assert_eq!(q.status, Status::Reserved);
    }
}
