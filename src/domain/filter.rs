// src/domain/filter.rs

use crate::domain::listing::{Listing, Status};

/// Structured constraints extracted from one search query.
/// An absent field means "no constraint", not "match empty".
/// Built fresh per query and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryFilter {
    pub property_type: Option<String>,
    pub bedrooms: Option<u32>,
    pub price_max: Option<f64>,
    pub location: Option<String>,
    pub status: Status,
}

impl Default for QueryFilter {
    fn default() -> Self {
        QueryFilter {
            property_type: None,
            bedrooms: None,
            price_max: None,
            location: None,
            status: Status::Available,
        }
    }
}

/// Applies the filter to a listing snapshot. Pure, order-preserving:
/// surviving rows keep their relative order from the input table.
pub fn apply(listings: &[Listing], q: &QueryFilter) -> Vec<Listing> {
    listings.iter().filter(|l| matches(l, q)).cloned().collect()
}

fn matches(l: &Listing, q: &QueryFilter) -> bool {
    // Status always constrains; the filter defaults it to Available.
    if l.status != q.status {
        return false;
    }
    if let Some(t) = &q.property_type {
        // Exact match after lowercasing both sides, not substring.
        if l.property_type.to_lowercase() != t.to_lowercase() {
            return false;
        }
    }
    if let Some(n) = q.bedrooms {
        // Exact count; a 3-bedroom listing does not satisfy bedrooms=2.
        if l.bedrooms != Some(n) {
            return false;
        }
    }
    if let Some(max) = q.price_max {
        if l.price > max {
            return false;
        }
    }
    if let Some(loc) = &q.location {
        // Substring, case-sensitive: "นนทบุรี-เมือง" matches "นนทบุรี".
        if !l.location.contains(loc.as_str()) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(
        status: Status,
        property_type: &str,
        bedrooms: Option<u32>,
        price: f64,
        location: &str,
    ) -> Listing {
        Listing {
            status,
            property_type: property_type.to_string(),
            bedrooms,
            price,
            location: location.to_string(),
        }
    }

    fn sample_table() -> Vec<Listing> {
        vec![
            listing(Status::Available, "บ้านเดี่ยว", Some(2), 2_900_000.0, "นนทบุรี"),
            listing(Status::Available, "คอนโด", Some(1), 1_500_000.0, "กรุงเทพ"),
            listing(Status::Reserved, "คอนโด", Some(1), 45_000.0, "กรุงเทพ"),
            listing(Status::Available, "บ้านเดี่ยว", Some(3), 3_200_000.0, "นนทบุรี-เมือง"),
            listing(Status::Available, "ทาวน์โฮม", None, 2_000_000.0, "กรุงเทพ"),
        ]
    }

    #[test]
    fn default_filter_keeps_only_available_rows() {
        let table = sample_table();
        let out = apply(&table, &QueryFilter::default());
        assert_eq!(out.len(), 4);
        assert!(out.iter().all(|l| l.status == Status::Available));
    }

    #[test]
    fn preserves_input_order() {
        let table = sample_table();
        let out = apply(&table, &QueryFilter::default());
        let expected: Vec<Listing> = table
            .iter()
            .filter(|l| l.status == Status::Available)
            .cloned()
            .collect();
        assert_eq!(out, expected);
    }

    #[test]
    fn second_pass_is_a_no_op() {
        let table = sample_table();
        let q = QueryFilter {
            property_type: Some("บ้านเดี่ยว".to_string()),
            price_max: Some(3_000_000.0),
            ..QueryFilter::default()
        };
        let once = apply(&table, &q);
        let twice = apply(&once, &q);
        assert_eq!(once, twice);
    }

    #[test]
    fn bedroom_match_is_exact_not_at_least() {
        let table = sample_table();
        let q = QueryFilter {
            bedrooms: Some(2),
            ..QueryFilter::default()
        };
        let out = apply(&table, &q);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].bedrooms, Some(2));
    }

    #[test]
    fn missing_bedroom_count_never_matches_a_bedroom_constraint() {
        let table = sample_table();
        let q = QueryFilter {
            bedrooms: Some(0),
            ..QueryFilter::default()
        };
        assert!(apply(&table, &q).is_empty());
    }

    #[test]
    fn location_match_is_substring() {
        let table = sample_table();
        let q = QueryFilter {
            location: Some("นนทบุรี".to_string()),
            ..QueryFilter::default()
        };
        let out = apply(&table, &q);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].location, "นนทบุรี-เมือง");
    }

    #[test]
    fn property_type_match_is_case_insensitive_exact() {
        let table = vec![
            listing(Status::Available, "Condo", Some(1), 900_000.0, "กรุงเทพ"),
            listing(Status::Available, "Condotel", Some(1), 900_000.0, "กรุงเทพ"),
        ];
        let q = QueryFilter {
            property_type: Some("condo".to_string()),
            ..QueryFilter::default()
        };
        let out = apply(&table, &q);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].property_type, "Condo");
    }

    #[test]
    fn reserved_status_selects_reserved_rows() {
        let table = sample_table();
        let q = QueryFilter {
            status: Status::Reserved,
            ..QueryFilter::default()
        };
        let out = apply(&table, &q);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].price, 45_000.0);
    }

    #[test]
    fn price_ceiling_is_inclusive() {
        let table = sample_table();
        let q = QueryFilter {
            price_max: Some(2_000_000.0),
            ..QueryFilter::default()
        };
        let out = apply(&table, &q);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|l| l.price <= 2_000_000.0));
    }
}
