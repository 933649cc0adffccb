//! Flattening of nested province payloads into flat lists.
//!
//! Everything here is pure: given the same decoded payload the output is
//! always the same, and nothing is logged.

use crate::domain::model::{District, ProvinceTree, Ward};

/// Districts of a province in upstream order, with their ward lists dropped.
///
/// A payload without a `districts` field yields an empty list.
pub fn districts_of(tree: ProvinceTree) -> Vec<District> {
    tree.districts
        .unwrap_or_default()
        .into_iter()
        .map(|d| d.district)
        .collect()
}

/// All wards of a province, district by district.
///
/// District order and ward order inside each district are kept as returned
/// upstream. Districts without a `wards` field contribute nothing.
pub fn flatten_wards(tree: ProvinceTree) -> Vec<Ward> {
    tree.districts
        .unwrap_or_default()
        .into_iter()
        .flat_map(|d| d.wards.unwrap_or_default())
        .collect()
}

pub fn ward_count(tree: &ProvinceTree) -> usize {
    tree.districts
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|d| d.wards.as_ref().map_or(0, Vec::len))
        .sum()
}
