//! Generated-input properties for base names and grouping.
//!
//! Names are built from a vocabulary of catalogue fragments (sizes, colours,
//! weights, measurements, separators) so that most generated catalogues
//! actually contain groups.

use std::collections::BTreeSet;

use portal_core::{ProductId, ProductRecord};
use portal_grouping::{
    extract_base_name, flatten_product_groups, group_products_by_name, GroupedProducts,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

const FRAGMENTS: &[&str] = &[
    "Leash", "Harness", "Jacket", "Tee", "5M", "White", "Red", "Blue", "Navy", "S", "M", "L",
    "XL", "XXL", "xs", "-", "(Max 12kgs)", "(5-10kg)", "(10 - 25 kgs)", "#4", "4.5mm", "6mm",
    "(XL/48CM)", "（M/32CM）", "M-Red", "Small", "(Large)", "Animal",
];

fn catalogue_name() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 1..7).prop_map(|parts| parts.join(" "))
}

fn records(names: Vec<String>, rates: &[i64]) -> Vec<ProductRecord> {
    names
        .into_iter()
        .zip(rates)
        .zip(1_i64..)
        .map(|((name, rate), id)| ProductRecord::new(id, name, Decimal::from(*rate)))
        .collect()
}

/// A catalogue with distinct names, together with a shuffled copy of it.
fn catalogue_and_permutation() -> impl Strategy<Value = (Vec<ProductRecord>, Vec<ProductRecord>)>
{
    prop::collection::btree_set(catalogue_name(), 0..16)
        .prop_flat_map(|names| {
            let len = names.len();
            (
                Just(names.into_iter().collect::<Vec<_>>()),
                prop::collection::vec(1_i64..1000, len),
            )
        })
        .prop_flat_map(|(names, rates)| {
            let products = records(names, &rates);
            (Just(products.clone()), Just(products).prop_shuffle())
        })
}

fn id_set(products: &[ProductRecord]) -> BTreeSet<ProductId> {
    products.iter().map(|p| p.id.clone()).collect()
}

fn group_shape(grouped: &GroupedProducts) -> BTreeSet<(String, Vec<ProductId>)> {
    grouped
        .groups
        .iter()
        .map(|g| {
            let ids = g.products().iter().map(|p| p.id.clone()).collect();
            (g.base_name().to_lowercase(), ids)
        })
        .collect()
}

proptest! {
    #[test]
    fn base_name_is_idempotent_for_any_text(s in ".{0,80}") {
        let once = extract_base_name(&s);
        prop_assert_eq!(extract_base_name(&once), once);
    }

    #[test]
    fn base_name_is_idempotent_for_catalogue_names(name in catalogue_name()) {
        let once = extract_base_name(&name);
        prop_assert_eq!(extract_base_name(&once), once);
    }

    #[test]
    fn grouping_partitions_the_input(
        names in prop::collection::vec(catalogue_name(), 0..24),
        rates in prop::collection::vec(1_i64..1000, 24),
    ) {
        let input = records(names, &rates);
        let grouped = group_products_by_name(input.clone());

        prop_assert_eq!(grouped.product_count(), input.len());
        for group in &grouped.groups {
            prop_assert!(
                group.products().len() >= 2,
                "group {} has {} member(s)",
                group.group_id(),
                group.products().len()
            );
        }

        let flat = flatten_product_groups(grouped);
        prop_assert_eq!(flat.len(), input.len());
        prop_assert_eq!(id_set(&flat), id_set(&input));
    }

    #[test]
    fn member_order_ignores_input_order((input, shuffled) in catalogue_and_permutation()) {
        let forward = group_products_by_name(input);
        let reordered = group_products_by_name(shuffled);

        prop_assert_eq!(group_shape(&forward), group_shape(&reordered));
        prop_assert_eq!(id_set(&forward.ungrouped), id_set(&reordered.ungrouped));
    }
}
