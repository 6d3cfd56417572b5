//! Partitioning a flat product list into variant groups and singletons.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use portal_core::ProductRecord;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::base_name::extract_base_name;
use crate::color::extract_color;
use crate::label::{extract_variant_label, VariantLabel};
use crate::size::size_order;

/// Two or more products sharing a base name.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductGroup {
    group_id: String,
    base_name: String,
    products: Vec<ProductRecord>,
}

impl ProductGroup {
    /// Hands the members back for buckets with fewer than two products.
    fn from_bucket(
        base_name: String,
        mut products: Vec<ProductRecord>,
    ) -> Result<Self, Vec<ProductRecord>> {
        if products.len() < 2 {
            return Err(products);
        }
        sort_variants(&mut products);
        Ok(Self {
            group_id: group_id_for(&base_name),
            base_name,
            products,
        })
    }

    /// `"group-"` followed by the lowercased base name with spaces as hyphens.
    #[must_use]
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    /// Base name as first seen in the input.
    #[must_use]
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Members in canonical variant order. Always at least two.
    #[must_use]
    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    /// The representative shown when the group is collapsed.
    #[must_use]
    pub fn primary_product(&self) -> &ProductRecord {
        // from_bucket refuses buckets with fewer than two products
        &self.products[0]
    }

    #[must_use]
    pub fn into_products(self) -> Vec<ProductRecord> {
        self.products
    }

    /// Members paired with their variant label, in label display order.
    /// Members with equal labels keep their canonical group order.
    #[must_use]
    pub fn variant_options(&self) -> Vec<VariantOption<'_>> {
        let mut options: Vec<VariantOption<'_>> = self
            .products
            .iter()
            .map(|product| VariantOption {
                label: extract_variant_label(&product.name),
                product,
            })
            .collect();
        options.sort_by(|a, b| a.label.cmp(&b.label));
        options
    }
}

impl Serialize for ProductGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ProductGroup", 4)?;
        state.serialize_field("group_id", &self.group_id)?;
        state.serialize_field("base_name", &self.base_name)?;
        state.serialize_field("products", &self.products)?;
        state.serialize_field("primary_product", self.primary_product())?;
        state.end()
    }
}

/// One selectable variant inside a [`ProductGroup`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantOption<'a> {
    pub label: VariantLabel,
    pub product: &'a ProductRecord,
}

/// Result of [`group_products_by_name`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupedProducts {
    pub groups: Vec<ProductGroup>,
    pub ungrouped: Vec<ProductRecord>,
}

impl GroupedProducts {
    /// Number of products across groups and singletons.
    #[must_use]
    pub fn product_count(&self) -> usize {
        self.groups.iter().map(|g| g.products.len()).sum::<usize>() + self.ungrouped.len()
    }
}

/// Partitions products into variant groups and ungrouped singletons.
///
/// Products are bucketed by [`extract_base_name`], compared case-insensitively;
/// the first spelling seen names the bucket. Buckets with two or more members
/// become [`ProductGroup`]s, single-member buckets go to `ungrouped`. Both
/// outputs follow the order in which buckets first appeared in the input.
#[must_use]
pub fn group_products_by_name<I>(products: I) -> GroupedProducts
where
    I: IntoIterator<Item = ProductRecord>,
{
    let mut bucket_index: HashMap<String, usize> = HashMap::new();
    let mut buckets: Vec<(String, Vec<ProductRecord>)> = Vec::new();

    for product in products {
        let base_name = extract_base_name(&product.name);
        match bucket_index.entry(base_name.to_lowercase()) {
            Entry::Occupied(entry) => buckets[*entry.get()].1.push(product),
            Entry::Vacant(entry) => {
                entry.insert(buckets.len());
                buckets.push((base_name, vec![product]));
            }
        }
    }

    let mut grouped = GroupedProducts::default();
    for (base_name, members) in buckets {
        match ProductGroup::from_bucket(base_name, members) {
            Ok(group) => grouped.groups.push(group),
            Err(singleton) => grouped.ungrouped.extend(singleton),
        }
    }

    tracing::debug!(
        products = grouped.product_count(),
        groups = grouped.groups.len(),
        ungrouped = grouped.ungrouped.len(),
        "grouped products by base name"
    );

    grouped
}

/// Flattens grouped output back into one list: each group's members in
/// group order, then the ungrouped products.
#[must_use]
pub fn flatten_product_groups(grouped: GroupedProducts) -> Vec<ProductRecord> {
    let GroupedProducts { groups, ungrouped } = grouped;
    groups
        .into_iter()
        .flat_map(ProductGroup::into_products)
        .chain(ungrouped)
        .collect()
}

/// Sorts group members by colour, then size rank, then rate, then name.
///
/// The colour is read from the full original name with
/// [`extract_color`], so a size sitting right before a parenthesis is
/// compared as if it were the colour.
pub fn sort_variants(products: &mut [ProductRecord]) {
    products.sort_by_cached_key(|p| {
        (
            extract_color(&p.name),
            size_order(&p.name),
            p.rate,
            p.name.clone(),
        )
    });
}

fn group_id_for(base_name: &str) -> String {
    format!("group-{}", base_name.to_lowercase().replace(' ', "-"))
}

#[cfg(test)]
#[path = "group_test.rs"]
mod tests;
