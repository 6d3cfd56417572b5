//! Product-variant grouping for catalogue listings.
//!
//! Products whose names differ only by size, weight or measurement tokens
//! share a base name and are collapsed into a [`ProductGroup`]; everything
//! else passes through as an ungrouped singleton.

pub mod base_name;
pub mod color;
pub mod group;
pub mod label;
pub mod size;

pub use base_name::{extract_base_name, should_group};
pub use color::extract_color;
pub use group::{
    flatten_product_groups, group_products_by_name, sort_variants, GroupedProducts,
    ProductGroup, VariantOption,
};
pub use label::{extract_size, extract_variant_label, extract_weight, VariantLabel};
pub use size::{size_order, SizeCode, NO_SIZE_RANK};
