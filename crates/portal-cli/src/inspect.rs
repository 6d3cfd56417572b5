//! `inspect` command handler.

use portal_grouping::{
    extract_base_name, extract_color, extract_variant_label, extract_weight, size_order,
    NO_SIZE_RANK,
};

/// Print how each name is normalized: base name, colour, size rank, variant
/// label and weight annotation.
pub(crate) fn run_inspect(names: &[String]) {
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            println!();
        }
        for (field, value) in inspect_fields(name) {
            println!("{field:<11}{value}");
        }
    }
}

pub(crate) fn inspect_fields(name: &str) -> Vec<(&'static str, String)> {
    let rank = size_order(name);
    vec![
        ("name", name.to_string()),
        ("base name", extract_base_name(name)),
        ("colour", extract_color(name)),
        (
            "size rank",
            if rank == NO_SIZE_RANK {
                format!("{rank} (none)")
            } else {
                rank.to_string()
            },
        ),
        ("label", extract_variant_label(name).to_string()),
        ("weight", extract_weight(name).unwrap_or_else(|| "-".to_string())),
    ]
}
