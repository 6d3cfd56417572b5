use super::*;

// -----------------------------------------------------------------------
// extract_variant_label
// -----------------------------------------------------------------------

#[test]
fn label_from_parenthetical_size() {
    assert_eq!(
        extract_variant_label("Jacket Navy (XL/48CM)"),
        VariantLabel::Size(SizeCode::Xl)
    );
    assert_eq!(
        extract_variant_label("Jacket Navy（m/32CM）"),
        VariantLabel::Size(SizeCode::M)
    );
}

#[test]
fn label_from_parenthetical_full_word() {
    assert_eq!(
        extract_variant_label("Raincoat (X-Large/60CM)"),
        VariantLabel::Size(SizeCode::Xl)
    );
}

#[test]
fn label_from_spelled_out_size() {
    assert_eq!(
        extract_variant_label("Dog Bed Medium Grey"),
        VariantLabel::Size(SizeCode::M)
    );
    assert_eq!(
        extract_variant_label("Dog Bed XX-Large"),
        VariantLabel::Size(SizeCode::Xxl)
    );
    assert_eq!(
        extract_variant_label("Dog Bed x-small"),
        VariantLabel::Size(SizeCode::Xs)
    );
}

#[test]
fn label_from_size_token() {
    assert_eq!(
        extract_variant_label("FIDA AUTOBRAKE Leash 5M - S White (Max 12kgs)"),
        VariantLabel::Size(SizeCode::S)
    );
    assert_eq!(
        extract_variant_label("Product - XXL Black"),
        VariantLabel::Size(SizeCode::Xxl)
    );
}

#[test]
fn size_token_beats_descriptive_size_word() {
    assert_eq!(
        extract_variant_label("Large Breed Kibble - M"),
        VariantLabel::Size(SizeCode::M)
    );
    assert_eq!(
        extract_variant_label("Large Breed Kibble - XL"),
        VariantLabel::Size(SizeCode::Xl)
    );
    assert_eq!(
        extract_variant_label("Small Animal Hutch - S"),
        VariantLabel::Size(SizeCode::S)
    );
}

#[test]
fn bracketed_size_beats_descriptive_size_word() {
    assert_eq!(
        extract_variant_label("Small Animal Hutch (Large)"),
        VariantLabel::Size(SizeCode::L)
    );
    assert_eq!(
        extract_variant_label("Small Animal Hutch (xl)"),
        VariantLabel::Size(SizeCode::Xl)
    );
}

#[test]
fn label_from_shoe_size() {
    assert_eq!(
        extract_variant_label("Dog Shoes #4"),
        VariantLabel::ShoeSize(4)
    );
}

#[test]
fn label_from_measurement() {
    assert_eq!(
        extract_variant_label("Rope Leash 4.5mm Red"),
        VariantLabel::Measurement(Decimal::from_str("4.5").unwrap())
    );
    assert_eq!(
        extract_variant_label("Rope Leash 6MM Red"),
        VariantLabel::Measurement(Decimal::from(6))
    );
}

#[test]
fn label_standard_when_no_token() {
    assert_eq!(extract_variant_label("Dog Bowl Steel"), VariantLabel::Standard);
    assert_eq!(extract_variant_label(""), VariantLabel::Standard);
    assert_eq!(
        extract_variant_label("leash 5m - m white"),
        VariantLabel::Standard
    );
}

#[test]
fn oversized_shoe_size_falls_through() {
    assert_eq!(
        extract_variant_label("Dog Shoes #99999999999"),
        VariantLabel::Standard
    );
}

// -----------------------------------------------------------------------
// Display and ordering
// -----------------------------------------------------------------------

#[test]
fn labels_display_as_short_text() {
    assert_eq!(VariantLabel::Standard.to_string(), "Standard");
    assert_eq!(VariantLabel::Size(SizeCode::Xxl).to_string(), "XXL");
    assert_eq!(VariantLabel::ShoeSize(4).to_string(), "#4");
    assert_eq!(
        VariantLabel::Measurement(Decimal::from_str("4.50").unwrap()).to_string(),
        "4.5mm"
    );
}

#[test]
fn labels_serialize_as_strings() {
    let json = serde_json::to_string(&VariantLabel::ShoeSize(7)).unwrap();
    assert_eq!(json, "\"#7\"");
}

#[test]
fn standard_sorts_first_then_sizes_then_numbers() {
    let mut labels = vec![
        VariantLabel::Measurement(Decimal::from(6)),
        VariantLabel::Size(SizeCode::L),
        VariantLabel::ShoeSize(2),
        VariantLabel::Size(SizeCode::Xs),
        VariantLabel::Standard,
        VariantLabel::Measurement(Decimal::from_str("4.5").unwrap()),
        VariantLabel::Size(SizeCode::M),
    ];
    labels.sort();
    let rendered: Vec<String> = labels.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec!["Standard", "XS", "M", "L", "#2", "4.5mm", "6mm"]
    );
}

#[test]
fn shoe_size_and_measurement_with_same_value_are_distinct() {
    let shoe = VariantLabel::ShoeSize(4);
    let mm = VariantLabel::Measurement(Decimal::from(4));
    assert_ne!(shoe, mm);
    assert!(shoe < mm);
}

// -----------------------------------------------------------------------
// extract_size / extract_weight
// -----------------------------------------------------------------------

#[test]
fn extract_size_returns_label_text() {
    assert_eq!(extract_size("Harness M Red").as_deref(), Some("M"));
    assert_eq!(extract_size("Dog Shoes #3").as_deref(), Some("#3"));
    assert_eq!(extract_size("Rope 8mm").as_deref(), Some("8mm"));
}

#[test]
fn extract_size_none_without_token() {
    assert!(extract_size("Dog Bowl Steel").is_none());
}

#[test]
fn extract_weight_max_annotation() {
    assert_eq!(
        extract_weight("FIDA AUTOBRAKE Leash 5M - S White (Max 12kgs)").as_deref(),
        Some("Max 12kgs")
    );
}

#[test]
fn extract_weight_range_annotation() {
    assert_eq!(
        extract_weight("Harness (5-10kg) Blue").as_deref(),
        Some("5-10kg")
    );
    assert_eq!(
        extract_weight("Harness（10 - 25 kgs）").as_deref(),
        Some("10 - 25 kgs")
    );
}

#[test]
fn extract_weight_none_without_annotation() {
    assert!(extract_weight("Cat Litter 10kg").is_none());
    assert!(extract_weight("Jacket (XL/48CM)").is_none());
}
