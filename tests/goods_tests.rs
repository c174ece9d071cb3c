use freetrader::goods::{classify, Commodity};
use freetrader::world::{TradeCode, World};
use std::collections::BTreeSet;

fn codes(list: &[TradeCode]) -> BTreeSet<TradeCode> {
    list.iter().copied().collect()
}

#[test]
fn agricultural_table_row() {
    let profile = classify(&codes(&[TradeCode::Ag]));
    let exports: BTreeSet<_> =
        [Commodity::Food, Commodity::Livestock, Commodity::Organics].into();
    let imports: BTreeSet<_> = [
        Commodity::ManufacturedGoods,
        Commodity::Machinery,
        Commodity::Electronics,
    ]
    .into();
    assert_eq!(profile.exports, exports);
    assert_eq!(profile.imports, imports);
}

#[test]
fn multi_code_profiles_union() {
    let profile = classify(&codes(&[TradeCode::Ag, TradeCode::In]));
    // Industrial adds Vehicles to exports and Food to imports.
    assert!(profile.exports.contains(&Commodity::Food));
    assert!(profile.exports.contains(&Commodity::Vehicles));
    assert!(profile.imports.contains(&Commodity::Food));
    assert!(profile.imports.contains(&Commodity::RawMaterials));
    // Shared commodities appear once: it is a set union, not a bag.
    assert_eq!(
        profile
            .exports
            .iter()
            .filter(|&&c| c == Commodity::Food)
            .count(),
        1
    );
}

#[test]
fn empty_tags_yield_empty_sets() {
    let profile = classify(&BTreeSet::new());
    assert!(profile.exports.is_empty());
    assert!(profile.imports.is_empty());
}

#[test]
fn classification_is_order_independent() {
    let a = classify(&codes(&[TradeCode::Ri, TradeCode::De, TradeCode::Ag]));
    let b = classify(&codes(&[TradeCode::Ag, TradeCode::Ri, TradeCode::De]));
    assert_eq!(a, b);
}

#[test]
fn unknown_tokens_degrade_to_empty() {
    // Garbage tag data never panics; it just classifies to nothing.
    let parsed = World::parse_trade_codes("Zz ??? 12");
    assert!(parsed.is_empty());
    let profile = classify(&parsed);
    assert!(profile.exports.is_empty() && profile.imports.is_empty());
}

#[test]
fn serialized_list_cells_parse() {
    let parsed = World::parse_trade_codes("['Ag', 'Ri']");
    assert_eq!(parsed, codes(&[TradeCode::Ag, TradeCode::Ri]));

    let parsed = World::parse_trade_codes("Ag Hi Na");
    assert_eq!(parsed, codes(&[TradeCode::Ag, TradeCode::Hi, TradeCode::Na]));
}
