use crate::world::TradeCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strum_macros::{Display, EnumIter};

/// Commodity labels used by the goods-matching model. Display strings match
/// the survey cargo manifests.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    Display,
    Serialize,
    Deserialize,
)]
pub enum Commodity {
    Food,
    Livestock,
    Organics,
    #[strum(serialize = "Manufactured Goods")]
    ManufacturedGoods,
    Machinery,
    Electronics,
    Vehicles,
    #[strum(serialize = "Raw Materials")]
    RawMaterials,
    Ores,
    Crystals,
    #[strum(serialize = "Luxury Goods")]
    LuxuryGoods,
    #[strum(serialize = "Precious Metals")]
    PreciousMetals,
    #[strum(serialize = "Art Objects")]
    ArtObjects,
    #[strum(serialize = "Luxury Consumables")]
    LuxuryConsumables,
    #[strum(serialize = "Rare Materials")]
    RareMaterials,
    Labor,
    Medicine,
    Minerals,
    Water,
    #[strum(serialize = "Life Support")]
    LifeSupport,
    Hydrogen,
    #[strum(serialize = "Heating Equipment")]
    HeatingEquipment,
    #[strum(serialize = "Exotic Materials")]
    ExoticMaterials,
    Information,
    #[strum(serialize = "Standard Goods")]
    StandardGoods,
    Technology,
    #[strum(serialize = "Rare Elements")]
    RareElements,
}

/// What a world sells and what it buys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoodsProfile {
    pub exports: BTreeSet<Commodity>,
    pub imports: BTreeSet<Commodity>,
}

/// Per-code goods table. This is tunable flavor policy, not a proven
/// economic model; keep it in one place.
fn code_goods(code: TradeCode) -> (&'static [Commodity], &'static [Commodity]) {
    use Commodity::*;
    match code {
        TradeCode::Ag => (
            &[Food, Livestock, Organics],
            &[ManufacturedGoods, Machinery, Electronics],
        ),
        TradeCode::In => (
            &[ManufacturedGoods, Machinery, Electronics, Vehicles],
            &[RawMaterials, Ores, Crystals, Food],
        ),
        TradeCode::Ri => (
            &[LuxuryGoods, PreciousMetals, ArtObjects],
            &[LuxuryConsumables, RareMaterials],
        ),
        TradeCode::Hi => (&[ManufacturedGoods, Electronics], &[Food, RawMaterials]),
        TradeCode::Po => (
            &[RawMaterials, Ores, Labor],
            &[Food, ManufacturedGoods, Medicine],
        ),
        TradeCode::De => (&[Minerals, Ores, Crystals], &[Food, Water, LifeSupport]),
        TradeCode::Ic => (
            &[Water, Hydrogen],
            &[Food, ManufacturedGoods, HeatingEquipment],
        ),
        TradeCode::Na => (&[ExoticMaterials, Information], &[StandardGoods, Technology]),
        TradeCode::As => (
            &[Minerals, Ores, Crystals, RareElements],
            &[Food, ManufacturedGoods, LifeSupport],
        ),
    }
}

/// Classifies a world's tag set into export/import commodity sets: the union
/// of the per-code rows. Pure lookup; an empty or unmatched tag set yields
/// two empty sets.
pub fn classify(codes: &BTreeSet<TradeCode>) -> GoodsProfile {
    let mut profile = GoodsProfile::default();
    for &code in codes {
        let (exports, imports) = code_goods(code);
        profile.exports.extend(exports.iter().copied());
        profile.imports.extend(imports.iter().copied());
    }
    profile
}
