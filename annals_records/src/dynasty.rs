// Copyright 2025 the Annals Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dynasties and the rulers that reigned in them.

use alloc::string::String;
use alloc::vec::Vec;

use crate::color::Rgb;

/// A dynasty: a named span of years with a presentation color.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct DynastyRecord {
    /// Display name.
    pub name: String,
    /// First year of the dynasty.
    #[cfg_attr(feature = "serde", serde(alias = "start"))]
    pub start_year: i32,
    /// Last year of the dynasty.
    #[cfg_attr(feature = "serde", serde(alias = "end"))]
    pub end_year: i32,
    /// Band color; rulers of this dynasty inherit it.
    pub color: Rgb,
}

impl DynastyRecord {
    /// Creates a dynasty record.
    #[must_use]
    pub fn new(name: impl Into<String>, start_year: i32, end_year: i32, color: Rgb) -> Self {
        Self {
            name: name.into(),
            start_year,
            end_year,
            color,
        }
    }
}

/// A ruler as listed by a per-dynasty data source.
///
/// Sources list rulers in reign order and do not repeat the dynasty on every
/// entry; [`merge_dynasty_rulers`] attaches it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RulerSource {
    /// Temple or regnal title, shown as the ruler's primary label.
    pub title: String,
    /// Personal (birth) name.
    pub name: String,
    /// First year of the reign.
    pub from: i32,
    /// Last year of the reign.
    pub to: i32,
    /// Free-form notes; may be empty.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

/// One dynasty together with its source ruler list.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DynastyRulers {
    /// The owning dynasty.
    pub dynasty: DynastyRecord,
    /// Rulers in reign order.
    pub rulers: Vec<RulerSource>,
}

/// A normalized ruler, tagged with the dynasty it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct RulerRecord {
    /// Temple or regnal title.
    pub display_title: String,
    /// Personal (birth) name.
    pub personal_name: String,
    /// Name of the owning dynasty.
    pub dynasty_name: String,
    /// First year of the reign.
    pub reign_start: i32,
    /// Last year of the reign.
    pub reign_end: i32,
    /// Free-form notes; may be empty.
    pub description: String,
    /// Color inherited from the owning dynasty.
    pub color: Rgb,
}

impl RulerRecord {
    /// Length of the reign in years, floored at zero for malformed spans.
    #[must_use]
    pub fn reign_years(&self) -> i32 {
        self.reign_end.saturating_sub(self.reign_start).max(0)
    }
}

/// Flattens per-dynasty ruler lists into one collection.
///
/// Dynasties are emitted chronologically by start year; dynasties starting in
/// the same year keep their input order. Rulers within a dynasty keep source
/// order, which is reign order. Each ruler inherits its dynasty's name and color.
#[must_use]
pub fn merge_dynasty_rulers(lists: &[DynastyRulers]) -> Vec<RulerRecord> {
    let mut ordered: Vec<&DynastyRulers> = lists.iter().collect();
    ordered.sort_by_key(|list| list.dynasty.start_year);

    let total = ordered.iter().map(|list| list.rulers.len()).sum();
    let mut merged = Vec::with_capacity(total);
    for list in ordered {
        let dynasty = &list.dynasty;
        merged.extend(list.rulers.iter().map(|ruler| RulerRecord {
            display_title: ruler.title.clone(),
            personal_name: ruler.name.clone(),
            dynasty_name: dynasty.name.clone(),
            reign_start: ruler.from,
            reign_end: ruler.to,
            description: ruler.description.clone(),
            color: dynasty.color,
        }));
    }
    merged
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{DynastyRecord, DynastyRulers, RulerSource, merge_dynasty_rulers};
    use crate::color::Rgb;

    fn ruler(title: &str, from: i32, to: i32) -> RulerSource {
        RulerSource {
            title: title.into(),
            name: String::new(),
            from,
            to,
            description: String::new(),
        }
    }

    fn tang() -> DynastyRulers {
        DynastyRulers {
            dynasty: DynastyRecord::new("Tang", 618, 907, Rgb::new(0xff6b9d)),
            rulers: vec![ruler("Gaozu", 618, 626), ruler("Taizong", 626, 649)],
        }
    }

    fn later_liang() -> DynastyRulers {
        DynastyRulers {
            dynasty: DynastyRecord::new("Five Dynasties", 907, 960, Rgb::new(0x6c5ce7)),
            rulers: vec![ruler("Taizu of Liang", 907, 912), ruler("Modi", 913, 923)],
        }
    }

    #[test]
    fn merge_keeps_dynasty_order_and_tags_colors() {
        let merged = merge_dynasty_rulers(&[tang(), later_liang()]);
        let titles: Vec<&str> = merged.iter().map(|r| r.display_title.as_str()).collect();
        assert_eq!(titles, ["Gaozu", "Taizong", "Taizu of Liang", "Modi"]);
        assert!(merged[..2].iter().all(|r| r.color == Rgb::new(0xff6b9d)));
        assert!(merged[2..].iter().all(|r| r.color == Rgb::new(0x6c5ce7)));
        assert_eq!(merged[2].dynasty_name, "Five Dynasties");
    }

    #[test]
    fn merge_orders_dynasties_chronologically() {
        let merged = merge_dynasty_rulers(&[later_liang(), tang()]);
        assert_eq!(merged[0].display_title, "Gaozu");
        assert_eq!(merged[3].display_title, "Modi");
    }

    #[test]
    fn merge_does_not_resort_within_a_dynasty() {
        let mut odd = tang();
        odd.rulers.reverse();
        let merged = merge_dynasty_rulers(&[odd]);
        assert_eq!(merged[0].display_title, "Taizong");
        assert_eq!(merged[1].display_title, "Gaozu");
    }

    #[test]
    fn reign_years_floors_malformed_spans() {
        let merged = merge_dynasty_rulers(&[DynastyRulers {
            dynasty: DynastyRecord::new("X", 0, 10, Rgb::new(0)),
            rulers: vec![ruler("a", 5, 3), ruler("b", 3, 8)],
        }]);
        assert_eq!(merged[0].reign_years(), 0);
        assert_eq!(merged[1].reign_years(), 5);
    }
}
