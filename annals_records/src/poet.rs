// Copyright 2025 the Annals Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Poets, their creative peaks, and the search helpers hosts drive from UI.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

/// The most productive stretch of a poet's life.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeakPeriod {
    /// First year of the peak.
    pub start: i32,
    /// Last year of the peak.
    pub end: i32,
}

/// A poet and their lifespan.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct PoetRecord {
    /// Display name.
    pub name: String,
    /// Dynasty the poet is usually filed under.
    #[cfg_attr(feature = "serde", serde(default))]
    pub dynasty: String,
    /// Literary school or movement; selects the bar color.
    pub category: String,
    /// Year of birth.
    #[cfg_attr(feature = "serde", serde(alias = "birth"))]
    pub birth_year: i32,
    /// Year of death.
    #[cfg_attr(feature = "serde", serde(alias = "death"))]
    pub death_year: i32,
    /// Optional creative peak, expected within the lifespan.
    #[cfg_attr(feature = "serde", serde(default))]
    pub peak_period: Option<PeakPeriod>,
}

impl PoetRecord {
    /// Creates a poet without a peak period.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        dynasty: impl Into<String>,
        category: impl Into<String>,
        birth_year: i32,
        death_year: i32,
    ) -> Self {
        Self {
            name: name.into(),
            dynasty: dynasty.into(),
            category: category.into(),
            birth_year,
            death_year,
            peak_period: None,
        }
    }

    /// Returns this record with a peak period attached.
    #[must_use]
    pub fn with_peak(mut self, start: i32, end: i32) -> Self {
        self.peak_period = Some(PeakPeriod { start, end });
        self
    }

    fn matches(&self, query: &str) -> bool {
        self.name.contains(query) || self.dynasty.contains(query) || self.category.contains(query)
    }
}

/// Returns the poets ordered by birth year.
///
/// The sort is stable: poets born in the same year keep their input order.
#[must_use]
pub fn sort_by_birth(poets: &[PoetRecord]) -> Vec<PoetRecord> {
    birth_order(poets)
        .into_iter()
        .map(|index| poets[index].clone())
        .collect()
}

/// Input indices of `poets` in the order [`sort_by_birth`] produces.
///
/// Entry `k` is the input index of the `k`-th poet by birth.
#[must_use]
pub fn birth_order(poets: &[PoetRecord]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..poets.len()).collect();
    order.sort_by_key(|&index| poets[index].birth_year);
    order
}

/// Filters poets whose name, dynasty, or category contains `query`.
///
/// Matching is a case-sensitive substring test. A blank (empty or
/// whitespace-only) query borrows the input back unchanged.
#[must_use]
pub fn filter_by_query<'a>(poets: &'a [PoetRecord], query: &str) -> Cow<'a, [PoetRecord]> {
    if query.trim().is_empty() {
        return Cow::Borrowed(poets);
    }
    Cow::Owned(
        poets
            .iter()
            .filter(|poet| poet.matches(query))
            .cloned()
            .collect(),
    )
}

/// Returns the first poet, in input order, whose name contains `name`.
#[must_use]
pub fn find_by_name<'a>(poets: &'a [PoetRecord], name: &str) -> Option<&'a PoetRecord> {
    position_by_name(poets, name).and_then(|index| poets.get(index))
}

/// Like [`find_by_name`], but returns the input index of the match.
#[must_use]
pub fn position_by_name(poets: &[PoetRecord], name: &str) -> Option<usize> {
    poets.iter().position(|poet| poet.name.contains(name))
}

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{
        PoetRecord, birth_order, filter_by_query, find_by_name, position_by_name, sort_by_birth,
    };

    fn poets() -> Vec<PoetRecord> {
        vec![
            PoetRecord::new("Du Fu", "Tang", "Realism", 712, 770),
            PoetRecord::new("Wang Bo", "Tang", "Early Tang", 650, 676),
            PoetRecord::new("Li Bai", "Tang", "Romanticism", 701, 762).with_peak(725, 755),
            PoetRecord::new("Su Shi", "Northern Song", "Haofang", 1037, 1101),
            PoetRecord::new("Wang Wei", "Tang", "Landscape", 701, 761),
        ]
    }

    fn names(poets: &[PoetRecord]) -> Vec<&str> {
        poets.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn sort_by_birth_is_stable() {
        let sorted = sort_by_birth(&poets());
        assert_eq!(
            names(&sorted),
            ["Wang Bo", "Li Bai", "Wang Wei", "Du Fu", "Su Shi"]
        );
    }

    #[test]
    fn sort_by_birth_is_idempotent() {
        let once = sort_by_birth(&poets());
        let twice = sort_by_birth(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn blank_query_borrows_input() {
        let all = poets();
        for query in ["", "   ", "\t\n"] {
            let filtered = filter_by_query(&all, query);
            assert!(matches!(filtered, Cow::Borrowed(_)), "{query:?} should borrow");
            assert_eq!(&*filtered, all.as_slice());
        }
    }

    #[test]
    fn query_matches_name_dynasty_or_category() {
        let all = poets();
        assert_eq!(names(&filter_by_query(&all, "Wang")), ["Wang Bo", "Wang Wei"]);
        assert_eq!(names(&filter_by_query(&all, "Song")), ["Su Shi"]);
        assert_eq!(names(&filter_by_query(&all, "Real")), ["Du Fu"]);
        assert!(filter_by_query(&all, "nobody").is_empty());
    }

    #[test]
    fn query_is_case_sensitive() {
        let all = poets();
        assert!(filter_by_query(&all, "wang").is_empty());
    }

    #[test]
    fn find_by_name_returns_first_match_in_input_order() {
        let all = poets();
        let found = find_by_name(&all, "Wang").map(|p| p.name.as_str());
        assert_eq!(found, Some("Wang Bo"));
        assert_eq!(find_by_name(&all, "Li Qingzhao"), None);
        assert_eq!(position_by_name(&all, "Wang"), Some(1));
        assert_eq!(position_by_name(&all, "Li Qingzhao"), None);
    }

    #[test]
    fn birth_order_indexes_the_input() {
        let all = poets();
        assert_eq!(birth_order(&all), [1, 2, 4, 0, 3]);
        assert!(birth_order(&[]).is_empty());
    }
}
