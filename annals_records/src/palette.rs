// Copyright 2025 the Annals Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use hashbrown::HashMap;

use crate::color::Rgb;

/// Color legend for poet categories.
///
/// The legend itself is supplied by the host; categories it does not list
/// fall back to a shared default color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryPalette {
    colors: HashMap<String, Rgb>,
    fallback: Rgb,
}

impl CategoryPalette {
    /// Fallback for categories missing from the legend.
    pub const DEFAULT_FALLBACK: Rgb = Rgb::new(0xf3_9c12);

    /// Creates an empty legend with the given fallback color.
    #[must_use]
    pub fn new(fallback: Rgb) -> Self {
        Self {
            colors: HashMap::new(),
            fallback,
        }
    }

    /// Adds or replaces the color of `category`.
    pub fn insert(&mut self, category: impl Into<String>, color: Rgb) -> Option<Rgb> {
        self.colors.insert(category.into(), color)
    }

    /// Returns the color of `category`, or the fallback.
    #[must_use]
    pub fn color_for(&self, category: &str) -> Rgb {
        self.colors.get(category).copied().unwrap_or(self.fallback)
    }

    /// Color used for unlisted categories.
    #[must_use]
    pub fn fallback(&self) -> Rgb {
        self.fallback
    }

    /// Number of listed categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` if no category is listed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for CategoryPalette {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FALLBACK)
    }
}

impl<S: Into<String>> FromIterator<(S, Rgb)> for CategoryPalette {
    fn from_iter<I: IntoIterator<Item = (S, Rgb)>>(iter: I) -> Self {
        let mut palette = Self::default();
        palette.extend(iter);
        palette
    }
}

impl<S: Into<String>> Extend<(S, Rgb)> for CategoryPalette {
    fn extend<I: IntoIterator<Item = (S, Rgb)>>(&mut self, iter: I) {
        self.colors
            .extend(iter.into_iter().map(|(category, color)| (category.into(), color)));
    }
}

#[cfg(test)]
mod tests {
    use super::CategoryPalette;
    use crate::color::Rgb;

    #[test]
    fn listed_categories_resolve_and_others_fall_back() {
        let palette: CategoryPalette = [
            ("Romanticism", Rgb::new(0xff3333)),
            ("Realism", Rgb::new(0xcc3333)),
        ]
        .into_iter()
        .collect();

        assert_eq!(palette.len(), 2);
        assert_eq!(palette.color_for("Realism"), Rgb::new(0xcc3333));
        assert_eq!(palette.color_for("Unknown"), CategoryPalette::DEFAULT_FALLBACK);
    }

    #[test]
    fn insert_replaces_existing_color() {
        let mut palette = CategoryPalette::new(Rgb::new(0));
        assert!(palette.is_empty());
        assert_eq!(palette.insert("Haofang", Rgb::new(0xff6600)), None);
        assert_eq!(
            palette.insert("Haofang", Rgb::new(0x111111)),
            Some(Rgb::new(0xff6600))
        );
        assert_eq!(palette.color_for("Haofang"), Rgb::new(0x111111));
    }
}
