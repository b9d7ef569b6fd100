// Copyright 2025 the Annals Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// An opaque `0xRRGGBB` color attached to records.
///
/// Records keep the packed form their data providers use; renderers convert
/// it into a paint color with whatever alpha a primitive needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Rgb(pub u32);

impl Rgb {
    /// Creates a color from a packed `0xRRGGBB` value. Bits above 24 are dropped.
    #[must_use]
    pub const fn new(hex: u32) -> Self {
        Self(hex & 0x00ff_ffff)
    }

    /// Red channel.
    #[must_use]
    pub const fn red(self) -> u8 {
        self.0.to_be_bytes()[1]
    }

    /// Green channel.
    #[must_use]
    pub const fn green(self) -> u8 {
        self.0.to_be_bytes()[2]
    }

    /// Blue channel.
    #[must_use]
    pub const fn blue(self) -> u8 {
        self.0.to_be_bytes()[3]
    }

    /// A darker shade used for outlines.
    ///
    /// Each channel keeps its high bit and halves the rest, so saturated
    /// channels stay visible while the overall tone drops.
    #[must_use]
    pub const fn darker(self) -> Self {
        Self(((self.0 >> 1) & 0x7f_7f7f) + (self.0 & 0x80_8080))
    }
}

#[cfg(test)]
mod tests {
    use super::Rgb;

    #[test]
    fn channels_unpack() {
        let c = Rgb::new(0xff6b9d);
        assert_eq!((c.red(), c.green(), c.blue()), (0xff, 0x6b, 0x9d));
    }

    #[test]
    fn new_drops_high_bits() {
        assert_eq!(Rgb::new(0xab12_3456), Rgb(0x12_3456));
    }

    #[test]
    fn darker_halves_low_bits_and_keeps_high_bit() {
        // 0xff -> 0x7f + 0x80, 0x6b -> 0x35 + 0x00, 0x9d -> 0x4e + 0x80.
        assert_eq!(Rgb::new(0xff6b9d).darker(), Rgb(0xff35ce));
        assert_eq!(Rgb::new(0x000000).darker(), Rgb(0x000000));
    }
}
