// Copyright 2025 the Annals Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

/// Uniform pan + zoom from content space to screen space.
///
/// `screen = content × scale + translation`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraTransform {
    /// Screen position of the content origin.
    pub translation: Vec2,
    /// Screen units per content unit.
    pub scale: f64,
}

impl CameraTransform {
    /// The unscaled, unpanned camera.
    pub const IDENTITY: Self = Self {
        translation: Vec2::ZERO,
        scale: 1.0,
    };

    /// Creates a camera transform.
    #[must_use]
    pub const fn new(translation: Vec2, scale: f64) -> Self {
        Self { translation, scale }
    }

    /// The transform as an affine, for painting content under the camera.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translation) * Affine::scale(self.scale)
    }

    /// Maps a content point to the screen.
    #[must_use]
    pub fn content_to_screen(&self, pt: Point) -> Point {
        (pt.to_vec2() * self.scale + self.translation).to_point()
    }

    /// Maps a screen point back into content space.
    #[must_use]
    pub fn screen_to_content(&self, pt: Point) -> Point {
        ((pt.to_vec2() - self.translation) / self.scale).to_point()
    }
}

impl Default for CameraTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Inclusive bounds on [`CameraTransform::scale`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    min: f64,
    max: f64,
}

impl ZoomLimits {
    /// Creates limits, swapping the bounds if given in reverse.
    ///
    /// Bounds that are not finite and positive fall back to the defaults.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        if !usable(min) || !usable(max) {
            return Self::default();
        }
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Smallest allowed scale.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest allowed scale.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamps `scale` into the limits.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min, self.max)
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self { min: 0.5, max: 3.0 }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{CameraTransform, ZoomLimits};

    #[test]
    fn screen_and_content_are_inverse() {
        let camera = CameraTransform::new(Vec2::new(40.0, -20.0), 0.5);
        let content = Point::new(300.0, 800.0);
        let screen = camera.content_to_screen(content);
        assert_eq!(screen, Point::new(190.0, 380.0));
        assert_eq!(camera.screen_to_content(screen), content);
        assert_eq!(camera.to_affine() * content, screen);
    }

    #[test]
    fn limits_normalize_and_clamp() {
        let limits = ZoomLimits::new(4.0, 0.25);
        assert_eq!(limits.min(), 0.25);
        assert_eq!(limits.max(), 4.0);
        assert_eq!(limits.clamp(10.0), 4.0);
        assert_eq!(limits.clamp(0.1), 0.25);
        assert_eq!(ZoomLimits::new(f64::NAN, 2.0), ZoomLimits::default());
        assert_eq!(ZoomLimits::new(0.0, 2.0), ZoomLimits::default());
    }
}
