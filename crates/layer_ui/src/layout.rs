//! Layout parameters.
//!
//! The engine does not compute geometry. It records what the host's own
//! layout primitives need: size specs, margins, weight and gravity, with
//! every dp value already converted to px.

/// Screen density (px per dp).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Density(pub f32);

impl Density {
    /// 1 px per dp.
    pub const BASELINE: Self = Self(1.0);

    /// Converts dp to px, truncating like the platform does.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn px(self, dp: f32) -> f32 {
        (dp * self.0).trunc()
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::BASELINE
    }
}

/// How one axis is sized.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SizeSpec {
    /// Fill the parent.
    #[default]
    MatchParent,
    /// Fit the content.
    WrapContent,
    /// Fixed size in px.
    Fixed(f32),
}

/// Edge insets in px.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Right edge.
    pub right: f32,
    /// Bottom edge.
    pub bottom: f32,
}

impl Insets {
    /// No insets.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates insets.
    #[must_use]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Same value on every edge.
    #[must_use]
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Horizontal and vertical values.
    #[must_use]
    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }
}

/// Child stacking direction of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    #[default]
    Vertical,
}

/// Placement inside the parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gravity {
    /// Platform default.
    #[default]
    Start,
    /// Centered horizontally.
    CenterHorizontal,
    /// Centered vertically.
    CenterVertical,
    /// Centered on both axes.
    Center,
    /// End edge.
    End,
}

/// Everything the host needs to place an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Width.
    pub width: SizeSpec,
    /// Height.
    pub height: SizeSpec,
    /// Outer margins.
    pub margin: Insets,
    /// Inner padding.
    pub padding: Insets,
    /// Share of leftover main-axis space (0 = none).
    pub weight: f32,
    /// Placement inside the parent.
    pub gravity: Gravity,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            width: SizeSpec::MatchParent,
            height: SizeSpec::WrapContent,
            margin: Insets::ZERO,
            padding: Insets::ZERO,
            weight: 0.0,
            gravity: Gravity::Start,
        }
    }
}

impl LayoutParams {
    /// Wrap content on both axes.
    #[must_use]
    pub fn wrap() -> Self {
        Self {
            width: SizeSpec::WrapContent,
            ..Self::default()
        }
    }

    /// Match parent width, fixed height.
    #[must_use]
    pub fn fixed_height(height: f32) -> Self {
        Self {
            height: SizeSpec::Fixed(height),
            ..Self::default()
        }
    }

    /// Sets padding.
    #[must_use]
    pub const fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Sets gravity.
    #[must_use]
    pub const fn with_gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = gravity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density_truncates() {
        let density = Density(2.75);
        assert_eq!(density.px(48.0), 132.0);
        assert_eq!(density.px(1.0), 2.0);
        assert_eq!(Density::BASELINE.px(310.0), 310.0);
    }

    #[test]
    fn test_default_params() {
        let params = LayoutParams::default();
        assert_eq!(params.width, SizeSpec::MatchParent);
        assert_eq!(params.height, SizeSpec::WrapContent);
        assert_eq!(params.margin, Insets::ZERO);
        assert_eq!(LayoutParams::wrap().width, SizeSpec::WrapContent);
    }
}
