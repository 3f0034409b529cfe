//! Typed style attributes with defaults
//!
//! The key set is closed. Every key has a default, so reading an attribute
//! that was never set is not an error; it simply yields the default. Values
//! carry their own key, which makes it impossible to store a value under the
//! wrong key.

use std::collections::HashMap;

use glam::{DVec2, dvec2};

use crate::errors::{AttributeError, NumericError};
use crate::geometry::defaults;
use crate::log::debug;
use crate::types::{BoxAnchor, Color};

// ============================================================================
// Attribute Domains
// ============================================================================

/// Compass direction a figure's tip points toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Orientation {
    /// All orientations, clockwise from north.
    pub const ALL: [Orientation; 8] = [
        Orientation::North,
        Orientation::NorthEast,
        Orientation::East,
        Orientation::SouthEast,
        Orientation::South,
        Orientation::SouthWest,
        Orientation::West,
        Orientation::NorthWest,
    ];

    /// Position in [`Orientation::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Orientation at `index` in [`Orientation::ALL`]; anything out of range is north.
    pub fn from_index(index: usize) -> Self {
        match Self::ALL.get(index) {
            Some(o) => *o,
            None => {
                debug!(index, "unknown orientation index, using north");
                Orientation::North
            }
        }
    }

    /// Parse a compass name (`"ne"`, `"north-east"`, `"NORTH_EAST"`, ...).
    /// Unrecognized names are north.
    pub fn from_name(name: &str) -> Self {
        let key: String = name
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "n" | "north" => Orientation::North,
            "ne" | "northeast" => Orientation::NorthEast,
            "e" | "east" => Orientation::East,
            "se" | "southeast" => Orientation::SouthEast,
            "s" | "south" => Orientation::South,
            "sw" | "southwest" => Orientation::SouthWest,
            "w" | "west" => Orientation::West,
            "nw" | "northwest" => Orientation::NorthWest,
            _ => {
                debug!(name, "unknown orientation name, using north");
                Orientation::North
            }
        }
    }

    /// Next orientation clockwise.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % 8]
    }

    /// Next orientation counter-clockwise.
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + 7) % 8]
    }

    /// The box point this orientation points at.
    pub const fn anchor(self) -> BoxAnchor {
        match self {
            Orientation::North => BoxAnchor::TopMid,
            Orientation::NorthEast => BoxAnchor::TopRight,
            Orientation::East => BoxAnchor::RightMid,
            Orientation::SouthEast => BoxAnchor::BottomRight,
            Orientation::South => BoxAnchor::BottomMid,
            Orientation::SouthWest => BoxAnchor::BottomLeft,
            Orientation::West => BoxAnchor::LeftMid,
            Orientation::NorthWest => BoxAnchor::TopLeft,
        }
    }

    /// Classify a direction vector into one of eight 45° sectors.
    ///
    /// `dir` uses compass convention: x grows east, y grows north. Sector
    /// boundaries sit at slopes 0.414 ≈ tan(22.5°) and 2.414 ≈ tan(67.5°).
    /// The zero vector is north.
    pub fn from_direction(dir: DVec2) -> Self {
        let (dx, dy) = (dir.x, dir.y);
        if dx > 0.0 {
            if dy >= 2.414 * dx {
                Orientation::North
            } else if dy > 0.414 * dx {
                Orientation::NorthEast
            } else if dy > -0.414 * dx {
                Orientation::East
            } else if dy > -2.414 * dx {
                Orientation::SouthEast
            } else {
                Orientation::South
            }
        } else if dx < 0.0 {
            if dy >= -2.414 * dx {
                Orientation::North
            } else if dy > -0.414 * dx {
                Orientation::NorthWest
            } else if dy > 0.414 * dx {
                Orientation::West
            } else if dy > 2.414 * dx {
                Orientation::SouthWest
            } else {
                Orientation::South
            }
        } else if dy >= 0.0 {
            Orientation::North
        } else {
            Orientation::South
        }
    }

    /// Classify the screen-space direction from `center` toward `toward`.
    ///
    /// Screen y grows downward, so it is negated. The x offset is scaled by the
    /// box aspect ratio so that sectors line up with the box's own corners.
    pub fn from_screen_direction(center: DVec2, toward: DVec2, half_size: DVec2) -> Self {
        let mut dx = toward.x - center.x;
        if half_size.x > defaults::EPSILON {
            dx *= half_size.y / half_size.x;
        }
        let dy = -(toward.y - center.y);
        Self::from_direction(dvec2(dx, dy))
    }
}

/// Where a stroke is painted relative to the nominal outline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum StrokePlacement {
    Inside,
    Outside,
    #[default]
    Center,
}

/// How stroke segments meet at a vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum StrokeJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// Single stroke, or two parallel strokes separated by a gap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum StrokeType {
    #[default]
    Basic,
    Double,
}

/// How far the fill extends under the stroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum FillUnderStroke {
    /// Fill stops at the inner edge of the stroke.
    None,
    /// Fill reaches the stroke's center line.
    #[default]
    Center,
    /// Fill reaches the outer edge of the stroke.
    Full,
}

// ============================================================================
// Keys and Values
// ============================================================================

/// Declares the key enum, the value enum, defaults and typed getters from a
/// single list so the three can never drift apart.
macro_rules! attribute_keys {
    ($(
        $(#[$meta:meta])*
        $variant:ident($ty:ty) = $default:expr => $getter:ident;
    )*) => {
        /// Name of a style attribute.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum AttributeKey {
            $($(#[$meta])* $variant,)*
        }

        impl AttributeKey {
            /// Every key, in declaration order.
            pub const ALL: &'static [AttributeKey] = &[$(AttributeKey::$variant,)*];

            /// The value a store reports when this key was never set.
            pub fn default_value(self) -> AttributeValue {
                match self {
                    $(AttributeKey::$variant => AttributeValue::$variant($default),)*
                }
            }
        }

        /// A typed attribute value; the variant names its key.
        #[derive(Clone, Debug, PartialEq)]
        pub enum AttributeValue {
            $($variant($ty),)*
        }

        impl AttributeValue {
            pub fn key(&self) -> AttributeKey {
                match self {
                    $(AttributeValue::$variant(_) => AttributeKey::$variant,)*
                }
            }
        }

        impl Attributes {
            $(
                $(#[$meta])*
                pub fn $getter(&self) -> $ty {
                    match self.values.get(&AttributeKey::$variant) {
                        Some(AttributeValue::$variant(v)) => v.clone(),
                        _ => $default,
                    }
                }
            )*
        }
    };
}

attribute_keys! {
    /// Direction the figure's tip points toward.
    Orientation(Orientation) = Orientation::North => orientation;
    /// Stroke paint; `None` means the outline is not stroked.
    StrokeColor(Option<Color>) = Some(Color::black()) => stroke_color;
    /// Fill paint; `None` means the figure is not filled.
    FillColor(Option<Color>) = Some(Color::white()) => fill_color;
    /// Width of a single stroke line.
    StrokeWidth(f64) = defaults::STROKE_WIDTH => stroke_width;
    StrokePlacement(StrokePlacement) = StrokePlacement::Center => stroke_placement;
    StrokeJoin(StrokeJoin) = StrokeJoin::Miter => stroke_join;
    /// Maximum miter length as a multiple of the stroke half-width.
    StrokeMiterLimit(f64) = defaults::STROKE_MITER_LIMIT => stroke_miter_limit;
    StrokeType(StrokeType) = StrokeType::Basic => stroke_type;
    /// Gap between the lines of a double stroke, relative to the stroke width.
    StrokeInnerWidthFactor(f64) = defaults::STROKE_INNER_WIDTH_FACTOR => stroke_inner_width_factor;
    FillUnderStroke(FillUnderStroke) = FillUnderStroke::Center => fill_under_stroke;
    /// Stroke width is given in view pixels and stays constant under zoom.
    StrokePixelSized(bool) = false => stroke_pixel_sized;
}

// ============================================================================
// Attribute Store
// ============================================================================

/// Attribute values explicitly set on a figure.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attributes {
    values: HashMap<AttributeKey, AttributeValue>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Attributes::set`].
    pub fn with(mut self, value: AttributeValue) -> Result<Self, AttributeError> {
        self.set(value)?;
        Ok(self)
    }

    /// Current value for `key`, or its default.
    pub fn get(&self, key: AttributeKey) -> AttributeValue {
        self.values
            .get(&key)
            .cloned()
            .unwrap_or_else(|| key.default_value())
    }

    /// Store `value` under its key, returning the value it replaced.
    ///
    /// Out-of-domain values are rejected and the store is left unchanged.
    pub fn set(&mut self, value: AttributeValue) -> Result<Option<AttributeValue>, AttributeError> {
        validate(&value)?;
        Ok(self.values.insert(value.key(), value))
    }

    /// Forget an explicit value so `key` reads as its default again.
    pub fn reset(&mut self, key: AttributeKey) -> Option<AttributeValue> {
        self.values.remove(&key)
    }

    /// Orientation has no invalid values, so setting it cannot fail.
    pub fn set_orientation(&mut self, orientation: Orientation) -> Option<AttributeValue> {
        self.values
            .insert(AttributeKey::Orientation, AttributeValue::Orientation(orientation))
    }

    /// Whether `key` has an explicit value.
    pub fn is_set(&self, key: AttributeKey) -> bool {
        self.values.contains_key(&key)
    }

    /// Explicitly set values, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &AttributeValue> {
        self.values.values()
    }

    /// Whether the outline is stroked at all.
    pub fn has_stroke(&self) -> bool {
        self.stroke_color().is_some()
    }
}

fn validate(value: &AttributeValue) -> Result<(), AttributeError> {
    match *value {
        AttributeValue::StrokeWidth(w) => {
            NumericError::check_non_negative(w)
                .map_err(|source| AttributeError::InvalidStrokeWidth { value: w, source })?;
        }
        AttributeValue::StrokeMiterLimit(m) => {
            // NaN fails the comparison too
            if !(m >= 1.0 && m.is_finite()) {
                return Err(AttributeError::MiterLimitTooSmall { value: m });
            }
        }
        AttributeValue::StrokeInnerWidthFactor(f) => {
            NumericError::check_non_negative(f)
                .map_err(|source| AttributeError::InvalidInnerWidthFactor { value: f, source })?;
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Orientation tests ====================

    #[test]
    fn orientation_defaults_to_north() {
        assert_eq!(Orientation::default(), Orientation::North);
        assert_eq!(Attributes::new().orientation(), Orientation::North);
    }

    #[test]
    fn unknown_orientation_falls_back_to_north() {
        assert_eq!(Orientation::from_index(8), Orientation::North);
        assert_eq!(Orientation::from_index(usize::MAX), Orientation::North);
        assert_eq!(Orientation::from_name("up-ish"), Orientation::North);
        assert_eq!(Orientation::from_name(""), Orientation::North);
    }

    #[test]
    fn orientation_names_parse() {
        assert_eq!(Orientation::from_name("NORTH_EAST"), Orientation::NorthEast);
        assert_eq!(Orientation::from_name("south-west"), Orientation::SouthWest);
        assert_eq!(Orientation::from_name("w"), Orientation::West);
        assert_eq!(Orientation::from_name("Se"), Orientation::SouthEast);
    }

    #[test]
    fn orientation_index_round_trips() {
        for (i, o) in Orientation::ALL.iter().enumerate() {
            assert_eq!(o.index(), i);
            assert_eq!(Orientation::from_index(i), *o);
        }
    }

    #[test]
    fn next_and_previous_cycle_all_eight() {
        let mut o = Orientation::North;
        for _ in 0..8 {
            assert_eq!(o.next().previous(), o);
            o = o.next();
        }
        assert_eq!(o, Orientation::North);
        assert_eq!(Orientation::NorthWest.next(), Orientation::North);
        assert_eq!(Orientation::North.previous(), Orientation::NorthWest);
    }

    #[test]
    fn from_direction_sectors() {
        assert_eq!(Orientation::from_direction(dvec2(0.0, 1.0)), Orientation::North);
        assert_eq!(Orientation::from_direction(dvec2(1.0, 1.0)), Orientation::NorthEast);
        assert_eq!(Orientation::from_direction(dvec2(1.0, 0.0)), Orientation::East);
        assert_eq!(Orientation::from_direction(dvec2(1.0, -1.0)), Orientation::SouthEast);
        assert_eq!(Orientation::from_direction(dvec2(0.0, -1.0)), Orientation::South);
        assert_eq!(Orientation::from_direction(dvec2(-1.0, -1.0)), Orientation::SouthWest);
        assert_eq!(Orientation::from_direction(dvec2(-1.0, 0.0)), Orientation::West);
        assert_eq!(Orientation::from_direction(dvec2(-1.0, 1.0)), Orientation::NorthWest);
        assert_eq!(Orientation::from_direction(DVec2::ZERO), Orientation::North);
    }

    #[test]
    fn screen_direction_flips_y_and_normalizes_aspect() {
        let center = dvec2(10.0, 5.0);
        let half = dvec2(10.0, 5.0);
        // Screen up is north
        assert_eq!(Orientation::from_screen_direction(center, dvec2(10.0, 0.0), half), Orientation::North);
        // The top-right corner of a wide box is north-east, not east
        assert_eq!(Orientation::from_screen_direction(center, dvec2(20.0, 0.0), half), Orientation::NorthEast);
        assert_eq!(Orientation::from_screen_direction(center, dvec2(0.0, 10.0), half), Orientation::SouthWest);
    }

    // ==================== Store tests ====================

    #[test]
    fn every_key_has_a_default() {
        let attrs = Attributes::new();
        for key in AttributeKey::ALL {
            assert_eq!(attrs.get(*key), key.default_value());
            assert_eq!(attrs.get(*key).key(), *key);
            assert!(!attrs.is_set(*key));
        }
    }

    #[test]
    fn documented_defaults() {
        let attrs = Attributes::new();
        assert_eq!(attrs.stroke_color(), Some(Color::black()));
        assert_eq!(attrs.fill_color(), Some(Color::white()));
        assert_eq!(attrs.stroke_width(), 1.0);
        assert_eq!(attrs.stroke_placement(), StrokePlacement::Center);
        assert_eq!(attrs.stroke_join(), StrokeJoin::Miter);
        assert_eq!(attrs.stroke_miter_limit(), 3.0);
        assert_eq!(attrs.stroke_type(), StrokeType::Basic);
        assert_eq!(attrs.fill_under_stroke(), FillUnderStroke::Center);
        assert!(!attrs.stroke_pixel_sized());
    }

    #[test]
    fn set_replaces_and_reset_restores_default() {
        let mut attrs = Attributes::new();
        assert_eq!(attrs.set(AttributeValue::StrokeWidth(2.5)), Ok(None));
        assert_eq!(attrs.stroke_width(), 2.5);
        assert_eq!(
            attrs.set(AttributeValue::StrokeWidth(4.0)),
            Ok(Some(AttributeValue::StrokeWidth(2.5)))
        );
        assert!(attrs.is_set(AttributeKey::StrokeWidth));
        assert_eq!(attrs.reset(AttributeKey::StrokeWidth), Some(AttributeValue::StrokeWidth(4.0)));
        assert_eq!(attrs.stroke_width(), 1.0);
    }

    #[test]
    fn stroke_color_can_be_cleared() {
        let attrs = Attributes::new().with(AttributeValue::StrokeColor(None)).unwrap();
        assert!(!attrs.has_stroke());
        assert!(attrs.is_set(AttributeKey::StrokeColor));
    }

    #[test]
    fn out_of_domain_values_are_rejected() {
        let mut attrs = Attributes::new();
        assert!(matches!(
            attrs.set(AttributeValue::StrokeWidth(-1.0)),
            Err(AttributeError::InvalidStrokeWidth { source: NumericError::Negative, .. })
        ));
        assert!(matches!(
            attrs.set(AttributeValue::StrokeWidth(f64::NAN)),
            Err(AttributeError::InvalidStrokeWidth { source: NumericError::NaN, .. })
        ));
        assert_eq!(
            attrs.set(AttributeValue::StrokeMiterLimit(0.5)),
            Err(AttributeError::MiterLimitTooSmall { value: 0.5 })
        );
        assert!(attrs.set(AttributeValue::StrokeMiterLimit(f64::NAN)).is_err());
        assert!(attrs.set(AttributeValue::StrokeInnerWidthFactor(f64::INFINITY)).is_err());
        // Nothing was stored
        assert_eq!(attrs.iter().count(), 0);
        assert_eq!(attrs.set(AttributeValue::StrokeMiterLimit(1.0)), Ok(None));
    }
}
