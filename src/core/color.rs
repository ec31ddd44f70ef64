//! Side identification and per-side data storage.
//!
//! ## Color
//!
//! The two sides of a duel. Outcomes are always expressed from a fixed
//! red/blue perspective, so `Color` is how callers say "whose side".
//!
//! ## ColorMap
//!
//! Per-side data storage with O(1) access, indexed by `Color`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One side of the duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
}

impl Color {
    /// Both colors, red first.
    pub const BOTH: [Color; 2] = [Color::Red, Color::Blue];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Red => Color::Blue,
            Color::Blue => Color::Red,
        }
    }

    /// Lowercase color name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-side data storage.
///
/// ## Example
///
/// ```
/// use brave_rats::core::{Color, ColorMap};
///
/// let mut points: ColorMap<u32> = ColorMap::with_value(0);
/// points[Color::Blue] += 2;
///
/// assert_eq!(points[Color::Red], 0);
/// assert_eq!(points[Color::Blue], 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    red: T,
    blue: T,
}

impl<T> ColorMap<T> {
    /// Create a new ColorMap with values from a factory function.
    pub fn new(factory: impl Fn(Color) -> T) -> Self {
        Self {
            red: factory(Color::Red),
            blue: factory(Color::Blue),
        }
    }

    /// Create a new ColorMap from red's and blue's values.
    pub const fn from_pair(red: T, blue: T) -> Self {
        Self { red, blue }
    }

    /// Create a new ColorMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            red: value.clone(),
            blue: value,
        }
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, color: Color) -> &T {
        match color {
            Color::Red => &self.red,
            Color::Blue => &self.blue,
        }
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, color: Color) -> &mut T {
        match color {
            Color::Red => &mut self.red,
            Color::Blue => &mut self.blue,
        }
    }

    /// Iterate over (Color, &T) pairs, red first.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        [(Color::Red, &self.red), (Color::Blue, &self.blue)].into_iter()
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        self.get_mut(color)
    }
}
