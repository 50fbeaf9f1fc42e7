//! Cell colours and the fixed colour cycle.

use std::fmt;

/// The colour of a grid cell.
///
/// Colours form the fixed cycle `Blue → Yellow → Red → Black → Blue`.
/// They double as cell state and as the rule selector for the bot's
/// turning behaviour. The discriminant is the colour's numeric index,
/// which the dash sub-mode uses as a step count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Color {
    /// Index 0. Turn left.
    Blue = 0,
    /// Index 1. Arms the dash sub-mode.
    Yellow = 1,
    /// Index 2. Turn right.
    Red = 2,
    /// Index 3. The unvisited baseline. Turn left.
    #[default]
    Black = 3,
}

impl Color {
    /// All colours in cycle order, starting from [`Color::Blue`].
    pub const ALL: [Color; 4] = [Color::Blue, Color::Yellow, Color::Red, Color::Black];

    /// Number of colours in the cycle.
    pub const COUNT: usize = 4;

    /// The successor of this colour in the cycle.
    ///
    /// `advance` is a bijection of cycle length 4; `Black` wraps to `Blue`.
    ///
    /// # Examples
    ///
    /// ```
    /// use turmite_core::Color;
    ///
    /// assert_eq!(Color::Black.advance(), Color::Blue);
    /// assert_eq!(Color::Blue.advance().advance(), Color::Red);
    /// ```
    pub fn advance(self) -> Color {
        match self {
            Color::Blue => Color::Yellow,
            Color::Yellow => Color::Red,
            Color::Red => Color::Black,
            Color::Black => Color::Blue,
        }
    }

    /// Numeric index of this colour (Blue=0, Yellow=1, Red=2, Black=3).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Look up a colour by numeric index. Returns `None` for indices ≥ 4.
    pub fn from_index(index: u8) -> Option<Color> {
        Color::ALL.get(index as usize).copied()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Red => "red",
            Color::Black => "black",
        };
        f.pad(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn cycle_order() {
        assert_eq!(Color::Blue.advance(), Color::Yellow);
        assert_eq!(Color::Yellow.advance(), Color::Red);
        assert_eq!(Color::Red.advance(), Color::Black);
        assert_eq!(Color::Black.advance(), Color::Blue);
    }

    #[test]
    fn indices_match_discriminants() {
        for (i, c) in Color::ALL.iter().enumerate() {
            assert_eq!(c.index() as usize, i);
            assert_eq!(Color::from_index(i as u8), Some(*c));
        }
        assert_eq!(Color::from_index(4), None);
        assert_eq!(Color::from_index(u8::MAX), None);
    }

    #[test]
    fn default_is_black() {
        assert_eq!(Color::default(), Color::Black);
    }

    #[test]
    fn advance_is_bijection() {
        let mut images: Vec<Color> = Color::ALL.iter().map(|c| c.advance()).collect();
        images.sort();
        assert_eq!(images, Color::ALL.to_vec());
    }

    fn arb_color() -> impl Strategy<Value = Color> {
        prop::sample::select(Color::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn advance_has_period_four(c in arb_color()) {
            prop_assert_eq!(c.advance().advance().advance().advance(), c);
            prop_assert_ne!(c.advance(), c);
            prop_assert_ne!(c.advance().advance(), c);
        }
    }
}
