//! Compass headings and turning.

/// The compass direction the bot faces.
///
/// Headings are ordered clockwise: `North → East → South → West`.
/// Turning right takes the successor, turning left the predecessor,
/// wrapping in both directions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Heading {
    /// Up the screen (y - 1).
    #[default]
    North = 0,
    /// Right (x + 1).
    East = 1,
    /// Down the screen (y + 1).
    South = 2,
    /// Left (x - 1).
    West = 3,
}

impl Heading {
    /// All headings in clockwise order, starting from [`Heading::North`].
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// The heading after a quarter turn clockwise.
    pub fn turn_right(self) -> Heading {
        Heading::ALL[(self as usize + 1) % 4]
    }

    /// The heading after a quarter turn counter-clockwise.
    pub fn turn_left(self) -> Heading {
        Heading::ALL[(self as usize + 3) % 4]
    }

    /// Returns the `(dx, dy)` offset of one step in this heading.
    ///
    /// Uses screen coordinates: the origin is the top-left cell, so
    /// moving north decreases `y`.
    pub fn offset(self) -> (i64, i64) {
        match self {
            Heading::North => (0, -1),
            Heading::East => (1, 0),
            Heading::South => (0, 1),
            Heading::West => (-1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn turn_right_is_clockwise() {
        assert_eq!(Heading::North.turn_right(), Heading::East);
        assert_eq!(Heading::East.turn_right(), Heading::South);
        assert_eq!(Heading::South.turn_right(), Heading::West);
        assert_eq!(Heading::West.turn_right(), Heading::North);
    }

    #[test]
    fn turn_left_wraps_from_north() {
        assert_eq!(Heading::North.turn_left(), Heading::West);
        assert_eq!(Heading::West.turn_left(), Heading::South);
    }

    #[test]
    fn opposite_offsets_cancel() {
        for h in Heading::ALL {
            let (dx, dy) = h.offset();
            let (bx, by) = h.turn_right().turn_right().offset();
            assert_eq!((dx + bx, dy + by), (0, 0));
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }

    fn arb_heading() -> impl Strategy<Value = Heading> {
        prop::sample::select(Heading::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn left_right_are_inverses(h in arb_heading()) {
            prop_assert_eq!(h.turn_left().turn_right(), h);
            prop_assert_eq!(h.turn_right().turn_left(), h);
        }

        #[test]
        fn four_turns_return_home(h in arb_heading()) {
            prop_assert_eq!(h.turn_right().turn_right().turn_right().turn_right(), h);
            prop_assert_eq!(h.turn_left().turn_left().turn_left().turn_left(), h);
        }
    }
}
