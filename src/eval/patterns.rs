//! Line scores for evaluation
//!
//! These constants are the tuning weights that make the search prefer
//! open threats over blocked ones and prioritize longer runs
//! super-linearly. A run with both ends blocked is worthless short of
//! five.

/// Scores per run length, split by open and half-open
pub struct LineScore;

impl LineScore {
    /// Five in a row - a win, scored the same with one end blocked
    pub const FIVE: i32 = 100_000;
    /// Open four: extends to five on either end
    pub const OPEN_FOUR: i32 = 10_000;
    /// Four with one end blocked
    pub const CLOSED_FOUR: i32 = 1_000;
    /// Open three
    pub const OPEN_THREE: i32 = 1_000;
    /// Three with one end blocked
    pub const CLOSED_THREE: i32 = 100;
    /// Open two
    pub const OPEN_TWO: i32 = 100;
    /// Two with one end blocked
    pub const CLOSED_TWO: i32 = 10;
    /// Lone stone with both ends open
    pub const OPEN_ONE: i32 = 10;
    /// Lone stone with one end blocked
    pub const CLOSED_ONE: i32 = 1;
}

/// Score a run of `count` contiguous stones with `blocked` ends (0-2).
///
/// Blocked means the cell past that end of the run is an opponent stone
/// or the board edge.
pub fn line_score(count: i32, blocked: u8) -> i32 {
    if blocked >= 2 {
        return 0;
    }
    let open = blocked == 0;
    match count {
        5.. => LineScore::FIVE,
        4 => {
            if open {
                LineScore::OPEN_FOUR
            } else {
                LineScore::CLOSED_FOUR
            }
        }
        3 => {
            if open {
                LineScore::OPEN_THREE
            } else {
                LineScore::CLOSED_THREE
            }
        }
        2 => {
            if open {
                LineScore::OPEN_TWO
            } else {
                LineScore::CLOSED_TWO
            }
        }
        1 => {
            if open {
                LineScore::OPEN_ONE
            } else {
                LineScore::CLOSED_ONE
            }
        }
        _ => 0,
    }
}
