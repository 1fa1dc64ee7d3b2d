use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Middlegame (mg) and endgame (eg) value pair, blended by game phase.
///
/// <https://www.chessprogramming.org/Tapered_Eval>
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Score {
    pub mg: i16,
    pub eg: i16,
}

impl Score {
    pub const ZERO: Score = Score { mg: 0, eg: 0 };

    #[inline(always)]
    pub const fn new(mg: i16, eg: i16) -> Self {
        Self { mg, eg }
    }

    /// Interpolates between mg and eg (1.0 = opening, 0.0 = endgame).
    #[inline(always)]
    pub fn taper(self, phase: f32) -> i16 {
        let mg = self.mg as f32;
        let eg = self.eg as f32;
        ((mg * phase) + (eg * (1.0 - phase))).round() as i16
    }
}

impl Add for Score {
    type Output = Score;

    #[inline(always)]
    fn add(self, rhs: Score) -> Score {
        Score::new(self.mg + rhs.mg, self.eg + rhs.eg)
    }
}

impl Sub for Score {
    type Output = Score;

    #[inline(always)]
    fn sub(self, rhs: Score) -> Score {
        Score::new(self.mg - rhs.mg, self.eg - rhs.eg)
    }
}

impl Neg for Score {
    type Output = Score;

    #[inline(always)]
    fn neg(self) -> Score {
        Score::new(-self.mg, -self.eg)
    }
}

impl AddAssign for Score {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Score) {
        *self = *self + rhs;
    }
}

impl SubAssign for Score {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Score) {
        *self = *self - rhs;
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.mg, self.eg)
    }
}
