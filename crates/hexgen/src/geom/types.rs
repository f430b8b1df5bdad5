//! Sector and limit-mode enums plus geometry tolerances.

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Slack for point-in-hexagon checks.
    pub eps_contain: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps_contain: 1e-9 }
    }
}

/// One of the three rhombi that partition a hexagon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sector {
    Zero,
    One,
    Two,
}

impl Sector {
    pub const ALL: [Sector; 3] = [Sector::Zero, Sector::One, Sector::Two];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Sector::Zero => 0,
            Sector::One => 1,
            Sector::Two => 2,
        }
    }

    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Sector whose first basis vector is this sector's second one.
    #[inline]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % 3]
    }
}

/// Half-plane restriction applied to sector 1, the rhombus that straddles the
/// vertical bisector of the hexagon.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LimitMode {
    /// Code 0: either side.
    #[default]
    Unrestricted,
    /// Code 1: `x - center.x <= 0`.
    Negative,
    /// Code 2: `x - center.x >= 0`.
    NonNegative,
}

impl LimitMode {
    #[inline]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Unrestricted),
            1 => Some(Self::Negative),
            2 => Some(Self::NonNegative),
            _ => None,
        }
    }

    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Self::Unrestricted => 0,
            Self::Negative => 1,
            Self::NonNegative => 2,
        }
    }

    /// Fold an x offset (relative to the hexagon center) onto the allowed side.
    #[inline]
    pub fn apply(self, dx: f64) -> f64 {
        match self {
            Self::Unrestricted => dx,
            Self::Negative => -dx.abs(),
            Self::NonNegative => dx.abs(),
        }
    }
}
