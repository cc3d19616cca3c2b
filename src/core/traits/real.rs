use super::FuzzyEq;

/// Trait representing a real number (e.g. 1.1, -3.5, etc.) that can be fuzzy
/// compared.
///
/// The intersection and construction functions are generic over this trait,
/// it supplies the arithmetic, `abs`, `sqrt`, and comparison operations they
/// require.
pub trait Real: num_traits::real::Real + FuzzyEq + std::default::Default + std::fmt::Debug {
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

impl Real for f32 {
    #[inline]
    fn two() -> Self {
        2.0f32
    }
}

impl Real for f64 {
    #[inline]
    fn two() -> Self {
        2.0f64
    }
}
