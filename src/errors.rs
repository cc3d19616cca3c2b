use thiserror::Error;

/// Degenerate input rejected by an intersection or construction function.
///
/// These are the inputs for which the closed form solutions divide by zero.
/// They are reported as errors rather than propagating NaN or infinity into
/// result points. Note "no intersection" is never an error, it is the
/// `NoIntersect` case of the result enums.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum DegenerateError {
    /// Line defined by two coincident points has no direction.
    #[error("line is defined by two coincident points")]
    ZeroLengthLine,
    /// Coincident circle centers leave the similitude axis undefined.
    #[error("circle centers are coincident")]
    CoincidentCenters,
    /// Equal radii place the external similitude point at infinity.
    #[error("circles with equal radii have no external similitude point")]
    EqualRadii,
}
