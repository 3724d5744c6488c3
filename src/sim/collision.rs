//! Circle-circle contact classification and overlap area
//!
//! Every life form is a disc, so contact reduces to comparing the distance
//! between centers against the sum and difference of the radii.

/// How two discs relate to each other
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Contact {
    /// One disc lies entirely inside the other (includes coincident centers)
    Contained,
    /// The discs share a lens-shaped region
    Overlapping,
    /// No contact
    Separate,
}

/// Classify two discs with centers `distance` apart
#[inline]
pub fn classify(distance: f64, r1: f64, r2: f64) -> Contact {
    if distance <= (r1 - r2).abs() {
        Contact::Contained
    } else if distance <= r1 + r2 {
        Contact::Overlapping
    } else {
        Contact::Separate
    }
}

/// Area of the lens where two circles intersect
///
/// Only meaningful for `|r1 - r2| < d <= r1 + r2`; `classify` returning
/// `Overlapping` guarantees that. Arguments to `acos`/`sqrt` are clamped so
/// rounding at the edges of that range yields 0 instead of NaN.
///
/// See <http://mathworld.wolfram.com/Circle-CircleIntersection.html>
pub fn circle_intersection_area(d: f64, r1: f64, r2: f64) -> f64 {
    debug_assert!(d > 0.0 && r1 > 0.0 && r2 > 0.0, "lens area outside its domain");

    let (d2, r1_2, r2_2) = (d * d, r1 * r1, r2 * r2);
    let alpha = ((d2 + r1_2 - r2_2) / (2.0 * d * r1)).clamp(-1.0, 1.0).acos();
    let beta = ((d2 + r2_2 - r1_2) / (2.0 * d * r2)).clamp(-1.0, 1.0).acos();
    let kite = ((-d + r1 + r2) * (d + r1 - r2) * (d - r1 + r2) * (d + r1 + r2))
        .max(0.0)
        .sqrt();

    (r1_2 * alpha + r2_2 * beta - 0.5 * kite).max(0.0)
}
