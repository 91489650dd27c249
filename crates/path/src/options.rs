/// How perfect curve segments that can't be represented by a circular arc are
/// approximated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum CircleFallback {
    /// Approximate the control points as a single bézier curve.
    Bezier,
    /// Connect the control points with straight lines.
    Linear,
}

impl Default for CircleFallback {
    fn default() -> Self {
        CircleFallback::Bezier
    }
}

/// Parameters of the curve approximations performed by the `PathBuilder`.
///
/// The two tolerances measure different things and are not interchangeable.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct ApproximationOptions {
    /// Bound on the discrete second derivative of the control polygon of a bézier
    /// curve below which the curve is considered flat.
    ///
    /// Default value: `ApproximationOptions::DEFAULT_BEZIER_TOLERANCE`.
    pub bezier_tolerance: f64,

    /// Maximum distance between a circular arc and its chords.
    ///
    /// Default value: `ApproximationOptions::DEFAULT_CIRCLE_TOLERANCE`.
    pub circle_tolerance: f64,

    /// Number of points generated per Catmull-Rom span.
    ///
    /// Default value: `ApproximationOptions::DEFAULT_CATMULL_DETAIL`.
    pub catmull_detail: usize,

    /// Subdivision depth after which a bézier curve is emitted as if it was flat.
    ///
    /// Default value: `ApproximationOptions::DEFAULT_MAX_SUBDIVISION_DEPTH`.
    pub max_subdivision_depth: u32,

    /// Number of flat pieces after which the remaining parts of a bézier curve are
    /// emitted as if they were flat.
    ///
    /// Default value: `ApproximationOptions::DEFAULT_MAX_BEZIER_CURVES`.
    pub max_bezier_curves: usize,

    /// Approximation used for perfect curve segments that can't be represented
    /// by a circular arc.
    ///
    /// Default value: `Bezier`.
    pub circle_fallback: CircleFallback,
}

impl ApproximationOptions {
    /// Default bézier flattening tolerance.
    pub const DEFAULT_BEZIER_TOLERANCE: f64 = 0.25;
    /// Default circular arc flattening tolerance.
    pub const DEFAULT_CIRCLE_TOLERANCE: f64 = 0.1;
    /// Default number of points per Catmull-Rom span.
    pub const DEFAULT_CATMULL_DETAIL: usize = sliderpath_geom::catmull::DEFAULT_DETAIL;
    /// Default maximum bézier subdivision depth.
    pub const DEFAULT_MAX_SUBDIVISION_DEPTH: u32 =
        sliderpath_geom::BezierApproximator::<f64>::DEFAULT_MAX_DEPTH;
    /// Default bound on the number of flat pieces of a bézier curve.
    pub const DEFAULT_MAX_BEZIER_CURVES: usize =
        sliderpath_geom::BezierApproximator::<f64>::DEFAULT_MAX_CURVES;
    /// Default fallback for degenerate perfect curves.
    pub const DEFAULT_CIRCLE_FALLBACK: CircleFallback = CircleFallback::Bezier;

    pub const DEFAULT: Self = ApproximationOptions {
        bezier_tolerance: Self::DEFAULT_BEZIER_TOLERANCE,
        circle_tolerance: Self::DEFAULT_CIRCLE_TOLERANCE,
        catmull_detail: Self::DEFAULT_CATMULL_DETAIL,
        max_subdivision_depth: Self::DEFAULT_MAX_SUBDIVISION_DEPTH,
        max_bezier_curves: Self::DEFAULT_MAX_BEZIER_CURVES,
        circle_fallback: Self::DEFAULT_CIRCLE_FALLBACK,
    };

    /// Default options with both tolerances scaled by the same factor.
    #[inline]
    pub fn scaled_tolerances(factor: f64) -> Self {
        Self::DEFAULT
            .with_bezier_tolerance(Self::DEFAULT_BEZIER_TOLERANCE * factor)
            .with_circle_tolerance(Self::DEFAULT_CIRCLE_TOLERANCE * factor)
    }

    #[inline]
    pub const fn with_bezier_tolerance(mut self, tolerance: f64) -> Self {
        self.bezier_tolerance = tolerance;
        self
    }

    #[inline]
    pub const fn with_circle_tolerance(mut self, tolerance: f64) -> Self {
        self.circle_tolerance = tolerance;
        self
    }

    #[inline]
    pub const fn with_catmull_detail(mut self, detail: usize) -> Self {
        self.catmull_detail = detail;
        self
    }

    #[inline]
    pub const fn with_max_subdivision_depth(mut self, depth: u32) -> Self {
        self.max_subdivision_depth = depth;
        self
    }

    #[inline]
    pub const fn with_max_bezier_curves(mut self, count: usize) -> Self {
        self.max_bezier_curves = count;
        self
    }

    #[inline]
    pub const fn with_circle_fallback(mut self, fallback: CircleFallback) -> Self {
        self.circle_fallback = fallback;
        self
    }
}

impl Default for ApproximationOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[test]
fn default_options() {
    let options = ApproximationOptions::default();
    assert_eq!(options.bezier_tolerance, 0.25);
    assert_eq!(options.circle_tolerance, 0.1);
    assert_eq!(options.catmull_detail, 50);
    assert_eq!(options.max_subdivision_depth, 32);
    assert_eq!(options.max_bezier_curves, 1 << 16);
    assert_eq!(options.circle_fallback, CircleFallback::Bezier);

    let options = ApproximationOptions::scaled_tolerances(2.0)
        .with_circle_fallback(CircleFallback::Linear);
    assert_eq!(options.bezier_tolerance, 0.5);
    assert_eq!(options.circle_tolerance, 0.2);
    assert_eq!(options.circle_fallback, CircleFallback::Linear);
}
