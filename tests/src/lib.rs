use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sliderpath::math::{point, Point};
use sliderpath::path::{ControlPoint, PathType};

/// Size of the playfield the random control points are generated in.
pub const PLAYFIELD: (f64, f64) = (512.0, 384.0);

pub fn random_point(rng: &mut StdRng) -> Point {
    point(
        rng.gen_range(0.0..PLAYFIELD.0),
        rng.gen_range(0.0..PLAYFIELD.1),
    )
}

pub fn random_path_type(rng: &mut StdRng) -> PathType {
    match rng.gen_range(0..5) {
        0 => PathType::Linear,
        1 => PathType::PerfectCurve,
        2 => PathType::Bezier,
        3 => PathType::Catmull,
        _ => PathType::bspline(rng.gen_range(1..5)),
    }
}

/// Generates a control point list with randomly tagged segments.
///
/// The first control point is always tagged. Perfect curves get three control points
/// most of the time so that both the arc and the fallback code paths are exercised.
pub fn random_control_points(rng: &mut StdRng, max_points: usize) -> Vec<ControlPoint> {
    let count = rng.gen_range(2..max_points.max(3));

    let mut control_points = Vec::with_capacity(count);
    let mut segment_len = 0;
    let mut segment_kind = random_path_type(rng);
    control_points.push(ControlPoint::new(random_point(rng), segment_kind));

    for _ in 1..count {
        let wants_arc_end = segment_kind == PathType::PerfectCurve && segment_len == 2;
        if (wants_arc_end && rng.gen_bool(0.8)) || rng.gen_bool(0.15) {
            segment_kind = random_path_type(rng);
            segment_len = 0;
            control_points.push(ControlPoint::new(random_point(rng), segment_kind));
        } else {
            segment_len += 1;
            control_points.push(ControlPoint::untagged(random_point(rng)));
        }
    }

    control_points
}

/// Generates `count` random control point lists from a fixed seed.
pub fn generate_control_points(
    seed: u64,
    count: usize,
    max_points: usize,
) -> Vec<Vec<ControlPoint>> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|_| random_control_points(&mut rng, max_points))
        .collect()
}

/// A few hand-written paths of each kind, similar to what shows up in actual maps.
pub fn typical_control_points() -> Vec<Vec<ControlPoint>> {
    let tagged = |kind: PathType, positions: &[(f64, f64)]| -> Vec<ControlPoint> {
        positions
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| {
                if i == 0 {
                    ControlPoint::new(point(x, y), kind)
                } else {
                    ControlPoint::untagged(point(x, y))
                }
            })
            .collect()
    };

    vec![
        tagged(PathType::Linear, &[(64.0, 192.0), (448.0, 192.0)]),
        tagged(PathType::PerfectCurve, &[(100.0, 300.0), (256.0, 80.0), (412.0, 300.0)]),
        tagged(
            PathType::Bezier,
            &[(32.0, 32.0), (200.0, 350.0), (300.0, 20.0), (480.0, 352.0)],
        ),
        tagged(
            PathType::Bezier,
            &[
                (20.0, 200.0),
                (80.0, 20.0),
                (160.0, 360.0),
                (240.0, 20.0),
                (320.0, 360.0),
                (400.0, 20.0),
                (490.0, 200.0),
            ],
        ),
        tagged(
            PathType::Catmull,
            &[(50.0, 50.0), (150.0, 300.0), (250.0, 60.0), (350.0, 320.0), (450.0, 80.0)],
        ),
        tagged(
            PathType::bspline(3),
            &[
                (40.0, 340.0),
                (90.0, 40.0),
                (180.0, 300.0),
                (260.0, 60.0),
                (340.0, 330.0),
                (420.0, 50.0),
                (470.0, 300.0),
            ],
        ),
    ]
}

#[cfg(test)]
mod invariants {
    use super::*;
    use sliderpath::algorithms::measure::{PathSampler, SampleType};
    use sliderpath::algorithms::walk::{walk_along_path, WalkerEvent};
    use sliderpath::path::{ApproximationOptions, PathBuilder, Segments, SliderPath};

    const SEED: u64 = 0x5eed;
    const NUM_PATHS: usize = 500;

    fn build_all(
        mut expected_length: impl FnMut(&SliderPath) -> Option<f64>,
    ) -> Vec<(SliderPath, SliderPath)> {
        let mut builder = PathBuilder::new(ApproximationOptions::DEFAULT);
        generate_control_points(SEED, NUM_PATHS, 12)
            .iter()
            .map(|control_points| {
                let reference = builder.build(control_points, None).unwrap();
                let path = builder
                    .build(control_points, expected_length(&reference))
                    .unwrap();
                (reference, path)
            })
            .collect()
    }

    fn polyline_length(vertices: &[Point]) -> f64 {
        vertices.windows(2).map(|pair| (pair[1] - pair[0]).length()).sum()
    }

    fn assert_close(a: Point, b: Point, tolerance: f64) {
        assert!((a - b).length() <= tolerance, "{:?} != {:?}", a, b);
    }

    #[test]
    fn lengths_are_monotonic() {
        for (path, _) in build_all(|_| None) {
            let lengths = path.cumulative_lengths();
            assert_eq!(lengths.len(), path.vertices().len());
            assert_eq!(lengths[0], 0.0);
            for pair in lengths.windows(2) {
                assert!(pair[0] <= pair[1]);
            }
            assert_eq!(path.distance(), path.calculated_distance());
        }
    }

    #[test]
    fn endpoints_match_control_points() {
        for (path, _) in build_all(|_| None) {
            let first = path.control_points().first().unwrap().position;
            let last = path.control_points().last().unwrap().position;

            assert_eq!(path.vertices().first(), Some(&first));
            assert_eq!(path.vertices().last(), Some(&last));
            assert_eq!(path.position_at(0.0).unwrap(), first);
            assert_eq!(path.position_at(1.0).unwrap(), last);
            assert_eq!(path.position_at(-1.0).unwrap(), first);
            assert_eq!(path.position_at(2.0).unwrap(), last);
        }
    }

    #[test]
    fn segment_ends_are_sorted() {
        for (path, _) in build_all(|_| None) {
            let ends = path.segment_ends();
            assert_eq!(ends.len(), Segments::new(path.control_points()).count());
            for pair in ends.windows(2) {
                assert!(pair[0] <= pair[1]);
            }
            assert_eq!(ends.last(), Some(&1.0));
        }
    }

    #[test]
    fn sampler_agrees_with_position_at() {
        let mut rng = StdRng::seed_from_u64(SEED + 1);
        for (path, _) in build_all(|_| None) {
            let mut sampler = PathSampler::new(&path, SampleType::Normalized);

            // Sequential queries followed by random ones.
            for i in 0..=50 {
                let progress = i as f64 / 50.0;
                let sample = sampler.sample(progress).unwrap();
                assert_close(sample.position(), path.position_at(progress).unwrap(), 1e-6);
            }
            for _ in 0..50 {
                let progress = rng.gen_range(0.0..1.0);
                let sample = sampler.sample(progress).unwrap();
                assert_close(sample.position(), path.position_at(progress).unwrap(), 1e-6);
            }
        }
    }

    #[test]
    fn shorter_expected_length_truncates() {
        let mut rng = StdRng::seed_from_u64(SEED + 2);
        let factors: Vec<f64> = (0..NUM_PATHS).map(|_| rng.gen_range(0.1..0.9)).collect();
        let mut i = 0;
        let paths = build_all(|reference| {
            i += 1;
            Some(reference.distance() * factors[i - 1])
        });

        for (reference, path) in paths {
            let expected = path.expected_length().unwrap();
            assert_eq!(path.distance(), expected);
            assert_eq!(path.calculated_distance(), reference.distance());

            let measured = polyline_length(path.vertices());
            assert!((measured - expected).abs() <= 1e-6 * expected.max(1.0));

            // The truncated path is a prefix of the full one, except for its last vertex.
            let kept = path.vertices().len() - 1;
            assert_eq!(&path.vertices()[..kept], &reference.vertices()[..kept]);
        }
    }

    #[test]
    fn longer_expected_length_rescales() {
        let paths = build_all(|reference| Some(reference.distance() * 1.5));

        for (reference, path) in paths {
            assert_eq!(path.distance(), path.expected_length().unwrap());
            assert_eq!(path.vertices(), reference.vertices());

            let scale = path.distance() / reference.distance();
            for (a, b) in path.cumulative_lengths().iter().zip(reference.cumulative_lengths()) {
                assert!((a - b * scale).abs() <= 1e-6 * path.distance());
            }

            let mid = reference.position_at(0.5).unwrap();
            assert_close(path.position_at(0.5).unwrap(), mid, 1e-6);
        }
    }

    #[test]
    fn walker_agrees_with_position_at_distance() {
        let paths = build_all(|reference| Some(reference.distance() * 0.75));
        for (path, _) in paths.iter().step_by(10) {
            let mut previous = -1.0;
            walk_along_path(path, 0.0, &mut |event: WalkerEvent| {
                assert!(event.distance > previous);
                previous = event.distance;
                let expected = path.position_at_distance(event.distance).unwrap();
                assert_close(event.position, expected, 1e-6);
                Some(7.5)
            });
        }
    }
}
