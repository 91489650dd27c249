use anyhow::{anyhow, bail, Context};
use sliderpath::math::{point, Point};
use sliderpath::path::{ApproximationOptions, PathType};

use std::io;

pub struct PathCmd {
    pub kind: PathType,
    pub positions: Vec<Point>,
    pub expected_length: Option<f64>,
    pub options: ApproximationOptions,
    pub output: Box<dyn io::Write>,
}

pub struct FlattenCmd {
    pub path: PathCmd,
    pub count: bool,
}

pub struct SampleCmd {
    pub path: PathCmd,
    pub steps: usize,
}

/// Parses `linear`, `perfect`, `bezier`, `catmull` or `bspline:<degree>`.
pub fn parse_kind(src: &str) -> anyhow::Result<PathType> {
    Ok(match src {
        "linear" => PathType::Linear,
        "perfect" => PathType::PerfectCurve,
        "bezier" => PathType::Bezier,
        "catmull" => PathType::Catmull,
        _ => match src.strip_prefix("bspline:") {
            Some(degree) => {
                let degree = degree
                    .parse()
                    .with_context(|| format!("Invalid B-spline degree {:?}", degree))?;
                PathType::bspline(degree)
            }
            None => bail!("Unknown path type {:?}", src),
        },
    })
}

/// Parses a position written as `x:y`.
pub fn parse_position(src: &str) -> anyhow::Result<Point> {
    let mut coords = src.splitn(2, ':');
    let (x, y) = match (coords.next(), coords.next()) {
        (Some(x), Some(y)) => (x, y),
        _ => return Err(anyhow!("Expected a position formatted as x:y, got {:?}", src)),
    };

    let x: f64 = x
        .trim()
        .parse()
        .with_context(|| format!("Invalid x coordinate in {:?}", src))?;
    let y: f64 = y
        .trim()
        .parse()
        .with_context(|| format!("Invalid y coordinate in {:?}", src))?;

    Ok(point(x, y))
}

#[test]
fn kinds() {
    assert_eq!(parse_kind("linear").unwrap(), PathType::Linear);
    assert_eq!(parse_kind("perfect").unwrap(), PathType::PerfectCurve);
    assert_eq!(parse_kind("bezier").unwrap(), PathType::Bezier);
    assert_eq!(parse_kind("catmull").unwrap(), PathType::Catmull);
    assert_eq!(parse_kind("bspline:3").unwrap(), PathType::bspline(3));
    assert!(parse_kind("bspline:x").is_err());
    assert!(parse_kind("spiral").is_err());
}

#[test]
fn positions() {
    assert_eq!(parse_position("1.5:-2").unwrap(), point(1.5, -2.0));
    assert_eq!(parse_position(" 3 : 4 ").unwrap(), point(3.0, 4.0));
    assert!(parse_position("3").is_err());
    assert!(parse_position("a:4").is_err());
    assert!(parse_position("1:2:3").is_err());
}
