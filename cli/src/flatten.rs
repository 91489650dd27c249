use crate::commands::{FlattenCmd, PathCmd, SampleCmd};
use sliderpath::algorithms::measure::sample_uniformly;
use sliderpath::math::Point;
use sliderpath::path::{control_points_from_positions, PathBuilder, SliderPath};

use std::io;

fn build_path(cmd: &PathCmd) -> anyhow::Result<SliderPath> {
    let control_points = control_points_from_positions(cmd.kind, &cmd.positions);
    let path = PathBuilder::new(cmd.options).build(&control_points, cmd.expected_length)?;

    log::info!(
        "{} control points, {} vertices, length {} (measured {})",
        control_points.len(),
        path.vertices().len(),
        path.distance(),
        path.calculated_distance()
    );

    Ok(path)
}

fn write_points(output: &mut dyn io::Write, points: &[Point]) -> io::Result<()> {
    for p in points {
        writeln!(output, "{} {}", p.x, p.y)?;
    }

    Ok(())
}

pub fn flatten(mut cmd: FlattenCmd) -> anyhow::Result<()> {
    let path = build_path(&cmd.path)?;

    if cmd.count {
        writeln!(&mut *cmd.path.output, "vertices: {}", path.vertices().len())?;
        writeln!(&mut *cmd.path.output, "length: {}", path.distance())?;
        return Ok(());
    }

    write_points(&mut *cmd.path.output, path.vertices())?;

    Ok(())
}

pub fn sample(mut cmd: SampleCmd) -> anyhow::Result<()> {
    let path = build_path(&cmd.path)?;
    let positions = sample_uniformly(&path, cmd.steps)?;

    write_points(&mut *cmd.path.output, &positions)?;

    Ok(())
}
