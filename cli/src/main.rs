extern crate clap;
extern crate sliderpath;

mod commands;
mod flatten;

use clap::*;
use commands::*;
use sliderpath::math::Point;
use sliderpath::path::{ApproximationOptions, PathType};

use std::fs::File;
use std::io::{stdout, Write};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn positions_arg() -> Arg<'static, 'static> {
    Arg::with_name("POSITIONS")
        .value_name("X:Y")
        .help("The positions of the control points. A repeated position starts a new segment")
        .multiple(true)
        .required(true)
}

fn run() -> anyhow::Result<()> {
    let matches = App::new("sliderpath command-line interface")
        .version("0.1")
        .about("Approximates slider paths")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(SubCommand::with_name("flatten")
            .about("Prints the vertices of the approximated path")
            .arg(Arg::with_name("COUNT")
                .short("c")
                .long("count")
                .help("Prints the number of vertices and the length of the path")
            )
            .arg(positions_arg())
        )
        .subcommand(SubCommand::with_name("sample")
            .about("Prints positions evenly spaced along the path")
            .arg(Arg::with_name("STEPS")
                .short("s")
                .long("steps")
                .help("Sets the number of intervals between samples (100 by default)")
                .value_name("STEPS")
                .takes_value(true)
            )
            .arg(positions_arg())
        )
        .arg(Arg::with_name("KIND")
            .short("k")
            .long("kind")
            .help("Sets the path type: linear, perfect, bezier, catmull or bspline:<degree> (bezier by default)")
            .value_name("KIND")
            .takes_value(true)
        )
        .arg(Arg::with_name("LENGTH")
            .short("l")
            .long("length")
            .help("Sets the expected length of the path")
            .value_name("LENGTH")
            .takes_value(true)
        )
        .arg(Arg::with_name("BEZIER_TOLERANCE")
            .long("bezier-tolerance")
            .help("Sets the bézier flattening tolerance (0.25 by default)")
            .value_name("TOLERANCE")
            .takes_value(true)
        )
        .arg(Arg::with_name("ARC_TOLERANCE")
            .long("arc-tolerance")
            .help("Sets the circular arc flattening tolerance (0.1 by default)")
            .value_name("TOLERANCE")
            .takes_value(true)
        )
        .arg(Arg::with_name("OUTPUT")
            .help("Sets the output file to use")
            .value_name("FILE")
            .short("o")
            .long("output")
            .takes_value(true)
            .required(false)
        )
        .get_matches();

    let kind = match matches.value_of("KIND") {
        Some(kind) => parse_kind(kind)?,
        None => PathType::Bezier,
    };

    let expected_length = match matches.value_of("LENGTH") {
        Some(length) => Some(length.parse()?),
        None => None,
    };

    let bezier_tolerance = get_f64(
        &matches,
        "BEZIER_TOLERANCE",
        ApproximationOptions::DEFAULT_BEZIER_TOLERANCE,
    )?;
    let arc_tolerance = get_f64(
        &matches,
        "ARC_TOLERANCE",
        ApproximationOptions::DEFAULT_CIRCLE_TOLERANCE,
    )?;
    let options = ApproximationOptions::DEFAULT
        .with_bezier_tolerance(bezier_tolerance)
        .with_circle_tolerance(arc_tolerance);

    let output: Box<dyn Write> = match matches.value_of("OUTPUT") {
        Some(output_file) => Box::new(File::create(output_file)?),
        None => Box::new(stdout()),
    };

    if let Some(flatten_matches) = matches.subcommand_matches("flatten") {
        let cmd = FlattenCmd {
            path: PathCmd {
                kind,
                positions: get_positions(flatten_matches)?,
                expected_length,
                options,
                output,
            },
            count: flatten_matches.is_present("COUNT"),
        };

        flatten::flatten(cmd)?;
    } else if let Some(sample_matches) = matches.subcommand_matches("sample") {
        let steps = match sample_matches.value_of("STEPS") {
            Some(steps) => steps.parse()?,
            None => 100,
        };
        let cmd = SampleCmd {
            path: PathCmd {
                kind,
                positions: get_positions(sample_matches)?,
                expected_length,
                options,
                output,
            },
            steps,
        };

        flatten::sample(cmd)?;
    }

    Ok(())
}

fn get_f64(matches: &ArgMatches, name: &str, default: f64) -> anyhow::Result<f64> {
    match matches.value_of(name) {
        Some(value) => Ok(value.parse()?),
        None => Ok(default),
    }
}

fn get_positions(matches: &ArgMatches) -> anyhow::Result<Vec<Point>> {
    matches
        .values_of("POSITIONS")
        .into_iter()
        .flatten()
        .map(parse_position)
        .collect()
}
