#![deny(clippy::all)]

use clap::{App, Arg};
use nalgebra::Point3;
use prism_optics::{angle_between, PrismConfiguration, Setup};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SetupFile {
    ray_start: Point3<f64>,
    ray_end: Point3<f64>,
    prism: PrismConfiguration,
}

fn main() {
    let matches = App::new("prism calculator")
        .about("Solves wedge prism face orientations for a ray and a target")
        .arg(
            Arg::with_name("setup")
                .index(1)
                .required(true)
                .takes_value(true)
                .help("input setup as a json file"),
        )
        .arg(
            Arg::with_name("emergence-length")
                .short("e")
                .long("emergence-length")
                .takes_value(true)
                .help(
                    "Retrace the solved prism and place the focal point this\n\
                     far past the exit face",
                ),
        )
        .get_matches();

    let setup_path = Path::new(matches.value_of("setup").unwrap());
    let setup_file = File::open(setup_path).expect("file not found");
    let setup_file: SetupFile =
        serde_json::from_reader(setup_file).expect("failed to parse setup");

    let setup = Setup::design(setup_file.ray_start, setup_file.ray_end, &setup_file.prism)
        .expect("failed to solve prism setup");

    let setup = match matches.value_of("emergence-length") {
        Some(length) => {
            let length: f64 = length.parse().expect("emergence length must be a number");
            Setup::trace(setup.prism.clone(), setup.incidence_ray, length)
                .expect("failed to retrace solved prism")
        }
        None => setup,
    };

    println!(
        "first face   pivot {:.4} normal {:.4}",
        setup.prism.first_face.pivot, setup.prism.first_face.normal
    );
    println!(
        "second face  pivot {:.4} normal {:.4}",
        setup.prism.second_face.pivot, setup.prism.second_face.normal
    );

    // wedge tilt of each face, measured against the prism axis
    let axis = setup.prism.direction();
    println!(
        "face angles  first {:+.4} degrees, second {:+.4} degrees",
        angle_between(&axis, &setup.prism.first_face.normal).to_degrees(),
        angle_between(&-axis, &setup.prism.second_face.normal).to_degrees()
    );

    if let Some((entry, exit)) = setup.prism.cross_section_centroids() {
        println!("outline mid  entry {:.4} exit {:.4}", entry, exit);
    }

    println!(
        "entry hit    {:.4} -> internal direction {:.4}",
        setup.refraction_ray.origin, setup.refraction_ray.direction
    );
    println!(
        "exit hit     {:.4} -> emergent direction {:.4}",
        setup.emergence_ray.origin, setup.emergence_ray.direction
    );
    println!("focal point  {:.4}", setup.focal_point);
    println!(
        "deviation    {:.4} degrees",
        setup.deviation_angle().to_degrees()
    );
}
