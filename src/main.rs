#![allow(non_snake_case)]
#![allow(unused_parens)]

extern crate pretty_env_logger;
#[macro_use] extern crate log;

use ellipsoid_decomp::array_utils::*;
use ellipsoid_decomp::ellipsoid::*;
use ellipsoid_decomp::params::*;
use ellipsoid_decomp::rand_utils::*;

fn main() {
    pretty_env_logger::init();

    let mut rng = rand::thread_rng();

    //C = R diag(major, minor) R^T
    let (sin, cos) = DEMO_ROTATION.sin_cos();
    let a = DEMO_MAJOR_AXIS;
    let b = DEMO_MINOR_AXIS;
    let C = [[a * cos * cos + b * sin * sin, (a - b) * sin * cos],
             [(a - b) * sin * cos, a * sin * sin + b * cos * cos]];

    let ellipsoid = match (Ellipsoid2D::new(C, [0.0f32, 0.0f32])) {
        Result::Ok(ellipsoid) => ellipsoid,
        Result::Err(err) => {
            error!("Could not build ellipsoid: {}", err);
            return;
        }
    };
    info!("Ellipsoid with volume {}:\n{}", ellipsoid.volume(), ellipsoid);

    let obstacles : Vec<Vecf<2>> = (0..DEMO_NUM_OBSTACLES)
                                   .map(|_| gen_box_point::<_, 2>(&mut rng, DEMO_OBSTACLE_HALF_WIDTH))
                                   .collect();

    let inside = ellipsoid.points_inside(&obstacles);
    info!("{} of {} obstacles inside the ellipsoid", inside.len(), obstacles.len());

    match (ellipsoid.closest_hyperplane(&obstacles)) {
        Option::Some(plane) => {
            let closest = plane.point();
            info!("Closest obstacle {:?} at metric distance {}", closest, ellipsoid.dist(&closest));
            info!("Separating plane normal {:?}", plane.normal());
            let cut = obstacles.iter().filter(|pt| plane.signed_dist(pt) >= 0.0f32).count();
            info!("Plane cuts away {} obstacles", cut);
        },
        Option::None => {
            warn!("No separating plane for this obstacle set");
        }
    }

    for (i, pt) in ellipsoid.sample(DEFAULT_CONTOUR_SAMPLES).iter().enumerate() {
        debug!("Contour point {}: {:?}", i, pt);
    }
}
