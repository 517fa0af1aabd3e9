use geoshapes::logging::init_tracing;
use geoshapes::{Cuboid, Cylinder, Pyramid, Sphere};

fn main() {
    init_tracing();

    let cuboid = Cuboid::new(3.0, 4.0, 5.0);
    println!("Cuboid volume: {}", cuboid.volume());
    println!("Cuboid surface area: {}", cuboid.surface_area());

    let pyramid = Pyramid::new(6.0, 8.0, 10.0);
    println!("Pyramid volume: {}", pyramid.volume());
    println!("Pyramid surface area: {}", pyramid.surface_area());

    let sphere = Sphere::new(7.0);
    println!("Sphere volume: {}", sphere.volume());
    println!("Sphere surface area: {}", sphere.surface_area());

    let cylinder = Cylinder::new(5.0, 12.0);
    println!("Cylinder volume: {}", cylinder.volume());
    println!("Cylinder surface area: {}", cylinder.surface_area());
}
