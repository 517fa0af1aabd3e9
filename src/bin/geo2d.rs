use geoshapes::logging::init_tracing;
use geoshapes::{Rectangle, Triangle};

fn main() {
    init_tracing();

    let rect = Rectangle::new(5.0, 3.0);
    println!("Rectangle area: {}", rect.area());
    println!("Rectangle perimeter: {}", rect.perimeter());

    let tri = Triangle::new(3.0, 4.0, 5.0);
    match tri.area() {
        Ok(area) => println!("Triangle area: {}", area),
        Err(e) => {
            eprintln!("Triangle area failed: {}", e);
            std::process::exit(1);
        }
    }
    println!("Triangle perimeter: {}", tri.perimeter());
}
