//! Simple Phong tracer example.
//!
//! Renders a few spheres under two lights and saves a PNG.
//!
//! Run with: cargo run --example simple_render

use phong_tracer::{render, Color, RayTracer, Vec3};

fn main() {
    env_logger::init();

    println!("Phong Tracer - Simple Example");
    println!("=============================");

    let mut tracer = RayTracer::new(200, 150);
    build_scene(&mut tracer);
    println!(
        "Scene has {} spheres and {} lights",
        tracer.scene().sphere_count(),
        tracer.scene().light_count()
    );

    // Render row by row, printing progress every 25 rows
    let mut on_row = |j: u32, _row: &[Color]| {
        if (j + 1) % 25 == 0 {
            println!("  row {}/150", j + 1);
        }
    };

    let start = std::time::Instant::now();
    let image = render(&tracer, Some(&mut on_row));
    println!("Rendered in {:?}", start.elapsed());

    // Each traced pixel becomes a 4x4 block
    let filename = "output.png";
    image
        .save_png(filename, 800, 600)
        .expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn build_scene(tracer: &mut RayTracer) {
    let scene = tracer.scene_mut();
    scene.reset();

    scene.set_background(Color::new(0.1, 0.1, 0.15));
    scene.set_ambient(Color::new(0.3, 0.3, 0.3));
    scene.set_fov(60.0);
    scene.set_eye(
        Vec3::new(0.0, 1.0, 4.0), // position
        Vec3::new(0.0, 0.0, -2.0), // look_at
        Vec3::new(0.0, 1.0, 0.0), // up
    );

    scene.add_light(Color::new(0.8, 0.8, 0.8), Vec3::new(5.0, 5.0, 5.0));
    scene.add_light(Color::new(0.2, 0.2, 0.5), Vec3::new(-5.0, 2.0, 0.0));

    // Three spheres in a row
    scene.add_sphere(Vec3::new(-1.5, 0.0, -2.0), 0.75, Color::new(0.9, 0.2, 0.2), 0.3, 0.6, 40.0);
    scene.add_sphere(Vec3::new(0.0, 0.0, -2.5), 0.75, Color::new(0.2, 0.9, 0.2), 0.3, 0.3, 10.0);
    scene.add_sphere(Vec3::new(1.5, 0.0, -3.0), 0.75, Color::new(0.2, 0.2, 0.9), 0.3, 0.9, 100.0);

    // Large ground sphere
    scene.add_sphere(Vec3::new(0.0, -101.0, -3.0), 100.0, Color::new(0.6, 0.6, 0.6), 0.2, 0.0, 1.0);
}
