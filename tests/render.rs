//! End-to-end render tests on tiny images.

use glam::Vec3A;
use lumapath::camera::{Background, Camera};
use lumapath::hittable::HittableList;
use lumapath::material::{Color, MaterialType};
use lumapath::output::write_ppm;
use lumapath::sphere::Sphere;

fn square_camera(width: u32, samples: u32) -> Camera {
    let mut camera = Camera::new();
    camera.aspect_ratio = 1.0;
    camera.image_width = width;
    camera.samples_per_pixel = samples;
    camera.max_depth = 10;
    camera.vfov = 40.0;
    camera.lookfrom = Vec3A::ZERO;
    camera.lookat = Vec3A::new(0.0, 0.0, -1.0);
    camera.defocus_angle = 0.0;
    camera.seed = 1;
    camera
}

#[test]
fn empty_scene_renders_exactly_the_background() {
    let mut camera = square_camera(8, 1);
    camera.background = Background::Solid(Color::new(0.2, 0.3, 0.4));

    let world = HittableList::new();
    let image = camera.render(&world);

    assert_eq!(image.width(), 8);
    assert_eq!(image.height(), 8);
    for pixel in image.pixels() {
        assert_eq!(pixel.0, [0.2, 0.3, 0.4]);
    }
}

#[test]
fn absorbing_sphere_renders_a_dark_disk() {
    let mut camera = square_camera(21, 4);

    // A black diffuse sphere on the camera axis absorbs all radiance
    let mut world = HittableList::new();
    world.add(Box::new(Sphere::new(
        Vec3A::new(0.0, 0.0, -3.0),
        1.0,
        MaterialType::Lambertian {
            albedo: Color::ZERO,
        },
    )));

    let image = camera.render(&world);

    let center = image.get_pixel(10, 10);
    assert!(center[0] < 1e-6 && center[1] < 1e-6 && center[2] < 1e-6);

    // The corners see past the sphere to the sky gradient
    let corner = image.get_pixel(0, 0);
    assert!(corner[0] > 0.1 && corner[1] > 0.1 && corner[2] > 0.1);
}

#[test]
fn fixed_seed_renders_are_bit_identical() {
    let mut world = HittableList::new();
    world.add(Box::new(Sphere::new(
        Vec3A::new(0.0, 0.0, -3.0),
        1.0,
        MaterialType::Lambertian {
            albedo: Color::new(0.7, 0.3, 0.3),
        },
    )));

    let first = square_camera(16, 2).render(&world);
    let second = square_camera(16, 2).render(&world);
    assert_eq!(first.as_raw(), second.as_raw());
}

#[test]
fn different_seeds_produce_different_images() {
    let world = HittableList::new();

    // Sky gradient varies with the jittered ray direction, so different
    // sample streams must land on different pixel values somewhere.
    let mut camera = square_camera(16, 2);
    camera.seed = 1;
    let first = camera.render(&world);

    let mut camera = square_camera(16, 2);
    camera.seed = 2;
    let second = camera.render(&world);

    assert_ne!(first.as_raw(), second.as_raw());
}

#[test]
fn rendered_image_serializes_to_valid_ppm() {
    let mut camera = square_camera(4, 1);
    camera.background = Background::Solid(Color::new(0.25, 0.25, 0.25));

    let image = camera.render(&HittableList::new());
    let mut out = Vec::new();
    write_ppm(&mut out, &image).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "P3");
    assert_eq!(lines[1], "4 4");
    assert_eq!(lines[2], "255");
    assert_eq!(lines.len(), 3 + 16);
    for line in &lines[3..] {
        for channel in line.split_whitespace() {
            channel.parse::<u8>().unwrap();
        }
    }
    // 0.25 gamma-corrects to 0.5
    assert_eq!(lines[3], "128 128 128");
}
