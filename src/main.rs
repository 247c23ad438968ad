use anyhow::{bail, Result};
use clap::Parser;
use glam::Vec3A;
use log::info;
use rand::SeedableRng;
use std::fs::File;
use std::io::BufWriter;

mod cli;
mod logger;

use cli::{Args, ScenePreset};
use logger::init_logger;
use lumapath::camera::{Background, Camera};
use lumapath::hittable::HittableList;
use lumapath::material::{Color, MaterialType};
use lumapath::output::{save_image_as_png, write_ppm};
use lumapath::random::{self, DefaultRng};
use lumapath::sphere::Sphere;

/// Book-cover scene: a ground plane, a grid of random small spheres (the
/// diffuse ones bouncing upward during the shutter interval) and three large
/// feature spheres.
fn bouncing_spheres(rng: &mut DefaultRng) -> (HittableList, Camera) {
    let mut world = HittableList::new();

    let ground_material = MaterialType::Lambertian {
        albedo: Vec3A::new(0.5, 0.5, 0.5),
    };
    world.add(Box::new(Sphere::new(
        Vec3A::new(0.0, -1000.0, 0.0),
        1000.0,
        ground_material,
    )));

    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = random::random_f32(rng);
            let center = Vec3A::new(
                a as f32 + 0.9 * random::random_f32(rng),
                0.2,
                b as f32 + 0.9 * random::random_f32(rng),
            );

            // Don't place spheres too close to the large feature spheres
            if (center - Vec3A::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            if choose_mat < 0.8 {
                // Diffuse spheres bounce upward over the shutter interval
                let albedo = random::random_color(rng) * random::random_color(rng);
                let center1 = center + Vec3A::new(0.0, random::random_f32_range(rng, 0.0, 0.5), 0.0);
                world.add(Box::new(Sphere::new_moving(
                    center,
                    center1,
                    0.2,
                    MaterialType::Lambertian { albedo },
                )));
            } else if choose_mat < 0.95 {
                let albedo = random::random_color_range(rng, 0.5, 1.0);
                let fuzz = random::random_f32_range(rng, 0.0, 0.5);
                world.add(Box::new(Sphere::new(
                    center,
                    0.2,
                    MaterialType::Metal { albedo, fuzz },
                )));
            } else {
                world.add(Box::new(Sphere::new(
                    center,
                    0.2,
                    MaterialType::Dielectric {
                        refraction_index: 1.5,
                    },
                )));
            }
        }
    }

    // Three large feature spheres
    world.add(Box::new(Sphere::new(
        Vec3A::new(0.0, 1.0, 0.0),
        1.0,
        MaterialType::Dielectric {
            refraction_index: 1.5,
        },
    )));
    world.add(Box::new(Sphere::new(
        Vec3A::new(-4.0, 1.0, 0.0),
        1.0,
        MaterialType::Lambertian {
            albedo: Vec3A::new(0.4, 0.2, 0.1),
        },
    )));
    world.add(Box::new(Sphere::new(
        Vec3A::new(4.0, 1.0, 0.0),
        1.0,
        MaterialType::Metal {
            albedo: Vec3A::new(0.7, 0.6, 0.5),
            fuzz: 0.0,
        },
    )));

    let mut camera = Camera::new();
    camera.aspect_ratio = 16.0 / 9.0;
    camera.background = Background::Sky;
    camera.vfov = 20.0;
    camera.lookfrom = Vec3A::new(13.0, 2.0, 3.0);
    camera.lookat = Vec3A::new(0.0, 0.0, 0.0);
    camera.vup = Vec3A::new(0.0, 1.0, 0.0);
    camera.defocus_angle = 0.6;
    camera.focus_dist = 10.0;

    (world, camera)
}

/// A diffuse sphere on a ground plane, lit only by an emissive sphere
/// overhead against a black background.
fn simple_light() -> (HittableList, Camera) {
    let mut world = HittableList::new();

    world.add(Box::new(Sphere::new(
        Vec3A::new(0.0, -1000.0, 0.0),
        1000.0,
        MaterialType::Lambertian {
            albedo: Vec3A::new(0.5, 0.5, 0.5),
        },
    )));
    world.add(Box::new(Sphere::new(
        Vec3A::new(0.0, 2.0, 0.0),
        2.0,
        MaterialType::Lambertian {
            albedo: Vec3A::new(0.4, 0.2, 0.1),
        },
    )));
    world.add(Box::new(Sphere::new(
        Vec3A::new(0.0, 7.0, 0.0),
        2.0,
        MaterialType::DiffuseLight {
            emit: Color::new(4.0, 4.0, 4.0),
        },
    )));

    let mut camera = Camera::new();
    camera.aspect_ratio = 16.0 / 9.0;
    camera.background = Background::Solid(Color::ZERO);
    camera.vfov = 20.0;
    camera.lookfrom = Vec3A::new(26.0, 3.0, 6.0);
    camera.lookat = Vec3A::new(0.0, 2.0, 0.0);
    camera.vup = Vec3A::new(0.0, 1.0, 0.0);
    camera.defocus_angle = 0.0;
    camera.focus_dist = 10.0;

    (world, camera)
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logger(args.debug_level.into());

    // Log application startup with version information
    info!(
        "Lumapath - Git Version {} ({})",
        env!("GIT_HASH"),
        env!("GIT_DATE")
    );

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = DefaultRng::seed_from_u64(seed);

    let (world, mut camera) = match args.scene {
        ScenePreset::BouncingSpheres => bouncing_spheres(&mut rng),
        ScenePreset::SimpleLight => simple_light(),
    };

    camera.image_width = args.width;
    camera.samples_per_pixel = args.samples_per_pixel;
    camera.max_depth = args.max_depth;
    camera.seed = seed;

    info!(
        "Scene: {:?}, image width: {}, samples per pixel: {}, seed: {}",
        args.scene, args.width, args.samples_per_pixel, seed
    );

    let image = camera.render(&world);

    if args.output == "-" {
        let stdout = std::io::stdout();
        write_ppm(&mut stdout.lock(), &image)?;
    } else if args.output.ends_with(".ppm") {
        let mut out = BufWriter::new(File::create(&args.output)?);
        write_ppm(&mut out, &image)?;
        info!("Image saved as {}", args.output);
    } else if args.output.ends_with(".png") {
        save_image_as_png(&image, &args.output);
    } else {
        bail!(
            "unsupported output path '{}': use .ppm, .png or '-' for stdout",
            args.output
        );
    }

    Ok(())
}
