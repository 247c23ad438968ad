//! Camera for ray generation and scene rendering.
//!
//! The camera owns the whole render pass: it derives the viewport geometry
//! from its configuration, generates jittered per-pixel rays, runs the
//! recursive light-transport integrator and drives the parallel row-banded
//! execution into a shared image buffer.

use std::ops::Range;
use std::time::Instant;

use glam::Vec3A;
use image::{ImageBuffer, Rgb};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::SeedableRng;

use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::material::Color;
use crate::random::{self, DefaultRng};
use crate::ray::Ray;

/// What a ray that escapes the scene contributes.
#[derive(Debug, Clone, Copy)]
pub enum Background {
    /// Vertical white-to-blue gradient keyed on the ray direction.
    Sky,
    /// Constant color field, used for scenes lit by emissive materials.
    Solid(Color),
}

impl Default for Background {
    fn default() -> Self {
        Background::Sky
    }
}

impl Background {
    /// Radiance contributed by a ray that hits nothing.
    pub fn sample(&self, r: &Ray) -> Color {
        match *self {
            Background::Sky => {
                let unit_direction = r.direction.normalize();
                // Y = -1 (down) gives a = 0, Y = 1 (up) gives a = 1
                let a = 0.5 * (unit_direction.y + 1.0);
                (1.0 - a) * Color::new(1.0, 1.0, 1.0) + a * Color::new(0.5, 0.7, 1.0)
            }
            Background::Solid(color) => color,
        }
    }
}

/// Camera for ray generation and scene rendering.
///
/// Uses a thin-lens camera model with anti-aliasing via multi-sampling,
/// depth-of-field via defocus-disk sampling, and motion blur via per-ray
/// shutter times. One camera instance performs one render pass per
/// configuration.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Ratio of image width over height
    pub aspect_ratio: f32,
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Number of random samples for each pixel (for anti-aliasing)
    pub samples_per_pixel: u32,
    /// Maximum number of ray bounces (recursion depth limit)
    pub max_depth: u32,
    /// Radiance for rays that escape the scene
    pub background: Background,
    /// Vertical field of view in degrees
    pub vfov: f32,
    /// Point camera is looking from (camera position)
    pub lookfrom: Vec3A,
    /// Point camera is looking at (look target)
    pub lookat: Vec3A,
    /// Camera-relative "up" direction vector
    pub vup: Vec3A,
    /// Variation angle of rays through each pixel (defocus blur control)
    pub defocus_angle: f32,
    /// Distance from camera lookfrom point to plane of perfect focus
    pub focus_dist: f32,
    /// Base RNG seed; each render worker derives its own stream from it
    pub seed: u64,

    /// Rendered image height, derived from width and aspect ratio
    image_height: u32,
    /// Camera position in world space (same as lookfrom)
    center: Vec3A,
    /// World position of the top-left pixel (pixel 0,0)
    pixel00_loc: Vec3A,
    /// Offset vector from pixel to pixel horizontally (right direction)
    pixel_delta_u: Vec3A,
    /// Offset vector from pixel to pixel vertically (down direction)
    pixel_delta_v: Vec3A,
    /// Color scale factor for a sum of pixel samples (1.0 / samples_per_pixel)
    pixel_samples_scale: f32,
    /// Camera frame basis vector pointing right (u)
    u: Vec3A,
    /// Camera frame basis vector pointing up (v)
    v: Vec3A,
    /// Camera frame basis vector pointing opposite view direction (w)
    w: Vec3A,
    /// Defocus disk horizontal radius vector
    defocus_disk_u: Vec3A,
    /// Defocus disk vertical radius vector
    defocus_disk_v: Vec3A,
    /// Flag to track whether camera parameters have been calculated
    initialized: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Creates a new camera with default settings.
    ///
    /// Default: 400 pixels wide at 16:9, 50 samples per pixel, 90° FOV,
    /// sky background, no defocus blur.
    pub fn new() -> Self {
        Self {
            aspect_ratio: 16.0 / 9.0,
            image_width: 400,
            samples_per_pixel: 50,
            max_depth: 50,
            background: Background::Sky,
            vfov: 90.0,
            lookfrom: Vec3A::new(0.0, 0.0, 0.0),
            lookat: Vec3A::new(0.0, 0.0, -1.0),
            vup: Vec3A::new(0.0, 1.0, 0.0),
            defocus_angle: 0.0,
            focus_dist: 10.0,
            seed: 0,
            image_height: 0,
            center: Vec3A::ZERO,
            pixel00_loc: Vec3A::ZERO,
            pixel_delta_u: Vec3A::ZERO,
            pixel_delta_v: Vec3A::ZERO,
            pixel_samples_scale: 0.0,
            u: Vec3A::ZERO,
            v: Vec3A::ZERO,
            w: Vec3A::ZERO,
            defocus_disk_u: Vec3A::ZERO,
            defocus_disk_v: Vec3A::ZERO,
            initialized: false,
        }
    }

    /// Renders the scene using CPU path tracing.
    ///
    /// The image is split into one contiguous row band per worker thread;
    /// each band task owns a disjoint slice of the output buffer, so the
    /// workers never contend on it. The call blocks until every band has
    /// completed.
    ///
    /// Returns an HDR image buffer with linear f32 RGB values.
    pub fn render(&mut self, world: &dyn Hittable) -> ImageBuffer<Rgb<f32>, Vec<f32>> {
        self.initialize();

        let mut image: ImageBuffer<Rgb<f32>, Vec<f32>> =
            ImageBuffer::new(self.image_width, self.image_height);

        let workers = rayon::current_num_threads().max(1);
        let bands = row_bands(self.image_height, workers);

        info!(
            "Rendering {}x{} at {} samples/pixel on {} workers...",
            self.image_width, self.image_height, self.samples_per_pixel, workers
        );
        let render_start = Instant::now();
        let progress = ProgressBar::new(self.image_height as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40} {pos}/{len} rows ({percent}%) ETA: {eta}")
                .unwrap(),
        );

        let cam = &*self;
        let row_len = cam.image_width as usize * 3;
        rayon::scope(|s| {
            let mut rest: &mut [f32] = &mut image;
            for (band_index, rows) in bands.into_iter().enumerate() {
                let (band, tail) = rest.split_at_mut(rows.len() * row_len);
                rest = tail;
                let pb = progress.clone();
                s.spawn(move |_| cam.render_band(world, rows, band, band_index as u64, &pb));
            }
        });

        progress.finish();
        info!("Image rendered in {:.2?}", render_start.elapsed());

        image
    }

    /// Render one contiguous row band into its slice of the output buffer.
    ///
    /// Each band draws from its own RNG stream, seeded from the camera seed
    /// and the band index, so a render is reproducible for a fixed seed and
    /// worker count.
    fn render_band(
        &self,
        world: &dyn Hittable,
        rows: Range<u32>,
        band: &mut [f32],
        band_index: u64,
        progress: &ProgressBar,
    ) {
        let mut rng = DefaultRng::seed_from_u64(self.seed.wrapping_add(band_index));
        let row_len = self.image_width as usize * 3;

        for (j, row) in rows.zip(band.chunks_exact_mut(row_len)) {
            for (i, pixel) in row.chunks_exact_mut(3).enumerate() {
                let mut pixel_color = Color::ZERO;

                // Anti-aliasing via multisampling
                for _sample in 0..self.samples_per_pixel {
                    let r = self.get_ray(i as u32, j, &mut rng);
                    pixel_color += self.ray_color(&r, world, self.max_depth, &mut rng);
                }

                pixel_color *= self.pixel_samples_scale;
                pixel[0] = pixel_color.x;
                pixel[1] = pixel_color.y;
                pixel[2] = pixel_color.z;
            }
            progress.inc(1);
        }
    }

    /// Initialize camera parameters based on current settings.
    ///
    /// Sets up the camera coordinate system and viewport for ray generation.
    /// Called by render(); idempotent.
    fn initialize(&mut self) {
        if self.initialized {
            return;
        }

        assert!(self.image_width > 0, "image_width must be positive");
        assert!(
            self.samples_per_pixel > 0,
            "samples_per_pixel must be positive"
        );

        self.image_height = ((self.image_width as f32 / self.aspect_ratio) as u32).max(1);

        self.pixel_samples_scale = 1.0 / self.samples_per_pixel as f32;

        // Set camera center to lookfrom position
        self.center = self.lookfrom;

        // Determine viewport dimensions
        let theta = self.vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h * self.focus_dist;
        let viewport_width =
            viewport_height * (self.image_width as f32 / self.image_height as f32);

        // Calculate the u,v,w unit basis vectors for the camera coordinate frame
        self.w = (self.lookfrom - self.lookat).normalize(); // Points opposite view direction
        self.u = self.vup.cross(self.w).normalize(); // Points to camera right
        self.v = self.w.cross(self.u); // Points to camera up

        // Calculate the vectors across the horizontal and down the vertical viewport edges
        let viewport_u = viewport_width * self.u;
        let viewport_v = viewport_height * -self.v;

        // Calculate the horizontal and vertical delta vectors from pixel to pixel
        self.pixel_delta_u = viewport_u / self.image_width as f32;
        self.pixel_delta_v = viewport_v / self.image_height as f32;

        // Calculate the location of the upper left pixel
        let viewport_upper_left =
            self.center - (self.focus_dist * self.w) - viewport_u / 2.0 - viewport_v / 2.0;
        self.pixel00_loc = viewport_upper_left + 0.5 * (self.pixel_delta_u + self.pixel_delta_v);

        // Calculate the camera defocus disk basis vectors
        let defocus_radius = self.focus_dist * (self.defocus_angle.to_radians() / 2.0).tan();
        self.defocus_disk_u = self.u * defocus_radius;
        self.defocus_disk_v = self.v * defocus_radius;

        self.initialized = true;
    }

    /// Generate a ray through a pixel with random sampling.
    ///
    /// Jitters within the pixel for anti-aliasing, optionally samples the
    /// defocus disk for depth-of-field blur, and draws a shutter time in
    /// [0, 1) for motion blur.
    fn get_ray(&self, i: u32, j: u32, rng: &mut DefaultRng) -> Ray {
        let offset = self.sample_square(rng);
        let pixel_sample = self.pixel00_loc
            + ((i as f32 + offset.x) * self.pixel_delta_u)
            + ((j as f32 + offset.y) * self.pixel_delta_v);

        let ray_origin = if self.defocus_angle <= 0.0 {
            self.center
        } else {
            self.defocus_disk_sample(rng)
        };
        let ray_direction = pixel_sample - ray_origin;
        let ray_time = random::random_f32(rng);

        Ray::new(ray_origin, ray_direction, ray_time)
    }

    /// Generate random offset within [-0.5, 0.5) square for pixel sampling.
    fn sample_square(&self, rng: &mut DefaultRng) -> Vec3A {
        Vec3A::new(
            random::random_f32(rng) - 0.5,
            random::random_f32(rng) - 0.5,
            0.0,
        )
    }

    /// Sample random point on the defocus disk for depth-of-field blur.
    fn defocus_disk_sample(&self, rng: &mut DefaultRng) -> Vec3A {
        let p = random::random_in_unit_disk(rng);
        self.center + (p.x * self.defocus_disk_u) + (p.y * self.defocus_disk_v)
    }

    /// Trace a ray and compute its color contribution.
    ///
    /// Recursively follows ray bounces through the scene up to the depth
    /// budget, combining emitted and scattered radiance at each bounce.
    fn ray_color(&self, r: &Ray, world: &dyn Hittable, depth: u32, rng: &mut DefaultRng) -> Color {
        // If we've exceeded the ray bounce limit, no more light is gathered
        if depth == 0 {
            return Color::ZERO;
        }

        let mut rec = HitRecord::default();

        // The lower bound stays strictly positive to suppress self-intersection
        if !world.hit(r, Interval::new(0.001, f32::INFINITY), &mut rec) {
            return self.background.sample(r);
        }

        let emitted = rec.material.emitted(rec.u, rec.v, rec.p);

        match rec.material.scatter(r, &rec, rng) {
            Some(scatter) => {
                emitted + scatter.attenuation * self.ray_color(&scatter.ray, world, depth - 1, rng)
            }
            None => emitted,
        }
    }
}

/// Split `image_height` rows into one contiguous band per worker.
///
/// Every band except the last holds `image_height / workers` rows; the final
/// band absorbs the remainder, so the bands cover the full row range exactly
/// once with no gaps or overlaps.
pub fn row_bands(image_height: u32, workers: usize) -> Vec<Range<u32>> {
    let workers = workers.max(1) as u32;
    let band_height = image_height / workers;

    (0..workers)
        .map(|t| {
            let start = t * band_height;
            let end = if t == workers - 1 {
                image_height
            } else {
                start + band_height
            };
            start..end
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hittable::HittableList;
    use crate::material::MaterialType;
    use crate::sphere::Sphere;

    fn test_camera() -> Camera {
        let mut camera = Camera::new();
        camera.aspect_ratio = 1.0;
        camera.image_width = 16;
        camera.samples_per_pixel = 1;
        camera.defocus_angle = 0.0;
        camera.initialize();
        camera
    }

    #[test]
    fn bands_cover_every_row_exactly_once() {
        for image_height in [1u32, 2, 3, 7, 9, 100, 101] {
            for workers in [1usize, 2, 3, 4, 8, 16, 150] {
                let bands = row_bands(image_height, workers);
                assert_eq!(bands.len(), workers.max(1));
                assert_eq!(bands[0].start, 0);
                for pair in bands.windows(2) {
                    assert_eq!(pair[0].end, pair[1].start);
                }
                assert_eq!(bands.last().unwrap().end, image_height);
            }
        }
    }

    #[test]
    fn final_band_absorbs_remainder() {
        let bands = row_bands(10, 4);
        assert_eq!(bands, vec![0..2, 2..4, 4..6, 6..10]);
    }

    #[test]
    fn zero_depth_gathers_no_light() {
        let camera = test_camera();
        let world = HittableList::new();
        let mut rng = DefaultRng::seed_from_u64(0);
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0), 0.0);
        assert_eq!(camera.ray_color(&r, &world, 0, &mut rng), Color::ZERO);

        // Even with geometry in the way
        let mut world = HittableList::new();
        world.add(Box::new(Sphere::new(
            Vec3A::new(0.0, 0.0, -3.0),
            1.0,
            MaterialType::DiffuseLight {
                emit: Color::new(5.0, 5.0, 5.0),
            },
        )));
        assert_eq!(camera.ray_color(&r, &world, 0, &mut rng), Color::ZERO);
    }

    #[test]
    fn miss_returns_background() {
        let mut camera = test_camera();
        camera.background = Background::Solid(Color::new(0.1, 0.2, 0.3));
        let world = HittableList::new();
        let mut rng = DefaultRng::seed_from_u64(0);
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0), 0.0);
        assert_eq!(
            camera.ray_color(&r, &world, 10, &mut rng),
            Color::new(0.1, 0.2, 0.3)
        );
    }

    #[test]
    fn sky_gradient_depends_on_direction() {
        let up = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 1.0, 0.0), 0.0);
        let down = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, -1.0, 0.0), 0.0);
        assert_eq!(Background::Sky.sample(&up), Color::new(0.5, 0.7, 1.0));
        assert_eq!(Background::Sky.sample(&down), Color::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn emissive_hit_adds_emitted_radiance() {
        let mut camera = test_camera();
        camera.background = Background::Solid(Color::ZERO);
        let mut world = HittableList::new();
        world.add(Box::new(Sphere::new(
            Vec3A::new(0.0, 0.0, -3.0),
            1.0,
            MaterialType::DiffuseLight {
                emit: Color::new(4.0, 3.0, 2.0),
            },
        )));
        let mut rng = DefaultRng::seed_from_u64(0);
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0), 0.0);
        assert_eq!(
            camera.ray_color(&r, &world, 10, &mut rng),
            Color::new(4.0, 3.0, 2.0)
        );
    }

    #[test]
    fn image_height_follows_aspect_ratio() {
        let mut camera = Camera::new();
        camera.aspect_ratio = 2.0;
        camera.image_width = 10;
        camera.initialize();
        assert_eq!(camera.image_height, 5);

        // Height never collapses to zero
        let mut camera = Camera::new();
        camera.aspect_ratio = 100.0;
        camera.image_width = 10;
        camera.initialize();
        assert_eq!(camera.image_height, 1);
    }

    #[test]
    fn primary_rays_start_at_center_without_defocus() {
        let camera = test_camera();
        let mut rng = DefaultRng::seed_from_u64(0);
        let r = camera.get_ray(0, 0, &mut rng);
        assert_eq!(r.origin, camera.center);
        assert!((0.0..1.0).contains(&r.time));
    }
}
