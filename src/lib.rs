//! Lumapath path tracer
//!
//! An offline CPU renderer: spheres (static or moving linearly over the
//! shutter interval), a small set of scattering/emissive materials, a
//! thin-lens camera with anti-aliasing, depth of field and motion blur, and
//! a row-banded parallel render loop. Output is a plain-text PPM pixel
//! stream or a PNG file.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod aabb;
pub mod camera;
pub mod hittable;
pub mod interval;
pub mod material;
pub mod output;
pub mod random;
pub mod ray;
pub mod sphere;
