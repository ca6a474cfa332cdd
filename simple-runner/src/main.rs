use std::{path::PathBuf, str::FromStr};

use anyhow::{Context, Result};
use clap::Parser;
use image::{Rgb, RgbImage};
use rand::distributions::{Distribution, Uniform};
use rayon::prelude::*;
use raytracer::{
    aggregate::Aggregate,
    camera::{Camera, PixelCoord, ViewportCoord},
    color::{self, Color},
    math::{
        point::Point,
        vec::{RgbAsVec3Ext, Vec3, Vec3AsRgbExt},
    },
    ray::Ray,
    scene::Scene,
    shape::{AxisBox, IntersectionResult, Plane, Sphere},
    utils::{counter::report_counters, timer::timed_scope_log},
};

#[derive(Debug, Clone, Copy)]
struct Dimensions {
    width: u32,
    height: u32,
}

impl FromStr for Dimensions {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (width, height) = s
            .split_once('x')
            .context("expected a dimension in the format `width`x`height`")?;
        Ok(Self {
            width: width.parse()?,
            height: height.parse()?,
        })
    }
}

#[derive(Parser, Debug)]
struct Args {
    /// Screen dimension in format `width`x`height`
    #[arg(short, long, default_value = "800x600")]
    dimensions: Dimensions,

    /// Samples per pixel
    #[arg(long, default_value_t = 16)]
    spp: u32,

    /// Where to write the rendered image
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,
}

/// Background radiance. Stands in for the analytic sky model, which the
/// kernel only ever consumes as a black box.
fn sky(ray: &Ray) -> Color {
    let t = 0.5 * (ray.direction.y + 1.0);
    color::lerp(t, color::WHITE, Rgb([0.4, 0.6, 1.0]))
}

fn demo_scene() -> Scene {
    let mut scene = Scene::default();
    scene.insert_object(AxisBox::new(
        Point::new(-1.7, -1., -4.),
        Point::new(-0.7, 0., -3.),
        color::RED,
    ));
    scene.insert_object(AxisBox::new(
        Point::new(0.6, -1., -3.5),
        Point::new(1.4, -0.2, -2.7),
        color::BLUE,
    ));
    scene.insert_object(Sphere {
        center: Point::new(0., 0.2, -5.),
        radius: 1.,
        color: color::GREEN,
    });
    scene.insert_object(Plane {
        origin: Point::new(0., -1., 0.),
        normal: Vec3::Y,
        color: color::gray(0.5),
    });
    scene
}

fn render_pixel(scene: &Scene, camera: &Camera, coords: PixelCoord, spp: u32) -> Color {
    let pixel_width = 1. / (camera.width as f32 - 1.);
    let pixel_height = 1. / (camera.height as f32 - 1.);
    let distribution_x = Uniform::new(-pixel_width / 2., pixel_width / 2.);
    let distribution_y = Uniform::new(-pixel_height / 2., pixel_height / 2.);

    let mut rng = rand::thread_rng();
    let ViewportCoord { vx, vy } = ViewportCoord::from_pixel_coord(camera, coords);

    let mut accumulated = Vec3::ZERO;
    for _ in 0..spp {
        let ray = camera.ray(
            vx + distribution_x.sample(&mut rng),
            vy + distribution_y.sample(&mut rng),
        );
        let color = match scene.objects.first_hit(ray) {
            IntersectionResult::Intersection(record) => record.local_info.color,
            IntersectionResult::NoIntersection => sky(&ray),
        };
        accumulated += color.vec();
    }

    color::clamp((accumulated / spp as f32).rgb())
}

fn to_rgb8(color: Color) -> Rgb<u8> {
    Rgb(color.0.map(|c| (c * 255.) as u8))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let Dimensions { width, height } = args.dimensions;

    let scene = demo_scene();
    let camera = Camera::new(width, height, f32::to_radians(90.), 1.0, Point::ORIGIN);

    let mut image = RgbImage::new(width, height);
    timed_scope_log("Rendering", || {
        let rows: Vec<Vec<Color>> = (0..height)
            .into_par_iter()
            .map(|y| {
                (0..width)
                    .map(|x| render_pixel(&scene, &camera, PixelCoord { x, y }, args.spp))
                    .collect()
            })
            .collect();

        for (y, row) in rows.into_iter().enumerate() {
            for (x, color) in row.into_iter().enumerate() {
                image.put_pixel(x as u32, y as u32, to_rgb8(color));
            }
        }
    });

    image
        .save(&args.output)
        .with_context(|| format!("could not write the render to {}", args.output.display()))?;
    log::info!("render written to {}", args.output.display());

    report_counters();
    Ok(())
}
