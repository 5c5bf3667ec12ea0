//! Wireframe geometry for the hero backdrop.
//!
//! Building the meshes is done off the UI thread at startup; until the
//! result arrives the hero shows a loading placeholder instead.

use std::f64::consts::TAU;

use tokio::sync::oneshot;
use tracing::{debug, warn};

pub type Vec3 = [f64; 3];

/// A wireframe shape: line segments in model space, plus a world position.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub position: Vec3,
    pub segments: Vec<[Vec3; 2]>,
}

#[derive(Debug, Clone)]
pub struct Scene {
    pub sphere: Mesh,
    pub cube: Mesh,
    pub torus: Mesh,
}

/// Rotation in radians about x, y and z, applied in that order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rotation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Rotation {
    fn plus(self, other: Rotation) -> Rotation {
        Rotation {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

/// Idle bobbing and wobbling applied on top of a mesh's own rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Float {
    pub speed: f64,
    pub rotation_intensity: f64,
    pub float_intensity: f64,
}

impl Float {
    pub const SPHERE: Float = Float::new(1.5, 1.0, 2.0);
    pub const CUBE: Float = Float::new(2.0, 2.0, 1.0);
    pub const TORUS: Float = Float::new(1.8, 1.5, 1.5);

    pub const fn new(speed: f64, rotation_intensity: f64, float_intensity: f64) -> Self {
        Self {
            speed,
            rotation_intensity,
            float_intensity,
        }
    }

    /// Wobble and vertical lift `secs` seconds in.
    pub fn at(&self, secs: f64) -> (Rotation, f64) {
        let t = secs / 4.0 * self.speed;
        let wobble = Rotation {
            x: t.cos() / 8.0 * self.rotation_intensity,
            y: t.sin() / 8.0 * self.rotation_intensity,
            z: t.sin() / 20.0 * self.rotation_intensity,
        };
        (wobble, (t.sin() / 10.0) * self.float_intensity)
    }
}

/// Rotation and lift of one mesh in a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pose {
    pub rotation: Rotation,
    pub lift: f64,
}

/// Approximate height of one terminal row in pixels. Scroll rotation rates
/// are per pixel, so row offsets are scaled up first.
pub const ROW_PIXELS: f64 = 20.0;

/// Poses of sphere, cube and torus. The cube and torus turn with the scroll
/// offset (in rows); `idle` adds the floating motion and is `None` under
/// reduced motion.
pub fn poses(offset: u32, idle: Option<f64>) -> [Pose; 3] {
    let scroll = f64::from(offset) * ROW_PIXELS;
    let driven = [
        Rotation::default(),
        Rotation {
            x: scroll * 0.01,
            y: scroll * 0.01,
            z: 0.0,
        },
        Rotation {
            x: scroll * 0.005,
            y: 0.0,
            z: scroll * 0.01,
        },
    ];
    let floats = [Float::SPHERE, Float::CUBE, Float::TORUS];

    let mut out = [Pose::default(); 3];
    for ((pose, rotation), float) in out.iter_mut().zip(driven).zip(floats) {
        let (wobble, lift) = match idle {
            Some(secs) => float.at(secs),
            None => (Rotation::default(), 0.0),
        };
        *pose = Pose {
            rotation: rotation.plus(wobble),
            lift,
        };
    }
    out
}

/// Camera distance from the origin along +z.
pub const CAMERA_DISTANCE: f64 = 8.0;
/// Vertical field of view in degrees.
pub const CAMERA_FOV: f64 = 75.0;

impl Scene {
    pub fn build() -> Self {
        Self {
            sphere: sphere([-2.0, 0.0, 0.0], 1.0, 12, 16),
            cube: cube([2.0, 0.0, 0.0], 1.5),
            torus: torus([0.0, 2.0, -1.0], 1.0, 0.3, 8, 24),
        }
    }

    pub fn segment_count(&self) -> usize {
        self.sphere.segments.len() + self.cube.segments.len() + self.torus.segments.len()
    }
}

/// Rotate a point about the origin.
pub fn rotate(p: Vec3, r: Rotation) -> Vec3 {
    let [mut x, mut y, mut z] = p;

    let (s, c) = r.x.sin_cos();
    (y, z) = (y * c - z * s, y * s + z * c);

    let (s, c) = r.y.sin_cos();
    (x, z) = (x * c + z * s, -x * s + z * c);

    let (s, c) = r.z.sin_cos();
    (x, y) = (x * c - y * s, x * s + y * c);

    [x, y, z]
}

/// Perspective-project a world point onto the image plane. The result is in
/// units where the visible vertical range is `[-1, 1]`. Points at or behind
/// the camera yield `None`.
pub fn project(p: Vec3) -> Option<(f64, f64)> {
    let depth = CAMERA_DISTANCE - p[2];
    if depth <= 0.1 {
        return None;
    }
    let focal = 1.0 / (CAMERA_FOV.to_radians() / 2.0).tan();
    Some((p[0] * focal / depth, p[1] * focal / depth))
}

/// Transform a mesh's segments into projected 2D lines.
pub fn project_mesh(mesh: &Mesh, pose: Pose) -> Vec<((f64, f64), (f64, f64))> {
    let position = translate(mesh.position, [0.0, pose.lift, 0.0]);
    mesh.segments
        .iter()
        .filter_map(|[a, b]| {
            let a = translate(rotate(*a, pose.rotation), position);
            let b = translate(rotate(*b, pose.rotation), position);
            Some((project(a)?, project(b)?))
        })
        .collect()
}

fn translate(p: Vec3, by: Vec3) -> Vec3 {
    [p[0] + by[0], p[1] + by[1], p[2] + by[2]]
}

fn sphere(position: Vec3, radius: f64, rings: usize, slices: usize) -> Mesh {
    let point = |ring: usize, slice: usize| {
        let theta = std::f64::consts::PI * ring as f64 / rings as f64;
        let phi = TAU * slice as f64 / slices as f64;
        [
            radius * theta.sin() * phi.cos(),
            radius * theta.cos(),
            radius * theta.sin() * phi.sin(),
        ]
    };

    let mut segments = Vec::new();
    for ring in 0..=rings {
        for slice in 0..slices {
            let here = point(ring, slice);
            if ring > 0 && ring < rings {
                segments.push([here, point(ring, (slice + 1) % slices)]);
            }
            if ring < rings {
                segments.push([here, point(ring + 1, slice)]);
            }
        }
    }
    Mesh { position, segments }
}

fn cube(position: Vec3, size: f64) -> Mesh {
    let h = size / 2.0;
    let corner = |i: usize| {
        [
            if i & 1 == 0 { -h } else { h },
            if i & 2 == 0 { -h } else { h },
            if i & 4 == 0 { -h } else { h },
        ]
    };
    let mut segments = Vec::with_capacity(12);
    for i in 0..8 {
        for bit in [1, 2, 4] {
            if i & bit == 0 {
                segments.push([corner(i), corner(i | bit)]);
            }
        }
    }
    Mesh { position, segments }
}

fn torus(position: Vec3, radius: f64, tube: f64, sides: usize, rings: usize) -> Mesh {
    let point = |ring: usize, side: usize| {
        let u = TAU * ring as f64 / rings as f64;
        let v = TAU * side as f64 / sides as f64;
        let r = radius + tube * v.cos();
        [r * u.cos(), r * u.sin(), tube * v.sin()]
    };

    let mut segments = Vec::with_capacity(rings * sides * 2);
    for ring in 0..rings {
        for side in 0..sides {
            let here = point(ring, side);
            segments.push([here, point(ring, (side + 1) % sides)]);
            segments.push([here, point((ring + 1) % rings, side)]);
        }
    }
    Mesh { position, segments }
}

/// Build the scene on a blocking worker. The receiver resolves once; there
/// is no timeout and no way to cancel it.
pub fn spawn_loader() -> oneshot::Receiver<Scene> {
    let (tx, rx) = oneshot::channel();
    tokio::task::spawn_blocking(move || {
        let scene = Scene::build();
        debug!(segments = scene.segment_count(), "scene built");
        if tx.send(scene).is_err() {
            warn!("scene finished after the page was closed");
        }
    });
    rx
}
