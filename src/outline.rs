use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

use bevy::{
    prelude::{Component, GlobalTransform, Vec2, Vec3},
    reflect::Reflect,
};
use bytemuck::{Pod, Zeroable};

/// Local rectangle covered by a sprite light's cookie.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Reflect)]
pub struct SpriteBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl SpriteBounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Corners in the order bottom-left, bottom-right, top-right, top-left.
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.min.x, self.min.y),
            Vec2::new(self.max.x, self.min.y),
            Vec2::new(self.max.x, self.max.y),
            Vec2::new(self.min.x, self.max.y),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    Parametric,
    Freeform(Vec<Vec2>),
    Sprite(SpriteBounds),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShapeParameters {
    pub kind: ShapeKind,
    pub radius: f32,
    pub sides: u32,
    pub angle_offset_deg: f32,
    pub falloff_size: f32,
    pub falloff_offset: Vec2,
}

/// Closed polygon; the last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Outline {
    pub points: Vec<Vec2>,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct OutlineVertex {
    pub position: [f32; 3],
}

impl Outline {
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new(self.points.iter().map(|p| *p + offset).collect())
    }

    pub fn to_world(&self, transform: &GlobalTransform) -> Vec<Vec3> {
        self.points
            .iter()
            .map(|p| transform.transform_point(p.extend(0.0)))
            .collect()
    }

    /// Vertices for a line-strip draw, with the first vertex repeated at the
    /// end to close the loop.
    pub fn line_strip(&self) -> Vec<OutlineVertex> {
        let mut vertices: Vec<OutlineVertex> = self
            .points
            .iter()
            .map(|p| OutlineVertex {
                position: [p.x, p.y, 0.0],
            })
            .collect();
        if let Some(first) = vertices.first().copied() {
            vertices.push(first);
        }
        vertices
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LightOutlines {
    pub main: Outline,
    pub falloff: Option<Outline>,
}

/// Computes the falloff outline of an arbitrary freeform path.
pub trait FalloffShape: Send + Sync + 'static {
    fn falloff_shape(&self, path: &[Vec2], falloff_size: f32) -> Vec<Vec2>;
}

/// Pushes every point outward along its direction from the light origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct RadialFalloff;

impl FalloffShape for RadialFalloff {
    fn falloff_shape(&self, path: &[Vec2], falloff_size: f32) -> Vec<Vec2> {
        path.iter()
            .map(|p| push_out(*p, falloff_size))
            .collect()
    }
}

fn push_out(point: Vec2, falloff_size: f32) -> Vec2 {
    point + falloff_size * point.normalize_or_zero()
}

pub fn generate_outline(params: &ShapeParameters, falloff: &dyn FalloffShape) -> LightOutlines {
    match &params.kind {
        ShapeKind::Parametric => parametric_outline(params),
        ShapeKind::Freeform(path) => LightOutlines {
            main: Outline::new(path.clone()),
            falloff: Some(Outline::new(
                falloff.falloff_shape(path, params.falloff_size),
            )),
        },
        ShapeKind::Sprite(bounds) => LightOutlines {
            main: Outline::new(bounds.corners().to_vec()),
            falloff: None,
        },
    }
}

fn parametric_outline(params: &ShapeParameters) -> LightOutlines {
    let sides = if params.sides < 3 { 4 } else { params.sides };
    let angle_offset = params.angle_offset_deg.to_radians();
    // four sides stay axis aligned instead of standing on a vertex
    let base = if sides == 4 {
        FRAC_PI_4 + angle_offset
    } else {
        FRAC_PI_2 + angle_offset
    };
    let step = TAU / sides as f32;

    let main: Vec<Vec2> = (0..sides)
        .map(|i| {
            let angle = base + i as f32 * step;
            Vec2::new(params.radius * angle.cos(), params.radius * angle.sin())
        })
        .collect();
    let falloff = main
        .iter()
        .map(|v| push_out(*v, params.falloff_size) + params.falloff_offset)
        .collect();

    LightOutlines {
        main: Outline::new(main),
        falloff: Some(Outline::new(falloff)),
    }
}
