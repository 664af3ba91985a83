//! Where the scene handles of a light sit, and how their dragged positions
//! map back onto the light.

use bevy::prelude::{Component, GlobalTransform, Vec2, Vec3};

use crate::{
    outline::SpriteBounds,
    settings::GizmoSizing,
    solver::{self, HandleSide},
    Light2d,
};

/// Light origin and axes projected onto the XY plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightFrame {
    pub origin: Vec2,
    pub up: Vec2,
    pub right: Vec2,
}

impl LightFrame {
    pub fn from_transform(transform: &GlobalTransform) -> Self {
        let up = transform.up().truncate().normalize_or_zero();
        let right = transform.right().truncate().normalize_or_zero();
        Self {
            origin: transform.translation().truncate(),
            up: if up == Vec2::ZERO { Vec2::Y } else { up },
            right: if right == Vec2::ZERO { Vec2::X } else { right },
        }
    }

    /// Unit direction `degrees` away from up, positive toward right.
    pub fn direction(&self, degrees: f32) -> Vec2 {
        let (sin, cos) = degrees.to_radians().sin_cos();
        self.up * cos + self.right * sin
    }
}

impl Default for LightFrame {
    fn default() -> Self {
        Self {
            origin: Vec2::ZERO,
            up: Vec2::Y,
            right: Vec2::X,
        }
    }
}

/// Position of one edge handle of a cone spanning `angle` degrees.
pub fn angle_handle_position(
    frame: &LightFrame,
    radius: f32,
    offset: f32,
    angle: f32,
    side: HandleSide,
) -> Vec2 {
    let half = angle / 2.0 * -side.sign();
    frame.origin + frame.direction(half) * (radius + offset)
}

/// Arc of `angle` degrees centred on up, as `segments + 1` points.
pub fn radius_arc(frame: &LightFrame, radius: f32, angle: f32, segments: u32) -> Vec<Vec2> {
    let segments = segments.max(1);
    let start = -angle / 2.0;
    let step = angle / segments as f32;
    (0..=segments)
        .map(|i| frame.origin + frame.direction(start + step * i as f32) * radius)
        .collect()
}

/// Corners of a sprite light's bounds in world space.
pub fn sprite_corners(bounds: &SpriteBounds, transform: &GlobalTransform) -> [Vec3; 4] {
    bounds
        .corners()
        .map(|corner| transform.transform_point(corner.extend(0.0)))
}

/// Handles of a point light: two mirrored handles per cone, one handle per
/// radius and the arcs drawn at each radius.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct LightHandles {
    pub frame: LightFrame,
    pub outer_angle: [Vec2; 2],
    pub inner_angle: [Vec2; 2],
    pub outer_radius: Vec2,
    pub inner_radius: Vec2,
    pub outer_arc: Vec<Vec2>,
    pub inner_arc: Vec<Vec2>,
    angle_offset: f32,
    radius_offset: f32,
}

impl LightHandles {
    /// `handle_scale` is the caller's world size of one screen-space handle
    /// unit at the light's position.
    pub fn compute(
        light: &Light2d,
        transform: &GlobalTransform,
        handle_scale: f32,
        sizing: &GizmoSizing,
    ) -> Self {
        let frame = LightFrame::from_transform(transform);
        let angle_offset = handle_scale * sizing.angle_cap_offset;
        let radius_offset = handle_scale * sizing.angle_cap_offset_secondary;
        let angles = light.angles;
        let radii = light.radii;

        let pair = |offset: f32, angle: f32| {
            [
                angle_handle_position(&frame, radii.outer, offset, angle, HandleSide::Left),
                angle_handle_position(&frame, radii.outer, offset, angle, HandleSide::Right),
            ]
        };

        Self {
            frame,
            outer_angle: pair(angle_offset, angles.outer),
            inner_angle: pair(-angle_offset, angles.inner),
            outer_radius: frame.origin + frame.up * (radii.outer - radius_offset),
            inner_radius: frame.origin + frame.up * (radii.inner + radius_offset),
            outer_arc: radius_arc(&frame, radii.outer, angles.outer, sizing.arc_segments),
            inner_arc: radius_arc(&frame, radii.inner, angles.outer, sizing.arc_segments),
            angle_offset,
            radius_offset,
        }
    }

    pub fn angle_from(&self, side: HandleSide, handle: Vec2, previous_angle: f32) -> f32 {
        solver::angle_from_handle_position(
            self.frame.origin,
            self.frame.up,
            self.frame.right,
            side,
            handle,
            previous_angle,
        )
    }

    pub fn outer_radius_from(&self, handle: Vec2) -> f32 {
        solver::radius_from_handle_position(self.frame.origin, handle, self.radius_offset)
    }

    /// Dragging the outer radius handle also turns the light to face it.
    pub fn up_from(&self, handle: Vec2) -> Vec2 {
        solver::up_from_handle_position(self.frame.origin, handle)
    }

    pub fn inner_radius_from(&self, handle: Vec2) -> f32 {
        solver::radius_from_handle_position(self.frame.origin, handle, -self.radius_offset)
    }

    pub fn angle_offset(&self) -> f32 {
        self.angle_offset
    }
}
