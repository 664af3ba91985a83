//! Keeps a light's angle and radius pairs ordered and converts dragged handle
//! positions back into angles and radii.
//!
//! Every function here is a pure `(state, value) -> state` step. Out of range
//! values are clamped rather than rejected so that interactive edits always
//! land on a usable state.

use bevy::{log::trace, prelude::Vec2, reflect::Reflect};

pub const MAX_ANGLE: f32 = 360.0;

/// Inner and outer cone angle of a point light, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct LightAngles {
    pub inner: f32,
    pub outer: f32,
}

impl Default for LightAngles {
    fn default() -> Self {
        Self {
            inner: MAX_ANGLE,
            outer: MAX_ANGLE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct LightRadii {
    pub inner: f32,
    pub outer: f32,
}

impl Default for LightRadii {
    fn default() -> Self {
        Self {
            inner: 0.0,
            outer: 1.0,
        }
    }
}

/// Which of the two mirrored angle handles is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleSide {
    Left,
    Right,
}

impl HandleSide {
    pub fn sign(self) -> f32 {
        match self {
            HandleSide::Left => 1.0,
            HandleSide::Right => -1.0,
        }
    }
}

fn clamp_angle(value: f32) -> f32 {
    // max/min instead of clamp so NaN collapses to 0
    value.max(0.0).min(MAX_ANGLE)
}

fn clamp_radius(value: f32) -> f32 {
    value.max(0.0)
}

/// Shrinking the outer angle past the inner one drags the inner angle along.
pub fn set_outer_angle(state: LightAngles, value: f32) -> LightAngles {
    let outer = clamp_angle(value);
    let inner = if outer < state.inner { outer } else { state.inner };
    LightAngles { inner, outer }
}

/// The inner angle never overtakes the outer one.
pub fn set_inner_angle(state: LightAngles, value: f32) -> LightAngles {
    let inner = clamp_angle(value).min(state.outer);
    LightAngles {
        inner,
        outer: state.outer,
    }
}

/// Outer angle edited through its scene handle.
///
/// The inner angle moves by the same delta as the outer one, so the gap
/// between the two cones is kept while dragging.
pub fn drag_outer_angle(state: LightAngles, value: f32) -> LightAngles {
    let outer = clamp_angle(value);
    let delta = outer - state.outer;
    let mut inner = state.inner;
    if delta != 0.0 {
        inner = (inner + delta).max(0.0);
    }
    LightAngles {
        inner: inner.min(outer),
        outer,
    }
}

pub fn drag_inner_angle(state: LightAngles, value: f32) -> LightAngles {
    set_inner_angle(state, value)
}

pub fn set_outer_radius(state: LightRadii, value: f32) -> LightRadii {
    order_radii(state.inner, clamp_radius(value))
}

pub fn set_inner_radius(state: LightRadii, value: f32) -> LightRadii {
    order_radii(clamp_radius(value), state.outer)
}

fn order_radii(inner: f32, outer: f32) -> LightRadii {
    LightRadii {
        inner: inner.min(outer),
        outer: inner.max(outer),
    }
}

/// Angle of a cone whose edge handle was dragged to `handle`.
///
/// The handle sits on the cone edge, half the cone angle away from `up`, so
/// the result is twice the unsigned angle between `up` and the handle
/// direction, rounded to two decimals. When the handle crosses over to the
/// opposite half plane the angle snaps to 0 or 360 depending on which end
/// `previous_angle` was closer to; a 2D slider passing through the point
/// behind the light would otherwise wrap around.
pub fn angle_from_handle_position(
    origin: Vec2,
    up: Vec2,
    right: Vec2,
    side: HandleSide,
    handle: Vec2,
    previous_angle: f32,
) -> f32 {
    let to_handle = handle - origin;
    if to_handle.length_squared() <= f32::EPSILON || up.length_squared() <= f32::EPSILON {
        return clamp_angle(previous_angle);
    }

    let half = up.perp_dot(to_handle).atan2(up.dot(to_handle)).abs();
    let angle = clamp_angle(2.0 * half.to_degrees());
    let angle = (angle * 100.0).round() / 100.0;

    let crossed = (side.sign() * right).dot(origin - handle) < 0.0;
    if crossed {
        let snapped = if previous_angle < 180.0 { 0.0 } else { MAX_ANGLE };
        trace!(
            "angle handle crossed over, snapping {} -> {}",
            angle,
            snapped
        );
        return snapped;
    }
    angle
}

/// Distance from `origin` to a radius handle plus `offset`, which undoes the
/// offset the handle was drawn at.
pub fn radius_from_handle_position(origin: Vec2, handle: Vec2, offset: f32) -> f32 {
    (handle - origin).length() + offset
}

/// Direction the light faces after its outer radius handle was dragged.
pub fn up_from_handle_position(origin: Vec2, handle: Vec2) -> Vec2 {
    let dir = (handle - origin).normalize_or_zero();
    if dir == Vec2::ZERO {
        Vec2::Y
    } else {
        dir
    }
}
