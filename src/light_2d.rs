use bevy::{
    log::{debug, info},
    prelude::{Color, Component, Vec2},
    reflect::Reflect,
};

use crate::{
    blend_style::LightOperations,
    outline::{ShapeKind, ShapeParameters, SpriteBounds},
    settings::ShapeLimits,
    shape_path::ShapePath,
    solver::{self, LightAngles, LightRadii},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum LightType {
    Parametric,
    Freeform,
    Sprite,
    Point,
    Global,
}

/// What happens where a shape light overlaps other lights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum LightOverlapMode {
    Additive,
    AlphaBlend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum PointLightQuality {
    Fast,
    Accurate,
}

#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct ShapeSettings {
    pub radius: f32,
    pub sides: u32,
    /// Degrees.
    pub angle_offset: f32,
    pub falloff_size: f32,
    pub falloff_offset: Vec2,
}

impl Default for ShapeSettings {
    fn default() -> Self {
        Self {
            radius: 1.0,
            sides: 6,
            angle_offset: 0.0,
            falloff_size: 0.5,
            falloff_offset: Vec2::ZERO,
        }
    }
}

#[derive(Component, Debug, Clone, Reflect)]
pub struct Light2d {
    pub light_type: LightType,
    pub color: Color,
    pub falloff_intensity: f32,
    pub volume_opacity: f32,
    pub angles: LightAngles,
    pub radii: LightRadii,
    pub point_distance: f32,
    pub shape: ShapeSettings,
    /// Index into the [`LightOperations`] table.
    pub light_operation: usize,
    pub overlap_mode: LightOverlapMode,
    /// Draw order among overlapping shape lights.
    pub shape_light_order: i32,
    pub point_light_quality: PointLightQuality,
}

impl Default for Light2d {
    fn default() -> Self {
        Self {
            light_type: LightType::Parametric,
            color: Color::WHITE,
            falloff_intensity: 0.5,
            volume_opacity: 0.0,
            angles: LightAngles::default(),
            radii: LightRadii::default(),
            point_distance: 3.0,
            shape: ShapeSettings::default(),
            light_operation: 0,
            overlap_mode: LightOverlapMode::Additive,
            shape_light_order: 0,
            point_light_quality: PointLightQuality::Fast,
        }
    }
}

impl Light2d {
    pub fn point(angles: LightAngles, radii: LightRadii) -> Self {
        Self {
            light_type: LightType::Point,
            angles,
            radii,
            ..Default::default()
        }
    }

    pub fn parametric(radius: f32, sides: u32) -> Self {
        Self {
            light_type: LightType::Parametric,
            shape: ShapeSettings {
                radius,
                sides,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Switches the light type. Parametric lights start out as hexagons and
    /// freeform lights as quads. Returns true when the outline needs to be
    /// rebuilt.
    pub fn set_light_type(&mut self, light_type: LightType) -> bool {
        if self.light_type == light_type {
            return false;
        }
        match light_type {
            LightType::Parametric => self.shape.sides = 6,
            LightType::Freeform => self.shape.sides = 4,
            _ => {}
        }
        info!("light type {:?} -> {:?}", self.light_type, light_type);
        self.light_type = light_type;
        true
    }

    /// Selects a light operation. Disabled or unknown slots are refused and
    /// leave the current index in place.
    pub fn set_light_operation(&mut self, index: usize, operations: &LightOperations) -> bool {
        if !operations.is_selectable(index) {
            debug!("light operation {} is not selectable", index);
            return false;
        }
        self.light_operation = index;
        true
    }

    pub fn is_shape_light(&self) -> bool {
        matches!(
            self.light_type,
            LightType::Parametric | LightType::Freeform | LightType::Sprite
        )
    }

    pub fn set_inner_angle(&mut self, value: f32) {
        self.angles = solver::set_inner_angle(self.angles, value);
    }

    pub fn set_outer_angle(&mut self, value: f32) {
        self.angles = solver::set_outer_angle(self.angles, value);
    }

    pub fn set_inner_radius(&mut self, value: f32) {
        self.radii = solver::set_inner_radius(self.radii, value);
    }

    pub fn set_outer_radius(&mut self, value: f32) {
        self.radii = solver::set_outer_radius(self.radii, value);
    }

    /// Clamps every parameter into the ranges an inspector would allow.
    pub fn apply_limits(&mut self, limits: &ShapeLimits) {
        self.falloff_intensity = self.falloff_intensity.max(0.0).min(1.0);
        self.volume_opacity = self.volume_opacity.max(0.0).min(1.0);
        self.point_distance = self.point_distance.max(0.0);
        let angles = solver::set_outer_angle(self.angles, self.angles.outer);
        self.angles = solver::set_inner_angle(angles, angles.inner);
        let radii = solver::set_outer_radius(self.radii, self.radii.outer);
        self.radii = solver::set_inner_radius(radii, radii.inner);

        let shape = &mut self.shape;
        shape.radius = shape.radius.max(0.0).min(limits.max_radius);
        shape.sides = shape.sides.max(limits.min_sides).min(limits.max_sides);
        shape.angle_offset = shape.angle_offset.max(0.0).min(limits.max_angle_offset);
        shape.falloff_size = shape.falloff_size.max(0.0).min(limits.max_falloff_size);
    }

    /// Shape the outline generator should build, if this light has one.
    /// Freeform lights need their path and sprite lights their bounds.
    pub fn shape_parameters(
        &self,
        path: Option<&ShapePath>,
        sprite: Option<&SpriteBounds>,
    ) -> Option<ShapeParameters> {
        let kind = match self.light_type {
            LightType::Parametric => ShapeKind::Parametric,
            LightType::Freeform => ShapeKind::Freeform(path?.points().to_vec()),
            LightType::Sprite => ShapeKind::Sprite(*sprite?),
            LightType::Point | LightType::Global => return None,
        };
        Some(ShapeParameters {
            kind,
            radius: self.shape.radius,
            sides: self.shape.sides,
            angle_offset_deg: self.shape.angle_offset,
            falloff_size: self.shape.falloff_size,
            falloff_offset: self.shape.falloff_offset,
        })
    }
}
