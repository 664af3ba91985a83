use bevy::prelude::Resource;

/// Slider ranges an inspector applies to a light's shape parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeLimits {
    pub max_radius: f32,
    pub min_sides: u32,
    pub max_sides: u32,
    pub max_angle_offset: f32,
    pub max_falloff_size: f32,
}

impl Default for ShapeLimits {
    fn default() -> Self {
        Self {
            max_radius: 20.0,
            min_sides: 3,
            max_sides: 24,
            max_angle_offset: 359.0,
            max_falloff_size: 5.0,
        }
    }
}

/// Size of the scene handles, relative to the caller's handle scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GizmoSizing {
    pub global_size: f32,
    pub angle_cap_size: f32,
    pub angle_cap_offset: f32,
    pub angle_cap_offset_secondary: f32,
    pub range_cap_size: f32,
    pub inner_range_cap_size: f32,
    pub arc_segments: u32,
}

impl GizmoSizing {
    pub fn with_global_size(global_size: f32) -> Self {
        Self {
            global_size,
            angle_cap_size: 0.16 * global_size,
            angle_cap_offset: 0.08 * global_size,
            angle_cap_offset_secondary: -0.05,
            range_cap_size: 0.025 * global_size,
            inner_range_cap_size: 0.08 * global_size,
            arc_segments: 32,
        }
    }
}

impl Default for GizmoSizing {
    fn default() -> Self {
        Self::with_global_size(1.2)
    }
}

/// Insert before adding [`crate::Light2dPlugin`] to override the defaults.
#[derive(Resource, Debug, Clone)]
pub struct Light2dEditorSettings {
    pub limits: ShapeLimits,
    pub gizmo: GizmoSizing,
    /// World size of one handle unit; hosts update it as the view zooms.
    pub handle_scale: f32,
}

impl Default for Light2dEditorSettings {
    fn default() -> Self {
        Self {
            limits: ShapeLimits::default(),
            gizmo: GizmoSizing::default(),
            handle_scale: 1.0,
        }
    }
}
