pub mod blend_style;
mod light_2d;
pub mod outline;
pub mod render;
pub mod settings;
pub mod shape_path;
pub mod solver;
pub mod sorting_layers;

use bevy::{prelude::*, transform::TransformSystem};

pub use blend_style::{BlendMode, LightOperation, LightOperations};
pub use light_2d::*;
pub use outline::{generate_outline, FalloffShape, LightOutlines, Outline, SpriteBounds};
pub use render::{Light2dFalloff, Light2dOutline, LightHandles, OutlineChanged};
pub use settings::Light2dEditorSettings;
pub use shape_path::{ShapePath, ShapePathError};
pub use sorting_layers::SortingLayerMask;

#[derive(Default)]
pub struct Light2dPlugin;

#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemLabel)]
pub enum Light2dSystem {
    RegenerateOutlines,
    UpdateHandles,
}

impl Plugin for Light2dPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Light2d>()
            .register_type::<ShapePath>()
            .register_type::<SpriteBounds>()
            .init_resource::<Light2dEditorSettings>()
            .init_resource::<Light2dFalloff>()
            .init_resource::<LightOperations>()
            .add_event::<OutlineChanged>()
            .add_system_to_stage(
                CoreStage::PostUpdate,
                render::regenerate_outlines.label(Light2dSystem::RegenerateOutlines),
            )
            .add_system_to_stage(
                CoreStage::PostUpdate,
                render::update_handles
                    .label(Light2dSystem::UpdateHandles)
                    .after(TransformSystem::TransformPropagate),
            );
    }
}
