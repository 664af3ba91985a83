use bevy::{prelude::Resource, render::render_resource::*};

/// How a light operation composites its lights onto the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    Multiply,
    Additive,
    Subtract,
}

impl BlendMode {
    pub fn blend_state(self) -> BlendState {
        match self {
            BlendMode::Multiply => MULTIPLY,
            BlendMode::Additive => ADDITIVE,
            BlendMode::Subtract => SUBTRACT,
        }
    }
}

pub const MULTIPLY: BlendState = BlendState {
    color: BlendComponent {
        src_factor: BlendFactor::SrcAlpha,
        dst_factor: BlendFactor::OneMinusSrcAlpha,
        operation: BlendOperation::Add,
    },
    alpha: BlendComponent::OVER,
};

pub const ADDITIVE: BlendState = BlendState {
    color: BlendComponent {
        src_factor: BlendFactor::One,
        dst_factor: BlendFactor::One,
        operation: BlendOperation::Add,
    },
    alpha: BlendComponent::OVER,
};

pub const SUBTRACT: BlendState = BlendState {
    color: BlendComponent {
        src_factor: BlendFactor::One,
        dst_factor: BlendFactor::One,
        operation: BlendOperation::Subtract,
    },
    alpha: BlendComponent::OVER,
};

/// One slot of the renderer's light operation table. Lights pick a slot by
/// index through `Light2d::light_operation`.
#[derive(Debug, Clone, PartialEq)]
pub struct LightOperation {
    pub name: String,
    pub enabled: bool,
    pub blend_mode: BlendMode,
    pub render_texture_scale: f32,
}

impl LightOperation {
    pub fn new(name: impl Into<String>, blend_mode: BlendMode) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            blend_mode,
            render_texture_scale: 1.0,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Number of placeholder operations offered when no table is configured.
pub const FALLBACK_OPERATION_COUNT: usize = 3;

/// The light operations a host renderer provides. `None` means the host has
/// no renderer data: lights may still pick one of the placeholder slots, but
/// shape lights get no outline until a table with an enabled operation is
/// installed.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct LightOperations {
    table: Option<Vec<LightOperation>>,
}

impl Default for LightOperations {
    fn default() -> Self {
        Self::from_table(vec![
            LightOperation::new("Multiply", BlendMode::Multiply),
            LightOperation::new("Additive", BlendMode::Additive),
            LightOperation::new("Subtract", BlendMode::Subtract),
        ])
    }
}

impl LightOperations {
    pub fn from_table(table: Vec<LightOperation>) -> Self {
        Self { table: Some(table) }
    }

    pub fn unconfigured() -> Self {
        Self { table: None }
    }

    pub fn get(&self, index: usize) -> Option<&LightOperation> {
        self.table.as_ref()?.get(index)
    }

    /// Selectable `(index, name)` pairs: the enabled slots of the table, or
    /// `Type0..Type2` without one.
    pub fn choices(&self) -> Vec<(usize, String)> {
        match &self.table {
            Some(table) => table
                .iter()
                .enumerate()
                .filter(|(_, operation)| operation.enabled)
                .map(|(index, operation)| (index, operation.name.clone()))
                .collect(),
            None => (0..FALLBACK_OPERATION_COUNT)
                .map(|index| (index, format!("Type{}", index)))
                .collect(),
        }
    }

    pub fn is_selectable(&self, index: usize) -> bool {
        match &self.table {
            Some(table) => table.get(index).map_or(false, |operation| operation.enabled),
            None => index < FALLBACK_OPERATION_COUNT,
        }
    }

    /// Shape lights are only editable once some operation is enabled.
    pub fn any_enabled(&self) -> bool {
        self.table
            .as_ref()
            .map_or(false, |table| table.iter().any(|operation| operation.enabled))
    }
}
