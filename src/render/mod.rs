pub mod handles;

use bevy::prelude::*;

pub use handles::*;

use crate::{
    blend_style::LightOperations,
    outline::{generate_outline, FalloffShape, LightOutlines, RadialFalloff, SpriteBounds},
    settings::Light2dEditorSettings,
    shape_path::ShapePath,
    Light2d, LightType,
};

/// Last generated outlines of a shape light, in the light's local space.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct Light2dOutline {
    pub outlines: LightOutlines,
}

/// Sent whenever a light's outline was rebuilt or dropped; hosts rebuild the
/// light mesh in response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutlineChanged {
    pub entity: Entity,
}

/// Falloff computation used for freeform lights.
#[derive(Resource)]
pub struct Light2dFalloff(pub Box<dyn FalloffShape>);

impl Default for Light2dFalloff {
    fn default() -> Self {
        Self(Box::new(RadialFalloff))
    }
}

pub fn regenerate_outlines(
    mut commands: Commands,
    mut changed: EventWriter<OutlineChanged>,
    mut previous_len: Local<usize>,
    falloff: Res<Light2dFalloff>,
    operations: Res<LightOperations>,
    removed_paths: RemovedComponents<ShapePath>,
    removed_sprites: RemovedComponents<SpriteBounds>,
    changed_query: Query<
        Entity,
        (
            With<Light2d>,
            Or<(Changed<Light2d>, Changed<ShapePath>, Changed<SpriteBounds>)>,
        ),
    >,
    light_query: Query<(
        &Light2d,
        Option<&ShapePath>,
        Option<&SpriteBounds>,
        Option<&Light2dOutline>,
    )>,
) {
    let mut dirty: Vec<Entity> = changed_query
        .iter()
        .chain(removed_paths.iter())
        .chain(removed_sprites.iter())
        .collect();
    dirty.sort_unstable();
    dirty.dedup();

    let shapes_enabled = operations.any_enabled();
    let mut values = Vec::with_capacity(*previous_len);
    for entity in dirty {
        // despawned, or the light itself went away
        let (light, path, sprite, previous) = match light_query.get(entity) {
            Ok(item) => item,
            Err(_) => continue,
        };
        if light.is_shape_light() && !shapes_enabled {
            trace!("no light operation enabled, skipping {:?}", entity);
            continue;
        }
        match light.shape_parameters(path, sprite) {
            Some(params) => {
                let outlines = generate_outline(&params, falloff.0.as_ref());
                debug!(
                    "rebuilt {:?} outline of {:?} with {} vertices",
                    light.light_type,
                    entity,
                    outlines.main.len()
                );
                values.push((entity, Light2dOutline { outlines }));
                changed.send(OutlineChanged { entity });
            }
            None if previous.is_some() => {
                debug!("dropped outline of {:?}", entity);
                commands.entity(entity).remove::<Light2dOutline>();
                changed.send(OutlineChanged { entity });
            }
            None => {}
        }
    }

    *previous_len = values.len();
    commands.insert_or_spawn_batch(values);
}

/// Keeps the scene handles of point lights in step with the light and its
/// transform.
pub fn update_handles(
    mut commands: Commands,
    settings: Res<Light2dEditorSettings>,
    light_query: Query<
        (Entity, &Light2d, &GlobalTransform, Option<&LightHandles>),
        Or<(Changed<Light2d>, Changed<GlobalTransform>)>,
    >,
) {
    for (entity, light, transform, previous) in light_query.iter() {
        if light.light_type == LightType::Point {
            let handles =
                LightHandles::compute(light, transform, settings.handle_scale, &settings.gizmo);
            commands.entity(entity).insert(handles);
        } else if previous.is_some() {
            commands.entity(entity).remove::<LightHandles>();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        solver::{LightAngles, LightRadii},
        Light2dPlugin,
    };
    use bevy::ecs::event::Events;

    fn app() -> App {
        let mut app = App::new();
        app.add_plugin(Light2dPlugin);
        app
    }

    fn drain_events(app: &mut App) -> Vec<OutlineChanged> {
        let mut events = app.world.resource_mut::<Events<OutlineChanged>>();
        events.drain().collect()
    }

    #[test]
    fn spawned_light_gets_an_outline() {
        let mut app = app();
        let entity = app.world.spawn(Light2d::parametric(1.0, 6)).id();
        app.update();

        let outline = app.world.get::<Light2dOutline>(entity).unwrap();
        assert_eq!(outline.outlines.main.len(), 6);
        assert_eq!(drain_events(&mut app), vec![OutlineChanged { entity }]);

        app.update();
        assert!(drain_events(&mut app).is_empty());
    }

    #[test]
    fn editing_the_light_rebuilds_its_outline() {
        let mut app = app();
        let entity = app.world.spawn(Light2d::parametric(1.0, 6)).id();
        app.update();
        drain_events(&mut app);

        app.world.get_mut::<Light2d>(entity).unwrap().shape.sides = 8;
        app.update();

        let outline = app.world.get::<Light2dOutline>(entity).unwrap();
        assert_eq!(outline.outlines.main.len(), 8);
        assert_eq!(drain_events(&mut app).len(), 1);
    }

    #[test]
    fn freeform_light_follows_its_path() {
        let mut app = app();
        let mut light = Light2d::default();
        light.set_light_type(LightType::Freeform);
        let entity = app.world.spawn((light, ShapePath::default_quad())).id();
        app.update();
        assert_eq!(
            app.world.get::<Light2dOutline>(entity).unwrap().outlines.main.len(),
            4
        );

        app.world
            .get_mut::<ShapePath>(entity)
            .unwrap()
            .insert(4, Vec2::new(0.0, 1.0))
            .unwrap();
        app.update();
        let outline = app.world.get::<Light2dOutline>(entity).unwrap();
        assert_eq!(outline.outlines.main.len(), 5);
        assert_eq!(outline.outlines.falloff.as_ref().map(|f| f.len()), Some(5));
    }

    #[test]
    fn switching_to_point_drops_the_outline() {
        let mut app = app();
        let entity = app
            .world
            .spawn((Light2d::parametric(1.0, 3), GlobalTransform::IDENTITY))
            .id();
        app.update();
        drain_events(&mut app);

        app.world
            .get_mut::<Light2d>(entity)
            .unwrap()
            .set_light_type(LightType::Point);
        app.update();

        assert!(app.world.get::<Light2dOutline>(entity).is_none());
        assert_eq!(drain_events(&mut app), vec![OutlineChanged { entity }]);
        assert!(app.world.get::<LightHandles>(entity).is_some());
    }

    #[test]
    fn removing_the_path_drops_the_outline() {
        let mut app = app();
        let mut light = Light2d::default();
        light.set_light_type(LightType::Freeform);
        let entity = app.world.spawn((light, ShapePath::default_quad())).id();
        app.update();
        drain_events(&mut app);

        app.world.entity_mut(entity).remove::<ShapePath>();
        app.update();
        assert!(app.world.get::<Light2dOutline>(entity).is_none());
        assert_eq!(drain_events(&mut app), vec![OutlineChanged { entity }]);

        app.update();
        assert!(drain_events(&mut app).is_empty());
    }

    #[test]
    fn removing_sprite_bounds_drops_the_outline() {
        let mut app = app();
        let mut light = Light2d::default();
        light.set_light_type(LightType::Sprite);
        let bounds = SpriteBounds::new(Vec2::ZERO, Vec2::ONE);
        let entity = app.world.spawn((light, bounds)).id();
        app.update();
        assert!(app.world.get::<Light2dOutline>(entity).is_some());
        drain_events(&mut app);

        app.world.entity_mut(entity).remove::<SpriteBounds>();
        app.update();
        assert!(app.world.get::<Light2dOutline>(entity).is_none());
        assert_eq!(drain_events(&mut app), vec![OutlineChanged { entity }]);
    }

    #[test]
    fn shape_lights_wait_for_an_enabled_operation() {
        let mut app = App::new();
        app.insert_resource(LightOperations::unconfigured())
            .add_plugin(Light2dPlugin);
        let entity = app.world.spawn(Light2d::parametric(1.0, 5)).id();
        app.update();
        assert!(app.world.get::<Light2dOutline>(entity).is_none());
        assert!(drain_events(&mut app).is_empty());

        app.insert_resource(LightOperations::default());
        app.world.get_mut::<Light2d>(entity).unwrap().shape.radius = 2.0;
        app.update();
        assert_eq!(
            app.world.get::<Light2dOutline>(entity).unwrap().outlines.main.len(),
            5
        );
    }

    #[test]
    fn point_lights_get_handles() {
        let mut app = app();
        let light = Light2d::point(
            LightAngles {
                inner: 90.0,
                outer: 180.0,
            },
            LightRadii {
                inner: 1.0,
                outer: 2.0,
            },
        );
        let entity = app.world.spawn((light, GlobalTransform::IDENTITY)).id();
        app.update();

        let handles = app.world.get::<LightHandles>(entity).unwrap();
        assert_eq!(handles.outer_arc.len(), 33);
        assert!(app.world.get::<Light2dOutline>(entity).is_none());
        assert!(drain_events(&mut app).is_empty());
    }

    #[test]
    fn custom_falloff_is_used_for_freeform_lights() {
        struct Inflate;
        impl FalloffShape for Inflate {
            fn falloff_shape(&self, path: &[Vec2], falloff_size: f32) -> Vec<Vec2> {
                path.iter().map(|p| *p * (1.0 + falloff_size)).collect()
            }
        }

        let mut app = App::new();
        app.insert_resource(Light2dFalloff(Box::new(Inflate)))
            .add_plugin(Light2dPlugin);
        let mut light = Light2d::default();
        light.set_light_type(LightType::Freeform);
        light.shape.falloff_size = 1.0;
        let entity = app
            .world
            .spawn((light, ShapePath::new(vec![Vec2::new(1.0, 0.0)])))
            .id();
        app.update();

        let outline = app.world.get::<Light2dOutline>(entity).unwrap();
        assert_eq!(
            outline.outlines.falloff.as_ref().unwrap().points,
            vec![Vec2::new(2.0, 0.0)]
        );
    }
}
