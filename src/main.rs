use bevy::{log::LogPlugin, prelude::*, transform::TransformPlugin};
use light2d_editor::{
    solver::{self, HandleSide, LightAngles, LightRadii},
    Light2d, Light2dOutline, Light2dPlugin, LightHandles, LightType, OutlineChanged, ShapePath,
};

fn main() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugin(LogPlugin::default())
        .add_plugin(TransformPlugin)
        .add_plugin(Light2dPlugin)
        .add_startup_system(setup)
        .add_system(report_outlines);

    app.update();

    // drag the right outer-angle handle of the point light out to 180 degrees
    let mut lights = app.world.query::<(Entity, &Light2d, &LightHandles)>();
    let drags: Vec<_> = lights
        .iter(&app.world)
        .map(|(entity, light, handles)| {
            let handle = handles.frame.origin + handles.frame.right * light.radii.outer;
            let angle = handles.angle_from(HandleSide::Right, handle, light.angles.outer);
            (entity, angle)
        })
        .collect();
    for (entity, angle) in drags {
        if let Some(mut light) = app.world.get_mut::<Light2d>(entity) {
            light.angles = solver::drag_outer_angle(light.angles, angle);
            info!("dragged {:?} to {:?}", entity, light.angles);
        }
    }

    app.update();
}

fn setup(mut commands: Commands) {
    for (x, sides) in [(0.0, 6), (200.0, 4), (400.0, 3)] {
        commands.spawn((
            SpatialBundle {
                transform: Transform::from_xyz(x, 0.0, 1.0),
                ..default()
            },
            Light2d::parametric(50.0, sides),
        ));
    }

    let mut freeform = Light2d::default();
    freeform.set_light_type(LightType::Freeform);
    commands.spawn((
        SpatialBundle::default(),
        freeform,
        ShapePath::default_quad(),
    ));

    commands.spawn((
        SpatialBundle {
            transform: Transform::from_xyz(0.0, 200.0, 1.0),
            ..default()
        },
        Light2d::point(
            LightAngles {
                inner: 30.0,
                outer: 90.0,
            },
            LightRadii {
                inner: 20.0,
                outer: 80.0,
            },
        ),
    ));
}

fn report_outlines(
    mut changed: EventReader<OutlineChanged>,
    outlines: Query<(&Light2dOutline, &GlobalTransform)>,
) {
    for event in changed.iter() {
        if let Ok((outline, transform)) = outlines.get(event.entity) {
            let world = outline.outlines.main.to_world(transform);
            info!(
                "outline of {:?}: {} vertices, first at {:?}",
                event.entity,
                world.len(),
                world.first()
            );
        }
    }
}
