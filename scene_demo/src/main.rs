//! Scene registry walkthrough
//!
//! Builds a small scene, exercises both cascades and logs the registry state
//! after each step. Pass a `.toml` or `.ron` scene config as the first argument
//! to override the viewport and camera defaults.

use scene_registry::prelude::*;

fn load_config() -> Result<SceneConfig, ConfigError> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading scene config from {}", path);
            SceneConfig::load_validated(path)
        }
        None => Ok(SceneConfig::default()),
    }
}

fn build_props(world: &mut World) -> Result<(), RegistryError> {
    let teapot = world.create::<Geometry>(
        "Teapot",
        GeometryDesc::new("resources/models/teapot.obj")
            .with_transform(Transform::from_position(Vec3::new(0.0, 0.0, -2.0))),
    )?;
    world.create::<Optics>("TeapotOptics", teapot)?;
    world.create::<Mechanics>("TeapotMechanics", teapot)?;
    world.create::<Kinematics>("TeapotSpin", teapot)?;
    world.create::<Acoustics>("TeapotHum", teapot)?;

    let rocks = (0..3).map(|i| (format!("Rock{i}"), GeometryDesc::new("resources/models/rock.obj")));
    world.create_batch::<Geometry, _>(rocks)?;
    for name in world.list_all::<Geometry>() {
        if let Some(id) = world.id_of::<Geometry>(&name) {
            world.get_or_create::<Optics>(&format!("{name}Optics"), id)?;
        }
    }
    Ok(())
}

fn build_views(world: &mut World) -> Result<(), RegistryError> {
    world.create::<Camera>("Main", CameraDesc::default())?;
    world.create::<Camera>(
        "Overhead",
        CameraDesc::default().with_position(Vec3::new(0.0, 10.0, 0.0)).with_fov(60.0),
    )?;
    world.create::<Viewport>("Screen", ViewportDesc::default())?;
    world.create::<Viewport>("Minimap", ViewportDesc::sized(256, 256))?;

    world.attach_camera("Screen", "Main")?;
    world.attach_camera("Minimap", "Main")?;
    world.attach_camera("Minimap", "Overhead")?;
    Ok(())
}

fn run(world: &mut World) -> Result<(), Box<dyn std::error::Error>> {
    build_props(world)?;
    build_views(world)?;
    world.log_state();

    world.play_all(1.0);
    world.advance_animations(0.5);
    world.move_all_geometry(Vec3::new(0.0, 1.0, 0.0));

    log::info!("Removing geometry 'Teapot'");
    world.remove::<Geometry>("Teapot");
    log::info!("Removing camera 'Main'");
    world.remove::<Camera>("Main");
    world.log_state();

    world.check_invariants()?;
    println!("{}", world.debug_dump());

    let removed = world.clear_all();
    log::info!("Teardown removed {} resource(s)", removed);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Starting scene registry demo");
    let config = load_config()?;
    let mut world = World::with_config(config);

    if let Err(e) = run(&mut world) {
        log::error!("Demo failed: {}", e);
        return Err(e);
    }
    log::info!("Demo finished");
    Ok(())
}
