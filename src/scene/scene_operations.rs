//! Scene operations
//!
//! Input handling, per-frame simulation and pass/draw emission for the
//! viewer. All state lives in `SceneData`.

use super::scene_data::{CoinData, SceneData};
use crate::camera::free_camera_operations as free_cam;
use crate::camera::orbit_camera_operations as orbit;
use crate::camera::{
    advance_playback, aspect_ratio, build_projection_matrix, current_keyframe, init_playback,
    keyframe_view_matrix, load_keyframes, reset_playback, CameraMode, FreeCameraData,
    FreeCameraMotion, KeyframeTrack, PlaybackStep,
};
use crate::character::{
    clamp_to_bounds, draw_character, init_character, move_character, roster, turn_character,
    world_bounds, CharacterData, CharacterPose, MotionDirection,
};
use crate::config::ViewerConfig;
use crate::constants::{free, orbit as orbit_defaults, world};
use crate::error::{OptionExt, ViewerError, ViewerResult};
use crate::input::{self, DragMode, InputAction};
use crate::render::{
    build_draw_command, build_skybox_command, DrawCommand, MaterialData, Primitive, RenderSink,
    ViewPass, Viewport,
};
use glam::{Mat4, Vec2, Vec3};
use std::path::Path;

const GROUND_MATERIAL: MaterialData = MaterialData {
    ambient: Vec3::new(0.25, 0.25, 0.25),
    diffuse: Vec3::new(0.3, 0.8, 0.2),
    specular: Vec3::ZERO,
    shininess: 0.1,
};

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Build the scene described by a config
///
/// A configured keyframe file that fails to load is logged and leaves the
/// animation mode unavailable; every other problem is an error.
pub fn init_scene(config: ViewerConfig) -> ViewerResult<SceneData> {
    config.validate()?;

    let mut bindings = input::default_bindings();
    input::apply_binding_overrides(&mut bindings, &config.bindings)?;

    let bounds = world_bounds(config.movement.world_size, config.movement.edge_margin);
    let heroes = spawn_heroes();
    let coins = spawn_coins(config.movement.world_size);
    let zombies = spawn_zombies(config.movement.world_size);

    let orbit_camera = orbit::init_orbit_camera_from_view(
        Vec3::from(orbit_defaults::INITIAL_EYE),
        Vec3::ZERO,
        Vec3::Y,
        &config.camera.orbit,
    )?;

    let mut free_camera = free_cam::init_free_camera(orbit_camera.eye, 0.0, 0.0);
    free_camera.movement_speed = config.camera.free_move_speed;
    free_camera.turn_speed = config.camera.free_turn_degrees_per_second.to_radians();
    free_cam::look_toward(&mut free_camera, orbit_camera.look_at);

    let eye_height = config.camera.eye_height;
    let first_person_camera = rider_camera(&heroes[0].pose, eye_height);
    let viewport_camera = rider_camera(&heroes[0].pose, eye_height);

    let keyframes = match &config.playback.keyframe_path {
        Some(path) => match load_keyframes(path) {
            Ok(track) => Some(track),
            Err(err) => {
                log::warn!(
                    "[Scene::init] Animation camera unavailable, keyframes failed to load: {}",
                    err
                );
                None
            }
        },
        None => None,
    };

    let playback = init_playback(config.playback.frame_duration);
    let small_viewport_active = config.viewport.small_viewport_enabled;

    log::info!(
        "[Scene::init] {} heroes, {} coins, {} zombies, world half-size {}",
        heroes.len(),
        coins.len(),
        zombies.len(),
        config.movement.world_size
    );

    Ok(SceneData {
        config,
        bindings,
        input: input::init_input_state(),
        bounds,
        heroes,
        selected_hero: 0,
        viewport_hero: 0,
        coins,
        coins_collected: 0,
        zombies,
        camera_mode: CameraMode::Arcball,
        orbit_camera,
        free_camera,
        first_person_camera,
        viewport_camera,
        keyframes,
        playback,
        small_viewport_active,
        quit_requested: false,
    })
}

fn rider_camera(pose: &CharacterPose, eye_height: f32) -> FreeCameraData {
    let mut camera = free_cam::init_free_camera(Vec3::ZERO, 0.0, 0.0);
    free_cam::follow_character(&mut camera, pose, eye_height);
    camera
}

fn place(rig: crate::character::RigData, position: Vec3) -> CharacterData {
    init_character(
        rig,
        CharacterPose {
            position,
            heading: 0.0,
        },
    )
}

/// Hero slots in selection order
fn spawn_heroes() -> Vec<CharacterData> {
    let rigs = [
        roster::car_hero(),
        roster::golem_hero(),
        roster::wizard(),
        roster::vyrme(),
    ];
    rigs.into_iter()
        .zip(world::HERO_STARTS)
        .map(|(rig, start)| place(rig, Vec3::from(start)))
        .collect()
}

/// Corner points in the order (-,-), (+,-), (-,+), (+,+)
fn corners(world_size: f32) -> [Vec2; 4] {
    let c = world_size - world::CORNER_INSET;
    [
        Vec2::new(-c, -c),
        Vec2::new(c, -c),
        Vec2::new(-c, c),
        Vec2::new(c, c),
    ]
}

fn spawn_coins(world_size: f32) -> Vec<CoinData> {
    corners(world_size)
        .into_iter()
        .map(|corner| CoinData {
            character: place(
                roster::coin(),
                Vec3::new(corner.x, world::COIN_HEIGHT, corner.y),
            ),
            active: true,
        })
        .collect()
}

/// Two zombies per corner, offset diagonally to either side of it
fn spawn_zombies(world_size: f32) -> Vec<CharacterData> {
    let spacing = world::ZOMBIE_SPACING;
    let offsets: Vec<f32> = (0..world::ZOMBIES_PER_CORNER)
        .map(|i| {
            let side = if i % 2 == 0 { -1.0 } else { 1.0 };
            side * spacing * (1 + i / 2) as f32
        })
        .collect();

    corners(world_size)
        .into_iter()
        .flat_map(|corner| {
            offsets.iter().map(move |offset| {
                place(
                    roster::zombie(),
                    Vec3::new(corner.x + offset, world::ZOMBIE_HEIGHT, corner.y + offset),
                )
            })
        })
        .collect()
}

/// Replace the keyframe track
pub fn attach_keyframes(scene: &mut SceneData, track: KeyframeTrack) {
    log::info!(
        "[Scene::attach_keyframes] {} frames from {}",
        track.frames.len(),
        track.source_name
    );
    scene.keyframes = Some(track);
    reset_playback(&mut scene.playback);
}

/// Load a keyframe file into the scene; on failure the current track is kept
pub fn load_scene_keyframes(scene: &mut SceneData, path: &Path) -> ViewerResult<()> {
    let track = load_keyframes(path)?;
    attach_keyframes(scene, track);
    Ok(())
}

// ============================================================================
// SELECTION
// ============================================================================

pub fn selected_hero(scene: &SceneData) -> &CharacterData {
    &scene.heroes[scene.selected_hero]
}

/// Make a hero slot the one driven by the movement keys
pub fn select_character(scene: &mut SceneData, index: usize) -> ViewerResult<()> {
    let count = scene.heroes.len();
    let hero = scene
        .heroes
        .get(index)
        .ok_or_viewer(|| ViewerError::UnknownCharacter { index, count })?;
    log::info!("[Scene::select_character] Now driving '{}'", hero.rig.name);

    scene.selected_hero = index;

    if scene.camera_mode == CameraMode::Arcball {
        frame_selected_hero(scene)?;
    }
    sync_rider_cameras(scene);
    Ok(())
}

/// Step the small-viewport hero forwards or backwards through the slots
pub fn cycle_viewport_hero(scene: &mut SceneData, step: isize) {
    let count = scene.heroes.len() as isize;
    if count == 0 {
        return;
    }
    scene.viewport_hero = (scene.viewport_hero as isize + step).rem_euclid(count) as usize;
    log::debug!(
        "[Scene::cycle_viewport_hero] Small viewport follows '{}'",
        scene.heroes[scene.viewport_hero].rig.name
    );
    sync_rider_cameras(scene);
}

/// Put the orbit camera behind and above the selected hero
fn frame_selected_hero(scene: &mut SceneData) -> ViewerResult<()> {
    let position = selected_hero(scene).pose.position;
    orbit::set_camera_view(
        &mut scene.orbit_camera,
        position + Vec3::from(orbit_defaults::FRAME_EYE_OFFSET),
        position + Vec3::from(orbit_defaults::FRAME_TARGET_OFFSET),
        Vec3::Y,
    )?;
    orbit::log_orbit_context(&scene.orbit_camera);
    Ok(())
}

/// Put the orbit camera back at its start-up placement
fn restore_default_view(scene: &mut SceneData) {
    let placed = orbit::set_camera_view(
        &mut scene.orbit_camera,
        Vec3::from(orbit_defaults::INITIAL_EYE),
        Vec3::ZERO,
        Vec3::Y,
    );
    if let Err(err) = placed {
        log::warn!("[Scene::restore_default_view] Orbit camera left as is: {}", err);
    }
}

fn sync_rider_cameras(scene: &mut SceneData) {
    let eye_height = scene.config.camera.eye_height;
    free_cam::follow_character(
        &mut scene.first_person_camera,
        &scene.heroes[scene.selected_hero].pose,
        eye_height,
    );
    free_cam::follow_character(
        &mut scene.viewport_camera,
        &scene.heroes[scene.viewport_hero].pose,
        eye_height,
    );
}

// ============================================================================
// CAMERA MODES
// ============================================================================

/// Switch the main camera
///
/// Animation mode needs a loaded keyframe track; without one the request is
/// logged and the mode stays as it was.
pub fn set_camera_mode(scene: &mut SceneData, mode: CameraMode) -> ViewerResult<()> {
    match mode {
        CameraMode::Arcball => frame_selected_hero(scene)?,
        CameraMode::FirstPerson => sync_rider_cameras(scene),
        CameraMode::FreeFly => {
            let (eye, target) = active_eye_and_target(scene);
            scene.free_camera.position = eye;
            free_cam::look_toward(&mut scene.free_camera, target);
        }
        CameraMode::Animation => {
            if scene.keyframes.is_none() {
                log::warn!(
                    "[Scene::set_camera_mode] No keyframe track loaded, staying in {:?}",
                    scene.camera_mode
                );
                return Ok(());
            }
            reset_playback(&mut scene.playback);
        }
    }

    if scene.camera_mode != mode {
        log::info!("[Scene::set_camera_mode] {:?} -> {:?}", scene.camera_mode, mode);
    }
    scene.camera_mode = mode;
    Ok(())
}

/// Eye and a point it looks at, for whichever camera drives the main view
pub fn active_eye_and_target(scene: &SceneData) -> (Vec3, Vec3) {
    match scene.camera_mode {
        CameraMode::Arcball => (scene.orbit_camera.eye, scene.orbit_camera.look_at),
        CameraMode::FirstPerson => (
            scene.first_person_camera.position,
            free_cam::look_at_point(&scene.first_person_camera),
        ),
        CameraMode::FreeFly => (
            scene.free_camera.position,
            free_cam::look_at_point(&scene.free_camera),
        ),
        CameraMode::Animation => match active_keyframe(scene) {
            Some(frame) => (frame.eye, frame.eye + frame.direction),
            None => (scene.orbit_camera.eye, scene.orbit_camera.look_at),
        },
    }
}

fn active_keyframe(scene: &SceneData) -> Option<&crate::camera::CameraKeyframe> {
    scene
        .keyframes
        .as_ref()
        .and_then(|track| current_keyframe(&scene.playback, track))
}

// ============================================================================
// INPUT
// ============================================================================

/// Feed a key event
///
/// Unbound keys are ignored; names that are not keys at all are an error.
pub fn handle_key(scene: &mut SceneData, key_name: &str, pressed: bool) -> ViewerResult<()> {
    let Some(action) = input::action_for_key(&scene.bindings, key_name)? else {
        return Ok(());
    };

    if input::set_action(&mut scene.input, action, pressed) {
        trigger_action(scene, action)?;
    }
    Ok(())
}

/// One-shot effects of a fresh press; held actions are read in `update`
fn trigger_action(scene: &mut SceneData, action: InputAction) -> ViewerResult<()> {
    match action {
        InputAction::Quit => {
            log::info!("[Scene::handle_key] Quit requested");
            scene.quit_requested = true;
        }
        InputAction::CameraArcball => set_camera_mode(scene, CameraMode::Arcball)?,
        InputAction::CameraFirstPerson => set_camera_mode(scene, CameraMode::FirstPerson)?,
        InputAction::CameraFreeFly => set_camera_mode(scene, CameraMode::FreeFly)?,
        InputAction::CameraAnimation => set_camera_mode(scene, CameraMode::Animation)?,
        InputAction::ToggleSmallViewport => {
            scene.small_viewport_active = !scene.small_viewport_active;
        }
        InputAction::PreviousViewportCharacter | InputAction::NextViewportCharacter => {
            if scene.camera_mode == CameraMode::FreeFly {
                let step = if action == InputAction::NextViewportCharacter { 1 } else { -1 };
                cycle_viewport_hero(scene, step);
            }
        }
        InputAction::SelectCharacter(index) => select_character(scene, index)?,
        InputAction::MoveForward
        | InputAction::MoveBackward
        | InputAction::TurnLeft
        | InputAction::TurnRight
        | InputAction::ZoomModifier => {}
    }
    Ok(())
}

/// Feed a left mouse button event
pub fn handle_mouse_button(scene: &mut SceneData, pressed: bool) {
    input::set_left_button(&mut scene.input, pressed);
}

/// Feed a cursor position in window pixels
///
/// Left drag rotates the orbit camera (or steers the free camera), shift +
/// left drag zooms the orbit camera by the vertical motion.
pub fn handle_cursor(scene: &mut SceneData, position: Vec2, viewport: Viewport) {
    let Some(delta) = input::update_pointer(&mut scene.input, position) else {
        return;
    };

    match (input::drag_mode(&scene.input), scene.camera_mode) {
        (Some(DragMode::Zoom), CameraMode::Arcball) => {
            orbit::zoom(
                &mut scene.orbit_camera,
                delta.y * scene.config.camera.zoom_sensitivity,
            );
        }
        (Some(DragMode::Rotate), CameraMode::Arcball) => {
            orbit::rotate(
                &mut scene.orbit_camera,
                delta.x,
                delta.y,
                viewport.width,
                viewport.height,
            );
        }
        (Some(DragMode::Rotate), CameraMode::FreeFly) => {
            free_cam::rotate(
                &mut scene.free_camera,
                delta.x * free::MOUSE_SENSITIVITY,
                -delta.y * free::MOUSE_SENSITIVITY,
            );
        }
        _ => {}
    }
}

// ============================================================================
// UPDATE
// ============================================================================

/// Advance the simulation by `delta_time` seconds
pub fn update(scene: &mut SceneData, delta_time: f32) {
    let delta_time = if delta_time.is_finite() {
        delta_time.max(0.0)
    } else {
        0.0
    };

    match scene.camera_mode {
        CameraMode::Arcball | CameraMode::FirstPerson => drive_selected_hero(scene, delta_time),
        CameraMode::FreeFly => fly_free_camera(scene, delta_time),
        CameraMode::Animation => advance_animation(scene, delta_time),
    }

    collect_coins(scene);
    update_zombies(scene, delta_time);
    sync_rider_cameras(scene);
}

fn drive_selected_hero(scene: &mut SceneData, delta_time: f32) {
    let speed = scene.config.movement.move_speed;
    let turn_speed = scene.config.movement.turn_degrees_per_second.to_radians();
    let forward = input::is_pressed(&scene.input, InputAction::MoveForward);
    let backward = input::is_pressed(&scene.input, InputAction::MoveBackward);
    let turn = input::axis(&scene.input, InputAction::TurnLeft, InputAction::TurnRight);

    let hero = &mut scene.heroes[scene.selected_hero];
    if forward {
        move_character(hero, MotionDirection::Forward, speed, delta_time, &scene.bounds);
    }
    if backward {
        move_character(hero, MotionDirection::Backward, speed, delta_time, &scene.bounds);
    }
    if turn != 0.0 {
        turn_character(hero, turn * turn_speed, delta_time);
    }

    let target = hero.pose.position + Vec3::new(0.0, orbit_defaults::FOLLOW_TARGET_HEIGHT, 0.0);
    orbit::set_look_at_point(&mut scene.orbit_camera, target);
}

fn fly_free_camera(scene: &mut SceneData, delta_time: f32) {
    let motion = FreeCameraMotion {
        forward_delta: input::axis(&scene.input, InputAction::MoveForward, InputAction::MoveBackward),
        yaw_delta: input::axis(&scene.input, InputAction::TurnRight, InputAction::TurnLeft),
        ..Default::default()
    };
    free_cam::apply_motion(&mut scene.free_camera, &motion, delta_time);
}

fn advance_animation(scene: &mut SceneData, delta_time: f32) {
    let Some(track) = scene.keyframes.as_ref() else {
        return;
    };

    match advance_playback(&mut scene.playback, track, delta_time) {
        PlaybackStep::Looped => {
            log::info!("[Scene::update] {} finished, restarting from frame 0", track.source_name);
            reset_playback(&mut scene.playback);
            restore_default_view(scene);
        }
        PlaybackStep::Advanced(index) => {
            log::trace!("[Scene::update] keyframe {}", index);
        }
        PlaybackStep::Holding => {}
    }
}

fn collect_coins(scene: &mut SceneData) {
    let hero_position = scene.heroes[scene.selected_hero].pose.position;
    let pickup = scene.config.movement.coin_pickup_distance;
    let total = scene.coins.len();

    for coin in scene.coins.iter_mut().filter(|coin| coin.active) {
        if coin.character.pose.position.distance(hero_position) < pickup {
            coin.active = false;
            scene.coins_collected += 1;
            log::info!(
                "[Scene::collect_coins] Coin collected at {:?} ({}/{})",
                coin.character.pose.position,
                scene.coins_collected,
                total
            );
        }
    }
}

/// Zombies turn in place and drift towards -Z, stopping at the world edge
fn update_zombies(scene: &mut SceneData, delta_time: f32) {
    let spin = scene.config.movement.zombie_spin_degrees_per_second.to_radians();
    let drift = scene.config.movement.zombie_drift_per_second * delta_time;

    for zombie in &mut scene.zombies {
        turn_character(zombie, spin, delta_time);
        let drifted = zombie.pose.position - Vec3::Z * drift;
        zombie.pose.position = clamp_to_bounds(drifted, &scene.bounds);
    }
}

// ============================================================================
// RENDERING
// ============================================================================

/// Pass for the main viewport from the active camera
pub fn main_view_pass(scene: &SceneData, viewport: Viewport) -> ViewPass {
    let camera = &scene.config.camera;
    let mut fov = camera.fov_degrees;

    let (view, eye) = match scene.camera_mode {
        CameraMode::Arcball => (scene.orbit_camera.view_matrix, scene.orbit_camera.eye),
        CameraMode::FirstPerson => (
            scene.first_person_camera.view_matrix,
            scene.first_person_camera.position,
        ),
        CameraMode::FreeFly => (scene.free_camera.view_matrix, scene.free_camera.position),
        CameraMode::Animation => match active_keyframe(scene) {
            Some(frame) => {
                if frame.fov_degrees > 0.0 && frame.fov_degrees < 180.0 {
                    fov = frame.fov_degrees;
                }
                (keyframe_view_matrix(frame), frame.eye)
            }
            None => (scene.orbit_camera.view_matrix, scene.orbit_camera.eye),
        },
    };

    ViewPass {
        viewport,
        view,
        projection: build_projection_matrix(
            fov,
            aspect_ratio(viewport.width, viewport.height),
            camera.near_plane,
            camera.far_plane,
        ),
        eye,
        clear_depth: false,
    }
}

/// Top-right corner rectangle for the picture-in-picture view
///
/// None when the framebuffer is too small to hold one.
pub fn small_viewport_rect(viewport: Viewport, divisor: u32, margin: u32) -> Option<Viewport> {
    let width = viewport.width / divisor.max(1);
    let height = viewport.height / divisor.max(1);
    if width == 0 || height == 0 {
        return None;
    }

    Some(Viewport {
        x: viewport.x + viewport.width.saturating_sub(width + margin),
        y: viewport.y + viewport.height.saturating_sub(height + margin),
        width,
        height,
    })
}

/// Pass for the small viewport, if it is showing
pub fn small_view_pass(scene: &SceneData, viewport: Viewport) -> Option<ViewPass> {
    if !scene.small_viewport_active {
        return None;
    }

    let settings = &scene.config.viewport;
    let rect = small_viewport_rect(
        viewport,
        settings.small_viewport_divisor,
        settings.small_viewport_margin,
    )?;
    let camera = &scene.config.camera;

    Some(ViewPass {
        viewport: rect,
        view: scene.viewport_camera.view_matrix,
        projection: build_projection_matrix(
            camera.fov_degrees,
            aspect_ratio(rect.width, rect.height),
            camera.near_plane,
            camera.far_plane,
        ),
        eye: scene.viewport_camera.position,
        clear_depth: true,
    })
}

fn ground_command(world_size: f32, pass: &ViewPass) -> DrawCommand {
    build_draw_command(
        Primitive::GroundQuad,
        Mat4::from_scale(Vec3::new(world_size, 1.0, world_size)),
        pass,
        GROUND_MATERIAL,
    )
}

/// Emit everything visible in one pass; returns the number of draw commands
pub fn render_pass(scene: &SceneData, pass: &ViewPass, sink: &mut dyn RenderSink) -> usize {
    sink.begin_pass(pass);
    sink.submit(&build_skybox_command(pass));
    sink.submit(&ground_command(scene.config.movement.world_size, pass));
    let mut count = 2;

    for hero in &scene.heroes {
        count += draw_character(hero, pass, sink);
    }
    for coin in scene.coins.iter().filter(|coin| coin.active) {
        count += draw_character(&coin.character, pass, sink);
    }
    for zombie in &scene.zombies {
        count += draw_character(zombie, pass, sink);
    }
    count
}

/// Render the main view and, when enabled, the small viewport
pub fn render(scene: &SceneData, viewport: Viewport, sink: &mut dyn RenderSink) -> usize {
    let main = main_view_pass(scene, viewport);
    let mut count = render_pass(scene, &main, sink);

    if let Some(small) = small_view_pass(scene, viewport) {
        count += render_pass(scene, &small, sink);
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::parse_keyframes;
    use crate::render::DrawList;

    const TOLERANCE: f32 = 1e-3;

    fn window() -> Viewport {
        Viewport {
            x: 0,
            y: 0,
            width: 900,
            height: 600,
        }
    }

    fn scene() -> SceneData {
        init_scene(ViewerConfig::default()).expect("default scene")
    }

    #[test]
    fn test_initial_layout() {
        let scene = scene();
        assert_eq!(scene.heroes.len(), 4);
        assert_eq!(scene.coins.len(), 4);
        assert_eq!(scene.zombies.len(), 8);
        assert_eq!(scene.camera_mode, CameraMode::Arcball);
        assert!((scene.orbit_camera.eye - Vec3::new(0.0, 50.0, 100.0)).length() < TOLERANCE);

        let corner = 105.0 - 8.0;
        assert!((scene.coins[3].character.pose.position - Vec3::new(corner, 1.2, corner)).length() < TOLERANCE);
        assert!((scene.zombies[0].pose.position - Vec3::new(-corner - 2.0, 1.5, -corner - 2.0)).length() < TOLERANCE);
        assert!((scene.zombies[1].pose.position - Vec3::new(-corner + 2.0, 1.5, -corner + 2.0)).length() < TOLERANCE);
    }

    #[test]
    fn test_animation_loop_restores_default_view() {
        let mut scene = scene();
        let track = parse_keyframes(
            "3\n0 5 20 0 0 -1 0 1 0 45\n5 5 20 0 0 -1 0 1 0 50\n10 5 20 0 0 -1 0 1 0 55\n",
            "loop",
        )
        .expect("valid track");
        attach_keyframes(&mut scene, track);
        orbit::zoom(&mut scene.orbit_camera, -40.0);
        orbit::rotate(&mut scene.orbit_camera, 120.0, 40.0, 900, 600);
        set_camera_mode(&mut scene, CameraMode::Animation).unwrap();

        let frame = scene.playback.frame_duration;
        update(&mut scene, frame);
        update(&mut scene, frame);
        assert_eq!(scene.playback.frame_index, 2);
        assert!((scene.orbit_camera.eye - Vec3::new(0.0, 50.0, 100.0)).length() > 1.0);

        // Past the last frame: back to frame zero and the start-up orbit pose
        update(&mut scene, frame * 1.5);
        assert_eq!(scene.playback.frame_index, 0);
        assert_eq!(scene.playback.accumulated, 0.0);
        assert!((scene.orbit_camera.eye - Vec3::new(0.0, 50.0, 100.0)).length() < TOLERANCE);
        assert_eq!(scene.orbit_camera.look_at, Vec3::ZERO);
        assert_eq!(scene.camera_mode, CameraMode::Animation);
    }

    #[test]
    fn test_w_drives_selected_hero_and_orbit_follows() {
        let mut scene = scene();
        handle_key(&mut scene, "W", true).unwrap();
        update(&mut scene, 0.5);

        let position = selected_hero(&scene).pose.position;
        assert!((position - Vec3::new(0.0, 0.0, -3.0)).length() < TOLERANCE);
        assert!((scene.orbit_camera.look_at - Vec3::new(0.0, 2.0, -3.0)).length() < TOLERANCE);
        assert!((scene.first_person_camera.position - Vec3::new(0.0, 4.0, -3.0)).length() < TOLERANCE);
    }

    #[test]
    fn test_select_character_reframes_orbit() {
        let mut scene = scene();
        handle_key(&mut scene, "F2", true).unwrap();
        assert_eq!(scene.selected_hero, 1);

        let hero = selected_hero(&scene).pose.position;
        assert!((scene.orbit_camera.look_at - (hero + Vec3::Y)).length() < TOLERANCE);
        assert!((scene.orbit_camera.eye - (hero + Vec3::new(0.0, 10.0, 20.0))).length() < TOLERANCE);

        assert!(matches!(
            select_character(&mut scene, 9),
            Err(ViewerError::UnknownCharacter { index: 9, count: 4 })
        ));
        assert_eq!(scene.selected_hero, 1);
    }

    #[test]
    fn test_animation_mode_requires_track() {
        let mut scene = scene();
        handle_key(&mut scene, "V", true).unwrap();
        assert_eq!(scene.camera_mode, CameraMode::Arcball);

        let track = parse_keyframes("1\n0 5 5 0 0 -1 0 1 0 60\n", "inline").unwrap();
        attach_keyframes(&mut scene, track);
        handle_key(&mut scene, "V", false).unwrap();
        handle_key(&mut scene, "V", true).unwrap();
        assert_eq!(scene.camera_mode, CameraMode::Animation);

        let pass = main_view_pass(&scene, window());
        assert!((pass.eye - Vec3::new(0.0, 5.0, 5.0)).length() < TOLERANCE);
    }

    #[test]
    fn test_orbit_drag_and_zoom() {
        let mut scene = scene();
        let radius = scene.orbit_camera.radius;
        handle_mouse_button(&mut scene, true);
        handle_cursor(&mut scene, Vec2::new(100.0, 100.0), window());
        handle_cursor(&mut scene, Vec2::new(100.0, 90.0), window());
        assert!((scene.orbit_camera.radius - radius).abs() < TOLERANCE);

        handle_key(&mut scene, "LeftShift", true).unwrap();
        handle_cursor(&mut scene, Vec2::new(100.0, 80.0), window());
        assert!((scene.orbit_camera.radius - (radius - 10.0)).abs() < TOLERANCE);
    }

    #[test]
    fn test_small_viewport_rect() {
        let rect = small_viewport_rect(window(), 3, 10).unwrap();
        assert_eq!(
            rect,
            Viewport {
                x: 590,
                y: 390,
                width: 300,
                height: 200
            }
        );
        let tiny = Viewport {
            x: 0,
            y: 0,
            width: 2,
            height: 2,
        };
        assert_eq!(small_viewport_rect(tiny, 3, 10), None);
    }

    #[test]
    fn test_render_counts_match_draw_list() {
        let mut scene = scene();
        let mut list = DrawList::new();
        let count = render(&scene, window(), &mut list);
        assert_eq!(list.passes.len(), 1);
        assert_eq!(count, list.commands.len());
        assert_eq!(list.commands[0].1.primitive, Primitive::Skybox);
        assert_eq!(list.commands[1].1.primitive, Primitive::GroundQuad);

        handle_key(&mut scene, "1", true).unwrap();
        let mut list = DrawList::new();
        let both = render(&scene, window(), &mut list);
        assert_eq!(list.passes.len(), 2);
        assert_eq!(both, 2 * count);
        assert!(list.passes[1].clear_depth);
    }

    #[test]
    fn test_quit_keys() {
        let mut scene = scene();
        handle_key(&mut scene, "q", true).unwrap();
        assert!(scene.quit_requested);
    }

    #[test]
    fn test_unknown_key_is_an_error_unbound_key_is_not() {
        let mut scene = scene();
        assert!(handle_key(&mut scene, "Space", true).is_ok());
        assert!(matches!(
            handle_key(&mut scene, "NotAKey", true),
            Err(ViewerError::UnknownKey { .. })
        ));
    }
}
