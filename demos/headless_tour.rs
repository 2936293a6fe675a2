//! Drive a scene without a window
//!
//! Loads `assets/viewer.toml` (or the path given as the first argument),
//! scripts a short drive, and prints what a backend would have drawn.
//!
//! RUST_LOG=info cargo run --example headless_tour

use anyhow::{Context, Result};
use hillside_viewer::render::{build_draw_uniform, DrawCommand, RenderSink, ViewPass};
use hillside_viewer::scene::{handle_cursor, handle_key, handle_mouse_button, render, update};
use hillside_viewer::{glam::Vec2, init_scene, load_config, Primitive, Viewport};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Counts draws per primitive kind and uniform bytes per pass
#[derive(Default)]
struct TallySink {
    passes: Vec<(Viewport, BTreeMap<&'static str, usize>, usize)>,
}

fn primitive_name(primitive: &Primitive) -> &'static str {
    match primitive {
        Primitive::Cube { .. } => "cube",
        Primitive::Sphere { .. } => "sphere",
        Primitive::Cone { .. } => "cone",
        Primitive::Cylinder { .. } => "cylinder",
        Primitive::GroundQuad => "ground",
        Primitive::Skybox => "skybox",
    }
}

impl RenderSink for TallySink {
    fn begin_pass(&mut self, pass: &ViewPass) {
        self.passes.push((pass.viewport, BTreeMap::new(), 0));
    }

    fn submit(&mut self, command: &DrawCommand) {
        if let Some((_, counts, bytes)) = self.passes.last_mut() {
            *counts.entry(primitive_name(&command.primitive)).or_default() += 1;
            *bytes += bytemuck::bytes_of(&build_draw_uniform(command)).len();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("assets/viewer.toml"));
    let config = load_config(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    let mut scene = init_scene(config).context("building scene")?;

    let window = Viewport {
        x: 0,
        y: 0,
        width: 1280,
        height: 720,
    };
    let step = 1.0 / 60.0;

    // Drive forward while turning left for two seconds
    handle_key(&mut scene, "W", true)?;
    handle_key(&mut scene, "A", true)?;
    for _ in 0..120 {
        update(&mut scene, step);
    }
    handle_key(&mut scene, "A", false)?;
    handle_key(&mut scene, "W", false)?;

    // Swing the orbit camera around with the mouse
    handle_mouse_button(&mut scene, true);
    for i in 0..30 {
        handle_cursor(&mut scene, Vec2::new(400.0 + i as f32 * 8.0, 300.0), window);
    }
    handle_mouse_button(&mut scene, false);

    // Show the picture-in-picture view, then hop into the keyframe camera
    handle_key(&mut scene, "1", true)?;
    handle_key(&mut scene, "V", true)?;
    for _ in 0..45 {
        update(&mut scene, step);
    }

    let mut sink = TallySink::default();
    let total = render(&scene, window, &mut sink);

    let hero = &scene.heroes[scene.selected_hero];
    println!(
        "hero '{}' at {:.2?} heading {:.1} deg, mode {:?}, coins {}",
        hero.rig.name,
        hero.pose.position,
        hero.pose.heading.to_degrees(),
        scene.camera_mode,
        scene.coins_collected
    );
    println!("{} draw commands", total);
    for (viewport, counts, bytes) in &sink.passes {
        println!(
            "  pass {}x{} at ({}, {}): {:?}, {} uniform bytes",
            viewport.width, viewport.height, viewport.x, viewport.y, counts, bytes
        );
    }

    Ok(())
}
