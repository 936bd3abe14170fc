//! Sunset scene main entry point.
//!
//! A small animated scene written in Rust using:
//! - **raylib** for windowing and drawing
//! - **bevy_ecs** for entity-component-system architecture
//!
//! A sun sits in a blue sky above the sea. Clicking (or tapping) the scene
//! plays the sunset: the sky fades to orange and then to night while the sun
//! sinks below the horizon and its reflection sinks into the sea. The next
//! click plays the sunrise. Clicks alternate between the two forever.
//!
//! # Project Structure
//!
//! - [`components`] – ECS components (layout, position, rotation, color, tweens)
//! - [`events`] – Event types (scene activation, debug toggle)
//! - [`game`] – Scene setup and the simulation schedule
//! - [`resources`] – ECS resources (toggle state, palette, config, time)
//! - [`sequencer`] – the sunset and sunrise tween groups
//! - [`systems`] – ECS systems (input, layout, tweens, rendering)
//! - [`tweengroup`] – grouping tweens with "play after" ordering
//!
//! # Main Loop
//!
//! 1. Load `config.ini` and open the raylib window
//! 2. Spawn the scene and register observers
//! 3. Each frame: poll input, re-layout on resize, advance tweens, render
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --debug
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod game;
mod resources;
mod sequencer;
mod systems;
mod tweengroup;

use crate::resources::debugmode::DebugMode;
use crate::resources::sceneconfig::{DEFAULT_CONFIG_PATH, SceneConfig};
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;
use crate::systems::input::update_input_state;
use crate::systems::layout::layout_system;
use crate::systems::render::render_system;
use crate::systems::time::update_world_time;
use crate::systems::tween::tween_system;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

/// Sunset scene
#[derive(Parser)]
#[command(version, about = "Tap the scene to watch the sun set, tap again to see it rise.")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Start with the diagnostics overlay visible (toggle with F11).
    #[arg(long)]
    debug: bool,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    write_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config =
        SceneConfig::with_path(cli.config.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH)));
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }

    // Early-exit: write config and quit (no window needed)
    if cli.write_config {
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Config written to {}", config.config_path.display());
        return;
    }

    log::info!("Starting the sunset scene");
    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let mut builder = raylib::init();
    builder
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("Sunset");
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    if config.target_fps > 0 {
        rl.set_target_fps(config.target_fps);
    }

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(ScreenSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_resource(config);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    game::setup(&mut world);
    if cli.debug {
        world.insert_resource(DebugMode {});
    }

    let mut update = game::simulation_schedule();
    update.add_systems(update_input_state.before(layout_system));
    update.add_systems(render_system.after(tween_system));

    if let Err(e) = update.initialize(&mut world) {
        log::error!("Failed to initialize schedule: {}", e);
        std::process::exit(1);
    }

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame

        // Only touch ScreenSize on a real resize so the layout pass stays idle.
        let new_size = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            ScreenSize {
                w: rl.get_screen_width(),
                h: rl.get_screen_height(),
            }
        };
        if *world.resource::<ScreenSize>() != new_size {
            log::debug!("Window resized to {}x{}", new_size.w, new_size.h);
            world.insert_resource(new_size);
        }
    }
    log::info!("Bye");
}
