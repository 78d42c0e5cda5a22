use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use glam::{Vec2, Vec3};
use strider_common::Transform;
use strider_controller::{
    CameraBinding, CharacterMover, ControllerConfig, LocomotionController, NoPointer, OrbitFollow,
    PlaneMover, ZoomController,
};
use strider_input::{Action, ActionPhase, InputEvent};
use strider_kernel::Scheduler;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "strider-cli", about = "Headless runner for the strider controllers")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Walk a character over flat ground with scripted input
    Walk {
        /// Number of frames to simulate
        #[arg(short, long, default_value = "60")]
        frames: u64,
        /// Seconds per frame
        #[arg(long, default_value = "0.016666668")]
        dt: f32,
        /// Move axis held for the whole run, as X,Y
        #[arg(short, long, default_value = "0,1", value_parser = parse_vec2, allow_hyphen_values = true)]
        r#move: Vec2,
        /// Frames on which jump is pressed (repeatable)
        #[arg(short, long)]
        jump_at: Vec<u64>,
        /// Camera yaw in degrees around +Y
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        camera_yaw: f32,
        /// Run without a camera (world-relative movement)
        #[arg(long)]
        no_camera: bool,
        /// Turn the character toward its movement direction
        #[arg(long)]
        face: bool,
        /// YAML controller config
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Drive the orbital zoom with scripted scroll input
    Zoom {
        /// Number of frames to simulate
        #[arg(short, long, default_value = "30")]
        frames: u64,
        /// Seconds per frame
        #[arg(long, default_value = "0.016666668")]
        dt: f32,
        /// Starting orbit radius
        #[arg(short, long, default_value = "10")]
        radius: f32,
        /// Scroll events as FRAME:DY (repeatable)
        #[arg(short, long, value_parser = parse_scroll, allow_hyphen_values = true)]
        scroll: Vec<(u64, f32)>,
        /// YAML controller config
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Load and validate a YAML controller config
    CheckConfig {
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("strider-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", strider_common::crate_info());
            println!("input: {}", strider_input::crate_info());
            println!("kernel: {}", strider_kernel::crate_info());
            println!("controller: {}", strider_controller::crate_info());
        }
        Commands::Walk {
            frames,
            dt,
            r#move,
            jump_at,
            camera_yaw,
            no_camera,
            face,
            config,
        } => {
            let mut config = load_config(config.as_deref())?;
            config.locomotion.face_move_direction |= face;

            let body = Rc::new(RefCell::new(PlaneMover::new(Vec3::ZERO, 0.0)));
            let camera = if no_camera {
                CameraBinding::Unbound
            } else {
                CameraBinding::explicit(Transform::from_yaw_degrees(camera_yaw))
            };
            let controller = LocomotionController::new(config.locomotion, Rc::clone(&body), camera);

            let mut scheduler = Scheduler::new();
            scheduler.add(Box::new(controller));
            scheduler.dispatch(&InputEvent::performed(Action::Move(r#move)));

            println!("frame      x        y        z    grounded");
            for frame in 0..frames {
                if jump_at.contains(&frame) {
                    scheduler.dispatch(&InputEvent::new(Action::Jump, ActionPhase::Started));
                    scheduler.dispatch(&InputEvent::performed(Action::Jump));
                }
                scheduler.step(dt)?;
                let body = body.borrow();
                let p = body.position();
                println!(
                    "{:>5} {:>8.3} {:>8.3} {:>8.3}    {}",
                    frame + 1,
                    p.x,
                    p.y,
                    p.z,
                    body.is_grounded()
                );
            }
            tracing::info!(frames, final_position = ?body.borrow().position(), "walk finished");
        }
        Commands::Zoom {
            frames,
            dt,
            radius,
            scroll,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            let rig = Rc::new(RefCell::new(OrbitFollow::new(radius)));
            let controller = ZoomController::new(config.zoom, Rc::clone(&rig), &mut NoPointer);

            let mut scheduler = Scheduler::new();
            scheduler.add(Box::new(controller));

            println!("frame   radius");
            for frame in 0..frames {
                for (_, dy) in scroll.iter().filter(|(f, _)| *f == frame) {
                    scheduler.dispatch(&InputEvent::performed(Action::Zoom(Vec2::new(0.0, *dy))));
                }
                scheduler.step(dt)?;
                println!("{:>5} {:>8.3}", frame + 1, rig.borrow().radius);
            }
            tracing::info!(frames, final_radius = rig.borrow().radius, "zoom finished");
        }
        Commands::CheckConfig { path } => {
            let config = ControllerConfig::load(&path)
                .with_context(|| format!("checking {}", path.display()))?;
            println!("{}: OK", path.display());
            println!("{config:#?}");
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ControllerConfig> {
    match path {
        Some(path) => ControllerConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(ControllerConfig::default()),
    }
}

fn parse_vec2(s: &str) -> Result<Vec2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let x = x.trim().parse::<f32>().map_err(|e| format!("bad x: {e}"))?;
    let y = y.trim().parse::<f32>().map_err(|e| format!("bad y: {e}"))?;
    Ok(Vec2::new(x, y))
}

fn parse_scroll(s: &str) -> Result<(u64, f32), String> {
    let (frame, dy) = s
        .split_once(':')
        .ok_or_else(|| format!("expected FRAME:DY, got {s:?}"))?;
    let frame = frame.trim().parse::<u64>().map_err(|e| format!("bad frame: {e}"))?;
    let dy = dy.trim().parse::<f32>().map_err(|e| format!("bad delta: {e}"))?;
    Ok((frame, dy))
}
