//! Transition trace tool.
//!
//! Usage: `viso-camera [preset.toml]`
//!
//! Builds a camera from the given options preset (defaults when omitted),
//! requests a transition to a distant framing sphere and drives it with a
//! simulated 60 Hz render loop, logging the interpolated pose every frame.
//! Run with `RUST_LOG=debug` to also see manager state changes.

use std::path::PathBuf;
use std::process::ExitCode;

use glam::Vec3;
use viso_camera::camera::sphere::visible_sphere_radius;
use viso_camera::camera::Camera;
use viso_camera::options::Options;

const FRAME_MS: f64 = 1000.0 / 60.0;

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let options = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => match Options::load(&path) {
            Ok(options) => options,
            Err(e) => {
                log::error!("Failed to load options '{}': {e}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => Options::default(),
    };

    let function = match options.transition.function() {
        Ok(function) => function,
        Err(e) => {
            log::error!("Invalid transition options: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut camera = Camera::new(
        options.camera.initial_snapshot(),
        options.camera.aspect,
    );
    let duration_ms = options.transition.duration_ms;
    log::info!(
        "Tracing {} transition over {duration_ms} ms",
        function.shape.name()
    );

    camera.focus(Vec3::new(120.0, 40.0, -30.0), 6.0, duration_ms, function);

    let mut frame = 0u32;
    loop {
        let timestamp = f64::from(frame) * FRAME_MS;
        if camera.update(timestamp) {
            let s = camera.snapshot();
            log::info!(
                "t={timestamp:8.2}ms position={:?} target={:?} radius={:.3} \
                 visible_radius={:.3} fov={:.4}",
                s.position.to_array(),
                s.target.to_array(),
                s.radius,
                visible_sphere_radius(s),
                s.fov
            );
        }
        if !camera.is_animating() {
            break;
        }
        frame += 1;
    }

    log::info!("Transition settled after {frame} frames");
    ExitCode::SUCCESS
}
