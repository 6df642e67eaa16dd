//! Animate points along an ellipse.
//!
//! Simulates a fixed-rate animation loop and prints where each of several
//! phase-shifted satellites sits on the path at every frame.
//!
//! ```bash
//! RUST_LOG=trace cargo run -p ovum-geometry --example orbit
//! ```

use std::f64::consts::TAU;

use ovum_core::traits::Validate;
use ovum_core::Tolerance;
use ovum_geometry::{curve_to_polyline, Ellipse};
use tracing_subscriber::EnvFilter;

const FRAMES: usize = 12;
const FRAME_TIME: f64 = 1.0 / 60.0;
const ANGULAR_SPEED: f64 = TAU / (FRAMES as f64 * FRAME_TIME);
const SATELLITES: usize = 3;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let orbit = Ellipse::new(2.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0);
    // Frame data is usually single precision, so judge degeneracy loosely.
    if let Err(err) = orbit.validate_with(Tolerance::loose()) {
        tracing::warn!(%err, "orbit is degenerate, animating anyway");
    }

    let path = curve_to_polyline(&orbit, 1e-3);
    tracing::info!(
        major = orbit.major(),
        minor = orbit.minor(),
        path_points = path.len(),
        "orbit ready"
    );

    for frame in 0..FRAMES {
        let t = frame as f64 * FRAME_TIME * ANGULAR_SPEED;
        let positions: Vec<String> = (0..SATELLITES)
            .map(|i| {
                let offset = i as f64 * TAU / SATELLITES as f64;
                let p = orbit.eval_with_offset(t, offset);
                format!("({:+.3}, {:+.3}, {:+.3})", p.x, p.y, p.z)
            })
            .collect();
        println!("frame {:>2}: {}", frame, positions.join("  "));
    }
}
