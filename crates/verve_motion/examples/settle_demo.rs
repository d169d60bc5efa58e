//! Settle Demo
//!
//! Drives a spring motion the way an animation loop would: sample position,
//! velocity, and the settle check once per frame until the motion reports
//! settled.
//!
//! Run with: cargo run -p verve_motion --example settle_demo

use verve_motion::{SpringMotion, SpringParameters, Tolerance};

fn main() -> verve_motion::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut motion = SpringMotion::new(
        SpringParameters::molasses(),
        0.0,
        1.0,
        0.0,
        Tolerance::default(),
    )?;

    let frame = 1.0 / 60.0;
    for step in 0..600 {
        let t = f64::from(step) * frame;
        let position = motion.position(t);
        let velocity = motion.velocity(t);
        if step % 6 == 0 {
            println!("t = {t:>6.3}s  position = {position:>8.5}  velocity = {velocity:>9.5}");
        }
        if motion.is_settled(t) {
            println!("settled at t = {t:.3}s");
            break;
        }
    }

    Ok(())
}
