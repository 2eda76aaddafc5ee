//! Radial wave demo.
//!
//! Fits nothing at all; instead it renders a cosine wave radiating from
//! the center of the sampled area, with randomly scattered training
//! points, to show the heatmap and overlay at a higher point count.
//!
//! Run with: `cargo run --example wave`

use std::thread::sleep;
use std::time::Duration;

use tablero::{Dashboard, Row};

fn wave(x: f64, y: f64) -> f64 {
    -(x.hypot(y) * 5.5).cos()
}

/// Small deterministic pseudo-random stream, enough to scatter points.
struct Lcg(u64);

impl Lcg {
    fn next_unit(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn main() {
    let mut rng = Lcg(42);
    let mut inputs: Vec<Row> = Vec::new();
    let mut outputs: Vec<f64> = Vec::new();
    for _ in 0..150 {
        let x = rng.next_unit() * 2.0 - 1.0;
        let y = rng.next_unit() * 2.0 - 1.0;
        inputs.push([x, y]);
        outputs.push(wave(x, y));
    }

    let epochs = 100_usize;
    let mut dashboard =
        Dashboard::with_labels(80, 16, inputs, outputs, wave, epochs, "x", "y")
            .expect("dashboard geometry");

    let mut rng = Lcg(7);
    for epoch in 0..=epochs {
        let loss = 1.0 / (epoch as f64 + 1.0) + rng.next_unit() * 0.02;
        if epoch % 4 == 0 {
            println!("{}", dashboard.render(epoch, loss).expect("render"));
            sleep(Duration::from_millis(80));
        }
    }
    println!("{}", dashboard.finish());
}
