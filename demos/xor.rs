//! XOR surface demo.
//!
//! Simulates a model learning the XOR function by blending a flat initial
//! guess toward the true surface over the course of a fake training run,
//! redrawing the dashboard in place every few iterations.
//!
//! Run with: `cargo run --example xor`

use std::cell::Cell;
use std::thread::sleep;
use std::time::Duration;

use tablero::Dashboard;

fn xor(x: f64, y: f64) -> f64 {
    (x - y).abs()
}

fn main() {
    let inputs = vec![[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];
    let outputs: Vec<f64> = inputs.iter().map(|[x, y]| xor(*x, *y)).collect();

    let epochs = 200_usize;
    let progress = Cell::new(0.0_f64);
    let predict = |x: f64, y: f64| {
        let t = progress.get();
        0.5 * (1.0 - t) + xor(x, y) * t
    };

    let mut dashboard = Dashboard::new(80, 14, inputs, outputs, predict, epochs)
        .expect("dashboard geometry");

    for epoch in 0..=epochs {
        progress.set(epoch as f64 / epochs as f64);
        let loss = 0.25 * (1.0 - progress.get()).powi(2) + 0.001;
        if epoch % 5 == 0 {
            println!("{}", dashboard.render(epoch, loss).expect("render"));
            sleep(Duration::from_millis(50));
        }
    }
    println!("{}", dashboard.finish());
}
