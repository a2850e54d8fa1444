//! Terminal bar-chart host for the sortsim engine.
//!
//! Demonstrates:
//!   1. Implementing `Renderer` as ASCII bars with highlight markers
//!   2. Wrapping it in a `ThrottledRenderer`
//!   3. Driving `Visualizer::tick` from a sleep loop
//!
//! Run with:
//!   cargo run -p sortsim-engine --example terminal -- quick
//!
//! Set `RUST_LOG=sortsim_engine=debug` to see session events.

use std::io::{self, Write};
use std::time::Duration;

use sortsim_algorithms::AlgorithmKind;
use sortsim_core::{HighlightRole, HighlightSet, Renderer, ThrottledRenderer};
use sortsim_engine::{Visualizer, VisualizerConfig};
use tracing::warn;
use tracing_subscriber::EnvFilter;

// ─── Renderer ───────────────────────────────────────────────────

const HEIGHT: i32 = 12;

struct AsciiBars<W: Write> {
    out: W,
    max_value: i32,
    /// Set after the first failed write; later frames are skipped.
    failed: bool,
}

fn marker(role: Option<HighlightRole>) -> char {
    match role {
        None => '#',
        Some(HighlightRole::Compared) => 'c',
        Some(HighlightRole::Swapped) => 's',
        Some(HighlightRole::Pivot) => 'P',
        Some(HighlightRole::Boundary) => '|',
    }
}

impl<W: Write> Renderer for AsciiBars<W> {
    fn render(&mut self, snapshot: &[i32], highlights: &HighlightSet, title: &str) {
        if self.failed {
            return;
        }
        let mut out = String::new();
        // Clear screen, cursor home.
        out.push_str("\x1b[2J\x1b[H");
        out.push_str(title);
        out.push('\n');
        for row in (1..=HEIGHT).rev() {
            for (i, &v) in snapshot.iter().enumerate() {
                let bar = v.max(0) * HEIGHT / self.max_value.max(1);
                out.push(if bar >= row {
                    marker(highlights.role(i))
                } else {
                    ' '
                });
            }
            out.push('\n');
        }
        if let Err(error) = self.out.write_all(out.as_bytes()).and_then(|()| self.out.flush()) {
            warn!(%error, "terminal write failed, rendering disabled");
            self.failed = true;
        }
    }
}

// ─── Host loop ──────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let kind: AlgorithmKind = std::env::args()
        .nth(1)
        .as_deref()
        .unwrap_or("bubble")
        .parse()?;

    let config = VisualizerConfig {
        size: 60,
        ..Default::default()
    };
    let renderer = ThrottledRenderer::new(
        AsciiBars {
            out: io::stdout(),
            max_value: config.max_value,
            failed: false,
        },
        Duration::from_millis(16),
    );
    let mut vis = Visualizer::new(config, renderer)?;

    let id = vis.start(kind, 20)?;
    while let Some(wait) = vis.tick_session(id)?.next_tick_in() {
        std::thread::sleep(wait);
    }

    let metrics = vis.metrics().cloned().unwrap_or_default();
    println!(
        "{kind}: {} steps, {} swaps, {} writes ({} frames dropped)",
        metrics.steps,
        metrics.swaps,
        metrics.writes,
        vis.renderer().dropped(),
    );
    Ok(())
}
