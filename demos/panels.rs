//! Builds a 2x2 figure with every kind of series and writes it to disk.
//!
//! ```bash
//! RUST_LOG=honen=debug cargo run --example panels -- panels.png
//! ```

use honen::{Figure, FigureConfig, HonenResult, LineStyle, LineStyleType, Style, TickParams};
use tracing_subscriber::EnvFilter;

fn noisy_runs(runs: usize, len: usize) -> Vec<Vec<f64>> {
    // deterministic noise
    (0..runs)
        .map(|r| {
            (0..len)
                .map(|i| {
                    let t = i as f64 / len as f64;
                    (t * 6.0).sin() + 0.2 * ((r * 7 + i * 3) % 5) as f64 - 0.4
                })
                .collect()
        })
        .collect()
}

fn main() -> HonenResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "panels.png".to_string());

    let config = FigureConfig::default()
        .with_boxes(2, 2)
        .with_style(Style::Ggplot)
        .with_figsize(10.0, 8.0)
        .with_dpi(100);
    let mut figure = Figure::from_config(config)?;

    let x: Vec<f64> = (0..50).map(|i| i as f64 / 10.0).collect();
    let sin: Vec<f64> = x.iter().map(|v| v.sin()).collect();
    let cos: Vec<f64> = x.iter().map(|v| v.cos()).collect();

    figure
        .add_plot(&x, &sin, Some("sin"))?
        .add_styled_plot(
            &x,
            &cos,
            LineStyle::default().with_style(LineStyleType::Dashed),
            Some("cos"),
        )?
        .add_box_title("trigonometry")
        .add_xlabel("x")
        .add_box_legend(Some("lower left"))?
        .next()?
        .add_fill_plot_y(noisy_runs(5, 40), Some("5 runs"), None)?
        .add_box_title("replicates")
        .set_tick_params("both", TickParams::default().with_precision(1))?
        .next()?
        .prepare_bar(3, 2, None)?
        .add_bar(vec![3.0, 5.0, 2.0], Some("baseline"))?
        .add_bar_with_error(
            vec![vec![4.0, 6.0, 2.5], vec![5.0, 5.5, 3.5], vec![4.5, 6.5, 3.0]],
            Some("ours"),
        )?
        .set_bar_labels(&["small", "medium", "large"])?
        .add_box_title("scores")
        .add_box_legend(Some("upper right"))?
        .next()?
        .add_plot_y(vec![1, 4, 9, 16, 25], None)?
        .set_ylim(0.0, 30.0)?
        .set_grid(false)
        .add_box_title("squares")
        .add_global_title("honen demo")
        .tight_layout()
        .save(&output)?;

    println!("wrote {output}");
    Ok(())
}
