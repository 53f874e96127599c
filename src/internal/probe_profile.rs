#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::unwrap_used)]

//! Profiles robin-hood probe distances across load factors.
//!
//! For each load factor a set is filled with random keys, then put through a
//! round of delete/insert churn that leaves tombstones behind. Mean and worst
//! probe distances of both phases are printed and plotted.

use plotters::prelude::*;
use rand::Rng;
use robinset::{ProbeStats, RobinHoodSet};

// Number of keys stored in every profiled set
const KEY_COUNT: usize = 200_000;
// Load factors from 0.1 to 0.9
const NUM_LOAD_FACTORS: usize = 9;

const PHASES: [&str; 2] = ["Fresh table", "After churn"];

/// Fills a set sized for `KEY_COUNT` keys at `load`, then replaces half of them.
fn profile(load: f64, rng: &mut impl Rng) -> Result<[ProbeStats; 2], robinset::SetError> {
    let mut set = RobinHoodSet::with_defaults(KEY_COUNT, load)?;
    let mut keys: Vec<u64> = Vec::with_capacity(KEY_COUNT);

    while keys.len() < KEY_COUNT {
        let key = rng.random::<u64>();
        if set.try_insert(key)? {
            keys.push(key);
        }
    }
    let fresh = set.probe_stats();

    // Churn: the count never exceeds KEY_COUNT, so the store is not rebuilt and
    // tombstones accumulate.
    for key in keys.iter().step_by(2) {
        set.remove(key);
    }
    let mut inserted = 0;
    while inserted < KEY_COUNT / 2 {
        if set.try_insert(rng.random::<u64>())? {
            inserted += 1;
        }
    }
    let churned = set.probe_stats();

    Ok([fresh, churned])
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let load_factors: Vec<f64> =
        (0..NUM_LOAD_FACTORS).map(|i| 0.1 + 0.8 * (i as f64) / ((NUM_LOAD_FACTORS - 1) as f64)).collect();

    println!("Load factors: {load_factors:?}");

    let mut mean_distance: Vec<Vec<f64>> = vec![Vec::new(); PHASES.len()];
    let mut max_distance: Vec<Vec<f64>> = vec![Vec::new(); PHASES.len()];

    let mut rng = rand::rng();
    for &load in &load_factors {
        let stats = profile(load, &mut rng)?;
        for (phase_idx, phase_stats) in stats.iter().enumerate() {
            mean_distance[phase_idx].push(phase_stats.mean_distance());
            max_distance[phase_idx].push(phase_stats.max_distance as f64);
            println!(
                "  load {:.2} / {}: slots = {}, mean = {:.3}, max = {}, tombstones = {}",
                load,
                PHASES[phase_idx],
                phase_stats.filled + phase_stats.deleted + phase_stats.empty,
                phase_stats.mean_distance(),
                phase_stats.max_distance,
                phase_stats.deleted
            );
        }
    }

    let x_labels: Vec<String> = load_factors.iter().map(|load| format!("{load:.1}")).collect();
    draw(
        "average_probe_distance.png",
        "Robin-Hood Mean Probe Distance",
        "Mean probe distance",
        &x_labels,
        &mean_distance,
    )?;
    draw(
        "worst_case_probe_distance.png",
        "Robin-Hood Worst-Case Probe Distance",
        "Max probe distance",
        &x_labels,
        &max_distance,
    )?;

    println!("Generated plot images: average_probe_distance.png, worst_case_probe_distance.png");

    Ok(())
}

/// Draws one line per phase against the load factor index.
fn draw(
    path: &str,
    caption: &str,
    y_desc: &str,
    x_labels: &[String],
    series: &[Vec<f64>],
) -> Result<(), Box<dyn std::error::Error>> {
    let font_family = "sans-serif";
    let colors = [
        RGBColor(220, 50, 50), // Bright red
        RGBColor(50, 90, 220), // Bright blue
    ];
    let line_width = 2;
    let marker_size = 4;
    let text_size = 16;
    let title_size = 35;

    let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_y = series.iter().flat_map(|v| v.iter()).fold(0.0, |max, &y| if y > max { y } else { max }) *
        1.1; // Add 10% margin
    let points = x_labels.len() - 1;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, (font_family, title_size))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .right_y_label_area_size(10)
        .build_cartesian_2d(0..points, 0.0..max_y.max(1.0))?;

    chart
        .configure_mesh()
        .x_labels(x_labels.len())
        .x_label_formatter(&|x| x_labels.get(*x).cloned().unwrap_or_default())
        .x_desc("Load factor")
        .y_desc(y_desc)
        .axis_desc_style((font_family, text_size))
        .draw()?;

    for (phase_idx, &phase) in PHASES.iter().enumerate() {
        let color = &colors[phase_idx % colors.len()];
        let line_style = ShapeStyle::from(color).stroke_width(line_width);

        chart
            .draw_series(LineSeries::new(
                (0..=points).map(|i| (i, series[phase_idx][i])),
                line_style,
            ))?
            .label(phase)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series(
            (0..=points).map(|i| Circle::new((i, series[phase_idx][i]), marker_size, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    Ok(())
}
