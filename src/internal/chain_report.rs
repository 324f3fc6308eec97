#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::cast_precision_loss)]

use chained_table::{ChainStats, HashTable};
use plotters::prelude::*;
use rand::{Rng, distr::Alphanumeric};

const KEYS_AMOUNT: usize = 5_000;
const OUTPUT: &str = "chain_lengths.png";

/// One observation taken after an insertion
struct Sample {
    stats: ChainStats,
    load: f64,
    capacity: usize,
}

fn random_key(rng: &mut impl Rng) -> String {
    let length = rng.random_range(4..12);
    rng.sample_iter(Alphanumeric).take(length).map(char::from).collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = rand::rng();
    let mut table = HashTable::default();
    let mut samples = Vec::with_capacity(KEYS_AMOUNT);

    for value in 0..KEYS_AMOUNT {
        table.set(random_key(&mut rng), value)?;
        samples.push(Sample {
            stats: table.chain_stats(),
            load: table.current_load(),
            capacity: table.capacity(),
        });
    }

    let resizes: Vec<usize> = samples
        .windows(2)
        .enumerate()
        .filter_map(|(i, pair)| match pair {
            [before, after] if after.capacity > before.capacity => Some(i.saturating_add(1)),
            _ => None,
        })
        .collect();

    let last = samples.last().map(|sample| sample.stats);
    println!("Inserted {} keys into {} buckets", table.len(), table.capacity());
    println!("Resizes after inserts: {resizes:?}");
    if let Some(stats) = last {
        println!(
            "Longest chain = {}, mean chain = {:.3}, empty buckets = {}",
            stats.longest_chain, stats.mean_chain, stats.empty_buckets
        );
    }

    let font_family = "sans-serif";
    let text_size = 16;
    let title_size = 35;
    let line_width = 2;

    let root = BitMapBackend::new(OUTPUT, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_y = samples
        .iter()
        .map(|sample| sample.stats.longest_chain as f64)
        .fold(1.0, f64::max) *
        1.1; // Add 10% margin

    let mut chart = ChartBuilder::on(&root)
        .caption("Bucket Chain Lengths While Growing", (font_family, title_size))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .right_y_label_area_size(10)
        .build_cartesian_2d(0..samples.len(), 0.0..max_y)?;

    chart
        .configure_mesh()
        .x_desc("Number of Keys Inserted")
        .y_desc("Entries per Bucket")
        .axis_desc_style((font_family, text_size))
        .draw()?;

    let longest_style = ShapeStyle::from(&RGBColor(220, 50, 50)).stroke_width(line_width);
    chart
        .draw_series(LineSeries::new(
            samples.iter().enumerate().map(|(i, sample)| (i, sample.stats.longest_chain as f64)),
            longest_style,
        ))?
        .label("Longest chain")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], longest_style));

    let mean_style = ShapeStyle::from(&RGBColor(50, 90, 220)).stroke_width(line_width);
    chart
        .draw_series(LineSeries::new(
            samples.iter().enumerate().map(|(i, sample)| (i, sample.stats.mean_chain)),
            mean_style,
        ))?
        .label("Mean non-empty chain")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], mean_style));

    let load_style = ShapeStyle::from(&RGBColor(50, 180, 50)).stroke_width(line_width);
    chart
        .draw_series(LineSeries::new(
            samples.iter().enumerate().map(|(i, sample)| (i, sample.load)),
            load_style,
        ))?
        .label("Entries / buckets")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], load_style));

    // Mark every doubling of the bucket array
    let resize_style = ShapeStyle::from(&BLACK.mix(0.3)).stroke_width(1);
    for (n, &at) in resizes.iter().enumerate() {
        let series = chart
            .draw_series(LineSeries::new(vec![(at, 0.0), (at, max_y)], resize_style))?;
        if n == 0 {
            series
                .label("Resize")
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], resize_style));
        }
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    println!("Generated plot image: {OUTPUT}");

    Ok(())
}
