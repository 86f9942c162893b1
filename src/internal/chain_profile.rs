#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::unwrap_used)]
#![allow(warnings)]

use plotters::prelude::*;
use rand::Rng;

// Number of buckets every table starts with
const BASE_CAPACITY: usize = 100_000;
// Create relative fills from 0.2 to 2.0 with 10 steps (chains can hold
// more entries than there are buckets, so fills above 1.0 are meaningful)
const NUM_FILL_STEPS: usize = 10;

// Growth policies to compare
const METHODS: [&str; 3] = ["Fixed capacity", "Double at 0.7", "Grow 1.5x at 0.7"];

// A separate-chaining table reduced to what the measurement needs:
// buckets of hashed keys plus an optional growth policy.
struct ChainTable {
    buckets: Vec<Vec<u64>>,
    size: usize,
    // Load factor that triggers a rehash; None disables growth
    threshold: Option<f64>,
    // Capacity multiplier applied on growth, as a rational (num / den)
    growth_num: usize,
    growth_den: usize,
}

impl ChainTable {
    fn new(threshold: Option<f64>, growth_num: usize, growth_den: usize) -> Self {
        Self {
            buckets: vec![Vec::new(); BASE_CAPACITY],
            size: 0,
            threshold,
            growth_num,
            growth_den,
        }
    }

    fn slot(key: u64, capacity: usize) -> usize {
        (key % capacity as u64) as usize
    }

    fn insert(&mut self, key: u64) {
        if let Some(threshold) = self.threshold {
            if self.size as f64 / self.buckets.len() as f64 > threshold {
                self.rehash();
            }
        }
        let index = Self::slot(key, self.buckets.len());
        self.buckets[index].push(key);
        self.size += 1;
    }

    fn rehash(&mut self) {
        let new_capacity = self.buckets.len() * self.growth_num / self.growth_den;
        let mut new_buckets = vec![Vec::new(); new_capacity];
        for bucket in &self.buckets {
            for &key in bucket {
                new_buckets[Self::slot(key, new_capacity)].push(key);
            }
        }
        self.buckets = new_buckets;
    }

    // Average number of chain entries inspected by a successful lookup:
    // the entry at position p costs p + 1 comparisons.
    fn mean_scan_length(&self) -> f64 {
        if self.size == 0 {
            return 0.0;
        }
        let total: usize = self.buckets.iter().map(|b| b.len() * (b.len() + 1) / 2).sum();
        total as f64 / self.size as f64
    }

    fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }

    // Rough footprint: one Vec header per bucket plus the stored keys.
    fn memory_estimate(&self) -> usize {
        let headers = self.buckets.len() * std::mem::size_of::<Vec<u64>>();
        let entries = self.size * std::mem::size_of::<u64>();
        headers + entries
    }
}

fn build_table(method: &str) -> ChainTable {
    match method {
        "Fixed capacity" => ChainTable::new(None, 1, 1),
        "Double at 0.7" => ChainTable::new(Some(0.7), 2, 1),
        "Grow 1.5x at 0.7" => ChainTable::new(Some(0.7), 3, 2),
        _ => panic!("Unknown method"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate fills from 0.2 to 2.0 relative to the base capacity
    let fills: Vec<f64> = (0..NUM_FILL_STEPS)
        .map(|i| 0.2 + (2.0 - 0.2) * (i as f64) / ((NUM_FILL_STEPS - 1) as f64))
        .collect();
    let num_keys: Vec<usize> =
        fills.iter().map(|&fill| (BASE_CAPACITY as f64 * fill) as usize).collect();

    println!("Relative fills: {:?}", fills);
    println!("Number of keys: {:?}", num_keys);

    let mut mean_scan: Vec<Vec<f64>> = vec![Vec::new(); METHODS.len()];
    let mut longest_chain: Vec<Vec<usize>> = vec![Vec::new(); METHODS.len()];
    let mut memory_estimate: Vec<Vec<usize>> = vec![Vec::new(); METHODS.len()];

    // Generate random keys outside the loop to ensure fair comparison
    let mut rng = rand::rng();
    let max_keys_needed = *num_keys.iter().max().unwrap();
    let keys: Vec<u64> =
        (0..max_keys_needed).map(|_| rng.random_range(1..1_000_000_000)).collect();

    for &n_keys in &num_keys {
        println!("Testing with {} keys", n_keys);

        for (method_idx, &method) in METHODS.iter().enumerate() {
            let mut table = build_table(method);
            for &key in keys.iter().take(n_keys) {
                table.insert(key);
            }

            let scan = table.mean_scan_length();
            let longest = table.longest_chain();
            let memory = table.memory_estimate();

            mean_scan[method_idx].push(scan);
            longest_chain[method_idx].push(longest);
            memory_estimate[method_idx].push(memory);

            println!(
                "  {}: Mean scan = {:.2}, Longest chain = {}, Capacity = {}, Memory = {} bytes",
                method,
                scan,
                longest,
                table.buckets.len(),
                memory
            );
        }
    }

    let font_family = "sans-serif";
    let colors = [
        RGBColor(220, 50, 50), // Bright red
        RGBColor(50, 90, 220), // Bright blue
        RGBColor(50, 180, 50), // Bright green
    ];
    let line_width = 2;
    let marker_size = 4;
    let text_size = 16;
    let title_size = 35;

    let x_labels: Vec<String> = num_keys.iter().map(|&n| n.to_string()).collect();

    // Plot 1: mean chain scan length per successful lookup
    let root = BitMapBackend::new("mean_scan_length.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_scan = mean_scan
        .iter()
        .flat_map(|v| v.iter())
        .fold(0.0, |max, &x| if x > max { x } else { max }) *
        1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption("Chain Scan Cost of Growth Policies", (font_family, title_size))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .right_y_label_area_size(10)
        .build_cartesian_2d(0..(num_keys.len() - 1), 0.0..max_scan)?;

    chart
        .configure_mesh()
        .x_labels(num_keys.len() - 1)
        .x_label_formatter(&|x| {
            if *x < x_labels.len() { x_labels[*x].clone() } else { "".to_string() }
        })
        .x_desc("Number of Keys Inserted")
        .y_desc("Mean Scan Length (entries)")
        .axis_desc_style((font_family, text_size))
        .draw()?;

    for (method_idx, &method) in METHODS.iter().enumerate() {
        let color = &colors[method_idx % colors.len()];
        let line_style = ShapeStyle::from(color).stroke_width(line_width);

        chart
            .draw_series(LineSeries::new(
                (0..num_keys.len() - 1).map(|i| (i, mean_scan[method_idx][i])),
                line_style,
            ))?
            .label(method)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series(
            (0..num_keys.len() - 1)
                .map(|i| Circle::new((i, mean_scan[method_idx][i]), marker_size, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    // Plot 2: longest chain, the worst-case lookup
    let root = BitMapBackend::new("longest_chain.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_longest = longest_chain
        .iter()
        .flat_map(|v| v.iter())
        .fold(0, |max, &x| if x > max { x } else { max }) as f64 *
        1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption("Longest Chain of Growth Policies", (font_family, title_size))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .right_y_label_area_size(10)
        .build_cartesian_2d(0..(num_keys.len() - 1), 0.0..max_longest)?;

    chart
        .configure_mesh()
        .x_labels(num_keys.len() - 1)
        .x_label_formatter(&|x| {
            if *x < x_labels.len() { x_labels[*x].clone() } else { "".to_string() }
        })
        .x_desc("Number of Keys Inserted")
        .y_desc("Longest Chain (entries)")
        .axis_desc_style((font_family, text_size))
        .draw()?;

    for (method_idx, &method) in METHODS.iter().enumerate() {
        let color = &colors[method_idx % colors.len()];
        let line_style = ShapeStyle::from(color).stroke_width(line_width);

        chart
            .draw_series(LineSeries::new(
                (0..num_keys.len() - 1).map(|i| (i, longest_chain[method_idx][i] as f64)),
                line_style,
            ))?
            .label(method)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series((0..num_keys.len() - 1).map(|i| {
            Circle::new((i, longest_chain[method_idx][i] as f64), marker_size, color.filled())
        }))?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    println!("Generated plot images: mean_scan_length.png, longest_chain.png");

    Ok(())
}
