//! Writes a synthetic `singapore_cleaned.csv` so the dashboard runs without
//! a real export on hand. Deterministic: the same seed always produces the
//! same file.

use anyhow::{Context, Result};
use serde::Serialize;

const OUTPUT: &str = "singapore_cleaned.csv";
const ROWS_PER_YEAR: usize = 120;
const YEARS: std::ops::RangeInclusive<i32> = 2010..=2024;

/// Annual price growth applied on top of the 2010 baseline.
const YEARLY_GROWTH: f64 = 1.035;

#[derive(Serialize)]
struct Row {
    year: i32,
    town: String,
    flat_type: String,
    floor_area_sqm: f64,
    resale_price: f64,
}

/// (town, price multiplier): central towns trade above the outer estates.
const TOWNS: [(&str, f64); 10] = [
    ("ANG MO KIO", 1.00),
    ("BEDOK", 0.98),
    ("BISHAN", 1.18),
    ("BUKIT TIMAH", 1.35),
    ("CENTRAL AREA", 1.40),
    ("JURONG WEST", 0.88),
    ("QUEENSTOWN", 1.22),
    ("TAMPINES", 1.02),
    ("WOODLANDS", 0.85),
    ("YISHUN", 0.86),
];

/// (flat type, typical area sqm, 2010 baseline price SGD).
const FLAT_TYPES: [(&str, f64, f64); 4] = [
    ("3 ROOM", 68.0, 280_000.0),
    ("4 ROOM", 93.0, 380_000.0),
    ("5 ROOM", 112.0, 450_000.0),
    ("EXECUTIVE", 135.0, 540_000.0),
];

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(0x5EED_CA5A);
    let mut writer = csv::Writer::from_path(OUTPUT)
        .with_context(|| format!("creating {OUTPUT}"))?;

    let mut written = 0usize;
    for year in YEARS {
        let growth = YEARLY_GROWTH.powi(year - 2010);
        for _ in 0..ROWS_PER_YEAR {
            let (town, town_factor) = TOWNS[rng.index(TOWNS.len())];
            let (flat_type, typical_area, base_price) = FLAT_TYPES[rng.index(FLAT_TYPES.len())];

            let floor_area_sqm = (typical_area + rng.gauss(0.0, 6.0)).max(30.0).round();
            let area_factor = floor_area_sqm / typical_area;
            let resale_price = (base_price * town_factor * area_factor * growth
                + rng.gauss(0.0, 18_000.0))
            .max(80_000.0)
            .round();

            writer.serialize(Row {
                year,
                town: town.to_string(),
                flat_type: flat_type.to_string(),
                floor_area_sqm,
                resale_price,
            })?;
            written += 1;
        }
    }

    writer.flush().context("flushing CSV")?;
    println!("wrote {written} rows to {OUTPUT}");
    Ok(())
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform float in [0, 1).
    fn uniform(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform index in [0, n).
    fn index(&mut self, n: usize) -> usize {
        (self.uniform() * n as f64) as usize % n
    }

    /// Gaussian sample via Box-Muller.
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.uniform().max(f64::MIN_POSITIVE);
        let u2 = self.uniform();
        let z = (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos();
        mean + std_dev * z
    }
}
