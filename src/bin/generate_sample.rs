use std::fs::File;
use std::io::{BufWriter, Write};

use g25_average::{format_g25, DIMS};

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

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Population centroid: decaying magnitudes, sign and scale driven by `seed`.
fn centroid(seed: u64) -> Vec<f64> {
    let mut rng = SimpleRng::new(seed);
    (0..DIMS)
        .map(|i| rng.gauss(0.0, 0.08 / (1.0 + i as f64 * 0.4)))
        .collect()
}

fn jitter(center: &[f64], spread: f64, rng: &mut SimpleRng) -> Vec<f64> {
    center
        .iter()
        .enumerate()
        .map(|(i, &c)| c + rng.gauss(0.0, spread / (1.0 + i as f64 * 0.4)))
        .collect()
}

fn main() -> std::io::Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_g25.txt".to_string());
    let mut rng = SimpleRng::new(42);

    // Deliberately unbalanced so grouped and simple averaging differ.
    let populations: [(&str, u64, usize, bool); 4] = [
        ("German_Hamburg", 1, 12, true),
        ("Ukrainian_Lviv", 2, 5, false),
        ("Polish", 3, 3, false),
        ("Basque_French", 4, 1, true),
    ];

    let mut out = BufWriter::new(File::create(&output_path)?);
    writeln!(out, "# Synthetic G25 coordinates, not real samples")?;
    writeln!(out, "# name,PC1..PC{DIMS}")?;

    let mut written = 0usize;
    for (population, seed, count, with_ids) in populations {
        let center = centroid(seed);
        writeln!(out)?;
        writeln!(out, "# {population}")?;
        for i in 0..count {
            let name = if with_ids {
                format!("{population}:GSM{:07}", 1031500 + written)
            } else if count > 1 {
                format!("{population}_{}", i + 1)
            } else {
                population.to_string()
            };
            writeln!(out, "{}", format_g25(&name, &jitter(&center, 0.004, &mut rng)))?;
            written += 1;
        }
    }
    out.flush()?;

    println!(
        "Wrote {written} samples from {} populations to {output_path}",
        populations.len()
    );
    Ok(())
}
