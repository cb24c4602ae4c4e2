//! Write two deterministic demo measurement files so the viewer can be
//! exercised without real lab data:
//!
//! ```text
//! cargo run --bin generate_sample
//! ```
//!
//! Output: `material_a.csv` and `material_b.csv` in the working directory,
//! third-octave bands 100–5000 Hz, one absorption column per
//! (thickness, density) combination in thickness-major order.

const THICKNESSES_MM: [f64; 3] = [10.0, 20.0, 30.0];
const DENSITIES_KG_M3: [f64; 3] = [75.0, 110.0, 150.0];

const BANDS_HZ: [f64; 18] = [
    100.0, 125.0, 160.0, 200.0, 250.0, 315.0, 400.0, 500.0, 630.0, 800.0, 1000.0, 1250.0, 1600.0,
    2000.0, 2500.0, 3150.0, 4000.0, 5000.0,
];

/// Smooth porous-absorber response: absorption rises with frequency and
/// saturates; thicker and denser samples saturate earlier. `response` shifts
/// the knee so the two demo materials differ visibly.
fn absorption(frequency_hz: f64, thickness_mm: f64, density_kg_m3: f64, response: f64) -> f64 {
    let x = frequency_hz * (thickness_mm / 1000.0) * (density_kg_m3 / 100.0).sqrt() / response;
    x / (1.0 + x)
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

fn write_material(path: &str, response: f64, seed: u64) {
    let mut rng = SimpleRng::new(seed);
    let mut writer = csv::Writer::from_path(path).expect("Failed to create output file");

    let mut header = vec!["frequency_hz".to_string()];
    for &t in &THICKNESSES_MM {
        for &d in &DENSITIES_KG_M3 {
            header.push(format!("t{t:.0}_d{d:.0}"));
        }
    }
    writer.write_record(&header).expect("Failed to write header");

    for &f in &BANDS_HZ {
        let mut record = vec![format!("{f:.0}")];
        for &t in &THICKNESSES_MM {
            for &d in &DENSITIES_KG_M3 {
                let alpha = (absorption(f, t, d, response) + rng.gauss(0.0, 0.008))
                    .clamp(0.0, 1.0);
                record.push(format!("{alpha:.3}"));
            }
        }
        writer.write_record(&record).expect("Failed to write row");
    }

    writer.flush().expect("Failed to flush output file");
}

fn main() {
    write_material("material_a.csv", 420.0, 7);
    write_material("material_b.csv", 610.0, 11);

    println!(
        "Wrote material_a.csv and material_b.csv ({} bands, {} data columns each)",
        BANDS_HZ.len(),
        THICKNESSES_MM.len() * DENSITIES_KG_M3.len()
    );
}
