use chrono::{Duration, TimeZone, Utc};

/// Peak-shaped pollution episode centred on a reading index.
fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
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

fn main() {
    let mut rng = SimpleRng::new(42);

    // One week of readings, one every 10 minutes.
    let n_readings: i64 = 7 * 24 * 6;
    let start = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .expect("valid start date");

    // Episodes that should have tripped the firmware alarm:
    // (centre index, width in readings, peak µg/m³ above baseline).
    let episodes: &[(f64, f64, f64)] = &[
        (260.0, 30.0, 45.0),
        (510.0, 18.0, 60.0),
        (820.0, 40.0, 35.0),
    ];

    let output_path = "pm10_values.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record(["pm10", "date (Europe/London)"])
        .expect("Failed to write header");

    for i in 0..n_readings {
        let t = start + Duration::minutes(10 * i);

        // Diurnal baseline: quiet nights, traffic peaks around 08:00 / 18:00.
        let hour = (i as f64 * 10.0 / 60.0) % 24.0;
        let baseline = 20.0
            + 8.0 * gaussian(hour, 8.0, 2.0, 1.0)
            + 10.0 * gaussian(hour, 18.0, 2.5, 1.0);

        let boost: f64 = episodes
            .iter()
            .map(|&(mu, sigma, amp)| gaussian(i as f64, mu, sigma, amp))
            .sum();

        let pm10 = (baseline + boost + rng.gauss(0.0, 2.5)).max(0.0);

        writer
            .write_record([format!("{pm10:.1}"), t.to_rfc3339()])
            .expect("Failed to write row");
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {n_readings} readings to {output_path}");
}
