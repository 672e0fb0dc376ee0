use std::sync::Arc;

use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

/// Minimal deterministic PRNG (splitmix64).
struct SplitMix {
    state: u64,
}

impl SplitMix {
    fn new(seed: u64) -> Self {
        SplitMix { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Marsaglia polar method for normal deviates.
    fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        loop {
            let u = 2.0 * self.next_f64() - 1.0;
            let v = 2.0 * self.next_f64() - 1.0;
            let s = u * u + v * v;
            if s > 0.0 && s < 1.0 {
                return mean + std_dev * u * (-2.0 * s.ln() / s).sqrt();
            }
        }
    }
}

struct Row {
    brand: String,
    model: String,
    battery_kwh: f64,
    range_km: f64,
    top_speed_kmh: f64,
    price_eur: f64,
    seats: i64,
}

fn main() {
    let mut rng = SplitMix::new(42);

    // (brand, base battery kWh, base range km, base top speed, base price)
    let brands: [(&str, f64, f64, f64, f64); 4] = [
        ("Voltora", 58.0, 420.0, 160.0, 36_900.0),
        ("Ionika", 77.0, 510.0, 185.0, 48_500.0),
        ("Ampère", 45.0, 340.0, 150.0, 29_900.0),
        ("Stratus", 95.0, 610.0, 210.0, 72_000.0),
    ];
    // (trim, scale factor, seats)
    let trims: [(&str, f64, i64); 3] = [("City", 0.85, 4), ("Tour", 1.0, 5), ("GT", 1.2, 5)];

    let mut rows = Vec::new();
    for (brand, battery, range, speed, price) in brands {
        for (trim, scale, seats) in trims {
            for year in [2023i64, 2024, 2025] {
                let drift = 1.0 + 0.03 * (year - 2023) as f64;
                rows.push(Row {
                    brand: brand.to_string(),
                    model: format!("{brand} {trim} {year}"),
                    battery_kwh: round1(battery * scale * drift + rng.normal(0.0, 1.5)),
                    range_km: round1(range * scale * drift + rng.normal(0.0, 12.0)),
                    top_speed_kmh: round1(speed * scale + rng.normal(0.0, 4.0)),
                    price_eur: round1(price * scale * drift + rng.normal(0.0, 800.0)),
                    seats,
                });
            }
        }
    }

    write_csv("sample_data.csv", &rows).expect("Failed to write CSV");
    write_parquet("sample_data.parquet", &rows).expect("Failed to write Parquet");

    println!(
        "Wrote {} vehicles to sample_data.csv and sample_data.parquet",
        rows.len()
    );
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

fn write_csv(path: &str, rows: &[Row]) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "brand",
        "model",
        "battery_kwh",
        "range_km",
        "top_speed_kmh",
        "price_eur",
        "seats",
    ])?;
    for row in rows {
        let record = [
            row.brand.clone(),
            row.model.clone(),
            row.battery_kwh.to_string(),
            row.range_km.to_string(),
            row.top_speed_kmh.to_string(),
            row.price_eur.to_string(),
            row.seats.to_string(),
        ];
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_parquet(path: &str, rows: &[Row]) -> Result<(), Box<dyn std::error::Error>> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("brand", DataType::Utf8, false),
        Field::new("model", DataType::Utf8, false),
        Field::new("battery_kwh", DataType::Float64, false),
        Field::new("range_km", DataType::Float64, false),
        Field::new("top_speed_kmh", DataType::Float64, false),
        Field::new("price_eur", DataType::Float64, false),
        Field::new("seats", DataType::Int64, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(StringArray::from(
                rows.iter().map(|r| r.brand.as_str()).collect::<Vec<_>>(),
            )),
            Arc::new(StringArray::from(
                rows.iter().map(|r| r.model.as_str()).collect::<Vec<_>>(),
            )),
            Arc::new(Float64Array::from(
                rows.iter().map(|r| r.battery_kwh).collect::<Vec<_>>(),
            )),
            Arc::new(Float64Array::from(
                rows.iter().map(|r| r.range_km).collect::<Vec<_>>(),
            )),
            Arc::new(Float64Array::from(
                rows.iter().map(|r| r.top_speed_kmh).collect::<Vec<_>>(),
            )),
            Arc::new(Float64Array::from(
                rows.iter().map(|r| r.price_eur).collect::<Vec<_>>(),
            )),
            Arc::new(Int64Array::from(
                rows.iter().map(|r| r.seats).collect::<Vec<_>>(),
            )),
        ],
    )?;

    let file = std::fs::File::create(path)?;
    let mut writer = ArrowWriter::try_new(file, schema, None)?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(())
}
