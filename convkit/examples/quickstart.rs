//! Minimal end-to-end example: free-function conversions, typed quantities and a configured converter.

use convkit::config::ConverterConfig;
use convkit::{kg_to_lb, mi_to_km, Converter, Gram, Kilograms, Kilometer, Mile, Miles};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("10 mi = {:.2} km", mi_to_km(10.0)?);
    println!("3 kg = {:.2} lb", kg_to_lb(3.0)?);

    let marathon = Miles::new(26.2);
    println!("{} = {}", marathon, marathon.to::<Kilometer>()?);
    println!("{} = {}", Kilograms::new(0.25), Kilograms::new(0.25).to::<Gram>()?);

    if let Err(err) = mi_to_km(-1.0) {
        println!("rejected: {err}");
    }

    let config = ConverterConfig::from_toml_str("[validation]\npolicy = \"lenient\"\n")?;
    let converter = Converter::from_config(&config)?;
    println!(
        "lenient NaN passes through: {}",
        converter.convert::<Mile, Kilometer>(f64::NAN)?
    );

    Ok(())
}
