//! Serializing quantities with serde.
//!
//! ```bash
//! cargo run --example serialization --features serde
//! ```

use convkit::{Kilograms, Meters, Pound, Pounds};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct Parcel {
    length: Meters,
    mass: Kilograms,
    #[serde(with = "convkit::serde_with_unit")]
    declared: Pounds,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let parcel = Parcel {
        length: Meters::new(0.6),
        mass: Kilograms::new(4.5),
        declared: Kilograms::new(4.5).to::<Pound>()?,
    };

    let json = serde_json::to_string_pretty(&parcel)?;
    println!("{json}");

    let restored: Parcel = serde_json::from_str(&json)?;
    println!("length {}, mass {}, declared {}", restored.length, restored.mass, restored.declared);

    let mislabeled = r#"{"length": 1.0, "mass": 1.0, "declared": {"value": 1.0, "unit": "kg"}}"#;
    if let Err(err) = serde_json::from_str::<Parcel>(mislabeled) {
        println!("rejected: {err}");
    }

    Ok(())
}
