//! Compare isoreg-rs fits against reference fits exported from R's `isoreg`.
//!
//! Each `*.json` file in `../output/r` holds one case:
//! `{"name": ..., "notes": ..., "input": {"y": [...]}, "reference": {"yf": [...]}}`.
//! The fitted values are written next to the reference in `../output/isoreg_rs`
//! together with the largest absolute difference.

use isoreg_rs::prelude::*;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Serialize)]
struct ValidationData {
    name: String,
    notes: String,
    input: InputData,
    reference: ReferenceData,
    #[serde(skip_deserializing)]
    result: ResultData,
}

#[derive(Debug, Deserialize, Serialize)]
struct InputData {
    y: Vec<f64>,
}

#[derive(Debug, Deserialize, Serialize)]
struct ReferenceData {
    yf: Vec<f64>,
}

#[derive(Debug, Deserialize, Serialize, Default)]
struct ResultData {
    yf: Vec<f64>,
    knots: Vec<usize>,
    max_abs_diff: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    let input_dir = Path::new("../output/r");
    let output_dir = Path::new("../output/isoreg_rs");

    if !input_dir.exists() {
        eprintln!(
            "Input directory {:?} does not exist. Run validate.R first.",
            input_dir
        );
        return Ok(());
    }

    fs::create_dir_all(output_dir)?;

    let mut worst = 0.0f64;
    for entry in fs::read_dir(input_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            let diff = process_file(&path, output_dir)?;
            println!("{:?}: max |diff| = {:e}", path.file_name().unwrap_or_default(), diff);
            worst = worst.max(diff);
        }
    }

    println!("Worst case: {:e}", worst);
    Ok(())
}

fn process_file(input_path: &Path, output_dir: &Path) -> Result<f64, Box<dyn Error>> {
    let file = fs::File::open(input_path)?;
    let mut data: ValidationData = serde_json::from_reader(file)?;

    let model = IsoReg::new().return_knots().build()?;
    let result = model.fit(&data.input.y)?;

    if result.yf.len() != data.reference.yf.len() {
        return Err(format!(
            "{}: fitted {} values, reference has {}",
            data.name,
            result.yf.len(),
            data.reference.yf.len()
        )
        .into());
    }

    let max_abs_diff = result
        .yf
        .iter()
        .zip(&data.reference.yf)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max);

    data.result = ResultData {
        yf: result.yf,
        knots: result.knots.unwrap_or_default(),
        max_abs_diff,
    };

    let file_name = input_path.file_name().ok_or("missing file name")?;
    let output_json = serde_json::to_string_pretty(&data)?;
    fs::write(output_dir.join(file_name), output_json)?;

    Ok(max_abs_diff)
}
