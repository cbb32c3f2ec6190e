use anyhow::Result;
use serde::Serialize;

use super::render::table;
use super::{OutputFormat, print_json};
use crate::domain::statistics::MetricKey;

#[derive(Debug, Serialize)]
struct MetricOption {
    key: MetricKey,
    label: &'static str,
    color: &'static str,
}

pub fn run(format: OutputFormat) -> Result<()> {
    let options: Vec<MetricOption> = MetricKey::ALL
        .into_iter()
        .map(|key| MetricOption {
            key,
            label: key.label(),
            color: key.color(),
        })
        .collect();

    match format {
        OutputFormat::Json => print_json(&options),
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = options
                .iter()
                .map(|o| vec![o.key.to_string(), o.label.to_string(), o.color.to_string()])
                .collect();
            print!("{}", table(&["Key", "Label", "Color"], &rows));
            Ok(())
        }
    }
}
