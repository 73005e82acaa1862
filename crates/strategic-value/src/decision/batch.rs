use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::domain::ScenarioInput;

#[derive(Debug, thiserror::Error)]
pub enum BatchImportError {
    #[error("failed to read scenario export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid scenario CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Loads scenario inputs for batch scoring from a CSV export with `cost`,
/// `time_to_implement`, and `strategic_importance` columns.
///
/// Row order is preserved so batch results line up with the source file.
/// Range validation happens in the scoring engine, not here.
pub struct ScenarioCsvImporter;

impl ScenarioCsvImporter {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Vec<ScenarioInput>, BatchImportError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ScenarioInput>, BatchImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut inputs = Vec::new();
        for record in csv_reader.deserialize::<ScenarioRow>() {
            let row = record?;
            inputs.push(ScenarioInput {
                cost: row.cost,
                time_to_implement: row.time_to_implement,
                strategic_importance: row.strategic_importance,
            });
        }

        Ok(inputs)
    }
}

#[derive(Debug, Deserialize)]
struct ScenarioRow {
    cost: f64,
    time_to_implement: f64,
    strategic_importance: f64,
}
