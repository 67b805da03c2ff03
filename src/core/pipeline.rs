use crate::core::matcher::match_sensors;
use crate::core::{ConfigProvider, ExtractResult, MatchResult, Pipeline, SensorRecord, Storage};
use crate::utils::error::{MatchError, Result};
use crate::utils::validation::is_valid_coordinate;

pub struct SensorPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> SensorPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    /// Parses the CSV source. The first line is a header and is never parsed
    /// as data. Rows that are too short, have non-numeric coordinates, or
    /// fall outside the legal coordinate ranges are skipped without error.
    /// A non-numeric id on an otherwise-valid row aborts the run.
    fn parse_csv(data: &[u8]) -> Result<Vec<SensorRecord>> {
        let mut records = Vec::new();
        let mut skipped = 0usize;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(data);

        for (index, row) in reader.records().enumerate() {
            let row = row?;

            if row.len() < 3 {
                skipped += 1;
                continue;
            }

            let (Ok(lat), Ok(lon)) = (row[1].trim().parse::<f64>(), row[2].trim().parse::<f64>())
            else {
                skipped += 1;
                continue;
            };

            if !is_valid_coordinate(lat, lon) {
                skipped += 1;
                continue;
            }

            // The id is only parsed once the coordinates check out, and a bad
            // id is fatal rather than a per-row skip.
            let id = row[0]
                .trim()
                .parse::<i64>()
                .map_err(|_| MatchError::InvalidSensorId {
                    value: row[0].to_string(),
                    // +2 accounts for the header line and zero-based index
                    line: index + 2,
                })?;

            records.push(SensorRecord::new(id, lat, lon));
        }

        if skipped > 0 {
            tracing::debug!("Skipped {} invalid CSV rows", skipped);
        }

        Ok(records)
    }

    /// Decodes the JSON source as an array of sensor records, then drops
    /// entries with out-of-range coordinates. A document that fails to
    /// decode is fatal.
    fn parse_json(data: &[u8]) -> Result<Vec<SensorRecord>> {
        let decoded: Vec<SensorRecord> = serde_json::from_slice(data)?;
        let total = decoded.len();

        let records: Vec<SensorRecord> = decoded
            .into_iter()
            .filter(|r| is_valid_coordinate(r.latitude, r.longitude))
            .collect();

        if records.len() < total {
            tracing::debug!(
                "Dropped {} JSON records with out-of-range coordinates",
                total - records.len()
            );
        }

        Ok(records)
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SensorPipeline<S, C> {
    async fn extract(&self) -> Result<ExtractResult> {
        tracing::debug!("Reading CSV source: {}", self.config.csv_file());
        let csv_bytes = self.storage.read_file(self.config.csv_file()).await?;
        let primary = Self::parse_csv(&csv_bytes)?;

        tracing::debug!("Reading JSON source: {}", self.config.json_file());
        let json_bytes = self.storage.read_file(self.config.json_file()).await?;
        let secondary = Self::parse_json(&json_bytes)?;

        Ok(ExtractResult { primary, secondary })
    }

    async fn transform(&self, data: ExtractResult) -> Result<MatchResult> {
        let primary_count = data.primary.len();
        let secondary_count = data.secondary.len();

        let mapping = match_sensors(&data.primary, &data.secondary, self.config.radius_m());

        tracing::debug!(
            "Matched {} of {} primary sensors within {} m",
            mapping.len(),
            primary_count,
            self.config.radius_m()
        );

        Ok(MatchResult {
            mapping,
            primary_count,
            secondary_count,
        })
    }

    async fn load(&self, result: MatchResult) -> Result<String> {
        let json_data = serde_json::to_string_pretty(&result.mapping)?;

        tracing::debug!(
            "Writing {} match entries to {}",
            result.mapping.len(),
            self.config.output_file()
        );
        self.storage
            .write_file(self.config.output_file(), json_data.as_bytes())
            .await?;

        Ok(self.config.output_file().to_string())
    }
}
