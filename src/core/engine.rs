use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct MatchEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> MatchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs the full batch: load both sources, match by proximity, write the
    /// id mapping. Each stage completes before the next begins; returns the
    /// path the result was written to.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Loading sensor data...");
        let data = self.pipeline.extract().await?;
        tracing::info!(
            "Loaded {} CSV records and {} JSON records",
            data.primary.len(),
            data.secondary.len()
        );

        tracing::info!("Matching sensors by proximity...");
        let result = self.pipeline.transform(data).await?;
        tracing::info!("Matched {} sensor pairs", result.mapping.len());

        tracing::info!("Writing match results...");
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
