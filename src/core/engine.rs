use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct PipelineEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> PipelineEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs the three phases strictly in sequence. Any error short-circuits
    /// before the next phase starts, so a rejected input never produces an
    /// output file.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Validating and reading input...");
        let triplets = self.pipeline.extract().await?;
        tracing::info!("Validated {} lines", triplets.len());

        tracing::info!("Computing multiples...");
        let result = self.pipeline.transform(triplets).await?;
        tracing::info!("Computed {} result entries", result.entries.len());

        tracing::info!("Writing results...");
        let output_path = self.pipeline.load(result).await?;

        Ok(output_path)
    }
}
