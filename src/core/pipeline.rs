use crate::core::{ConfigProvider, Pipeline, ResultEntry, ResultSet, Storage, Triplet};
use crate::utils::error::{MultiplesError, Result};
use crate::utils::validation::{content_lines, validate_line, validate_source};
use std::collections::HashSet;

pub struct MultiplesPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> MultiplesPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    /// All distinct multiples of `a` or `b` strictly below `goal`, ascending.
    /// Stops as soon as both i*a and i*b have reached the goal; nothing past
    /// that point can qualify.
    fn multiples_below_goal(triplet: &Triplet) -> Result<Vec<u64>> {
        let Triplet { a, b, goal } = *triplet;
        let mut found: HashSet<u64> = HashSet::new();

        for i in 1u64.. {
            let multiple_a = checked_product(i, a)?;
            let multiple_b = checked_product(i, b)?;

            if multiple_a < goal {
                found.insert(multiple_a);
            }
            if multiple_b < goal {
                found.insert(multiple_b);
            }
            if multiple_a >= goal && multiple_b >= goal {
                break;
            }
        }

        let mut multiples: Vec<u64> = found.into_iter().collect();
        multiples.sort_unstable();
        Ok(multiples)
    }
}

fn checked_product(i: u64, base: u64) -> Result<u64> {
    i.checked_mul(base).ok_or_else(|| MultiplesError::RangeError {
        message: format!("multiple {} * {} overflows", i, base),
    })
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for MultiplesPipeline<S, C> {
    /// Validation pass over the whole file first; only a fully clean file is
    /// read again and parsed into triplets.
    async fn extract(&self) -> Result<Vec<Triplet>> {
        let input_path = self.config.input_path();

        tracing::debug!("Validating input file: {}", input_path);
        let raw = self.storage.read_file(input_path).await?;
        validate_source(input_path, &raw)?;

        tracing::debug!("Validation passed, parsing triplets");
        let raw = self.storage.read_file(input_path).await?;
        let text = std::str::from_utf8(&raw).map_err(|_| MultiplesError::EncodingError {
            path: input_path.to_string(),
        })?;

        let mut triplets = Vec::new();
        for (index, line) in content_lines(text).iter().enumerate() {
            triplets.push(validate_line(input_path, index + 1, line)?);
        }

        Ok(triplets)
    }

    /// Pure computation over validated triplets: one entry per line, entries
    /// ordered by multiple count ascending. The sort is stable so lines with
    /// equal counts keep their input order.
    async fn transform(&self, triplets: Vec<Triplet>) -> Result<ResultSet> {
        let mut entries = Vec::with_capacity(triplets.len());

        for triplet in &triplets {
            let multiples = Self::multiples_below_goal(triplet)?;
            entries.push(ResultEntry {
                goal: triplet.goal,
                multiples,
            });
        }

        entries.sort_by_key(|entry| entry.multiples.len());

        Ok(ResultSet { entries })
    }

    /// Prints each entry to the console, then writes the same lines to the
    /// output file in one shot.
    async fn load(&self, result: ResultSet) -> Result<String> {
        for entry in &result.entries {
            println!("{}", entry);
        }

        let output_path = self.config.output_path();
        let body = result.render();

        tracing::debug!(
            "Writing {} result lines ({} bytes) to {}",
            result.entries.len(),
            body.len(),
            output_path
        );
        self.storage.write_file(output_path, body.as_bytes()).await?;

        Ok(output_path.to_string())
    }
}
