//! Batch orchestration over all dataset rows.

use super::driver::{merge_row, TemplateSource};
use super::options::MergeOptions;
use super::report::{BatchOutput, MergeOutput, RowFailure};
use crate::data::Dataset;
use crate::error::{Error, Result};
use crate::scan::Scanner;
use rayon::prelude::*;

/// Merge every dataset row against the template.
///
/// Configuration problems (key column not declared, zero rows) fail
/// before any row is processed. Individual row failures are recorded and
/// the batch continues; only a batch where every row failed is an error.
/// Outputs come back in dataset row order regardless of completion
/// order, each tagged with its identifier and stats.
pub fn merge_batch<T: TemplateSource + ?Sized>(
    template: &T,
    dataset: &Dataset,
    key_column: &str,
    options: &MergeOptions,
) -> Result<BatchOutput> {
    if !dataset.has_column(key_column) {
        return Err(Error::KeyColumnMissing(key_column.to_string()));
    }
    if dataset.is_empty() {
        return Err(Error::EmptyDataset);
    }

    let scanner = Scanner::new(options.delimiters.clone(), options.bare_words);

    // Rows are independent and the template master is read-only, so the
    // fan-out is safe; rayon's indexed collect preserves row order.
    let results: Vec<std::result::Result<MergeOutput, RowFailure>> =
        if options.parallel && dataset.row_count() > 1 {
            dataset
                .rows()
                .par_iter()
                .enumerate()
                .map(|(index, row)| {
                    merge_row(template, dataset, row, index, key_column, options, &scanner)
                })
                .collect()
        } else {
            dataset
                .rows()
                .iter()
                .enumerate()
                .map(|(index, row)| {
                    merge_row(template, dataset, row, index, key_column, options, &scanner)
                })
                .collect()
        };

    let mut outputs = Vec::with_capacity(results.len());
    let mut failures = Vec::new();
    for result in results {
        match result {
            Ok(output) => outputs.push(output),
            Err(failure) => {
                log::warn!("row {} failed: {}", failure.row, failure.error);
                failures.push(failure);
            }
        }
    }

    if outputs.is_empty() {
        return Err(Error::NoRowsSucceeded {
            failed: failures.len(),
        });
    }

    Ok(BatchOutput { outputs, failures })
}
