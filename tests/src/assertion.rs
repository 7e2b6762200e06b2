//! Comparison expectations.

use crate::{TestError, TestResult};
use intent_tree::{first_mismatch, CompareOptions, IntentNode, Mismatch};

/// What a comparison between two nodes should report.
///
/// Comparisons are always checked in both directions.
#[derive(Debug, Clone, Default)]
pub struct Expect {
    mismatch: Option<Mismatch>,
    options: CompareOptions,
}

impl Expect {
    /// Expect the same intent.
    pub fn same() -> Self {
        Self::default()
    }

    /// Expect the comparison to stop at `mismatch`.
    pub fn mismatch(mismatch: Mismatch) -> Self {
        Self {
            mismatch: Some(mismatch),
            ..Self::default()
        }
    }

    pub fn without_annotations(mut self) -> Self {
        self.options.include_annotations = false;
        self
    }

    pub fn verify(
        &self,
        check: &str,
        left: &dyn IntentNode,
        right: &dyn IntentNode,
    ) -> TestResult<()> {
        let forward = first_mismatch(left, right, &self.options);
        let backward = first_mismatch(right, left, &self.options);

        if forward.is_none() != backward.is_none() {
            return Err(TestError::assertion_failed(
                check,
                format!(
                    "comparison is not symmetric: {:?} one way, {:?} the other",
                    forward, backward
                ),
            ));
        }

        if forward != self.mismatch {
            return Err(TestError::assertion_failed(
                check,
                format!(
                    "expected {}, got {}",
                    describe(self.mismatch),
                    describe(forward)
                ),
            ));
        }
        Ok(())
    }
}

fn describe(mismatch: Option<Mismatch>) -> String {
    match mismatch {
        None => "same intent".to_string(),
        Some(mismatch) => format!("{} mismatch", mismatch),
    }
}
