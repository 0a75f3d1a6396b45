//! Regression test parameters and operations

use crate::error::TestError;
use colorbleed_core::PixelBuffer;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare results (default)
    #[default]
    Compare,
    /// Display mode - run without comparison, for manual inspection
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the state of one regression test: its name, the running
/// comparison index, the mode, and every recorded failure. Call
/// [`RegParams::cleanup`] at the end of the test and assert its result.
pub struct RegParams {
    /// Name of the test (e.g., "bleed")
    pub test_name: String,
    /// Current comparison index (incremented before each comparison)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<TestError>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// # Arguments
    ///
    /// * `test_name` - Name of the test (e.g., "bleed")
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current comparison index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if the values match within `delta`, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            self.record(TestError::ValueMismatch {
                index: self.index,
                expected,
                actual,
                delta,
            });
            false
        } else {
            true
        }
    }

    /// Compare two pixel buffers for exact equality
    ///
    /// # Returns
    ///
    /// `true` if the buffers have identical dimensions and pixels.
    pub fn compare_buffers(&mut self, buffer1: &PixelBuffer, buffer2: &PixelBuffer) -> bool {
        self.index += 1;

        if buffer1.width() != buffer2.width() || buffer1.height() != buffer2.height() {
            self.record(TestError::BufferDimensionMismatch { index: self.index });
            return false;
        }

        for y in 0..buffer1.height() {
            for x in 0..buffer1.width() {
                if buffer1.get(x, y) != buffer2.get(x, y) {
                    self.record(TestError::BufferPixelMismatch {
                        index: self.index,
                        x,
                        y,
                    });
                    return false;
                }
            }
        }

        true
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all comparisons passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get the list of recorded failures
    pub fn failures(&self) -> &[TestError] {
        &self.failures
    }

    fn record(&mut self, failure: TestError) {
        eprintln!("Failure in {}_reg: {}", self.test_name, failure);
        self.failures.push(failure);
        self.success = false;
    }
}
