//! Regression test parameters and operations

use std::fmt::Debug;

/// Regression test parameters
///
/// Tracks the test name, the index of the current comparison and every
/// failure seen so far. Comparisons never panic; call
/// [`cleanup`](Self::cleanup) at the end and assert on its result.
pub struct RegParams {
    /// Name of the test (e.g., "scanline")
    pub test_name: String,
    /// Current comparison index (incremented before each comparison)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// # Arguments
    ///
    /// * `test_name` - Name of the test (e.g., "scanline")
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current comparison index
    pub fn index(&self) -> usize {
        self.index
    }

    fn record_failure(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
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
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.record_failure(msg);
            false
        } else {
            true
        }
    }

    /// Compare two boolean flags
    ///
    /// # Returns
    ///
    /// `true` if the flags are equal, `false` otherwise.
    pub fn compare_flag(&mut self, expected: bool, actual: bool) -> bool {
        self.index += 1;

        if expected != actual {
            let msg = format!(
                "Failure in {}_reg: flag comparison for index {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, expected, actual
            );
            self.record_failure(msg);
            false
        } else {
            true
        }
    }

    /// Compare two sequences element by element
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected elements
    /// * `actual` - Actual elements
    ///
    /// # Returns
    ///
    /// `true` if both sequences are identical, `false` otherwise.
    pub fn compare_slices<T: PartialEq + Debug>(&mut self, expected: &[T], actual: &[T]) -> bool {
        self.index += 1;

        if expected.len() != actual.len() {
            let msg = format!(
                "Failure in {}_reg: sequence comparison for index {}\n\
                 lengths: {} vs {}",
                self.test_name,
                self.index,
                expected.len(),
                actual.len()
            );
            self.record_failure(msg);
            return false;
        }

        if let Some(pos) = expected.iter().zip(actual).position(|(e, a)| e != a) {
            let msg = format!(
                "Failure in {}_reg: sequence comparison for index {}\n\
                 first mismatch at {}: expected {:?}, actual {:?}",
                self.test_name, self.index, pos, expected[pos], actual[pos]
            );
            self.record_failure(msg);
            return false;
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

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
