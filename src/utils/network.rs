//! Network utilities for crab-jukebox
//!
//! This module provides network-related utility functions,
//! including retry mechanisms and error handling.

use log::{debug, warn};
use std::{thread::sleep, time::Duration};

/// Retries a blocking operation with exponential backoff
///
/// # Arguments
/// * `attempts` - Maximum number of attempts, at least one is always made
/// * `operation` - The operation to retry
/// * `operation_name` - Name of the operation for logging
///
/// # Returns
/// Returns the result of the operation or the last error if all retries fail
pub fn retry_with_backoff<F, T, E>(
    attempts: u32,
    mut operation: F,
    operation_name: &str,
) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
    E: std::fmt::Display,
{
    let attempts = attempts.max(1);
    let mut attempt = 1;

    loop {
        match operation() {
            Ok(result) => {
                if attempt > 1 {
                    debug!("{operation_name} succeeded on attempt {attempt}");
                }
                return Ok(result);
            }
            Err(error) if attempt < attempts => {
                let delay = Duration::from_millis(100 * (1 << (attempt - 1)));
                warn!("{operation_name} failed on attempt {attempt} ({error}), retrying in {delay:?}");
                sleep(delay);
                attempt += 1;
            }
            Err(error) => {
                warn!("{operation_name} failed on final attempt {attempt} ({error})");
                return Err(error);
            }
        }
    }
}
