//! Memoized Fibonacci numbers.

use std::collections::HashMap;

use crate::error::FibError;

/// Owned cache of computed Fibonacci numbers.
///
/// `F(0) = 0`, `F(1) = 1`. Values are `u128`, so `F(186)` is the largest
/// index that can be computed.
#[derive(Debug, Clone, Default)]
pub struct FibCache {
    cache: HashMap<u32, u128>,
}

impl FibCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `F(n)`, computing and caching any missing values below it.
    ///
    /// # Errors
    ///
    /// Returns [`FibError::Overflow`] if `F(n)` does not fit in a `u128`.
    pub fn get(&mut self, n: u32) -> Result<u128, FibError> {
        match n {
            0 => return Ok(0),
            1 => return Ok(1),
            _ => {}
        }
        if let Some(value) = self.cache.get(&n) {
            return Ok(*value);
        }

        let (mut prev, mut current) = (0u128, 1u128);
        for i in 2..=n {
            let next = if let Some(value) = self.cache.get(&i) {
                *value
            } else {
                let value = prev
                    .checked_add(current)
                    .ok_or(FibError::Overflow { n: i })?;
                self.cache.insert(i, value);
                value
            };
            prev = current;
            current = next;
        }
        Ok(current)
    }

    /// Number of cached values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns true if nothing has been cached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
