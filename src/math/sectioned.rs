use crate::error::{GeometryError, Result};

/// Piecewise-domain lookup over contiguous, ascending sections.
///
/// Section `i` covers the half-open range `[starts[i], starts[i+1])`; the
/// last section runs to `end` (or to infinity when unbounded). A query at
/// exactly the bounded end does not fail: it resolves to the last section
/// at its closed endpoint, so the overall domain behaves as
/// `[starts[0], end]` even though every interior boundary is half-open.
#[derive(Debug, Clone)]
pub struct SectionedDomain {
    starts: Vec<f64>,
    end: Option<f64>,
    tolerance: f64,
}

/// The section owning a query, plus the query re-expressed in the
/// section's local coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionLocation {
    pub index: usize,
    pub local: f64,
}

impl SectionedDomain {
    /// Creates a sectioned domain from ascending absolute section starts.
    ///
    /// # Errors
    ///
    /// Returns an error if `starts` is empty, not strictly ascending, or
    /// a bounded `end` does not lie beyond the last start.
    pub fn new(starts: Vec<f64>, end: Option<f64>, tolerance: f64) -> Result<Self> {
        if starts.is_empty() {
            return Err(GeometryError::Degenerate("sectioned domain needs at least one section".into()).into());
        }
        for pair in starts.windows(2) {
            if pair[1] - pair[0] <= tolerance {
                return Err(GeometryError::Degenerate(format!(
                    "section starts must be strictly ascending, got {} after {}",
                    pair[1], pair[0]
                ))
                .into());
            }
        }
        if let Some(end) = end {
            let last = starts[starts.len() - 1];
            if end - last <= tolerance {
                return Err(GeometryError::Degenerate(format!(
                    "domain end {end} does not lie beyond the last section start {last}"
                ))
                .into());
            }
        }
        Ok(Self {
            starts,
            end,
            tolerance,
        })
    }

    /// Lower bound of the whole domain.
    #[must_use]
    pub fn lower_bound(&self) -> f64 {
        self.starts[0]
    }

    /// Upper bound of the whole domain, if bounded.
    #[must_use]
    pub fn upper_bound(&self) -> Option<f64> {
        self.end
    }

    /// Absolute start of section `index`.
    #[must_use]
    pub fn section_start(&self, index: usize) -> f64 {
        self.starts[index]
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    /// Always `false`; a constructed domain has at least one section.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Locates the section owning `value`.
    ///
    /// A value equal to a section's lower bound selects that section, not
    /// the previous one. A value at the bounded end (within tolerance)
    /// selects the last section at its closed endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`] when `value` lies
    /// outside the domain by more than the tolerance.
    pub fn locate(&self, value: f64) -> Result<SectionLocation> {
        let lower = self.lower_bound();
        let out_of_range = || {
            GeometryError::ParameterOutOfRange {
                parameter: "domain position",
                value,
                min: lower,
                max: self.end.unwrap_or(f64::INFINITY),
            }
            .into()
        };

        if !value.is_finite() || value < lower - self.tolerance {
            return Err(out_of_range());
        }
        if let Some(end) = self.end {
            if value > end + self.tolerance {
                return Err(out_of_range());
            }
            // Upper-boundary exception: the exact end is not inside any
            // half-open section, but must resolve to the last one.
            if value >= end - self.tolerance {
                let index = self.starts.len() - 1;
                return Ok(SectionLocation {
                    index,
                    local: end - self.starts[index],
                });
            }
        }

        let value = value.max(lower);
        let index = self.starts.partition_point(|&start| start <= value).saturating_sub(1);
        Ok(SectionLocation {
            index,
            local: value - self.starts[index],
        })
    }
}
