use palletstore_core::{DomainError, DomainResult, ValueObject};

/// Width × height × depth of a box or a pallet footprint.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Dimensions {
    width: f64,
    height: f64,
    depth: f64,
}

impl ValueObject for Dimensions {}

impl Dimensions {
    /// All three sides must be finite and strictly positive.
    pub fn new(width: f64, height: f64, depth: f64) -> DomainResult<Self> {
        ensure_positive("width", width)?;
        ensure_positive("height", height)?;
        ensure_positive("depth", depth)?;
        Ok(Self {
            width,
            height,
            depth,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    pub fn volume(&self) -> f64 {
        self.width * self.height * self.depth
    }
}

fn ensure_positive(name: &str, value: f64) -> DomainResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(DomainError::validation(format!(
            "{name} must be a positive number (got {value})"
        )));
    }
    Ok(())
}
