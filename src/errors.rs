use thiserror::Error;

/// Stable code carried by rejected page numbers. Callers match on this value
/// instead of the message text.
pub const PAGE_NUMBER_TOO_LOW: u32 = 1_573_047_338;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// The explicit page-number setter was handed a value below 1.
    #[error("current page number must be 1 or greater, got {page}")]
    PageNumberTooLow { page: i64 },
}

impl PaginationError {
    pub fn page_number_too_low(page: i64) -> Self {
        Self::PageNumberTooLow { page }
    }

    pub fn code(&self) -> u32 {
        match self {
            Self::PageNumberTooLow { .. } => PAGE_NUMBER_TOO_LOW,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_number_too_low_carries_stable_code() {
        let err = PaginationError::page_number_too_low(0);
        assert_eq!(err.code(), 1_573_047_338);
    }
}
