use thiserror::Error;

#[derive(Debug, Error)]
pub enum GovernanceError {
    #[error("review period too short: {have}s < {need}s")]
    ReviewPeriodTooShort { have: u32, need: u32 },

    #[error("proposal lifetime {have}s exceeds maximum {max}s")]
    LifetimeTooLong { have: u64, max: u32 },

    #[error("review period {review}s does not fit in remaining lifetime {remaining}s")]
    ReviewExceedsLifetime { review: u32, remaining: u64 },

    #[error("proposal has expired")]
    Expired,

    #[error("proposal has not finished its review period")]
    StillInReview,
}
