use serde::Serialize;

/// Number of recorded events at which a user becomes `Ready`.
pub const THRESHOLD: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OnboardingStatus {
    InProgress,
    Ready,
}

impl OnboardingStatus {
    pub fn from_count(count: u32) -> Self {
        if count >= THRESHOLD {
            Self::Ready
        } else {
            Self::InProgress
        }
    }
}
