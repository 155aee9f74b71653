#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordOnboardingEvent {
    pub user_id: String,
}
