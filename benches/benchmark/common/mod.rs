use criterion::Criterion;
use maybe_rail::Maybe;
use std::time::Duration;

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum DomainError {
    Database(String),
    Validation(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::Database(msg) => write!(f, "Database error: {msg}"),
            DomainError::Validation(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct UserData {
    pub user_id: u64,
    pub email: String,
}

// Simulate a lookup that can fail, find nothing, or succeed
pub fn find_user(user_id: u64) -> Result<Option<UserData>, DomainError> {
    if user_id % 100 == 0 {
        Err(DomainError::Database("Connection timeout".to_string()))
    } else if user_id % 10 == 0 {
        Ok(None)
    } else {
        Ok(Some(UserData { user_id, email: format!("user{user_id}@company.com") }))
    }
}

pub fn validate_email(user: UserData) -> Result<Maybe<UserData, DomainError>, DomainError> {
    if user.email.contains('@') {
        Ok(Maybe::of(user))
    } else {
        Err(DomainError::Validation("Invalid email format".to_string()))
    }
}

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(5))
        .noise_threshold(0.05)
}
