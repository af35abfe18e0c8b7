use maybe_rail::prelude::*;

#[derive(Debug)]
enum LookupError {
    Timeout,
}

impl std::fmt::Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupError::Timeout => write!(f, "lookup timed out"),
        }
    }
}

fn find_email(user_id: u64) -> Result<Option<String>, LookupError> {
    match user_id {
        0 => Err(LookupError::Timeout),
        1 => Ok(None),
        id => Ok(Some(format!("user{id}@example.com"))),
    }
}

fn domain_of(user_id: u64) -> Maybe<String, LookupError> {
    Maybe::of(user_id)
        .map_nullable(find_email)
        .map(|email| Ok(email.split('@').nth(1).unwrap_or_default().to_string()))
}

fn describe(user_id: u64) -> Result<String, MaybeError> {
    domain_of(user_id)
        .filter(|domain| !domain.is_empty())
        .peek_error(|e| println!("  (captured: {e})"))
        .on_error(|_| "unknown".to_string())
}

fn main() {
    println!("Running Quick Start examples...");

    // 1. Three states from one lookup
    println!("\n1. States:");
    for id in [0, 1, 2] {
        println!("  user {id}: {:?}", domain_of(id));
    }

    // 2. Recovery only applies to real failures
    println!("\n2. Recovery:");
    for id in [0, 1, 2] {
        match describe(id) {
            Ok(domain) => println!("  user {id}: {domain}"),
            Err(e) => println!("  user {id}: {e}"),
        }
    }

    // 3. Fallbacks treat absence and failure alike
    println!("\n3. Fallbacks:");
    let fallback = domain_of(0).or(domain_of(1)).unwrap_or_else(|| "example.org".to_string());
    println!("  fallback domain: {fallback}");
}
