//! Error handling example demonstrating the failure taxonomy.
//!
//! This example shows how to:
//! - Tell the four failure stages apart by variant
//! - Use error categories for routing decisions
//! - Convert errors to user-friendly messages
//!
//! # Running
//!
//! ```bash
//! # Demonstrates error metadata without network access:
//! cargo run --example error_handling
//!
//! # To provoke a real 401 from the live endpoint:
//! OPENAI_API_KEY=bad-key cargo run --example error_handling -- --live
//! ```
//!
//! # Key Methods
//!
//! - `error.category()` - Get high-level category for routing
//! - `error.severity()` - Get logging severity level
//! - `error.is_retryable()` - Check if a caller-side retry makes sense
//! - `error.user_message()` - Get safe user-facing message

use llm_sum::{sum, SumError};

fn print_error_info(name: &str, error: &SumError) {
    println!("{name}:");
    println!("  display:   {error}");
    println!("  category:  {:?}", error.category());
    println!("  severity:  {:?}", error.severity());
    println!("  retryable: {}", error.is_retryable());
    println!("  user sees: {}\n", error.user_message());
}

fn demonstrate_error_stages() {
    println!("=== Failure Stages ===\n");

    // Stage 1: configuration (before any network activity)
    let config = SumError::configuration(
        "No API key provided. Set OPENAI_API_KEY or pass api_key in options.",
    );
    print_error_info("Configuration", &config);

    // Stage 2: transport status
    let unauthorized = SumError::http_status(401, "Unauthorized");
    print_error_info("Transport (401)", &unauthorized);

    let unavailable = SumError::http_status(503, "Service Unavailable");
    print_error_info("Transport (503)", &unavailable);

    // Stage 3: reply envelope
    let missing = SumError::content_missing("choices[0].message.content is absent or empty");
    print_error_info("ContentMissing", &missing);

    // Stage 4: numeric parsing
    let non_numeric = SumError::non_numeric("I cannot do math");
    print_error_info("NonNumericResponse", &non_numeric);
}

async fn demonstrate_live_failure() {
    println!("=== Live Call ===\n");

    match sum(1.0, 2.0).await {
        Ok(result) => println!("1 + 2 = {result}"),
        Err(err) => print_error_info("Live failure", &err),
    }
}

#[tokio::main]
async fn main() {
    demonstrate_error_stages();

    if std::env::args().any(|arg| arg == "--live") {
        demonstrate_live_failure().await;
    }
}
