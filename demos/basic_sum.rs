//! Basic summation example demonstrating the simplest call.
//!
//! This example shows how to:
//! - Compute a sum via the remote model with ambient configuration
//! - Override the model identifier per call
//!
//! # Running
//!
//! ```bash
//! export OPENAI_API_KEY="sk-..."
//! cargo run --example basic_sum
//! ```

use llm_sum::{sum, sum_with, SumOptions};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!("Asking the model for 2 + 3...");

    // Everything resolves from the environment here
    let result = sum(2.0, 3.0).await?;
    println!("2 + 3 = {result}");

    // Per-call overrides shadow the environment field by field
    let options = SumOptions::new().with_model("gpt-5.2");
    let result = sum_with(-1.5, 2.25, options).await?;
    println!("-1.5 + 2.25 = {result}");

    Ok(())
}
