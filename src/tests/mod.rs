// Test modules for llm-sum crate
//
// Test organization follows the template pattern where each source file
// has a corresponding test file that focuses on business logic verification.

// Test helper utilities (fake transport and fixtures)
pub mod helpers;
