pub mod hoare_recursive;
pub mod hoare_stack;

// Baseline for tests and benchmarks.
pub mod rust_std;
