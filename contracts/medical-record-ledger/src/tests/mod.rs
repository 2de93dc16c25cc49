// Focused suites per ledger component; the end-to-end scenario lives in test.rs.
mod utils;
mod registry;
