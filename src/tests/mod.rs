// Test modules for Cohesa
// Each module exercises the corresponding source module

mod calendar_tests;
mod storage_tests;
