mod config_tests;
mod line_count_tests;
mod state_tests;
