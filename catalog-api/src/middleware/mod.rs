pub mod log_errors;
