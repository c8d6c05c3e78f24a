pub mod field_rules;
pub mod file_probe;
