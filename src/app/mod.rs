pub mod input_service;
pub mod output_service;
