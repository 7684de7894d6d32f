pub mod date_parser;
pub mod hasher;
pub mod numbers;
