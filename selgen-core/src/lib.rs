pub mod codegen;
pub mod fmt;
