// Domain layer - Pure forecast types and evaluation logic
pub mod evaluation;
pub mod forecast;
