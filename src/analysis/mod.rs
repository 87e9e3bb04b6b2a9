pub mod breaker;
pub mod frequency;
pub mod scoring;
