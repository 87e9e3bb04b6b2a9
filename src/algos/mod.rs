pub mod caesar;
