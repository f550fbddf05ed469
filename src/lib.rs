pub mod greeter;
pub mod processor;
