// Adapters layer: concrete implementations of the domain ports (terminal, randomness).

pub mod console;
pub mod random;

pub use console::{ConsolePrompter, ConsoleReader};
pub use random::RandomNumberGenerator;
