pub mod process;
pub mod reader;

pub use process::GeneratorProcess;
pub use reader::{read_chunk, AudioChunk, ReadOutcome};
