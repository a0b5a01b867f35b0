pub mod memory;

pub use memory::{
    MemoryConfiguration, MemoryProject, MemoryPropertyStore, MemorySolution, RecordedWrite,
};
