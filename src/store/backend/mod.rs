mod trait_state_backend;
mod file_backend;
mod memory_backend;

pub use trait_state_backend::StateBackend;
pub use file_backend::FileBackend;
pub use memory_backend::MemoryBackend;
