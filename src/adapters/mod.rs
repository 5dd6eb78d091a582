// Adapters layer: concrete herd sources behind the `HerdStore` port.

pub mod json_store;
pub mod memory;

pub use json_store::JsonHerdStore;
pub use memory::InMemoryHerdStore;
