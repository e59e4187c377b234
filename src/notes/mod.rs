pub mod id;
pub mod store;

pub use store::{NoteStore, StoreError};
