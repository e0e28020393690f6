//! Hide arbitrary data inside a third generation handheld save file.
//!
//! The payload is split into 67-byte chunks and written over creature records
//! in the PC boxes, starting from the last slot of the last box. Every record
//! that carries data is disguised as an egg, and the save's checksums are
//! recomputed so the game still loads it.

pub mod cover;
pub mod error;
pub mod record;
pub mod save;
mod tables;
pub mod utils;

pub use cover::{Cover, EggCover, EggUncover, NameCover, Uncover};
pub use error::{Error, Result};
pub use record::Record;
pub use save::{BoxStorage, SaveBlock, SaveFile, Slot};
