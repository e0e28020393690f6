use std::io::Write;

use crate::error::Result;

pub mod chunk;
mod egg;
mod names;

pub use egg::{EggCover, EggUncover};
pub use names::NameCover;

pub trait Cover {
    /// Hide the specified payload inside this cover, returning the number of records used
    fn cover(&mut self, src: &[u8]) -> Result<usize>;
}

pub trait Uncover {
    /// Extract the payload hidden in this cover to the specified destination
    fn uncover<W: Write>(&self, dest: &mut W) -> Result<usize>;

    /// Check that the expected payload is hidden in this cover.
    /// A mismatch is reported as `Ok(false)`, never as an error.
    fn verify(&self, expected: &[u8]) -> Result<bool>;
}
