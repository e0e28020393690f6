use log::{info, warn};

use crate::error::{Error, Result};

mod block;
mod section;

pub use block::{BoxStorage, SaveBlock, BLOCK_SIZE, BOX_STORAGE_SIZE, RECORDS_PER_BOX, RECORD_COUNT};
pub use section::{checksum, Section, COVERED_SIZES, SECTION_COUNT, SECTION_SIZE};

pub const SAVE_SIZE: usize = BLOCK_SIZE * 2 + 0x4000;

/// Which of the two save blocks
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    A,
    B,
}

impl Slot {
    pub fn other(self) -> Slot {
        match self {
            Slot::A => Slot::B,
            Slot::B => Slot::A,
        }
    }

    fn range(self) -> std::ops::Range<usize> {
        match self {
            Slot::A => 0..BLOCK_SIZE,
            Slot::B => BLOCK_SIZE..BLOCK_SIZE * 2,
        }
    }
}

/// A whole save file; everything past the two blocks is carried along untouched
pub struct SaveFile {
    bytes: Vec<u8>,
    a: SaveBlock,
    b: SaveBlock,
}

impl SaveFile {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<SaveFile> {
        if bytes.len() != SAVE_SIZE {
            return Err(Error::InvalidSize {
                expected: SAVE_SIZE,
                actual: bytes.len(),
            });
        }

        let a = SaveBlock::parse(&bytes[Slot::A.range()])?;
        let b = SaveBlock::parse(&bytes[Slot::B.range()])?;

        Ok(SaveFile { bytes, a, b })
    }

    pub fn block(&self, slot: Slot) -> &SaveBlock {
        match slot {
            Slot::A => &self.a,
            Slot::B => &self.b,
        }
    }

    fn block_mut(&mut self, slot: Slot) -> &mut SaveBlock {
        match slot {
            Slot::A => &mut self.a,
            Slot::B => &mut self.b,
        }
    }

    fn usable(&self, slot: Slot) -> Option<u32> {
        let block = self.block(slot);
        let generation = block.generation();

        if generation.is_none() || !block.is_valid() {
            warn!("Save block {:?} is not valid", slot);
            return None;
        }

        generation
    }

    /// Pick the most recent valid block, falling back to the other one
    pub fn select_active(&self) -> Result<Slot> {
        let active = match (self.usable(Slot::A), self.usable(Slot::B)) {
            (Some(a), Some(b)) if b > a => Slot::B,
            (Some(_), _) => Slot::A,
            (None, Some(_)) => Slot::B,
            (None, None) => return Err(Error::NoValidBlock),
        };

        info!(
            "Using save block {:?} (generation {})",
            active,
            self.block(active).generation().unwrap_or_default()
        );

        Ok(active)
    }

    /// The block that `select_active` didn't pick
    pub fn select_backup(&self) -> Result<Slot> {
        self.select_active().map(Slot::other)
    }

    pub fn box_storage(&self, slot: Slot) -> Result<BoxStorage> {
        self.block(slot).box_storage()
    }

    /// Write box storage into one block, fix its checksums and copy it into the save bytes.
    /// The other block is left as it was.
    pub fn commit(&mut self, slot: Slot, storage: &BoxStorage) -> Result<&[u8]> {
        let mut block = self.block(slot).clone();
        block.store(storage)?;
        let bytes = block.commit()?;

        self.bytes[slot.range()].copy_from_slice(&bytes);
        *self.block_mut(slot) = block;

        info!("Committed save block {:?}", slot);

        Ok(&self.bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
pub(crate) mod fixture {
    use super::*;

    pub use super::block::fixture::blank_block;

    pub fn save_with(a: &SaveBlock, b: &SaveBlock) -> Vec<u8> {
        let mut bytes = vec![0u8; SAVE_SIZE];
        bytes[Slot::A.range()].copy_from_slice(&a.clone().commit().unwrap());
        bytes[Slot::B.range()].copy_from_slice(&b.clone().commit().unwrap());
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::fixture::*;
    use super::*;

    #[test]
    fn save_size_is_128k() {
        assert_eq!(SAVE_SIZE, 131072);
        assert_eq!(BLOCK_SIZE, 0xE000);
    }

    #[test]
    fn wrong_size_is_rejected() {
        let err = SaveFile::from_bytes(vec![0u8; 1000]).err().unwrap();
        assert!(err.is_format());
        assert!(matches!(err, Error::InvalidSize { expected: SAVE_SIZE, actual: 1000 }));
    }

    #[test]
    fn newer_block_wins() {
        let save = SaveFile::from_bytes(save_with(&blank_block(5), &blank_block(7))).unwrap();
        assert_eq!(save.select_active().unwrap(), Slot::B);
        assert_eq!(save.select_backup().unwrap(), Slot::A);

        let save = SaveFile::from_bytes(save_with(&blank_block(8), &blank_block(7))).unwrap();
        assert_eq!(save.select_active().unwrap(), Slot::A);
    }

    #[test]
    fn equal_generations_prefer_a() {
        let save = SaveFile::from_bytes(save_with(&blank_block(4), &blank_block(4))).unwrap();
        assert_eq!(save.select_active().unwrap(), Slot::A);
    }

    #[test]
    fn corrupted_newer_block_falls_back() {
        let mut bytes = save_with(&blank_block(5), &blank_block(7));
        bytes[BLOCK_SIZE + 0x20] ^= 0xFF;

        let save = SaveFile::from_bytes(bytes).unwrap();
        assert!(!save.block(Slot::B).is_valid());
        assert_eq!(save.select_active().unwrap(), Slot::A);
    }

    #[test]
    fn no_valid_block() {
        let mut bytes = save_with(&blank_block(5), &blank_block(7));
        bytes[0x20] ^= 0xFF;
        bytes[BLOCK_SIZE + 0x20] ^= 0xFF;

        let save = SaveFile::from_bytes(bytes).unwrap();
        assert!(matches!(save.select_active(), Err(Error::NoValidBlock)));
    }

    #[test]
    fn erased_block_is_skipped() {
        let mut bytes = save_with(&blank_block(5), &blank_block(7));
        bytes[BLOCK_SIZE..BLOCK_SIZE * 2].fill(0xFF);

        let save = SaveFile::from_bytes(bytes).unwrap();
        assert_eq!(save.select_active().unwrap(), Slot::A);
    }

    #[test]
    fn commit_only_touches_one_block() {
        let bytes = save_with(&blank_block(5), &blank_block(7));
        let mut save = SaveFile::from_bytes(bytes.clone()).unwrap();

        let mut storage = save.box_storage(Slot::B).unwrap();
        storage.records_mut()[419].set_held_item(1);
        let committed = save.commit(Slot::B, &storage).unwrap().to_vec();

        assert_eq!(committed.len(), SAVE_SIZE);
        assert_eq!(&committed[..BLOCK_SIZE], &bytes[..BLOCK_SIZE]);
        assert_eq!(&committed[BLOCK_SIZE * 2..], &bytes[BLOCK_SIZE * 2..]);
        assert_ne!(&committed[BLOCK_SIZE..BLOCK_SIZE * 2], &bytes[BLOCK_SIZE..BLOCK_SIZE * 2]);

        let reopened = SaveFile::from_bytes(committed).unwrap();
        assert_eq!(reopened.select_active().unwrap(), Slot::B);
        assert_eq!(reopened.box_storage(Slot::B).unwrap(), storage);
    }
}
