use log::{debug, warn};

use crate::error::{Error, Result};
use crate::record::{Record, RECORD_SIZE};
use crate::save::section::{Section, COVERED_SIZES, SECTION_COUNT, SECTION_SIZE};

pub const BLOCK_SIZE: usize = SECTION_SIZE * SECTION_COUNT;
pub const BOX_STORAGE_SIZE: usize = 33744;
pub const RECORD_COUNT: usize = 420;
pub const RECORDS_PER_BOX: usize = 30;

const FIRST_BOX_SECTION: u16 = 5;
const RECORDS_OFFSET: usize = 4;
const RECORDS_END: usize = RECORDS_OFFSET + RECORD_COUNT * RECORD_SIZE;

/// One of the two redundant copies of the save data
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveBlock {
    sections: Vec<Section>,
}

impl SaveBlock {
    pub fn parse(bytes: &[u8]) -> Result<SaveBlock> {
        if bytes.len() != BLOCK_SIZE {
            return Err(Error::InvalidSize {
                expected: BLOCK_SIZE,
                actual: bytes.len(),
            });
        }

        let sections = bytes
            .chunks_exact(SECTION_SIZE)
            .map(Section::parse)
            .collect::<Result<Vec<_>>>()?;

        Ok(SaveBlock { sections })
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// The save counter shared by every section; None if the sections disagree
    pub fn generation(&self) -> Option<u32> {
        let first = self.sections.first()?.generation();

        if self.sections.iter().all(|s| s.generation() == first) {
            Some(first)
        } else {
            warn!("Not all section generations in this block are equal");
            None
        }
    }

    fn has_unique_ids(&self) -> bool {
        let mut seen = [false; SECTION_COUNT];

        self.sections.iter().all(|s| match seen.get_mut(s.id() as usize) {
            Some(slot) if !*slot => {
                *slot = true;
                true
            }
            _ => false,
        })
    }

    /// The first id that is out of range or already seen earlier in the block
    fn bad_id(&self) -> u16 {
        let mut seen = [false; SECTION_COUNT];

        self.sections
            .iter()
            .map(Section::id)
            .find(|&id| match seen.get_mut(id as usize) {
                Some(slot) => std::mem::replace(slot, true),
                None => true,
            })
            .unwrap_or(u16::MAX)
    }

    /// Every section has a known, unique id and a matching checksum
    pub fn is_valid(&self) -> bool {
        self.has_unique_ids() && self.sections.iter().all(Section::is_valid)
    }

    fn box_sections(&self) -> Result<Vec<usize>> {
        if !self.has_unique_ids() {
            return Err(Error::UnknownSection(self.bad_id()));
        }

        let mut indices = (0..self.sections.len())
            .filter(|&i| self.sections[i].id() >= FIRST_BOX_SECTION)
            .collect::<Vec<_>>();

        // Sections aren't necessarily stored in id order
        indices.sort_by_key(|&i| self.sections[i].id());

        Ok(indices)
    }

    /// Concatenate the data of the box sections in id order
    pub fn box_storage(&self) -> Result<BoxStorage> {
        let mut bytes = Vec::with_capacity(BOX_STORAGE_SIZE);

        for i in self.box_sections()? {
            bytes.extend_from_slice(self.sections[i].data()?);
        }

        BoxStorage::parse(bytes)
    }

    /// Write box storage back into the box sections; other sections are left as they are
    pub fn store(&mut self, storage: &BoxStorage) -> Result<()> {
        let bytes = storage.to_bytes();
        let mut written = 0;

        for i in self.box_sections()? {
            let size = COVERED_SIZES[self.sections[i].id() as usize];
            self.sections[i].set_data(&bytes[written..written + size])?;
            written += size;
        }

        debug!("Stored {} bytes of box storage", written);

        Ok(())
    }

    /// Fix every section's checksum and return the block's bytes
    pub fn commit(&mut self) -> Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(BLOCK_SIZE);

        for section in self.sections.iter_mut() {
            section.fix_checksum()?;
            bytes.extend_from_slice(section.bytes());
        }

        Ok(bytes)
    }

    #[cfg(test)]
    pub(crate) fn sections_mut(&mut self) -> &mut [Section] {
        &mut self.sections
    }
}

/// The PC boxes: 420 record slots plus box names, wallpapers and the current box
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoxStorage {
    head: Vec<u8>,
    records: Vec<Record>,
    tail: Vec<u8>,
}

impl BoxStorage {
    pub fn parse(bytes: Vec<u8>) -> Result<BoxStorage> {
        if bytes.len() != BOX_STORAGE_SIZE {
            return Err(Error::SizeMismatch {
                expected: BOX_STORAGE_SIZE,
                actual: bytes.len(),
            });
        }

        let records = bytes[RECORDS_OFFSET..RECORDS_END]
            .chunks_exact(RECORD_SIZE)
            .map(Record::from_slice)
            .collect::<Result<Vec<_>>>()?;

        Ok(BoxStorage {
            head: bytes[..RECORDS_OFFSET].to_vec(),
            records,
            tail: bytes[RECORDS_END..].to_vec(),
        })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [Record] {
        &mut self.records
    }

    /// Swap in a whole new set of records
    pub fn replace_records(&mut self, records: Vec<Record>) -> Result<()> {
        if records.len() != RECORD_COUNT {
            return Err(Error::SizeMismatch {
                expected: RECORD_COUNT,
                actual: records.len(),
            });
        }

        self.records = records;

        Ok(())
    }

    /// Everything around the record slots is kept byte for byte
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(BOX_STORAGE_SIZE);

        bytes.extend_from_slice(&self.head);
        for record in &self.records {
            bytes.extend_from_slice(record.as_bytes());
        }
        bytes.extend_from_slice(&self.tail);

        bytes
    }
}

#[cfg(test)]
pub(crate) mod fixture {
    use super::*;

    /// A block of blank sections in a shuffled but complete id order
    pub fn blank_block(generation: u32) -> SaveBlock {
        let ids = [3u16, 0, 13, 7, 1, 5, 2, 4, 12, 6, 8, 11, 9, 10];
        SaveBlock {
            sections: ids
                .iter()
                .map(|&id| Section::blank(id, generation))
                .collect(),
        }
    }
}
