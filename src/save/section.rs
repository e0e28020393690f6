use crate::error::{Error, Result};

pub const SECTION_SIZE: usize = 0x1000;
pub const SECTION_COUNT: usize = 14;

const ID_OFFSET: usize = 0xFF4;
const CHECKSUM_OFFSET: usize = 0xFF6;
const GENERATION_OFFSET: usize = 0xFFC;

/// Amount of data covered by the checksum, indexed by section id
pub const COVERED_SIZES: [usize; SECTION_COUNT] = [
    0xF2C, 0xF80, 0xF80, 0xF80, 0xF08, 0xF80, 0xF80, 0xF80, 0xF80, 0xF80, 0xF80, 0xF80, 0xF80,
    0x7D0,
];

/// Sum the data as little-endian 32-bit words, then fold the upper half into the lower half.
pub fn checksum(data: &[u8]) -> u16 {
    let sum = data
        .chunks_exact(4)
        .map(|w| u32::from_le_bytes([w[0], w[1], w[2], w[3]]))
        .fold(0u32, u32::wrapping_add);

    ((sum >> 16) as u16).wrapping_add(sum as u16)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    bytes: Vec<u8>,
}

impl Section {
    pub fn parse(bytes: &[u8]) -> Result<Section> {
        if bytes.len() != SECTION_SIZE {
            return Err(Error::InvalidSize {
                expected: SECTION_SIZE,
                actual: bytes.len(),
            });
        }

        Ok(Section {
            bytes: bytes.to_vec(),
        })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn id(&self) -> u16 {
        u16::from_le_bytes([self.bytes[ID_OFFSET], self.bytes[ID_OFFSET + 1]])
    }

    pub fn generation(&self) -> u32 {
        let g = &self.bytes[GENERATION_OFFSET..GENERATION_OFFSET + 4];
        u32::from_le_bytes([g[0], g[1], g[2], g[3]])
    }

    pub fn stored_checksum(&self) -> u16 {
        u16::from_le_bytes([self.bytes[CHECKSUM_OFFSET], self.bytes[CHECKSUM_OFFSET + 1]])
    }

    /// None if the id doesn't name a known section
    pub fn covered_size(&self) -> Option<usize> {
        COVERED_SIZES.get(self.id() as usize).copied()
    }

    pub fn calculate_checksum(&self) -> Option<u16> {
        self.covered_size().map(|size| checksum(&self.bytes[..size]))
    }

    pub fn is_valid(&self) -> bool {
        self.calculate_checksum() == Some(self.stored_checksum())
    }

    pub fn fix_checksum(&mut self) -> Result<()> {
        let sum = self
            .calculate_checksum()
            .ok_or(Error::UnknownSection(self.id()))?;

        self.bytes[CHECKSUM_OFFSET..CHECKSUM_OFFSET + 2].copy_from_slice(&sum.to_le_bytes());

        Ok(())
    }

    /// The part of the section covered by the checksum
    pub fn data(&self) -> Result<&[u8]> {
        let size = self.covered_size().ok_or(Error::UnknownSection(self.id()))?;
        Ok(&self.bytes[..size])
    }

    /// Overwrite the covered data; the checksum must be fixed afterwards
    pub fn set_data(&mut self, data: &[u8]) -> Result<()> {
        let size = self.covered_size().ok_or(Error::UnknownSection(self.id()))?;

        if data.len() != size {
            return Err(Error::SizeMismatch {
                expected: size,
                actual: data.len(),
            });
        }

        self.bytes[..size].copy_from_slice(data);

        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn blank(id: u16, generation: u32) -> Section {
        let mut bytes = vec![0u8; SECTION_SIZE];
        bytes[ID_OFFSET..ID_OFFSET + 2].copy_from_slice(&id.to_le_bytes());
        bytes[GENERATION_OFFSET..GENERATION_OFFSET + 4].copy_from_slice(&generation.to_le_bytes());

        let mut section = Section { bytes };
        section.fix_checksum().unwrap();
        section
    }

    #[cfg(test)]
    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}
