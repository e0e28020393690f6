//! One 80-byte creature record from box storage.
//!
//! The first 32 bytes are a plaintext header. The remaining 48 bytes hold the
//! inner block, which is always kept encrypted and shuffled with keys derived
//! from the record's own `pid` and `otid`. Every field that lives in the inner
//! block is read by decoding it and written by decoding, editing a copy and
//! encoding the whole block again, so the stored bytes are never patched in place.

use std::fmt;

use crate::error::{Error, Result};
use crate::tables;

mod crypt;
mod fields;

pub use crypt::{InnerBytes, INNER_SIZE, ORDERS};
pub use fields::{Genes, Origins, Pokerus};

pub const RECORD_SIZE: usize = 80;
pub const HEADER_SIZE: usize = 32;
pub const NAME_LENGTH: usize = 10;

pub const PID_OFFSET: usize = 0;
pub const OTID_OFFSET: usize = 4;
pub const NAME_OFFSET: usize = 8;
pub const FLAGS_OFFSET: usize = 18;
pub const CHECKSUM_OFFSET: usize = 28;

// Canonical inner block offsets
pub const SPECIES: usize = 0;
pub const HELD_ITEM: usize = 2;
pub const EXPERIENCE: usize = 4;
pub const MOVES: usize = 12;
pub const EVS: usize = 24;
pub const POKERUS: usize = 36;
pub const MET_LOCATION: usize = 37;
pub const ORIGINS: usize = 38;
pub const GENES: usize = 40;
pub const RIBBONS: usize = 44;

const EGG_FLAGS: [u8; 2] = [0x01, 0x06];
const NORMAL_FLAGS: [u8; 2] = [0x02, 0x02];
const NAME_TERMINATOR: u8 = 0xFF;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GrowthRate {
    MediumSlow,
    MediumFast,
    Fast,
    Slow,
    Erratic,
    Fluctuating,
}

impl GrowthRate {
    pub fn of(national_dex: u16) -> Option<GrowthRate> {
        let index = (national_dex as usize).checked_sub(1)?;
        tables::GROWTH_RATES.get(index).copied()
    }

    /// Total experience needed for each level, from level 1
    pub fn experience_table(self) -> &'static [u32; 100] {
        match self {
            GrowthRate::MediumSlow => &tables::MEDIUM_SLOW_EXP,
            GrowthRate::MediumFast => &tables::MEDIUM_FAST_EXP,
            GrowthRate::Fast => &tables::FAST_EXP,
            GrowthRate::Slow => &tables::SLOW_EXP,
            GrowthRate::Erratic => &tables::ERRATIC_EXP,
            GrowthRate::Fluctuating => &tables::FLUCTUATING_EXP,
        }
    }

    pub fn level_for(self, experience: u32) -> u8 {
        let table = self.experience_table();
        // table[0] is 0, so the first larger entry is at index >= 1
        table
            .iter()
            .position(|&needed| needed > experience)
            .unwrap_or(table.len()) as u8
    }

    pub fn experience_for(self, level: u8) -> u32 {
        self.experience_table()[level.clamp(1, 100) as usize - 1]
    }
}

/// The decrypted inner block with its substructures in canonical order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InnerBlock(InnerBytes);

impl InnerBlock {
    pub fn zeroed() -> InnerBlock {
        InnerBlock([0u8; INNER_SIZE])
    }

    pub fn bytes(&self) -> &InnerBytes {
        &self.0
    }

    pub fn bytes_mut(&mut self) -> &mut InnerBytes {
        &mut self.0
    }

    pub fn u16_at(&self, offset: usize) -> u16 {
        u16::from_le_bytes([self.0[offset], self.0[offset + 1]])
    }

    pub fn set_u16(&mut self, offset: usize, value: u16) {
        self.0[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
    }

    pub fn u32_at(&self, offset: usize) -> u32 {
        let b = &self.0[offset..offset + 4];
        u32::from_le_bytes([b[0], b[1], b[2], b[3]])
    }

    pub fn set_u32(&mut self, offset: usize, value: u32) {
        self.0[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
    }

    pub fn genes(&self) -> Genes {
        Genes::from(self.u32_at(GENES))
    }

    pub fn set_genes(&mut self, genes: Genes) {
        self.set_u32(GENES, genes.into());
    }

    pub fn checksum(&self) -> u16 {
        crypt::checksum(&self.0)
    }
}

impl From<InnerBytes> for InnerBlock {
    fn from(bytes: InnerBytes) -> InnerBlock {
        InnerBlock(bytes)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Record {
    bytes: [u8; RECORD_SIZE],
}

impl From<[u8; RECORD_SIZE]> for Record {
    fn from(bytes: [u8; RECORD_SIZE]) -> Record {
        Record { bytes }
    }
}

impl Record {
    pub fn empty() -> Record {
        Record {
            bytes: [0u8; RECORD_SIZE],
        }
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Record> {
        let bytes: [u8; RECORD_SIZE] = bytes.try_into().map_err(|_| Error::InvalidSize {
            expected: RECORD_SIZE,
            actual: bytes.len(),
        })?;

        Ok(Record::from(bytes))
    }

    /// Build a record from a plaintext header and a canonical inner block,
    /// encrypting the block with the ids found in the header.
    pub fn assemble(header: &[u8; HEADER_SIZE], inner: &InnerBlock) -> Record {
        let mut record = Record::empty();
        record.bytes[..HEADER_SIZE].copy_from_slice(header);
        record.set_inner(inner);
        record
    }

    pub fn as_bytes(&self) -> &[u8; RECORD_SIZE] {
        &self.bytes
    }

    pub fn header(&self) -> &[u8] {
        &self.bytes[..HEADER_SIZE]
    }

    pub fn is_clear(&self) -> bool {
        self.bytes.iter().all(|&b| b == 0)
    }

    pub fn clear(&mut self) {
        self.bytes = [0u8; RECORD_SIZE];
    }

    fn header_u32(&self, offset: usize) -> u32 {
        let b = &self.bytes[offset..offset + 4];
        u32::from_le_bytes([b[0], b[1], b[2], b[3]])
    }

    pub fn pid(&self) -> u32 {
        self.header_u32(PID_OFFSET)
    }

    pub fn otid(&self) -> u32 {
        self.header_u32(OTID_OFFSET)
    }

    pub fn stored_checksum(&self) -> u16 {
        u16::from_le_bytes([self.bytes[CHECKSUM_OFFSET], self.bytes[CHECKSUM_OFFSET + 1]])
    }

    fn stored_inner(&self) -> InnerBytes {
        let mut stored = [0u8; INNER_SIZE];
        stored.copy_from_slice(&self.bytes[HEADER_SIZE..]);
        stored
    }

    /// Decrypt the inner block with this record's own ids
    pub fn inner(&self) -> InnerBlock {
        InnerBlock(crypt::decode(self.pid(), self.otid(), &self.stored_inner()))
    }

    /// Encrypt a canonical inner block into this record and refresh its checksum
    pub fn set_inner(&mut self, inner: &InnerBlock) {
        let stored = crypt::encode(self.pid(), self.otid(), &inner.0);
        self.bytes[HEADER_SIZE..].copy_from_slice(&stored);
        self.bytes[CHECKSUM_OFFSET..CHECKSUM_OFFSET + 2]
            .copy_from_slice(&inner.checksum().to_le_bytes());
    }

    pub fn has_valid_checksum(&self) -> bool {
        self.inner().checksum() == self.stored_checksum()
    }

    /// Decode, edit a copy of the canonical block and encode it again
    pub fn update<F: FnOnce(&mut InnerBlock)>(&mut self, edit: F) {
        let mut inner = self.inner();
        edit(&mut inner);
        self.set_inner(&inner);
    }

    /// Change both ids at once; the inner block keeps its contents under the new key and order
    pub fn rekey(&mut self, pid: u32, otid: u32) {
        let inner = self.inner();
        self.bytes[PID_OFFSET..PID_OFFSET + 4].copy_from_slice(&pid.to_le_bytes());
        self.bytes[OTID_OFFSET..OTID_OFFSET + 4].copy_from_slice(&otid.to_le_bytes());
        self.set_inner(&inner);
    }

    pub fn set_pid(&mut self, pid: u32) {
        self.rekey(pid, self.otid());
    }

    pub fn set_otid(&mut self, otid: u32) {
        self.rekey(self.pid(), otid);
    }

    pub fn name(&self) -> String {
        self.bytes[NAME_OFFSET..NAME_OFFSET + NAME_LENGTH]
            .iter()
            .take_while(|&&b| b != NAME_TERMINATOR)
            .map(|&b| {
                tables::CHARSET
                    .iter()
                    .find(|(_, code)| *code == b)
                    .map_or('?', |(c, _)| *c)
            })
            .collect()
    }

    pub fn set_name(&mut self, text: &str) -> Result<()> {
        let length = text.chars().count();
        if length > NAME_LENGTH {
            return Err(Error::NameTooLong(length));
        }

        let mut name = [NAME_TERMINATOR; NAME_LENGTH];
        for (slot, c) in name.iter_mut().zip(text.chars()) {
            *slot = tables::CHARSET
                .iter()
                .find(|(known, _)| *known == c)
                .map_or(0x00, |(_, code)| *code);
        }

        self.bytes[NAME_OFFSET..NAME_OFFSET + NAME_LENGTH].copy_from_slice(&name);

        Ok(())
    }

    /// Internal species id
    pub fn species(&self) -> u16 {
        self.inner().u16_at(SPECIES)
    }

    pub fn set_species(&mut self, species: u16) {
        self.update(|inner| inner.set_u16(SPECIES, species));
    }

    pub fn national_dex(&self) -> Option<u16> {
        tables::INTERNAL_TO_NATIONAL
            .get(self.species() as usize)
            .copied()
            .filter(|&national| national != 0)
    }

    /// Change the species while keeping the level and the distance to the next level
    pub fn set_national_dex(&mut self, national: u16) -> Result<()> {
        if !(1..=tables::SPECIES_COUNT).contains(&national) {
            return Err(Error::out_of_range(
                "national dex number",
                national.into(),
                1,
                tables::SPECIES_COUNT.into(),
            ));
        }

        let before = self.level().zip(self.experience_to_next_level());
        self.set_species(tables::NATIONAL_TO_INTERNAL[national as usize]);

        let Some((level, to_next)) = before else {
            return Ok(());
        };

        if level == 100 {
            return self.set_level(100);
        }

        self.set_level(level + 1)?;
        let adjusted = i64::from(self.experience()) - i64::from(to_next);

        if adjusted < 0 {
            return self.set_level(level);
        }

        self.set_experience(adjusted as u32);

        if self.level().map_or(true, |now| now < level) {
            self.set_level(level)?;
        }

        Ok(())
    }

    pub fn held_item(&self) -> u16 {
        self.inner().u16_at(HELD_ITEM)
    }

    pub fn set_held_item(&mut self, item: u16) {
        self.update(|inner| inner.set_u16(HELD_ITEM, item));
    }

    pub fn experience(&self) -> u32 {
        self.inner().u32_at(EXPERIENCE)
    }

    pub fn set_experience(&mut self, experience: u32) {
        self.update(|inner| inner.set_u32(EXPERIENCE, experience));
    }

    pub fn growth_rate(&self) -> Option<GrowthRate> {
        self.national_dex().and_then(GrowthRate::of)
    }

    pub fn level(&self) -> Option<u8> {
        self.growth_rate().map(|rate| rate.level_for(self.experience()))
    }

    pub fn set_level(&mut self, level: u8) -> Result<()> {
        if !(1..=100).contains(&level) {
            return Err(Error::out_of_range("level", level.into(), 1, 100));
        }

        let rate = self
            .growth_rate()
            .ok_or_else(|| Error::UnknownSpecies(self.species()))?;

        self.set_experience(rate.experience_for(level));

        Ok(())
    }

    pub fn experience_to_next_level(&self) -> Option<u32> {
        let rate = self.growth_rate()?;
        let experience = self.experience();
        let level = rate.level_for(experience);

        if level >= 100 {
            return Some(0);
        }

        Some(rate.experience_table()[level as usize].saturating_sub(experience))
    }

    pub fn moves(&self) -> [u16; 4] {
        let inner = self.inner();
        [0, 1, 2, 3].map(|i| inner.u16_at(MOVES + i * 2))
    }

    pub fn set_moves(&mut self, moves: [u16; 4]) {
        self.update(|inner| {
            for (i, id) in moves.into_iter().enumerate() {
                inner.set_u16(MOVES + i * 2, id);
            }
        });
    }

    pub fn evs(&self) -> [u8; 6] {
        let inner = self.inner();
        let mut evs = [0u8; 6];
        evs.copy_from_slice(&inner.bytes()[EVS..EVS + 6]);
        evs
    }

    pub fn set_evs(&mut self, evs: [u8; 6]) {
        self.update(|inner| inner.bytes_mut()[EVS..EVS + 6].copy_from_slice(&evs));
    }

    pub fn pokerus(&self) -> Pokerus {
        Pokerus::from(self.inner().bytes()[POKERUS])
    }

    pub fn set_pokerus(&mut self, pokerus: Pokerus) {
        self.update(|inner| inner.bytes_mut()[POKERUS] = pokerus.into());
    }

    pub fn met_location(&self) -> u8 {
        self.inner().bytes()[MET_LOCATION]
    }

    pub fn set_met_location(&mut self, location: u8) {
        self.update(|inner| inner.bytes_mut()[MET_LOCATION] = location);
    }

    pub fn origins(&self) -> Origins {
        Origins::from(self.inner().u16_at(ORIGINS))
    }

    pub fn set_origins(&mut self, origins: Origins) {
        self.update(|inner| inner.set_u16(ORIGINS, origins.into()));
    }

    pub fn genes(&self) -> Genes {
        self.inner().genes()
    }

    pub fn ivs(&self) -> [u8; 6] {
        self.genes().ivs()
    }

    pub fn set_ivs(&mut self, ivs: [u8; 6]) -> Result<()> {
        if let Some(&bad) = ivs.iter().find(|&&iv| iv > 31) {
            return Err(Error::out_of_range("IV", bad.into(), 0, 31));
        }

        self.update(|inner| inner.set_genes(inner.genes().with_ivs(ivs)));

        Ok(())
    }

    /// Ability slot, 1 or 2
    pub fn ability(&self) -> u8 {
        self.genes().ability() as u8 + 1
    }

    pub fn set_ability(&mut self, ability: u8) -> Result<()> {
        if !(1..=2).contains(&ability) {
            return Err(Error::out_of_range("ability", ability.into(), 1, 2));
        }

        self.update(|inner| inner.set_genes(inner.genes().with_ability(ability == 2)));

        Ok(())
    }

    pub fn is_egg(&self) -> bool {
        self.genes().egg()
    }

    pub fn set_egg(&mut self, egg: bool) {
        self.update(|inner| inner.set_genes(inner.genes().with_egg(egg)));

        let flags = if egg { EGG_FLAGS } else { NORMAL_FLAGS };
        self.bytes[FLAGS_OFFSET..FLAGS_OFFSET + 2].copy_from_slice(&flags);
    }

    pub fn ribbons(&self) -> u32 {
        self.inner().u32_at(RIBBONS)
    }

    pub fn set_ribbons(&mut self, ribbons: u32) {
        self.update(|inner| inner.set_u32(RIBBONS, ribbons));
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("pid", &self.pid())
            .field("otid", &self.otid())
            .field("inner", &self.inner())
            .finish()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const INDENT: &str = "    ";

        if self.is_clear() {
            return write!(f, "{INDENT}-");
        }

        let national = self
            .national_dex()
            .map_or_else(|| "?".to_string(), |n| n.to_string());
        let item = match self.held_item() {
            0 => "None".to_string(),
            id => id.to_string(),
        };
        let pokerus = self.pokerus();
        let pokerus = match (pokerus.strain(), pokerus.days_left()) {
            (0, _) => "No",
            (_, 0) => "Cured",
            _ => "Infected",
        };

        writeln!(f, "{INDENT}Name:   {}", self.name())?;
        writeln!(f, "{INDENT}Egg:    {}", self.is_egg())?;
        writeln!(f, "{INDENT}Nat ID: {national}")?;
        writeln!(f, "{INDENT}OTID:   {}", self.otid())?;
        writeln!(f, "{INDENT}PID:    {}", self.pid())?;
        writeln!(f, "{INDENT}Abil:   {}", self.ability())?;
        writeln!(f, "{INDENT}IVs:    {:?}", self.ivs())?;
        writeln!(f, "{INDENT}EVs:    {:?}", self.evs())?;
        writeln!(f, "{INDENT}Item:   {item}")?;
        writeln!(f, "{INDENT}Moves:  {:?}", self.moves())?;
        write!(f, "{INDENT}PKRS:   {pokerus}")
    }
}
