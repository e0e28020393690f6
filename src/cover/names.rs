use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::info;

use crate::cover::Cover;
use crate::error::{Error, Result};
use crate::record::NAME_LENGTH;
use crate::save::BoxStorage;
use crate::utils;

/// Species given to empty slots so the game shows something carrying the name
const PLACEHOLDER_SPECIES: u16 = 1;

/// Spreads base64 text across record names, 10 characters each,
/// starting from the first record
pub struct NameCover<'a> {
    storage: &'a mut BoxStorage,
}

impl<'a> From<&'a mut BoxStorage> for NameCover<'a> {
    fn from(storage: &'a mut BoxStorage) -> NameCover<'a> {
        NameCover { storage }
    }
}

impl Cover for NameCover<'_> {
    fn cover(&mut self, src: &[u8]) -> Result<usize> {
        let text = STANDARD.encode(src);
        let needed = utils::count_chunks(text.len(), NAME_LENGTH);
        let available = self.storage.records().len();

        if needed > available {
            return Err(Error::CapacityExceeded { needed, available });
        }

        let mut staged = self.storage.records().to_vec();

        // base64 is plain ASCII, so byte chunks are character chunks
        for (record, name) in staged.iter_mut().zip(text.as_bytes().chunks(NAME_LENGTH)) {
            if record.is_clear() {
                record.set_national_dex(PLACEHOLDER_SPECIES)?;
            }

            let name: String = name.iter().map(|&b| char::from(b)).collect();
            record.set_name(&name)?;
        }

        self.storage.replace_records(staged)?;

        info!("Wrote {} characters across {} names", text.len(), needed);

        Ok(needed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::save::fixture::blank_block;

    #[test]
    fn text_is_split_across_names() {
        let mut storage = blank_block(1).box_storage().unwrap();

        // "Hello, world!" -> "SGVsbG8sIHdvcmxkIQ=="
        let used = NameCover::from(&mut storage).cover(b"Hello, world!").unwrap();
        assert_eq!(used, 2);

        let records = storage.records();
        assert_eq!(records[0].name(), "SGVsbG8sIH");
        assert_eq!(records[1].name(), "dvcmxkIQ==");
        assert_eq!(records[0].national_dex(), Some(1));
        assert_eq!(records[0].level(), Some(1));
        assert!(records[2].is_clear());
    }

    #[test]
    fn existing_creatures_keep_their_species() {
        let mut storage = blank_block(1).box_storage().unwrap();
        storage.records_mut()[0].set_national_dex(25).unwrap();

        NameCover::from(&mut storage).cover(b"abc").unwrap();
        assert_eq!(storage.records()[0].national_dex(), Some(25));
        assert_eq!(storage.records()[0].name(), "YWJj");
    }

    #[test]
    fn text_longer_than_all_names_is_rejected() {
        let mut storage = blank_block(1).box_storage().unwrap();
        let before = storage.clone();

        // 3150 bytes encode to 4200 characters, one more byte spills over
        assert!(NameCover::from(&mut storage).cover(&[0u8; 3151]).is_err());
        assert_eq!(storage, before);

        assert_eq!(NameCover::from(&mut storage).cover(&[0u8; 3150]).unwrap(), 420);
    }
}
