use log::{debug, info, warn};
use std::io::Write;

use crate::cover::chunk::{self, Chunk, CHUNK_SIZE};
use crate::cover::{Cover, Uncover};
use crate::error::{Error, Result};
use crate::record::Record;
use crate::save::BoxStorage;
use crate::utils;

/// Pad the last piece of a payload with zeros
fn to_chunk(piece: &[u8]) -> Chunk {
    let mut chunk = [0u8; CHUNK_SIZE];
    chunk[..piece.len()].copy_from_slice(piece);
    chunk
}

fn check_capacity(len: usize, records: &[Record]) -> Result<usize> {
    let needed = utils::count_chunks(len, CHUNK_SIZE);

    if needed > records.len() {
        return Err(Error::CapacityExceeded {
            needed,
            available: records.len(),
        });
    }

    Ok(needed)
}

/// Hides a payload as eggs, one 67-byte chunk per record,
/// starting from the last record and working backwards
pub struct EggCover<'a> {
    storage: &'a mut BoxStorage,
}

impl<'a> From<&'a mut BoxStorage> for EggCover<'a> {
    fn from(storage: &'a mut BoxStorage) -> EggCover<'a> {
        EggCover { storage }
    }
}

impl Cover for EggCover<'_> {
    fn cover(&mut self, src: &[u8]) -> Result<usize> {
        let needed = check_capacity(src.len(), self.storage.records())?;

        // Nothing is written back unless every chunk reads back correctly
        let mut staged = self.storage.records().to_vec();
        let last = staged.len();

        for (n, piece) in src.chunks(CHUNK_SIZE).enumerate() {
            let index = last - 1 - n;
            let chunk = to_chunk(piece);
            let record = chunk::map(&chunk);

            if chunk::unmap(&record) != chunk {
                return Err(Error::RoundTripFailure { index });
            }

            let (bx, cell) = utils::box_position(index);
            debug!("Hid chunk {} in box {} cell {}", n + 1, bx, cell);

            staged[index] = record;
        }

        self.storage.replace_records(staged)?;

        info!("Hid {} bytes in {} records", src.len(), needed);

        Ok(needed)
    }
}

pub struct EggUncover<'a> {
    storage: &'a BoxStorage,
}

impl<'a> From<&'a BoxStorage> for EggUncover<'a> {
    fn from(storage: &'a BoxStorage) -> EggUncover<'a> {
        EggUncover { storage }
    }
}

impl EggUncover<'_> {
    /// Read every chunk from the last record back to the first record that isn't an egg.
    /// The result is a multiple of 67 bytes, zero-padded at the end.
    pub fn extract(&self) -> Result<Vec<u8>> {
        let records = self.storage.records();

        if !records.last().is_some_and(Record::is_egg) {
            return Err(Error::NotEggTerminated);
        }

        let data: Vec<u8> = records
            .iter()
            .rev()
            .take_while(|record| record.is_egg())
            .flat_map(|record| chunk::unmap(record))
            .collect();

        info!(
            "Extracted {} bytes from {} records",
            data.len(),
            data.len() / CHUNK_SIZE
        );

        Ok(data)
    }
}

impl Uncover for EggUncover<'_> {
    fn uncover<W: Write>(&self, dest: &mut W) -> Result<usize> {
        let data = self.extract()?;
        dest.write_all(&data)?;

        Ok(data.len())
    }

    fn verify(&self, expected: &[u8]) -> Result<bool> {
        let records = self.storage.records();
        check_capacity(expected.len(), records)?;

        let mut status = true;

        for (n, piece) in expected.chunks(CHUNK_SIZE).enumerate() {
            let index = records.len() - 1 - n;

            if chunk::unmap(&records[index]) != to_chunk(piece) {
                let (bx, cell) = utils::box_position(index);
                warn!("Chunk {} doesn't match the record in box {} cell {}", n + 1, bx, cell);
                status = false;
            }
        }

        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::save::fixture::blank_block;
    use crate::save::RECORD_COUNT;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    fn storage() -> BoxStorage {
        blank_block(1).box_storage().unwrap()
    }

    fn random_payload(len: usize) -> Vec<u8> {
        let mut rng = StdRng::seed_from_u64(len as u64);
        let mut data = vec![0u8; len];
        rng.fill_bytes(&mut data);
        data
    }

    #[test]
    fn hide_then_extract() {
        let payload = random_payload(1000);
        let mut storage = storage();

        assert_eq!(EggCover::from(&mut storage).cover(&payload).unwrap(), 15);

        let extracted = EggUncover::from(&storage).extract().unwrap();
        assert_eq!(extracted.len(), 15 * CHUNK_SIZE);
        assert_eq!(&extracted[..1000], &payload[..]);
        assert!(extracted[1000..].iter().all(|&b| b == 0));
    }

    #[test]
    fn hide_touches_only_the_last_records() {
        let payload = random_payload(CHUNK_SIZE * 3 + 1);
        let mut storage = storage();
        let before = storage.clone();

        EggCover::from(&mut storage).cover(&payload).unwrap();

        for (i, (old, new)) in before.records().iter().zip(storage.records()).enumerate() {
            if i >= RECORD_COUNT - 4 {
                assert!(new.is_egg(), "record {i} should be an egg");
            } else {
                assert_eq!(old, new, "record {i} should be untouched");
            }
        }

        assert_eq!(chunk::unmap(&storage.records()[419])[..], payload[..CHUNK_SIZE]);
        assert_eq!(chunk::unmap(&storage.records()[418])[..], payload[CHUNK_SIZE..CHUNK_SIZE * 2]);
    }

    #[test]
    fn empty_payload_uses_no_records() {
        let mut storage = storage();
        let before = storage.clone();

        assert_eq!(EggCover::from(&mut storage).cover(&[]).unwrap(), 0);
        assert_eq!(storage, before);
        assert!(EggUncover::from(&storage).verify(&[]).unwrap());
    }

    #[test]
    fn too_large_payload_is_rejected_without_changes() {
        let payload = vec![1u8; CHUNK_SIZE * RECORD_COUNT + 1];
        let mut storage = storage();
        let before = storage.clone();

        let err = EggCover::from(&mut storage).cover(&payload).unwrap_err();
        assert!(matches!(
            err,
            Error::CapacityExceeded { needed: 421, available: RECORD_COUNT }
        ));
        assert_eq!(storage, before);
        assert!(matches!(
            EggUncover::from(&storage).verify(&payload),
            Err(Error::CapacityExceeded { .. })
        ));
    }

    #[test]
    fn full_capacity_fits() {
        let payload = random_payload(CHUNK_SIZE * RECORD_COUNT);
        let mut storage = storage();

        assert_eq!(EggCover::from(&mut storage).cover(&payload).unwrap(), RECORD_COUNT);
        assert_eq!(EggUncover::from(&storage).extract().unwrap(), payload);
    }

    #[test]
    fn extract_needs_a_trailing_egg() {
        let storage = storage();
        assert!(matches!(
            EggUncover::from(&storage).extract(),
            Err(Error::NotEggTerminated)
        ));
    }

    #[test]
    fn extract_stops_at_first_non_egg() {
        let mut storage = storage();
        EggCover::from(&mut storage).cover(&random_payload(200)).unwrap();

        // An unrelated egg further down isn't part of the payload
        storage.records_mut()[400].set_egg(true);

        let extracted = EggUncover::from(&storage).extract().unwrap();
        assert_eq!(extracted.len(), 3 * CHUNK_SIZE);
    }

    #[test]
    fn verify_matches_and_mismatches() {
        let payload = random_payload(300);
        let mut storage = storage();
        EggCover::from(&mut storage).cover(&payload).unwrap();

        let uncover = EggUncover::from(&storage);
        assert!(uncover.verify(&payload).unwrap());

        let mut other = payload.clone();
        other[299] ^= 1;
        assert!(!uncover.verify(&other).unwrap());
    }

    #[test]
    fn verify_after_unrelated_edit_is_false() {
        let payload = random_payload(150);
        let mut storage = storage();
        EggCover::from(&mut storage).cover(&payload).unwrap();

        let record = &mut storage.records_mut()[418];
        record.set_experience(record.experience() ^ 1);
        assert!(!EggUncover::from(&storage).verify(&payload).unwrap());
    }

    #[test]
    fn uncover_writes_to_destination() {
        let payload = random_payload(67);
        let mut storage = storage();
        EggCover::from(&mut storage).cover(&payload).unwrap();

        let mut out = Vec::new();
        assert_eq!(EggUncover::from(&storage).uncover(&mut out).unwrap(), CHUNK_SIZE);
        assert_eq!(out, payload);
    }
}
