use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use tamago::cover::chunk::CHUNK_SIZE;
use tamago::save::{checksum, BLOCK_SIZE, COVERED_SIZES, RECORD_COUNT, SAVE_SIZE, SECTION_SIZE};
use tamago::{Cover, EggCover, EggUncover, Error, SaveFile, Slot, Uncover};

/// Build a save whose two blocks hold random data with valid checksums
fn build_save(generation_a: u32, generation_b: u32, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut bytes = vec![0u8; SAVE_SIZE];
    rng.fill_bytes(&mut bytes);

    for (block, generation) in [(0, generation_a), (1, generation_b)] {
        // rotate the section order the way the game does between saves
        let rotation = rng.gen_range(0..14u16);

        for i in 0..14u16 {
            let id = (i + rotation) % 14;
            let start = block * BLOCK_SIZE + i as usize * SECTION_SIZE;
            let section = &mut bytes[start..start + SECTION_SIZE];

            section[0xFF4..0xFF6].copy_from_slice(&id.to_le_bytes());
            section[0xFFC..0x1000].copy_from_slice(&generation.to_le_bytes());

            let sum = checksum(&section[..COVERED_SIZES[id as usize]]);
            section[0xFF6..0xFF8].copy_from_slice(&sum.to_le_bytes());
        }
    }

    bytes
}

#[test]
fn zero_payload_survives_commit() {
    let mut save = SaveFile::from_bytes(build_save(1, 2, 1)).unwrap();
    let slot = save.select_active().unwrap();
    assert_eq!(slot, Slot::B);

    let payload = [0u8; CHUNK_SIZE];
    let mut storage = save.box_storage(slot).unwrap();
    // the slot in front of the payload is empty, which ends the egg run
    storage.records_mut()[RECORD_COUNT - 2].clear();
    assert_eq!(EggCover::from(&mut storage).cover(&payload).unwrap(), 1);

    let committed = save.commit(slot, &storage).unwrap().to_vec();
    assert_eq!(committed.len(), SAVE_SIZE);

    let reopened = SaveFile::from_bytes(committed).unwrap();
    assert_eq!(reopened.select_active().unwrap(), Slot::B);

    let storage = reopened.box_storage(Slot::B).unwrap();
    let last = &storage.records()[RECORD_COUNT - 1];
    assert!(last.is_egg());
    assert_eq!(last.pid(), 0);
    assert_eq!(last.otid(), 0);
    assert!(last.has_valid_checksum());

    assert_eq!(EggUncover::from(&storage).extract().unwrap(), payload.to_vec());
}

#[test]
fn random_payload_round_trips_through_the_file() {
    let original = build_save(10, 9, 2);
    let mut payload = vec![0u8; 5000];
    StdRng::seed_from_u64(3).fill_bytes(&mut payload);

    let mut save = SaveFile::from_bytes(original.clone()).unwrap();
    let slot = save.select_active().unwrap();
    assert_eq!(slot, Slot::A);

    let before = save.box_storage(slot).unwrap().to_bytes();
    let mut storage = save.box_storage(slot).unwrap();
    EggCover::from(&mut storage).cover(&payload).unwrap();
    let committed = save.commit(slot, &storage).unwrap().to_vec();

    // the other block and the tail of the file are carried over as they were
    assert_eq!(&committed[BLOCK_SIZE..], &original[BLOCK_SIZE..]);

    let reopened = SaveFile::from_bytes(committed).unwrap();
    assert!(reopened.block(Slot::A).is_valid());

    let storage = reopened.box_storage(Slot::A).unwrap();
    let after = storage.to_bytes();

    // box names and wallpapers before and after the records are untouched
    assert_eq!(&after[..4], &before[..4]);
    assert_eq!(&after[4 + RECORD_COUNT * 80..], &before[4 + RECORD_COUNT * 80..]);

    let extracted = EggUncover::from(&storage).extract().unwrap();
    assert_eq!(&extracted[..payload.len()], &payload[..]);
    assert!(EggUncover::from(&storage).verify(&payload).unwrap());
}

#[test]
fn newer_generation_is_active() {
    let save = SaveFile::from_bytes(build_save(5, 7, 4)).unwrap();
    assert_eq!(save.select_active().unwrap(), Slot::B);
    assert_eq!(save.select_backup().unwrap(), Slot::A);
}

#[test]
fn corrupted_section_falls_back_to_other_block() {
    let mut bytes = build_save(5, 7, 5);
    // flip a byte inside the covered data of block B's third section
    bytes[BLOCK_SIZE + 2 * SECTION_SIZE + 0x100] ^= 0x01;

    let save = SaveFile::from_bytes(bytes).unwrap();
    assert!(!save.block(Slot::B).is_valid());
    assert!(save.block(Slot::A).is_valid());
    assert_eq!(save.select_active().unwrap(), Slot::A);
}

#[test]
fn oversized_payload_leaves_save_unchanged() {
    let original = build_save(1, 1, 6);
    let save = SaveFile::from_bytes(original.clone()).unwrap();
    let slot = save.select_active().unwrap();

    let payload = vec![0xAAu8; CHUNK_SIZE * 420 + 1];
    let mut storage = save.box_storage(slot).unwrap();
    let before = storage.clone();

    let err = EggCover::from(&mut storage).cover(&payload).unwrap_err();
    assert!(matches!(err, Error::CapacityExceeded { needed: 421, .. }));
    assert!(!err.is_format());
    assert_eq!(storage, before);
    assert_eq!(save.as_bytes(), &original[..]);
}

#[test]
fn verify_reports_overwritten_data() {
    let mut save = SaveFile::from_bytes(build_save(3, 2, 7)).unwrap();
    let slot = save.select_active().unwrap();

    let payload = b"the quick brown fox jumps over the lazy dog, until it gets tired".repeat(4);
    let mut storage = save.box_storage(slot).unwrap();
    EggCover::from(&mut storage).cover(&payload).unwrap();
    save.commit(slot, &storage).unwrap();

    let mut storage = save.box_storage(slot).unwrap();
    assert!(EggUncover::from(&storage).verify(&payload).unwrap());

    // someone renames one of the eggs in game
    storage.records_mut()[RECORD_COUNT - 2].set_name("Egg").unwrap();
    assert!(!EggUncover::from(&storage).verify(&payload).unwrap());
}

#[test]
fn extract_without_payload_fails() {
    let mut save = SaveFile::from_bytes(build_save(1, 0, 8)).unwrap();
    let slot = save.select_active().unwrap();

    // random bytes may happen to decode as an egg, so clear the last record first
    let mut storage = save.box_storage(slot).unwrap();
    storage.records_mut()[RECORD_COUNT - 1].clear();
    save.commit(slot, &storage).unwrap();

    let storage = save.box_storage(slot).unwrap();
    assert!(matches!(
        EggUncover::from(&storage).extract(),
        Err(Error::NotEggTerminated)
    ));
}

#[test]
fn wrong_file_size_is_a_format_error() {
    let err = SaveFile::from_bytes(vec![0u8; SAVE_SIZE - 1]).err().unwrap();
    assert!(err.is_format());
}
