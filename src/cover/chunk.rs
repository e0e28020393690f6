//! Mapping between one 67-byte payload chunk and the fields of one record.
//!
//! | chunk     | destination                                   |
//! |-----------|-----------------------------------------------|
//! | `[0..2]`  | inner `[0..2]` (species)                      |
//! | `[2..18]` | inner `[4..20]` (experience .. moves)         |
//! | `[18..30]`| inner `[24..36]` (condition)                  |
//! | `[30]`    | inner `[37]` (met location)                   |
//! | `[31]`    | low byte of origins                           |
//! | `[32..35]`| inner `[40..43]` (low bytes of genes)         |
//! | `[35..39]`| inner `[44..48]` (ribbons)                    |
//! | `[39]`    | high nibble in origins bits 8-11, low nibble in inner `[43]` bits 0-3 |
//! | `[40..50]`| header `[8..18]` (name)                       |
//! | `[50..57]`| header `[20..27]`                             |
//! | `[57..61]`| pid                                           |
//! | `[61..65]`| otid                                          |
//! | `[65..67]`| header `[30..32]`                             |
//!
//! The origins field holds the chunk byte in bits 0-7 and the nibble in bits
//! 8-11, and is stored rotated right by one bit. Reading rotates it back left.

use crate::record::{
    InnerBlock, Record, GENES, HEADER_SIZE, MET_LOCATION, ORIGINS, OTID_OFFSET, PID_OFFSET,
    RIBBONS,
};

pub const CHUNK_SIZE: usize = 67;

pub type Chunk = [u8; CHUNK_SIZE];

fn copy(dest: &mut [u8], src: &[u8]) {
    dest.copy_from_slice(src);
}

/// Overwrite a record with a chunk, disguised as an egg
pub fn map(chunk: &Chunk) -> Record {
    let mut inner = InnerBlock::zeroed();
    let data = inner.bytes_mut();

    copy(&mut data[0..2], &chunk[0..2]);
    copy(&mut data[4..20], &chunk[2..18]);
    copy(&mut data[24..36], &chunk[18..30]);
    data[MET_LOCATION] = chunk[30];
    copy(&mut data[GENES..GENES + 3], &chunk[32..35]);
    data[GENES + 3] = chunk[39] & 0x0F;
    copy(&mut data[RIBBONS..RIBBONS + 4], &chunk[35..39]);

    let origins = u16::from(chunk[31]) | (u16::from(chunk[39] >> 4) << 8);
    inner.set_u16(ORIGINS, origins.rotate_right(1));

    let mut header = [0u8; HEADER_SIZE];
    copy(&mut header[8..18], &chunk[40..50]);
    copy(&mut header[20..27], &chunk[50..57]);
    copy(&mut header[PID_OFFSET..PID_OFFSET + 4], &chunk[57..61]);
    copy(&mut header[OTID_OFFSET..OTID_OFFSET + 4], &chunk[61..65]);
    copy(&mut header[30..32], &chunk[65..67]);

    let mut record = Record::assemble(&header, &inner);
    record.set_egg(true);
    record
}

/// Read back the chunk hidden in a record
pub fn unmap(record: &Record) -> Chunk {
    let inner = record.inner();
    let data = inner.bytes();
    let header = record.header();

    let origins = inner.u16_at(ORIGINS).rotate_left(1);
    let extra = (((origins >> 8) & 0x0F) as u8) << 4 | (data[GENES + 3] & 0x0F);

    let mut chunk = [0u8; CHUNK_SIZE];
    copy(&mut chunk[0..2], &data[0..2]);
    copy(&mut chunk[2..18], &data[4..20]);
    copy(&mut chunk[18..30], &data[24..36]);
    chunk[30] = data[MET_LOCATION];
    chunk[31] = origins as u8;
    copy(&mut chunk[32..35], &data[GENES..GENES + 3]);
    copy(&mut chunk[35..39], &data[RIBBONS..RIBBONS + 4]);
    chunk[39] = extra;
    copy(&mut chunk[40..50], &header[8..18]);
    copy(&mut chunk[50..57], &header[20..27]);
    copy(&mut chunk[57..61], &record.pid().to_le_bytes());
    copy(&mut chunk[61..65], &record.otid().to_le_bytes());
    copy(&mut chunk[65..67], &header[30..32]);

    chunk
}
