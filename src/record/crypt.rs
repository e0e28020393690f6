//! Encryption and substructure ordering of the 48-byte inner block.
//!
//! The inner block is made of four 12-byte substructures: growth, attacks,
//! condition and misc. The game stores them XORed with `pid ^ otid` and
//! shuffled into one of 24 orders picked by `pid % 24`.

pub const INNER_SIZE: usize = 48;
pub const SUBSTRUCTURE_SIZE: usize = 12;

/// Canonical substructure `k` is kept in stored slot `ORDERS[i][k]`.
pub static ORDERS: [[usize; 4]; 24] = [
    [0, 1, 2, 3],
    [0, 1, 3, 2],
    [0, 2, 1, 3],
    [0, 3, 1, 2],
    [0, 2, 3, 1],
    [0, 3, 2, 1],
    [1, 0, 2, 3],
    [1, 0, 3, 2],
    [2, 0, 1, 3],
    [3, 0, 1, 2],
    [2, 0, 3, 1],
    [3, 0, 2, 1],
    [1, 2, 0, 3],
    [1, 3, 0, 2],
    [2, 1, 0, 3],
    [3, 1, 0, 2],
    [2, 3, 0, 1],
    [3, 2, 0, 1],
    [1, 2, 3, 0],
    [1, 3, 2, 0],
    [2, 1, 3, 0],
    [3, 1, 2, 0],
    [2, 3, 1, 0],
    [3, 2, 1, 0],
];

pub type InnerBytes = [u8; INNER_SIZE];

pub fn key(pid: u32, otid: u32) -> [u8; 4] {
    (pid ^ otid).to_le_bytes()
}

pub fn order(pid: u32) -> &'static [usize; 4] {
    &ORDERS[(pid % 24) as usize]
}

fn xor(key: [u8; 4], data: &mut InnerBytes) {
    for (i, byte) in data.iter_mut().enumerate() {
        *byte ^= key[i & 3];
    }
}

fn substructure(data: &InnerBytes, slot: usize) -> &[u8] {
    &data[slot * SUBSTRUCTURE_SIZE..(slot + 1) * SUBSTRUCTURE_SIZE]
}

/// Decrypt the stored bytes and put the substructures in canonical order
pub fn decode(pid: u32, otid: u32, stored: &InnerBytes) -> InnerBytes {
    let mut plain = *stored;
    xor(key(pid, otid), &mut plain);

    let mut canonical = [0u8; INNER_SIZE];
    for (k, &slot) in order(pid).iter().enumerate() {
        canonical[k * SUBSTRUCTURE_SIZE..(k + 1) * SUBSTRUCTURE_SIZE]
            .copy_from_slice(substructure(&plain, slot));
    }

    canonical
}

/// Shuffle the canonical substructures into stored order and encrypt them
pub fn encode(pid: u32, otid: u32, canonical: &InnerBytes) -> InnerBytes {
    let mut stored = [0u8; INNER_SIZE];
    for (k, &slot) in order(pid).iter().enumerate() {
        stored[slot * SUBSTRUCTURE_SIZE..(slot + 1) * SUBSTRUCTURE_SIZE]
            .copy_from_slice(substructure(canonical, k));
    }

    xor(key(pid, otid), &mut stored);
    stored
}

/// 16-bit little-endian word sum of the canonical block
pub fn checksum(canonical: &InnerBytes) -> u16 {
    canonical
        .chunks_exact(2)
        .map(|w| u16::from_le_bytes([w[0], w[1]]))
        .fold(0u16, u16::wrapping_add)
}
