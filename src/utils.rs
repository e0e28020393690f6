use crate::save::RECORDS_PER_BOX;

/// Number of `size`-byte pieces needed to hold `len` bytes
pub fn count_chunks(len: usize, size: usize) -> usize {
    len.div_ceil(size)
}

/// 1-based (box, cell) of a record index, the way the game shows it
pub fn box_position(index: usize) -> (usize, usize) {
    (index / RECORDS_PER_BOX + 1, index % RECORDS_PER_BOX + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_counts_round_up() {
        assert_eq!(count_chunks(0, 67), 0);
        assert_eq!(count_chunks(1, 67), 1);
        assert_eq!(count_chunks(67, 67), 1);
        assert_eq!(count_chunks(68, 67), 2);
    }

    #[test]
    fn last_record_is_box_14_cell_30() {
        assert_eq!(box_position(0), (1, 1));
        assert_eq!(box_position(29), (1, 30));
        assert_eq!(box_position(30), (2, 1));
        assert_eq!(box_position(419), (14, 30));
    }
}
