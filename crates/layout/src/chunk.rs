//! Bounded contiguous chunking, the pagination primitive.

use crate::LayoutError;

/// Splits `items` into contiguous slices of at most `size` elements.
///
/// Every chunk except possibly the last has exactly `size` elements; the
/// last holds the remainder. Chunking never reorders: concatenating the
/// chunks reconstructs the input exactly. An empty input produces no
/// chunks. A zero `size` is rejected, never treated as "unchunked".
pub fn chunk<T>(items: &[T], size: usize) -> Result<Vec<&[T]>, LayoutError> {
    if size == 0 {
        return Err(LayoutError::InvalidChunkSize(size));
    }
    Ok(items.chunks(size).collect())
}

/// Number of chunks [`chunk`] would produce for `len` items.
pub fn chunk_count(len: usize, size: usize) -> Result<usize, LayoutError> {
    if size == 0 {
        return Err(LayoutError::InvalidChunkSize(size));
    }
    Ok(len.div_ceil(size))
}

/// Total pages of a chunked grid:
/// `ceil(fields / max_cols) * ceil(records / max_rows)`.
pub fn page_count(
    field_count: usize,
    record_count: usize,
    max_cols: usize,
    max_rows: usize,
) -> Result<usize, LayoutError> {
    Ok(chunk_count(field_count, max_cols)? * chunk_count(record_count, max_rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concatenation_reconstructs_input() {
        let items: Vec<u32> = (0..23).collect();
        for size in 1..=25 {
            let chunks = chunk(&items, size).unwrap();
            let rebuilt: Vec<u32> = chunks.iter().flat_map(|c| c.iter().copied()).collect();
            assert_eq!(rebuilt, items, "size {}", size);
        }
    }

    #[test]
    fn all_chunks_full_except_possibly_last() {
        let items: Vec<u32> = (0..17).collect();
        for size in 1..=20 {
            let chunks = chunk(&items, size).unwrap();
            let (last, full) = chunks.split_last().unwrap();
            assert!(full.iter().all(|c| c.len() == size), "size {}", size);
            assert!(!last.is_empty() && last.len() <= size, "size {}", size);
        }
    }

    #[test]
    fn empty_input_yields_no_chunks() {
        let items: [u32; 0] = [];
        assert!(chunk(&items, 4).unwrap().is_empty());
    }

    #[test]
    fn zero_size_is_rejected() {
        let items = [1, 2, 3];
        assert_eq!(chunk(&items, 0), Err(LayoutError::InvalidChunkSize(0)));
        assert_eq!(chunk_count(3, 0), Err(LayoutError::InvalidChunkSize(0)));
        assert_eq!(page_count(3, 3, 0, 2), Err(LayoutError::InvalidChunkSize(0)));
        assert_eq!(page_count(3, 3, 2, 0), Err(LayoutError::InvalidChunkSize(0)));
    }

    #[test]
    fn page_count_identity() {
        assert_eq!(page_count(20, 10, 5, 8).unwrap(), 4 * 2);
        assert_eq!(page_count(21, 10, 5, 8).unwrap(), 5 * 2);
        assert_eq!(page_count(5, 8, 5, 8).unwrap(), 1);
        assert_eq!(page_count(0, 10, 5, 8).unwrap(), 0);
    }
}
