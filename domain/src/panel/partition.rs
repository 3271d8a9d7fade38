//! Roster partitioning into subgroups.

use crate::core::error::DomainError;

/// Split `roster` into contiguous chunks of `size`, preserving order.
///
/// The last chunk holds the remainder and may be smaller than `size`.
/// Concatenating the chunks reproduces the roster exactly.
pub fn partition_roster<T: Clone>(roster: &[T], size: usize) -> Result<Vec<Vec<T>>, DomainError> {
    if size == 0 {
        return Err(DomainError::InvalidSubgroupSize);
    }
    Ok(roster.chunks(size).map(<[T]>::to_vec).collect())
}

/// Number of subgroups `partition_roster` yields for `len` agents.
pub fn subgroup_count(len: usize, size: usize) -> usize {
    if size == 0 { 0 } else { len.div_ceil(size) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_split() {
        let groups = partition_roster(&[0, 1, 2, 3], 2).unwrap();
        assert_eq!(groups, vec![vec![0, 1], vec![2, 3]]);
    }

    #[test]
    fn test_remainder_goes_last() {
        let roster: Vec<usize> = (0..7).collect();
        let groups = partition_roster(&roster, 3).unwrap();

        assert_eq!(groups.len(), subgroup_count(7, 3));
        assert_eq!(groups.iter().map(Vec::len).collect::<Vec<_>>(), vec![3, 3, 1]);
        assert_eq!(groups.concat(), roster);
    }

    #[test]
    fn test_size_larger_than_roster() {
        let groups = partition_roster(&["a", "b"], 5).unwrap();
        assert_eq!(groups, vec![vec!["a", "b"]]);
    }

    #[test]
    fn test_sizes_cover_roster_for_many_shapes() {
        for n in 0..12usize {
            for s in 1..6usize {
                let roster: Vec<usize> = (0..n).collect();
                let groups = partition_roster(&roster, s).unwrap();
                assert_eq!(groups.len(), subgroup_count(n, s));
                assert!(groups.iter().rev().skip(1).all(|g| g.len() == s));
                assert_eq!(groups.concat(), roster);
            }
        }
    }

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(
            partition_roster(&[1, 2], 0),
            Err(DomainError::InvalidSubgroupSize)
        );
    }
}
