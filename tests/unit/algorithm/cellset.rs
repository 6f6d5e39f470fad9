//! Tests for `CellSet` membership, ordering and equality

#[cfg(test)]
mod tests {
    use pipemaze::algorithm::cellset::CellSet;
    use pipemaze::spatial::grid::CellKey;

    // Verifies new CellSet is empty with count 0
    // Verified by initializing the bitset with all bits set
    #[test]
    fn test_new_set_is_empty() {
        let set = CellSet::new(3, 4);
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.dimensions(), (3, 4));
    }

    // Tests insert reports whether the cell was new
    // Verified by always returning true from insert
    #[test]
    fn test_insert_reports_novelty() {
        let mut set = CellSet::new(3, 3);
        assert!(set.insert(CellKey::new(1, 2)));
        assert!(!set.insert(CellKey::new(1, 2)));
        assert!(set.contains(CellKey::new(1, 2)));
        assert!(!set.contains(CellKey::new(2, 1)));
        assert_eq!(set.len(), 1);
    }

    // Tests keys outside the shape are never members
    // Verified by removing the shape check, which aliases (0, 5) onto (1, 2)
    #[test]
    fn test_out_of_shape_keys_are_ignored() {
        let mut set = CellSet::new(3, 3);
        assert!(!set.insert(CellKey::new(0, 5)));
        assert!(!set.insert(CellKey::new(9, 0)));
        assert!(set.is_empty());
        assert!(!set.contains(CellKey::new(0, 5)));
    }

    // Tests iteration is row-major regardless of insertion order
    // Verified by mapping indices with the row count
    #[test]
    fn test_iteration_is_row_major() {
        let mut set = CellSet::new(2, 3);
        set.insert(CellKey::new(1, 0));
        set.insert(CellKey::new(0, 2));
        set.insert(CellKey::new(0, 1));

        assert_eq!(
            set.to_vec(),
            vec![CellKey::new(0, 1), CellKey::new(0, 2), CellKey::new(1, 0)]
        );
    }

    // Tests equality is purely structural
    // Verified by comparing insertion history
    #[test]
    fn test_structural_equality() {
        let mut a = CellSet::new(2, 2);
        let mut b = CellSet::new(2, 2);
        a.insert(CellKey::new(0, 0));
        a.insert(CellKey::new(1, 1));
        b.insert(CellKey::new(1, 1));
        b.insert(CellKey::new(0, 0));
        assert_eq!(a, b);

        assert!(b.remove(CellKey::new(0, 0)));
        assert!(!b.remove(CellKey::new(0, 0)));
        assert_ne!(a, b);
    }

    // Tests the full set contains every cell
    // Verified by building all() with zeros
    #[test]
    fn test_all() {
        let set = CellSet::all(2, 3);
        assert_eq!(set.len(), 6);
        assert!(set.contains(CellKey::new(1, 2)));
    }
}
