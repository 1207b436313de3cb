mod tests {
    use myrtio_tiny_rgb::random::Mwc;

    fn one() -> u16 {
        1
    }

    fn zero() -> u16 {
        0
    }

    fn noisy() -> u16 {
        0xbeef
    }

    #[test]
    fn test_known_sequence() {
        let mut rng = Mwc::new(one);
        assert_eq!(rng.next_u32(), 2_422_818_384);
        assert_eq!(rng.next_u32(), 1_583_405_312);
        assert_eq!(rng.next_u32(), 3_876_119_375);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = Mwc::new(noisy);
        let mut b = Mwc::new(noisy);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_zero_entropy_does_not_stall() {
        let mut rng = Mwc::new(zero);
        let first = rng.next_u32();
        let second = rng.next_u32();
        assert_ne!(first, 0);
        assert_ne!(first, second);
    }

    #[test]
    fn test_next_distinct_differs_from_current() {
        let mut rng = Mwc::new(noisy);
        for current in 0..=255u8 {
            let value = rng.next_distinct(255, 0, current);
            assert_ne!(value, current);
        }
    }

    #[test]
    fn test_next_distinct_respects_bound_and_offset() {
        let mut rng = Mwc::new(noisy);
        for _ in 0..500 {
            let value = rng.next_distinct(10, 20, 0);
            assert!((20..30).contains(&value));
        }
    }

    #[test]
    fn test_next_distinct_clips_negative_offset() {
        let mut rng = Mwc::new(noisy);
        for _ in 0..500 {
            let value = rng.next_distinct(50, -99, 100);
            assert_eq!(value, 0);
        }
    }

    #[test]
    fn test_next_distinct_terminates_on_degenerate_range() {
        let mut rng = Mwc::new(noisy);
        assert_eq!(rng.next_distinct(1, 0, 0), 0);
    }

    #[test]
    fn test_zero_bound_is_treated_as_one() {
        let mut rng = Mwc::new(noisy);
        assert_eq!(rng.next_distinct(0, 40, 0), 40);
    }
}
