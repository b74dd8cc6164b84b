use eisenplan::matrix::{classify, Quadrant, QuadrantCounts, ALL_QUADRANTS};

#[test]
fn urgent_and_important_is_do() {
    assert_eq!(classify(true, true), Quadrant::Do);
}

#[test]
fn important_only_is_schedule() {
    assert_eq!(classify(false, true), Quadrant::Schedule);
}

#[test]
fn urgent_only_is_delegate() {
    assert_eq!(classify(true, false), Quadrant::Delegate);
}

#[test]
fn neither_flag_is_eliminate() {
    assert_eq!(classify(false, false), Quadrant::Eliminate);
}

#[test]
fn classification_is_total_over_both_flags() {
    // Every flag pair lands in exactly one of the four labels.
    for urgent in [false, true] {
        for important in [false, true] {
            let quadrant = classify(urgent, important);
            assert!(ALL_QUADRANTS.contains(&quadrant));
        }
    }
}

#[test]
fn empty_tally_is_all_zero() {
    let counts = QuadrantCounts::tally(std::iter::empty());
    for quadrant in ALL_QUADRANTS {
        assert_eq!(counts.get(quadrant), 0);
    }
    assert_eq!(counts.total(), 0);
}

#[test]
fn display_matches_label() {
    for quadrant in ALL_QUADRANTS {
        assert_eq!(quadrant.to_string(), quadrant.label());
    }
}
