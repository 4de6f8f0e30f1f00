use super::*;

#[test]
fn milestones_are_in_ascending_year_order() {
    assert!(MILESTONES.windows(2).all(|w| w[0].year < w[1].year));
}

#[test]
fn sides_alternate_starting_right() {
    assert_eq!(MILESTONES[0].side, Side::Right);
    assert!(MILESTONES.windows(2).all(|w| w[0].side != w[1].side));
}

#[test]
fn journey_spans_2016_to_2023() {
    assert_eq!(MILESTONES.len(), 7);
    assert_eq!(MILESTONES.first().map(|m| m.year), Some(2016));
    assert_eq!(MILESTONES.last().map(|m| m.year), Some(2023));
}

#[test]
fn side_classes_differ() {
    assert_ne!(Side::Left.class(), Side::Right.class());
}
