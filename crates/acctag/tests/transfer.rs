//! Transfer of modifiers between tags written in tag syntax.
#![expect(clippy::expect_used, reason = "tests fail loudly on unexpected errors")]

use acctag::{Tag, TagSequence, standardize, transfer, transfer_all};
use rstest::rstest;

fn tag(text: &str) -> Tag {
    text.parse().expect("tag text should parse")
}

#[rstest]
#[case("Coord<Mean>", "Variance", "Coord<Variance>")]
#[case("CoordWeighted<Sum>", "Mean", "CenterOfMass")]
#[case("Coord<Principal<Sum>>", "StdDev", "PrincipalRadii")]
#[case("Principal<Sum>", "Covariance", "Covariance")]
#[case("Whitened<Kurtosis>", "Central<CovarianceEigensystem>", "CovarianceEigensystem")]
#[case("DataFromHandle<Central<Sum>>", "Count", "Count")]
#[case("Weighted<Sum>", "Count", "Weighted<Count>")]
fn transfers_match_hand_written_results(
    #[case] source: &str,
    #[case] target: &str,
    #[case] expected: &str,
) {
    let moved = transfer(&tag(source), &tag(target)).expect("transfer should succeed");
    let expected = standardize(&tag(expected)).expect("expected tag should standardize");
    assert_eq!(moved, expected);
}

#[test]
fn conflicting_source_fails_the_whole_sequence() {
    let targets: TagSequence = ["Mean", "Variance"].into_iter().map(tag).collect();
    assert!(transfer_all(&tag("Central<Principal<Sum>>"), &targets).is_err());
}

#[test]
fn sequence_results_keep_target_order() {
    let targets: TagSequence = ["Sum", "Mean", "Variance"].into_iter().map(tag).collect();
    let moved = transfer_all(&tag("Coord<Sum>"), &targets).expect("transfer should succeed");
    assert_eq!(
        moved.to_string(),
        "Coord<PowerSum<1>>, Coord<DivideByCount<PowerSum<1>>>, Coord<DivideByCount<Central<PowerSum<2>>>>"
    );
}
