//! Behavioural tests for standardization through the public API.
#![expect(clippy::expect_used, reason = "tests fail loudly on unexpected errors")]

use acctag::{
    Alias, GrammarError, MAX_NESTING, Modifier, PriorityClass, Symbol, Tag, contains_class,
    identity_rules, is_canonical, standardize, standardize_traced,
};
use rstest::rstest;

fn canonical(tag: &Tag) -> Tag {
    standardize(tag)
        .expect("tag should standardize")
        .into_inner()
}

#[rstest]
#[case(Alias::Mean.into(), Tag::divide_by_count(Alias::Sum))]
#[case(
    Alias::Variance.into(),
    Tag::divide_by_count(Tag::central(Symbol::PowerSum(2)))
)]
#[case(Alias::StdDev.into(), Tag::root_divide_by_count(Alias::SumOfSquaredDifferences))]
#[case(Alias::GeometricCenter.into(), Tag::coord(Alias::Mean))]
#[case(Alias::CenterOfMass.into(), Tag::coord_weighted(Alias::Mean))]
#[case(
    Alias::MomentsOfInertia.into(),
    Tag::coord_weighted(Tag::principal(Alias::Variance))
)]
#[case(Alias::Moment(2).into(), Tag::divide_by_count(Alias::SumOfSquares))]
#[case(Alias::AbsSum.into(), Symbol::AbsPowerSum(1).into())]
fn aliases_match_their_definitions(#[case] alias: Tag, #[case] definition: Tag) {
    assert_eq!(canonical(&alias), canonical(&definition));
}

#[test]
fn independent_classes_commute() {
    let left = Tag::central(Tag::coord(Alias::Mean));
    let right = Tag::coord(Tag::central(Alias::Mean));
    assert_eq!(canonical(&left), canonical(&right));
}

#[test]
fn double_normalization_is_a_conflict() {
    let tag = Tag::divide_by_count(Tag::divide_unbiased(Alias::Sum));
    let err = standardize(&tag).expect_err("two normalizations cannot be combined");
    let GrammarError::IncompatibleModifierCombination(offending) = &err;
    assert_eq!(offending.outer_modifier(), Some(Modifier::DivideByCount));
    assert!(err.to_string().contains("incompatible modifier combination"));
}

#[rstest]
#[case(Tag::central(Tag::principal(Alias::Sum)))]
#[case(Tag::principal(Tag::whitened(Symbol::Skewness)))]
#[case(Tag::coord(Tag::data_from_handle(Alias::Sum)))]
#[case(Tag::root_divide_by_count(Alias::Variance))]
#[case(Tag::coord(Alias::CenterOfMass))]
fn rejects_same_class_combinations(#[case] tag: Tag) {
    assert!(standardize(&tag).is_err(), "{tag} should be rejected");
}

#[rstest]
#[case("Coord<CoordWeighted<Sum>>")]
#[case("Weighted<Coord<DataFromHandle<Sum>>>")]
#[case("DivideByCount<Weighted<Coord<CoordWeighted<Sum>>>>")]
#[case("Weighted<DivideByCount<Coord<CoordWeighted<Sum>>>>")]
#[case("DivideByCount<Weighted<Coord<CoordSystemOfInertia>>>")]
#[case("Weighted<DivideByCount<Coord<CoordSystemOfInertia>>>")]
fn conflicts_below_a_coord_weighted_merge_are_reported(#[case] text: &str) {
    let tag: Tag = text.parse().expect("tag text should parse");
    assert!(standardize(&tag).is_err(), "{text} should be rejected");
}

#[test]
fn conflict_names_the_nesting_that_was_written() {
    let tag: Tag = "Weighted<Coord<DataFromHandle<Sum>>>"
        .parse()
        .expect("tag text should parse");
    let err = standardize(&tag).expect_err("Coord over DataFromHandle cannot be combined");
    assert_eq!(err.tag().to_string(), "Coord<DataFromHandle<PowerSum<1>>>");
}

#[rstest]
#[case(Modifier::DivideByCount, Modifier::Weighted, Tag::coord(Alias::Sum))]
#[case(Modifier::Central, Modifier::Weighted, Tag::coord(Alias::Count))]
#[case(Modifier::Coord, Modifier::DivideByCount, Tag::weighted(Alias::Mean))]
#[case(Modifier::Central, Modifier::DivideByCount, Symbol::CoordinateSystem.into())]
fn distinct_classes_commute_around_merges(
    #[case] a: Modifier,
    #[case] b: Modifier,
    #[case] tag: Tag,
) {
    let ab = standardize(&tag.clone().wrap(b).wrap(a));
    let ba = standardize(&tag.wrap(a).wrap(b));
    assert_eq!(ab, ba);
}

#[test]
fn deep_constructor_chains_standardize() {
    let tag = (0..MAX_NESTING).fold(Tag::from(Alias::Sum), |inner, _| Tag::coord(inner));
    assert_eq!(canonical(&tag), Tag::coord(Symbol::SUM));
}

#[test]
fn coord_and_weighted_combine() {
    let tag = Tag::coord(Tag::weighted(Alias::Mean));
    assert_eq!(canonical(&tag), canonical(&Tag::coord_weighted(Alias::Mean)));
}

#[rstest]
#[case(Tag::central(Symbol::CoordinateSystem), Symbol::CoordinateSystem.into())]
#[case(Tag::whitened(Symbol::CoordinateSystem), Tag::principal(Symbol::CoordinateSystem))]
#[case(Alias::PrincipalCoordSystem.into(), Tag::coord(Tag::principal(Symbol::CoordinateSystem)))]
#[case(
    Tag::coord_weighted(Tag::whitened(Symbol::CoordinateSystem)),
    Alias::CoordSystemOfInertia.into()
)]
fn coordinate_system_identities(#[case] tag: Tag, #[case] expected: Tag) {
    assert_eq!(canonical(&tag), canonical(&expected));
}

#[rstest]
#[case(Tag::coord(Alias::Count), Symbol::COUNT.into())]
#[case(Tag::principal(Tag::divide_by_count(Alias::Count)), Symbol::COUNT.into())]
#[case(Tag::weighted(Alias::Count), Tag::weighted(Symbol::COUNT))]
#[case(Tag::coord_weighted(Alias::Count), Tag::weighted(Symbol::COUNT))]
fn count_ignores_everything_but_weighting(#[case] tag: Tag, #[case] expected: Tag) {
    assert_eq!(canonical(&tag), expected);
}

#[rstest]
#[case(Tag::central(Symbol::Skewness), Symbol::Skewness.into())]
#[case(Tag::central(Alias::Covariance), Tag::divide_by_count(Symbol::FlatScatterMatrix))]
#[case(Tag::principal(Symbol::Centralize), Symbol::PrincipalProjection.into())]
#[case(Tag::whitened(Tag::principal(Symbol::Centralize)), Symbol::Whiten.into())]
#[case(Symbol::AbsPowerSum(2).into(), Symbol::PowerSum(2).into())]
#[case(Tag::central(Alias::AbsSum), Tag::central(Symbol::AbsPowerSum(1)))]
#[case(Tag::whitened(Tag::central(Alias::SumOfSquares)), Tag::whitened(Symbol::PowerSum(2)))]
fn statistic_specific_identities(#[case] tag: Tag, #[case] expected: Tag) {
    assert_eq!(canonical(&tag), expected);
}

#[test]
fn results_are_idempotent_and_canonical() {
    let tag = Tag::whitened(Tag::coord(Tag::central(Alias::StdDev)));
    let once = canonical(&tag);
    assert!(is_canonical(&once));
    assert_eq!(canonical(&once), once);
}

#[test]
fn traced_standardization_counts_rewrites() {
    let traced = standardize_traced(&Tag::central(Tag::coord(Alias::Mean)))
        .expect("tag should standardize");
    assert!(traced.rewrites() > 0);
    let again = standardize_traced(traced.tag()).expect("canonical tag should standardize");
    assert_eq!(again.rewrites(), 0);
}

#[test]
fn class_membership_looks_through_aliases() {
    let tag: Tag = Alias::PrincipalRadii.into();
    assert!(contains_class(&tag, PriorityClass::AccessData));
    assert!(contains_class(&tag, PriorityClass::Normalize));
    assert!(contains_class(&tag, PriorityClass::PrepareData));
    assert!(contains_class(&tag, PriorityClass::Accumulator));
    assert!(!contains_class(&Alias::Sum.into(), PriorityClass::Normalize));
}

#[test]
fn rule_table_lists_every_identity() {
    let names: Vec<_> = identity_rules().iter().map(|rule| rule.name()).collect();
    assert_eq!(
        names,
        vec![
            "alias-expansion",
            "central-coordinate-system",
            "whitened-coordinate-system",
            "count-invariance",
            "centered-statistic",
            "projection-cache",
            "coord-weighted",
            "even-absolute-power",
        ]
    );
}
