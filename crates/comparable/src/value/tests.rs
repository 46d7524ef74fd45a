use super::{ComparableValue, Override, Overrides};
use crate::relation::Relation;

struct Rank(u8);

impl ComparableValue for Rank {
	fn less_than(&self, other: &Self) -> bool {
		self.0 < other.0
	}
}

fn always(_: &Rank, _: &Rank) -> bool {
	true
}

#[test]
fn less_than_only_type_is_fully_derived() {
	assert!(Rank::OVERRIDES.is_derived());
	for relation in Relation::ALL {
		assert!(!Rank::OVERRIDES.get(relation).is_custom());
	}
}

#[test]
fn std_types_use_their_own_operators() {
	for relation in Relation::DERIVABLE {
		assert!(<i32 as ComparableValue>::OVERRIDES.get(relation).is_custom());
		assert!(<str as ComparableValue>::OVERRIDES.get(relation).is_custom());
	}
	assert!(!<u64 as ComparableValue>::OVERRIDES.get(Relation::LessThan).is_custom());
}

#[test]
fn with_binds_only_the_named_relation() {
	let overrides = Overrides::<Rank>::DERIVED.with(Relation::Equals, always);
	assert!(overrides.get(Relation::Equals).is_custom());
	assert!(!overrides.get(Relation::NotEqual).is_custom());
	assert!(!overrides.get(Relation::GreaterThan).is_custom());
	assert!(!overrides.is_derived());
}

#[test]
fn less_than_is_never_overridable() {
	let overrides = Overrides::<Rank>::DERIVED.with(Relation::LessThan, always);
	assert!(overrides.is_derived());
}

#[test]
fn float_equality_keeps_ieee_semantics() {
	let Override::Custom(eq) = <f64 as ComparableValue>::OVERRIDES.get(Relation::Equals) else {
		panic!("f64 equality should be custom");
	};
	assert!(!eq(&f64::NAN, &f64::NAN));
	assert!(eq(&1.5, &1.5));
}

#[test]
fn string_less_than_is_lexicographic() {
	assert!("apple".less_than("banana"));
	assert!(!String::from("b").less_than(&String::from("a")));
}
