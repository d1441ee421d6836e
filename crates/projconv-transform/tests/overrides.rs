//! Property tests for global-override resolution.

use proptest::prelude::*;

use projconv_model::{Property, PropertyGroup};
use projconv_transform::resolve_global_overrides;

fn arb_property() -> impl Strategy<Value = Property> {
    (
        prop::sample::select(vec!["X", "Y", "AssemblyName", "ProjectName"]),
        "[ a-z]{0,6}",
        prop::option::of(prop::sample::select(vec!["", " ", "'", "==", "'$(A)' == 'b'"])),
    )
        .prop_map(|(name, value, condition)| Property {
            name: name.to_string(),
            value,
            condition: condition.map(str::to_string),
        })
}

fn arb_groups() -> impl Strategy<Value = Vec<PropertyGroup>> {
    prop::collection::vec(
        prop::collection::vec(arb_property(), 0..6).prop_map(|properties| PropertyGroup {
            condition: None,
            properties,
        }),
        0..4,
    )
}

proptest! {
    #[test]
    fn resolution_is_pure(groups in arb_groups()) {
        let snapshot = groups.clone();
        let first = resolve_global_overrides(&groups);
        let second = resolve_global_overrides(&groups);
        prop_assert_eq!(first, second);
        prop_assert_eq!(groups, snapshot);
    }

    #[test]
    fn last_unconditional_entry_wins(groups in arb_groups(), name in "[A-Z][a-z]{2,5}Tail") {
        let mut groups = groups;
        groups.push(PropertyGroup::new()
            .with_property(Property::new(name.clone(), "a"))
            .with_property(Property::new(name.clone(), " b ")));
        let overrides = resolve_global_overrides(&groups);
        prop_assert_eq!(overrides.get(&name).map(String::as_str), Some("b"));
    }

    #[test]
    fn real_conditions_never_contribute(value in "[a-z]{1,6}") {
        let group = PropertyGroup::new()
            .with_property(Property::new("Z", value).with_condition("=="));
        let overrides = resolve_global_overrides([&group]);
        prop_assert!(overrides.is_empty());
    }
}

#[test]
fn single_quote_condition_is_global_and_double_equals_is_not() {
    let group = PropertyGroup::new()
        .with_property(Property::new("Quote", "q").with_condition("'"))
        .with_property(Property::new("Equals", "e").with_condition("=="));

    let overrides = resolve_global_overrides([&group]);

    assert_eq!(overrides.get("Quote").map(String::as_str), Some("q"));
    assert!(!overrides.contains_key("Equals"));
}
