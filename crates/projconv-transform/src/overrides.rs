//! Global-override resolution.
//!
//! A "global override" is the effective value of a property as declared by
//! its unconditional entries. Conditioned entries never contribute.

use std::collections::BTreeMap;

use projconv_model::{Property, PropertyGroup};

/// Property name to trimmed effective value.
pub type GlobalOverrides = BTreeMap<String, String>;

/// Collect unconditional property values from `groups`.
///
/// The caller selects the groups (normally those without a group-level
/// condition). Within them, every entry with an empty condition is recorded
/// under its name with its trimmed value; later entries overwrite earlier
/// ones. The input is never modified.
pub fn resolve_global_overrides<'a, I>(groups: I) -> GlobalOverrides
where
    I: IntoIterator<Item = &'a PropertyGroup>,
{
    let mut overrides = GlobalOverrides::new();
    for group in groups {
        for property in group.properties.iter().filter(|p| has_empty_condition(p)) {
            overrides.insert(property.name.clone(), property.value.trim().to_string());
        }
    }
    overrides
}

/// True when the property has no condition, or one too short to mean anything.
///
/// No usable condition expression fits in a single character, so conditions
/// of length 0 or 1 after trimming count as absent.
pub fn has_empty_condition(property: &Property) -> bool {
    match &property.condition {
        None => true,
        Some(condition) => condition.trim().chars().count() <= 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_condition_is_empty() {
        assert!(has_empty_condition(&Property::new("A", "1")));
    }

    #[test]
    fn whitespace_condition_is_empty() {
        assert!(has_empty_condition(
            &Property::new("A", "1").with_condition("   ")
        ));
        assert!(has_empty_condition(
            &Property::new("A", "1").with_condition(" ' ")
        ));
    }

    #[test]
    fn two_character_condition_is_real() {
        assert!(!has_empty_condition(
            &Property::new("A", "1").with_condition("==")
        ));
    }

    #[test]
    fn values_are_trimmed() {
        let group = PropertyGroup::new().with_property(Property::new("AssemblyName", "  Foo \n"));
        let overrides = resolve_global_overrides([&group]);
        assert_eq!(overrides.get("AssemblyName").map(String::as_str), Some("Foo"));
    }

    #[test]
    fn last_write_wins_across_groups() {
        let first = PropertyGroup::new().with_property(Property::new("X", "a"));
        let second = PropertyGroup::new()
            .with_property(Property::new("X", "b"))
            .with_property(Property::new("X", "c").with_condition("'$(Y)' == 'z'"));
        let overrides = resolve_global_overrides([&first, &second]);
        assert_eq!(overrides.get("X").map(String::as_str), Some("b"));
        assert_eq!(overrides.len(), 1);
    }
}
