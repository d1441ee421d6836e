//! Project descriptor model.
//!
//! A [`Project`] is the aggregate root handed from the loader through the
//! transformation pipeline to the serializer. It holds state only; all
//! behavior lives in the transform crate.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A single key/value entry inside a property group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Element name (e.g., "AssemblyName", "OutputType").
    pub name: String,
    /// Raw text content, untrimmed.
    pub value: String,
    /// `Condition` attribute, stored verbatim. `None` when the attribute is absent.
    pub condition: Option<String>,
}

impl Property {
    /// Create an unconditional property.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            condition: None,
        }
    }

    /// Attach a condition guard.
    #[must_use]
    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }
}

/// An ordered block of properties, optionally guarded at the group level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyGroup {
    /// Group-level `Condition` attribute, stored verbatim.
    pub condition: Option<String>,
    /// Properties in document order.
    pub properties: Vec<Property>,
}

impl PropertyGroup {
    /// Create an empty unconditional group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty group guarded by `condition`.
    pub fn conditional(condition: impl Into<String>) -> Self {
        Self {
            condition: Some(condition.into()),
            properties: Vec::new(),
        }
    }

    /// Append a property, builder style.
    #[must_use]
    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// True when the group carries no `Condition` attribute at all.
    pub fn is_unconditional(&self) -> bool {
        self.condition.is_none()
    }

    /// First property with the given name.
    pub fn get(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// An item reference (e.g., `<Compile Include="Foo.cs" />`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Item type, i.e. the element name ("Compile", "Reference", ...).
    pub kind: String,
    /// `Include` attribute, if any.
    pub include: Option<String>,
    /// `Condition` attribute, stored verbatim.
    pub condition: Option<String>,
    /// Metadata as (name, value) pairs, from attributes and child elements, in document order.
    pub metadata: Vec<(String, String)>,
}

impl Item {
    pub fn new(kind: impl Into<String>, include: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            include: Some(include.into()),
            condition: None,
            metadata: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_metadata(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.push((name.into(), value.into()));
        self
    }
}

/// An ordered block of items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemGroup {
    pub condition: Option<String>,
    pub items: Vec<Item>,
}

/// An explicit `<Import>` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Import {
    pub project: String,
    pub condition: Option<String>,
}

/// In-memory representation of one project descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Path of the source descriptor, used to derive a fallback name.
    pub file_path: Option<PathBuf>,
    /// Canonical project name; empty until resolved.
    pub project_name: String,
    /// Property groups in document order.
    pub property_groups: Vec<PropertyGroup>,
    /// Item groups in document order.
    pub item_groups: Vec<ItemGroup>,
    /// Explicit imports in document order.
    pub imports: Vec<Import>,
    /// Set once a WPF project-type GUID has been detected.
    pub is_wpf: bool,
}

impl Project {
    /// Create an empty project originating from `file_path`.
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: Some(file_path.into()),
            ..Self::default()
        }
    }

    /// Set the project name, builder style.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = name.into();
        self
    }

    /// Append a property group, builder style.
    #[must_use]
    pub fn with_property_group(mut self, group: PropertyGroup) -> Self {
        self.property_groups.push(group);
        self
    }

    /// Property groups without a group-level condition, in document order.
    pub fn unconditional_groups(&self) -> impl Iterator<Item = &PropertyGroup> {
        self.property_groups
            .iter()
            .filter(|group| group.is_unconditional())
    }

    /// Source path for display, or `<memory>` for projects built in code.
    pub fn display_path(&self) -> String {
        match &self.file_path {
            Some(path) => path.display().to_string(),
            None => "<memory>".to_string(),
        }
    }

    /// Total number of properties across all groups.
    pub fn property_count(&self) -> usize {
        self.property_groups.iter().map(PropertyGroup::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconditional_groups_skip_guarded_groups() {
        let project = Project::default()
            .with_property_group(PropertyGroup::new().with_property(Property::new("A", "1")))
            .with_property_group(
                PropertyGroup::conditional("'$(Configuration)' == 'Debug'")
                    .with_property(Property::new("B", "2")),
            )
            .with_property_group(PropertyGroup::conditional(""));

        let names: Vec<_> = project
            .unconditional_groups()
            .flat_map(|g| g.properties.iter().map(|p| p.name.as_str()))
            .collect();
        assert_eq!(names, vec!["A"]);
        assert_eq!(project.unconditional_groups().count(), 1);
    }

    #[test]
    fn display_path_falls_back_for_memory_projects() {
        assert_eq!(Project::default().display_path(), "<memory>");
        let project = Project::new("src/App.csproj");
        assert!(project.display_path().ends_with("App.csproj"));
    }

    #[test]
    fn property_count_sums_groups() {
        let project = Project::default()
            .with_property_group(
                PropertyGroup::new()
                    .with_property(Property::new("A", "1"))
                    .with_property(Property::new("B", "2")),
            )
            .with_property_group(PropertyGroup::new().with_property(Property::new("C", "3")));
        assert_eq!(project.property_count(), 3);
    }
}
