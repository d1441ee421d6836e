//! Tests for descriptor loading.

use std::path::{Path, PathBuf};

use projconv_xml::{XmlError, load_project, parse_project};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn loads_groups_in_document_order() {
    let path = fixture("LegacyWpf.csproj");
    let project = load_project(&path).unwrap();

    assert_eq!(project.file_path.as_deref(), Some(path.as_path()));
    assert!(project.project_name.is_empty());
    assert!(!project.is_wpf);
    assert_eq!(project.property_groups.len(), 2);
    assert!(project.property_groups[0].is_unconditional());
    assert_eq!(
        project.property_groups[1].condition.as_deref(),
        Some(" '$(Configuration)|$(Platform)' == 'Debug|AnyCPU' ")
    );

    let names: Vec<_> = project.property_groups[0]
        .properties
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "Configuration",
            "Platform",
            "ProjectGuid",
            "OutputType",
            "RootNamespace",
            "AssemblyName",
            "TargetFrameworkVersion",
            "ProjectTypeGuids",
            "Description",
            "SccProjectName",
            "SccLocalPath",
            "SccAuxPath",
            "SccProvider",
        ]
    );
}

#[test]
fn keeps_property_conditions_verbatim() {
    let project = load_project(&fixture("LegacyWpf.csproj")).unwrap();
    let configuration = project.property_groups[0].get("Configuration").unwrap();
    assert_eq!(configuration.value, "Debug");
    assert_eq!(
        configuration.condition.as_deref(),
        Some(" '$(Configuration)' == '' ")
    );
    assert!(project.property_groups[0]
        .get("AssemblyName")
        .unwrap()
        .condition
        .is_none());
}

#[test]
fn resolves_entity_and_character_references() {
    let project = load_project(&fixture("LegacyWpf.csproj")).unwrap();
    let description = project.property_groups[0].get("Description").unwrap();
    assert_eq!(description.value, "Tools & utilities A");
}

#[test]
fn loads_items_and_imports() {
    let project = load_project(&fixture("LegacyWpf.csproj")).unwrap();

    assert_eq!(project.item_groups.len(), 2);
    let items = &project.item_groups[0].items;
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].kind, "Reference");
    assert_eq!(items[0].include.as_deref(), Some("System"));
    assert_eq!(items[2].kind, "Compile");
    assert_eq!(
        items[2].metadata,
        vec![
            ("DependentUpon".to_string(), "App.xaml".to_string()),
            ("SubType".to_string(), "Code".to_string()),
        ]
    );

    let none = &project.item_groups[1].items[0];
    assert_eq!(
        none.metadata,
        vec![(
            "CopyToOutputDirectory".to_string(),
            "PreserveNewest".to_string()
        )]
    );
    assert!(project.item_groups[1].condition.is_some());

    assert_eq!(project.imports.len(), 2);
    assert_eq!(
        project.imports[1].project,
        "$(MSBuildToolsPath)\\Microsoft.CSharp.targets"
    );
    assert!(project.imports[0].condition.as_deref().unwrap().starts_with("Exists("));
}

#[test]
fn empty_elements_become_empty_values() {
    let xml = r#"<Project><PropertyGroup><NoWarn /><Empty Condition="'$(A)' == ''"/></PropertyGroup><PropertyGroup Condition="x" /></Project>"#;
    let project = parse_project(xml, None).unwrap();

    assert_eq!(project.property_groups.len(), 2);
    let group = &project.property_groups[0];
    assert_eq!(group.properties[0].name, "NoWarn");
    assert_eq!(group.properties[0].value, "");
    assert_eq!(group.properties[1].condition.as_deref(), Some("'$(A)' == ''"));
    assert!(project.property_groups[1].is_empty());
    assert!(!project.property_groups[1].is_unconditional());
}

#[test]
fn empty_condition_attribute_is_kept() {
    let xml = r#"<Project><PropertyGroup Condition=""><A>1</A></PropertyGroup></Project>"#;
    let project = parse_project(xml, None).unwrap();
    assert_eq!(project.property_groups[0].condition.as_deref(), Some(""));
    assert!(!project.property_groups[0].is_unconditional());
}

#[test]
fn nested_elements_inside_property_are_skipped() {
    let xml = "<Project><PropertyGroup><Odd>a<Inner>b</Inner>c</Odd></PropertyGroup></Project>";
    let project = parse_project(xml, None).unwrap();
    assert_eq!(project.property_groups[0].properties[0].value, "ac");
}

#[test]
fn byte_order_mark_is_ignored() {
    let xml = "\u{feff}<Project><PropertyGroup><A>1</A></PropertyGroup></Project>";
    let project = parse_project(xml, None).unwrap();
    assert_eq!(project.property_groups[0].properties[0].value, "1");
}

#[test]
fn truncated_document_is_an_error() {
    let xml = "<Project><PropertyGroup><A>1</A>";
    assert!(parse_project(xml, None).is_err());
}

#[test]
fn missing_file_reports_path() {
    let err = load_project(Path::new("does/not/exist.csproj")).unwrap_err();
    assert!(matches!(err, XmlError::Read { .. }));
    assert!(err.to_string().contains("exist.csproj"));
}
