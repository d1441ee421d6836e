//! Simplified descriptor output.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::QName;

use projconv_model::{Item, ItemGroup, Project, Property, PropertyGroup};

use crate::error::{Result, XmlError};

/// SDK used for ordinary projects.
pub const DEFAULT_SDK: &str = "Microsoft.NET.Sdk";
/// SDK used once WPF has been detected.
pub const WINDOWS_DESKTOP_SDK: &str = "Microsoft.NET.Sdk.WindowsDesktop";

/// Serialize `project` as an SDK-style descriptor.
///
/// Groups left empty by the transforms are omitted.
pub fn write_project(project: &Project) -> Result<String> {
    let mut xml = Writer::new_with_indent(Vec::new(), b' ', 2);

    let sdk = if project.is_wpf {
        WINDOWS_DESKTOP_SDK
    } else {
        DEFAULT_SDK
    };
    let mut root = BytesStart::new("Project");
    push_attribute(&mut root, "Sdk", sdk);
    xml.write_event(Event::Start(root))?;

    if project.is_wpf {
        let wpf_group = PropertyGroup::new().with_property(Property::new("UseWPF", "true"));
        write_property_group(&mut xml, &wpf_group)?;
    }
    for group in project.property_groups.iter().filter(|g| !g.is_empty()) {
        write_property_group(&mut xml, group)?;
    }
    for group in project.item_groups.iter().filter(|g| !g.items.is_empty()) {
        write_item_group(&mut xml, group)?;
    }
    for import in &project.imports {
        let mut element = BytesStart::new("Import");
        push_attribute(&mut element, "Project", &import.project);
        push_optional_attribute(&mut element, "Condition", import.condition.as_deref());
        xml.write_event(Event::Empty(element))?;
    }

    xml.write_event(Event::End(BytesEnd::new("Project")))?;
    Ok(String::from_utf8(xml.into_inner())?)
}

/// Serialize `project` and write it to `path`.
pub fn save_project(project: &Project, path: &Path) -> Result<()> {
    let mut contents = write_project(project)?;
    contents.push('\n');
    fs::write(path, contents).map_err(|source| XmlError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn write_property_group(xml: &mut Writer<Vec<u8>>, group: &PropertyGroup) -> Result<()> {
    let mut start = BytesStart::new("PropertyGroup");
    push_optional_attribute(&mut start, "Condition", group.condition.as_deref());
    xml.write_event(Event::Start(start))?;
    for property in &group.properties {
        let mut element = BytesStart::new(property.name.as_str());
        push_optional_attribute(&mut element, "Condition", property.condition.as_deref());
        write_text_element(xml, element, &property.value)?;
    }
    xml.write_event(Event::End(BytesEnd::new("PropertyGroup")))?;
    Ok(())
}

fn write_item_group(xml: &mut Writer<Vec<u8>>, group: &ItemGroup) -> Result<()> {
    let mut start = BytesStart::new("ItemGroup");
    push_optional_attribute(&mut start, "Condition", group.condition.as_deref());
    xml.write_event(Event::Start(start))?;
    for item in &group.items {
        write_item(xml, item)?;
    }
    xml.write_event(Event::End(BytesEnd::new("ItemGroup")))?;
    Ok(())
}

/// Metadata is written as child elements.
fn write_item(xml: &mut Writer<Vec<u8>>, item: &Item) -> Result<()> {
    let mut element = BytesStart::new(item.kind.as_str());
    push_optional_attribute(&mut element, "Include", item.include.as_deref());
    push_optional_attribute(&mut element, "Condition", item.condition.as_deref());
    if item.metadata.is_empty() {
        xml.write_event(Event::Empty(element))?;
        return Ok(());
    }
    xml.write_event(Event::Start(element))?;
    for (name, value) in &item.metadata {
        write_text_element(xml, BytesStart::new(name.as_str()), value)?;
    }
    xml.write_event(Event::End(BytesEnd::new(item.kind.as_str())))?;
    Ok(())
}

fn write_text_element(xml: &mut Writer<Vec<u8>>, start: BytesStart<'_>, text: &str) -> Result<()> {
    if text.is_empty() {
        xml.write_event(Event::Empty(start))?;
        return Ok(());
    }
    let end = start.to_end().into_owned();
    xml.write_event(Event::Start(start))?;
    xml.write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))?;
    xml.write_event(Event::End(end))?;
    Ok(())
}

/// Attribute values keep apostrophes literal, as condition expressions use them heavily.
fn push_attribute(element: &mut BytesStart<'_>, name: &str, value: &str) {
    let escaped = partial_escape(value).replace('"', "&quot;");
    element.push_attribute(Attribute {
        key: QName(name.as_bytes()),
        value: Cow::Owned(escaped.into_bytes()),
    });
}

fn push_optional_attribute(element: &mut BytesStart<'_>, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        push_attribute(element, name, value);
    }
}
