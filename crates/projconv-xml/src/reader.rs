//! Descriptor loading.
//!
//! Builds a [`Project`] from a legacy descriptor. Property groups, item
//! groups and imports directly under `<Project>` are modelled; every other
//! element is skipped. Document order and condition strings are preserved
//! verbatim.

use std::fs;
use std::path::{Path, PathBuf};

use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesRef, BytesStart, Event};
use tracing::debug;

use projconv_model::{Import, Item, ItemGroup, Project, Property, PropertyGroup};

use crate::error::{Result, XmlError};

type SliceReader<'a> = Reader<&'a [u8]>;

/// Read and parse the descriptor at `path`.
pub fn load_project(path: &Path) -> Result<Project> {
    let xml = fs::read_to_string(path).map_err(|source| XmlError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_project(&xml, Some(path.to_path_buf()))
}

/// Parse a descriptor held in memory.
///
/// `file_path` is recorded on the project as-is; the project name is left
/// empty for the transforms to resolve.
pub fn parse_project(xml: &str, file_path: Option<PathBuf>) -> Result<Project> {
    let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);
    let mut reader = Reader::from_str(xml);
    let mut project = Project {
        file_path,
        ..Project::default()
    };

    loop {
        match reader.read_event()? {
            Event::Start(root) => {
                expect_project_root(&root)?;
                read_project_body(&mut reader, &mut project)?;
                return Ok(project);
            }
            Event::Empty(root) => {
                expect_project_root(&root)?;
                return Ok(project);
            }
            Event::Eof => return Err(XmlError::MissingRoot),
            _ => {}
        }
    }
}

fn expect_project_root(root: &BytesStart<'_>) -> Result<()> {
    let found = local_name(root);
    if found == "Project" {
        Ok(())
    } else {
        Err(XmlError::UnexpectedRoot { found })
    }
}

fn read_project_body(reader: &mut SliceReader<'_>, project: &mut Project) -> Result<()> {
    loop {
        match reader.read_event()? {
            Event::Start(element) => match local_name(&element).as_str() {
                "PropertyGroup" => {
                    let group = read_property_group(reader, attribute(&element, "Condition")?)?;
                    project.property_groups.push(group);
                }
                "ItemGroup" => {
                    let group = read_item_group(reader, attribute(&element, "Condition")?)?;
                    project.item_groups.push(group);
                }
                "Import" => {
                    project.imports.extend(read_import(&element)?);
                    reader.read_to_end(element.name())?;
                }
                other => {
                    debug!(element = other, "skipping unsupported element");
                    reader.read_to_end(element.name())?;
                }
            },
            Event::Empty(element) => match local_name(&element).as_str() {
                "PropertyGroup" => project.property_groups.push(PropertyGroup {
                    condition: attribute(&element, "Condition")?,
                    properties: Vec::new(),
                }),
                "ItemGroup" => project.item_groups.push(ItemGroup {
                    condition: attribute(&element, "Condition")?,
                    items: Vec::new(),
                }),
                "Import" => project.imports.extend(read_import(&element)?),
                other => debug!(element = other, "skipping unsupported element"),
            },
            Event::End(_) => return Ok(()),
            Event::Eof => return Err(unexpected_eof("Project")),
            _ => {}
        }
    }
}

fn read_property_group(
    reader: &mut SliceReader<'_>,
    condition: Option<String>,
) -> Result<PropertyGroup> {
    let mut group = PropertyGroup {
        condition,
        properties: Vec::new(),
    };
    loop {
        match reader.read_event()? {
            Event::Start(element) => {
                let name = local_name(&element);
                let condition = attribute(&element, "Condition")?;
                let value = read_text(reader, &name)?;
                group.properties.push(Property {
                    name,
                    value,
                    condition,
                });
            }
            Event::Empty(element) => group.properties.push(Property {
                name: local_name(&element),
                value: String::new(),
                condition: attribute(&element, "Condition")?,
            }),
            Event::End(_) => return Ok(group),
            Event::Eof => return Err(unexpected_eof("PropertyGroup")),
            _ => {}
        }
    }
}

fn read_item_group(reader: &mut SliceReader<'_>, condition: Option<String>) -> Result<ItemGroup> {
    let mut group = ItemGroup {
        condition,
        items: Vec::new(),
    };
    loop {
        match reader.read_event()? {
            Event::Start(element) => {
                let mut item = item_from_attributes(&element)?;
                read_item_metadata(reader, &mut item)?;
                group.items.push(item);
            }
            Event::Empty(element) => group.items.push(item_from_attributes(&element)?),
            Event::End(_) => return Ok(group),
            Event::Eof => return Err(unexpected_eof("ItemGroup")),
            _ => {}
        }
    }
}

/// Item type, `Include` and `Condition`; remaining attributes become metadata.
fn item_from_attributes(element: &BytesStart<'_>) -> Result<Item> {
    let mut item = Item {
        kind: local_name(element),
        include: None,
        condition: None,
        metadata: Vec::new(),
    };
    for (name, value) in attributes(element)? {
        match name.as_str() {
            "Include" => item.include = Some(value),
            "Condition" => item.condition = Some(value),
            _ => item.metadata.push((name, value)),
        }
    }
    Ok(item)
}

fn read_item_metadata(reader: &mut SliceReader<'_>, item: &mut Item) -> Result<()> {
    loop {
        match reader.read_event()? {
            Event::Start(element) => {
                let name = local_name(&element);
                let value = read_text(reader, &name)?;
                item.metadata.push((name, value));
            }
            Event::Empty(element) => item.metadata.push((local_name(&element), String::new())),
            Event::End(_) => return Ok(()),
            Event::Eof => return Err(unexpected_eof(&item.kind)),
            _ => {}
        }
    }
}

fn read_import(element: &BytesStart<'_>) -> Result<Option<Import>> {
    let Some(project) = attribute(element, "Project")? else {
        debug!("skipping <Import> without Project attribute");
        return Ok(None);
    };
    Ok(Some(Import {
        project,
        condition: attribute(element, "Condition")?,
    }))
}

/// Collect the text content of the current element up to its end tag.
///
/// Text inside nested child elements is ignored.
fn read_text(reader: &mut SliceReader<'_>, element: &str) -> Result<String> {
    let mut text = String::new();
    let mut depth = 0usize;
    loop {
        match reader.read_event()? {
            Event::Text(content) if depth == 0 => {
                text.push_str(&String::from_utf8_lossy(&content));
            }
            Event::CData(content) if depth == 0 => {
                text.push_str(&String::from_utf8_lossy(&content));
            }
            Event::GeneralRef(reference) if depth == 0 => {
                text.push_str(&resolve_reference(&reference)?);
            }
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                if depth == 0 {
                    return Ok(text);
                }
                depth -= 1;
            }
            Event::Eof => return Err(unexpected_eof(element)),
            _ => {}
        }
    }
}

/// Resolve `&name;` for the predefined XML entities and character references.
fn resolve_reference(reference: &BytesRef<'_>) -> Result<String> {
    let name = String::from_utf8_lossy(reference);
    let resolved = match name.strip_prefix('#') {
        Some(code) => parse_char_reference(code).map(String::from),
        None => resolve_predefined_entity(&name).map(str::to_string),
    };
    resolved.ok_or_else(|| XmlError::UnknownReference {
        name: name.into_owned(),
    })
}

fn parse_char_reference(code: &str) -> Option<char> {
    let value = match code.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => code.parse().ok()?,
    };
    char::from_u32(value)
}

fn local_name(element: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(element.local_name().as_ref()).into_owned()
}

fn attributes(element: &BytesStart<'_>) -> Result<Vec<(String, String)>> {
    element
        .attributes()
        .map(|attr| -> Result<(String, String)> {
            let attr = attr.map_err(quick_xml::Error::from)?;
            let name = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(quick_xml::Error::from)?
                .into_owned();
            Ok((name, value))
        })
        .collect()
}

fn attribute(element: &BytesStart<'_>, name: &str) -> Result<Option<String>> {
    Ok(attributes(element)?
        .into_iter()
        .find_map(|(key, value)| (key == name).then_some(value)))
}

fn unexpected_eof(element: &str) -> XmlError {
    XmlError::UnexpectedEof {
        element: element.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_references() {
        assert_eq!(parse_char_reference("x41"), Some('A'));
        assert_eq!(parse_char_reference("65"), Some('A'));
        assert_eq!(parse_char_reference("xZZ"), None);
    }

    #[test]
    fn rejects_foreign_root() {
        let err = parse_project("<Solution />", None).unwrap_err();
        assert!(matches!(err, XmlError::UnexpectedRoot { ref found } if found == "Solution"));
    }

    #[test]
    fn rejects_empty_document() {
        let err = parse_project("<?xml version=\"1.0\"?>", None).unwrap_err();
        assert!(matches!(err, XmlError::MissingRoot));
    }
}
