//! Names and identifiers with fixed meaning in legacy project descriptors.

/// Property listing the project-type GUIDs, separated by `;`.
pub const PROJECT_TYPE_GUIDS: &str = "ProjectTypeGuids";

pub const PROJECT_NAME: &str = "ProjectName";
pub const ASSEMBLY_NAME: &str = "AssemblyName";

/// Legacy source-control binding properties, kept verbatim during simplification.
pub const SOURCE_CONTROL_PROPERTIES: [&str; 4] =
    ["SccProjectName", "SccLocalPath", "SccAuxPath", "SccProvider"];

/// Returns true for the legacy source-control binding properties.
pub fn is_source_control_property(name: &str) -> bool {
    SOURCE_CONTROL_PROPERTIES.contains(&name)
}

/// File extensions of project descriptors handled by the converter.
pub const PROJECT_FILE_EXTENSIONS: [&str; 3] = ["csproj", "vbproj", "fsproj"];
