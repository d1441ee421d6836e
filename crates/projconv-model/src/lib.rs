pub mod options;
pub mod project;
pub mod well_known;

pub use options::{ConversionOptions, WriteMode};
pub use project::{Import, Item, ItemGroup, Project, Property, PropertyGroup};
