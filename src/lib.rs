pub use crate::fixture::{FixtureArg, FixtureDeclaration, TypeSelector};
pub use crate::manifest::{
    discover_manifest_files, load_all, load_manifest, ManifestEntry, ManifestError,
};
pub use crate::properties::{PropertyBag, PropertyStore, DESCRIPTION_KEY};
pub use crate::tree::{find, CaseResult, NamedNode, Outcome, SuiteNode};
pub use crate::value::Value;

pub mod fixture;
pub mod manifest;
pub mod properties;
pub mod tree;
pub mod value;
