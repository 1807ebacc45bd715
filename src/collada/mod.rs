//! COLLADA 1.3.1 element factory.
//!
//! Builds typed elements on top of the generic [`crate::document`] model.

mod factory;
pub mod vocab;

pub use factory::ImageDesc;
pub use vocab::{
    CodeSemantic, Flow, InputSemantic, LibraryType, LightType, NodeType, ParamName, Profile,
    ProgramId,
};

/// Schema version written on the root element.
pub const COLLADA_VERSION: &str = "1.3.1";

/// Schema namespace written on the root element.
pub const COLLADA_XMLNS: &str = "http://www.collada.org/2005/COLLADASchema";

/// Prefix of a reference to an id in the same document.
pub const LOCAL_REF_SIGIL: char = '#';

/// Suffix turning a data block name into its library id.
pub const LIB_SUFFIX: &str = "-Lib";

/// Library id of a data block: `"Cube"` becomes `"Cube-Lib"`.
pub fn lib_id(name: &str) -> String {
    format!("{}{}", name, LIB_SUFFIX)
}

/// Reference to an id in the same document: `"Cube-Lib"` becomes `"#Cube-Lib"`.
pub fn local_ref(id: &str) -> String {
    format!("{}{}", LOCAL_REF_SIGIL, id)
}
