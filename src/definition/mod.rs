pub mod model;
pub mod loader;

pub use model::{Classification, ClassifierSet, Term};
pub use loader::{
    load_definition, parse_definition, render_definition, save_definition, DefinitionError,
    DefinitionFormat,
};
