pub mod editor;
mod error;
pub mod gamedef;
pub mod navspace;
pub mod shader;

// Public exports.
pub use error::{DekitError, DekitResult};
pub use navspace::{EditorNavigationSpace, NavigationSpace, SpaceType};
pub use shader::ShaderAst;
