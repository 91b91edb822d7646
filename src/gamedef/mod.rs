//! Object class data of a game definition as edited by the game definition
//! editor.

mod billboard;
mod force_field;
mod light;
mod list;
mod navigation_space;
mod object_class;
mod property;

pub use billboard::{Billboard, BillboardProperty};
pub use force_field::{
    ApplicationType, FieldType, ForceField, ForceFieldProperty, ForceFieldTrigger,
};
pub use light::{
    Light, LightMovementHint, LightParameterHint, LightProperty, LightTrigger, LightType,
};
pub use list::{Handle, ObjectList};
pub use navigation_space::{NavigationSpaceDef, NavigationSpaceProperty};
pub use object_class::{ObjectClass, ScaleMode};
pub use property::{PropertyNames, PropertyRole};
