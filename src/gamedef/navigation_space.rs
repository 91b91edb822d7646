use glam::Vec3;

use crate::gamedef::property::{PropertyNames, PropertyRole};
use crate::navspace::SpaceType;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NavigationSpaceProperty {
    Path,
    BlockerShape,
    Layer,
    BlockingPriority,
    SnapDistance,
    SnapAngle,
    AttachPosition,
    AttachRotation,
}

impl PropertyRole for NavigationSpaceProperty {
    const ALL: &'static [Self] = &[
        Self::Path,
        Self::BlockerShape,
        Self::Layer,
        Self::BlockingPriority,
        Self::SnapDistance,
        Self::SnapAngle,
        Self::AttachPosition,
        Self::AttachRotation,
    ];

    fn link_target(self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::BlockerShape => "blockerShape",
            Self::Layer => "layer",
            Self::BlockingPriority => "blockingPriority",
            Self::SnapDistance => "snapDistance",
            Self::SnapAngle => "snapAngle",
            Self::AttachPosition => "attachPosition",
            Self::AttachRotation => "attachRotation",
        }
    }
}

impl SpaceType {
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Mesh => "mesh",
            Self::Volume => "volume",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        [Self::Grid, Self::Mesh, Self::Volume]
            .into_iter()
            .find(|space_type| space_type.keyword() == keyword)
    }
}

/// Navigation space attached to an object class, referencing a
/// `.denavspace` file by path.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationSpaceDef {
    pub path: String,
    pub position: Vec3,
    /// Euler angles in degrees.
    pub rotation: Vec3,
    pub bone_name: String,
    pub layer: i32,
    pub space_type: SpaceType,
    pub blocking_priority: i32,
    /// Encoded shape list cutting holes into lower priority spaces.
    pub blocker_shape: String,
    pub snap_distance: f32,
    /// Degrees.
    pub snap_angle: f32,
    pub property_names: PropertyNames<NavigationSpaceProperty>,
}

impl Default for NavigationSpaceDef {
    fn default() -> Self {
        Self {
            path: String::new(),
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            bone_name: String::new(),
            layer: 0,
            space_type: SpaceType::Mesh,
            blocking_priority: 0,
            blocker_shape: String::new(),
            snap_distance: 0.001,
            snap_angle: 180.0,
            property_names: PropertyNames::new(),
        }
    }
}

impl NavigationSpaceDef {
    pub fn new() -> Self {
        Self::default()
    }
}
