use glam::{Vec2, Vec3};

use crate::gamedef::property::{PropertyNames, PropertyRole};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BillboardProperty {
    Skin,
    Axis,
    Offset,
    Locked,
    Spherical,
    RenderEnvMap,
    AttachPosition,
}

impl PropertyRole for BillboardProperty {
    const ALL: &'static [Self] = &[
        Self::Skin,
        Self::Axis,
        Self::Offset,
        Self::Locked,
        Self::Spherical,
        Self::RenderEnvMap,
        Self::AttachPosition,
    ];

    fn link_target(self) -> &'static str {
        match self {
            Self::Skin => "skin",
            Self::Axis => "axis",
            Self::Offset => "offset",
            Self::Locked => "locked",
            Self::Spherical => "spherical",
            Self::RenderEnvMap => "renderEnvMap",
            Self::AttachPosition => "attachPosition",
        }
    }
}

/// Billboard attached to an object class.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Billboard {
    pub skin_path: String,
    pub axis: Vec3,
    pub size: Vec2,
    pub offset: Vec2,
    pub locked: bool,
    pub spherical: bool,
    pub size_fixed_to_screen: bool,
    pub do_not_scale: bool,
    pub partial_hide: bool,
    pub render_env_map: bool,
    pub position: Vec3,
    pub bone_name: String,
    pub property_names: PropertyNames<BillboardProperty>,
}

impl Default for Billboard {
    fn default() -> Self {
        Self {
            skin_path: String::new(),
            axis: Vec3::Y,
            size: Vec2::ONE,
            offset: Vec2::ZERO,
            locked: true,
            spherical: true,
            size_fixed_to_screen: false,
            do_not_scale: false,
            partial_hide: false,
            render_env_map: false,
            position: Vec3::ZERO,
            bone_name: String::new(),
            property_names: PropertyNames::new(),
        }
    }
}

impl Billboard {
    pub fn new() -> Self {
        Self::default()
    }
}
