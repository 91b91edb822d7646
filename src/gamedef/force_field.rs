use glam::Vec3;

use crate::gamedef::property::{PropertyNames, PropertyRole};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum FieldType {
    #[default]
    Radial,
    Linear,
    Vortex,
}

impl FieldType {
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Radial => "radial",
            Self::Linear => "linear",
            Self::Vortex => "vortex",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        [Self::Radial, Self::Linear, Self::Vortex]
            .into_iter()
            .find(|field_type| field_type.keyword() == keyword)
    }
}

/// What the force acts on.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum ApplicationType {
    #[default]
    Direct,
    Surface,
    Mass,
    Speed,
}

impl ApplicationType {
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Surface => "surface",
            Self::Mass => "mass",
            Self::Speed => "speed",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        [Self::Direct, Self::Surface, Self::Mass, Self::Speed]
            .into_iter()
            .find(|application| application.keyword() == keyword)
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ForceFieldProperty {
    InfluenceArea,
    Radius,
    Exponent,
    FieldType,
    ApplicationType,
    Direction,
    Force,
    FluctuationDirection,
    FluctuationForce,
    Shape,
    Enabled,
    AttachPosition,
    AttachRotation,
}

impl PropertyRole for ForceFieldProperty {
    const ALL: &'static [Self] = &[
        Self::InfluenceArea,
        Self::Radius,
        Self::Exponent,
        Self::FieldType,
        Self::ApplicationType,
        Self::Direction,
        Self::Force,
        Self::FluctuationDirection,
        Self::FluctuationForce,
        Self::Shape,
        Self::Enabled,
        Self::AttachPosition,
        Self::AttachRotation,
    ];

    fn link_target(self) -> &'static str {
        match self {
            Self::InfluenceArea => "influenceArea",
            Self::Radius => "radius",
            Self::Exponent => "exponent",
            Self::FieldType => "fieldType",
            Self::ApplicationType => "applicationType",
            Self::Direction => "direction",
            Self::Force => "force",
            Self::FluctuationDirection => "fluctuationDirection",
            Self::FluctuationForce => "fluctuationForce",
            Self::Shape => "shape",
            Self::Enabled => "enabled",
            Self::AttachPosition => "attachPosition",
            Self::AttachRotation => "attachRotation",
        }
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ForceFieldTrigger {
    Enabled,
}

impl PropertyRole for ForceFieldTrigger {
    const ALL: &'static [Self] = &[Self::Enabled];

    fn link_target(self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
        }
    }
}

/// Force field attached to an object class.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ForceField {
    pub position: Vec3,
    /// Euler angles in degrees.
    pub rotation: Vec3,
    pub bone_name: String,
    /// Encoded shape list.
    pub influence_area: String,
    pub radius: f32,
    pub exponent: f32,
    pub field_type: FieldType,
    pub application_type: ApplicationType,
    pub direction: Vec3,
    pub force: f32,
    /// Degrees.
    pub fluctuation_direction: f32,
    pub fluctuation_force: f32,
    /// Encoded shape list.
    pub shape: String,
    pub enabled: bool,
    pub property_names: PropertyNames<ForceFieldProperty>,
    pub trigger_names: PropertyNames<ForceFieldTrigger>,
}

impl Default for ForceField {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            bone_name: String::new(),
            influence_area: String::new(),
            radius: 1.0,
            exponent: 1.0,
            field_type: FieldType::Radial,
            application_type: ApplicationType::Direct,
            direction: Vec3::ZERO,
            force: 1.0,
            fluctuation_direction: 0.0,
            fluctuation_force: 0.0,
            shape: String::new(),
            enabled: true,
            property_names: PropertyNames::new(),
            trigger_names: PropertyNames::new(),
        }
    }
}

impl ForceField {
    pub fn new() -> Self {
        Self::default()
    }
}
