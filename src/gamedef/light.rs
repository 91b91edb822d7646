use glam::Vec3;

use crate::gamedef::property::{PropertyNames, PropertyRole};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum LightType {
    #[default]
    Point,
    Spot,
    Projector,
}

impl LightType {
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Point => "point",
            Self::Spot => "spot",
            Self::Projector => "projector",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        [Self::Point, Self::Spot, Self::Projector]
            .into_iter()
            .find(|light_type| light_type.keyword() == keyword)
    }

    /// Spot and projector lights use the spot parameters.
    pub const fn is_spot(self) -> bool {
        matches!(self, Self::Spot | Self::Projector)
    }
}

/// How the light is expected to move while the game runs.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum LightMovementHint {
    Stationary,
    Jittering,
    #[default]
    Dynamic,
}

impl LightMovementHint {
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Stationary => "static",
            Self::Jittering => "jittering",
            Self::Dynamic => "dynamic",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        [Self::Stationary, Self::Jittering, Self::Dynamic]
            .into_iter()
            .find(|hint| hint.keyword() == keyword)
    }
}

/// How often the light parameters are expected to change.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum LightParameterHint {
    Static,
    Activation,
    Flicker,
    #[default]
    Dynamic,
}

impl LightParameterHint {
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Activation => "activation",
            Self::Flicker => "flicker",
            Self::Dynamic => "dynamic",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        [Self::Static, Self::Activation, Self::Flicker, Self::Dynamic]
            .into_iter()
            .find(|hint| hint.keyword() == keyword)
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LightProperty {
    Type,
    Color,
    Intensity,
    Range,
    AmbientRatio,
    HalfIntDist,
    SpotAngle,
    SpotRatio,
    SpotSmoothness,
    SpotExponent,
    LightSkin,
    Activated,
    CastShadows,
    HintLightImportance,
    HintShadowImportance,
    AttachPosition,
    AttachRotation,
}

impl PropertyRole for LightProperty {
    const ALL: &'static [Self] = &[
        Self::Type,
        Self::Color,
        Self::Intensity,
        Self::Range,
        Self::AmbientRatio,
        Self::HalfIntDist,
        Self::SpotAngle,
        Self::SpotRatio,
        Self::SpotSmoothness,
        Self::SpotExponent,
        Self::LightSkin,
        Self::Activated,
        Self::CastShadows,
        Self::HintLightImportance,
        Self::HintShadowImportance,
        Self::AttachPosition,
        Self::AttachRotation,
    ];

    fn link_target(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Color => "color",
            Self::Intensity => "intensity",
            Self::Range => "range",
            Self::AmbientRatio => "ambientRatio",
            Self::HalfIntDist => "halfIntensityDistance",
            Self::SpotAngle => "spotAngle",
            Self::SpotRatio => "spotRatio",
            Self::SpotSmoothness => "spotSmoothness",
            Self::SpotExponent => "spotExponent",
            Self::LightSkin => "lightSkin",
            Self::Activated => "activated",
            Self::CastShadows => "castShadows",
            Self::HintLightImportance => "hintLightImportance",
            Self::HintShadowImportance => "hintShadowImportance",
            Self::AttachPosition => "attachPosition",
            Self::AttachRotation => "attachRotation",
        }
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LightTrigger {
    Activated,
}

impl PropertyRole for LightTrigger {
    const ALL: &'static [Self] = &[Self::Activated];

    fn link_target(self) -> &'static str {
        match self {
            Self::Activated => "activated",
        }
    }
}

/// Light source attached to an object class.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    pub light_type: LightType,
    pub color: Vec3,
    pub intensity: f32,
    pub ambient_ratio: f32,
    pub range: f32,
    pub half_intensity_distance: f32,
    pub spot_angle: f32,
    pub spot_ratio: f32,
    pub spot_smoothness: f32,
    pub spot_exponent: f32,
    pub light_skin_path: String,
    pub activated: bool,
    pub cast_shadows: bool,
    pub hint_light_importance: i32,
    pub hint_shadow_importance: i32,
    pub hint_movement: LightMovementHint,
    pub hint_parameter: LightParameterHint,
    pub position: Vec3,
    /// Euler angles in degrees.
    pub rotation: Vec3,
    pub bone_name: String,
    pub property_names: PropertyNames<LightProperty>,
    pub trigger_names: PropertyNames<LightTrigger>,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            light_type: LightType::Point,
            color: Vec3::ONE,
            intensity: 1.0,
            ambient_ratio: 0.0,
            range: 10.0,
            half_intensity_distance: 0.1,
            spot_angle: 30.0,
            spot_ratio: 1.0,
            spot_smoothness: 1.0,
            spot_exponent: 1.0,
            light_skin_path: String::new(),
            activated: true,
            cast_shadows: true,
            hint_light_importance: 100,
            hint_shadow_importance: 100,
            hint_movement: LightMovementHint::Dynamic,
            hint_parameter: LightParameterHint::Dynamic,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            bone_name: String::new(),
            property_names: PropertyNames::new(),
            trigger_names: PropertyNames::new(),
        }
    }
}

impl Light {
    pub fn new() -> Self {
        Self::default()
    }
}
