use crate::{DekitError, DekitResult};

/// GLSL data types known to the generator.
///
/// The named variants map onto fixed GLSL keywords. `Custom` carries the
/// name of a user defined type (a struct for example) and renders verbatim.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum DataType {
    #[default]
    Void,
    Float,
    Int,
    Bool,
    Vec2,
    Vec3,
    Vec4,
    IVec2,
    IVec3,
    IVec4,
    BVec2,
    BVec3,
    BVec4,
    Mat3x2,
    Mat3x3,
    Mat4x3,
    Mat4x4,
    Sampler2D,
    Sampler2DShadow,
    Sampler2DArray,
    Sampler2DArrayShadow,
    SamplerCube,
    Custom(String),
}

impl DataType {
    /// All data types with a fixed GLSL keyword, in index order.
    pub const NAMED: [Self; 22] = [
        Self::Void,
        Self::Float,
        Self::Int,
        Self::Bool,
        Self::Vec2,
        Self::Vec3,
        Self::Vec4,
        Self::IVec2,
        Self::IVec3,
        Self::IVec4,
        Self::BVec2,
        Self::BVec3,
        Self::BVec4,
        Self::Mat3x2,
        Self::Mat3x3,
        Self::Mat4x3,
        Self::Mat4x4,
        Self::Sampler2D,
        Self::Sampler2DShadow,
        Self::Sampler2DArray,
        Self::Sampler2DArrayShadow,
        Self::SamplerCube,
    ];

    pub fn custom<T: Into<String>>(name: T) -> Self {
        Self::Custom(name.into())
    }

    /// Looks up a named data type by its numeric index.
    ///
    /// # Errors
    /// `DekitError::InvalidParam` if the index does not name a fixed type.
    pub fn from_index(index: i32) -> DekitResult<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::NAMED.get(i).cloned())
            .ok_or_else(|| DekitError::invalid_param(format!("data type index {} out of range", index)))
    }

    /// Fixed GLSL keyword, `None` for a custom type.
    pub const fn keyword(&self) -> Option<&'static str> {
        let keyword = match self {
            Self::Void => "void",
            Self::Float => "float",
            Self::Int => "int",
            Self::Bool => "bool",
            Self::Vec2 => "vec2",
            Self::Vec3 => "vec3",
            Self::Vec4 => "vec4",
            Self::IVec2 => "ivec2",
            Self::IVec3 => "ivec3",
            Self::IVec4 => "ivec4",
            Self::BVec2 => "bvec2",
            Self::BVec3 => "bvec3",
            Self::BVec4 => "bvec4",
            Self::Mat3x2 => "mat3x2",
            Self::Mat3x3 => "mat3",
            Self::Mat4x3 => "mat4x3",
            Self::Mat4x4 => "mat4",
            Self::Sampler2D => "sampler2D",
            Self::Sampler2DShadow => "sampler2DShadow",
            Self::Sampler2DArray => "sampler2DArray",
            Self::Sampler2DArrayShadow => "sampler2DArrayShadow",
            Self::SamplerCube => "samplerCube",
            Self::Custom(_) => return None,
        };
        Some(keyword)
    }

    pub fn glsl_name(&self) -> &str {
        if let Self::Custom(name) = self {
            name
        } else {
            self.keyword().unwrap_or_default()
        }
    }

    pub const fn is_sampler(&self) -> bool {
        matches!(
            self,
            Self::Sampler2D
                | Self::Sampler2DShadow
                | Self::Sampler2DArray
                | Self::Sampler2DArrayShadow
                | Self::SamplerCube
        )
    }
}

/// One vector component selector of a swizzle suffix.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Swizzle {
    #[default]
    None,
    X,
    Y,
    Z,
    W,
    R,
    G,
    B,
    A,
}

impl Swizzle {
    pub const ALL: [Self; 9] = [
        Self::None,
        Self::X,
        Self::Y,
        Self::Z,
        Self::W,
        Self::R,
        Self::G,
        Self::B,
        Self::A,
    ];

    /// # Errors
    /// `DekitError::InvalidParam` if the index is not a swizzle.
    pub fn from_index(index: i32) -> DekitResult<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| DekitError::invalid_param(format!("swizzle index {} out of range", index)))
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
            Self::W => "w",
            Self::R => "r",
            Self::G => "g",
            Self::B => "b",
            Self::A => "a",
        }
    }
}

/// Up to four swizzle components. Rendering stops at the first `None`.
pub type SwizzleMask = [Swizzle; 4];

/// Builds a swizzle mask from up to four components.
///
/// # Errors
/// `DekitError::InvalidParam` if more than four components are given.
pub fn swizzle_mask(components: &[Swizzle]) -> DekitResult<SwizzleMask> {
    if components.len() > 4 {
        return Err(DekitError::invalid_param(format!(
            "swizzle takes at most 4 components, got {}",
            components.len()
        )));
    }

    let mut mask = [Swizzle::None; 4];
    for (slot, component) in mask.iter_mut().zip(components) {
        *slot = *component;
    }
    Ok(mask)
}

/// Direction qualifier of a function parameter.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum DirectionQualifier {
    #[default]
    None,
    In,
    Out,
    InOut,
}

impl DirectionQualifier {
    /// Text written in front of the parameter type, including the trailing space.
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::None => "",
            Self::In => "in ",
            Self::Out => "out ",
            Self::InOut => "inout ",
        }
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Negate,
    Not,
    Assign,
    Add,
    Subtract,
    Multiply,
    Divide,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    AssignAdd,
    AssignSubtract,
    AssignMultiply,
    AssignDivide,
}

impl Operator {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Negate | Self::Subtract => "-",
            Self::Not => "!",
            Self::Assign => "=",
            Self::Add => "+",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
            Self::AssignAdd => "+=",
            Self::AssignSubtract => "-=",
            Self::AssignMultiply => "*=",
            Self::AssignDivide => "/=",
        }
    }

    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Negate | Self::Not)
    }

    /// Plain and compound assignments. Their operands never need parentheses.
    pub const fn is_assignment(self) -> bool {
        matches!(
            self,
            Self::Assign
                | Self::AssignAdd
                | Self::AssignSubtract
                | Self::AssignMultiply
                | Self::AssignDivide
        )
    }
}
