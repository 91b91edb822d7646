//! GLSL shader syntax tree and source generator.

mod declaration;
mod generate;
mod node;
mod types;

pub use declaration::{Declaration, DeclarationList, Function, FunctionList, Named, NamedList};
pub use generate::{GenerateCode, Position, Terminator, format_float};
pub use node::{
    Block, Constant, DeclareVariable, FunctionCall, IfElse, Node, NodeType, OperatorNode, Return,
    Variable,
};
pub use types::{DataType, DirectionQualifier, Operator, Swizzle, SwizzleMask, swizzle_mask};

use crate::{DekitError, DekitResult};

/// A complete shader program in tree form.
///
/// Global declarations are kept in five lists (uniforms, samplers, inputs,
/// outputs and constants) followed by the functions. Rendering walks them in
/// that order and produces GLSL 1.30 source.
///
/// # Example
///
/// ```rust
/// use dekit::shader::{DataType, Function, ShaderAst};
///
/// let mut ast = ShaderAst::new();
/// ast.add_uniform("pParam1", DataType::Vec4);
/// ast.add_function(Function::new("main"));
///
/// let source = ast.generate_source_code().unwrap();
/// assert_eq!(
///     source,
///     "#version 130\n\nprecision highp float;\nprecision highp int;\n\n\
///      uniform vec4 pParam1;\n\nvoid main( void )\n{\n}\n"
/// );
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderAst {
    high_precision: bool,
    uniforms: DeclarationList,
    samplers: DeclarationList,
    inputs: DeclarationList,
    outputs: DeclarationList,
    constants: DeclarationList,
    functions: FunctionList,
}

impl Default for ShaderAst {
    fn default() -> Self {
        Self {
            high_precision: true,
            uniforms: DeclarationList::new(),
            samplers: DeclarationList::new(),
            inputs: DeclarationList::new(),
            outputs: DeclarationList::new(),
            constants: DeclarationList::new(),
            functions: FunctionList::new(),
        }
    }
}

impl ShaderAst {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn high_precision(&self) -> bool {
        self.high_precision
    }

    /// Whether the `precision highp` statements are written after the
    /// version line.
    pub const fn set_high_precision(&mut self, high_precision: bool) {
        self.high_precision = high_precision;
    }

    pub fn uniforms(&self) -> &DeclarationList {
        &self.uniforms
    }

    pub fn uniforms_mut(&mut self) -> &mut DeclarationList {
        &mut self.uniforms
    }

    pub fn samplers(&self) -> &DeclarationList {
        &self.samplers
    }

    pub fn samplers_mut(&mut self) -> &mut DeclarationList {
        &mut self.samplers
    }

    pub fn inputs(&self) -> &DeclarationList {
        &self.inputs
    }

    pub fn inputs_mut(&mut self) -> &mut DeclarationList {
        &mut self.inputs
    }

    pub fn outputs(&self) -> &DeclarationList {
        &self.outputs
    }

    pub fn outputs_mut(&mut self) -> &mut DeclarationList {
        &mut self.outputs
    }

    pub fn constants(&self) -> &DeclarationList {
        &self.constants
    }

    pub fn constants_mut(&mut self) -> &mut DeclarationList {
        &mut self.constants
    }

    pub fn functions(&self) -> &FunctionList {
        &self.functions
    }

    pub fn functions_mut(&mut self) -> &mut FunctionList {
        &mut self.functions
    }

    pub fn add_uniform<T: Into<String>>(&mut self, name: T, data_type: DataType) -> usize {
        self.uniforms.add(Declaration::new(name, data_type))
    }

    pub fn add_sampler<T: Into<String>>(&mut self, name: T, data_type: DataType) -> usize {
        self.samplers.add(Declaration::new(name, data_type))
    }

    pub fn add_input<T: Into<String>>(&mut self, name: T, data_type: DataType) -> usize {
        self.inputs.add(Declaration::new(name, data_type))
    }

    pub fn add_output<T: Into<String>>(&mut self, name: T, data_type: DataType) -> usize {
        self.outputs.add(Declaration::new(name, data_type))
    }

    pub fn add_constant_float<T: Into<String>>(&mut self, name: T, value: f32) -> usize {
        self.constants
            .add(Declaration::with_init(name, DataType::Float, Node::float(value)))
    }

    pub fn add_constant_vec2<T: Into<String>>(&mut self, name: T, x: f32, y: f32) -> usize {
        self.add_constant_vector(name, DataType::Vec2, &[x, y])
    }

    /// Declares `const vec2 name = vec2( value )`.
    pub fn add_constant_vec2_splat<T: Into<String>>(&mut self, name: T, value: f32) -> usize {
        self.add_constant_vector(name, DataType::Vec2, &[value])
    }

    pub fn add_constant_vec3<T: Into<String>>(&mut self, name: T, x: f32, y: f32, z: f32) -> usize {
        self.add_constant_vector(name, DataType::Vec3, &[x, y, z])
    }

    pub fn add_constant_vec3_splat<T: Into<String>>(&mut self, name: T, value: f32) -> usize {
        self.add_constant_vector(name, DataType::Vec3, &[value])
    }

    pub fn add_constant_vec4<T: Into<String>>(
        &mut self,
        name: T,
        x: f32,
        y: f32,
        z: f32,
        w: f32,
    ) -> usize {
        self.add_constant_vector(name, DataType::Vec4, &[x, y, z, w])
    }

    pub fn add_constant_vec4_splat<T: Into<String>>(&mut self, name: T, value: f32) -> usize {
        self.add_constant_vector(name, DataType::Vec4, &[value])
    }

    fn add_constant_vector<T: Into<String>>(
        &mut self,
        name: T,
        data_type: DataType,
        components: &[f32],
    ) -> usize {
        let parameters = components.iter().copied().map(Node::float).collect();
        let init = Node::call(data_type.glsl_name(), parameters);
        self.constants.add(Declaration::with_init(name, data_type, init))
    }

    pub fn add_function(&mut self, function: Function) -> usize {
        self.functions.add(function)
    }

    /// GLSL keyword of the data type with the given index.
    ///
    /// # Errors
    /// `DekitError::InvalidParam` if the index is out of range or names the
    /// custom type, which has no fixed keyword.
    pub fn data_type_string(index: i32) -> DekitResult<&'static str> {
        DataType::from_index(index)?
            .keyword()
            .ok_or_else(|| DekitError::invalid_param(format!("data type {} has no keyword", index)))
    }

    /// # Errors
    /// `DekitError::InvalidParam` if the index is out of range.
    pub fn swizzle_string(index: i32) -> DekitResult<&'static str> {
        Swizzle::from_index(index).map(Swizzle::as_str)
    }

    /// Structural check before generation. Every tree that can be built is
    /// accepted; malformed operators are reported by the generator instead.
    pub const fn verify(&self) -> bool {
        true
    }

    pub const fn optimize(&mut self) {}

    /// Renders the whole program.
    ///
    /// # Errors
    /// `DekitError::InvalidParam` if a node in the tree is malformed, see
    /// [`Node::generate`].
    pub fn generate_source_code(&self) -> DekitResult<String> {
        let mut code = GenerateCode::new();

        code.push_str("#version 130\n");
        if self.high_precision {
            code.push('\n');
            code.push_str("precision highp float;\n");
            code.push_str("precision highp int;\n");
        }

        Self::generate_declarations(&mut code, &self.uniforms, "uniform")?;
        Self::generate_declarations(&mut code, &self.samplers, "uniform")?;
        Self::generate_declarations(&mut code, &self.inputs, "in")?;
        Self::generate_declarations(&mut code, &self.outputs, "out")?;
        Self::generate_declarations(&mut code, &self.constants, "const")?;

        for function in &self.functions {
            function.generate(&mut code)?;
        }

        log::debug!(
            "Generated shader source: {} uniforms, {} samplers, {} inputs, {} outputs, {} constants, {} functions, {} bytes",
            self.uniforms.count(),
            self.samplers.count(),
            self.inputs.count(),
            self.outputs.count(),
            self.constants.count(),
            self.functions.count(),
            code.source().len()
        );

        Ok(code.into_source())
    }

    fn generate_declarations(
        code: &mut GenerateCode,
        list: &DeclarationList,
        keyword: &str,
    ) -> DekitResult<()> {
        if !list.is_empty() {
            code.push('\n');
        }
        for declaration in list {
            declaration.generate_global(code, keyword)?;
        }
        Ok(())
    }

    /// Builds a small fragment shader touching every node type. Used to
    /// check the generator end to end.
    pub fn debug_test_ast() -> Self {
        let mut ast = Self::new();
        ast.set_high_precision(true);

        ast.add_uniform("pParam1", DataType::Vec4);
        ast.add_uniform("pParam2", DataType::Vec2);
        ast.add_uniform("pParam3", DataType::Mat4x3);

        ast.add_sampler("texColor", DataType::Sampler2D);
        ast.add_sampler("texShadow", DataType::Sampler2DShadow);
        ast.add_sampler("texDepth", DataType::Sampler2D);

        ast.add_input("vTexCoord", DataType::Vec2);
        ast.add_input("vColor", DataType::Vec3);
        ast.add_input("vInterpolated", DataType::Float);

        ast.add_output("outColor", DataType::Vec4);
        ast.add_output("outNormal", DataType::Vec4);
        ast.add_output("outParams", DataType::Vec4);

        ast.add_constant_float("epsilon", 0.0001);
        ast.add_constant_vec3("packShift", 1.0, 256.0, 65_536.0);
        ast.constants.add(Declaration::with_init(
            "unpackDepth",
            DataType::Vec3,
            Node::call(
                "vec3",
                vec![
                    Node::float(1.0),
                    Node::binary(Operator::Divide, Node::float(1.0), Node::float(256.0)),
                    Node::binary(Operator::Divide, Node::float(1.0), Node::float(65_536.0)),
                ],
            ),
        ));

        let helper_body = Block::new()
            .with_statement(Node::binary(
                Operator::AssignMultiply,
                Variable::new("valInOut").with_swizzle([Swizzle::Y, Swizzle::X]).into(),
                Variable::new("valIn").with_swizzle([Swizzle::Z, Swizzle::X]).into(),
            ))
            .with_statement(Node::binary(
                Operator::Assign,
                Node::variable("valOut"),
                Node::call(
                    "vec4",
                    vec![
                        Variable::new("valIn")
                            .with_swizzle([Swizzle::X, Swizzle::X, Swizzle::Y])
                            .into(),
                        Node::binary(
                            Operator::Add,
                            Variable::new("valInOut").with_swizzle([Swizzle::Y]).into(),
                            Node::float(2.0),
                        ),
                    ],
                ),
            ))
            .with_statement(Node::return_value(
                Variable::new("valIn").with_swizzle([Swizzle::Y]).into(),
            ));

        ast.add_function(
            Function::new("helperFunction")
                .with_return_type(DataType::Float)
                .with_parameter(Declaration::parameter(
                    "valIn",
                    DataType::Vec3,
                    DirectionQualifier::In,
                ))
                .with_parameter(Declaration::parameter(
                    "valInOut",
                    DataType::Vec2,
                    DirectionQualifier::InOut,
                ))
                .with_parameter(Declaration::parameter(
                    "valOut",
                    DataType::Vec4,
                    DirectionQualifier::Out,
                ))
                .with_body(helper_body),
        );

        let color_index = Node::binary(Operator::Add, Node::variable("gl_ID"), Node::int(1));
        let discard_check = IfElse::new(Node::binary(
            Operator::GreaterThan,
            Variable::new("vColor")
                .with_index(color_index)
                .with_swizzle([Swizzle::Z])
                .into(),
            Node::float(0.5),
        ))
        .with_if_block(Block::new().with_statement(Node::Discard));

        let write_color = IfElse::new(Node::boolean(true))
            .with_if_block(
                Block::new()
                    .with_statement(Node::binary(
                        Operator::Assign,
                        Node::variable("outColor"),
                        Node::variable("vColor"),
                    ))
                    .with_statement(Return::default().into()),
            )
            .with_else_block(Block::new().with_statement(Node::Discard));

        ast.add_function(
            Function::new("main").with_body(
                Block::new()
                    .with_statement(discard_check.into())
                    .with_statement(write_color.into()),
            ),
        );

        ast
    }

    /// Verifies, optimizes and renders [`ShaderAst::debug_test_ast`],
    /// logging the outcome.
    ///
    /// # Errors
    /// Propagates generation errors.
    pub fn debug_test() -> DekitResult<Option<String>> {
        let mut ast = Self::debug_test_ast();

        if !ast.verify() {
            log::error!("DebugTestAST: Verification failed");
            return Ok(None);
        }
        log::info!("DebugTestAST: Verification succeeded");

        ast.optimize();
        let source = ast.generate_source_code()?;
        log::info!("DebugTestAST: Generated Source Code:\n{}", source);
        Ok(Some(source))
    }
}
