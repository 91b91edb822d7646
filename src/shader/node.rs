use crate::shader::generate::{GenerateCode, Position, Terminator, format_float};
use crate::shader::types::{DataType, Operator, Swizzle, SwizzleMask};
use crate::{DekitError, DekitResult};

/// Discriminant of a [`Node`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NodeType {
    Operator,
    Variable,
    FunctionCall,
    IfElse,
    Return,
    Constant,
    Discard,
    Block,
    DeclareVariable,
}

/// One syntactic construct of a shader.
///
/// Children are owned exclusively. A tree is built bottom up by moving the
/// finished children into their parent.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Constant(Constant),
    Variable(Variable),
    Operator(OperatorNode),
    FunctionCall(FunctionCall),
    IfElse(IfElse),
    Return(Return),
    /// Fragment shader early termination.
    Discard,
    Block(Block),
    DeclareVariable(DeclareVariable),
}

impl Node {
    pub fn float(value: f32) -> Self {
        Self::Constant(Constant::Float(value))
    }

    pub fn int(value: i32) -> Self {
        Self::Constant(Constant::Int(value))
    }

    pub fn boolean(value: bool) -> Self {
        Self::Constant(Constant::Bool(value))
    }

    pub fn variable<T: Into<String>>(name: T) -> Self {
        Self::Variable(Variable::new(name))
    }

    pub fn unary(operator: Operator, operand: Self) -> Self {
        Self::Operator(OperatorNode::new(operator, Some(operand), None))
    }

    pub fn binary(operator: Operator, left: Self, right: Self) -> Self {
        Self::Operator(OperatorNode::new(operator, Some(left), Some(right)))
    }

    pub fn call<T: Into<String>>(name: T, parameters: Vec<Self>) -> Self {
        Self::FunctionCall(FunctionCall::new(name).with_parameters(parameters))
    }

    pub fn return_value(value: Self) -> Self {
        Self::Return(Return::new(Some(value)))
    }

    pub const fn node_type(&self) -> NodeType {
        match self {
            Self::Constant(_) => NodeType::Constant,
            Self::Variable(_) => NodeType::Variable,
            Self::Operator(_) => NodeType::Operator,
            Self::FunctionCall(_) => NodeType::FunctionCall,
            Self::IfElse(_) => NodeType::IfElse,
            Self::Return(_) => NodeType::Return,
            Self::Discard => NodeType::Discard,
            Self::Block(_) => NodeType::Block,
            Self::DeclareVariable(_) => NodeType::DeclareVariable,
        }
    }

    /// Appends the GLSL text of this node to `code`.
    ///
    /// `position` is chosen by the parent. The returned [`Terminator`] tells
    /// an enclosing block whether the statement still needs a `;`.
    ///
    /// # Errors
    /// `DekitError::InvalidParam` for malformed trees: operator arity
    /// mismatches, if/else without condition, more than four array indices,
    /// or statement-only nodes used inside an expression.
    pub fn generate(&self, code: &mut GenerateCode, position: Position) -> DekitResult<Terminator> {
        match self {
            Self::Constant(constant) => {
                // `-` followed by `-1` would read as a decrement.
                if position == Position::Operand && constant.is_negative() {
                    code.push_str("( ");
                    code.push_str(&constant.to_glsl());
                    code.push_str(" )");
                } else {
                    code.push_str(&constant.to_glsl());
                }
                Ok(Terminator::Semicolon)
            }
            Self::Variable(variable) => variable.generate(code),
            Self::Operator(operator) => operator.generate(code, position),
            Self::FunctionCall(call) => call.generate(code),
            Self::IfElse(if_else) => {
                require_statement(NodeType::IfElse, position)?;
                if_else.generate(code)
            }
            Self::Return(ret) => {
                require_statement(NodeType::Return, position)?;
                ret.generate(code)
            }
            Self::Discard => {
                require_statement(NodeType::Discard, position)?;
                code.push_str("discard");
                Ok(Terminator::Semicolon)
            }
            Self::Block(block) => {
                require_statement(NodeType::Block, position)?;
                block.generate_nested(code)
            }
            Self::DeclareVariable(declare) => {
                require_statement(NodeType::DeclareVariable, position)?;
                declare.generate(code)
            }
        }
    }
}

fn require_statement(node_type: NodeType, position: Position) -> DekitResult<()> {
    match position {
        Position::Statement => Ok(()),
        Position::Expression | Position::Operand => Err(DekitError::invalid_param(format!(
            "{:?} node can only be used as a statement",
            node_type
        ))),
    }
}

fn push_swizzle(code: &mut GenerateCode, swizzle: &SwizzleMask) {
    if swizzle.first().is_none_or(|s| *s == Swizzle::None) {
        return;
    }

    code.push('.');
    for component in swizzle.iter().take_while(|s| **s != Swizzle::None) {
        code.push_str(component.as_str());
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Constant {
    Float(f32),
    Int(i32),
    Bool(bool),
}

impl Constant {
    pub fn to_glsl(self) -> String {
        match self {
            Self::Float(value) => format_float(value),
            Self::Int(value) => value.to_string(),
            Self::Bool(value) => value.to_string(),
        }
    }

    /// Whether the rendered text starts with a minus sign, `-0.0` included.
    pub const fn is_negative(self) -> bool {
        match self {
            Self::Float(value) => value.is_sign_negative(),
            Self::Int(value) => value < 0,
            Self::Bool(_) => false,
        }
    }
}

impl From<Constant> for Node {
    fn from(constant: Constant) -> Self {
        Self::Constant(constant)
    }
}

/// A variable reference with optional array indices and swizzle.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub array_indices: Vec<Node>,
    pub swizzle: SwizzleMask,
}

impl Variable {
    pub const MAX_ARRAY_INDICES: usize = 4;

    pub fn new<T: Into<String>>(name: T) -> Self {
        Self {
            name: name.into(),
            array_indices: Vec::new(),
            swizzle: [Swizzle::None; 4],
        }
    }

    #[must_use]
    pub fn with_index(mut self, index: Node) -> Self {
        self.array_indices.push(index);
        self
    }

    #[must_use]
    pub fn with_swizzle<const N: usize>(mut self, components: [Swizzle; N]) -> Self {
        const { assert!(N <= 4, "a swizzle has at most four components") };
        for (slot, component) in self.swizzle.iter_mut().zip(components) {
            *slot = component;
        }
        self
    }

    fn generate(&self, code: &mut GenerateCode) -> DekitResult<Terminator> {
        if self.array_indices.len() > Self::MAX_ARRAY_INDICES {
            return Err(DekitError::invalid_param(format!(
                "variable {} has {} array indices, at most {} are supported",
                self.name,
                self.array_indices.len(),
                Self::MAX_ARRAY_INDICES
            )));
        }

        code.push_str(&self.name);
        for index in &self.array_indices {
            code.push_str("[ ");
            index.generate(code, Position::Expression)?;
            code.push_str(" ]");
        }
        push_swizzle(code, &self.swizzle);
        Ok(Terminator::Semicolon)
    }
}

impl From<Variable> for Node {
    fn from(variable: Variable) -> Self {
        Self::Variable(variable)
    }
}

/// Unary or binary operator application.
///
/// Operands are optional so that a malformed tree can be represented; the
/// arity is checked when the source is generated.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorNode {
    pub operator: Operator,
    pub operand1: Option<Box<Node>>,
    pub operand2: Option<Box<Node>>,
}

impl OperatorNode {
    pub fn new(operator: Operator, operand1: Option<Node>, operand2: Option<Node>) -> Self {
        Self {
            operator,
            operand1: operand1.map(Box::new),
            operand2: operand2.map(Box::new),
        }
    }

    fn generate(&self, code: &mut GenerateCode, position: Position) -> DekitResult<Terminator> {
        let operator = self.operator;
        let wrap = position == Position::Operand;

        match (self.operand1.as_deref(), self.operand2.as_deref()) {
            (Some(operand), None) if operator.is_unary() => {
                if wrap {
                    code.push_str("( ");
                }
                code.push_str(operator.as_str());
                operand.generate(code, Position::Operand)?;
                if wrap {
                    code.push_str(" )");
                }
            }
            (Some(left), Some(right)) if !operator.is_unary() => {
                let operand_position = if operator.is_assignment() {
                    Position::Expression
                } else {
                    Position::Operand
                };

                if wrap {
                    code.push_str("( ");
                }
                left.generate(code, operand_position)?;
                code.push(' ');
                code.push_str(operator.as_str());
                code.push(' ');
                right.generate(code, operand_position)?;
                if wrap {
                    code.push_str(" )");
                }
            }
            (operand1, operand2) => {
                let expected = if operator.is_unary() { 1 } else { 2 };
                let found = [operand1, operand2].into_iter().flatten().count();
                return Err(DekitError::invalid_param(format!(
                    "operator {:?} takes {} operand(s), found {}",
                    operator, expected, found
                )));
            }
        }

        Ok(Terminator::Semicolon)
    }
}

impl From<OperatorNode> for Node {
    fn from(operator: OperatorNode) -> Self {
        Self::Operator(operator)
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    pub parameters: Vec<Node>,
    pub swizzle: SwizzleMask,
}

impl FunctionCall {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            swizzle: [Swizzle::None; 4],
        }
    }

    #[must_use]
    pub fn with_parameter(mut self, parameter: Node) -> Self {
        self.parameters.push(parameter);
        self
    }

    #[must_use]
    pub fn with_parameters(mut self, parameters: Vec<Node>) -> Self {
        self.parameters.extend(parameters);
        self
    }

    #[must_use]
    pub fn with_swizzle<const N: usize>(mut self, components: [Swizzle; N]) -> Self {
        const { assert!(N <= 4, "a swizzle has at most four components") };
        for (slot, component) in self.swizzle.iter_mut().zip(components) {
            *slot = component;
        }
        self
    }

    fn generate(&self, code: &mut GenerateCode) -> DekitResult<Terminator> {
        code.push_str(&self.name);

        if self.parameters.is_empty() {
            code.push_str("()");
        } else {
            code.push_str("( ");
            for (i, parameter) in self.parameters.iter().enumerate() {
                if i > 0 {
                    code.push_str(", ");
                }
                parameter.generate(code, Position::Expression)?;
            }
            code.push_str(" )");
        }

        push_swizzle(code, &self.swizzle);
        Ok(Terminator::Semicolon)
    }
}

impl From<FunctionCall> for Node {
    fn from(call: FunctionCall) -> Self {
        Self::FunctionCall(call)
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IfElse {
    pub condition: Option<Box<Node>>,
    pub if_block: Block,
    pub else_block: Block,
}

impl IfElse {
    pub fn new(condition: Node) -> Self {
        Self {
            condition: Some(Box::new(condition)),
            if_block: Block::new(),
            else_block: Block::new(),
        }
    }

    #[must_use]
    pub fn with_if_block(mut self, block: Block) -> Self {
        self.if_block = block;
        self
    }

    #[must_use]
    pub fn with_else_block(mut self, block: Block) -> Self {
        self.else_block = block;
        self
    }

    fn generate(&self, code: &mut GenerateCode) -> DekitResult<Terminator> {
        let condition = self
            .condition
            .as_deref()
            .ok_or_else(|| DekitError::invalid_param("if/else node without condition"))?;

        code.push_str("if( ");
        condition.generate(code, Position::Expression)?;
        code.push_str(" )");
        self.if_block.generate_body(code)?;

        if !self.else_block.is_empty() {
            code.push('\n');
            code.push_indent();
            code.push_str("else");
            self.else_block.generate_body(code)?;
        }

        Ok(Terminator::None)
    }
}

impl From<IfElse> for Node {
    fn from(if_else: IfElse) -> Self {
        Self::IfElse(if_else)
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Return {
    pub value: Option<Box<Node>>,
}

impl Return {
    pub fn new(value: Option<Node>) -> Self {
        Self {
            value: value.map(Box::new),
        }
    }

    fn generate(&self, code: &mut GenerateCode) -> DekitResult<Terminator> {
        code.push_str("return");
        if let Some(value) = &self.value {
            code.push(' ');
            value.generate(code, Position::Expression)?;
        }
        Ok(Terminator::Semicolon)
    }
}

impl From<Return> for Node {
    fn from(ret: Return) -> Self {
        Self::Return(ret)
    }
}

/// Ordered list of statements rendered inside braces.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub statements: Vec<Node>,
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_statement(mut self, statement: Node) -> Self {
        self.statements.push(statement);
        self
    }

    pub fn push(&mut self, statement: Node) {
        self.statements.push(statement);
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Renders the block as the body of a function or if/else: the opening
    /// brace goes on its own line at the current indentation.
    pub(crate) fn generate_body(&self, code: &mut GenerateCode) -> DekitResult<Terminator> {
        code.push('\n');
        code.push_indent();
        self.generate_nested(code)
    }

    /// Renders the block where the line is already indented.
    fn generate_nested(&self, code: &mut GenerateCode) -> DekitResult<Terminator> {
        code.push_str("{\n");
        code.increment_indent();

        for statement in &self.statements {
            code.push_indent();
            if statement.generate(code, Position::Statement)? == Terminator::Semicolon {
                code.push(';');
            }
            code.push('\n');
        }

        code.decrement_indent();
        code.push_indent();
        code.push('}');
        Ok(Terminator::None)
    }
}

impl From<Block> for Node {
    fn from(block: Block) -> Self {
        Self::Block(block)
    }
}

/// Local variable declaration inside a function body.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct DeclareVariable {
    pub data_type: DataType,
    pub name: String,
    pub init: Option<Box<Node>>,
}

impl DeclareVariable {
    pub fn new<T: Into<String>>(data_type: DataType, name: T) -> Self {
        Self {
            data_type,
            name: name.into(),
            init: None,
        }
    }

    #[must_use]
    pub fn with_init(mut self, init: Node) -> Self {
        self.init = Some(Box::new(init));
        self
    }

    fn generate(&self, code: &mut GenerateCode) -> DekitResult<Terminator> {
        code.push_str(self.data_type.glsl_name());
        code.push(' ');
        code.push_str(&self.name);
        if let Some(init) = &self.init {
            code.push_str(" = ");
            init.generate(code, Position::Expression)?;
        }
        Ok(Terminator::Semicolon)
    }
}

impl From<DeclareVariable> for Node {
    fn from(declare: DeclareVariable) -> Self {
        Self::DeclareVariable(declare)
    }
}
