use dekit::navspace::{NavigationCorner, NavigationEdge, NavigationFace};
use dekit::shader::{Block, DataType, Function, IfElse, Node, Operator, Swizzle, Variable};
use dekit::{NavigationSpace, ShaderAst, SpaceType};
use glam::Vec3;
use rand::{Rng, SeedableRng, rngs::StdRng};

const VECTOR_TYPES: [DataType; 4] = [DataType::Float, DataType::Vec2, DataType::Vec3, DataType::Vec4];
const OPERATORS: [Operator; 4] = [
    Operator::Add,
    Operator::Subtract,
    Operator::Multiply,
    Operator::Divide,
];

/// Generate n random shader trees to use in the benchmark
pub fn generate_random_shaders(n: usize) -> Vec<ShaderAst> {
    let mut rng = StdRng::seed_from_u64(42); // Fixed seed for reproducibility
    (0..n).map(|_| random_shader(&mut rng)).collect()
}

fn random_shader(rng: &mut StdRng) -> ShaderAst {
    let mut ast = ShaderAst::new();
    let uniform_count = rng.random_range(2..12);
    let uniforms: Vec<String> = (1..=uniform_count)
        .map(|index| format!("pParam{}", index))
        .collect();

    for name in &uniforms {
        let data_type = VECTOR_TYPES[rng.random_range(0..VECTOR_TYPES.len())].clone();
        ast.add_uniform(name.as_str(), data_type);
    }
    ast.add_sampler("texColor", DataType::Sampler2D);
    ast.add_input("vTexCoord", DataType::Vec2);
    ast.add_output("outColor", DataType::Vec4);
    ast.add_constant_vec3("weights", 0.25, 0.5, 0.25);

    let mut body = Block::new();
    for _ in 0..rng.random_range(4..16) {
        let value = random_expression(rng, &uniforms, 4);
        let statement = Node::binary(Operator::AssignAdd, Node::variable("outColor"), value);

        if rng.random_bool(0.3) {
            let condition = Node::binary(
                Operator::GreaterThan,
                Variable::new(uniforms[0].as_str())
                    .with_swizzle([Swizzle::X])
                    .into(),
                Node::float(rng.random_range(0.0..1.0)),
            );
            body.push(
                IfElse::new(condition)
                    .with_if_block(Block::new().with_statement(statement))
                    .with_else_block(Block::new().with_statement(Node::Discard))
                    .into(),
            );
        } else {
            body.push(statement);
        }
    }
    ast.add_function(Function::new("main").with_body(body));

    ast
}

fn random_expression(rng: &mut StdRng, uniforms: &[String], depth: u32) -> Node {
    if depth == 0 || rng.random_bool(0.3) {
        return if rng.random_bool(0.5) {
            Node::float(rng.random_range(-10.0..10.0))
        } else {
            Node::variable(uniforms[rng.random_range(0..uniforms.len())].as_str())
        };
    }

    let operator = OPERATORS[rng.random_range(0..OPERATORS.len())];
    Node::binary(
        operator,
        random_expression(rng, uniforms, depth - 1),
        random_expression(rng, uniforms, depth - 1),
    )
}

/// Generate n random mesh navigation spaces to use in the benchmark
pub fn generate_random_spaces(n: usize) -> Vec<NavigationSpace> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n).map(|_| random_space(&mut rng)).collect()
}

fn random_space(rng: &mut StdRng) -> NavigationSpace {
    let vertex_count: u16 = rng.random_range(100..2000);
    let face_count: u16 = rng.random_range(50..1000);

    NavigationSpace {
        space_type: SpaceType::Mesh,
        vertices: (0..vertex_count)
            .map(|_| {
                Vec3::new(
                    rng.random_range(-500.0..500.0),
                    rng.random_range(-5.0..5.0),
                    rng.random_range(-500.0..500.0),
                )
            })
            .collect(),
        edges: (0..face_count)
            .map(|_| NavigationEdge {
                vertex1: rng.random_range(0..vertex_count),
                vertex2: rng.random_range(0..vertex_count),
                cost_type1: rng.random_range(0..4),
                cost_type2: rng.random_range(0..4),
            })
            .collect(),
        corners: (0..face_count * 3)
            .map(|_| NavigationCorner {
                vertex: rng.random_range(0..vertex_count),
                cost_type: 0,
            })
            .collect(),
        faces: (0..face_count)
            .map(|_| NavigationFace {
                corner_count: 3,
                cost_type: rng.random_range(0..4),
            })
            .collect(),
        ..NavigationSpace::default()
    }
}
