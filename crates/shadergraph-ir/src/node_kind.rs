use serde::Serialize;

/// The closed set of operator tags a graph document may reference.
///
/// Wire documents carry `kind` as a plain string (see `NodeDocument`) so that
/// an unrecognized tag surfaces as the validator's `unknown_kind` diagnostic
/// rather than a JSON-deserialization failure — `NodeKind::from_tag` is the
/// single place that string gets resolved. Keep this enum exhaustive and
/// flat: dispatch on `NodeKind` is data-directed (see
/// `shadergraph_compiler::operators`), not a class hierarchy, so adding an
/// operator is one enum variant plus one operator table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    // Inputs
    UvInput,
    TimeInput,
    MouseInput,
    ResolutionInput,
    FloatConstant,
    Vec2Constant,
    Vec3Constant,

    // Arithmetic (polymorphic, arity 2)
    Add,
    Subtract,
    Multiply,
    Divide,

    // Scalar math (arity 1, -> float)
    Sqrt,
    Abs,
    Sin,
    Cos,
    Tan,
    Floor,
    Ceil,
    Fract,

    // Clamping family (polymorphic, arity 3)
    Clamp,
    /// `mix`/`lerp` are the same operator under two wire-format names.
    Mix,
    Smoothstep,
    Step,

    // Vector ops
    Dot,
    Cross,
    Normalize,
    Length,
    Distance,
    Reflect,

    // Constructors
    Vec2Construct,
    Vec3Construct,
    Vec4Construct,
    FloatToVec2,
    FloatToVec3,
    FloatToVec4,
    Vec2ToVec3,

    // Destructors
    SplitVec2,
    SplitVec3,
    SplitVec4,

    // Generators
    PerlinNoise,
    SimplexNoise,

    // SDF
    SdfSphere,
    SdfBox,
    SdfTorus,

    // Escape hatch
    CustomCode,

    // Terminal
    FragmentOutput,
}

/// Coarse category, used only for catalog/listing purposes (CLI `--list-ops`,
/// tests) — never by the compile pipeline itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeCategory {
    Input,
    Arithmetic,
    ScalarMath,
    Clamping,
    Vector,
    Constructor,
    Destructor,
    Generator,
    Sdf,
    Escape,
    Output,
}

/// Every variant, in declaration order. Used by the catalog listing; the
/// compile pipeline itself never needs to enumerate kinds.
pub const ALL: &[NodeKind] = {
    use NodeKind::*;
    &[
        UvInput,
        TimeInput,
        MouseInput,
        ResolutionInput,
        FloatConstant,
        Vec2Constant,
        Vec3Constant,
        Add,
        Subtract,
        Multiply,
        Divide,
        Sqrt,
        Abs,
        Sin,
        Cos,
        Tan,
        Floor,
        Ceil,
        Fract,
        Clamp,
        Mix,
        Smoothstep,
        Step,
        Dot,
        Cross,
        Normalize,
        Length,
        Distance,
        Reflect,
        Vec2Construct,
        Vec3Construct,
        Vec4Construct,
        FloatToVec2,
        FloatToVec3,
        FloatToVec4,
        Vec2ToVec3,
        SplitVec2,
        SplitVec3,
        SplitVec4,
        PerlinNoise,
        SimplexNoise,
        SdfSphere,
        SdfBox,
        SdfTorus,
        CustomCode,
        FragmentOutput,
    ]
};

impl NodeKind {
    pub fn category(self) -> NodeCategory {
        use NodeCategory::*;
        use NodeKind::*;
        match self {
            UvInput | TimeInput | MouseInput | ResolutionInput | FloatConstant
            | Vec2Constant | Vec3Constant => Input,
            Add | Subtract | Multiply | Divide => Arithmetic,
            Sqrt | Abs | Sin | Cos | Tan | Floor | Ceil | Fract => ScalarMath,
            Clamp | Mix | Smoothstep | Step => Clamping,
            Dot | Cross | Normalize | Length | Distance | Reflect => Vector,
            Vec2Construct | Vec3Construct | Vec4Construct | FloatToVec2 | FloatToVec3
            | FloatToVec4 | Vec2ToVec3 => Constructor,
            SplitVec2 | SplitVec3 | SplitVec4 => Destructor,
            PerlinNoise | SimplexNoise => Generator,
            SdfSphere | SdfBox | SdfTorus => Sdf,
            CustomCode => Escape,
            FragmentOutput => Output,
        }
    }

    /// True for the unique terminal sink kind.
    pub fn is_terminal(self) -> bool {
        matches!(self, NodeKind::FragmentOutput)
    }

    /// Human-readable tag, matching the `snake_case` wire representation.
    pub fn tag(self) -> &'static str {
        use NodeKind::*;
        match self {
            UvInput => "uv_input",
            TimeInput => "time_input",
            MouseInput => "mouse_input",
            ResolutionInput => "resolution_input",
            FloatConstant => "float_constant",
            Vec2Constant => "vec2_constant",
            Vec3Constant => "vec3_constant",
            Add => "add",
            Subtract => "subtract",
            Multiply => "multiply",
            Divide => "divide",
            Sqrt => "sqrt",
            Abs => "abs",
            Sin => "sin",
            Cos => "cos",
            Tan => "tan",
            Floor => "floor",
            Ceil => "ceil",
            Fract => "fract",
            Clamp => "clamp",
            Mix => "mix",
            Smoothstep => "smoothstep",
            Step => "step",
            Dot => "dot",
            Cross => "cross",
            Normalize => "normalize",
            Length => "length",
            Distance => "distance",
            Reflect => "reflect",
            Vec2Construct => "vec2_construct",
            Vec3Construct => "vec3_construct",
            Vec4Construct => "vec4_construct",
            FloatToVec2 => "float_to_vec2",
            FloatToVec3 => "float_to_vec3",
            FloatToVec4 => "float_to_vec4",
            Vec2ToVec3 => "vec2_to_vec3",
            SplitVec2 => "split_vec2",
            SplitVec3 => "split_vec3",
            SplitVec4 => "split_vec4",
            PerlinNoise => "perlin_noise",
            SimplexNoise => "simplex_noise",
            SdfSphere => "sdf_sphere",
            SdfBox => "sdf_box",
            SdfTorus => "sdf_torus",
            CustomCode => "custom_code",
            FragmentOutput => "fragment_output",
        }
    }

    /// Resolves a wire-format tag to a `NodeKind`, or `None` for an
    /// unrecognized tag (the validator turns that into `ErrorKind::UnknownKind`).
    ///
    /// `lerp` is accepted as an alias for `mix` — the spec fixes one
    /// canonical operator for the two call-site spellings.
    pub fn from_tag(tag: &str) -> Option<NodeKind> {
        use NodeKind::*;
        Some(match tag {
            "uv_input" => UvInput,
            "time_input" => TimeInput,
            "mouse_input" => MouseInput,
            "resolution_input" => ResolutionInput,
            "float_constant" => FloatConstant,
            "vec2_constant" => Vec2Constant,
            "vec3_constant" => Vec3Constant,
            "add" => Add,
            "subtract" => Subtract,
            "multiply" => Multiply,
            "divide" => Divide,
            "sqrt" => Sqrt,
            "abs" => Abs,
            "sin" => Sin,
            "cos" => Cos,
            "tan" => Tan,
            "floor" => Floor,
            "ceil" => Ceil,
            "fract" => Fract,
            "clamp" => Clamp,
            "mix" | "lerp" => Mix,
            "smoothstep" => Smoothstep,
            "step" => Step,
            "dot" => Dot,
            "cross" => Cross,
            "normalize" => Normalize,
            "length" => Length,
            "distance" => Distance,
            "reflect" => Reflect,
            "vec2_construct" => Vec2Construct,
            "vec3_construct" => Vec3Construct,
            "vec4_construct" => Vec4Construct,
            "float_to_vec2" => FloatToVec2,
            "float_to_vec3" => FloatToVec3,
            "float_to_vec4" => FloatToVec4,
            "vec2_to_vec3" => Vec2ToVec3,
            "split_vec2" => SplitVec2,
            "split_vec3" => SplitVec3,
            "split_vec4" => SplitVec4,
            "perlin_noise" => PerlinNoise,
            "simplex_noise" => SimplexNoise,
            "sdf_sphere" => SdfSphere,
            "sdf_box" => SdfBox,
            "sdf_torus" => SdfTorus,
            "custom_code" => CustomCode,
            "fragment_output" => FragmentOutput,
            _ => return None,
        })
    }
}
