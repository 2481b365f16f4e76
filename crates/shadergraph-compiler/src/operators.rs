//! The static operator table: one descriptor per `NodeKind`, data-directed
//! (a match expression, not a class hierarchy) as described in spec §9.
//! Process-wide and immutable — callable from any number of threads.

use std::fmt;

use shadergraph_ir::NodeKind;

/// The concrete GLSL type grammar a node's output can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlslType {
    Float,
    Vec2,
    Vec3,
    Vec4,
    Void,
}

impl GlslType {
    pub fn as_str(self) -> &'static str {
        match self {
            GlslType::Float => "float",
            GlslType::Vec2 => "vec2",
            GlslType::Vec3 => "vec3",
            GlslType::Vec4 => "vec4",
            GlslType::Void => "void",
        }
    }

    pub fn from_str(s: &str) -> Option<GlslType> {
        Some(match s {
            "float" => GlslType::Float,
            "vec2" => GlslType::Vec2,
            "vec3" => GlslType::Vec3,
            "vec4" => GlslType::Vec4,
            "void" => GlslType::Void,
            _ => return None,
        })
    }

    /// The type-appropriate default literal used when an input port is
    /// neither wired nor given a parameter fallback.
    pub fn default_literal(self) -> &'static str {
        match self {
            GlslType::Float => "0.0",
            GlslType::Vec2 => "vec2(0.0)",
            GlslType::Vec3 => "vec3(0.0)",
            GlslType::Vec4 => "vec4(0.0)",
            GlslType::Void => "/* void */",
        }
    }
}

impl fmt::Display for GlslType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a node's output type is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputType {
    /// Fixed at table-definition time.
    Fixed(GlslType),
    /// Resolved from the type of the first connected input (port priority
    /// `input`, `input1`, `input2`, ...); falls back to `float` if no input
    /// is connected.
    Polymorphic,
    /// Resolved from a named node parameter holding a type string
    /// (`custom_code`'s `return_type`), defaulting to `float` if absent or
    /// unrecognized.
    FromParameter(&'static str),
}

/// The static record describing one node kind's arity, type, GLSL
/// statement template, and transitive dependencies.
#[derive(Debug, Clone, Copy)]
pub struct OperatorDescriptor {
    /// Number of data inputs consumed (the emitter substitutes
    /// `{input1}..{inputN}` in the template for this many ports).
    pub arity: usize,
    pub output_type: OutputType,
    /// A statement pattern with placeholders `{output}`, `{type}`,
    /// `{input1}..{inputN}`, plus any parameter placeholders.
    pub glsl_template: &'static str,
    pub required_uniforms: &'static [&'static str],
    pub required_helpers: &'static [&'static str],
}

const fn op(
    arity: usize,
    output_type: OutputType,
    glsl_template: &'static str,
    required_uniforms: &'static [&'static str],
    required_helpers: &'static [&'static str],
) -> OperatorDescriptor {
    OperatorDescriptor {
        arity,
        output_type,
        glsl_template,
        required_uniforms,
        required_helpers,
    }
}

/// Looks up the static descriptor for a node kind. Total over `NodeKind` —
/// every variant has exactly one entry.
pub fn descriptor(kind: NodeKind) -> OperatorDescriptor {
    use GlslType::*;
    use NodeKind::*;
    use OutputType::*;

    match kind {
        UvInput => op(
            0,
            Fixed(Vec2),
            "vec2 {output} = fragCoord / iResolution.xy;",
            &["iResolution"],
            &[],
        ),
        TimeInput => op(0, Fixed(Float), "float {output} = iTime;", &["iTime"], &[]),
        MouseInput => op(
            0,
            Fixed(Vec2),
            "vec2 {output} = iMouse.xy;",
            &["iMouse"],
            &[],
        ),
        ResolutionInput => op(
            0,
            Fixed(Vec3),
            "vec3 {output} = vec3(iResolution, 0.0);",
            &["iResolution"],
            &[],
        ),
        FloatConstant => op(0, Fixed(Float), "float {output} = {value};", &[], &[]),
        Vec2Constant => op(0, Fixed(Vec2), "vec2 {output} = vec2({x}, {y});", &[], &[]),
        Vec3Constant => op(
            0,
            Fixed(Vec3),
            "vec3 {output} = vec3({x}, {y}, {z});",
            &[],
            &[],
        ),

        Add => op(2, Polymorphic, "{type} {output} = {input1} + {input2};", &[], &[]),
        Subtract => op(2, Polymorphic, "{type} {output} = {input1} - {input2};", &[], &[]),
        Multiply => op(2, Polymorphic, "{type} {output} = {input1} * {input2};", &[], &[]),
        Divide => op(2, Polymorphic, "{type} {output} = {input1} / {input2};", &[], &[]),

        Sqrt => op(1, Fixed(Float), "float {output} = sqrt({input1});", &[], &[]),
        Abs => op(1, Fixed(Float), "float {output} = abs({input1});", &[], &[]),
        Sin => op(1, Fixed(Float), "float {output} = sin({input1});", &[], &[]),
        Cos => op(1, Fixed(Float), "float {output} = cos({input1});", &[], &[]),
        Tan => op(1, Fixed(Float), "float {output} = tan({input1});", &[], &[]),
        Floor => op(1, Fixed(Float), "float {output} = floor({input1});", &[], &[]),
        Ceil => op(1, Fixed(Float), "float {output} = ceil({input1});", &[], &[]),
        Fract => op(1, Fixed(Float), "float {output} = fract({input1});", &[], &[]),

        Clamp => op(
            3,
            Polymorphic,
            "{type} {output} = clamp({input1}, {input2}, {input3});",
            &[],
            &[],
        ),
        Mix => op(
            3,
            Polymorphic,
            "{type} {output} = mix({input1}, {input2}, {input3});",
            &[],
            &[],
        ),
        Smoothstep => op(
            3,
            Polymorphic,
            "{type} {output} = smoothstep({input1}, {input2}, {input3});",
            &[],
            &[],
        ),
        // GLSL's step(edge, x) is binary; the third port is accepted for
        // family uniformity with clamp/mix/smoothstep but left unused.
        Step => op(
            3,
            Polymorphic,
            "{type} {output} = step({input1}, {input2});",
            &[],
            &[],
        ),

        Dot => op(2, Fixed(Float), "float {output} = dot({input1}, {input2});", &[], &[]),
        Cross => op(2, Fixed(Vec3), "vec3 {output} = cross({input1}, {input2});", &[], &[]),
        Normalize => op(1, Polymorphic, "{type} {output} = normalize({input1});", &[], &[]),
        Length => op(1, Fixed(Float), "float {output} = length({input1});", &[], &[]),
        Distance => op(
            2,
            Fixed(Float),
            "float {output} = distance({input1}, {input2});",
            &[],
            &[],
        ),
        Reflect => op(
            2,
            Polymorphic,
            "{type} {output} = reflect({input1}, {input2});",
            &[],
            &[],
        ),

        Vec2Construct => op(2, Fixed(Vec2), "vec2 {output} = vec2({input1}, {input2});", &[], &[]),
        Vec3Construct => op(
            3,
            Fixed(Vec3),
            "vec3 {output} = vec3({input1}, {input2}, {input3});",
            &[],
            &[],
        ),
        Vec4Construct => op(
            4,
            Fixed(Vec4),
            "vec4 {output} = vec4({input1}, {input2}, {input3}, {input4});",
            &[],
            &[],
        ),
        FloatToVec2 => op(1, Fixed(Vec2), "vec2 {output} = vec2({input1});", &[], &[]),
        FloatToVec3 => op(1, Fixed(Vec3), "vec3 {output} = vec3({input1});", &[], &[]),
        FloatToVec4 => op(1, Fixed(Vec4), "vec4 {output} = vec4({input1});", &[], &[]),
        Vec2ToVec3 => op(1, Fixed(Vec3), "vec3 {output} = vec3({input1}, 0.0);", &[], &[]),

        // Destructors alias their input vector under the node's own output
        // variable; the emitter resolves a downstream `source_port` of
        // `x`/`y`/`z`/`w` to `{output}.<port>` rather than a new statement.
        SplitVec2 => op(1, Fixed(Vec2), "vec2 {output} = {input1};", &[], &[]),
        SplitVec3 => op(1, Fixed(Vec3), "vec3 {output} = {input1};", &[], &[]),
        SplitVec4 => op(1, Fixed(Vec4), "vec4 {output} = {input1};", &[], &[]),

        PerlinNoise => op(
            1,
            Fixed(Float),
            "float {output} = perlin({input1});",
            &[],
            &["perlin"],
        ),
        SimplexNoise => op(
            1,
            Fixed(Float),
            "float {output} = simplex({input1});",
            &[],
            &["simplex"],
        ),

        SdfSphere => op(
            2,
            Fixed(Float),
            "float {output} = length({input1}) - {input2};",
            &[],
            &[],
        ),
        SdfBox => op(
            2,
            Fixed(Float),
            "float {output} = length(max(abs({input1}) - {input2}, vec3(0.0)));",
            &[],
            &[],
        ),
        SdfTorus => op(
            2,
            Fixed(Float),
            "float {output} = sdf_torus_dist({input1}, {input2});",
            &[],
            &["sdf_torus_dist"],
        ),

        CustomCode => op(0, FromParameter("return_type"), "{type} {output} = {code};", &[], &[]),

        FragmentOutput => op(1, Fixed(Void), "fragColor = {input1};", &[], &[]),
    }
}
