//! Final assembly (spec §5.5): stitches uniform declarations, helper
//! function bodies, and the `mainImage` statement list into one GLSL
//! source string.

use crate::emit::Emitted;
use crate::helpers;

/// `iResolution` is the only vec2 uniform this compiler knows about;
/// everything else built-in nodes reference is a float.
fn uniform_glsl_type(name: &str) -> &'static str {
    if name == "iResolution" {
        "vec2"
    } else {
        "float"
    }
}

pub fn assemble(emitted: &Emitted) -> String {
    let mut uniform_names: Vec<&str> = emitted.uniforms.iter().copied().collect();
    uniform_names.sort_unstable();

    let mut source = String::new();
    for name in &uniform_names {
        source.push_str(&format!("uniform {} {};\n", uniform_glsl_type(name), name));
    }
    if !uniform_names.is_empty() {
        source.push('\n');
    }

    for name in &emitted.helpers {
        let body = helpers::body(name).expect("operator table only references registered helpers");
        source.push_str(body);
        source.push_str("\n\n");
    }

    source.push_str("void mainImage(out vec4 fragColor, in vec2 fragCoord) {\n");
    for stmt in &emitted.statements {
        source.push_str("  ");
        source.push_str(stmt);
        source.push('\n');
    }
    source.push_str("}\n");

    source
}
