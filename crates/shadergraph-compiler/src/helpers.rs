//! Helper-function registry: GLSL function bodies keyed by name, emitted
//! once (in first-required order) above `mainImage` when any scheduled node
//! references them.

/// Looks up a helper function's GLSL body by name. `None` for an
/// unregistered name — the operator table is the only thing allowed to
/// reference a helper, so this should never miss in practice.
pub fn body(name: &str) -> Option<&'static str> {
    match name {
        "perlin" => Some(PERLIN),
        "simplex" => Some(SIMPLEX),
        "sdf_torus_dist" => Some(SDF_TORUS_DIST),
        _ => None,
    }
}

const PERLIN: &str = "float perlin(vec2 p) {
    vec2 i = floor(p);
    vec2 f = fract(p);
    f = f * f * (3.0 - 2.0 * f);

    float a = sin(i.x * 12.9898 + i.y * 78.233) * 43758.5453;
    float b = sin((i.x + 1.0) * 12.9898 + i.y * 78.233) * 43758.5453;
    float c = sin(i.x * 12.9898 + (i.y + 1.0) * 78.233) * 43758.5453;
    float d = sin((i.x + 1.0) * 12.9898 + (i.y + 1.0) * 78.233) * 43758.5453;

    a = fract(a);
    b = fract(b);
    c = fract(c);
    d = fract(d);

    float ab = mix(a, b, f.x);
    float cd = mix(c, d, f.x);
    return mix(ab, cd, f.y);
}";

const SIMPLEX: &str = "float simplex(vec2 p) {
    return sin(p.x * 12.9898 + sin(p.y * 78.233) * 43758.5453);
}";

const SDF_TORUS_DIST: &str = "float sdf_torus_dist(vec3 p, vec2 t) {
    vec2 q = vec2(length(p.xz) - t.x, p.y);
    return length(q) - t.y;
}";
