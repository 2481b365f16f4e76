#![forbid(unsafe_code)]

#[cfg(test)]
mod tests {
    use shadergraph_compiler::{compile, CompileRequest, ErrorKind};

    // ---- Golden fixtures (JSON contracts), one per spec scenario ----
    const S1_MINIMAL_FLOAT_JSON: &str = include_str!("../fixtures/s1_minimal_float.json");
    const S2_UV_PASSTHROUGH_JSON: &str = include_str!("../fixtures/s2_uv_passthrough.json");
    const S3_POLYMORPHIC_ARITHMETIC_JSON: &str =
        include_str!("../fixtures/s3_polymorphic_arithmetic.json");
    const S4_HELPER_REQUIRED_JSON: &str = include_str!("../fixtures/s4_helper_required.json");
    const S5_CYCLE_REJECTION_JSON: &str = include_str!("../fixtures/s5_cycle_rejection.json");
    const S6_MISSING_OUTPUT_JSON: &str = include_str!("../fixtures/s6_missing_output.json");

    fn request(json: &str) -> CompileRequest {
        serde_json::from_str(json).expect("fixture should deserialize as a CompileRequest")
    }

    #[test]
    fn s1_minimal_float_to_output() {
        let response = compile(&request(S1_MINIMAL_FLOAT_JSON));
        assert!(response.success);
        let code = response.code.unwrap();
        assert!(code.contains("float v_t = iTime;"));
        assert!(code.contains("fragColor = vec4(vec3(v_t), 1.0);"));
        assert_eq!(response.uniforms.len(), 1);
        assert_eq!(response.uniforms[0].name, "iTime");
        assert_eq!(response.uniforms[0].glsl_type, "float");
    }

    #[test]
    fn s2_uv_passthrough_coerces_vec2() {
        let response = compile(&request(S2_UV_PASSTHROUGH_JSON));
        assert!(response.success);
        let code = response.code.unwrap();
        assert!(code.contains("vec2 v_uv = fragCoord / iResolution.xy;"));
        assert!(code.contains("fragColor = vec4(v_uv, 0.0, 1.0);"));
    }

    #[test]
    fn s3_polymorphic_arithmetic_resolves_float() {
        let response = compile(&request(S3_POLYMORPHIC_ARITHMETIC_JSON));
        assert!(response.success);
        let code = response.code.unwrap();
        assert!(code.contains("float v_s = v_a + v_b;"));
        assert!(code.contains("fragColor = vec4(vec3(v_s), 1.0);"));
    }

    #[test]
    fn s4_helper_required_emits_perlin_once() {
        let response = compile(&request(S4_HELPER_REQUIRED_JSON));
        assert!(response.success);
        let code = response.code.unwrap();
        assert_eq!(code.matches("float perlin(vec2 p)").count(), 1);
        assert!(code.contains("float v_n = perlin(v_uv);"));
        assert_eq!(response.helper_functions, vec!["perlin".to_string()]);
    }

    #[test]
    fn s5_cycle_is_rejected_with_empty_code() {
        let response = compile(&request(S5_CYCLE_REJECTION_JSON));
        assert!(!response.success);
        assert!(response.code.is_none());
        assert_eq!(response.error.unwrap().kind, ErrorKind::CycleDetected);
    }

    #[test]
    fn s6_missing_output_is_rejected() {
        let response = compile(&request(S6_MISSING_OUTPUT_JSON));
        assert!(!response.success);
        assert_eq!(response.error.unwrap().kind, ErrorKind::MissingOutput);
    }
}

#[cfg(test)]
mod determinism;
