use pretty_assertions::assert_eq;
use shadeplay_params::{
    record_layouts, GpuRecord, SdfParams, SdfPrimitive, ShaderDeclarations, RECORD_NAMES,
};

#[test]
fn builtin_wgsl_matches_every_host_record() {
    let decls = ShaderDeclarations::parse().expect("built-in WGSL parses");
    let verified = decls.verify_all().expect("contract holds");
    assert_eq!(verified, RECORD_NAMES.len());
}

#[test]
fn shader_members_equal_host_fields() {
    let decls = ShaderDeclarations::parse().unwrap();
    for layout in record_layouts() {
        let shader = decls.struct_layout(layout.name).unwrap();
        let host: Vec<(String, usize, String)> = layout
            .data_fields()
            .map(|f| {
                let ty = f.kind.wgsl_type().unwrap_or_default();
                (f.name.to_string(), f.offset, ty.to_string())
            })
            .collect();
        let gpu: Vec<(String, usize, String)> = shader
            .members
            .iter()
            .map(|m| (m.name.clone(), m.offset, m.ty.clone()))
            .collect();

        assert_eq!(host, gpu, "record {}", layout.name);
        assert_eq!(layout.size, shader.span, "record {}", layout.name);
    }
}

#[test]
fn aggregation_surface_covers_every_shader_struct() {
    let decls = ShaderDeclarations::parse().unwrap();
    for name in decls.struct_names() {
        assert!(
            RECORD_NAMES.contains(&name.as_str()),
            "shader struct {name} is not exported"
        );
    }
}

#[test]
fn appending_a_primitive_keeps_existing_values() {
    // A kernel built against a later shape set (one extra value) must agree
    // with the host on every value that already exists.
    let mut source = String::new();
    for primitive in SdfPrimitive::ALL {
        source.push_str(&format!(
            "const {}: u32 = {}u;\n",
            primitive.shader_constant(),
            primitive.value()
        ));
    }
    source.push_str("const SDF_STAR: u32 = 13u;\n");

    let decls = ShaderDeclarations::parse_source(&source).unwrap();
    decls.verify_primitives().unwrap();
    assert_eq!(decls.constant_u32("SDF_STAR"), Some(13));
    assert!(SdfPrimitive::try_from(13).is_err());
}

#[test]
fn primitive_serializes_as_stable_id() {
    let json = serde_json::to_string(&SdfPrimitive::UnevenCapsule).unwrap();
    assert_eq!(json, "\"uneven_capsule\"");

    let back: SdfPrimitive = serde_json::from_str("\"rounded_box\"").unwrap();
    assert_eq!(back, SdfPrimitive::RoundedBox);
}

#[test]
fn arbitrary_field_values_roundtrip_bit_exact() {
    let values = [0.0f32, -0.0, 1.5e-38, f32::MAX, f32::MIN_POSITIVE, -123.456];
    for value in values {
        let params = SdfParams::new(SdfPrimitive::Heart)
            .with_intensity(value)
            .with_repetitions(value, -value)
            .with_rotation(value)
            .with_contrast(value);

        let back = SdfParams::from_bytes(params.as_bytes()).unwrap();
        assert_eq!(back.intensity.to_bits(), value.to_bits());
        assert_eq!(back.repetitions[1].to_bits(), (-value).to_bits());
        assert_eq!(back.rotation.to_bits(), value.to_bits());
        assert_eq!(back.contrast.to_bits(), value.to_bits());
    }
}
