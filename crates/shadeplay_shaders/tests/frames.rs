use pretty_assertions::assert_eq;
use shadeplay_params::{
    ExampleComputeShader1Params, ExampleComputeShader2Params, GpuRecord, SdfParams, SdfParamsV2, SdfPrimitive, SdfRevision,
    SineTransitionParams,
};
use shadeplay_shaders::{
    ComputeShaderDefinition, ExampleShader2, PlaygroundConfig, SdfShader, ShaderDefinition,
    ShaderKind, ShaderState,
};
use std::time::{Duration, Instant};

#[test]
fn every_kind_encodes_its_declared_length() {
    for kind in ShaderKind::ALL {
        let mut state = ShaderState::new(kind.definition());
        state.update_with_delta(0.0);
        state.update_with_delta(0.1);
        let frame = state.encode().unwrap();
        assert_eq!(frame.function_name, kind.id());
        assert_eq!(frame.bytes.len(), state.definition().byte_length(), "{kind}");
    }
}

#[test]
fn rotating_sdf_accumulates_across_frames() {
    let shader = SdfShader {
        selected_shape: SdfPrimitive::Pentagram,
        is_rotating: true,
        rotation: 0.25,
        rotation_speed: 0.5,
        ..Default::default()
    };
    let mut state = ShaderState::new(ShaderDefinition::Sdf(shader));

    let start = Instant::now();
    for step in 0..=4 {
        state.update(start + Duration::from_millis(250 * step));
    }

    let frame = state.encode().unwrap();
    let params = SdfParams::from_bytes(&frame.bytes).unwrap();
    assert_eq!(params.shape().unwrap(), SdfPrimitive::Pentagram);
    assert!((params.rotation - 0.75).abs() < 1e-6);
    assert_eq!(params.pattern_phase, 0.0);
}

#[test]
fn example_phases_start_on_first_frame() {
    let shader = ExampleShader2 {
        animation_rate: 2.0,
        hue_rotate_rate: 0.5,
        is_box: true,
    };
    let mut state = ShaderState::new(ShaderDefinition::Example2(shader));

    state.update_with_delta(3.0);
    let first = ExampleComputeShader2Params::from_bytes(&state.encode().unwrap().bytes).unwrap();
    assert_eq!(first, ExampleComputeShader2Params::new(0.0, 0.0, true));

    state.update_with_delta(1.0);
    let second = ExampleComputeShader2Params::from_bytes(&state.encode().unwrap().bytes).unwrap();
    assert_eq!(second, ExampleComputeShader2Params::new(2.0, 0.5, true));
    assert!(second.draws_box());
}

#[test]
fn switching_examples_starts_the_second_from_zero() {
    let mut state = ShaderState::new(ShaderKind::Example1.definition());
    state.update_with_delta(0.0);
    state.update_with_delta(2.0);

    state.set_definition(ShaderKind::Example2.definition());
    state.update_with_delta(0.5);
    let params = ExampleComputeShader2Params::from_bytes(&state.encode().unwrap().bytes).unwrap();
    assert_eq!(params, ExampleComputeShader2Params::new(0.0, 0.0, false));

    state.set_definition(ShaderKind::Example1.definition());
    state.update_with_delta(0.5);
    assert_eq!(
        ExampleComputeShader1Params::from_bytes(&state.encode().unwrap().bytes).unwrap(),
        ExampleComputeShader1Params {
            animation_phase: 2.5,
            hue_rotate_phase: 2.5,
        }
    );
}

#[test]
fn sine_transition_continues_after_switching_back() {
    let mut state = ShaderState::new(ShaderKind::SineTransition.definition());
    state.update_with_delta(0.0);
    state.update_with_delta(1.0);

    state.set_definition(ShaderKind::HelloWorld.definition());
    state.update_with_delta(5.0);

    state.set_definition(ShaderKind::SineTransition.definition());
    state.update_with_delta(0.5);

    let params = SineTransitionParams::from_bytes(&state.encode().unwrap().bytes).unwrap();
    assert_eq!(params.phase, 1.5);
}

#[test]
fn configured_revision_drives_sdf_encoding() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shadeplay.toml");
    std::fs::write(
        &path,
        r#"
[playground]
default_shader = "sdfDrawing"
preferred_fps = 30

[layout]
sdf_revision = "v2"
"#,
    )
    .unwrap();

    let config = PlaygroundConfig::load_from_path(&path).unwrap();
    assert_eq!(config.frame_interval(), Duration::from_secs_f64(1.0 / 30.0));

    let shader = SdfShader {
        selected_shape: SdfPrimitive::Ellipse,
        repetitions: 3.0,
        revision: config.layout.sdf_revision,
        ..Default::default()
    };
    let mut state = ShaderState::new(ShaderDefinition::Sdf(shader));
    assert_eq!(state.definition().kind(), config.default_shader_kind().unwrap());

    let frame = state.frame(Instant::now()).unwrap();
    assert_eq!(frame.bytes.len(), SdfRevision::V2.byte_len());

    let v2 = SdfParamsV2::from_bytes(&frame.bytes).unwrap();
    assert_eq!(v2.shape, SdfPrimitive::Ellipse.value());
    assert_eq!(v2.repetitions, [3.0, 3.0]);
}

#[test]
fn missing_config_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = PlaygroundConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, PlaygroundConfig::default());
}
