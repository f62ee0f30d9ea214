use shading::{
    description::{DescriptionError, SceneDescription},
    material::{Material, RecordingState},
    preview::PreviewPass,
};

const DEMO: &str = include_str!("../scenes/demo.ron");

#[test]
fn demo_scene_builds() {
    let description = SceneDescription::parse(DEMO).unwrap();
    assert_eq!(description.materials.len(), 6);
    assert_eq!(description.camera.vw, 640);
    assert!(description.options.shading.single_sided);

    let materials = description.build_materials().unwrap();
    assert!(matches!(materials["marble"].as_ref(), Material::Marble(m) if m.octaves() == 4));
    assert!(matches!(materials["floor"].as_ref(), Material::Checkerboard(_)));

    let scene = description.build().unwrap();
    assert_eq!(scene.objects.len(), 3);
    assert_eq!(scene.lights.len(), 2);
}

#[test]
fn demo_scene_renders_small() {
    let mut description = SceneDescription::parse(DEMO).unwrap();
    description.camera.vw = 32;
    description.camera.vh = 18;
    let scene = description.build().unwrap();
    let pixels = scene.render();
    assert_eq!(pixels.len(), 32 * 18);
    // something other than background is visible
    assert!(pixels.iter().any(|p| p.r > 40));
}

#[test]
fn demo_scene_previews_in_three_passes() {
    let mut description = SceneDescription::parse(DEMO).unwrap();
    description.options.specular_fix = true;
    let scene = description.build().unwrap();
    let mut state = RecordingState::default();
    PreviewPass::new(scene.options.specular_fix).run(&scene.objects, &mut state);
    assert_eq!(state.draws.len(), 9);
}

#[test]
fn malformed_source_is_a_parse_error() {
    assert!(matches!(
        SceneDescription::parse("(materials: {"),
        Err(DescriptionError::Parse(_))
    ));
}

#[test]
fn dangling_reference_is_rejected_at_construction() {
    let source = r#"(
        materials: {
            "a": Phong(diffuse: (x: 1.0, y: 0.0, z: 0.0)),
            "board": Checkerboard(material1: "a", material2: "b"),
        },
        objects: [],
    )"#;
    let description = SceneDescription::parse(source).unwrap();
    assert!(matches!(
        description.build(),
        Err(DescriptionError::UnknownMaterial { ref name, .. }) if name == "b"
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    assert!(matches!(
        SceneDescription::load("does/not/exist.ron"),
        Err(DescriptionError::Io(_))
    ));
}
