//! Shader validation: both WGSL sources must parse and validate under naga,
//! so a broken shader fails in CI instead of at pipeline creation.

use orrery::shaders::{MESH_SHADER, STAR_SHADER};

fn validate_wgsl(name: &str, source: &str) {
    let module = naga::front::wgsl::parse_str(source)
        .unwrap_or_else(|e| panic!("{name}: WGSL parse error: {e:?}"));

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );
    validator
        .validate(&module)
        .unwrap_or_else(|e| panic!("{name}: WGSL validation error: {e:?}"));
}

#[test]
fn test_mesh_shader_validates() {
    validate_wgsl("mesh.wgsl", MESH_SHADER);
}

#[test]
fn test_star_shader_validates() {
    validate_wgsl("stars.wgsl", STAR_SHADER);
}

#[test]
fn test_shaders_declare_expected_entry_points() {
    for source in [MESH_SHADER, STAR_SHADER] {
        assert!(source.contains("fn vs_main"));
        assert!(source.contains("fn fs_main"));
    }
}
