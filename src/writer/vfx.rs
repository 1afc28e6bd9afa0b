//! Entity templates appended to item asset descriptors.

use serde_json::{json, Value};

use crate::types::VisualEffect;

const BEAM_PARTICLES: &str =
    "data/hd/vfx/particles/overlays/object/horadric_light/fx_horadric_light.particles";
const GLITTER_PARTICLES: &str =
    "data/hd/vfx/particles/overlays/paladin/aura_fanatic/aura_fanatic.particles";
const FLASH_PARTICLES: &str =
    "data/hd/vfx/particles/overlays/common/valkyriestart/valkriestart_overlay.particles";

fn transform_component() -> Value {
    json!({
        "type": "TransformDefinitionComponent",
        "name": "component_transform1",
        "position": {"x": 0, "y": 0, "z": 0},
        "orientation": {"x": 0, "y": 0, "z": 0, "w": 1},
        "scale": {"x": 1, "y": 1, "z": 1},
        "inheritOnlyPosition": false
    })
}

fn vfx_component(name: &str, filename: &str) -> Value {
    json!({
        "type": "VfxDefinitionComponent",
        "name": name,
        "filename": filename,
        "hardKillOnDestroy": false
    })
}

fn entity_name(vfx: VisualEffect) -> &'static str {
    match vfx {
        VisualEffect::Beam => "entity_beam",
        VisualEffect::Glitter => "entity_glitter",
        VisualEffect::Flash => "entity_flash",
    }
}

fn entity(vfx: VisualEffect) -> Value {
    let (id, components) = match vfx {
        VisualEffect::Beam => (
            987_654_321_001_u64,
            vec![
                transform_component(),
                vfx_component("entity_vfx_beam", BEAM_PARTICLES),
            ],
        ),
        VisualEffect::Glitter => (
            987_654_321_002,
            vec![vfx_component("entity_vfx_glitter", GLITTER_PARTICLES)],
        ),
        VisualEffect::Flash => (
            987_654_321_003,
            vec![
                transform_component(),
                vfx_component("entity_vfx_flash", FLASH_PARTICLES),
            ],
        ),
    };
    json!({
        "type": "Entity",
        "name": entity_name(vfx),
        "id": id,
        "components": components
    })
}

/// Add the entity for `vfx` to an asset descriptor. Adding an effect the
/// descriptor already carries is a no-op.
///
/// Returns a description of the problem if the descriptor does not have the
/// expected layout.
pub(crate) fn apply(doc: &mut Value, vfx: VisualEffect) -> Result<(), &'static str> {
    let name = entity_name(vfx);
    let present = doc
        .get("entities")
        .and_then(Value::as_array)
        .ok_or("missing 'entities' array")?
        .iter()
        .any(|e| e.get("name").and_then(Value::as_str) == Some(name));
    if present {
        return Ok(());
    }

    if vfx == VisualEffect::Beam {
        let particles = doc
            .get_mut("dependencies")
            .and_then(|deps| deps.get_mut("particles"))
            .and_then(Value::as_array_mut)
            .ok_or("missing 'dependencies.particles' array")?;
        particles.push(json!({ "path": BEAM_PARTICLES }));
    }

    if let Some(entities) = doc.get_mut("entities").and_then(Value::as_array_mut) {
        entities.push(entity(vfx));
    }
    Ok(())
}
