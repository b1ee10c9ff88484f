//! PART schema

use super::{
    BlockKind, BlockSchema, RequiredField, CATEGORY, DRAG_MODEL_TYPE, MODULE,
    PHYSICAL_SIGNIFICANCE, TECH_REQUIRED, VESSEL_TYPE,
};
use crate::tree::{ConfigNode, ConfigValue};
use crate::validators::FieldValidator::*;
use crate::validators::{EnumRule, FieldContext, FieldValidator};

const MESH_ADVICE: &str = "the value of 'mesh' is ignored and the first (ascii-sort) .mu file in the directory is used. use MODEL {} instead";

const REQUIRED: &[RequiredField] = &[
    RequiredField::error("name", "Missing field 'name'"),
    RequiredField::error("module", "Missing field 'module'"),
    RequiredField::error("TechRequired", "Missing field 'TechRequired'"),
    RequiredField::error("entryCost", "Missing field 'entryCost'"),
    RequiredField::error("cost", "Missing field 'cost'"),
    RequiredField::error("category", "Missing field 'category'"),
    RequiredField::error("title", "Missing field 'title'"),
    RequiredField::error("mass", "Missing field 'mass'"),

    RequiredField::warning("tags", "Missing field 'tags'"),
    RequiredField::warning("manufacturer", "Missing field 'manufacturer'"),
    RequiredField::warning("description", "Missing field 'description'"),
    RequiredField::warning("rescaleFactor", "rescaleFactor defaults to 1.25"),
    RequiredField::warning("attachRules", "attachRules defaults to not allowing attachment"),
    RequiredField::warning("dragModelType", "dragModelType defaults to 'default' (cube)"),
    RequiredField::warning("maximum_drag", "maximum_drag defaults to 0.1"),
    RequiredField::warning("minimum_drag", "minimum_drag defaults to 0.1"),
    RequiredField::warning("angularDrag", "angularDrag defaults to 2"),
    RequiredField::warning("crashTolerance", "crashTolerance defaults to 9"),
    RequiredField::warning("maxTemp", "maxTemp defaults to 2000 (Kelvin)"),
    RequiredField::warning("heatConductivity", "heatConductivity defaults to 0.12"),
    RequiredField::warning("skinInternalConductionMult", "skinInternalConductionMult defaults to 1"),
    RequiredField::warning("emissiveConstant", "emissiveConstant defaults to 0.4"),
];

const FIELDS: &[(&str, Option<FieldValidator>)] = &[
    ("name", None),
    ("module", Some(Enum(EnumRule::new(MODULE)))),
    ("author", None),
    ("mesh", Some(Discouraged(MESH_ADVICE))),
    ("scale", Some(PositiveNonzeroFloat)),
    ("rescaleFactor", Some(PositiveNonzeroFloat)),
    ("attachRules", Some(AttachRules)),
    ("TechRequired", Some(Enum(EnumRule::new(TECH_REQUIRED)))),
    ("entryCost", Some(PositiveInt)),
    ("cost", Some(PositiveFloat)),
    ("category", Some(Enum(EnumRule::new(CATEGORY)))),
    ("subcategory", Some(Ignored)),
    ("title", None),
    ("manufacturer", None),
    ("description", None),
    ("tags", None),
    ("mass", Some(PositiveNonzeroFloat)),
    ("dragModelType", Some(Enum(EnumRule::new(DRAG_MODEL_TYPE).case_insensitive()))),
    ("maximum_drag", Some(PositiveNonzeroFloat)),
    ("minimum_drag", Some(PositiveNonzeroFloat)),
    ("angularDrag", Some(PositiveNonzeroFloat)),
    ("crashTolerance", Some(PositiveNonzeroFloat)),
    ("maxTemp", Some(PositiveNonzeroFloat)),
    ("skinMaxTemp", Some(PositiveNonzeroFloat)),
    ("heatConductivity", Some(PositiveNonzeroFloat)),
    ("heatConvectiveConstant", Some(PositiveNonzeroFloat)),
    ("skinInternalConductionMult", Some(PositiveNonzeroFloat)),
    ("emissiveConstant", Some(PositiveNonzeroFloat)),
    ("thermalMassModifier", Some(PositiveNonzeroFloat)),
    ("CrewCapacity", Some(PositiveInt)),
    ("bulkheadProfiles", None),
    ("stackSymmetry", Some(PositiveInt)),
    ("breakingTorque", Some(PositiveNonzeroFloat)),
    ("breakingForce", Some(PositiveNonzeroFloat)),
    ("fuelCrossFeed", Some(Boolean)),
    ("inverseStageCarryover", Some(Boolean)),
    ("explosionPotential", Some(PositiveFloat)),
    ("vesselType", Some(Enum(EnumRule::new(VESSEL_TYPE)))),
    ("stageOffset", Some(PositiveInt)),
    ("childStageOffset", Some(PositiveInt)),
    ("CoMOffset", Some(Vector3)),
    ("CoLOffset", Some(Vector3)),
    ("CoPOffset", Some(Vector3)),
    ("CenterOfDisplacement", Some(Vector3)),
    ("CenterOfBuoyancy", Some(Vector3)),
    ("skinMassPerArea", Some(PositiveFloat)),
    ("stagingIcon", None),
    ("bodyLiftOnlyAttachName", None),
    ("bodyLiftOnlyUnattachedLift", Some(Boolean)),
    ("bodyLiftOnlyUnattachedLiftActual", Some(Boolean)),
    ("TechHidden", Some(Boolean)),
    ("buoyancyUseSine", Some(Boolean)),
    ("buoyancy", Some(PositiveFloat)),
    ("PhysicsSignificance", Some(PhysicsSignificance)),
    ("physicalSignificance", Some(Enum(EnumRule::new(PHYSICAL_SIGNIFICANCE)))),
    ("mirrorRefAxis", Some(Vector3)),
    ("radiatorMax", Some(PositiveNonzeroFloat)),
    ("boundsCentroidOffset", Some(Vector3)),
    ("partRendererBoundsIgnore", None),
    ("bodyLiftMultiplier", Some(PositiveNonzeroFloat)),
    ("buoyancyUseCubeNamed", None),
    ("initRotation", Some(Quaternion)),
    ("noAutoEVAMulti", Some(Boolean)),
    ("noAutoEVAAny", Some(Boolean)),
    ("iconCenter", Some(Ignored)),
    ("boundsMultiplier", Some(PositiveNonzeroFloat)),
    ("ActivatesEvenIfDisconnected", Some(Boolean)),
    ("radiatorHeadroom", Some(PositiveNonzeroFloat)),
    ("skipColliderIgnores", Some(Boolean)),
    ("mapActionsToSymmetryParts", Some(Boolean)),
    ("resourcePriorityUseParentInverseStage", Some(Boolean)),
];

pub(super) fn schema() -> BlockSchema {
    BlockSchema::new(BlockKind::Part)
        .with_required(REQUIRED)
        .with_fields(FIELDS)
        .with_prefix("node_", Some(NodeReference))
        .with_prefix("sound_", None)
        .with_prefix("fx_", None)
        .with_fallback(compound_part_field)
}

/// `CompoundPart` modules (struts, fuel lines) take a `maxLength`.
fn compound_part_field(part: &ConfigNode, field: &ConfigValue, cx: &mut FieldContext<'_>) -> bool {
    if field.name != "maxLength" || part.get_value("module") != Some("CompoundPart") {
        return false;
    }
    PositiveNonzeroFloat.check(&field.name, &field.value, field.line, cx);
    true
}
