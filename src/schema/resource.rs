//! RESOURCE, RESOURCE_DEFINITION and RESOURCE_DRAIN_DEFINITION schemas

use super::{BlockKind, BlockSchema, RequiredField, FLOW_MODE, TRANSFER};
use crate::validators::FieldValidator::*;
use crate::validators::{EnumRule, FieldValidator};

/// A tank's contents, nested in PART
const RESOURCE_REQUIRED: &[RequiredField] = &[
    RequiredField::error("name", "Missing field 'name'"),
    RequiredField::error("amount", "Missing field 'amount'"),
    RequiredField::error("maxAmount", "Missing field 'maxAmount'"),
];

const RESOURCE_FIELDS: &[(&str, Option<FieldValidator>)] = &[
    ("name", Some(ResourceName)),
    ("amount", Some(PositiveFloat)),
    ("maxAmount", Some(PositiveFloat)),
];

const DEFINITION_REQUIRED: &[RequiredField] = &[
    RequiredField::error("name", "Missing field 'name'"),
    RequiredField::warning("displayName", "'displayName' defaults to resource name"),
    RequiredField::warning("abbreviation", "'abbreviation' defaults to displayName[;2]"),
    RequiredField::warning("density", "'density' defaults to 1"),
    RequiredField::warning("volume", "'volume' defaults to 5"),
    RequiredField::warning("unitCost", "'unitCost' defaults to 0"),
    RequiredField::warning("hsp", "'hsp' defaults to 0"),
    RequiredField::warning("isTweakable", "'isTweakable' defaults to true"),
    RequiredField::warning("isVisible", "'isVisible' defaults to true"),
    RequiredField::warning("flowMode", "'flowMode' defaults to NO_FLOW"),
    RequiredField::warning("transfer", "'transfer' defaults to NONE"),
    RequiredField::warning("color", "'color' defaults to 1,1,1 (white)"),
];

const DEFINITION_FIELDS: &[(&str, Option<FieldValidator>)] = &[
    ("name", None),
    ("displayName", None),
    ("abbreviation", None),
    ("density", Some(PositiveFloat)),
    ("volume", Some(PositiveFloat)),
    ("unitCost", Some(PositiveFloat)),
    ("hsp", Some(PositiveFloat)),
    ("isTweakable", Some(Boolean)),
    ("isVisible", Some(Boolean)),
    ("isDrainable", Some(Boolean)),
    ("flowMode", Some(Enum(EnumRule::new(FLOW_MODE)))),
    ("transfer", Some(Enum(EnumRule::new(TRANSFER)))),
    ("color", Some(Color)),
];

const DRAIN_REQUIRED: &[RequiredField] = &[
    RequiredField::warning("isDrainable", "'isDrainable' defaults to true"),
    RequiredField::warning("showDrainFX", "'showDrainFX' defaults to true"),
    RequiredField::warning("drainFXPriority", "'drainFXPriority' defaults to 5"),
    RequiredField::warning("drainForceISP", "'drainForceISP' defaults to 50"),
    RequiredField::warning("drainFXDefinition", "'drainFXDefinition' defaults to gasDraining"),
];

const DRAIN_FIELDS: &[(&str, Option<FieldValidator>)] = &[
    ("isDrainable", Some(Boolean)),
    ("showDrainFX", Some(Boolean)),
    ("drainFXPriority", Some(PositiveInt)),
    ("drainForceISP", Some(PositiveNonzeroFloat)),
    ("drainFXDefinition", None),
];

pub(super) fn resource_schema() -> BlockSchema {
    BlockSchema::new(BlockKind::Resource)
        .with_required(RESOURCE_REQUIRED)
        .with_fields(RESOURCE_FIELDS)
}

pub(super) fn definition_schema() -> BlockSchema {
    BlockSchema::new(BlockKind::ResourceDefinition)
        .with_required(DEFINITION_REQUIRED)
        .with_fields(DEFINITION_FIELDS)
}

pub(super) fn drain_definition_schema() -> BlockSchema {
    BlockSchema::new(BlockKind::ResourceDrainDefinition)
        .with_required(DRAIN_REQUIRED)
        .with_fields(DRAIN_FIELDS)
}
