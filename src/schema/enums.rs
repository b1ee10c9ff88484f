//! Enumerated value sets for schema fields
//!
//! Sets checked case-insensitively are spelled in upper case.

/// `PART.module`
pub const MODULE: &[&str] = &[
    "Part",
    "CompoundPart",
];

/// `PART.physicalSignificance`
pub const PHYSICAL_SIGNIFICANCE: &[&str] = &[
    "FULL",
    "NONE",
];

/// Tech tree node ids for `PART.TechRequired`
pub const TECH_REQUIRED: &[&str] = &[
    "Unresearcheable", // sic, as spelled in stock parts
    "Unresearchable",
    "actuators",
    "advAerodynamics",
    "advConstruction",
    "advElectrics",
    "advExploration",
    "advFlightControl",
    "advFuelSystems",
    "advLanding",
    "advMetalworks",
    "advRocketry",
    "advScienceTech",
    "advUnmanned",
    "advancedMotors",
    "aerodynamicSystems",
    "aerospaceTech",
    "automation",
    "aviation",
    "basicRocketry",
    "basicScience",
    "commandModules",
    "composites",
    "electrics",
    "electronics",
    "engineering101",
    "experimentalAerodynamics",
    "experimentalElectrics",
    "experimentalMotors",
    "experimentalScience",
    "fieldScience",
    "flightControl",
    "fuelSystems",
    "generalConstruction",
    "generalRocketry",
    "heavierRocketry",
    "heavyAerodynamics",
    "heavyLanding",
    "heavyRocketry",
    "highAltitudeFlight",
    "highPerformanceFuelSystems",
    "hypersonicFlight",
    "ionPropulsion",
    "landing",
    "largeElectrics",
    "largeUnmanned",
    "largeVolumeContainment",
    "metaMaterials",
    "miniaturization",
    "nanolathing",
    "nuclearPropulsion",
    "precisionEngineering",
    "precisionPropulsion",
    "propulsionSystems",
    "scienceTech",
    "spaceExploration",
    "specializedConstruction",
    "specializedControl",
    "specializedElectrics",
    "stability",
    "start",
    "supersonicFlight",
    "survivability",
    "unmannedTech",
    "veryHeavyRocketry",
];

/// Editor categories for `PART.category`
pub const CATEGORY: &[&str] = &[
    "Command",
    "Propulsion",
    "FuelTank",
    "Engine",
    "Aero",
    "Electrical",
    "Structural",
    "Utility",
    "Wheel",
    "Ground",
    "Thermal",
    "Coupling",
    "Payload",
    "Communication",
    "Science",
    "none",
    "Robotics",
    "Cargo",
    "Control",
    "Pods",
];

/// `PART.dragModelType`, matched case-insensitively
pub const DRAG_MODEL_TYPE: &[&str] = &[
    "SPHERICAL",
    "CYLINDRICAL",
    "CONIC",
    "OVERRIDE",
    "NONE",
    "CUBE",
    "DEFAULT",
];

/// `PART.vesselType`
pub const VESSEL_TYPE: &[&str] = &[
    "Debris",
    "SpaceObject",
    "Unknown",
    "Probe",
    "Relay",
    "Rover",
    "Lander",
    "Ship",
    "Plane",
    "Station",
    "Base",
    "EVA",
    "Flag",
    "DeployedScienceController",
    "DeployedSciencePart",
];

/// `RESOURCE_DEFINITION.flowMode`
pub const FLOW_MODE: &[&str] = &[
    "NO_FLOW",
    "ALL_VESSEL",
    "STAGE_PRIORITY_FLOW",
    "STACK_PRIORITY_SEARCH",
    "ALL_VESSEL_BALANCE",
    "STAGE_PRIORITY_FLOW_BALANCE",
    "STAGE_STACK_FLOW",
    "STAGE_STACK_FLOW_BALANCE",
    "NULL",
];

/// `RESOURCE_DEFINITION.transfer`
pub const TRANSFER: &[&str] = &[
    "NONE",
    "DIRECT",
    "PUMP",
];
