use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Canonical tags per discipline, fifteen each.
pub const TAGS_BY_DISCIPLINE: &[(&str, &[&str])] = &[
    (
        "Technical Art",
        &[
            "#Nanite",
            "#LODs",
            "#MeshOptimization",
            "#Polycount",
            "#AssetPipeline",
            "#DCCIntegration",
            "#Profiling",
            "#DrawCalls",
            "#MemoryBudget",
            "#UnrealInsights",
            "#GPU",
            "#CPU",
            "#BatchingInstancing",
            "#Streaming",
            "#TextureOptimization",
        ],
    ),
    (
        "Lighting & Rendering",
        &[
            "#Lumen",
            "#LumenGI",
            "#LumenReflections",
            "#RayTracing",
            "#VirtualShadowMaps",
            "#PostProcess",
            "#GlobalIllumination",
            "#TSR",
            "#AntiAliasing",
            "#Exposure",
            "#VolumetricFog",
            "#ScreenSpaceEffects",
            "#ColorGrading",
            "#PathTracing",
            "#LightBaking",
        ],
    ),
    (
        "Look Development (Materials)",
        &[
            "#Materials",
            "#MaterialEditor",
            "#Substrate",
            "#Shaders",
            "#Textures",
            "#UVs",
            "#MaterialInstances",
            "#MaterialFunctions",
            "#Decals",
            "#PBR",
            "#MaterialLayers",
            "#WorldPositionOffset",
            "#Tessellation",
            "#VirtualTextures",
            "#Transparency",
        ],
    ),
    (
        "Animation & Rigging",
        &[
            "#ControlRig",
            "#AnimationBlueprint",
            "#StateMachines",
            "#IK",
            "#Retargeting",
            "#MetaHumans",
            "#Sequencer",
            "#MotionMatching",
            "#RootMotion",
            "#AnimLayers",
            "#Skinning",
            "#BlendSpaces",
            "#Montages",
            "#AnimNotifies",
            "#FullBodyIK",
        ],
    ),
    (
        "VFX (Niagara)",
        &[
            "#Niagara",
            "#NiagaraSystems",
            "#NiagaraModules",
            "#ParticleSimulation",
            "#Fluids",
            "#Groom",
            "#ClothSimulation",
            "#ChaosPhysics",
            "#GPUParticles",
            "#DataInterfaces",
            "#RibbonRendering",
            "#MeshParticles",
            "#ScratchPad",
            "#EventHandlers",
            "#AttributeReader",
        ],
    ),
    (
        "World Building & Level Design",
        &[
            "#WorldPartition",
            "#PCG",
            "#Landscape",
            "#Foliage",
            "#Water",
            "#DataLayers",
            "#LevelStreaming",
            "#HLOD",
            "#LargeWorldCoordinates",
            "#Terrain",
            "#SplineMeshes",
            "#LevelInstances",
            "#WorldComposition",
            "#GeometryCollection",
            "#NavMesh",
        ],
    ),
    (
        "Blueprints",
        &[
            "#Blueprint",
            "#EventGraph",
            "#ConstructionScript",
            "#Functions",
            "#Macros",
            "#Variables",
            "#EventDispatchers",
            "#Interfaces",
            "#ActorCommunication",
            "#Debugging",
            "#FlowControl",
            "#AsyncNodes",
            "#LatentActions",
            "#BlueprintNativization",
            "#Casting",
        ],
    ),
    (
        "Game Logic & Systems",
        &[
            "#GameplayAbilitySystem",
            "#GameMode",
            "#GameState",
            "#PlayerController",
            "#Character",
            "#EnhancedInput",
            "#SaveSystem",
            "#AIController",
            "#BehaviorTrees",
            "#EQS",
            "#Subsystems",
            "#DataAssets",
            "#GameFeatures",
            "#SmartObjects",
            "#StateTree",
        ],
    ),
    (
        "C++ Programming",
        &[
            "#Cpp",
            "#UObject",
            "#AActor",
            "#GarbageCollection",
            "#Modules",
            "#Plugins",
            "#Reflection",
            "#Delegates",
            "#Multithreading",
            "#Slate",
            "#EditorExtensions",
            "#PropertySystem",
            "#UFUNCTION",
            "#UPROPERTY",
            "#BlueprintExposure",
        ],
    ),
    (
        "Networking",
        &[
            "#Replication",
            "#RPCs",
            "#NetRelevancy",
            "#BandwidthOptimization",
            "#DedicatedServer",
            "#ReplicationGraph",
            "#Ownership",
            "#Prediction",
            "#Rollback",
            "#SessionManagement",
            "#OnlineSubsystems",
            "#NetSerialize",
            "#NetConditions",
            "#PushModel",
            "#IrisReplication",
        ],
    ),
];

/// Abbreviations and spelling variants mapped to their canonical tag.
static TAG_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("#VSM", "#VirtualShadowMaps"),
        ("#GAS", "#GameplayAbilitySystem"),
        ("#ABP", "#AnimationBlueprint"),
        ("#BP", "#Blueprint"),
        ("#CPP", "#Cpp"),
        ("#RT", "#RayTracing"),
        ("#GI", "#GlobalIllumination"),
        ("#LWC", "#LargeWorldCoordinates"),
        ("#WPO", "#WorldPositionOffset"),
        ("#VT", "#VirtualTextures"),
        ("#OFPA", "#WorldPartition"),
        ("#EIS", "#EnhancedInput"),
        ("#BT", "#BehaviorTrees"),
        ("#VirtualizedGeometry", "#Nanite"),
        ("#NaniteVirtualGeometry", "#Nanite"),
        ("#TemporalSuperResolution", "#TSR"),
        ("#GlobalIllum", "#GlobalIllumination"),
        ("#AnimBlueprint", "#AnimationBlueprint"),
        ("#AnimBP", "#AnimationBlueprint"),
        ("#MatEditor", "#MaterialEditor"),
        ("#MatFunctions", "#MaterialFunctions"),
        ("#ParticleSystems", "#Niagara"),
        ("#Particles", "#Niagara"),
        ("#ChaosDestruction", "#ChaosPhysics"),
        ("#Chaos", "#ChaosPhysics"),
        ("#ProceduralGeneration", "#PCG"),
        ("#ProceduralContentGeneration", "#PCG"),
        ("#VisualScripting", "#Blueprint"),
        ("#Abilities", "#GameplayAbilitySystem"),
        ("#Input", "#EnhancedInput"),
        ("#InputSystem", "#EnhancedInput"),
        ("#Navigation", "#NavMesh"),
        ("#AINav", "#NavMesh"),
        ("#Skeletal", "#Skinning"),
        ("#SkeletalMesh", "#Skinning"),
        ("#Metahuman", "#MetaHumans"),
        ("#MetaHuman", "#MetaHumans"),
        ("#Cinematics", "#Sequencer"),
        ("#MovieScene", "#Sequencer"),
    ])
});

/// Prefixes `#` when missing and resolves aliases to the canonical tag.
pub fn normalize_tag(tag: &str) -> String {
    let tag = tag.trim();
    let prefixed = if tag.starts_with('#') {
        tag.to_string()
    } else {
        format!("#{tag}")
    };

    TAG_ALIASES
        .get(prefixed.as_str())
        .map(|canonical| canonical.to_string())
        .unwrap_or(prefixed)
}

pub fn tags_for_discipline(discipline: &str) -> &'static [&'static str] {
    TAGS_BY_DISCIPLINE
        .iter()
        .find(|(name, _)| *name == discipline)
        .map(|(_, tags)| *tags)
        .unwrap_or(&[])
}

pub fn is_known_tag(tag: &str) -> bool {
    TAGS_BY_DISCIPLINE
        .iter()
        .any(|(_, tags)| tags.contains(&tag))
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct TagCheck {
    pub valid: Vec<String>,
    pub invalid: Vec<String>,
}

/// Normalizes `tags`; a tag from any discipline is accepted.
pub fn check_tags(tags: &[String]) -> TagCheck {
    let mut result = TagCheck::default();
    for tag in tags {
        let normalized = normalize_tag(tag);
        if is_known_tag(&normalized) {
            result.valid.push(normalized);
        } else {
            result.invalid.push(normalized);
        }
    }
    result
}

/// Discipline tags followed by the caller's custom tags, without repeats.
pub fn merged_tags(discipline: &str, custom: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = tags_for_discipline(discipline)
        .iter()
        .map(|t| t.to_string())
        .collect();
    for tag in custom.iter().map(|t| normalize_tag(t)) {
        if !merged.contains(&tag) {
            merged.push(tag);
        }
    }
    merged
}
