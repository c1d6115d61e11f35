/// Documentation page slugs confirmed to exist under [`DOCS_BASE_URL`].
///
/// Kept sorted so lookups can use a binary search.
///
/// [`DOCS_BASE_URL`]: super::DOCS_BASE_URL
pub const KNOWN_DOCUMENTATION_SLUGS: &[&str] = &[
    "actor-editor-context-in-unreal-engine",
    "actor-programming-in-unreal-engine",
    "actors-and-geometry-in-unreal-engine",
    "actors-in-unreal-engine",
    "add-post-process-volumes",
    "ai-debugging-in-unreal-engine",
    "ai-perception-in-unreal-engine",
    "alembic-file-importer-in-unreal-engine",
    "ambient-occlusion-in-unreal-engine",
    "anatomy-of-a-blueprint-in-unreal-engine",
    "android-support-for-unreal-engine",
    "animating-characters-and-objects-in-unreal-engine",
    "animating-with-control-rig-in-unreal-engine",
    "animation-blueprints-in-unreal-engine",
    "animation-curves-in-unreal-engine",
    "animation-montages-in-unreal-engine",
    "animation-notifies-in-unreal-engine",
    "animation-retargeting-in-unreal-engine",
    "animation-sequences-in-unreal-engine",
    "animation-state-machines-in-unreal-engine",
    "anti-aliasing-and-upscaling-in-unreal-engine",
    "artificial-intelligence-in-unreal-engine",
    "artist-quick-start-in-unreal-engine",
    "artists-tools-and-workflows-for-rendering-in-unreal-engine",
    "assembly-pcg",
    "assets-and-content-packs-in-unreal-engine",
    "asynccompute-in-unreal-engine",
    "attenuation-in-unreal-engine",
    "audio-analysis-and-visualization-in-unreal-engine",
    "audio-debugging-in-unreal-engine",
    "audio-gameplay-volumes-in-unreal-engine",
    "audio-in-unreal-engine",
    "audio-memory-management-in-unreal-engine",
    "audio-mixing-in-unreal-engine",
    "audio-modulation-in-unreal-engine",
    "audio-volume-actors-in-unreal-engine",
    "automation-test-framework-in-unreal-engine",
    "automotive-hmi-development-in-unreal-engine",
    "basic-scripting-with-blueprints-in-unreal-engine",
    "basics-of-user-interface-development-in-unreal-engine",
    "beam-emitters-in-unreal-engine",
    "behavior-tree-decorators-in-unreal-engine",
    "behavior-tree-in-unreal-engine---quick-start-guide",
    "behavior-tree-services-in-unreal-engine",
    "behavior-tree-tasks-in-unreal-engine",
    "behavior-trees-in-unreal-engine",
    "bink-video-for-unreal-engine",
    "blend-spaces-in-unreal-engine",
    "bloom-in-unreal-engine",
    "blueprint-best-practices-in-unreal-engine",
    "blueprint-communication-usage-in-unreal-engine",
    "blueprint-debugger-in-unreal-engine",
    "blueprint-editor-cheat-sheet-in-unreal-engine",
    "blueprint-interface-in-unreal-engine",
    "blueprint-namespaces-in-unreal-engine",
    "blueprint-splines-in-unreal-engine",
    "blueprint-variables-in-unreal-engine",
    "blueprint-workflows-in-unreal-engine",
    "blueprints-nativization-in-unreal-engine",
    "blueprints-visual-scripting-in-unreal-engine",
    "bsp-brushes-in-unreal-engine",
    "build-configuration-in-unreal-engine",
    "build-operations-cooking-packaging-deploying-and-running-projects-in-unreal-engine",
    "building-packaging-and-publishing-unreal-engine-projects-for-ios-tvos-and-ipados",
    "building-virtual-worlds-in-unreal-engine",
    "building-your-ui-in-unreal-engine",
    "camera-animation-in-unreal-engine",
    "camera-components-in-unreal-engine",
    "camera-lens-calibration-in-unreal-engine",
    "cameras-in-unreal-engine",
    "capturing-media-in-unreal-engine",
    "chaos-destruction-in-unreal-engine",
    "chaos-physics-in-unreal-engine",
    "characters-in-unreal-engine",
    "cinematics-and-movie-making-in-unreal-engine",
    "class-creation-basics-in-unreal-engine",
    "cloth-simulation-in-unreal-engine",
    "collision-in-unreal-engine",
    "collision-responses-in-unreal-engine",
    "collisions-in-niagara-for-unreal-engine",
    "color-correct-regions-in-unreal-engine",
    "color-management-with-opencolorio-in-unreal-engine",
    "color-picker-in-unreal-engine",
    "commandlets-in-unreal-engine",
    "common-memory-and-cpu-performance-considerations-in-unreal-engine",
    "communicating-with-media-components-from-unreal-engine",
    "components-in-unreal-engine",
    "connecting-to-and-managing-devices-in-unreal-engine",
    "console-variables-editor",
    "consoles-development-in-unreal-engine",
    "container-deployments-and-images-for-unreal-editor-and-unreal-engine",
    "containers-in-unreal-engine",
    "content-browser-in-unreal-engine",
    "content-examples-sample-project-for-unreal-engine",
    "control-rig-editor-in-unreal-engine",
    "control-rig-in-animation-blueprints-in-unreal-engine",
    "control-rig-in-unreal-engine",
    "controllers-in-unreal-engine",
    "controlling-inputs-to-virtual-camera-controls-in-unreal-engine",
    "cooking-content-and-creating-chunks-in-unreal-engine",
    "cooking-content-in-unreal-engine",
    "coordinate-system-and-spaces-in-unreal-engine",
    "cpu-profiling-in-unreal-engine",
    "crash-reporting-in-unreal-engine",
    "creating-a-new-global-shader-as-a-plugin-in-unreal-engine",
    "creating-and-using-lods-in-unreal-engine",
    "creating-custom-modules-in-niagara-effects-for-unreal-engine",
    "creating-plugins-in-unreal-engine",
    "creating-user-interfaces-with-umg-and-slate-in-unreal-engine",
    "creating-visual-effects-in-niagara-for-unreal-engine",
    "customizable-sequencer-track-in-unreal-engine",
    "customizing-keyboard-shortcuts-in-unreal-engine",
    "customizing-unreal-engine",
    "data-channels-in-niagara-for-unreal-engine",
    "data-driven-gameplay-elements-in-unreal-engine",
    "datasmith-plugins-for-unreal-engine",
    "debugging-and-optimization-for-mobile-in-unreal-engine",
    "debugging-and-optimization-in-niagara-effects-for-unreal-engine",
    "debugging-for-android-devices-in-unreal-engine",
    "decals-in-unreal-engine",
    "dedicated-servers-in-unreal-engine",
    "deformer-graph-in-unreal-engine",
    "delegates-and-lambda-functions-in-unreal-engine",
    "delegates-in-unreal-engine",
    "depth-of-field-in-unreal-engine",
    "design-user-interfaces-for-xr-experiences-in-unreal-engine",
    "designing-ui-for-accessibility-in-unreal-engine",
    "designing-visuals-rendering-and-graphics-with-unreal-engine",
    "destructible-actors-in-unreal-engine",
    "developing-for-handheld-augmented-reality-experiences-in-unreal-engine",
    "developing-for-head-mounted-experiences-with-openxr-in-unreal-engine",
    "developing-for-xr-experiences-in-unreal-engine",
    "developing-guides-for-android-in-unreal-engine",
    "developing-macos-projects-in-unreal-engine",
    "developing-on-ios-tvos-and-ipados-in-unreal-engine",
    "development-tools-for-mobile-applications",
    "directional-lights-in-unreal-engine",
    "displaying-your-ui-in-unreal-engine",
    "dmx-in-unreal-engine",
    "draw-call-optimization-in-unreal-engine",
    "editor-scripting-in-unreal-engine",
    "editor-utility-widgets-in-unreal-engine",
    "engine-feature-examples-for-unreal-engine",
    "enhanced-input-in-unreal-engine",
    "environment-query-system-in-unreal-engine",
    "environment-query-system-overview-in-unreal-engine",
    "environmental-light-with-fog-clouds-sky-and-atmosphere-in-unreal-engine",
    "epic-cplusplus-coding-standard-for-unreal-engine",
    "event-dispatchers-in-unreal-engine",
    "event-graph-in-unreal-engine",
    "experimental-features",
    "exponential-height-fog-in-unreal-engine",
    "exporting-datasmith-content-from-revit-to-unreal-engine",
    "external-audio-control-in-unreal-engine",
    "fbx-content-pipeline",
    "features-and-properties-of-lights-in-unreal-engine",
    "fluid-simulation-in-unreal-engine",
    "fluid-simulation-tutorials-in-unreal-engine",
    "foliage-tool-in-unreal-engine",
    "forward-shading-renderer-in-unreal-engine",
    "free-epic-games-content-for-unreal-engine",
    "fshadercache-in-unreal-engine",
    "game-features-and-modular-gameplay-in-unreal-engine",
    "game-mode-and-game-state-in-unreal-engine",
    "gameplay-ability-system-in-unreal-engine",
    "gameplay-camera-system",
    "gameplay-classes-in-unreal-engine",
    "gameplay-effects-in-unreal-engine",
    "gameplay-framework-in-unreal-engine",
    "gameplay-systems-in-unreal-engine",
    "gameplay-tags-in-unreal-engine",
    "gameplay-targeting-system-in-unreal-engine",
    "gameplay-tasks-in-unreal-engine",
    "gameplay-timers-in-unreal-engine",
    "gameplay-tutorials-for-unreal-engine",
    "gauntlet-automation-framework-in-unreal-engine",
    "general-features-of-rendering-in-unreal-engine",
    "generating-lightmap-uvs-in-unreal-engine",
    "geographically-accurate-sun-positioning-tool-in-unreal-engine",
    "geometry-editing-in-unreal-engine",
    "georeferencing-a-level-in-unreal-engine",
    "get-started",
    "getting-started-and-setup-for-android-projects-in-unreal-engine",
    "getting-started-and-setup-guides-for-ios-and-tvos-in-unreal-engine",
    "getting-started-in-niagara-effects-for-unreal-engine",
    "getting-started-with-mobile-development-in-unreal-engine",
    "getting-started-with-modeling-mode",
    "getting-started-with-unreal-engine",
    "getting-started-with-xr-development-in-unreal-engine",
    "git-source-control-in-unreal-engine",
    "global-illumination-in-unreal-engine",
    "gpu-lightmass-global-illumination-in-unreal-engine",
    "gpu-particles-in-unreal-engine",
    "gpu-profiling-in-unreal-engine",
    "gpudump-viewer-tool-in-unreal-engine",
    "graphics-programming-for-unreal-engine",
    "graphics-programming-overview-for-unreal-engine",
    "grass-quick-start-in-unreal-engine",
    "grass-tool-in-unreal-engine",
    "hair-physics-in-unreal-engine",
    "hair-rendering-and-simulation-in-unreal-engine",
    "hardware-ray-tracing-in-unreal-engine",
    "hdri-backdrop-visualization-tool-in-unreal-engine",
    "heterogeneous-volumes-in-unreal-engine",
    "hierarchical-level-of-detail-in-unreal-engine",
    "how-to-create-a-custom-deformer-graph-in-unreal-engine",
    "how-to-use-unreal-insights-to-profile-android-games-for-unreal-engine",
    "ies-light-profiles-in-unreal-engine",
    "in-app-purchases-and-ads-in-unreal-engine-projects",
    "in-camera-vfx-in-unreal-engine",
    "input-in-unreal-engine",
    "instanced-materials-in-unreal-engine",
    "integrating-media-in-unreal-engine",
    "interchange-framework-in-unreal-engine",
    "introduction-to-blueprints-visual-scripting-in-unreal-engine",
    "introduction-to-geometry-scripting-in-unreal-engine",
    "introduction-to-performance-profiling-and-configuration-in-unreal-engine",
    "inverse-kinematics-in-unreal-engine",
    "ios-ipados-and-tvos-support-for-unreal-engine",
    "landscape-collision-guide-in-unreal-engine",
    "landscape-edit-layers-in-unreal-engine",
    "landscape-materials-in-unreal-engine",
    "landscape-outdoor-terrain-in-unreal-engine",
    "landscape-painting-in-unreal-engine",
    "landscape-sculpting-in-unreal-engine",
    "landscape-splines-in-unreal-engine",
    "large-world-coordinates-in-unreal-engine-5",
    "large-world-coordinates-rendering-in-unreal-engine-5",
    "launching-unreal-engine-projects-on-devices",
    "level-designer-quick-start-in-unreal-engine",
    "level-editor-in-unreal-engine",
    "level-of-detail-in-unreal-engine",
    "level-sequences-in-unreal-engine",
    "level-streaming-in-unreal-engine",
    "levels-in-unreal-engine",
    "lidar-point-cloud-plugin-for-unreal-engine",
    "light-functions-in-unreal-engine",
    "light-mobility-in-unreal-engine",
    "light-types-and-their-mobility-in-unreal-engine",
    "lighting-the-environment-in-unreal-engine",
    "lightmass-in-unreal-engine",
    "lights-and-shadows",
    "linux-game-development-in-unreal-engine",
    "local-notifications-for-android-and-ios-in-unreal-engine",
    "localizing-content-in-unreal-engine",
    "low-latency-frame-syncing-in-unreal-engine",
    "low-level-tests-in-unreal-engine",
    "lumen-global-illumination-and-reflections-in-unreal-engine",
    "lumen-technical-details-in-unreal-engine",
    "making-interactive-xr-experiences-in-unreal-engine",
    "managing-color-in-unreal-engine",
    "material-attributes-in-unreal-engine",
    "material-editor-fundamentals",
    "material-functions-in-unreal-engine",
    "material-layers-in-unreal-engine",
    "material-parameter-collections-in-unreal-engine",
    "materials-in-unreal-engine",
    "matinee-in-unreal-engine",
    "media-framework-in-unreal-engine",
    "megascans-in-unreal-engine",
    "memory-profiling-in-unreal-engine",
    "mesh-distance-fields-in-unreal-engine",
    "mesh-drawing-pipeline-in-unreal-engine",
    "metadata-specifiers-in-unreal-engine",
    "metahuman-animator-in-unreal-engine",
    "metahuman-creator-in-unreal-engine",
    "metahuman-identity-in-unreal-engine",
    "midi-in-unreal-engine",
    "mixed-reality-capture-in-unreal-engine",
    "mobile-feature-levels-and-rendering-modes-in-unreal-engine",
    "mobile-rendering-and-shading-modes-for-unreal-engine",
    "modeling-and-geometry-scripting-in-unreal-engine",
    "modeling-tools-in-unreal-engine",
    "modules-in-unreal-engine",
    "motion-blur-in-unreal-engine",
    "motion-design-cloners-and-effectors-in-unreal-engine",
    "motion-design-in-unreal-engine",
    "motion-design-quickstart-guide-in-unreal-engine",
    "mover-in-unreal-engine",
    "multi-user-editing-in-unreal-engine",
    "music-systems-in-unreal-engine",
    "mutable-development-guides-in-unreal-engine",
    "mutable-optimizing-and-debugging-in-unreal-engine",
    "mutable-skeletal-mesh-generation-in-unreal-engine",
    "nanite-virtualized-geometry-in-unreal-engine",
    "navigation-system-in-unreal-engine",
    "network-relevancy-in-unreal-engine",
    "networking-and-multiplayer-in-unreal-engine",
    "networking-overview-in-unreal-engine",
    "neural-network-engine-in-unreal-engine",
    "niagara-fluids-in-unreal-engine",
    "niagara-lightweight-emitters",
    "niagara-scratch-pad-modules-in-unreal-engine",
    "niagara-visual-effects-in-unreal-engine",
    "node-reference",
    "object-pointers-in-unreal-engine",
    "occlusion-culling-in-unreal-engine",
    "one-file-per-actor-in-unreal-engine",
    "online-services-in-unreal-engine",
    "online-services-interfaces-in-unreal-engine",
    "online-subsystems-and-services-in-unreal-engine",
    "open-world-tools-in-unreal-engine",
    "operator-stack-in-unreal-engine",
    "optimization-and-development-best-practices-for-mobile-projects-in-unreal-engine",
    "optimization-guides-for-android-in-unreal-engine",
    "optimizing-and-debugging-projects-for-realtime-rendering-in-unreal-engine",
    "optimizing-rendering-with-pso-caches-in-unreal-engine",
    "optimizing-user-interfaces-in-unreal-engine",
    "orthographic-camera-in-unreal-engine",
    "overview-of-blueprints-visual-scripting-in-unreal-engine",
    "overview-of-shaders-in-plugins-unreal-engine",
    "packaging-and-cooking-games-in-unreal-engine",
    "packaging-and-publishing-android-projects-in-unreal-engine",
    "packaging-android-projects-in-unreal-engine",
    "packaging-ios-projects-in-unreal-engine",
    "panoramic-capture-tool-in-unreal-engine",
    "paper-2d-overview-in-unreal-engine",
    "parallel-rendering-overview-for-unreal-engine",
    "particle-systems-cascade-in-unreal-engine",
    "patching-content-delivery-and-dlc-in-unreal-engine",
    "path-tracer-in-unreal-engine",
    "pawns-in-unreal-engine",
    "pcg-editor-mode-in-unreal-engine",
    "perforce-integration-in-unreal-engine",
    "physically-based-materials-in-unreal-engine",
    "physically-based-rendering-in-unreal-engine",
    "physics-bodies-in-unreal-engine",
    "physics-constraints-in-unreal-engine",
    "physics-in-unreal-engine",
    "physics-materials-in-unreal-engine",
    "pixel-streaming-in-unreal-engine",
    "plastic-scm-in-unreal-engine",
    "player-controllers-in-unreal-engine",
    "player-state-in-unreal-engine",
    "playing-and-simulating-in-unreal-engine",
    "plugin-system-in-unreal-engine",
    "plugins-for-ui-development-in-unreal-engine",
    "plugins-in-unreal-engine",
    "point-lights-in-unreal-engine",
    "post-process-effects-in-unreal-engine",
    "preparing-unreal-engine-projects-for-release",
    "procedural-content-generation-framework-in-unreal-engine",
    "procedural-content-generation-pcg-biome-core-and-sample-plugins-in-unreal-engine",
    "procedural-foliage-tool-in-unreal-engine",
    "procedural-mesh-component-in-unreal-engine",
    "professional-video-io-in-unreal-engine",
    "programming-in-the-unreal-engine-architecture",
    "programming-with-cplusplus-in-unreal-engine",
    "project-settings-in-unreal-engine",
    "python-scripting-in-unreal-engine",
    "quick-start-guide-for-blueprints-visual-scripting-in-unreal-engine",
    "quixel-bridge-in-unreal-engine",
    "ray-tracing-and-path-tracing-features-in-unreal-engine",
    "realtime-compositing-with-composure-in-unreal-engine",
    "rect-lights-in-unreal-engine",
    "reference-for-niagara-effects-in-unreal-engine",
    "reflection-system-in-unreal-engine",
    "reflections-environment-in-unreal-engine",
    "remote-control-for-unreal-engine",
    "render-dependency-graph-in-unreal-engine",
    "render-movie-settings-in-unreal-engine",
    "render-multiple-camera-angle-stills-in-unreal-engine",
    "render-resource-viewer-in-unreal-engine",
    "rendering-components-in-unreal-engine",
    "rendering-features-for-mobile-games-in-unreal-engine",
    "rendering-high-quality-frames-with-movie-render-queue-in-unreal-engine",
    "rendering-modes-in-unreal-engine",
    "rendering-to-multiple-displays-with-ndisplay-in-unreal-engine",
    "replication-in-unreal-engine",
    "reverb-in-unreal-engine",
    "rpcs-in-unreal-engine",
    "running-blueprints-at-unreal-editor-startup",
    "runtime-virtual-texturing-in-unreal-engine",
    "sample-game-projects-for-unreal-engine",
    "samples-and-tutorials-for-unreal-engine",
    "scene-state-for-unreal-engine",
    "screen-space-reflections-in-unreal-engine",
    "scriptable-tools-system-in-unreal-engine",
    "scripted-actions-in-unreal-engine",
    "sequencer-cinematic-editor-in-unreal-engine",
    "sequencer-scripting-in-unreal-engine",
    "sequencer-tracks-in-unreal-engine",
    "setting-up-an-unreal-engine-project-for-mobile-platforms",
    "setting-up-device-profiles-in-unreal-engine",
    "setting-up-rundown-server-for-motion-design-in-unreal-engine",
    "setting-up-tv-safe-zone-debugging-in-unreal-engine",
    "setting-up-your-development-environment-for-cplusplus-in-unreal-engine",
    "setting-up-your-production-pipeline-in-unreal-engine",
    "shader-complexity-in-unreal-engine",
    "shader-development-in-unreal-engine",
    "shaders-in-plugins-for-unreal-engine",
    "shadowing-in-unreal-engine",
    "sharing-and-releasing-projects-for-unreal-engine",
    "sharing-xr-experiences-in-unreal-engine",
    "significance-manager-in-unreal-engine",
    "skeletal-mesh-animation-system-in-unreal-engine",
    "skeletal-mesh-assets-in-unreal-engine",
    "skeletal-mesh-rendering-paths-in-unreal-engine",
    "skeletal-mesh-sockets-in-unreal-engine",
    "sky-lights-in-unreal-engine",
    "slate-user-interface-programming-framework-for-unreal-engine",
    "smart-objects-in-unreal-engine",
    "sound-classes-in-unreal-engine",
    "sound-concurrency-in-unreal-engine",
    "sound-cues-in-unreal-engine",
    "sound-sources-in-unreal-engine",
    "soundscape-in-unreal-engine",
    "source-control-in-unreal-engine",
    "sparse-class-data-in-unreal-engine",
    "sparse-volume-textures-in-unreal-engine",
    "spatialization-and-sound-attenuation-in-unreal-engine",
    "specialized-blueprint-visual-scripting-node-groups-in-unreal-engine",
    "spot-lights-in-unreal-engine",
    "stage-monitor-with-unreal-engine",
    "stat-commands-in-unreal-engine",
    "state-tree-in-unreal-engine",
    "static-mesh-editor-reference",
    "static-meshes",
    "steam-deck-in-unreal-engine",
    "submixes-in-unreal-engine",
    "subtitles-and-closed-captions-plugin",
    "sun-and-sky-actor-in-unreal-engine",
    "supported-features-by-rendering-path-for-desktop-with-unreal-engine",
    "supported-xr-devices-in-unreal-engine",
    "switchboard-in-unreal-engine",
    "takes-recorder-in-unreal-engine",
    "taking-screenshots-in-unreal-engine",
    "technical-guide-for-blueprints-visual-scripting-in-unreal-engine",
    "template-sequences-in-unreal-engine",
    "temporal-super-resolution-in-unreal-engine",
    "testing-and-debugging-user-interfaces-in-unreal-engine",
    "testing-and-optimizing-your-content",
    "text-formatting-in-unreal-engine",
    "text-formatting-localization-and-fonts-in-unreal-engine",
    "texture-share-in-unreal-engine",
    "texture-streaming-in-unreal-engine",
    "textures-in-unreal-engine",
    "the-gl-transmission-format-gltf-in-unreal-engine",
    "the-media-plate-actor-in-unreal-engine",
    "third-party-rendering-tools-and-plugins-in-unreal-engine",
    "threaded-rendering-in-unreal-engine",
    "timed-data-monitor-in-unreal-engine",
    "timers-in-unreal-engine",
    "tone-mapping-in-unreal-engine",
    "tools-and-editors-in-unreal-engine",
    "tools-for-general-platform-support-in-unreal-engine",
    "traces-with-raycasts-in-unreal-engine",
    "tutorials-and-examples-for-user-interfaces-in-unreal-engine",
    "tutorials-for-niagara-effects-in-unreal-engine",
    "umg-best-practices-in-unreal-engine",
    "umg-editor-reference-for-unreal-engine",
    "umg-ui-designer-in-unreal-engine",
    "understanding-lightmapping-in-unreal-engine",
    "understanding-the-basics-of-unreal-engine",
    "units-of-measurement-in-unreal-engine",
    "universal-scene-description-usd-in-unreal-engine",
    "unreal-build-tool-in-unreal-engine",
    "unreal-editor-interface",
    "unreal-editor-preferences",
    "unreal-engine-5-7-documentation",
    "unreal-engine-5-7-release-notes",
    "unreal-engine-5-migration-guide",
    "unreal-engine-directory-structure",
    "unreal-engine-for-beginners",
    "unreal-engine-material-editor-user-guide",
    "unreal-engine-materials",
    "unreal-engine-programming-and-scripting",
    "unreal-engine-sequencer-movie-tool-overview",
    "unreal-engine-stats-system-overview",
    "unreal-engine-terminology",
    "unreal-header-tool-in-unreal-engine",
    "unreal-insights-in-unreal-engine",
    "use-the-online-services-plugins-in-unreal-engine",
    "user-interface-reference-for-the-blueprints-visual-scripting-editor-in-unreal-engine",
    "user-interfaces-and-huds-in-unreal-engine",
    "using-clang-sanitizers-in-unreal-engine-projects",
    "using-datasmith-at-runtime-in-unreal-engine",
    "using-datasmith-direct-link-in-unreal-engine",
    "using-fonts-in-unreal-engine",
    "using-lumen-global-illumination-on-mobile-in-unreal-engine",
    "using-mesh-auto-instancing-on-mobile-devices-in-unreal-engine",
    "using-multiple-virtual-cameras-in-unreal-engine",
    "using-oodle-in-unreal-engine",
    "using-renderdoc-with-unreal-engine",
    "using-speedtree-in-unreal-engine",
    "using-the-autosdk-system-in-unreal-engine",
    "using-the-gameplay-debugger-in-unreal-engine",
    "using-the-mobile-previewer-in-unreal-engine",
    "using-the-project-launcher-in-unreal-engine",
    "using-the-unreal-frontend-tool",
    "using-unreal-engine-with-autodesk-shotgrid",
    "uv-editor-in-unreal-engine",
    "vehicles-in-unreal-engine",
    "view-modes-in-unreal-engine",
    "virtual-scouting-in-unreal-engine",
    "virtual-scouting-legacy-tools",
    "virtual-shadow-maps-in-unreal-engine",
    "virtual-texturing-in-unreal-engine",
    "visibility-and-occlusion-culling-in-unreal-engine",
    "visual-logger-in-unreal-engine",
    "volumetric-fog-in-unreal-engine",
    "water-system-in-unreal-engine",
    "waveform-editor-quick-start-in-unreal-engine",
    "whats-new",
    "widget-type-reference-for-umg-ui-designer-in-unreal-engine",
    "working-color-space-in-unreal-engine",
    "working-on-ios-projects-using-a-windows-machine-in-unreal-engine",
    "working-with-audio-in-unreal-engine",
    "working-with-content-in-unreal-engine",
    "working-with-cooked-content-in-the-unreal-engine",
    "working-with-media-in-unreal-engine",
    "working-with-plugins-in-unreal-engine",
    "working-with-projects-and-templates-in-unreal-engine",
    "working-with-scene-variants-in-unreal-engine",
    "world-composition-in-unreal-engine",
    "world-partition---data-layers-in-unreal-engine",
    "world-partition-in-unreal-engine",
    "world-partitioned-navigation-mesh",
    "your-first-graphic-with-motion-design-in-unreal-engine",
    "zen-loader-in-unreal-engine",
];
