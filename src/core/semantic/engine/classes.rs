//! Godot 4 class hierarchy under the names the C# bindings expose.
//!
//! Acronyms longer than two letters are Pascal-cased by the bindings
//! (`GPUParticles2D` is `GpuParticles2D`, `Object` is `GodotObject`), so the
//! names here are the ones scripts actually write.

/// Direct subclasses of each engine class, unqualified.
///
/// Every class appears as a subclass exactly once. `GodotObject` is the root.
pub(super) const SUBCLASSES: &[(&str, &[&str])] = &[
    (
        "GodotObject",
        &[
            "AudioServer",
            "CameraServer",
            "ClassDB",
            "DisplayServer",
            "EditorInterface",
            "EditorSelection",
            "EditorUndoRedoManager",
            "EditorVcsInterface",
            "Engine",
            "EngineDebugger",
            "Geometry2D",
            "Geometry3D",
            "IP",
            "Input",
            "InputMap",
            "JavaScriptBridge",
            "JsonRpc",
            "MainLoop",
            "Marshalls",
            "NativeMenu",
            "NavigationServer2D",
            "NavigationServer3D",
            "Node",
            "OS",
            "Performance",
            "PhysicsDirectBodyState2D",
            "PhysicsDirectBodyState3D",
            "PhysicsDirectSpaceState2D",
            "PhysicsDirectSpaceState3D",
            "PhysicsServer2D",
            "PhysicsServer3D",
            "ProjectSettings",
            "RefCounted",
            "RenderingDevice",
            "RenderingServer",
            "ResourceLoader",
            "ResourceSaver",
            "ResourceUid",
            "ScriptLanguage",
            "TextServerManager",
            "ThemeDB",
            "TileData",
            "Time",
            "UndoRedo",
            "WorkerThreadPool",
            "XRServer",
        ],
    ),
    ("MainLoop", &["SceneTree"]),
    ("ScriptLanguage", &["ScriptLanguageExtension"]),
    ("PhysicsServer2D", &["PhysicsServer2DExtension"]),
    ("PhysicsServer3D", &["PhysicsServer3DExtension"]),
    // Scene tree
    (
        "Node",
        &[
            "AnimationMixer",
            "AudioStreamPlayer",
            "CanvasItem",
            "CanvasLayer",
            "EditorFileSystem",
            "EditorPlugin",
            "EditorResourcePreview",
            "HttpRequest",
            "InstancePlaceholder",
            "MissingNode",
            "MultiplayerSpawner",
            "MultiplayerSynchronizer",
            "NavigationAgent2D",
            "NavigationAgent3D",
            "Node3D",
            "ResourcePreloader",
            "ShaderGlobalsOverride",
            "StatusIndicator",
            "Timer",
            "Viewport",
            "WorldEnvironment",
        ],
    ),
    ("AnimationMixer", &["AnimationPlayer", "AnimationTree"]),
    ("CanvasLayer", &["ParallaxBackground"]),
    ("Viewport", &["SubViewport", "Window"]),
    ("Window", &["AcceptDialog", "Popup"]),
    ("AcceptDialog", &["ConfirmationDialog"]),
    (
        "ConfirmationDialog",
        &[
            "EditorCommandPalette",
            "EditorFileDialog",
            "FileDialog",
            "ScriptCreateDialog",
        ],
    ),
    ("Popup", &["PopupMenu", "PopupPanel"]),
    ("CanvasItem", &["Control", "Node2D"]),
    // 2D
    (
        "Node2D",
        &[
            "AnimatedSprite2D",
            "AudioListener2D",
            "AudioStreamPlayer2D",
            "BackBufferCopy",
            "Bone2D",
            "Camera2D",
            "CanvasGroup",
            "CanvasModulate",
            "CollisionObject2D",
            "CollisionPolygon2D",
            "CollisionShape2D",
            "CpuParticles2D",
            "GpuParticles2D",
            "Joint2D",
            "Light2D",
            "LightOccluder2D",
            "Line2D",
            "Marker2D",
            "MeshInstance2D",
            "MultiMeshInstance2D",
            "NavigationLink2D",
            "NavigationObstacle2D",
            "NavigationRegion2D",
            "Parallax2D",
            "ParallaxLayer",
            "Path2D",
            "PathFollow2D",
            "Polygon2D",
            "RayCast2D",
            "RemoteTransform2D",
            "ShapeCast2D",
            "Skeleton2D",
            "Sprite2D",
            "TileMap",
            "TileMapLayer",
            "TouchScreenButton",
            "VisibleOnScreenNotifier2D",
        ],
    ),
    ("CollisionObject2D", &["Area2D", "PhysicsBody2D"]),
    (
        "PhysicsBody2D",
        &["CharacterBody2D", "RigidBody2D", "StaticBody2D"],
    ),
    ("RigidBody2D", &["PhysicalBone2D"]),
    ("StaticBody2D", &["AnimatableBody2D"]),
    (
        "Joint2D",
        &["DampedSpringJoint2D", "GrooveJoint2D", "PinJoint2D"],
    ),
    ("Light2D", &["DirectionalLight2D", "PointLight2D"]),
    ("VisibleOnScreenNotifier2D", &["VisibleOnScreenEnabler2D"]),
    // GUI
    (
        "Control",
        &[
            "BaseButton",
            "ColorRect",
            "Container",
            "GraphEdit",
            "ItemList",
            "Label",
            "LineEdit",
            "MenuBar",
            "NinePatchRect",
            "Panel",
            "Range",
            "ReferenceRect",
            "RichTextLabel",
            "Separator",
            "TabBar",
            "TextEdit",
            "TextureRect",
            "Tree",
            "VideoStreamPlayer",
        ],
    ),
    ("BaseButton", &["Button", "LinkButton", "TextureButton"]),
    (
        "Button",
        &[
            "CheckBox",
            "CheckButton",
            "ColorPickerButton",
            "MenuButton",
            "OptionButton",
        ],
    ),
    (
        "Container",
        &[
            "AspectRatioContainer",
            "BoxContainer",
            "CenterContainer",
            "EditorProperty",
            "FlowContainer",
            "GraphElement",
            "GridContainer",
            "MarginContainer",
            "PanelContainer",
            "ScrollContainer",
            "SplitContainer",
            "SubViewportContainer",
            "TabContainer",
        ],
    ),
    ("BoxContainer", &["HBoxContainer", "VBoxContainer"]),
    ("HBoxContainer", &["EditorResourcePicker"]),
    ("EditorResourcePicker", &["EditorScriptPicker"]),
    ("VBoxContainer", &["ColorPicker", "ScriptEditorBase"]),
    ("FlowContainer", &["HFlowContainer", "VFlowContainer"]),
    ("GraphElement", &["GraphFrame", "GraphNode"]),
    ("PanelContainer", &["ScriptEditor"]),
    ("ScrollContainer", &["EditorInspector"]),
    ("SplitContainer", &["HSplitContainer", "VSplitContainer"]),
    (
        "Range",
        &[
            "EditorSpinSlider",
            "ProgressBar",
            "ScrollBar",
            "Slider",
            "SpinBox",
            "TextureProgressBar",
        ],
    ),
    ("ScrollBar", &["HScrollBar", "VScrollBar"]),
    ("Slider", &["HSlider", "VSlider"]),
    ("Separator", &["HSeparator", "VSeparator"]),
    ("TextEdit", &["CodeEdit"]),
    // 3D
    (
        "Node3D",
        &[
            "AudioListener3D",
            "AudioStreamPlayer3D",
            "BoneAttachment3D",
            "Camera3D",
            "CollisionObject3D",
            "CollisionPolygon3D",
            "CollisionShape3D",
            "GridMap",
            "ImporterMeshInstance3D",
            "Joint3D",
            "LightmapProbe",
            "Marker3D",
            "NavigationLink3D",
            "NavigationObstacle3D",
            "NavigationRegion3D",
            "Path3D",
            "PathFollow3D",
            "RayCast3D",
            "RemoteTransform3D",
            "ShapeCast3D",
            "Skeleton3D",
            "SkeletonModifier3D",
            "SpringArm3D",
            "VehicleWheel3D",
            "VisualInstance3D",
            "XRNode3D",
            "XROrigin3D",
        ],
    ),
    ("Camera3D", &["XRCamera3D"]),
    ("CollisionObject3D", &["Area3D", "PhysicsBody3D"]),
    (
        "PhysicsBody3D",
        &[
            "CharacterBody3D",
            "PhysicalBone3D",
            "RigidBody3D",
            "StaticBody3D",
        ],
    ),
    ("RigidBody3D", &["VehicleBody3D"]),
    ("StaticBody3D", &["AnimatableBody3D"]),
    (
        "Joint3D",
        &[
            "ConeTwistJoint3D",
            "Generic6DofJoint3D",
            "HingeJoint3D",
            "PinJoint3D",
            "SliderJoint3D",
        ],
    ),
    (
        "SkeletonModifier3D",
        &[
            "PhysicalBoneSimulator3D",
            "SkeletonIK3D",
            "XRBodyModifier3D",
            "XRHandModifier3D",
        ],
    ),
    ("XRNode3D", &["XRAnchor3D", "XRController3D"]),
    (
        "VisualInstance3D",
        &[
            "Decal",
            "FogVolume",
            "GeometryInstance3D",
            "GpuParticlesAttractor3D",
            "GpuParticlesCollision3D",
            "Light3D",
            "LightmapGI",
            "OccluderInstance3D",
            "ReflectionProbe",
            "RootMotionView",
            "VisibleOnScreenNotifier3D",
            "VoxelGI",
        ],
    ),
    (
        "GeometryInstance3D",
        &[
            "CpuParticles3D",
            "CsgShape3D",
            "GpuParticles3D",
            "Label3D",
            "MeshInstance3D",
            "MultiMeshInstance3D",
            "SpriteBase3D",
        ],
    ),
    ("CsgShape3D", &["CsgCombiner3D", "CsgPrimitive3D"]),
    (
        "CsgPrimitive3D",
        &[
            "CsgBox3D",
            "CsgCylinder3D",
            "CsgMesh3D",
            "CsgPolygon3D",
            "CsgSphere3D",
            "CsgTorus3D",
        ],
    ),
    ("MeshInstance3D", &["SoftBody3D"]),
    ("SpriteBase3D", &["AnimatedSprite3D", "Sprite3D"]),
    (
        "Light3D",
        &["DirectionalLight3D", "OmniLight3D", "SpotLight3D"],
    ),
    (
        "GpuParticlesAttractor3D",
        &[
            "GpuParticlesAttractorBox3D",
            "GpuParticlesAttractorSphere3D",
            "GpuParticlesAttractorVectorField3D",
        ],
    ),
    (
        "GpuParticlesCollision3D",
        &[
            "GpuParticlesCollisionBox3D",
            "GpuParticlesCollisionHeightField3D",
            "GpuParticlesCollisionSdf3D",
            "GpuParticlesCollisionSphere3D",
        ],
    ),
    ("VisibleOnScreenNotifier3D", &["VisibleOnScreenEnabler3D"]),
    // Reference counted helpers
    (
        "RefCounted",
        &[
            "AStar2D",
            "AStar3D",
            "AStarGrid2D",
            "AesContext",
            "AudioEffectInstance",
            "AudioStreamPlayback",
            "CameraFeed",
            "CharFXTransform",
            "ConfigFile",
            "Crypto",
            "DirAccess",
            "DtlsServer",
            "EditorDebuggerPlugin",
            "EditorExportPlatform",
            "EditorExportPlugin",
            "EditorInspectorPlugin",
            "EditorResourceConversionPlugin",
            "EditorResourcePreviewGenerator",
            "EditorSceneFormatImporter",
            "EditorScenePostImport",
            "EditorScenePostImportPlugin",
            "EditorScript",
            "EditorTranslationParserPlugin",
            "ENetConnection",
            "EncodedObjectAsId",
            "Expression",
            "FileAccess",
            "HashingContext",
            "HmacContext",
            "HttpClient",
            "ImageFormatLoader",
            "KinematicCollision2D",
            "KinematicCollision3D",
            "MeshDataTool",
            "MultiplayerApi",
            "Mutex",
            "Node3DGizmo",
            "PacketPeer",
            "PckPacker",
            "PhysicsPointQueryParameters2D",
            "PhysicsPointQueryParameters3D",
            "PhysicsRayQueryParameters2D",
            "PhysicsRayQueryParameters3D",
            "PhysicsShapeQueryParameters2D",
            "PhysicsShapeQueryParameters3D",
            "PhysicsTestMotionParameters2D",
            "PhysicsTestMotionParameters3D",
            "PhysicsTestMotionResult2D",
            "PhysicsTestMotionResult3D",
            "RandomNumberGenerator",
            "RegEx",
            "RegExMatch",
            "Resource",
            "ResourceFormatLoader",
            "ResourceFormatSaver",
            "ResourceImporter",
            "SceneState",
            "SceneTreeTimer",
            "Semaphore",
            "StreamPeer",
            "SurfaceTool",
            "TcpServer",
            "TextLine",
            "TextParagraph",
            "TextServer",
            "Thread",
            "TlsOptions",
            "TriangleMesh",
            "Tween",
            "Tweener",
            "UdpServer",
            "Upnp",
            "UpnpDevice",
            "WeakRef",
            "WebRtcPeerConnection",
            "XRInterface",
            "XRPose",
            "XRTracker",
            "XmlParser",
            "ZipPacker",
            "ZipReader",
        ],
    ),
    ("AudioEffectInstance", &["AudioEffectSpectrumAnalyzerInstance"]),
    (
        "AudioStreamPlayback",
        &["AudioStreamPlaybackPolyphonic", "AudioStreamPlaybackResampled"],
    ),
    ("AudioStreamPlaybackResampled", &["AudioStreamGeneratorPlayback"]),
    ("ImageFormatLoader", &["ImageFormatLoaderExtension"]),
    ("MultiplayerApi", &["MultiplayerApiExtension", "SceneMultiplayer"]),
    ("Node3DGizmo", &["EditorNode3DGizmo"]),
    (
        "PacketPeer",
        &[
            "ENetPacketPeer",
            "MultiplayerPeer",
            "PacketPeerDtls",
            "PacketPeerExtension",
            "PacketPeerStream",
            "PacketPeerUdp",
            "WebRtcDataChannel",
            "WebSocketPeer",
        ],
    ),
    (
        "MultiplayerPeer",
        &[
            "ENetMultiplayerPeer",
            "MultiplayerPeerExtension",
            "OfflineMultiplayerPeer",
            "WebRtcMultiplayerPeer",
            "WebSocketMultiplayerPeer",
        ],
    ),
    ("WebRtcDataChannel", &["WebRtcDataChannelExtension"]),
    ("WebRtcPeerConnection", &["WebRtcPeerConnectionExtension"]),
    ("ResourceImporter", &["EditorImportPlugin"]),
    (
        "StreamPeer",
        &[
            "StreamPeerBuffer",
            "StreamPeerExtension",
            "StreamPeerGZip",
            "StreamPeerTcp",
            "StreamPeerTls",
        ],
    ),
    ("TextServer", &["TextServerExtension"]),
    (
        "Tweener",
        &[
            "CallbackTweener",
            "IntervalTweener",
            "MethodTweener",
            "PropertyTweener",
        ],
    ),
    (
        "XRInterface",
        &[
            "MobileVRInterface",
            "OpenXRInterface",
            "WebXRInterface",
            "XRInterfaceExtension",
        ],
    ),
    (
        "XRTracker",
        &["XRBodyTracker", "XRFaceTracker", "XRPositionalTracker"],
    ),
    ("XRPositionalTracker", &["XRControllerTracker", "XRHandTracker"]),
    // Resources
    (
        "Resource",
        &[
            "Animation",
            "AnimationLibrary",
            "AnimationNode",
            "AudioBusLayout",
            "AudioEffect",
            "AudioStream",
            "BitMap",
            "BoneMap",
            "ButtonGroup",
            "CameraAttributes",
            "Compositor",
            "CompositorEffect",
            "CryptoKey",
            "Curve",
            "Curve2D",
            "Curve3D",
            "EditorNode3DGizmoPlugin",
            "EditorSettings",
            "Environment",
            "Font",
            "GltfDocument",
            "GltfState",
            "Gradient",
            "Image",
            "ImporterMesh",
            "InputEvent",
            "Json",
            "LabelSettings",
            "LightmapGIData",
            "Material",
            "Mesh",
            "MeshLibrary",
            "MissingResource",
            "MultiMesh",
            "NavigationMesh",
            "NavigationMeshSourceGeometryData2D",
            "NavigationMeshSourceGeometryData3D",
            "NavigationPolygon",
            "Occluder3D",
            "OccluderPolygon2D",
            "PackedDataContainer",
            "PackedScene",
            "PhysicsMaterial",
            "PolygonPathFinder",
            "SceneReplicationConfig",
            "Script",
            "Shader",
            "ShaderInclude",
            "Shape2D",
            "Shape3D",
            "Shortcut",
            "Skin",
            "Sky",
            "SpriteFrames",
            "StyleBox",
            "SyntaxHighlighter",
            "Texture",
            "Theme",
            "TileMapPattern",
            "TileSet",
            "TileSetSource",
            "Translation",
            "VideoStream",
            "VisualShaderNode",
            "VoxelGIData",
            "World2D",
            "World3D",
            "X509Certificate",
        ],
    ),
    (
        "AnimationNode",
        &[
            "AnimationNodeOutput",
            "AnimationNodeSync",
            "AnimationNodeTimeScale",
            "AnimationNodeTimeSeek",
            "AnimationRootNode",
        ],
    ),
    (
        "AnimationNodeSync",
        &[
            "AnimationNodeAdd2",
            "AnimationNodeAdd3",
            "AnimationNodeBlend2",
            "AnimationNodeBlend3",
            "AnimationNodeOneShot",
            "AnimationNodeSub2",
            "AnimationNodeTransition",
        ],
    ),
    (
        "AnimationRootNode",
        &[
            "AnimationNodeAnimation",
            "AnimationNodeBlendSpace1D",
            "AnimationNodeBlendSpace2D",
            "AnimationNodeBlendTree",
            "AnimationNodeStateMachine",
        ],
    ),
    (
        "AudioEffect",
        &[
            "AudioEffectAmplify",
            "AudioEffectCapture",
            "AudioEffectChorus",
            "AudioEffectCompressor",
            "AudioEffectDelay",
            "AudioEffectDistortion",
            "AudioEffectEQ",
            "AudioEffectFilter",
            "AudioEffectHardLimiter",
            "AudioEffectLimiter",
            "AudioEffectPanner",
            "AudioEffectPhaser",
            "AudioEffectPitchShift",
            "AudioEffectRecord",
            "AudioEffectReverb",
            "AudioEffectSpectrumAnalyzer",
            "AudioEffectStereoEnhance",
        ],
    ),
    (
        "AudioEffectEQ",
        &["AudioEffectEQ10", "AudioEffectEQ21", "AudioEffectEQ6"],
    ),
    (
        "AudioEffectFilter",
        &[
            "AudioEffectBandLimitFilter",
            "AudioEffectBandPassFilter",
            "AudioEffectHighPassFilter",
            "AudioEffectHighShelfFilter",
            "AudioEffectLowPassFilter",
            "AudioEffectLowShelfFilter",
            "AudioEffectNotchFilter",
        ],
    ),
    (
        "AudioStream",
        &[
            "AudioStreamGenerator",
            "AudioStreamInteractive",
            "AudioStreamMP3",
            "AudioStreamMicrophone",
            "AudioStreamOggVorbis",
            "AudioStreamPlaylist",
            "AudioStreamPolyphonic",
            "AudioStreamRandomizer",
            "AudioStreamSynchronized",
            "AudioStreamWav",
        ],
    ),
    (
        "CameraAttributes",
        &["CameraAttributesPhysical", "CameraAttributesPractical"],
    ),
    ("Font", &["FontFile", "FontVariation", "SystemFont"]),
    (
        "InputEvent",
        &[
            "InputEventAction",
            "InputEventFromWindow",
            "InputEventJoypadButton",
            "InputEventJoypadMotion",
            "InputEventMidi",
            "InputEventShortcut",
        ],
    ),
    (
        "InputEventFromWindow",
        &[
            "InputEventScreenDrag",
            "InputEventScreenTouch",
            "InputEventWithModifiers",
        ],
    ),
    (
        "InputEventWithModifiers",
        &["InputEventGesture", "InputEventKey", "InputEventMouse"],
    ),
    (
        "InputEventGesture",
        &["InputEventMagnifyGesture", "InputEventPanGesture"],
    ),
    (
        "InputEventMouse",
        &["InputEventMouseButton", "InputEventMouseMotion"],
    ),
    (
        "Material",
        &[
            "BaseMaterial3D",
            "CanvasItemMaterial",
            "FogMaterial",
            "PanoramaSkyMaterial",
            "ParticleProcessMaterial",
            "PhysicalSkyMaterial",
            "PlaceholderMaterial",
            "ProceduralSkyMaterial",
            "ShaderMaterial",
        ],
    ),
    ("BaseMaterial3D", &["OrmMaterial3D", "StandardMaterial3D"]),
    (
        "Mesh",
        &["ArrayMesh", "ImmediateMesh", "PlaceholderMesh", "PrimitiveMesh"],
    ),
    (
        "PrimitiveMesh",
        &[
            "BoxMesh",
            "CapsuleMesh",
            "CylinderMesh",
            "PlaneMesh",
            "PointMesh",
            "PrismMesh",
            "RibbonTrailMesh",
            "SphereMesh",
            "TextMesh",
            "TorusMesh",
            "TubeTrailMesh",
        ],
    ),
    ("PlaneMesh", &["QuadMesh"]),
    ("Script", &["CSharpScript", "GDScript", "ScriptExtension"]),
    ("Shader", &["VisualShader"]),
    (
        "Shape2D",
        &[
            "CapsuleShape2D",
            "CircleShape2D",
            "ConcavePolygonShape2D",
            "ConvexPolygonShape2D",
            "RectangleShape2D",
            "SegmentShape2D",
            "SeparationRayShape2D",
            "WorldBoundaryShape2D",
        ],
    ),
    (
        "Shape3D",
        &[
            "BoxShape3D",
            "CapsuleShape3D",
            "ConcavePolygonShape3D",
            "ConvexPolygonShape3D",
            "CylinderShape3D",
            "HeightMapShape3D",
            "SeparationRayShape3D",
            "SphereShape3D",
            "WorldBoundaryShape3D",
        ],
    ),
    (
        "StyleBox",
        &[
            "StyleBoxEmpty",
            "StyleBoxFlat",
            "StyleBoxLine",
            "StyleBoxTexture",
        ],
    ),
    ("SyntaxHighlighter", &["CodeHighlighter", "EditorSyntaxHighlighter"]),
    ("Texture", &["Texture2D", "Texture3D", "TextureLayered"]),
    (
        "Texture2D",
        &[
            "AnimatedTexture",
            "AtlasTexture",
            "CameraTexture",
            "CanvasTexture",
            "CompressedTexture2D",
            "CurveTexture",
            "CurveXyzTexture",
            "ExternalTexture",
            "GradientTexture1D",
            "GradientTexture2D",
            "ImageTexture",
            "MeshTexture",
            "NoiseTexture2D",
            "PlaceholderTexture2D",
            "PortableCompressedTexture2D",
            "ViewportTexture",
        ],
    ),
    (
        "Texture3D",
        &[
            "CompressedTexture3D",
            "ImageTexture3D",
            "NoiseTexture3D",
            "PlaceholderTexture3D",
        ],
    ),
    (
        "TextureLayered",
        &[
            "CompressedTextureLayered",
            "ImageTextureLayered",
            "PlaceholderTextureLayered",
        ],
    ),
    (
        "ImageTextureLayered",
        &["Cubemap", "CubemapArray", "Texture2DArray"],
    ),
    (
        "TileSetSource",
        &["TileSetAtlasSource", "TileSetScenesCollectionSource"],
    ),
    ("Translation", &["OptimizedTranslation"]),
    ("VideoStream", &["VideoStreamTheora"]),
    ("VisualShaderNode", &["VisualShaderNodeCustom"]),
];
