//! Catalog of engine types referenced by Godot C# scripts.
//!
//! Stands in for the assembly references a full compiler would load: the
//! Godot class hierarchy (see `classes`), plus the methods the extractor
//! cares about. Built once on first use and shared read-only.

mod classes;

use std::{collections::HashMap, sync::OnceLock};

use classes::SUBCLASSES;

/// Fully qualified name of the static translation service type.
pub const TRANSLATION_SERVER_TYPE: &str = "Godot.TranslationServer";

/// Fully qualified name of the root engine object type.
pub const ENGINE_OBJECT_TYPE: &str = "Godot.GodotObject";

/// Namespace all engine types live in.
pub const ENGINE_NAMESPACE: &str = "Godot";

/// Method exposed by an engine type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineMethod {
    pub name: &'static str,
    pub is_static: bool,
}

/// An engine type and its direct base.
#[derive(Debug, Clone)]
pub struct EngineType {
    pub name: &'static str,
    pub base: Option<&'static str>,
    pub methods: &'static [EngineMethod],
}

const OBJECT_METHODS: &[EngineMethod] = &[
    EngineMethod {
        name: "Tr",
        is_static: false,
    },
    EngineMethod {
        name: "TrN",
        is_static: false,
    },
];

const TRANSLATION_SERVER_METHODS: &[EngineMethod] = &[
    EngineMethod {
        name: "Translate",
        is_static: true,
    },
    EngineMethod {
        name: "TranslatePlural",
        is_static: true,
    },
];

/// Read-only engine type catalog.
#[derive(Debug)]
pub struct EngineCatalog {
    types: HashMap<String, EngineType>,
}

impl EngineCatalog {
    /// The shared catalog, built on first access.
    pub fn get() -> &'static EngineCatalog {
        static CATALOG: OnceLock<EngineCatalog> = OnceLock::new();
        CATALOG.get_or_init(EngineCatalog::build)
    }

    fn build() -> Self {
        let mut types = HashMap::new();

        let mut insert = |ty: EngineType| {
            types.insert(format!("{}.{}", ENGINE_NAMESPACE, ty.name), ty);
        };

        insert(EngineType {
            name: "GodotObject",
            base: None,
            methods: OBJECT_METHODS,
        });
        insert(EngineType {
            name: "TranslationServer",
            base: None,
            methods: TRANSLATION_SERVER_METHODS,
        });
        for &(base, children) in SUBCLASSES {
            for &name in children {
                insert(EngineType {
                    name,
                    base: Some(base),
                    methods: &[],
                });
            }
        }

        Self { types }
    }

    /// Returns true if `full_name` names an engine type.
    pub fn contains(&self, full_name: &str) -> bool {
        self.types.contains_key(full_name)
    }

    /// Fully qualified name of the direct base of an engine type.
    pub fn base_of(&self, full_name: &str) -> Option<String> {
        self.types
            .get(full_name)?
            .base
            .map(|base| format!("{}.{}", ENGINE_NAMESPACE, base))
    }

    /// A method declared directly on an engine type.
    pub fn method(&self, full_name: &str, method: &str) -> Option<EngineMethod> {
        self.types
            .get(full_name)?
            .methods
            .iter()
            .find(|m| m.name == method)
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_catalog_is_shared() {
        assert!(std::ptr::eq(EngineCatalog::get(), EngineCatalog::get()));
    }

    #[test]
    fn test_hierarchy_reaches_object_root() {
        let catalog = EngineCatalog::get();
        let mut current = "Godot.CharacterBody2D".to_string();
        let mut chain = vec![current.clone()];
        while let Some(base) = catalog.base_of(&current) {
            chain.push(base.clone());
            current = base;
        }

        assert_eq!(
            chain,
            vec![
                "Godot.CharacterBody2D",
                "Godot.PhysicsBody2D",
                "Godot.CollisionObject2D",
                "Godot.Node2D",
                "Godot.CanvasItem",
                "Godot.Node",
                "Godot.GodotObject",
            ]
        );
    }

    #[test]
    fn test_every_base_is_known() {
        let catalog = EngineCatalog::get();
        for &(base, children) in SUBCLASSES {
            assert!(
                catalog.contains(&format!("Godot.{}", base)),
                "{:?} have unknown base {}",
                children,
                base
            );
        }
    }

    #[test]
    fn test_each_class_has_one_base() {
        let mut seen = HashSet::new();
        for &(_, children) in SUBCLASSES {
            for &name in children {
                assert!(seen.insert(name), "{} listed twice", name);
            }
        }
        assert!(!seen.contains("GodotObject"));
        assert!(!seen.contains("TranslationServer"));
    }

    #[test]
    fn test_leaf_classes_reach_object_root() {
        let catalog = EngineCatalog::get();
        for leaf in [
            "CollisionShape2D",
            "Line2D",
            "AudioStreamPlayer2D",
            "GpuParticles2D",
            "Marker2D",
            "SubViewport",
            "HSplitContainer",
            "Sprite3D",
            "NinePatchRect",
            "TabBar",
            "CsgBox3D",
            "InputEventMouseButton",
        ] {
            let mut current = format!("Godot.{}", leaf);
            let mut depth = 0;
            while let Some(base) = catalog.base_of(&current) {
                current = base;
                depth += 1;
            }
            assert_eq!(current, ENGINE_OBJECT_TYPE, "{} is detached", leaf);
            assert!(depth >= 2, "{} is too shallow", leaf);
        }
    }

    #[test]
    fn test_translation_methods() {
        let catalog = EngineCatalog::get();

        let tr = catalog.method(ENGINE_OBJECT_TYPE, "Tr").unwrap();
        assert!(!tr.is_static);
        let translate = catalog.method(TRANSLATION_SERVER_TYPE, "Translate").unwrap();
        assert!(translate.is_static);

        assert!(catalog.method("Godot.Node", "Tr").is_none());
        assert!(catalog.method("Godot.Missing", "Tr").is_none());
        assert!(!catalog.contains("Godot.Missing"));
    }
}
