use super::options::GeneratorOptions;
use crate::codegen::TypeRef;
use indexmap::IndexMap;

/// Prefix of classes that bind directly into the foundation module.
const FOUNDATION_PREFIX: &str = "NS";
/// Prefix the designer puts in front of the widget class it archives.
const DESIGNER_PREFIX: &str = "IB";

const FOUNDATION_MODULE: &str = "Foundation";
const UIKIT_MODULE: &str = "UIKit";

/// Maps designer class tags onto binding type names by naming convention.
///
/// `NSDate` becomes `<root>.Foundation.NSDate`, `IBUILabel` becomes
/// `<root>.UIKit.UILabel`, and anything unrecognised falls back to the foundation
/// root object type.
#[derive(Debug, Clone)]
pub struct TypeMapper {
    root_namespace: String,
    families: IndexMap<String, String>,
}

impl TypeMapper {
    pub fn new(options: &GeneratorOptions) -> Self {
        Self {
            root_namespace: options.root_namespace.clone(),
            families: options
                .family_namespaces
                .iter()
                .filter(|(prefix, _)| !prefix.is_empty())
                .map(|(prefix, module)| (prefix.clone(), module.clone()))
                .collect(),
        }
    }

    /// The type name for a designer class tag.
    pub fn type_name(&self, class_tag: &str) -> TypeRef {
        if class_tag.starts_with(FOUNDATION_PREFIX) {
            return TypeRef::new(self.qualify(FOUNDATION_MODULE, class_tag));
        }
        if let Some(name) = class_tag.strip_prefix(DESIGNER_PREFIX) {
            if let Some(module) = self
                .families
                .iter()
                .find_map(|(prefix, module)| name.starts_with(prefix.as_str()).then_some(module))
            {
                return TypeRef::new(self.qualify(module, name));
            }
        }
        self.object_type()
    }

    /// `<root>.Foundation.NSObject`
    pub fn object_type(&self) -> TypeRef {
        TypeRef::new(self.qualify(FOUNDATION_MODULE, "NSObject"))
    }

    /// `<root>.UIKit.UIViewController`
    pub fn view_controller_type(&self) -> TypeRef {
        TypeRef::new(self.qualify(UIKIT_MODULE, "UIViewController"))
    }

    /// The language's own root object type, for values that are not document objects.
    pub fn generic_object_type(&self) -> TypeRef {
        TypeRef::new("System.Object")
    }

    pub fn register_attribute(&self) -> String {
        self.qualify(FOUNDATION_MODULE, "Register")
    }

    pub fn connect_attribute(&self) -> String {
        self.qualify(FOUNDATION_MODULE, "Connect")
    }

    pub fn export_attribute(&self) -> String {
        self.qualify(FOUNDATION_MODULE, "Export")
    }

    fn qualify(&self, module: &str, name: &str) -> String {
        if self.root_namespace.is_empty() {
            format!("{}.{}", module, name)
        } else {
            format!("{}.{}.{}", self.root_namespace, module, name)
        }
    }
}

impl Default for TypeMapper {
    fn default() -> Self {
        Self::new(&GeneratorOptions::default())
    }
}
