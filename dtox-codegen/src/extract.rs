//! Metadata extraction: registry declarations to [`DtoClass`] records.

use dtox_core::basename;
use dtox_ir::{
    COLLECTION_MARKER, Category, ClassHandle, DtoClass, FieldDecl, FieldMetadata, Namespaces,
    is_built_in,
};
use indexmap::{IndexMap, IndexSet};

use crate::{Error, Result};

/// Builds [`DtoClass`] metadata from the registry.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    namespaces: Namespaces,
}

impl Extractor {
    pub fn new(namespaces: Namespaces) -> Self {
        Self { namespaces }
    }

    pub fn namespaces(&self) -> &Namespaces {
        &self.namespaces
    }

    /// Extract metadata for every class, in registry order.
    ///
    /// A class path registered twice is extracted once; the first handle wins.
    /// Stops at the first invalid class.
    pub fn extract<'h, I, H>(&self, handles: I) -> Result<Vec<DtoClass>>
    where
        I: IntoIterator<Item = &'h H>,
        H: ClassHandle + ?Sized + 'h,
    {
        let mut seen = IndexSet::new();
        let mut classes = Vec::new();
        for handle in handles {
            if !seen.insert(handle.class_path()) {
                tracing::debug!(class = handle.class_path(), "skipping duplicate registration");
                continue;
            }
            classes.push(self.extract_class(handle)?);
        }
        Ok(classes)
    }

    /// Extract metadata for a single class.
    pub fn extract_class<H: ClassHandle + ?Sized>(&self, handle: &H) -> Result<DtoClass> {
        let class_path = handle.class_path();
        let object_name = basename(class_path).to_string();
        let category = Category::of(class_path);

        let package = if category.is_standard() {
            String::new()
        } else {
            let package = self.namespaces.package_of(class_path).ok_or_else(|| {
                Error::InvalidClassPath {
                    class_path: class_path.to_string(),
                    reason: format!(
                        "{} classes need a package segment after the root namespace",
                        category
                    ),
                }
            })?;
            package.to_string()
        };

        tracing::debug!(class = class_path, %category, "extracting class");

        let mut imports = IndexSet::new();
        let mut fields = IndexMap::new();
        for decl in handle.fields() {
            let field = self.extract_field(class_path, decl, &mut imports)?;
            fields.insert(field.name.clone(), field);
        }

        Ok(DtoClass {
            class_path: class_path.to_string(),
            abstract_path: self.namespaces.strip_root(class_path).join("/"),
            object_name,
            category,
            package,
            imports,
            fields,
        })
    }

    fn extract_field(
        &self,
        class_path: &str,
        decl: &FieldDecl,
        imports: &mut IndexSet<String>,
    ) -> Result<FieldMetadata> {
        let (declared_type, declares_null) = resolve_type(decl).ok_or_else(|| {
            Error::UnsupportedFieldType {
                class: class_path.to_string(),
                field: decl.name.clone(),
                types: decl.types.join(", "),
            }
        })?;
        let built_in = is_built_in(&declared_type);

        let list_element_type = if declared_type == COLLECTION_MARKER {
            let annotations = decl.list_of_annotations();
            if annotations.len() != 1 {
                return Err(Error::InvalidCollectionAnnotation {
                    class: class_path.to_string(),
                    field: decl.name.clone(),
                    count: annotations.len(),
                });
            }
            // Element nullability comes from the target profile, not a `?` marker
            let element = annotations[0].trim();
            Some(element.strip_prefix('?').unwrap_or(element).trim().to_string())
        } else {
            if !decl.list_of_annotations().is_empty() {
                tracing::warn!(
                    class = class_path,
                    field = %decl.name,
                    "list_of is ignored on a field that is not an array"
                );
            }
            None
        };

        if !built_in && self.namespaces.is_dto(&declared_type) {
            imports.insert(declared_type.clone());
        }
        if let Some(element) = &list_element_type
            && !is_built_in(element)
            && self.namespaces.is_dto(element)
        {
            imports.insert(element.clone());
        }

        tracing::debug!(
            class = class_path,
            field = %decl.name,
            ty = %declared_type,
            "extracted field"
        );

        Ok(FieldMetadata {
            name: decl.name.clone(),
            declared_type,
            is_nullable: decl.nullable || declares_null,
            is_built_in: built_in,
            default_value: decl.default.clone(),
            list_element_type,
            description: decl.description_text().map(String::from),
        })
    }
}

/// The single non-null declared type, and whether `null` (or `?type`) was declared.
///
/// Returns `None` when the field declares no type or more than one non-null type.
fn resolve_type(decl: &FieldDecl) -> Option<(String, bool)> {
    let mut declares_null = false;
    let mut types = Vec::new();
    for ty in &decl.types {
        let ty = ty.trim();
        let ty = match ty.strip_prefix('?') {
            Some(rest) => {
                declares_null = true;
                rest
            }
            None => ty,
        };
        if ty.eq_ignore_ascii_case("null") {
            declares_null = true;
        } else if !ty.is_empty() {
            types.push(ty);
        }
    }

    match types.as_slice() {
        [ty] => Some((ty.to_string(), declares_null)),
        // A field typed only `null` stays a (nullable) null field
        [] if declares_null => Some(("null".to_string(), true)),
        _ => None,
    }
}
