use dtox_ir::DtoClass;
use indexmap::IndexMap;

/// Two classes whose generated files share a basename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasenameCollision {
    pub basename: String,
    pub first: String,
    pub second: String,
}

/// Find classes that export under the same basename.
///
/// Targets name types by basename only, so two such classes cannot both be
/// imported into one file. Each later class is reported against the first
/// class with that basename.
pub fn find_basename_collisions(classes: &[DtoClass]) -> Vec<BasenameCollision> {
    let mut seen: IndexMap<&str, &str> = IndexMap::new();
    let mut collisions = Vec::new();
    for class in classes {
        match seen.get(class.object_name.as_str()) {
            Some(first) => collisions.push(BasenameCollision {
                basename: class.object_name.clone(),
                first: first.to_string(),
                second: class.class_path.clone(),
            }),
            None => {
                seen.insert(&class.object_name, &class.class_path);
            }
        }
    }
    collisions
}
