use std::path::{Path, PathBuf};

use harness_core::constants::{EXIT_SEMANTIC_ERROR, EXIT_SYNTAX_ERROR, EXIT_VALID};
use harness_core::HarnessError;
use indexmap::IndexMap;

/// Grupo de programas de ejemplo que comparten código de salida esperado.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub dir: PathBuf,
    pub expected_exit_code: i32,
}

impl Category {
    pub fn new(name: impl Into<String>, dir: impl Into<PathBuf>, expected_exit_code: i32) -> Self {
        Self { name: name.into(),
               dir: dir.into(),
               expected_exit_code }
    }
}

/// Conjunto ordenado de categorías, indexado por nombre.
pub type Categories = IndexMap<String, Category>;

pub fn categories<I>(items: I) -> Categories
    where I: IntoIterator<Item = Category>
{
    items.into_iter().map(|c| (c.name.clone(), c)).collect()
}

/// Categorías estándar bajo el directorio `examples` del compilador.
pub fn default_categories(examples_root: &Path) -> Categories {
    categories([Category::new("Valid", examples_root.join("valid"), EXIT_VALID),
                Category::new("Invalid-Syntax", examples_root.join("invalid").join("syntaxErr"), EXIT_SYNTAX_ERROR),
                Category::new("Invalid-Semantic",
                              examples_root.join("invalid").join("semanticErr"),
                              EXIT_SEMANTIC_ERROR)])
}

/// Aplica el filtro del llamador. Sin filtro (o vacío) se ejecuta todo, en
/// el orden original; con filtro, en el orden pedido.
pub fn select<'a>(all: &'a Categories, filter: Option<&[String]>) -> Result<Vec<&'a Category>, HarnessError> {
    match filter {
        None => Ok(all.values().collect()),
        Some(names) if names.is_empty() => Ok(all.values().collect()),
        Some(names) => names.iter()
                            .map(|name| all.get(name).ok_or_else(|| HarnessError::UnknownCategory(name.clone())))
                            .collect(),
    }
}
