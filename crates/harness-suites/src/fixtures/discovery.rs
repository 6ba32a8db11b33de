//! Descubrimiento de programas y fixtures.
//!
//! Convención de nombres junto a cada programa `foo.wacc`:
//! - `foo.<id>.input`: stdin del caso.
//! - `foo.<id>.output`: stdout esperado (obligatorio).
//! - `foo.<id>.exit`: código de salida esperado (opcional; vacío = 0).
//!
//! Solo lecturas del sistema de ficheros: nada aquí invoca al toolchain.
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use harness_core::HarnessError;
use log::debug;

use super::exit_code::parse_exit_code;
use super::test_case::TestCase;

const INPUT_MARKER: &str = "input";
const OUTPUT_MARKER: &str = "output";
const EXIT_MARKER: &str = "exit";

/// Fixture de entrada descubierto para un programa.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct InputFixture {
    pub id: String,
    pub input: PathBuf,
}

impl InputFixture {
    fn sibling(&self, marker: &str) -> PathBuf {
        self.input.with_extension(marker)
    }

    pub fn output_path(&self) -> PathBuf {
        self.sibling(OUTPUT_MARKER)
    }

    pub fn exit_path(&self) -> PathBuf {
        self.sibling(EXIT_MARKER)
    }
}

/// Programas bajo `root` con la extensión dada. Un fichero se devuelve tal
/// cual; un directorio se recorre recursivamente sin seguir enlaces
/// simbólicos a directorios. Orden estable.
pub fn discover_programs(root: &Path, extension: &str) -> Result<Vec<PathBuf>, HarnessError> {
    if !fs::metadata(root)?.is_dir() {
        return Ok(vec![root.to_path_buf()]);
    }
    let mut found = Vec::new();
    walk(root, extension, &mut found)?;
    found.sort();
    Ok(found)
}

fn walk(dir: &Path, extension: &str, found: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        // file_type no sigue symlinks: un enlace al propio directorio no se recorre
        if entry.file_type()?.is_dir() {
            walk(&path, extension, found)?;
        } else if path.extension().is_some_and(|ext| ext == extension) {
            found.push(path);
        }
    }
    Ok(())
}

/// Fixtures `<stem>.<id>.input` hermanos de `program`.
pub fn discover_inputs(program: &Path) -> Result<Vec<InputFixture>, HarnessError> {
    let dir = match program.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let Some(stem) = program.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
        return Ok(Vec::new());
    };
    let prefix = format!("{stem}.");
    let suffix = format!(".{INPUT_MARKER}");

    let mut inputs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let id = name.strip_prefix(&prefix).and_then(|rest| rest.strip_suffix(&suffix));
        if let Some(id) = id.filter(|id| !id.is_empty()) {
            inputs.push(InputFixture { id: id.to_string(),
                                       input: path.clone() });
        }
    }
    inputs.sort();
    Ok(inputs)
}

/// Lee el trío de fixtures y construye el caso.
pub fn load_case(program: &Path, fixture: &InputFixture) -> Result<TestCase, HarnessError> {
    let stdin = fs::read_to_string(&fixture.input)?;

    let output_path = fixture.output_path();
    let expected_stdout = read_fixture(&output_path)?.ok_or(HarnessError::FixtureMissing { path: output_path })?;

    let exit_path = fixture.exit_path();
    let expected_exit_code = match read_fixture(&exit_path)? {
        Some(content) => parse_exit_code(&content, &exit_path)?,
        None => 0,
    };

    Ok(TestCase { program: program.to_path_buf(),
                  fixture_id: fixture.id.clone(),
                  stdin,
                  expected_stdout,
                  expected_exit_code })
}

fn read_fixture(path: &Path) -> Result<Option<String>, HarnessError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Todos los casos derivables bajo `root`. Falla en el primer conjunto de
/// fixtures mal formado.
pub fn generate_test_cases(root: &Path, extension: &str) -> Result<Vec<TestCase>, HarnessError> {
    let mut cases = Vec::new();
    for program in discover_programs(root, extension)? {
        for fixture in discover_inputs(&program)? {
            cases.push(load_case(&program, &fixture)?);
        }
    }
    debug!("generated {} test cases under {}", cases.len(), root.display());
    Ok(cases)
}
