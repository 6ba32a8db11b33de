//! Artifact transitorio del pipeline.
//!
//! Cada etapa escribe su resultado (ensamblador o binario) en un fichero
//! temporal cuyo único dueño es la invocación del pipeline que lo creó. El
//! fichero se borra al soltar el `PipelineArtifact`, sea cual sea la salida
//! (éxito, fallo de etapa o timeout).
use std::io;
use std::path::Path;

use tempfile::TempPath;

use crate::errors::Stage;

#[derive(Debug)]
pub struct PipelineArtifact {
    path: TempPath,
    stage: Stage,
}

impl PipelineArtifact {
    /// Reserva un fichero temporal vacío para la salida de `stage`.
    pub(crate) fn reserve(stage: Stage, suffix: &str) -> io::Result<Self> {
        let path = tempfile::Builder::new().prefix("wacc-")
                                           .suffix(suffix)
                                           .tempfile()?
                                           .into_temp_path();
        Ok(Self { path, stage })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Etapa que produjo este artifact.
    pub fn stage(&self) -> Stage {
        self.stage
    }
}
