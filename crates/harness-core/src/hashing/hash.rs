//! Hash helpers – abstracción para permitir cambiar de algoritmo sin tocar el resto del core.

use sha2::{Digest, Sha256};

/// Hashea un string y devuelve hex (minúsculas, 64 caracteres).
pub fn hash_str(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

/// Identificador estable del contenido de stdin de un caso de prueba.
pub fn input_id(stdin: &str) -> String {
    hash_str(stdin)[..16].to_ascii_uppercase()
}
