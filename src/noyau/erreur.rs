// src/noyau/erreur.rs

use thiserror::Error;

/// Violations de cohérence interne du noyau.
///
/// Aucune n’est atteignable par une suite de `push`/`pop`/`clear` :
/// les règles d’admission de `push` garantissent des nombres bien formés.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurNoyau {
    #[error("nombre invalide dans le tampon: {0:?}")]
    NombreInvalide(String),
}
