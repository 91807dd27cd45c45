//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - operateur.rs  : glyphes + - × ÷ %, paliers additif / multiplicatif
//! - expression.rs : tampon de saisie + résultat (push / pop / clear)
//! - erreur.rs     : violations de cohérence interne (jamais montrées à l’utilisateur)

pub mod erreur;
pub mod expression;
pub mod operateur;

#[cfg(test)]
mod tests_expression;


// API publique minimale
pub use expression::Expression;
