//! src/noyau/expression.rs
//!
//! Moteur d’expression : tampon de saisie + résultat courant.
//!
//! Contrats :
//! - `push` / `pop` / `clear` sont les seules mutations ; chacune recalcule
//!   `resultat` avant de rendre la main (jamais de tampon et de résultat désynchronisés).
//! - Le tampon ne contient jamais deux opérateurs consécutifs, jamais de `.`
//!   juste après un opérateur, jamais de `.` en tête (on insère `0` devant),
//!   et au plus un `.` par nombre.
//! - Évaluation gauche → droite à deux paliers (voir `evaluer`), sans parenthèses.

use std::fmt::Display;
use std::marker::PhantomData;
use std::str::FromStr;

use num_traits::Float;

use super::erreur::ErreurNoyau;
use super::operateur::{est_operateur, Operateur};

#[derive(Clone, Debug)]
pub struct Expression<F = f32> {
    valeur: String,
    resultat: String,
    _nombre: PhantomData<F>,
}

impl<F> Default for Expression<F>
where
    F: Float + FromStr + Display,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<F> Expression<F>
where
    F: Float + FromStr + Display,
{
    /// Tampon vide ; le résultat vaut déjà l’évaluation de l’entrée vide.
    pub fn new() -> Self {
        let mut e = Self {
            valeur: String::new(),
            resultat: String::new(),
            _nombre: PhantomData,
        };
        e.recalculer();
        e
    }

    /// Le texte tapé jusqu’ici.
    pub fn valeur(&self) -> &str {
        &self.valeur
    }

    /// L’évaluation de `valeur()`, rendue par `Display` du flottant.
    pub fn resultat(&self) -> &str {
        &self.resultat
    }

    /// Ajoute un caractère (`0-9`, `.`, `+ - × ÷ %`).
    ///
    /// Les suites invalides sont normalisées ou ignorées en silence :
    /// - opérateur après opérateur : le nouveau remplace l’ancien ;
    /// - `.` sur tampon vide : devient `0.` ;
    /// - `.` après un opérateur, ou second `.` dans le même nombre : ignoré.
    pub fn push(&mut self, c: char) {
        let est_op = est_operateur(c);
        if !est_op && c != '.' && !c.is_ascii_digit() {
            log::warn!("caractère hors clavier ignoré: {c:?}");
            return;
        }

        // Un seul opérateur final survit : le plus récent.
        if est_op && self.valeur.chars().last().is_some_and(est_operateur) {
            self.valeur.pop();
        }

        if c == '.' {
            let dernier = self.valeur.chars().last();
            match dernier {
                None => self.valeur.push('0'),
                Some(d) if est_operateur(d) => {
                    log::debug!("'.' refusé après l’opérateur {d:?}");
                    return;
                }
                Some(_) if self.nombre_en_cours().contains('.') => {
                    log::debug!("'.' refusé : le nombre {:?} en a déjà un", self.nombre_en_cours());
                    return;
                }
                Some(_) => {}
            }
        }

        self.valeur.push(c);
        self.recalculer();
    }

    /// Retire le dernier caractère (no-op sur tampon vide), puis recalcule.
    pub fn pop(&mut self) {
        self.valeur.pop();
        self.recalculer();
    }

    /// Vide le tampon, puis recalcule.
    pub fn clear(&mut self) {
        self.valeur.clear();
        self.recalculer();
    }

    /// Les caractères après le dernier opérateur.
    fn nombre_en_cours(&self) -> &str {
        self.valeur.rsplit(est_operateur).next().unwrap_or_default()
    }

    fn recalculer(&mut self) {
        self.resultat = match evaluer::<F>(&self.valeur) {
            Ok(r) => r,
            Err(e) => {
                // push() n’admet que des nombres bien formés : ceci est un bug du noyau.
                log::error!("incohérence interne sur {:?}: {e}", self.valeur);
                unreachable!("{e}");
            }
        };
        log::trace!("valeur={:?} resultat={:?}", self.valeur, self.resultat);
    }
}

/// Évaluation à deux paliers, strictement gauche → droite.
///
/// - `×`, `÷`, `%` replient l’opérande dans `terme` ;
/// - `+`, `-` replient aussi dans `terme`, puis vident `terme` dans `total`.
///
/// L’opérateur précédent est amorcé à `+`. Un nombre vide (tampon qui commence
/// par un opérateur) ne replie rien : `"-5"` vaut `-5`, `"×5"` vaut `0`.
fn evaluer<F>(valeur: &str) -> Result<String, ErreurNoyau>
where
    F: Float + FromStr + Display,
{
    let mut total = F::zero();
    let mut terme = F::zero();
    let mut nombre = String::new();
    let mut precedent = Operateur::Plus;

    for c in valeur.chars() {
        if c.is_ascii_digit() || c == '.' {
            nombre.push(c);
        } else if let Some(op) = Operateur::depuis_glyphe(c) {
            terme = replier(precedent, terme, &nombre)?;
            nombre.clear();
            if op.est_additif() {
                total = total + terme;
                terme = F::zero();
            }
            precedent = op;
        }
    }

    if !nombre.is_empty() {
        terme = replier(precedent, terme, &nombre)?;
    }
    total = total + terme;

    Ok(total.to_string())
}

fn replier<F>(op: Operateur, terme: F, nombre: &str) -> Result<F, ErreurNoyau>
where
    F: Float + FromStr,
{
    if nombre.is_empty() {
        return Ok(terme);
    }
    let operande = nombre
        .parse::<F>()
        .map_err(|_| ErreurNoyau::NombreInvalide(nombre.to_string()))?;
    Ok(op.replier(terme, operande))
}
