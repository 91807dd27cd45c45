// src/noyau/operateur.rs

use num_traits::Float;

/// Les cinq glyphes acceptés par `Expression::push` en plus des chiffres et du point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Modulo,
}

impl Operateur {
    /// Reconnaît un glyphe d’opérateur (`+ - × ÷ %`).
    pub fn depuis_glyphe(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Moins),
            '×' => Some(Self::Fois),
            '÷' => Some(Self::Divise),
            '%' => Some(Self::Modulo),
            _ => None,
        }
    }

    /// Palier additif (`+`, `-`) : vide le terme courant dans le total.
    /// Les autres (`×`, `÷`, `%`) se replient directement dans le terme.
    pub fn est_additif(self) -> bool {
        matches!(self, Self::Plus | Self::Moins)
    }

    /// Replie une opérande dans le terme courant.
    ///
    /// Sémantique flottante brute : `÷0` donne ±inf, `%0` donne NaN.
    pub fn replier<F: Float>(self, terme: F, operande: F) -> F {
        match self {
            Self::Plus => terme + operande,
            Self::Moins => terme - operande,
            Self::Fois => terme * operande,
            Self::Divise => terme / operande,
            Self::Modulo => terme % operande,
        }
    }
}

/// Raccourci : `c` est-il un glyphe d’opérateur ?
pub fn est_operateur(c: char) -> bool {
    Operateur::depuis_glyphe(c).is_some()
}
