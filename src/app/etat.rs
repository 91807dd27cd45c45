//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder l’unique moteur `Expression` (pas de global) et décrire le
//! pavé de boutons. Chaque bouton porte une `Action` sans argument.
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par push / pop / clear du noyau.
//! - Pas d’abonnement : la vue relit `valeur()` / `resultat()` à chaque frame.

use crate::noyau::Expression;

/// Ce que fait un bouton une fois pressé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Push(char),
    Pop,
    Clear,
    /// Bouton décoratif ou pas encore branché ("=", icône calculatrice).
    Aucune,
}

/// Icônes du pavé (rendues par un glyphe unicode, cf. vue.rs).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icone {
    Effacer,
    Pourcent,
    Moins,
    Plus,
    Calculatrice,
}

/// Un bouton du pavé : soit un caractère, soit une icône.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bouton {
    Char { glyphe: char, action: Action },
    Icone { icone: Icone, action: Action },
}

impl Bouton {
    pub fn action(&self) -> Action {
        match self {
            Bouton::Char { action, .. } | Bouton::Icone { action, .. } => *action,
        }
    }
}

const fn touche(c: char) -> Bouton {
    Bouton::Char {
        glyphe: c,
        action: Action::Push(c),
    }
}

/// Nombre de colonnes de la grille.
pub const COLONNES: usize = 4;

/// Pavé complet, ligne par ligne.
pub const BOUTONS: [Bouton; 20] = [
    Bouton::Char { glyphe: 'c', action: Action::Clear },
    Bouton::Icone { icone: Icone::Effacer, action: Action::Pop },
    Bouton::Icone { icone: Icone::Pourcent, action: Action::Push('%') },
    touche('÷'),
    touche('7'),
    touche('8'),
    touche('9'),
    touche('×'),
    touche('4'),
    touche('5'),
    touche('6'),
    Bouton::Icone { icone: Icone::Moins, action: Action::Push('-') },
    touche('1'),
    touche('2'),
    touche('3'),
    Bouton::Icone { icone: Icone::Plus, action: Action::Push('+') },
    Bouton::Icone { icone: Icone::Calculatrice, action: Action::Aucune },
    touche('0'),
    touche('.'),
    Bouton::Char { glyphe: '=', action: Action::Aucune },
];

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub expression: Expression,
}

impl AppCalc {
    /// Applique une action au moteur. Au retour, valeur et résultat sont à jour.
    pub fn executer(&mut self, action: Action) {
        match action {
            Action::Push(c) => self.expression.push(c),
            Action::Pop => self.expression.pop(),
            Action::Clear => self.expression.clear(),
            Action::Aucune => log::debug!("bouton sans action"),
        }
    }

    /// Texte principal : le tampon, ou "0" s’il est vide.
    pub fn affichage(&self) -> &str {
        match self.expression.valeur() {
            "" => "0",
            v => v,
        }
    }

    /// Ligne secondaire : le résultat, seulement s’il est non vide.
    pub fn ligne_resultat(&self) -> Option<&str> {
        Some(self.expression.resultat()).filter(|r| !r.is_empty())
    }
}

/// Clavier physique -> action (natif + web).
/// `*` / `x` donnent `×`, `/` donne `÷`.
pub fn action_clavier(texte: &str) -> Vec<Action> {
    texte
        .chars()
        .filter_map(|c| match c {
            '0'..='9' | '.' | '+' | '-' | '%' | '×' | '÷' => Some(Action::Push(c)),
            '*' | 'x' | 'X' => Some(Action::Push('×')),
            '/' => Some(Action::Push('÷')),
            _ => None,
        })
        .collect()
}
