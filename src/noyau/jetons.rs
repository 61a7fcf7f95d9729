// src/noyau/jetons.rs
//
// Jetons de la pile d’opérateurs : + - * / ( )
// Une ')' empilée sert de borne : le dépilement s’arrête dessus quand on
// atteint la '(' correspondante (on lit de droite à gauche).

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbole {
    Plus,
    Moins,
    Fois,
    Divise,

    ParG, // (
    ParD, // )
}

impl Symbole {
    /// Reconnaît un caractère du jeu de symboles.
    pub fn depuis(c: char) -> Option<Symbole> {
        match c {
            '+' => Some(Symbole::Plus),
            '-' => Some(Symbole::Moins),
            '*' => Some(Symbole::Fois),
            '/' => Some(Symbole::Divise),
            '(' => Some(Symbole::ParG),
            ')' => Some(Symbole::ParD),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Symbole::Plus => '+',
            Symbole::Moins => '-',
            Symbole::Fois => '*',
            Symbole::Divise => '/',
            Symbole::ParG => '(',
            Symbole::ParD => ')',
        }
    }

    /// Opérateur binaire (hors parenthèses).
    pub fn est_operateur(self) -> bool {
        self.priorite().is_some()
    }

    /// Table de priorité : * / passent avant + -.
    /// None pour les parenthèses (jamais comparées).
    pub fn priorite(self) -> Option<u8> {
        match self {
            Symbole::Plus | Symbole::Moins => Some(1),
            Symbole::Fois | Symbole::Divise => Some(10),
            Symbole::ParG | Symbole::ParD => None,
        }
    }
}

impl fmt::Display for Symbole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
