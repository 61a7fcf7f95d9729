//! Calculatrice pile: évaluation entière d’expressions (+ - * / et parenthèses)
//! par lecture droite -> gauche sur deux piles.
//!
//! - noyau    : l’évaluateur (aucun état entre deux appels)
//! - app      : saisie par jetons + fenêtre egui (natif + web)
//! - terminal : la même saisie, une ligne par jeton
//! - config   : ligne de commande + logs (natif seulement)

pub mod app;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod noyau;
pub mod terminal;

pub use noyau::{evaluate, EvaluationError};
