//! Noyau entier (pile)
//!
//! Organisation interne :
//! - pile.rs       : pile LIFO générique
//! - jetons.rs     : symboles + table de priorité
//! - classement.rs : prédicats d’adjacence (opérateur, signe, début de nombre…)
//! - erreur.rs     : erreurs typées
//! - eval.rs       : lecture droite -> gauche + réductions

pub mod classement;
pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod pile;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use erreur::EvaluationError;
pub use eval::{evaluate, evaluate_with_trace, Demarche};
