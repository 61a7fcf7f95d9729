//! src/app/saisie.rs
//!
//! Accumulation des jetons saisis (commune au terminal et à la fenêtre).
//!
//! Contrats :
//! - "="        : demande le calcul (le jeton n’est pas ajouté)
//! - "C" / "c"  : efface tout ce qui a été saisi
//! - autre      : ajouté tel quel (suite de caractères arbitraire)

/// Jeton qui déclenche le calcul.
pub const JETON_CALCUL: &str = "=";

/// Jeton d’effacement (casse ignorée).
pub const JETON_EFFACER: &str = "C";

/// Ce que la saisie d’un jeton demande à l’appelant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commande {
    Ajout,
    Effacer,
    Calculer,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Saisie {
    jetons: Vec<String>,
}

impl Saisie {
    pub fn saisir(&mut self, jeton: &str) -> Commande {
        if jeton == JETON_CALCUL {
            return Commande::Calculer;
        }
        if jeton.eq_ignore_ascii_case(JETON_EFFACER) {
            self.effacer();
            return Commande::Effacer;
        }
        self.jetons.push(jeton.to_string());
        Commande::Ajout
    }

    pub fn effacer(&mut self) {
        self.jetons.clear();
    }

    /// DEL : retire le dernier jeton entier.
    pub fn retirer_dernier(&mut self) -> Option<String> {
        self.jetons.pop()
    }

    /// Expression accumulée (concaténation des jetons).
    pub fn courant(&self) -> String {
        self.jetons.concat()
    }

    pub fn est_vide(&self) -> bool {
        self.jetons.is_empty()
    }
}
