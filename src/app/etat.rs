//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (saisie, résultat, erreur, démarche)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Une erreur efface la saisie : l’utilisateur recommence (boucle de reprise).

use super::saisie::Saisie;
use crate::noyau::Demarche;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub saisie: Saisie,
    pub jeton: String, // champ de frappe libre (un jeton, validé par Enter)

    // --- sorties ---
    pub resultat: String, // "The result is: …"
    pub erreur: String,   // message d’erreur (si l’évaluation échoue)

    // --- démarche (une ligne par réduction) ---
    pub demarche: Demarche,

    // --- UX ---
    // Permet à vue.rs de redonner le focus au champ après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            saisie: Saisie::default(),
            jeton: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (saisie + résultats).
    pub fn reset_total(&mut self) {
        self.clear_entree();
        self.clear_resultats();
    }

    /// C : effacer seulement la saisie (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.saisie.effacer();
        self.jeton.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à la saisie).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// DEL : retire le dernier jeton saisi.
    pub fn retirer_dernier(&mut self) {
        self.saisie.retirer_dernier();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX :
    /// - On CONSERVE `resultat` (dernier résultat) pour ne pas “effacer l’écran” sur une faute.
    /// - On vide la saisie (on redemande) et la démarche (non fiable).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.saisie.effacer();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet (texte + démarche).
    pub fn set_resultat(&mut self, resultat: impl Into<String>, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.demarche = demarche;
        self.focus_entree = true;
    }
}
