//! src/terminal.rs
//!
//! Session texte : un jeton par ligne, "=" calcule, "C" efface.
//! Sur erreur : message, saisie vidée, on redemande (jusqu’à un succès).
//! Fin d’entrée (EOF) : on s’arrête sans résultat.

use std::io::{self, BufRead, Write};

use num_bigint::BigInt;

use crate::app::saisie::{Commande, Saisie};
use crate::noyau::evaluate;

pub const INVITE: &str = "Enter a character (enter '=' to calculate, 'C' to clear): ";

/// Boucle complète sur `entree` / `sortie` (stdin/stdout en pratique).
pub fn lancer_session<R: BufRead, W: Write>(
    entree: R,
    sortie: &mut W,
) -> io::Result<Option<BigInt>> {
    let mut lignes = entree.lines();
    let mut saisie = Saisie::default();

    loop {
        write!(sortie, "{INVITE}")?;
        sortie.flush()?;

        let Some(ligne) = lignes.next() else {
            log::debug!("fin d’entrée, session abandonnée");
            return Ok(None);
        };
        let ligne = ligne?;

        match saisie.saisir(&ligne) {
            Commande::Ajout => writeln!(sortie, "Current input: {}", saisie.courant())?,
            Commande::Effacer => {
                log::info!("saisie effacée");
                writeln!(sortie, "All input cleared.")?;
            }
            Commande::Calculer => {
                let expression = saisie.courant();
                match evaluate(&expression) {
                    Ok(valeur) => {
                        writeln!(sortie, "The result is: {valeur}")?;
                        return Ok(Some(valeur));
                    }
                    Err(e) => {
                        log::info!("échec sur {expression:?}: {e}");
                        writeln!(sortie, "An error occurred: {e}")?;
                        saisie.effacer();
                    }
                }
            }
        }
    }
}
