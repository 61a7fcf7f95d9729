// src/app/vue.rs
//
// Vue (UI egui): natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Chaque bouton = un jeton ; "=" calcule, "C" efface (comme au terminal)
// - Champ libre : un jeton arbitraire, validé par Enter
// - Focus redonné au champ après chaque clic (focus_entree)

use eframe::egui;

use super::etat::AppCalc;
use super::saisie::{Commande, JETON_CALCUL, JETON_EFFACER};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice pile");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Current input:");
        Self::champ_monospace(ui, "saisie_out", &self.saisie.courant(), 1);

        ui.add_space(6.0);

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.jeton)
                .desired_width(ui.available_width())
                .hint_text("Jeton puis Enter (ex: 12, +, (, =, C)")
                .id_salt("jeton_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter fait perdre le focus au champ : on valide le jeton à ce moment-là.
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.lost_focus() && enter {
            let jeton = std::mem::take(&mut self.jeton);
            self.saisir_jeton(&jeton);
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            // Contrat: C = saisie seulement ; CLR = résultat seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement la saisie", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);
            self.bouton_action(ui, "DEL", "Retire le dernier jeton", Action::Retirer);
        });

        ui.add_space(8.0);

        self.ui_pave(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_pile")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in [
                    ["7", "8", "9", "/"],
                    ["4", "5", "6", "*"],
                    ["1", "2", "3", "-"],
                    ["0", "(", ")", "+"],
                ] {
                    for jeton in ligne {
                        self.bouton_jeton(ui, jeton);
                    }
                    ui.end_row();
                }
            });

        ui.add_space(6.0);
        let eq = ui.add_sized([64.0, 32.0], egui::Button::new(JETON_CALCUL));
        if eq.clicked() {
            self.saisir_jeton(JETON_CALCUL);
        }
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        if self.resultat.is_empty() {
            ui.monospace("—");
        } else {
            Self::champ_monospace(ui, "resultat_out", &self.resultat, 1);
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                let texte = self.demarche.texte();
                let rows = self.demarche.etapes.len().max(1);
                Self::champ_monospace(ui, "demarche_out", &texte, rows);
            });
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.saisir_jeton(JETON_EFFACER),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Retirer => self.retirer_dernier(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_jeton(&mut self, ui: &mut egui::Ui, jeton: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(jeton));
        if resp.clicked() {
            self.saisir_jeton(jeton);
        }
    }

    /// Un jeton, quelle que soit sa provenance (bouton ou champ libre).
    fn saisir_jeton(&mut self, jeton: &str) {
        match self.saisie.saisir(jeton) {
            Commande::Ajout => {}
            Commande::Effacer => {
                log::info!("saisie effacée");
                self.jeton.clear();
            }
            Commande::Calculer => self.eval_via_noyau(),
        }
        self.focus_entree = true;
    }

    /// Évalue la saisie via le noyau, puis dépose résultat/démarche dans l’état UI.
    fn eval_via_noyau(&mut self) {
        let expression = self.saisie.courant();

        match crate::noyau::evaluate_with_trace(&expression) {
            Ok((valeur, demarche)) => {
                self.set_resultat(format!("The result is: {valeur}"), demarche);
            }
            Err(e) => {
                log::info!("échec sur {expression:?}: {e}");
                self.set_erreur(e.to_string());
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Retirer,
}
