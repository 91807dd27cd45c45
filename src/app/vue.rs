// src/app/vue.rs
//
// Vue (UI egui) : natif + web
// ---------------------------
// Objectifs :
// - Écran : tampon en grand (ou "0"), résultat en dessous s’il existe
// - Pavé 4 colonnes, gros boutons carrés (tactile)
// - Aucune logique : un clic = une Action transmise à etat.rs

use eframe::egui;

use super::etat::{Action, AppCalc, Bouton, Icone, BOUTONS, COLONNES};

/// Espacement entre boutons (et marge du pavé).
const ESPACE: f32 = 12.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(ESPACE, ESPACE);

        // Écran collé en bas, aligné à droite (le pavé prend la largeur dispo)
        let cote = ((ui.available_width() - ESPACE * (COLONNES as f32 - 1.0))
            / COLONNES as f32)
            .max(32.0);
        let hauteur_pave = cote * (BOUTONS.len() / COLONNES) as f32
            + ESPACE * ((BOUTONS.len() / COLONNES) as f32 - 1.0);

        ui.with_layout(egui::Layout::bottom_up(egui::Align::Max), |ui| {
            if let Some(action) = self.ui_pave(ui, cote, hauteur_pave) {
                self.executer(action);
            }
            ui.add_space(ESPACE);
            self.ui_ecran(ui);
        });
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        // bottom_up : le résultat d’abord, puis le tampon au-dessus
        if let Some(r) = self.ligne_resultat() {
            ui.label(egui::RichText::new(r).size(24.0));
        }
        ui.label(egui::RichText::new(self.affichage()).size(48.0).strong());
    }

    /// Dessine le pavé ; renvoie l’action du bouton cliqué, s’il y en a un.
    fn ui_pave(&self, ui: &mut egui::Ui, cote: f32, hauteur: f32) -> Option<Action> {
        let mut clic = None;

        ui.allocate_ui_with_layout(
            egui::vec2(ui.available_width(), hauteur),
            egui::Layout::top_down(egui::Align::Min),
            |ui| {
                egui::Grid::new("pave_calculatrice")
                    .num_columns(COLONNES)
                    .spacing([ESPACE, ESPACE])
                    .show(ui, |ui| {
                        for (i, bouton) in BOUTONS.iter().enumerate() {
                            let resp = ui.add_sized([cote, cote], egui::Button::new(texte(bouton)));
                            if resp.clicked() {
                                clic = Some(bouton.action());
                            }
                            if (i + 1) % COLONNES == 0 {
                                ui.end_row();
                            }
                        }
                    });
            },
        );

        clic
    }
}

fn texte(bouton: &Bouton) -> egui::RichText {
    let s = match bouton {
        Bouton::Char { glyphe, .. } => glyphe.to_string(),
        Bouton::Icone { icone, .. } => glyphe_icone(*icone).to_string(),
    };
    egui::RichText::new(s).size(28.0)
}

fn glyphe_icone(icone: Icone) -> &'static str {
    match icone {
        Icone::Effacer => "⌫",
        Icone::Pourcent => "%",
        Icone::Moins => "−",
        Icone::Plus => "+",
        Icone::Calculatrice => "🖩",
    }
}
