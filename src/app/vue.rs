// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Pas de saisie texte : les expressions sont construites (catalogue + compositeur)
// - Tactile : gros boutons, pas de raccourci obligatoire

use eframe::egui;

use calculatrice_expr::noyau::Op;

use super::etat::{AppCalc, Cote, Simplification, CONSTANTE_MAX};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice d’expressions");
                ui.add_space(6.0);

                self.ui_catalogue(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_actions(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_catalogue(&mut self, ui: &mut egui::Ui) {
        let titre_courant = self
            .exemples
            .get(self.choix)
            .map(|(t, _)| *t)
            .unwrap_or("—");

        let mut choisi: Option<usize> = None;
        ui.horizontal(|ui| {
            ui.label("Exemple :");
            egui::ComboBox::from_id_salt("catalogue_exemples")
                .selected_text(titre_courant)
                .show_ui(ui, |ui| {
                    for (i, (titre, _)) in self.exemples.iter().enumerate() {
                        if ui.selectable_label(i == self.choix, *titre).clicked() {
                            choisi = Some(i);
                        }
                    }
                });

            if ui
                .add_sized([72.0, 30.0], egui::Button::new("Rétablir"))
                .on_hover_text("Recharge l’exemple tel que construit")
                .clicked()
            {
                self.retablir();
            }
        });

        if let Some(i) = choisi {
            self.choisir_exemple(i);
        }
    }

    fn ui_actions(&mut self, ui: &mut egui::Ui) {
        ui.label("Simplifier :");
        ui.horizontal_wrapped(|ui| {
            self.bouton_simplif(ui, Simplification::Top, "Règles à la racine seulement");
            self.bouton_simplif(ui, Simplification::All, "Une passe sur tout l’arbre");
            self.bouton_simplif(
                ui,
                Simplification::PointFixe,
                "simplify_all répété jusqu’à stabilité",
            );
        });

        ui.add_space(6.0);

        // Compositeur : op(x, k) ou op(k, x)
        ui.label("Composer :");
        ui.horizontal_wrapped(|ui| {
            for op in Op::TOUS {
                ui.selectable_value(&mut self.op, op, op.symbole());
            }

            ui.separator();

            let mut k = self.constante;
            let resp = ui.add(
                egui::DragValue::new(&mut k)
                    .speed(1)
                    .range(-CONSTANTE_MAX..=CONSTANTE_MAX)
                    .prefix("k = "),
            );
            if resp.changed() {
                self.set_constante(k);
            }

            ui.separator();

            let sym = self.op.symbole();
            if ui
                .add_sized([72.0, 30.0], egui::Button::new(format!("x {sym} k")))
                .clicked()
            {
                self.envelopper(Cote::Gauche);
            }
            if ui
                .add_sized([72.0, 30.0], egui::Button::new(format!("k {sym} x")))
                .clicked()
            {
                self.envelopper(Cote::Droite);
            }
        });

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().warn_fg_color, &self.erreur);
        }
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        ui.label("Expression :");
        Self::champ_monospace(ui, "texte_out", &self.texte(), 1);

        ui.add_space(6.0);

        ui.label("Valeur :");
        Self::champ_monospace(ui, "valeur_out", &self.valeur(), 1);

        ui.add_space(6.0);

        ui.label("Lecture étendue :");
        Self::champ_monospace(ui, "lecture_out", &self.lecture().to_string(), 1);

        ui.add_space(6.0);

        egui::CollapsingHeader::new("Arbre")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_monospace(ui, "arbre_out", &self.arbre(), 2);
            });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                egui::Grid::new("demarche_grille")
                    .num_columns(2)
                    .spacing([12.0, 4.0])
                    .striped(true)
                    .show(ui, |ui| {
                        for et in &self.demarche {
                            ui.label(&et.action);
                            ui.monospace(et.expr.to_string());
                            ui.end_row();
                        }
                    });
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

    fn bouton_simplif(&mut self, ui: &mut egui::Ui, s: Simplification, tip: &str) {
        let resp = ui
            .add_sized([110.0, 30.0], egui::Button::new(s.libelle()))
            .on_hover_text(tip);

        if resp.clicked() {
            self.simplifier(s);
        }
    }
}
