// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Deux panneaux exclusifs : calculatrice / CSV (bouton de bascule)
// - Écran en lecture seule : la saisie passe par les boutons et clavier.rs
// - Retour visuel court sur le dernier bouton pressé
// - Boîte “exposant” pour x^y (fournisseur d’exposant du noyau)

use std::time::Duration;

use eframe::egui;

use super::commandes::Commande;
use super::etat::AppCalc;
use crate::noyau::format::format_nombre;
use crate::noyau::moteur::OperationEnAttente;
use crate::noyau::{ActionCsv, OpBinaire, OpUnaire};
use crate::reglages::Mode;

const TAILLE_TOUCHE: [f32; 2] = [52.0, 36.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Calculatrice fx");
                    ui.add_space(12.0);
                    self.bouton_large(ui, self.libelle_bascule(), Commande::BasculerMode);
                });
                ui.add_space(6.0);

                match self.mode {
                    Mode::Calculatrice => self.ui_calculatrice(ui),
                    Mode::Csv => self.ui_csv(ui),
                }

                ui.add_space(8.0);
                ui.separator();
                ui.label(&self.info);
            });

        self.ui_exposant(ui.ctx());
    }

    fn ui_calculatrice(&mut self, ui: &mut egui::Ui) {
        // Opération en attente (ex: "12 +")
        if let OperationEnAttente {
            premier: Some(a),
            operateur: Some(op),
        } = self.session.en_attente()
        {
            ui.weak(format!("{} {}", format_nombre(a), op.symbole()));
        }

        // Écran : affichage seulement (évite la double saisie clavier)
        let mut ecran = self.ecran.clone();
        ui.add(
            egui::TextEdit::singleline(&mut ecran)
                .desired_width(ui.available_width())
                .font(egui::TextStyle::Monospace)
                .hint_text("0")
                .interactive(false),
        );

        ui.add_space(6.0);

        ui.horizontal_wrapped(|ui| {
            for op in OpUnaire::TOUTES {
                self.bouton(ui, op.libelle(), Commande::Unaire(op));
            }
            self.bouton(ui, "xʸ", Commande::Puissance);
        });

        ui.add_space(6.0);

        egui::Grid::new("pave_numerique_fx")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                let lignes: [[Commande; 4]; 4] = [
                    [
                        Commande::Chiffre('7'),
                        Commande::Chiffre('8'),
                        Commande::Chiffre('9'),
                        Commande::Operateur(OpBinaire::Divise),
                    ],
                    [
                        Commande::Chiffre('4'),
                        Commande::Chiffre('5'),
                        Commande::Chiffre('6'),
                        Commande::Operateur(OpBinaire::Fois),
                    ],
                    [
                        Commande::Chiffre('1'),
                        Commande::Chiffre('2'),
                        Commande::Chiffre('3'),
                        Commande::Operateur(OpBinaire::Moins),
                    ],
                    [
                        Commande::Chiffre('0'),
                        Commande::Point,
                        Commande::Egal,
                        Commande::Operateur(OpBinaire::Plus),
                    ],
                ];

                for ligne in lignes {
                    for cmd in ligne {
                        let label = libelle_touche(cmd);
                        self.bouton(ui, &label, cmd);
                    }
                    ui.end_row();
                }

                self.bouton(ui, "AC", Commande::ToutEffacer);
                ui.end_row();
            });
    }

    fn ui_csv(&mut self, ui: &mut egui::Ui) {
        ui.label("Liste (séparée par des virgules) :");
        ui.add(
            egui::TextEdit::multiline(&mut self.csv_entree)
                .desired_width(ui.available_width())
                .desired_rows(3)
                .hint_text("Ex: 4, 8.5, 15, 16")
                .id_salt("csv_entree"),
        );

        ui.horizontal(|ui| {
            ui.label("Indice :");
            ui.add(
                egui::TextEdit::singleline(&mut self.csv_indice)
                    .desired_width(60.0)
                    .id_salt("csv_indice"),
            );
        });

        ui.add_space(6.0);

        ui.horizontal_wrapped(|ui| {
            for action in ActionCsv::TOUTES {
                self.bouton_large(ui, action.libelle(), Commande::Csv(action));
            }
        });

        ui.add_space(6.0);
        ui.label("Sortie :");
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.monospace(&self.csv_sortie);
            });
    }

    /// Boîte modale de saisie de l’exposant (x^y).
    fn ui_exposant(&mut self, ctx: &egui::Context) {
        let Some(texte) = self.exposant.as_mut() else {
            return;
        };

        let mut decision: Option<bool> = None;

        egui::Window::new("Exposant (y)")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Introduire l’exposant (y) :");
                let resp = ui.add(egui::TextEdit::singleline(texte).id_salt("exposant_edit"));
                resp.request_focus();

                if ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    decision = Some(true);
                }

                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        decision = Some(true);
                    }
                    if ui.button("Annuler").clicked() {
                        decision = Some(false);
                    }
                });
            });

        if let Some(valider) = decision {
            self.fermer_exposant(valider);
        }
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, commande: Commande) {
        self.bouton_taille(ui, label, commande, TAILLE_TOUCHE);
    }

    fn bouton_large(&mut self, ui: &mut egui::Ui, label: &str, commande: Commande) {
        self.bouton_taille(ui, label, commande, [120.0, TAILLE_TOUCHE[1]]);
    }

    fn bouton_taille(&mut self, ui: &mut egui::Ui, label: &str, commande: Commande, taille: [f32; 2]) {
        let maintenant = ui.input(|i| i.time);

        let mut b = egui::Button::new(label);
        if self.est_presse(commande, maintenant) {
            b = b.fill(ui.visuals().selection.bg_fill);
            // rafraîchit pour éteindre le retour visuel
            ui.ctx()
                .request_repaint_after(Duration::from_secs_f64(self.duree_pression));
        }

        if ui.add_sized(taille, b).clicked() {
            self.executer(commande);
            self.presser(commande, maintenant);
        }
    }
}

/// Libellé d’une touche du pavé.
fn libelle_touche(cmd: Commande) -> String {
    match cmd {
        Commande::Chiffre(c) => c.to_string(),
        Commande::Point => ".".into(),
        Commande::Egal => "=".into(),
        Commande::Operateur(op) => op.symbole().into(),
        _ => String::new(),
    }
}
