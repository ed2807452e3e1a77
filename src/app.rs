// src/app.rs
//
// Calculatrice fx — module App (racine)
// -------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat, commandes, clavier, vue)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Le clavier est traité ici, une fois par frame, avant la vue :
// chaque événement devient au plus une Commande (voir clavier.rs).

pub mod clavier;
pub mod commandes;
pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Écran non interactif : un widget focus = champ CSV ou boîte exposant.
        let focus_ailleurs = ctx.memory(|m| m.focused().is_some());

        let (commandes, maintenant) = ctx.input(|i| {
            let cmds: Vec<_> = i
                .events
                .iter()
                .filter_map(|ev| clavier::depuis_evenement(ev, i.modifiers, focus_ailleurs))
                .collect();
            (cmds, i.time)
        });

        for cmd in commandes {
            self.executer(cmd);
            self.presser(cmd, maintenant);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
