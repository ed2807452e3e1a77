//! src/app/etat.rs
//!
//! État UI (sans vue, sans évaluation).
//!
//! Rôle : contenir les champs visibles (écran, info, CSV), le panneau actif,
//! la session du noyau et le retour visuel des boutons.
//!
//! Contrats :
//! - Aucun calcul ici : tout passe par `commandes.rs` -> noyau.
//! - Actions déterministes, sans effet de bord caché.

use crate::noyau::format::INFO_DEFAUT;
use crate::noyau::Session;
use crate::reglages::{Mode, Reglages};

use super::commandes::Commande;

/// Dernier bouton pressé (retour visuel court).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pression {
    pub commande: Commande,
    /// Horodatage egui (secondes).
    pub instant: f64,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- calculatrice ---
    pub ecran: String,
    pub info: String,
    pub session: Session,

    // --- CSV ---
    pub csv_entree: String,
    pub csv_sortie: String,
    pub csv_indice: String,

    // --- panneaux ---
    pub mode: Mode,

    /// Boîte “exposant” ouverte (Some = texte en cours de saisie).
    pub exposant: Option<String>,

    // --- UX ---
    pub pression: Option<Pression>,
    /// Durée du retour visuel (secondes).
    pub duree_pression: f64,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::avec_reglages(&Reglages::default())
    }
}

impl AppCalc {
    pub fn avec_reglages(reglages: &Reglages) -> Self {
        Self {
            ecran: String::new(),
            info: INFO_DEFAUT.to_string(),
            session: Session::new(),
            csv_entree: String::new(),
            csv_sortie: String::new(),
            csv_indice: String::new(),
            mode: reglages.mode_initial,
            exposant: None,
            pression: None,
            duree_pression: reglages.duree_pression_ms as f64 / 1000.0,
        }
    }

    /// AC : écran vide, session remise à zéro, info par défaut.
    pub fn tout_effacer(&mut self) {
        self.ecran.clear();
        self.session.reinitialiser();
        self.info = INFO_DEFAUT.to_string();
        self.exposant = None;
    }

    pub fn basculer_mode(&mut self) {
        self.mode = match self.mode {
            Mode::Calculatrice => Mode::Csv,
            Mode::Csv => Mode::Calculatrice,
        };
        log::info!("panneau actif : {:?}", self.mode);
    }

    /// Libellé du bouton de bascule : le panneau qu’on va ouvrir.
    pub fn libelle_bascule(&self) -> &'static str {
        match self.mode {
            Mode::Calculatrice => "Mode CSV",
            Mode::Csv => "Calculatrice",
        }
    }

    pub fn presser(&mut self, commande: Commande, maintenant: f64) {
        self.pression = Some(Pression {
            commande,
            instant: maintenant,
        });
    }

    /// Vrai tant que le retour visuel de `commande` est actif.
    pub fn est_presse(&self, commande: Commande, maintenant: f64) -> bool {
        matches!(
            self.pression,
            Some(p) if p.commande == commande && maintenant - p.instant < self.duree_pression
        )
    }
}
