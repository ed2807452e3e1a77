//! src/reglages.rs
//!
//! Réglages de l’application (sans UI, sans noyau).
//!
//! Ordre de chargement (natif) : défauts -> `calculatrice.toml` (optionnel)
//! -> variables `CALC_*`. En wasm32 : défauts seulement.
//!
//! Garde-fous : durées et tailles bornées après chargement.

use serde::Deserialize;
use thiserror::Error;

/// Fichier de réglages optionnel (répertoire courant).
pub const FICHIER_REGLAGES: &str = "calculatrice.toml";

/// Préfixe des variables d’environnement.
pub const PREFIXE_ENV: &str = "CALC_";

const DUREE_PRESSION_MAX_MS: u64 = 1000;
const LARGEUR_MIN: f32 = 360.0;
const HAUTEUR_MIN: f32 = 520.0;

/// En wasm32 le chargement ne peut pas échouer (aucune variante).
#[derive(Debug, Error)]
pub enum ErreurReglages {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("réglages illisibles: {0}")]
    Lecture(#[from] figment::Error),
}

/// Panneau visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Calculatrice,
    Csv,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Reglages {
    /// Filtre `env_logger` si `RUST_LOG` est absent.
    pub niveau_log: String,
    /// Durée du retour visuel d’un bouton pressé.
    pub duree_pression_ms: u64,
    pub mode_initial: Mode,
    pub largeur_fenetre: f32,
    pub hauteur_fenetre: f32,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            niveau_log: "info".to_string(),
            duree_pression_ms: 120,
            mode_initial: Mode::Calculatrice,
            largeur_fenetre: 460.0,
            hauteur_fenetre: 680.0,
        }
    }
}

impl Reglages {
    /// Charge les réglages (fichier + environnement), puis applique les bornes.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn charger() -> Result<Self, ErreurReglages> {
        use figment::providers::{Env, Format, Toml};
        use figment::Figment;

        let r: Reglages = Figment::new()
            .merge(Toml::file(FICHIER_REGLAGES))
            .merge(Env::prefixed(PREFIXE_ENV))
            .extract()?;
        Ok(r.borne())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn charger() -> Result<Self, ErreurReglages> {
        Ok(Self::default())
    }

    /// Garde-fou : valeurs hors bornes ramenées dans l’intervalle.
    pub fn borne(mut self) -> Self {
        self.duree_pression_ms = self.duree_pression_ms.min(DUREE_PRESSION_MAX_MS);
        self.largeur_fenetre = self.largeur_fenetre.max(LARGEUR_MIN);
        self.hauteur_fenetre = self.hauteur_fenetre.max(HAUTEUR_MIN);
        if self.niveau_log.trim().is_empty() {
            self.niveau_log = Self::default().niveau_log;
        }
        self
    }
}
