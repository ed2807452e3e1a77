// src/noyau/saisie.rs
//
// Normalisation d’une saisie texte -> f64 validé.
// - trim ; vide => EntreeVide
// - virgule décimale (locale) => point (première occurrence seulement)
// - parse f64 ; échec OU non fini => PasUnNombre

use super::erreur::ErreurCalc;

/// Vue “étiquetée” d’une saisie normalisée.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Saisie {
    Nombre(f64),
    Vide,
    PasUnNombre,
}

impl Saisie {
    pub fn lire(texte: &str) -> Self {
        match normaliser(texte) {
            Ok(v) => Saisie::Nombre(v),
            Err(ErreurCalc::EntreeVide) => Saisie::Vide,
            Err(_) => Saisie::PasUnNombre,
        }
    }
}

/// Normalise un texte en nombre fini.
pub fn normaliser(texte: &str) -> Result<f64, ErreurCalc> {
    let t = texte.trim();
    if t.is_empty() {
        return Err(ErreurCalc::EntreeVide);
    }

    let t = t.replacen(',', ".", 1);
    match t.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ErreurCalc::PasUnNombre),
    }
}
