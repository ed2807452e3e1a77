//! Noyau fx (sans UI)
//!
//! Organisation interne :
//! - erreur.rs     : taxonomie des erreurs + `Echec` (opération + cause)
//! - saisie.rs     : normalisation texte -> f64 (virgule décimale)
//! - operations.rs : tables unaires / binaires (NaN = hors domaine)
//! - moteur.rs     : `Session` (opération en attente) + exposant injectable
//! - csv.rs        : listes CSV (parse, somme, moyenne, tri, retraits)
//! - format.rs     : affichage des nombres + bandes de grandeur

pub mod csv;
pub mod erreur;
pub mod format;
pub mod moteur;
pub mod operations;
pub mod saisie;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use csv::ActionCsv;
pub use erreur::{Echec, ErreurCalc};
pub use moteur::{Resultat, Session};
pub use operations::{OpBinaire, OpUnaire};
