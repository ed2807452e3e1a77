// src/noyau/format.rs

use std::fmt;

/// Texte du champ info au démarrage et après AC.
pub const INFO_DEFAUT: &str = "Info sur le nombre";

/* ------------------------ Affichage des nombres ------------------------ */

/// Affichage “écran” d’un f64 :
/// - entiers sans partie décimale (7, pas 7.0)
/// - -0 affiché 0
/// - notation exponentielle hors de [1e-6, 1e21) : 1e+21, 1.5e-7
pub fn format_nombre(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }

    let a = v.abs();
    if !(1e-6..1e21).contains(&a) {
        let s = format!("{v:e}");
        return match s.split_once('e') {
            Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
            _ => s,
        };
    }

    format!("{v}")
}

/// Liste -> texte CSV (séparateur ", ").
pub fn format_liste(valeurs: &[f64]) -> String {
    valeurs
        .iter()
        .map(|v| format_nombre(*v))
        .collect::<Vec<_>>()
        .join(", ")
}

/* ------------------------ Bandes de grandeur ------------------------ */

/// Classement informatif d’un résultat (n’influence jamais le calcul).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bande {
    Inferieure100,
    Entre100Et200,
    Superieure200,
}

impl Bande {
    pub fn classer(v: f64) -> Self {
        if v < 100.0 {
            Bande::Inferieure100
        } else if v <= 200.0 {
            Bande::Entre100Et200
        } else {
            Bande::Superieure200
        }
    }
}

impl fmt::Display for Bande {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Bande::Inferieure100 => "Le résultat est inférieur à 100",
            Bande::Entre100Et200 => "Le résultat est entre 100 et 200",
            Bande::Superieure200 => "Le résultat est supérieur à 200",
        };
        f.write_str(s)
    }
}

/// Texte du champ info : bande de grandeur si fini, sinon erreur.
pub fn libelle_info(operation: &str, resultat: f64) -> String {
    if !resultat.is_finite() {
        return format!("Info : erreur dans {operation}");
    }
    format!("Opération : {operation}. {}", Bande::classer(resultat))
}
