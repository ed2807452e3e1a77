//! Noyau — listes CSV
//!
//! Le texte source est re-parsé à chaque action (pas de liste en cache).
//! Une liste n’existe que si TOUS ses éléments sont des nombres finis.

use std::cmp::Ordering;
use std::str::FromStr;

use num_traits::ToPrimitive;

use super::erreur::{Echec, ErreurCalc};
use super::format::{format_liste, format_nombre, libelle_info};
use super::saisie::normaliser;

const NOM_CSV: &str = "CSV";

/* ------------------------ Séquence ------------------------ */

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SequenceNumerique(Vec<f64>);

impl From<Vec<f64>> for SequenceNumerique {
    fn from(v: Vec<f64>) -> Self {
        Self(v)
    }
}

impl SequenceNumerique {
    /// "1, 2,,3" -> [1, 2, 3]
    pub fn parse(texte: &str) -> Result<Self, ErreurCalc> {
        let brut = texte.trim();
        if brut.is_empty() {
            return Err(ErreurCalc::SequenceVide);
        }

        let jetons: Vec<&str> = brut
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();
        if jetons.is_empty() {
            return Err(ErreurCalc::SequenceIncomplete);
        }

        jetons
            .into_iter()
            .map(|t| normaliser(t).map_err(|_| ErreurCalc::SequenceNonNumerique))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn somme(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn moyenne(&self) -> Result<f64, ErreurCalc> {
        if self.0.is_empty() {
            return Err(ErreurCalc::SequenceVide);
        }
        Ok(self.somme() / self.0.len() as f64)
    }

    /// Tri croissant stable : valeurs égales (0 et -0 compris) dans l’ordre d’entrée.
    pub fn trier(mut self) -> Self {
        self.0.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        self
    }

    pub fn inverser(mut self) -> Self {
        self.0.reverse();
        self
    }

    pub fn retirer_dernier(mut self) -> Result<Self, ErreurCalc> {
        self.0.pop().ok_or(ErreurCalc::SequenceVide)?;
        Ok(self)
    }

    /// Retire l’élément à `indice` (entier dans [0, len)).
    pub fn retirer_a(mut self, indice: f64) -> Result<Self, ErreurCalc> {
        let i = self.verifier_indice(indice)?;
        self.0.remove(i);
        Ok(self)
    }

    fn verifier_indice(&self, indice: f64) -> Result<usize, ErreurCalc> {
        if !indice.is_finite() || indice.fract() != 0.0 {
            return Err(ErreurCalc::IndiceInvalide);
        }
        indice
            .to_usize()
            .filter(|i| *i < self.0.len())
            .ok_or(ErreurCalc::IndiceHorsPlage)
    }

    pub fn premier(&self) -> Option<f64> {
        self.0.first().copied()
    }

    pub fn dernier(&self) -> Option<f64> {
        self.0.last().copied()
    }

    pub fn get(&self, i: usize) -> Option<f64> {
        self.0.get(i).copied()
    }

    pub fn to_csv(&self) -> String {
        format_liste(&self.0)
    }
}

/* ------------------------ Actions ------------------------ */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCsv {
    Somme,
    Moyenne,
    Trier,
    Inverser,
    RetirerDernier,
    RetirerA,
}

impl ActionCsv {
    pub const TOUTES: [ActionCsv; 6] = [
        ActionCsv::Somme,
        ActionCsv::Moyenne,
        ActionCsv::Trier,
        ActionCsv::Inverser,
        ActionCsv::RetirerDernier,
        ActionCsv::RetirerA,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ActionCsv::Somme => "sum",
            ActionCsv::Moyenne => "avg",
            ActionCsv::Trier => "sort",
            ActionCsv::Inverser => "rev",
            ActionCsv::RetirerDernier => "pop",
            ActionCsv::RetirerA => "removeAt",
        }
    }

    pub fn libelle(self) -> &'static str {
        match self {
            ActionCsv::Somme => "Somme",
            ActionCsv::Moyenne => "Moyenne",
            ActionCsv::Trier => "Trier",
            ActionCsv::Inverser => "Inverser",
            ActionCsv::RetirerDernier => "Retirer dernier",
            ActionCsv::RetirerA => "Retirer à l’indice",
        }
    }

    fn nom_info(self) -> &'static str {
        match self {
            ActionCsv::Somme => "CSV Somme",
            ActionCsv::Moyenne => "CSV Moyenne",
            ActionCsv::Trier => "CSV Trier",
            ActionCsv::Inverser => "CSV Inverser",
            ActionCsv::RetirerDernier => "CSV Retirer",
            ActionCsv::RetirerA => "CSV Retirer à l’indice",
        }
    }
}

impl FromStr for ActionCsv {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionCsv::TOUTES
            .into_iter()
            .find(|a| a.id() == s)
            .ok_or_else(|| format!("action CSV inconnue: '{s}'"))
    }
}

/// Sortie d’une action CSV.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultatCsv {
    /// Nouveau texte du champ source (None = inchangé).
    pub liste: Option<String>,
    /// Message du champ de sortie.
    pub sortie: String,
    /// Texte du champ info.
    pub info: String,
}

impl ResultatCsv {
    fn new(action: ActionCsv, liste: Option<String>, sortie: String, statut: f64) -> Self {
        Self {
            liste,
            sortie,
            info: libelle_info(action.nom_info(), statut),
        }
    }
}

/// Message du champ de sortie pour un échec CSV.
pub fn message_echec(e: &Echec) -> String {
    format!("⚠ {}", e.erreur)
}

/// Exécute une action sur le texte source (et l’indice pour RetirerA).
pub fn executer(action: ActionCsv, source: &str, indice: &str) -> Result<ResultatCsv, Echec> {
    let echec = |e| Echec::new(NOM_CSV, e);
    let seq = SequenceNumerique::parse(source).map_err(echec)?;

    let r = match action {
        ActionCsv::Somme => {
            let s = seq.somme();
            ResultatCsv::new(action, None, format!("Somme = {}", format_nombre(s)), s)
        }
        ActionCsv::Moyenne => {
            let m = seq.moyenne().map_err(echec)?;
            ResultatCsv::new(action, None, format!("Moyenne = {}", format_nombre(m)), m)
        }
        ActionCsv::Trier => {
            let triee = seq.trier();
            let statut = triee.dernier().unwrap_or(0.0);
            ResultatCsv::new(
                action,
                Some(triee.to_csv()),
                "Liste triée par ordre croissant".into(),
                statut,
            )
        }
        ActionCsv::Inverser => {
            let inv = seq.inverser();
            let statut = inv.premier().unwrap_or(0.0);
            ResultatCsv::new(action, Some(inv.to_csv()), "Liste inversée".into(), statut)
        }
        ActionCsv::RetirerDernier => {
            let reste = seq.retirer_dernier().map_err(echec)?;
            let statut = reste.dernier().unwrap_or(0.0);
            ResultatCsv::new(
                action,
                Some(reste.to_csv()),
                "Dernier élément retiré".into(),
                statut,
            )
        }
        ActionCsv::RetirerA => {
            let i = normaliser(indice).map_err(|_| echec(ErreurCalc::IndiceInvalide))?;
            let reste = seq.retirer_a(i).map_err(echec)?;
            // i validé : entier dans [0, len)
            let pos = i as usize;
            let statut = reste.get(pos).unwrap_or(0.0);
            ResultatCsv::new(
                action,
                Some(reste.to_csv()),
                format!("Élément retiré à l’indice {pos}"),
                statut,
            )
        }
    };

    log::debug!("CSV {} -> {}", action.id(), r.sortie);
    Ok(r)
}
