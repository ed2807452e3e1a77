// src/app/commandes.rs
//
// Commandes logiques (boutons + clavier) -> appels du noyau.
// Aucune logique propre : on normalise/applique via le noyau, puis on
// dépose écran / info / sortie CSV dans l’état.

use crate::noyau::csv::{self, message_echec};
use crate::noyau::saisie::Saisie;
use crate::noyau::{ActionCsv, Echec, ErreurCalc, OpBinaire, OpUnaire, Resultat};

use super::etat::AppCalc;

/// Nom d’échec quand l’écran ne contient pas de nombre.
const NOM_ENTREE_INVALIDE: &str = "Entrée invalide";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commande {
    Chiffre(char),
    Point,
    Operateur(OpBinaire),
    Unaire(OpUnaire),
    /// x^y : ouvre la boîte exposant.
    Puissance,
    Egal,
    ToutEffacer,
    Csv(ActionCsv),
    BasculerMode,
}

impl AppCalc {
    pub fn executer(&mut self, commande: Commande) {
        match commande {
            Commande::Chiffre(c) => {
                if c.is_ascii_digit() {
                    self.ecran.push(c);
                }
            }
            Commande::Point => {
                if !self.ecran.contains('.') {
                    if self.ecran.is_empty() {
                        self.ecran.push('0');
                    }
                    self.ecran.push('.');
                }
            }
            Commande::ToutEffacer => self.tout_effacer(),
            Commande::Operateur(op) => match self.session.commencer_binaire(op, &self.ecran) {
                Ok(()) => self.ecran.clear(),
                Err(e) => self.deposer_echec(&e),
            },
            Commande::Egal => {
                let r = self.session.terminer_binaire(&self.ecran);
                self.deposer(r);
            }
            Commande::Unaire(op) => {
                let r = self.session.appliquer_unaire(op, &self.ecran);
                self.deposer(r);
            }
            Commande::Puissance => self.ouvrir_exposant(),
            Commande::Csv(action) => self.executer_csv(action),
            Commande::BasculerMode => self.basculer_mode(),
        }
    }

    /// x^y, étape 1 : x doit être un nombre avant de demander y.
    fn ouvrir_exposant(&mut self) {
        match Saisie::lire(&self.ecran) {
            Saisie::Nombre(x) => {
                log::debug!("x = {x} ; exposant demandé");
                self.exposant = Some(String::new());
            }
            Saisie::Vide => {
                self.deposer_echec(&Echec::new(NOM_ENTREE_INVALIDE, ErreurCalc::EntreeVide))
            }
            Saisie::PasUnNombre => {
                self.deposer_echec(&Echec::new(NOM_ENTREE_INVALIDE, ErreurCalc::PasUnNombre))
            }
        }
    }

    /// x^y, étape 2 : la boîte fournit l’exposant saisi (None = annulé).
    pub fn fermer_exposant(&mut self, valider: bool) {
        let Some(texte) = self.exposant.take() else {
            return;
        };
        let mut reponse = valider.then_some(texte);
        let mut fournisseur = move || reponse.take();
        let r = self.session.appliquer_puissance(&self.ecran, &mut fournisseur);
        self.deposer(r);
    }

    fn executer_csv(&mut self, action: ActionCsv) {
        match csv::executer(action, &self.csv_entree, &self.csv_indice) {
            Ok(r) => {
                if let Some(liste) = r.liste {
                    self.csv_entree = liste;
                }
                self.csv_sortie = r.sortie;
                self.info = r.info;
            }
            Err(e) => {
                self.csv_sortie = message_echec(&e);
                self.deposer_echec(&e);
            }
        }
    }

    fn deposer(&mut self, r: Result<Resultat, Echec>) {
        match r {
            Ok(r) => {
                log::debug!("écran <- {}", r.valeur);
                self.ecran = r.affichage;
                self.info = r.info;
            }
            Err(e) => self.deposer_echec(&e),
        }
    }

    /// Échec : l’écran est conservé, seul le champ info change.
    fn deposer_echec(&mut self, e: &Echec) {
        log::warn!("{e}");
        self.info = e.info();
    }
}
