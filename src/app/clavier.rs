//! Raccourcis clavier -> commandes logiques.
//!
//! Pur (pas d’état, pas de rendu) : testable sans surface egui.
//!
//! Règles :
//! - Échap = AC ; Entrée ou “=” = égal
//! - chiffres, “.”, “+ - * /” arrivent comme texte (disposition du clavier respectée)
//! - Alt+lettre = opérations unaires / bascule ; le texte tapé avec Alt est ignoré
//! - si un champ CSV a le focus : seuls Échap et les raccourcis Alt passent

use eframe::egui;

use super::commandes::Commande;
use crate::noyau::{OpBinaire, OpUnaire};

/// Texte saisi (un seul caractère attendu).
///
/// Avec Alt, le texte accompagne un raccourci (Alt+3 => Text("3")) : ignoré.
pub fn depuis_texte(texte: &str, alt: bool, focus_ailleurs: bool) -> Option<Commande> {
    if alt || focus_ailleurs {
        return None;
    }

    let mut chars = texte.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    match c {
        '0'..='9' => Some(Commande::Chiffre(c)),
        '.' => Some(Commande::Point),
        '=' => Some(Commande::Egal),
        '+' => Some(Commande::Operateur(OpBinaire::Plus)),
        '-' => Some(Commande::Operateur(OpBinaire::Moins)),
        '*' => Some(Commande::Operateur(OpBinaire::Fois)),
        '/' => Some(Commande::Operateur(OpBinaire::Divise)),
        _ => None,
    }
}

/// Touche pressée (avec ou sans Alt).
pub fn depuis_touche(touche: egui::Key, alt: bool, focus_ailleurs: bool) -> Option<Commande> {
    use egui::Key;

    if touche == Key::Escape {
        return Some(Commande::ToutEffacer);
    }

    if alt {
        return match touche {
            Key::C => Some(Commande::BasculerMode),
            Key::Q => Some(Commande::Unaire(OpUnaire::Carre)),
            Key::R => Some(Commande::Unaire(OpUnaire::Racine)),
            Key::Num3 => Some(Commande::Unaire(OpUnaire::Cube)),
            Key::F => Some(Commande::Unaire(OpUnaire::Factorielle)),
            Key::M => Some(Commande::Unaire(OpUnaire::Module)),
            Key::L => Some(Commande::Unaire(OpUnaire::Log)),
            Key::Y => Some(Commande::Puissance),
            Key::B => Some(Commande::Unaire(OpUnaire::Abs)),
            _ => None,
        };
    }

    if focus_ailleurs {
        return None;
    }

    match touche {
        Key::Enter => Some(Commande::Egal),
        _ => None,
    }
}

/// Adaptateur egui : un événement brut -> commande éventuelle.
///
/// `Event::Text` ne porte pas de modificateurs : on prend ceux de la frame.
pub fn depuis_evenement(
    ev: &egui::Event,
    modificateurs: egui::Modifiers,
    focus_ailleurs: bool,
) -> Option<Commande> {
    match ev {
        egui::Event::Text(t) => depuis_texte(t, modificateurs.alt, focus_ailleurs),
        egui::Event::Key {
            key,
            pressed: true,
            modifiers,
            ..
        } => depuis_touche(*key, modifiers.alt, focus_ailleurs),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppCalc;
    use egui::{Event, Key, Modifiers};

    fn touche_alt(key: Key) -> Event {
        Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: Modifiers::ALT,
        }
    }

    #[test]
    fn texte_calculatrice() {
        assert_eq!(depuis_texte("7", false, false), Some(Commande::Chiffre('7')));
        assert_eq!(depuis_texte(".", false, false), Some(Commande::Point));
        assert_eq!(depuis_texte("=", false, false), Some(Commande::Egal));
        assert_eq!(
            depuis_texte("*", false, false),
            Some(Commande::Operateur(OpBinaire::Fois))
        );
        assert_eq!(depuis_texte("a", false, false), None);
        assert_eq!(depuis_texte("12", false, false), None);
        assert_eq!(depuis_texte("", false, false), None);
    }

    #[test]
    fn texte_ignore_si_champ_csv() {
        assert_eq!(depuis_texte("7", false, true), None);
        assert_eq!(depuis_texte("+", false, true), None);
    }

    #[test]
    fn touches_simples() {
        assert_eq!(depuis_touche(Key::Enter, false, false), Some(Commande::Egal));
        assert_eq!(
            depuis_touche(Key::Escape, false, false),
            Some(Commande::ToutEffacer)
        );
        assert_eq!(depuis_touche(Key::Q, false, false), None);
    }

    #[test]
    fn raccourcis_alt() {
        assert_eq!(
            depuis_touche(Key::Num3, true, false),
            Some(Commande::Unaire(OpUnaire::Cube))
        );
        assert_eq!(depuis_touche(Key::Y, true, false), Some(Commande::Puissance));
        assert_eq!(depuis_touche(Key::C, true, false), Some(Commande::BasculerMode));
        assert_eq!(depuis_touche(Key::Z, true, false), None);
    }

    #[test]
    fn focus_csv_laisse_passer_alt_et_echap() {
        assert_eq!(depuis_touche(Key::Enter, false, true), None);
        assert_eq!(
            depuis_touche(Key::Escape, false, true),
            Some(Commande::ToutEffacer)
        );
        assert_eq!(
            depuis_touche(Key::B, true, true),
            Some(Commande::Unaire(OpUnaire::Abs))
        );
    }

    #[test]
    fn texte_ignore_avec_alt() {
        assert_eq!(depuis_texte("3", true, false), None);
        assert_eq!(depuis_texte("+", true, false), None);
    }

    #[test]
    fn alt_3_donne_le_cube_seul() {
        // Alt+3 arrive en double : Key{Num3, ALT} puis Text("3")
        let evenements = [touche_alt(Key::Num3), Event::Text("3".into())];
        let cmds: Vec<_> = evenements
            .iter()
            .filter_map(|ev| depuis_evenement(ev, Modifiers::ALT, false))
            .collect();
        assert_eq!(cmds, vec![Commande::Unaire(OpUnaire::Cube)]);

        let mut app = AppCalc::default();
        app.ecran = "3".into();
        for cmd in cmds {
            app.executer(cmd);
        }
        assert_eq!(app.ecran, "27");
    }

    #[test]
    fn texte_sans_alt_passe() {
        let ev = Event::Text("3".into());
        assert_eq!(
            depuis_evenement(&ev, Modifiers::NONE, false),
            Some(Commande::Chiffre('3'))
        );
    }
}
