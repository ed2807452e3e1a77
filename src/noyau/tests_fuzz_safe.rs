//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler la saisie, le moteur et les listes CSV sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - tailles bornées
//! - budget temps global
//! - invariants clés :
//!   * une saisie acceptée est toujours finie
//!   * un échec ne touche jamais à l’opération en attente
//!   * une liste réécrite se re-parse à l’identique

use std::time::{Duration, Instant};

use super::csv::{executer, ActionCsv, SequenceNumerique};
use super::erreur::ErreurCalc;
use super::moteur::Session;
use super::operations::{OpBinaire, OpUnaire};
use super::saisie::normaliser;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de saisies (bornée) ------------------------ */

fn gen_saisie(rng: &mut Rng) -> String {
    match rng.pick(10) {
        0 => String::new(),
        1 => "   ".to_string(),
        2 => "abc".to_string(),
        3 => format!("{},{}", rng.pick(100), rng.pick(100)),
        4 => format!("-{}", rng.pick(1000)),
        5 => format!("{}e{}", rng.pick(10), rng.pick(400)),
        6 => "0".to_string(),
        7 => format!(" {}.{} ", rng.pick(50), rng.pick(10)),
        8 => "1,2,3".to_string(),
        _ => format!("{}", rng.pick(200)),
    }
}

fn gen_csv(rng: &mut Rng) -> String {
    let n = rng.pick(8);
    let mut items = Vec::new();
    for _ in 0..n {
        let t = match rng.pick(7) {
            0 => String::new(),
            1 => "x".to_string(),
            2 => format!("-{}", rng.pick(50)),
            _ => format!("{}", rng.pick(300)),
        };
        items.push(if rng.coin() { format!(" {t} ") } else { t });
    }
    items.join(",")
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_saisie_toujours_finie() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let s = gen_saisie(&mut rng);
        match normaliser(&s) {
            Ok(v) => {
                assert!(v.is_finite(), "saisie={s:?} v={v}");
                seen_ok += 1;
            }
            Err(e) => {
                assert!(
                    matches!(e, ErreurCalc::EntreeVide | ErreurCalc::PasUnNombre),
                    "erreur non attendue: saisie={s:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_echec_ne_touche_pas_l_attente() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);
    let mut rng = Rng::new(0xBADC0DE_u64);
    let mut session = Session::new();

    for _ in 0..400 {
        budget(t0, max);

        let avant = session.en_attente();
        let s = gen_saisie(&mut rng);

        let echoue = match rng.pick(3) {
            0 => {
                let op = OpBinaire::TOUTES[rng.pick(4) as usize];
                session.commencer_binaire(op, &s).is_err()
            }
            1 => session.terminer_binaire(&s).is_err(),
            _ => {
                let op = OpUnaire::TOUTES[rng.pick(7) as usize];
                if let Ok(r) = session.appliquer_unaire(op, &s) {
                    assert!(r.valeur.is_finite());
                }
                // l’unaire ne touche jamais l’attente
                true
            }
        };

        if echoue {
            assert_eq!(session.en_attente(), avant, "saisie={s:?}");
        }
    }
}

#[test]
fn fuzz_safe_csv_reecriture_stable() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);
    let mut rng = Rng::new(0x5EED_u64);

    let mut seen_ok = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let source = gen_csv(&mut rng);
        let action = ActionCsv::TOUTES[rng.pick(6) as usize];
        let indice = format!("{}", rng.pick(6));

        match executer(action, &source, &indice) {
            Ok(r) => {
                seen_ok += 1;
                if let Some(liste) = r.liste.filter(|l| !l.is_empty()) {
                    let seq = SequenceNumerique::parse(&liste)
                        .unwrap_or_else(|e| panic!("re-parse: {liste:?} err={e}"));
                    assert_eq!(seq.to_csv(), liste);
                }
            }
            Err(e) => {
                assert_eq!(e.operation, "CSV");
                assert!(
                    matches!(
                        e.erreur,
                        ErreurCalc::SequenceVide
                            | ErreurCalc::SequenceIncomplete
                            | ErreurCalc::SequenceNonNumerique
                            | ErreurCalc::IndiceInvalide
                            | ErreurCalc::IndiceHorsPlage
                    ),
                    "erreur non attendue: source={source:?} err={}",
                    e.erreur
                );
            }
        }
    }

    assert!(seen_ok > 20, "trop peu de succès: {seen_ok}");
}
