//! Tests de scénario : règles de saisie + évaluation à deux paliers.
//!
//! Le rendu suit `Display` de f32 : `14` (pas `14.0`), `inf`, `NaN`.

use super::Expression;

fn tape(touches: &str) -> Expression {
    let mut e: Expression = Expression::new();
    for c in touches.chars() {
        e.push(c);
    }
    e
}

fn assert_calc(touches: &str, valeur: &str, resultat: &str) {
    let e = tape(touches);
    assert_eq!(e.valeur(), valeur, "touches={touches:?}");
    assert_eq!(e.resultat(), resultat, "touches={touches:?}");
}

/* ------------------------ État initial ------------------------ */

#[test]
fn nouveau_moteur_vaut_zero() {
    let e: Expression = Expression::new();
    assert_eq!(e.valeur(), "");
    assert_eq!(e.resultat(), "0");
}

/* ------------------------ Chiffres seuls ------------------------ */

#[test]
fn chiffres_seuls() {
    assert_calc("123", "123", "123");
    assert_calc("0", "0", "0");
    assert_calc("007", "007", "7");
    assert_calc("2.5", "2.5", "2.5");
    // "5." est un nombre complet
    assert_calc("5.", "5.", "5");
}

/* ------------------------ Point décimal ------------------------ */

#[test]
fn point_en_tete_devient_zero_point() {
    assert_calc(".", "0.", "0");
    assert_calc(".5", "0.5", "0.5");
}

#[test]
fn point_apres_operateur_refuse() {
    assert_calc("5+.", "5+", "5");
    assert_calc("5×.", "5×", "5");
    assert_calc("5+.3", "5+3", "8");
}

#[test]
fn second_point_dans_un_nombre_refuse() {
    assert_calc("1.2.3", "1.23", "1.23");
    assert_calc("..", "0.", "0");
    // un nouveau nombre a droit à son propre point
    assert_calc("1.5+2.25", "1.5+2.25", "3.75");
}

/* ------------------------ Opérateurs répétés ------------------------ */

#[test]
fn operateur_remplace_le_precedent() {
    assert_calc("5+×", "5×", "5");
    assert_calc("5+-×÷%+", "5+", "5");
    assert_calc("5+×3", "5×3", "15");
}

#[test]
fn jamais_deux_operateurs_consecutifs() {
    let e = tape("9-+-×÷3");
    assert_eq!(e.valeur(), "9÷3");
    assert_eq!(e.resultat(), "3");
}

/* ------------------------ pop / clear ------------------------ */

#[test]
fn pop_retire_le_dernier_caractere() {
    let mut e = tape("12");
    e.pop();
    assert_eq!(e.valeur(), "1");
    assert_eq!(e.resultat(), "1");

    // glyphe multi-octets
    let mut e = tape("6×");
    e.pop();
    assert_eq!(e.valeur(), "6");
    assert_eq!(e.resultat(), "6");
}

#[test]
fn pop_sur_vide_est_sans_effet() {
    let mut e = Expression::<f32>::new();
    e.pop();
    e.pop();
    assert_eq!(e.valeur(), "");
    assert_eq!(e.resultat(), "0");
}

#[test]
fn clear_remet_a_zero() {
    let mut e = tape("2+3×4");
    e.clear();
    assert_eq!(e.valeur(), "");
    assert_eq!(e.resultat(), "0");

    e.clear();
    assert_eq!(e.resultat(), "0");
}

#[test]
fn resultat_suit_chaque_mutation() {
    let mut e = Expression::<f32>::new();
    e.push('8');
    assert_eq!(e.resultat(), "8");
    e.push('÷');
    assert_eq!(e.resultat(), "8");
    e.push('2');
    assert_eq!(e.resultat(), "4");
    e.pop();
    assert_eq!(e.resultat(), "8");
    e.clear();
    assert_eq!(e.resultat(), "0");
}

/* ------------------------ Évaluation à deux paliers ------------------------ */

#[test]
fn paliers_multiplicatif_puis_additif() {
    assert_calc("2+3×4", "2+3×4", "14");
    assert_calc("2×3+4×5", "2×3+4×5", "26");
    assert_calc("2+3×4+5", "2+3×4+5", "19");
    assert_calc("10-2×3", "10-2×3", "4");
}

#[test]
fn chaine_multiplicative_gauche_a_droite() {
    assert_calc("8÷2÷2", "8÷2÷2", "2");
    assert_calc("2×3÷4", "2×3÷4", "1.5");
    assert_calc("7%4", "7%4", "3");
    assert_calc("17%5×2", "17%5×2", "4");
}

#[test]
fn soustraction_et_negatifs() {
    assert_calc("2-3", "2-3", "-1");
    assert_calc("5-5", "5-5", "0");
}

#[test]
fn operateur_final_sans_operande() {
    assert_calc("7+", "7+", "7");
    assert_calc("7×", "7×", "7");
    assert_calc("2+3×", "2+3×", "5");
}

/* ------------------------ Tampon qui commence par un opérateur ------------------------ */

#[test]
fn operateur_en_tete() {
    assert_calc("-", "-", "0");
    assert_calc("-5", "-5", "-5");
    assert_calc("-5+2", "-5+2", "-3");
    assert_calc("×5", "×5", "0");
    assert_calc("+.", "+", "0");
}

/* ------------------------ Flottants : infini / NaN ------------------------ */

#[test]
fn division_par_zero() {
    assert_calc("5÷0", "5÷0", "inf");
    assert_calc("5-9÷0", "5-9÷0", "-inf");
    assert_calc("0÷0", "0÷0", "NaN");
}

#[test]
fn modulo_par_zero() {
    assert_calc("5%0", "5%0", "NaN");
}

#[test]
fn debordement_vers_infini() {
    let e = tape("99999999999999999999×99999999999999999999×99999999999999999999");
    assert_eq!(e.resultat(), "inf");
}

/* ------------------------ Caractères hors clavier ------------------------ */

#[test]
fn caracteres_hors_clavier_ignores() {
    assert_calc("1a2*3/4 ", "1234", "1234");
    assert_calc("(2)", "2", "2");
}

/* ------------------------ Autre flottant ------------------------ */

#[test]
fn moteur_en_f64() {
    let mut e = Expression::<f64>::new();
    for c in "0.1+0.2".chars() {
        e.push(c);
    }
    assert_eq!(e.resultat(), (0.1f64 + 0.2f64).to_string());
}
