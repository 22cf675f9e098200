//! Built-in produksjonstilskudd codelist

use shared::{MeasurementUnit, Produksjonskode};

fn kode(
    code: &str,
    label: &str,
    groups: &[&str],
    measured_in: MeasurementUnit,
) -> Produksjonskode {
    Produksjonskode {
        code: code.to_string(),
        label: label.to_string(),
        description: None,
        groups: groups.iter().map(|g| (*g).to_string()).collect(),
        measured_in,
        valid_from: None,
        valid_to: None,
        replaces: Vec::new(),
        replaced_by: Vec::new(),
    }
}

/// The built-in codelist, in registration order.
///
/// Every entry is unique and passes [`Produksjonskode::validate`].
pub fn builtin_codes() -> Vec<Produksjonskode> {
    use MeasurementUnit::{Antall, Dekar, Kilo};

    vec![
        // Frukt
        kode("001", "Epler", &["frukt", "frukt_avling"], Kilo)
            .with_description("Avling av epler"),
        kode("272", "Epler", &["frukt", "frukt_areal"], Dekar)
            .with_description("Areal med epler"),
        kode("002", "Pærer", &["frukt", "frukt_avling"], Kilo),
        kode("273", "Pærer", &["frukt", "frukt_areal"], Dekar),
        kode("006", "Epler og pærer til press", &["frukt", "frukt_avling"], Kilo),
        kode("003", "Plommer", &["frukt", "frukt_avling"], Kilo),
        kode("274", "Plommer", &["frukt", "frukt_areal"], Dekar),
        kode("004", "Moreller", &["frukt", "frukt_avling"], Kilo),
        kode("005", "Kirsebær", &["frukt", "frukt_avling"], Kilo),
        // Bær
        kode("011", "Jordbær", &["bær", "bær_avling"], Kilo),
        kode("012", "Bringebær", &["bær", "bær_avling"], Kilo),
        kode("013", "Solbær", &["bær", "bær_avling"], Kilo),
        kode("014", "Rips", &["bær", "bær_avling"], Kilo),
        kode("016", "Hageblåbær", &["bær", "bær_avling"], Kilo),
        kode("021", "Stikkelsbær", &["bær", "bær_avling"], Kilo),
        kode("022", "Industribær", &["bær", "bær_avling"], Kilo),
        // Grønnsaker og poteter
        kode("031", "Tomat", &["grønnsaker", "grønnsaker_avling"], Kilo),
        kode("032", "Slangeagurk", &["grønnsaker", "grønnsaker_avling"], Kilo),
        kode("033", "Salat (også friland)", &["grønnsaker", "grønnsaker_avling"], Antall),
        kode("060", "Matpoteter i Nord-Norge", &["poteter", "poteter_avling"], Kilo),
        // Husdyr
        kode("115", "Hester, under 3 år", &["hest", "husdyr"], Antall),
        kode("116", "Hester, 3 år og eldre", &["hest", "husdyr"], Antall),
        kode("118", "Ammekyr av minst 50% kjøttferase", &["storfe", "husdyr"], Antall),
        kode("119", "Øvrige storfe", &["storfe", "husdyr"], Antall),
        kode("120", "Melkekyr", &["storfe", "husdyr"], Antall),
        kode("121", "Ammekyr", &["storfe", "husdyr"], Antall),
        kode("139", "Melkesau", &["sau", "husdyr"], Antall),
        kode("140", "Melkegeiter", &["geit", "husdyr"], Antall),
        kode("142", "Ammegeiter", &["geit", "husdyr"], Antall),
        kode("144", "Bukker og ungdyr, medregnet kje", &["geit", "husdyr"], Antall),
        kode("145", "Søyer født i fjor eller tidligere", &["sau", "husdyr"], Antall),
        kode("146", "Værer født i fjor eller tidligere", &["sau", "husdyr"], Antall),
        kode(
            "154",
            "Smågriser, levendevekt under 20kg eller alder inntil 8 uker",
            &["gris", "husdyr"],
            Antall,
        ),
        kode("155", "Avlspurker som har fått minst 1 kull", &["gris", "husdyr"], Antall),
        kode("156", "Råner som er satt inn i avl", &["gris", "husdyr"], Antall),
        kode("157", "Slaktegriser, levendevekt minst 20kg", &["gris", "husdyr"], Antall),
        kode("158", "Ungpurker bestemt for avl", &["gris", "husdyr"], Antall),
        kode("159", "Ungråner bestemt for avl", &["gris", "husdyr"], Antall),
        kode("161", "Verpehøner", &["fjørfe", "husdyr"], Antall),
        kode("162", "Rugeegg levert til rugeri", &["fjørfe", "husdyr"], Antall),
        kode("168", "Avlsdyr av ender, kalkuner og gjess", &["fjørfe", "husdyr"], Antall),
        kode("170", "Minktisper", &["pelsdyr", "husdyr"], Antall),
        kode("171", "Revetisper", &["pelsdyr", "husdyr"], Antall),
        kode("174", "Ender, kalkuner og gjess for slakt", &["fjørfe", "husdyr"], Antall),
        kode("175", "Livkyllinger", &["fjørfe", "husdyr"], Antall),
        kode("176", "Slaktekyllinger", &["fjørfe", "husdyr"], Antall),
        kode("178", "Hjort, 1 år og eldre", &["hjort", "husdyr"], Antall),
        kode("179", "Hjort, under 1 år", &["hjort", "husdyr"], Antall),
        kode("180", "Kaniner", &["andre_husdyr", "husdyr"], Antall),
        kode(
            "181",
            "Griser solgt som livdyr, vekt på minst 50 kg",
            &["gris", "livdyr"],
            Antall,
        ),
        kode("183", "Struts", &["andre_husdyr", "husdyr"], Antall),
        kode(
            "185",
            "Kyllinger og kalkuner solgt som livdyr",
            &["fjørfe", "livdyr"],
            Antall,
        ),
        kode("192", "Esel", &["andre_husdyr", "husdyr"], Antall),
        kode("193", "Hester i pensjon i beitesesongen", &["hest", "husdyr"], Antall),
        kode("194", "Bifolk", &["andre_husdyr", "husdyr"], Antall),
        kode("196", "Lama", &["andre_husdyr", "husdyr"], Antall),
        kode("197", "Alpakka", &["andre_husdyr", "husdyr"], Antall),
        // Areal
        kode("210", "Fylldyrket eng", &["grovfôr", "areal"], Dekar),
        kode("211", "Overflatedyrket eng", &["grovfôr", "areal"], Dekar),
        kode("212", "Innmarksbeite", &["grovfôr", "areal"], Dekar),
        kode("213", "Andre grovforvekster til for", &["grovfôr", "areal"], Dekar),
        kode("223", "Grønngjødsling", &["grønngjødsling", "areal"], Dekar),
        kode("230", "Poteter", &["poteter", "areal"], Dekar),
        kode(
            "231",
            "Annet korn og frø som er berettiget tilskudd",
            &["korn", "areal"],
            Dekar,
        ),
        kode("235", "Engfør og annen såfrøproduksjon", &["korn", "areal"], Dekar),
        kode(
            "236",
            "Erter, bønner og andre belgvekster til modning",
            &["korn", "areal"],
            Dekar,
        ),
        kode("237", "Oljevekster", &["korn", "areal"], Dekar),
        kode("238", "Rug og rughvete", &["korn", "areal"], Dekar),
        kode("239", "Korn til krossing", &["korn", "areal"], Dekar),
        kode("240", "Vårhvete", &["korn", "areal"], Dekar),
        kode("242", "Bygg", &["korn", "areal"], Dekar),
        kode("243", "Havre", &["korn", "areal"], Dekar),
        kode(
            "245",
            "Erter og bønner til konserveindustri (høstet før modning)",
            &["grønnsaker", "areal"],
            Dekar,
        ),
        kode("247", "Høsthvete", &["korn", "areal"], Dekar),
        kode(
            "264",
            "Grønnsaker på friland, inkl. matkålrot og urter",
            &["grønnsaker", "areal"],
            Dekar,
        ),
        kode("271", "Moreller og kirsebær", &["frukt", "frukt_areal"], Dekar),
        kode("280", "Jordbær", &["bær", "bær_areal"], Dekar),
        kode("282", "Andre bærarter", &["bær", "bær_areal"], Dekar),
        kode("283", "Andre fruktarter", &["frukt", "frukt_areal"], Dekar),
        kode(
            "285",
            "Planteskoleareal og blomsterdyrking på friland",
            &["planteskole", "areal"],
            Dekar,
        ),
        kode("290", "Brakka areal", &["annet_areal", "areal"], Dekar),
        kode(
            "292",
            "Fulldyrket og/eller overflatedyrket, ute av drift",
            &["annet_areal", "areal"],
            Dekar,
        ),
        kode("293", "Innmarksbeite, ute av drift", &["annet_areal", "areal"], Dekar),
        kode(
            "294",
            "Areal i drift, men ikke berettiget produksjonstilskudd",
            &["annet_areal", "areal"],
            Dekar,
        ),
        // Beite og utmarksbeite
        kode(
            "410",
            "Storfe på utmarksbeite - Melkekyr og ammekyr",
            &["storfe", "utmarksbeite"],
            Antall,
        ),
        kode(
            "411",
            "Storfe på beite - Melkekyr og ammekyr",
            &["storfe", "beite"],
            Antall,
        ),
        kode(
            "420",
            "Storfe på utmarksbeite - Øvrige storfe",
            &["storfe", "utmarksbeite"],
            Antall,
        ),
        kode("422", "Storfe på beite - Øvrige storfe", &["storfe", "beite"], Antall),
        kode(
            "431",
            "Sauer, født i fjor eller tidligere, utmarksbeite",
            &["sau", "utmarksbeite"],
            Antall,
        ),
        kode("432", "Lam, født i år, utmarksbeite", &["sau", "utmarksbeite"], Antall),
        kode("440", "Geiter, voksne og kje, utmarksbeite", &["geit", "utmarksbeite"], Antall),
        kode("489", "Geiter, voksne og kje, beitetilskudd", &["geit", "beite"], Antall),
        kode("450", "Hester på utmarksbeite", &["hest", "utmarksbeite"], Antall),
        kode("455", "Hester på beite", &["hest", "beite"], Antall),
        kode("480", "Lama på beite", &["andre_husdyr", "beite"], Antall),
        kode("481", "Alpakka på beite", &["andre_husdyr", "beite"], Antall),
        kode("486", "Hjort på beite", &["hjort", "beite"], Antall),
        kode(
            "487",
            "Sauer, født i fjor eller tidligere, beitetilskudd",
            &["sau", "beite"],
            Antall,
        ),
        kode("488", "Lam, født i år, beitetilskudd", &["sau", "beite"], Antall),
        // Salg av grovfôr
        kode("521", "Salg av høy", &["grovfôr", "salg"], Kilo),
        kode("522", "Salg av surfor", &["grovfôr", "salg"], Kilo),
        kode("523", "Salg av høyensilasje", &["grovfôr", "salg"], Kilo),
        // Bevaringsverdige raser
        kode(
            "720",
            "Storfe på utmarksbeite - Kyr av bevaringsverdig rase",
            &["storfe", "bevaringsverdig_rase", "utmarksbeite"],
            Antall,
        ),
        kode(
            "721",
            "Storfe på utmarksbeite - Okser av bevaringsverdig rase",
            &["storfe", "bevaringsverdig_rase", "utmarksbeite"],
            Antall,
        ),
        kode("722", "Søyer av bevaringsverdig rase", &["sau", "bevaringsverdig_rase"], Antall),
        kode("723", "Værer av bevaringsverdig rase", &["sau", "bevaringsverdig_rase"], Antall),
        kode(
            "724",
            "Ammegeiter av bevaringsverdig rase",
            &["geit", "bevaringsverdig_rase"],
            Antall,
        ),
        kode(
            "725",
            "Unghester under 3 år av bevaringsverdig rase",
            &["hest", "bevaringsverdig_rase"],
            Antall,
        ),
        // Økologisk husdyrhold
        kode("801", "Økologiske melkekyr", &["storfe", "økologisk"], Antall),
        kode("802", "Økologiske ammekyr", &["storfe", "økologisk"], Antall),
        kode("803", "Økologiske øvrige storfe", &["storfe", "økologisk"], Antall),
        kode("810", "Økologiske melkegeiter", &["geit", "økologisk"], Antall),
        kode("811", "Økologiske ammegeiter", &["geit", "økologisk"], Antall),
        kode("821", "Økologiske sauer", &["sau", "økologisk"], Antall),
        kode("830", "Økologiske avlsgriser", &["gris", "økologisk"], Antall),
        kode(
            "833",
            "Økologiske griser solgt som livdyr",
            &["gris", "økologisk", "livdyr"],
            Antall,
        ),
        kode("841", "Økologiske verpehøner", &["fjørfe", "økologisk"], Antall),
        // Økologisk areal og karens
        kode(
            "852",
            "Grønngjødsling, 2. års karens",
            &["grønngjødsling", "økologisk", "areal"],
            Dekar,
        ),
        kode(
            "855",
            "Korn til modning og krossing, økologisk samt 2.års karens",
            &["korn", "økologisk", "areal"],
            Dekar,
        ),
        kode(
            "861",
            "Poteter, økologisk areal samt 2.års karens",
            &["poteter", "økologisk", "areal"],
            Dekar,
        ),
        kode(
            "863",
            "Frukt og bær, økologisk areal samt 2. og 3. års karens",
            &["frukt", "bær", "økologisk", "areal"],
            Dekar,
        ),
        kode(
            "864",
            "Grønnsaker, økologisk areal samt 2. års karens",
            &["grønnsaker", "økologisk", "areal"],
            Dekar,
        ),
        kode(
            "870",
            "Annet areal (grovfôr), økologisk areal samt 2. års karens",
            &["grovfôr", "økologisk", "areal"],
            Dekar,
        ),
        kode(
            "871",
            "Innmarksbeite, økologisk areal",
            &["grovfôr", "økologisk", "areal"],
            Dekar,
        ),
        kode(
            "875",
            "Grønngjødsling, økologisk areal",
            &["grønngjødsling", "økologisk", "areal"],
            Dekar,
        ),
        kode(
            "876",
            "Areal brakka for å bekjempe ugras, økologisk eller 2. års karens",
            &["annet_areal", "økologisk", "areal"],
            Dekar,
        ),
        kode("880", "Innmarksbeite i 1 års karens", &["karens", "areal"], Dekar),
        kode("881", "Grovforareal i 1 års karens", &["karens", "areal"], Dekar),
        kode(
            "882",
            "Annet areal (enn grovfor) i 1 års karens",
            &["karens", "areal"],
            Dekar,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::produksjonstilskudd::{CodeQuery, Produksjonstilskudd};
    use std::collections::HashSet;

    // ============== Dataset Integrity Tests ==============

    #[test]
    fn test_builtin_count() {
        assert_eq!(builtin_codes().len(), 129);
    }

    #[test]
    fn test_builtin_codes_are_valid() {
        for kode in builtin_codes() {
            assert!(
                kode.validate().is_ok(),
                "built-in code {} failed validation",
                kode.code
            );
        }
    }

    #[test]
    fn test_builtin_codes_are_unique() {
        let mut seen = HashSet::new();
        for kode in builtin_codes() {
            assert!(seen.insert(kode.code.clone()), "duplicate code {}", kode.code);
        }
    }

    #[test]
    fn test_every_code_has_groups() {
        for kode in builtin_codes() {
            assert!(!kode.groups.is_empty(), "code {} has no groups", kode.code);
        }
    }

    #[test]
    fn test_series_units() {
        use MeasurementUnit::{Antall, Dekar, Kilo};

        for kode in builtin_codes() {
            let expected = match kode.code.as_bytes()[0] {
                b'1' | b'4' | b'7' => Some(Antall),
                b'2' => Some(Dekar),
                b'5' => Some(Kilo),
                _ => None,
            };
            if let Some(unit) = expected {
                assert_eq!(
                    kode.measured_in, unit,
                    "code {} measured in {}",
                    kode.code, kode.measured_in
                );
            }
        }
    }

    // ============== Entry Tests ==============

    #[test]
    fn test_epler_pair() {
        let codes = builtin_codes();
        let avling = codes.iter().find(|k| k.code == "001").unwrap();
        let areal = codes.iter().find(|k| k.code == "272").unwrap();

        assert_eq!(avling.label, "Epler");
        assert_eq!(avling.description.as_deref(), Some("Avling av epler"));
        assert!(avling.in_group("frukt_avling"));
        assert_eq!(avling.measured_in, MeasurementUnit::Kilo);

        assert_eq!(areal.label, "Epler");
        assert_eq!(areal.description.as_deref(), Some("Areal med epler"));
        assert!(areal.in_group("frukt_areal"));
        assert_eq!(areal.measured_in, MeasurementUnit::Dekar);
    }

    #[test]
    fn test_geiter_beitetilskudd_entry() {
        let codes = builtin_codes();
        let geiter = codes.iter().find(|k| k.code == "489").unwrap();
        assert_eq!(geiter.label, "Geiter, voksne og kje, beitetilskudd");
        assert!(geiter.in_group("geit"));
        assert!(geiter.in_group("beite"));
    }

    #[test]
    fn test_karens_entries_measured_in_dekar() {
        let codes = builtin_codes();
        for code in ["880", "881", "882"] {
            let kode = codes.iter().find(|k| k.code == code).unwrap();
            assert!(kode.in_group("karens"));
            assert_eq!(kode.measured_in, MeasurementUnit::Dekar);
        }
    }

    // ============== Built-in Registry Tests ==============

    #[test]
    fn test_registry_preloads_builtin_codes() {
        let registry = Produksjonstilskudd::new();
        assert_eq!(registry.len(), builtin_codes().len());
        assert_eq!(registry.get_codes()[0], "001");
    }

    #[test]
    fn test_registry_categories_from_builtin_codes() {
        let registry = Produksjonstilskudd::new();
        let categories = registry.categories();

        for expected in ["frukt", "bær", "storfe", "husdyr", "areal", "økologisk", "karens"] {
            assert!(
                categories.contains(&expected.to_string()),
                "missing category {}",
                expected
            );
        }
    }

    #[test]
    fn test_builtin_category_queries() {
        let registry = Produksjonstilskudd::new();

        let frukt = registry.get_codes_in(&["frukt"]);
        assert!(frukt.contains(&"001".to_string()));
        assert!(frukt.contains(&"272".to_string()));
        assert!(frukt.contains(&"863".to_string()));

        let storfe = registry.get_codes_in(&["storfe"]);
        assert!(storfe.contains(&"120".to_string()));
        assert!(storfe.contains(&"720".to_string()));
    }

    #[test]
    fn test_builtin_measurement_query() {
        let registry = Produksjonstilskudd::new();
        let dekar = registry.get_codes_by_measurement(MeasurementUnit::Dekar);

        assert!(dekar.contains(&"210".to_string()));
        assert!(dekar.contains(&"272".to_string()));
        assert!(!dekar.contains(&"120".to_string()));
    }

    #[test]
    fn test_builtin_prefixed_query() {
        let registry = Produksjonstilskudd::new();
        let codes = registry.query(&CodeQuery::new().with_category("frukt_avling").with_prefix());

        assert!(codes.contains(&"pk_001".to_string()));
        assert!(codes.iter().all(|code| code.starts_with("pk_")));
    }
}
