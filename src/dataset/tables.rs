//! Static lookup tables: continent allow-lists and localized country names.
//!
//! The allow-lists are only consulted when a dataset has no continent
//! column. Matching is exact on the canonical English name.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use super::record::Continent;

pub const EUROPE: &[&str] = &[
    "Albania", "Andorra", "Austria", "Belarus", "Belgium", "Bosnia and Herzegovina", "Bulgaria",
    "Croatia", "Czech Republic", "Denmark", "Estonia", "Finland", "France", "Germany", "Greece",
    "Hungary", "Iceland", "Ireland", "Italy", "Latvia", "Liechtenstein", "Lithuania",
    "Luxembourg", "Malta", "Moldova", "Monaco", "Montenegro", "Netherlands", "North Macedonia",
    "Norway", "Poland", "Portugal", "Romania", "Russia", "San Marino", "Serbia", "Slovakia",
    "Slovenia", "Spain", "Sweden", "Switzerland", "Ukraine", "United Kingdom", "Vatican City",
];

pub const ASIA: &[&str] = &[
    "Afghanistan", "Armenia", "Azerbaijan", "Bahrain", "Bangladesh", "Bhutan", "Brunei",
    "Cambodia", "China", "Cyprus", "Georgia", "India", "Indonesia", "Iran", "Iraq", "Israel",
    "Japan", "Jordan", "Kazakhstan", "Kuwait", "Kyrgyzstan", "Laos", "Lebanon", "Malaysia",
    "Maldives", "Mongolia", "Myanmar", "Nepal", "North Korea", "Oman", "Pakistan", "Palestine",
    "Philippines", "Qatar", "Saudi Arabia", "Singapore", "South Korea", "Sri Lanka", "Syria",
    "Taiwan", "Tajikistan", "Thailand", "Timor-Leste", "Turkey", "Turkmenistan",
    "United Arab Emirates", "Uzbekistan", "Vietnam", "Yemen",
];

pub const AFRICA: &[&str] = &[
    "Algeria", "Angola", "Benin", "Botswana", "Burkina Faso", "Burundi", "Cabo Verde",
    "Cameroon", "Central African Republic", "Chad", "Comoros", "Congo", "Djibouti", "Egypt",
    "Equatorial Guinea", "Eritrea", "Eswatini", "Ethiopia", "Gabon", "Gambia", "Ghana",
    "Guinea", "Guinea-Bissau", "Ivory Coast", "Kenya", "Lesotho", "Liberia", "Libya",
    "Madagascar", "Malawi", "Mali", "Mauritania", "Mauritius", "Morocco", "Mozambique",
    "Namibia", "Niger", "Nigeria", "Rwanda", "Sao Tome and Principe", "Senegal", "Seychelles",
    "Sierra Leone", "Somalia", "South Africa", "South Sudan", "Sudan", "Tanzania", "Togo",
    "Tunisia", "Uganda", "Zambia", "Zimbabwe",
];

pub const NORTH_AMERICA: &[&str] = &[
    "Antigua and Barbuda", "Bahamas", "Barbados", "Belize", "Canada", "Costa Rica", "Cuba",
    "Dominica", "Dominican Republic", "El Salvador", "Grenada", "Guatemala", "Haiti",
    "Honduras", "Jamaica", "Mexico", "Nicaragua", "Panama", "Saint Kitts and Nevis",
    "Saint Lucia", "Saint Vincent and the Grenadines", "Trinidad and Tobago", "United States",
];

pub const SOUTH_AMERICA: &[&str] = &[
    "Argentina", "Bolivia", "Brazil", "Chile", "Colombia", "Ecuador", "Guyana", "Paraguay",
    "Peru", "Suriname", "Uruguay", "Venezuela",
];

pub const OCEANIA: &[&str] = &[
    "Australia", "Fiji", "Kiribati", "Marshall Islands", "Micronesia", "Nauru", "New Zealand",
    "Palau", "Papua New Guinea", "Samoa", "Solomon Islands", "Tonga", "Tuvalu", "Vanuatu",
];

/// Allow-lists in lookup order. A name listed under two regions takes the first.
pub const CONTINENT_LISTS: &[(Continent, &[&str])] = &[
    (Continent::Europe, EUROPE),
    (Continent::Asia, ASIA),
    (Continent::Africa, AFRICA),
    (Continent::NorthAmerica, NORTH_AMERICA),
    (Continent::SouthAmerica, SOUTH_AMERICA),
    (Continent::Oceania, OCEANIA),
];

/// Polish names keyed by canonical English name. All entries are lowercase.
pub const POLISH_NAMES: &[(&str, &[&str])] = &[
    ("Afghanistan", &["afganistan"]),
    ("Albania", &["albania"]),
    ("Algeria", &["algieria"]),
    ("Andorra", &["andora"]),
    ("Angola", &["angola"]),
    ("Antigua and Barbuda", &["antigua i barbuda"]),
    ("Argentina", &["argentyna"]),
    ("Armenia", &["armenia"]),
    ("Australia", &["australia"]),
    ("Austria", &["austria"]),
    ("Azerbaijan", &["azerbejdżan"]),
    ("Bahamas", &["bahamy"]),
    ("Bahrain", &["bahrajn"]),
    ("Bangladesh", &["bangladesz"]),
    ("Barbados", &["barbados"]),
    ("Belarus", &["białoruś"]),
    ("Belgium", &["belgia"]),
    ("Belize", &["belize"]),
    ("Benin", &["benin"]),
    ("Bhutan", &["bhutan"]),
    ("Bolivia", &["boliwia"]),
    ("Bosnia and Herzegovina", &["bośnia i hercegowina"]),
    ("Botswana", &["botswana"]),
    ("Brazil", &["brazylia"]),
    ("Brunei", &["brunei"]),
    ("Bulgaria", &["bułgaria"]),
    ("Burkina Faso", &["burkina faso"]),
    ("Burundi", &["burundi"]),
    ("Cambodia", &["kambodża"]),
    ("Cameroon", &["kamerun"]),
    ("Canada", &["kanada"]),
    ("Cape Verde", &["republika zielonego przylądka", "zielony przylądek"]),
    ("Central African Republic", &["republika środkowoafrykańska"]),
    ("Chad", &["czad"]),
    ("Chile", &["chile"]),
    ("China", &["chiny"]),
    ("Colombia", &["kolumbia"]),
    ("Comoros", &["komory"]),
    ("Costa Rica", &["kostaryka"]),
    ("Croatia", &["chorwacja"]),
    ("Cuba", &["kuba"]),
    ("Cyprus", &["cypr"]),
    ("Czech Republic", &["czechy", "republika czeska"]),
    ("Democratic Republic of the Congo", &["demokratyczna republika konga"]),
    ("Denmark", &["dania"]),
    ("Djibouti", &["dżibuti"]),
    ("Dominica", &["dominika"]),
    ("Dominican Republic", &["dominikana", "republika dominikańska"]),
    ("East Timor", &["timor wschodni"]),
    ("Ecuador", &["ekwador"]),
    ("Egypt", &["egipt"]),
    ("El Salvador", &["salwador"]),
    ("Equatorial Guinea", &["gwinea równikowa"]),
    ("Eritrea", &["erytrea"]),
    ("Estonia", &["estonia"]),
    ("Eswatini", &["eswatini", "suazi"]),
    ("Ethiopia", &["etiopia"]),
    ("Fiji", &["fidżi"]),
    ("Finland", &["finlandia"]),
    ("France", &["francja"]),
    ("Gabon", &["gabon"]),
    ("Gambia", &["gambia"]),
    ("Georgia", &["gruzja"]),
    ("Germany", &["niemcy"]),
    ("Ghana", &["ghana"]),
    ("Greece", &["grecja"]),
    ("Grenada", &["grenada"]),
    ("Guatemala", &["gwatemala"]),
    ("Guinea", &["gwinea"]),
    ("Guinea-Bissau", &["gwinea bissau"]),
    ("Guyana", &["gujana"]),
    ("Haiti", &["haiti"]),
    ("Honduras", &["honduras"]),
    ("Hungary", &["węgry"]),
    ("Iceland", &["islandia"]),
    ("India", &["indie"]),
    ("Indonesia", &["indonezja"]),
    ("Iran", &["iran"]),
    ("Iraq", &["irak"]),
    ("Ireland", &["irlandia"]),
    ("Israel", &["izrael"]),
    ("Italy", &["włochy"]),
    ("Ivory Coast", &["wybrzeże kości słoniowej"]),
    ("Jamaica", &["jamajka"]),
    ("Japan", &["japonia"]),
    ("Jordan", &["jordania"]),
    ("Kazakhstan", &["kazachstan"]),
    ("Kenya", &["kenia"]),
    ("Kiribati", &["kiribati"]),
    ("Kosovo", &["kosowo"]),
    ("Kuwait", &["kuwejt"]),
    ("Kyrgyzstan", &["kirgistan"]),
    ("Laos", &["laos"]),
    ("Latvia", &["łotwa"]),
    ("Lebanon", &["liban"]),
    ("Lesotho", &["lesotho"]),
    ("Liberia", &["liberia"]),
    ("Libya", &["libia"]),
    ("Liechtenstein", &["liechtenstein"]),
    ("Lithuania", &["litwa"]),
    ("Luxembourg", &["luksemburg"]),
    ("Madagascar", &["madagaskar"]),
    ("Malawi", &["malawi"]),
    ("Malaysia", &["malezja"]),
    ("Maldives", &["malediwy"]),
    ("Mali", &["mali"]),
    ("Malta", &["malta"]),
    ("Marshall Islands", &["wyspy marshalla"]),
    ("Mauritania", &["mauretania"]),
    ("Mauritius", &["mauritius"]),
    ("Mexico", &["meksyk"]),
    ("Micronesia", &["mikronezja"]),
    ("Moldova", &["mołdawia"]),
    ("Monaco", &["monako"]),
    ("Mongolia", &["mongolia"]),
    ("Montenegro", &["czarnogóra"]),
    ("Morocco", &["maroko"]),
    ("Mozambique", &["mozambik"]),
    ("Myanmar", &["birma", "mjanma"]),
    ("Namibia", &["namibia"]),
    ("Nauru", &["nauru"]),
    ("Nepal", &["nepal"]),
    ("Netherlands", &["holandia", "niderlandy"]),
    ("New Zealand", &["nowa zelandia"]),
    ("Nicaragua", &["nikaragua"]),
    ("Niger", &["niger"]),
    ("Nigeria", &["nigeria"]),
    ("North Korea", &["korea północna"]),
    ("North Macedonia", &["macedonia północna"]),
    ("Norway", &["norwegia"]),
    ("Oman", &["oman"]),
    ("Pakistan", &["pakistan"]),
    ("Palau", &["palau"]),
    ("Palestine", &["palestyna"]),
    ("Panama", &["panama"]),
    ("Papua New Guinea", &["papua-nowa gwinea"]),
    ("Paraguay", &["paragwaj"]),
    ("Peru", &["peru"]),
    ("Philippines", &["filipiny"]),
    ("Poland", &["polska"]),
    ("Portugal", &["portugalia"]),
    ("Qatar", &["katar"]),
    ("Republic of the Congo", &["republika konga", "kongo"]),
    ("Romania", &["rumunia"]),
    ("Russia", &["rosja"]),
    ("Rwanda", &["rwanda"]),
    ("Saint Kitts and Nevis", &["saint kitts i nevis"]),
    ("Saint Lucia", &["saint lucia"]),
    ("Saint Vincent and the Grenadines", &["saint vincent i grenadyny"]),
    ("Samoa", &["samoa"]),
    ("San Marino", &["san marino"]),
    ("Saudi Arabia", &["arabia saudyjska"]),
    ("Senegal", &["senegal"]),
    ("Serbia", &["serbia"]),
    ("Seychelles", &["seszele"]),
    ("Sierra Leone", &["sierra leone"]),
    ("Singapore", &["singapur"]),
    ("Slovakia", &["słowacja"]),
    ("Slovenia", &["słowenia"]),
    ("Solomon Islands", &["wyspy salomona"]),
    ("Somalia", &["somalia"]),
    ("South Africa", &["republika południowej afryki", "rpa"]),
    ("South Korea", &["korea południowa"]),
    ("South Sudan", &["sudan południowy"]),
    ("Spain", &["hiszpania"]),
    ("Sri Lanka", &["sri lanka"]),
    ("Sudan", &["sudan"]),
    ("Suriname", &["surinam"]),
    ("Sweden", &["szwecja"]),
    ("Switzerland", &["szwajcaria"]),
    ("Syria", &["syria"]),
    ("Taiwan", &["tajwan"]),
    ("Tajikistan", &["tadżykistan"]),
    ("Tanzania", &["tanzania"]),
    ("Thailand", &["tajlandia"]),
    ("Togo", &["togo"]),
    ("Tonga", &["tonga"]),
    ("Trinidad and Tobago", &["trynidad i tobago"]),
    ("Tunisia", &["tunezja"]),
    ("Turkey", &["turcja"]),
    ("Turkmenistan", &["turkmenistan"]),
    ("Tuvalu", &["tuvalu"]),
    ("Uganda", &["uganda"]),
    ("Ukraine", &["ukraina"]),
    ("United Arab Emirates", &["zjednoczone emiraty arabskie", "emiraty arabskie", "zea"]),
    ("United Kingdom", &["wielka brytania", "zjednoczone królestwo", "anglia", "uk"]),
    ("United States", &["stany zjednoczone", "usa", "ameryka"]),
    ("Uruguay", &["urugwaj"]),
    ("Uzbekistan", &["uzbekistan"]),
    ("Vanuatu", &["vanuatu"]),
    ("Vatican City", &["watykan"]),
    ("Venezuela", &["wenezuela"]),
    ("Vietnam", &["wietnam"]),
    ("Yemen", &["jemen"]),
    ("Zambia", &["zambia"]),
    ("Zimbabwe", &["zimbabwe"]),
];

/// Infer a continent from a canonical country name.
///
/// Returns [`Continent::Unknown`] for names on none of the lists.
#[must_use]
pub fn continent_for(name: &str) -> Continent {
    static INDEX: OnceLock<FxHashMap<&'static str, Continent>> = OnceLock::new();

    let index = INDEX.get_or_init(|| {
        let mut map = FxHashMap::default();
        for (continent, names) in CONTINENT_LISTS {
            for name in names.iter() {
                map.entry(*name).or_insert(*continent);
            }
        }
        map
    });

    index.get(name).copied().unwrap_or(Continent::Unknown)
}

/// Localized aliases for a canonical country name, in table order.
#[must_use]
pub fn localized_names(name: &str) -> &'static [&'static str] {
    static INDEX: OnceLock<FxHashMap<&'static str, &'static [&'static str]>> = OnceLock::new();

    let index = INDEX.get_or_init(|| POLISH_NAMES.iter().copied().collect());

    index.get(name).copied().unwrap_or(&[])
}
