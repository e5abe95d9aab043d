use crate::model::Continent::{self, Africa, Asia, Europe, NorthAmerica, Oceania, SouthAmerica};

/// Built-in dataset rows: code, display name, continent.
pub(super) const COUNTRIES: &[(&str, &str, Continent)] = &[
    // Africa
    ("dz", "Algeria", Africa),
    ("ao", "Angola", Africa),
    ("bj", "Benin", Africa),
    ("bw", "Botswana", Africa),
    ("bf", "Burkina Faso", Africa),
    ("bi", "Burundi", Africa),
    ("cv", "Cape Verde", Africa),
    ("cm", "Cameroon", Africa),
    ("cf", "Central African Republic", Africa),
    ("td", "Chad", Africa),
    ("km", "Comoros", Africa),
    ("cg", "Congo", Africa),
    ("cd", "DR Congo", Africa),
    ("ci", "Côte d'Ivoire", Africa),
    ("dj", "Djibouti", Africa),
    ("eg", "Egypt", Africa),
    ("gq", "Equatorial Guinea", Africa),
    ("er", "Eritrea", Africa),
    ("sz", "Eswatini", Africa),
    ("et", "Ethiopia", Africa),
    ("ga", "Gabon", Africa),
    ("gm", "Gambia", Africa),
    ("gh", "Ghana", Africa),
    ("gn", "Guinea", Africa),
    ("gw", "Guinea-Bissau", Africa),
    ("ke", "Kenya", Africa),
    ("ls", "Lesotho", Africa),
    ("lr", "Liberia", Africa),
    ("ly", "Libya", Africa),
    ("mg", "Madagascar", Africa),
    ("mw", "Malawi", Africa),
    ("ml", "Mali", Africa),
    ("mr", "Mauritania", Africa),
    ("mu", "Mauritius", Africa),
    ("ma", "Morocco", Africa),
    ("mz", "Mozambique", Africa),
    ("na", "Namibia", Africa),
    ("ne", "Niger", Africa),
    ("ng", "Nigeria", Africa),
    ("rw", "Rwanda", Africa),
    ("st", "São Tomé and Príncipe", Africa),
    ("sn", "Senegal", Africa),
    ("sc", "Seychelles", Africa),
    ("sl", "Sierra Leone", Africa),
    ("so", "Somalia", Africa),
    ("za", "South Africa", Africa),
    ("ss", "South Sudan", Africa),
    ("sd", "Sudan", Africa),
    ("tz", "Tanzania", Africa),
    ("tg", "Togo", Africa),
    ("tn", "Tunisia", Africa),
    ("ug", "Uganda", Africa),
    ("zm", "Zambia", Africa),
    ("zw", "Zimbabwe", Africa),
    // Asia
    ("af", "Afghanistan", Asia),
    ("am", "Armenia", Asia),
    ("az", "Azerbaijan", Asia),
    ("bh", "Bahrain", Asia),
    ("bd", "Bangladesh", Asia),
    ("bt", "Bhutan", Asia),
    ("bn", "Brunei", Asia),
    ("kh", "Cambodia", Asia),
    ("cn", "China", Asia),
    ("ge", "Georgia", Asia),
    ("in", "India", Asia),
    ("id", "Indonesia", Asia),
    ("ir", "Iran", Asia),
    ("iq", "Iraq", Asia),
    ("il", "Israel", Asia),
    ("jp", "Japan", Asia),
    ("jo", "Jordan", Asia),
    ("kz", "Kazakhstan", Asia),
    ("kw", "Kuwait", Asia),
    ("kg", "Kyrgyzstan", Asia),
    ("la", "Laos", Asia),
    ("lb", "Lebanon", Asia),
    ("my", "Malaysia", Asia),
    ("mv", "Maldives", Asia),
    ("mn", "Mongolia", Asia),
    ("mm", "Myanmar", Asia),
    ("np", "Nepal", Asia),
    ("kp", "North Korea", Asia),
    ("om", "Oman", Asia),
    ("pk", "Pakistan", Asia),
    ("ps", "Palestine", Asia),
    ("ph", "Philippines", Asia),
    ("qa", "Qatar", Asia),
    ("sa", "Saudi Arabia", Asia),
    ("sg", "Singapore", Asia),
    ("kr", "South Korea", Asia),
    ("lk", "Sri Lanka", Asia),
    ("sy", "Syria", Asia),
    ("tw", "Taiwan", Asia),
    ("tj", "Tajikistan", Asia),
    ("th", "Thailand", Asia),
    ("tl", "Timor-Leste", Asia),
    ("tm", "Turkmenistan", Asia),
    ("ae", "United Arab Emirates", Asia),
    ("uz", "Uzbekistan", Asia),
    ("vn", "Vietnam", Asia),
    ("ye", "Yemen", Asia),
    // Europe
    ("al", "Albania", Europe),
    ("ad", "Andorra", Europe),
    ("at", "Austria", Europe),
    ("by", "Belarus", Europe),
    ("be", "Belgium", Europe),
    ("ba", "Bosnia and Herzegovina", Europe),
    ("bg", "Bulgaria", Europe),
    ("hr", "Croatia", Europe),
    ("cy", "Cyprus", Europe),
    ("cz", "Czechia", Europe),
    ("dk", "Denmark", Europe),
    ("ee", "Estonia", Europe),
    ("fi", "Finland", Europe),
    ("fr", "France", Europe),
    ("de", "Germany", Europe),
    ("gr", "Greece", Europe),
    ("hu", "Hungary", Europe),
    ("is", "Iceland", Europe),
    ("ie", "Ireland", Europe),
    ("it", "Italy", Europe),
    ("xk", "Kosovo", Europe),
    ("lv", "Latvia", Europe),
    ("li", "Liechtenstein", Europe),
    ("lt", "Lithuania", Europe),
    ("lu", "Luxembourg", Europe),
    ("mt", "Malta", Europe),
    ("md", "Moldova", Europe),
    ("mc", "Monaco", Europe),
    ("me", "Montenegro", Europe),
    ("nl", "Netherlands", Europe),
    ("mk", "North Macedonia", Europe),
    ("no", "Norway", Europe),
    ("pl", "Poland", Europe),
    ("pt", "Portugal", Europe),
    ("ro", "Romania", Europe),
    ("ru", "Russia", Europe),
    ("sm", "San Marino", Europe),
    ("rs", "Serbia", Europe),
    ("sk", "Slovakia", Europe),
    ("si", "Slovenia", Europe),
    ("es", "Spain", Europe),
    ("se", "Sweden", Europe),
    ("ch", "Switzerland", Europe),
    ("tr", "Turkey", Europe),
    ("ua", "Ukraine", Europe),
    ("gb", "United Kingdom", Europe),
    ("va", "Vatican City", Europe),
    // North America
    ("ag", "Antigua and Barbuda", NorthAmerica),
    ("bs", "Bahamas", NorthAmerica),
    ("bb", "Barbados", NorthAmerica),
    ("bz", "Belize", NorthAmerica),
    ("ca", "Canada", NorthAmerica),
    ("cr", "Costa Rica", NorthAmerica),
    ("cu", "Cuba", NorthAmerica),
    ("dm", "Dominica", NorthAmerica),
    ("do", "Dominican Republic", NorthAmerica),
    ("sv", "El Salvador", NorthAmerica),
    ("gd", "Grenada", NorthAmerica),
    ("gt", "Guatemala", NorthAmerica),
    ("ht", "Haiti", NorthAmerica),
    ("hn", "Honduras", NorthAmerica),
    ("jm", "Jamaica", NorthAmerica),
    ("mx", "Mexico", NorthAmerica),
    ("ni", "Nicaragua", NorthAmerica),
    ("pa", "Panama", NorthAmerica),
    ("kn", "Saint Kitts and Nevis", NorthAmerica),
    ("lc", "Saint Lucia", NorthAmerica),
    ("vc", "Saint Vincent and the Grenadines", NorthAmerica),
    ("tt", "Trinidad and Tobago", NorthAmerica),
    ("us", "United States", NorthAmerica),
    // Oceania
    ("au", "Australia", Oceania),
    ("fj", "Fiji", Oceania),
    ("ki", "Kiribati", Oceania),
    ("mh", "Marshall Islands", Oceania),
    ("fm", "Micronesia", Oceania),
    ("nr", "Nauru", Oceania),
    ("nz", "New Zealand", Oceania),
    ("pw", "Palau", Oceania),
    ("pg", "Papua New Guinea", Oceania),
    ("ws", "Samoa", Oceania),
    ("sb", "Solomon Islands", Oceania),
    ("to", "Tonga", Oceania),
    ("tv", "Tuvalu", Oceania),
    ("vu", "Vanuatu", Oceania),
    // South America
    ("ar", "Argentina", SouthAmerica),
    ("bo", "Bolivia", SouthAmerica),
    ("br", "Brazil", SouthAmerica),
    ("cl", "Chile", SouthAmerica),
    ("co", "Colombia", SouthAmerica),
    ("ec", "Ecuador", SouthAmerica),
    ("gy", "Guyana", SouthAmerica),
    ("py", "Paraguay", SouthAmerica),
    ("pe", "Peru", SouthAmerica),
    ("sr", "Suriname", SouthAmerica),
    ("uy", "Uruguay", SouthAmerica),
    ("ve", "Venezuela", SouthAmerica),
];
