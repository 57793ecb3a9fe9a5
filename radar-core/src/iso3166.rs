//! ISO 3166-1 country list.

/// (display name, ISO2, ISO3) for every ISO 3166-1 entry.
pub(crate) const ISO_3166_1: &[(&str, &str, &str)] = &[
    ("Andorra", "AD", "AND"),
    ("United Arab Emirates", "AE", "ARE"),
    ("Afghanistan", "AF", "AFG"),
    ("Antigua and Barbuda", "AG", "ATG"),
    ("Anguilla", "AI", "AIA"),
    ("Albania", "AL", "ALB"),
    ("Armenia", "AM", "ARM"),
    ("Angola", "AO", "AGO"),
    ("Antarctica", "AQ", "ATA"),
    ("Argentina", "AR", "ARG"),
    ("American Samoa", "AS", "ASM"),
    ("Austria", "AT", "AUT"),
    ("Australia", "AU", "AUS"),
    ("Aruba", "AW", "ABW"),
    ("Åland Islands", "AX", "ALA"),
    ("Azerbaijan", "AZ", "AZE"),
    ("Bosnia and Herzegovina", "BA", "BIH"),
    ("Barbados", "BB", "BRB"),
    ("Bangladesh", "BD", "BGD"),
    ("Belgium", "BE", "BEL"),
    ("Burkina Faso", "BF", "BFA"),
    ("Bulgaria", "BG", "BGR"),
    ("Bahrain", "BH", "BHR"),
    ("Burundi", "BI", "BDI"),
    ("Benin", "BJ", "BEN"),
    ("Saint Barthélemy", "BL", "BLM"),
    ("Bermuda", "BM", "BMU"),
    ("Brunei Darussalam", "BN", "BRN"),
    ("Bolivia", "BO", "BOL"),
    ("Bonaire, Sint Eustatius and Saba", "BQ", "BES"),
    ("Brazil", "BR", "BRA"),
    ("Bahamas", "BS", "BHS"),
    ("Bhutan", "BT", "BTN"),
    ("Bouvet Island", "BV", "BVT"),
    ("Botswana", "BW", "BWA"),
    ("Belarus", "BY", "BLR"),
    ("Belize", "BZ", "BLZ"),
    ("Canada", "CA", "CAN"),
    ("Cocos (Keeling) Islands", "CC", "CCK"),
    ("Congo, The Democratic Republic of the", "CD", "COD"),
    ("Central African Republic", "CF", "CAF"),
    ("Congo", "CG", "COG"),
    ("Switzerland", "CH", "CHE"),
    ("Côte d'Ivoire", "CI", "CIV"),
    ("Cook Islands", "CK", "COK"),
    ("Chile", "CL", "CHL"),
    ("Cameroon", "CM", "CMR"),
    ("China", "CN", "CHN"),
    ("Colombia", "CO", "COL"),
    ("Costa Rica", "CR", "CRI"),
    ("Cuba", "CU", "CUB"),
    ("Cabo Verde", "CV", "CPV"),
    ("Curaçao", "CW", "CUW"),
    ("Christmas Island", "CX", "CXR"),
    ("Cyprus", "CY", "CYP"),
    ("Czechia", "CZ", "CZE"),
    ("Germany", "DE", "DEU"),
    ("Djibouti", "DJ", "DJI"),
    ("Denmark", "DK", "DNK"),
    ("Dominica", "DM", "DMA"),
    ("Dominican Republic", "DO", "DOM"),
    ("Algeria", "DZ", "DZA"),
    ("Ecuador", "EC", "ECU"),
    ("Estonia", "EE", "EST"),
    ("Egypt", "EG", "EGY"),
    ("Western Sahara", "EH", "ESH"),
    ("Eritrea", "ER", "ERI"),
    ("Spain", "ES", "ESP"),
    ("Ethiopia", "ET", "ETH"),
    ("Finland", "FI", "FIN"),
    ("Fiji", "FJ", "FJI"),
    ("Falkland Islands (Malvinas)", "FK", "FLK"),
    ("Micronesia, Federated States of", "FM", "FSM"),
    ("Faroe Islands", "FO", "FRO"),
    ("France", "FR", "FRA"),
    ("Gabon", "GA", "GAB"),
    ("United Kingdom", "GB", "GBR"),
    ("Grenada", "GD", "GRD"),
    ("Georgia", "GE", "GEO"),
    ("French Guiana", "GF", "GUF"),
    ("Guernsey", "GG", "GGY"),
    ("Ghana", "GH", "GHA"),
    ("Gibraltar", "GI", "GIB"),
    ("Greenland", "GL", "GRL"),
    ("Gambia", "GM", "GMB"),
    ("Guinea", "GN", "GIN"),
    ("Guadeloupe", "GP", "GLP"),
    ("Equatorial Guinea", "GQ", "GNQ"),
    ("Greece", "GR", "GRC"),
    ("South Georgia and the South Sandwich Islands", "GS", "SGS"),
    ("Guatemala", "GT", "GTM"),
    ("Guam", "GU", "GUM"),
    ("Guinea-Bissau", "GW", "GNB"),
    ("Guyana", "GY", "GUY"),
    ("Hong Kong", "HK", "HKG"),
    ("Heard Island and McDonald Islands", "HM", "HMD"),
    ("Honduras", "HN", "HND"),
    ("Croatia", "HR", "HRV"),
    ("Haiti", "HT", "HTI"),
    ("Hungary", "HU", "HUN"),
    ("Indonesia", "ID", "IDN"),
    ("Ireland", "IE", "IRL"),
    ("Israel", "IL", "ISR"),
    ("Isle of Man", "IM", "IMN"),
    ("India", "IN", "IND"),
    ("British Indian Ocean Territory", "IO", "IOT"),
    ("Iraq", "IQ", "IRQ"),
    ("Iran", "IR", "IRN"),
    ("Iceland", "IS", "ISL"),
    ("Italy", "IT", "ITA"),
    ("Jersey", "JE", "JEY"),
    ("Jamaica", "JM", "JAM"),
    ("Jordan", "JO", "JOR"),
    ("Japan", "JP", "JPN"),
    ("Kenya", "KE", "KEN"),
    ("Kyrgyzstan", "KG", "KGZ"),
    ("Cambodia", "KH", "KHM"),
    ("Kiribati", "KI", "KIR"),
    ("Comoros", "KM", "COM"),
    ("Saint Kitts and Nevis", "KN", "KNA"),
    ("North Korea", "KP", "PRK"),
    ("South Korea", "KR", "KOR"),
    ("Kuwait", "KW", "KWT"),
    ("Cayman Islands", "KY", "CYM"),
    ("Kazakhstan", "KZ", "KAZ"),
    ("Laos", "LA", "LAO"),
    ("Lebanon", "LB", "LBN"),
    ("Saint Lucia", "LC", "LCA"),
    ("Liechtenstein", "LI", "LIE"),
    ("Sri Lanka", "LK", "LKA"),
    ("Liberia", "LR", "LBR"),
    ("Lesotho", "LS", "LSO"),
    ("Lithuania", "LT", "LTU"),
    ("Luxembourg", "LU", "LUX"),
    ("Latvia", "LV", "LVA"),
    ("Libya", "LY", "LBY"),
    ("Morocco", "MA", "MAR"),
    ("Monaco", "MC", "MCO"),
    ("Moldova", "MD", "MDA"),
    ("Montenegro", "ME", "MNE"),
    ("Saint Martin (French part)", "MF", "MAF"),
    ("Madagascar", "MG", "MDG"),
    ("Marshall Islands", "MH", "MHL"),
    ("North Macedonia", "MK", "MKD"),
    ("Mali", "ML", "MLI"),
    ("Myanmar", "MM", "MMR"),
    ("Mongolia", "MN", "MNG"),
    ("Macao", "MO", "MAC"),
    ("Northern Mariana Islands", "MP", "MNP"),
    ("Martinique", "MQ", "MTQ"),
    ("Mauritania", "MR", "MRT"),
    ("Montserrat", "MS", "MSR"),
    ("Malta", "MT", "MLT"),
    ("Mauritius", "MU", "MUS"),
    ("Maldives", "MV", "MDV"),
    ("Malawi", "MW", "MWI"),
    ("Mexico", "MX", "MEX"),
    ("Malaysia", "MY", "MYS"),
    ("Mozambique", "MZ", "MOZ"),
    ("Namibia", "NA", "NAM"),
    ("New Caledonia", "NC", "NCL"),
    ("Niger", "NE", "NER"),
    ("Norfolk Island", "NF", "NFK"),
    ("Nigeria", "NG", "NGA"),
    ("Nicaragua", "NI", "NIC"),
    ("Netherlands", "NL", "NLD"),
    ("Norway", "NO", "NOR"),
    ("Nepal", "NP", "NPL"),
    ("Nauru", "NR", "NRU"),
    ("Niue", "NU", "NIU"),
    ("New Zealand", "NZ", "NZL"),
    ("Oman", "OM", "OMN"),
    ("Panama", "PA", "PAN"),
    ("Peru", "PE", "PER"),
    ("French Polynesia", "PF", "PYF"),
    ("Papua New Guinea", "PG", "PNG"),
    ("Philippines", "PH", "PHL"),
    ("Pakistan", "PK", "PAK"),
    ("Poland", "PL", "POL"),
    ("Saint Pierre and Miquelon", "PM", "SPM"),
    ("Pitcairn", "PN", "PCN"),
    ("Puerto Rico", "PR", "PRI"),
    ("Palestine, State of", "PS", "PSE"),
    ("Portugal", "PT", "PRT"),
    ("Palau", "PW", "PLW"),
    ("Paraguay", "PY", "PRY"),
    ("Qatar", "QA", "QAT"),
    ("Réunion", "RE", "REU"),
    ("Romania", "RO", "ROU"),
    ("Serbia", "RS", "SRB"),
    ("Russian Federation", "RU", "RUS"),
    ("Rwanda", "RW", "RWA"),
    ("Saudi Arabia", "SA", "SAU"),
    ("Solomon Islands", "SB", "SLB"),
    ("Seychelles", "SC", "SYC"),
    ("Sudan", "SD", "SDN"),
    ("Sweden", "SE", "SWE"),
    ("Singapore", "SG", "SGP"),
    ("Saint Helena, Ascension and Tristan da Cunha", "SH", "SHN"),
    ("Slovenia", "SI", "SVN"),
    ("Svalbard and Jan Mayen", "SJ", "SJM"),
    ("Slovakia", "SK", "SVK"),
    ("Sierra Leone", "SL", "SLE"),
    ("San Marino", "SM", "SMR"),
    ("Senegal", "SN", "SEN"),
    ("Somalia", "SO", "SOM"),
    ("Suriname", "SR", "SUR"),
    ("South Sudan", "SS", "SSD"),
    ("Sao Tome and Principe", "ST", "STP"),
    ("El Salvador", "SV", "SLV"),
    ("Sint Maarten (Dutch part)", "SX", "SXM"),
    ("Syria", "SY", "SYR"),
    ("Eswatini", "SZ", "SWZ"),
    ("Turks and Caicos Islands", "TC", "TCA"),
    ("Chad", "TD", "TCD"),
    ("French Southern Territories", "TF", "ATF"),
    ("Togo", "TG", "TGO"),
    ("Thailand", "TH", "THA"),
    ("Tajikistan", "TJ", "TJK"),
    ("Tokelau", "TK", "TKL"),
    ("Timor-Leste", "TL", "TLS"),
    ("Turkmenistan", "TM", "TKM"),
    ("Tunisia", "TN", "TUN"),
    ("Tonga", "TO", "TON"),
    ("Türkiye", "TR", "TUR"),
    ("Trinidad and Tobago", "TT", "TTO"),
    ("Tuvalu", "TV", "TUV"),
    ("Taiwan", "TW", "TWN"),
    ("Tanzania", "TZ", "TZA"),
    ("Ukraine", "UA", "UKR"),
    ("Uganda", "UG", "UGA"),
    ("United States Minor Outlying Islands", "UM", "UMI"),
    ("United States", "US", "USA"),
    ("Uruguay", "UY", "URY"),
    ("Uzbekistan", "UZ", "UZB"),
    ("Holy See (Vatican City State)", "VA", "VAT"),
    ("Saint Vincent and the Grenadines", "VC", "VCT"),
    ("Venezuela", "VE", "VEN"),
    ("Virgin Islands, British", "VG", "VGB"),
    ("Virgin Islands, U.S.", "VI", "VIR"),
    ("Vietnam", "VN", "VNM"),
    ("Vanuatu", "VU", "VUT"),
    ("Wallis and Futuna", "WF", "WLF"),
    ("Samoa", "WS", "WSM"),
    ("Yemen", "YE", "YEM"),
    ("Mayotte", "YT", "MYT"),
    ("South Africa", "ZA", "ZAF"),
    ("Zambia", "ZM", "ZMB"),
    ("Zimbabwe", "ZW", "ZWE"),
];

/// Formal and official names that differ from the display name, as (name, ISO2).
pub(crate) const ISO_FORMAL_NAMES: &[(&str, &str)] = &[
    ("Principality of Andorra", "AD"),
    ("Islamic Republic of Afghanistan", "AF"),
    ("Republic of Albania", "AL"),
    ("Republic of Armenia", "AM"),
    ("Republic of Angola", "AO"),
    ("Argentine Republic", "AR"),
    ("Republic of Austria", "AT"),
    ("Republic of Azerbaijan", "AZ"),
    ("Republic of Bosnia and Herzegovina", "BA"),
    ("People's Republic of Bangladesh", "BD"),
    ("Kingdom of Belgium", "BE"),
    ("Republic of Bulgaria", "BG"),
    ("Kingdom of Bahrain", "BH"),
    ("Republic of Burundi", "BI"),
    ("Republic of Benin", "BJ"),
    ("Bolivia, Plurinational State of", "BO"),
    ("Plurinational State of Bolivia", "BO"),
    ("Federative Republic of Brazil", "BR"),
    ("Commonwealth of the Bahamas", "BS"),
    ("Kingdom of Bhutan", "BT"),
    ("Republic of Botswana", "BW"),
    ("Republic of Belarus", "BY"),
    ("Republic of the Congo", "CG"),
    ("Swiss Confederation", "CH"),
    ("Republic of Côte d'Ivoire", "CI"),
    ("Republic of Chile", "CL"),
    ("Republic of Cameroon", "CM"),
    ("People's Republic of China", "CN"),
    ("Republic of Colombia", "CO"),
    ("Republic of Costa Rica", "CR"),
    ("Republic of Cuba", "CU"),
    ("Republic of Cabo Verde", "CV"),
    ("Republic of Cyprus", "CY"),
    ("Czech Republic", "CZ"),
    ("Federal Republic of Germany", "DE"),
    ("Republic of Djibouti", "DJ"),
    ("Kingdom of Denmark", "DK"),
    ("Commonwealth of Dominica", "DM"),
    ("People's Democratic Republic of Algeria", "DZ"),
    ("Republic of Ecuador", "EC"),
    ("Republic of Estonia", "EE"),
    ("Arab Republic of Egypt", "EG"),
    ("the State of Eritrea", "ER"),
    ("Kingdom of Spain", "ES"),
    ("Federal Democratic Republic of Ethiopia", "ET"),
    ("Republic of Finland", "FI"),
    ("Republic of Fiji", "FJ"),
    ("Federated States of Micronesia", "FM"),
    ("French Republic", "FR"),
    ("Gabonese Republic", "GA"),
    ("United Kingdom of Great Britain and Northern Ireland", "GB"),
    ("Republic of Ghana", "GH"),
    ("Republic of the Gambia", "GM"),
    ("Republic of Guinea", "GN"),
    ("Republic of Equatorial Guinea", "GQ"),
    ("Hellenic Republic", "GR"),
    ("Republic of Guatemala", "GT"),
    ("Republic of Guinea-Bissau", "GW"),
    ("Republic of Guyana", "GY"),
    ("Hong Kong Special Administrative Region of China", "HK"),
    ("Republic of Honduras", "HN"),
    ("Republic of Croatia", "HR"),
    ("Republic of Haiti", "HT"),
    ("Republic of Indonesia", "ID"),
    ("State of Israel", "IL"),
    ("Republic of India", "IN"),
    ("Republic of Iraq", "IQ"),
    ("Iran, Islamic Republic of", "IR"),
    ("Islamic Republic of Iran", "IR"),
    ("Republic of Iceland", "IS"),
    ("Italian Republic", "IT"),
    ("Hashemite Kingdom of Jordan", "JO"),
    ("Republic of Kenya", "KE"),
    ("Kyrgyz Republic", "KG"),
    ("Kingdom of Cambodia", "KH"),
    ("Republic of Kiribati", "KI"),
    ("Union of the Comoros", "KM"),
    ("Korea, Democratic People's Republic of", "KP"),
    ("Democratic People's Republic of Korea", "KP"),
    ("Korea, Republic of", "KR"),
    ("State of Kuwait", "KW"),
    ("Republic of Kazakhstan", "KZ"),
    ("Lao People's Democratic Republic", "LA"),
    ("Lebanese Republic", "LB"),
    ("Principality of Liechtenstein", "LI"),
    ("Democratic Socialist Republic of Sri Lanka", "LK"),
    ("Republic of Liberia", "LR"),
    ("Kingdom of Lesotho", "LS"),
    ("Republic of Lithuania", "LT"),
    ("Grand Duchy of Luxembourg", "LU"),
    ("Republic of Latvia", "LV"),
    ("Kingdom of Morocco", "MA"),
    ("Principality of Monaco", "MC"),
    ("Moldova, Republic of", "MD"),
    ("Republic of Moldova", "MD"),
    ("Republic of Madagascar", "MG"),
    ("Republic of the Marshall Islands", "MH"),
    ("Republic of North Macedonia", "MK"),
    ("Republic of Mali", "ML"),
    ("Republic of Myanmar", "MM"),
    ("Macao Special Administrative Region of China", "MO"),
    ("Commonwealth of the Northern Mariana Islands", "MP"),
    ("Islamic Republic of Mauritania", "MR"),
    ("Republic of Malta", "MT"),
    ("Republic of Mauritius", "MU"),
    ("Republic of Maldives", "MV"),
    ("Republic of Malawi", "MW"),
    ("United Mexican States", "MX"),
    ("Republic of Mozambique", "MZ"),
    ("Republic of Namibia", "NA"),
    ("Republic of the Niger", "NE"),
    ("Federal Republic of Nigeria", "NG"),
    ("Republic of Nicaragua", "NI"),
    ("Kingdom of the Netherlands", "NL"),
    ("Kingdom of Norway", "NO"),
    ("Federal Democratic Republic of Nepal", "NP"),
    ("Republic of Nauru", "NR"),
    ("Sultanate of Oman", "OM"),
    ("Republic of Panama", "PA"),
    ("Republic of Peru", "PE"),
    ("Independent State of Papua New Guinea", "PG"),
    ("Republic of the Philippines", "PH"),
    ("Islamic Republic of Pakistan", "PK"),
    ("Republic of Poland", "PL"),
    ("the State of Palestine", "PS"),
    ("Portuguese Republic", "PT"),
    ("Republic of Palau", "PW"),
    ("Republic of Paraguay", "PY"),
    ("State of Qatar", "QA"),
    ("Republic of Serbia", "RS"),
    ("Rwandese Republic", "RW"),
    ("Kingdom of Saudi Arabia", "SA"),
    ("Republic of Seychelles", "SC"),
    ("Republic of the Sudan", "SD"),
    ("Kingdom of Sweden", "SE"),
    ("Republic of Singapore", "SG"),
    ("Republic of Slovenia", "SI"),
    ("Slovak Republic", "SK"),
    ("Republic of Sierra Leone", "SL"),
    ("Republic of San Marino", "SM"),
    ("Republic of Senegal", "SN"),
    ("Federal Republic of Somalia", "SO"),
    ("Republic of Suriname", "SR"),
    ("Republic of South Sudan", "SS"),
    ("Democratic Republic of Sao Tome and Principe", "ST"),
    ("Republic of El Salvador", "SV"),
    ("Syrian Arab Republic", "SY"),
    ("Kingdom of Eswatini", "SZ"),
    ("Republic of Chad", "TD"),
    ("Togolese Republic", "TG"),
    ("Kingdom of Thailand", "TH"),
    ("Republic of Tajikistan", "TJ"),
    ("Democratic Republic of Timor-Leste", "TL"),
    ("Republic of Tunisia", "TN"),
    ("Kingdom of Tonga", "TO"),
    ("Republic of Türkiye", "TR"),
    ("Republic of Trinidad and Tobago", "TT"),
    ("Taiwan, Province of China", "TW"),
    ("Tanzania, United Republic of", "TZ"),
    ("United Republic of Tanzania", "TZ"),
    ("Republic of Uganda", "UG"),
    ("United States of America", "US"),
    ("Eastern Republic of Uruguay", "UY"),
    ("Republic of Uzbekistan", "UZ"),
    ("Venezuela, Bolivarian Republic of", "VE"),
    ("Bolivarian Republic of Venezuela", "VE"),
    ("British Virgin Islands", "VG"),
    ("Virgin Islands of the United States", "VI"),
    ("Viet Nam", "VN"),
    ("Socialist Republic of Viet Nam", "VN"),
    ("Republic of Vanuatu", "VU"),
    ("Independent State of Samoa", "WS"),
    ("Republic of Yemen", "YE"),
    ("Republic of South Africa", "ZA"),
    ("Republic of Zambia", "ZM"),
    ("Republic of Zimbabwe", "ZW"),
];
