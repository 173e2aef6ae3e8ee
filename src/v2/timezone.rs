/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::errors::SmarterUError;
use log::warn;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// A SmarterU timezone.
///
/// SmarterU accepts the provided name (an IANA style key) on requests and shows the
/// display value in its UI. Both sides come from a fixed table compiled into the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timezone {
    provided_name: &'static str,
    display_value: &'static str,
}

impl Timezone {
    /// Looks up the timezone with the given provided name
    pub fn from_provided_name(provided_name: &str) -> Result<Self, SmarterUError> {
        TABLE
            .forward
            .get_key_value(provided_name)
            .map(|(name, display)| Self {
                provided_name: *name,
                display_value: *display,
            })
            .ok_or_else(|| {
                SmarterUError::InvalidArgument(format!(
                    "\"{provided_name}\" is not a valid provided name"
                ))
            })
    }

    /// Looks up the timezone with the given display value
    pub fn from_display_value(display_value: &str) -> Result<Self, SmarterUError> {
        TABLE
            .reverse
            .get_key_value(display_value)
            .map(|(display, name)| Self {
                provided_name: *name,
                display_value: *display,
            })
            .ok_or_else(|| {
                SmarterUError::InvalidArgument(format!(
                    "\"{display_value}\" is not a valid display value"
                ))
            })
    }

    pub fn display_value_from_provided_name(
        provided_name: &str,
    ) -> Result<&'static str, SmarterUError> {
        Self::from_provided_name(provided_name).map(|tz| tz.display_value)
    }

    pub fn provided_name_from_display_value(
        display_value: &str,
    ) -> Result<&'static str, SmarterUError> {
        Self::from_display_value(display_value).map(|tz| tz.provided_name)
    }

    pub fn provided_name(&self) -> &'static str {
        self.provided_name
    }

    pub fn display_value(&self) -> &'static str {
        self.display_value
    }

    /// Every (provided name, display value) pair known to the crate, in table order
    pub fn all() -> impl Iterator<Item = Self> {
        TIMEZONES.iter().map(|&(provided_name, display_value)| Self {
            provided_name,
            display_value,
        })
    }

    /// Provided names that cannot be reached through a display value lookup because a
    /// later table entry shares their display value.
    pub fn display_value_collisions() -> &'static [&'static str] {
        &TABLE.collisions
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_value)
    }
}

// Serialized as the provided name, which is what SmarterU accepts
impl Serialize for Timezone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.provided_name)
    }
}

impl<'de> Deserialize<'de> for Timezone {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s: String = Deserialize::deserialize(deserializer)?;
        Timezone::from_provided_name(&s).map_err(serde::de::Error::custom)
    }
}

struct TimezoneTable {
    forward: HashMap<&'static str, &'static str>,
    reverse: HashMap<&'static str, &'static str>,
    collisions: Vec<&'static str>,
}

static TABLE: LazyLock<TimezoneTable> = LazyLock::new(|| {
    let forward: HashMap<_, _> = TIMEZONES.iter().copied().collect();
    let mut reverse = HashMap::with_capacity(TIMEZONES.len());
    let mut collisions = Vec::new();
    for (name, display) in TIMEZONES.iter().copied() {
        // Later entries win, the shadowed provided name is only reachable forwards
        if let Some(shadowed) = reverse.insert(display, name) {
            warn!("Timezone display value \"{display}\" is shared by {shadowed} and {name}");
            collisions.push(shadowed);
        }
    }
    TimezoneTable {
        forward,
        reverse,
        collisions,
    }
});


// (provided name, display value)
static TIMEZONES: &[(&str, &str)] = &[
    ("Pacific/Midway", "(GMT-11:00) Midway Island, Samoa"),
    ("Pacific/Pago_Pago", "(GMT-11:00) Pago Pago"),
    ("Pacific/Niue", "(GMT-11:00) Niue"),
    ("Pacific/Honolulu", "(GMT-10:00) Hawaii"),
    ("Pacific/Rarotonga", "(GMT-10:00) Rarotonga"),
    ("Pacific/Tahiti", "(GMT-10:00) Tahiti"),
    ("Pacific/Marquesas", "(GMT-09:30) Marquesas Islands"),
    ("America/Adak", "(GMT-10:00) Aleutian Islands"),
    ("America/Anchorage", "(GMT-09:00) Alaska"),
    ("America/Juneau", "(GMT-09:00) Juneau"),
    ("America/Nome", "(GMT-09:00) Nome"),
    ("America/Sitka", "(GMT-09:00) Sitka"),
    ("America/Yakutat", "(GMT-09:00) Yakutat"),
    ("Pacific/Gambier", "(GMT-09:00) Gambier Islands"),
    ("America/Los_Angeles", "(GMT-08:00) Pacific Time (US & Canada)"),
    ("America/Tijuana", "(GMT-08:00) Tijuana, Baja California"),
    ("America/Vancouver", "(GMT-08:00) Vancouver"),
    ("Pacific/Pitcairn", "(GMT-08:00) Pitcairn Islands"),
    ("America/Denver", "(GMT-07:00) Mountain Time (US & Canada)"),
    ("America/Phoenix", "(GMT-07:00) Arizona"),
    ("America/Boise", "(GMT-07:00) Boise"),
    ("America/Edmonton", "(GMT-07:00) Edmonton"),
    ("America/Whitehorse", "(GMT-07:00) Whitehorse"),
    ("America/Dawson_Creek", "(GMT-07:00) Dawson Creek"),
    ("America/Hermosillo", "(GMT-07:00) Hermosillo"),
    ("America/Mazatlan", "(GMT-07:00) Chihuahua, La Paz, Mazatlan"),
    ("America/Chicago", "(GMT-06:00) Central Time (US & Canada)"),
    ("America/Winnipeg", "(GMT-06:00) Winnipeg"),
    ("America/Regina", "(GMT-06:00) Saskatchewan"),
    ("America/Mexico_City", "(GMT-06:00) Guadalajara, Mexico City, Monterrey"),
    ("America/Merida", "(GMT-06:00) Merida"),
    ("America/Guatemala", "(GMT-06:00) Central America"),
    ("America/Belize", "(GMT-06:00) Belize"),
    ("America/Costa_Rica", "(GMT-06:00) Costa Rica"),
    ("America/El_Salvador", "(GMT-06:00) El Salvador"),
    ("America/Managua", "(GMT-06:00) Managua"),
    ("America/Tegucigalpa", "(GMT-06:00) Tegucigalpa"),
    ("Pacific/Galapagos", "(GMT-06:00) Galapagos"),
    ("America/New_York", "(GMT-05:00) Eastern Time (US & Canada)"),
    ("America/Detroit", "(GMT-05:00) Detroit"),
    ("America/Indiana/Indianapolis", "(GMT-05:00) Indiana (East)"),
    ("America/Kentucky/Louisville", "(GMT-05:00) Louisville"),
    ("America/Toronto", "(GMT-05:00) Toronto"),
    ("America/Nassau", "(GMT-05:00) Nassau"),
    ("America/Havana", "(GMT-05:00) Havana"),
    ("America/Jamaica", "(GMT-05:00) Kingston, Jamaica"),
    ("America/Panama", "(GMT-05:00) Panama"),
    ("America/Cancun", "(GMT-05:00) Cancun"),
    ("America/Bogota", "(GMT-05:00) Bogota"),
    ("America/Lima", "(GMT-05:00) Lima, Quito"),
    ("America/Guayaquil", "(GMT-05:00) Guayaquil"),
    ("America/Port-au-Prince", "(GMT-05:00) Port-au-Prince"),
    ("America/Cayman", "(GMT-05:00) Cayman Islands"),
    ("America/Halifax", "(GMT-04:00) Atlantic Time (Canada)"),
    ("America/Moncton", "(GMT-04:00) Moncton"),
    ("America/Glace_Bay", "(GMT-04:00) Glace Bay"),
    ("America/Goose_Bay", "(GMT-04:00) Goose Bay"),
    ("Atlantic/Bermuda", "(GMT-04:00) Bermuda"),
    ("America/Thule", "(GMT-04:00) Thule"),
    ("America/Caracas", "(GMT-04:00) Caracas"),
    ("America/La_Paz", "(GMT-04:00) La Paz"),
    ("America/Manaus", "(GMT-04:00) Manaus"),
    ("America/Cuiaba", "(GMT-04:00) Cuiaba"),
    ("America/Porto_Velho", "(GMT-04:00) Porto Velho"),
    ("America/Boa_Vista", "(GMT-04:00) Boa Vista"),
    ("America/Santiago", "(GMT-04:00) Santiago"),
    ("America/Asuncion", "(GMT-04:00) Asuncion"),
    ("America/Santo_Domingo", "(GMT-04:00) Santo Domingo"),
    ("America/Puerto_Rico", "(GMT-04:00) Puerto Rico"),
    ("America/Barbados", "(GMT-04:00) Barbados"),
    ("America/Martinique", "(GMT-04:00) Martinique"),
    ("America/Port_of_Spain", "(GMT-04:00) Port of Spain"),
    ("America/Curacao", "(GMT-04:00) Curacao"),
    ("America/Guyana", "(GMT-04:00) Georgetown"),
    ("America/Antigua", "(GMT-04:00) Antigua"),
    ("America/St_Johns", "(GMT-03:30) Newfoundland"),
    ("America/Sao_Paulo", "(GMT-03:00) Brasilia"),
    ("America/Argentina/Buenos_Aires", "(GMT-03:00) Buenos Aires"),
    ("America/Argentina/Cordoba", "(GMT-03:00) Cordoba"),
    ("America/Argentina/Mendoza", "(GMT-03:00) Mendoza"),
    ("America/Argentina/Ushuaia", "(GMT-03:00) Ushuaia"),
    ("America/Montevideo", "(GMT-03:00) Montevideo"),
    ("America/Cayenne", "(GMT-03:00) Cayenne"),
    ("America/Paramaribo", "(GMT-03:00) Paramaribo"),
    ("America/Fortaleza", "(GMT-03:00) Fortaleza"),
    ("America/Recife", "(GMT-03:00) Recife"),
    ("America/Belem", "(GMT-03:00) Belem"),
    ("America/Bahia", "(GMT-03:00) Salvador"),
    ("America/Maceio", "(GMT-03:00) Maceio"),
    ("America/Araguaina", "(GMT-03:00) Araguaina"),
    ("America/Punta_Arenas", "(GMT-03:00) Punta Arenas"),
    ("America/Nuuk", "(GMT-03:00) Greenland"),
    ("America/Miquelon", "(GMT-03:00) Saint Pierre and Miquelon"),
    ("Atlantic/Stanley", "(GMT-03:00) Stanley"),
    ("America/Noronha", "(GMT-02:00) Fernando de Noronha"),
    ("Atlantic/South_Georgia", "(GMT-02:00) South Georgia"),
    ("Atlantic/Azores", "(GMT-01:00) Azores"),
    ("Atlantic/Cape_Verde", "(GMT-01:00) Cape Verde Is."),
    ("America/Scoresbysund", "(GMT-01:00) Ittoqqortoormiit"),
    ("UTC", "(GMT+00:00) Coordinated Universal Time"),
    ("Europe/London", "(GMT+00:00) London, Edinburgh"),
    ("Europe/Dublin", "(GMT+00:00) Dublin"),
    ("Europe/Lisbon", "(GMT+00:00) Lisbon"),
    ("Atlantic/Canary", "(GMT+00:00) Canary Islands"),
    ("Atlantic/Madeira", "(GMT+00:00) Madeira"),
    ("Atlantic/Faroe", "(GMT+00:00) Faroe Islands"),
    ("Atlantic/Reykjavik", "(GMT+00:00) Reykjavik"),
    ("Africa/Casablanca", "(GMT+00:00) Casablanca"),
    ("Africa/Abidjan", "(GMT+00:00) Abidjan"),
    ("Africa/Accra", "(GMT+00:00) Accra"),
    ("Africa/Dakar", "(GMT+00:00) Dakar"),
    ("Africa/Monrovia", "(GMT+00:00) Monrovia"),
    ("Africa/Bamako", "(GMT+00:00) Bamako"),
    ("Africa/Bissau", "(GMT+00:00) Bissau"),
    ("Europe/Guernsey", "(GMT+00:00) Guernsey"),
    ("Europe/Isle_of_Man", "(GMT+00:00) Isle of Man"),
    ("Europe/Jersey", "(GMT+00:00) Jersey"),
    ("Europe/Paris", "(GMT+01:00) Paris"),
    ("Europe/Berlin", "(GMT+01:00) Berlin"),
    ("Europe/Amsterdam", "(GMT+01:00) Amsterdam"),
    ("Europe/Brussels", "(GMT+01:00) Brussels"),
    ("Europe/Madrid", "(GMT+01:00) Madrid"),
    ("Europe/Rome", "(GMT+01:00) Rome"),
    ("Europe/Vienna", "(GMT+01:00) Vienna"),
    ("Europe/Zurich", "(GMT+01:00) Zurich"),
    ("Europe/Stockholm", "(GMT+01:00) Stockholm"),
    ("Europe/Oslo", "(GMT+01:00) Oslo"),
    ("Europe/Copenhagen", "(GMT+01:00) Copenhagen"),
    ("Europe/Prague", "(GMT+01:00) Prague"),
    ("Europe/Bratislava", "(GMT+01:00) Bratislava"),
    ("Europe/Budapest", "(GMT+01:00) Budapest"),
    ("Europe/Warsaw", "(GMT+01:00) Warsaw"),
    ("Europe/Belgrade", "(GMT+01:00) Belgrade"),
    ("Europe/Ljubljana", "(GMT+01:00) Ljubljana"),
    ("Europe/Zagreb", "(GMT+01:00) Zagreb"),
    ("Europe/Sarajevo", "(GMT+01:00) Sarajevo"),
    ("Europe/Skopje", "(GMT+01:00) Skopje"),
    ("Europe/Podgorica", "(GMT+01:00) Podgorica"),
    ("Europe/Tirane", "(GMT+01:00) Tirane"),
    ("Europe/Luxembourg", "(GMT+01:00) Luxembourg"),
    ("Europe/Monaco", "(GMT+01:00) Monaco"),
    ("Europe/Malta", "(GMT+01:00) Malta"),
    ("Europe/Andorra", "(GMT+01:00) Andorra"),
    ("Europe/Gibraltar", "(GMT+01:00) Gibraltar"),
    ("Europe/Vaduz", "(GMT+01:00) Vaduz"),
    ("Europe/San_Marino", "(GMT+01:00) San Marino"),
    ("Europe/Vatican", "(GMT+01:00) Vatican City"),
    ("Africa/Lagos", "(GMT+01:00) West Central Africa"),
    ("Africa/Algiers", "(GMT+01:00) Algiers"),
    ("Africa/Tunis", "(GMT+01:00) Tunis"),
    ("Africa/Kinshasa", "(GMT+01:00) Kinshasa"),
    ("Africa/Luanda", "(GMT+01:00) Luanda"),
    ("Africa/Douala", "(GMT+01:00) Douala"),
    ("Africa/Ndjamena", "(GMT+01:00) Ndjamena"),
    ("Africa/Niamey", "(GMT+01:00) Niamey"),
    ("Africa/Windhoek", "(GMT+01:00) Windhoek"),
    ("Europe/Athens", "(GMT+02:00) Athens"),
    ("Europe/Bucharest", "(GMT+02:00) Bucharest"),
    ("Europe/Helsinki", "(GMT+02:00) Helsinki"),
    ("Europe/Kyiv", "(GMT+02:00) Kyiv"),
    ("Europe/Riga", "(GMT+02:00) Riga"),
    ("Europe/Sofia", "(GMT+02:00) Sofia"),
    ("Europe/Tallinn", "(GMT+02:00) Tallinn"),
    ("Europe/Vilnius", "(GMT+02:00) Vilnius"),
    ("Europe/Chisinau", "(GMT+02:00) Chisinau"),
    ("Europe/Kaliningrad", "(GMT+02:00) Kaliningrad"),
    ("Europe/Mariehamn", "(GMT+02:00) Mariehamn"),
    ("Asia/Beirut", "(GMT+02:00) Beirut"),
    ("Asia/Jerusalem", "(GMT+02:00) Jerusalem"),
    ("Asia/Nicosia", "(GMT+02:00) Nicosia"),
    ("Asia/Gaza", "(GMT+02:00) Gaza"),
    ("Africa/Cairo", "(GMT+02:00) Cairo"),
    ("Africa/Johannesburg", "(GMT+02:00) Harare, Pretoria"),
    ("Africa/Maputo", "(GMT+02:00) Maputo"),
    ("Africa/Lusaka", "(GMT+02:00) Lusaka"),
    ("Africa/Gaborone", "(GMT+02:00) Gaborone"),
    ("Africa/Blantyre", "(GMT+02:00) Blantyre"),
    ("Africa/Kigali", "(GMT+02:00) Kigali"),
    ("Africa/Bujumbura", "(GMT+02:00) Bujumbura"),
    ("Africa/Tripoli", "(GMT+02:00) Tripoli"),
    ("Africa/Khartoum", "(GMT+02:00) Khartoum"),
    ("Africa/Juba", "(GMT+02:00) Juba"),
    ("Africa/Maseru", "(GMT+02:00) Maseru"),
    ("Africa/Mbabane", "(GMT+02:00) Mbabane"),
    ("Europe/Istanbul", "(GMT+03:00) Istanbul"),
    ("Europe/Moscow", "(GMT+03:00) Moscow, St. Petersburg, Volgograd"),
    ("Europe/Minsk", "(GMT+03:00) Minsk"),
    ("Europe/Simferopol", "(GMT+03:00) Simferopol"),
    ("Europe/Kirov", "(GMT+03:00) Kirov"),
    ("Asia/Baghdad", "(GMT+03:00) Baghdad"),
    ("Asia/Kuwait", "(GMT+03:00) Kuwait, Riyadh"),
    ("Asia/Riyadh", "(GMT+03:00) Riyadh"),
    ("Asia/Qatar", "(GMT+03:00) Qatar"),
    ("Asia/Bahrain", "(GMT+03:00) Bahrain"),
    ("Asia/Aden", "(GMT+03:00) Aden"),
    ("Asia/Amman", "(GMT+03:00) Amman"),
    ("Asia/Damascus", "(GMT+03:00) Damascus"),
    ("Africa/Nairobi", "(GMT+03:00) Nairobi"),
    ("Africa/Addis_Ababa", "(GMT+03:00) Addis Ababa"),
    ("Africa/Dar_es_Salaam", "(GMT+03:00) Dar es Salaam"),
    ("Africa/Kampala", "(GMT+03:00) Kampala"),
    ("Africa/Mogadishu", "(GMT+03:00) Mogadishu"),
    ("Africa/Djibouti", "(GMT+03:00) Djibouti"),
    ("Africa/Asmara", "(GMT+03:00) Asmara"),
    ("Indian/Antananarivo", "(GMT+03:00) Antananarivo"),
    ("Indian/Comoro", "(GMT+03:00) Comoro"),
    ("Indian/Mayotte", "(GMT+03:00) Mayotte"),
    ("Asia/Tehran", "(GMT+03:30) Tehran"),
    ("Asia/Dubai", "(GMT+04:00) Abu Dhabi, Muscat"),
    ("Asia/Muscat", "(GMT+04:00) Muscat"),
    ("Asia/Baku", "(GMT+04:00) Baku"),
    ("Asia/Tbilisi", "(GMT+04:00) Tbilisi"),
    ("Asia/Yerevan", "(GMT+04:00) Yerevan"),
    ("Europe/Samara", "(GMT+04:00) Samara"),
    ("Europe/Astrakhan", "(GMT+04:00) Astrakhan"),
    ("Europe/Saratov", "(GMT+04:00) Saratov"),
    ("Europe/Ulyanovsk", "(GMT+04:00) Ulyanovsk"),
    ("Indian/Mauritius", "(GMT+04:00) Port Louis"),
    ("Indian/Reunion", "(GMT+04:00) Reunion"),
    ("Indian/Mahe", "(GMT+04:00) Mahe"),
    ("Asia/Kabul", "(GMT+04:30) Kabul"),
    ("Asia/Karachi", "(GMT+05:00) Islamabad, Karachi"),
    ("Asia/Tashkent", "(GMT+05:00) Tashkent"),
    ("Asia/Samarkand", "(GMT+05:00) Samarkand"),
    ("Asia/Yekaterinburg", "(GMT+05:00) Ekaterinburg"),
    ("Asia/Dushanbe", "(GMT+05:00) Dushanbe"),
    ("Asia/Ashgabat", "(GMT+05:00) Ashgabat"),
    ("Asia/Aqtobe", "(GMT+05:00) Aqtobe"),
    ("Asia/Aqtau", "(GMT+05:00) Aqtau"),
    ("Asia/Atyrau", "(GMT+05:00) Atyrau"),
    ("Asia/Oral", "(GMT+05:00) Oral"),
    ("Asia/Qyzylorda", "(GMT+05:00) Qyzylorda"),
    ("Indian/Maldives", "(GMT+05:00) Maldives"),
    ("Indian/Kerguelen", "(GMT+05:00) Kerguelen"),
    ("Asia/Kolkata", "(GMT+05:30) Chennai, Kolkata, Mumbai, New Delhi"),
    ("Asia/Colombo", "(GMT+05:30) Sri Jayawardenepura"),
    ("Asia/Kathmandu", "(GMT+05:45) Kathmandu"),
    ("Asia/Almaty", "(GMT+06:00) Almaty"),
    ("Asia/Dhaka", "(GMT+06:00) Astana, Dhaka"),
    ("Asia/Thimphu", "(GMT+06:00) Thimphu"),
    ("Asia/Bishkek", "(GMT+06:00) Bishkek"),
    ("Asia/Omsk", "(GMT+06:00) Omsk"),
    ("Asia/Urumqi", "(GMT+06:00) Urumqi"),
    ("Indian/Chagos", "(GMT+06:00) Chagos"),
    ("Asia/Yangon", "(GMT+06:30) Yangon (Rangoon)"),
    ("Indian/Cocos", "(GMT+06:30) Cocos Islands"),
    ("Asia/Bangkok", "(GMT+07:00) Bangkok, Hanoi"),
    ("Asia/Ho_Chi_Minh", "(GMT+07:00) Ho Chi Minh City"),
    ("Asia/Jakarta", "(GMT+07:00) Jakarta"),
    ("Asia/Pontianak", "(GMT+07:00) Pontianak"),
    ("Asia/Phnom_Penh", "(GMT+07:00) Phnom Penh"),
    ("Asia/Vientiane", "(GMT+07:00) Vientiane"),
    ("Asia/Krasnoyarsk", "(GMT+07:00) Krasnoyarsk"),
    ("Asia/Novosibirsk", "(GMT+07:00) Novosibirsk"),
    ("Asia/Novokuznetsk", "(GMT+07:00) Novokuznetsk"),
    ("Asia/Barnaul", "(GMT+07:00) Barnaul"),
    ("Asia/Tomsk", "(GMT+07:00) Tomsk"),
    ("Asia/Hovd", "(GMT+07:00) Hovd"),
    ("Indian/Christmas", "(GMT+07:00) Christmas Island"),
    ("Asia/Shanghai", "(GMT+08:00) Beijing, Chongqing, Hong Kong, Urumqi"),
    ("Asia/Hong_Kong", "(GMT+08:00) Hong Kong"),
    ("Asia/Macau", "(GMT+08:00) Macau"),
    ("Asia/Taipei", "(GMT+08:00) Taipei"),
    ("Asia/Singapore", "(GMT+08:00) Kuala Lumpur, Singapore"),
    ("Asia/Kuala_Lumpur", "(GMT+08:00) Kuala Lumpur"),
    ("Asia/Kuching", "(GMT+08:00) Kuching"),
    ("Asia/Manila", "(GMT+08:00) Manila"),
    ("Asia/Makassar", "(GMT+08:00) Makassar"),
    ("Asia/Brunei", "(GMT+08:00) Brunei"),
    ("Asia/Irkutsk", "(GMT+08:00) Irkutsk, Ulaan Bataar"),
    ("Asia/Ulaanbaatar", "(GMT+08:00) Ulaanbaatar"),
    ("Asia/Choibalsan", "(GMT+08:00) Choibalsan"),
    ("Australia/Perth", "(GMT+08:00) Perth"),
    ("Australia/Eucla", "(GMT+08:45) Eucla"),
    ("Asia/Tokyo", "(GMT+09:00) Osaka, Sapporo, Tokyo"),
    ("Asia/Seoul", "(GMT+09:00) Seoul"),
    ("Asia/Pyongyang", "(GMT+09:00) Pyongyang"),
    ("Asia/Yakutsk", "(GMT+09:00) Yakutsk"),
    ("Asia/Chita", "(GMT+09:00) Chita"),
    ("Asia/Khandyga", "(GMT+09:00) Khandyga"),
    ("Asia/Jayapura", "(GMT+09:00) Jayapura"),
    ("Asia/Dili", "(GMT+09:00) Dili"),
    ("Pacific/Palau", "(GMT+09:00) Palau"),
    ("Australia/Adelaide", "(GMT+09:30) Adelaide"),
    ("Australia/Darwin", "(GMT+09:30) Darwin"),
    ("Australia/Broken_Hill", "(GMT+09:30) Broken Hill"),
    ("Australia/Brisbane", "(GMT+10:00) Brisbane"),
    ("Australia/Sydney", "(GMT+10:00) Canberra, Melbourne, Sydney"),
    ("Australia/Melbourne", "(GMT+10:00) Melbourne"),
    ("Australia/Hobart", "(GMT+10:00) Hobart"),
    ("Australia/Lindeman", "(GMT+10:00) Lindeman"),
    ("Asia/Vladivostok", "(GMT+10:00) Vladivostok"),
    ("Asia/Ust-Nera", "(GMT+10:00) Ust-Nera"),
    ("Pacific/Guam", "(GMT+10:00) Guam, Port Moresby"),
    ("Pacific/Port_Moresby", "(GMT+10:00) Port Moresby"),
    ("Pacific/Saipan", "(GMT+10:00) Saipan"),
    ("Pacific/Chuuk", "(GMT+10:00) Chuuk"),
    ("Australia/Lord_Howe", "(GMT+10:30) Lord Howe Island"),
    ("Asia/Magadan", "(GMT+11:00) Magadan"),
    ("Asia/Sakhalin", "(GMT+11:00) Sakhalin"),
    ("Asia/Srednekolymsk", "(GMT+11:00) Srednekolymsk"),
    ("Pacific/Guadalcanal", "(GMT+11:00) Solomon Is."),
    ("Pacific/Noumea", "(GMT+11:00) New Caledonia"),
    ("Pacific/Efate", "(GMT+11:00) Efate"),
    ("Pacific/Bougainville", "(GMT+11:00) Bougainville"),
    ("Pacific/Kosrae", "(GMT+11:00) Kosrae"),
    ("Pacific/Pohnpei", "(GMT+11:00) Pohnpei"),
    ("Pacific/Norfolk", "(GMT+11:00) Norfolk Island"),
    ("Pacific/Auckland", "(GMT+12:00) Auckland, Wellington"),
    ("Pacific/Fiji", "(GMT+12:00) Fiji"),
    ("Pacific/Tarawa", "(GMT+12:00) Tarawa"),
    ("Pacific/Majuro", "(GMT+12:00) Marshall Is."),
    ("Pacific/Kwajalein", "(GMT+12:00) Kwajalein"),
    ("Pacific/Nauru", "(GMT+12:00) Nauru"),
    ("Pacific/Funafuti", "(GMT+12:00) Funafuti"),
    ("Pacific/Wake", "(GMT+12:00) Wake Island"),
    ("Pacific/Wallis", "(GMT+12:00) Wallis and Futuna"),
    ("Asia/Kamchatka", "(GMT+12:00) Kamchatka"),
    ("Asia/Anadyr", "(GMT+12:00) Anadyr"),
    ("Pacific/Chatham", "(GMT+12:45) Chatham Islands"),
    ("Pacific/Tongatapu", "(GMT+13:00) Nuku'alofa"),
    ("Pacific/Apia", "(GMT+13:00) Apia"),
    ("Pacific/Fakaofo", "(GMT+13:00) Fakaofo"),
    ("Pacific/Kanton", "(GMT+13:00) Phoenix Islands"),
    ("Pacific/Kiritimati", "(GMT+14:00) Line Islands"),
];
