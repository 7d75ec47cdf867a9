//! Canonical county/city names for CWA forecast queries.
//!
//! The forecast API only answers for the official administrative names, so
//! user-supplied shorthand is mapped through a fixed alias table first.

/// Canonical name paired with the aliases it accepts. Matching is exact;
/// no case folding or trimming is applied.
const COUNTY_ALIASES: &[(&str, &[&str])] = &[
    ("臺北市", &["台北", "臺北", "台北市", "北市", "首都", "天龍國"]),
    ("新北市", &["新北", "新北市", "台北縣"]),
    ("桃園市", &["桃園", "桃園市", "桃縣"]),
    ("臺中市", &["台中", "臺中", "台中市"]),
    ("臺南市", &["台南", "臺南", "台南市"]),
    ("高雄市", &["高雄", "高雄市", "港都"]),
    ("基隆市", &["基隆", "基隆市"]),
    ("新竹市", &["新竹市", "竹市"]),
    ("新竹縣", &["新竹縣", "竹縣"]),
    ("苗栗縣", &["苗栗", "苗栗縣"]),
    ("彰化縣", &["彰化", "彰化縣"]),
    ("南投縣", &["南投", "南投縣", "中央山脈"]),
    ("雲林縣", &["雲林", "雲林縣"]),
    ("嘉義市", &["嘉義市", "嘉市"]),
    ("嘉義縣", &["嘉義縣", "嘉縣"]),
    ("屏東縣", &["屏東", "屏東縣"]),
    ("宜蘭縣", &["宜蘭", "宜蘭縣"]),
    ("花蓮縣", &["花蓮", "花蓮縣"]),
    ("臺東縣", &["台東", "臺東", "台東縣", "臺東縣"]),
    ("澎湖縣", &["澎湖", "澎湖縣", "澎湖群島"]),
    ("金門縣", &["金門", "金門縣"]),
    ("連江縣", &["連江", "連江縣", "馬祖"]),
];

/// Resolve a user-supplied place name to its canonical county/city name.
///
/// Unknown names pass through unchanged; the forecast lookup will then fail
/// downstream with its own "not available" message.
pub fn resolve_county(input: &str) -> &str {
    for (canonical, aliases) in COUNTY_ALIASES {
        if aliases.contains(&input) {
            return canonical;
        }
    }
    input
}
