//! Supported locale codes and their display names.
//!
//! A phrase file is only accepted when its file stem names one of the codes
//! listed here.

/// Every supported locale as `(code, display name)`, ordered by code.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("af_ZA", "Afrikaans"),
    ("am_ET", "አማርኛ"),
    ("ar_SA", "العربية"),
    ("az_AZ", "Azərbaycan"),
    ("be_BY", "Беларуская"),
    ("bg_BG", "Български"),
    ("bn_BD", "বাংলা"),
    ("bs_BA", "Bosanski"),
    ("ca_ES", "Català"),
    ("cs_CZ", "Čeština"),
    ("cy_GB", "Cymraeg"),
    ("da_DK", "Dansk"),
    ("de_DE", "Deutsch"),
    ("el_GR", "Ελληνικά"),
    ("en_GB", "English (UK)"),
    ("en_US", "English"),
    ("eo_UY", "Esperanto"),
    ("es_ES", "Español"),
    ("es_MX", "Español (México)"),
    ("et_EE", "Eesti"),
    ("eu_ES", "Euskara"),
    ("fa_IR", "فارسی"),
    ("fi_FI", "Suomi"),
    ("fil_PH", "Filipino"),
    ("fr_CA", "Français (Canada)"),
    ("fr_FR", "Français"),
    ("ga_IE", "Gaeilge"),
    ("gl_ES", "Galego"),
    ("gu_IN", "ગુજરાતી"),
    ("he_IL", "עברית"),
    ("hi_IN", "हिन्दी"),
    ("hr_HR", "Hrvatski"),
    ("hu_HU", "Magyar"),
    ("hy_AM", "Հայերեն"),
    ("id_ID", "Bahasa Indonesia"),
    ("is_IS", "Íslenska"),
    ("it_IT", "Italiano"),
    ("ja_JP", "日本語"),
    ("ka_GE", "ქართული"),
    ("kk_KZ", "Қазақ"),
    ("km_KH", "ខ្មែរ"),
    ("kn_IN", "ಕನ್ನಡ"),
    ("ko_KR", "한국어"),
    ("ky_KG", "Кыргызча"),
    ("lt_LT", "Lietuvių"),
    ("lv_LV", "Latviešu"),
    ("mk_MK", "Македонски"),
    ("ml_IN", "മലയാളം"),
    ("mn_MN", "Монгол"),
    ("mr_IN", "मराठी"),
    ("ms_MY", "Bahasa Melayu"),
    ("my_MM", "မြန်မာ"),
    ("nb_NO", "Norsk bokmål"),
    ("ne_NP", "नेपाली"),
    ("nl_NL", "Nederlands"),
    ("pa_IN", "ਪੰਜਾਬੀ"),
    ("pl_PL", "Polski"),
    ("pt_BR", "Português (Brasil)"),
    ("pt_PT", "Português"),
    ("ro_RO", "Română"),
    ("ru_RU", "Русский"),
    ("si_LK", "සිංහල"),
    ("sk_SK", "Slovenčina"),
    ("sl_SI", "Slovenščina"),
    ("sq_AL", "Shqip"),
    ("sr_RS", "Српски"),
    ("sv_SE", "Svenska"),
    ("sw_KE", "Kiswahili"),
    ("ta_IN", "தமிழ்"),
    ("te_IN", "తెలుగు"),
    ("th_TH", "ไทย"),
    ("tr_TR", "Türkçe"),
    ("uk_UA", "Українська"),
    ("ur_PK", "اردو"),
    ("uz_UZ", "Oʻzbek"),
    ("vi_VN", "Tiếng Việt"),
    ("zh_CN", "简体中文"),
    ("zh_TW", "繁體中文"),
    ("zu_ZA", "isiZulu"),
];

/// Returns the display name of a supported locale code.
///
/// # Examples
///
/// ```
/// use plate::languages::display_name;
///
/// assert_eq!(display_name("it_IT"), Some("Italiano"));
/// assert_eq!(display_name("zz_ZZ"), None);
/// ```
pub fn display_name(code: &str) -> Option<&'static str> {
    LANGUAGES
        .binary_search_by(|(candidate, _)| candidate.cmp(&code))
        .ok()
        .map(|index| LANGUAGES[index].1)
}

pub fn is_supported(code: &str) -> bool {
    display_name(code).is_some()
}

/// Iterates over every supported `(code, display name)` pair.
pub fn all() -> impl Iterator<Item = (&'static str, &'static str)> {
    LANGUAGES.iter().copied()
}
