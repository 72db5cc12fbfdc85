//! Parser für Build-Zeit-Einstellungen
//!
//! Die Firmware bekommt ihre Loop-Einstellungen als Strings aus
//! `option_env!` und wertet sie in `const` Kontexten aus. Alles hier ist
//! deshalb `const fn`.

/// Millisekunden als Dezimalzahl, z.B. `"200"`
///
/// `None` bei leerem String, Nicht-Ziffern, Überlauf oder `0`.
///
/// ```
/// # use lab_core::parse_millis;
/// assert_eq!(parse_millis("250"), Some(250));
/// assert_eq!(parse_millis("0"), None);
/// assert_eq!(parse_millis("2s"), None);
/// ```
pub const fn parse_millis(value: &str) -> Option<u64> {
    let bytes = value.as_bytes();
    if bytes.is_empty() {
        return None;
    }

    let mut result: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let digit = bytes[i];
        if !digit.is_ascii_digit() {
            return None;
        }
        result = match result.checked_mul(10) {
            Some(v) => match v.checked_add((digit - b'0') as u64) {
                Some(v) => v,
                None => return None,
            },
            None => return None,
        };
        i += 1;
    }

    if result == 0 { None } else { Some(result) }
}

/// ASCII-Vergleich ohne Groß-/Kleinschreibung
pub(crate) const fn eq_ignore_case(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i].to_ascii_lowercase() != b[i].to_ascii_lowercase() {
            return false;
        }
        i += 1;
    }
    true
}
